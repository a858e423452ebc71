//! Scrolling.

use crate::canvas::Canvas;
use crate::context::Context;
use crate::element::{CursorTrackable, DropTarget, Drawable, Element, Limits};
use crate::events::{CursorTracking, DropInfo};
use crate::impl_element;
use crate::rect::Rect;
use cgmath::Point2;
use parking_lot::Mutex;

/// Something that can scroll its content.
pub trait Scrollable {
    /// Scrolls so that `rect` (in window coordinates) becomes visible, as far as possible.
    ///
    /// Returns true if the scroll position changed.
    fn scroll_into_view(&self, rect: Rect) -> bool;
}

/// Used when there’s no scrollable ancestor.
struct NoScroll;

impl Scrollable for NoScroll {
    fn scroll_into_view(&self, _: Rect) -> bool {
        false
    }
}

static NO_SCROLL: NoScroll = NoScroll;

/// Returns the closest scrollable ancestor, or one that does nothing.
pub fn find<'a>(ctx: &'a Context<'a>) -> &'a dyn Scrollable {
    let mut current = Some(ctx);
    while let Some(ctx) = current {
        if let Some(scrollable) = ctx.scrollable() {
            return scrollable;
        }
        current = ctx.parent();
    }
    &NO_SCROLL
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct ScrollMetrics {
    /// Vertical scroll offset, `0..=content_height - viewport.height()`.
    offset: f64,
    /// Last known bounds of the port.
    viewport: Rect,
    content_height: f64,
}

impl ScrollMetrics {
    fn max_offset(&self) -> f64 {
        (self.content_height - self.viewport.height()).max(0.)
    }
}

/// Scroll state of a [`ScrollPort`]; this is what its subject sees as its scrollable ancestor.
#[derive(Debug)]
pub struct ScrollState {
    metrics: Mutex<ScrollMetrics>,
}

impl ScrollState {
    fn update(&self, viewport: Rect, content_height: f64) {
        let mut metrics = self.metrics.lock();
        metrics.viewport = viewport;
        metrics.content_height = content_height;
        metrics.offset = metrics.offset.min(metrics.max_offset());
    }

    pub fn offset(&self) -> f64 {
        self.metrics.lock().offset
    }

    pub fn set_offset(&self, offset: f64) {
        let mut metrics = self.metrics.lock();
        metrics.offset = offset.max(0.).min(metrics.max_offset());
    }
}

impl Scrollable for ScrollState {
    fn scroll_into_view(&self, rect: Rect) -> bool {
        let mut metrics = self.metrics.lock();
        let viewport = metrics.viewport;
        let mut offset = metrics.offset;

        if rect.bottom() > viewport.bottom() {
            offset += rect.bottom() - viewport.bottom();
        }
        if rect.top() < viewport.top() {
            offset -= viewport.top() - rect.top();
        }
        let offset = offset.max(0.).min(metrics.max_offset());

        if offset == metrics.offset {
            return false;
        }
        tracing::trace!(from = metrics.offset, to = offset, "scrolling into view");
        metrics.offset = offset;
        true
    }
}

/// A vertically scrolling viewport onto its subject.
///
/// The subject is laid out at its minimum height (or the port height, whichever is larger) and
/// shifted up by the scroll offset.
#[derive(Debug)]
pub struct ScrollPort<S> {
    subject: S,
    state: ScrollState,
}

impl<S: Element> ScrollPort<S> {
    pub fn new(subject: S) -> ScrollPort<S> {
        ScrollPort {
            subject,
            state: ScrollState {
                metrics: Mutex::new(ScrollMetrics {
                    offset: 0.,
                    viewport: Rect::zero(),
                    content_height: 0.,
                }),
            },
        }
    }

    pub fn state(&self) -> &ScrollState {
        &self.state
    }

    pub fn subject_ref(&self) -> &S {
        &self.subject
    }

    pub fn subject_mut(&mut self) -> &mut S {
        &mut self.subject
    }

    /// Bounds of the subject, also recording the viewport for later scroll requests.
    fn content_bounds(&self, ctx: &Context) -> Rect {
        let content_height = self.subject.limits(ctx).min.y.max(ctx.bounds.height());
        self.state.update(ctx.bounds, content_height);
        let top = ctx.bounds.top() - self.state.offset();
        Rect::from_ltrb(
            ctx.bounds.left(),
            top,
            ctx.bounds.right(),
            top + content_height,
        )
    }

    /// Runs `f` with the subject in its scrolled context, refreshing the port if the subject
    /// scrolled it.
    fn with_subject<R>(&mut self, ctx: &Context, f: impl FnOnce(&mut S, &Context) -> R) -> R {
        let bounds = self.content_bounds(ctx);
        let before = self.state.offset();
        let result = {
            let sctx = ctx.sub_scrollable(bounds, &self.state);
            f(&mut self.subject, &sctx)
        };
        if self.state.offset() != before {
            ctx.view.refresh(ctx.bounds);
        }
        result
    }
}

impl<S: Element> Drawable for ScrollPort<S> {
    fn limits(&self, ctx: &Context) -> Limits {
        let subject = self.subject.limits(ctx);
        Limits {
            min: cgmath::Vector2::new(subject.min.x, 0.),
            ..subject
        }
    }

    fn draw(&mut self, ctx: &Context, canvas: &mut dyn Canvas) {
        self.with_subject(ctx, |subject, sctx| subject.draw(sctx, canvas))
    }
}

impl<S: Element> CursorTrackable for ScrollPort<S> {
    fn cursor(&mut self, ctx: &Context, p: Point2<f64>, status: CursorTracking) -> bool {
        self.with_subject(ctx, |subject, sctx| subject.cursor(sctx, p, status))
    }
}

impl<S: Element> DropTarget for ScrollPort<S> {
    fn wants_control(&self) -> bool {
        self.subject.wants_control()
    }

    fn track_drop(&mut self, ctx: &Context, info: &DropInfo, status: CursorTracking) {
        self.with_subject(ctx, |subject, sctx| subject.track_drop(sctx, info, status))
    }

    fn drop(&mut self, ctx: &Context, info: &DropInfo) -> bool {
        self.with_subject(ctx, |subject, sctx| subject.drop(sctx, info))
    }
}

impl_element! {
    impl[S: Element] for ScrollPort<S>;
    fn subject(&self) -> Option<&dyn Element> {
        Some(&self.subject)
    }
    fn subject_bounds(&self, ctx: &Context) -> Rect {
        self.content_bounds(ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basic::Spacer;
    use crate::host::HostView;
    use crate::theme::Theme;
    use cgmath::Vector2;

    #[test]
    fn find_without_scrollable_is_noop() {
        let view = HostView::new();
        let theme = Theme::default();
        let ctx = Context::new(&view, &theme, Rect::from_ltrb(0., 0., 10., 10.));
        let child = ctx.sub(Rect::from_ltrb(0., 0., 5., 5.));
        assert!(!find(&child).scroll_into_view(Rect::from_ltrb(0., 100., 5., 120.)));
    }

    #[test]
    fn scroll_into_view_clamps_to_content() {
        let view = HostView::new();
        let theme = Theme::default();
        let ctx = Context::new(&view, &theme, Rect::from_ltrb(0., 0., 100., 100.));
        let port = ScrollPort::new(Spacer::new(Vector2::new(100., 300.)));
        let content = port.subject_bounds(&ctx);
        assert_eq!(content, Rect::from_ltrb(0., 0., 100., 300.));

        let sctx = ctx.sub_scrollable(content, port.state());
        let nested = sctx.sub(Rect::from_ltrb(0., 0., 100., 20.));

        // below the viewport
        assert!(find(&nested).scroll_into_view(Rect::from_ltrb(0., 130., 10., 170.)));
        assert_eq!(port.state().offset(), 70.);

        // already visible
        assert!(!find(&nested).scroll_into_view(Rect::from_ltrb(0., 10., 10., 20.)));

        // far past the end
        assert!(find(&nested).scroll_into_view(Rect::from_ltrb(0., 900., 10., 940.)));
        assert_eq!(port.state().offset(), 200.);

        // above the viewport
        assert!(find(&nested).scroll_into_view(Rect::from_ltrb(0., -50., 10., -10.)));
        assert_eq!(port.state().offset(), 150.);
    }
}
