//! Tooltips.
//!
//! A [`Tooltip`] wraps a subject and shows a tip element above it once the pointer has rested on
//! the subject for a while.
//!
//! Posted timers can’t be cancelled, so the show timer checks the tooltip state when it fires and
//! does nothing if the pointer left in the meantime. Each show request carries the epoch it was
//! posted in; leaving starts a new epoch, so a timer from an earlier visit can’t show the tip
//! during a later one. Only one show timer is outstanding at a time: if the pointer comes back
//! while a stale timer is still pending, that timer re-posts itself for the new visit when it fires.

use crate::canvas::Canvas;
use crate::context::Context;
use crate::element::{CursorTrackable, DropTarget, Drawable, Element, Limits};
use crate::events::{CursorTracking, DropInfo, HoverHandler};
use crate::impl_element;
use crate::rect::Rect;
use crate::view::View;
use cgmath::{Point2, Vector2};
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;

/// How long the pointer has to rest on the subject before the tip shows.
pub const DEFAULT_TOOLTIP_DELAY: Duration = Duration::from_millis(500);

/// Tooltip visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TipStatus {
    Hidden,
    /// A show timer is pending.
    Delayed,
    Visible,
}

#[derive(Debug)]
struct TipState {
    status: TipStatus,
    epoch: u64,
    /// A show timer has been posted and hasn't fired yet.
    timer_pending: bool,
    /// Subject and tip region of the current visit.
    region: Rect,
}

/// What the show timer needs once it fires.
#[derive(Debug, Clone)]
struct ShowTimer {
    state: Arc<Mutex<TipState>>,
    on_hover: HoverHandler,
    delay: Duration,
}

enum Fired {
    Show(Rect),
    Repost(u64),
    Stale,
}

impl ShowTimer {
    fn post(self, view: &dyn View, epoch: u64) {
        tracing::debug!(delay = ?self.delay, epoch, "tooltip delayed");
        let delay = self.delay;
        view.post(delay, Box::new(move |view: &dyn View| self.fire(view, epoch)));
    }

    fn fire(self, view: &dyn View, epoch: u64) {
        let fired = {
            let mut state = self.state.lock();
            state.timer_pending = false;
            if state.status != TipStatus::Delayed {
                Fired::Stale
            } else if state.epoch != epoch {
                // the pointer left and came back while this timer was pending
                state.timer_pending = true;
                Fired::Repost(state.epoch)
            } else {
                state.status = TipStatus::Visible;
                Fired::Show(state.region)
            }
        };

        match fired {
            Fired::Show(region) => {
                tracing::debug!(epoch, "tooltip visible");
                self.on_hover.call(true);
                view.refresh(region);
            }
            Fired::Repost(current) => self.post(view, current),
            Fired::Stale => tracing::trace!(epoch, "stale tooltip timer"),
        }
    }
}

/// Shows `tip` above `subject` after the pointer rests on the subject for `delay`.
#[derive(Debug)]
pub struct Tooltip<S, T> {
    subject: S,
    tip: T,
    delay: Duration,
    state: Arc<Mutex<TipState>>,
    on_hover: HoverHandler,
}

/// Creates a tooltip with the default delay.
pub fn tooltip<S: Element, T: Element>(subject: S, tip: T) -> Tooltip<S, T> {
    Tooltip::new(subject, tip, DEFAULT_TOOLTIP_DELAY)
}

impl<S: Element, T: Element> Tooltip<S, T> {
    pub fn new(subject: S, tip: T, delay: Duration) -> Tooltip<S, T> {
        Tooltip {
            subject,
            tip,
            delay,
            state: Arc::new(Mutex::new(TipState {
                status: TipStatus::Hidden,
                epoch: 0,
                timer_pending: false,
                region: Rect::zero(),
            })),
            on_hover: HoverHandler::noop(),
        }
    }

    /// Sets the handler that is called with `true` when the tip appears and `false` when the
    /// pointer leaves.
    pub fn on_hover<F: 'static + FnMut(bool) + Send>(mut self, handler: F) -> Self {
        self.on_hover = HoverHandler::new(handler);
        self
    }

    pub fn subject_ref(&self) -> &S {
        &self.subject
    }

    pub fn subject_mut(&mut self) -> &mut S {
        &mut self.subject
    }

    pub fn tip(&self) -> &T {
        &self.tip
    }

    pub fn tip_mut(&mut self) -> &mut T {
        &mut self.tip
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn status(&self) -> TipStatus {
        self.state.lock().status
    }

    /// Where the tip goes: at its minimum size, on top of the subject’s top left corner.
    pub fn tip_bounds(&self, ctx: &Context) -> Rect {
        let size = self.tip.limits(ctx).min;
        Rect::new(
            Point2::new(ctx.bounds.left(), ctx.bounds.top() - size.y),
            Vector2::new(size.x, size.y),
        )
    }

    /// Region covered by the subject and the tip.
    fn region(&self, ctx: &Context) -> Rect {
        ctx.bounds.union(self.tip_bounds(ctx))
    }

    fn schedule_show(&self, ctx: &Context) {
        let epoch = {
            let mut state = self.state.lock();
            if state.status != TipStatus::Hidden {
                // already delayed or showing; one timer per visit
                return;
            }
            state.status = TipStatus::Delayed;
            state.region = self.region(ctx);
            if state.timer_pending {
                tracing::trace!(epoch = state.epoch, "show timer already pending");
                return;
            }
            state.timer_pending = true;
            state.epoch
        };

        let timer = ShowTimer {
            state: Arc::clone(&self.state),
            on_hover: self.on_hover.clone(),
            delay: self.delay,
        };
        timer.post(ctx.view, epoch);
    }

    fn hide(&self, ctx: &Context) {
        {
            let mut state = self.state.lock();
            state.status = TipStatus::Hidden;
            state.epoch += 1;
        }
        tracing::debug!("tooltip hidden");
        self.on_hover.call(false);
        ctx.view.refresh(self.region(ctx));
    }
}

impl<S: Element, T: Element> Drawable for Tooltip<S, T> {
    fn limits(&self, ctx: &Context) -> Limits {
        self.subject.limits(ctx)
    }

    fn draw(&mut self, ctx: &Context, canvas: &mut dyn Canvas) {
        self.subject.draw(ctx, canvas);
        if self.status() == TipStatus::Visible {
            let bounds = self.tip_bounds(ctx);
            self.tip.draw(&ctx.sub(bounds), canvas);
        }
    }
}

impl<S: Element, T: Element> CursorTrackable for Tooltip<S, T> {
    fn hit_test(&self, ctx: &Context, p: Point2<f64>) -> bool {
        self.subject.hit_test(ctx, p)
    }

    fn cursor(&mut self, ctx: &Context, p: Point2<f64>, status: CursorTracking) -> bool {
        if status.is_leaving() {
            self.hide(ctx);
        } else {
            self.schedule_show(ctx);
        }
        self.subject.cursor(ctx, p, status)
    }
}

impl<S: Element, T: Element> DropTarget for Tooltip<S, T> {
    fn wants_control(&self) -> bool {
        self.subject.wants_control()
    }

    fn track_drop(&mut self, ctx: &Context, info: &DropInfo, status: CursorTracking) {
        self.subject.track_drop(ctx, info, status)
    }

    fn drop(&mut self, ctx: &Context, info: &DropInfo) -> bool {
        self.subject.drop(ctx, info)
    }
}

impl_element! {
    impl[S: Element, T: Element] for Tooltip<S, T>;
    fn subject(&self) -> Option<&dyn Element> {
        Some(&self.subject)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basic::{Panel, Spacer};
    use crate::canvas::{DisplayList, DrawCommand};
    use crate::host::HostView;
    use crate::theme::Theme;

    type TestTip = Tooltip<Spacer, Panel>;

    fn subject_bounds() -> Rect {
        Rect::from_ltrb(10., 50., 110., 70.)
    }

    fn make() -> (TestTip, Arc<Mutex<Vec<bool>>>) {
        let log = Arc::new(Mutex::new(Vec::new()));
        let log2 = Arc::clone(&log);
        let tip = Tooltip::new(
            Spacer::new(Vector2::new(100., 20.)),
            Panel::new(Vector2::new(40., 30.)),
            Duration::from_millis(500),
        )
        .on_hover(move |visible| log2.lock().push(visible));
        (tip, log)
    }

    fn cursor(tip: &mut TestTip, view: &HostView, status: CursorTracking) -> bool {
        let theme = Theme::default();
        let ctx = Context::new(view, &theme, subject_bounds());
        tip.cursor(&ctx, Point2::new(20., 60.), status)
    }

    #[test]
    fn shows_after_delay() {
        let mut view = HostView::new();
        let (mut tip, log) = make();

        cursor(&mut tip, &view, CursorTracking::Entering);
        assert_eq!(tip.status(), TipStatus::Delayed);
        assert!(view.take_refreshes().is_empty());

        assert_eq!(view.advance(Duration::from_millis(499)), 0);
        assert_eq!(tip.status(), TipStatus::Delayed);

        assert_eq!(view.advance(Duration::from_millis(1)), 1);
        assert_eq!(tip.status(), TipStatus::Visible);
        assert_eq!(*log.lock(), vec![true]);
        assert_eq!(
            view.take_refreshes(),
            vec![Rect::from_ltrb(10., 20., 110., 70.)],
            "refreshes subject and tip"
        );
    }

    #[test]
    fn hovering_posts_one_timer() {
        let mut view = HostView::new();
        let (mut tip, log) = make();

        cursor(&mut tip, &view, CursorTracking::Entering);
        for _ in 0..5 {
            cursor(&mut tip, &view, CursorTracking::Hovering);
        }
        assert_eq!(view.pending_timers(), 1);

        view.advance(Duration::from_secs(2));
        cursor(&mut tip, &view, CursorTracking::Hovering);
        view.advance(Duration::from_secs(2));
        assert_eq!(tip.status(), TipStatus::Visible);
        assert_eq!(*log.lock(), vec![true], "shown exactly once");
        assert_eq!(view.pending_timers(), 0);
    }

    #[test]
    fn leaving_cancels_pending_show() {
        let mut view = HostView::new();
        let (mut tip, log) = make();

        cursor(&mut tip, &view, CursorTracking::Entering);
        cursor(&mut tip, &view, CursorTracking::Leaving);
        assert_eq!(tip.status(), TipStatus::Hidden);
        assert_eq!(
            view.take_refreshes(),
            vec![Rect::from_ltrb(10., 20., 110., 70.)]
        );

        assert_eq!(view.advance(Duration::from_secs(1)), 1, "timer still fires");
        assert_eq!(tip.status(), TipStatus::Hidden);
        assert_eq!(*log.lock(), vec![false]);
        assert!(view.take_refreshes().is_empty());
    }

    #[test]
    fn stale_timer_does_not_cut_next_delay_short() {
        let mut view = HostView::new();
        let (mut tip, log) = make();

        cursor(&mut tip, &view, CursorTracking::Entering);
        view.advance(Duration::from_millis(300));
        cursor(&mut tip, &view, CursorTracking::Leaving);
        cursor(&mut tip, &view, CursorTracking::Entering);
        assert_eq!(view.pending_timers(), 1, "the pending timer is reused");

        // the first timer fires at 500ms and re-posts itself for the second visit
        assert_eq!(view.advance(Duration::from_millis(200)), 1);
        assert_eq!(tip.status(), TipStatus::Delayed);
        assert_eq!(view.pending_timers(), 1);

        view.advance(Duration::from_millis(300));
        assert_eq!(tip.status(), TipStatus::Delayed);

        assert_eq!(view.advance(Duration::from_millis(200)), 1);
        assert_eq!(tip.status(), TipStatus::Visible);
        assert_eq!(*log.lock(), vec![false, true]);
        assert_eq!(view.pending_timers(), 0);
    }

    #[test]
    fn repeated_visits_keep_one_timer() {
        let mut view = HostView::new();
        let (mut tip, log) = make();

        for _ in 0..4 {
            cursor(&mut tip, &view, CursorTracking::Entering);
            cursor(&mut tip, &view, CursorTracking::Leaving);
            assert_eq!(view.pending_timers(), 1);
        }
        view.advance(Duration::from_secs(2));
        assert_eq!(tip.status(), TipStatus::Hidden);
        assert_eq!(view.pending_timers(), 0);

        // nothing pending, so the next visit posts a fresh timer
        cursor(&mut tip, &view, CursorTracking::Entering);
        assert_eq!(view.pending_timers(), 1);
        view.advance(Duration::from_millis(500));
        assert_eq!(tip.status(), TipStatus::Visible);
        assert_eq!(*log.lock(), vec![false, false, false, false, true]);
    }

    #[test]
    fn cursor_result_comes_from_subject() {
        let view = HostView::new();
        let (mut tip, _) = make();

        assert!(!cursor(&mut tip, &view, CursorTracking::Entering), "spacers ignore the pointer");
        assert_eq!(tip.status(), TipStatus::Delayed);
        assert!(!cursor(&mut tip, &view, CursorTracking::Leaving));
        assert_eq!(tip.status(), TipStatus::Hidden);
    }

    #[test]
    fn draws_tip_only_when_visible() {
        let mut view = HostView::new();
        let theme = Theme::default();
        let (mut tip, _) = make();

        let draw = |tip: &mut TestTip, view: &HostView| {
            let ctx = Context::new(view, &theme, subject_bounds());
            let mut list = DisplayList::new();
            tip.draw(&ctx, &mut list);
            list
        };

        assert!(draw(&mut tip, &view).is_empty());
        cursor(&mut tip, &view, CursorTracking::Entering);
        assert!(draw(&mut tip, &view).is_empty());

        view.advance(DEFAULT_TOOLTIP_DELAY);
        let list = draw(&mut tip, &view);
        let tip_bounds = Rect::from_ltrb(10., 20., 50., 50.);
        assert!(list
            .commands()
            .contains(&DrawCommand::RoundRect(tip_bounds, theme.panel_corner_radius)));
    }
}
