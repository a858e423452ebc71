//! Drag and drop targets.
//!
//! All drop targets share a [`DropBase`], which decides whether a payload is interesting (by mime
//! type) and keeps track of whether a drag is currently over the target. On top of that,
//! [`DropBox`] accepts drops onto its whole area and [`DropInserter`] accepts drops between the
//! children of a composite further down its subject chain.

use crate::canvas::Canvas;
use crate::context::Context;
use crate::element::{find_composite, CursorTrackable, DropTarget, Drawable, Element, Limits};
use crate::error::Error;
use crate::events::{CursorTracking, DropInfo, MimeType};
use crate::impl_element;
use crate::rect::Rect;
use crate::scroll;
use cgmath::Point2;
use core::fmt;

/// Opacity of drop indicators, applied to the theme’s highlight color.
pub const INDICATOR_OPACITY: f64 = 0.5;

/// Stroke width of drop indicators.
pub const INDICATOR_LINE_WIDTH: f64 = 2.;

/// Half the size of the region around the drag location that is kept scrolled into view.
pub const SCROLL_MARGIN: f64 = 20.;

/// Mime type filtering and tracking state shared by all drop targets.
#[derive(Debug, Clone, PartialEq)]
pub struct DropBase {
    mime_types: Vec<MimeType>,
    is_tracking: bool,
}

impl DropBase {
    /// Creates a drop base accepting the given mime types.
    pub fn new<I, M>(mime_types: I) -> Result<DropBase, Error>
    where
        I: IntoIterator<Item = M>,
        M: AsRef<str>,
    {
        let mime_types = mime_types
            .into_iter()
            .map(|m| m.as_ref().parse())
            .collect::<Result<Vec<MimeType>, Error>>()?;
        Ok(DropBase {
            mime_types,
            is_tracking: false,
        })
    }

    pub fn mime_types(&self) -> &[MimeType] {
        &self.mime_types
    }

    /// Returns true if the payload has data for at least one accepted mime type.
    pub fn accepts(&self, info: &DropInfo) -> bool {
        self.mime_types.iter().any(|mime_type| info.has(mime_type))
    }

    /// Whether an acceptable drag is currently over the target.
    pub fn is_tracking(&self) -> bool {
        self.is_tracking
    }
}

impl DropTarget for DropBase {
    fn wants_control(&self) -> bool {
        true
    }

    fn track_drop(&mut self, ctx: &Context, info: &DropInfo, status: CursorTracking) {
        if !self.accepts(info) {
            return;
        }
        let is_tracking = !status.is_leaving();
        if is_tracking != self.is_tracking {
            tracing::debug!(is_tracking, "drop tracking changed");
            self.is_tracking = is_tracking;
            ctx.view.refresh(ctx.bounds);
        }
    }

    fn drop(&mut self, _: &Context, _: &DropInfo) -> bool {
        self.is_tracking = false;
        false
    }
}

fn stroke_indicator(ctx: &Context, canvas: &mut dyn Canvas) {
    canvas.stroke_style(ctx.theme.indicator_hilite_color.opacity(INDICATOR_OPACITY));
    canvas.line_width(INDICATOR_LINE_WIDTH);
    canvas.stroke();
}

type DropHandler = Box<dyn FnMut(&DropInfo) -> bool + Send>;
type InsertHandler = Box<dyn FnMut(&DropInfo, usize) -> bool + Send>;

/// Accepts drops anywhere on its subject and outlines itself while an acceptable drag is over it.
pub struct DropBox<S> {
    subject: S,
    base: DropBase,
    on_drop: DropHandler,
}

impl<S: Element> DropBox<S> {
    /// Creates a drop box. `on_drop` decides whether a drop is accepted.
    pub fn new<I, M, F>(subject: S, mime_types: I, on_drop: F) -> Result<DropBox<S>, Error>
    where
        I: IntoIterator<Item = M>,
        M: AsRef<str>,
        F: 'static + FnMut(&DropInfo) -> bool + Send,
    {
        Ok(DropBox {
            subject,
            base: DropBase::new(mime_types)?,
            on_drop: Box::new(on_drop),
        })
    }

    pub fn base(&self) -> &DropBase {
        &self.base
    }

    pub fn subject_ref(&self) -> &S {
        &self.subject
    }

    pub fn subject_mut(&mut self) -> &mut S {
        &mut self.subject
    }
}

impl<S: fmt::Debug> fmt::Debug for DropBox<S> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("DropBox")
            .field("subject", &self.subject)
            .field("base", &self.base)
            .finish()
    }
}

impl<S: Element> Drawable for DropBox<S> {
    fn limits(&self, ctx: &Context) -> Limits {
        self.subject.limits(ctx)
    }

    fn draw(&mut self, ctx: &Context, canvas: &mut dyn Canvas) {
        self.subject.draw(ctx, canvas);
        if self.base.is_tracking() {
            canvas.add_rect(ctx.bounds);
            stroke_indicator(ctx, canvas);
        }
    }
}

impl<S: Element> CursorTrackable for DropBox<S> {
    fn hit_test(&self, ctx: &Context, p: Point2<f64>) -> bool {
        self.subject.hit_test(ctx, p)
    }

    fn cursor(&mut self, ctx: &Context, p: Point2<f64>, status: CursorTracking) -> bool {
        self.subject.cursor(ctx, p, status)
    }
}

impl<S: Element> DropTarget for DropBox<S> {
    fn wants_control(&self) -> bool {
        self.base.wants_control()
    }

    fn track_drop(&mut self, ctx: &Context, info: &DropInfo, status: CursorTracking) {
        self.base.track_drop(ctx, info, status);
    }

    fn drop(&mut self, ctx: &Context, info: &DropInfo) -> bool {
        self.base.drop(ctx, info);
        let accepted = (self.on_drop)(info);
        tracing::debug!(accepted, "drop box");
        ctx.view.refresh(ctx.bounds);
        accepted
    }
}

impl_element! {
    impl[S: Element] for DropBox<S>;
    fn subject(&self) -> Option<&dyn Element> {
        Some(&self.subject)
    }
}

/// A computed insertion point between two children of a composite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InsertionPoint {
    /// Position between children; `0` is the head, the child count is the end.
    pub index: usize,

    /// Where to draw the indicator line.
    pub y: f64,
    pub left: f64,
    pub right: f64,
}

/// Accepts drops between the children of the closest composite in its subject chain, e.g. to
/// reorder a list.
///
/// The insertion point is worked out from the pointer location whenever the inserter is drawn
/// while a drag is over it, and consumed by the next drop.
pub struct DropInserter<S> {
    subject: S,
    base: DropBase,
    insertion_pos: Option<usize>,
    on_drop: InsertHandler,
}

impl<S: Element> DropInserter<S> {
    /// Creates a drop inserter. `on_drop` receives the insertion position and decides whether the
    /// drop is accepted.
    pub fn new<I, M, F>(subject: S, mime_types: I, on_drop: F) -> Result<DropInserter<S>, Error>
    where
        I: IntoIterator<Item = M>,
        M: AsRef<str>,
        F: 'static + FnMut(&DropInfo, usize) -> bool + Send,
    {
        Ok(DropInserter {
            subject,
            base: DropBase::new(mime_types)?,
            insertion_pos: None,
            on_drop: Box::new(on_drop),
        })
    }

    pub fn base(&self) -> &DropBase {
        &self.base
    }

    /// The insertion position found by the last draw, if any.
    pub fn insertion_pos(&self) -> Option<usize> {
        self.insertion_pos
    }

    pub fn subject_ref(&self) -> &S {
        &self.subject
    }

    pub fn subject_mut(&mut self) -> &mut S {
        &mut self.subject
    }

    /// Finds the insertion point for a pointer location without changing any state.
    ///
    /// The upper half of a child inserts before it, the lower half after it.
    pub fn insertion_point(&self, ctx: &Context, p: Point2<f64>) -> Option<InsertionPoint> {
        let (composite, bounds) = find_composite(&self.subject, ctx)?;
        let hit = composite.hit_element(&ctx.sub(bounds), p, false)?;
        let child = hit.bounds;
        let before = p.y < child.top() + child.height() / 2.;

        Some(InsertionPoint {
            index: if before { hit.index } else { hit.index + 1 },
            y: if before { child.top() } else { child.bottom() },
            left: child.left(),
            right: child.right(),
        })
    }
}

impl<S: fmt::Debug> fmt::Debug for DropInserter<S> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("DropInserter")
            .field("subject", &self.subject)
            .field("base", &self.base)
            .field("insertion_pos", &self.insertion_pos)
            .finish()
    }
}

impl<S: Element> Drawable for DropInserter<S> {
    fn limits(&self, ctx: &Context) -> Limits {
        self.subject.limits(ctx)
    }

    fn draw(&mut self, ctx: &Context, canvas: &mut dyn Canvas) {
        self.subject.draw(ctx, canvas);
        if !self.base.is_tracking() {
            return;
        }

        // no hit keeps the previous position
        if let Some(point) = self.insertion_point(ctx, ctx.cursor_pos()) {
            if self.insertion_pos != Some(point.index) {
                tracing::trace!(index = point.index, "insertion point");
            }
            self.insertion_pos = Some(point.index);

            canvas.move_to(Point2::new(point.left, point.y));
            canvas.line_to(Point2::new(point.right, point.y));
            stroke_indicator(ctx, canvas);
        }
    }
}

impl<S: Element> CursorTrackable for DropInserter<S> {
    fn hit_test(&self, ctx: &Context, p: Point2<f64>) -> bool {
        self.subject.hit_test(ctx, p)
    }

    fn cursor(&mut self, ctx: &Context, p: Point2<f64>, status: CursorTracking) -> bool {
        self.subject.cursor(ctx, p, status)
    }
}

impl<S: Element> DropTarget for DropInserter<S> {
    fn wants_control(&self) -> bool {
        self.base.wants_control()
    }

    fn track_drop(&mut self, ctx: &Context, info: &DropInfo, status: CursorTracking) {
        self.base.track_drop(ctx, info, status);
        if self.base.is_tracking() {
            scroll::find(ctx).scroll_into_view(Rect::around(info.location, SCROLL_MARGIN));
            ctx.view.refresh(ctx.bounds);
        }
    }

    fn drop(&mut self, ctx: &Context, info: &DropInfo) -> bool {
        self.base.drop(ctx, info);
        match self.insertion_pos.take() {
            Some(index) => {
                let accepted = (self.on_drop)(info, index);
                tracing::debug!(accepted, index, "drop inserter");
                ctx.view.refresh(ctx.bounds);
                accepted
            }
            None => {
                tracing::debug!("drop inserter has no insertion point");
                false
            }
        }
    }
}

impl_element! {
    impl[S: Element] for DropInserter<S>;
    fn subject(&self) -> Option<&dyn Element> {
        Some(&self.subject)
    }
}
