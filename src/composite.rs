//! Containers.

use crate::canvas::Canvas;
use crate::context::Context;
use crate::element::{CursorTrackable, DropTarget, Drawable, Element, Limits};
use crate::events::{CursorTracking, DropInfo};
use crate::impl_element;
use crate::rect::Rect;
use cgmath::{Point2, Vector2, Zero};

/// Result of a composite hit test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitInfo {
    /// Index of the child that was hit.
    pub index: usize,

    /// Bounds of the child that was hit.
    pub bounds: Rect,
}

/// An element that holds an ordered list of children.
///
/// How the children are laid out is up to the implementor; everything else is derived from
/// `bounds_of`.
pub trait Composite {
    /// Number of children.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The child at `index`. Panics if out of bounds.
    fn at(&self, index: usize) -> &dyn Element;

    /// The child at `index`. Panics if out of bounds.
    fn at_mut(&mut self, index: usize) -> &mut dyn Element;

    /// Bounds of the child at `index`, given the composite’s context.
    fn bounds_of(&self, ctx: &Context, index: usize) -> Rect;

    /// Bounds of all children in order.
    ///
    /// Implementors whose `bounds_of` depends on earlier children should override this.
    fn layout(&self, ctx: &Context) -> Vec<Rect> {
        (0..self.len()).map(|index| self.bounds_of(ctx, index)).collect()
    }

    /// Finds the child under a point without changing any state.
    ///
    /// - `exclusive`: if true, only children that want control (see
    ///   [`DropTarget::wants_control`]) are considered.
    fn hit_element(&self, ctx: &Context, p: Point2<f64>, exclusive: bool) -> Option<HitInfo> {
        self.layout(ctx)
            .into_iter()
            .enumerate()
            .find_map(|(index, bounds)| {
                if !bounds.contains(p) {
                    return None;
                }
                let child = self.at(index);
                if exclusive && !child.wants_control() {
                    return None;
                }
                if child.hit_test(&ctx.sub(bounds), p) {
                    Some(HitInfo { index, bounds })
                } else {
                    None
                }
            })
    }
}

/// A vertical stack: every child gets its minimum height and the full width.
#[derive(Debug, Default)]
pub struct VStack {
    children: Vec<Box<dyn Element>>,
    /// Child currently under the pointer.
    hovered: Option<usize>,
    /// Child currently tracking a drag.
    drag_target: Option<usize>,
}

impl VStack {
    pub fn new(children: Vec<Box<dyn Element>>) -> VStack {
        VStack {
            children,
            hovered: None,
            drag_target: None,
        }
    }

    pub fn push(&mut self, child: Box<dyn Element>) {
        self.children.push(child);
    }

    /// Inserts a child; `index` may be equal to the length to append.
    pub fn insert(&mut self, index: usize, child: Box<dyn Element>) {
        self.forget_tracking();
        self.children.insert(index.min(self.children.len()), child);
    }

    pub fn remove(&mut self, index: usize) -> Box<dyn Element> {
        self.forget_tracking();
        self.children.remove(index)
    }

    /// Moves a child so that it ends up in front of what is currently at `insertion_pos`.
    ///
    /// `insertion_pos` is a position between children as produced by a drop inserter, so
    /// `len()` means “at the end”.
    pub fn move_to_insertion_point(&mut self, from: usize, insertion_pos: usize) {
        let to = if insertion_pos > from {
            insertion_pos - 1
        } else {
            insertion_pos
        };
        let child = self.remove(from);
        self.insert(to, child);
    }

    pub fn children(&self) -> &[Box<dyn Element>] {
        &self.children
    }

    fn forget_tracking(&mut self) {
        self.hovered = None;
        self.drag_target = None;
    }

    fn child_limits(&self, ctx: &Context, index: usize) -> Limits {
        self.children[index].limits(ctx)
    }
}

impl Composite for VStack {
    fn len(&self) -> usize {
        self.children.len()
    }

    fn at(&self, index: usize) -> &dyn Element {
        &*self.children[index]
    }

    fn at_mut(&mut self, index: usize) -> &mut dyn Element {
        &mut *self.children[index]
    }

    fn bounds_of(&self, ctx: &Context, index: usize) -> Rect {
        let mut top = ctx.bounds.top();
        for i in 0..index {
            top += self.child_limits(ctx, i).min.y;
        }
        let height = self.child_limits(ctx, index).min.y;
        Rect::from_ltrb(ctx.bounds.left(), top, ctx.bounds.right(), top + height)
    }

    fn layout(&self, ctx: &Context) -> Vec<Rect> {
        let mut top = ctx.bounds.top();
        (0..self.children.len())
            .map(|index| {
                let height = self.child_limits(ctx, index).min.y;
                let (left, right) = (ctx.bounds.left(), ctx.bounds.right());
                let bounds = Rect::from_ltrb(left, top, right, top + height);
                top += height;
                bounds
            })
            .collect()
    }
}

impl Drawable for VStack {
    fn limits(&self, ctx: &Context) -> Limits {
        let mut min = Vector2::<f64>::zero();
        for i in 0..self.children.len() {
            let child = self.child_limits(ctx, i);
            min.x = min.x.max(child.min.x);
            min.y += child.min.y;
        }
        Limits {
            min,
            max: Vector2::new(f64::INFINITY, min.y),
        }
    }

    fn draw(&mut self, ctx: &Context, canvas: &mut dyn Canvas) {
        let layout = self.layout(ctx);
        for (child, bounds) in self.children.iter_mut().zip(layout) {
            child.draw(&ctx.sub(bounds), canvas);
        }
    }
}

impl CursorTrackable for VStack {
    fn hit_test(&self, ctx: &Context, p: Point2<f64>) -> bool {
        self.hit_element(ctx, p, false).is_some()
    }

    fn cursor(&mut self, ctx: &Context, p: Point2<f64>, status: CursorTracking) -> bool {
        let hit = if status.is_leaving() {
            None
        } else {
            self.hit_element(ctx, p, false)
        };

        let previous = self.hovered;
        self.hovered = hit.map(|hit| hit.index);

        if let Some(index) = previous {
            if Some(index) != self.hovered && index < self.children.len() {
                let bounds = self.bounds_of(ctx, index);
                self.children[index].cursor(&ctx.sub(bounds), p, CursorTracking::Leaving);
            }
        }

        match hit {
            Some(hit) => {
                let status = if previous == Some(hit.index) {
                    CursorTracking::Hovering
                } else {
                    CursorTracking::Entering
                };
                self.children[hit.index].cursor(&ctx.sub(hit.bounds), p, status)
            }
            None => false,
        }
    }
}

impl DropTarget for VStack {
    fn wants_control(&self) -> bool {
        self.children.iter().any(|child| child.wants_control())
    }

    fn track_drop(&mut self, ctx: &Context, info: &DropInfo, status: CursorTracking) {
        let hit = if status.is_leaving() {
            None
        } else {
            self.hit_element(ctx, info.location, true)
        };

        let previous = self.drag_target;
        self.drag_target = hit.map(|hit| hit.index);

        if let Some(index) = previous {
            if Some(index) != self.drag_target && index < self.children.len() {
                let bounds = self.bounds_of(ctx, index);
                self.children[index].track_drop(&ctx.sub(bounds), info, CursorTracking::Leaving);
            }
        }

        if let Some(hit) = hit {
            let status = if previous == Some(hit.index) {
                CursorTracking::Hovering
            } else {
                CursorTracking::Entering
            };
            self.children[hit.index].track_drop(&ctx.sub(hit.bounds), info, status);
        }
    }

    fn drop(&mut self, ctx: &Context, info: &DropInfo) -> bool {
        let previous = self.drag_target.take();
        let hit = self.hit_element(ctx, info.location, true);

        if let Some(index) = previous {
            if Some(index) != hit.map(|hit| hit.index) && index < self.children.len() {
                let bounds = self.bounds_of(ctx, index);
                self.children[index].track_drop(&ctx.sub(bounds), info, CursorTracking::Leaving);
            }
        }

        match hit {
            Some(hit) => {
                let child = &mut self.children[hit.index];
                DropTarget::drop(child, &ctx.sub(hit.bounds), info)
            }
            None => false,
        }
    }
}

impl_element! {
    impl for VStack;
    fn as_composite(&self) -> Option<&dyn Composite> {
        Some(self)
    }
}
