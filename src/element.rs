use crate::canvas::Canvas;
use crate::composite::Composite;
use crate::context::Context;
use crate::events::{CursorTracking, DropInfo};
use crate::rect::Rect;
use cgmath::{Point2, Vector2, Zero};
use core::any::Any;
use core::fmt;

/// Implements the `Element` trait for a given struct.
///
/// The capability traits (`Drawable`, `CursorTrackable`, `DropTarget`) are implemented
/// separately; this only fills in the downcasting boilerplate.
///
/// Syntax:
///
/// ```text
/// impl_element! {
///     impl[S: Element] for StructName<S>; // or `impl for StructName;`
///     (put extra items like subject() here, using normal rust syntax)
/// }
/// ```
#[macro_export]
macro_rules! impl_element {
    (
        $(#[$attr:meta])*
        impl$([$($gen:tt)*])? for $struct:ty;
        $($extra:tt)*
    ) => {
        $(#[$attr])*
        impl$(<$($gen)*>)? $crate::Element for $struct {
            fn as_any(&self) -> &dyn ::core::any::Any {
                self
            }

            fn as_any_mut(&mut self) -> &mut dyn ::core::any::Any {
                self
            }

            $($extra)*
        }
    };
}

/// Size limits of an element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Limits {
    pub min: Vector2<f64>,
    pub max: Vector2<f64>,
}

impl Limits {
    /// Limits of an element that must be exactly this size.
    pub fn fixed(size: Vector2<f64>) -> Limits {
        Limits {
            min: size,
            max: size,
        }
    }
}

/// Zero to infinity.
impl Default for Limits {
    fn default() -> Limits {
        Limits {
            min: Vector2::zero(),
            max: Vector2::new(f64::INFINITY, f64::INFINITY),
        }
    }
}

/// Things that take up space and can be drawn.
pub trait Drawable {
    /// Size limits; the context bounds are the bounds the element would be given.
    fn limits(&self, ctx: &Context) -> Limits {
        let _ = ctx;
        Limits::default()
    }

    /// Draws into `ctx.bounds`.
    fn draw(&mut self, ctx: &Context, canvas: &mut dyn Canvas) {
        let _ = (ctx, canvas);
    }
}

/// Things that react to the pointer.
pub trait CursorTrackable {
    /// Returns true if the point hits this element.
    fn hit_test(&self, ctx: &Context, p: Point2<f64>) -> bool {
        ctx.bounds.contains(p)
    }

    /// Called by the owner once per relevant pointer update.
    ///
    /// Returns true if the element did something with it.
    fn cursor(&mut self, ctx: &Context, p: Point2<f64>, status: CursorTracking) -> bool {
        let _ = (ctx, p, status);
        false
    }
}

/// Things that take part in drag and drop.
pub trait DropTarget {
    /// If true, the element receives drag routing even when it’s not currently tracking.
    fn wants_control(&self) -> bool {
        false
    }

    /// Called while a drag moves over (or leaves) the element.
    fn track_drop(&mut self, ctx: &Context, info: &DropInfo, status: CursorTracking) {
        let _ = (ctx, info, status);
    }

    /// Called when a payload is dropped on the element. Returns true if it was accepted.
    fn drop(&mut self, ctx: &Context, info: &DropInfo) -> bool {
        let _ = (ctx, info);
        false
    }
}

/// Elements are the nodes of the UI tree: they draw, react to the pointer and take part in drag
/// and drop.
///
/// Decorators own exactly one subject and expose it through [`Element::subject`], so that code
/// can look through them (e.g. to find a composite further down). Containers expose themselves
/// through [`Element::as_composite`].
///
/// This trait should probably be implemented using the [`impl_element`] macro.
pub trait Element: Drawable + CursorTrackable + DropTarget + Any + fmt::Debug {
    /// For downcasting.
    fn as_any(&self) -> &dyn Any;

    /// For downcasting.
    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// The wrapped element, for decorators.
    fn subject(&self) -> Option<&dyn Element> {
        None
    }

    /// Where the subject sits, given this element’s context.
    fn subject_bounds(&self, ctx: &Context) -> Rect {
        ctx.bounds
    }

    /// Returns self if this is a container.
    fn as_composite(&self) -> Option<&dyn Composite> {
        None
    }
}

/// Finds the closest composite in an element’s subject chain (the element included), along with
/// the bounds it occupies.
pub fn find_composite<'e>(
    element: &'e dyn Element,
    ctx: &Context,
) -> Option<(&'e dyn Composite, Rect)> {
    if let Some(composite) = element.as_composite() {
        return Some((composite, ctx.bounds));
    }
    let subject = element.subject()?;
    let bounds = element.subject_bounds(ctx);
    find_composite(subject, &ctx.sub(bounds))
}

impl Drawable for Box<dyn Element> {
    fn limits(&self, ctx: &Context) -> Limits {
        (**self).limits(ctx)
    }
    fn draw(&mut self, ctx: &Context, canvas: &mut dyn Canvas) {
        (**self).draw(ctx, canvas)
    }
}

impl CursorTrackable for Box<dyn Element> {
    fn hit_test(&self, ctx: &Context, p: Point2<f64>) -> bool {
        (**self).hit_test(ctx, p)
    }
    fn cursor(&mut self, ctx: &Context, p: Point2<f64>, status: CursorTracking) -> bool {
        (**self).cursor(ctx, p, status)
    }
}

impl DropTarget for Box<dyn Element> {
    fn wants_control(&self) -> bool {
        (**self).wants_control()
    }
    fn track_drop(&mut self, ctx: &Context, info: &DropInfo, status: CursorTracking) {
        (**self).track_drop(ctx, info, status)
    }
    fn drop(&mut self, ctx: &Context, info: &DropInfo) -> bool {
        DropTarget::drop(&mut **self, ctx, info)
    }
}

/// Boxed elements forward everything, downcasting included.
impl Element for Box<dyn Element> {
    fn as_any(&self) -> &dyn Any {
        (**self).as_any()
    }
    fn as_any_mut(&mut self) -> &mut dyn Any {
        (**self).as_any_mut()
    }
    fn subject(&self) -> Option<&dyn Element> {
        (**self).subject()
    }
    fn subject_bounds(&self, ctx: &Context) -> Rect {
        (**self).subject_bounds(ctx)
    }
    fn as_composite(&self) -> Option<&dyn Composite> {
        (**self).as_composite()
    }
}
