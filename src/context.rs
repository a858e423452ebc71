//! Per-draw and per-event scopes.

use crate::rect::Rect;
use crate::scroll::Scrollable;
use crate::theme::Theme;
use crate::view::View;
use cgmath::Point2;
use core::fmt;

/// The scope an element is drawn or handles an event in.
///
/// Contexts are cheap to create; containers create one per child with the child’s bounds, and
/// each keeps a link to its parent so elements can look for things up the tree (e.g. the closest
/// scrollable ancestor).
#[derive(Clone, Copy)]
pub struct Context<'a> {
    /// The view that owns the element tree.
    pub view: &'a dyn View,

    /// The current theme.
    pub theme: &'a Theme,

    /// Bounds of the element this context was made for.
    pub bounds: Rect,

    parent: Option<&'a Context<'a>>,
    scrollable: Option<&'a dyn Scrollable>,
}

impl<'a> Context<'a> {
    /// Creates a root context.
    pub fn new(view: &'a dyn View, theme: &'a Theme, bounds: Rect) -> Context<'a> {
        Context {
            view,
            theme,
            bounds,
            parent: None,
            scrollable: None,
        }
    }

    /// Creates a child context with the given bounds.
    pub fn sub(&'a self, bounds: Rect) -> Context<'a> {
        Context {
            view: self.view,
            theme: self.theme,
            bounds,
            parent: Some(self),
            scrollable: None,
        }
    }

    /// Creates a child context for the subject of a scrollable element.
    pub fn sub_scrollable(&'a self, bounds: Rect, scrollable: &'a dyn Scrollable) -> Context<'a> {
        Context {
            scrollable: Some(scrollable),
            ..self.sub(bounds)
        }
    }

    pub fn parent(&self) -> Option<&'a Context<'a>> {
        self.parent
    }

    /// The scrollable this context was created for, if any.
    pub fn scrollable(&self) -> Option<&'a dyn Scrollable> {
        self.scrollable
    }

    /// The current pointer location.
    pub fn cursor_pos(&self) -> Point2<f64> {
        self.view.cursor_position()
    }
}

impl<'a> fmt::Debug for Context<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Context")
            .field("bounds", &self.bounds)
            .field("has_parent", &self.parent.is_some())
            .field("has_scrollable", &self.scrollable.is_some())
            .finish()
    }
}
