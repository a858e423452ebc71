//! Interactive UI elements.
//!
//! # Conceptual overview
//! Perch is the interaction layer of a retained-mode element tree: elements are drawn onto a
//! vector canvas, react to the pointer, and take part in drag and drop.
//!
//! ## Elements
//! An element is anything implementing the three capability traits [`Drawable`],
//! [`CursorTrackable`] and [`DropTarget`], plus [`Element`] for downcasting and for looking
//! through decorators. Decorators like [`Tooltip`](tooltip::Tooltip) or
//! [`DropBox`](drag_and_drop::DropBox) own exactly one subject and forward everything they don’t
//! augment to it. Composites like [`VStack`](composite::VStack) hold an ordered list of children
//! and route events to the child under the pointer.
//!
//! ## Events
//! Pointer updates arrive with a [`CursorTracking`] status that tells the element whether the
//! pointer is entering, moving inside, or leaving it. Drags work the same way, carrying a
//! [`DropInfo`] with the payload. Containers work out the status for each child, so every element
//! sees a consistent enter/hover/leave sequence.
//!
//! ## Views and timers
//! Elements never own the window. They reach it through the [`View`] in their [`Context`] and
//! only ever ask it to do things: post a deferred action, or mark a region as needing a redraw.
//! Deferred actions can’t be cancelled; elements that post them keep enough state to notice
//! when an action has become stale.
//!
//! ## Redraws
//! Every state change that is visible on screen refreshes exactly the region it affects, so
//! hosts can redraw as little as possible.
//!
//! ## Coordinate System
//! The origin is at the top left corner of the window’s content area and positive y points down.
//! Contexts carry bounds in window coordinates.

pub mod basic;
pub mod canvas;
pub mod color;
pub mod composite;
mod context;
pub mod drag_and_drop;
mod element;
mod error;
pub mod events;
pub mod host;
pub mod rect;
pub mod scroll;
pub mod theme;
pub mod tooltip;
mod view;

pub use context::Context;
pub use element::{find_composite, CursorTrackable, DropTarget, Drawable, Element, Limits};
pub use error::Error;
pub use events::{CursorTracking, DropInfo, MimeType};
pub use host::{Host, HostView};
pub use rect::Rect;
pub use theme::Theme;
pub use view::{TimerAction, TimerId, View};
