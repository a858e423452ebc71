use crate::rect::Rect;
use cgmath::Point2;
use core::fmt;
use std::time::Duration;
use uuid::Uuid;

/// A unique identifier for a posted timer.
///
/// (this is just a UUID)
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(u32, u16, u16, [u8; 8]);

impl TimerId {
    pub(crate) fn new() -> TimerId {
        let uuid = Uuid::new_v4();
        let (a, b, c, d) = uuid.as_fields();
        TimerId(a, b, c, *d)
    }
}

impl fmt::Debug for TimerId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "TimerId({:08x}-{:04x})", self.0, self.1)
    }
}

/// Deferred work posted to a view.
///
/// The view hands itself to the action when it fires, so actions never have to hold on to a
/// borrow of the view.
pub type TimerAction = Box<dyn FnOnce(&dyn View) + Send>;

/// The window-side collaborator of an element tree.
///
/// A view owns the invalidation region and the timer queue. Elements only ever ask it to do
/// things; all calls happen on the view’s event thread, so every method takes `&self`.
pub trait View {
    /// Schedules `action` to run once after `delay`.
    ///
    /// There is no way to cancel a posted timer. Actions that may have become stale must check
    /// their own state when they run.
    fn post(&self, delay: Duration, action: TimerAction) -> TimerId;

    /// Marks a region as needing a redraw.
    fn refresh(&self, region: Rect);

    /// The current pointer location in window coordinates.
    fn cursor_position(&self) -> Point2<f64>;
}
