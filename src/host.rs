use crate::canvas::Canvas;
use crate::context::Context;
use crate::element::Element;
use crate::events::{CursorTracking, DropInfo};
use crate::rect::Rect;
use crate::theme::Theme;
use crate::view::{TimerAction, TimerId, View};
use cgmath::Point2;
use core::cmp::Ordering;
use core::fmt;
use crossbeam::channel::{self, Receiver, Sender, TryRecvError};
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::time::Duration;

/// A timer waiting in the channel or the queue.
struct Timer {
    id: TimerId,
    deadline: Duration,
    /// Posting order; breaks ties between equal deadlines.
    seq: u64,
    action: TimerAction,
}

impl PartialEq for Timer {
    fn eq(&self, other: &Timer) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Timer {}

impl PartialOrd for Timer {
    fn partial_cmp(&self, other: &Timer) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Timer {
    fn cmp(&self, other: &Timer) -> Ordering {
        (self.deadline, self.seq).cmp(&(other.deadline, other.seq))
    }
}

/// A [`View`] with a virtual clock.
///
/// Posted timers and refresh requests go through channels, so elements only need `&self`;
/// whoever owns the view drains them with [`HostView::advance`] and [`HostView::take_refreshes`].
pub struct HostView {
    now: Duration,
    cursor: Point2<f64>,
    timer_send: Sender<Timer>,
    timer_recv: Receiver<Timer>,
    refresh_send: Sender<Rect>,
    refresh_recv: Receiver<Rect>,
    queue: BinaryHeap<Reverse<Timer>>,
    next_seq: u64,
}

impl HostView {
    pub fn new() -> HostView {
        let (timer_send, timer_recv) = channel::unbounded();
        let (refresh_send, refresh_recv) = channel::unbounded();

        HostView {
            now: Duration::from_secs(0),
            cursor: Point2::new(0., 0.),
            timer_send,
            timer_recv,
            refresh_send,
            refresh_recv,
            queue: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    /// Time elapsed on the virtual clock.
    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn set_cursor_position(&mut self, p: Point2<f64>) {
        self.cursor = p;
    }

    /// Number of timers that haven’t fired yet.
    pub fn pending_timers(&self) -> usize {
        self.queue.len() + self.timer_recv.len()
    }

    /// Moves posted timers from the channel into the queue.
    fn receive_timers(&mut self) {
        loop {
            match self.timer_recv.try_recv() {
                Ok(mut timer) => {
                    timer.seq = self.next_seq;
                    self.next_seq += 1;
                    self.queue.push(Reverse(timer));
                }
                Err(TryRecvError::Empty) => break,
                // we hold the sender ourselves
                Err(TryRecvError::Disconnected) => break,
            }
        }
    }

    /// Advances the clock by `dt`, firing every timer that comes due in order.
    ///
    /// Timers posted by firing timers run in the same call if they come due within `dt`.
    /// Returns the number of timers that fired.
    pub fn advance(&mut self, dt: Duration) -> usize {
        let target = self.now + dt;
        let mut fired = 0;

        loop {
            self.receive_timers();
            let is_due = match self.queue.peek() {
                Some(Reverse(timer)) => timer.deadline <= target,
                None => false,
            };
            if !is_due {
                break;
            }
            if let Some(Reverse(timer)) = self.queue.pop() {
                self.now = self.now.max(timer.deadline);
                tracing::trace!(timer = ?timer.id, now = ?self.now, "firing timer");
                (timer.action)(&*self);
                fired += 1;
            }
        }

        self.now = target;
        fired
    }

    /// Removes and returns all refresh requests since the last call, in order.
    pub fn take_refreshes(&self) -> Vec<Rect> {
        self.refresh_recv.try_iter().collect()
    }

    /// Removes all refresh requests and returns the region covering them.
    pub fn take_dirty(&self) -> Option<Rect> {
        self.refresh_recv
            .try_iter()
            .fold(None, |dirty: Option<Rect>, region| match dirty {
                Some(dirty) => Some(dirty.union(region)),
                None => Some(region),
            })
    }
}

impl Default for HostView {
    fn default() -> HostView {
        HostView::new()
    }
}

impl View for HostView {
    fn post(&self, delay: Duration, action: TimerAction) -> TimerId {
        let id = TimerId::new();
        let deadline = self.now + delay;
        tracing::trace!(timer = ?id, ?delay, "posting timer");
        let timer = Timer {
            id,
            deadline,
            seq: 0,
            action,
        };
        if self.timer_send.send(timer).is_err() {
            // the receiver lives in self, so this can’t happen
            tracing::warn!(timer = ?id, "timer channel disconnected");
        }
        id
    }

    fn refresh(&self, region: Rect) {
        if self.refresh_send.send(region).is_err() {
            tracing::warn!(?region, "refresh channel disconnected");
        }
    }

    fn cursor_position(&self) -> Point2<f64> {
        self.cursor
    }
}

impl fmt::Debug for HostView {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("HostView")
            .field("now", &self.now)
            .field("cursor", &self.cursor)
            .field("pending_timers", &self.pending_timers())
            .finish()
    }
}

/// Owns a root element and feeds it pointer, drag and timer events.
///
/// The host works out the cursor tracking status for the root; containers do the same for their
/// children.
#[derive(Debug)]
pub struct Host<E> {
    view: HostView,
    theme: Theme,
    bounds: Rect,
    root: E,
    hovering: bool,
    dragging: bool,
}

impl<E: Element> Host<E> {
    /// Creates a new host for a root element occupying `bounds`.
    pub fn new(root: E, bounds: Rect) -> Host<E> {
        Host {
            view: HostView::new(),
            theme: Theme::default(),
            bounds,
            root,
            hovering: false,
            dragging: false,
        }
    }

    pub fn with_theme(mut self, theme: Theme) -> Host<E> {
        self.theme = theme;
        self
    }

    pub fn root(&self) -> &E {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut E {
        &mut self.root
    }

    pub fn view(&self) -> &HostView {
        &self.view
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Changes the root bounds; the whole window needs redrawing afterwards.
    pub fn resize(&mut self, bounds: Rect) {
        self.bounds = bounds;
        self.view.refresh(bounds);
    }

    /// Handles a pointer move. Returns true if an element used it.
    pub fn cursor_moved(&mut self, p: Point2<f64>) -> bool {
        self.view.set_cursor_position(p);
        let inside = self.bounds.contains(p);
        let status = match (self.hovering, inside) {
            (false, true) => CursorTracking::Entering,
            (true, true) => CursorTracking::Hovering,
            (true, false) => CursorTracking::Leaving,
            (false, false) => return false,
        };
        self.hovering = inside;

        let ctx = Context::new(&self.view, &self.theme, self.bounds);
        self.root.cursor(&ctx, p, status)
    }

    /// Handles the pointer leaving the window.
    pub fn cursor_exited(&mut self) -> bool {
        if !self.hovering {
            return false;
        }
        self.hovering = false;
        let p = self.view.cursor_position();
        let ctx = Context::new(&self.view, &self.theme, self.bounds);
        self.root.cursor(&ctx, p, CursorTracking::Leaving)
    }

    /// Handles a drag moving over the window.
    pub fn drag_over(&mut self, info: &DropInfo) {
        self.view.set_cursor_position(info.location);
        let inside = self.bounds.contains(info.location);
        let status = match (self.dragging, inside) {
            (false, true) => CursorTracking::Entering,
            (true, true) => CursorTracking::Hovering,
            (true, false) => CursorTracking::Leaving,
            (false, false) => return,
        };
        self.dragging = inside;

        let ctx = Context::new(&self.view, &self.theme, self.bounds);
        self.root.track_drop(&ctx, info, status);
    }

    /// Handles a drag being withdrawn from the window.
    pub fn drag_leave(&mut self, info: &DropInfo) {
        if !self.dragging {
            return;
        }
        self.dragging = false;
        let ctx = Context::new(&self.view, &self.theme, self.bounds);
        self.root.track_drop(&ctx, info, CursorTracking::Leaving);
    }

    /// Handles a drop. Returns true if it was accepted.
    pub fn drop(&mut self, info: &DropInfo) -> bool {
        let was_dragging = self.dragging;
        self.dragging = false;
        self.view.set_cursor_position(info.location);
        let ctx = Context::new(&self.view, &self.theme, self.bounds);
        if !self.bounds.contains(info.location) {
            if was_dragging {
                self.root.track_drop(&ctx, info, CursorTracking::Leaving);
            }
            return false;
        }
        let accepted = self.root.drop(&ctx, info);
        tracing::debug!(accepted, location = ?info.location, "drop");
        accepted
    }

    /// Draws the root element.
    pub fn draw(&mut self, canvas: &mut dyn Canvas) {
        let ctx = Context::new(&self.view, &self.theme, self.bounds);
        self.root.draw(&ctx, canvas);
    }

    /// Advances the clock and fires due timers; see [`HostView::advance`].
    pub fn advance(&mut self, dt: Duration) -> usize {
        self.view.advance(dt)
    }

    /// Removes and returns the region that needs redrawing, if any.
    pub fn take_dirty(&self) -> Option<Rect> {
        self.view.take_dirty()
    }
}
