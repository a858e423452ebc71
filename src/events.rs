//! Events.

use crate::error::Error;
use cgmath::Point2;
use core::fmt;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::str::FromStr;
use std::sync::Arc;

/// Where a pointer update is relative to an element.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorTracking {
    /// The pointer just moved into the element.
    Entering = 0,

    /// The pointer moved while inside the element.
    Hovering = 1,

    /// The pointer left the element.
    Leaving = 2,
}

impl CursorTracking {
    /// Entering and hovering are treated the same by almost everything.
    pub fn is_leaving(self) -> bool {
        self == CursorTracking::Leaving
    }
}

/// A validated `type/subtype` mime type, e.g. `text/uri-list`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MimeType(String);

impl MimeType {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for MimeType {
    type Err = Error;

    fn from_str(s: &str) -> Result<MimeType, Error> {
        let mut parts = s.splitn(2, '/');
        let valid_part = |part: Option<&str>| {
            part.map_or(false, |p| {
                !p.is_empty() && !p.contains('/') && !p.chars().any(char::is_whitespace)
            })
        };
        if valid_part(parts.next()) && valid_part(parts.next()) {
            Ok(MimeType(s.to_string()))
        } else {
            Err(Error::InvalidMimeType(s.to_string()))
        }
    }
}

impl fmt::Display for MimeType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The payload of a drag or drop.
///
/// Only lives for the duration of one event.
#[derive(Debug, Clone, PartialEq)]
pub struct DropInfo {
    /// Drop location in window coordinates.
    pub location: Point2<f64>,

    /// Payload data by mime type.
    pub data: HashMap<String, Vec<u8>>,
}

impl DropInfo {
    pub fn new(location: Point2<f64>) -> DropInfo {
        DropInfo {
            location,
            data: HashMap::new(),
        }
    }

    /// Adds a payload for a mime type.
    pub fn with_data(mut self, mime_type: &str, data: impl Into<Vec<u8>>) -> DropInfo {
        self.data.insert(mime_type.to_string(), data.into());
        self
    }

    /// Returns a copy with a different location.
    pub fn at(&self, location: Point2<f64>) -> DropInfo {
        DropInfo {
            location,
            data: self.data.clone(),
        }
    }

    pub fn has(&self, mime_type: &MimeType) -> bool {
        self.data.contains_key(mime_type.as_str())
    }

    pub fn get(&self, mime_type: &str) -> Option<&[u8]> {
        self.data.get(mime_type).map(Vec::as_slice)
    }
}

/// Called with `true` when a tooltip appears and `false` when it goes away.
///
/// Shared, since deferred timer actions need to call it after the event that scheduled them.
pub struct HoverHandler(Arc<Mutex<dyn FnMut(bool) + Send>>);

impl Clone for HoverHandler {
    fn clone(&self) -> Self {
        HoverHandler(Arc::clone(&self.0))
    }
}

impl HoverHandler {
    pub fn new<F: 'static + FnMut(bool) + Send>(handler: F) -> Self {
        HoverHandler(Arc::new(Mutex::new(handler)))
    }

    /// A handler that does nothing.
    pub fn noop() -> Self {
        HoverHandler::new(|_| ())
    }

    pub fn call(&self, visible: bool) {
        let mut handler = self.0.lock();
        (&mut *handler)(visible)
    }
}

impl Default for HoverHandler {
    fn default() -> Self {
        HoverHandler::noop()
    }
}

impl fmt::Debug for HoverHandler {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "HoverHandler")
    }
}
