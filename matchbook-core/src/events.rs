//! Event System
//!
//! Analytics hooks for contact import operations.
//!
//! Every operation reports a start event before it touches the platform or
//! the network. Lookups and deletions additionally report their outcome once
//! the matching service answers; start and outcome share an `operation_id`.

use serde::{Deserialize, Serialize};
use tracing::trace;

fn new_operation_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

fn now() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// An upload flow was started.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactsUploadStartDetails {
    pub operation_id: String,
    pub timestamp: u64,
    /// Style requested for the permission screen.
    pub style_id: u32,
}

impl ContactsUploadStartDetails {
    pub fn new(style_id: u32) -> Self {
        ContactsUploadStartDetails {
            operation_id: new_operation_id(),
            timestamp: now(),
            style_id,
        }
    }
}

/// A match lookup was sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactsLookupStartDetails {
    pub operation_id: String,
    pub timestamp: u64,
    /// Page size actually forwarded (after normalization).
    pub count: Option<u32>,
    /// Whether a cursor was supplied.
    pub has_cursor: bool,
}

impl ContactsLookupStartDetails {
    pub fn new(count: Option<u32>, has_cursor: bool) -> Self {
        ContactsLookupStartDetails {
            operation_id: new_operation_id(),
            timestamp: now(),
            count,
            has_cursor,
        }
    }
}

/// A delete-all request was sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactsDeletionStartDetails {
    pub operation_id: String,
    pub timestamp: u64,
}

impl ContactsDeletionStartDetails {
    pub fn new() -> Self {
        ContactsDeletionStartDetails {
            operation_id: new_operation_id(),
            timestamp: now(),
        }
    }
}

impl Default for ContactsDeletionStartDetails {
    fn default() -> Self {
        Self::new()
    }
}

/// A match lookup returned a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactsLookupSuccessDetails {
    pub operation_id: String,
    pub timestamp: u64,
    /// Users on this page.
    pub match_count: usize,
    /// Whether the service handed out a cursor for another page.
    pub has_next_page: bool,
}

impl ContactsLookupSuccessDetails {
    pub fn new(operation_id: &str, match_count: usize, has_next_page: bool) -> Self {
        ContactsLookupSuccessDetails {
            operation_id: operation_id.to_string(),
            timestamp: now(),
            match_count,
            has_next_page,
        }
    }
}

/// Uploaded contacts were deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactsDeletionSuccessDetails {
    pub operation_id: String,
    pub timestamp: u64,
}

impl ContactsDeletionSuccessDetails {
    pub fn new(operation_id: &str) -> Self {
        ContactsDeletionSuccessDetails {
            operation_id: operation_id.to_string(),
            timestamp: now(),
        }
    }
}

/// A lookup or deletion failed remotely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactsFailureDetails {
    pub operation_id: String,
    pub timestamp: u64,
    /// Display form of the error handed to the caller.
    pub error: String,
}

impl ContactsFailureDetails {
    pub fn new(operation_id: &str, error: &crate::ContactsError) -> Self {
        ContactsFailureDetails {
            operation_id: operation_id.to_string(),
            timestamp: now(),
            error: error.to_string(),
        }
    }
}

/// Receives analytics for contact operations.
///
/// Calls are fire-and-forget and may arrive from the matching service's
/// thread for outcome events.
pub trait EventCollector: Send + Sync {
    /// Called before the upload launch is issued.
    fn start_contacts_upload(&self, details: ContactsUploadStartDetails);

    /// Called before a match lookup is sent.
    fn start_find_matches(&self, details: ContactsLookupStartDetails);

    /// Called before a delete-all request is sent.
    fn start_delete_contacts(&self, details: ContactsDeletionStartDetails);

    fn succeed_find_matches(&self, _details: ContactsLookupSuccessDetails) {}

    fn failed_find_matches(&self, _details: ContactsFailureDetails) {}

    fn succeed_delete_contacts(&self, _details: ContactsDeletionSuccessDetails) {}

    fn failed_delete_contacts(&self, _details: ContactsFailureDetails) {}
}

/// Events emitted by the coordinator, one variant per collector call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactsEvent {
    UploadStarted(ContactsUploadStartDetails),
    LookupStarted(ContactsLookupStartDetails),
    LookupSucceeded(ContactsLookupSuccessDetails),
    LookupFailed(ContactsFailureDetails),
    DeletionStarted(ContactsDeletionStartDetails),
    DeletionSucceeded(ContactsDeletionSuccessDetails),
    DeletionFailed(ContactsFailureDetails),
}

impl ContactsEvent {
    /// Returns the operation this event belongs to.
    pub fn operation_id(&self) -> &str {
        match self {
            ContactsEvent::UploadStarted(d) => &d.operation_id,
            ContactsEvent::LookupStarted(d) => &d.operation_id,
            ContactsEvent::LookupSucceeded(d) => &d.operation_id,
            ContactsEvent::LookupFailed(d) => &d.operation_id,
            ContactsEvent::DeletionStarted(d) => &d.operation_id,
            ContactsEvent::DeletionSucceeded(d) => &d.operation_id,
            ContactsEvent::DeletionFailed(d) => &d.operation_id,
        }
    }
}

/// Receives every event an [`EventDispatcher`] emits.
///
/// Any `Fn(&ContactsEvent)` closure is a handler.
pub trait ContactsEventHandler: Send + Sync {
    fn on_event(&self, event: &ContactsEvent);
}

impl<F> ContactsEventHandler for F
where
    F: Fn(&ContactsEvent) + Send + Sync,
{
    fn on_event(&self, event: &ContactsEvent) {
        self(event)
    }
}

/// Collector that turns every call into a [`ContactsEvent`] and hands it to
/// each handler in registration order.
///
/// Handlers are fixed once the dispatcher is shared with a client.
#[derive(Default)]
pub struct EventDispatcher {
    handlers: Vec<Box<dyn ContactsEventHandler>>,
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a handler after the ones already present.
    pub fn with_handler<H>(mut self, handler: H) -> Self
    where
        H: ContactsEventHandler + 'static,
    {
        self.handlers.push(Box::new(handler));
        self
    }

    fn emit(&self, event: ContactsEvent) {
        trace!(operation_id = event.operation_id(), ?event, "contacts event");
        for handler in &self.handlers {
            handler.on_event(&event);
        }
    }
}

impl EventCollector for EventDispatcher {
    fn start_contacts_upload(&self, details: ContactsUploadStartDetails) {
        self.emit(ContactsEvent::UploadStarted(details));
    }

    fn start_find_matches(&self, details: ContactsLookupStartDetails) {
        self.emit(ContactsEvent::LookupStarted(details));
    }

    fn start_delete_contacts(&self, details: ContactsDeletionStartDetails) {
        self.emit(ContactsEvent::DeletionStarted(details));
    }

    fn succeed_find_matches(&self, details: ContactsLookupSuccessDetails) {
        self.emit(ContactsEvent::LookupSucceeded(details));
    }

    fn failed_find_matches(&self, details: ContactsFailureDetails) {
        self.emit(ContactsEvent::LookupFailed(details));
    }

    fn succeed_delete_contacts(&self, details: ContactsDeletionSuccessDetails) {
        self.emit(ContactsEvent::DeletionSucceeded(details));
    }

    fn failed_delete_contacts(&self, details: ContactsFailureDetails) {
        self.emit(ContactsEvent::DeletionFailed(details));
    }
}
