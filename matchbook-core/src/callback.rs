// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Result Callbacks
//!
//! Remote operations complete through one-shot callbacks. The coordinator
//! wraps the caller's callback so it can report the outcome to the event
//! collector before handing the untouched result on.

use std::sync::Arc;

use crate::error::ContactsResult;
use crate::events::{
    ContactsDeletionSuccessDetails, ContactsFailureDetails, ContactsLookupSuccessDetails,
    EventCollector,
};
use crate::service::Contacts;

/// Receives the result of an asynchronous contacts operation.
///
/// Consumed on completion, so it is invoked at most once.
pub trait ContactsCallback<T>: Send {
    fn on_result(self: Box<Self>, result: ContactsResult<T>);
}

/// Closure-based callback.
pub struct CallbackFn<F> {
    callback: F,
}

impl<F> CallbackFn<F> {
    /// Wraps a closure taking the operation result.
    pub fn new(callback: F) -> Self {
        CallbackFn { callback }
    }
}

impl<T, F> ContactsCallback<T> for CallbackFn<F>
where
    F: FnOnce(ContactsResult<T>) + Send,
{
    fn on_result(self: Box<Self>, result: ContactsResult<T>) {
        (self.callback)(result);
    }
}

/// Wraps a lookup callback and reports the page outcome.
pub struct FoundContactsCallbackWrapper {
    callback: Box<dyn ContactsCallback<Contacts>>,
    events: Arc<dyn EventCollector>,
    operation_id: String,
}

impl FoundContactsCallbackWrapper {
    pub fn new(
        callback: Box<dyn ContactsCallback<Contacts>>,
        events: Arc<dyn EventCollector>,
        operation_id: &str,
    ) -> Self {
        FoundContactsCallbackWrapper {
            callback,
            events,
            operation_id: operation_id.to_string(),
        }
    }

    /// Operation this wrapper completes.
    pub fn operation_id(&self) -> &str {
        &self.operation_id
    }
}

impl ContactsCallback<Contacts> for FoundContactsCallbackWrapper {
    fn on_result(self: Box<Self>, result: ContactsResult<Contacts>) {
        let this = *self;
        match &result {
            Ok(contacts) => this
                .events
                .succeed_find_matches(ContactsLookupSuccessDetails::new(
                    &this.operation_id,
                    contacts.users.len(),
                    contacts.has_next_page(),
                )),
            Err(e) => this
                .events
                .failed_find_matches(ContactsFailureDetails::new(&this.operation_id, e)),
        }
        this.callback.on_result(result);
    }
}

/// Wraps a deletion callback and reports the outcome.
pub struct DeleteContactsCallbackWrapper {
    callback: Box<dyn ContactsCallback<()>>,
    events: Arc<dyn EventCollector>,
    operation_id: String,
}

impl DeleteContactsCallbackWrapper {
    pub fn new(
        callback: Box<dyn ContactsCallback<()>>,
        events: Arc<dyn EventCollector>,
        operation_id: &str,
    ) -> Self {
        DeleteContactsCallbackWrapper {
            callback,
            events,
            operation_id: operation_id.to_string(),
        }
    }

    /// Operation this wrapper completes.
    pub fn operation_id(&self) -> &str {
        &self.operation_id
    }
}

impl ContactsCallback<()> for DeleteContactsCallbackWrapper {
    fn on_result(self: Box<Self>, result: ContactsResult<()>) {
        let this = *self;
        match &result {
            Ok(()) => this
                .events
                .succeed_delete_contacts(ContactsDeletionSuccessDetails::new(&this.operation_id)),
            Err(e) => this
                .events
                .failed_delete_contacts(ContactsFailureDetails::new(&this.operation_id, e)),
        }
        this.callback.on_result(result);
    }
}
