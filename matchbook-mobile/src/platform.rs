// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Platform Collaborators
//!
//! Callback interfaces the host app implements in Kotlin (Android) or Swift
//! (iOS), and the adapters that plug them into matchbook-core.

use std::sync::Arc;

use parking_lot::Mutex;

use matchbook_core::{
    Contacts, ContactsCallback, ContactsEvent, ContactsEventHandler, ContactsPreferences,
    ContactsResult, LaunchRequest, MatchingService, PlatformContext, Vcards,
};

use crate::types::{MobileContacts, MobileContactsEvent, MobileFailure, MobileLaunchRequest};

/// Starts platform components.
///
/// On Android, build an explicit `Intent` from the request and call
/// `startActivity` or `startService` on the application context.
#[uniffi::export(callback_interface)]
pub trait PlatformLauncher: Send + Sync {
    /// Package of the host application.
    fn package_name(&self) -> String;

    fn start_activity(&self, request: MobileLaunchRequest);

    fn start_service(&self, request: MobileLaunchRequest);
}

/// Persisted contact-import consent.
#[uniffi::export(callback_interface)]
pub trait PlatformPreferences: Send + Sync {
    fn has_contact_import_permission_granted(&self) -> bool;
}

/// Receives analytics events.
#[uniffi::export(callback_interface)]
pub trait PlatformEventSink: Send + Sync {
    fn on_event(&self, event: MobileContactsEvent);
}

/// Network client for the contacts endpoints.
///
/// Lookups and deletions must be completed through the given responder,
/// from any thread.
#[uniffi::export(callback_interface)]
pub trait PlatformMatchingService: Send + Sync {
    fn upload(&self, vcards: Vec<String>);

    fn users_and_uploaded_by(
        &self,
        cursor: Option<String>,
        count: Option<u32>,
        responder: Arc<MobileLookupResponder>,
    );

    fn delete_all(&self, responder: Arc<MobileDeleteResponder>);
}

/// App callback for a match lookup.
#[uniffi::export(callback_interface)]
pub trait MobileLookupCallback: Send + Sync {
    fn on_success(&self, contacts: MobileContacts);

    fn on_failure(&self, failure: MobileFailure);
}

/// App callback for deleting uploaded contacts.
#[uniffi::export(callback_interface)]
pub trait MobileDeleteCallback: Send + Sync {
    fn on_success(&self);

    fn on_failure(&self, failure: MobileFailure);
}

// === Responders ===

/// One-shot completion handle for a lookup.
///
/// Only the first `success`/`failure` call is delivered.
#[derive(uniffi::Object)]
pub struct MobileLookupResponder {
    callback: Mutex<Option<Box<dyn ContactsCallback<Contacts>>>>,
}

impl MobileLookupResponder {
    pub(crate) fn new(callback: Box<dyn ContactsCallback<Contacts>>) -> Arc<Self> {
        Arc::new(MobileLookupResponder {
            callback: Mutex::new(Some(callback)),
        })
    }

    fn complete(&self, result: ContactsResult<Contacts>) {
        let callback = self.callback.lock().take();
        match callback {
            Some(callback) => callback.on_result(result),
            None => tracing::debug!("lookup responder already completed"),
        }
    }
}

#[uniffi::export]
impl MobileLookupResponder {
    /// Delivers a page of matches.
    pub fn success(&self, contacts: MobileContacts) {
        self.complete(Ok(contacts.into()));
    }

    /// Delivers a failure.
    pub fn failure(&self, failure: MobileFailure) {
        self.complete(Err(failure.into()));
    }

    /// Returns true once a result was delivered.
    pub fn is_completed(&self) -> bool {
        self.callback.lock().is_none()
    }
}

/// One-shot completion handle for a deletion.
#[derive(uniffi::Object)]
pub struct MobileDeleteResponder {
    callback: Mutex<Option<Box<dyn ContactsCallback<()>>>>,
}

impl MobileDeleteResponder {
    pub(crate) fn new(callback: Box<dyn ContactsCallback<()>>) -> Arc<Self> {
        Arc::new(MobileDeleteResponder {
            callback: Mutex::new(Some(callback)),
        })
    }

    fn complete(&self, result: ContactsResult<()>) {
        let callback = self.callback.lock().take();
        match callback {
            Some(callback) => callback.on_result(result),
            None => tracing::debug!("delete responder already completed"),
        }
    }
}

#[uniffi::export]
impl MobileDeleteResponder {
    pub fn success(&self) {
        self.complete(Ok(()));
    }

    pub fn failure(&self, failure: MobileFailure) {
        self.complete(Err(failure.into()));
    }

    pub fn is_completed(&self) -> bool {
        self.callback.lock().is_none()
    }
}

// === Adapters ===

pub(crate) struct LauncherContext(pub(crate) Box<dyn PlatformLauncher>);

impl PlatformContext for LauncherContext {
    fn package_name(&self) -> String {
        self.0.package_name()
    }

    fn start_activity(&self, request: LaunchRequest) {
        self.0.start_activity(request.into());
    }

    fn start_service(&self, request: LaunchRequest) {
        self.0.start_service(request.into());
    }
}

pub(crate) struct PreferencesAdapter(pub(crate) Box<dyn PlatformPreferences>);

impl ContactsPreferences for PreferencesAdapter {
    fn has_contact_import_permission_granted(&self) -> bool {
        self.0.has_contact_import_permission_granted()
    }
}

pub(crate) struct EventSinkHandler(pub(crate) Box<dyn PlatformEventSink>);

impl ContactsEventHandler for EventSinkHandler {
    fn on_event(&self, event: &ContactsEvent) {
        self.0.on_event(event.clone().into());
    }
}

pub(crate) struct ServiceAdapter(pub(crate) Box<dyn PlatformMatchingService>);

impl MatchingService for ServiceAdapter {
    fn upload(&self, vcards: Vcards) {
        self.0.upload(vcards.vcards);
    }

    fn users_and_uploaded_by(
        &self,
        cursor: Option<String>,
        count: Option<u32>,
        callback: Box<dyn ContactsCallback<Contacts>>,
    ) {
        self.0
            .users_and_uploaded_by(cursor, count, MobileLookupResponder::new(callback));
    }

    fn delete_all(&self, callback: Box<dyn ContactsCallback<()>>) {
        self.0.delete_all(MobileDeleteResponder::new(callback));
    }
}

pub(crate) struct LookupCallbackAdapter(pub(crate) Box<dyn MobileLookupCallback>);

impl ContactsCallback<Contacts> for LookupCallbackAdapter {
    fn on_result(self: Box<Self>, result: ContactsResult<Contacts>) {
        match result {
            Ok(contacts) => self.0.on_success(contacts.into()),
            Err(e) => self.0.on_failure(e.into()),
        }
    }
}

pub(crate) struct DeleteCallbackAdapter(pub(crate) Box<dyn MobileDeleteCallback>);

impl ContactsCallback<()> for DeleteCallbackAdapter {
    fn on_result(self: Box<Self>, result: ContactsResult<()>) {
        match result {
            Ok(()) => self.0.on_success(),
            Err(e) => self.0.on_failure(e.into()),
        }
    }
}
