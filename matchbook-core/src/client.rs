// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Contacts Client
//!
//! Main entry point for contact import.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use matchbook_core::{CallbackFn, ContactsClient, EventDispatcher, InMemoryPreferences};
//!
//! let client = ContactsClient::builder()
//!     .context(Arc::new(my_platform))
//!     .service(Arc::new(my_matching_service))
//!     .preferences(Arc::new(InMemoryPreferences::new()))
//!     .events(Arc::new(EventDispatcher::new()))
//!     .build()?;
//!
//! // Asks for consent first, or goes straight to the upload service
//! client.start_contacts_upload();
//!
//! client.lookup_contact_matches(Some(String::new()), Some(20), CallbackFn::new(|page| {
//!     println!("{:?}", page);
//! }));
//! ```

use std::sync::Arc;

use tracing::debug;

use crate::callback::{
    ContactsCallback, DeleteContactsCallbackWrapper, FoundContactsCallbackWrapper,
};
use crate::config::ContactsConfig;
use crate::error::{ContactsError, ContactsResult};
use crate::events::{
    ContactsDeletionStartDetails, ContactsLookupStartDetails, ContactsUploadStartDetails,
    EventCollector,
};
use crate::launch::{LaunchDispatcher, LaunchTarget, PlatformContext};
use crate::lookup::{LookupQuery, PageBounds};
use crate::preferences::ContactsPreferences;
use crate::service::{Contacts, MatchingService, Vcards};

/// Coordinates contact upload, match lookup and deletion.
///
/// Holds only shared handles to its collaborators, so one instance can be
/// used from any thread.
pub struct ContactsClient {
    context: Arc<dyn PlatformContext>,
    service: Arc<dyn MatchingService>,
    preferences: Arc<dyn ContactsPreferences>,
    events: Arc<dyn EventCollector>,
    launcher: LaunchDispatcher,
    bounds: PageBounds,
    config: ContactsConfig,
}

impl ContactsClient {
    /// Creates a client from its collaborators.
    pub fn new(
        context: Arc<dyn PlatformContext>,
        service: Arc<dyn MatchingService>,
        preferences: Arc<dyn ContactsPreferences>,
        events: Arc<dyn EventCollector>,
        config: ContactsConfig,
    ) -> ContactsResult<Self> {
        config.validate()?;
        Ok(ContactsClient {
            context,
            service,
            preferences,
            events,
            launcher: LaunchDispatcher::new(&config),
            bounds: PageBounds::from_config(&config),
            config,
        })
    }

    /// Returns a builder.
    pub fn builder() -> ContactsClientBuilder {
        ContactsClientBuilder::new()
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &ContactsConfig {
        &self.config
    }

    // === Upload ===

    /// Starts the upload flow with the default style.
    pub fn start_contacts_upload(&self) -> LaunchTarget {
        self.start_contacts_upload_with_style(self.config.default_style_id)
    }

    /// Starts the upload flow, styling the permission screen with `style_id`.
    ///
    /// Always reports an upload start, whether or not consent is present.
    pub fn start_contacts_upload_with_style(&self, style_id: u32) -> LaunchTarget {
        self.events
            .start_contacts_upload(ContactsUploadStartDetails::new(style_id));
        self.start_contacts_upload_in(self.context.as_ref(), style_id)
    }

    /// Launches the permission screen or the upload service on `context`.
    ///
    /// Issues exactly one launch and reports no event.
    pub fn start_contacts_upload_in(
        &self,
        context: &dyn PlatformContext,
        style_id: u32,
    ) -> LaunchTarget {
        self.launcher
            .dispatch(context, self.preferences.as_ref(), style_id)
    }

    /// Returns whether the user granted contact import.
    pub fn has_user_granted_permission(&self) -> bool {
        self.preferences.has_contact_import_permission_granted()
    }

    /// Sends a batch of contacts to the matching service as-is.
    pub fn upload_contacts(&self, vcards: Vcards) {
        self.service.upload(vcards);
    }

    // === Matches ===

    /// Requests a page of users matched against the uploaded contacts.
    ///
    /// Counts outside the configured page bounds are dropped and the service
    /// default applies.
    pub fn lookup_contact_matches<C>(&self, cursor: Option<String>, count: Option<u32>, callback: C)
    where
        C: ContactsCallback<Contacts> + 'static,
    {
        let query = LookupQuery::new(cursor, count, self.bounds);
        if query.count != count {
            debug!(requested = ?count, "lookup count outside page bounds, using service default");
        }

        let details = ContactsLookupStartDetails::new(query.count, query.cursor.is_some());
        let wrapper = FoundContactsCallbackWrapper::new(
            Box::new(callback),
            self.events.clone(),
            &details.operation_id,
        );
        self.events.start_find_matches(details);

        debug!(count = ?query.count, "looking up contact matches");
        self.service
            .users_and_uploaded_by(query.cursor, query.count, Box::new(wrapper));
    }

    // === Deletion ===

    /// Deletes every contact this user uploaded. Not gated by consent.
    pub fn delete_all_uploaded_contacts<C>(&self, callback: C)
    where
        C: ContactsCallback<()> + 'static,
    {
        let details = ContactsDeletionStartDetails::new();
        let wrapper = DeleteContactsCallbackWrapper::new(
            Box::new(callback),
            self.events.clone(),
            &details.operation_id,
        );
        self.events.start_delete_contacts(details);

        debug!("deleting uploaded contacts");
        self.service.delete_all(Box::new(wrapper));
    }
}

/// Builder for [`ContactsClient`].
#[derive(Default)]
pub struct ContactsClientBuilder {
    config: ContactsConfig,
    context: Option<Arc<dyn PlatformContext>>,
    service: Option<Arc<dyn MatchingService>>,
    preferences: Option<Arc<dyn ContactsPreferences>>,
    events: Option<Arc<dyn EventCollector>>,
}

impl ContactsClientBuilder {
    /// Creates a new builder with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the configuration.
    pub fn config(mut self, config: ContactsConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the platform context used by `start_contacts_upload`.
    pub fn context(mut self, context: Arc<dyn PlatformContext>) -> Self {
        self.context = Some(context);
        self
    }

    /// Sets the matching service.
    pub fn service(mut self, service: Arc<dyn MatchingService>) -> Self {
        self.service = Some(service);
        self
    }

    /// Sets the consent source.
    pub fn preferences(mut self, preferences: Arc<dyn ContactsPreferences>) -> Self {
        self.preferences = Some(preferences);
        self
    }

    /// Sets the analytics collector.
    pub fn events(mut self, events: Arc<dyn EventCollector>) -> Self {
        self.events = Some(events);
        self
    }

    /// Builds the client, failing if a collaborator is missing or the
    /// configuration is invalid.
    pub fn build(self) -> ContactsResult<ContactsClient> {
        let missing = |name: &str| ContactsError::Configuration(format!("{} not set", name));

        ContactsClient::new(
            self.context.ok_or_else(|| missing("platform context"))?,
            self.service.ok_or_else(|| missing("matching service"))?,
            self.preferences.ok_or_else(|| missing("preferences"))?,
            self.events.ok_or_else(|| missing("event collector"))?,
            self.config,
        )
    }
}
