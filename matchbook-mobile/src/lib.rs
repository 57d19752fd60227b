//! Matchbook Mobile Bindings
//!
//! UniFFI bindings for Android and iOS platforms.
//! Exposes the contacts coordinator to the host app, which supplies the
//! launcher, preference store, network client and analytics sink as
//! callback interfaces.

use std::sync::Arc;

use matchbook_core::{ContactsClient, ContactsConfig, EventDispatcher, Vcards};

// === Modules ===

mod error;
mod platform;
mod types;

// Re-export public types
pub use error::MobileError;
pub use platform::{
    MobileDeleteCallback, MobileDeleteResponder, MobileLookupCallback, MobileLookupResponder,
    PlatformEventSink, PlatformLauncher, PlatformMatchingService, PlatformPreferences,
};
pub use types::{
    MobileContacts, MobileContactsConfig, MobileContactsEvent, MobileFailure, MobileFailureKind,
    MobileLaunchRequest, MobileLaunchTarget, MobileMatchedUser,
};

use platform::{
    DeleteCallbackAdapter, EventSinkHandler, LauncherContext, LookupCallbackAdapter,
    PreferencesAdapter, ServiceAdapter,
};

uniffi::setup_scaffolding!();

/// Returns the built-in configuration.
#[uniffi::export]
pub fn default_contacts_config() -> MobileContactsConfig {
    ContactsConfig::default().into()
}

/// Parses a JSON configuration, filling missing fields with defaults.
#[uniffi::export]
pub fn parse_contacts_config(json: String) -> Result<MobileContactsConfig, MobileError> {
    Ok(ContactsConfig::from_json(&json)?.into())
}

// === Main Interface ===

/// Contact import entry point for mobile platforms.
#[derive(uniffi::Object)]
pub struct MatchbookContacts {
    client: ContactsClient,
}

impl MatchbookContacts {
    fn build(
        launcher: Box<dyn PlatformLauncher>,
        preferences: Box<dyn PlatformPreferences>,
        service: Box<dyn PlatformMatchingService>,
        events: Box<dyn PlatformEventSink>,
        config: ContactsConfig,
    ) -> Result<Arc<Self>, MobileError> {
        let dispatcher = EventDispatcher::new().with_handler(EventSinkHandler(events));

        let client = ContactsClient::builder()
            .config(config)
            .context(Arc::new(LauncherContext(launcher)))
            .service(Arc::new(ServiceAdapter(service)))
            .preferences(Arc::new(PreferencesAdapter(preferences)))
            .events(Arc::new(dispatcher))
            .build()?;

        Ok(Arc::new(MatchbookContacts { client }))
    }
}

#[uniffi::export]
impl MatchbookContacts {
    /// Creates an instance with the default configuration.
    #[uniffi::constructor]
    pub fn new(
        launcher: Box<dyn PlatformLauncher>,
        preferences: Box<dyn PlatformPreferences>,
        service: Box<dyn PlatformMatchingService>,
        events: Box<dyn PlatformEventSink>,
    ) -> Result<Arc<Self>, MobileError> {
        Self::build(
            launcher,
            preferences,
            service,
            events,
            ContactsConfig::default(),
        )
    }

    /// Creates an instance with a custom configuration.
    #[uniffi::constructor]
    pub fn with_config(
        launcher: Box<dyn PlatformLauncher>,
        preferences: Box<dyn PlatformPreferences>,
        service: Box<dyn PlatformMatchingService>,
        events: Box<dyn PlatformEventSink>,
        config: MobileContactsConfig,
    ) -> Result<Arc<Self>, MobileError> {
        Self::build(launcher, preferences, service, events, config.into())
    }

    /// Returns the active configuration.
    pub fn config(&self) -> MobileContactsConfig {
        self.client.config().clone().into()
    }

    /// Starts the upload flow with the default style.
    pub fn start_contacts_upload(&self) -> MobileLaunchTarget {
        self.client.start_contacts_upload().into()
    }

    /// Starts the upload flow with a custom style for the permission screen.
    pub fn start_contacts_upload_with_style(&self, style_id: u32) -> MobileLaunchTarget {
        self.client.start_contacts_upload_with_style(style_id).into()
    }

    /// Launches on a caller-provided launcher (e.g. the current Activity).
    ///
    /// Reports no analytics event.
    pub fn start_contacts_upload_from(
        &self,
        launcher: Box<dyn PlatformLauncher>,
        style_id: u32,
    ) -> MobileLaunchTarget {
        let context = LauncherContext(launcher);
        self.client
            .start_contacts_upload_in(&context, style_id)
            .into()
    }

    /// Returns whether the user granted contact import.
    pub fn has_user_granted_permission(&self) -> bool {
        self.client.has_user_granted_permission()
    }

    /// Uploads vCard-encoded contacts.
    pub fn upload_contacts(&self, vcards: Vec<String>) {
        self.client.upload_contacts(Vcards::new(vcards));
    }

    /// Requests a page of matched users.
    ///
    /// `count` outside 1..=100 (or the configured bounds) is ignored.
    pub fn lookup_contact_matches(
        &self,
        cursor: Option<String>,
        count: Option<u32>,
        callback: Box<dyn MobileLookupCallback>,
    ) {
        self.client
            .lookup_contact_matches(cursor, count, LookupCallbackAdapter(callback));
    }

    /// Deletes all uploaded contacts.
    pub fn delete_all_uploaded_contacts(&self, callback: Box<dyn MobileDeleteCallback>) {
        self.client
            .delete_all_uploaded_contacts(DeleteCallbackAdapter(callback));
    }
}
