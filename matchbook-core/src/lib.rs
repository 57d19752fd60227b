//! Matchbook Core Library
//!
//! Client-side coordinator for contact import: asking for consent,
//! starting the address book upload, paging through matched users and
//! deleting uploaded contacts. Platform UI, the remote service, analytics
//! and preference storage are supplied by the host through traits.

pub mod callback;
pub mod client;
pub mod config;
pub mod error;
pub mod events;
pub mod launch;
pub mod lookup;
pub mod preferences;
pub mod service;

pub use callback::{
    CallbackFn, ContactsCallback, DeleteContactsCallbackWrapper, FoundContactsCallbackWrapper,
};
pub use client::{ContactsClient, ContactsClientBuilder};
pub use config::{
    ContactsConfig, DEFAULT_STYLE_ID, MAX_MATCHES_PER_PAGE, MIN_MATCHES_PER_PAGE,
    PERMISSION_ACTIVITY, UPLOAD_SERVICE,
};
pub use error::{ContactsError, ContactsResult};
pub use events::{
    ContactsDeletionStartDetails, ContactsDeletionSuccessDetails, ContactsEvent,
    ContactsEventHandler, ContactsFailureDetails, ContactsLookupStartDetails,
    ContactsLookupSuccessDetails, ContactsUploadStartDetails, EventCollector, EventDispatcher,
};
pub use launch::{ComponentName, LaunchDispatcher, LaunchRequest, LaunchTarget, PlatformContext};
pub use lookup::{LookupQuery, PageBounds};
pub use preferences::{ContactsPreferences, InMemoryPreferences};
pub use service::{Contacts, MatchedUser, MatchingService, Vcards};
