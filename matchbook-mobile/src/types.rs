//! Mobile-friendly data types.
//!
//! These types are wrappers around matchbook-core types that are compatible
//! with UniFFI for cross-language bindings.

use matchbook_core::{
    Contacts, ContactsConfig, ContactsError, ContactsEvent, LaunchRequest, LaunchTarget,
    MatchedUser,
};

/// Component targeted by a launch request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, uniffi::Enum)]
pub enum MobileLaunchTarget {
    PermissionActivity,
    UploadService,
}

impl From<LaunchTarget> for MobileLaunchTarget {
    fn from(target: LaunchTarget) -> Self {
        match target {
            LaunchTarget::PermissionActivity => MobileLaunchTarget::PermissionActivity,
            LaunchTarget::UploadService => MobileLaunchTarget::UploadService,
        }
    }
}

/// Launch request handed to the platform.
///
/// On Android this maps to an explicit `Intent`: `package`/`class_name` form
/// the component, `theme_resource_id` goes into the theme extra and
/// `new_task` sets `FLAG_ACTIVITY_NEW_TASK`.
#[derive(Debug, Clone, PartialEq, Eq, uniffi::Record)]
pub struct MobileLaunchRequest {
    pub target: MobileLaunchTarget,
    pub package: String,
    pub class_name: String,
    pub theme_resource_id: Option<u32>,
    pub new_task: bool,
}

impl From<LaunchRequest> for MobileLaunchRequest {
    fn from(request: LaunchRequest) -> Self {
        MobileLaunchRequest {
            target: request.target.into(),
            package: request.component.package,
            class_name: request.component.class_name,
            theme_resource_id: request.theme_resource_id,
            new_task: request.new_task,
        }
    }
}

/// Mobile-friendly matched user.
#[derive(Debug, Clone, PartialEq, Eq, uniffi::Record)]
pub struct MobileMatchedUser {
    pub id: u64,
    pub id_str: String,
}

/// One page of matched users.
#[derive(Debug, Clone, PartialEq, Eq, uniffi::Record)]
pub struct MobileContacts {
    pub users: Vec<MobileMatchedUser>,
    pub next_cursor: Option<String>,
}

impl From<Contacts> for MobileContacts {
    fn from(contacts: Contacts) -> Self {
        MobileContacts {
            users: contacts
                .users
                .into_iter()
                .map(|u| MobileMatchedUser {
                    id: u.id,
                    id_str: u.id_str,
                })
                .collect(),
            next_cursor: contacts.next_cursor,
        }
    }
}

impl From<MobileContacts> for Contacts {
    fn from(contacts: MobileContacts) -> Self {
        Contacts {
            users: contacts
                .users
                .into_iter()
                .map(|u| MatchedUser {
                    id: u.id,
                    id_str: u.id_str,
                })
                .collect(),
            next_cursor: contacts.next_cursor,
        }
    }
}

/// Failure category of a remote operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, uniffi::Enum)]
pub enum MobileFailureKind {
    Network,
    Api,
    Unauthorized,
    RateLimited,
    Configuration,
    Serialization,
}

/// Failure of a remote operation, as reported by the platform service and
/// as handed back to app callbacks.
#[derive(Debug, Clone, PartialEq, Eq, uniffi::Record)]
pub struct MobileFailure {
    pub kind: MobileFailureKind,
    /// Service error code (only for `Api`).
    pub code: Option<i32>,
    pub message: String,
}

impl From<ContactsError> for MobileFailure {
    fn from(err: ContactsError) -> Self {
        let (kind, code, message) = match err {
            ContactsError::Network(m) => (MobileFailureKind::Network, None, m),
            ContactsError::Api { code, message } => (MobileFailureKind::Api, code, message),
            ContactsError::Unauthorized(m) => (MobileFailureKind::Unauthorized, None, m),
            ContactsError::RateLimited(m) => (MobileFailureKind::RateLimited, None, m),
            ContactsError::Configuration(m) => (MobileFailureKind::Configuration, None, m),
            ContactsError::Serialization(e) => {
                (MobileFailureKind::Serialization, None, e.to_string())
            }
        };
        MobileFailure {
            kind,
            code,
            message,
        }
    }
}

impl From<MobileFailure> for ContactsError {
    fn from(failure: MobileFailure) -> Self {
        match failure.kind {
            MobileFailureKind::Network => ContactsError::Network(failure.message),
            MobileFailureKind::Api => ContactsError::Api {
                code: failure.code,
                message: failure.message,
            },
            MobileFailureKind::Unauthorized => ContactsError::Unauthorized(failure.message),
            MobileFailureKind::RateLimited => ContactsError::RateLimited(failure.message),
            MobileFailureKind::Configuration => ContactsError::Configuration(failure.message),
            MobileFailureKind::Serialization => ContactsError::Serialization(
                <serde_json::Error as serde::de::Error>::custom(failure.message),
            ),
        }
    }
}

/// Mobile-friendly configuration.
#[derive(Debug, Clone, PartialEq, Eq, uniffi::Record)]
pub struct MobileContactsConfig {
    pub default_style_id: u32,
    pub min_matches_per_page: u32,
    pub max_matches_per_page: u32,
    pub permission_activity: String,
    pub upload_service: String,
}

impl From<ContactsConfig> for MobileContactsConfig {
    fn from(config: ContactsConfig) -> Self {
        MobileContactsConfig {
            default_style_id: config.default_style_id,
            min_matches_per_page: config.min_matches_per_page,
            max_matches_per_page: config.max_matches_per_page,
            permission_activity: config.permission_activity,
            upload_service: config.upload_service,
        }
    }
}

impl From<MobileContactsConfig> for ContactsConfig {
    fn from(config: MobileContactsConfig) -> Self {
        ContactsConfig {
            default_style_id: config.default_style_id,
            min_matches_per_page: config.min_matches_per_page,
            max_matches_per_page: config.max_matches_per_page,
            permission_activity: config.permission_activity,
            upload_service: config.upload_service,
        }
    }
}

/// Analytics event delivered to the platform sink.
#[derive(Debug, Clone, PartialEq, Eq, uniffi::Enum)]
pub enum MobileContactsEvent {
    UploadStarted {
        operation_id: String,
        style_id: u32,
    },
    LookupStarted {
        operation_id: String,
        count: Option<u32>,
        has_cursor: bool,
    },
    LookupSucceeded {
        operation_id: String,
        match_count: u64,
        has_next_page: bool,
    },
    LookupFailed {
        operation_id: String,
        error: String,
    },
    DeletionStarted {
        operation_id: String,
    },
    DeletionSucceeded {
        operation_id: String,
    },
    DeletionFailed {
        operation_id: String,
        error: String,
    },
}

impl From<ContactsEvent> for MobileContactsEvent {
    fn from(event: ContactsEvent) -> Self {
        match event {
            ContactsEvent::UploadStarted(d) => MobileContactsEvent::UploadStarted {
                operation_id: d.operation_id,
                style_id: d.style_id,
            },
            ContactsEvent::LookupStarted(d) => MobileContactsEvent::LookupStarted {
                operation_id: d.operation_id,
                count: d.count,
                has_cursor: d.has_cursor,
            },
            ContactsEvent::LookupSucceeded(d) => MobileContactsEvent::LookupSucceeded {
                operation_id: d.operation_id,
                match_count: d.match_count as u64,
                has_next_page: d.has_next_page,
            },
            ContactsEvent::LookupFailed(d) => MobileContactsEvent::LookupFailed {
                operation_id: d.operation_id,
                error: d.error,
            },
            ContactsEvent::DeletionStarted(d) => MobileContactsEvent::DeletionStarted {
                operation_id: d.operation_id,
            },
            ContactsEvent::DeletionSucceeded(d) => MobileContactsEvent::DeletionSucceeded {
                operation_id: d.operation_id,
            },
            ContactsEvent::DeletionFailed(d) => MobileContactsEvent::DeletionFailed {
                operation_id: d.operation_id,
                error: d.error,
            },
        }
    }
}
