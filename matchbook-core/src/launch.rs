// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Platform Launch Requests
//!
//! Decides whether an upload starts with the permission screen or goes
//! straight to the background upload service, and builds the request the
//! platform needs to start that component.

use tracing::debug;

use crate::config::ContactsConfig;
use crate::preferences::ContactsPreferences;

/// Component a launch request points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LaunchTarget {
    /// Screen asking the user for contact import consent.
    PermissionActivity,
    /// Background service that reads and uploads the address book.
    UploadService,
}

/// Fully qualified platform component.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ComponentName {
    /// Package of the host application.
    pub package: String,
    /// Class implementing the component.
    pub class_name: String,
}

impl ComponentName {
    pub fn new(package: &str, class_name: &str) -> Self {
        ComponentName {
            package: package.to_string(),
            class_name: class_name.to_string(),
        }
    }
}

/// Structured instruction to start a platform component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchRequest {
    pub target: LaunchTarget,
    pub component: ComponentName,
    /// Theme extra for the permission screen.
    pub theme_resource_id: Option<u32>,
    /// Start in a new task (required when launching from a non-activity context).
    pub new_task: bool,
}

/// The host platform's ability to start components.
pub trait PlatformContext: Send + Sync {
    /// Package the components live in.
    fn package_name(&self) -> String;

    /// Starts a UI component.
    fn start_activity(&self, request: LaunchRequest);

    /// Starts a background component.
    fn start_service(&self, request: LaunchRequest);
}

/// Chooses and issues the launch for an upload flow.
///
/// Consent is read on every call; nothing is cached between calls.
#[derive(Debug, Clone)]
pub struct LaunchDispatcher {
    permission_activity: String,
    upload_service: String,
}

impl LaunchDispatcher {
    /// Creates a dispatcher for the components named in `config`.
    pub fn new(config: &ContactsConfig) -> Self {
        LaunchDispatcher {
            permission_activity: config.permission_activity.clone(),
            upload_service: config.upload_service.clone(),
        }
    }

    /// Maps consent to the component to start.
    pub fn target_for(consent: bool) -> LaunchTarget {
        if consent {
            LaunchTarget::UploadService
        } else {
            LaunchTarget::PermissionActivity
        }
    }

    /// Builds the request for `target` inside `package`.
    pub fn build_request(
        &self,
        target: LaunchTarget,
        package: &str,
        style_id: u32,
    ) -> LaunchRequest {
        match target {
            LaunchTarget::PermissionActivity => LaunchRequest {
                target,
                component: ComponentName::new(package, &self.permission_activity),
                theme_resource_id: Some(style_id),
                new_task: true,
            },
            LaunchTarget::UploadService => LaunchRequest {
                target,
                component: ComponentName::new(package, &self.upload_service),
                theme_resource_id: None,
                new_task: false,
            },
        }
    }

    /// Reads consent once and issues exactly one launch on `context`.
    pub fn dispatch(
        &self,
        context: &dyn PlatformContext,
        preferences: &dyn ContactsPreferences,
        style_id: u32,
    ) -> LaunchTarget {
        let target = Self::target_for(preferences.has_contact_import_permission_granted());
        let request = self.build_request(target, &context.package_name(), style_id);

        debug!(?target, class = %request.component.class_name, "launching contacts upload");

        match target {
            LaunchTarget::PermissionActivity => context.start_activity(request),
            LaunchTarget::UploadService => context.start_service(request),
        }
        target
    }
}
