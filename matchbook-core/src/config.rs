// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration for the contacts coordinator

use serde::{Deserialize, Serialize};

use crate::error::{ContactsError, ContactsResult};

/// Style resource applied to the permission screen when the caller gives none.
pub const DEFAULT_STYLE_ID: u32 = 0x7f0d_0001;

/// Smallest page size the matching service accepts.
pub const MIN_MATCHES_PER_PAGE: u32 = 1;

/// Largest page size the matching service accepts.
pub const MAX_MATCHES_PER_PAGE: u32 = 100;

/// Class name of the permission screen.
pub const PERMISSION_ACTIVITY: &str = "app.matchbook.sdk.ContactsActivity";

/// Class name of the background upload service.
pub const UPLOAD_SERVICE: &str = "app.matchbook.sdk.ContactsUploadService";

/// Configuration for [`ContactsClient`](crate::ContactsClient).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactsConfig {
    /// Style used by `start_contacts_upload()`
    pub default_style_id: u32,

    /// Lower bound (inclusive) for lookup page sizes
    pub min_matches_per_page: u32,

    /// Upper bound (inclusive) for lookup page sizes
    pub max_matches_per_page: u32,

    /// Permission screen launched when consent is missing
    pub permission_activity: String,

    /// Background service launched when consent is present
    pub upload_service: String,
}

impl Default for ContactsConfig {
    fn default() -> Self {
        Self {
            default_style_id: DEFAULT_STYLE_ID,
            min_matches_per_page: MIN_MATCHES_PER_PAGE,
            max_matches_per_page: MAX_MATCHES_PER_PAGE,
            permission_activity: PERMISSION_ACTIVITY.to_string(),
            upload_service: UPLOAD_SERVICE.to_string(),
        }
    }
}

impl ContactsConfig {
    /// Loads a configuration from JSON.
    ///
    /// Missing fields fall back to their defaults. The result is validated.
    pub fn from_json(json: &str) -> ContactsResult<Self> {
        let config: ContactsConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Use a different default style
    pub fn with_default_style(mut self, style_id: u32) -> Self {
        self.default_style_id = style_id;
        self
    }

    /// Use different page size bounds
    pub fn with_page_bounds(mut self, min: u32, max: u32) -> Self {
        self.min_matches_per_page = min;
        self.max_matches_per_page = max;
        self
    }

    /// Use custom launch components (e.g. an app-provided permission screen)
    pub fn with_components(mut self, permission_activity: &str, upload_service: &str) -> Self {
        self.permission_activity = permission_activity.to_string();
        self.upload_service = upload_service.to_string();
        self
    }

    /// Checks that the page bounds describe a non-empty range starting at 1 or above
    /// and that both components are named.
    pub fn validate(&self) -> ContactsResult<()> {
        if self.min_matches_per_page == 0 {
            return Err(ContactsError::Configuration(
                "min_matches_per_page must be at least 1".into(),
            ));
        }
        if self.min_matches_per_page > self.max_matches_per_page {
            return Err(ContactsError::Configuration(format!(
                "min_matches_per_page ({}) exceeds max_matches_per_page ({})",
                self.min_matches_per_page, self.max_matches_per_page
            )));
        }
        if self.permission_activity.trim().is_empty() || self.upload_service.trim().is_empty() {
            return Err(ContactsError::Configuration(
                "launch components must not be empty".into(),
            ));
        }
        Ok(())
    }
}
