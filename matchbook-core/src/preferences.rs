// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Contact Import Preferences
//!
//! Answers whether the user has agreed to upload their address book.
//! The permission screen records the decision; the coordinator only reads it.

use std::sync::atomic::{AtomicBool, Ordering};

/// Read access to the recorded contact-import consent.
pub trait ContactsPreferences: Send + Sync {
    /// Returns true if the user granted contact import.
    fn has_contact_import_permission_granted(&self) -> bool;
}

/// Process-local preference store.
///
/// Hosts that persist the decision elsewhere implement [`ContactsPreferences`]
/// themselves; this one is enough for tests and for apps that ask every launch.
#[derive(Debug, Default)]
pub struct InMemoryPreferences {
    granted: AtomicBool,
}

impl InMemoryPreferences {
    /// Creates a store with no consent recorded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store with the given consent already recorded.
    pub fn with_permission(granted: bool) -> Self {
        InMemoryPreferences {
            granted: AtomicBool::new(granted),
        }
    }

    /// Records the user's decision.
    pub fn set_contact_import_permission_granted(&self, granted: bool) {
        self.granted.store(granted, Ordering::SeqCst);
    }
}

impl ContactsPreferences for InMemoryPreferences {
    fn has_contact_import_permission_granted(&self) -> bool {
        self.granted.load(Ordering::SeqCst)
    }
}
