// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Matching Service
//!
//! Interface to the remote service that stores uploaded contacts and matches
//! them against registered users. Transport, serialization and retries are
//! the implementation's business.

use serde::{Deserialize, Serialize};

use crate::callback::ContactsCallback;

/// Batch of vCard-encoded contacts ready for upload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vcards {
    pub vcards: Vec<String>,
}

impl Vcards {
    pub fn new(vcards: Vec<String>) -> Self {
        Vcards { vcards }
    }

    pub fn len(&self) -> usize {
        self.vcards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vcards.is_empty()
    }
}

/// A registered user who appears in the uploaded address book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchedUser {
    pub id: u64,
    pub id_str: String,
}

/// One page of lookup results.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contacts {
    pub users: Vec<MatchedUser>,
    /// Cursor for the next page, absent on the last page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_cursor: Option<String>,
}

impl Contacts {
    /// Returns true if another page can be requested.
    pub fn has_next_page(&self) -> bool {
        self.next_cursor.as_deref().is_some_and(|c| !c.is_empty())
    }
}

/// Remote contact matching operations.
///
/// Lookup and deletion complete asynchronously: the implementation invokes
/// the callback exactly once, from whatever thread its transport uses.
pub trait MatchingService: Send + Sync {
    /// Uploads a batch of contacts. Fire-and-forget.
    fn upload(&self, vcards: Vcards);

    /// Fetches a page of matched users.
    ///
    /// `count == None` lets the service pick its default page size.
    fn users_and_uploaded_by(
        &self,
        cursor: Option<String>,
        count: Option<u32>,
        callback: Box<dyn ContactsCallback<Contacts>>,
    );

    /// Deletes every contact this user uploaded.
    fn delete_all(&self, callback: Box<dyn ContactsCallback<()>>);
}
