// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Lookup pagination.
//!
//! Page sizes outside the accepted range are dropped rather than rejected,
//! so the service falls back to its own default. A caller cannot tell an
//! ignored count from an omitted one.

use crate::config::{ContactsConfig, MAX_MATCHES_PER_PAGE, MIN_MATCHES_PER_PAGE};

/// Inclusive page size range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageBounds {
    pub min: u32,
    pub max: u32,
}

impl Default for PageBounds {
    fn default() -> Self {
        PageBounds {
            min: MIN_MATCHES_PER_PAGE,
            max: MAX_MATCHES_PER_PAGE,
        }
    }
}

impl PageBounds {
    pub fn from_config(config: &ContactsConfig) -> Self {
        PageBounds {
            min: config.min_matches_per_page,
            max: config.max_matches_per_page,
        }
    }

    /// Returns `count` if it lies within the bounds, `None` otherwise.
    pub fn normalize(&self, count: Option<u32>) -> Option<u32> {
        count.filter(|c| (self.min..=self.max).contains(c))
    }
}

/// Parameters forwarded to the matching service for one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupQuery {
    /// Opaque cursor. `Some("")` requests the first page.
    pub cursor: Option<String>,
    /// Normalized page size.
    pub count: Option<u32>,
}

impl LookupQuery {
    /// Builds a query, normalizing `count` against `bounds`. The cursor is kept as given.
    pub fn new(cursor: Option<String>, count: Option<u32>, bounds: PageBounds) -> Self {
        LookupQuery {
            cursor,
            count: bounds.normalize(count),
        }
    }
}
