// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Common Test Utilities
//!
//! Recording fakes for every collaborator of `ContactsClient`. All fakes can
//! share one journal so tests can assert on cross-collaborator ordering.

#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use matchbook_core::*;

pub const TEST_PACKAGE: &str = "com.example.contacts";

pub type Journal = Arc<Mutex<Vec<String>>>;

pub fn journal() -> Journal {
    Arc::new(Mutex::new(Vec::new()))
}

/// Routes `tracing` output to the test harness. Set `RUST_LOG` to see it.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn note(journal: &Journal, entry: &str) {
    journal.lock().unwrap().push(entry.to_string());
}

// === Platform ===

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Launch {
    Activity(LaunchRequest),
    Service(LaunchRequest),
}

pub struct FakeContext {
    journal: Journal,
    pub launches: Mutex<Vec<Launch>>,
}

impl FakeContext {
    pub fn new(journal: Journal) -> Self {
        FakeContext {
            journal,
            launches: Mutex::new(Vec::new()),
        }
    }

    pub fn launches(&self) -> Vec<Launch> {
        self.launches.lock().unwrap().clone()
    }
}

impl PlatformContext for FakeContext {
    fn package_name(&self) -> String {
        TEST_PACKAGE.to_string()
    }

    fn start_activity(&self, request: LaunchRequest) {
        note(&self.journal, "start_activity");
        self.launches.lock().unwrap().push(Launch::Activity(request));
    }

    fn start_service(&self, request: LaunchRequest) {
        note(&self.journal, "start_service");
        self.launches.lock().unwrap().push(Launch::Service(request));
    }
}

// === Preferences ===

#[derive(Default)]
pub struct FakePreferences {
    granted: AtomicBool,
    pub reads: AtomicUsize,
}

impl FakePreferences {
    pub fn new(granted: bool) -> Self {
        FakePreferences {
            granted: AtomicBool::new(granted),
            reads: AtomicUsize::new(0),
        }
    }

    pub fn set(&self, granted: bool) {
        self.granted.store(granted, Ordering::SeqCst);
    }

    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

impl ContactsPreferences for FakePreferences {
    fn has_contact_import_permission_granted(&self) -> bool {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.granted.load(Ordering::SeqCst)
    }
}

// === Matching service ===

pub struct LookupCall {
    pub cursor: Option<String>,
    pub count: Option<u32>,
    pub callback: Option<Box<dyn ContactsCallback<Contacts>>>,
}

pub struct FakeService {
    journal: Journal,
    pub uploads: Mutex<Vec<Vcards>>,
    pub lookups: Mutex<Vec<LookupCall>>,
    pub deletions: Mutex<Vec<Option<Box<dyn ContactsCallback<()>>>>>,
}

impl FakeService {
    pub fn new(journal: Journal) -> Self {
        FakeService {
            journal,
            uploads: Mutex::new(Vec::new()),
            lookups: Mutex::new(Vec::new()),
            deletions: Mutex::new(Vec::new()),
        }
    }

    pub fn lookup_count(&self) -> usize {
        self.lookups.lock().unwrap().len()
    }

    pub fn deletion_count(&self) -> usize {
        self.deletions.lock().unwrap().len()
    }

    /// Returns (cursor, count) of the lookup at `index`.
    pub fn lookup_args(&self, index: usize) -> (Option<String>, Option<u32>) {
        let lookups = self.lookups.lock().unwrap();
        (lookups[index].cursor.clone(), lookups[index].count)
    }

    /// Completes the lookup at `index` the way the transport would.
    pub fn complete_lookup(&self, index: usize, result: ContactsResult<Contacts>) {
        let callback = self.lookups.lock().unwrap()[index]
            .callback
            .take()
            .expect("lookup already completed");
        callback.on_result(result);
    }

    /// Completes the deletion at `index`.
    pub fn complete_deletion(&self, index: usize, result: ContactsResult<()>) {
        let callback = self.deletions.lock().unwrap()[index]
            .take()
            .expect("deletion already completed");
        callback.on_result(result);
    }
}

impl MatchingService for FakeService {
    fn upload(&self, vcards: Vcards) {
        note(&self.journal, "upload");
        self.uploads.lock().unwrap().push(vcards);
    }

    fn users_and_uploaded_by(
        &self,
        cursor: Option<String>,
        count: Option<u32>,
        callback: Box<dyn ContactsCallback<Contacts>>,
    ) {
        note(&self.journal, "users_and_uploaded_by");
        self.lookups.lock().unwrap().push(LookupCall {
            cursor,
            count,
            callback: Some(callback),
        });
    }

    fn delete_all(&self, callback: Box<dyn ContactsCallback<()>>) {
        note(&self.journal, "delete_all");
        self.deletions.lock().unwrap().push(Some(callback));
    }
}

// === Events ===

pub struct RecordingCollector {
    journal: Journal,
    pub events: Mutex<Vec<ContactsEvent>>,
}

impl RecordingCollector {
    pub fn new(journal: Journal) -> Self {
        RecordingCollector {
            journal,
            events: Mutex::new(Vec::new()),
        }
    }

    pub fn events(&self) -> Vec<ContactsEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn count_where(&self, pred: impl Fn(&ContactsEvent) -> bool) -> usize {
        self.events.lock().unwrap().iter().filter(|e| pred(e)).count()
    }

    fn record(&self, name: &str, event: ContactsEvent) {
        note(&self.journal, name);
        self.events.lock().unwrap().push(event);
    }
}

impl EventCollector for RecordingCollector {
    fn start_contacts_upload(&self, details: ContactsUploadStartDetails) {
        self.record("start_contacts_upload", ContactsEvent::UploadStarted(details));
    }

    fn start_find_matches(&self, details: ContactsLookupStartDetails) {
        self.record("start_find_matches", ContactsEvent::LookupStarted(details));
    }

    fn start_delete_contacts(&self, details: ContactsDeletionStartDetails) {
        self.record("start_delete_contacts", ContactsEvent::DeletionStarted(details));
    }

    fn succeed_find_matches(&self, details: ContactsLookupSuccessDetails) {
        self.record("succeed_find_matches", ContactsEvent::LookupSucceeded(details));
    }

    fn failed_find_matches(&self, details: ContactsFailureDetails) {
        self.record("failed_find_matches", ContactsEvent::LookupFailed(details));
    }

    fn succeed_delete_contacts(&self, details: ContactsDeletionSuccessDetails) {
        self.record("succeed_delete_contacts", ContactsEvent::DeletionSucceeded(details));
    }

    fn failed_delete_contacts(&self, details: ContactsFailureDetails) {
        self.record("failed_delete_contacts", ContactsEvent::DeletionFailed(details));
    }
}

// === Fixture ===

pub struct Harness {
    pub journal: Journal,
    pub context: Arc<FakeContext>,
    pub service: Arc<FakeService>,
    pub preferences: Arc<FakePreferences>,
    pub events: Arc<RecordingCollector>,
    pub client: ContactsClient,
}

impl Harness {
    pub fn new(granted: bool) -> Self {
        Self::with_config(granted, ContactsConfig::default())
    }

    pub fn with_config(granted: bool, config: ContactsConfig) -> Self {
        init_tracing();
        let journal = journal();
        let context = Arc::new(FakeContext::new(journal.clone()));
        let service = Arc::new(FakeService::new(journal.clone()));
        let preferences = Arc::new(FakePreferences::new(granted));
        let events = Arc::new(RecordingCollector::new(journal.clone()));

        let client = ContactsClient::builder()
            .config(config)
            .context(context.clone())
            .service(service.clone())
            .preferences(preferences.clone())
            .events(events.clone())
            .build()
            .unwrap();

        Harness {
            journal,
            context,
            service,
            preferences,
            events,
            client,
        }
    }

    pub fn journal(&self) -> Vec<String> {
        self.journal.lock().unwrap().clone()
    }
}

/// Callback that stores whatever it receives.
pub fn capture<T: Send + 'static>() -> (
    CallbackFn<impl FnOnce(ContactsResult<T>) + Send>,
    Arc<Mutex<Option<ContactsResult<T>>>>,
) {
    let slot = Arc::new(Mutex::new(None));
    let slot_clone = slot.clone();
    let callback = CallbackFn::new(move |result: ContactsResult<T>| {
        *slot_clone.lock().unwrap() = Some(result);
    });
    (callback, slot)
}
