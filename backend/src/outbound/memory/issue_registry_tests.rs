//! Tests for the in-memory issue registry.

use std::sync::Arc;
use std::thread;

use chrono::{DateTime, Duration, Local, TimeZone, Utc};
use mockable::Clock;
use parking_lot::Mutex;
use rstest::{fixture, rstest};

use super::*;
use crate::domain::{AssigneeChange, IssueStatus, UserId};
use crate::outbound::memory::InMemoryUserRegistry;

/// Clock advancing one minute on every reading.
struct SteppingClock {
    now: Mutex<DateTime<Utc>>,
}

impl SteppingClock {
    fn starting_at(start: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(start),
        }
    }
}

impl Clock for SteppingClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        let mut now = self.now.lock();
        let current = *now;
        *now = current + Duration::minutes(1);
        current
    }
}

fn start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0)
        .single()
        .expect("valid timestamp")
}

#[fixture]
fn registry() -> InMemoryIssueRegistry {
    InMemoryIssueRegistry::new(
        Arc::new(InMemoryUserRegistry::seeded()),
        Arc::new(SteppingClock::starting_at(start())),
    )
}

fn assigned(id: u64) -> AssigneeChange {
    AssigneeChange::Assign(UserId::new(id))
}

#[rstest]
fn create_without_assignee_is_pending(registry: InMemoryIssueRegistry) {
    let issue = registry
        .create(NewIssue::new("Fix bug", "login fails"))
        .expect("create");

    assert_eq!(issue.id, IssueId::new(1));
    assert_eq!(issue.status, IssueStatus::Pending);
    assert!(issue.assignee.is_none());
    assert_eq!(issue.created_at, issue.updated_at);
}

#[rstest]
fn create_with_assignee_starts_in_progress(registry: InMemoryIssueRegistry) {
    let issue = registry
        .create(NewIssue::new("Fix bug", "").assigned_to(UserId::new(1)))
        .expect("create");

    assert_eq!(issue.status, IssueStatus::InProgress);
    let assignee = issue.assignee.expect("assignee snapshot");
    assert_eq!(assignee.name(), "김개발");
    assert_eq!(assignee.email(), "kim@example.com");
}

#[rstest]
fn failed_create_consumes_no_identifier(registry: InMemoryIssueRegistry) {
    let err = registry
        .create(NewIssue::new("Fix bug", "").assigned_to(UserId::new(999)))
        .expect_err("unknown assignee");
    assert_eq!(err, IssueRegistryError::user_not_found(UserId::new(999)));
    assert!(registry.list(None).expect("list").is_empty());

    let issue = registry.create(NewIssue::new("Next", "")).expect("create");
    assert_eq!(issue.id, IssueId::new(1));
}

#[rstest]
fn identifiers_increase_without_reuse(registry: InMemoryIssueRegistry) {
    let ids: Vec<_> = (0..3)
        .map(|n| {
            registry
                .create(NewIssue::new(format!("issue {n}"), ""))
                .expect("create")
                .id
        })
        .collect();

    assert_eq!(ids, [IssueId::new(1), IssueId::new(2), IssueId::new(3)]);
}

#[rstest]
fn get_unknown_issue_fails(registry: InMemoryIssueRegistry) {
    let err = registry.get(IssueId::new(42)).expect_err("missing");
    assert_eq!(err, IssueRegistryError::issue_not_found(IssueId::new(42)));
}

#[rstest]
#[case(None, 3)]
#[case(Some(""), 3)]
#[case(Some("PENDING"), 2)]
#[case(Some("IN_PROGRESS"), 1)]
#[case(Some("COMPLETED"), 0)]
fn list_filters_by_status(
    registry: InMemoryIssueRegistry,
    #[case] filter: Option<&str>,
    #[case] expected: usize,
) {
    registry.create(NewIssue::new("a", "")).expect("create");
    registry
        .create(NewIssue::new("b", "").assigned_to(UserId::new(2)))
        .expect("create");
    registry.create(NewIssue::new("c", "")).expect("create");

    let issues = registry.list(filter).expect("list");

    assert_eq!(issues.len(), expected);
    if let Some(wanted) = filter.filter(|raw| !raw.is_empty()) {
        assert!(issues.iter().all(|issue| issue.status.as_str() == wanted));
    }
}

#[rstest]
#[case("DONE")]
#[case("pending")]
fn list_rejects_unknown_filter(registry: InMemoryIssueRegistry, #[case] filter: &str) {
    let err = registry.list(Some(filter)).expect_err("invalid filter");
    assert_eq!(err, IssueRegistryError::invalid_status(filter));
}

#[rstest]
fn assigning_pending_issue_moves_to_in_progress(registry: InMemoryIssueRegistry) {
    let created = registry.create(NewIssue::new("Fix bug", "")).expect("create");

    let updated = registry
        .update(created.id, IssueChanges::default().with_assignee(assigned(1)))
        .expect("update");

    assert_eq!(updated.status, IssueStatus::InProgress);
    assert_eq!(updated.assignee.map(|user| user.id()), Some(UserId::new(1)));
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at > created.updated_at);
}

#[rstest]
fn clearing_assignee_returns_issue_to_pending(registry: InMemoryIssueRegistry) {
    let created = registry
        .create(NewIssue::new("Fix bug", "").assigned_to(UserId::new(1)))
        .expect("create");

    let updated = registry
        .update(
            created.id,
            IssueChanges::default()
                .with_assignee(AssigneeChange::Clear)
                .with_status("IN_PROGRESS"),
        )
        .expect("update");

    assert_eq!(updated.status, IssueStatus::Pending);
    assert!(updated.assignee.is_none());
}

#[rstest]
fn completed_issue_is_locked(registry: InMemoryIssueRegistry) {
    let created = registry
        .create(NewIssue::new("Fix bug", "").assigned_to(UserId::new(1)))
        .expect("create");
    let completed = registry
        .update(created.id, IssueChanges::default().with_status("COMPLETED"))
        .expect("complete");
    assert_eq!(completed.status, IssueStatus::Completed);

    let err = registry
        .update(created.id, IssueChanges::default().with_title("again"))
        .expect_err("locked");

    assert_eq!(
        err,
        IssueRegistryError::issue_locked(created.id, IssueStatus::Completed)
    );
    let stored = registry.get(created.id).expect("get");
    assert_eq!(stored, completed);
}

#[rstest]
fn rejected_update_changes_nothing(registry: InMemoryIssueRegistry) {
    let created = registry.create(NewIssue::new("Fix bug", "")).expect("create");

    let err = registry
        .update(
            created.id,
            IssueChanges::default()
                .with_title("Renamed")
                .with_status("COMPLETED"),
        )
        .expect_err("needs assignee");

    assert_eq!(
        err.to_string(),
        "cannot set status to COMPLETED without assignee"
    );
    assert_eq!(registry.get(created.id).expect("get"), created);
}

#[rstest]
fn empty_update_only_refreshes_timestamp(registry: InMemoryIssueRegistry) {
    let created = registry
        .create(NewIssue::new("Fix bug", "login fails").assigned_to(UserId::new(2)))
        .expect("create");

    let updated = registry
        .update(created.id, IssueChanges::default())
        .expect("update");

    assert_eq!(updated.title, created.title);
    assert_eq!(updated.description, created.description);
    assert_eq!(updated.status, IssueStatus::InProgress);
    assert_eq!(updated.assignee, created.assignee);
    assert_eq!(updated.created_at, created.created_at);
    assert_eq!(updated.updated_at, created.updated_at + Duration::minutes(1));
}

#[rstest]
fn update_with_unknown_assignee_fails(registry: InMemoryIssueRegistry) {
    let created = registry.create(NewIssue::new("Fix bug", "")).expect("create");

    let err = registry
        .update(created.id, IssueChanges::default().with_assignee(assigned(7)))
        .expect_err("unknown user");

    assert_eq!(err, IssueRegistryError::user_not_found(UserId::new(7)));
}

#[rstest]
fn update_unknown_issue_fails(registry: InMemoryIssueRegistry) {
    let err = registry
        .update(IssueId::new(5), IssueChanges::default())
        .expect_err("missing");
    assert_eq!(err, IssueRegistryError::issue_not_found(IssueId::new(5)));
}

#[rstest]
fn snapshots_are_detached_from_store(registry: InMemoryIssueRegistry) {
    let created = registry.create(NewIssue::new("Fix bug", "")).expect("create");

    registry
        .update(created.id, IssueChanges::default().with_description("more"))
        .expect("update");

    assert_eq!(created.description, "");
    assert_eq!(
        registry.get(created.id).expect("get").description,
        "more"
    );
}

#[rstest]
fn concurrent_creates_allocate_distinct_identifiers(registry: InMemoryIssueRegistry) {
    let registry = Arc::new(registry);

    let handles: Vec<_> = (0..8)
        .map(|n| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                registry
                    .create(NewIssue::new(format!("issue {n}"), ""))
                    .expect("create")
                    .id
            })
        })
        .collect();
    let mut ids: Vec<_> = handles
        .into_iter()
        .map(|handle| handle.join().expect("thread"))
        .collect();
    ids.sort();
    ids.dedup();

    assert_eq!(ids.len(), 8);
    assert_eq!(registry.list(None).expect("list").len(), 8);
}
