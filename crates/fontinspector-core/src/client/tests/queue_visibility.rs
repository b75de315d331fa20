use crate::models::{InspectionStatus, QueueCounts};

use super::test_app;

#[test]
fn empty_queue_is_hidden() {
    let (_temp, app) = test_app();
    let snapshot = app.queue_snapshot(None).expect("snapshot");
    assert!(!snapshot.visible);
    assert!(snapshot.entries.is_empty());
    assert_eq!(snapshot.counts, QueueCounts::default());
}

#[test]
fn all_completed_queue_is_hidden() {
    let (_temp, app) = test_app();
    for index in 0..2 {
        let inspection = app
            .create_inspection(&format!("https://example.com/{index}"), None)
            .expect("inspection");
        app.update_inspection_progress(
            &inspection.id,
            InspectionStatus::Completed,
            Some(100),
            None,
        )
        .expect("complete");
    }

    let snapshot = app.queue_snapshot(None).expect("snapshot");
    assert!(!snapshot.visible);
    assert_eq!(snapshot.counts.completed, 2);
}

#[test]
fn any_non_terminal_or_failed_entry_keeps_the_queue_visible() {
    let (_temp, app) = test_app();
    let completed = app
        .create_inspection("https://example.com/done", None)
        .expect("completed");
    app.update_inspection_progress(&completed.id, InspectionStatus::Completed, Some(100), None)
        .expect("complete");
    let failed = app
        .create_inspection("https://example.com/broken", None)
        .expect("failed");
    app.update_inspection_progress(
        &failed.id,
        InspectionStatus::Failed,
        None,
        Some("http status 500"),
    )
    .expect("fail");

    let snapshot = app.queue_snapshot(None).expect("snapshot");
    assert!(snapshot.visible);
    assert_eq!(snapshot.counts.completed, 1);
    assert_eq!(snapshot.counts.failed, 1);

    let failed_entry = snapshot
        .entries
        .iter()
        .find(|entry| entry.id == failed.id)
        .expect("failed entry");
    assert_eq!(failed_entry.error_message.as_deref(), Some("http status 500"));

    // A pending-only queue is visible too.
    let (_temp, app) = test_app();
    app.create_inspection("https://example.com/", None)
        .expect("pending");
    let snapshot = app.queue_snapshot(None).expect("snapshot");
    assert!(snapshot.visible);
    assert_eq!(snapshot.counts.pending, 1);
}

#[test]
fn project_scoped_snapshot_resolves_the_set_and_skips_dangling_ids() {
    let (_temp, app) = test_app();
    let project = app
        .create_project("fonts", &["https://example.com/a".to_string()])
        .expect("project");
    let outside = app
        .create_inspection("https://example.com/outside", None)
        .expect("outside inspection");

    // A dangling member should be skipped, not an error.
    let mut ids = app
        .get_project_by_id(&project.id)
        .expect("project")
        .inspection_ids;
    ids.push("ghost".to_string());
    app.state
        .set_project_inspection_ids(&project.id, &ids)
        .expect("add ghost");

    let snapshot = app.queue_snapshot(Some(&project.id)).expect("snapshot");
    assert_eq!(snapshot.entries.len(), 1);
    assert!(snapshot.entries.iter().all(|entry| entry.id != outside.id));
    assert_eq!(snapshot.counts.pending, 1);
}
