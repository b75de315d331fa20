use crate::models::RebuildOptions;

use super::test_app;

#[test]
fn rebuild_recomputes_referenced_project_sets_wholesale() {
    let (_temp, app) = test_app();
    let project = app.create_project("fonts", &[]).expect("project");
    let first = app
        .create_inspection("https://example.com/a", None)
        .expect("first");
    let second = app
        .create_inspection("https://example.com/b", None)
        .expect("second");

    // Drift: back-references exist but the project's set is garbage.
    app.state
        .set_inspection_project(&first.id, Some(&project.id))
        .expect("backref first");
    app.state
        .set_inspection_project(&second.id, Some(&project.id))
        .expect("backref second");
    app.state
        .set_project_inspection_ids(&project.id, &["ghost".to_string()])
        .expect("corrupt set");

    let report = app.rebuild_links().expect("rebuild");
    assert_eq!(report.projects_rebuilt, 1);
    assert_eq!(report.inspections_linked, 2);
    assert_eq!(report.orphaned_refs, 0);
    assert!(!report.dry_run);

    let mut expected = vec![first.id.clone(), second.id.clone()];
    expected.sort();
    let stored = app.get_project_by_id(&project.id).expect("project");
    assert_eq!(stored.inspection_ids, expected);
}

#[test]
fn rebuild_is_idempotent_across_consecutive_runs() {
    let (_temp, app) = test_app();
    let project = app
        .create_project(
            "fonts",
            &[
                "https://example.com/a".to_string(),
                "https://example.com/b".to_string(),
            ],
        )
        .expect("project");

    app.rebuild_links().expect("first rebuild");
    let first_pass = app.get_project_by_id(&project.id).expect("after first");
    app.rebuild_links().expect("second rebuild");
    let second_pass = app.get_project_by_id(&project.id).expect("after second");

    assert_eq!(first_pass.inspection_ids, second_pass.inspection_ids);
}

#[test]
fn rebuild_counts_orphaned_references_without_touching_them() {
    let (_temp, app) = test_app();
    let inspection = app
        .create_inspection("https://example.com/", None)
        .expect("inspection");
    app.state
        .set_inspection_project(&inspection.id, Some("vanished-project"))
        .expect("orphan backref");

    let report = app.rebuild_links().expect("rebuild");
    assert_eq!(report.projects_rebuilt, 0);
    assert_eq!(report.orphaned_refs, 1);
    assert_eq!(report.orphan_sample, vec!["vanished-project".to_string()]);

    // The orphaned back-reference itself is steady-state territory, not
    // rebuild's to clear.
    let stored = app
        .get_inspection_by_id(&inspection.id)
        .expect("inspection");
    assert_eq!(stored.project_id.as_deref(), Some("vanished-project"));
}

#[test]
fn rebuild_orphan_sample_is_bounded() {
    let (_temp, app) = test_app();
    for index in 0..4 {
        let inspection = app
            .create_inspection(&format!("https://example.com/{index}"), None)
            .expect("inspection");
        app.state
            .set_inspection_project(&inspection.id, Some(&format!("missing-{index}")))
            .expect("orphan backref");
    }

    let report = app
        .rebuild_links_with_options(RebuildOptions {
            dry_run: false,
            max_orphan_sample: 2,
        })
        .expect("rebuild");
    assert_eq!(report.orphaned_refs, 4);
    assert_eq!(report.orphan_sample.len(), 2);
}

#[test]
fn dry_run_reports_without_writing() {
    let (_temp, app) = test_app();
    let project = app.create_project("fonts", &[]).expect("project");
    let inspection = app
        .create_inspection("https://example.com/", None)
        .expect("inspection");
    app.state
        .set_inspection_project(&inspection.id, Some(&project.id))
        .expect("backref");

    let report = app
        .rebuild_links_with_options(RebuildOptions {
            dry_run: true,
            ..RebuildOptions::default()
        })
        .expect("dry run");
    assert!(report.dry_run);
    assert_eq!(report.projects_rebuilt, 1);
    assert_eq!(report.status.as_str(), "dry_run");

    let stored = app.get_project_by_id(&project.id).expect("project");
    assert!(stored.inspection_ids.is_empty());
}

#[test]
fn rebuild_runs_are_recorded() {
    let (_temp, app) = test_app();
    app.rebuild_links().expect("rebuild");
    let runs = app.list_rebuild_runs(10).expect("list runs");
    assert_eq!(runs.len(), 1);
    assert_eq!(runs[0].status, "success");
    assert!(runs[0].ended_at.is_some());
}

#[test]
fn untouched_projects_keep_their_sets() {
    let (_temp, app) = test_app();
    let project = app.create_project("stale", &[]).expect("project");
    app.state
        .set_project_inspection_ids(&project.id, &["ghost".to_string()])
        .expect("stale set");

    // No inspection references the project, so rebuild does not verify the
    // reverse direction.
    let report = app.rebuild_links().expect("rebuild");
    assert_eq!(report.projects_rebuilt, 0);
    let stored = app.get_project_by_id(&project.id).expect("project");
    assert_eq!(stored.inspection_ids, vec!["ghost".to_string()]);
}
