use crate::InspectorError;
use crate::models::InspectionStatus;

use super::test_app;

#[test]
fn create_project_links_one_pending_inspection_per_url() {
    let (_temp, app) = test_app();
    let project = app
        .create_project(
            "marketing pages",
            &[
                "https://example.com/".to_string(),
                "https://example.com/pricing".to_string(),
            ],
        )
        .expect("project");

    assert_eq!(project.inspection_ids.len(), 2);
    for id in &project.inspection_ids {
        let inspection = app.get_inspection_by_id(id).expect("inspection");
        assert_eq!(inspection.status, InspectionStatus::Pending);
        assert_eq!(inspection.progress, 0);
        assert_eq!(inspection.project_id.as_deref(), Some(project.id.as_str()));
    }
}

#[test]
fn create_project_rejects_blank_names_and_bad_urls() {
    let (_temp, app) = test_app();
    let err = app.create_project("   ", &[]).expect_err("blank name");
    assert!(matches!(err, InspectorError::Validation(_)));

    let err = app
        .create_project("fonts", &["ftp://example.com".to_string()])
        .expect_err("bad scheme");
    assert!(matches!(err, InspectorError::InvalidUrl(_)));
}

#[test]
fn inspection_progress_updates_are_validated() {
    let (_temp, app) = test_app();
    let inspection = app
        .create_inspection("https://example.com/", None)
        .expect("inspection");

    let err = app
        .update_inspection_progress(&inspection.id, InspectionStatus::Processing, Some(250), None)
        .expect_err("out of range");
    assert!(matches!(err, InspectorError::Validation(_)));

    let err = app
        .update_inspection_progress("missing", InspectionStatus::Processing, Some(10), None)
        .expect_err("missing inspection");
    assert!(matches!(err, InspectorError::NotFound(_)));

    let updated = app
        .update_inspection_progress(&inspection.id, InspectionStatus::Processing, Some(40), None)
        .expect("update");
    assert_eq!(updated.status, InspectionStatus::Processing);
    assert_eq!(updated.progress, 40);
}

#[test]
fn delete_inspection_prunes_the_owning_set() {
    let (_temp, app) = test_app();
    let project = app
        .create_project("fonts", &["https://example.com/".to_string()])
        .expect("project");
    let inspection_id = project.inspection_ids[0].clone();

    assert!(app.delete_inspection(&inspection_id).expect("delete"));

    let stored = app.get_project_by_id(&project.id).expect("project");
    assert!(stored.inspection_ids.is_empty());
    let err = app
        .get_inspection_by_id(&inspection_id)
        .expect_err("gone");
    assert!(matches!(err, InspectorError::NotFound(_)));
}

#[test]
fn delete_project_clears_back_references() {
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
    let inspection_ids = project.inspection_ids.clone();

    assert!(app.delete_project(&project.id).expect("delete"));
    let err = app.get_project_by_id(&project.id).expect_err("gone");
    assert!(matches!(err, InspectorError::NotFound(_)));

    for id in &inspection_ids {
        let inspection = app.get_inspection_by_id(id).expect("inspection survives");
        assert!(inspection.project_id.is_none());
    }
}

#[test]
fn list_projects_in_creation_order() {
    let (_temp, app) = test_app();
    let first = app.create_project("first", &[]).expect("first");
    let second = app.create_project("second", &[]).expect("second");

    let projects = app.list_projects().expect("list projects");
    let ids = projects.iter().map(|p| p.id.as_str()).collect::<Vec<_>>();
    let first_pos = ids.iter().position(|id| *id == first.id).expect("first listed");
    let second_pos = ids.iter().position(|id| *id == second.id).expect("second listed");
    assert!(first_pos < second_pos);
}

#[test]
fn operations_leave_request_log_entries_behind() {
    let (_temp, app) = test_app();
    let project = app.create_project("fonts", &[]).expect("project");
    let inspection = app
        .create_inspection("https://example.com/", None)
        .expect("inspection");
    app.link(&project.id, &inspection.id).expect("link");
    let _ = app.link(&project.id, "missing").expect_err("bad link");

    let all = app
        .list_request_logs_filtered(50, None, None)
        .expect("list logs");
    assert!(!all.is_empty());

    let link_ok = app
        .list_request_logs_filtered(50, Some("link.add"), Some("ok"))
        .expect("filtered logs");
    assert_eq!(link_ok.len(), 1);
    assert_eq!(link_ok[0].operation, "link.add");

    let link_err = app
        .list_request_logs_filtered(50, Some("link.add"), Some("error"))
        .expect("error logs");
    assert_eq!(link_err.len(), 1);
    assert_eq!(link_err[0].error_code.as_deref(), Some("NOT_FOUND"));
}
