use super::harness::TestHarness;
use crate::run_startup_recovery;

#[test]
fn startup_recovery_repairs_drifted_sets() {
    let harness = TestHarness::setup();
    let (project_id, _) = harness.seed_project("fonts", &[]);
    let inspection = harness
        .state
        .app
        .create_inspection("https://example.com/", None)
        .expect("inspection");

    // Half-applied link: back-reference without the matching set member.
    harness
        .state
        .app
        .state
        .set_inspection_project(&inspection.id, Some(&project_id))
        .expect("backref");

    let report = run_startup_recovery(&harness.state.app).expect("recovery");
    assert_eq!(report.projects_rebuilt, 1);

    let project = harness
        .state
        .app
        .get_project_by_id(&project_id)
        .expect("project");
    assert_eq!(project.inspection_ids, vec![inspection.id]);
}

#[test]
fn startup_recovery_succeeds_on_an_empty_store() {
    let harness = TestHarness::setup();
    let report = run_startup_recovery(&harness.state.app).expect("recovery");
    assert_eq!(report.projects_rebuilt, 0);
    assert_eq!(report.orphaned_refs, 0);
}
