use anyhow::Result;
use fontinspector_core::FontInspector;
use fontinspector_core::models::RebuildOptions;

use crate::cli::{InspectionCommand, ProjectCommand, RebuildCommand, TraceCommand};

use super::print_json;

pub(super) fn handle_project(app: &FontInspector, command: ProjectCommand) -> Result<()> {
    match command {
        ProjectCommand::Create { name, urls } => {
            let project = app.create_project(&name, &urls)?;
            print_json(&project)?;
        }
        ProjectCommand::Get { id } => {
            let project = app.get_project_by_id(&id)?;
            print_json(&project)?;
        }
        ProjectCommand::List => {
            let projects = app.list_projects()?;
            print_json(&projects)?;
        }
        ProjectCommand::Delete { id } => {
            let deleted = app.delete_project(&id)?;
            println!("{deleted}");
        }
    }
    Ok(())
}

pub(super) fn handle_inspection(app: &FontInspector, command: InspectionCommand) -> Result<()> {
    match command {
        InspectionCommand::Create { url, project_id } => {
            let inspection = app.create_inspection(&url, project_id.as_deref())?;
            print_json(&inspection)?;
        }
        InspectionCommand::Get { id } => {
            let inspection = app.get_inspection_by_id(&id)?;
            print_json(&inspection)?;
        }
        InspectionCommand::List { project_id } => {
            let inspections = match project_id {
                Some(project_id) => app.list_project_inspections(&project_id)?,
                None => app.list_inspections()?,
            };
            print_json(&inspections)?;
        }
        InspectionCommand::Run { id } => {
            let inspection = app.run_inspection(&id)?;
            print_json(&inspection)?;
        }
        InspectionCommand::Delete { id } => {
            let deleted = app.delete_inspection(&id)?;
            println!("{deleted}");
        }
    }
    Ok(())
}

pub(super) fn handle_rebuild(app: &FontInspector, command: RebuildCommand) -> Result<()> {
    match command {
        RebuildCommand::Run {
            dry_run,
            max_orphan_sample,
        } => {
            let report = app.rebuild_links_with_options(RebuildOptions {
                dry_run,
                max_orphan_sample,
            })?;
            print_json(&report)?;
        }
        RebuildCommand::History { limit } => {
            let runs = app.list_rebuild_runs(limit)?;
            print_json(&runs)?;
        }
    }
    Ok(())
}

pub(super) fn handle_trace(app: &FontInspector, command: TraceCommand) -> Result<()> {
    match command {
        TraceCommand::Requests {
            limit,
            operation,
            status,
        } => {
            let logs =
                app.list_request_logs_filtered(limit, operation.as_deref(), status.as_deref())?;
            print_json(&logs)?;
        }
    }
    Ok(())
}
