//! Subcommand implementations
//!
//! Each command writes its report to `out` so it can be exercised without a
//! terminal. Failures to load a project are reported, not propagated, by
//! `check`; the other commands propagate them.

use anyhow::{bail, Context, Result};
use envdir_core::{EnvironmentsDirectory, Project, ProjectError, ProjectStore};
use envdir_model::PlatformType;
use envdir_primitives::NonEmptyString;
use std::io::Write;
use std::path::Path;

/// Validate one directory, or every environments directory below a root
///
/// Returns whether everything checked is valid.
///
/// # Errors
/// Only if the report cannot be written or the recursive root is unusable
pub async fn check(
    store: &ProjectStore,
    path: &Path,
    recursive: bool,
    out: &mut impl Write,
) -> Result<bool> {
    let results = if recursive {
        store.process_projects_recursively(path).await?
    } else {
        vec![load(store, path).await]
    };

    if results.is_empty() {
        writeln!(
            out,
            "no '{}' directories found under {}",
            store.config().project_directory_name,
            path.display()
        )?;
        return Ok(true);
    }

    let mut valid = true;
    for result in &results {
        match result {
            Ok(project) => writeln!(
                out,
                "ok    {} ({} environment(s))",
                project.directory(),
                project.environment_names().len()
            )?,
            Err(e) => {
                valid = false;
                writeln!(out, "FAIL  {}: {}", e.directory().display(), e)?;
            }
        }
    }
    Ok(valid)
}

/// Describe a project, or print the resolved properties for `platform`
///
/// # Errors
/// If the project cannot be loaded, nothing is selected, or the platform is
/// not supported
pub async fn show(
    store: &ProjectStore,
    path: &Path,
    platform: Option<PlatformType>,
    out: &mut impl Write,
) -> Result<()> {
    let project = load(store, path).await?;

    let Some(platform_type) = platform else {
        return describe(&project, out);
    };

    let Some(selected) = project.selected_environment() else {
        bail!("no environment selected in {}", project.directory());
    };
    let Some(resolved) = project.resolved_properties(platform_type) else {
        bail!(
            "platform {} is not supported by the schema in {}",
            platform_type,
            project.directory()
        );
    };

    tracing::debug!("Resolving {} for {}", selected.name, platform_type);
    for (name, value) in resolved {
        match value {
            Some(value) => writeln!(out, "{name}={value}")?,
            None => writeln!(out, "{name}=null")?,
        }
    }
    Ok(())
}

/// Select `name`, or clear the selection, and write the project back
///
/// # Errors
/// If the project cannot be loaded, `name` is not an environment, or the
/// write fails
pub async fn select(
    store: &ProjectStore,
    path: &Path,
    name: Option<NonEmptyString>,
    out: &mut impl Write,
) -> Result<()> {
    let project = load(store, path).await?;
    let updated = project
        .update_selected_environment(name)
        .with_context(|| format!("cannot update selection in {}", project.directory()))?;

    store
        .serialize_project(&updated)
        .await
        .with_context(|| format!("failed to write {}", updated.directory()))?;

    match updated.properties().selected_environment_name() {
        Some(name) => writeln!(out, "selected {name}")?,
        None => writeln!(out, "selection cleared")?,
    }
    Ok(())
}

async fn load(store: &ProjectStore, path: &Path) -> Result<Project, ProjectError> {
    let directory = EnvironmentsDirectory::open(path).await?;
    store.process_project(&directory).await
}

fn describe(project: &Project, out: &mut impl Write) -> Result<()> {
    let schema = project.schema();
    let platforms: Vec<String> = schema
        .supported_platforms()
        .iter()
        .map(ToString::to_string)
        .collect();

    writeln!(out, "directory:    {}", project.directory())?;
    writeln!(out, "platforms:    {}", platforms.join(", "))?;
    writeln!(out, "properties:")?;
    for definition in schema.property_definitions().sorted_values() {
        let nullable = if definition.nullable { "?" } else { "" };
        let restriction = definition
            .supported_platform_types
            .as_ref()
            .map(|platforms| format!(" {platforms}"))
            .unwrap_or_default();
        writeln!(
            out,
            "  {}: {}{nullable}{restriction}",
            definition.name, definition.property_type
        )?;
    }

    let names = project.environment_names();
    writeln!(
        out,
        "environments: {}",
        if names.is_empty() { "(none)".to_string() } else { names.join(", ") }
    )?;
    writeln!(
        out,
        "selected:     {}",
        project
            .properties()
            .selected_environment_name()
            .map_or("(none)", NonEmptyString::as_str)
    )?;
    Ok(())
}
