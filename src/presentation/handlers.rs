// Command handlers
use crate::application::session::{apply, SelectionAction};
use crate::domain::selection::SelectionState;
use crate::presentation::app_state::AppState;
use crate::presentation::cli::{OutputFormat, ViewArgs};
use crate::presentation::report::{write_markers, write_options, write_view, ViewHeader};
use anyhow::Context;
use std::io::Write;

/// Layer snapshot file and flags over the initial selection.
pub fn resolve_selection(state: &AppState, args: &ViewArgs) -> anyhow::Result<SelectionState> {
    let mut selection = match &args.selection {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read selection snapshot {}", path.display()))?;
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse selection snapshot {}", path.display()))?
        }
        None => state.initial_selection.clone(),
    };

    let options = state.dashboard_service.filter_options();
    if args.reset {
        selection = apply(&selection, SelectionAction::ResetFilters, &options);
    }
    if let Some(role) = args.role {
        selection = apply(&selection, SelectionAction::SwitchRole(role), &options);
    }
    if let Some(id) = args.enterprise {
        selection = apply(&selection, SelectionAction::SelectEnterprise(id), &options);
    }
    if !args.regions.is_empty() {
        selection = selection.with_regions(args.regions.iter().cloned());
    }
    if !args.enterprise_ids.is_empty() {
        selection = selection.with_enterprise_ids(args.enterprise_ids.iter().copied());
    }
    if !args.deviation_types.is_empty() {
        selection = selection.with_deviation_types(args.deviation_types.iter().cloned());
    }
    if !args.responsible_names.is_empty() {
        selection = selection.with_responsible_names(args.responsible_names.iter().cloned());
    }
    for region in &args.toggle_regions {
        selection = apply(&selection, SelectionAction::ToggleRegion(region.clone()), &options);
    }
    for id in &args.toggle_enterprises {
        selection = apply(&selection, SelectionAction::ToggleEnterprise(*id), &options);
    }
    for kind in &args.toggle_types {
        selection = apply(&selection, SelectionAction::ToggleDeviationType(kind.clone()), &options);
    }
    for name in &args.toggle_responsible {
        selection = apply(&selection, SelectionAction::ToggleResponsible(name.clone()), &options);
    }
    for dimension in &args.select_all {
        selection = apply(&selection, SelectionAction::ToggleAll((*dimension).into()), &options);
    }

    Ok(selection)
}

/// Render the dashboard view
pub fn show_view<W: Write>(state: &AppState, args: &ViewArgs, out: &mut W) -> anyhow::Result<()> {
    let selection = resolve_selection(state, args)?;
    let view = state.dashboard_service.derive(&selection);

    match args.format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &view)?;
            writeln!(out)?;
        }
        OutputFormat::Text => {
            let summary = state.dashboard_service.region_summary(&selection);
            let header = ViewHeader {
                region_summary: &summary,
                active_filter_count: selection.active_filter_count(),
            };
            write_view(out, &view, &header)?;
        }
    }

    Ok(())
}

/// List filter options
pub fn show_options<W: Write>(state: &AppState, format: OutputFormat, out: &mut W) -> anyhow::Result<()> {
    let options = state.dashboard_service.filter_options();

    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &options)?;
            writeln!(out)?;
        }
        OutputFormat::Text => write_options(out, &options)?,
    }

    Ok(())
}

/// Map markers for the selection
pub fn show_markers<W: Write>(state: &AppState, args: &ViewArgs, out: &mut W) -> anyhow::Result<()> {
    let selection = resolve_selection(state, args)?;
    let markers = state.dashboard_service.derive(&selection).map_markers();

    match args.format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &markers)?;
            writeln!(out)?;
        }
        OutputFormat::Text => write_markers(out, &markers)?,
    }

    Ok(())
}
