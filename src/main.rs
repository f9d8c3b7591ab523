// Main entry point - Dependency injection and command dispatch
mod domain;
mod application;
mod infrastructure;
mod presentation;

use std::sync::Arc;
use anyhow::Context;
use clap::Parser;

use crate::application::dashboard_service::DashboardService;
use crate::domain::selection::SelectionState;
use crate::infrastructure::config::load_monitor_config;
use crate::infrastructure::dataset_repository::InMemoryRepository;
use crate::infrastructure::logging::init_tracing;
use crate::presentation::app_state::AppState;
use crate::presentation::cli::{Cli, Commands, ViewArgs};
use crate::presentation::handlers::{show_markers, show_options, show_view};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = load_monitor_config(cli.config.as_deref())?;

    // Initialize tracing
    init_tracing(&config.logging.filter);

    // Create repository (infrastructure layer)
    let repository = match cli.dataset.as_ref().or(config.dataset.path.as_ref()) {
        Some(path) => InMemoryRepository::load(path)
            .with_context(|| format!("Failed to load dataset {}", path.display()))?,
        None => {
            tracing::info!("No dataset configured, using built-in sample");
            InMemoryRepository::sample()
        }
    };

    // Create services (application layer)
    let dashboard_service = DashboardService::new(Arc::new(repository));

    let defaults = dashboard_service.default_selection();
    let initial_selection = SelectionState {
        role: config.session.role,
        active_enterprise_id: config
            .session
            .active_enterprise_id
            .or(defaults.active_enterprise_id),
        ..defaults
    };

    let state = AppState {
        dashboard_service,
        initial_selection,
    };

    // Dispatch (presentation layer)
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match cli.command {
        Some(Commands::View(args)) => show_view(&state, &args, &mut out),
        Some(Commands::Options { format }) => show_options(&state, format, &mut out),
        Some(Commands::Markers(args)) => show_markers(&state, &args, &mut out),
        None => show_view(&state, &ViewArgs::default(), &mut out),
    }
}
