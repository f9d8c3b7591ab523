// Application state shared by command handlers
use crate::application::dashboard_service::DashboardService;
use crate::domain::selection::SelectionState;

#[derive(Clone)]
pub struct AppState {
    pub dashboard_service: DashboardService,
    /// Starting selection from config, before snapshot and flag overrides
    pub initial_selection: SelectionState,
}
