// Domain layer - Enterprise data, selections and derived views
pub mod dashboard;
pub mod enterprise;
pub mod selection;
