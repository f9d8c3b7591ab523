// Infrastructure layer - Configuration and dataset adapters
pub mod config;
pub mod dataset_repository;
pub mod logging;
pub mod sample_dataset;
