// Application layer - Use cases over the enterprise dataset
pub mod aggregator;
pub mod dashboard_service;
pub mod enterprise_repository;
pub mod filter_engine;
pub mod session;
