// Application layer - Use cases over the domain
pub mod dashboard_service;
pub mod export_service;
pub mod sample_repository;
