// Domain layer - the analytics pipeline, free of I/O
pub mod axis;
pub mod chart;
pub mod dashboard;
pub mod error;
pub mod focus;
pub mod format;
pub mod record;
pub mod sample;
pub mod summary;
pub mod window;
