//! Personal health-metrics dashboard.
//!
//! CSV exports are normalized into sample records; the dashboard layer selects a
//! trailing window of samples and derives chart series, axis domains and
//! spotlight summaries for each focus mode.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
