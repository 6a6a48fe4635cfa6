//! BankViz - Bank Marketing Parallel Coordinates Viewer
//!
//! Loads the semicolon-delimited bank marketing dataset, trims outliers on six
//! numeric fields, and renders a parallel-coordinates chart that can be
//! filtered by job category.

pub mod charts;
pub mod config;
pub mod data;
pub mod gui;
pub mod state;
pub mod stats;

pub use charts::{ChartConfig, ParallelChart, StaticChartRenderer};
pub use config::AppConfig;
pub use data::{load_and_clean, BankRecord, DataLoader, DataProcessor, Dimension, JobFilter};
pub use state::AppState;
