//! Marker-based scanning of solver logs for the absorbed-power series.

pub mod parse;
pub mod series;

pub use parse::{Markers, POWER_MARKER, TIME_EXCLUDE, TIME_MARKER, scan_log_file};
pub use series::PowerSeries;
