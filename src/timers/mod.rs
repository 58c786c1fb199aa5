//! Discovery and parsing of per-rank timer CSV files.

pub mod discover;
pub mod table;

pub use discover::{Layout, TIMER_DIR, TIMER_PREFIX, TIMER_SUFFIX, TOTAL_COLUMN, load_timer_dir};
pub use table::{TimerIndex, TimerTable};
