//! Per-file failure policy shared by both plot commands.
//!
//! Each input file resolves to either a loaded value or a logged skip;
//! which one an error becomes is selected on the command line instead of
//! being baked into each command.

use clap::ValueEnum;
use log::warn;

/// What to do when an input file cannot be read or parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OnError {
    /// Abort the whole run on the first bad input.
    Fail,
    /// Log the reason and leave the input out of the chart.
    Skip,
}

impl OnError {
    /// Resolve one per-file result: errors either propagate or downgrade
    /// to a logged skip.
    pub fn apply<T>(self, what: &str, result: anyhow::Result<T>) -> anyhow::Result<Option<T>> {
        match result {
            Ok(value) => Ok(Some(value)),
            Err(err) => match self {
                OnError::Fail => Err(err),
                OnError::Skip => {
                    warn!("skipping {}: {:#}", what, err);
                    Ok(None)
                }
            },
        }
    }
}

/// What to do when a log yields unequal time and power sample counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OnUnbalanced {
    /// Pair samples up to the shorter sequence and log the imbalance.
    Truncate,
    /// Treat the imbalance as a hard error.
    Error,
}
