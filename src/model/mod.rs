//! Aggregation model: turn scanned series and loaded timer tables into
//! the report views the renderers (and the JSON dump) consume.

use crate::Result;
use crate::policy::OnUnbalanced;
use crate::powerlog::PowerSeries;
use crate::timers::TimerIndex;

use anyhow::bail;
use log::warn;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, Serialize)]
pub struct SeriesView {
    pub label: String,
    /// Raw marker counts before pairing; unequal counts mean the log was
    /// malformed or cut short.
    pub time_samples: usize,
    pub power_samples: usize,
    pub points: Vec<(f64, f64)>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PowerTotals {
    pub files: usize,
    pub points: usize,
    pub time_max: f64,
    pub power_min: f64,
    pub power_max: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct PowerReport {
    pub series: Vec<SeriesView>,
    pub totals: PowerTotals,
}

#[derive(Debug, Clone, Serialize)]
pub struct RankView {
    pub rank: u32,
    pub values: BTreeMap<String, Vec<f64>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TimerTotals {
    pub ranks: usize,
    pub columns: usize,
    pub value_max: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct TimerReport {
    /// Normalized display order: alphabetical, total column last.
    pub columns: Vec<String>,
    pub ranks: Vec<RankView>,
    pub totals: TimerTotals,
}

/// Pair each series' time and power samples positionally and work out the
/// axis extents. Unequal sample counts resolve through `on_unbalanced`;
/// an empty series is kept (it plots blank) but warned about.
pub fn build_power_report(
    series: Vec<PowerSeries>,
    on_unbalanced: OnUnbalanced,
) -> Result<PowerReport> {
    let mut views = Vec::new();

    let mut total_points = 0usize;
    let mut time_max = 0.0f64;
    let mut power_min = 0.0f64;
    let mut power_max = 0.0f64;

    for s in series {
        let time_samples = s.times.len();
        let power_samples = s.powers.len();

        if time_samples != power_samples {
            match on_unbalanced {
                OnUnbalanced::Error => bail!(
                    "{}: {} time samples but {} power samples",
                    s.label,
                    time_samples,
                    power_samples
                ),
                OnUnbalanced::Truncate => warn!(
                    "{}: {} time samples but {} power samples; pairing the first {}",
                    s.label,
                    time_samples,
                    power_samples,
                    time_samples.min(power_samples)
                ),
            }
        }

        if time_samples == 0 && power_samples == 0 {
            warn!("{}: no marker lines matched; series plots blank", s.label);
        }

        // zip truncates to the shorter sequence.
        let points: Vec<(f64, f64)> = s.times.iter().zip(&s.powers).map(|(t, p)| (*t, *p)).collect();

        for &(t, p) in &points {
            time_max = time_max.max(t);
            power_min = power_min.min(p);
            power_max = power_max.max(p);
        }
        total_points += points.len();

        views.push(SeriesView {
            label: s.label,
            time_samples,
            power_samples,
            points,
        });
    }

    Ok(PowerReport {
        totals: PowerTotals {
            files: views.len(),
            points: total_points,
            time_max,
            power_min,
            power_max,
        },
        series: views,
    })
}

/// Build the timer report: normalized column order plus one view per rank.
pub fn build_timer_report(index: &TimerIndex, total_column: &str) -> TimerReport {
    let columns = normalize_columns(
        index.values().flat_map(|table| table.columns()),
        total_column,
    );

    let mut value_max = 0.0f64;
    let ranks: Vec<RankView> = index
        .iter()
        .map(|(rank, table)| {
            for values in table.values.values() {
                for &v in values {
                    value_max = value_max.max(v);
                }
            }
            RankView {
                rank: *rank,
                values: table.values.clone(),
            }
        })
        .collect();

    TimerReport {
        totals: TimerTotals {
            ranks: ranks.len(),
            columns: columns.len(),
            value_max,
        },
        columns,
        ranks,
    }
}

/// Deterministic display order for a heterogeneous set of timer columns:
/// the union of observed names minus the total column, sorted, with the
/// total column appended last.
pub fn normalize_columns<'a, I>(observed: I, total_column: &str) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let set: BTreeSet<&str> = observed
        .into_iter()
        .filter(|name| *name != total_column)
        .collect();

    let mut columns: Vec<String> = set.into_iter().map(str::to_string).collect();
    columns.push(total_column.to_string());
    columns
}
