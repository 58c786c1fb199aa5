use crate::powerlog::series::PowerSeries;
use anyhow::Context;
use regex::Regex;
use std::fs;

pub const TIME_MARKER: &str = "Time = ";
pub const TIME_EXCLUDE: &str = "ExecutionTime";
pub const POWER_MARKER: &str = "absorbed power";

// Decimal or scientific-notation token: optional sign, optional leading
// point, comma-grouped thousands, optional fraction and exponent.
const NUMBER_RE: &str = r"[-+]?\.?\d+(?:,\d{3})*(?:\.\d*)?(?:[eE][-+]?\d+)?";

/// Marker substrings identifying which log lines carry a value.
#[derive(Debug, Clone)]
pub struct Markers {
    /// A line containing this is a simulation-time report...
    pub time: String,
    /// ...unless it also contains this.
    pub time_exclude: String,
    pub power: String,
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            time: TIME_MARKER.to_string(),
            time_exclude: TIME_EXCLUDE.to_string(),
            power: POWER_MARKER.to_string(),
        }
    }
}

/// Read a solver log and scan it for time and power samples.
pub fn scan_log_file(path: &str, markers: &Markers) -> anyhow::Result<PowerSeries> {
    let text = fs::read_to_string(path).with_context(|| format!("read log file {}", path))?;
    scan_log_text(path, &text, markers)
}

/// Scan log text line-by-line.
///
/// A line matching the time marker (and not the exclusion marker)
/// contributes its first numeric token to `times`; a line matching the
/// power marker contributes to `powers`. A marker line without a numeric
/// token is an error.
pub fn scan_log_text(label: &str, text: &str, markers: &Markers) -> anyhow::Result<PowerSeries> {
    let re = Regex::new(NUMBER_RE)?;

    let mut series = PowerSeries::new(label);
    for (lineno, line) in text.lines().enumerate() {
        let lno = lineno + 1;

        if line.contains(&markers.time) && !line.contains(&markers.time_exclude) {
            let time = first_number(&re, line).with_context(|| {
                format!(
                    "no numeric token on time line at {}:{}: {:?}",
                    label, lno, line
                )
            })?;
            series.times.push(time);
        }

        if line.contains(&markers.power) {
            let power = first_number(&re, line).with_context(|| {
                format!(
                    "no numeric token on power line at {}:{}: {:?}",
                    label, lno, line
                )
            })?;
            series.powers.push(power);
        }
    }

    Ok(series)
}

/// First numeric token on the line. Comma group separators are dropped
/// before conversion.
fn first_number(re: &Regex, line: &str) -> Option<f64> {
    let token = re.find(line)?.as_str().replace(',', "");
    token.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn scan(text: &str) -> anyhow::Result<PowerSeries> {
        scan_log_text("test.log", text, &Markers::default())
    }

    #[test]
    fn collects_time_and_power_in_file_order() {
        let text = "Time = 0.1 s\nabsorbed power = 5.0 W\nTime = 0.2 s\nabsorbed power = 6.5 W\n";
        let series = scan(text).unwrap();
        assert_eq!(series.times, vec![0.1, 0.2]);
        assert_eq!(series.powers, vec![5.0, 6.5]);
    }

    #[test]
    fn execution_time_lines_are_not_time_lines() {
        let text = "Time = 0.5\nExecutionTime = 3.2 s  ClockTime = 4 s\n";
        let series = scan(text).unwrap();
        assert_eq!(series.times, vec![0.5]);
    }

    #[test]
    fn sample_counts_match_marker_line_counts() {
        let text = "Time = 1\nTime = 2\nTime = 3\nabsorbed power: 9.0\n";
        let series = scan(text).unwrap();
        assert_eq!(series.times.len(), 3);
        assert_eq!(series.powers.len(), 1);
    }

    #[test]
    fn numeric_token_forms() {
        let text = "Time = 12.5\n\
                    Time = -3\n\
                    Time = +0.001\n\
                    Time = 1.2e-5\n\
                    Time = 1,000.5\n";
        let series = scan(text).unwrap();
        assert_eq!(series.times, vec![12.5, -3.0, 0.001, 1.2e-5, 1000.5]);
    }

    #[test]
    fn marker_line_without_number_is_an_error() {
        let err = scan("absorbed power: abc\n").unwrap_err();
        assert!(err.to_string().contains("test.log:1"));
    }

    #[test]
    fn solver_style_lines() {
        // Shapes the solver actually prints.
        let text = "Time = 0.00025\nabsorbed power: 719.5255\n";
        let series = scan(text).unwrap();
        assert_eq!(series.times, vec![0.00025]);
        assert_eq!(series.powers, vec![719.5255]);
    }

    #[test]
    fn no_markers_yields_empty_series() {
        let series = scan("Courant Number mean: 0.1 max: 0.4\n").unwrap();
        assert!(series.times.is_empty());
        assert!(series.powers.is_empty());
    }

    #[test]
    fn custom_markers_are_honored() {
        let markers = Markers {
            time: "t=".to_string(),
            time_exclude: "wall t=".to_string(),
            power: "qdot".to_string(),
        };
        let series = scan_log_text("x", "t=2.0\nwall t=9.0\nqdot 4.5\n", &markers).unwrap();
        assert_eq!(series.times, vec![2.0]);
        assert_eq!(series.powers, vec![4.5]);
    }
}
