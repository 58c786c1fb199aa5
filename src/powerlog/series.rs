/// Time and power samples scanned from one solver log.
///
/// The two sequences accumulate independently while scanning, in file
/// order; their counts only agree when the log is well formed.
#[derive(Debug, Clone, PartialEq)]
pub struct PowerSeries {
    pub label: String,
    pub times: Vec<f64>,
    pub powers: Vec<f64>,
}

impl PowerSeries {
    pub fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
            times: Vec::new(),
            powers: Vec::new(),
        }
    }
}
