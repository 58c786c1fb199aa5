use anyhow::Context;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// One rank's timer table: timer name to elapsed seconds, one entry per
/// data row. The solver writes a single data row per rank, but extra rows
/// are kept and plotted individually.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimerTable {
    pub values: BTreeMap<String, Vec<f64>>,
}

impl TimerTable {
    /// Column names present in this table.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }
}

/// Loaded tables keyed by rank.
pub type TimerIndex = BTreeMap<u32, TimerTable>;

pub fn read_timer_file(path: &Path) -> anyhow::Result<TimerTable> {
    let file =
        File::open(path).with_context(|| format!("open timer file {}", path.display()))?;
    read_timer_table(file)
}

/// Parse a timer CSV: a header row of timer names followed by rows of
/// elapsed seconds.
pub fn read_timer_table<R: Read>(input: R) -> anyhow::Result<TimerTable> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(input);

    let headers = reader.headers().context("read CSV header")?.clone();

    let mut table = TimerTable::default();
    for header in headers.iter() {
        table.values.entry(header.to_string()).or_default();
    }

    for record in reader.records() {
        let record = record.context("read CSV record")?;
        for (i, field) in record.iter().enumerate() {
            let Some(name) = headers.get(i) else {
                continue;
            };
            if field.is_empty() {
                continue;
            }
            let value: f64 = field
                .parse()
                .with_context(|| format!("bad value {:?} in column {:?}", field, name))?;
            table.values.entry(name.to_string()).or_default().push(value);
        }
    }

    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_header_and_single_row() {
        let csv = "solveEnergy,movingHeatSource,elapsedCpuTime\n1.5,0.25,2.0\n";
        let table = read_timer_table(csv.as_bytes()).unwrap();
        assert_eq!(table.values["solveEnergy"], vec![1.5]);
        assert_eq!(table.values["movingHeatSource"], vec![0.25]);
        assert_eq!(table.values["elapsedCpuTime"], vec![2.0]);
    }

    #[test]
    fn keeps_every_data_row() {
        let csv = "a,b\n1.0,2.0\n3.0,4.0\n";
        let table = read_timer_table(csv.as_bytes()).unwrap();
        assert_eq!(table.values["a"], vec![1.0, 3.0]);
        assert_eq!(table.values["b"], vec![2.0, 4.0]);
    }

    #[test]
    fn header_only_table_has_empty_columns() {
        let table = read_timer_table("a,b\n".as_bytes()).unwrap();
        assert_eq!(table.values["a"], Vec::<f64>::new());
        assert_eq!(table.columns().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn non_numeric_value_is_an_error() {
        assert!(read_timer_table("a,b\n1.0,oops\n".as_bytes()).is_err());
    }

    #[test]
    fn ragged_row_is_an_error() {
        assert!(read_timer_table("a,b\n1.0\n".as_bytes()).is_err());
    }
}
