use crate::policy::OnError;
use crate::timers::table::{TimerIndex, read_timer_file};
use anyhow::Context;
use log::warn;
use std::fs;

pub const TIMER_DIR: &str = "Profiling";
pub const TIMER_PREFIX: &str = "timers_";
pub const TIMER_SUFFIX: &str = ".csv";
pub const TOTAL_COLUMN: &str = "elapsedCpuTime";

/// Naming convention for per-rank timer files: prefix + rank + suffix,
/// inside a profiling directory written next to the case.
#[derive(Debug, Clone)]
pub struct Layout {
    pub dir: String,
    pub prefix: String,
    pub suffix: String,
    /// Column forced last in the display order.
    pub total_column: String,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            dir: TIMER_DIR.to_string(),
            prefix: TIMER_PREFIX.to_string(),
            suffix: TIMER_SUFFIX.to_string(),
            total_column: TOTAL_COLUMN.to_string(),
        }
    }
}

/// Scan the profiling directory and load every per-rank timer table.
///
/// Every per-file failure (unparseable rank, unreadable or malformed CSV)
/// resolves through the failure policy; the same goes for an unreadable
/// directory, so the default `skip` policy turns a missing directory into
/// an empty index.
pub fn load_timer_dir(layout: &Layout, on_error: OnError) -> anyhow::Result<TimerIndex> {
    let mut index = TimerIndex::new();

    let dir = fs::read_dir(&layout.dir)
        .with_context(|| format!("read profiling directory {}", layout.dir));
    let Some(entries) = on_error.apply(&layout.dir, dir)? else {
        return Ok(index);
    };

    for entry in entries {
        let Some(entry) = on_error.apply(&layout.dir, entry.context("read directory entry"))?
        else {
            continue;
        };

        let file_name = entry.file_name();
        let Some(name) = file_name.to_str() else {
            continue;
        };
        if !(name.starts_with(&layout.prefix) && name.ends_with(&layout.suffix)) {
            continue;
        }

        let loaded = parse_rank(name, &layout.suffix)
            .and_then(|rank| Ok((rank, read_timer_file(&entry.path())?)));
        if let Some((rank, table)) = on_error.apply(name, loaded)? {
            index.insert(rank, table);
        }
    }

    if index.is_empty() {
        warn!("no timer files loaded from {}", layout.dir);
    }

    Ok(index)
}

/// Rank is the integer between the last underscore and the suffix:
/// `timers_12.csv` has rank 12.
pub fn parse_rank(file_name: &str, suffix: &str) -> anyhow::Result<u32> {
    let stem = file_name.strip_suffix(suffix).unwrap_or(file_name);
    let tail = stem.rsplit('_').next().unwrap_or(stem);
    tail.parse()
        .with_context(|| format!("non-integer rank in file name {:?}", file_name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn rank_is_parsed_from_the_last_underscore() {
        assert_eq!(parse_rank("timers_7.csv", ".csv").unwrap(), 7);
        assert_eq!(parse_rank("timers_0012.csv", ".csv").unwrap(), 12);
    }

    #[test]
    fn non_integer_rank_is_an_error() {
        assert!(parse_rank("timers_abc.csv", ".csv").is_err());
        assert!(parse_rank("timers_.csv", ".csv").is_err());
    }

    #[test]
    fn load_skips_bad_files_under_skip_policy() {
        // Build a throwaway directory with one good and one bad file.
        let dir = std::env::temp_dir().join(format!("afviz-timers-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("timers_0.csv"), "a,elapsedCpuTime\n1.0,2.0\n").unwrap();
        fs::write(dir.join("timers_abc.csv"), "a\n1.0\n").unwrap();
        fs::write(dir.join("notes.txt"), "ignored\n").unwrap();

        let layout = Layout {
            dir: dir.to_str().unwrap().to_string(),
            ..Layout::default()
        };
        let index = load_timer_dir(&layout, OnError::Skip).unwrap();
        assert_eq!(index.len(), 1);
        assert_eq!(index[&0].values["a"], vec![1.0]);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn missing_directory_yields_empty_index_under_skip_policy() {
        let layout = Layout {
            dir: "/nonexistent/afviz".to_string(),
            ..Layout::default()
        };
        let index = load_timer_dir(&layout, OnError::Skip).unwrap();
        assert!(index.is_empty());
    }

    #[test]
    fn missing_directory_fails_under_fail_policy() {
        let layout = Layout {
            dir: "/nonexistent/afviz".to_string(),
            ..Layout::default()
        };
        assert!(load_timer_dir(&layout, OnError::Fail).is_err());
    }
}
