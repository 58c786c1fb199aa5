use clap::{Parser, Subcommand};
use env_logger::Builder;

mod model;
mod policy;
mod powerlog;
mod render;
mod timers;

use policy::{OnError, OnUnbalanced};

pub type Result<T> = anyhow::Result<T>;

#[derive(Parser)]
#[command(name = "additivefoam-viz")]
#[command(about = "AdditiveFoam simulation plot utilities", long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Plot absorbed power against simulation time from solver logs.
    Power {
        /// Solver log files; one plotted line per file.
        #[arg(required = true)]
        logs: Vec<String>,

        #[arg(short = 'o', long, default_value = "absorbed_power.svg")]
        out: String,

        /// Also dump the aggregated series as JSON.
        #[arg(long)]
        json: Option<String>,

        /// What to do with a log that cannot be read or parsed.
        #[arg(long, value_enum, default_value = "fail")]
        on_error: OnError,

        /// What to do when time and power sample counts disagree.
        #[arg(long, value_enum, default_value = "truncate")]
        on_unbalanced: OnUnbalanced,

        /// Substring marking a simulation-time line.
        #[arg(long, default_value = powerlog::TIME_MARKER)]
        time_marker: String,

        /// Lines containing this substring never count as time lines.
        #[arg(long, default_value = powerlog::TIME_EXCLUDE)]
        time_exclude: String,

        /// Substring marking an absorbed-power line.
        #[arg(long, default_value = powerlog::POWER_MARKER)]
        power_marker: String,
    },

    /// Aggregate per-rank timer CSV files into a bar chart.
    Timers {
        /// Directory scanned for timer files.
        #[arg(long, default_value = timers::TIMER_DIR)]
        dir: String,

        #[arg(short = 'o', long, default_value = "timers.svg")]
        out: String,

        /// Also dump the aggregated tables as JSON.
        #[arg(long)]
        json: Option<String>,

        /// What to do with a timer file that cannot be read or parsed.
        #[arg(long, value_enum, default_value = "skip")]
        on_error: OnError,

        /// File name prefix of per-rank timer files.
        #[arg(long, default_value = timers::TIMER_PREFIX)]
        prefix: String,

        /// File name suffix of per-rank timer files.
        #[arg(long, default_value = timers::TIMER_SUFFIX)]
        suffix: String,

        /// Column always placed last in the display order.
        #[arg(long, default_value = timers::TOTAL_COLUMN)]
        total_column: String,
    },
}

fn main() -> Result<()> {
    let env = env_logger::Env::default().filter_or("RUST_LOG", "info");
    Builder::from_env(env).init();

    let cli = Cli::parse();

    match cli.cmd {
        Commands::Power {
            logs,
            out,
            json,
            on_error,
            on_unbalanced,
            time_marker,
            time_exclude,
            power_marker,
        } => {
            let markers = powerlog::Markers {
                time: time_marker,
                time_exclude,
                power: power_marker,
            };

            // 1) Scan each log; per-file failures resolve through the policy.
            let mut series = Vec::new();
            for path in &logs {
                if let Some(s) = on_error.apply(path, powerlog::scan_log_file(path, &markers))? {
                    series.push(s);
                }
            }

            // 2) Aggregate.
            let report = model::build_power_report(series, on_unbalanced)?;

            if let Some(json_path) = json {
                std::fs::write(&json_path, serde_json::to_string_pretty(&report)?)?;
                println!("Wrote {}", json_path);
            }

            // 3) Render SVG.
            render::render_power_chart(&report, &out)?;
            println!("Wrote {}", out);
        }

        Commands::Timers {
            dir,
            out,
            json,
            on_error,
            prefix,
            suffix,
            total_column,
        } => {
            let layout = timers::Layout {
                dir,
                prefix,
                suffix,
                total_column,
            };

            // 1) Discover and load per-rank tables.
            let index = timers::load_timer_dir(&layout, on_error)?;

            // 2) Aggregate.
            let report = model::build_timer_report(&index, &layout.total_column);

            if let Some(json_path) = json {
                std::fs::write(&json_path, serde_json::to_string_pretty(&report)?)?;
                println!("Wrote {}", json_path);
            }

            // 3) Render SVG.
            render::render_timer_chart(&report, &out)?;
            println!("Wrote {}", out);
        }
    }

    Ok(())
}
