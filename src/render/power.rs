use crate::Result;
use crate::model::PowerReport;
use crate::render::{pad_max, palette};

use plotters::prelude::*;

/// Draw one line series per input log on a shared chart.
///
/// The x axis starts at zero regardless of the earliest sample; y covers
/// the full power extent, dipping below zero only when the data does.
pub fn render_power_chart(report: &PowerReport, out: &str) -> Result<()> {
    let root = SVGBackend::new(out, (900, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let x_max = pad_max(report.totals.time_max);
    let y_min = report.totals.power_min.min(0.0) * 1.05;
    let y_max = pad_max(report.totals.power_max);

    let mut chart = ChartBuilder::on(&root)
        .margin(10)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(0f64..x_max, y_min..y_max)?;

    chart
        .configure_mesh()
        .x_desc("Time (s)")
        .y_desc("Absorbed Power (W)")
        .label_style(("sans-serif", 16))
        .axis_desc_style(("sans-serif", 18))
        .draw()?;

    for (i, series) in report.series.iter().enumerate() {
        let color = palette::pick(i);
        chart
            .draw_series(LineSeries::new(
                series.points.iter().copied(),
                color.stroke_width(3),
            ))?
            .label(series.label.clone())
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(3))
            });
    }

    if !report.series.is_empty() {
        chart
            .configure_series_labels()
            .border_style(BLACK)
            .background_style(WHITE.mix(0.8))
            .label_font(("sans-serif", 14))
            .draw()?;
    }

    root.present()?;
    Ok(())
}
