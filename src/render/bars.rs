use crate::Result;
use crate::model::TimerReport;
use crate::render::{pad_max, palette};

use log::warn;
use plotters::coord::ranged1d::SegmentValue;
use plotters::prelude::*;

/// Draw one outlined bar per rank per timer column, grouped by column.
///
/// Bars are unfilled so overlapping ranks stay distinguishable; the edge
/// color is assigned by column position in the normalized order, shared
/// across ranks.
pub fn render_timer_chart(report: &TimerReport, out: &str) -> Result<()> {
    let columns = &report.columns;

    if columns.len() > palette::PALETTE.len() {
        warn!(
            "{} timer categories but only {} palette colors; colors repeat",
            columns.len(),
            palette::PALETTE.len()
        );
    }

    let root = SVGBackend::new(out, (1200, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let slots = columns.len().max(1) as i32;
    let y_max = pad_max(report.totals.value_max);

    let mut chart = ChartBuilder::on(&root)
        .margin(10)
        .x_label_area_size(60)
        .y_label_area_size(70)
        .build_cartesian_2d((0i32..slots).into_segmented(), 0f64..y_max)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .y_desc("Time (s)")
        .y_labels(20)
        .x_labels(columns.len() + 1)
        .x_label_formatter(&|segment: &SegmentValue<i32>| match segment {
            SegmentValue::CenterOf(i) => columns
                .get(*i as usize)
                .cloned()
                .unwrap_or_default(),
            _ => String::new(),
        })
        .x_label_style(("sans-serif", 12))
        .label_style(("sans-serif", 14))
        .axis_desc_style(("sans-serif", 18))
        .draw()?;

    for rank in &report.ranks {
        for (c, column) in columns.iter().enumerate() {
            let Some(values) = rank.values.get(column) else {
                continue;
            };

            let style = ShapeStyle {
                color: palette::pick(c).into(),
                filled: false,
                stroke_width: 2,
            };

            chart.draw_series(values.iter().map(|&value| {
                let mut bar = Rectangle::new(
                    [
                        (SegmentValue::Exact(c as i32), 0.0),
                        (SegmentValue::Exact(c as i32 + 1), value),
                    ],
                    style,
                );
                bar.set_margin(0, 0, 6, 6);
                bar
            }))?;
        }
    }

    root.present()?;
    Ok(())
}
