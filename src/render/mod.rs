//! SVG chart rendering on top of plotters.

pub mod bars;
pub mod palette;
pub mod power;

pub use bars::render_timer_chart;
pub use power::render_power_chart;

/// Upper axis bound with a little headroom; charts with no data get a
/// unit axis instead of a degenerate range.
pub(crate) fn pad_max(value: f64) -> f64 {
    if value > 0.0 { value * 1.05 } else { 1.0 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn pad_max_gives_headroom_and_a_floor() {
        assert_eq!(pad_max(100.0), 105.0);
        assert_eq!(pad_max(0.0), 1.0);
        assert_eq!(pad_max(-2.0), 1.0);
    }
}
