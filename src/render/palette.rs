//! Fixed categorical palette, assigned by position and wrapped modulo
//! its size so an oversized category set cannot index out of range.

use plotters::style::RGBColor;

/// The classic ten-color Tableau palette.
pub const PALETTE: [RGBColor; 10] = [
    RGBColor(31, 119, 180),
    RGBColor(255, 127, 14),
    RGBColor(44, 160, 44),
    RGBColor(214, 39, 40),
    RGBColor(148, 103, 189),
    RGBColor(140, 86, 75),
    RGBColor(227, 119, 194),
    RGBColor(127, 127, 127),
    RGBColor(188, 189, 34),
    RGBColor(23, 190, 207),
];

pub fn pick(index: usize) -> RGBColor {
    PALETTE[index % PALETTE.len()]
}
