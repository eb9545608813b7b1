//! Point-string building for SVG `polyline`/`polygon` attributes.
//!
//! Renderer-agnostic: the output is the `"x1,y1 x2,y2 ..."` text any SVG-ish
//! layer expects in its `points` attribute. Coordinates are rounded to two
//! decimals to keep the markup short.

use super::{ScreenPoint, TrendView};

/// Render screen points as a `points` attribute value.
pub fn points_attr(points: &[ScreenPoint]) -> String {
    points
        .iter()
        .map(|p| format!("{},{}", round2(p.x), round2(p.y)))
        .collect::<Vec<_>>()
        .join(" ")
}

impl TrendView {
    /// `points` attribute for the trend line (`<polyline>`).
    pub fn line_attr(&self) -> String {
        points_attr(&self.points)
    }

    /// `points` attribute for the closed fill region (`<polygon>`).
    pub fn area_attr(&self) -> String {
        points_attr(&self.area)
    }
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
