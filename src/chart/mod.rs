//! Trend-series chart geometry.
//!
//! Pure conversion module: an ordered price series plus a layout in, screen
//! points and summary statistics out. No async, no network calls, no drawing —
//! the output is plain data for whatever renders the chart (SVG, canvas, a
//! terminal). Every view that used to re-derive this math by hand goes through
//! here instead.
//!
//! Degenerate inputs never error: an empty (or fully malformed) series yields
//! empty geometry and no summary, an all-equal series yields a flat line.

pub mod polyline;

use serde::{Deserialize, Serialize};

/// One sample of a price series, oldest→newest by slice position.
///
/// The ordinal position in the slice drives the x coordinate; the label is
/// carried along for tooltips and axis ticks but never interpreted here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceSample {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub price: f64,
}

impl PriceSample {
    pub fn new(price: f64) -> Self {
        Self { label: None, price }
    }

    pub fn labeled(label: impl Into<String>, price: f64) -> Self {
        Self {
            label: Some(label.into()),
            price,
        }
    }
}

/// A point in chart pixel space, order-preserving with its input sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

/// Derived statistics over a non-empty series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesSummary {
    pub max: f64,
    pub min: f64,
    /// Index of the first occurrence of the maximum price.
    pub max_index: usize,
    /// Index of the first occurrence of the minimum price.
    pub min_index: usize,
    pub first: f64,
    pub last: f64,
    /// Change from first to last sample, percent, rounded to 2 decimals.
    /// Defined as 0 when the series has fewer than 2 samples or the first
    /// price is 0.
    pub change_percent: f64,
}

/// Plot rectangle: total size plus the margins the line must stay inside.
///
/// The x range is `[left_margin, width - right_margin]`; the y range is
/// `[top_padding, height - top_padding]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartLayout {
    pub width: f64,
    pub height: f64,
    pub left_margin: f64,
    pub right_margin: f64,
    pub top_padding: f64,
}

impl Default for ChartLayout {
    /// The full-size trend chart: 350×120 with room for axis labels on the
    /// left and the live price tag on the right.
    fn default() -> Self {
        Self {
            width: 350.0,
            height: 120.0,
            left_margin: 60.0,
            right_margin: 70.0,
            top_padding: 20.0,
        }
    }
}

impl ChartLayout {
    /// The compact inline variant used in list rows.
    pub fn compact() -> Self {
        Self {
            width: 200.0,
            height: 60.0,
            left_margin: 42.0,
            right_margin: 54.0,
            top_padding: 12.0,
        }
    }

    fn plot_width(&self) -> f64 {
        self.width - self.left_margin - self.right_margin
    }

    fn plot_height(&self) -> f64 {
        self.height - 2.0 * self.top_padding
    }

    fn baseline_y(&self) -> f64 {
        self.height - self.top_padding
    }
}

/// Vertical orientation of the price axis.
///
/// Both conventions exist among renderers, so it is a parameter here rather
/// than a constant: screen-up charts put the highest price at the smallest y.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YDirection {
    /// Higher price → higher on screen (smaller y). The usual line chart.
    PriceUpIsScreenUp,
    /// Higher price → larger y. Matches renderers that draw in raw
    /// screen coordinates without flipping.
    PriceUpIsScreenDown,
}

/// Geometry + statistics for one rendered trend series.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendView {
    /// One point per (finite-priced) input sample, order-preserving.
    pub points: Vec<ScreenPoint>,
    /// `points` plus two baseline points closing the fill polygon
    /// (bottom-right, then bottom-left). Empty when `points` is empty.
    pub area: Vec<ScreenPoint>,
    /// `None` for an empty series.
    pub summary: Option<SeriesSummary>,
}

impl TrendView {
    fn empty() -> Self {
        Self {
            points: Vec::new(),
            area: Vec::new(),
            summary: None,
        }
    }
}

/// Guard against division by zero when every price in the series is equal.
const RANGE_EPSILON: f64 = 1e-6;

/// Transform a price series into screen geometry and summary statistics.
///
/// Samples with a non-finite price are dropped before any computation; if
/// nothing survives, the result is the same as for an empty input. x
/// coordinates are spaced evenly by index (a single sample sits at
/// `x == left_margin`), y coordinates map the price linearly into the padded
/// plot height with an epsilon-guarded denominator.
pub fn render_trend(samples: &[PriceSample], layout: &ChartLayout, direction: YDirection) -> TrendView {
    let finite: Vec<&PriceSample> = samples.iter().filter(|s| s.price.is_finite()).collect();
    if finite.is_empty() {
        return TrendView::empty();
    }

    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut min_index = 0usize;
    let mut max_index = 0usize;
    for (i, sample) in finite.iter().enumerate() {
        // strict comparisons keep the FIRST occurrence on ties
        if sample.price > max {
            max = sample.price;
            max_index = i;
        }
        if sample.price < min {
            min = sample.price;
            min_index = i;
        }
    }

    let n = finite.len();
    let x_step_denominator = (n - 1).max(1) as f64;
    let span = (max - min) + RANGE_EPSILON;

    let points: Vec<ScreenPoint> = finite
        .iter()
        .enumerate()
        .map(|(i, sample)| {
            let x = layout.left_margin + (i as f64 / x_step_denominator) * layout.plot_width();
            let normalized = (sample.price - min) / span;
            let vertical = match direction {
                YDirection::PriceUpIsScreenUp => 1.0 - normalized,
                YDirection::PriceUpIsScreenDown => normalized,
            };
            let y = layout.top_padding + vertical * layout.plot_height();
            ScreenPoint { x, y }
        })
        .collect();

    let mut area = points.clone();
    let baseline = layout.baseline_y();
    area.push(ScreenPoint {
        x: points[points.len() - 1].x,
        y: baseline,
    });
    area.push(ScreenPoint {
        x: points[0].x,
        y: baseline,
    });

    let first = finite[0].price;
    let last = finite[n - 1].price;
    let change_percent = if n >= 2 && first != 0.0 {
        let raw = (last - first) / first * 100.0;
        (raw * 100.0).round() / 100.0
    } else {
        0.0
    };

    TrendView {
        points,
        area,
        summary: Some(SeriesSummary {
            max,
            min,
            max_index,
            min_index,
            first,
            last,
            change_percent,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(prices: &[f64]) -> Vec<PriceSample> {
        prices.iter().map(|p| PriceSample::new(*p)).collect()
    }

    fn layout() -> ChartLayout {
        ChartLayout::default()
    }

    #[test]
    fn test_empty_series_degrades_cleanly() {
        let view = render_trend(&[], &layout(), YDirection::PriceUpIsScreenUp);
        assert!(view.points.is_empty());
        assert!(view.area.is_empty());
        assert!(view.summary.is_none());
    }

    #[test]
    fn test_point_count_matches_samples() {
        let view = render_trend(
            &series(&[10.0, 11.0, 12.5, 9.0]),
            &layout(),
            YDirection::PriceUpIsScreenUp,
        );
        assert_eq!(view.points.len(), 4);
        // area closes with exactly two baseline points
        assert_eq!(view.area.len(), 6);
    }

    #[test]
    fn test_min_max_bound_every_price() {
        let prices = [42.0, 17.5, 88.8, 63.2, 17.6];
        let view = render_trend(&series(&prices), &layout(), YDirection::PriceUpIsScreenUp);
        let summary = view.summary.unwrap();
        for p in prices {
            assert!(summary.min <= p && p <= summary.max);
        }
        assert_eq!(summary.min, 17.5);
        assert_eq!(summary.max, 88.8);
    }

    #[test]
    fn test_single_sample_sits_at_left_margin() {
        let view = render_trend(&series(&[100.0]), &layout(), YDirection::PriceUpIsScreenUp);
        assert_eq!(view.points.len(), 1);
        assert_eq!(view.points[0].x, layout().left_margin);
        let summary = view.summary.unwrap();
        assert_eq!(summary.change_percent, 0.0);
    }

    #[test]
    fn test_all_equal_prices_flat_line_no_nan() {
        let view = render_trend(
            &series(&[100.0, 100.0, 100.0]),
            &layout(),
            YDirection::PriceUpIsScreenUp,
        );
        let ys: Vec<f64> = view.points.iter().map(|p| p.y).collect();
        assert!(ys.iter().all(|y| y.is_finite()));
        assert!(ys.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn test_all_zero_prices_no_division_error() {
        let view = render_trend(
            &series(&[0.0, 0.0, 0.0]),
            &layout(),
            YDirection::PriceUpIsScreenDown,
        );
        assert!(view.points.iter().all(|p| p.y.is_finite()));
        assert_eq!(view.summary.unwrap().change_percent, 0.0);
    }

    #[test]
    fn test_change_percent_basic() {
        let view = render_trend(&series(&[100.0, 150.0]), &layout(), YDirection::PriceUpIsScreenUp);
        assert_eq!(view.summary.unwrap().change_percent, 50.0);
    }

    #[test]
    fn test_change_percent_rounds_two_decimals() {
        let view = render_trend(&series(&[3.0, 4.0]), &layout(), YDirection::PriceUpIsScreenUp);
        assert_eq!(view.summary.unwrap().change_percent, 33.33);
    }

    #[test]
    fn test_change_percent_zero_first_price_guarded() {
        let view = render_trend(&series(&[0.0, 150.0]), &layout(), YDirection::PriceUpIsScreenUp);
        assert_eq!(view.summary.unwrap().change_percent, 0.0);
    }

    #[test]
    fn test_direction_flag_flips_vertical_order() {
        let up = render_trend(&series(&[10.0, 20.0]), &layout(), YDirection::PriceUpIsScreenUp);
        assert!(up.points[1].y < up.points[0].y);

        let down = render_trend(&series(&[10.0, 20.0]), &layout(), YDirection::PriceUpIsScreenDown);
        assert!(down.points[1].y > down.points[0].y);
    }

    #[test]
    fn test_extrema_ties_take_first_occurrence() {
        let view = render_trend(
            &series(&[50.0, 100.0, 100.0, 20.0, 20.0]),
            &layout(),
            YDirection::PriceUpIsScreenUp,
        );
        let summary = view.summary.unwrap();
        assert_eq!(summary.max_index, 1);
        assert_eq!(summary.min_index, 3);
    }

    #[test]
    fn test_x_coordinates_evenly_spaced_within_plot() {
        let l = layout();
        let view = render_trend(
            &series(&[1.0, 2.0, 3.0, 4.0, 5.0]),
            &l,
            YDirection::PriceUpIsScreenUp,
        );
        let xs: Vec<f64> = view.points.iter().map(|p| p.x).collect();
        assert_eq!(xs[0], l.left_margin);
        assert!((xs[4] - (l.width - l.right_margin)).abs() < 1e-9);
        let step = xs[1] - xs[0];
        for w in xs.windows(2) {
            assert!((w[1] - w[0] - step).abs() < 1e-9);
        }
    }

    #[test]
    fn test_y_stays_within_padding() {
        let l = layout();
        let view = render_trend(
            &series(&[5.0, 50.0, 500.0]),
            &l,
            YDirection::PriceUpIsScreenUp,
        );
        for p in &view.points {
            assert!(p.y >= l.top_padding - 1e-9);
            assert!(p.y <= l.height - l.top_padding + 1e-9);
        }
    }

    #[test]
    fn test_area_polygon_closes_along_baseline() {
        let l = layout();
        let view = render_trend(&series(&[10.0, 30.0, 20.0]), &l, YDirection::PriceUpIsScreenUp);
        let n = view.points.len();
        assert_eq!(view.area[n].x, view.points[n - 1].x);
        assert_eq!(view.area[n].y, l.height - l.top_padding);
        assert_eq!(view.area[n + 1].x, view.points[0].x);
        assert_eq!(view.area[n + 1].y, l.height - l.top_padding);
    }

    #[test]
    fn test_malformed_prices_excluded_not_fatal() {
        let samples = vec![
            PriceSample::new(10.0),
            PriceSample::new(f64::NAN),
            PriceSample::new(30.0),
            PriceSample::new(f64::INFINITY),
        ];
        let view = render_trend(&samples, &layout(), YDirection::PriceUpIsScreenUp);
        assert_eq!(view.points.len(), 2);
        let summary = view.summary.unwrap();
        assert_eq!(summary.min, 10.0);
        assert_eq!(summary.max, 30.0);
        assert_eq!(summary.change_percent, 200.0);
    }

    #[test]
    fn test_all_malformed_behaves_like_empty() {
        let samples = vec![PriceSample::new(f64::NAN), PriceSample::new(f64::NEG_INFINITY)];
        let view = render_trend(&samples, &layout(), YDirection::PriceUpIsScreenUp);
        assert!(view.points.is_empty());
        assert!(view.summary.is_none());
    }
}
