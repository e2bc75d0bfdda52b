//! Simulated daily analytics series.
//!
//! Series are generated from any `RngCore`, so tests pass a seeded generator
//! and callers can pass `OsRng`.

use rand_core::RngCore;

use crate::stats::format_trend;

/// Lowest generated daily value.
pub const MIN_DAILY_VALUE: u32 = 20;
/// Width of the generated value range; values fall in `20..=119`.
pub const DAILY_VALUE_SPAN: u32 = 100;
/// Days per generated chart.
pub const CHART_DAYS: u32 = 30;
/// Trailing days drawn as bars.
pub const BAR_WINDOW: usize = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ChartPoint {
    /// 1-based day number.
    pub day: u32,
    pub value: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ChartSeries {
    pub title: String,
    pub points: Vec<ChartPoint>,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ChartSummary {
    pub max: u32,
    /// Mean rounded down.
    pub average: u32,
    /// Change from the first to the last day, e.g. `"+12.0%"`; see [`format_trend`].
    pub trend: String,
}

/// A chart ready for display: title, summary badge and the bars of the trailing window.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ChartPanel {
    pub title: String,
    pub summary: ChartSummary,
    pub bars: Vec<ChartPoint>,
    /// Bar heights as a percentage of the series maximum, parallel to `bars`.
    pub heights: Vec<f64>,
}

impl ChartPanel {
    pub fn of(series: &ChartSeries) -> Self {
        let bars = series.window(BAR_WINDOW);
        ChartPanel {
            title: series.title.clone(),
            summary: series.summary(),
            heights: series.bar_heights(bars),
            bars: bars.to_vec(),
        }
    }
}

/// A live counter on the analytics tab, e.g. Active Users `1,247` `+12%`.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RealtimeMetric {
    pub label: String,
    pub value: String,
    pub trend: String,
}

impl RealtimeMetric {
    pub fn new(label: impl Into<String>, value: impl Into<String>, trend: impl Into<String>) -> Self {
        RealtimeMetric { label: label.into(), value: value.into(), trend: trend.into() }
    }
}

impl ChartSeries {
    pub fn new(title: impl Into<String>, values: impl IntoIterator<Item = u32>) -> Self {
        let points = values
            .into_iter()
            .zip(1u32..)
            .map(|(value, day)| ChartPoint { day, value })
            .collect();
        ChartSeries { title: title.into(), points }
    }

    /// `days` random daily values in `20..=119`.
    pub fn random<R: RngCore + ?Sized>(title: impl Into<String>, rng: &mut R, days: u32) -> Self {
        let values: Vec<u32> = (0..days)
            .map(|_| MIN_DAILY_VALUE + rng.next_u32() % DAILY_VALUE_SPAN)
            .collect();
        Self::new(title, values)
    }

    /// Max, floor-average and first-to-last trend. An empty series summarises
    /// to zeros with a `"+0.0%"` trend.
    pub fn summary(&self) -> ChartSummary {
        let (first, last) = match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => (first.value, last.value),
            _ => {
                return ChartSummary { max: 0, average: 0, trend: "+0.0%".to_string() };
            }
        };
        let max = self.points.iter().map(|p| p.value).max().unwrap_or(0);
        let total: u64 = self.points.iter().map(|p| u64::from(p.value)).sum();
        let average = (total / self.points.len() as u64) as u32;
        ChartSummary { max, average, trend: format_trend(f64::from(first), f64::from(last)) }
    }

    /// The trailing `n` points, as shown in the bar chart.
    pub fn window(&self, n: usize) -> &[ChartPoint] {
        let start = self.points.len().saturating_sub(n);
        &self.points[start..]
    }

    /// Bar heights for `points` as a percentage of the series maximum.
    pub fn bar_heights(&self, points: &[ChartPoint]) -> Vec<f64> {
        let max = self.summary().max;
        if max == 0 {
            return vec![0.0; points.len()];
        }
        points.iter().map(|p| f64::from(p.value) / f64::from(max) * 100.0).collect()
    }
}
