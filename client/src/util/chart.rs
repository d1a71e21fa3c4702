//! Bar geometry for the category distribution chart.

#[cfg(test)]
#[path = "chart_test.rs"]
mod chart_test;

use catalog::CategoryCount;

/// Fraction of each slot left empty between bars.
const GAP_RATIO: f64 = 0.2;

/// One bar in SVG user units; `y` grows downward from the top edge.
#[derive(Clone, Debug, PartialEq)]
pub struct Bar {
    pub label: String,
    pub count: usize,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Bar {
    /// Horizontal center, for the axis label.
    pub fn center(&self) -> f64 {
        self.x + self.width / 2.0
    }
}

/// Lay out one bar per category across a `width` x `height` plot area.
///
/// Bars keep histogram order. The tallest bar fills the full height; a
/// zero count gets a zero-height bar.
#[allow(clippy::cast_precision_loss)]
pub fn bars(histogram: &[CategoryCount], width: f64, height: f64) -> Vec<Bar> {
    let Some(max) = histogram.iter().map(|c| c.count).max() else {
        return Vec::new();
    };
    let slot = width / histogram.len() as f64;
    let bar_width = slot * (1.0 - GAP_RATIO);
    histogram
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let bar_height = if max == 0 {
                0.0
            } else {
                height * entry.count as f64 / max as f64
            };
            Bar {
                label: entry.category_id.clone(),
                count: entry.count,
                x: slot * i as f64 + (slot - bar_width) / 2.0,
                y: height - bar_height,
                width: bar_width,
                height: bar_height,
            }
        })
        .collect()
}
