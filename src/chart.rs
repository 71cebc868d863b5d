use serde::Serialize;

use crate::color::Rgb;

// ---------------------------------------------------------------------------
// Chart descriptions – what the rendering collaborator consumes
// ---------------------------------------------------------------------------
//
// The dashboard core never draws anything. Each interaction produces one of
// these declarative values (chart type, data rows, field-to-channel mapping,
// title) and hands it to a `render::Renderer`; how the artifact is drawn is
// the collaborator's business.

/// One slice of a pie chart: a label and the count it represents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PieSlice {
    pub label: String,
    pub value: u64,
}

/// Pie chart description: launch-outcome breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PieSpec {
    pub title: String,
    pub slices: Vec<PieSlice>,
}

impl PieSpec {
    /// Sum of all slice values.
    pub fn total(&self) -> u64 {
        self.slices.iter().map(|s| s.value).sum()
    }
}

/// One scatter point: payload mass on x, outcome class (0/1) on y, booster
/// category on the color channel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub x: f64,
    pub y: u8,
    pub category: String,
    pub color: Rgb,
}

/// Legend entry mapping a category label to its color.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendEntry {
    pub label: String,
    pub color: Rgb,
}

/// Scatter chart description: payload vs. outcome for the surviving records.
///
/// The channel labels name the source-table columns feeding each visual
/// channel, the way the reference dashboard labeled its axes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterSpec {
    pub x_label: String,
    pub y_label: String,
    pub color_label: String,
    pub points: Vec<ScatterPoint>,
    pub legend: Vec<LegendEntry>,
}

/// Tagged chart description, produced fresh on every interaction.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ChartSpec {
    Pie(PieSpec),
    Scatter(ScatterSpec),
}
