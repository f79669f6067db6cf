//! Serializable run reports for tools and demos.

use crate::layout::FigureLayout;
use serde::Serialize;

/// Timing entry for a single rendering stage.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StageTiming {
    pub label: String,
    pub elapsed_ms: f64,
}

impl StageTiming {
    pub fn new(label: impl Into<String>, elapsed_ms: f64) -> Self {
        Self {
            label: label.into(),
            elapsed_ms,
        }
    }
}

/// Aggregated timing trace for one render.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingBreakdown {
    pub total_ms: f64,
    pub stages: Vec<StageTiming>,
}

impl TimingBreakdown {
    pub fn push(&mut self, label: impl Into<String>, elapsed_ms: f64) {
        self.stages.push(StageTiming::new(label, elapsed_ms));
    }
}

/// Summary of one completed render: figure geometry plus stage timings.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderReport {
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub rows: usize,
    pub cols: usize,
    pub images_placed: usize,
    pub titled: bool,
    pub layout: FigureLayout,
    pub timing: TimingBreakdown,
}
