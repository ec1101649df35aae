// Numan Thabit 2025
//! Typed mirror of the Grafana dashboard JSON.
//!
//! Field declaration order is the serialized key order, so reordering fields
//! here changes the emitted document.

use serde::Serialize;
use serde_json::Value;

use crate::error::{DashboardError, Result};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub title: String,
    pub uid: String,
    pub tags: Vec<String>,
    pub timezone: String,
    pub schema_version: u32,
    pub version: u32,
    pub refresh: String,
    pub time: TimeRange,
    pub timepicker: TimePicker,
    pub panels: Vec<Panel>,
    pub templating: EntryList,
    pub annotations: EntryList,
    pub editable: bool,
    pub fiscal_year_start_month: u8,
    /// 0 = default, 1 = shared crosshair, 2 = shared tooltip.
    pub graph_tooltip: u8,
    pub links: Vec<Value>,
    pub live_now: bool,
    pub style: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeRange {
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimePicker {
    pub refresh_intervals: Vec<String>,
}

/// `{ "list": [...] }` wrapper used by `templating` and `annotations`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EntryList {
    pub list: Vec<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Panel {
    pub id: u32,
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub description: String,
    pub grid_pos: GridPos,
    pub datasource: DatasourceRef,
    pub targets: Vec<QueryTarget>,
    pub field_config: FieldConfig,
    pub options: PanelOptions,
}

/// Panel placement on Grafana's 24-column grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GridPos {
    pub h: u32,
    pub w: u32,
    pub x: u32,
    pub y: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatasourceRef {
    #[serde(rename = "type")]
    pub kind: String,
    pub uid: String,
}

/// One query issued by a panel. `range = true` spans the dashboard time
/// window, `instant = true` asks for a single sample.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryTarget {
    pub datasource: DatasourceRef,
    pub expr: String,
    pub ref_id: String,
    pub legend_format: String,
    pub instant: bool,
    pub range: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldConfig {
    pub defaults: FieldDefaults,
    pub overrides: Vec<Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldDefaults {
    pub unit: String,
    pub min: i64,
    pub max: i64,
    pub color: ColorConfig,
    pub thresholds: Thresholds,
    pub custom: CustomFieldConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorConfig {
    pub mode: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ThresholdsMode {
    Absolute,
    Percentage,
}

/// Ordered severity bands. Built through [`Thresholds::new`] so the band
/// ordering can't be violated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Thresholds {
    mode: ThresholdsMode,
    steps: Vec<ThresholdStep>,
}

impl Thresholds {
    /// Validate and wrap `steps`.
    ///
    /// The first step must carry no value (it has no lower bound); every
    /// following step must carry a value strictly greater than the previous.
    pub fn new(mode: ThresholdsMode, steps: Vec<ThresholdStep>) -> Result<Self> {
        let Some((base, rest)) = steps.split_first() else {
            return Err(DashboardError::InvalidThresholds(
                "at least one step is required".into(),
            ));
        };
        if let Some(value) = base.value {
            return Err(DashboardError::InvalidThresholds(format!(
                "base step `{}` must have no lower bound, got {value}",
                base.color
            )));
        }

        let mut previous: Option<i64> = None;
        for step in rest {
            let Some(value) = step.value else {
                return Err(DashboardError::InvalidThresholds(format!(
                    "step `{}` is missing a value",
                    step.color
                )));
            };
            if let Some(prev) = previous {
                if value <= prev {
                    return Err(DashboardError::InvalidThresholds(format!(
                        "step `{}` value {value} must exceed previous value {prev}",
                        step.color
                    )));
                }
            }
            previous = Some(value);
        }

        Ok(Self { mode, steps })
    }

    pub fn absolute(steps: Vec<ThresholdStep>) -> Result<Self> {
        Self::new(ThresholdsMode::Absolute, steps)
    }

    /// Wrap steps whose ordering is fixed at compile time. Callers must keep
    /// a test that runs the same steps through [`Thresholds::new`].
    pub(crate) fn from_literal(mode: ThresholdsMode, steps: Vec<ThresholdStep>) -> Self {
        Self { mode, steps }
    }

    pub fn mode(&self) -> ThresholdsMode {
        self.mode
    }

    pub fn steps(&self) -> &[ThresholdStep] {
        &self.steps
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThresholdStep {
    pub color: String,
    /// `None` renders as `null`: the band has no lower bound.
    pub value: Option<i64>,
}

impl ThresholdStep {
    pub fn base(color: impl Into<String>) -> Self {
        Self {
            color: color.into(),
            value: None,
        }
    }

    pub fn at(color: impl Into<String>, value: i64) -> Self {
        Self {
            color: color.into(),
            value: Some(value),
        }
    }
}

/// Time-series rendering knobs under `fieldConfig.defaults.custom`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomFieldConfig {
    pub draw_style: String,
    pub line_interpolation: String,
    pub bar_alignment: i8,
    pub line_width: u32,
    pub fill_opacity: u32,
    pub gradient_mode: String,
    pub span_nulls: bool,
    pub show_points: String,
    pub point_size: u32,
    pub stacking: Stacking,
    pub axis_placement: String,
    pub axis_label: String,
    pub scale_distribution: ScaleDistribution,
    pub hide_from: HideFrom,
    pub thresholds_style: ThresholdsStyle,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Stacking {
    pub mode: String,
    pub group: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScaleDistribution {
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HideFrom {
    pub tooltip: bool,
    pub viz: bool,
    pub legend: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThresholdsStyle {
    pub mode: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PanelOptions {
    pub tooltip: TooltipOptions,
    pub legend: LegendOptions,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TooltipOptions {
    pub mode: String,
    pub sort: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendOptions {
    pub show_legend: bool,
    pub display_mode: String,
    pub placement: String,
    pub calcs: Vec<String>,
}
