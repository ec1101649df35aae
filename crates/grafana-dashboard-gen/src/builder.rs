// Numan Thabit 2025
//! Assembles the CPU usage dashboard from leaf sub-trees upward.
//!
//! Every `build_*` method is pure: the same builder always yields the same
//! tree, and no method touches the filesystem or environment.

use serde_json::Value;

use crate::config::DatasourceConfig;
use crate::model::{
    ColorConfig, CustomFieldConfig, Dashboard, DatasourceRef, EntryList, FieldConfig,
    FieldDefaults, GridPos, HideFrom, LegendOptions, Panel, PanelOptions, QueryTarget,
    ScaleDistribution, Stacking, ThresholdStep, Thresholds, ThresholdsMode, ThresholdsStyle,
    TimePicker, TimeRange, TooltipOptions,
};

pub const DASHBOARD_TITLE: &str = "CPU Usage Dashboard";
pub const DASHBOARD_UID: &str = "cpu-usage-dashboard";
pub const SCHEMA_VERSION: u32 = 38;
pub const CPU_QUERY: &str = "cpu_usage";
/// Red band starts here; Grafana draws the alert line at this value.
pub const ALERT_THRESHOLD_PERCENT: i64 = 80;
pub const WARN_THRESHOLD_PERCENT: i64 = 60;

const TAGS: [&str; 4] = ["demo", "prometheus", "monitoring", "cpu"];
const REFRESH_INTERVALS: [&str; 5] = ["5s", "10s", "30s", "1m", "5m"];

#[derive(Debug, Clone)]
pub struct DashboardBuilder {
    datasource: DatasourceRef,
}

impl DashboardBuilder {
    pub fn new(datasource: &DatasourceConfig) -> Self {
        Self {
            datasource: DatasourceRef {
                kind: datasource.kind.clone(),
                uid: datasource.uid.clone(),
            },
        }
    }

    pub fn build_root(&self) -> Dashboard {
        Dashboard {
            title: DASHBOARD_TITLE.to_string(),
            uid: DASHBOARD_UID.to_string(),
            tags: TAGS.iter().map(|tag| tag.to_string()).collect(),
            timezone: "browser".to_string(),
            schema_version: SCHEMA_VERSION,
            version: 1,
            refresh: "5s".to_string(),
            time: TimeRange {
                from: "now-15m".to_string(),
                to: "now".to_string(),
            },
            timepicker: TimePicker {
                refresh_intervals: REFRESH_INTERVALS.iter().map(|i| i.to_string()).collect(),
            },
            panels: vec![self.build_panel()],
            templating: EntryList::default(),
            annotations: EntryList::default(),
            editable: true,
            fiscal_year_start_month: 0,
            graph_tooltip: 1,
            links: Vec::<Value>::new(),
            live_now: false,
            style: "dark".to_string(),
        }
    }

    pub fn build_panel(&self) -> Panel {
        Panel {
            id: 1,
            kind: "timeseries".to_string(),
            title: "CPU Usage".to_string(),
            description: format!(
                "CPU usage percentage across all instances. Alert threshold is set at {ALERT_THRESHOLD_PERCENT}%."
            ),
            grid_pos: GridPos {
                h: 9,
                w: 24,
                x: 0,
                y: 0,
            },
            datasource: self.datasource.clone(),
            targets: vec![self.build_query_target()],
            field_config: self.build_field_config(),
            options: self.build_panel_options(),
        }
    }

    pub fn build_query_target(&self) -> QueryTarget {
        QueryTarget {
            datasource: self.datasource.clone(),
            expr: CPU_QUERY.to_string(),
            ref_id: "A".to_string(),
            legend_format: "{{instance}}".to_string(),
            instant: false,
            range: true,
        }
    }

    pub fn build_field_config(&self) -> FieldConfig {
        FieldConfig {
            defaults: FieldDefaults {
                unit: "percent".to_string(),
                min: 0,
                max: 100,
                color: ColorConfig {
                    mode: "thresholds".to_string(),
                },
                thresholds: self.build_thresholds(),
                custom: CustomFieldConfig {
                    draw_style: "line".to_string(),
                    line_interpolation: "linear".to_string(),
                    bar_alignment: 0,
                    line_width: 1,
                    fill_opacity: 10,
                    gradient_mode: "none".to_string(),
                    span_nulls: false,
                    show_points: "never".to_string(),
                    point_size: 5,
                    stacking: Stacking {
                        mode: "none".to_string(),
                        group: "A".to_string(),
                    },
                    axis_placement: "auto".to_string(),
                    axis_label: String::new(),
                    scale_distribution: ScaleDistribution {
                        kind: "linear".to_string(),
                    },
                    hide_from: HideFrom {
                        tooltip: false,
                        viz: false,
                        legend: false,
                    },
                    thresholds_style: ThresholdsStyle {
                        mode: "line".to_string(),
                    },
                },
            },
            overrides: Vec::new(),
        }
    }

    pub fn build_thresholds(&self) -> Thresholds {
        Thresholds::from_literal(ThresholdsMode::Absolute, threshold_steps())
    }

    pub fn build_panel_options(&self) -> PanelOptions {
        PanelOptions {
            tooltip: TooltipOptions {
                mode: "multi".to_string(),
                sort: "none".to_string(),
            },
            legend: LegendOptions {
                show_legend: true,
                display_mode: "list".to_string(),
                placement: "bottom".to_string(),
                calcs: Vec::new(),
            },
        }
    }
}

fn threshold_steps() -> Vec<ThresholdStep> {
    vec![
        ThresholdStep::base("green"),
        ThresholdStep::at("yellow", WARN_THRESHOLD_PERCENT),
        ThresholdStep::at("red", ALERT_THRESHOLD_PERCENT),
    ]
}
