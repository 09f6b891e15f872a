//! Chart configuration document handed to the rendering library
//!
//! Field names follow the Chart.js configuration vocabulary so the
//! serialized form can be passed to `new Chart(canvas, config)` as is.

use serde::{Deserialize, Serialize};

use crate::chart_spec::{ChartSpec, Dataset};
use crate::hook_config::PresentationOptions;

/// Chart types supported by the binding
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    Line,
}

/// Complete chart configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfiguration {
    #[serde(rename = "type")]
    pub chart_type: ChartType,
    pub data: ChartData,
    pub options: ChartOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub responsive: bool,
    pub maintain_aspect_ratio: bool,
    pub plugins: Plugins,
    pub scales: Scales,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plugins {
    pub title: Title,
    pub tooltip: Tooltip,
}

/// Title block shared by the chart and its axes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Title {
    pub display: bool,
    pub text: String,
}

impl Title {
    fn shown(text: &str) -> Self {
        Self {
            display: !text.is_empty(),
            text: text.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tooltip {
    pub mode: String,
    pub intersect: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scales {
    pub x: CategoryAxis,
    pub y: ValueAxis,
}

/// Time-like category axis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryAxis {
    pub title: Title,
}

/// Numeric axis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueAxis {
    pub begin_at_zero: bool,
    pub title: Title,
}

impl ChartConfiguration {
    /// Build the line chart document for `spec` with the given presentation
    pub fn line(spec: &ChartSpec, presentation: &PresentationOptions) -> Self {
        Self {
            chart_type: ChartType::Line,
            data: ChartData {
                labels: spec.labels.clone(),
                datasets: spec.datasets.clone(),
            },
            options: ChartOptions::from_presentation(presentation),
        }
    }

    pub fn series_count(&self) -> usize {
        self.data.datasets.len()
    }

    pub fn label_count(&self) -> usize {
        self.data.labels.len()
    }
}

impl ChartOptions {
    pub fn from_presentation(presentation: &PresentationOptions) -> Self {
        Self {
            responsive: presentation.responsive,
            maintain_aspect_ratio: presentation.maintain_aspect_ratio,
            plugins: Plugins {
                title: Title::shown(&presentation.title),
                tooltip: Tooltip {
                    mode: presentation.tooltip_mode.clone(),
                    intersect: presentation.tooltip_intersect,
                },
            },
            scales: Scales {
                x: CategoryAxis {
                    title: Title::shown(&presentation.x_axis_title),
                },
                y: ValueAxis {
                    begin_at_zero: presentation.begin_at_zero,
                    title: Title::shown(&presentation.y_axis_title),
                },
            },
        }
    }
}
