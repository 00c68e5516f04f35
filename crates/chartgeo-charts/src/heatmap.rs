//! Heatmaps: an x × y label grid colored through a color scale

use crate::{ChartDimensions, ChartMargin};
use chartgeo_core::{ColorScale, Label, Metadata, Range, Rect, Rgb};
use chartgeo_engine::{interpolate_color, sample_scale, sort_labels};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Number of color samples in the legend gradient
pub const LEGEND_STEPS: usize = 5;

/// Fill for grid positions without data
const EMPTY_CELL: Rgb = Rgb::new(0xF9, 0xFA, 0xFB);

/// Input cell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatmapCell {
    pub x: Label,
    pub y: Label,
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl HeatmapCell {
    pub fn new(x: impl Into<Label>, y: impl Into<Label>, value: f64) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
            value,
            metadata: None,
        }
    }
}

/// Cell size: a square edge or explicit width/height
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellSize {
    Square(f64),
    Rect { width: f64, height: f64 },
}

impl CellSize {
    pub fn width(&self) -> f64 {
        match *self {
            Self::Square(size) => size,
            Self::Rect { width, .. } => width,
        }
    }

    pub fn height(&self) -> f64 {
        match *self {
            Self::Square(size) => size,
            Self::Rect { height, .. } => height,
        }
    }
}

impl Default for CellSize {
    fn default() -> Self {
        Self::Square(40.0)
    }
}

/// Heatmap configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeatmapConfig {
    pub aspect_ratio: f64,
    pub padding: ChartMargin,
    pub cell_size: CellSize,
    pub cell_gap: f64,
    pub color_scale: ColorScale,
    pub empty_color: Rgb,
    /// Column order; defaults to the sorted unique x-labels of the data
    pub x_labels: Option<Vec<Label>>,
    /// Row order; defaults to the sorted unique y-labels of the data
    pub y_labels: Option<Vec<Label>>,
    pub x_title: Option<String>,
    pub y_title: Option<String>,
}

impl Default for HeatmapConfig {
    fn default() -> Self {
        Self {
            aspect_ratio: 1.0,
            padding: ChartMargin::heatmap(),
            cell_size: CellSize::default(),
            cell_gap: 1.0,
            color_scale: ColorScale::default(),
            empty_color: EMPTY_CELL,
            x_labels: None,
            y_labels: None,
            x_title: None,
            y_title: None,
        }
    }
}

impl HeatmapConfig {
    pub fn color_scale(mut self, scale: ColorScale) -> Self {
        self.color_scale = scale;
        self
    }

    pub fn cell_size(mut self, width: f64, height: f64) -> Self {
        self.cell_size = CellSize::Rect { width, height };
        self
    }

    pub fn cell_gap(mut self, gap: f64) -> Self {
        self.cell_gap = gap;
        self
    }

    pub fn x_labels(mut self, labels: Vec<Label>) -> Self {
        self.x_labels = Some(labels);
        self
    }

    pub fn y_labels(mut self, labels: Vec<Label>) -> Self {
        self.y_labels = Some(labels);
        self
    }

    pub fn dimensions(&self) -> ChartDimensions {
        ChartDimensions::from_aspect_ratio(self.aspect_ratio).with_margin(self.padding)
    }
}

/// One positioned grid cell
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeatmapCellGeometry {
    pub x: Label,
    pub y: Label,
    pub column: usize,
    pub row: usize,
    /// 0 for empty cells
    pub value: f64,
    /// No data point existed for this position
    pub empty: bool,
    pub color: Rgb,
    pub rect: Rect,
}

/// Legend gradient stop
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LegendStop {
    pub value: f64,
    pub color: Rgb,
}

/// Complete heatmap geometry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeatmapGeometry {
    pub view_box: String,
    pub x_labels: Vec<Label>,
    pub y_labels: Vec<Label>,
    /// Row-major: every column of row 0, then row 1, ...
    pub cells: Vec<HeatmapCellGeometry>,
    /// Horizontal center of each column (label anchors)
    pub column_centers: Vec<f64>,
    /// Vertical center of each row
    pub row_centers: Vec<f64>,
    /// Total grid extent including gaps
    pub grid_width: f64,
    pub grid_height: f64,
    /// Value range the color scale maps over
    pub value_range: Range,
    pub legend: Vec<LegendStop>,
}

/// Compute heatmap geometry.
///
/// Every (x, y) combination gets a cell; positions without data are
/// zero-filled and flagged `empty`. When several cells share a position the
/// last one wins.
pub fn compute_heatmap(data: &[HeatmapCell], config: &HeatmapConfig) -> HeatmapGeometry {
    let dims = config.dimensions();
    let margin = config.padding;
    let (cell_width, cell_height) = (config.cell_size.width(), config.cell_size.height());
    let gap = config.cell_gap;

    let x_labels = config
        .x_labels
        .clone()
        .unwrap_or_else(|| sort_labels(data.iter().map(|c| c.x.clone()).collect()));
    let y_labels = config
        .y_labels
        .clone()
        .unwrap_or_else(|| sort_labels(data.iter().map(|c| c.y.clone()).collect()));

    // a broken scale is reported once and paints everything its first stop
    let flat_color = match config.color_scale.validate() {
        Ok(()) => None,
        Err(e) => {
            tracing::warn!("heatmap color scale: {}", e);
            Some(config.color_scale.first_stop())
        }
    };
    let scale = config.color_scale.clone().fit(data.iter().map(|c| c.value));
    let color_at = |value: f64| flat_color.unwrap_or_else(|| interpolate_color(&scale, value));

    let lookup: HashMap<(String, String), &HeatmapCell> = data
        .iter()
        .map(|c| ((c.x.to_string(), c.y.to_string()), c))
        .collect();

    let column_x = |i: usize| margin.left + i as f64 * (cell_width + gap);
    let row_y = |i: usize| margin.top + i as f64 * (cell_height + gap);

    let cells = y_labels
        .iter()
        .enumerate()
        .flat_map(|(row, y)| {
            x_labels.iter().enumerate().map(move |(column, x)| (row, y, column, x))
        })
        .map(|(row, y, column, x)| {
            let found = lookup.get(&(x.to_string(), y.to_string()));
            let value = found.map(|c| c.value).unwrap_or(0.0);
            HeatmapCellGeometry {
                x: x.clone(),
                y: y.clone(),
                column,
                row,
                value,
                empty: found.is_none(),
                color: match found {
                    Some(_) => color_at(value),
                    None => config.empty_color,
                },
                rect: Rect::new(column_x(column), row_y(row), cell_width, cell_height),
            }
        })
        .collect::<Vec<_>>();

    let grid_extent = |count: usize, size: f64| {
        if count == 0 {
            0.0
        } else {
            count as f64 * size + (count - 1) as f64 * gap
        }
    };

    let legend = match flat_color {
        Some(color) => vec![LegendStop {
            value: scale.resolved_min(),
            color,
        }],
        None => sample_scale(&scale, LEGEND_STEPS)
            .into_iter()
            .map(|(value, color)| LegendStop { value, color })
            .collect(),
    };

    tracing::trace!(
        kind = "heatmap",
        columns = x_labels.len(),
        rows = y_labels.len(),
        "computed chart geometry"
    );

    HeatmapGeometry {
        view_box: dims.viewbox(),
        column_centers: (0..x_labels.len())
            .map(|i| column_x(i) + cell_width / 2.0)
            .collect(),
        row_centers: (0..y_labels.len())
            .map(|i| row_y(i) + cell_height / 2.0)
            .collect(),
        grid_width: grid_extent(x_labels.len(), cell_width),
        grid_height: grid_extent(y_labels.len(), cell_height),
        value_range: Range::new(scale.resolved_min(), scale.resolved_max()),
        x_labels,
        y_labels,
        cells,
        legend,
    }
}
