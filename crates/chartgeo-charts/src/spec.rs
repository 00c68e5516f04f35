//! # spec
//!
//! Serializable chart descriptions and the geometry they compute to.
//! Tagged-variant dispatch over every chart kind:
//!
//! ```json
//! {"type": "bar", "series": [...], "config": {"stacked": true}}
//! ```

use crate::{
    AreaConfig, AreaGeometry, BarChartGeometry, BarConfig, HeatmapCell, HeatmapConfig,
    HeatmapGeometry, HistogramConfig, HistogramGeometry, LineConfig, LineGeometry, PieConfig,
    PieGeometry, RadarConfig, RadarGeometry, ScatterConfig, ScatterGeometry, ScatterSeries,
    compute_area, compute_bar, compute_heatmap, compute_histogram, compute_line, compute_pie,
    compute_radar, compute_scatter,
};
use chartgeo_core::{ChartResult, DataPoint, Series};
use serde::{Deserialize, Serialize};

/// Input for one chart of any kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ChartSpec {
    Area {
        series: Vec<Series>,
        #[serde(default)]
        config: AreaConfig,
    },
    Line {
        series: Vec<Series>,
        #[serde(default)]
        config: LineConfig,
    },
    Bar {
        series: Vec<Series>,
        #[serde(default)]
        config: BarConfig,
    },
    Scatter {
        series: Vec<ScatterSeries>,
        #[serde(default)]
        config: ScatterConfig,
    },
    Heatmap {
        data: Vec<HeatmapCell>,
        #[serde(default)]
        config: HeatmapConfig,
    },
    Pie {
        data: Vec<DataPoint>,
        #[serde(default)]
        config: PieConfig,
    },
    Radar {
        series: Vec<Series>,
        #[serde(default)]
        config: RadarConfig,
    },
    Histogram {
        values: Vec<f64>,
        #[serde(default)]
        config: HistogramConfig,
    },
}

/// Computed geometry, tagged with the same `type` as its spec
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ChartGeometry {
    Area(AreaGeometry),
    Line(LineGeometry),
    Bar(BarChartGeometry),
    Scatter(ScatterGeometry),
    Heatmap(HeatmapGeometry),
    Pie(PieGeometry),
    Radar(RadarGeometry),
    Histogram(HistogramGeometry),
}

impl ChartSpec {
    /// Parse a single spec
    pub fn from_json(json: &str) -> ChartResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse a JSON array of specs
    pub fn list_from_json(json: &str) -> ChartResult<Vec<Self>> {
        Ok(serde_json::from_str(json)?)
    }

    /// Chart kind name, matching the `type` tag
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Area { .. } => "area",
            Self::Line { .. } => "line",
            Self::Bar { .. } => "bar",
            Self::Scatter { .. } => "scatter",
            Self::Heatmap { .. } => "heatmap",
            Self::Pie { .. } => "pie",
            Self::Radar { .. } => "radar",
            Self::Histogram { .. } => "histogram",
        }
    }

    /// Compute geometry for this chart
    pub fn compute(&self) -> ChartGeometry {
        match self {
            Self::Area { series, config } => ChartGeometry::Area(compute_area(series, config)),
            Self::Line { series, config } => ChartGeometry::Line(compute_line(series, config)),
            Self::Bar { series, config } => ChartGeometry::Bar(compute_bar(series, config)),
            Self::Scatter { series, config } => {
                ChartGeometry::Scatter(compute_scatter(series, config))
            }
            Self::Heatmap { data, config } => ChartGeometry::Heatmap(compute_heatmap(data, config)),
            Self::Pie { data, config } => ChartGeometry::Pie(compute_pie(data, config)),
            Self::Radar { series, config } => ChartGeometry::Radar(compute_radar(series, config)),
            Self::Histogram { values, config } => {
                ChartGeometry::Histogram(compute_histogram(values, config))
            }
        }
    }
}

impl ChartGeometry {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Area(_) => "area",
            Self::Line(_) => "line",
            Self::Bar(_) => "bar",
            Self::Scatter(_) => "scatter",
            Self::Heatmap(_) => "heatmap",
            Self::Pie(_) => "pie",
            Self::Radar(_) => "radar",
            Self::Histogram(_) => "histogram",
        }
    }

    pub fn view_box(&self) -> &str {
        match self {
            Self::Area(g) => &g.view_box,
            Self::Line(g) => &g.view_box,
            Self::Bar(g) => &g.view_box,
            Self::Scatter(g) => &g.view_box,
            Self::Heatmap(g) => &g.view_box,
            Self::Pie(g) => &g.view_box,
            Self::Radar(g) => &g.view_box,
            Self::Histogram(g) => &g.view_box,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chartgeo_core::ChartError;

    #[test]
    fn test_parse_with_default_config() {
        let spec = ChartSpec::from_json(
            r#"{"type":"area","series":[{"id":"v","name":"Views","data":[{"x":"Jan","y":100}]}]}"#,
        )
        .unwrap();
        assert_eq!(spec.kind(), "area");
        assert!(matches!(&spec, ChartSpec::Area { config, .. } if config.start_y_at_zero));
    }

    #[test]
    fn test_compute_keeps_kind() {
        let spec = ChartSpec::Pie {
            data: vec![DataPoint::new("a", 1.0), DataPoint::new("b", 3.0)],
            config: PieConfig::default(),
        };
        let geometry = spec.compute();
        assert_eq!(geometry.kind(), spec.kind());
        assert_eq!(geometry.view_box(), "0 0 1000 1000");
    }

    #[test]
    fn test_unknown_type_is_config_error() {
        let err = ChartSpec::from_json(r#"{"type":"gauge","series":[]}"#).unwrap_err();
        assert!(matches!(err, ChartError::Config(_)));
        assert!(err.to_string().starts_with("invalid chart config"));
    }

    #[test]
    fn test_geometry_json_is_tagged() {
        let spec = ChartSpec::Histogram {
            values: vec![1.0, 2.0, 3.0],
            config: HistogramConfig::default().bin_count(2),
        };
        let json = serde_json::to_value(spec.compute()).unwrap();
        assert_eq!(json["type"], "histogram");
        assert_eq!(json["bars"].as_array().unwrap().len(), 2);
    }
}
