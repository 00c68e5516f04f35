//! Mock chart specs for demo/development

use chrono::{Duration, Utc};
use rand::Rng;

use chartgeo_charts::{
    ActiveSegment, AreaConfig, AxisConfig, BarConfig, ChartSpec, HeatmapCell, HeatmapConfig,
    HistogramConfig, LabelFormat, LineConfig, PieConfig, RadarConfig, ScatterConfig,
    ScatterSeries,
};
use chartgeo_core::{ColorScale, DataPoint, LineStyle, Rgb, Series, SeriesId};
use chartgeo_engine::MarkerShape;

const MONTHS: [&str; 6] = ["Jan", "Feb", "Mar", "Apr", "May", "Jun"];
const WEEKDAYS: [&str; 5] = ["Mon", "Tue", "Wed", "Thu", "Fri"];

/// Random walk around a level, like a noisy metric
struct MockMetric {
    value: f64,
    volatility: f64,
    trend: f64,
}

impl MockMetric {
    fn new(initial: f64, volatility: f64) -> Self {
        Self {
            value: initial,
            volatility,
            trend: 0.0,
        }
    }

    fn tick(&mut self) -> f64 {
        let mut rng = rand::thread_rng();
        let random = (rng.r#gen::<f64>() - 0.5) * 2.0 * self.volatility;

        if rng.r#gen::<f64>() < 0.1 {
            self.trend = (rng.r#gen::<f64>() - 0.5) * self.volatility;
        }

        self.value = (self.value + self.trend + random).max(0.0);
        self.value
    }
}

/// One spec of every chart kind, filled with fresh random data
pub fn mock_specs() -> Vec<ChartSpec> {
    vec![
        revenue_area(),
        temperature_line(),
        quarterly_bar(),
        correlation_scatter(),
        activity_heatmap(),
        browser_pie(),
        player_radar(),
        latency_histogram(),
    ]
}

fn monthly_series(name: &str, initial: f64, volatility: f64) -> Series {
    let mut metric = MockMetric::new(initial, volatility);
    Series::from_pairs(
        SeriesId::random(),
        name,
        MONTHS.iter().map(|&m| (m, metric.tick().round())),
    )
}

fn revenue_area() -> ChartSpec {
    ChartSpec::Area {
        series: vec![
            monthly_series("Online", 120.0, 30.0),
            monthly_series("Retail", 80.0, 20.0),
        ],
        config: AreaConfig::default()
            .stacked(true)
            .show_average(true),
    }
}

/// Hourly readings over the last day, labeled with epoch milliseconds
fn temperature_line() -> ChartSpec {
    let start = Utc::now() - Duration::hours(24);
    let mut metric = MockMetric::new(18.0, 1.5);

    let readings = (0..24).map(|hour| {
        let at = start + Duration::hours(hour);
        (at.timestamp_millis() as f64, (metric.tick() * 10.0).round() / 10.0)
    });

    let outdoor = Series::from_pairs(SeriesId::random(), "Outdoor", readings);
    let indoor = Series::from_pairs(
        SeriesId::random(),
        "Indoor",
        outdoor.data.iter().map(|p| (p.label.clone(), 21.0)),
    )
    .with_line_style(LineStyle::Dashed);

    let mut config = LineConfig::default().show_area(true);
    config.x_axis = AxisConfig::default().with_format(LabelFormat::Date {
        pattern: "%H:%M".to_string(),
    });
    config.y_axis = AxisConfig::default()
        .with_title("Temperature")
        .with_unit("°C")
        .with_format(LabelFormat::Decimal { decimals: 1 });

    ChartSpec::Line {
        series: vec![outdoor, indoor],
        config,
    }
}

fn quarterly_bar() -> ChartSpec {
    let mut rng = rand::thread_rng();
    let quarter = |year: &str, rng: &mut rand::rngs::ThreadRng| {
        Series::from_pairs(
            year,
            year,
            ["Q1", "Q2", "Q3", "Q4"].map(|q| (q, rng.gen_range(20..120) as f64)),
        )
    };

    ChartSpec::Bar {
        series: vec![quarter("2023", &mut rng), quarter("2024", &mut rng)],
        config: BarConfig::default(),
    }
}

fn correlation_scatter() -> ChartSpec {
    let mut rng = rand::thread_rng();
    let points = (0..40).map(|_| {
        let x = rng.r#gen::<f64>() * 100.0;
        (x, 0.8 * x + 10.0 + (rng.r#gen::<f64>() - 0.5) * 30.0)
    });
    let series: Vec<(f64, f64)> = points.collect();

    ChartSpec::Scatter {
        series: vec![
            ScatterSeries::from_xy("ads", "Ad spend vs sales", series)
                .with_shape(MarkerShape::Diamond),
        ],
        config: ScatterConfig::default()
            .start_at_zero(true, true)
            .show_regression_line(true),
    }
}

fn activity_heatmap() -> ChartSpec {
    let mut rng = rand::thread_rng();
    let mut data = Vec::new();
    for day in WEEKDAYS {
        for hour in (8..18).step_by(2) {
            // leave a few gaps so empty cells show up
            if rng.r#gen::<f64>() < 0.1 {
                continue;
            }
            data.push(HeatmapCell::new(day, hour, rng.gen_range(0..50) as f64));
        }
    }

    let scale = ColorScale::sequential(vec![
        Rgb::new(0xF7, 0xFB, 0xFF),
        Rgb::new(0x6B, 0xAE, 0xD6),
        Rgb::new(0x08, 0x30, 0x6B),
    ]);

    ChartSpec::Heatmap {
        data,
        config: HeatmapConfig::default()
            .color_scale(scale)
            .x_labels(WEEKDAYS.iter().map(|&d| d.into()).collect()),
    }
}

fn browser_pie() -> ChartSpec {
    let mut rng = rand::thread_rng();
    let data = ["Chrome", "Safari", "Firefox", "Edge", "Other"]
        .iter()
        .map(|&name| DataPoint::new(name, rng.gen_range(5..60) as f64))
        .collect();

    ChartSpec::Pie {
        data,
        config: PieConfig::default()
            .donut(45.0)
            .active_segment(ActiveSegment::Index(0))
            .explode(vec![0]),
    }
}

fn player_radar() -> ChartSpec {
    let mut rng = rand::thread_rng();
    let axes = ["Speed", "Power", "Range", "Armor", "Magic"];
    let player = |name: &str, rng: &mut rand::rngs::ThreadRng| {
        Series::from_pairs(
            SeriesId::random(),
            name,
            axes.map(|a| (a, rng.gen_range(30..100) as f64)),
        )
    };

    ChartSpec::Radar {
        series: vec![player("Knight", &mut rng), player("Mage", &mut rng)],
        config: RadarConfig::default().max_value(100.0),
    }
}

/// Roughly bell-shaped latencies (sum of uniforms)
fn latency_histogram() -> ChartSpec {
    let mut rng = rand::thread_rng();
    let values = (0..500)
        .map(|_| (0..4).map(|_| rng.r#gen::<f64>() * 50.0).sum::<f64>())
        .collect();

    let mut config = HistogramConfig::default().bin_count(12);
    config.x_axis = AxisConfig::default().with_unit("ms");

    ChartSpec::Histogram { values, config }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_specs_cover_every_kind() {
        let specs = mock_specs();
        let kinds: Vec<&str> = specs.iter().map(ChartSpec::kind).collect();
        assert_eq!(
            kinds,
            vec!["area", "line", "bar", "scatter", "heatmap", "pie", "radar", "histogram"]
        );
    }

    #[test]
    fn test_mock_metric_stays_non_negative() {
        let mut metric = MockMetric::new(1.0, 5.0);
        for _ in 0..100 {
            assert!(metric.tick() >= 0.0);
        }
    }
}
