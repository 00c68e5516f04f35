// File: crates/chartgeo-charts/tests/specs.rs
// Purpose: JSON chart specs for every kind parse, compute and serialize.

use chartgeo_charts::{ChartGeometry, ChartSpec, GeometryCache};
use std::sync::Arc;

const SPECS: &str = r##"[
  {"type": "area",
   "series": [{"id": "views", "name": "Page Views",
               "data": [{"x": "Jan", "y": 100}, {"x": "Feb", "y": 150}, {"x": "Mar", "y": 200}]}],
   "config": {"show_average": true}},
  {"type": "line",
   "series": [{"id": "temp", "name": "Temp", "line_style": "dashed",
               "data": [{"x": 1, "y": 12.5}, {"x": 2, "y": 18}, {"x": 3, "y": 15}]}],
   "config": {"y_axis": {"unit": "C", "format": {"kind": "decimal", "decimals": 1}}}},
  {"type": "bar",
   "series": [{"id": "a", "name": "2023", "data": [{"x": "A", "y": 10}, {"x": "B", "y": 20}]},
              {"id": "b", "name": "2024", "data": [{"x": "A", "y": 5}, {"x": "B", "y": 0}]}],
   "config": {"stacked": true}},
  {"type": "scatter",
   "series": [{"id": "s", "name": "Samples", "shape": "diamond",
               "data": [{"x": 1, "y": 2}, {"x": 2, "y": 4.1}, {"x": 3, "y": 5.9}]}],
   "config": {"show_regression_line": true}},
  {"type": "heatmap",
   "data": [{"x": "Mon", "y": "AM", "value": 3}, {"x": "Tue", "y": "PM", "value": 9}],
   "config": {"color_scale": {"type": "sequential", "colors": ["#f7fbff", "#08306b"]}}},
  {"type": "pie",
   "data": [{"label": "Chrome", "value": 60}, {"label": "Firefox", "value": 25}, {"label": "Other", "value": 15}],
   "config": {"donut": true, "active_segment": "Firefox"}},
  {"type": "radar",
   "series": [{"id": "r", "name": "Player",
               "data": [{"x": "Speed", "y": 80}, {"x": "Power", "y": 60}, {"x": "Range", "y": 40}]}]},
  {"type": "histogram",
   "values": [1, 2, 2, 3, 3, 3, 4, 4, 5],
   "config": {"bin_count": 4}}
]"##;

#[test]
fn every_kind_parses_and_computes() {
    let specs = ChartSpec::list_from_json(SPECS).expect("specs should parse");
    let kinds: Vec<&str> = specs.iter().map(ChartSpec::kind).collect();
    assert_eq!(
        kinds,
        vec!["area", "line", "bar", "scatter", "heatmap", "pie", "radar", "histogram"]
    );

    for spec in &specs {
        let geometry = spec.compute();
        assert_eq!(geometry.kind(), spec.kind());
        assert!(geometry.view_box().starts_with("0 0 "));

        let json = serde_json::to_value(&geometry).expect("geometry should serialize");
        assert_eq!(json["type"], spec.kind());
    }
}

#[test]
fn computed_details_survive_dispatch() {
    let specs = ChartSpec::list_from_json(SPECS).unwrap();

    match specs[1].compute() {
        ChartGeometry::Line(line) => {
            assert_eq!(line.series[0].dash_array, "6,4");
            assert!(line.y_ticks[0].label.ends_with(" C"));
            assert_eq!(line.y_ticks[0].label, "12.5 C");
        }
        other => panic!("expected line geometry, got {}", other.kind()),
    }

    match specs[2].compute() {
        // zero-valued stacked bar is dropped
        ChartGeometry::Bar(bar) => assert_eq!(bar.bars.len(), 3),
        other => panic!("expected bar geometry, got {}", other.kind()),
    }

    match specs[4].compute() {
        ChartGeometry::Heatmap(heatmap) => {
            assert_eq!(heatmap.cells.len(), 4);
            assert_eq!(heatmap.cells.iter().filter(|c| c.empty).count(), 2);
        }
        other => panic!("expected heatmap geometry, got {}", other.kind()),
    }

    match specs[5].compute() {
        ChartGeometry::Pie(pie) => {
            assert!(pie.segments[1].active);
            assert!(pie.inner_radius > 0.0);
        }
        other => panic!("expected pie geometry, got {}", other.kind()),
    }
}

#[test]
fn cache_serves_repeated_specs() {
    let specs = ChartSpec::list_from_json(SPECS).unwrap();
    let mut cache = GeometryCache::new(4);

    let first: Vec<Arc<ChartGeometry>> = specs.iter().map(|s| cache.get_or_compute(s)).collect();
    assert_eq!(cache.len(), 4);

    // the last four are still cached
    let again = cache.get_or_compute(&specs[7]);
    assert!(Arc::ptr_eq(&first[7], &again));
    assert_eq!(cache.hits(), 1);

    // cached geometry equals a fresh computation
    assert_eq!(*again, specs[7].compute());
}

#[test]
fn malformed_color_is_rejected() {
    let json = r##"[{"type": "pie", "data": [], "config": {"colors": ["#zzzzzz"]}}]"##;
    let err = ChartSpec::list_from_json(json).unwrap_err();
    assert!(err.to_string().contains("invalid chart config"));
}
