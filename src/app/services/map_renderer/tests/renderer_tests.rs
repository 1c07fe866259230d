//! Tests for render orchestration and output formats

use super::{create_category_records, create_test_renderer};
use crate::app::models::MarkerRecord;
use crate::app::services::map_renderer::{MapRenderer, RenderFormat};
use crate::config::{Config, MapConfig, StylingConfig};

#[test]
fn test_html_page_uses_configured_center_and_zoom() {
    let renderer = create_test_renderer();

    let document = renderer.render(&[], RenderFormat::Html).unwrap();

    assert!(document.content.contains("setView([18.520679, 73.8565], 12)"));
    assert!(document.content.contains("leaflet/1.9.4/leaflet.js"));
    assert!(document.content.contains("tile.openstreetmap.org"));
}

#[test]
fn test_three_categories_each_get_first_label() {
    let renderer = create_test_renderer();

    let document = renderer
        .render(&create_category_records(), RenderFormat::Html)
        .unwrap();

    assert!(document.content.contains("markers/green_MarkerA.png"));
    assert!(document.content.contains("markers/yellow_MarkerA.png"));
    assert!(document.content.contains("markers/pink_MarkerA.png"));
    assert_eq!(document.stats.markers_rendered, 3);
    assert_eq!(document.stats.enrolled_markers, 1);
    assert_eq!(document.stats.skilled_markers, 1);
    assert_eq!(document.stats.placed_markers, 1);
}

#[test]
fn test_rendering_twice_produces_identical_documents() {
    let renderer = create_test_renderer();
    let records = create_category_records();

    let first = renderer.render(&records, RenderFormat::Html).unwrap();
    let second = renderer.render(&records, RenderFormat::Html).unwrap();

    assert_eq!(first.content, second.content);
    assert_eq!(first.stats, second.stats);
}

#[test]
fn test_non_finite_record_is_styled_but_not_emitted() {
    let renderer = create_test_renderer();
    let records = vec![
        MarkerRecord::new(f64::NAN, 73.5, "enrolled"),
        MarkerRecord::new(18.5, 73.5, "enrolled"),
    ];

    let document = renderer.render(&records, RenderFormat::Html).unwrap();

    // The skipped record still consumed label A, so the emitted one gets B
    assert!(!document.content.contains("green_MarkerA.png"));
    assert!(document.content.contains("green_MarkerB.png"));
    assert_eq!(document.stats.markers_styled, 2);
    assert_eq!(document.stats.markers_rendered, 1);
    assert_eq!(document.stats.markers_skipped, 1);
    assert_eq!(document.stats.enrolled_markers, 1);
}

#[test]
fn test_unknown_status_renders_gray_marker() {
    let renderer = create_test_renderer();
    let records = vec![MarkerRecord::new(18.5, 73.5, "mystery")];

    let document = renderer.render(&records, RenderFormat::Html).unwrap();

    assert!(document.content.contains("markers/gray_MarkerA.png"));
    assert!(document.content.contains("A (unknown)"));
    assert_eq!(document.stats.unknown_markers, 1);
}

#[test]
fn test_html_escapes_markup_in_title() {
    let mut config = Config::default();
    config.map.title = "Pune <east> & west".to_string();
    let renderer = MapRenderer::from_config(&config);

    let document = renderer.render(&[], RenderFormat::Html).unwrap();

    assert!(document
        .content
        .contains("<title>Pune &lt;east&gt; &amp; west</title>"));
}

#[test]
fn test_kml_places_coordinates_longitude_first() {
    let renderer = create_test_renderer();
    let records = vec![MarkerRecord::new(18.3, 73.3, "placed")];

    let document = renderer.render(&records, RenderFormat::Kml).unwrap();

    assert!(document.content.contains("<coordinates>73.3,18.3,0</coordinates>"));
    assert!(document.content.contains("<name>A</name>"));
    assert!(document.content.contains("<description>placed</description>"));
    assert!(document.content.contains("<href>markers/pink_MarkerA.png</href>"));
}

#[test]
fn test_kml_escapes_markup_in_document_name() {
    let mut config = Config::default();
    config.map.title = "east & west".to_string();
    let renderer = MapRenderer::from_config(&config);

    let document = renderer.render(&[], RenderFormat::Kml).unwrap();

    assert!(document.content.contains("<name>east &amp; west</name>"));
}

#[test]
fn test_kml_with_no_markers_is_still_a_complete_document() {
    let renderer = create_test_renderer();

    let document = renderer.render(&[], RenderFormat::Kml).unwrap();

    assert!(document.content.starts_with("<?xml"));
    assert!(document.content.contains("<Document>"));
    assert!(document.content.trim_end().ends_with("</kml>"));
    assert!(!document.content.contains("<Placemark>"));
}

#[test]
fn test_geojson_collection_structure() {
    let renderer = create_test_renderer();
    let records = create_category_records();

    let document = renderer.render(&records, RenderFormat::Geojson).unwrap();
    let value: serde_json::Value = serde_json::from_str(&document.content).unwrap();

    assert_eq!(value["type"], "FeatureCollection");
    let features = value["features"].as_array().unwrap();
    assert_eq!(features.len(), 3);
    // Longitude first, per RFC 7946
    assert_eq!(features[0]["geometry"]["coordinates"][0], 73.1);
    assert_eq!(features[0]["geometry"]["coordinates"][1], 18.1);
    assert_eq!(features[0]["properties"]["label"], "A");
    assert_eq!(features[0]["properties"]["status"], "enrolled");
    assert_eq!(features[2]["properties"]["icon"], "markers/pink_MarkerA.png");
}

#[test]
fn test_custom_assets_dir_flows_into_icon_paths() {
    let map = MapConfig::default();
    let styling = StylingConfig {
        assets_dir: "assets/icons".to_string(),
    };
    let renderer = MapRenderer::new(map, styling);
    let records = vec![MarkerRecord::new(18.5, 73.5, "enrolled")];

    let document = renderer.render(&records, RenderFormat::Html).unwrap();

    assert!(document.content.contains("assets/icons/green_MarkerA.png"));
}

#[test]
fn test_render_format_names_round_trip() {
    for format in [RenderFormat::Html, RenderFormat::Kml, RenderFormat::Geojson] {
        assert_eq!(RenderFormat::from_name(format.name()), Some(format));
    }
    assert_eq!(RenderFormat::from_name("pdf"), None);
}

#[test]
fn test_render_format_default_filenames() {
    assert_eq!(RenderFormat::Html.default_filename(), "map.html");
    assert_eq!(RenderFormat::Kml.default_filename(), "map.kml");
    assert_eq!(RenderFormat::Geojson.default_filename(), "map.geojson");
    assert_eq!(RenderFormat::default(), RenderFormat::Html);
}
