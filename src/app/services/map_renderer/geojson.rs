//! GeoJSON FeatureCollection output
//!
//! One point `Feature` per marker, coordinates longitude-first per RFC 7946,
//! with status, label, and icon path carried as feature properties.

use serde_json::json;

use crate::app::models::Marker;
use crate::Result;

/// Render a pretty-printed GeoJSON FeatureCollection for the given markers
pub fn render_collection(markers: &[Marker]) -> Result<String> {
    let features: Vec<serde_json::Value> = markers
        .iter()
        .map(|marker| {
            json!({
                "type": "Feature",
                "geometry": {
                    "type": "Point",
                    "coordinates": [marker.lng, marker.lat],
                },
                "properties": {
                    "status": marker.status,
                    "label": marker.label,
                    "icon": marker.icon,
                    "title": marker.title,
                },
            })
        })
        .collect();

    let collection = json!({
        "type": "FeatureCollection",
        "features": features,
    });

    let mut document = serde_json::to_string_pretty(&collection)?;
    document.push('\n');
    Ok(document)
}
