//! Self-contained Leaflet HTML page output
//!
//! The page pulls Leaflet 1.9.4 from the cdnjs CDN, centers the map per the
//! map config, adds the configured tile layer, and places one marker per
//! record from a JSON array embedded in the page.

use crate::app::models::Marker;
use crate::config::MapConfig;
use crate::constants::{LEAFLET_CSS_URL, LEAFLET_JS_URL};
use crate::Result;

/// Render the complete HTML page for the given markers
pub fn render_page(markers: &[Marker], map: &MapConfig) -> Result<String> {
    // "</" would terminate the surrounding script tag if a status string
    // carried it, so break the sequence inside the embedded JSON.
    let marker_json = serde_json::to_string(markers)?.replace("</", "<\\/");

    Ok(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>{title}</title>
  <link rel="stylesheet" href="{leaflet_css}">
  <style>
    html, body {{ height: 100%; margin: 0; }}
    #map {{ height: 100%; }}
  </style>
</head>
<body>
  <div id="map"></div>
  <script src="{leaflet_js}"></script>
  <script>
    var map = L.map('map').setView([{center_lat}, {center_lng}], {zoom});
    L.tileLayer('{tile_url}', {{
      attribution: '{tile_attribution}'
    }}).addTo(map);

    var markers = {marker_json};
    markers.forEach(function (m) {{
      L.marker([m.lat, m.lng], {{
        icon: L.icon({{
          iconUrl: m.icon,
          iconSize: [32, 32],
          iconAnchor: [16, 32],
          popupAnchor: [0, -32]
        }})
      }}).addTo(map).bindPopup(m.title);
    }});
  </script>
</body>
</html>
"#,
        title = escape_html(&map.title),
        leaflet_css = LEAFLET_CSS_URL,
        leaflet_js = LEAFLET_JS_URL,
        center_lat = map.center_lat,
        center_lng = map.center_lng,
        zoom = map.zoom,
        tile_url = map.tile_url,
        tile_attribution = map.tile_attribution,
        marker_json = marker_json,
    ))
}

/// Escape text for embedding in HTML element content
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
