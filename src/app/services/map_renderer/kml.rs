//! KML 2.2 document output
//!
//! One `Placemark` per marker: the marker label as the placemark name, the
//! status as the description, and an inline icon style pointing at the
//! marker's icon image. KML coordinates are longitude-first.

use crate::app::models::Marker;
use crate::config::MapConfig;

/// Render a complete KML document for the given markers
pub fn render_document(markers: &[Marker], map: &MapConfig) -> String {
    let mut lines = Vec::new();

    lines.push(r#"<?xml version="1.0" encoding="UTF-8"?>"#.to_string());
    lines.push(r#"<kml xmlns="http://www.opengis.net/kml/2.2">"#.to_string());
    lines.push("  <Document>".to_string());
    lines.push(format!("    <name>{}</name>", xml_escape(&map.title)));

    for marker in markers {
        lines.push("    <Placemark>".to_string());
        lines.push(format!("      <name>{}</name>", marker.label));
        lines.push(format!(
            "      <description>{}</description>",
            xml_escape(marker.status)
        ));
        lines.push("      <Style>".to_string());
        lines.push("        <IconStyle>".to_string());
        lines.push("          <Icon>".to_string());
        lines.push(format!(
            "            <href>{}</href>",
            xml_escape(&marker.icon)
        ));
        lines.push("          </Icon>".to_string());
        lines.push("        </IconStyle>".to_string());
        lines.push("      </Style>".to_string());
        lines.push("      <Point>".to_string());
        lines.push(format!(
            "        <coordinates>{},{},0</coordinates>",
            marker.lng, marker.lat
        ));
        lines.push("      </Point>".to_string());
        lines.push("    </Placemark>".to_string());
    }

    lines.push("  </Document>".to_string());
    lines.push("</kml>".to_string());

    let mut document = lines.join("\n");
    document.push('\n');
    document
}

/// Escape text for embedding in XML element content
fn xml_escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
