//! Field parsing utilities for marker CSV records
//!
//! Coordinate fields are parsed best-effort: plain decimal degrees first,
//! then a degrees-minutes-seconds fallback for values exported from mapping
//! tools (e.g. `18°31'14.4"N`). A field that fails both parses yields no
//! value and the caller substitutes the NaN sentinel.

/// Parse a coordinate field as decimal degrees.
///
/// ASCII whitespace around the field is ignored; field content itself is
/// parsed whole (no numeric-prefix salvage). Returns `None` when the value
/// is neither a decimal number nor a DMS expression.
pub fn parse_coordinate(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(value) = trimmed.parse::<f64>() {
        return Some(value);
    }

    parse_dms(trimmed)
}

/// Parse a degrees-minutes-seconds coordinate such as `73°51'23.4"E`.
///
/// Accepts one to three numeric components (degrees, minutes, seconds) and
/// an optional trailing hemisphere letter; `S` and `W` negate the result.
pub fn parse_dms(raw: &str) -> Option<f64> {
    let mut value = raw.trim();
    let mut sign = 1.0;

    if let Some(last) = value.chars().last() {
        match last {
            'N' | 'E' => {
                value = value[..value.len() - 1].trim_end();
            }
            'S' | 'W' => {
                sign = -1.0;
                value = value[..value.len() - 1].trim_end();
            }
            _ => {}
        }
    }

    let cleaned = value.replace(['°', '\'', '"'], " ");
    let mut components = cleaned.split_whitespace();

    let degrees: f64 = components.next()?.parse().ok()?;
    let minutes: f64 = match components.next() {
        Some(part) => part.parse().ok()?,
        None => 0.0,
    };
    let seconds: f64 = match components.next() {
        Some(part) => part.parse().ok()?,
        None => 0.0,
    };

    // More than three components is not a coordinate
    if components.next().is_some() {
        return None;
    }

    if !(0.0..60.0).contains(&minutes) || !(0.0..60.0).contains(&seconds) {
        return None;
    }

    Some(sign * (degrees + minutes / 60.0 + seconds / 3600.0))
}

/// Strip a single trailing carriage return left by CRLF line endings.
///
/// Only the line terminator is removed; all other whitespace in the line
/// stays significant.
pub fn strip_line_terminator(line: &str) -> &str {
    line.strip_suffix('\r').unwrap_or(line)
}
