//! Test utilities and fixtures for map renderer testing
//!
//! This module provides common fixture builders shared by the renderer and
//! styling test modules.

use crate::app::models::MarkerRecord;
use crate::app::services::map_renderer::MapRenderer;
use crate::config::Config;

// Test modules
mod renderer_tests;
mod styling_tests;

/// Helper to create one record per status category, in category order
pub fn create_category_records() -> Vec<MarkerRecord> {
    vec![
        MarkerRecord::new(18.1, 73.1, "enrolled"),
        MarkerRecord::new(18.2, 73.2, "skilled"),
        MarkerRecord::new(18.3, 73.3, "placed"),
    ]
}

/// Helper to create a renderer with default map and styling settings
pub fn create_test_renderer() -> MapRenderer {
    MapRenderer::from_config(&Config::default())
}
