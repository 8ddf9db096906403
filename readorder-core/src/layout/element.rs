use glam::Vec2;
use serde::Serialize;

use crate::analysis::bbox::Bbox;

/// One OCR-recognized unit of text (a word or a field) with its confidence
/// score and normalized bounding geometry.
#[derive(Clone, Serialize, Debug)]
pub struct Fragment {
    pub text: String,
    pub confidence: f32,
    pub bbox: Bbox,
}

impl Fragment {
    /// Builds a fragment from raw provider output, collapsing the bounding
    /// polygon to its axis-aligned box.
    pub fn new(text: impl Into<String>, confidence: f32, vertices: &[Vec2]) -> Self {
        Self {
            text: text.into(),
            confidence,
            bbox: Bbox::from_vertices(vertices),
        }
    }
}
