use tracing::debug;

use crate::{
    assemble::{
        cluster::{AnchorPolicy, cluster_lines},
        render::render_document,
    },
    consts::{CONFIDENCE_THRESHOLD, LINE_BREAK_RATIO},
    layout::element::Fragment,
};

/// Configuration for reading-order reconstruction.
#[derive(Debug, Clone)]
pub struct AssemblerConfig {
    /// Fragments at or below this confidence are dropped before clustering.
    pub confidence_threshold: f32,
    /// Fraction of the anchor height tolerated as vertical distance within a line.
    pub line_break_ratio: f32,
    /// Anchor maintenance policy for the line clusterer.
    pub anchor: AnchorPolicy,
}

impl Default for AssemblerConfig {
    fn default() -> Self {
        Self {
            confidence_threshold: CONFIDENCE_THRESHOLD,
            line_break_ratio: LINE_BREAK_RATIO,
            anchor: AnchorPolicy::FirstFragment,
        }
    }
}

/// Stateless pipeline turning an unordered fragment collection into readable
/// text: confidence filter, line clustering, left-to-right rendering.
///
/// Each invocation is independent; the assembler holds no per-document state
/// and may be shared across concurrent callers.
#[derive(Debug, Clone, Default)]
pub struct Assembler {
    pub config: AssemblerConfig,
}

impl Assembler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: AssemblerConfig) -> Self {
        Self { config }
    }

    /// Drops fragments at or below the confidence threshold. The surviving
    /// order is unspecified; the clusterer re-sorts anyway.
    pub fn filter_confident(&self, fragments: Vec<Fragment>) -> Vec<Fragment> {
        fragments
            .into_iter()
            .filter(|fragment| fragment.confidence > self.config.confidence_threshold)
            .collect()
    }

    /// Runs the full pipeline for one document and returns the newline-joined
    /// text. Degenerate input (no fragments, nothing above the confidence
    /// threshold, empty polygons) degrades to well-defined output; this never
    /// fails.
    pub fn assemble(&self, fragments: Vec<Fragment>) -> String {
        if fragments.is_empty() {
            return String::new();
        }

        let total = fragments.len();
        let confident = self.filter_confident(fragments);
        debug!(
            "{} of {} fragments kept after confidence filter",
            confident.len(),
            total
        );

        let lines = cluster_lines(confident, self.config.line_break_ratio, self.config.anchor);

        render_document(&lines)
    }
}
