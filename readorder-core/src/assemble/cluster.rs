use std::cmp::Ordering;

use tracing::debug;

use crate::layout::{element::Fragment, line::Line};

/// How the reference position of a growing line is maintained.
///
/// The clusterer walks fragments in vertical order and measures each one
/// against the current line's anchor. The two policies differ only in when
/// that anchor is refreshed, but they group real documents differently: a
/// fixed anchor resists cumulative baseline drift across a long line, while a
/// rolling anchor follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnchorPolicy {
    /// The anchor is set once per line, from the line's first fragment, and
    /// never recomputed while the line grows.
    #[default]
    FirstFragment,
    /// The anchor is recomputed from every fragment walked, including ones
    /// merged into the current line.
    Rolling,
}

/// Groups fragments into reading lines by vertical proximity.
///
/// Fragments are sorted ascending by vertical center (the sort is stable, so
/// equal centers keep their relative order), then a single forward walk
/// appends each fragment to the current line when its center sits strictly
/// within `anchor_height * line_break_ratio` of the anchor center, and closes
/// the line otherwise. Lines come out ordered top-to-bottom.
pub fn cluster_lines(
    mut fragments: Vec<Fragment>,
    line_break_ratio: f32,
    anchor: AnchorPolicy,
) -> Vec<Line> {
    fragments.sort_by(|a, b| {
        a.bbox
            .center()
            .y
            .partial_cmp(&b.bbox.center().y)
            .unwrap_or(Ordering::Equal)
    });

    let mut lines = Vec::new();
    let mut current: Vec<Fragment> = Vec::new();
    let mut anchor_center_y = 0.0_f32;
    let mut anchor_height = 0.0_f32;

    for fragment in fragments {
        let center_y = fragment.bbox.center().y;
        let height = fragment.bbox.height();

        if current.is_empty() {
            anchor_center_y = center_y;
            anchor_height = height;
            current.push(fragment);
            continue;
        }

        let threshold = anchor_height * line_break_ratio;
        if (center_y - anchor_center_y).abs() < threshold {
            if anchor == AnchorPolicy::Rolling {
                anchor_center_y = center_y;
                anchor_height = height;
            }
            current.push(fragment);
        } else {
            lines.push(Line::new(std::mem::take(&mut current)));
            anchor_center_y = center_y;
            anchor_height = height;
            current.push(fragment);
        }
    }

    if !current.is_empty() {
        lines.push(Line::new(current));
    }

    debug!("clustered fragments into {} lines", lines.len());
    lines
}
