use std::cmp::Ordering;

use crate::layout::line::Line;

/// Renders one line in left-to-right reading order, fragment texts joined by
/// a single space.
pub fn render_line(line: &Line) -> String {
    let mut fragments: Vec<_> = line.fragments.iter().collect();
    fragments.sort_by(|a, b| {
        a.bbox
            .min
            .x
            .partial_cmp(&b.bbox.min.x)
            .unwrap_or(Ordering::Equal)
    });

    fragments
        .iter()
        .map(|fragment| fragment.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Concatenates rendered lines top-to-bottom, one per `\n`-terminated row,
/// and trims the surrounding whitespace. An empty document renders as the
/// empty string.
pub fn render_document(lines: &[Line]) -> String {
    let mut result = String::new();
    for line in lines {
        result.push_str(&render_line(line));
        result.push('\n');
    }

    result.trim().to_string()
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;
    use crate::layout::element::Fragment;

    fn frag(text: &str, min_x: f32) -> Fragment {
        Fragment::new(
            text,
            0.9,
            &[
                Vec2::new(min_x, 90.0),
                Vec2::new(min_x + 40.0, 90.0),
                Vec2::new(min_x + 40.0, 110.0),
                Vec2::new(min_x, 110.0),
            ],
        )
    }

    #[test]
    fn test_render_line_sorts_left_to_right() {
        let line = Line::new(vec![frag("원", 250.0), frag("총액", 10.0), frag("15,000", 200.0)]);
        assert_eq!(render_line(&line), "총액 15,000 원");
    }

    #[test]
    fn test_render_document_joins_with_newline() {
        let lines = vec![
            Line::new(vec![frag("Store", 10.0), frag("Name", 60.0)]),
            Line::new(vec![frag("Total", 10.0), frag("15000", 60.0)]),
        ];
        assert_eq!(render_document(&lines), "Store Name\nTotal 15000");
    }

    #[test]
    fn test_render_empty_document() {
        assert_eq!(render_document(&[]), "");
    }

    #[test]
    fn test_render_trims_blank_edges() {
        // A line of empty-text fragments must not leave stray whitespace.
        let lines = vec![
            Line::new(vec![frag("", 10.0)]),
            Line::new(vec![frag("body", 10.0)]),
        ];
        assert_eq!(render_document(&lines), "body");
    }
}
