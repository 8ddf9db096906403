/// Minimum confidence score for a recognized fragment to be kept.
///
/// Fragments at or below this threshold are dropped before line clustering
/// (the comparison is a strict `>`). Low-confidence recognitions are noise
/// that would otherwise corrupt line grouping, so a single global threshold
/// is applied uniformly to every fragment regardless of which provider
/// produced it.
///
/// This threshold can be adjusted based on the specific use case:
/// - Lower values (0.3-0.5): Keep more fragments, may include garbled text
/// - Higher values (0.7-0.9): More conservative, may drop valid text
pub const CONFIDENCE_THRESHOLD: f32 = 0.6;

/// Fraction of the anchor fragment's height tolerated as vertical distance
/// within one line.
///
/// While clustering, a fragment joins the current line when the absolute
/// difference between its vertical center and the line anchor's center is
/// strictly below `anchor_height * LINE_BREAK_RATIO`. The value 0.6 means a
/// fragment may sit up to 60% of the anchor height away from the anchor's
/// centerline and still be read as part of the same line.
///
/// - Lower values (0.3-0.5): Stricter grouping, skewed scans split into
///   spurious lines
/// - Higher values (0.7-1.0): Looser grouping, adjacent lines of small text
///   may merge
pub const LINE_BREAK_RATIO: f32 = 0.6;
