use crate::analysis::bbox::Bbox;
use crate::layout::element::Fragment;

/// An ordered run of fragments sharing one vertical band.
#[derive(Debug, Clone)]
pub struct Line {
    pub fragments: Vec<Fragment>,
}

impl Line {
    pub fn new(fragments: Vec<Fragment>) -> Self {
        Self { fragments }
    }

    /// Union box covering every member fragment.
    pub fn bbox(&self) -> Bbox {
        self.fragments
            .iter()
            .map(|fragment| fragment.bbox)
            .reduce(|acc, bbox| acc.union(&bbox))
            .unwrap_or_default()
    }
}
