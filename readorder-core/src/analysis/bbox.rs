use serde::Serialize;

/// A 2D axis-aligned bounding box represented by minimum and maximum points.
///
/// OCR providers describe fragment positions as arbitrary bounding polygons;
/// this structure is the canonical rectangle those polygons collapse to, and
/// it carries every geometric fact the reading-order pipeline needs: the left
/// edge, the vertical center, and the height.
#[derive(Clone, Copy, Debug, Default, Serialize)]
pub struct Bbox {
    /// The minimum point of the bounding box (top-left corner in image space).
    pub min: glam::Vec2,
    /// The maximum point of the bounding box (bottom-right corner in image space).
    pub max: glam::Vec2,
}

impl Bbox {
    /// Creates a new bounding box from minimum and maximum points.
    ///
    /// # Example
    /// ```
    /// use glam::Vec2;
    /// use readorder_core::analysis::bbox::Bbox;
    /// let bbox = Bbox::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 5.0));
    /// ```
    pub fn new(min: glam::Vec2, max: glam::Vec2) -> Self {
        Self { min, max }
    }

    /// Collapses a bounding polygon into its axis-aligned box.
    ///
    /// This is a total function: an empty vertex list degrades to the zero
    /// box rather than failing, because upstream detectors may legitimately
    /// return degenerate geometry for a fragment.
    ///
    /// # Example
    /// ```
    /// use glam::Vec2;
    /// use readorder_core::analysis::bbox::Bbox;
    /// let vertices = [
    ///     Vec2::new(10.0, 90.0),
    ///     Vec2::new(60.0, 90.0),
    ///     Vec2::new(60.0, 110.0),
    ///     Vec2::new(10.0, 110.0),
    /// ];
    /// let bbox = Bbox::from_vertices(&vertices);
    /// assert_eq!(bbox.min, Vec2::new(10.0, 90.0));
    /// assert_eq!(bbox.max, Vec2::new(60.0, 110.0));
    ///
    /// let degenerate = Bbox::from_vertices(&[]);
    /// assert_eq!(degenerate.height(), 0.0);
    /// ```
    pub fn from_vertices(vertices: &[glam::Vec2]) -> Self {
        let Some(&first) = vertices.first() else {
            return Self::default();
        };

        let (min, max) = vertices
            .iter()
            .fold((first, first), |(min, max), &v| (min.min(v), max.max(v)));

        Self { min, max }
    }

    /// Calculates the center point of the bounding box.
    ///
    /// The `y` component of the center is the primary ordering key used to
    /// decide line membership.
    ///
    /// # Example
    /// ```
    /// use glam::Vec2;
    /// use readorder_core::analysis::bbox::Bbox;
    /// let bbox = Bbox::new(Vec2::new(0.0, 0.0), Vec2::new(4.0, 2.0));
    /// assert_eq!(bbox.center(), Vec2::new(2.0, 1.0));
    /// ```
    pub fn center(&self) -> glam::Vec2 {
        (self.min + self.max) / 2.0
    }

    /// Horizontal extent of the box.
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    /// Vertical extent of the box.
    ///
    /// The line-break tolerance is expressed as a fraction of this value.
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Creates a union bounding box that encompasses both this box and another.
    ///
    /// # Example
    /// ```
    /// use glam::Vec2;
    /// use readorder_core::analysis::bbox::Bbox;
    ///
    /// let bbox1 = Bbox::new(Vec2::new(0.0, 0.0), Vec2::new(5.0, 5.0));
    /// let bbox2 = Bbox::new(Vec2::new(3.0, 3.0), Vec2::new(8.0, 8.0));
    /// let union = bbox1.union(&bbox2);
    ///
    /// assert_eq!(union.min, Vec2::new(0.0, 0.0));
    /// assert_eq!(union.max, Vec2::new(8.0, 8.0));
    /// ```
    pub fn union(&self, other: &Self) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }
}
