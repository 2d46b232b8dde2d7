//! Layout types - Output of track layout computation.

/// Computed geometry of the carousel track.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrackLayout {
    /// Full track width: both copies of the item sequence.
    pub width: f64,

    /// Track height (tallest item).
    pub height: f64,

    /// X position of each item relative to the track, in item order.
    pub item_x: Vec<f64>,
}

impl TrackLayout {
    /// Offset at which the second copy lines up with the first.
    pub fn half_width(&self) -> f64 {
        self.width / 2.0
    }
}
