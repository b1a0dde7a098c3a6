use crate::foundation::core::{Point, Viewport};

/// Number of corners the marker cycles through.
pub const WAYPOINT_COUNT: usize = 4;

/// The four inset viewport corners, in travel order:
/// top-left, top-right, bottom-right, bottom-left.
///
/// Computed once from the viewport at mount time and never updated.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct WaypointSet {
    points: [Point; WAYPOINT_COUNT],
}

impl WaypointSet {
    /// Inset each corner by `margin`, and the far corners additionally by `extent` (the marker's
    /// own size) so it stays on screen.
    ///
    /// When the viewport is too small to fit the marker, the far edge collapses onto the near
    /// one and the marker ends up cycling over a line or a single point.
    pub fn from_viewport(viewport: Viewport, margin: f64, extent: f64) -> Self {
        let near = margin;
        let far_x = (viewport.width - margin - extent).max(near);
        let far_y = (viewport.height - margin - extent).max(near);
        Self {
            points: [
                Point::new(near, near),
                Point::new(far_x, near),
                Point::new(far_x, far_y),
                Point::new(near, far_y),
            ],
        }
    }

    /// Waypoint at `index`, wrapping around the cycle.
    pub fn get(&self, index: usize) -> Point {
        self.points[index % WAYPOINT_COUNT]
    }

    /// Index that follows `index` in the cycle.
    pub fn next_index(index: usize) -> usize {
        (index + 1) % WAYPOINT_COUNT
    }

    /// All four points in travel order.
    pub fn points(&self) -> &[Point; WAYPOINT_COUNT] {
        &self.points
    }

    /// Position of `p` in the set, if it is exactly one of the waypoints.
    pub fn index_of(&self, p: Point) -> Option<usize> {
        self.points.iter().position(|w| *w == p)
    }

    /// True when all four corners coincide.
    pub fn is_degenerate(&self) -> bool {
        self.points.iter().all(|p| *p == self.points[0])
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/waypoints.rs"]
mod tests;
