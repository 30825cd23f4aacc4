//! Incremental collection of user-picked survey corners.

use crate::area::Parallelogram;
use crate::geo::GeoPoint;

/// Corners a user picks on the map. The fourth parallelogram corner is
/// always derivable, so it is never requested.
pub const REQUIRED_CORNERS: usize = 3;

/// Collects up to three map-picked corners for a survey area.
///
/// Single-owner mutable state for one interactive session; not internally
/// synchronized. Create one per area-definition flow and discard or `reset`
/// it when the flow ends.
#[derive(Debug, Clone, Default)]
pub struct AreaBuilder {
    vertices: Vec<GeoPoint>,
}

impl AreaBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a corner in pick order.
    ///
    /// Returns false and leaves the state unchanged once three corners are
    /// already held; the caller must `reset` before starting a new area.
    pub fn add_vertex(&mut self, p: GeoPoint) -> bool {
        if self.is_complete() {
            return false;
        }
        self.vertices.push(p);
        true
    }

    /// True once exactly three corners are held.
    pub fn is_complete(&self) -> bool {
        self.vertices.len() == REQUIRED_CORNERS
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Corners picked so far, in insertion order.
    pub fn vertices(&self) -> &[GeoPoint] {
        &self.vertices
    }

    /// The collected corners as a parallelogram, with the first pick as the
    /// shared corner. None until the builder is complete.
    pub fn parallelogram(&self) -> Option<Parallelogram> {
        if !self.is_complete() {
            return None;
        }
        Some(Parallelogram::new(
            self.vertices[0],
            self.vertices[1],
            self.vertices[2],
        ))
    }

    /// Survey area in square meters. None until the builder is complete.
    pub fn area_size(&self) -> Option<f64> {
        self.parallelogram().map(|area| area.area_m2())
    }

    /// Clear back to an empty builder. No other side effects.
    pub fn reset(&mut self) {
        self.vertices.clear();
    }
}
