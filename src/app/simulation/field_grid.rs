//! Two-pole vector grid backing the `DipoleGrid` field model.
//!
//! Superposes inverse-square contributions from the two pole faces and
//! rescales the sampled magnitude by the grid mean so it lands near the
//! configured peak field. This is a visual surrogate, not a solved
//! magnetostatic field, and carries no normalization guarantee.

use ndarray::{Array, Array1, Array2};

/// Grid resolution along each axis of the pole gap.
pub const GRID_DIVISIONS: usize = 21;
/// Pole face x positions in schematic space; the grid fills the gap between.
pub const POLE_X: f32 = 1.1;

const GRID_EXTENT: f32 = 0.95;

pub struct FieldGrid {
    xs: Array1<f32>,
    ys: Array1<f32>,
    bx: Array2<f32>,
    by: Array2<f32>,
    mean_magnitude: f32,
}

impl FieldGrid {
    pub fn new() -> Self {
        let xs = Array::linspace(-GRID_EXTENT, GRID_EXTENT, GRID_DIVISIONS);
        let ys = Array::linspace(-GRID_EXTENT, GRID_EXTENT, GRID_DIVISIONS);
        let mut bx = Array2::zeros((GRID_DIVISIONS, GRID_DIVISIONS));
        let mut by = Array2::zeros((GRID_DIVISIONS, GRID_DIVISIONS));

        let mut magnitude_sum = 0.0;
        for i in 0..GRID_DIVISIONS {
            for j in 0..GRID_DIVISIONS {
                let (x, y) = (xs[i], ys[j]);
                let (u, v) = field_at(x, y);
                bx[(i, j)] = u;
                by[(i, j)] = v;
                magnitude_sum += (u * u + v * v).sqrt();
            }
        }

        FieldGrid {
            xs,
            ys,
            bx,
            by,
            mean_magnitude: magnitude_sum / (GRID_DIVISIONS * GRID_DIVISIONS) as f32,
        }
    }

    /// Grid-sampled field strength at the coil centre, rescaled so the grid
    /// mean maps to `b_peak`.
    pub fn strength_at_centre(&self, b_peak: f32) -> f32 {
        let (u, v) = field_at(0.0, 0.0);
        (u * u + v * v).sqrt() / self.mean_magnitude * b_peak
    }

    /// Grid points and unit direction vectors for drawing field arrows.
    pub fn arrows(&self) -> Vec<((f32, f32), (f32, f32))> {
        let mut arrows = Vec::with_capacity(GRID_DIVISIONS * GRID_DIVISIONS);
        for i in 0..GRID_DIVISIONS {
            for j in 0..GRID_DIVISIONS {
                let (u, v) = (self.bx[(i, j)], self.by[(i, j)]);
                let magnitude = (u * u + v * v).sqrt();
                if magnitude == 0.0 {
                    continue;
                }
                arrows.push(((self.xs[i], self.ys[j]), (u / magnitude, v / magnitude)));
            }
        }
        arrows
    }
}

impl Default for FieldGrid {
    fn default() -> Self {
        FieldGrid::new()
    }
}

/// Superposed vector at a point: unit-strength source on the north face,
/// sink on the south face, inverse-square falloff.
fn field_at(x: f32, y: f32) -> (f32, f32) {
    let (sx, sy) = point_term(x, y, -POLE_X, 0.0, 1.0);
    let (kx, ky) = point_term(x, y, POLE_X, 0.0, -1.0);
    (sx + kx, sy + ky)
}

fn point_term(x: f32, y: f32, px: f32, py: f32, strength: f32) -> (f32, f32) {
    let (dx, dy) = (x - px, y - py);
    let r = (dx * dx + dy * dy).sqrt().max(1e-3);
    let scale = strength / (r * r * r);
    (dx * scale, dy * scale)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centre_field_points_across_the_gap() {
        let (u, v) = field_at(0.0, 0.0);
        assert!(u > 0.0, "field at the centre should point north to south");
        assert!(v.abs() < 1e-6);
    }

    #[test]
    fn test_strength_scales_linearly_with_peak_field() {
        let grid = FieldGrid::new();
        let at_one = grid.strength_at_centre(1.0);
        let at_two = grid.strength_at_centre(2.0);
        assert!(at_one > 0.0);
        assert!((at_two - 2.0 * at_one).abs() < 1e-5);
    }

    #[test]
    fn test_strength_is_same_order_as_peak_field() {
        // heuristic rescaling, so only an order-of-magnitude check
        let grid = FieldGrid::new();
        let strength = grid.strength_at_centre(0.8);
        assert!(strength > 0.08 && strength < 8.0, "got {}", strength);
    }

    #[test]
    fn test_arrows_are_unit_length() {
        let grid = FieldGrid::new();
        let arrows = grid.arrows();
        assert_eq!(arrows.len(), GRID_DIVISIONS * GRID_DIVISIONS);
        for (_, (u, v)) in arrows {
            assert!(((u * u + v * v).sqrt() - 1.0).abs() < 1e-5);
        }
    }
}
