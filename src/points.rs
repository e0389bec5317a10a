//! Spiral point-cloud generation.
//!
//! The blob is a fixed set of 2D positions laid out on a parametric spiral.
//! The data is generated once, uploaded to the GPU as a single attribute
//! buffer, and never touched on the host again; all per-frame motion happens
//! in the vertex shader.

use std::f32::consts::PI;

/// Point count used by the production blob.
pub const DEFAULT_NUM_POINTS: usize = 70_000;

/// Point `i` sits at radius `i / RADIUS_SCALE` from the origin.
const RADIUS_SCALE: f32 = 85_000.0;

/// Generate `num_points` interleaved x,y positions.
///
/// The angular step is `200π / num_points`, so the winding density stays
/// constant as the point count changes. Deterministic for a fixed count.
pub fn spiral_points(num_points: usize) -> Vec<f32> {
    let mut positions = vec![0.0f32; num_points * 2];
    let step = PI * 200.0 / num_points as f32;

    for i in 0..num_points {
        let angle = i as f32 * step;
        let radius = i as f32 / RADIUS_SCALE;
        positions[i * 2] = angle.sin() * radius;
        positions[i * 2 + 1] = angle.cos() * radius;
    }

    positions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_positions_per_point() {
        assert_eq!(spiral_points(0).len(), 0);
        assert_eq!(spiral_points(4).len(), 8);
        assert_eq!(spiral_points(1000).len(), 2000);
    }

    #[test]
    fn regeneration_is_deterministic() {
        assert_eq!(spiral_points(256), spiral_points(256));
    }

    #[test]
    fn first_point_is_at_the_origin() {
        let positions = spiral_points(16);
        assert_eq!(positions[0], 0.0);
        assert_eq!(positions[1], 0.0);
    }

    #[test]
    fn radius_grows_linearly_with_index() {
        let positions = spiral_points(5000);
        for i in [1usize, 100, 2500, 4999] {
            let x = positions[i * 2];
            let y = positions[i * 2 + 1];
            let radius = (x * x + y * y).sqrt();
            let expected = i as f32 / RADIUS_SCALE;
            assert!(
                (radius - expected).abs() < 1e-6,
                "point {i}: radius {radius} != {expected}"
            );
        }
    }
}
