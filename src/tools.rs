use amethyst::core::math::Point3;
use rand::Rng;
use std::f32::consts::PI;

/// Closed loop of points on a circle in the orbital (xz) plane. First point == last point.
pub fn orbit_ring_points(radius: f32, segments: usize) -> Vec<Point3<f32>> {
    let segments = segments.max(3);
    (0..=segments)
        .map(|i| {
            let angle = (i % segments) as f32 / segments as f32 * 2.0 * PI;
            Point3::new(radius * angle.cos(), 0.0, radius * angle.sin())
        })
        .collect()
}

// Uniform in a cube of side `extent` centred on the origin.
pub fn starfield_points<R: Rng>(rng: &mut R, count: usize, extent: f32) -> Vec<Point3<f32>> {
    let half = extent / 2.0;
    (0..count)
        .map(|_| Point3::new(
            rng.gen_range(-half, half),
            rng.gen_range(-half, half),
            rng.gen_range(-half, half),
        ))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn ring_is_closed_and_flat() {
        let ring = orbit_ring_points(25.0, 64);
        assert_eq!(ring.len(), 65);
        assert_eq!(ring.first(), ring.last());

        for p in &ring {
            assert_eq!(p.y, 0.0);
            let r = (p.x * p.x + p.z * p.z).sqrt();
            assert!((r - 25.0).abs() < 1e-3);
        }
    }

    #[test]
    fn degenerate_ring_gets_minimum_segments() {
        assert_eq!(orbit_ring_points(5.0, 0).len(), 4);
    }

    #[test]
    fn starfield_in_bounds_and_seeded() {
        let a = starfield_points(&mut StdRng::seed_from_u64(7), 500, 2000.0);
        let b = starfield_points(&mut StdRng::seed_from_u64(7), 500, 2000.0);
        assert_eq!(a.len(), 500);
        assert_eq!(a, b);

        for p in &a {
            assert!(p.x.abs() <= 1000.0 && p.y.abs() <= 1000.0 && p.z.abs() <= 1000.0);
        }
    }
}
