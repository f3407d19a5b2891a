//! Sampling routines over canonical domains.

use super::lucent::{consts::{INV_2_PI, PI}, Float};
use super::geometry::{Point2f, Vector3f};

/// Uniformly sample a direction on the hemisphere about +z.
pub fn uniform_sample_hemisphere(u: &Point2f) -> Vector3f {
    let z = u.x;
    let r = (1.0 - z * z).max(0.0).sqrt();
    let phi = 2.0 * PI * u.y;
    Vector3f::new(r * phi.cos(), r * phi.sin(), z)
}

pub fn uniform_hemisphere_pdf() -> Float {
    INV_2_PI
}

/// Uniformly sample a direction on the unit sphere.
pub fn uniform_sample_sphere(u: &Point2f) -> Vector3f {
    let z = 1.0 - 2.0 * u.x;
    let r = (1.0 - z * z).max(0.0).sqrt();
    let phi = 2.0 * PI * u.y;
    Vector3f::new(r * phi.cos(), r * phi.sin(), z)
}

/// Uniformly sample barycentric coordinates over a triangle.
pub fn uniform_sample_triangle(u: &Point2f) -> Point2f {
    let su0 = u.x.sqrt();
    Point2f::new(1.0 - su0, u.y * su0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::Rng;

    #[test]
    fn hemisphere_samples_are_unit_and_above() {
        let mut rng = Rng::new(11);
        for _ in 0..1000 {
            let u = Point2f::new(rng.uniform_float(), rng.uniform_float());
            let w = uniform_sample_hemisphere(&u);
            assert!((w.length() - 1.0).abs() < 1e-4);
            assert!(w.z >= 0.0);
        }
    }

    #[test]
    fn sphere_samples_are_unit() {
        let mut rng = Rng::new(12);
        for _ in 0..1000 {
            let u = Point2f::new(rng.uniform_float(), rng.uniform_float());
            let w = uniform_sample_sphere(&u);
            assert!((w.length() - 1.0).abs() < 1e-4);
        }
    }

    #[test]
    fn triangle_samples_stay_in_simplex() {
        let mut rng = Rng::new(13);
        for _ in 0..1000 {
            let u = Point2f::new(rng.uniform_float(), rng.uniform_float());
            let b = uniform_sample_triangle(&u);
            assert!(b.x >= 0.0 && b.y >= 0.0);
            assert!(b.x + b.y <= 1.0 + 1e-6);
        }
    }
}
