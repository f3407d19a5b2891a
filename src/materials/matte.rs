use crate::core::lucent::{consts::INV_PI, Float, Spectrum};
use crate::core::geometry::{coordinate_system, dot_vec_normal, Normal3f, Point2f, Vector3f};
use crate::core::material::Material;
use crate::core::sampling::{uniform_hemisphere_pdf, uniform_sample_hemisphere};

/// Lambertian diffuse material with reflectance kd.
pub struct MatteMaterial {
    kd: Spectrum
}

impl MatteMaterial {
    pub fn new(kd: Spectrum) -> MatteMaterial {
        MatteMaterial { kd }
    }
}

impl Material for MatteMaterial {
    fn eval(&self, _wi: &Vector3f, wo: &Vector3f, n: &Normal3f) -> Spectrum {
        if dot_vec_normal(wo, n) > 0.0 {
            self.kd * INV_PI
        } else {
            Spectrum::default()
        }
    }

    fn sample(&self, _wo: &Vector3f, n: &Normal3f, u: &Point2f) -> Vector3f {
        // Uniform hemisphere sample rotated into the frame about n.
        let local = uniform_sample_hemisphere(u);
        let nv = Vector3f::from(*n);
        let (s, t) = coordinate_system(&nv);
        s * local.x + t * local.y + nv * local.z
    }

    fn pdf(&self, _wi: &Vector3f, wo: &Vector3f, n: &Normal3f) -> Float {
        if dot_vec_normal(wo, n) > 0.0 {
            uniform_hemisphere_pdf()
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::lucent::consts::PI;
    use crate::core::rng::Rng;

    #[test]
    fn eval_is_kd_over_pi_above_the_surface() {
        let m = MatteMaterial::new(Spectrum::new(0.6));
        let n = Normal3f::new(0.0, 0.0, 1.0);
        let up = Vector3f::new(0.0, 0.0, 1.0);
        let f = m.eval(&up, &up, &n);
        assert!((f.r - 0.6 / PI).abs() < 1e-6);
        assert!(m.eval(&up, &-up, &n).is_black());
    }

    #[test]
    fn sampled_directions_are_unit_and_above_the_surface() {
        let m = MatteMaterial::new(Spectrum::new(0.6));
        let n = Normal3f::new(0.0, 1.0, 0.0);
        let wo = Vector3f::new(0.0, 1.0, 0.0);
        let mut rng = Rng::new(8);
        for _ in 0..1000 {
            let u = Point2f::new(rng.uniform_float(), rng.uniform_float());
            let wi = m.sample(&wo, &n, &u);
            assert!((wi.length() - 1.0).abs() < 1e-4);
            assert!(dot_vec_normal(&wi, &n) >= 0.0);
        }
    }

    #[test]
    fn pdf_is_uniform_over_the_hemisphere() {
        let m = MatteMaterial::new(Spectrum::new(0.6));
        let n = Normal3f::new(0.0, 0.0, 1.0);
        let wo = Vector3f::new(0.0, 0.0, 1.0);
        let wi = Vector3f::new(0.0, 1.0, 0.0);
        assert!((m.pdf(&wi, &wo, &n) - 0.5 / PI).abs() < 1e-6);
        assert_eq!(m.pdf(&wi, &-wo, &n), 0.0);
    }
}
