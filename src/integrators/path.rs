use crate::core::lucent::{Float, Spectrum};
use crate::core::geometry::{dot_vec_normal, Point2f, Ray};
use crate::core::rng::Rng;
use crate::core::scene::Scene;

/// A shadow ray whose hit lies within this distance of the sampled light
/// point is treated as unoccluded. The tolerance is absolute, so it is
/// scale dependent.
const LIGHT_HIT_TOLERANCE: Float = 0.1;

/// Recursive Monte Carlo path tracer. Each estimate combines one direct
/// light sample with one indirect bounce, and recursion is terminated
/// probabilistically by Russian Roulette.
pub struct PathIntegrator {
    russian_roulette: Float
}

impl PathIntegrator {
    /// The continuation probability is expected in [0, 1); with zero the
    /// estimator reduces to direct lighting only.
    pub fn new(russian_roulette: Float) -> PathIntegrator {
        if russian_roulette >= 1.0 {
            warn!(
                "Continuation probability {} never terminates recursion",
                russian_roulette
            );
        }
        PathIntegrator { russian_roulette }
    }

    /// Estimate the radiance arriving at the ray origin from the first
    /// visible surface. depth counts the bounces so far and does not bound
    /// the recursion; termination is purely probabilistic.
    pub fn cast_ray(&self, scene: &Scene, ray: &Ray, depth: u32, rng: &mut Rng) -> Spectrum {
        let isect = match scene.intersect(ray) {
            Some(isect) => isect,
            // The background is black.
            None => return Spectrum::default()
        };

        // A light source seen directly renders as plain white, whatever its
        // stored emission is.
        if !isect.emit.is_black() {
            return Spectrum::new(1.0);
        }

        let material = match isect.material.clone() {
            Some(material) => material,
            None => return Spectrum::default()
        };
        let p = isect.p;
        let n = isect.n;
        let wo = -ray.d;

        let mut l_dir = Spectrum::default();
        if let Some((light, pdf_light)) = scene.sample_light(rng) {
            let to_light = light.p - p;
            let dist2 = to_light.length_squared();
            if pdf_light > 0.0 && dist2 > 0.0 {
                let ws = to_light.normalize();
                let shadow_ray = Ray::new(p, ws);
                if let Some(hit) = scene.intersect(&shadow_ray) {
                    if hit.p.distance(&light.p) < LIGHT_HIT_TOLERANCE {
                        let f_r = material.eval(&wo, &ws, &n);
                        let cos_theta = dot_vec_normal(&ws, &n);
                        let cos_theta_x = dot_vec_normal(&(-ws), &light.n);
                        l_dir = light.emit * f_r * cos_theta * cos_theta_x / dist2 / pdf_light;
                    }
                }
            }
        }

        let mut l_indir = Spectrum::default();
        if rng.uniform_float() < self.russian_roulette {
            let u = Point2f::new(rng.uniform_float(), rng.uniform_float());
            let wi = material.sample(&wo, &n, &u);
            let pdf = material.pdf(&wi, &wo, &n);
            if pdf > 0.0 {
                let secondary = Ray::new(p, wi);
                let incoming = self.cast_ray(scene, &secondary, depth + 1, rng);
                l_indir = incoming * material.eval(&wi, &wo, &n) * dot_vec_normal(&wi, &n)
                    / pdf
                    / self.russian_roulette;
            }
        }

        l_dir + l_indir
    }
}
