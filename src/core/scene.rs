use std::sync::Arc;
use super::lucent::Float;
use super::geometry::{Point2f, Ray, Vector3f};
use super::interaction::Intersection;
use super::primitive::Primitive;
use super::rng::Rng;
use super::stats_accumulator::StatsAccumulator;
use crate::accelerators::{BVHAccel, SplitMethod};

/// Read-only scene data: the primitive list and the acceleration structure
/// built over it.
pub struct Scene {
    primitives: Vec<Arc<dyn Primitive>>,
    aggregate: BVHAccel
}

impl Scene {
    pub fn new(primitives: Vec<Arc<dyn Primitive>>) -> Scene {
        info!("Building scene aggregate over {} primitives", primitives.len());
        let aggregate = BVHAccel::new(primitives.clone(), 1, SplitMethod::Middle);
        Scene { primitives, aggregate }
    }

    /// Nearest-hit query, delegated to the acceleration structure.
    pub fn intersect(&self, ray: &Ray) -> Option<Intersection> {
        StatsAccumulator::instance().report_counter("Intersections/Ray intersection tests", 1);
        debug_assert!(ray.d != Vector3f::zero());
        self.aggregate.intersect(ray)
    }

    /// Reference nearest-hit query that scans every primitive. Exists to
    /// validate the accelerated query; the production path is intersect().
    pub fn intersect_linear(&self, ray: &Ray) -> Option<Intersection> {
        let mut ray = ray.clone();
        let mut nearest = None;
        for prim in &self.primitives {
            if let Some(isect) = prim.intersect(&ray) {
                ray.t_max = isect.t;
                nearest = Some(isect);
            }
        }
        nearest
    }

    /// Choose a point on an emissive surface, proportional to surface area
    /// over all emissive primitives. Returns None when the scene has no
    /// emissive primitive at all.
    pub fn sample_light(&self, rng: &mut Rng) -> Option<(Intersection, Float)> {
        let mut emit_area_sum = 0.0;
        for prim in &self.primitives {
            if prim.has_emit() {
                emit_area_sum += prim.area();
            }
        }
        if emit_area_sum <= 0.0 {
            return None;
        }

        let p = rng.uniform_float() * emit_area_sum;
        let mut area = 0.0;
        for prim in &self.primitives {
            if !prim.has_emit() {
                continue;
            }
            area += prim.area();
            if p <= area {
                let u = Point2f::new(rng.uniform_float(), rng.uniform_float());
                let mut pdf = 0.0;
                let isect = prim.sample(&u, &mut pdf);
                return Some((isect, pdf));
            }
        }
        None
    }
}
