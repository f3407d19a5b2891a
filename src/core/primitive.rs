use std::sync::Arc;
use super::lucent::{Float, Spectrum};
use super::geometry::{Bounds3f, Point2f, Ray};
use super::interaction::Intersection;
use super::material::Material;
use super::shape::Shape;

/// Capability set every scene object exposes to the integrator: the ray
/// intersection test, the surface area query, emission sampling and the
/// emissive predicate.
pub trait Primitive: Send + Sync {
    fn world_bound(&self) -> Bounds3f;

    fn intersect(&self, ray: &Ray) -> Option<Intersection>;

    fn intersect_p(&self, ray: &Ray) -> bool {
        self.intersect(ray).is_some()
    }

    fn area(&self) -> Float;

    fn has_emit(&self) -> bool;

    /// Sample a point on the surface, area-proportional; pdf is one over
    /// the area.
    fn sample(&self, u: &Point2f, pdf: &mut Float) -> Intersection;
}

/// A shape paired with its material and emitted radiance.
pub struct GeometricPrimitive {
    shape: Arc<dyn Shape>,
    material: Option<Arc<dyn Material>>,
    emit: Spectrum
}

impl GeometricPrimitive {
    pub fn new(
        shape: Arc<dyn Shape>,
        material: Option<Arc<dyn Material>>,
        emit: Spectrum
    ) -> GeometricPrimitive {
        GeometricPrimitive { shape, material, emit }
    }
}

impl Primitive for GeometricPrimitive {
    fn world_bound(&self) -> Bounds3f {
        self.shape.world_bound()
    }

    fn intersect(&self, ray: &Ray) -> Option<Intersection> {
        let mut isect = self.shape.intersect(ray)?;
        isect.emit = self.emit;
        isect.material = self.material.clone();
        Some(isect)
    }

    fn area(&self) -> Float {
        self.shape.area()
    }

    fn has_emit(&self) -> bool {
        !self.emit.is_black()
    }

    fn sample(&self, u: &Point2f, pdf: &mut Float) -> Intersection {
        let mut isect = self.shape.sample(u, pdf);
        isect.emit = self.emit;
        isect.material = self.material.clone();
        isect
    }
}
