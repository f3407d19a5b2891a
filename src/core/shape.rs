use super::lucent::Float;
use super::geometry::{Bounds3f, Point2f, Ray};
use super::interaction::Intersection;

/// Geometric capability implemented by every surface kind.
pub trait Shape: Send + Sync {
    /// The bounding box of the shape in world space.
    fn world_bound(&self) -> Bounds3f;

    /// Nearest intersection with the ray inside (SHADOW_EPSILON, t_max),
    /// or None if the ray misses.
    fn intersect(&self, ray: &Ray) -> Option<Intersection>;

    /// A predicate ray intersection test. The default implementation calls
    /// intersect and ignores the returned value.
    fn intersect_p(&self, ray: &Ray) -> bool {
        self.intersect(ray).is_some()
    }

    /// Surface area of the shape.
    fn area(&self) -> Float;

    /// Sample a point on the surface with density one over the area.
    fn sample(&self, u: &Point2f, pdf: &mut Float) -> Intersection;
}
