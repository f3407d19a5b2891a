use crate::core::lucent::{consts::{PI, SHADOW_EPSILON}, Float};
use crate::core::geometry::{Bounds3f, Normal3f, Point2f, Point3f, Ray, Vector3f};
use crate::core::interaction::Intersection;
use crate::core::sampling::uniform_sample_sphere;
use crate::core::shape::Shape;

/// A sphere given by its center and radius.
#[derive(Debug, Clone)]
pub struct Sphere {
    pub center: Point3f,
    pub radius: Float
}

impl Sphere {
    pub fn new(center: Point3f, radius: Float) -> Sphere {
        Sphere { center, radius }
    }
}

impl Shape for Sphere {
    fn world_bound(&self) -> Bounds3f {
        let r = Vector3f::new(self.radius, self.radius, self.radius);
        Bounds3f::new(self.center - r, self.center + r)
    }

    fn intersect(&self, ray: &Ray) -> Option<Intersection> {
        // Quadratic sphere coefficients.
        let oc = ray.o - self.center;
        let a = ray.d.dot(&ray.d);
        let b = 2.0 * oc.dot(&ray.d);
        let c = oc.dot(&oc) - self.radius * self.radius;
        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return None;
        }

        // Prefer the nearer root beyond the self-intersection bound.
        let root = discriminant.sqrt();
        let mut t = (-b - root) / (2.0 * a);
        if t <= SHADOW_EPSILON {
            t = (-b + root) / (2.0 * a);
        }
        if t <= SHADOW_EPSILON || t >= ray.t_max {
            return None;
        }

        let p = ray.point_at(t);
        let n = Normal3f::from((p - self.center).normalize());
        Some(Intersection {
            t,
            p,
            n,
            ..Default::default()
        })
    }

    fn area(&self) -> Float {
        4.0 * PI * self.radius * self.radius
    }

    fn sample(&self, u: &Point2f, pdf: &mut Float) -> Intersection {
        let dir = uniform_sample_sphere(u);
        *pdf = 1.0 / self.area();
        Intersection {
            p: self.center + dir * self.radius,
            n: Normal3f::from(dir),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intersects_from_outside() {
        let s = Sphere::new(Point3f::new(0.0, 0.0, 0.0), 1.0);
        let ray = Ray::new(Point3f::new(0.0, 0.0, -3.0), Vector3f::new(0.0, 0.0, 1.0));
        let isect = s.intersect(&ray).unwrap();
        assert!((isect.t - 2.0).abs() < 1e-5);
        assert!((isect.p.z - -1.0).abs() < 1e-5);
        assert!((isect.n.z - -1.0).abs() < 1e-5);
    }

    #[test]
    fn intersects_from_inside_with_far_root() {
        let s = Sphere::new(Point3f::new(0.0, 0.0, 0.0), 1.0);
        let ray = Ray::new(Point3f::zero(), Vector3f::new(0.0, 0.0, 1.0));
        let isect = s.intersect(&ray).unwrap();
        assert!((isect.t - 1.0).abs() < 1e-5);
    }

    #[test]
    fn misses_offset_ray() {
        let s = Sphere::new(Point3f::new(0.0, 0.0, 0.0), 1.0);
        let ray = Ray::new(Point3f::new(0.0, 2.0, -3.0), Vector3f::new(0.0, 0.0, 1.0));
        assert!(s.intersect(&ray).is_none());
    }

    #[test]
    fn respects_ray_clip_distance() {
        let s = Sphere::new(Point3f::new(0.0, 0.0, 0.0), 1.0);
        let mut ray = Ray::new(Point3f::new(0.0, 0.0, -3.0), Vector3f::new(0.0, 0.0, 1.0));
        ray.t_max = 1.5;
        assert!(s.intersect(&ray).is_none());
    }

    #[test]
    fn samples_lie_on_surface() {
        let s = Sphere::new(Point3f::new(1.0, 2.0, 3.0), 2.0);
        let mut pdf = 0.0;
        let isect = s.sample(&Point2f::new(0.3, 0.7), &mut pdf);
        assert!((isect.p.distance(&s.center) - 2.0).abs() < 1e-4);
        assert!((pdf - 1.0 / s.area()).abs() < 1e-8);
    }
}
