use crate::core::lucent::{consts::SHADOW_EPSILON, Float};
use crate::core::geometry::{dot_vec_normal, Bounds3f, Normal3f, Point2f, Point3f, Ray, Vector3f};
use crate::core::interaction::Intersection;
use crate::core::sampling::uniform_sample_triangle;
use crate::core::shape::Shape;

const DEGENERATE_EPSILON: Float = 1e-8;

/// A single triangle. The geometric normal follows the winding of the
/// three vertices; rays arriving from behind the face are not intersected.
#[derive(Debug, Clone)]
pub struct Triangle {
    pub v0: Point3f,
    e1: Vector3f,
    e2: Vector3f,
    n: Normal3f,
    area: Float
}

impl Triangle {
    pub fn new(v0: Point3f, v1: Point3f, v2: Point3f) -> Triangle {
        let e1 = v1 - v0;
        let e2 = v2 - v0;
        let cross = e1.cross(&e2);
        Triangle {
            v0,
            e1,
            e2,
            n: Normal3f::from(cross.normalize()),
            area: cross.length() * 0.5
        }
    }
}

impl Shape for Triangle {
    fn world_bound(&self) -> Bounds3f {
        Bounds3f::new(self.v0, self.v0 + self.e1).union_point(&(self.v0 + self.e2))
    }

    fn intersect(&self, ray: &Ray) -> Option<Intersection> {
        if dot_vec_normal(&ray.d, &self.n) > 0.0 {
            return None;
        }
        let pvec = ray.d.cross(&self.e2);
        let det = self.e1.dot(&pvec);
        if det.abs() < DEGENERATE_EPSILON {
            return None;
        }

        let det_inv = 1.0 / det;
        let tvec = ray.o - self.v0;
        let u = tvec.dot(&pvec) * det_inv;
        if u < 0.0 || u > 1.0 {
            return None;
        }
        let qvec = tvec.cross(&self.e1);
        let v = ray.d.dot(&qvec) * det_inv;
        if v < 0.0 || u + v > 1.0 {
            return None;
        }
        let t = self.e2.dot(&qvec) * det_inv;
        if t <= SHADOW_EPSILON || t >= ray.t_max {
            return None;
        }

        Some(Intersection {
            t,
            p: ray.point_at(t),
            n: self.n,
            ..Default::default()
        })
    }

    fn area(&self) -> Float {
        self.area
    }

    fn sample(&self, u: &Point2f, pdf: &mut Float) -> Intersection {
        let b = uniform_sample_triangle(u);
        *pdf = 1.0 / self.area;
        Intersection {
            p: self.v0 + self.e1 * b.x + self.e2 * b.y,
            n: self.n,
            ..Default::default()
        }
    }
}
