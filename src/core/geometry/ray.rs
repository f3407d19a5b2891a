use num;
use super::super::lucent::Float;
use super::{Point3f, Vector3f};

/// A ray with a parametric clipping distance.
#[derive(Debug, Clone)]
pub struct Ray {
    pub o: Point3f,
    pub d: Vector3f,
    pub t_max: Float
}

impl Ray {
    pub fn new(o: Point3f, d: Vector3f) -> Ray {
        Ray {
            o,
            d,
            t_max: num::Float::infinity()
        }
    }

    /// The point at parametric distance t along the ray.
    pub fn point_at(&self, t: Float) -> Point3f {
        self.o + self.d * t
    }
}

impl Default for Ray {
    fn default() -> Ray {
        Ray {
            o: Point3f::zero(),
            d: Vector3f::zero(),
            t_max: num::Float::infinity()
        }
    }
}
