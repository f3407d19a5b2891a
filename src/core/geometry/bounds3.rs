use std::ops::Index;
use num;
use super::super::lucent::{gamma, Float};
use super::{Point3, Ray, Vector3, Vector3f};

pub type Bounds3f = Bounds3<Float>;

/// An axis aligned bounding box.
#[derive(Debug, Copy, Clone, PartialEq)]
#[repr(C)]
pub struct Bounds3<T> {
    pub min: Point3<T>,
    pub max: Point3<T>
}

impl<T: num::Float> Bounds3<T> {
    pub fn new(p1: Point3<T>, p2: Point3<T>) -> Bounds3<T> {
        Bounds3 { min: p1.min(&p2), max: p1.max(&p2) }
    }

    pub fn union(&self, o: &Bounds3<T>) -> Bounds3<T> {
        Bounds3 { min: self.min.min(&o.min), max: self.max.max(&o.max) }
    }

    pub fn union_point(&self, p: &Point3<T>) -> Bounds3<T> {
        Bounds3 { min: self.min.min(p), max: self.max.max(p) }
    }

    pub fn diagonal(&self) -> Vector3<T> {
        self.max - self.min
    }

    /// Index of the axis with the largest extent.
    pub fn maximum_extent(&self) -> usize {
        let d = self.diagonal();
        if d.x > d.y && d.x > d.z {
            0
        } else if d.y > d.z {
            1
        } else {
            2
        }
    }
}

// An empty box is inverted so that the first union sets it.
impl<T: num::Float> Default for Bounds3<T> {
    fn default() -> Bounds3<T> {
        Bounds3 {
            min: Point3::new(T::infinity(), T::infinity(), T::infinity()),
            max: Point3::new(T::neg_infinity(), T::neg_infinity(), T::neg_infinity())
        }
    }
}

impl<T> Index<usize> for Bounds3<T> {
    type Output = Point3<T>;
    fn index(&self, i: usize) -> &Point3<T> {
        match i {
            0 => &self.min,
            1 => &self.max,
            _ => panic!("Bounds3 index {} out of range", i)
        }
    }
}

impl Bounds3f {
    /// Slab test against a ray with precomputed reciprocal direction.
    pub fn intersect_p(&self, ray: &Ray, inv_dir: &Vector3f, dir_is_neg: &[usize; 3]) -> bool {
        let mut t_min = (self[dir_is_neg[0]].x - ray.o.x) * inv_dir.x;
        let mut t_max = (self[1 - dir_is_neg[0]].x - ray.o.x) * inv_dir.x;
        let ty_min = (self[dir_is_neg[1]].y - ray.o.y) * inv_dir.y;
        let mut ty_max = (self[1 - dir_is_neg[1]].y - ray.o.y) * inv_dir.y;

        t_max = t_max * (1.0 + 2.0 * gamma(3));
        ty_max = ty_max * (1.0 + 2.0 * gamma(3));
        if t_min > ty_max || ty_min > t_max {
            return false;
        }
        if ty_min > t_min {
            t_min = ty_min;
        }
        if ty_max < t_max {
            t_max = ty_max;
        }

        let tz_min = (self[dir_is_neg[2]].z - ray.o.z) * inv_dir.z;
        let mut tz_max = (self[1 - dir_is_neg[2]].z - ray.o.z) * inv_dir.z;

        tz_max = tz_max * (1.0 + 2.0 * gamma(3));
        if t_min > tz_max || tz_min > t_max {
            return false;
        }
        if tz_min > t_min {
            t_min = tz_min;
        }
        if tz_max < t_max {
            t_max = tz_max;
        }

        t_min < ray.t_max && t_max > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::Point3f;

    #[test]
    fn union_and_extent() {
        let b = Bounds3f::default()
            .union_point(&Point3f::new(0.0, 0.0, 0.0))
            .union_point(&Point3f::new(4.0, 2.0, 1.0));
        assert_eq!(b.min, Point3f::new(0.0, 0.0, 0.0));
        assert_eq!(b.max, Point3f::new(4.0, 2.0, 1.0));
        assert_eq!(b.maximum_extent(), 0);
    }

    #[test]
    fn slab_test() {
        let b = Bounds3f::new(Point3f::new(-1.0, -1.0, -1.0), Point3f::new(1.0, 1.0, 1.0));
        let hit = Ray::new(Point3f::new(0.0, 0.0, -5.0), Vector3f::new(0.0, 0.0, 1.0));
        let miss = Ray::new(Point3f::new(0.0, 3.0, -5.0), Vector3f::new(0.0, 0.0, 1.0));
        let behind = Ray::new(Point3f::new(0.0, 0.0, -5.0), Vector3f::new(0.0, 0.0, -1.0));
        let inv = |r: &Ray| Vector3f::new(1.0 / r.d.x, 1.0 / r.d.y, 1.0 / r.d.z);
        let neg = |v: &Vector3f| [(v.x < 0.0) as usize, (v.y < 0.0) as usize, (v.z < 0.0) as usize];
        assert!(b.intersect_p(&hit, &inv(&hit), &neg(&inv(&hit))));
        assert!(!b.intersect_p(&miss, &inv(&miss), &neg(&inv(&miss))));
        assert!(!b.intersect_p(&behind, &inv(&behind), &neg(&inv(&behind))));
    }
}
