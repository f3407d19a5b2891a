use std::ops::{Add, Index, Sub};
use num;
use super::super::lucent::Float;
use super::Vector3;

pub type Point3f = Point3<Float>;

/// Representation of a 3D point.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
#[repr(C)]
pub struct Point3<T> {
    pub x: T,
    pub y: T,
    pub z: T
}

impl<T> Point3<T> {
    #[inline]
    pub fn new(x: T, y: T, z: T) -> Point3<T> {
        Point3 { x, y, z }
    }
}

impl<T: num::Float> Point3<T> {
    #[inline]
    pub fn zero() -> Point3<T> {
        Point3 { x: T::zero(), y: T::zero(), z: T::zero() }
    }

    pub fn distance(&self, o: &Point3<T>) -> T {
        (*self - *o).length()
    }

    pub fn distance_squared(&self, o: &Point3<T>) -> T {
        (*self - *o).length_squared()
    }

    /// Component wise minimum.
    pub fn min(&self, o: &Point3<T>) -> Point3<T> {
        Point3 { x: self.x.min(o.x), y: self.y.min(o.y), z: self.z.min(o.z) }
    }

    /// Component wise maximum.
    pub fn max(&self, o: &Point3<T>) -> Point3<T> {
        Point3 { x: self.x.max(o.x), y: self.y.max(o.y), z: self.z.max(o.z) }
    }
}

impl<T: num::Float> Sub for Point3<T> {
    type Output = Vector3<T>;
    fn sub(self, o: Point3<T>) -> Vector3<T> {
        Vector3 { x: self.x - o.x, y: self.y - o.y, z: self.z - o.z }
    }
}

impl<T: num::Float> Add<Vector3<T>> for Point3<T> {
    type Output = Point3<T>;
    fn add(self, v: Vector3<T>) -> Point3<T> {
        Point3 { x: self.x + v.x, y: self.y + v.y, z: self.z + v.z }
    }
}

impl<T: num::Float> Sub<Vector3<T>> for Point3<T> {
    type Output = Point3<T>;
    fn sub(self, v: Vector3<T>) -> Point3<T> {
        Point3 { x: self.x - v.x, y: self.y - v.y, z: self.z - v.z }
    }
}

impl<T> Index<usize> for Point3<T> {
    type Output = T;
    fn index(&self, i: usize) -> &T {
        match i {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Point3 index {} out of range", i)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_arithmetic() {
        let p = Point3f::new(1.0, 2.0, 3.0);
        let q = Point3f::new(4.0, 6.0, 3.0);
        assert_eq!(q - p, Vector3::new(3.0, 4.0, 0.0));
        assert_eq!(p + Vector3::new(3.0, 4.0, 0.0), q);
        assert_eq!(p.distance(&q), 5.0);
        assert_eq!(p.distance_squared(&q), 25.0);
    }
}
