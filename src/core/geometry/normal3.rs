use num;
use super::super::lucent::Float;
use super::Vector3;

pub type Normal3f = Normal3<Float>;

/// Representation of a surface normal.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
#[repr(C)]
pub struct Normal3<T> {
    pub x: T,
    pub y: T,
    pub z: T
}

impl<T> Normal3<T> {
    #[inline]
    pub fn new(x: T, y: T, z: T) -> Normal3<T> {
        Normal3 { x, y, z }
    }
}

impl<T: num::Float> Normal3<T> {
    #[inline]
    pub fn zero() -> Normal3<T> {
        Normal3 { x: T::zero(), y: T::zero(), z: T::zero() }
    }
}

impl<T> From<Vector3<T>> for Normal3<T> {
    fn from(v: Vector3<T>) -> Normal3<T> {
        Normal3 { x: v.x, y: v.y, z: v.z }
    }
}

/// Dot product between a vector and a normal.
#[inline]
pub fn dot_vec_normal<T: num::Float>(v: &Vector3<T>, n: &Normal3<T>) -> T {
    v.x * n.x + v.y * n.y + v.z * n.z
}
