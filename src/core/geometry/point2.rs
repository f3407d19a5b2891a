use super::super::lucent::Float;

pub type Point2f = Point2<Float>;

/// Representation of a 2D point, used for sample values.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
#[repr(C)]
pub struct Point2<T> {
    pub x: T,
    pub y: T
}

impl<T> Point2<T> {
    #[inline]
    pub fn new(x: T, y: T) -> Point2<T> {
        Point2 { x, y }
    }
}
