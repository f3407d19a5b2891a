use std::sync::Arc;
use super::lucent::{Float, Spectrum};
use super::geometry::{Normal3f, Point3f};
use super::material::Material;

/// Everything the integrator needs to know about a ray-surface hit or a
/// sampled surface point. Owned transiently by the caller of the query.
#[derive(Default, Clone)]
pub struct Intersection {
    /// Parametric distance along the ray; zero for sampled points.
    pub t: Float,
    pub p: Point3f,
    pub n: Normal3f,
    /// Emitted radiance; black for non-emissive surfaces.
    pub emit: Spectrum,
    pub material: Option<Arc<dyn Material>>
}
