use super::lucent::{Float, Spectrum};
use super::geometry::{Normal3f, Point2f, Vector3f};

/// Scattering capability consumed by the integrator.
pub trait Material: Send + Sync {
    /// BRDF value for light arriving from wi and leaving along wo.
    fn eval(&self, wi: &Vector3f, wo: &Vector3f, n: &Normal3f) -> Spectrum;

    /// Importance sample an incident direction about n for the outgoing
    /// direction wo.
    fn sample(&self, wo: &Vector3f, n: &Normal3f, u: &Point2f) -> Vector3f;

    /// Density with respect to solid angle of sample() having produced wi.
    fn pdf(&self, wi: &Vector3f, wo: &Vector3f, n: &Normal3f) -> Float;
}
