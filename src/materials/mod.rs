pub mod matte;
pub use matte::*;
