#[macro_use]
extern crate log;

#[macro_use]
extern crate lazy_static;

pub mod core;
pub mod shapes;
pub mod materials;
pub mod accelerators;
pub mod integrators;
