pub mod path;
pub use path::*;
