//! API specification model consumed by the generator.
//!
//! The tree is produced by an upstream parser and is never mutated during a
//! generation pass. [`load_spec`] reads it from YAML or JSON for CLI use.

mod load;
mod types;

pub use load::*;
pub use types::*;
