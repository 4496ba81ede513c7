//! File selection for a processing run.

pub mod gate;

pub use gate::{DEFAULT_EXCLUDES, SelectionGate};
