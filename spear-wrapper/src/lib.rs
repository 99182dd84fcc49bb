pub mod core;
pub mod json;
pub mod wrapper;

pub use crate::core::{ParamMap, RunArgs};
pub use crate::wrapper::{build_command, SPEAR_BINARY};
