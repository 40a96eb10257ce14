//! State Management
//!
//! Toast messages shared across pages. Singer data is page-local.

pub mod global;

pub use global::{provide_global_state, GlobalState};
