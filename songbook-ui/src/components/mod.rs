//! UI Components
//!
//! Reusable Leptos components shared by the pages.

pub mod confirm_modal;
pub mod loading;
pub mod nav;
pub mod toast;

pub use confirm_modal::ConfirmDialog;
pub use loading::Loading;
pub use nav::Nav;
pub use toast::Toast;
