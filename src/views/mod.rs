//! Views
//!
//! Each view is plain state plus the operations a user can perform on it.
//! Views fetch their own data when mounted and never share state; rendering
//! is a pure function of that state. The CLI renders them as text, the
//! browser UI renders them with Leptos.
//!
//! - [`home`]: static landing content
//! - [`list`]: singers list with edit mode and confirmed deletions
//! - [`add`]: add-singer form with merge against existing singers
//! - [`modal`]: the delete confirmation state machine

pub mod add;
pub mod home;
pub mod list;
pub mod modal;

pub use add::{AddSingerForm, SubmitError, SubmitOutcome};
pub use list::{DeleteError, SingerListView};
pub use modal::{ConfirmModal, PendingDeletion};
