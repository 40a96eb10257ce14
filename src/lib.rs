//! # Songbook
//!
//! Manage a roster of singers and their songs through a REST API.
//!
//! ## Features
//!
//! - **Merge on add**: adding songs to a singer that already exists (by
//!   case-insensitive name) sends only the songs it does not have yet
//! - **Confirmed deletes**: singers and single songs are deleted through a
//!   confirmation step, then patched out of the local list
//! - **Pluggable transport**: views talk to a [`SingerApi`], implemented over
//!   `reqwest` here and over `gloo-net` in the browser UI
//!
//! ## Modules
//!
//! - [`model`]: singers and validated form input
//! - [`merge`]: add/merge planning
//! - [`client`]: API trait, endpoints, and HTTP client
//! - [`views`]: landing, list and add-form view state
//! - [`seed`]: default roster for an empty API
//! - [`config`]: TOML + environment configuration (`native` feature)
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use songbook::{AddSingerForm, ClientConfig, HttpSingerApi, SingerListView};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api = HttpSingerApi::new(ClientConfig::default())?;
//!
//!     // Add songs; merges into an existing singer when the name matches
//!     let mut form = AddSingerForm::load(&api).await;
//!     form.name = "Freddie Mercury".to_string();
//!     form.songs = "Somebody to Love, Killer Queen".to_string();
//!     let outcome = form.submit(&api).await?;
//!     println!("{}", outcome.message());
//!
//!     // List everything
//!     let list = SingerListView::load(&api).await;
//!     print!("{}", list.render());
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod merge;
pub mod model;
pub mod seed;
pub mod views;

#[cfg(feature = "native")]
pub mod config;
#[cfg(feature = "native")]
pub mod logging;

pub use client::{ClientError, Endpoints, HealthStatus, Operation, SingerApi};
#[cfg(feature = "native")]
pub use client::{ClientConfig, HttpSingerApi};

pub use merge::{plan_submission, MergeError, Submission};
pub use model::{split_songs, Singer, SingerId, SingerName, SongList, ValidationError};
pub use seed::{seed_if_empty, SeedOutcome, DEFAULT_ROSTER};
pub use views::{
    AddSingerForm, ConfirmModal, DeleteError, PendingDeletion, SingerListView, SubmitError,
    SubmitOutcome,
};

#[cfg(feature = "native")]
pub use config::{Config, ConfigError, LoggingConfig};
