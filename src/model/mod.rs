//! Data Model
//!
//! Singers, their songs, and the validated inputs used to create them.
//!
//! - [`Singer`]: a singer as returned by the API
//! - [`SingerName`]: a validated, non-empty singer name
//! - [`SongList`]: a validated, non-empty list of song titles

mod singer;
mod songs;

pub use singer::{Singer, SingerId, SingerName};
pub use songs::{split_songs, SongList};

use thiserror::Error;

/// Errors produced while validating user input
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Singer name was empty or whitespace only
    #[error("Singer name is required")]
    EmptyName,

    /// Song input contained no song titles
    #[error("At least one song is required")]
    NoSongs,
}
