//! Add/Merge Planning
//!
//! Decides what a submission of the add form turns into, given the singers
//! fetched when the form was mounted:
//!
//! - unknown name: create the singer with every submitted song
//! - known name (case-insensitive): append only the songs it does not have yet
//! - known name and nothing new: reject as a duplicate, no request
//!
//! Planning is pure; issuing the request is up to the caller.

use thiserror::Error;

use crate::model::{Singer, SingerId, SingerName, SongList};

/// The request a submission resolves to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Create a new singer with the full song list
    Create { name: String, songs: Vec<String> },
    /// Append songs to an existing singer
    Append {
        id: SingerId,
        /// Name as stored by the API, not as typed
        name: String,
        songs: Vec<String>,
    },
}

/// Reasons a submission produces no request
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MergeError {
    #[error("This combination of singer and songs already exists.")]
    Duplicate { id: SingerId, name: String },
}

/// Plan the request for a validated name and song list against `snapshot`.
pub fn plan_submission(
    name: &SingerName,
    songs: &SongList,
    snapshot: &[Singer],
) -> Result<Submission, MergeError> {
    let existing = snapshot
        .iter()
        .find(|singer| singer.name_matches(name.as_str()));

    match existing {
        Some(singer) => {
            let new_songs: Vec<String> = songs
                .iter()
                .filter(|song| !singer.has_song(song))
                .cloned()
                .collect();

            if new_songs.is_empty() {
                tracing::debug!(singer = %singer.id, "all submitted songs already present");
                return Err(MergeError::Duplicate {
                    id: singer.id.clone(),
                    name: singer.name.clone(),
                });
            }

            Ok(Submission::Append {
                id: singer.id.clone(),
                name: singer.name.clone(),
                songs: new_songs,
            })
        }
        None => Ok(Submission::Create {
            name: name.as_str().to_string(),
            songs: songs.as_slice().to_vec(),
        }),
    }
}
