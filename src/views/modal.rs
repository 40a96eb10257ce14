//! Delete Confirmation Modal
//!
//! `Closed -> Open(target) -> Closed`. Confirming hands the pending deletion
//! back to the caller; cancelling drops it.

use crate::client::{ClientError, SingerApi};
use crate::model::SingerId;

/// A deletion waiting for confirmation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingDeletion {
    Singer { id: SingerId, name: String },
    Song { singer_id: SingerId, song: String },
}

impl PendingDeletion {
    pub fn title(&self) -> &'static str {
        match self {
            PendingDeletion::Singer { .. } => "Confirm Delete Singer",
            PendingDeletion::Song { .. } => "Confirm Delete Song",
        }
    }

    pub fn prompt(&self) -> String {
        match self {
            PendingDeletion::Singer { .. } => {
                "Are you sure you want to delete this singer? All their songs will be deleted as well."
                    .to_string()
            }
            PendingDeletion::Song { song, .. } => {
                format!("Are you sure you want to delete the song \"{}\"?", song)
            }
        }
    }

    /// Send the delete request for this target
    pub async fn execute<A>(&self, api: &A) -> Result<(), ClientError>
    where
        A: SingerApi + ?Sized,
    {
        match self {
            PendingDeletion::Singer { id, .. } => api.delete_singer(id).await,
            PendingDeletion::Song { singer_id, song } => api.delete_song(singer_id, song).await,
        }
    }
}

/// Confirmation dialog state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ConfirmModal {
    #[default]
    Closed,
    Open(PendingDeletion),
}

impl ConfirmModal {
    /// Open for `target`, replacing any target already shown
    pub fn open(&mut self, target: PendingDeletion) {
        *self = ConfirmModal::Open(target);
    }

    pub fn is_open(&self) -> bool {
        matches!(self, ConfirmModal::Open(_))
    }

    pub fn pending(&self) -> Option<&PendingDeletion> {
        match self {
            ConfirmModal::Open(target) => Some(target),
            ConfirmModal::Closed => None,
        }
    }

    /// Close and return the confirmed deletion, if any
    pub fn confirm(&mut self) -> Option<PendingDeletion> {
        match std::mem::take(self) {
            ConfirmModal::Open(target) => Some(target),
            ConfirmModal::Closed => None,
        }
    }

    pub fn cancel(&mut self) {
        *self = ConfirmModal::Closed;
    }
}
