//! Singers List View
//!
//! Shows every singer with their songs. Edit mode exposes delete actions,
//! each of which goes through the [`ConfirmModal`] before any request fires.
//! Successful deletions patch the local list instead of re-fetching.

use thiserror::Error;

use super::modal::{ConfirmModal, PendingDeletion};
use crate::client::{ClientError, SingerApi};
use crate::model::{Singer, SingerId};

/// Errors from confirming a deletion
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeleteError {
    #[error("No deletion is awaiting confirmation")]
    NothingPending,

    #[error(transparent)]
    Client(#[from] ClientError),
}

/// State of the singers list view
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SingerListView {
    singers: Vec<Singer>,
    edit_mode: bool,
    modal: ConfirmModal,
    error: Option<String>,
    notice: Option<String>,
}

impl SingerListView {
    pub fn new(singers: Vec<Singer>) -> Self {
        Self {
            singers,
            ..Self::default()
        }
    }

    /// Mount the view: fetch every singer once.
    ///
    /// A failed fetch leaves the list empty with the error recorded.
    pub async fn load<A>(api: &A) -> Self
    where
        A: SingerApi + ?Sized,
    {
        let mut view = Self::default();
        view.apply_loaded(api.list_singers().await);
        view
    }

    /// Store the result of a list fetch, leaving edit mode and the modal as they are
    pub fn apply_loaded(&mut self, result: Result<Vec<Singer>, ClientError>) {
        match result {
            Ok(singers) => {
                tracing::debug!(count = singers.len(), "loaded singers");
                self.singers = singers;
                self.error = None;
            }
            Err(e) => {
                tracing::warn!("Fetch error: {}", e);
                self.singers.clear();
                self.error = Some(e.to_string());
            }
        }
    }

    pub fn singers(&self) -> &[Singer] {
        &self.singers
    }

    pub fn singer(&self, id: &SingerId) -> Option<&Singer> {
        self.singers.iter().find(|s| &s.id == id)
    }

    pub fn is_edit_mode(&self) -> bool {
        self.edit_mode
    }

    pub fn modal(&self) -> &ConfirmModal {
        &self.modal
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn toggle_edit_mode(&mut self) {
        self.edit_mode = !self.edit_mode;
    }

    /// Ask to delete a singer. Only possible in edit mode for a listed singer.
    pub fn request_delete_singer(&mut self, id: &SingerId) -> bool {
        if !self.edit_mode {
            return false;
        }
        let Some(singer) = self.singer(id) else {
            return false;
        };

        let target = PendingDeletion::Singer {
            id: singer.id.clone(),
            name: singer.name.clone(),
        };
        self.modal.open(target);
        true
    }

    /// Ask to delete one song. Only possible in edit mode for a listed song.
    pub fn request_delete_song(&mut self, id: &SingerId, song: &str) -> bool {
        if !self.edit_mode {
            return false;
        }
        match self.singer(id) {
            Some(singer) if singer.has_song(song) => {
                self.modal.open(PendingDeletion::Song {
                    singer_id: id.clone(),
                    song: song.to_string(),
                });
                true
            }
            _ => false,
        }
    }

    pub fn cancel(&mut self) {
        self.modal.cancel();
    }

    /// Execute the pending deletion.
    ///
    /// The modal closes whether or not the request succeeds. On failure the
    /// list is left untouched and the error message is recorded.
    pub async fn confirm<A>(&mut self, api: &A) -> Result<PendingDeletion, DeleteError>
    where
        A: SingerApi + ?Sized,
    {
        let target = self.pending_deletion().ok_or(DeleteError::NothingPending)?;
        let result = target.execute(api).await;
        self.finish_deletion(target, result)
    }

    /// The deletion awaiting confirmation, left open until it finishes
    pub fn pending_deletion(&self) -> Option<PendingDeletion> {
        self.modal.pending().cloned()
    }

    /// Apply the outcome of a deletion request and close the modal.
    ///
    /// Only the list, the modal and the messages change; edit mode is kept.
    pub fn finish_deletion(
        &mut self,
        target: PendingDeletion,
        result: Result<(), ClientError>,
    ) -> Result<PendingDeletion, DeleteError> {
        self.modal.cancel();
        self.error = None;
        self.notice = None;

        match result {
            Ok(()) => {
                let notice = match &target {
                    PendingDeletion::Singer { id, .. } => {
                        self.remove_singer(id);
                        "Singer deleted successfully!"
                    }
                    PendingDeletion::Song { singer_id, song } => {
                        self.remove_song(singer_id, song);
                        "Song deleted successfully!"
                    }
                };
                self.notice = Some(notice.to_string());
                Ok(target)
            }
            Err(e) => {
                tracing::warn!("Delete error: {}", e);
                self.error = Some(e.to_string());
                Err(e.into())
            }
        }
    }

    /// Remove exactly one singer from the local list
    pub fn remove_singer(&mut self, id: &SingerId) -> bool {
        let before = self.singers.len();
        self.singers.retain(|s| &s.id != id);
        self.singers.len() != before
    }

    /// Remove a song from exactly one singer in the local list
    pub fn remove_song(&mut self, id: &SingerId, song: &str) -> bool {
        match self.singers.iter_mut().find(|s| &s.id == id) {
            Some(singer) => {
                let before = singer.songs.len();
                singer.songs.retain(|s| s != song);
                singer.songs.len() != before
            }
            None => false,
        }
    }

    /// Plain-text rendering of the view
    pub fn render(&self) -> String {
        let mut out = String::from("Singers List\n");

        if let Some(error) = &self.error {
            out.push_str(&format!("Error: {}\n", error));
        }
        if self.edit_mode {
            out.push_str("(edit mode)\n");
        }

        if self.singers.is_empty() {
            out.push_str("No singers found.\n");
            return out;
        }

        for singer in &self.singers {
            out.push_str(&format!("\n{}  [{}]\n", singer.name, singer.id));
            for song in &singer.songs {
                if self.edit_mode {
                    out.push_str(&format!("  - {}  (delete song)\n", song));
                } else {
                    out.push_str(&format!("  - {}\n", song));
                }
            }
            if self.edit_mode {
                out.push_str("  (delete singer)\n");
            }
        }

        out
    }
}
