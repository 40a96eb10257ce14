//! Add Singer Form
//!
//! Takes a singer name and a comma-separated song string. Submitting either
//! creates the singer or appends the new songs to the existing singer with
//! the same name, using the snapshot fetched when the form was mounted. The
//! snapshot is not refreshed after a submit.

use thiserror::Error;

use crate::client::{ClientError, SingerApi};
use crate::merge::{plan_submission, MergeError, Submission};
use crate::model::{Singer, SingerId, SingerName, SongList, ValidationError};

/// Why a submission did not go through
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    /// Every submitted song is already listed for this singer
    #[error(transparent)]
    Duplicate(#[from] MergeError),

    #[error(transparent)]
    Client(#[from] ClientError),
}

/// What a successful submission did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Created { id: SingerId, songs: Vec<String> },
    SongsAdded { id: SingerId, added: Vec<String> },
}

impl SubmitOutcome {
    pub fn message(&self) -> &'static str {
        match self {
            SubmitOutcome::Created { .. } => "Singer added successfully!",
            SubmitOutcome::SongsAdded { .. } => "Songs added to existing singer successfully!",
        }
    }
}

/// State of the add-singer form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddSingerForm {
    /// Name input
    pub name: String,
    /// Comma-separated songs input
    pub songs: String,
    snapshot: Vec<Singer>,
    error: Option<String>,
    notice: Option<String>,
}

impl AddSingerForm {
    pub fn new(snapshot: Vec<Singer>) -> Self {
        Self {
            snapshot,
            ..Self::default()
        }
    }

    /// Mount the form: fetch the singers used for matching.
    pub async fn load<A>(api: &A) -> Self
    where
        A: SingerApi + ?Sized,
    {
        let mut form = Self::default();
        form.apply_loaded(api.list_singers().await);
        form
    }

    /// Store the fetched snapshot without touching the inputs
    pub fn apply_loaded(&mut self, result: Result<Vec<Singer>, ClientError>) {
        match result {
            Ok(singers) => self.snapshot = singers,
            Err(e) => {
                tracing::warn!("Fetch error: {}", e);
                self.error = Some(e.to_string());
            }
        }
    }

    pub fn snapshot(&self) -> &[Singer] {
        &self.snapshot
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Validate the inputs and plan the request without sending it
    pub fn plan(&self) -> Result<Submission, SubmitError> {
        let name = SingerName::parse(&self.name)?;
        let songs = SongList::parse(&self.songs)?;
        Ok(plan_submission(&name, &songs, &self.snapshot)?)
    }

    /// Submit the form.
    ///
    /// Issues at most one request. Success clears both inputs; any failure
    /// keeps them and records a message.
    pub async fn submit<A>(&mut self, api: &A) -> Result<SubmitOutcome, SubmitError>
    where
        A: SingerApi + ?Sized,
    {
        let submission = self.begin_submit()?;
        let result = Self::send(api, submission).await;
        self.finish_submit(result)
    }

    /// Clear old messages and plan the request. A rejected plan is recorded.
    pub fn begin_submit(&mut self) -> Result<Submission, SubmitError> {
        self.error = None;
        self.notice = None;
        self.plan().map_err(|e| self.fail(e))
    }

    /// Record the outcome of a sent submission
    pub fn finish_submit(
        &mut self,
        result: Result<SubmitOutcome, SubmitError>,
    ) -> Result<SubmitOutcome, SubmitError> {
        match result {
            Ok(outcome) => {
                self.notice = Some(outcome.message().to_string());
                self.name.clear();
                self.songs.clear();
                Ok(outcome)
            }
            Err(e) => Err(self.fail(e)),
        }
    }

    fn fail(&mut self, e: SubmitError) -> SubmitError {
        tracing::warn!("Submit error: {}", e);
        self.error = Some(e.to_string());
        e
    }

    /// Send the request a [`Submission`] calls for
    pub async fn send<A>(api: &A, submission: Submission) -> Result<SubmitOutcome, SubmitError>
    where
        A: SingerApi + ?Sized,
    {
        match submission {
            Submission::Create { name, songs } => {
                let id = api.create_singer(&name, &songs).await?;
                Ok(SubmitOutcome::Created { id, songs })
            }
            Submission::Append { id, songs, .. } => {
                api.append_songs(&id, &songs).await?;
                Ok(SubmitOutcome::SongsAdded { id, added: songs })
            }
        }
    }

    /// Plain-text rendering of the form state
    pub fn render(&self) -> String {
        let mut out = String::from("Add Singer\n");
        if let Some(error) = &self.error {
            out.push_str(&format!("Error: {}\n", error));
        }
        if let Some(notice) = &self.notice {
            out.push_str(&format!("{}\n", notice));
        }
        out.push_str(&format!("Name: {}\n", self.name));
        out.push_str(&format!("Songs (comma-separated): {}\n", self.songs));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::fake::{Call, FakeApi};
    use crate::client::Operation;

    fn existing() -> Vec<Singer> {
        vec![Singer::new("1", "Adele", vec!["A".to_string(), "B".to_string()])]
    }

    async fn form(api: &FakeApi, name: &str, songs: &str) -> AddSingerForm {
        let mut form = AddSingerForm::load(api).await;
        form.name = name.to_string();
        form.songs = songs.to_string();
        form
    }

    #[tokio::test]
    async fn test_existing_singer_gets_only_new_songs() {
        let api = FakeApi::with_singers(existing());
        let mut form = form(&api, "Adele", "A, C").await;

        let outcome = form.submit(&api).await.unwrap();

        assert_eq!(
            outcome,
            SubmitOutcome::SongsAdded {
                id: SingerId::new("1"),
                added: vec!["C".to_string()],
            }
        );
        assert_eq!(
            api.mutations(),
            vec![Call::Append {
                id: SingerId::new("1"),
                songs: vec!["C".to_string()],
            }]
        );
        assert_eq!(form.notice(), Some("Songs added to existing singer successfully!"));
    }

    #[tokio::test]
    async fn test_duplicate_issues_no_request() {
        let api = FakeApi::with_singers(existing());
        let mut form = form(&api, "adele", "A, B").await;

        let err = form.submit(&api).await.unwrap_err();

        assert!(matches!(err, SubmitError::Duplicate(_)));
        assert!(api.mutations().is_empty());
        assert_eq!(
            form.error(),
            Some("This combination of singer and songs already exists.")
        );
        assert_eq!(form.name, "adele");
        assert_eq!(form.songs, "A, B");
    }

    #[tokio::test]
    async fn test_new_singer_is_created_verbatim() {
        let api = FakeApi::with_singers(existing());
        let mut form = form(&api, "X", "P, Q").await;

        let outcome = form.submit(&api).await.unwrap();

        assert!(matches!(outcome, SubmitOutcome::Created { .. }));
        assert_eq!(
            api.mutations(),
            vec![Call::Create {
                name: "X".to_string(),
                songs: vec!["P".to_string(), "Q".to_string()],
            }]
        );
        assert_eq!(form.notice(), Some("Singer added successfully!"));
    }

    #[tokio::test]
    async fn test_success_clears_inputs() {
        let api = FakeApi::default();
        let mut form = form(&api, "X", "P").await;

        form.submit(&api).await.unwrap();

        assert!(form.name.is_empty());
        assert!(form.songs.is_empty());
        assert!(form.error().is_none());
    }

    #[tokio::test]
    async fn test_snapshot_is_not_refreshed_after_submit() {
        let api = FakeApi::default();
        let mut form = form(&api, "X", "P").await;
        form.submit(&api).await.unwrap();

        // Same name again: the snapshot still has no "X", so it is created twice
        form.name = "X".to_string();
        form.songs = "P".to_string();
        form.submit(&api).await.unwrap();

        assert!(form.snapshot().is_empty());
        let creates = api
            .mutations()
            .into_iter()
            .filter(|call| matches!(call, Call::Create { .. }))
            .count();
        assert_eq!(creates, 2);
    }

    #[tokio::test]
    async fn test_failed_request_keeps_inputs() {
        let api = FakeApi::with_singers(existing());
        api.fail_on(Operation::CreateSinger);
        let mut form = form(&api, "X", "P").await;

        let err = form.submit(&api).await.unwrap_err();

        assert!(matches!(err, SubmitError::Client(_)));
        assert_eq!(form.name, "X");
        assert_eq!(
            form.error(),
            Some("Failed to add singer: internal error (HTTP 500)")
        );
    }

    #[tokio::test]
    async fn test_invalid_input_issues_no_request() {
        let api = FakeApi::with_singers(existing());

        let mut blank_name = form(&api, "  ", "P").await;
        assert_eq!(
            blank_name.submit(&api).await,
            Err(SubmitError::Invalid(ValidationError::EmptyName))
        );

        let mut blank_songs = form(&api, "X", " , ").await;
        assert_eq!(
            blank_songs.submit(&api).await,
            Err(SubmitError::Invalid(ValidationError::NoSongs))
        );

        assert!(api.mutations().is_empty());
    }

    #[tokio::test]
    async fn test_trailing_comma_is_ignored() {
        let api = FakeApi::default();
        let mut form = form(&api, "X", "P, Q,").await;
        form.submit(&api).await.unwrap();

        assert_eq!(
            api.mutations(),
            vec![Call::Create {
                name: "X".to_string(),
                songs: vec!["P".to_string(), "Q".to_string()],
            }]
        );
    }

    #[tokio::test]
    async fn test_load_failure_records_error() {
        let api = FakeApi::default();
        api.fail_on(Operation::ListSingers);
        let form = AddSingerForm::load(&api).await;
        assert!(form.error().unwrap().starts_with("Failed to fetch singers"));
    }

    #[test]
    fn test_render_includes_inputs() {
        let mut form = AddSingerForm::default();
        form.name = "Sade".to_string();
        form.songs = "Smooth Operator".to_string();
        let rendered = form.render();
        assert!(rendered.contains("Name: Sade"));
        assert!(rendered.contains("Songs (comma-separated): Smooth Operator"));
    }

    #[tokio::test]
    async fn test_apply_loaded_keeps_typed_input() {
        let api = FakeApi::with_singers(existing());
        let mut form = AddSingerForm::default();
        form.name = "Ade".to_string();

        form.apply_loaded(api.list_singers().await);

        assert_eq!(form.name, "Ade");
        assert_eq!(form.snapshot(), existing().as_slice());
    }

    #[tokio::test]
    async fn test_failed_submit_keeps_input_edited_during_request() {
        let api = FakeApi::with_singers(existing());
        api.fail_on(Operation::CreateSinger);
        let mut form = form(&api, "X", "P").await;

        let submission = form.begin_submit().unwrap();
        let result = AddSingerForm::send(&api, submission).await;
        form.songs = "P, Q".to_string();
        form.finish_submit(result).unwrap_err();

        assert_eq!(form.songs, "P, Q");
        assert!(form.error().unwrap().starts_with("Failed to add singer"));
    }

    #[test]
    fn test_begin_submit_records_rejected_plan() {
        let mut form = AddSingerForm::new(existing());
        form.name = "Adele".to_string();
        form.songs = "B".to_string();

        assert!(matches!(form.begin_submit(), Err(SubmitError::Duplicate(_))));
        assert_eq!(
            form.error(),
            Some("This combination of singer and songs already exists.")
        );
    }
}
