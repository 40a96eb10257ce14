//! In-memory [`SingerApi`] that records every call, for view tests.

use async_trait::async_trait;
use std::sync::Mutex;

use super::{ClientError, HealthStatus, Operation, SingerApi};
use crate::model::{Singer, SingerId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Call {
    List,
    Get(SingerId),
    Create { name: String, songs: Vec<String> },
    Append { id: SingerId, songs: Vec<String> },
    Rename { id: SingerId, name: String },
    DeleteSinger(SingerId),
    DeleteSong { id: SingerId, song: String },
    Health,
}

#[derive(Default)]
pub(crate) struct FakeApi {
    singers: Mutex<Vec<Singer>>,
    calls: Mutex<Vec<Call>>,
    failing: Mutex<Option<Operation>>,
    next_id: Mutex<u32>,
}

impl FakeApi {
    pub fn with_singers(singers: Vec<Singer>) -> Self {
        Self {
            singers: Mutex::new(singers),
            ..Self::default()
        }
    }

    /// Make every call of `op` fail with a 500
    pub fn fail_on(&self, op: Operation) {
        *self.failing.lock().unwrap() = Some(op);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    /// Calls other than the initial list fetch
    pub fn mutations(&self) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(|call| *call != Call::List)
            .collect()
    }

    pub fn singers(&self) -> Vec<Singer> {
        self.singers.lock().unwrap().clone()
    }

    fn record(&self, op: Operation, call: Call) -> Result<(), ClientError> {
        self.calls.lock().unwrap().push(call);
        if *self.failing.lock().unwrap() == Some(op) {
            return Err(ClientError::from_status(
                op,
                500,
                r#"{"error": "internal error"}"#,
            ));
        }
        Ok(())
    }

    fn not_found(op: Operation) -> ClientError {
        ClientError::from_status(op, 404, r#"{"error": "Singer not found"}"#)
    }
}

#[async_trait]
impl SingerApi for FakeApi {
    async fn list_singers(&self) -> Result<Vec<Singer>, ClientError> {
        self.record(Operation::ListSingers, Call::List)?;
        Ok(self.singers())
    }

    async fn get_singer(&self, id: &SingerId) -> Result<Singer, ClientError> {
        self.record(Operation::GetSinger, Call::Get(id.clone()))?;
        self.singers()
            .into_iter()
            .find(|s| &s.id == id)
            .ok_or_else(|| Self::not_found(Operation::GetSinger))
    }

    async fn create_singer(&self, name: &str, songs: &[String]) -> Result<SingerId, ClientError> {
        self.record(
            Operation::CreateSinger,
            Call::Create {
                name: name.to_string(),
                songs: songs.to_vec(),
            },
        )?;

        let mut next_id = self.next_id.lock().unwrap();
        *next_id += 1;
        let id = SingerId::new(format!("fake-{}", next_id));
        self.singers
            .lock()
            .unwrap()
            .push(Singer::new(id.clone(), name, songs.to_vec()));
        Ok(id)
    }

    async fn append_songs(&self, id: &SingerId, songs: &[String]) -> Result<(), ClientError> {
        self.record(
            Operation::AppendSongs,
            Call::Append {
                id: id.clone(),
                songs: songs.to_vec(),
            },
        )?;

        let mut singers = self.singers.lock().unwrap();
        let singer = singers
            .iter_mut()
            .find(|s| &s.id == id)
            .ok_or_else(|| Self::not_found(Operation::AppendSongs))?;
        for song in songs {
            if !singer.has_song(song) {
                singer.songs.push(song.clone());
            }
        }
        Ok(())
    }

    async fn rename_singer(&self, id: &SingerId, name: &str) -> Result<(), ClientError> {
        self.record(
            Operation::RenameSinger,
            Call::Rename {
                id: id.clone(),
                name: name.to_string(),
            },
        )?;

        let mut singers = self.singers.lock().unwrap();
        let singer = singers
            .iter_mut()
            .find(|s| &s.id == id)
            .ok_or_else(|| Self::not_found(Operation::RenameSinger))?;
        singer.name = name.to_string();
        Ok(())
    }

    async fn delete_singer(&self, id: &SingerId) -> Result<(), ClientError> {
        self.record(Operation::DeleteSinger, Call::DeleteSinger(id.clone()))?;

        let mut singers = self.singers.lock().unwrap();
        let before = singers.len();
        singers.retain(|s| &s.id != id);
        if singers.len() == before {
            return Err(Self::not_found(Operation::DeleteSinger));
        }
        Ok(())
    }

    async fn delete_song(&self, id: &SingerId, song: &str) -> Result<(), ClientError> {
        self.record(
            Operation::DeleteSong,
            Call::DeleteSong {
                id: id.clone(),
                song: song.to_string(),
            },
        )?;

        let mut singers = self.singers.lock().unwrap();
        let singer = singers
            .iter_mut()
            .find(|s| &s.id == id)
            .ok_or_else(|| Self::not_found(Operation::DeleteSong))?;
        if !singer.has_song(song) {
            return Err(ClientError::from_status(
                Operation::DeleteSong,
                404,
                r#"{"error": "Song not found in singer's list"}"#,
            ));
        }
        singer.songs.retain(|s| s != song);
        Ok(())
    }

    async fn health(&self) -> Result<HealthStatus, ClientError> {
        self.record(Operation::Health, Call::Health)?;
        Ok(HealthStatus {
            status: "healthy".to_string(),
        })
    }
}
