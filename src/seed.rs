//! Default Roster
//!
//! Starter singers for an empty API.

use crate::client::{ClientError, SingerApi};
use crate::model::SingerId;

/// A singer to create when seeding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedSinger {
    pub name: &'static str,
    pub songs: &'static [&'static str],
}

pub const DEFAULT_ROSTER: &[SeedSinger] = &[
    SeedSinger {
        name: "Freddie Mercury",
        songs: &["Bohemian Rhapsody", "We Will Rock You", "Don't Stop Me Now"],
    },
    SeedSinger {
        name: "Michael Jackson",
        songs: &["Thriller", "Billie Jean", "Beat It"],
    },
    SeedSinger {
        name: "Whitney Houston",
        songs: &[
            "I Will Always Love You",
            "I Wanna Dance with Somebody",
            "Greatest Love of All",
        ],
    },
];

/// Result of [`seed_if_empty`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedOutcome {
    /// Singers already existed; nothing was created
    AlreadySeeded { existing: usize },
    Seeded { created: Vec<SingerId> },
}

/// Create [`DEFAULT_ROSTER`] if the API has no singers yet.
///
/// Stops at the first failed create; singers created before it remain.
pub async fn seed_if_empty<A>(api: &A) -> Result<SeedOutcome, ClientError>
where
    A: SingerApi + ?Sized,
{
    let existing = api.list_singers().await?;
    if !existing.is_empty() {
        tracing::info!(count = existing.len(), "roster already initialized");
        return Ok(SeedOutcome::AlreadySeeded {
            existing: existing.len(),
        });
    }

    let mut created = Vec::with_capacity(DEFAULT_ROSTER.len());
    for seed in DEFAULT_ROSTER {
        let songs: Vec<String> = seed.songs.iter().map(|s| s.to_string()).collect();
        created.push(api.create_singer(seed.name, &songs).await?);
    }

    tracing::info!(count = created.len(), "seeded default roster");
    Ok(SeedOutcome::Seeded { created })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::fake::{Call, FakeApi};
    use crate::model::Singer;

    #[tokio::test]
    async fn test_seeds_empty_api() {
        let api = FakeApi::default();
        let outcome = seed_if_empty(&api).await.unwrap();

        assert!(matches!(outcome, SeedOutcome::Seeded { ref created } if created.len() == 3));
        let singers = api.singers();
        assert_eq!(singers[0].name, "Freddie Mercury");
        assert_eq!(singers[2].songs.len(), 3);
    }

    #[tokio::test]
    async fn test_skips_non_empty_api() {
        let api = FakeApi::with_singers(vec![Singer::new("1", "Sade", vec![])]);
        let outcome = seed_if_empty(&api).await.unwrap();

        assert_eq!(outcome, SeedOutcome::AlreadySeeded { existing: 1 });
        assert_eq!(api.calls(), vec![Call::List]);
    }
}
