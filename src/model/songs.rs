//! Song list input
//!
//! Songs are entered as a single comma-separated string.

use super::ValidationError;

/// Split a comma-separated song string into trimmed tokens.
///
/// Empty tokens are kept, so the result always has one more entry than the
/// input has commas.
pub fn split_songs(input: &str) -> Vec<String> {
    input.split(',').map(|song| song.trim().to_string()).collect()
}

/// A validated, ordered, non-empty list of song titles
///
/// Empty tokens (from trailing or doubled commas) are dropped. Duplicates
/// inside the input are kept as entered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SongList(Vec<String>);

impl SongList {
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let songs: Vec<String> = split_songs(input)
            .into_iter()
            .filter(|song| !song.is_empty())
            .collect();

        if songs.is_empty() {
            return Err(ValidationError::NoSongs);
        }
        Ok(Self(songs))
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.0.iter()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl TryFrom<Vec<String>> for SongList {
    type Error = ValidationError;

    fn try_from(songs: Vec<String>) -> Result<Self, Self::Error> {
        let songs: Vec<String> = songs
            .into_iter()
            .map(|song| song.trim().to_string())
            .filter(|song| !song.is_empty())
            .collect();

        if songs.is_empty() {
            return Err(ValidationError::NoSongs);
        }
        Ok(Self(songs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_length_is_comma_count_plus_one() {
        for input in ["", "A", "A,B", " A , B ,C", ",", "A,,B,", ",,,"] {
            let commas = input.matches(',').count();
            assert_eq!(split_songs(input).len(), commas + 1, "input {:?}", input);
        }
    }

    #[test]
    fn test_split_trims_tokens() {
        assert_eq!(split_songs("  Thriller ,Beat It,  "), vec!["Thriller", "Beat It", ""]);
    }

    #[test]
    fn test_song_list_drops_empty_tokens() {
        let songs = SongList::parse("Thriller, , Beat It,").unwrap();
        assert_eq!(songs.as_slice(), ["Thriller", "Beat It"]);
    }

    #[test]
    fn test_song_list_keeps_order_and_duplicates() {
        let songs = SongList::parse("B, A, B").unwrap();
        assert_eq!(songs.into_vec(), vec!["B", "A", "B"]);
    }

    #[test]
    fn test_song_list_rejects_blank_input() {
        assert_eq!(SongList::parse(""), Err(ValidationError::NoSongs));
        assert_eq!(SongList::parse(" , ,"), Err(ValidationError::NoSongs));
    }

    #[test]
    fn test_song_list_from_vec() {
        let songs = SongList::try_from(vec![" One ".to_string(), "".to_string()]).unwrap();
        assert_eq!(songs.as_slice(), ["One"]);
        assert!(SongList::try_from(Vec::new()).is_err());
    }
}
