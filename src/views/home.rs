//! Landing View

pub const TITLE: &str = "Welcome to Songbook!";
pub const TAGLINE: &str = "Explore your favorite singers and their songs!";

/// Plain-text rendering of the landing view
pub fn render() -> String {
    format!("{}\n\n{}\n", TITLE, TAGLINE)
}
