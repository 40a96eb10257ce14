//! Pages
//!
//! Top-level page components for each route.

pub mod add_singer;
pub mod home;
pub mod singers;

pub use add_singer::AddSinger;
pub use home::Home;
pub use singers::SingersList;
