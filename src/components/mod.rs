//! The components module contains all shared components for our app.

mod app;
mod comments;
mod icons;
mod player;
mod video_list;
mod video_manager;

pub use app::*;
pub use comments::*;
pub use icons::*;
pub use player::*;
pub use video_list::*;
pub use video_manager::*;
