pub mod catalog;
pub mod mock_feed;
pub mod models;

pub use catalog::*;
pub use mock_feed::*;
pub use models::*;
