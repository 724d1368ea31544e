pub mod client;
pub mod error;
pub mod types;

pub use client::TvMazeClient;
pub use error::TvMazeError;
