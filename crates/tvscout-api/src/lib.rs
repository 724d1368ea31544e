pub mod traits;
pub mod tvmaze;

pub use traits::{Episode, Person, SearchQuery, Show, ShowService};
pub use tvmaze::{TvMazeClient, TvMazeError};
