//! Trait definitions for TV show metadata services.
//!
//! The TVMaze client implements [`ShowService`], which keeps the orchestrator
//! and UI independent of the concrete HTTP client.

use std::future::Future;

use serde::{Deserialize, Serialize};

/// Largest page size the search endpoint accepts.
pub const MAX_PAGE_SIZE: u32 = 250;

/// Number of results requested when the caller does not choose one.
pub const DEFAULT_LIMIT: u32 = 100;

/// A read-only TV show metadata service.
///
/// Futures are not required to be `Send`: in the browser every request runs
/// on the single UI thread.
pub trait ShowService {
    type Error: std::error::Error + 'static;

    /// Search shows by free-text term.
    fn search_shows(
        &self,
        query: &SearchQuery,
    ) -> impl Future<Output = Result<Vec<Show>, Self::Error>>;

    /// Get every episode of a show.
    fn get_episodes(
        &self,
        show_id: u64,
    ) -> impl Future<Output = Result<Vec<Episode>, Self::Error>>;

    /// Get the cast of a show.
    fn get_cast(&self, show_id: u64) -> impl Future<Output = Result<Vec<Person>, Self::Error>>;

    /// Get the crew of a show.
    fn get_crew(&self, show_id: u64) -> impl Future<Output = Result<Vec<Person>, Self::Error>>;
}

/// A show returned by a search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Show {
    pub id: u64,
    pub name: String,
    /// HTML summary as delivered by the service; empty when absent.
    pub summary: String,
    /// Poster URL, or the placeholder when the service has none.
    pub image: String,
}

/// A single episode of a show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Episode {
    pub id: u64,
    pub name: String,
    pub season: String,
    pub number: String,
}

/// A cast or crew member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: u64,
    pub name: String,
}

/// A search term plus the number of results to request.
///
/// The limit is clamped into `1..=MAX_PAGE_SIZE` on construction, so every
/// query that reaches the wire is valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    term: String,
    limit: u32,
}

impl SearchQuery {
    pub fn new(term: impl Into<String>, limit: u32) -> Self {
        Self {
            term: term.into(),
            limit: limit.clamp(1, MAX_PAGE_SIZE),
        }
    }

    pub fn with_default_limit(term: impl Into<String>) -> Self {
        Self::new(term, DEFAULT_LIMIT)
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }
}
