//! Turns form input and card clicks into service calls.
//!
//! Every method takes `&self`, so overlapping searches and detail fetches
//! run independently; the caller applies each result to the
//! [`Session`](crate::session::Session) when it arrives.

use tracing::{debug, info};
use tvscout_api::{SearchQuery, Show, ShowService, TvMazeClient};

use crate::config::AppConfig;
use crate::detail::{DetailKind, DetailPanel};
use crate::error::TvScoutError;

/// Raw values of the search form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchForm {
    pub term: String,
    /// Result count as typed; may be empty or garbage.
    pub count: String,
}

impl SearchForm {
    pub fn new(term: impl Into<String>, count: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            count: count.into(),
        }
    }

    /// Build the query, falling back to `default_limit` when the count is
    /// missing, non-numeric or not positive.
    pub fn to_query(&self, default_limit: u32) -> SearchQuery {
        let limit = parse_count(&self.count).unwrap_or(default_limit);
        SearchQuery::new(self.term.clone(), limit)
    }
}

/// Parse a leading positive integer: leading whitespace and a sign are
/// accepted, parsing stops at the first non-digit.
pub fn parse_count(input: &str) -> Option<u32> {
    let trimmed = input.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let digits = &rest[..end];
    if digits.is_empty() || negative {
        return None;
    }

    // Overflow saturates; the query clamps it anyway.
    let value = digits.parse::<u64>().unwrap_or(u64::MAX);
    let value = u32::try_from(value).unwrap_or(u32::MAX);
    (value > 0).then_some(value)
}

#[derive(Debug, Clone)]
pub struct Orchestrator<S> {
    service: S,
    default_limit: u32,
}

impl Orchestrator<TvMazeClient> {
    pub fn from_config(config: &AppConfig) -> Self {
        let client = TvMazeClient::new(
            config.api.base_url.clone(),
            config.api.missing_image_url.clone(),
        );
        Self::new(client, config.search.default_limit)
    }
}

impl<S: ShowService> Orchestrator<S> {
    pub fn new(service: S, default_limit: u32) -> Self {
        Self {
            service,
            default_limit,
        }
    }

    /// Run a search from the form's raw values.
    pub async fn perform_search(&self, form: &SearchForm) -> Result<Vec<Show>, TvScoutError> {
        let query = form.to_query(self.default_limit);
        debug!(term = query.term(), limit = query.limit(), "Searching shows");

        let shows = self
            .service
            .search_shows(&query)
            .await
            .map_err(|e| TvScoutError::Service(e.to_string()))?;

        info!(term = query.term(), results = shows.len(), "Search completed");
        Ok(shows)
    }

    /// Fetch one detail list of a show and shape it for an overlay.
    pub async fn fetch_details(
        &self,
        show_id: u64,
        kind: DetailKind,
    ) -> Result<DetailPanel, TvScoutError> {
        debug!(show_id, kind = %kind, "Fetching show details");

        let panel = match kind {
            DetailKind::Episodes => self
                .service
                .get_episodes(show_id)
                .await
                .map(|episodes| DetailPanel::episodes(show_id, &episodes)),
            DetailKind::Cast => self
                .service
                .get_cast(show_id)
                .await
                .map(|cast| DetailPanel::cast(show_id, &cast)),
            DetailKind::Crew => self
                .service
                .get_crew(show_id)
                .await
                .map(|crew| DetailPanel::crew(show_id, &crew)),
        }
        .map_err(|e| TvScoutError::Service(e.to_string()))?;

        Ok(panel)
    }
}
