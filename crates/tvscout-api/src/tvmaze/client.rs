use reqwest::{Client, Request, Response};

use super::error::TvMazeError;
use super::types::{decode_entries, TvMazeCredit, TvMazeEpisode, TvMazeSearchResult};
use crate::traits::{Episode, Person, SearchQuery, Show, ShowService};

pub const DEFAULT_BASE_URL: &str = "https://api.tvmaze.com";

/// Poster used for shows that have no image of their own.
pub const DEFAULT_MISSING_IMAGE_URL: &str = "https://tinyurl.com/tv-missing";

/// TVMaze REST client.
///
/// Every operation is a single unauthenticated GET. There is no retry and no
/// timeout beyond what the transport applies.
#[derive(Debug, Clone)]
pub struct TvMazeClient {
    base_url: String,
    missing_image_url: String,
    http: Client,
}

impl TvMazeClient {
    pub fn new(base_url: impl Into<String>, missing_image_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            missing_image_url: missing_image_url.into(),
            http: Client::new(),
        }
    }

    /// Build the `/search/shows` request: always the first page, with the
    /// query's (already clamped) limit as page size.
    pub fn search_request(&self, query: &SearchQuery) -> Result<Request, TvMazeError> {
        let page_size = query.limit().to_string();
        let request = self
            .http
            .get(format!("{}/search/shows", self.base_url))
            .query(&[
                ("q", query.term()),
                ("page", "1"),
                ("pageSize", page_size.as_str()),
            ])
            .build()?;
        Ok(request)
    }

    /// Build a request for one of the per-show collections
    /// (`episodes`, `cast`, `crew`).
    pub fn show_resource_request(
        &self,
        show_id: u64,
        resource: &str,
    ) -> Result<Request, TvMazeError> {
        let request = self
            .http
            .get(format!("{}/shows/{show_id}/{resource}", self.base_url))
            .build()?;
        Ok(request)
    }

    /// Check the HTTP response for errors, keeping the body text on failure.
    async fn check_response(operation: &str, resp: Response) -> Result<Response, TvMazeError> {
        let status = resp.status();
        if status.is_success() {
            tracing::debug!(operation, status = %status, "TVMaze response received");
            return Ok(resp);
        }

        let status_code = status.as_u16();
        let body = resp.text().await.unwrap_or_default();
        tracing::warn!(operation, status = status_code, "TVMaze API error");
        Err(TvMazeError::Status {
            status: status_code,
            message: body,
        })
    }

    /// Send a request and return the body of a successful response.
    async fn fetch_body(&self, operation: &str, request: Request) -> Result<String, TvMazeError> {
        tracing::debug!(operation, url = %request.url(), "TVMaze request");

        let resp = self.http.execute(request).await?;
        let resp = Self::check_response(operation, resp).await?;
        Ok(resp.text().await?)
    }
}

impl Default for TvMazeClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL, DEFAULT_MISSING_IMAGE_URL)
    }
}

impl ShowService for TvMazeClient {
    type Error = TvMazeError;

    async fn search_shows(&self, query: &SearchQuery) -> Result<Vec<Show>, TvMazeError> {
        let request = self.search_request(query)?;
        let body = self.fetch_body("search", request).await?;

        Ok(decode_entries::<TvMazeSearchResult>("search", &body)
            .into_iter()
            .map(|result| result.show.into_show(&self.missing_image_url))
            .collect())
    }

    async fn get_episodes(&self, show_id: u64) -> Result<Vec<Episode>, TvMazeError> {
        let request = self.show_resource_request(show_id, "episodes")?;
        let body = self.fetch_body("episodes", request).await?;

        Ok(decode_entries::<TvMazeEpisode>("episodes", &body)
            .into_iter()
            .map(TvMazeEpisode::into_episode)
            .collect())
    }

    async fn get_cast(&self, show_id: u64) -> Result<Vec<Person>, TvMazeError> {
        let request = self.show_resource_request(show_id, "cast")?;
        let body = self.fetch_body("cast", request).await?;

        Ok(decode_entries::<TvMazeCredit>("cast", &body)
            .into_iter()
            .map(TvMazeCredit::into_person)
            .collect())
    }

    async fn get_crew(&self, show_id: u64) -> Result<Vec<Person>, TvMazeError> {
        let request = self.show_resource_request(show_id, "crew")?;
        let body = self.fetch_body("crew", request).await?;

        Ok(decode_entries::<TvMazeCredit>("crew", &body)
            .into_iter()
            .map(TvMazeCredit::into_person)
            .collect())
    }
}
