//! TVMaze API response types.
//!
//! These mirror the JSON returned by the search, episodes, cast and crew
//! endpoints. Only the fields the app displays are modeled.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

use crate::traits::{Episode, Person, Show};

/// Shown when an episode has no season or number.
const UNKNOWN_ORDINAL: &str = "?";

// ── Search ──────────────────────────────────────────────────────

/// One hit from `/search/shows`.
#[derive(Debug, Deserialize)]
pub struct TvMazeSearchResult {
    pub show: TvMazeShow,
}

#[derive(Debug, Deserialize)]
pub struct TvMazeShow {
    pub id: u64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub image: Option<TvMazeImage>,
}

#[derive(Debug, Deserialize)]
pub struct TvMazeImage {
    pub medium: Option<String>,
    pub original: Option<String>,
}

impl TvMazeShow {
    /// Convert to a [`Show`], substituting `missing_image_url` when the show
    /// has no usable medium image.
    pub fn into_show(self, missing_image_url: &str) -> Show {
        let image = self
            .image
            .and_then(|image| image.medium)
            .filter(|url| is_absolute_url(url))
            .unwrap_or_else(|| missing_image_url.to_string());

        Show {
            id: self.id,
            name: self.name.unwrap_or_default(),
            summary: self.summary.unwrap_or_default(),
            image,
        }
    }
}

fn is_absolute_url(candidate: &str) -> bool {
    url::Url::parse(candidate).is_ok()
}

// ── Episodes ────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct TvMazeEpisode {
    pub id: u64,
    #[serde(default)]
    pub name: Option<String>,
    /// Season number; the API sends a number, older payloads a string.
    #[serde(default, deserialize_with = "number_or_text")]
    pub season: Option<String>,
    /// Episode number within the season (null for specials).
    #[serde(default, deserialize_with = "number_or_text")]
    pub number: Option<String>,
}

impl TvMazeEpisode {
    pub fn into_episode(self) -> Episode {
        Episode {
            id: self.id,
            name: self.name.unwrap_or_else(|| "Unknown".to_string()),
            season: self.season.unwrap_or_else(|| UNKNOWN_ORDINAL.to_string()),
            number: self.number.unwrap_or_else(|| UNKNOWN_ORDINAL.to_string()),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(serde_json::Number),
    Text(String),
}

fn number_or_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<NumberOrText>::deserialize(deserializer)?;
    Ok(value.map(|v| match v {
        NumberOrText::Number(n) => n.to_string(),
        NumberOrText::Text(s) => s,
    }))
}

// ── Cast / crew ─────────────────────────────────────────────────

/// One entry from `/shows/{id}/cast` or `/shows/{id}/crew`.
///
/// Character and crew role are ignored.
#[derive(Debug, Deserialize)]
pub struct TvMazeCredit {
    pub person: TvMazePerson,
}

#[derive(Debug, Deserialize)]
pub struct TvMazePerson {
    pub id: u64,
    pub name: String,
}

impl TvMazeCredit {
    pub fn into_person(self) -> Person {
        Person {
            id: self.person.id,
            name: self.person.name,
        }
    }
}

// ── Body decoding ───────────────────────────────────────────────

/// Decode a JSON array body leniently.
///
/// A body that is not a JSON array yields an empty list; entries that fail to
/// decode are skipped.
pub fn decode_entries<T: DeserializeOwned>(operation: &str, body: &str) -> Vec<T> {
    let entries = match serde_json::from_str::<serde_json::Value>(body) {
        Ok(serde_json::Value::Array(entries)) => entries,
        Ok(_) => {
            tracing::warn!(operation, "TVMaze response is not a JSON array, treating as empty");
            return Vec::new();
        }
        Err(e) => {
            tracing::warn!(operation, error = %e, "Malformed TVMaze response, treating as empty");
            return Vec::new();
        }
    };

    let total = entries.len();
    let decoded: Vec<T> = entries
        .into_iter()
        .filter_map(|entry| match serde_json::from_value(entry) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::debug!(operation, error = %e, "Skipping malformed TVMaze entry");
                None
            }
        })
        .collect();

    if decoded.len() < total {
        tracing::warn!(operation, skipped = total - decoded.len(), "Dropped malformed entries");
    }
    decoded
}

#[cfg(test)]
mod tests {
    use super::*;

    const MISSING: &str = "https://tinyurl.com/tv-missing";

    #[test]
    fn test_deserialize_search_results() {
        let json = r#"[
            {
                "score": 0.91,
                "show": {
                    "id": 975,
                    "name": "Batman",
                    "type": "Scripted",
                    "summary": "<p>Wealthy entrepreneur Bruce Wayne...</p>",
                    "image": {
                        "medium": "https://static.tvmaze.com/uploads/images/medium_portrait/6/16463.jpg",
                        "original": "https://static.tvmaze.com/uploads/images/original_untouched/6/16463.jpg"
                    }
                }
            },
            {
                "score": 0.7,
                "show": {
                    "id": 18388,
                    "name": "Batman Unlimited",
                    "summary": null,
                    "image": null
                }
            }
        ]"#;

        let shows: Vec<Show> = decode_entries::<TvMazeSearchResult>("search", json)
            .into_iter()
            .map(|r| r.show.into_show(MISSING))
            .collect();

        assert_eq!(shows.len(), 2);
        assert_eq!(shows[0].id, 975);
        assert_eq!(shows[0].name, "Batman");
        assert_eq!(shows[0].summary, "<p>Wealthy entrepreneur Bruce Wayne...</p>");
        assert!(shows[0].image.ends_with("16463.jpg"));
        assert!(shows[0].image.contains("medium_portrait"));

        assert_eq!(shows[1].summary, "");
        assert_eq!(shows[1].image, MISSING);
    }

    #[test]
    fn test_missing_image_variants_use_placeholder() {
        let payloads = [
            r#"{ "id": 1, "name": "A" }"#,
            r#"{ "id": 1, "name": "A", "image": null }"#,
            r#"{ "id": 1, "name": "A", "image": {} }"#,
            r#"{ "id": 1, "name": "A", "image": { "medium": null, "original": "https://x.test/o.jpg" } }"#,
            r#"{ "id": 1, "name": "A", "image": { "medium": "" } }"#,
            r#"{ "id": 1, "name": "A", "image": { "medium": "not a url" } }"#,
        ];

        for payload in payloads {
            let show: TvMazeShow = serde_json::from_str(payload).unwrap();
            assert_eq!(show.into_show(MISSING).image, MISSING, "payload: {payload}");
        }
    }

    #[test]
    fn test_episode_numbers_become_text() {
        let json = r#"[
            { "id": 4952, "name": "Pilot", "season": 1, "number": 1 },
            { "id": 4953, "name": "Second", "season": "1", "number": "2" },
            { "id": 4999, "name": "Special", "season": 2, "number": null },
            { "id": 5000, "name": null }
        ]"#;

        let episodes: Vec<Episode> = decode_entries::<TvMazeEpisode>("episodes", json)
            .into_iter()
            .map(TvMazeEpisode::into_episode)
            .collect();

        assert_eq!(episodes.len(), 4);
        assert_eq!((episodes[0].season.as_str(), episodes[0].number.as_str()), ("1", "1"));
        assert_eq!((episodes[1].season.as_str(), episodes[1].number.as_str()), ("1", "2"));
        assert_eq!((episodes[2].season.as_str(), episodes[2].number.as_str()), ("2", "?"));
        assert_eq!(episodes[3].name, "Unknown");
        assert_eq!(episodes[3].season, "?");
    }

    #[test]
    fn test_credit_unwraps_person() {
        let json = r#"[
            {
                "person": { "id": 7, "name": "Adam West", "country": null },
                "character": { "id": 1, "name": "Batman" },
                "self": false,
                "voice": false
            },
            {
                "type": "Creator",
                "person": { "id": 8, "name": "William Dozier" }
            }
        ]"#;

        let people: Vec<Person> = decode_entries::<TvMazeCredit>("cast", json)
            .into_iter()
            .map(TvMazeCredit::into_person)
            .collect();

        assert_eq!(
            people,
            vec![
                Person { id: 7, name: "Adam West".into() },
                Person { id: 8, name: "William Dozier".into() },
            ]
        );
    }

    #[test]
    fn test_malformed_bodies_decode_empty() {
        for body in ["", "   ", "null", "{}", r#"{"message":"oops"}"#, "<html>", "[1,"] {
            let entries = decode_entries::<TvMazeCredit>("cast", body);
            assert!(entries.is_empty(), "body: {body:?}");
        }
    }

    #[test]
    fn test_malformed_entries_are_skipped() {
        let json = r#"[
            { "person": { "id": 1, "name": "Kept" } },
            { "person": null },
            { "nothing": true },
            { "person": { "id": 2, "name": "Also kept" } }
        ]"#;

        let entries = decode_entries::<TvMazeCredit>("crew", json);
        let names: Vec<String> = entries.into_iter().map(|c| c.into_person().name).collect();
        assert_eq!(names, vec!["Kept", "Also kept"]);
    }
}
