//! Display formatting for show and detail records.

use tvscout_api::{Episode, Person};

/// One bulleted line of the episodes overlay.
pub fn episode_line(episode: &Episode) -> String {
    format!(
        "{} (season {}, number {})",
        episode.name, episode.season, episode.number
    )
}

/// One bulleted line of the cast or crew overlay.
pub fn person_line(person: &Person) -> String {
    person.name.clone()
}

/// Plain-text rendition of an HTML summary, for display on a card.
pub fn summary_text(summary: &str) -> String {
    nanohtml2text::html2text(summary).trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_episode_line() {
        let episode = Episode {
            id: 1,
            name: "Pilot".into(),
            season: "1".into(),
            number: "1".into(),
        };
        assert_eq!(episode_line(&episode), "Pilot (season 1, number 1)");
    }

    #[test]
    fn test_person_line_is_exact_name() {
        for name in ["Adam West", "  padded  ", "Zoë Kravitz", ""] {
            let person = Person {
                id: 3,
                name: name.into(),
            };
            assert_eq!(person_line(&person), name);
        }
    }

    #[test]
    fn test_summary_text_strips_markup() {
        let text = summary_text("<p>Wealthy <b>Bruce Wayne</b> fights crime.</p>");
        assert!(!text.contains('<'));
        assert!(text.contains("Bruce Wayne"));
        assert!(text.starts_with("Wealthy"));
    }

    #[test]
    fn test_summary_text_empty() {
        assert_eq!(summary_text(""), "");
    }
}
