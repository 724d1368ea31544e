//! Detail lists (episodes, cast, crew) shaped for the overlay.

use tvscout_api::{Episode, Person};

use crate::format::{episode_line, person_line};

/// Which detail list of a show to fetch and display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DetailKind {
    Episodes,
    Cast,
    Crew,
}

impl DetailKind {
    pub const ALL: &[DetailKind] = &[Self::Episodes, Self::Cast, Self::Crew];

    /// Overlay title, also used as the card button label.
    pub fn title(self) -> &'static str {
        match self {
            Self::Episodes => "Episodes",
            Self::Cast => "Cast",
            Self::Crew => "Crew",
        }
    }
}

impl std::fmt::Display for DetailKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Episodes => write!(f, "episodes"),
            Self::Cast => write!(f, "cast"),
            Self::Crew => write!(f, "crew"),
        }
    }
}

/// Content of one overlay: a title and pre-formatted lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailPanel {
    pub kind: DetailKind,
    pub show_id: u64,
    pub lines: Vec<String>,
}

impl DetailPanel {
    pub fn episodes(show_id: u64, episodes: &[Episode]) -> Self {
        Self {
            kind: DetailKind::Episodes,
            show_id,
            lines: episodes.iter().map(episode_line).collect(),
        }
    }

    pub fn cast(show_id: u64, cast: &[Person]) -> Self {
        Self::people(DetailKind::Cast, show_id, cast)
    }

    pub fn crew(show_id: u64, crew: &[Person]) -> Self {
        Self::people(DetailKind::Crew, show_id, crew)
    }

    fn people(kind: DetailKind, show_id: u64, people: &[Person]) -> Self {
        Self {
            kind,
            show_id,
            lines: people.iter().map(person_line).collect(),
        }
    }

    pub fn title(&self) -> &'static str {
        self.kind.title()
    }
}
