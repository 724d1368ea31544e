//! Page state: the rendered result list, open overlays and notices.
//!
//! The UI holds one [`Session`] in a reactive signal and re-renders from it.
//! Fetching happens in [`crate::orchestrator`]; results are applied here.

use std::collections::HashSet;

use tvscout_api::Show;

use crate::detail::{DetailKind, DetailPanel};
use crate::error::TvScoutError;
use crate::notice::{NoticeTarget, Notices};
use crate::overlay::{Overlay, Overlays};

#[derive(Debug, Clone, Default)]
pub struct Session {
    shows: Vec<Show>,
    /// Bumped on every list replacement, never by overlay or notice changes.
    shows_revision: u64,
    searched: bool,
    overlays: Overlays,
    notices: Notices,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the rendered list wholesale. Duplicate ids keep their first
    /// occurrence, so there is one card per show id.
    pub fn replace_shows(&mut self, shows: Vec<Show>) {
        let mut seen = HashSet::with_capacity(shows.len());
        self.shows = shows.into_iter().filter(|s| seen.insert(s.id)).collect();
        self.shows_revision += 1;
        self.searched = true;
    }

    pub fn shows(&self) -> &[Show] {
        &self.shows
    }

    pub fn shows_revision(&self) -> u64 {
        self.shows_revision
    }

    /// True once a search has completed and found nothing.
    pub fn is_empty_result(&self) -> bool {
        self.searched && self.shows.is_empty()
    }

    pub fn overlays(&self) -> &Overlays {
        &self.overlays
    }

    pub fn open_panel(&mut self, panel: DetailPanel) -> Result<u64, TvScoutError> {
        self.overlays.open(panel)
    }

    pub fn close_overlay(&mut self, id: u64) -> Result<Overlay, TvScoutError> {
        self.overlays.close(id)
    }

    pub fn notices(&self) -> &Notices {
        &self.notices
    }

    pub fn notify_error(&mut self, target: NoticeTarget, message: impl Into<String>) -> u64 {
        self.notices.push(target, message)
    }

    pub fn dismiss_notice(&mut self, id: u64) -> bool {
        self.notices.dismiss(id)
    }

    /// Apply the outcome of a search. A failure leaves the current list in
    /// place and posts a notice by the search form.
    pub fn apply_search(&mut self, outcome: Result<Vec<Show>, TvScoutError>) -> Option<u64> {
        match outcome {
            Ok(shows) => {
                self.notices.clear_target(NoticeTarget::Search);
                self.replace_shows(shows);
                None
            }
            Err(e) => {
                tracing::warn!(error = %e, "Search failed");
                Some(self.notify_error(NoticeTarget::Search, format!("Search failed: {e}")))
            }
        }
    }

    /// Apply the outcome of a detail fetch: open an overlay on success, or
    /// post a notice on the show's card.
    pub fn apply_details(
        &mut self,
        show_id: u64,
        kind: DetailKind,
        outcome: Result<DetailPanel, TvScoutError>,
    ) -> Result<u64, TvScoutError> {
        match outcome {
            Ok(panel) => {
                self.notices.clear_target(NoticeTarget::Show(show_id));
                self.open_panel(panel)
            }
            Err(e) => {
                tracing::warn!(show_id, kind = %kind, error = %e, "Detail fetch failed");
                self.notify_error(
                    NoticeTarget::Show(show_id),
                    format!("Could not load {kind}: {e}"),
                );
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn show(id: u64, name: &str) -> Show {
        Show {
            id,
            name: name.into(),
            summary: String::new(),
            image: "https://tinyurl.com/tv-missing".into(),
        }
    }

    #[test]
    fn test_replace_twice_keeps_one_card_per_id() {
        let shows = vec![show(1, "Batman"), show(2, "Batman Beyond")];
        let mut session = Session::new();

        session.replace_shows(shows.clone());
        session.replace_shows(shows.clone());

        assert_eq!(session.shows(), shows.as_slice());
    }

    #[test]
    fn test_replace_drops_duplicate_ids() {
        let mut session = Session::new();
        session.replace_shows(vec![show(1, "First"), show(2, "Other"), show(1, "Again")]);

        let ids: Vec<u64> = session.shows().iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(session.shows()[0].name, "First");
    }

    #[test]
    fn test_new_search_replaces_list() {
        let mut session = Session::new();
        session.replace_shows(vec![show(1, "Batman")]);
        session.replace_shows(vec![show(9, "Lost")]);

        assert_eq!(session.shows().len(), 1);
        assert_eq!(session.shows()[0].name, "Lost");
    }

    #[test]
    fn test_revision_tracks_only_list_replacement() {
        let mut session = Session::new();
        assert_eq!(session.shows_revision(), 0);

        session.replace_shows(vec![show(82, "Game of Thrones")]);
        assert_eq!(session.shows_revision(), 1);

        let notice = session.notify_error(NoticeTarget::Show(82), "offline");
        session.dismiss_notice(notice);
        let overlay = session.open_panel(DetailPanel::cast(82, &[])).unwrap();
        session.close_overlay(overlay).unwrap();
        session.apply_search(Err(TvScoutError::Service("offline".into())));
        assert_eq!(session.shows_revision(), 1);

        session.replace_shows(vec![show(82, "Game of Thrones")]);
        assert_eq!(session.shows_revision(), 2);
    }

    #[test]
    fn test_empty_result_only_after_search() {
        let mut session = Session::new();
        assert!(!session.is_empty_result());

        session.replace_shows(Vec::new());
        assert!(session.is_empty_result());
    }

    #[test]
    fn test_failed_search_keeps_list_and_notifies() {
        let mut session = Session::new();
        session.replace_shows(vec![show(1, "Batman")]);

        let notice = session.apply_search(Err(TvScoutError::Service("offline".into())));
        assert!(notice.is_some());
        assert_eq!(session.shows().len(), 1);
        assert_eq!(session.notices().for_target(NoticeTarget::Search).count(), 1);

        session.apply_search(Ok(vec![show(2, "Lost")]));
        assert_eq!(session.notices().for_target(NoticeTarget::Search).count(), 0);
        assert_eq!(session.shows()[0].id, 2);
    }

    #[test]
    fn test_failed_details_notify_card() {
        let mut session = Session::new();
        let result = session.apply_details(
            82,
            DetailKind::Crew,
            Err(TvScoutError::Service("HTTP 503".into())),
        );

        assert!(result.is_err());
        assert!(session.overlays().is_empty());
        let messages: Vec<&str> = session
            .notices()
            .for_target(NoticeTarget::Show(82))
            .map(|n| n.message.as_str())
            .collect();
        assert_eq!(messages.len(), 1);
        assert!(messages[0].starts_with("Could not load crew"));
    }
}
