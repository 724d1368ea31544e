//! Detail overlay lifecycle.
//!
//! Every open request builds a fresh [`Overlay`]; instances are never reused.
//! Lifecycle: `Constructed -> Shown -> Dismissed -> Removed`, with `Removed`
//! terminal.

use crate::detail::DetailPanel;
use crate::error::TvScoutError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayState {
    Constructed,
    Shown,
    Dismissed,
    Removed,
}

impl std::fmt::Display for OverlayState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Constructed => write!(f, "constructed"),
            Self::Shown => write!(f, "shown"),
            Self::Dismissed => write!(f, "dismissed"),
            Self::Removed => write!(f, "removed"),
        }
    }
}

/// One overlay instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Overlay {
    id: u64,
    panel: DetailPanel,
    state: OverlayState,
}

impl Overlay {
    pub fn new(id: u64, panel: DetailPanel) -> Self {
        Self {
            id,
            panel,
            state: OverlayState::Constructed,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn panel(&self) -> &DetailPanel {
        &self.panel
    }

    pub fn state(&self) -> OverlayState {
        self.state
    }

    pub fn is_visible(&self) -> bool {
        self.state == OverlayState::Shown
    }

    pub fn show(&mut self) -> Result<(), TvScoutError> {
        self.transition(OverlayState::Constructed, OverlayState::Shown)
    }

    pub fn dismiss(&mut self) -> Result<(), TvScoutError> {
        self.transition(OverlayState::Shown, OverlayState::Dismissed)
    }

    pub fn remove(&mut self) -> Result<(), TvScoutError> {
        self.transition(OverlayState::Dismissed, OverlayState::Removed)
    }

    fn transition(&mut self, from: OverlayState, to: OverlayState) -> Result<(), TvScoutError> {
        if self.state != from {
            return Err(TvScoutError::Overlay {
                id: self.id,
                from: self.state,
                to,
            });
        }
        self.state = to;
        Ok(())
    }
}

/// The overlays currently attached to the document, oldest first.
#[derive(Debug, Clone, Default)]
pub struct Overlays {
    next_id: u64,
    attached: Vec<Overlay>,
}

impl Overlays {
    /// Construct, attach and show a new overlay. Returns its id.
    pub fn open(&mut self, panel: DetailPanel) -> Result<u64, TvScoutError> {
        self.next_id += 1;
        let mut overlay = Overlay::new(self.next_id, panel);
        overlay.show()?;

        tracing::debug!(
            overlay = overlay.id,
            show_id = overlay.panel.show_id,
            kind = %overlay.panel.kind,
            lines = overlay.panel.lines.len(),
            "Overlay shown"
        );
        let id = overlay.id;
        self.attached.push(overlay);
        Ok(id)
    }

    /// Dismiss an overlay and detach it. Returns the removed instance.
    pub fn close(&mut self, id: u64) -> Result<Overlay, TvScoutError> {
        let index = self
            .attached
            .iter()
            .position(|o| o.id == id)
            .ok_or(TvScoutError::UnknownOverlay(id))?;

        let overlay = &mut self.attached[index];
        overlay.dismiss()?;
        overlay.remove()?;

        tracing::debug!(overlay = id, "Overlay removed");
        Ok(self.attached.remove(index))
    }

    pub fn get(&self, id: u64) -> Option<&Overlay> {
        self.attached.iter().find(|o| o.id == id)
    }

    pub fn visible(&self) -> impl Iterator<Item = &Overlay> {
        self.attached.iter().filter(|o| o.is_visible())
    }

    pub fn len(&self) -> usize {
        self.attached.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attached.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detail::DetailKind;

    fn panel() -> DetailPanel {
        DetailPanel {
            kind: DetailKind::Cast,
            show_id: 82,
            lines: vec!["Emilia Clarke".into()],
        }
    }

    #[test]
    fn test_full_lifecycle() {
        let mut overlay = Overlay::new(1, panel());
        assert_eq!(overlay.state(), OverlayState::Constructed);
        assert!(!overlay.is_visible());

        overlay.show().unwrap();
        assert!(overlay.is_visible());
        overlay.dismiss().unwrap();
        assert_eq!(overlay.state(), OverlayState::Dismissed);
        overlay.remove().unwrap();
        assert_eq!(overlay.state(), OverlayState::Removed);
    }

    #[test]
    fn test_removed_is_terminal() {
        let mut overlay = Overlay::new(1, panel());
        overlay.show().unwrap();
        overlay.dismiss().unwrap();
        overlay.remove().unwrap();

        assert!(overlay.show().is_err());
        assert!(overlay.dismiss().is_err());
        assert!(overlay.remove().is_err());
        assert_eq!(overlay.state(), OverlayState::Removed);
    }

    #[test]
    fn test_illegal_transition_leaves_state() {
        let mut overlay = Overlay::new(7, panel());
        match overlay.dismiss() {
            Err(TvScoutError::Overlay { id, from, to }) => {
                assert_eq!(id, 7);
                assert_eq!(from, OverlayState::Constructed);
                assert_eq!(to, OverlayState::Dismissed);
            }
            other => panic!("Expected Overlay error, got {other:?}"),
        }
        assert_eq!(overlay.state(), OverlayState::Constructed);
    }

    #[test]
    fn test_open_and_close() {
        let mut overlays = Overlays::default();
        let id = overlays.open(panel()).unwrap();
        assert_eq!(overlays.visible().count(), 1);

        let removed = overlays.close(id).unwrap();
        assert_eq!(removed.state(), OverlayState::Removed);
        assert!(overlays.is_empty());
        assert!(overlays.get(id).is_none());
    }

    #[test]
    fn test_reopen_builds_new_instance() {
        let mut overlays = Overlays::default();
        let first = overlays.open(panel()).unwrap();
        overlays.close(first).unwrap();
        let second = overlays.open(panel()).unwrap();

        assert_ne!(first, second);
        assert_eq!(overlays.len(), 1);
        assert!(matches!(
            overlays.close(first),
            Err(TvScoutError::UnknownOverlay(_))
        ));
    }

    #[test]
    fn test_duplicate_opens_are_independent() {
        let mut overlays = Overlays::default();
        let a = overlays.open(panel()).unwrap();
        let b = overlays.open(panel()).unwrap();
        assert_eq!(overlays.visible().count(), 2);

        overlays.close(b).unwrap();
        assert_eq!(overlays.visible().count(), 1);
        assert!(overlays.get(a).unwrap().is_visible());
    }
}
