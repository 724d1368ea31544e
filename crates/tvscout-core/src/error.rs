use thiserror::Error;

use crate::overlay::OverlayState;

#[derive(Debug, Error)]
pub enum TvScoutError {
    #[error("service error: {0}")]
    Service(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("overlay {id} cannot go from {from} to {to}")]
    Overlay {
        id: u64,
        from: OverlayState,
        to: OverlayState,
    },

    #[error("no open overlay with id {0}")]
    UnknownOverlay(u64),
}
