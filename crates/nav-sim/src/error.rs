use nav_core::NavError;
use nav_mobility::MobilityError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("session configuration error: {0}")]
    Config(#[from] NavError),

    #[error("movement controller error: {0}")]
    Mobility(#[from] MobilityError),

    #[error("{asset} failed to load: {reason}")]
    Asset { asset: &'static str, reason: String },

    #[error("run() needs `max_frames` in the configuration")]
    Unbounded,
}

pub type SimResult<T> = Result<T, SimError>;
