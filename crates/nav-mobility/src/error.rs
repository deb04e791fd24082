use thiserror::Error;

#[derive(Debug, Error)]
pub enum MobilityError {
    #[error("speed must be a positive number, got {0}")]
    InvalidSpeed(f32),

    #[error("arrival threshold must be a positive number, got {0}")]
    InvalidThreshold(f32),
}

pub type MobilityResult<T> = Result<T, MobilityError>;
