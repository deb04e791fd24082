use thiserror::Error;

/// Why a navigation request produced no route.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    #[error("start and destination must both be selected")]
    MissingSelection,

    #[error("unknown location {0:?}")]
    UnknownLocation(String),

    #[error("click hit has a non-finite coordinate")]
    InvalidPoint,

    #[error("no path between the selected points")]
    NoPathFound,

    #[error("navigation mesh is not loaded yet")]
    MeshNotReady,
}

impl RequestError {
    /// The text shown (or spoken) to the user.
    pub fn user_message(&self) -> &'static str {
        match self {
            RequestError::MissingSelection   => "Please select both start and destination points.",
            RequestError::UnknownLocation(_) => "Invalid points selected.",
            RequestError::InvalidPoint       => "Invalid points selected.",
            RequestError::NoPathFound        => "No path found!",
            RequestError::MeshNotReady       => "Navigation mesh is still loading.",
        }
    }
}

pub type RequestResult<T> = Result<T, RequestError>;

#[derive(Debug, Error)]
pub enum LocationError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("location parse error: {0}")]
    Parse(String),

    #[error("location on row {row} has an empty name")]
    EmptyName { row: usize },

    #[error("location {name:?} has a non-finite coordinate")]
    NonFinite { name: String },
}
