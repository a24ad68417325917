use crate::plate::{Plate, PlateError};

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

pub type Result<T> = std::result::Result<T, RegistryError>;

#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error(transparent)]
    Validation(#[from] PlateError),

    #[error("vehicle {0} is already in the parking lot")]
    AlreadyParked(Plate),

    #[error("parking lot is full ({total} slots)")]
    LotFull { total: u32 },

    #[error("vehicle {0} not found in the parking lot")]
    NotFound(Plate),

    #[error("remote service answered {status}: {message}")]
    Remote { status: u16, message: String },

    #[error("could not reach the remote service")]
    Transport(#[source] BoxError),

    #[error("unexpected response from the remote service: {0}")]
    MalformedResponse(String),

    #[error("could not encode the request body")]
    Encoding(#[source] serde_json::Error),

    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl RegistryError {
    /// Business-rule violations, as opposed to failures talking to the store.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            Self::Validation(_)
                | Self::AlreadyParked(_)
                | Self::LotFull { .. }
                | Self::NotFound(_)
                | Self::InvalidRequest(_)
        )
    }
}
