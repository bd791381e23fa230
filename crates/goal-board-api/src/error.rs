use thiserror::Error;

/// Errors that can occur during API calls
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request error: {message}")]
    Http {
        message: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("API error: status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("JSON parse error: {message}")]
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ClientError {
    /// HTTP status carried by a `Status` error
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        ClientError::Http {
            message: err.to_string(),
            source: err,
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Json {
            message: err.to_string(),
            source: err,
        }
    }
}

pub type ApiResult<T> = std::result::Result<T, ClientError>;
