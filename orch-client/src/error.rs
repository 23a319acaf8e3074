// SPDX-FileCopyrightText: 2026 sdwan-status contributors
//
// SPDX-License-Identifier: MPL-2.0

use std::{fmt, io};

/// Non-2xx response from the orchestrator REST API.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ApiError {
    pub endpoint: String,
    pub code: u16,
    pub canonical_reason: Option<String>,
    pub message: Option<String>,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let error = if let Some(reason) = &self.canonical_reason {
            format!("{} {}", self.code, reason)
        } else {
            format!("{}", self.code)
        };
        if let Some(message) = &self.message {
            write!(
                f,
                "'{}' from API endpoint '{}': {}",
                error, self.endpoint, message
            )
        } else {
            write!(f, "'{}' from API endpoint '{}'", error, self.endpoint)
        }
    }
}

impl std::error::Error for ApiError {}

#[derive(Debug)]
pub enum Error {
    SerdeJson(serde_json::Error),
    Io(io::Error),
    Reqwest(reqwest::Error),
    Api(ApiError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::SerdeJson(err) => write!(f, "{}", err),
            Self::Io(err) => write!(f, "{}", err),
            Self::Reqwest(err) => write!(f, "{}", err),
            Self::Api(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for Error {}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::SerdeJson(err)
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Self::Reqwest(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_display() {
        let err = ApiError {
            endpoint: "appliance".to_string(),
            code: 401,
            canonical_reason: Some("Unauthorized".to_string()),
            message: None,
        };
        assert_eq!(
            err.to_string(),
            "'401 Unauthorized' from API endpoint 'appliance'"
        );

        let err = ApiError {
            endpoint: "authentication/login".to_string(),
            code: 403,
            canonical_reason: None,
            message: Some("invalid credentials".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "'403' from API endpoint 'authentication/login': invalid credentials"
        );
    }
}
