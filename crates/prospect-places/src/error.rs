use thiserror::Error;

/// Errors returned by the places API client.
#[derive(Debug, Error)]
pub enum PlacesError {
    /// Network or TLS failure, or a non-2xx HTTP status.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The provider answered with a `status` other than `"OK"`.
    #[error("places API returned status {status}{}", message_suffix(.message))]
    Status {
        status: String,
        message: Option<String>,
    },

    /// The response body had no `status` field.
    #[error("response from {context} has no status field")]
    MissingStatus { context: String },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid base URL '{base_url}': {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },
}

fn message_suffix(message: &Option<String>) -> String {
    message
        .as_deref()
        .map(|m| format!(": {m}"))
        .unwrap_or_default()
}

/// Errors that end a prospecting run before any search is issued.
#[derive(Debug, Error)]
pub enum ProspectError {
    #[error("could not resolve coordinates for {address}")]
    CoordinatesUnavailable { address: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_display_includes_message() {
        let err = PlacesError::Status {
            status: "REQUEST_DENIED".to_owned(),
            message: Some("The provided API key is invalid.".to_owned()),
        };
        assert_eq!(
            err.to_string(),
            "places API returned status REQUEST_DENIED: The provided API key is invalid."
        );
    }

    #[test]
    fn status_error_display_without_message() {
        let err = PlacesError::Status {
            status: "ZERO_RESULTS".to_owned(),
            message: None,
        };
        assert_eq!(err.to_string(), "places API returned status ZERO_RESULTS");
    }
}
