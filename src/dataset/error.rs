//! Error handling for the dataset module

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatasetError {
    /// Reqwest error, typically related to network issues or request failures.
    #[error("Request error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// The dataset endpoint answered with a non-success status.
    #[error("HTTP error with status {status}: {message}")]
    Http { status: u16, message: String },

    /// The CSV payload could not be read.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A required column is absent from the CSV header.
    #[error("dataset is missing required column '{0}'")]
    MissingColumn(String),

    /// No complete record survived the missing-value filter.
    #[error("dataset contained no complete records")]
    Empty,
}

impl DatasetError {
    pub async fn from_response(response: reqwest::Response) -> DatasetError {
        let status = response.status().as_u16();
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Failed to read response text".to_string());

        DatasetError::Http { status, message }
    }
}
