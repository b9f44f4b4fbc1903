//! Dataset HTTP client
//!
//! Fetches the heart-failure clinical records CSV from its fixed endpoint.

use crate::dataset::error::DatasetError;
use crate::dataset::parse::parse_table;
use crate::dataset::table::ClinicalTable;
use crate::environment::Environment;
use reqwest::{Client, ClientBuilder, Response};
use std::time::Duration;

#[cfg(test)]
use mockall::{automock, predicate::*};

// User-Agent string with the explorer version
const USER_AGENT: &str = concat!("cardioscope/", env!("CARGO_PKG_VERSION"));

/// A source of the clinical records table. The session layer depends on this
/// trait rather than the concrete client so tests can stub the load.
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait DatasetSource: Send + Sync {
    fn environment(&self) -> &Environment;

    /// Fetch and parse the full table. Called once at startup; any failure
    /// is fatal to the session.
    async fn fetch_table(&self) -> Result<ClinicalTable, DatasetError>;
}

#[derive(Debug, Clone)]
pub struct DatasetClient {
    client: Client,
    environment: Environment,
}

impl DatasetClient {
    pub fn new(environment: Environment) -> Self {
        Self {
            client: ClientBuilder::new()
                .connect_timeout(Duration::from_secs(10))
                .timeout(Duration::from_secs(30))
                .build()
                .expect("Failed to create HTTP client"),
            environment,
        }
    }

    async fn handle_response_status(response: Response) -> Result<Response, DatasetError> {
        if !response.status().is_success() {
            return Err(DatasetError::from_response(response).await);
        }
        Ok(response)
    }
}

#[async_trait::async_trait]
impl DatasetSource for DatasetClient {
    fn environment(&self) -> &Environment {
        &self.environment
    }

    async fn fetch_table(&self) -> Result<ClinicalTable, DatasetError> {
        let url = self.environment.dataset_url();
        let response = self
            .client
            .get(&url)
            .header("User-Agent", USER_AGENT)
            .send()
            .await?;

        let response = Self::handle_response_status(response).await?;
        let bytes = response.bytes().await?;
        parse_table(&bytes, &url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_reports_its_environment() {
        let client = DatasetClient::new(Environment::Production);
        assert_eq!(*client.environment(), Environment::Production);
    }

    #[test]
    fn client_targets_the_environment_url() {
        let environment = Environment::Custom {
            dataset_url: "http://localhost:9000/records.csv".to_string(),
        };
        let client = DatasetClient::new(environment);
        assert_eq!(
            client.environment().dataset_url(),
            "http://localhost:9000/records.csv"
        );
    }
}
