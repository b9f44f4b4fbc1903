use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

/// Where the clinical records CSV is fetched from.
#[derive(Clone, Default, PartialEq, Eq)]
pub enum Environment {
    /// The published UCI archive endpoint.
    #[default]
    Production,
    /// An alternate endpoint (mirror or test fixture server).
    Custom { dataset_url: String },
}

impl Environment {
    /// Returns the dataset URL associated with the environment.
    pub fn dataset_url(&self) -> String {
        match self {
            Environment::Production => {
                "https://archive.ics.uci.edu/ml/machine-learning-databases/00519/heart_failure_clinical_records_dataset.csv"
                    .to_string()
            }
            Environment::Custom { dataset_url } => dataset_url.clone(),
        }
    }
}

impl FromStr for Environment {
    type Err = ();

    /// Parses the `CARDIOSCOPE_DATASET_URL` value: empty or "production"
    /// selects the UCI endpoint, an http(s) URL selects a custom one.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("production") {
            return Ok(Environment::Production);
        }
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            return Ok(Environment::Custom {
                dataset_url: trimmed.to_string(),
            });
        }
        Err(())
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Production => write!(f, "Production"),
            Environment::Custom { .. } => write!(f, "Custom"),
        }
    }
}

impl Debug for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Environment::{}, URL: {}", self, self.dataset_url())
    }
}
