//! Session setup and initialization

use crate::dataset::{ClinicalTable, DatasetError, DatasetSource};
use crate::environment::Environment;
use crate::session::messages::print_dataset_loaded;

/// Session data for both TUI and headless modes
#[derive(Debug)]
pub struct SessionData {
    /// The loaded clinical records table
    pub table: ClinicalTable,
    /// The environment the table was loaded from
    pub environment: Environment,
}

/// Loads the dataset through the given source. This runs exactly once per
/// process; any failure here is fatal to the session.
pub async fn setup_session(source: &impl DatasetSource) -> Result<SessionData, DatasetError> {
    let table = source.fetch_table().await?;
    print_dataset_loaded(table.len(), table.dropped_rows());

    Ok(SessionData {
        table,
        environment: source.environment().clone(),
    })
}
