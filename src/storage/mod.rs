//! JSON file storage for famfin
//!
//! The ledger lives in `data/ledger.json` under the base directory and is
//! written atomically.

pub mod file_io;
pub mod ledger;

pub use ledger::{BudgetChange, LedgerData, Storage};

use crate::config::paths::FamfinPaths;
use crate::error::FinanceResult;

impl Storage {
    /// Open and load the ledger at its configured location
    pub fn open(paths: &FamfinPaths) -> FinanceResult<Self> {
        let storage = Storage::new(paths.ledger_file());
        storage.load()?;
        Ok(storage)
    }
}
