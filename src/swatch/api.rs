//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for front ends.
//!
//! It:
//! - **Parses ids** handed over as strings by the UI
//! - **Validates** values before `add` and `update` reach the store
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It never prints, never exits, and holds no global state: the store is
//! injected at construction and owned by the facade.
//!
//! `SwatchApi<S: DataStore>` is generic over the storage backend:
//! - Production: `SwatchApi<FileStore>`
//! - Testing: `SwatchApi<InMemoryStore>`

use crate::commands;
use crate::error::{Result, SwatchError};
use crate::model::RecordId;
use crate::store::DataStore;
use crate::validate::ValidationRules;

pub struct SwatchApi<S: DataStore> {
    store: S,
    rules: ValidationRules,
    paths: commands::SwatchPaths,
}

impl<S: DataStore> SwatchApi<S> {
    pub fn new(store: S, rules: ValidationRules, paths: commands::SwatchPaths) -> Self {
        Self {
            store,
            rules,
            paths,
        }
    }

    pub fn add_color(&self, hex: &str) -> Result<commands::CmdResult> {
        commands::add::run(&self.store, &self.rules, hex)
    }

    pub fn list_colors(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn view_colors<I: AsRef<str>>(&self, ids: &[I]) -> Result<commands::CmdResult> {
        let ids = parse_ids(ids)?;
        commands::view::run(&self.store, &ids)
    }

    pub fn update_color(&self, id: &str, hex: &str) -> Result<commands::CmdResult> {
        let id = parse_id(id)?;
        commands::update::run(&self.store, &self.rules, id, hex)
    }

    pub fn delete_colors<I: AsRef<str>>(&self, ids: &[I]) -> Result<commands::CmdResult> {
        let ids = parse_ids(ids)?;
        commands::delete::run(&self.store, &ids)
    }

    pub fn clear_colors(&self) -> Result<commands::CmdResult> {
        commands::clear::run(&self.store)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, action)
    }

    pub fn paths(&self) -> &commands::SwatchPaths {
        &self.paths
    }
}

fn parse_id(input: &str) -> Result<RecordId> {
    input
        .parse()
        .map_err(|_| SwatchError::Api(format!("Invalid color id: {}", input)))
}

fn parse_ids<I: AsRef<str>>(inputs: &[I]) -> Result<Vec<RecordId>> {
    inputs.iter().map(|s| parse_id(s.as_ref())).collect()
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel, SwatchPaths};
