use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &S) -> Result<CmdResult> {
    let removed = store.list()?;
    store.clear()?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Cleared {} color{}.",
        removed.len(),
        if removed.len() == 1 { "" } else { "s" }
    )));
    Ok(result.with_affected(removed))
}
