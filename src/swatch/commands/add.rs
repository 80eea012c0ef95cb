use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;
use crate::validate::ValidationRules;

pub fn run<S: DataStore>(store: &S, rules: &ValidationRules, hex: &str) -> Result<CmdResult> {
    rules.validate(hex)?;
    let record = store.add(hex)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Color added ({}): {}",
        record.id, record.hex
    )));
    Ok(result.with_affected(vec![record]))
}
