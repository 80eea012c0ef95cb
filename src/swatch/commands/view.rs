use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::RecordId;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &S, ids: &[RecordId]) -> Result<CmdResult> {
    let records = ids
        .iter()
        .map(|id| store.find(*id))
        .collect::<Result<Vec<_>>>()?;
    Ok(CmdResult::default().with_listed(records))
}
