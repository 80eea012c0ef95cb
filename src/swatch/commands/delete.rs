use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::RecordId;
use crate::store::DataStore;
use std::collections::HashSet;

/// Deletes every id given. Repeated ids count once. All ids are checked
/// first, so an unknown id fails the command before anything is removed.
pub fn run<S: DataStore>(store: &S, ids: &[RecordId]) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let mut seen = HashSet::new();
    let mut unique = Vec::with_capacity(ids.len());
    for id in ids {
        if seen.insert(*id) {
            unique.push(*id);
        } else {
            result.add_message(CmdMessage::warning(format!("Ignoring repeated id: {}", id)));
        }
    }

    for id in &unique {
        store.find(*id)?;
    }

    for id in unique {
        let record = store.delete(id)?;
        result.add_message(CmdMessage::success(format!(
            "Color deleted ({}): {}",
            record.id, record.hex
        )));
        result.affected.push(record);
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{list, MessageLevel};
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn deletes_requested_colors() {
        let fixture = StoreFixture::new().with_colors(3);
        let result = run(&fixture.store, &[RecordId(1), RecordId(3)]).unwrap();
        assert_eq!(result.affected.len(), 2);

        let remaining = list::run(&fixture.store).unwrap().listed;
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, RecordId(2));
    }

    #[test]
    fn unknown_id_deletes_nothing() {
        let fixture = StoreFixture::new().with_colors(2);
        let err = run(&fixture.store, &[RecordId(1), RecordId(9)]).unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(fixture.store.list().unwrap().len(), 2);
    }

    #[test]
    fn repeated_id_is_deleted_once() {
        let fixture = StoreFixture::new().with_colors(2);
        let result = run(&fixture.store, &[RecordId(1), RecordId(1)]).unwrap();
        assert_eq!(result.affected.len(), 1);
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert_eq!(result.messages[0].content, "Ignoring repeated id: 1");
        assert_eq!(result.messages[1].level, MessageLevel::Success);

        let remaining = fixture.store.list().unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, RecordId(2));
    }
}
