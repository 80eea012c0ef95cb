use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::RecordId;
use crate::store::DataStore;
use crate::validate::ValidationRules;

pub fn run<S: DataStore>(
    store: &S,
    rules: &ValidationRules,
    id: RecordId,
    hex: &str,
) -> Result<CmdResult> {
    rules.validate(hex)?;
    let record = store.update(id, hex)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Color updated ({}): {}",
        record.id, record.hex
    )));
    Ok(result.with_affected(vec![record]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::view;
    use crate::error::SwatchError;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn updates_color_value() {
        let fixture = StoreFixture::new().with_color("#ff0000");
        run(&fixture.store, &ValidationRules::default(), RecordId(1), "#00ff00").unwrap();

        let listed = view::run(&fixture.store, &[RecordId(1)]).unwrap().listed;
        assert_eq!(listed[0].hex, "#00ff00");
    }

    #[test]
    fn missing_id_does_not_create() {
        let fixture = StoreFixture::new();
        let err = run(&fixture.store, &ValidationRules::default(), RecordId(4), "#fff").unwrap_err();
        assert!(err.is_not_found());
        assert!(fixture.store.list().unwrap().is_empty());
    }

    #[test]
    fn invalid_value_leaves_record_untouched() {
        let fixture = StoreFixture::new().with_color("#ff0000");
        let err = run(&fixture.store, &ValidationRules::default(), RecordId(1), "#f").unwrap_err();
        assert!(matches!(err, SwatchError::Validation(_)));
        assert_eq!(fixture.store.find(RecordId(1)).unwrap().hex, "#ff0000");
    }
}
