//! Reads and clears page fields.

use std::sync::Arc;

use charsheet_domain::{parse_dice_count, Amount, FieldInput, ValidationError};

use crate::ports::outbound::{FieldId, PagePort};

#[derive(Clone)]
pub struct FieldReader {
    page: Arc<dyn PagePort>,
}

impl FieldReader {
    pub fn new(page: Arc<dyn PagePort>) -> Self {
        Self { page }
    }

    /// Trimmed value of a field together with its validity
    pub fn read(&self, field: FieldId) -> FieldInput {
        FieldInput::new(&self.page.field_value(field))
    }

    /// Currency delta; empty, non-numeric and zero are all invalid
    pub fn read_amount(&self, field: FieldId) -> Result<Amount, ValidationError> {
        Amount::parse(&self.page.field_value(field))
    }

    pub fn read_dice_count(&self, field: FieldId) -> Result<u8, ValidationError> {
        parse_dice_count(&self.page.field_value(field))
    }

    pub fn clear(&self, field: FieldId) {
        self.page.clear_field(field);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::MemoryPage;

    const FIELD: FieldId = FieldId("newWeapon");

    fn reader() -> (Arc<MemoryPage>, FieldReader) {
        let page = Arc::new(MemoryPage::new());
        (page.clone(), FieldReader::new(page))
    }

    #[test]
    fn whitespace_only_is_invalid() {
        let (page, reader) = reader();
        page.type_into(FIELD, "   ");
        assert!(!reader.read(FIELD).is_valid());
        page.type_into(FIELD, " Dagger ");
        assert_eq!(reader.read(FIELD).value(), "Dagger");
    }

    #[test]
    fn amounts_reject_garbage() {
        let (page, reader) = reader();
        page.type_into(FIELD, "12gp");
        assert!(reader.read_amount(FIELD).is_err());
        page.type_into(FIELD, "-3");
        assert_eq!(reader.read_amount(FIELD).map(Amount::value), Ok(-3));
    }

    #[test]
    fn empty_dice_count_is_one() {
        let (_, reader) = reader();
        assert_eq!(reader.read_dice_count(FIELD), Ok(1));
    }
}
