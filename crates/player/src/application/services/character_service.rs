//! Character Service - Application service for the character roster

use std::sync::Arc;

use charsheet_domain::CharacterCard;

use super::{FieldReader, ListAppender};
use crate::application::SubmitOutcome;
use crate::ports::outbound::bindings::{CHARACTER_CARDS, CHARACTER_NAME_INPUT};
use crate::ports::outbound::PagePort;

pub const INVALID_NAME: &str = "Enter valid name.";

#[derive(Clone)]
pub struct CharacterService {
    page: Arc<dyn PagePort>,
    fields: FieldReader,
    lists: ListAppender,
}

impl CharacterService {
    pub fn new(page: Arc<dyn PagePort>) -> Self {
        Self {
            fields: FieldReader::new(Arc::clone(&page)),
            lists: ListAppender::new(Arc::clone(&page)),
            page,
        }
    }

    pub fn add_character(&self) -> SubmitOutcome {
        let Ok(name) = self.fields.read(CHARACTER_NAME_INPUT).into_valid() else {
            self.page.alert(INVALID_NAME);
            return SubmitOutcome::Rejected;
        };
        self.fields.clear(CHARACTER_NAME_INPUT);

        let card = CharacterCard::new(name);
        self.lists.append_row(CHARACTER_CARDS, card.name.clone());
        tracing::info!(name = %card.name, "Character added");
        SubmitOutcome::Appended(vec![card.name])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::MemoryPage;

    #[test]
    fn card_appended_and_field_cleared() {
        let page = Arc::new(MemoryPage::new());
        let service = CharacterService::new(page.clone());

        page.type_into(CHARACTER_NAME_INPUT, "  Vex ");
        let outcome = service.add_character();

        assert_eq!(outcome, SubmitOutcome::Appended(vec!["Vex".into()]));
        assert_eq!(page.list(CHARACTER_CARDS), vec!["Vex"]);
        assert_eq!(page.field(CHARACTER_NAME_INPUT), "");
    }

    #[test]
    fn blank_name_is_rejected() {
        let page = Arc::new(MemoryPage::new());
        let service = CharacterService::new(page.clone());

        page.type_into(CHARACTER_NAME_INPUT, "\t");
        assert!(service.add_character().is_rejected());
        assert_eq!(page.alerts(), vec![INVALID_NAME]);
        assert!(page.list(CHARACTER_CARDS).is_empty());
    }
}
