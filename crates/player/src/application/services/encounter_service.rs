//! Encounter Service - Application service for the encounter attack lists

use std::sync::Arc;

use charsheet_domain::Attack;

use super::{FieldReader, ListAppender};
use crate::application::SubmitOutcome;
use crate::ports::outbound::bindings::{ATTACK_INPUT, ATTACK_LISTS};
use crate::ports::outbound::PagePort;

pub const INVALID_ATTACK: &str = "Enter valid attack.";

#[derive(Clone)]
pub struct EncounterService {
    page: Arc<dyn PagePort>,
    fields: FieldReader,
    lists: ListAppender,
}

impl EncounterService {
    pub fn new(page: Arc<dyn PagePort>) -> Self {
        Self {
            fields: FieldReader::new(Arc::clone(&page)),
            lists: ListAppender::new(Arc::clone(&page)),
            page,
        }
    }

    /// Append the typed attack with placeholder bonus and damage
    pub fn add_attack(&self) -> SubmitOutcome {
        let Ok(name) = self.fields.read(ATTACK_INPUT).into_valid() else {
            self.page.alert(INVALID_ATTACK);
            return SubmitOutcome::Rejected;
        };
        self.fields.clear(ATTACK_INPUT);

        let row = Attack::named(name.as_str()).to_row();
        let cells = row.cells().to_vec();
        self.lists.append_aligned(ATTACK_LISTS, row);
        tracing::info!(attack = %name, "Attack added");
        SubmitOutcome::Appended(cells)
    }
}
