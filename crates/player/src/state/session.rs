use std::sync::Arc;
use std::time::Duration;

use crate::application::services::{
    CharacterService, CurrencyService, DiceService, EncounterService, InventoryService,
    RemoteLookup, SpellService,
};
use crate::ports::outbound::{LookupPort, PagePort};

/// Every service of one open character sheet.
///
/// All lookup-backed services share one [`RemoteLookup`], so pending requests
/// are tracked per resource key across the whole sheet.
#[derive(Clone)]
pub struct PageSession {
    pub inventory: InventoryService,
    pub spells: SpellService,
    pub dice: DiceService,
    pub encounters: EncounterService,
    pub currency: CurrencyService,
    pub characters: CharacterService,
    lookup: RemoteLookup,
}

impl PageSession {
    pub fn new(page: Arc<dyn PagePort>, port: Arc<dyn LookupPort>, timeout: Duration) -> Self {
        let lookup = RemoteLookup::new(port, timeout);
        Self {
            inventory: InventoryService::new(Arc::clone(&page), lookup.clone()),
            spells: SpellService::new(Arc::clone(&page), lookup.clone()),
            dice: DiceService::new(Arc::clone(&page), lookup.clone()),
            encounters: EncounterService::new(Arc::clone(&page)),
            currency: CurrencyService::new(Arc::clone(&page)),
            characters: CharacterService::new(page),
            lookup,
        }
    }

    pub fn lookup(&self) -> &RemoteLookup {
        &self.lookup
    }
}
