//! Application services - one per page feature, plus the shared building
//! blocks they are composed from.

pub mod character_service;
pub mod currency_service;
pub mod dice_service;
pub mod encounter_service;
pub mod field_reader;
pub mod inventory_service;
pub mod list_appender;
pub mod remote_lookup;
pub mod spell_service;

pub use character_service::CharacterService;
pub use currency_service::CurrencyService;
pub use dice_service::DiceService;
pub use encounter_service::EncounterService;
pub use field_reader::FieldReader;
pub use inventory_service::InventoryService;
pub use list_appender::ListAppender;
pub use remote_lookup::{LookupFuture, LookupState, RemoteLookup};
pub use spell_service::SpellService;
