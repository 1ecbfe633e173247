//! Spell Service - Application service for the spells page
//!
//! Looks up the typed spell and appends its summary across the seven aligned
//! spell lists.

use std::sync::Arc;

use charsheet_domain::{AlignedRow, SpellSummary};
use charsheet_shared::{decode_spell, LookupRequest, Resource, ResourceKey};
use futures_util::future::{self, BoxFuture, FutureExt};

use super::{FieldReader, ListAppender, RemoteLookup};
use crate::application::SubmitOutcome;
use crate::ports::outbound::bindings::{SPELL_INPUT, SPELL_LISTS};
use crate::ports::outbound::{LookupError, PagePort};

pub const INVALID_SPELL: &str = "Enter valid spell.";

type SpellLookup = BoxFuture<'static, Result<Option<SpellSummary>, LookupError>>;

/// Claim the lookup of one spell by name under the shared spell resource key
pub(crate) fn claim_spell(lookup: &RemoteLookup, name: &str) -> Result<SpellLookup, LookupError> {
    let pending = lookup.claim(
        ResourceKey::of(Resource::SpellData),
        LookupRequest::by_name(Resource::SpellData, name),
    )?;
    Ok(async move {
        let body = pending.await?;
        Ok::<_, LookupError>(decode_spell(&body)?)
    }
    .boxed())
}

#[derive(Clone)]
pub struct SpellService {
    page: Arc<dyn PagePort>,
    fields: FieldReader,
    lists: ListAppender,
    lookup: RemoteLookup,
}

impl SpellService {
    /// Create a new SpellService on top of a page and a shared lookup
    pub fn new(page: Arc<dyn PagePort>, lookup: RemoteLookup) -> Self {
        Self {
            fields: FieldReader::new(Arc::clone(&page)),
            lists: ListAppender::new(Arc::clone(&page)),
            page,
            lookup,
        }
    }

    pub async fn add_spell(&self) -> SubmitOutcome {
        self.submit_spell().await
    }

    /// Read, validate and claim now; the returned future appends the row.
    pub fn submit_spell(&self) -> BoxFuture<'static, SubmitOutcome> {
        let Ok(typed) = self.fields.read(SPELL_INPUT).into_valid() else {
            self.page.alert(INVALID_SPELL);
            return future::ready(SubmitOutcome::Rejected).boxed();
        };

        let pending = match claim_spell(&self.lookup, &typed) {
            Ok(pending) => pending,
            Err(e) => {
                tracing::debug!(spell = %typed, error = %e, "Spell lookup rejected, key busy");
                self.page.alert("Still looking up the previous spell.");
                return future::ready(SubmitOutcome::Rejected).boxed();
            }
        };
        self.fields.clear(SPELL_INPUT);

        let service = self.clone();
        async move {
            let result = pending.await;
            service.settle(typed, result)
        }
        .boxed()
    }

    fn settle(
        &self,
        typed: String,
        result: Result<Option<SpellSummary>, LookupError>,
    ) -> SubmitOutcome {
        match result {
            Ok(Some(spell)) => {
                let row = spell.to_row();
                tracing::info!(spell = %typed, level = ?spell.level, "Spell added");
                self.append(row)
            }
            Ok(None) => {
                tracing::debug!(spell = %typed, "No spell matched, keeping typed name");
                self.append(AlignedRow::keyed(SPELL_LISTS.width(), typed))
            }
            Err(e) => {
                tracing::warn!(spell = %typed, error = %e, "Spell lookup failed");
                self.page
                    .alert(&format!("Could not look up '{}': {}", typed, e));
                self.lists
                    .append_aligned(SPELL_LISTS, AlignedRow::keyed(SPELL_LISTS.width(), typed));
                SubmitOutcome::Placeholder(e)
            }
        }
    }

    fn append(&self, row: AlignedRow) -> SubmitOutcome {
        let cells = row.cells().to_vec();
        self.lists.append_aligned(SPELL_LISTS, row);
        SubmitOutcome::Appended(cells)
    }
}
