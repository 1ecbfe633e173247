//! Dice Service - Application service for the dice roller page
//!
//! Rolls go through the backend dice resource. With advantage checked a second
//! roll runs on its own lane beside the primary one, and each result lands in
//! its own display as soon as it resolves.

use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

use charsheet_domain::{DiceRollResult, DieSize, SpellSummary, PLACEHOLDER};
use charsheet_shared::{decode_roll, LookupRequest, Resource, ResourceKey};
use futures_util::future::{self, BoxFuture, FutureExt};

use super::spell_service::{claim_spell, INVALID_SPELL};
use super::{FieldReader, RemoteLookup};
use crate::application::RollOutcome;
use crate::ports::outbound::bindings::{
    ADVANTAGE_RESULT, ADVANTAGE_TOGGLE, DICE_RESULT, NUM_DICE_INPUT, SPELL_DAMAGE_INPUT,
    SPELL_DAMAGE_RESULT,
};
use crate::ports::outbound::{LookupError, PagePort, TextId};

pub const NO_DIE_SELECTED: &str = "Select a die to roll.";
pub const INVALID_DICE_COUNT: &str = "Enter a valid number of dice.";

/// Lane the advantage roll runs on
pub const ADVANTAGE_LANE: &str = "advantage";

/// Display text for a roll total
pub fn format_roll(total: Option<i64>) -> String {
    match total {
        Some(total) => format!("Result:{}", total),
        None => format!("Result:{}", PLACEHOLDER),
    }
}

#[derive(Clone)]
pub struct DiceService {
    page: Arc<dyn PagePort>,
    fields: FieldReader,
    lookup: RemoteLookup,
    selected: Arc<AtomicU8>,
}

impl DiceService {
    /// Create a new DiceService with no die selected
    pub fn new(page: Arc<dyn PagePort>, lookup: RemoteLookup) -> Self {
        Self {
            fields: FieldReader::new(Arc::clone(&page)),
            page,
            lookup,
            selected: Arc::new(AtomicU8::new(DieSize::to_u8(None))),
        }
    }

    pub fn select_die(&self, die: DieSize) {
        self.selected
            .store(DieSize::to_u8(Some(die)), Ordering::SeqCst);
        tracing::debug!(die = %die, "Die selected");
    }

    pub fn selected_die(&self) -> Option<DieSize> {
        DieSize::from_u8(self.selected.load(Ordering::SeqCst))
    }

    /// Sync the advantage display with the checkbox
    pub fn advantage_toggled(&self) {
        let text = if self.page.is_checked(ADVANTAGE_TOGGLE) {
            "0"
        } else {
            ""
        };
        self.page.set_text(ADVANTAGE_RESULT, text);
    }

    /// Roll the selected die, twice when advantage is checked
    pub async fn roll(&self) -> RollOutcome {
        self.submit_roll().await
    }

    /// Read the die, count and advantage box now; the returned future rolls.
    pub fn submit_roll(&self) -> BoxFuture<'static, RollOutcome> {
        let Some(die) = self.selected_die() else {
            self.page.alert(NO_DIE_SELECTED);
            return future::ready(RollOutcome::Rejected).boxed();
        };
        let count = match self.fields.read_dice_count(NUM_DICE_INPUT) {
            Ok(count) => count,
            Err(e) => {
                tracing::debug!(error = %e, "Dice count rejected");
                self.page.alert(INVALID_DICE_COUNT);
                return future::ready(RollOutcome::Rejected).boxed();
            }
        };
        let with_advantage = self.page.is_checked(ADVANTAGE_TOGGLE);

        let request = LookupRequest::dice_roll(die, count);
        tracing::info!(die = %die, count, with_advantage, "Rolling");

        let service = self.clone();
        async move {
            if with_advantage {
                let (primary, advantage) = tokio::join!(
                    service.roll_into(ResourceKey::of(Resource::DiceRoll), request.clone(), DICE_RESULT),
                    service.roll_into(
                        ResourceKey::lane(Resource::DiceRoll, ADVANTAGE_LANE),
                        request,
                        ADVANTAGE_RESULT
                    ),
                );
                RollOutcome::Rolled {
                    primary,
                    advantage: Some(advantage),
                }
            } else {
                let primary = service
                    .roll_into(ResourceKey::of(Resource::DiceRoll), request, DICE_RESULT)
                    .await;
                RollOutcome::Rolled {
                    primary,
                    advantage: None,
                }
            }
        }
        .boxed()
    }

    async fn roll_into(
        &self,
        key: ResourceKey,
        request: LookupRequest,
        target: TextId,
    ) -> Result<i64, LookupError> {
        let result = self
            .lookup
            .fetch(key.clone(), request)
            .await
            .and_then(|body| decode_roll(&body).map_err(LookupError::from));

        match &result {
            Ok(total) => {
                tracing::info!(key = %key, total, "Roll resolved");
                self.page.set_text(target, &format_roll(Some(*total)));
            }
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "Roll failed");
                self.page.set_text(target, &format_roll(None));
                self.page.alert(&format!("Roll failed: {}", e));
            }
        }
        result
    }

    /// Look up the typed spell and roll its damage formula locally
    pub async fn roll_spell_damage(&self) -> Option<DiceRollResult> {
        self.submit_spell_damage().await
    }

    /// Read the spell name and claim its lookup now; the returned future rolls.
    pub fn submit_spell_damage(&self) -> BoxFuture<'static, Option<DiceRollResult>> {
        let Ok(name) = self.fields.read(SPELL_DAMAGE_INPUT).into_valid() else {
            self.page.alert(INVALID_SPELL);
            return future::ready(None).boxed();
        };

        let pending = match claim_spell(&self.lookup, &name) {
            Ok(pending) => pending,
            Err(e) => {
                tracing::debug!(spell = %name, error = %e, "Spell damage lookup rejected");
                self.page.alert("Still looking up the previous spell.");
                return future::ready(None).boxed();
            }
        };

        let service = self.clone();
        async move {
            let result = pending.await;
            service.roll_damage(&name, result)
        }
        .boxed()
    }

    fn roll_damage(
        &self,
        name: &str,
        looked_up: Result<Option<SpellSummary>, LookupError>,
    ) -> Option<DiceRollResult> {
        let spell = match looked_up {
            Ok(Some(spell)) => spell,
            Ok(None) => {
                self.page.alert(&format!("No spell named '{}'.", name));
                return None;
            }
            Err(e) => {
                tracing::warn!(spell = %name, error = %e, "Spell damage lookup failed");
                self.page
                    .alert(&format!("Could not look up '{}': {}", name, e));
                return None;
            }
        };

        match spell.damage_formula() {
            Ok(formula) => {
                let roll = formula.roll();
                tracing::info!(spell = %name, breakdown = %roll.breakdown(), "Spell damage rolled");
                self.page.set_text(SPELL_DAMAGE_RESULT, &roll.breakdown());
                Some(roll)
            }
            Err(e) => {
                tracing::debug!(spell = %name, affect = ?spell.affect, error = %e, "Unrollable damage");
                self.page
                    .alert(&format!("'{}' has no damage dice to roll.", name));
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::testing::fixtures::{roll_body, spell_body};
    use crate::infrastructure::testing::GatedLookupPort;
    use crate::infrastructure::MemoryPage;
    use crate::ports::outbound::MockLookupPort;
    use std::time::Duration;

    fn service(port: Arc<dyn crate::ports::outbound::LookupPort>) -> (Arc<MemoryPage>, DiceService) {
        let page = Arc::new(MemoryPage::new());
        let lookup = RemoteLookup::new(port, Duration::from_secs(5));
        (page.clone(), DiceService::new(page, lookup))
    }

    #[tokio::test]
    async fn result_shown_only_after_resolution() {
        let port = Arc::new(GatedLookupPort::held(Ok(roll_body(15))));
        let (page, service) = service(port.clone());
        service.select_die(DieSize::D20);

        let rolling = tokio::spawn({
            let service = service.clone();
            async move { service.roll().await }
        });
        tokio::task::yield_now().await;

        assert_eq!(port.calls(), 1);
        assert_eq!(page.text(DICE_RESULT), "");

        port.release();
        let outcome = rolling.await.unwrap();

        assert_eq!(
            outcome,
            RollOutcome::Rolled {
                primary: Ok(15),
                advantage: None
            }
        );
        assert_eq!(page.text(DICE_RESULT), "Result:15");
        assert_eq!(
            port.requests(),
            vec![LookupRequest::dice_roll(DieSize::D20, 1)]
        );
    }

    #[tokio::test]
    async fn advantage_rolls_twice() {
        let port = Arc::new(GatedLookupPort::open(Ok(roll_body(12))));
        let (page, service) = service(port.clone());
        service.select_die(DieSize::D20);
        page.set_checked(ADVANTAGE_TOGGLE, true);

        let outcome = service.roll().await;

        assert_eq!(
            outcome,
            RollOutcome::Rolled {
                primary: Ok(12),
                advantage: Some(Ok(12))
            }
        );
        assert_eq!(port.calls(), 2);
        assert_eq!(page.text(DICE_RESULT), "Result:12");
        assert_eq!(page.text(ADVANTAGE_RESULT), "Result:12");
    }

    #[tokio::test]
    async fn no_die_selected_is_rejected() {
        let mut port = MockLookupPort::new();
        port.expect_fetch().never();
        let (page, service) = service(Arc::new(port));

        assert_eq!(service.roll().await, RollOutcome::Rejected);
        assert_eq!(page.alerts(), vec![NO_DIE_SELECTED]);
    }

    #[tokio::test]
    async fn bad_dice_count_is_rejected() {
        let mut port = MockLookupPort::new();
        port.expect_fetch().never();
        let (page, service) = service(Arc::new(port));
        service.select_die(DieSize::D6);
        page.type_into(NUM_DICE_INPUT, "lots");

        assert_eq!(service.roll().await, RollOutcome::Rejected);
        assert_eq!(page.alerts(), vec![INVALID_DICE_COUNT]);
    }

    #[tokio::test]
    async fn failed_roll_shows_placeholder() {
        let mut port = MockLookupPort::new();
        port.expect_fetch()
            .returning(|_| Err(LookupError::RequestFailed("refused".into())));
        let (page, service) = service(Arc::new(port));
        service.select_die(DieSize::D8);

        let outcome = service.roll().await;

        assert!(matches!(
            outcome,
            RollOutcome::Rolled { primary: Err(_), advantage: None }
        ));
        assert_eq!(page.text(DICE_RESULT), "Result:--");
        assert_eq!(page.alerts().len(), 1);
    }

    #[tokio::test]
    async fn advantage_box_is_read_when_the_roll_is_issued() {
        let port = Arc::new(GatedLookupPort::held(Ok(roll_body(7))));
        let (page, service) = service(port.clone());
        service.select_die(DieSize::D12);
        page.set_checked(ADVANTAGE_TOGGLE, true);

        let rolling = service.submit_roll();
        page.set_checked(ADVANTAGE_TOGGLE, false);
        service.select_die(DieSize::D4);
        port.release();

        assert!(matches!(
            rolling.await,
            RollOutcome::Rolled { primary: Ok(7), advantage: Some(Ok(7)) }
        ));
        assert_eq!(
            port.requests(),
            vec![LookupRequest::dice_roll(DieSize::D12, 1); 2]
        );
    }

    #[test]
    fn advantage_toggle_display() {
        let (page, service) = service(Arc::new(MockLookupPort::new()));
        page.set_checked(ADVANTAGE_TOGGLE, true);
        service.advantage_toggled();
        assert_eq!(page.text(ADVANTAGE_RESULT), "0");
        page.set_checked(ADVANTAGE_TOGGLE, false);
        service.advantage_toggled();
        assert_eq!(page.text(ADVANTAGE_RESULT), "");
    }

    #[test]
    fn selection_round_trips_through_atomic() {
        let (_, service) = service(Arc::new(MockLookupPort::new()));
        assert_eq!(service.selected_die(), None);
        service.select_die(DieSize::D100);
        assert_eq!(service.selected_die(), Some(DieSize::D100));
    }

    #[tokio::test]
    async fn spell_damage_rolls_affect_column() {
        let mut port = MockLookupPort::new();
        port.expect_fetch()
            .returning(|_| Ok(spell_body("Fireball", 3, Some("DEX"), Some("8d6"))));
        let (page, service) = service(Arc::new(port));
        page.type_into(SPELL_DAMAGE_INPUT, "Fireball");

        let roll = service.roll_spell_damage().await.unwrap();

        assert_eq!(roll.individual_rolls.len(), 8);
        assert!((8..=48).contains(&roll.total));
        assert_eq!(page.text(SPELL_DAMAGE_RESULT), roll.breakdown());
    }

    #[tokio::test]
    async fn spell_without_dice_alerts() {
        let mut port = MockLookupPort::new();
        port.expect_fetch()
            .returning(|_| Ok(spell_body("Light", 0, None, None)));
        let (page, service) = service(Arc::new(port));
        page.type_into(SPELL_DAMAGE_INPUT, "Light");

        assert!(service.roll_spell_damage().await.is_none());
        assert_eq!(page.alerts().len(), 1);
        assert_eq!(page.text(SPELL_DAMAGE_RESULT), "");
    }
}
