//! Offline backend
//!
//! Answers dice rolls locally so the roller works without a server. Table
//! lookups need the backend database and report `Unavailable`.

use async_trait::async_trait;
use charsheet_domain::{DiceFormula, DieSize};
use charsheet_shared::requests::NUM_DICE_PARAM;
use charsheet_shared::{LookupRequest, Resource};
use serde_json::{json, Value};

use crate::ports::outbound::{LookupError, LookupPort};

#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineLookup;

impl OfflineLookup {
    pub fn new() -> Self {
        Self
    }

    fn roll(request: &LookupRequest) -> Result<Value, LookupError> {
        let die: DieSize = request
            .param(Resource::DiceRoll.input_param())
            .ok_or_else(|| LookupError::InvalidResponse("missing die".to_string()))?
            .parse()
            .map_err(|e: charsheet_domain::DiceParseError| {
                LookupError::InvalidResponse(e.to_string())
            })?;
        let count = request
            .param(NUM_DICE_PARAM)
            .map(|raw| raw.parse::<u8>())
            .transpose()
            .map_err(|e| LookupError::InvalidResponse(e.to_string()))?
            .unwrap_or(1);

        let formula =
            DiceFormula::of_die(count, die).map_err(|e| LookupError::InvalidResponse(e.to_string()))?;
        let roll = formula.roll();
        tracing::debug!(formula = %formula, breakdown = %roll.breakdown(), "Offline roll");
        Ok(json!({ "result": roll.total }))
    }
}

#[async_trait]
impl LookupPort for OfflineLookup {
    async fn fetch(&self, request: &LookupRequest) -> Result<Value, LookupError> {
        match request.resource {
            Resource::DiceRoll => Self::roll(request),
            other => Err(LookupError::Unavailable(format!(
                "{} needs a backend; set CHARSHEET_API_URL",
                other
            ))),
        }
    }
}
