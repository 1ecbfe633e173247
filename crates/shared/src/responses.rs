//! Response envelopes and positional-row decoding.
//!
//! Every endpoint answers `{ "result": ... }`. Rolls carry an integer; lookups
//! carry one table row as a positional array, or `null` when nothing matched.
//! Some backends serialize the row to a JSON string before wrapping it, so a
//! string `result` holding an array is accepted too.

use charsheet_domain::SpellSummary;
use serde_json::Value;
use thiserror::Error;

use crate::resources::Resource;

/// Positions of the spell columns consumed by the spells page
pub mod spell_columns {
    pub const NAME: usize = 1;
    pub const LEVEL: usize = 2;
    pub const CASTING_TIME: usize = 4;
    pub const RANGE: usize = 5;
    pub const DURATION: usize = 6;
    pub const SAVE: usize = 11;
    pub const AFFECT: usize = 12;
}

/// Errors decoding a backend response body
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResponseError {
    #[error("Response has no 'result' field")]
    MissingResult,
    #[error("Unexpected response shape: {0}")]
    UnexpectedShape(String),
}

fn result_field(body: &Value) -> Result<&Value, ResponseError> {
    body.get("result").ok_or(ResponseError::MissingResult)
}

/// Decode `{ "result": <integer> }`
pub fn decode_roll(body: &Value) -> Result<i64, ResponseError> {
    let result = result_field(body)?;
    result
        .as_i64()
        .or_else(|| result.as_str().and_then(|s| s.trim().parse().ok()))
        .ok_or_else(|| ResponseError::UnexpectedShape(format!("roll result {}", result)))
}

/// Decode a lookup body into its positional row; `None` when nothing matched
pub fn decode_row(body: &Value) -> Result<Option<Vec<Value>>, ResponseError> {
    match result_field(body)? {
        Value::Null => Ok(None),
        Value::Array(row) => Ok(Some(row.clone())),
        Value::String(encoded) => match serde_json::from_str::<Value>(encoded) {
            Ok(Value::Array(row)) => Ok(Some(row)),
            Ok(Value::Null) => Ok(None),
            _ => Err(ResponseError::UnexpectedShape(format!(
                "row string {:?}",
                encoded
            ))),
        },
        other => Err(ResponseError::UnexpectedShape(format!("row {}", other))),
    }
}

/// Display text of one cell, `None` for missing, null or blank cells
pub fn cell_text(row: &[Value], index: usize) -> Option<String> {
    match row.get(index)? {
        Value::Null => None,
        Value::String(text) => {
            let trimmed = text.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        Value::Bool(true) => Some("Yes".to_string()),
        Value::Bool(false) => Some("No".to_string()),
        other => Some(other.to_string()),
    }
}

/// Decode the name column of an item lookup
pub fn decode_item_name(resource: Resource, body: &Value) -> Result<Option<String>, ResponseError> {
    let column = resource.name_column().ok_or_else(|| {
        ResponseError::UnexpectedShape(format!("{} rows have no name column", resource))
    })?;
    Ok(decode_row(body)?.and_then(|row| cell_text(&row, column)))
}

/// Decode a spell lookup into the spells page columns
pub fn decode_spell(body: &Value) -> Result<Option<SpellSummary>, ResponseError> {
    use spell_columns::*;

    Ok(decode_row(body)?.map(|row| SpellSummary {
        name: cell_text(&row, NAME),
        level: cell_text(&row, LEVEL),
        casting_time: cell_text(&row, CASTING_TIME),
        duration: cell_text(&row, DURATION),
        range: cell_text(&row, RANGE),
        save: cell_text(&row, SAVE),
        affect: cell_text(&row, AFFECT),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fireball_row() -> Value {
        json!([
            42,
            "Fireball",
            3,
            "Evocation",
            "1 action",
            "150 feet",
            "Instantaneous",
            "A bright streak...",
            "V, S, M",
            false,
            false,
            "DEX",
            "8d6",
            "1d6 per slot level above 3rd",
            "Sorcerer, Wizard",
            ""
        ])
    }

    #[test]
    fn roll_result_integer() {
        assert_eq!(decode_roll(&json!({"result": 15})), Ok(15));
        assert_eq!(decode_roll(&json!({"result": "7"})), Ok(7));
    }

    #[test]
    fn roll_result_missing_or_garbage() {
        assert_eq!(decode_roll(&json!({})), Err(ResponseError::MissingResult));
        assert!(matches!(
            decode_roll(&json!({"result": [1, 2]})),
            Err(ResponseError::UnexpectedShape(_))
        ));
    }

    #[test]
    fn spell_columns_by_position() {
        let spell = decode_spell(&json!({ "result": fireball_row() }))
            .unwrap()
            .unwrap();
        assert_eq!(spell.name.as_deref(), Some("Fireball"));
        assert_eq!(spell.level.as_deref(), Some("3"));
        assert_eq!(spell.casting_time.as_deref(), Some("1 action"));
        assert_eq!(spell.range.as_deref(), Some("150 feet"));
        assert_eq!(spell.duration.as_deref(), Some("Instantaneous"));
        assert_eq!(spell.save.as_deref(), Some("DEX"));
        assert_eq!(spell.affect.as_deref(), Some("8d6"));
    }

    #[test]
    fn string_encoded_row_is_accepted() {
        let encoded = serde_json::to_string(&fireball_row()).unwrap();
        let spell = decode_spell(&json!({ "result": encoded })).unwrap().unwrap();
        assert_eq!(spell.name.as_deref(), Some("Fireball"));
    }

    #[test]
    fn null_result_means_no_match() {
        assert_eq!(decode_spell(&json!({"result": null})), Ok(None));
        assert_eq!(
            decode_item_name(Resource::WeaponData, &json!({"result": null})),
            Ok(None)
        );
    }

    #[test]
    fn short_rows_leave_columns_empty() {
        let spell = decode_spell(&json!({"result": [1, "Light", 0]}))
            .unwrap()
            .unwrap();
        assert_eq!(spell.name.as_deref(), Some("Light"));
        assert_eq!(spell.level.as_deref(), Some("0"));
        assert_eq!(spell.affect, None);
    }

    #[test]
    fn item_names_per_table() {
        let armor = json!({"result": [3, "Medium", "Breastplate", 14, null, false, 20, 400]});
        assert_eq!(
            decode_item_name(Resource::ArmorData, &armor),
            Ok(Some("Breastplate".to_string()))
        );
        let weapon = json!({"result": [9, "Longsword", "Martial Melee", 15, "1d8 slashing"]});
        assert_eq!(
            decode_item_name(Resource::WeaponData, &weapon),
            Ok(Some("Longsword".to_string()))
        );
    }

    #[test]
    fn object_result_is_rejected() {
        assert!(matches!(
            decode_row(&json!({"result": {"name": "Longsword"}})),
            Err(ResponseError::UnexpectedShape(_))
        ));
    }

    #[test]
    fn cell_text_renders_scalars() {
        let row = vec![json!(true), json!(2.5), json!("  "), Value::Null];
        assert_eq!(cell_text(&row, 0).as_deref(), Some("Yes"));
        assert_eq!(cell_text(&row, 1).as_deref(), Some("2.5"));
        assert_eq!(cell_text(&row, 2), None);
        assert_eq!(cell_text(&row, 3), None);
        assert_eq!(cell_text(&row, 9), None);
    }
}
