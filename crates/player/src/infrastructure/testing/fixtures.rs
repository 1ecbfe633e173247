//! Backend response bodies in the shape the endpoints answer with.

use charsheet_shared::Resource;
use serde_json::{json, Value};

pub fn roll_body(total: i64) -> Value {
    json!({ "result": total })
}

/// Body for a lookup that matched nothing
pub fn no_match() -> Value {
    json!({ "result": null })
}

/// Row whose name sits in the resource's name column
pub fn item_body(resource: Resource, name: &str) -> Value {
    let row = match resource {
        Resource::ArmorData => json!([1, "Light", name, 11, null, false, 10, 5]),
        Resource::WeaponData => json!([1, name, "Martial Melee", 15, "1d8 slashing"]),
        _ => json!([1, name, "A common item", 1]),
    };
    json!({ "result": row })
}

/// Full spell row; columns not shown on the page hold filler values
pub fn spell_body(name: &str, level: u8, save: Option<&str>, affect: Option<&str>) -> Value {
    json!({
        "result": [
            7,
            name,
            level,
            "Evocation",
            "1 action",
            "120 feet",
            "Instantaneous",
            "Description",
            "V, S",
            false,
            false,
            save,
            affect,
            "",
            "Wizard",
            ""
        ]
    })
}
