use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::types::error::AppError;

/// An inventory item as it goes over the wire.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: String,
    pub name: String,
    pub quantity: i32,
    pub last_updated: DateTime<Utc>,
}

impl From<entity::item::Model> for Item {
    fn from(model: entity::item::Model) -> Self {
        Item {
            id: model.id,
            name: model.name,
            quantity: model.quantity,
            last_updated: model.last_updated,
        }
    }
}

/// Request body shared by create and update.
///
/// `quantity` is kept as raw JSON so that both `3` and `"3"` are accepted; form
/// inputs submit numbers as strings. Unknown fields such as `id` or
/// `lastUpdated` are ignored.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct RItemBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewItem {
    pub name: String,
    pub quantity: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemPatch {
    pub name: Option<String>,
    pub quantity: Option<i32>,
}

impl RItemBody {
    pub fn new(name: impl Into<String>, quantity: impl Into<Value>) -> Self {
        RItemBody {
            name: Some(name.into()),
            quantity: Some(quantity.into()),
        }
    }

    /// Both fields are required on create.
    pub fn into_new_item(self) -> Result<NewItem, AppError> {
        let name = self
            .name
            .ok_or_else(|| AppError::Validation("name is required".to_string()))?;
        let quantity = match self.quantity {
            None | Some(Value::Null) => {
                return Err(AppError::Validation("quantity is required".to_string()))
            }
            Some(raw) => parse_quantity(&raw)?,
        };

        Ok(NewItem {
            name: parse_name(&name)?,
            quantity,
        })
    }

    /// Absent fields stay as they are; present ones must still be valid.
    pub fn into_patch(self) -> Result<ItemPatch, AppError> {
        let name = self.name.as_deref().map(parse_name).transpose()?;
        let quantity = match self.quantity {
            None | Some(Value::Null) => None,
            Some(raw) => Some(parse_quantity(&raw)?),
        };
        Ok(ItemPatch { name, quantity })
    }
}

fn parse_name(raw: &str) -> Result<String, AppError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(AppError::Validation("name must not be empty".to_string()));
    }
    Ok(name.to_string())
}

fn parse_quantity(raw: &Value) -> Result<i32, AppError> {
    let invalid = || AppError::Validation("quantity must be a non-negative integer".to_string());

    let parsed = match raw {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && f.fract() == 0.0)
                .map(|f| f as i64)
        }),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };

    parsed
        .filter(|q| *q >= 0)
        .and_then(|q| i32::try_from(q).ok())
        .ok_or_else(invalid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn body(value: Value) -> RItemBody {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn create_accepts_number_and_numeric_string() {
        let item = body(json!({"name": "Soap", "quantity": 3})).into_new_item().unwrap();
        assert_eq!(item, NewItem { name: "Soap".into(), quantity: 3 });

        let item = body(json!({"name": "Soap", "quantity": "12"})).into_new_item().unwrap();
        assert_eq!(item.quantity, 12);
    }

    #[test]
    fn create_requires_both_fields() {
        let err = body(json!({"quantity": 1})).into_new_item().unwrap_err();
        assert_eq!(err.to_string(), "name is required");

        let err = body(json!({"name": "Soap"})).into_new_item().unwrap_err();
        assert_eq!(err.to_string(), "quantity is required");

        let err = body(json!({"name": "Soap", "quantity": null})).into_new_item().unwrap_err();
        assert_eq!(err.to_string(), "quantity is required");
    }

    #[test]
    fn rejects_blank_names_and_bad_quantities() {
        assert!(body(json!({"name": "   ", "quantity": 1})).into_new_item().is_err());
        assert!(body(json!({"name": "Soap", "quantity": -1})).into_new_item().is_err());
        assert!(body(json!({"name": "Soap", "quantity": 2.5})).into_new_item().is_err());
        assert!(body(json!({"name": "Soap", "quantity": "lots"})).into_new_item().is_err());
        assert!(body(json!({"name": "Soap", "quantity": true})).into_new_item().is_err());
        assert!(body(json!({"name": "Soap", "quantity": 5_000_000_000i64})).into_new_item().is_err());
    }

    #[test]
    fn whole_floats_and_padded_names_are_normalised() {
        let item = body(json!({"name": "  Soap ", "quantity": 4.0})).into_new_item().unwrap();
        assert_eq!(item, NewItem { name: "Soap".into(), quantity: 4 });
    }

    #[test]
    fn client_supplied_id_and_timestamp_are_ignored() {
        let item = body(json!({
            "id": "abc",
            "name": "Soap",
            "quantity": 1,
            "lastUpdated": "1999-01-01T00:00:00Z"
        }))
        .into_new_item()
        .unwrap();
        assert_eq!(item, NewItem { name: "Soap".into(), quantity: 1 });
    }

    #[test]
    fn patch_keeps_absent_fields_empty() {
        let patch = body(json!({"quantity": "7"})).into_patch().unwrap();
        assert_eq!(patch, ItemPatch { name: None, quantity: Some(7) });

        let patch = body(json!({})).into_patch().unwrap();
        assert_eq!(patch, ItemPatch::default());

        assert!(body(json!({"name": ""})).into_patch().is_err());
    }

    #[test]
    fn item_serializes_camel_case() {
        let item = Item {
            id: "1".into(),
            name: "Soap".into(),
            quantity: 3,
            last_updated: DateTime::parse_from_rfc3339("2024-05-01T10:00:00Z")
                .unwrap()
                .with_timezone(&Utc),
        };
        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["lastUpdated"], json!("2024-05-01T10:00:00Z"));
        assert_eq!(value["quantity"], json!(3));
    }
}
