//! Request payloads accepted by the checklist and template endpoints.
//!
//! Nothing in a payload is rejected: a missing, null or wrong-typed field is stored
//! as null, a missing or non-array collection is treated as empty, and ids may be
//! sent either as numbers or as numeric strings (the way form-based clients send them).

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Body of `POST /checklists` and `PUT /checklists/{id}`.
#[derive(Debug, Default, Deserialize)]
pub struct ChecklistPayload {
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub tipo_equipamento: Option<String>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub tasks: Vec<TaskPayload>,
}

/// One entry of a checklist's `tasks` array.
///
/// With an `id` the entry targets an existing task (update only); without one it
/// describes a task to create.
///
/// The flags keep the difference between a missing key (`None`) and a key sent as
/// null (`Some(None)`): only a missing flag falls back to `false` on create.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct TaskPayload {
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient_flag")]
    pub verificado: Option<Option<bool>>,
    #[serde(default, deserialize_with = "lenient_flag")]
    pub foto_verificado: Option<Option<bool>>,
}

/// Body of `POST /templates` and `PUT /templates/{id}`.
#[derive(Debug, Default, Deserialize)]
pub struct TemplatePayload {
    #[serde(default, deserialize_with = "lenient_text")]
    pub nome: Option<String>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub checklists: Vec<ChecklistRef>,
}

/// Reference to a checklist by id inside a template payload.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct ChecklistRef {
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: Option<i64>,
}

fn lenient_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

// Only called when the key is present, so the outer `Some` marks presence.
fn lenient_flag<'de, D>(deserializer: D) -> Result<Option<Option<bool>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Some(match Value::deserialize(deserializer)? {
        Value::Bool(b) => Some(b),
        Value::Number(n) => n.as_i64().map(|n| n != 0),
        _ => None,
    }))
}

/// Keeps the entries of an array that read as `T`; anything else is an empty list.
fn lenient_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect(),
        _ => Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_default_to_null_and_empty() {
        let payload: ChecklistPayload = serde_json::from_str("{}").unwrap();
        assert!(payload.name.is_none());
        assert!(payload.tipo_equipamento.is_none());
        assert!(payload.tasks.is_empty());
    }

    #[test]
    fn null_collections_are_empty() {
        let payload: TemplatePayload =
            serde_json::from_str(r#"{"nome": "Frota", "checklists": null}"#).unwrap();
        assert_eq!(payload.nome.as_deref(), Some("Frota"));
        assert!(payload.checklists.is_empty());
    }

    #[test]
    fn task_entries_keep_optional_id() {
        let payload: ChecklistPayload = serde_json::from_str(
            r#"{"tasks": [{"id": 4, "description": "Oil"}, {"description": "Tyres", "verificado": true}]}"#,
        )
        .unwrap();
        assert_eq!(payload.tasks[0].id, Some(4));
        assert_eq!(payload.tasks[1].id, None);
        assert_eq!(payload.tasks[1].verificado, Some(Some(true)));
        assert_eq!(payload.tasks[1].foto_verificado, None);
    }

    #[test]
    fn ids_accept_numeric_strings() {
        let payload: TemplatePayload = serde_json::from_str(
            r#"{"checklists": [{"id": "1"}, {"id": 2}, {"id": "abc"}, {"id": true}]}"#,
        )
        .unwrap();
        let ids: Vec<Option<i64>> = payload.checklists.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![Some(1), Some(2), None, None]);
    }

    #[test]
    fn wrong_typed_fields_read_as_null() {
        let payload: ChecklistPayload = serde_json::from_str(
            r#"{"name": 5, "tipo_equipamento": ["x"], "tasks": [{"description": {}, "verificado": "yes"}, "junk"]}"#,
        )
        .unwrap();
        assert!(payload.name.is_none());
        assert!(payload.tipo_equipamento.is_none());
        assert_eq!(payload.tasks.len(), 1);
        assert!(payload.tasks[0].description.is_none());
        assert_eq!(payload.tasks[0].verificado, Some(None));
    }

    #[test]
    fn explicit_null_flag_differs_from_missing_flag() {
        let payload: ChecklistPayload =
            serde_json::from_str(r#"{"tasks": [{"verificado": null}]}"#).unwrap();
        assert_eq!(payload.tasks[0].verificado, Some(None));
        assert_eq!(payload.tasks[0].foto_verificado, None);
    }

    #[test]
    fn non_array_collection_is_empty() {
        let payload: ChecklistPayload = serde_json::from_str(r#"{"tasks": "none"}"#).unwrap();
        assert!(payload.tasks.is_empty());
    }
}
