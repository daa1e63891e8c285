use crate::model::checklist::ChecklistSummary;
use serde::{Deserialize, Serialize};

/// A named grouping of checklists.
///
/// `checklists` is `None` in list responses for templates without any associated
/// checklist, so the key is left out of the JSON entirely. Single-template responses
/// always carry `Some`, even when the vector is empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    pub id: i64,
    pub nome: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checklists: Option<Vec<ChecklistSummary>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checklists_key_is_omitted_when_none() {
        let template = Template {
            id: 1,
            nome: Some("Frota".to_string()),
            checklists: None,
        };
        let value = serde_json::to_value(&template).unwrap();
        assert_eq!(value, serde_json::json!({"id": 1, "nome": "Frota"}));
    }

    #[test]
    fn empty_checklists_are_kept_when_some() {
        let template = Template {
            id: 2,
            nome: None,
            checklists: Some(Vec::new()),
        };
        let value = serde_json::to_value(&template).unwrap();
        assert_eq!(value, serde_json::json!({"id": 2, "nome": null, "checklists": []}));
    }
}
