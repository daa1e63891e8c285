use crate::model::task::Task;
use serde::{Deserialize, Serialize};

/// A named set of inspection tasks for one equipment type, as returned by
/// `GET /checklists` and `GET /checklists/{id}`.
///
/// The owning template is not part of the wire shape; templates list their
/// checklists instead (see `ChecklistSummary`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Checklist {
    pub id: i64,
    pub name: Option<String>,
    pub tipo_equipamento: Option<String>,
    pub tasks: Vec<Task>,
}

/// The reduced checklist view embedded in a template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChecklistSummary {
    pub id: i64,
    pub name: Option<String>,
}
