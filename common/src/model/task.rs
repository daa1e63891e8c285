use serde::{Deserialize, Serialize};

/// A single checkable item, always owned by exactly one checklist.
///
/// The flags are optional because an update request that omits them stores null,
/// and the stored value is returned as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub description: Option<String>,
    pub verificado: Option<bool>,
    pub foto_verificado: Option<bool>,
}
