use serde::{Deserialize, Serialize};

/// One hotel as stored in `Hotels.json` and returned by the API.
///
/// Missing fields fall back to their defaults so partially filled records
/// still load.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Hotel {
    pub id: i64,
    pub name: String,
    pub location: String,
    pub rating: f64,
    pub description: String,
    pub images: Vec<String>,
}
