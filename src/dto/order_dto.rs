use serde::{Deserialize, Serialize};

// Body de POST /orders tal como llega; la validación vive en utils::validation
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct OrderRequest {
    pub customer: Option<String>,
    pub model: Option<String>,
    pub trim: Option<String>,
    pub doors: Option<i32>,
    pub color: Option<String>,
    pub engine: Option<String>,
    pub tire: Option<String>,
    pub options: Option<Vec<String>>,
}
