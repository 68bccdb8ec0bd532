// Document domain models
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Document {
    pub id: String,
    pub reference: String,
    pub folder_id: String,
    pub title: String,
    pub description: String,
    pub due_date: Option<DateTime<Utc>>,
    pub file_id: Option<String>,
    pub created_by: String,
    pub date_created: DateTime<Utc>,
    pub is_active: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocumentNew {
    pub reference: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocumentDueDate {
    pub due_date: Option<DateTime<Utc>>,
}
