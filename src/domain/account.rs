// Account domain models
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Account {
    pub id: String,
    pub name: String,
    pub description: String,
    pub created_by: String,
    pub date_created: DateTime<Utc>,
    pub is_working: bool,
    pub is_inverse: bool,
    pub is_active: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AccountNew {
    pub id: String,
    pub name: String,
    pub description: String,
    pub is_working: bool,
    pub is_inverse: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AccountUpdate {
    pub name: String,
    pub description: String,
    pub is_working: bool,
    pub is_inverse: bool,
}

impl From<&Account> for AccountUpdate {
    fn from(a: &Account) -> Self {
        Self {
            name: a.name.clone(),
            description: a.description.clone(),
            is_working: a.is_working,
            is_inverse: a.is_inverse,
        }
    }
}
