// Project domain models
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub description: String,
    pub created_by: String,
    pub date_created: DateTime<Utc>,
    pub is_enabled: bool,
    pub is_active: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectNew {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectUpdate {
    pub name: String,
    pub description: String,
    pub is_enabled: bool,
}

/// Project state changes that have their own endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectAction {
    Enable,
    Disable,
    Remove,
}

impl ProjectAction {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "enable" => Some(ProjectAction::Enable),
            "disable" => Some(ProjectAction::Disable),
            "remove" => Some(ProjectAction::Remove),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectAction::Enable => "enable",
            ProjectAction::Disable => "disable",
            ProjectAction::Remove => "remove",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_names() {
        for action in [ProjectAction::Enable, ProjectAction::Disable, ProjectAction::Remove] {
            assert_eq!(ProjectAction::from_name(action.as_str()), Some(action));
        }
        assert_eq!(ProjectAction::from_name("archive"), None);
    }
}
