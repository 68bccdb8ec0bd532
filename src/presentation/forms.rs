// Browser form payloads and their conversion into API models.
//
// Browsers post every field as text, and unchecked checkboxes are simply
// absent. Each form keeps the raw input so a rejected submission can be
// rendered again exactly as the user typed it.
use crate::domain::account::{Account, AccountNew, AccountUpdate};
use crate::domain::asset::AssetNew;
use crate::domain::document::{DocumentDueDate, DocumentNew};
use crate::domain::folder::{FolderNew, FolderNewDescription, FolderNewName};
use crate::domain::project::{Project, ProjectNew, ProjectUpdate};
use crate::domain::repository::{Repository, RepositoryNew, RepositoryUpdate};
use crate::domain::transaction::TransactionNew;
use crate::domain::user::UserNew;
use chrono::NaiveDate;
use serde::Deserialize;
use std::str::FromStr;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Validation messages collected while converting a form.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct FormErrors(pub Vec<String>);

impl FormErrors {
    fn push(&mut self, message: String) {
        self.0.push(message);
    }

    fn required(&mut self, label: &str, value: &str) -> String {
        let value = value.trim();
        if value.is_empty() {
            self.push(format!("{} is required", label));
        }
        value.to_string()
    }

    fn number<T: FromStr + Default>(&mut self, label: &str, value: &str) -> T {
        let cleaned: String = value.chars().filter(|c| !c.is_whitespace()).collect();
        match cleaned.replace(',', ".").parse::<T>() {
            Ok(n) => n,
            Err(_) => {
                self.push(format!("{} must be a number, got '{}'", label, value.trim()));
                T::default()
            }
        }
    }

    /// A finite, non-negative rate such as a depreciation key.
    fn rate(&mut self, label: &str, value: &str) -> f32 {
        let before = self.0.len();
        let rate: f32 = self.number(label, value);
        if self.0.len() == before && (!rate.is_finite() || rate < 0.0) {
            self.push(format!("{} must be a non-negative number, got '{}'", label, value.trim()));
            return 0.0;
        }
        rate
    }

    fn date(&mut self, label: &str, value: &str) -> NaiveDate {
        match parse_date(value) {
            Some(date) => date,
            None => {
                self.push(format!("{} must be a date (YYYY-MM-DD), got '{}'", label, value.trim()));
                NaiveDate::default()
            }
        }
    }

    fn finish<T>(self, value: T) -> Result<T, FormErrors> {
        if self.0.is_empty() { Ok(value) } else { Err(self) }
    }
}

pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok()
}

fn checked(value: &Option<String>) -> bool {
    value.is_some()
}

fn checkbox(value: bool) -> Option<String> {
    value.then(|| "on".to_string())
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RepositoryForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
}

impl RepositoryForm {
    pub fn to_new(&self) -> Result<RepositoryNew, FormErrors> {
        let mut errors = FormErrors::default();
        let name = errors.required("Name", &self.name);
        errors.finish(RepositoryNew {
            name,
            description: self.description.trim().to_string(),
        })
    }

    pub fn to_update(&self) -> Result<RepositoryUpdate, FormErrors> {
        self.to_new().map(|new| RepositoryUpdate {
            name: new.name,
            description: new.description,
        })
    }
}

impl From<&Repository> for RepositoryForm {
    fn from(r: &Repository) -> Self {
        let update = RepositoryUpdate::from(r);
        Self {
            name: update.name,
            description: update.description,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserForm {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
}

impl UserForm {
    pub fn to_new(&self) -> Result<UserNew, FormErrors> {
        let mut errors = FormErrors::default();
        let id = errors.required("User ID", &self.id);
        let name = errors.required("Name", &self.name);
        let email = errors.required("Email", &self.email);
        if !email.is_empty() && !email.contains('@') {
            errors.push(format!("'{}' is not an email address", email));
        }
        errors.finish(UserNew {
            id,
            name,
            email,
            phone: self.phone.trim().to_string(),
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AccountForm {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub is_working: Option<String>,
    pub is_inverse: Option<String>,
}

impl AccountForm {
    pub fn to_new(&self) -> Result<AccountNew, FormErrors> {
        let mut errors = FormErrors::default();
        let id = errors.required("Account number", &self.id);
        if !id.is_empty() && !id.chars().all(|c| c.is_ascii_digit()) {
            errors.push(format!("Account number must contain digits only, got '{}'", id));
        }
        let name = errors.required("Name", &self.name);
        errors.finish(AccountNew {
            id,
            name,
            description: self.description.trim().to_string(),
            is_working: checked(&self.is_working),
            is_inverse: checked(&self.is_inverse),
        })
    }

    pub fn to_update(&self) -> Result<AccountUpdate, FormErrors> {
        let mut errors = FormErrors::default();
        let name = errors.required("Name", &self.name);
        errors.finish(AccountUpdate {
            name,
            description: self.description.trim().to_string(),
            is_working: checked(&self.is_working),
            is_inverse: checked(&self.is_inverse),
        })
    }
}

impl From<&Account> for AccountForm {
    fn from(a: &Account) -> Self {
        Self {
            id: a.id.clone(),
            name: a.name.clone(),
            description: a.description.clone(),
            is_working: checkbox(a.is_working),
            is_inverse: checkbox(a.is_inverse),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TransactionForm {
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub debit: String,
    #[serde(default)]
    pub credit: String,
    #[serde(default)]
    pub amount: String,
    #[serde(default)]
    pub date_settlement: String,
}

impl TransactionForm {
    pub fn to_new(&self) -> Result<TransactionNew, FormErrors> {
        let mut errors = FormErrors::default();
        let subject = errors.required("Subject", &self.subject);
        let debit = errors.required("Debit", &self.debit);
        let credit = errors.required("Credit", &self.credit);
        let amount: i32 = errors.number("Amount", &self.amount);
        let date_settlement = errors.date("Settlement date", &self.date_settlement);
        errors.finish(TransactionNew {
            subject,
            debit,
            credit,
            amount,
            date_settlement,
        })
    }
}

impl From<TransactionNew> for TransactionForm {
    fn from(t: TransactionNew) -> Self {
        Self {
            subject: t.subject,
            debit: t.debit,
            credit: t.credit,
            amount: String::new(),
            date_settlement: t.date_settlement.format(DATE_FORMAT).to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AssetForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub account: String,
    #[serde(default)]
    pub account_clearing: String,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub date_activated: String,
    #[serde(default)]
    pub depreciation_key: String,
    #[serde(default)]
    pub residual_value: String,
}

impl AssetForm {
    pub fn to_new(&self) -> Result<AssetNew, FormErrors> {
        let mut errors = FormErrors::default();
        let name = errors.required("Name", &self.name);
        let account = errors.required("Asset account", &self.account);
        let account_clearing = errors.required("Clearing account", &self.account_clearing);
        let value: u32 = errors.number("Value", &self.value);
        let date_activated = errors.date("Activation date", &self.date_activated);
        let depreciation_key = errors.rate("Depreciation key", &self.depreciation_key);
        let residual_value: u32 = if self.residual_value.trim().is_empty() {
            0
        } else {
            errors.number("Residual value", &self.residual_value)
        };
        if residual_value > value {
            errors.push("Residual value cannot exceed the asset value".to_string());
        }
        errors.finish(AssetNew {
            name,
            description: self.description.trim().to_string(),
            account,
            account_clearing,
            value,
            date_activated,
            depreciation_key,
            residual_value,
        })
    }
}

impl From<AssetNew> for AssetForm {
    fn from(a: AssetNew) -> Self {
        Self {
            name: a.name,
            description: a.description,
            account: a.account,
            account_clearing: a.account_clearing,
            value: String::new(),
            date_activated: a.date_activated.format(DATE_FORMAT).to_string(),
            depreciation_key: String::new(),
            residual_value: String::new(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub is_enabled: Option<String>,
}

impl ProjectForm {
    pub fn to_new(&self) -> Result<ProjectNew, FormErrors> {
        let mut errors = FormErrors::default();
        let name = errors.required("Name", &self.name);
        errors.finish(ProjectNew {
            name,
            description: self.description.trim().to_string(),
        })
    }

    pub fn to_update(&self) -> Result<ProjectUpdate, FormErrors> {
        self.to_new().map(|new| ProjectUpdate {
            name: new.name,
            description: new.description,
            is_enabled: checked(&self.is_enabled),
        })
    }
}

impl From<&Project> for ProjectForm {
    fn from(p: &Project) -> Self {
        Self {
            name: p.name.clone(),
            description: p.description.clone(),
            is_enabled: checkbox(p.is_enabled),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FolderForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
}

impl FolderForm {
    pub fn to_new(&self) -> Result<FolderNew, FormErrors> {
        let mut errors = FormErrors::default();
        let name = errors.required("Name", &self.name);
        errors.finish(FolderNew {
            name,
            description: self.description.trim().to_string(),
        })
    }

    pub fn to_new_name(&self) -> Result<FolderNewName, FormErrors> {
        let mut errors = FormErrors::default();
        let name = errors.required("Name", &self.name);
        errors.finish(FolderNewName { name })
    }

    pub fn to_new_description(&self) -> FolderNewDescription {
        FolderNewDescription {
            description: self.description.trim().to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DocumentForm {
    #[serde(default)]
    pub reference: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
}

impl DocumentForm {
    pub fn to_new(&self) -> Result<DocumentNew, FormErrors> {
        let mut errors = FormErrors::default();
        let title = errors.required("Title", &self.title);
        errors.finish(DocumentNew {
            reference: self.reference.trim().to_string(),
            title,
            description: self.description.trim().to_string(),
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DueDateForm {
    #[serde(default)]
    pub due_date: String,
}

impl DueDateForm {
    /// An empty field clears the due date.
    pub fn to_due_date(&self) -> Result<DocumentDueDate, FormErrors> {
        if self.due_date.trim().is_empty() {
            return Ok(DocumentDueDate { due_date: None });
        }
        let mut errors = FormErrors::default();
        let date = errors.date("Due date", &self.due_date);
        errors.finish(DocumentDueDate {
            due_date: date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transaction_form_parses() {
        let form = TransactionForm {
            subject: " Example invoice ".into(),
            debit: "161".into(),
            credit: "3841".into(),
            amount: "12 500".into(),
            date_settlement: "2026-03-15".into(),
        };
        let model = form.to_new().unwrap();
        assert_eq!(model.subject, "Example invoice");
        assert_eq!(model.amount, 12_500);
        assert_eq!(model.date_settlement, NaiveDate::from_ymd_opt(2026, 3, 15).unwrap());
    }

    #[test]
    fn test_transaction_form_collects_every_error() {
        let form = TransactionForm {
            subject: "".into(),
            debit: "161".into(),
            credit: "".into(),
            amount: "ten".into(),
            date_settlement: "15/03/2026".into(),
        };
        let errors = form.to_new().unwrap_err();
        assert_eq!(errors.0.len(), 4);
        assert!(errors.0[0].contains("Subject"));
        assert!(errors.0[2].contains("'ten'"));
    }

    #[test]
    fn test_asset_form_checks_residual_value() {
        let form = AssetForm {
            name: "Van".into(),
            account: "142".into(),
            account_clearing: "572".into(),
            value: "1000".into(),
            date_activated: "2026-01-01".into(),
            depreciation_key: "0,2".into(),
            residual_value: "2000".into(),
            ..AssetForm::default()
        };
        let errors = form.to_new().unwrap_err();
        assert_eq!(errors.0, vec!["Residual value cannot exceed the asset value".to_string()]);

        let form = AssetForm {
            residual_value: "".into(),
            ..form
        };
        let model = form.to_new().unwrap();
        assert_eq!(model.residual_value, 0);
        assert!((model.depreciation_key - 0.2).abs() < f32::EPSILON);
    }

    #[test]
    fn test_asset_form_rejects_non_finite_and_negative_key() {
        let valid = AssetForm {
            name: "Van".into(),
            account: "142".into(),
            account_clearing: "572".into(),
            value: "1000".into(),
            date_activated: "2026-01-01".into(),
            depreciation_key: "0.2".into(),
            ..AssetForm::default()
        };
        for key in ["NaN", "inf", "-infinity", "-0,5"] {
            let form = AssetForm {
                depreciation_key: key.into(),
                ..valid.clone()
            };
            let errors = form.to_new().unwrap_err();
            assert_eq!(errors.0.len(), 1, "key {}", key);
            assert!(errors.0[0].starts_with("Depreciation key must be a non-negative number"));
        }
        assert!(valid.to_new().is_ok());
    }

    #[test]
    fn test_account_checkboxes() {
        let form = AccountForm {
            id: "384".into(),
            name: "Bank".into(),
            is_working: Some("on".into()),
            ..AccountForm::default()
        };
        let model = form.to_new().unwrap();
        assert!(model.is_working);
        assert!(!model.is_inverse);

        let bad = AccountForm {
            id: "38a".into(),
            ..form
        };
        assert!(bad.to_new().is_err());
        assert!(bad.to_update().is_ok());
    }

    #[test]
    fn test_user_form_requires_email_address() {
        let form = UserForm {
            id: "jdoe".into(),
            name: "J Doe".into(),
            email: "jdoe.example.com".into(),
            phone: "".into(),
        };
        assert!(form.to_new().is_err());
        let form = UserForm {
            email: "jdoe@example.com".into(),
            ..form
        };
        assert_eq!(form.to_new().unwrap().email, "jdoe@example.com");
    }

    #[test]
    fn test_due_date_blank_clears() {
        let cleared = DueDateForm { due_date: " ".into() }.to_due_date().unwrap();
        assert_eq!(cleared.due_date, None);

        let set = DueDateForm {
            due_date: "2026-12-31".into(),
        }
        .to_due_date()
        .unwrap();
        assert_eq!(
            set.due_date.unwrap().date_naive(),
            NaiveDate::from_ymd_opt(2026, 12, 31).unwrap()
        );

        assert!(DueDateForm { due_date: "soon".into() }.to_due_date().is_err());
    }

    #[test]
    fn test_project_update_reads_checkbox() {
        let form = ProjectForm {
            name: "Office move".into(),
            description: "".into(),
            is_enabled: None,
        };
        assert!(!form.to_update().unwrap().is_enabled);
    }
}
