// Page shell shared by every screen
use crate::presentation::forms::FormErrors;
use chrono::{DateTime, NaiveDate, Utc};
use maud::{html, Markup, PreEscaped, DOCTYPE};
use num_format::{Locale, ToFormattedString};
use serde::Serialize;

const BULMA_CSS: &str = "https://cdn.jsdelivr.net/npm/bulma@0.9.4/css/bulma.min.css";

/// Repository tabs shown under the navbar on repository screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepositoryTab {
    Dashboard,
    Accounts,
    Transactions,
    Ledger,
    Assets,
    Projects,
    Settings,
}

impl RepositoryTab {
    const ALL: [RepositoryTab; 7] = [
        RepositoryTab::Dashboard,
        RepositoryTab::Accounts,
        RepositoryTab::Transactions,
        RepositoryTab::Ledger,
        RepositoryTab::Assets,
        RepositoryTab::Projects,
        RepositoryTab::Settings,
    ];

    fn label(&self) -> &'static str {
        match self {
            RepositoryTab::Dashboard => "Dashboard",
            RepositoryTab::Accounts => "Accounts",
            RepositoryTab::Transactions => "Transactions",
            RepositoryTab::Ledger => "Ledger",
            RepositoryTab::Assets => "Assets",
            RepositoryTab::Projects => "Projects",
            RepositoryTab::Settings => "Settings",
        }
    }

    fn href(&self, repository_id: &str) -> String {
        let suffix = match self {
            RepositoryTab::Dashboard => "",
            RepositoryTab::Accounts => "/account",
            RepositoryTab::Transactions => "/transaction",
            RepositoryTab::Ledger => "/ledger",
            RepositoryTab::Assets => "/asset",
            RepositoryTab::Projects => "/project",
            RepositoryTab::Settings => "/edit",
        };
        format!("/repository/{}{}", repository_id, suffix)
    }
}

pub fn page(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="hu" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) " | Ledger console" }
                link rel="stylesheet" href=(BULMA_CSS);
            }
            body {
                (navbar())
                (content)
            }
        }
    }
}

pub fn repository_page(title: &str, repository_id: &str, active: RepositoryTab, content: Markup) -> Markup {
    page(
        title,
        html! {
            (tabbar(repository_id, active))
            (content)
        },
    )
}

fn navbar() -> Markup {
    html! {
        nav.navbar.is-dark role="navigation" {
            .navbar-brand {
                a.navbar-item href="/" { strong { "Ledger console" } }
            }
            .navbar-menu {
                .navbar-start {
                    a.navbar-item href="/repository" { "Repositories" }
                    a.navbar-item href="/user" { "Users" }
                    a.navbar-item href="/folder" { "Folders" }
                }
            }
        }
    }
}

fn tabbar(repository_id: &str, active: RepositoryTab) -> Markup {
    html! {
        .tabs.is-centered {
            ul {
                @for tab in RepositoryTab::ALL {
                    li.is-active[tab == active] {
                        a href=(tab.href(repository_id)) { (tab.label()) }
                    }
                }
            }
        }
    }
}

/// Section header with an optional "+" action on the right.
pub fn section_header(title: &str, new_href: Option<&str>) -> Markup {
    html! {
        .level.is-mobile {
            .level-left {
                .level-item { h2.title.is-spaced { (title) } }
            }
            @if let Some(href) = new_href {
                .level-right {
                    .level-item { a.button href=(href) accesskey="n" { "+" } }
                }
            }
        }
    }
}

pub fn notification(kind: &str, message: &str) -> Markup {
    html! {
        div class=(format!("notification is-{}", kind)) { (message) }
    }
}

pub fn form_errors(errors: &FormErrors) -> Markup {
    html! {
        @if !errors.0.is_empty() {
            .notification.is-danger {
                ul {
                    @for message in &errors.0 {
                        li { (message) }
                    }
                }
            }
        }
    }
}

pub fn text_field(label: &str, name: &str, value: &str, placeholder: &str, required: bool) -> Markup {
    html! {
        .field {
            label.label for=(name) { (label) }
            .control {
                input.input type="text" id=(name) name=(name) value=(value) placeholder=(placeholder) required[required];
            }
        }
    }
}

pub fn date_field(label: &str, name: &str, value: &str, required: bool) -> Markup {
    html! {
        .field {
            label.label for=(name) { (label) }
            .control {
                input.input type="date" id=(name) name=(name) value=(value) required[required];
            }
        }
    }
}

pub fn textarea_field(label: &str, name: &str, value: &str) -> Markup {
    html! {
        .field {
            label.label for=(name) { (label) }
            .control {
                textarea.textarea id=(name) name=(name) { (value) }
            }
        }
    }
}

pub fn checkbox_field(label: &str, name: &str, checked: bool) -> Markup {
    html! {
        .field {
            .control {
                label.checkbox {
                    input type="checkbox" name=(name) checked[checked];
                    " " (label)
                }
            }
        }
    }
}

pub fn form_buttons(cancel_href: &str) -> Markup {
    html! {
        .buttons {
            button.button.is-primary.is-outlined type="submit" { "Save" }
            a.button href=(cancel_href) { "Cancel" }
        }
    }
}

/// Single-button form posting to `action`, used for state changes.
pub fn action_button(action: &str, label: &str, class: &str) -> Markup {
    html! {
        form method="POST" action=(action) style="display:inline" {
            button type="submit" class=(format!("button is-small {}", class)) { (label) }
        }
    }
}

pub fn yes_no(value: bool) -> &'static str {
    if value { "Yes" } else { "No" }
}

pub fn fmt_amount(value: i64) -> String {
    value.to_formatted_string(&Locale::hu)
}

pub fn fmt_huf(value: i64) -> String {
    format!("HUF {}", fmt_amount(value))
}

pub fn fmt_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn fmt_datetime(dt: DateTime<Utc>) -> String {
    dt.format("%Y-%m-%d %H:%M").to_string()
}

/// Serialize data for an inline `<script type="application/json">` block.
pub fn json_script<T: Serialize>(id: &str, data: &T) -> Markup {
    let json = serde_json::to_string(data)
        .unwrap_or_else(|_| "null".to_string())
        .replace('<', "\\u003c");
    html! {
        script type="application/json" id=(id) { (PreEscaped(json)) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fmt_amount_groups_thousands() {
        let formatted = fmt_amount(-1_234_567);
        let digits: String = formatted.chars().filter(|c| c.is_ascii_digit()).collect();
        assert_eq!(digits, "1234567");
        assert!(formatted.chars().count() > "-1234567".len());
        assert_eq!(fmt_amount(999), "999");
    }

    #[test]
    fn test_json_script_escapes_markup() {
        let markup = json_script("data", &vec!["</script><b>"]).into_string();
        assert!(!markup.contains("</script><b>"));
        assert!(markup.contains("\\u003c/script>\\u003cb>"));
    }

    #[test]
    fn test_tabbar_marks_active_tab() {
        let html = tabbar("r1", RepositoryTab::Assets).into_string();
        assert!(html.contains(r#"<li class="is-active"><a href="/repository/r1/asset">Assets</a></li>"#));
        assert!(html.contains(r#"<a href="/repository/r1/transaction">Transactions</a>"#));
    }
}
