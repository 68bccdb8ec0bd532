// Account screens
use crate::domain::account::Account;
use crate::presentation::forms::{AccountForm, FormErrors};
use crate::presentation::views::layout::*;
use maud::{html, Markup};

pub fn account_list(repository_id: &str, accounts: &[Account]) -> Markup {
    repository_page(
        "Accounts",
        repository_id,
        RepositoryTab::Accounts,
        html! {
            section.section {
                .container.content {
                    (section_header("Accounts", Some(&format!("/repository/{}/account/new", repository_id))))
                    table.table.is-striped.is-fullwidth {
                        thead {
                            tr { th { "#" } th { "Name" } th { "Description" } th { "Working" } th { "Inverse" } }
                        }
                        tbody {
                            @for account in accounts {
                                tr {
                                    td { a href=(format!("/repository/{}/account/{}", repository_id, account.id)) { (account.id) } }
                                    td { (account.name) }
                                    td { (account.description) }
                                    td { (yes_no(account.is_working)) }
                                    td { (yes_no(account.is_inverse)) }
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}

pub fn account_new(repository_id: &str, form: &AccountForm, errors: &FormErrors) -> Markup {
    repository_page(
        "New account",
        repository_id,
        RepositoryTab::Accounts,
        html! {
            section.section {
                .container.content {
                    h2.title { "New account" }
                    (form_errors(errors))
                    form method="POST" action=(format!("/repository/{}/account/new", repository_id)) {
                        (text_field("Account number", "id", &form.id, "e.g.: 384", true))
                        (text_field("Name", "name", &form.name, "e.g.: Bank account", true))
                        (textarea_field("Description", "description", &form.description))
                        (checkbox_field("Working account", "is_working", form.is_working.is_some()))
                        (checkbox_field("Inverse account", "is_inverse", form.is_inverse.is_some()))
                        (form_buttons(&format!("/repository/{}/account", repository_id)))
                    }
                }
            }
        },
    )
}

pub fn account_edit(repository_id: &str, account: &Account, form: &AccountForm, errors: &FormErrors) -> Markup {
    repository_page(
        &account.name,
        repository_id,
        RepositoryTab::Accounts,
        html! {
            section.section {
                .container.content {
                    h2.title { (account.id) " " (account.name) }
                    p.has-text-grey {
                        "Created by " (account.created_by) " at " (fmt_datetime(account.date_created))
                    }
                    (form_errors(errors))
                    form method="POST" action=(format!("/repository/{}/account/{}", repository_id, account.id)) {
                        (text_field("Name", "name", &form.name, "", true))
                        (textarea_field("Description", "description", &form.description))
                        (checkbox_field("Working account", "is_working", form.is_working.is_some()))
                        (checkbox_field("Inverse account", "is_inverse", form.is_inverse.is_some()))
                        (form_buttons(&format!("/repository/{}/account", repository_id)))
                    }
                }
            }
        },
    )
}
