// Transaction and ledger screens
use crate::domain::ledger::LedgerItem;
use crate::domain::transaction::{Transaction, TransactionFilter};
use crate::presentation::forms::{FormErrors, TransactionForm};
use crate::presentation::views::layout::*;
use chrono::NaiveDate;
use maud::{html, Markup};

pub fn transaction_list(repository_id: &str, transactions: &[Transaction], filter: &TransactionFilter) -> Markup {
    let total: i64 = transactions.iter().map(|t| i64::from(t.amount)).sum();
    repository_page(
        "Transactions",
        repository_id,
        RepositoryTab::Transactions,
        html! {
            section.section {
                .container.content {
                    (section_header("Transactions", Some(&format!("/repository/{}/transaction/new", repository_id))))
                    form method="GET" action=(format!("/repository/{}/transaction", repository_id)) {
                        .field.is-grouped {
                            .control {
                                input.input type="date" name="from" value=(filter.from.as_deref().unwrap_or(""));
                            }
                            .control {
                                input.input type="date" name="till" value=(filter.till.as_deref().unwrap_or(""));
                            }
                            .control {
                                input.input type="text" name="account" placeholder="Account" value=(filter.account.as_deref().unwrap_or(""));
                            }
                            .control {
                                button.button.is-info.is-outlined type="submit" { "Filter" }
                            }
                            @if !filter.is_empty() {
                                .control {
                                    a.button href=(format!("/repository/{}/transaction", repository_id)) { "Clear" }
                                }
                            }
                        }
                    }
                }
                .container {
                    table.table.is-striped.is-fullwidth."is-size-7" {
                        thead {
                            tr {
                                th { "#" }
                                th { "Subject" }
                                th { "D/C" }
                                th.has-text-right { "Amount" }
                                th { "Date settlement" }
                                th { "Date created" }
                                th { "Created by" }
                            }
                        }
                        tbody {
                            @for transaction in transactions {
                                tr {
                                    td { (transaction.id) }
                                    td { (transaction.subject) }
                                    td { (transaction.debit) "/" (transaction.credit) }
                                    td.has-text-right { (fmt_huf(i64::from(transaction.amount))) }
                                    td { (fmt_date(transaction.date_settlement)) }
                                    td { (fmt_datetime(transaction.date_created)) }
                                    td { (transaction.created_by) }
                                }
                            }
                        }
                        tfoot {
                            tr {
                                th colspan="3" { (transactions.len()) " transactions" }
                                th.has-text-right { (fmt_huf(total)) }
                                th colspan="3" {}
                            }
                        }
                    }
                }
            }
        },
    )
}

pub fn transaction_new(repository_id: &str, form: &TransactionForm, errors: &FormErrors) -> Markup {
    repository_page(
        "New transaction",
        repository_id,
        RepositoryTab::Transactions,
        html! {
            section.section {
                .container.content {
                    h2.title { "New transaction" }
                    (form_errors(errors))
                    form method="POST" action=(format!("/repository/{}/transaction/new", repository_id)) {
                        (text_field("Subject", "subject", &form.subject, "e.g.: Example invoice", true))
                        (text_field("Debit", "debit", &form.debit, "e.g.: 161", true))
                        (text_field("Credit", "credit", &form.credit, "e.g.: 3841", true))
                        (text_field("Amount", "amount", &form.amount, "e.g.: 1000", true))
                        (date_field("Settlement date", "date_settlement", &form.date_settlement, true))
                        (form_buttons(&format!("/repository/{}/transaction", repository_id)))
                    }
                }
            }
        },
    )
}

pub fn ledger(repository_id: &str, till: NaiveDate, items: &[LedgerItem]) -> Markup {
    repository_page(
        "Ledger",
        repository_id,
        RepositoryTab::Ledger,
        html! {
            section.section {
                .container.content {
                    (section_header("Ledger", None))
                    form method="GET" action=(format!("/repository/{}/ledger", repository_id)) {
                        .field.has-addons {
                            .control {
                                input.input type="date" name="till" value=(fmt_date(till));
                            }
                            .control {
                                button.button.is-info.is-outlined type="submit" { "Show" }
                            }
                        }
                    }
                    table.table.is-striped.is-fullwidth {
                        thead {
                            tr {
                                th { "#" }
                                th { "Name" }
                                th.has-text-right { "Debit total" }
                                th.has-text-right { "Credit total" }
                                th.has-text-right { "Balance" }
                            }
                        }
                        tbody {
                            @for item in items {
                                tr.has-text-grey-light[!item.is_active] {
                                    td {
                                        a href=(format!("/repository/{}/account/{}", repository_id, item.account_id)) { (item.account_id) }
                                    }
                                    td { (item.name) }
                                    td.has-text-right { (fmt_amount(item.debit_total)) }
                                    td.has-text-right { (fmt_amount(item.credit_total)) }
                                    td.has-text-right { (fmt_amount(item.total)) }
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}
