// Fixed asset screens
use crate::application::asset_service::AssetOverview;
use crate::domain::asset::Asset;
use crate::presentation::forms::{AssetForm, FormErrors};
use crate::presentation::views::layout::*;
use chrono::Datelike;
use maud::{html, Markup};

fn amount(value: u64) -> String {
    fmt_amount(i64::try_from(value).unwrap_or(i64::MAX))
}

pub fn asset_list(repository_id: &str, overview: &AssetOverview) -> Markup {
    let today = overview.today;
    repository_page(
        "Assets",
        repository_id,
        RepositoryTab::Assets,
        html! {
            section.section {
                .container.content {
                    (section_header("Assets", Some(&format!("/repository/{}/asset/new", repository_id))))
                    nav.level {
                        .level-item.has-text-centered {
                            div {
                                p.heading { "Depreciation " (today.year()) }
                                p.title id="depreciation-year" { (amount(overview.totals.year)) }
                            }
                        }
                        .level-item.has-text-centered {
                            div {
                                p.heading { "Depreciation " (today.format("%Y-%m")) }
                                p.title id="depreciation-month" { (amount(overview.totals.month)) }
                            }
                        }
                    }
                    table.table.is-striped.is-fullwidth {
                        thead {
                            tr {
                                th { "#" }
                                th { "Name" }
                                th { "Account" }
                                th.has-text-right { "Value" }
                                th { "Activated" }
                                th.has-text-right { "This year" }
                                th.has-text-right { "This month" }
                            }
                        }
                        tbody {
                            @for asset in &overview.assets {
                                @let totals = asset.depreciation_totals(today);
                                tr {
                                    td { a href=(format!("/repository/{}/asset/{}", repository_id, asset.id)) { (asset.id) } }
                                    td { (asset.name) }
                                    td { (asset.account) " / " (asset.account_clearing) }
                                    td.has-text-right { (fmt_amount(i64::from(asset.value))) }
                                    td { (fmt_date(asset.date_activated)) }
                                    td.has-text-right { (amount(totals.year)) }
                                    td.has-text-right { (amount(totals.month)) }
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}

pub fn asset_detail(repository_id: &str, asset: &Asset) -> Markup {
    repository_page(
        &asset.name,
        repository_id,
        RepositoryTab::Assets,
        html! {
            section.section {
                .container.content {
                    h2.title { (asset.name) }
                    @if !asset.description.is_empty() {
                        p { (asset.description) }
                    }
                    table.table {
                        tbody {
                            tr { th { "Asset account" } td { (asset.account) } }
                            tr { th { "Clearing account" } td { (asset.account_clearing) } }
                            tr { th { "Value" } td { (fmt_huf(i64::from(asset.value))) } }
                            tr { th { "Residual value" } td { (fmt_huf(i64::from(asset.residual_value))) } }
                            tr { th { "Activated" } td { (fmt_date(asset.date_activated)) } }
                            tr { th { "Depreciation key" } td { (format!("{:.2}", asset.depreciation_key)) } }
                            tr { th { "Daily depreciation" } td { (fmt_huf(i64::from(asset.depreciation_daily_value))) } }
                            tr {
                                th { "Last depreciation day" }
                                td { (fmt_date(asset.depreciation_last_day)) " (" (fmt_huf(i64::from(asset.depreciation_last_day_value))) ")" }
                            }
                            tr { th { "Created by" } td { (asset.created_by) " at " (fmt_datetime(asset.date_created)) } }
                        }
                    }
                    h3 { "Depreciation schedule" }
                    table.table.is-striped."is-size-7" {
                        thead {
                            tr { th { "Month" } th.has-text-right { "Monthly" } th.has-text-right { "Cumulated" } }
                        }
                        tbody {
                            @for month in &asset.depreciation_monthly {
                                tr {
                                    td { (month.date.format("%Y-%m")) }
                                    td.has-text-right { (fmt_amount(i64::from(month.monthly))) }
                                    td.has-text-right { (fmt_amount(i64::from(month.cumulated))) }
                                }
                            }
                        }
                    }
                    a.button href=(format!("/repository/{}/asset", repository_id)) { "Back" }
                }
            }
        },
    )
}

pub fn asset_new(repository_id: &str, form: &AssetForm, errors: &FormErrors) -> Markup {
    repository_page(
        "New asset",
        repository_id,
        RepositoryTab::Assets,
        html! {
            section.section {
                .container.content {
                    h2.title { "New asset" }
                    (form_errors(errors))
                    form method="POST" action=(format!("/repository/{}/asset/new", repository_id)) {
                        (text_field("Name", "name", &form.name, "e.g.: Delivery van", true))
                        (textarea_field("Description", "description", &form.description))
                        (text_field("Asset account", "account", &form.account, "e.g.: 142", true))
                        (text_field("Clearing account", "account_clearing", &form.account_clearing, "e.g.: 572", true))
                        (text_field("Value", "value", &form.value, "e.g.: 1000000", true))
                        (date_field("Activation date", "date_activated", &form.date_activated, true))
                        (text_field("Depreciation key", "depreciation_key", &form.depreciation_key, "e.g.: 0.2", true))
                        (text_field("Residual value", "residual_value", &form.residual_value, "e.g.: 0", false))
                        (form_buttons(&format!("/repository/{}/asset", repository_id)))
                    }
                }
            }
        },
    )
}
