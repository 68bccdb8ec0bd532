// Folder and document screens
use crate::domain::document::Document;
use crate::domain::folder::Folder;
use crate::presentation::forms::{DocumentForm, FolderForm, FormErrors};
use crate::presentation::views::layout::*;
use maud::{html, Markup};

pub fn folder_list(folders: &[Folder]) -> Markup {
    page(
        "Folders",
        html! {
            section.section {
                .container.content {
                    (section_header("Folders", Some("/folder/new")))
                    table.table.is-striped.is-fullwidth {
                        thead {
                            tr { th { "Name" } th { "Description" } th { "Created" } }
                        }
                        tbody {
                            @for folder in folders {
                                tr.has-text-grey-light[!folder.is_active] {
                                    td { a href=(format!("/folder/{}", folder.id)) { (folder.name) } }
                                    td { (folder.description) }
                                    td { (fmt_datetime(folder.date_created)) }
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}

pub fn folder_new(form: &FolderForm, errors: &FormErrors) -> Markup {
    page(
        "New folder",
        html! {
            section.section {
                .container.content {
                    h2.title { "New folder" }
                    (form_errors(errors))
                    form method="POST" action="/folder/new" {
                        (text_field("Name", "name", &form.name, "e.g.: Invoices 2026", true))
                        (textarea_field("Description", "description", &form.description))
                        (form_buttons("/folder"))
                    }
                }
            }
        },
    )
}

pub fn folder_detail(folder: &Folder, documents: &[Document], errors: &FormErrors) -> Markup {
    let base = format!("/folder/{}", folder.id);
    page(
        &folder.name,
        html! {
            section.section {
                .container.content {
                    .level.is-mobile {
                        .level-left {
                            .level-item { h2.title { (folder.name) } }
                        }
                        .level-right {
                            .level-item {
                                @if folder.is_active {
                                    (action_button(&format!("{}/remove", base), "Remove", "is-danger"))
                                } @else {
                                    (action_button(&format!("{}/restore", base), "Restore", "is-success"))
                                }
                            }
                            .level-item { a.button href=(format!("{}/new", base)) accesskey="n" { "+" } }
                        }
                    }
                    @if !folder.is_active {
                        (notification("warning", "This folder has been removed."))
                    }
                    (form_errors(errors))
                    .columns {
                        .column {
                            form method="POST" action=(format!("{}/rename", base)) {
                                (text_field("Name", "name", &folder.name, "", true))
                                button.button.is-small type="submit" { "Rename" }
                            }
                        }
                        .column {
                            form method="POST" action=(format!("{}/redescription", base)) {
                                (textarea_field("Description", "description", &folder.description))
                                button.button.is-small type="submit" { "Update description" }
                            }
                        }
                    }
                    table.table.is-striped.is-fullwidth {
                        thead {
                            tr { th { "Reference" } th { "Title" } th { "Due date" } th { "File" } }
                        }
                        tbody {
                            @for document in documents {
                                tr.has-text-grey-light[!document.is_active] {
                                    td { (document.reference) }
                                    td { a href=(format!("/document/{}", document.id)) { (document.title) } }
                                    td {
                                        @if let Some(due) = document.due_date {
                                            (fmt_date(due.date_naive()))
                                        }
                                    }
                                    td { (yes_no(document.file_id.is_some())) }
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}

pub fn document_new(folder: &Folder, form: &DocumentForm, errors: &FormErrors) -> Markup {
    page(
        "New document",
        html! {
            section.section {
                .container.content {
                    h2.title { "New document in " (folder.name) }
                    (form_errors(errors))
                    form method="POST" action=(format!("/folder/{}/new", folder.id)) {
                        (text_field("Reference", "reference", &form.reference, "e.g.: INV-2026-001", false))
                        (text_field("Title", "title", &form.title, "e.g.: Office rent invoice", true))
                        (textarea_field("Description", "description", &form.description))
                        (form_buttons(&format!("/folder/{}", folder.id)))
                    }
                }
            }
        },
    )
}

pub fn document_detail(document: &Document, errors: &FormErrors) -> Markup {
    let base = format!("/document/{}", document.id);
    let due = document
        .due_date
        .map(|d| fmt_date(d.date_naive()))
        .unwrap_or_default();
    page(
        &document.title,
        html! {
            section.section {
                .container.content {
                    .level.is-mobile {
                        .level-left {
                            .level-item { h2.title { (document.title) } }
                        }
                        .level-right {
                            .level-item {
                                @if document.is_active {
                                    (action_button(&format!("{}/remove", base), "Remove", "is-danger"))
                                } @else {
                                    (action_button(&format!("{}/restore", base), "Restore", "is-success"))
                                }
                            }
                        }
                    }
                    (form_errors(errors))
                    table.table {
                        tbody {
                            tr { th { "Reference" } td { (document.reference) } }
                            tr { th { "Description" } td { (document.description) } }
                            tr { th { "File" } td { (document.file_id.as_deref().unwrap_or("-")) } }
                            tr { th { "Created by" } td { (document.created_by) " at " (fmt_datetime(document.date_created)) } }
                        }
                    }
                    form method="POST" action=(format!("{}/due_date", base)) {
                        (date_field("Due date", "due_date", &due, false))
                        button.button.is-small type="submit" { "Set due date" }
                    }
                    br;
                    a.button href=(format!("/folder/{}", document.folder_id)) { "Back to folder" }
                }
            }
        },
    )
}
