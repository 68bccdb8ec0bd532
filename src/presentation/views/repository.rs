// Repository screens
use crate::domain::repository::{Repository, RepositoryShort};
use crate::presentation::forms::{FormErrors, RepositoryForm};
use crate::presentation::views::layout::*;
use maud::{html, Markup};

pub fn repository_list(repositories: &[RepositoryShort]) -> Markup {
    page(
        "Repositories",
        html! {
            section.section {
                .container.content {
                    (section_header("Repositories", Some("/repository/new")))
                    @if repositories.is_empty() {
                        (notification("info", "No repositories yet."))
                    } @else {
                        table.table.is-striped.is-fullwidth {
                            thead { tr { th { "Name" } th { "Description" } } }
                            tbody {
                                @for repository in repositories {
                                    tr {
                                        td { a href=(format!("/repository/{}", repository.id)) { (repository.name) } }
                                        td { (repository.description) }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}

pub fn repository_new(form: &RepositoryForm, errors: &FormErrors) -> Markup {
    page(
        "New repository",
        html! {
            section.section {
                .container.content {
                    h2.title { "New repository" }
                    (form_errors(errors))
                    form method="POST" action="/repository/new" {
                        (text_field("Name", "name", &form.name, "e.g.: Example Ltd.", true))
                        (textarea_field("Description", "description", &form.description))
                        (form_buttons("/repository"))
                    }
                }
            }
        },
    )
}

pub fn repository_edit(repository: &Repository, form: &RepositoryForm, errors: &FormErrors) -> Markup {
    let action = format!("/repository/{}/edit", repository.id);
    repository_page(
        &repository.name,
        &repository.id,
        RepositoryTab::Settings,
        html! {
            section.section {
                .container.content {
                    h2.title { "Repository settings" }
                    p.has-text-grey {
                        "Created by " (repository.created_by) " at " (fmt_datetime(repository.date_created))
                    }
                    (form_errors(errors))
                    form method="POST" action=(action) {
                        (text_field("Name", "name", &form.name, "", true))
                        (textarea_field("Description", "description", &form.description))
                        (form_buttons(&format!("/repository/{}", repository.id)))
                    }
                }
            }
        },
    )
}
