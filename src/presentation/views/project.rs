// Project screens
use crate::domain::project::Project;
use crate::presentation::forms::{FormErrors, ProjectForm};
use crate::presentation::views::layout::*;
use maud::{html, Markup};

pub fn project_list(repository_id: &str, projects: &[Project]) -> Markup {
    repository_page(
        "Projects",
        repository_id,
        RepositoryTab::Projects,
        html! {
            section.section {
                .container.content {
                    (section_header("Projects", Some(&format!("/repository/{}/project/new", repository_id))))
                    table.table.is-striped.is-fullwidth {
                        thead {
                            tr { th { "Name" } th { "Description" } th { "Enabled" } th { "Created" } }
                        }
                        tbody {
                            @for project in projects {
                                tr {
                                    td { a href=(format!("/repository/{}/project/{}", repository_id, project.id)) { (project.name) } }
                                    td { (project.description) }
                                    td { (yes_no(project.is_enabled)) }
                                    td { (fmt_datetime(project.date_created)) }
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}

pub fn project_new(repository_id: &str, form: &ProjectForm, errors: &FormErrors) -> Markup {
    repository_page(
        "New project",
        repository_id,
        RepositoryTab::Projects,
        html! {
            section.section {
                .container.content {
                    h2.title { "New project" }
                    (form_errors(errors))
                    form method="POST" action=(format!("/repository/{}/project/new", repository_id)) {
                        (text_field("Name", "name", &form.name, "e.g.: Office move", true))
                        (textarea_field("Description", "description", &form.description))
                        (form_buttons(&format!("/repository/{}/project", repository_id)))
                    }
                }
            }
        },
    )
}

pub fn project_detail(repository_id: &str, project: &Project, form: &ProjectForm, errors: &FormErrors) -> Markup {
    let base = format!("/repository/{}/project/{}", repository_id, project.id);
    repository_page(
        &project.name,
        repository_id,
        RepositoryTab::Projects,
        html! {
            section.section {
                .container.content {
                    .level.is-mobile {
                        .level-left {
                            .level-item { h2.title { (project.name) } }
                        }
                        .level-right {
                            .level-item {
                                @if project.is_enabled {
                                    (action_button(&format!("{}/disable", base), "Disable", "is-warning"))
                                } @else {
                                    (action_button(&format!("{}/enable", base), "Enable", "is-success"))
                                }
                            }
                            .level-item {
                                (action_button(&format!("{}/remove", base), "Remove", "is-danger"))
                            }
                        }
                    }
                    p.has-text-grey {
                        "Created by " (project.created_by) " at " (fmt_datetime(project.date_created))
                    }
                    (form_errors(errors))
                    form method="POST" action=(base) {
                        (text_field("Name", "name", &form.name, "", true))
                        (textarea_field("Description", "description", &form.description))
                        (checkbox_field("Enabled", "is_enabled", form.is_enabled.is_some()))
                        (form_buttons(&format!("/repository/{}/project", repository_id)))
                    }
                }
            }
        },
    )
}
