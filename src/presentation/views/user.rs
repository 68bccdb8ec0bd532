// User screens
use crate::domain::user::User;
use crate::presentation::forms::{FormErrors, UserForm};
use crate::presentation::views::layout::*;
use maud::{html, Markup};

pub fn user_list(users: &[User]) -> Markup {
    page(
        "Users",
        html! {
            section.section {
                .container.content {
                    (section_header("Users", Some("/user/new")))
                    table.table.is-striped.is-fullwidth {
                        thead {
                            tr { th { "ID" } th { "Name" } th { "Email" } th { "Phone" } th { "Active" } }
                        }
                        tbody {
                            @for user in users {
                                tr {
                                    td { a href=(format!("/user/{}", user.id)) { (user.id) } }
                                    td { (user.name) }
                                    td { (user.email) }
                                    td { (user.phone) }
                                    td { (yes_no(user.is_active)) }
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}

pub fn user_new(form: &UserForm, errors: &FormErrors) -> Markup {
    page(
        "New user",
        html! {
            section.section {
                .container.content {
                    h2.title { "New user" }
                    (form_errors(errors))
                    form method="POST" action="/user/new" {
                        (text_field("User ID", "id", &form.id, "e.g.: jdoe", true))
                        (text_field("Name", "name", &form.name, "e.g.: John Doe", true))
                        (text_field("Email", "email", &form.email, "e.g.: john@example.com", true))
                        (text_field("Phone", "phone", &form.phone, "", false))
                        (form_buttons("/user"))
                    }
                }
            }
        },
    )
}

pub fn user_detail(user: &User) -> Markup {
    page(
        &user.name,
        html! {
            section.section {
                .container.content {
                    h2.title { (user.name) }
                    table.table {
                        tbody {
                            tr { th { "ID" } td { (user.id) } }
                            tr { th { "Email" } td { (user.email) } }
                            tr { th { "Phone" } td { (user.phone) } }
                            tr { th { "Active" } td { (yes_no(user.is_active)) } }
                            tr { th { "Created by" } td { (user.created_by) } }
                            tr { th { "Created" } td { (fmt_datetime(user.date_created)) } }
                        }
                    }
                    a.button href="/user" { "Back" }
                }
            }
        },
    )
}
