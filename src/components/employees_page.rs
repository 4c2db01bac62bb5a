use dioxus::prelude::*;

use crate::api::{ApiClient, NewEmployee};

/// Employee directory: list, add, delete. The list refetches after every
/// successful mutation rather than patching local state.
#[component]
pub fn EmployeesPage() -> Element {
    let api = use_context::<ApiClient>();

    let list_api = api.clone();
    let mut employees = use_resource(move || {
        let api = list_api.clone();
        async move { api.list_employees().await }
    });

    let mut employee_id = use_signal(String::new);
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut department = use_signal(String::new);
    let mut form_error = use_signal(|| None::<String>);

    let submit_api = api.clone();
    let on_submit = move |event: FormEvent| {
        event.prevent_default();

        let new_employee = NewEmployee {
            employee_id: employee_id.read().trim().to_string(),
            name: name.read().trim().to_string(),
            email: email.read().trim().to_string(),
            department: department.read().trim().to_string(),
        };
        if new_employee.employee_id.is_empty()
            || new_employee.name.is_empty()
            || new_employee.email.is_empty()
            || new_employee.department.is_empty()
        {
            form_error.set(Some("All fields are required".to_string()));
            return;
        }

        let api = submit_api.clone();
        spawn(async move {
            match api.create_employee(&new_employee).await {
                Ok(created) => {
                    tracing::info!(id = created.id, "employee created");
                    form_error.set(None);
                    employee_id.set(String::new());
                    name.set(String::new());
                    email.set(String::new());
                    department.set(String::new());
                    employees.restart();
                }
                Err(err) => form_error.set(Some(format!("Could not add employee: {err}"))),
            }
        });
    };

    rsx! {
        div { class: "page",
            h2 { "Employees" }

            form { class: "record-form", onsubmit: on_submit,
                input {
                    placeholder: "Employee ID",
                    value: "{employee_id}",
                    oninput: move |e| employee_id.set(e.value()),
                }
                input {
                    placeholder: "Full name",
                    value: "{name}",
                    oninput: move |e| name.set(e.value()),
                }
                input {
                    r#type: "email",
                    placeholder: "Email",
                    value: "{email}",
                    oninput: move |e| email.set(e.value()),
                }
                input {
                    placeholder: "Department",
                    value: "{department}",
                    oninput: move |e| department.set(e.value()),
                }
                button { r#type: "submit", "Add employee" }
            }
            if let Some(message) = form_error.read().as_ref() {
                p { class: "error", "{message}" }
            }

            match &*employees.read() {
                Some(Ok(list)) if list.is_empty() => rsx! {
                    p { class: "empty", "No employees yet." }
                },
                Some(Ok(list)) => rsx! {
                    table { class: "record-table",
                        thead {
                            tr {
                                th { "ID" }
                                th { "Name" }
                                th { "Email" }
                                th { "Department" }
                                th {}
                            }
                        }
                        tbody {
                            for employee in list.iter() {
                                tr { key: "{employee.id}",
                                    td { "{employee.employee_id}" }
                                    td { "{employee.name}" }
                                    td { "{employee.email}" }
                                    td { "{employee.department}" }
                                    td {
                                        button {
                                            class: "delete",
                                            onclick: {
                                                let api = api.clone();
                                                let id = employee.id;
                                                move |_| {
                                                    let api = api.clone();
                                                    spawn(async move {
                                                        match api.delete_employee(id).await {
                                                            Ok(()) => employees.restart(),
                                                            Err(err) => form_error.set(Some(
                                                                format!("Could not delete employee: {err}"),
                                                            )),
                                                        }
                                                    });
                                                }
                                            },
                                            "Delete"
                                        }
                                    }
                                }
                            }
                        }
                    }
                },
                Some(Err(err)) => rsx! {
                    p { class: "error", "Failed to load employees: {err}" }
                },
                None => rsx! {
                    p { class: "loading", "Loading…" }
                },
            }
        }
    }
}
