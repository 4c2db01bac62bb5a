use chrono::NaiveDate;
use dioxus::prelude::*;

use crate::api::{ApiClient, AttendanceRecord, AttendanceStatus, NewAttendance};

/// Daily attendance: mark a record for an employee and look up an employee's
/// history, optionally narrowed to a single date. Records render newest-first
/// as the backend returns them.
#[component]
pub fn AttendancePage() -> Element {
    let api = use_context::<ApiClient>();

    let mut mark_employee = use_signal(String::new);
    let mut mark_date = use_signal(String::new);
    let mut mark_status = use_signal(|| AttendanceStatus::Present);
    let mut mark_message = use_signal(|| None::<Result<String, String>>);

    let mut lookup_employee = use_signal(String::new);
    let mut lookup_date = use_signal(String::new);
    let mut lookup_result = use_signal(|| None::<Result<Vec<AttendanceRecord>, String>>);

    let mark_api = api.clone();
    let on_mark = move |event: FormEvent| {
        event.prevent_default();

        let employee_id = match mark_employee.read().trim().parse::<i64>() {
            Ok(id) => id,
            Err(_) => {
                mark_message.set(Some(Err("Employee ID must be a number".to_string())));
                return;
            }
        };
        let date = match NaiveDate::parse_from_str(mark_date.read().trim(), "%Y-%m-%d") {
            Ok(date) => date,
            Err(_) => {
                mark_message.set(Some(Err("Pick a date".to_string())));
                return;
            }
        };
        let record = NewAttendance {
            employee_id,
            date,
            status: *mark_status.read(),
        };

        let api = mark_api.clone();
        spawn(async move {
            match api.mark_attendance(&record).await {
                Ok(()) => {
                    tracing::info!(employee_id, %date, "attendance marked");
                    mark_message.set(Some(Ok(format!(
                        "Marked {} for employee {} on {}",
                        record.status, employee_id, date
                    ))));
                }
                Err(err) => {
                    mark_message.set(Some(Err(format!("Could not mark attendance: {err}"))))
                }
            }
        });
    };

    let lookup_api = api.clone();
    let on_lookup = move |event: FormEvent| {
        event.prevent_default();

        let employee_id = match lookup_employee.read().trim().parse::<i64>() {
            Ok(id) => id,
            Err(_) => {
                lookup_result.set(Some(Err("Employee ID must be a number".to_string())));
                return;
            }
        };
        // Empty filter means the full history.
        let on = NaiveDate::parse_from_str(lookup_date.read().trim(), "%Y-%m-%d").ok();

        let api = lookup_api.clone();
        spawn(async move {
            let outcome = api
                .employee_attendance(employee_id, on)
                .await
                .map_err(|err| format!("Could not load attendance: {err}"));
            lookup_result.set(Some(outcome));
        });
    };

    rsx! {
        div { class: "page",
            h2 { "Attendance" }

            section {
                h3 { "Mark attendance" }
                form { class: "record-form", onsubmit: on_mark,
                    input {
                        r#type: "number",
                        placeholder: "Employee ID",
                        value: "{mark_employee}",
                        oninput: move |e| mark_employee.set(e.value()),
                    }
                    input {
                        r#type: "date",
                        value: "{mark_date}",
                        oninput: move |e| mark_date.set(e.value()),
                    }
                    select {
                        value: "{mark_status}",
                        oninput: move |e| {
                            let status = if e.value() == "Absent" {
                                AttendanceStatus::Absent
                            } else {
                                AttendanceStatus::Present
                            };
                            mark_status.set(status);
                        },
                        option { value: "Present", "Present" }
                        option { value: "Absent", "Absent" }
                    }
                    button { r#type: "submit", "Mark" }
                }
                match &*mark_message.read() {
                    Some(Ok(message)) => rsx! { p { class: "success", "{message}" } },
                    Some(Err(message)) => rsx! { p { class: "error", "{message}" } },
                    None => rsx! {},
                }
            }

            section {
                h3 { "History" }
                form { class: "record-form", onsubmit: on_lookup,
                    input {
                        r#type: "number",
                        placeholder: "Employee ID",
                        value: "{lookup_employee}",
                        oninput: move |e| lookup_employee.set(e.value()),
                    }
                    input {
                        r#type: "date",
                        value: "{lookup_date}",
                        oninput: move |e| lookup_date.set(e.value()),
                    }
                    button { r#type: "submit", "Show" }
                }
                match &*lookup_result.read() {
                    Some(Ok(records)) if records.is_empty() => rsx! {
                        p { class: "empty", "No attendance records found." }
                    },
                    Some(Ok(records)) => rsx! {
                        table { class: "record-table",
                            thead {
                                tr {
                                    th { "Date" }
                                    th { "Status" }
                                }
                            }
                            tbody {
                                for record in records.iter() {
                                    tr { key: "{record.date}",
                                        td { "{record.date}" }
                                        td { class: "status-{record.status}", "{record.status}" }
                                    }
                                }
                            }
                        }
                    },
                    Some(Err(message)) => rsx! { p { class: "error", "{message}" } },
                    None => rsx! {},
                }
            }
        }
    }
}
