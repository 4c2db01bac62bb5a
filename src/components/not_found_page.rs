use dioxus::prelude::*;

use crate::Route;

/// Sentinel view for paths outside the route table. The original frontend
/// rendered a blank content region here; surfacing the miss keeps dead links
/// visible instead of silent.
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let attempted = format!("/{}", segments.join("/"));

    use_effect({
        let attempted = attempted.clone();
        move || {
            tracing::warn!(path = %attempted, "navigated to unregistered route");
        }
    });

    rsx! {
        div { class: "page not-found",
            h2 { "Page not found" }
            p { "No view is registered for " code { "{attempted}" } "." }
            Link { to: Route::EmployeesPage {}, class: "back-link", "Back to Employees" }
        }
    }
}
