use dioxus::prelude::*;

use crate::routes::{active_route, NAV_ROUTES};
use crate::Route;

/// Persistent two-region layout: fixed top header, fixed-width sidebar built
/// from the navigation table, and a flexible content region holding the
/// router outlet. Link emphasis is recomputed from the current location on
/// every render; the shell itself keeps no state.
#[component]
pub fn NavShell() -> Element {
    let current_path = use_route::<Route>().to_string();
    let active_path = active_route(&current_path, NAV_ROUTES).map(|route| route.path);

    rsx! {
        div { class: "app-shell",
            header { class: "top-header",
                h1 { class: "brand", "HRMS" }
                span { class: "tagline", "Human Resource Management System" }
            }
            div { class: "body-row",
                aside { class: "sidebar",
                    nav {
                        for entry in NAV_ROUTES {
                            Link {
                                to: entry.target.clone(),
                                class: if active_path == Some(entry.path) {
                                    "nav-link active"
                                } else {
                                    "nav-link"
                                },
                                span { class: "nav-icon", "{entry.icon}" }
                                "{entry.label}"
                            }
                        }
                    }
                }
                main { class: "content",
                    Outlet::<Route> {}
                }
            }
        }
    }
}
