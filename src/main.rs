mod api;
mod components;
mod routes;

use components::attendance_page::AttendancePage;
use components::employees_page::EmployeesPage;
use components::nav_shell::NavShell;
use components::not_found_page::NotFound;

use dioxus::prelude::*;

#[derive(Routable, Clone, PartialEq)]
enum Route {
    #[layout(NavShell)]
    #[route("/")]
    EmployeesPage {},
    #[route("/attendance")]
    AttendancePage {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    tracing_subscriber::fmt::init();

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Single client, configured once at startup and shared by every view.
    use_context_provider(api::ApiClient::from_env);

    rsx! {
        document::Stylesheet { href: asset!("/assets/main.css") }
        Router::<Route> {}
    }
}
