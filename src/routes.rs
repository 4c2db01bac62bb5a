//! Static navigation table and active-link derivation.
//!
//! The sidebar is data-driven: adding a view means adding a `NavRoute` entry
//! here (plus its variant in [`crate::Route`]), not editing the shell.

use crate::Route;

/// One sidebar entry: a path bound to a label, an icon and a router target.
pub struct NavRoute {
    pub path: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub target: Route,
}

/// Ordered navigation table. Paths are unique.
pub const NAV_ROUTES: &[NavRoute] = &[
    NavRoute {
        path: "/",
        label: "Employees",
        icon: "👥",
        target: Route::EmployeesPage {},
    },
    NavRoute {
        path: "/attendance",
        label: "Attendance",
        icon: "🗓",
        target: Route::AttendancePage {},
    },
];

/// Returns the table entry whose path equals `current_path`, if any.
///
/// Exact string equality only: `/attendance/today` does not activate
/// `/attendance`. Since paths are unique, at most one entry matches.
pub fn active_route<'a>(current_path: &str, table: &'a [NavRoute]) -> Option<&'a NavRoute> {
    table.iter().find(|route| route.path == current_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_registered_path_activates_its_own_entry() {
        for route in NAV_ROUTES {
            let active = active_route(route.path, NAV_ROUTES)
                .unwrap_or_else(|| panic!("no active entry for {}", route.path));
            assert_eq!(active.path, route.path);

            let matching = NAV_ROUTES
                .iter()
                .filter(|r| r.path == route.path)
                .count();
            assert_eq!(matching, 1, "duplicate path {} in table", route.path);
        }
    }

    #[test]
    fn unregistered_paths_activate_nothing() {
        assert!(active_route("/payroll", NAV_ROUTES).is_none());
        assert!(active_route("", NAV_ROUTES).is_none());
        assert!(active_route("/attendance/", NAV_ROUTES).is_none());
    }

    #[test]
    fn prefix_match_is_not_enough() {
        assert!(active_route("/attendance/1", NAV_ROUTES).is_none());
        assert!(active_route("/attendance/today", NAV_ROUTES).is_none());
    }

    #[test]
    fn root_path_maps_to_employees() {
        let active = active_route("/", NAV_ROUTES).expect("root should be registered");
        assert_eq!(active.label, "Employees");
    }
}
