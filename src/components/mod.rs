pub mod attendance_page;
pub mod employees_page;
pub mod nav_shell;
pub mod not_found_page;
