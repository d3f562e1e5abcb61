//! UI Components
//!
//! Screens and reusable Leptos components.

mod delete_confirm_button;
mod home;
mod item_management;
mod login;
mod logout;
mod navigation;
mod pagination_bar;
mod profile;
mod require_auth;
mod screen_handle;
mod user_management;

pub use delete_confirm_button::DeleteConfirmButton;
pub use home::{Home, TestApi};
pub use item_management::ItemManagement;
pub use login::Login;
pub use logout::Logout;
pub use navigation::Navigation;
pub use pagination_bar::PaginationBar;
pub use profile::Profile;
pub use require_auth::RequireAuth;
pub use screen_handle::{use_screen, ScreenHandle};
pub use user_management::UserManagement;

/// CSS class for a status badge, e.g. `status-badge out_of_stock`
pub fn status_class(status: &str) -> String {
    format!("status-badge {}", status.to_lowercase())
}
