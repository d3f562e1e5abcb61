//! Routes
//!
//! Route paths, the protected-route guard and navigation links.

use crate::session::Session;

pub const HOME: &str = "/";
pub const TEST_API: &str = "/test_api";
pub const LOGIN: &str = "/login";
pub const LOGOUT: &str = "/logout";
pub const PROFILE: &str = "/profile";
pub const ITEMS: &str = "/items";
pub const USERS: &str = "/users";

/// Outcome of guarding a protected view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Render,
    Redirect(&'static str),
}

/// Protected views render only for a logged-in session
pub fn guard(session: &Session) -> Access {
    if session.is_logged_in {
        Access::Render
    } else {
        Access::Redirect(LOGIN)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
    pub class: String,
}

/// Links shown in the navbar for this session and location
pub fn nav_links(session: &Session, current_path: &str) -> Vec<NavLink> {
    let entries: &[(&str, &str, &str)] = if session.is_logged_in {
        &[
            (ITEMS, "Inventory", ""),
            (USERS, "Users", ""),
            (PROFILE, "Profile", ""),
            (LOGOUT, "Logout", "logout-link"),
        ]
    } else {
        &[(LOGIN, "Login", "")]
    };

    entries
        .iter()
        .map(|&(href, label, base)| {
            let mut classes: Vec<&str> = Vec::new();
            if !base.is_empty() {
                classes.push(base);
            }
            if href == current_path && href != LOGOUT {
                classes.push("active");
            }
            NavLink { href, label, class: classes.join(" ") }
        })
        .collect()
}
