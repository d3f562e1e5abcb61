//! Application Context
//!
//! Session and configuration provided via Leptos Context API.

use leptos::prelude::*;

use crate::api::{self, Gateway};
use crate::browser;
use crate::config::AppConfig;
use crate::session::Session;

/// Session store shared by the guard, navigation and auth screens
#[derive(Clone, Copy)]
pub struct SessionContext {
    session: RwSignal<Session>,
}

impl SessionContext {
    /// Anonymous unless this tab already holds a session
    pub fn restore() -> Self {
        let session = browser::load_session().unwrap_or_else(Session::anonymous);
        if session.is_logged_in {
            log::info!("[SESSION] Restored session from storage");
        }
        Self { session: RwSignal::new(session) }
    }

    /// Current session (tracked)
    pub fn current_user(&self) -> Session {
        self.session.get()
    }

    pub fn is_logged_in(&self) -> bool {
        self.session.with(|s| s.is_logged_in)
    }

    /// Returns whether the credentials were accepted
    pub async fn login(&self, gateway: &Gateway, email: &str, password: &str) -> bool {
        let result = api::login(gateway, email, password).await;
        if let Err(e) = &result {
            log::warn!("[SESSION] Login failed: {}", e);
        }
        let accepted = self
            .session
            .try_update(|s| s.apply_login(result))
            .unwrap_or(false);
        if accepted {
            log::info!("[SESSION] Logged in");
            self.session.with_untracked(browser::save_session);
        }
        accepted
    }

    /// Tell the backend, then drop local state regardless of the outcome
    pub async fn logout(&self, gateway: &Gateway) {
        if let Err(e) = api::logout(gateway).await {
            log::warn!("[SESSION] Logout request failed: {}", e);
        }
        self.end();
    }

    /// Local teardown; also used when the backend answers 401
    pub fn end(&self) {
        let _ = self.session.try_update(Session::end);
        browser::clear_session();
    }

    /// Gateway whose 401 handling ends this session
    pub fn gateway(&self, config: &AppConfig) -> Gateway {
        let this = *self;
        Gateway::new(config.api_base_url.clone(), move || this.end())
    }
}

pub fn use_session() -> SessionContext {
    expect_context::<SessionContext>()
}

pub fn use_config() -> AppConfig {
    expect_context::<AppConfig>()
}

/// Gateway stored for use inside event handlers
pub fn use_gateway() -> StoredValue<Gateway> {
    StoredValue::new(expect_context::<Gateway>())
}
