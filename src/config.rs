//! Application Configuration
//!
//! Backend location and page sizes, resolved at build time.

/// Backend used when `API_URL` is not set at build time
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";

/// Items per page on the inventory screen
pub const DEFAULT_ITEM_PAGE_LIMIT: u32 = 5;

/// Users per page on the user screen
pub const DEFAULT_USER_PAGE_LIMIT: u32 = 10;

/// Runtime configuration provided via context
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    /// Base URL of the REST backend, without trailing slash
    pub api_base_url: String,
    pub item_page_limit: u32,
    pub user_page_limit: u32,
}

impl AppConfig {
    /// Build config from the `API_URL` captured at compile time
    pub fn from_build_env() -> Self {
        Self::with_base_url(option_env!("API_URL").unwrap_or(DEFAULT_API_BASE_URL))
    }

    pub fn with_base_url(base_url: &str) -> Self {
        let trimmed = base_url.trim().trim_end_matches('/');
        let api_base_url = if trimmed.is_empty() {
            DEFAULT_API_BASE_URL.to_string()
        } else {
            trimmed.to_string()
        };
        Self {
            api_base_url,
            item_page_limit: DEFAULT_ITEM_PAGE_LIMIT,
            user_page_limit: DEFAULT_USER_PAGE_LIMIT,
        }
    }

    /// Absolute URL for an `/api/...` path
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_base_url, path)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::with_base_url(DEFAULT_API_BASE_URL)
    }
}
