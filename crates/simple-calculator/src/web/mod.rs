//! Web shell: a server-rendered postback page
//!
//! `GET /` shows the visitor's calculator, `POST /` with `button=<label>`
//! applies one press and renders the page again. State lives on the server,
//! keyed by the `calc_session` cookie, and is dropped after an idle TTL.

mod config;
mod page;
mod server;
mod session;

pub use config::{
    WebConfig, WebConfigBuilder, DEFAULT_HOST, DEFAULT_MAX_SESSIONS, DEFAULT_PORT,
    DEFAULT_SESSION_TTL,
};
pub use page::{escape_html, extract_display, render_page, PageView, PAGE_TITLE};
pub use server::{router, serve, serve_with_shutdown, AppState, PressForm, RenderedPage};
pub use session::{Session, SessionId, SessionStore, SESSION_COOKIE};

use crate::core::{CalcResult, ERROR_DISPLAY};
use crate::driver::CalculatorDriver;

/// Headless visitor: posts labels and reads the display from rendered pages
#[derive(Debug, Clone)]
pub struct WebDriver {
    state: AppState,
    session: Option<SessionId>,
    html: String,
    last_error: Option<String>,
}

impl Default for WebDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl WebDriver {
    /// Opens the page as a first-time visitor
    #[must_use]
    pub fn new() -> Self {
        Self::with_state(AppState::default())
    }

    /// Opens the page against existing server state
    #[must_use]
    pub fn with_state(state: AppState) -> Self {
        let page = RenderedPage::show(&state, None);
        Self {
            session: Some(page.session.id),
            html: page.html,
            state,
            last_error: None,
        }
    }

    /// Returns the visitor's session id
    #[must_use]
    pub fn session(&self) -> Option<SessionId> {
        self.session
    }

    /// Returns the last rendered page
    #[must_use]
    pub fn html(&self) -> &str {
        &self.html
    }

    /// Reloads the page without pressing anything
    pub fn reload(&mut self) {
        let page = RenderedPage::show(&self.state, self.session);
        self.session = Some(page.session.id);
        self.html = page.html;
        self.last_error = None;
    }
}

impl CalculatorDriver for WebDriver {
    fn press(&mut self, label: &str) -> CalcResult<()> {
        let page = RenderedPage::press(&self.state, self.session, label)?;
        self.session = Some(page.session.id);
        self.html = page.html;
        self.last_error = page.error.as_ref().map(|e| e.user_message());
        page.error.map_or(Ok(()), Err)
    }

    fn display(&self) -> String {
        extract_display(&self.html).unwrap_or_else(|| ERROR_DISPLAY.to_string())
    }

    fn last_error(&self) -> Option<String> {
        self.last_error.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver;

    #[test]
    fn test_web_driver_first_visit() {
        let driver = WebDriver::new();
        assert_eq!(driver.display(), "0");
        assert!(driver.session().is_some());
        assert!(driver.html().contains(PAGE_TITLE));
    }

    #[test]
    fn test_web_driver_error_alert() {
        let mut driver = WebDriver::new();
        let _ = driver.press_sequence(&["7", "÷", "0", "="]);
        assert!(driver.html().contains("alert("));
        driver.reload();
        assert_eq!(driver.display(), "0");
        assert!(!driver.html().contains("alert("));
    }

    #[test]
    fn test_web_drivers_share_server_not_session() {
        let state = AppState::default();
        let mut a = WebDriver::with_state(state.clone());
        let mut b = WebDriver::with_state(state.clone());
        a.press("1").unwrap();
        b.press("2").unwrap();
        assert_eq!(a.display(), "1");
        assert_eq!(b.display(), "2");
        assert_eq!(state.sessions().len(), 2);
    }

    #[test]
    fn test_unified_basic_arithmetic() {
        driver::verify_basic_arithmetic(&mut WebDriver::new());
    }

    #[test]
    fn test_unified_chaining() {
        driver::verify_chaining(&mut WebDriver::new());
    }

    #[test]
    fn test_unified_unary_keys() {
        driver::verify_unary_keys(&mut WebDriver::new());
    }

    #[test]
    fn test_unified_error_handling() {
        driver::verify_error_handling(&mut WebDriver::new());
    }

    #[test]
    fn test_unified_unknown_button() {
        driver::verify_unknown_button(&mut WebDriver::new());
    }

    #[test]
    fn test_all_scenarios() {
        driver::run_all_scenarios(&mut WebDriver::new());
    }
}
