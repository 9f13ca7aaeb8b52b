//! HTTP routes for the calculator page

#![allow(clippy::unused_async)]
#![allow(clippy::missing_errors_doc)]

use std::future::Future;
use std::io;
use std::sync::Arc;

use axum::{
    extract::{Form, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use serde::Deserialize;
use tokio::net::TcpListener;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;
use tracing::{debug, info, warn};

use super::config::WebConfig;
use super::page::{render_page, PageView};
use super::session::{Session, SessionId, SessionStore};
use crate::core::{CalcError, Input};
use crate::keypad::Keypad;

/// Shared handler state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    sessions: SessionStore,
    keypad: Arc<Keypad>,
}

impl AppState {
    /// Creates state over an existing session store
    #[must_use]
    pub fn new(sessions: SessionStore) -> Self {
        Self {
            sessions,
            keypad: Arc::new(Keypad::new()),
        }
    }

    /// Returns the session store
    #[must_use]
    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }
}

/// Form posted by every keypad button
#[derive(Debug, Deserialize)]
pub struct PressForm {
    /// Label of the clicked button
    pub button: String,
}

/// A rendered page plus the session it belongs to
#[derive(Debug, Clone)]
pub struct RenderedPage {
    /// Visitor session
    pub session: Session,
    /// HTML body
    pub html: String,
    /// Error raised by the press, if any
    pub error: Option<CalcError>,
}

impl RenderedPage {
    /// Loads a visitor's session and renders it without pressing anything
    #[must_use]
    pub fn show(state: &AppState, session: Option<SessionId>) -> Self {
        let (session, calc) = state.sessions.load(session);
        let html = render_page(
            &state.keypad,
            PageView {
                display: calc.display(),
                alert: None,
            },
        );
        Self {
            session,
            html,
            error: None,
        }
    }

    /// Applies one button label to a visitor's session and renders the result
    ///
    /// Unknown labels are rejected before the session is touched.
    pub fn press(
        state: &AppState,
        session: Option<SessionId>,
        label: &str,
    ) -> Result<Self, CalcError> {
        let input =
            Input::from_label(label).ok_or_else(|| CalcError::UnknownButton(label.to_string()))?;
        let (session, transition) = state.sessions.press(session, input);

        let alert = transition.error.as_ref().map(CalcError::user_message);
        match &transition.error {
            Some(error) => warn!(session = %session.id, ?input, %error, "calculation failed"),
            None => debug!(session = %session.id, ?input, display = %transition.display, "press"),
        }

        let html = render_page(
            &state.keypad,
            PageView {
                display: &transition.display,
                alert: alert.as_deref(),
            },
        );
        Ok(Self {
            session,
            html,
            error: transition.error,
        })
    }
}

impl IntoResponse for RenderedPage {
    fn into_response(self) -> Response {
        let mut response = Html(self.html).into_response();
        if self.session.created {
            if let Ok(cookie) = HeaderValue::from_str(&self.session.id.cookie()) {
                response.headers_mut().insert(header::SET_COOKIE, cookie);
            }
        }
        response
    }
}

/// Builds the application router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index).post(press))
        .route("/health", get(health))
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn index(State(state): State<AppState>, headers: HeaderMap) -> RenderedPage {
    RenderedPage::show(&state, SessionId::from_headers(&headers))
}

async fn press(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<PressForm>,
) -> Response {
    match RenderedPage::press(&state, SessionId::from_headers(&headers), &form.button) {
        Ok(page) => page.into_response(),
        Err(error) => {
            warn!(button = %form.button, "rejected press");
            (StatusCode::BAD_REQUEST, error.to_string()).into_response()
        }
    }
}

async fn health() -> &'static str {
    "ok"
}

/// Serves the calculator until `shutdown` resolves
pub async fn serve_with_shutdown<F>(
    listener: TcpListener,
    state: AppState,
    shutdown: F,
) -> io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await
}

/// Binds the configured address and serves until Ctrl+C
pub async fn serve(config: &WebConfig) -> io::Result<()> {
    let listener = TcpListener::bind(config.bind_address()).await?;
    let addr = listener.local_addr()?;
    info!(
        %addr,
        session_ttl_secs = config.session_ttl.as_secs(),
        max_sessions = config.max_sessions,
        "web shell listening"
    );

    let sessions = SessionStore::with_limits(config.session_ttl, config.max_sessions);
    serve_with_shutdown(listener, AppState::new(sessions), shutdown_signal()).await?;

    info!("web shell stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(%err, "failed to listen for Ctrl+C");
    }
}
