//! Application Context
//!
//! Shared state provided via Leptos Context API.

use std::rc::Rc;

use blog_core::api::{ApiError, BlogApi, LoginResponse};
use blog_core::debounce::timer_millis;
use blog_core::{AppConfig, Route, Session, SessionContext};
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::browser;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
}

/// App-wide signals and services provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current hash route - read
    pub route: ReadSignal<Route>,
    /// Current hash route - write
    set_route: WriteSignal<Route>,
    /// Active session, if logged in - read
    pub sessions: ReadSignal<SessionContext>,
    /// Active session - write
    set_sessions: WriteSignal<SessionContext>,
    /// Message shown in the toast slot - read
    pub toast: ReadSignal<Option<Toast>>,
    set_toast: WriteSignal<Option<Toast>>,
    config: StoredValue<AppConfig>,
    api: StoredValue<Rc<dyn BlogApi>, LocalStorage>,
    toast_timer: StoredValue<Option<Timeout>, LocalStorage>,
}

impl AppContext {
    pub fn new(config: AppConfig, api: Rc<dyn BlogApi>) -> Self {
        let (route, set_route) = signal(Route::parse(&browser::current_hash()));
        let (sessions, set_sessions) = signal(SessionContext::restored(browser::load_session()));
        let (toast, set_toast) = signal(None::<Toast>);
        Self {
            route,
            set_route,
            sessions,
            set_sessions,
            toast,
            set_toast,
            config: StoredValue::new(config),
            api: StoredValue::new_local(api),
            toast_timer: StoredValue::new_local(None),
        }
    }

    pub fn config(&self) -> AppConfig {
        self.config.get_value()
    }

    pub fn api(&self) -> Rc<dyn BlogApi> {
        self.api.get_value()
    }

    /// Current session (tracked)
    pub fn session(&self) -> Option<Session> {
        self.sessions.with(|s| s.current().cloned())
    }

    pub fn is_admin(&self) -> bool {
        self.sessions
            .with(|s| s.current().map(Session::is_admin).unwrap_or(false))
    }

    /// Session for an authenticated call, without tracking.
    pub fn require_session(&self) -> Result<Session, ApiError> {
        self.sessions.with_untracked(|s| s.require().cloned())
    }

    /// Navigate to a route; the hash listener keeps `route` in sync afterwards.
    pub fn navigate(&self, route: Route) {
        browser::set_hash(&route.path());
        self.set_route.set(route);
        browser::scroll_to_top();
    }

    /// Sync the route from a `hashchange` event.
    pub fn on_hash_change(&self, hash: &str) {
        let route = Route::parse(hash);
        if self.route.get_untracked() != route {
            self.set_route.set(route);
        }
    }

    /// Start and persist a session; returns it.
    pub fn login(&self, username: &str, response: LoginResponse) -> Session {
        let mut sessions = self.sessions.get_untracked();
        let session = sessions.begin(username, response).clone();
        self.set_sessions.set(sessions);
        browser::save_session(&session);
        session
    }

    pub fn logout(&self) {
        self.set_sessions.update(|ctx| {
            ctx.end();
        });
        browser::clear_session();
        self.navigate(Route::Login);
    }

    pub fn notify(&self, kind: ToastKind, message: impl Into<String>) {
        self.set_toast.set(Some(Toast {
            kind,
            message: message.into(),
        }));
        let set_toast = self.set_toast;
        let ms = self.config.with_value(|c| c.toast_ms);
        // Replacing the stored timer cancels the one for an earlier toast.
        let timer = Timeout::new(timer_millis(ms), move || set_toast.set(None));
        self.toast_timer.set_value(Some(timer));
    }

    pub fn dismiss_toast(&self) {
        self.toast_timer.set_value(None);
        self.set_toast.set(None);
    }

    /// Run `f` after the configured redirect delay.
    pub fn after_redirect_delay(&self, f: impl FnOnce() + 'static) {
        let ms = self.config.with_value(|c| c.redirect_delay_ms);
        let _ = Timeout::new(timer_millis(ms), f).forget();
    }
}

pub fn use_app() -> AppContext {
    expect_context::<AppContext>()
}
