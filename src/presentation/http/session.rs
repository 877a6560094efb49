// src/presentation/http/session.rs
//! Cookie-keyed server-side sessions.
//!
//! The middleware resolves the signed `quire.sid` cookie into a [`Session`]
//! handle before the handler runs and writes the record back afterwards, but
//! only when the handler changed it.

use crate::{
    application::{
        dto::{FlashKind, FlashMessage, SessionRecord},
        ports::session_store::SessionStore,
    },
    domain::user::UserId,
    infrastructure::security::cookie_signer::CookieSigner,
    presentation::http::{
        error::{HttpError, INTERNAL_SERVER_ERROR},
        state::HttpState,
    },
};
use axum::{
    Extension,
    extract::{FromRequestParts, Request},
    http::{HeaderMap, HeaderValue, header::SET_COOKIE, request::Parts},
    middleware::Next,
    response::Response,
};
use headers::{Cookie, HeaderMapExt};
use std::{
    mem,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
    time::Duration,
};
use uuid::Uuid;

pub const SESSION_COOKIE: &str = "quire.sid";

#[derive(Clone, Debug)]
pub struct SessionSettings {
    signer: Arc<CookieSigner>,
    ttl: Duration,
    secure: bool,
}

impl SessionSettings {
    pub fn new(signer: CookieSigner, ttl: Duration, secure: bool) -> Self {
        Self {
            signer: Arc::new(signer),
            ttl,
            secure,
        }
    }

    fn cookie(&self, value: &str, max_age: u64) -> Option<HeaderValue> {
        let secure = if self.secure { "; Secure" } else { "" };
        let cookie = format!(
            "{SESSION_COOKIE}={value}; Path=/; Max-Age={max_age}; HttpOnly; SameSite=Lax{secure}"
        );
        HeaderValue::from_str(&cookie)
            .inspect_err(|err| tracing::error!(error = %err, "unencodable session cookie"))
            .ok()
    }

    fn session_id_from(&self, headers: &HeaderMap) -> Option<String> {
        let cookies = headers.typed_get::<Cookie>()?;
        let signed = cookies.get(SESSION_COOKIE)?;
        match self.signer.verify(signed) {
            Some(id) => Some(id.to_string()),
            None => {
                tracing::warn!("ignoring session cookie with a bad signature");
                None
            }
        }
    }
}

#[derive(Debug, Default)]
struct SessionState {
    id: Option<String>,
    record: SessionRecord,
    modified: bool,
    /// Id given up by a login; its record is destroyed on write-back.
    retired: Option<String>,
}

/// Handle on the current request's session. Clones share the same state.
#[derive(Clone, Debug, Default)]
pub struct Session {
    inner: Arc<Mutex<SessionState>>,
}

impl Session {
    fn restore(id: String, record: SessionRecord) -> Self {
        Self {
            inner: Arc::new(Mutex::new(SessionState {
                id: Some(id),
                record,
                ..SessionState::default()
            })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, SessionState> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn user_id(&self) -> Option<i64> {
        self.lock().record.user_id
    }

    /// Bind `user_id` to the session under a fresh id.
    pub fn log_in(&self, user_id: UserId) {
        let mut state = self.lock();
        state.retired = state.id.take();
        state.record.user_id = Some(user_id.into());
        state.modified = true;
    }

    pub fn log_out(&self) {
        let mut state = self.lock();
        state.record.user_id = None;
        state.modified = true;
    }

    pub fn flash(&self, kind: FlashKind, message: impl Into<String>) {
        let mut state = self.lock();
        state.record.flash.push(FlashMessage::new(kind, message));
        state.modified = true;
    }

    /// Remove and return pending flash messages.
    pub fn take_flash(&self) -> Vec<FlashMessage> {
        let mut state = self.lock();
        if state.record.flash.is_empty() {
            return Vec::new();
        }
        state.modified = true;
        mem::take(&mut state.record.flash)
    }

    fn into_state(self) -> SessionState {
        let mut state = self.lock();
        mem::take(&mut *state)
    }
}

impl<S> FromRequestParts<S> for Session
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts.extensions.get::<Session>().cloned().ok_or_else(|| {
            HttpError::internal("session middleware not installed", INTERNAL_SERVER_ERROR)
        })
    }
}

pub async fn session_middleware(
    Extension(state): Extension<HttpState>,
    mut request: Request,
    next: Next,
) -> Response {
    let settings = &state.sessions;
    let store = state.services.session_store();

    let session = load(settings, store.as_ref(), request.headers()).await;
    request.extensions_mut().insert(session.clone());

    let mut response = next.run(request).await;

    if let Some(cookie) = write_back(settings, store.as_ref(), session).await {
        response.headers_mut().append(SET_COOKIE, cookie);
    }
    response
}

async fn load(
    settings: &SessionSettings,
    store: &dyn SessionStore,
    headers: &HeaderMap,
) -> Session {
    let Some(id) = settings.session_id_from(headers) else {
        return Session::default();
    };

    match store.load(&id).await {
        Ok(Some(record)) => Session::restore(id, record),
        Ok(None) => Session::default(),
        Err(err) => {
            tracing::error!(error = %err, "failed to load session");
            Session::default()
        }
    }
}

async fn write_back(
    settings: &SessionSettings,
    store: &dyn SessionStore,
    session: Session,
) -> Option<HeaderValue> {
    let SessionState {
        id,
        record,
        modified,
        retired,
    } = session.into_state();

    if let Some(old_id) = retired {
        if let Err(err) = store.destroy(&old_id).await {
            tracing::error!(error = %err, "failed to destroy retired session");
        }
    }

    if !modified {
        return None;
    }

    if record.is_empty() {
        let id = id?;
        if let Err(err) = store.destroy(&id).await {
            tracing::error!(error = %err, "failed to destroy empty session");
        }
        return settings.cookie("", 0);
    }

    let id = id.unwrap_or_else(|| Uuid::new_v4().to_string());
    if let Err(err) = store.save(&id, &record, settings.ttl).await {
        tracing::error!(error = %err, "failed to save session");
        return None;
    }

    settings.cookie(&settings.signer.sign(&id), settings.ttl.as_secs())
}
