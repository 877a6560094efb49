// tests/support/helpers.rs
use std::{path::PathBuf, sync::Arc, time::Duration};

use super::mocks::{
    FailingArticleRepo, FixedClock, InMemoryArticleRepo, InMemoryUserRepo, PlainPasswordHasher,
};
use axum::{
    Router,
    body::{self, Body},
    http::{
        HeaderMap, Method, Request, StatusCode,
        header::{CONTENT_TYPE, COOKIE, LOCATION, SET_COOKIE},
    },
};
use quire::{
    application::services::ApplicationServices,
    domain::article::{ArticleReadRepository, ArticleWriteRepository},
    infrastructure::security::{cookie_signer::CookieSigner, session_store::InMemorySessionStore},
    presentation::http::{
        routes::{build_router, build_router_with_rate_limiter},
        session::{SESSION_COOKIE, SessionSettings},
        state::HttpState,
    },
};
use tower::util::ServiceExt as _;

pub const TEST_SECRET: &[u8] = b"integration-test-secret-0123456789abcdef";

/// The real router wired to in-memory adapters that tests can inspect.
pub struct TestApp {
    pub router: Router,
    pub users: Arc<InMemoryUserRepo>,
    pub articles: Arc<InMemoryArticleRepo>,
    pub sessions: Arc<InMemorySessionStore>,
}

impl TestApp {
    pub fn new() -> Self {
        let articles = Arc::new(InMemoryArticleRepo::new());
        Self::assemble(articles.clone(), articles.clone(), articles, false)
    }

    /// Login and registration are throttled per client, as in production.
    pub fn with_rate_limit() -> Self {
        let articles = Arc::new(InMemoryArticleRepo::new());
        Self::assemble(articles.clone(), articles.clone(), articles, true)
    }

    /// Users and sessions work; every article read or write fails.
    pub fn with_failing_articles() -> Self {
        let failing = Arc::new(FailingArticleRepo);
        Self::assemble(
            failing.clone(),
            failing,
            Arc::new(InMemoryArticleRepo::new()),
            false,
        )
    }

    /// Article reads succeed against the returned app's store but writes fail.
    pub fn with_failing_article_writes() -> Self {
        let articles = Arc::new(InMemoryArticleRepo::new());
        Self::assemble(
            Arc::new(FailingArticleRepo),
            articles.clone(),
            articles,
            false,
        )
    }

    fn assemble(
        write: Arc<dyn ArticleWriteRepository>,
        read: Arc<dyn ArticleReadRepository>,
        articles: Arc<InMemoryArticleRepo>,
        throttled: bool,
    ) -> Self {
        let users = Arc::new(InMemoryUserRepo::new());
        let sessions = Arc::new(InMemorySessionStore::new());

        let services = Arc::new(ApplicationServices::new(
            users.clone(),
            write,
            read,
            Arc::new(PlainPasswordHasher),
            sessions.clone(),
            Arc::new(FixedClock),
        ));

        let state = HttpState {
            services,
            sessions: SessionSettings::new(
                CookieSigner::new(TEST_SECRET).unwrap(),
                Duration::from_secs(3600),
                false,
            ),
            public_dir: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("public"),
        };

        let router = if throttled {
            build_router(state)
        } else {
            build_router_with_rate_limiter(state, false)
        };

        Self {
            router,
            users,
            articles,
            sessions,
        }
    }

    pub fn browser(&self) -> Browser {
        Browser {
            router: self.router.clone(),
            cookie: None,
        }
    }
}

/// A response with its body already collected.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl TestResponse {
    pub fn location(&self) -> Option<&str> {
        self.headers.get(LOCATION).and_then(|v| v.to_str().ok())
    }

    pub fn is_redirect_to(&self, path: &str) -> bool {
        self.status.is_redirection() && self.location() == Some(path)
    }
}

/// Sends requests through the router while carrying the session cookie
/// between them.
pub struct Browser {
    router: Router,
    cookie: Option<String>,
}

impl Browser {
    pub fn cookie(&self) -> Option<&str> {
        self.cookie.as_deref()
    }

    pub fn set_cookie(&mut self, value: Option<String>) {
        self.cookie = value;
    }

    pub async fn send(&mut self, mut request: Request<Body>) -> TestResponse {
        if let Some(cookie) = &self.cookie {
            request.headers_mut().insert(
                COOKIE,
                format!("{SESSION_COOKIE}={cookie}").parse().unwrap(),
            );
        }

        let response = self.router.clone().oneshot(request).await.unwrap();
        let (parts, body_stream) = response.into_parts();

        if let Some(set_cookie) = parts.headers.get(SET_COOKIE) {
            let raw = set_cookie.to_str().unwrap();
            let pair = raw.split(';').next().unwrap();
            let value = pair
                .strip_prefix(&format!("{SESSION_COOKIE}="))
                .expect("unexpected cookie name");
            self.cookie = if raw.contains("Max-Age=0") {
                None
            } else {
                Some(value.to_string())
            };
        }

        let bytes = body::to_bytes(body_stream, 1024 * 1024).await.unwrap();
        TestResponse {
            status: parts.status,
            headers: parts.headers,
            body: String::from_utf8_lossy(&bytes).into_owned(),
        }
    }

    pub async fn get(&mut self, uri: &str) -> TestResponse {
        let request = Request::builder()
            .method(Method::GET)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        self.send(request).await
    }

    pub async fn post_form(&mut self, uri: &str, fields: &[(&str, &str)]) -> TestResponse {
        let encoded = serde_urlencoded::to_string(fields).unwrap();
        let request = Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(encoded))
            .unwrap();
        self.send(request).await
    }

    pub async fn delete(&mut self, uri: &str) -> TestResponse {
        let request = Request::builder()
            .method(Method::DELETE)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        self.send(request).await
    }

    pub async fn log_in(&mut self, username: &str, password: &str) -> TestResponse {
        let response = self
            .post_form(
                "/users/login",
                &[("username", username), ("password", password)],
            )
            .await;
        assert!(
            response.is_redirect_to("/"),
            "login as {username} failed: {response:?}"
        );
        response
    }

    /// Follow a redirect response with a GET, as a browser would.
    pub async fn follow(&mut self, response: &TestResponse) -> TestResponse {
        let location = response
            .location()
            .unwrap_or_else(|| panic!("not a redirect: {response:?}"))
            .to_string();
        self.get(&location).await
    }
}
