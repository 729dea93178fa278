use crate::{MobileInit, ProfileBackend, SessionError, SessionResult};

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use log::{debug, warn};
use proso_config::ApiConfig;
use proso_core::{Credentials, ProfilePatch, RegistrationForm, UserProfile};
use reqwest::cookie::{CookieStore, Jar};
use reqwest::{Client as ReqwestClient, Method, Url};
use serde_json::Value;

/// Header carrying the CSRF token on every mutating request
pub const CSRF_HEADER: &str = "X-CSRFToken";
/// Cookie holding the CSRF token
pub const CSRF_COOKIE: &str = "csrftoken";
/// Cookie identifying the server-side session
pub const SESSION_COOKIE: &str = "sessionid";

/// [`ProfileBackend`] speaking HTTP to the real server.
///
/// Keeps a cookie jar so the session cookie set by `login` is sent on
/// later requests.
pub struct HttpBackend {
    pub base_url: String,
    url: Url,
    client: ReqwestClient,
    cookies: Arc<Jar>,
}

impl HttpBackend {
    /// Create a new backend client
    ///
    /// # Arguments
    /// * `base_url` - Server URL (e.g., "http://127.0.0.1:8000")
    /// * `timeout` - Per-request timeout
    pub fn new(base_url: &str, timeout: Duration) -> SessionResult<Self> {
        let base_url = base_url.trim_end_matches('/').to_string();
        let url = Url::parse(&base_url)
            .map_err(|e| SessionError::invalid_url(&base_url, e.to_string()))?;

        let cookies = Arc::new(Jar::default());
        let client = ReqwestClient::builder()
            .tls_backend_rustls()
            .cookie_provider(Arc::clone(&cookies))
            .timeout(timeout)
            .build()?;

        Ok(Self {
            base_url,
            url,
            client,
            cookies,
        })
    }

    pub fn from_config(config: &ApiConfig) -> SessionResult<Self> {
        Self::new(&config.base_url, Duration::from_secs(config.timeout_secs))
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client.request(method, &url)
    }

    /// POST with the CSRF header attached when a token is known
    fn post(&self, path: &str, csrf_token: Option<&str>) -> reqwest::RequestBuilder {
        let req = self.request(Method::POST, path);
        match csrf_token {
            Some(token) => req.header(CSRF_HEADER, token),
            None => {
                debug!("POST {path} without a CSRF token");
                req
            }
        }
    }

    /// `{base}/user/profile/{name}/` with `name` encoded as one path segment
    pub(crate) fn profile_url(&self, name: &str) -> SessionResult<Url> {
        let mut url = self.url.clone();
        url.path_segments_mut()
            .map_err(|_| SessionError::invalid_url(&self.base_url, "cannot be a base URL"))?
            .pop_if_empty()
            .extend(["user", "profile", name, ""]);
        Ok(url)
    }

    /// Execute request; non-2xx statuses become [`SessionError::Rejected`]
    async fn execute(&self, req: reqwest::RequestBuilder) -> SessionResult<Value> {
        let response = req.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            // Error bodies are data for the caller; an unparseable one is just null
            let body = serde_json::from_str(&text).unwrap_or(Value::Null);
            return Err(SessionError::rejected(status.as_u16(), body));
        }

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&text)?)
    }

    async fn execute_profile(&self, req: reqwest::RequestBuilder) -> SessionResult<ProfilePatch> {
        let body = self.execute(req).await?;
        Ok(serde_json::from_value(unwrap_user(body))?)
    }
}

/// Strip the `{"user": {...}}` envelope some endpoints use
pub(crate) fn unwrap_user(body: Value) -> Value {
    match body {
        Value::Object(mut map) if map.get("user").is_some_and(Value::is_object) => {
            map.remove("user").unwrap_or(Value::Null)
        }
        other => other,
    }
}

/// Build the mobile bootstrap URL.
///
/// Cached credentials travel as query parameters, which the backend
/// requires; they are only attached when the domain uses https.
pub fn mobile_init_url(domain: &str, credentials: Option<&Credentials>) -> SessionResult<Url> {
    let raw = format!("{}/user/initmobile", domain.trim_end_matches('/'));
    let mut url = Url::parse(&raw).map_err(|e| SessionError::invalid_url(&raw, e.to_string()))?;

    if let Some(credentials) = credentials {
        if url.scheme() == "https" {
            url.query_pairs_mut()
                .append_pair("username", &credentials.username)
                .append_pair("password", &credentials.password);
        } else {
            warn!("Not sending cached credentials to non-https domain {domain}");
        }
    }

    Ok(url)
}

#[async_trait]
impl ProfileBackend for HttpBackend {
    async fn fetch_own_profile(&self) -> SessionResult<ProfilePatch> {
        let req = self.request(Method::GET, "/user/profile");
        self.execute_profile(req).await
    }

    async fn fetch_profile(&self, name: &str) -> SessionResult<ProfilePatch> {
        let req = self.client.get(self.profile_url(name)?);
        self.execute_profile(req).await
    }

    async fn save_profile(
        &self,
        profile: &UserProfile,
        csrf_token: Option<&str>,
    ) -> SessionResult<ProfilePatch> {
        let req = self.post("/user/save/", csrf_token).json(profile);
        self.execute_profile(req).await
    }

    async fn signup(
        &self,
        form: &RegistrationForm,
        csrf_token: Option<&str>,
    ) -> SessionResult<ProfilePatch> {
        let req = self.post("/user/signup/", csrf_token).json(form);
        self.execute_profile(req).await
    }

    async fn login(
        &self,
        credentials: &Credentials,
        csrf_token: Option<&str>,
    ) -> SessionResult<ProfilePatch> {
        let req = self.post("/user/login/", csrf_token).json(credentials);
        self.execute_profile(req).await
    }

    async fn logout(&self) -> SessionResult<()> {
        // The acknowledgement body is opaque, only the status matters
        let response = self.request(Method::GET, "/user/logout/").send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SessionError::rejected(status.as_u16(), Value::Null));
        }
        Ok(())
    }

    async fn init_mobile(
        &self,
        domain: &str,
        credentials: Option<&Credentials>,
    ) -> SessionResult<MobileInit> {
        let url = mobile_init_url(domain, credentials)?;
        let body = self.execute(self.client.get(url)).await?;
        Ok(serde_json::from_value(body)?)
    }

    fn cookie(&self, name: &str) -> Option<String> {
        let header = self.cookies.cookies(&self.url)?;
        let header = header.to_str().ok()?;
        header.split(';').find_map(|pair| {
            let (key, value) = pair.trim().split_once('=')?;
            (key == name).then(|| value.to_string())
        })
    }

    fn restore_cookie(&self, name: &str, value: &str) {
        self.cookies
            .add_cookie_str(&format!("{name}={value}; Path=/"), &self.url);
    }
}
