use crate::{
    CSRF_COOKIE, CachedSession, ClientCache, ProfileBackend, SESSION_COOKIE, SessionError,
    SessionOptions, SessionResult, UserEvent,
};

use std::sync::{Arc, Mutex, PoisonError};

use log::{debug, info, warn};
use proso_core::{
    Credentials, GenericError, LevelInfo, ProfilePatch, RegistrationForm, SaveError, UserProfile,
};
use tokio::sync::{broadcast, watch};
use tokio::task::JoinHandle;

/// Single source of truth for the current user's profile.
///
/// Cloning is cheap and every clone shares the same live profile, so the
/// store can be handed to each widget that needs it. Holders of a
/// [`watch::Receiver`] from [`SessionStore::watch`] always observe the
/// latest profile; discrete changes are also published as [`UserEvent`]s.
///
/// Background work uses `tokio::spawn`, so the store must be used from
/// within a Tokio runtime. Cache writes run on the blocking pool, one at a
/// time.
pub struct SessionStore {
    inner: Arc<StoreInner>,
}

struct StoreInner {
    backend: Arc<dyn ProfileBackend>,
    cache: Arc<dyn ClientCache>,
    options: SessionOptions,
    profile: watch::Sender<UserProfile>,
    events: broadcast::Sender<UserEvent>,
    pending_fetch: Mutex<Option<JoinHandle<()>>>,
    pending_writes: Mutex<Vec<JoinHandle<SessionResult<()>>>>,
    cache_lock: Mutex<()>,
}

impl SessionStore {
    pub fn new(
        backend: Arc<dyn ProfileBackend>,
        cache: Arc<dyn ClientCache>,
        options: SessionOptions,
    ) -> Self {
        let (profile, _) = watch::channel(UserProfile::anonymous());
        let (events, _) = broadcast::channel(options.event_capacity.max(1));

        let store = Self {
            inner: Arc::new(StoreInner {
                backend,
                cache,
                options,
                profile,
                events,
                pending_fetch: Mutex::new(None),
                pending_writes: Mutex::new(Vec::new()),
                cache_lock: Mutex::new(()),
            }),
        };
        store.restore_cookies();
        store
    }

    /// Hand the session cookies cached by an earlier process back to the
    /// backend, so the server recognises the session again.
    fn restore_cookies(&self) {
        let cached = self.inner.cache.load();
        if let Some(ref session) = cached.session_cookie {
            self.inner.backend.restore_cookie(SESSION_COOKIE, session);
            debug!("Restored cached session cookie");
        }
        if let Some(ref token) = cached.csrftoken {
            self.inner.backend.restore_cookie(CSRF_COOKIE, token);
        }
    }

    pub fn options(&self) -> &SessionOptions {
        &self.inner.options
    }

    /// Merge `seed` into the profile and start fetching the authoritative
    /// one in the background.
    ///
    /// The returned receiver is live: it sees the fetched profile once it
    /// arrives. A failed fetch leaves the seeded profile in place and is
    /// only logged.
    pub fn init(&self, seed: ProfilePatch) -> watch::Receiver<UserProfile> {
        self.inner.profile.send_modify(|profile| profile.merge(seed));
        self.schedule_login_check();

        let store = self.clone();
        let handle = tokio::spawn(async move { store.refresh().await });
        *self
            .inner
            .pending_fetch
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some(handle);

        self.inner.profile.subscribe()
    }

    /// Wait for the most recent background fetch started by `init` and for
    /// every cache write still in flight.
    pub async fn settled(&self) {
        let handle = self
            .inner
            .pending_fetch
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();

        if let Some(handle) = handle
            && let Err(e) = handle.await
        {
            warn!("Background profile fetch task failed: {e}");
        }

        let writes = std::mem::take(
            &mut *self
                .inner
                .pending_writes
                .lock()
                .unwrap_or_else(PoisonError::into_inner),
        );
        for write in writes {
            if let Err(e) = Self::join_cache_write(write).await {
                debug!("Pending cache write ended with: {e}");
            }
        }
    }

    /// Read-modify-write the cache on the blocking pool.
    ///
    /// Writes are serialized, and `apply` sees the store as it is when the
    /// write runs, so the last write always reflects the latest profile.
    fn spawn_cache_update<F>(&self, apply: F) -> JoinHandle<SessionResult<()>>
    where
        F: Fn(&StoreInner, &mut CachedSession) + Send + 'static,
    {
        let inner = Arc::clone(&self.inner);
        tokio::task::spawn_blocking(move || {
            let inner = &*inner;
            let _serial = inner
                .cache_lock
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            let result = inner
                .cache
                .update(&mut |cached: &mut CachedSession| apply(inner, cached));
            if let Err(ref e) = result {
                warn!("Failed to update session cache: {e}");
            }
            result
        })
    }

    /// Keep a cache write for `settled` to wait on
    fn track_cache_write(&self, write: JoinHandle<SessionResult<()>>) {
        let mut pending = self
            .inner
            .pending_writes
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        pending.retain(|handle| !handle.is_finished());
        pending.push(write);
    }

    async fn join_cache_write(write: JoinHandle<SessionResult<()>>) -> SessionResult<()> {
        write.await.map_err(SessionError::from_join)?
    }

    async fn refresh(&self) {
        match self.inner.backend.fetch_own_profile().await {
            Ok(patch) => {
                self.inner.profile.send_modify(|profile| profile.merge(patch));
                debug!("Profile refreshed from backend");
            }
            Err(e) => warn!("Background profile fetch failed: {e}"),
        }
    }

    fn schedule_login_check(&self) {
        if !self.inner.options.require_login {
            return;
        }

        let store = self.clone();
        let delay = self.inner.options.deferred_check;
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let profile = store.current();
            if profile.is_anonymous() {
                info!("Login required for anonymous session");
                store.publish(UserEvent::LoginRequired(profile));
            }
        });
    }

    /// Snapshot of the live profile
    pub fn current(&self) -> UserProfile {
        self.inner.profile.borrow().clone()
    }

    /// Live view of the profile
    pub fn watch(&self) -> watch::Receiver<UserProfile> {
        self.inner.profile.subscribe()
    }

    /// Receive every [`UserEvent`] published from now on
    pub fn subscribe(&self) -> broadcast::Receiver<UserEvent> {
        self.inner.events.subscribe()
    }

    fn publish(&self, event: UserEvent) {
        match self.inner.events.send(event) {
            Ok(receivers) => debug!("User event delivered to {receivers} subscribers"),
            Err(_) => debug!("User event had no subscribers"),
        }
    }

    /// Look a profile up by username.
    ///
    /// The current user's own name resolves to the live profile without a
    /// network round trip.
    pub async fn fetch_by_name(&self, name: &str) -> SessionResult<UserProfile> {
        {
            let live = self.inner.profile.borrow();
            if live.username == name {
                return Ok(live.clone());
            }
        }

        let patch = self.inner.backend.fetch_profile(name).await?;
        let mut profile = UserProfile::anonymous();
        profile.merge(patch);
        Ok(profile)
    }

    /// Persist `profile`; the backend's answer is merged into the live one.
    pub async fn save(&self, profile: &UserProfile) -> Result<UserProfile, SaveError> {
        let csrf_token = self.csrf_token();
        match self
            .inner
            .backend
            .save_profile(profile, csrf_token.as_deref())
            .await
        {
            Ok(patch) => {
                self.inner.profile.send_modify(|live| live.merge(patch));
                info!("Profile saved");
                Ok(self.current())
            }
            Err(e) => {
                warn!("Profile save failed: {e}");
                Err(self.save_error(&e))
            }
        }
    }

    pub async fn login(&self, credentials: &Credentials) -> Result<UserProfile, GenericError> {
        let csrf_token = self.csrf_token();
        let result = self
            .inner
            .backend
            .login(credentials, csrf_token.as_deref())
            .await;
        self.apply_identity_change("Login", result).await
    }

    pub async fn signup(&self, form: &RegistrationForm) -> Result<UserProfile, GenericError> {
        let csrf_token = self.csrf_token();
        let result = self
            .inner
            .backend
            .signup(form, csrf_token.as_deref())
            .await;
        self.apply_identity_change("Signup", result).await
    }

    async fn apply_identity_change(
        &self,
        action: &str,
        result: SessionResult<ProfilePatch>,
    ) -> Result<UserProfile, GenericError> {
        match result {
            Ok(patch) => {
                self.inner.profile.send_modify(|live| live.merge(patch));
                let profile = self.current();
                info!("{action} succeeded for {}", profile.username);
                self.persist_cookies().await;
                self.publish(UserEvent::Updated(profile.clone()));
                Ok(profile)
            }
            Err(e) => {
                warn!("{action} failed: {e}");
                Err(self.generic_error(&e))
            }
        }
    }

    /// Cache the cookies the backend just set so later processes resume
    /// the same session.
    async fn persist_cookies(&self) {
        let session = self.inner.backend.cookie(SESSION_COOKIE);
        let csrftoken = self.inner.backend.cookie(CSRF_COOKIE);
        if session.is_none() && csrftoken.is_none() {
            return;
        }

        let write = self.spawn_cache_update(move |_, cached| {
            if session.is_some() {
                cached.session_cookie = session.clone();
            }
            if csrftoken.is_some() {
                cached.csrftoken = csrftoken.clone();
            }
        });
        if let Err(e) = Self::join_cache_write(write).await {
            debug!("Session cookies not cached: {e}");
        }
    }

    /// Reset to an anonymous session.
    ///
    /// Subscribers are notified before this returns; the remote logout is
    /// fire-and-forget and its handle is returned for callers that want
    /// the acknowledgement.
    pub fn logout(&self) -> JoinHandle<SessionResult<()>> {
        self.inner.profile.send_replace(UserProfile::anonymous());
        self.publish(UserEvent::Updated(self.current()));
        info!("Logged out");

        let forget = self.spawn_cache_update(|inner, cached| {
            // A login that raced ahead of this write keeps its cookies
            if inner.profile.borrow().is_anonymous() {
                cached.session_cookie = None;
                cached.csrftoken = None;
            }
        });
        self.track_cache_write(forget);

        let backend = Arc::clone(&self.inner.backend);
        let remote = tokio::spawn(async move {
            let result = backend.logout().await;
            if let Err(ref e) = result {
                warn!("Remote logout failed: {e}");
            }
            result
        });

        self.init(ProfilePatch::default());
        remote
    }

    /// Optimistically count an answer ahead of the server.
    pub fn record_answer(&self, is_correct: bool) {
        self.inner
            .profile
            .send_modify(|profile| profile.record_answer(is_correct));
        let profile = self.current();

        let write = self.spawn_cache_update(|inner, cached| {
            cached.points = Some(inner.profile.borrow().points);
        });
        self.track_cache_write(write);

        self.publish(UserEvent::Updated(profile));
    }

    pub fn level_info(profile: &UserProfile) -> LevelInfo {
        profile.level_info()
    }

    /// Token for mutating requests: the profile's own, then the backend's
    /// cookie, then one cached from an earlier session.
    pub fn csrf_token(&self) -> Option<String> {
        if let Some(token) = self.inner.profile.borrow().csrftoken.clone() {
            return Some(token);
        }
        self.inner
            .backend
            .cookie(CSRF_COOKIE)
            .or_else(|| self.inner.cache.load().csrftoken)
    }

    /// Bootstrap a mobile session when a mobile domain is configured and
    /// no CSRF token is known yet.
    ///
    /// Returns `Ok(false)` when there was nothing to do.
    pub async fn init_mobile(&self) -> SessionResult<bool> {
        let Some(domain) = self.inner.options.mobile_domain.clone() else {
            return Ok(false);
        };
        if self.inner.profile.borrow().csrftoken.is_some() {
            return Ok(false);
        }

        let credentials = self.inner.cache.load().credentials();
        let init = self
            .inner
            .backend
            .init_mobile(&domain, credentials.as_ref())
            .await?;

        self.init(ProfilePatch {
            username: Some(init.username.clone()),
            csrftoken: Some(init.csrftoken.clone()),
            ..Default::default()
        });

        let csrftoken = init.csrftoken;
        let generated = init.password.map(|password| (init.username, password));
        let write = self.spawn_cache_update(move |_, cached| {
            cached.csrftoken = Some(csrftoken.clone());
            if let Some((ref username, ref password)) = generated {
                cached.username = Some(username.clone());
                cached.password = Some(password.clone());
            }
        });
        Self::join_cache_write(write).await?;

        info!("Mobile session initialized");
        Ok(true)
    }

    fn generic_error(&self, err: &SessionError) -> GenericError {
        let options = &self.inner.options;
        GenericError::from_response_body(
            err.rejection_body().unwrap_or(&serde_json::Value::Null),
            &options.default_alert_type,
            &options.generic_error,
        )
    }

    fn save_error(&self, err: &SessionError) -> SaveError {
        let options = &self.inner.options;
        SaveError::from_response_body(
            err.rejection_body().unwrap_or(&serde_json::Value::Null),
            &options.default_alert_type,
            &options.generic_error,
        )
    }
}

impl Clone for SessionStore {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}
