pub(crate) mod cached_session;
pub(crate) mod file_cache;
pub(crate) mod memory_cache;

use crate::{CachedSession, SessionResult};

/// Client-side persistence standing in for browser cookies and local
/// storage: last known points, session cookies and auto-login credentials.
///
/// The session store only calls `store`/`update` from the blocking pool;
/// `load` may run on any thread and should stay cheap.
pub trait ClientCache: Send + Sync {
    /// Current contents; a missing or unreadable cache is empty
    fn load(&self) -> CachedSession;

    fn store(&self, session: &CachedSession) -> SessionResult<()>;

    /// Read-modify-write helper
    fn update(&self, apply: &mut dyn FnMut(&mut CachedSession)) -> SessionResult<()> {
        let mut session = self.load();
        apply(&mut session);
        self.store(&session)
    }
}
