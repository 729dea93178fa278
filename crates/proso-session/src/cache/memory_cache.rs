use crate::{CachedSession, ClientCache, SessionResult};

use std::sync::{Mutex, PoisonError};

/// In-process cache, gone when the process exits
#[derive(Debug, Default)]
pub struct MemoryCache {
    session: Mutex<CachedSession>,
}

impl MemoryCache {
    pub fn new(session: CachedSession) -> Self {
        Self {
            session: Mutex::new(session),
        }
    }
}

impl ClientCache for MemoryCache {
    fn load(&self) -> CachedSession {
        self.session
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn store(&self, session: &CachedSession) -> SessionResult<()> {
        *self.session.lock().unwrap_or_else(PoisonError::into_inner) = session.clone();
        Ok(())
    }
}
