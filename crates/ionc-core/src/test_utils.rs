//! Shared test utilities for the ionc crates.
//!
//! This module is only compiled in test builds (`#[cfg(test)]`).

use std::sync::{Mutex, MutexGuard, PoisonError};

/// Serializes every test that touches process environment variables.
static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Scoped change to one environment variable.
///
/// Holds [`ENV_LOCK`] for its lifetime and restores the previous value on
/// drop. Only one guard may be alive per test.
#[derive(Debug)]
pub struct EnvVarGuard {
    key: String,
    previous: Option<String>,
    _lock: MutexGuard<'static, ()>,
}

impl EnvVarGuard {
    /// Set `key` to `value` until the guard is dropped.
    pub fn set(key: &str, value: &str) -> Self {
        Self::change(key, Some(value))
    }

    /// Remove `key` until the guard is dropped.
    pub fn unset(key: &str) -> Self {
        Self::change(key, None)
    }

    fn change(key: &str, value: Option<&str>) -> Self {
        let lock = ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
        let previous = std::env::var(key).ok();
        // SAFETY: ENV_LOCK is held, so no other guarded test mutates the
        // environment concurrently.
        unsafe {
            match value {
                Some(v) => std::env::set_var(key, v),
                None => std::env::remove_var(key),
            }
        }
        Self {
            key: key.to_string(),
            previous,
            _lock: lock,
        }
    }
}

impl Drop for EnvVarGuard {
    fn drop(&mut self) {
        // SAFETY: the lock field is still held while drop runs.
        unsafe {
            match self.previous.take() {
                Some(v) => std::env::set_var(&self.key, v),
                None => std::env::remove_var(&self.key),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_restore_variable_on_drop() {
        let key = "IONC_TEST_UTILS_RESTORE";
        {
            let _guard = EnvVarGuard::set(key, "inner");
            assert_eq!(std::env::var(key).as_deref(), Ok("inner"));
        }
        assert!(std::env::var(key).is_err());
    }
}
