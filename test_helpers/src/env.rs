//! Helpers for mutating environment variables in tests.
//!
//! Every mutation and every restoration happens while holding a global
//! re-entrant mutex. Guards restore the previous value on drop, removing the
//! variable if it was previously absent. Stacked guards for the same key
//! restore in LIFO order.
//!
//! # Examples
//!
//! ```
//! use outcome_test_helpers::env;
//!
//! let _g = env::set_var("REFERRAL_DESK_LOG_LEVEL", "debug");
//! assert_eq!(std::env::var("REFERRAL_DESK_LOG_LEVEL").as_deref(), Ok("debug"));
//! ```

use std::{
    env,
    ffi::{OsStr, OsString},
    fmt,
    sync::LazyLock,
};

use parking_lot::ReentrantMutex;

static ENV_MUTEX: LazyLock<ReentrantMutex<()>> = LazyLock::new(ReentrantMutex::default);

/// RAII guard restoring an environment variable to its prior value on drop.
#[must_use = "dropping restores the prior value"]
pub struct EnvVarGuard {
    key: String,
    original: Option<OsString>,
}

impl fmt::Debug for EnvVarGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnvVarGuard")
            .field("key", &self.key)
            .field("had_original", &self.original.is_some())
            .finish()
    }
}

/// Sets `key` to `value`, returning a guard that restores the prior state.
pub fn set_var<K, V>(key: K, value: V) -> EnvVarGuard
where
    K: Into<String>,
    V: AsRef<OsStr>,
{
    mutate(key.into(), |k| {
        // SAFETY: `mutate` holds `ENV_MUTEX`.
        unsafe { env::set_var(k, value.as_ref()) };
    })
}

/// Removes `key`, returning a guard that restores the prior state.
pub fn remove_var<K>(key: K) -> EnvVarGuard
where
    K: Into<String>,
{
    mutate(key.into(), |k| {
        // SAFETY: `mutate` holds `ENV_MUTEX`.
        unsafe { env::remove_var(k) };
    })
}

/// Runs `f` while holding the environment lock.
///
/// Use this when a test reads several variables that other tests may be
/// mutating concurrently.
pub fn with_lock<F, R>(f: F) -> R
where
    F: FnOnce() -> R,
{
    let _guard = ENV_MUTEX.lock();
    f()
}

fn mutate<F>(key: String, mutator: F) -> EnvVarGuard
where
    F: FnOnce(&str),
{
    let _guard = ENV_MUTEX.lock();
    let original = env::var_os(&key);
    mutator(&key);
    EnvVarGuard { key, original }
}

impl Drop for EnvVarGuard {
    fn drop(&mut self) {
        let _guard = ENV_MUTEX.lock();
        match self.original.take() {
            // SAFETY: We hold `ENV_MUTEX` during restoration.
            Some(value) => unsafe { env::set_var(&self.key, value) },
            // SAFETY: We hold `ENV_MUTEX` during restoration.
            None => unsafe { env::remove_var(&self.key) },
        }
    }
}
