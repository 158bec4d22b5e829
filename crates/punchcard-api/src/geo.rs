//! Geolocation support for clock events
//!
//! Position acquisition is best-effort: a fix older than the cache window is
//! refreshed, acquisition is capped at a timeout, and any failure means the
//! clock action simply proceeds without coordinates.

use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tokio::time::Instant;

use punchcard_core::Coordinates;

/// How long to wait for a position fix
pub const ACQUISITION_TIMEOUT: Duration = Duration::from_secs(10);

/// How long a fix stays fresh
pub const CACHE_MAX_AGE: Duration = Duration::from_secs(5 * 60);

/// Source of device position fixes
#[async_trait]
pub trait LocationProvider: Send + Sync {
    /// Acquire the current position, or `None` if unavailable
    async fn current_position(&self) -> Option<Coordinates>;
}

/// Provider backed by a configured fixed position
///
/// Clock terminals are stationary, so the usual deployment pins the site's
/// coordinates in the config file rather than querying hardware.
#[derive(Debug, Clone, Copy)]
pub struct StaticLocation(pub Option<Coordinates>);

#[async_trait]
impl LocationProvider for StaticLocation {
    async fn current_position(&self) -> Option<Coordinates> {
        self.0
    }
}

/// Caching wrapper around a [`LocationProvider`]
///
/// A fix younger than the cache window is returned without consulting the
/// inner provider; otherwise a fresh acquisition runs under the timeout.
pub struct CachedLocator<P> {
    provider: P,
    cached: Mutex<Option<(Instant, Coordinates)>>,
    max_age: Duration,
    timeout: Duration,
}

impl<P: LocationProvider> CachedLocator<P> {
    /// Wrap `provider` with the default cache window and timeout
    pub fn new(provider: P) -> Self {
        Self::with_limits(provider, CACHE_MAX_AGE, ACQUISITION_TIMEOUT)
    }

    /// Wrap `provider` with explicit limits
    pub fn with_limits(provider: P, max_age: Duration, timeout: Duration) -> Self {
        Self {
            provider,
            cached: Mutex::new(None),
            max_age,
            timeout,
        }
    }

    /// Current position: cached if fresh, freshly acquired otherwise
    pub async fn locate(&self) -> Option<Coordinates> {
        {
            let cached = self.cached.lock().await;
            if let Some((at, fix)) = *cached {
                if at.elapsed() < self.max_age {
                    return Some(fix);
                }
            }
        }
        match tokio::time::timeout(self.timeout, self.provider.current_position()).await {
            Ok(Some(fix)) => {
                *self.cached.lock().await = Some((Instant::now(), fix));
                Some(fix)
            }
            Ok(None) => None,
            Err(_) => {
                tracing::debug!("position acquisition timed out");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    struct CountingProvider {
        calls: AtomicUsize,
        fix: Option<Coordinates>,
    }

    impl CountingProvider {
        fn new(fix: Option<Coordinates>) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                fix,
            }
        }
    }

    #[async_trait]
    impl LocationProvider for CountingProvider {
        async fn current_position(&self) -> Option<Coordinates> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.fix
        }
    }

    /// Provider that never produces a fix within the timeout
    struct StalledProvider;

    #[async_trait]
    impl LocationProvider for StalledProvider {
        async fn current_position(&self) -> Option<Coordinates> {
            tokio::time::sleep(Duration::from_secs(60)).await;
            None
        }
    }

    fn fix() -> Coordinates {
        Coordinates {
            latitude: 40.4168,
            longitude: -3.7038,
        }
    }

    #[tokio::test(start_paused = true)]
    async fn fresh_fix_is_served_from_cache() {
        let locator = CachedLocator::new(CountingProvider::new(Some(fix())));
        assert_eq!(locator.locate().await, Some(fix()));
        tokio::time::advance(Duration::from_secs(4 * 60)).await;
        assert_eq!(locator.locate().await, Some(fix()));
        assert_eq!(locator.provider.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn stale_fix_triggers_reacquisition() {
        let locator = CachedLocator::new(CountingProvider::new(Some(fix())));
        locator.locate().await;
        tokio::time::advance(Duration::from_secs(6 * 60)).await;
        locator.locate().await;
        assert_eq!(locator.provider.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn slow_acquisition_yields_no_coordinates() {
        let locator = CachedLocator::new(StalledProvider);
        assert_eq!(locator.locate().await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn missing_fix_is_not_cached() {
        let locator = CachedLocator::new(CountingProvider::new(None));
        assert_eq!(locator.locate().await, None);
        assert_eq!(locator.locate().await, None);
        assert_eq!(locator.provider.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn static_location_reports_configured_fix() {
        let provider = StaticLocation(Some(fix()));
        assert_eq!(provider.current_position().await, Some(fix()));
        assert_eq!(StaticLocation(None).current_position().await, None);
    }
}
