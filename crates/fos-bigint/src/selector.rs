//! Backend selection
//!
//! The host integration layer reports what kind of integer it has through
//! a [`HostCapability`]. The first request for a backend probes it once and
//! memoizes the matching [`Backend`] for the life of the selector.

use std::sync::OnceLock;

use tracing::{debug, info, warn};

use crate::backend::{Backend, BigIntLib};
use crate::value::MinimalConstructor;

/// Environment variable read by [`HostCapability::from_env`]
pub const BACKEND_ENV_VAR: &str = "FOS_BIGINT_BACKEND";

/// What the host's integer type is capable of
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostCapability {
    /// The runtime's built-in BigInt
    Native,
    /// The arbitrary-precision engine's own integer
    Engine,
    /// Some other type that only round-trips through decimal text
    Minimal(MinimalConstructor),
}

impl HostCapability {
    /// Read the capability from `FOS_BIGINT_BACKEND`
    pub fn from_env() -> Self {
        Self::from_setting(std::env::var(BACKEND_ENV_VAR).ok().as_deref())
    }

    /// `native` or `engine`, case-insensitive. Anything else is `Native`.
    pub fn from_setting(setting: Option<&str>) -> Self {
        let Some(value) = setting.map(str::trim) else {
            return HostCapability::Native;
        };
        if value.eq_ignore_ascii_case("native") || value.is_empty() {
            HostCapability::Native
        } else if value.eq_ignore_ascii_case("engine") {
            HostCapability::Engine
        } else {
            warn!(value, var = BACKEND_ENV_VAR, "Unknown BigInt backend setting, using native");
            HostCapability::Native
        }
    }
}

#[derive(Debug)]
enum Probe {
    Host(fn() -> HostCapability),
    Fixed(HostCapability),
}

/// One-shot backend resolution.
///
/// Both accessors probe the host at most once and hand out the same
/// backend on every call, from any thread.
#[derive(Debug)]
pub struct BackendSelector {
    probe: Probe,
    capability: OnceLock<HostCapability>,
    best: OnceLock<Backend>,
    native_or_engine: OnceLock<Backend>,
}

impl BackendSelector {
    /// Selector that calls `probe` on first use
    pub const fn new(probe: fn() -> HostCapability) -> Self {
        Self {
            probe: Probe::Host(probe),
            capability: OnceLock::new(),
            best: OnceLock::new(),
            native_or_engine: OnceLock::new(),
        }
    }

    /// Selector with a known capability
    pub fn with_capability(capability: HostCapability) -> Self {
        Self {
            probe: Probe::Fixed(capability),
            capability: OnceLock::new(),
            best: OnceLock::new(),
            native_or_engine: OnceLock::new(),
        }
    }

    pub fn capability(&self) -> HostCapability {
        *self.capability.get_or_init(|| {
            let capability = match &self.probe {
                Probe::Host(probe) => probe(),
                Probe::Fixed(capability) => *capability,
            };
            debug!(?capability, "Probed host BigInt capability");
            capability
        })
    }

    /// The backend matching the host's integer type
    pub fn best_available(&self) -> &Backend {
        self.best.get_or_init(|| {
            let backend = match self.capability() {
                HostCapability::Native => Backend::native(),
                HostCapability::Engine => Backend::engine(),
                HostCapability::Minimal(constructor) => Backend::bridged(constructor),
            };
            info!(kind = %backend.kind(), "BigInt backend resolved");
            backend
        })
    }

    /// Native or engine only, for long internal computations that should
    /// stay in one unbridged encoding and convert once at the boundary.
    ///
    /// A minimal host gets the engine backend.
    pub fn native_or_engine(&self) -> &Backend {
        self.native_or_engine.get_or_init(|| {
            let backend = match self.capability() {
                HostCapability::Native => Backend::native(),
                HostCapability::Engine => Backend::engine(),
                HostCapability::Minimal(constructor) => {
                    warn!(
                        constructor = constructor.name(),
                        "Host integer is neither native nor engine, falling back to the engine backend"
                    );
                    Backend::engine()
                }
            };
            info!(kind = %backend.kind(), "Native-or-engine BigInt backend resolved");
            backend
        })
    }

    /// Has [`best_available`](Self::best_available) run yet?
    pub fn is_resolved(&self) -> bool {
        self.best.get().is_some()
    }
}

// ============================================================================
// Process-wide selector
// ============================================================================

static DEFAULT_SELECTOR: BackendSelector = BackendSelector::new(HostCapability::from_env);

/// The process-wide BigInt backend
pub fn bigint_lib() -> &'static Backend {
    DEFAULT_SELECTOR.best_available()
}

/// The process-wide native-or-engine backend
pub fn native_or_engine_lib() -> &'static Backend {
    DEFAULT_SELECTOR.native_or_engine()
}

#[cfg(test)]
mod tests {
    use std::any::Any;
    use std::fmt;
    use std::str::FromStr;
    use std::thread;

    use super::*;
    use crate::value::{BackendKind, MinimalInteger};

    #[derive(Debug)]
    struct Digits(String);

    impl fmt::Display for Digits {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(&self.0)
        }
    }

    impl FromStr for Digits {
        type Err = String;

        fn from_str(s: &str) -> Result<Self, Self::Err> {
            Ok(Digits(s.to_string()))
        }
    }

    impl MinimalInteger for Digits {
        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    fn engine_host() -> HostCapability {
        HostCapability::Engine
    }

    #[test]
    fn test_from_setting() {
        assert_eq!(HostCapability::from_setting(None), HostCapability::Native);
        assert_eq!(HostCapability::from_setting(Some("")), HostCapability::Native);
        assert_eq!(HostCapability::from_setting(Some("NATIVE")), HostCapability::Native);
        assert_eq!(HostCapability::from_setting(Some(" Engine ")), HostCapability::Engine);
        assert_eq!(HostCapability::from_setting(Some("gmp")), HostCapability::Native);
    }

    #[test]
    fn test_best_available_per_capability() {
        let ctor = MinimalConstructor::of::<Digits>();
        let cases = [
            (HostCapability::Native, BackendKind::Native),
            (HostCapability::Engine, BackendKind::Engine),
            (HostCapability::Minimal(ctor), BackendKind::Bridged),
        ];
        for (capability, kind) in cases {
            let selector = BackendSelector::with_capability(capability);
            assert!(!selector.is_resolved());
            assert_eq!(selector.best_available().kind(), kind);
            assert!(selector.is_resolved());
        }
    }

    #[test]
    fn test_native_or_engine_falls_back() {
        let ctor = MinimalConstructor::of::<Digits>();
        let selector = BackendSelector::with_capability(HostCapability::Minimal(ctor));
        assert_eq!(selector.native_or_engine().kind(), BackendKind::Engine);
        assert_eq!(selector.best_available(), &Backend::bridged(ctor));
    }

    #[test]
    fn test_resolution_is_memoized() {
        let selector = BackendSelector::new(engine_host);
        let first = selector.best_available();
        let second = selector.best_available();
        assert!(std::ptr::eq(first, second));
        assert_eq!(first.kind(), BackendKind::Engine);
    }

    #[test]
    fn test_concurrent_resolution_converges() {
        let selector = BackendSelector::new(engine_host);
        let addresses: Vec<usize> = thread::scope(|s| {
            let handles: Vec<_> = (0..8)
                .map(|_| s.spawn(|| selector.best_available() as *const Backend as usize))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });
        assert!(addresses.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn test_process_wide_instance() {
        assert!(std::ptr::eq(bigint_lib(), bigint_lib()));
        assert_ne!(native_or_engine_lib().kind(), BackendKind::Bridged);
    }
}
