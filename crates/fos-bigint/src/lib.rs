//! fOS BigInt
//!
//! Backend-independent arbitrary precision integers for the fOS runtime.
//!
//! Features:
//! - One operation set (`BigIntLib`) over three value encodings
//! - Native backend on the built-in `JsBigInt`
//! - Engine backend on `num-bigint`
//! - Bridged backend for external integer types that only speak decimal text
//! - One-shot, thread-safe backend selection
//!
//! ```
//! use fos_bigint::{bigint_lib, BigIntLib};
//!
//! let lib = bigint_lib();
//! let x = lib.bigint("0xff").unwrap();
//! let y = lib.bigint(-16).unwrap();
//! assert_eq!(lib.to_string(&lib.bitwise_and(&x, &y).unwrap()).unwrap(), "240");
//! ```

mod backend;
mod clamp;
mod error;
mod literal;
mod numeric;
mod selector;
mod value;

pub mod builtins;
pub mod engine;

pub use backend::{Backend, BigIntLib, BridgedBackend, EngineBackend, NativeBackend};
pub use builtins::JsBigInt;
pub use error::{BigIntError, ErrorKind, MAX_BIT_LENGTH};
pub use selector::{BACKEND_ENV_VAR, BackendSelector, HostCapability, bigint_lib, native_or_engine_lib};
pub use value::{BackendKind, ExtendedInt, MinimalConstructor, MinimalInteger, Operand, Primitive};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
