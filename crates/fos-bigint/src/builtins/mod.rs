//! JavaScript Built-in Objects
//!
//! BigInt, the runtime's native arbitrary precision integer.

pub mod bigint;

pub use bigint::JsBigInt;
