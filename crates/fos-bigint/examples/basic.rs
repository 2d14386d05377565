//! Example: Basic usage of fOS BigInt
//!
//! Run with `FOS_BIGINT_BACKEND=engine` to use the num-bigint backend, and
//! `RUST_LOG=debug` to see backend resolution.

use fos_bigint::{BigIntLib, bigint_lib, native_or_engine_lib};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let lib = bigint_lib();
    println!("fOS BigInt v{} using the {} backend", fos_bigint::VERSION, lib.kind());

    // 2^128 - 1, then a few operations on it
    let one = lib.bigint(1)?;
    let max_u128 = lib.subtract(&lib.left_shift(&one, &lib.bigint(128)?)?, &one)?;
    println!("2^128 - 1       = {}", lib.to_string(&max_u128)?);
    println!("  in hex        = 0x{}", lib.to_string_radix(&max_u128, 16)?);
    println!("  asIntN(128)   = {}", lib.to_string(&lib.as_int_n(128, &max_u128)?)?);
    println!("  as a number   = {}", lib.to_number(&max_u128)?);

    let seven = lib.bigint(-7)?;
    let two = lib.bigint(2)?;
    println!("-7 / 2          = {}", lib.to_string(&lib.divide(&seven, &two)?)?);
    println!("-7 % 2          = {}", lib.to_string(&lib.remainder(&seven, &two)?)?);
    println!("-7 < -6.5       = {}", lib.less_than((&seven).into(), (-6.5).into())?);

    match lib.divide(&seven, &lib.bigint(0)?) {
        Ok(v) => println!("-7 / 0          = {v}"),
        Err(e) => println!("-7 / 0          -> {e}"),
    }

    // Long computations stay in one unbridged encoding
    let fast = native_or_engine_lib();
    let mut factorial = fast.bigint(1)?;
    for i in 2..=30u32 {
        factorial = fast.multiply(&factorial, &fast.bigint(i)?)?;
    }
    let factorial = lib.bigint(&factorial)?;
    println!("30!             = {}", lib.to_string(&factorial)?);

    Ok(())
}
