//! Converts `key=hexvalue` register dumps to `key=decimal`, reinterpreting
//! each hexadecimal value as a 32-bit two's-complement signed integer.
//!
//! The conversion core is pure and I/O-free; file handling lives in the
//! binary.

pub mod converter;
pub mod error;
pub mod record;
