// Copyright (c) 2024-2026 Christian Moeller
// SPDX-License-Identifier: MIT

//! libsoftfp: software floating-point support library.
//!
//! Provides IEEE 754-conformant replacements for the handful of math
//! primitives a bytecode virtual machine needs to implement its
//! floating-point instructions (fabs, copysign, signbit, ceil, floor,
//! trunc, rint, sqrt), for freestanding environments with no host math
//! library. Every routine is a pure, stateless function of its argument's
//! bit pattern, built from integer bit manipulation only, so results are
//! identical across targets and need no FPU beyond basic arithmetic.
//!
//! This library is pure computation: no heap allocation, no state. The
//! only constant data is the read-only reciprocal-square-root table.
//!
//! ## Naming Convention
//! - f64 functions: `math_<name>` (e.g. `math_sqrt`, `math_rint`)
//! - f32 functions: `math_<name>f` (e.g. `math_sqrtf`, `math_rintf`)

#![no_std]

mod f32_ops;
mod f64_ops;
mod support;

pub use f32_ops::{ceilf, copysignf, fabsf, floorf, rintf, signbitf, sqrtf, truncf};
pub use f64_ops::{ceil, copysign, fabs, floor, rint, signbit, sqrt, trunc};
pub use support::RSQRT_TAB;

// ── f64 C API exports ────────────────────────────────────────────────

/// Absolute value via sign-bit masking.
#[no_mangle]
pub extern "C" fn math_fabs(x: f64) -> f64 {
    f64_ops::fabs(x)
}

/// Copy sign of y onto magnitude of x.
#[no_mangle]
pub extern "C" fn math_copysign(x: f64, y: f64) -> f64 {
    f64_ops::copysign(x, y)
}

/// 1 if the sign bit of x is set (including -0.0 and negative NaN), else 0.
#[no_mangle]
pub extern "C" fn math_signbit(x: f64) -> i32 {
    f64_ops::signbit(x) as i32
}

/// Ceiling (round toward +infinity).
#[no_mangle]
pub extern "C" fn math_ceil(x: f64) -> f64 {
    f64_ops::ceil(x)
}

/// Floor (round toward -infinity).
#[no_mangle]
pub extern "C" fn math_floor(x: f64) -> f64 {
    f64_ops::floor(x)
}

/// Truncate toward zero via IEEE 754 bit manipulation.
#[no_mangle]
pub extern "C" fn math_trunc(x: f64) -> f64 {
    f64_ops::trunc(x)
}

/// Round to nearest integer in the current rounding mode.
#[no_mangle]
pub extern "C" fn math_rint(x: f64) -> f64 {
    f64_ops::rint(x)
}

/// Square root (IEEE 754 correctly rounded) via Goldschmidt iteration.
#[no_mangle]
pub extern "C" fn math_sqrt(x: f64) -> f64 {
    f64_ops::sqrt(x)
}

// ── f32 C API exports ────────────────────────────────────────────────

/// Absolute value (f32).
#[no_mangle]
pub extern "C" fn math_fabsf(x: f32) -> f32 {
    f32_ops::fabsf(x)
}

/// Copy sign (f32).
#[no_mangle]
pub extern "C" fn math_copysignf(x: f32, y: f32) -> f32 {
    f32_ops::copysignf(x, y)
}

/// 1 if the sign bit of x is set (f32), else 0.
#[no_mangle]
pub extern "C" fn math_signbitf(x: f32) -> i32 {
    f32_ops::signbitf(x) as i32
}

/// Ceiling (f32).
#[no_mangle]
pub extern "C" fn math_ceilf(x: f32) -> f32 {
    f32_ops::ceilf(x)
}

/// Floor (f32).
#[no_mangle]
pub extern "C" fn math_floorf(x: f32) -> f32 {
    f32_ops::floorf(x)
}

/// Truncate toward zero (f32).
#[no_mangle]
pub extern "C" fn math_truncf(x: f32) -> f32 {
    f32_ops::truncf(x)
}

/// Round to nearest integer (f32) in the current rounding mode.
#[no_mangle]
pub extern "C" fn math_rintf(x: f32) -> f32 {
    f32_ops::rintf(x)
}

/// Square root (f32, IEEE 754 correctly rounded).
#[no_mangle]
pub extern "C" fn math_sqrtf(x: f32) -> f32 {
    f32_ops::sqrtf(x)
}
