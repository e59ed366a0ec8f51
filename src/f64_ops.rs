// Copyright (c) 2024-2026 Christian Moeller
// SPDX-License-Identifier: MIT

//! f64 soft-float operations using pure IEEE 754 bit manipulation.
//!
//! No hardware math instructions and no host libm: every routine works on
//! the integer bit pattern of its argument, so results are identical on
//! every target. Rounding to the integer grid goes through the
//! add-then-subtract `1/EPSILON` trick; square root reduces the argument
//! to `[1, 4)` and refines a table-based reciprocal estimate with
//! fixed-point Goldschmidt iterations.

use crate::support::{force_eval, invalid, mul32, mul64, RSQRT_TAB};

/// Adding then subtracting this constant rounds any value in `[0, 2^52)`
/// to an integer in the current rounding mode.
const TOINT: f64 = 1.0 / f64::EPSILON;

// ── Sign and magnitude ──────────────────────────────────────────────

/// Absolute value via sign-bit clear. Total: NaN and infinity keep their
/// payload bits, only the sign bit changes.
#[inline]
pub fn fabs(x: f64) -> f64 {
    f64::from_bits(x.to_bits() & 0x7FFFFFFFFFFFFFFF)
}

/// Magnitude of `x` combined with the sign bit of `y`.
#[inline]
pub fn copysign(x: f64, y: f64) -> f64 {
    f64::from_bits((x.to_bits() & 0x7FFFFFFFFFFFFFFF) | (y.to_bits() & 0x8000000000000000))
}

/// Sign bit of `x`: true for negative values, including -0.0 and NaN with
/// the sign bit set.
#[inline]
pub fn signbit(x: f64) -> bool {
    x.to_bits() >> 63 != 0
}

// ── Rounding to the integer grid ────────────────────────────────────

/// Ceiling: smallest integer-valued f64 >= x.
pub fn ceil(x: f64) -> f64 {
    let u = x.to_bits();
    let e = (u >> 52 & 0x7FF) as i32;

    // Already integral (covers NaN and infinity), or zero.
    if e >= 0x3FF + 52 || x == 0.0 {
        return x;
    }
    // y = int(x) - x, where int(x) is an integer neighbor of x
    let y = if u >> 63 != 0 {
        x - TOINT + TOINT - x
    } else {
        x + TOINT - TOINT - x
    };
    // |x| < 1: the generic path loses the inexact signal, special case
    if e <= 0x3FF - 1 {
        force_eval(y);
        return if u >> 63 != 0 { -0.0 } else { 1.0 };
    }
    if y < 0.0 {
        x + y + 1.0
    } else {
        x + y
    }
}

/// Floor: largest integer-valued f64 <= x.
pub fn floor(x: f64) -> f64 {
    let u = x.to_bits();
    let e = (u >> 52 & 0x7FF) as i32;

    if e >= 0x3FF + 52 || x == 0.0 {
        return x;
    }
    // y = int(x) - x, where int(x) is an integer neighbor of x
    let y = if u >> 63 != 0 {
        x - TOINT + TOINT - x
    } else {
        x + TOINT - TOINT - x
    };
    if e <= 0x3FF - 1 {
        force_eval(y);
        return if u >> 63 != 0 { -1.0 } else { 0.0 };
    }
    if y > 0.0 {
        x + y - 1.0
    } else {
        x + y
    }
}

/// Truncate toward zero by masking off the fraction bits below the
/// integer position.
pub fn trunc(x: f64) -> f64 {
    let x1p120 = f64::from_bits(0x4770000000000000); // 2^120

    let mut u = x.to_bits();
    let mut e = (u >> 52 & 0x7FF) as i32 - 0x3FF + 12;

    if e >= 52 + 12 {
        return x;
    }
    if e < 12 {
        e = 1;
    }
    let m = u64::MAX >> e;
    if u & m == 0 {
        return x;
    }
    force_eval(x + x1p120);
    u &= !m;
    f64::from_bits(u)
}

/// Round to the nearest integer in the current rounding mode.
///
/// Assumes round-to-nearest-even is in effect; every target this library
/// runs on starts in that mode and never changes it. The sign of a zero
/// result follows the input: `rint(-0.3)` is `-0.0`.
pub fn rint(x: f64) -> f64 {
    let u = x.to_bits();
    let e = (u >> 52 & 0x7FF) as i32;
    let s = u >> 63 != 0;

    if e >= 0x3FF + 52 {
        return x;
    }
    let y = if s {
        x - TOINT + TOINT
    } else {
        x + TOINT - TOINT
    };
    if y == 0.0 {
        return if s { -0.0 } else { 0.0 };
    }
    y
}

// ── Square root ─────────────────────────────────────────────────────

/// Correctly rounded square root via table lookup and fixed-point
/// Goldschmidt iteration.
///
/// `sqrt(+-0)` and `sqrt(+inf)` return the input; negative non-zero and
/// NaN inputs produce a quiet NaN through the invalid-operand path.
pub fn sqrt(x: f64) -> f64 {
    let x1p52 = f64::from_bits(0x4330000000000000); // 2^52

    let mut ix = x.to_bits();
    let mut top = ix >> 52;

    if top.wrapping_sub(0x001) >= 0x7FF - 0x001 {
        // x < 0x1p-1022, zero, inf, or nan
        if ix << 1 == 0 {
            return x;
        }
        if ix == 0x7FF0000000000000 {
            return x;
        }
        if ix > 0x7FF0000000000000 {
            return invalid(x);
        }
        // subnormal: scale into the normal range
        ix = (x * x1p52).to_bits();
        top = ix >> 52;
        top = top.wrapping_sub(52);
    }

    // Argument reduction: x = 4^e m with m in [1, 4). m becomes a 2.62
    // fixed-point value and 2^e the exponent part of the result.
    let even = top & 1 != 0;
    let mut m = (ix << 11) | 0x8000000000000000;
    if even {
        m >>= 1;
    }
    top = top.wrapping_add(0x3FF) >> 1;

    // Approximate r ~ 1/sqrt(m) and s ~ sqrt(m). The 7-bit table estimate
    // (low exponent bit plus 6 mantissa bits) has relative error below
    // 2^-8; each Goldschmidt iteration
    //   s = s*u/2,  u = 3 - s*r,  r = r*u/2
    // roughly squares that error. Two iterations run in 2.30 fixed point,
    // the last in 2.62 after widening r. The s and r multiplies within an
    // iteration are independent.
    const THREE32: u32 = 0xC0000000; // 3.0 in 2.30 fixed point
    const THREE64: u64 = (THREE32 as u64) << 32; // 3.0 in 2.62 fixed point

    let i = (ix >> 46 & 127) as usize;
    let mut r = (RSQRT_TAB[i] as u32) << 16;
    // |r sqrt(m) - 1| < 0x1.FDp-9
    let mut s = mul32((m >> 32) as u32, r);
    // |s/sqrt(m) - 1| < 0x1.FDp-9
    let mut d = mul32(s, r);
    let mut u = THREE32.wrapping_sub(d);
    r = mul32(r, u) << 1;
    // |r sqrt(m) - 1| < 0x1.7Bp-16
    s = mul32(s, u) << 1;
    // |s/sqrt(m) - 1| < 0x1.7Bp-16
    d = mul32(s, r);
    u = THREE32.wrapping_sub(d);
    r = mul32(r, u) << 1;
    // |r sqrt(m) - 1| < 0x1.3704p-29 (measured worst case)

    let r = (r as u64) << 32;
    let s64 = mul64(m, r);
    let d = mul64(s64, r);
    let u = THREE64.wrapping_sub(d);
    let s64 = mul64(s64, u); // 3.61 fixed point
    // -0x1p-57 < s - sqrt(m) < 0x1.8001p-61
    let mut s = s64.wrapping_sub(2) >> 9; // 12.52 fixed point
    // -0x1.09p-52 < s - sqrt(m) < -0x1.FFFCp-63

    // s < sqrt(m) < s + 0x1.09p-52: the nearest 52-bit result is s or
    // s + 1 ulp, decided by comparing (2^52 s + 0.5)^2 with 2^104 m.
    let d0 = (m << 42).wrapping_sub(s.wrapping_mul(s));
    let d1 = s.wrapping_sub(d0);
    let d2 = d1.wrapping_add(s).wrapping_add(1);
    s += d1 >> 63;
    s &= 0x000FFFFFFFFFFFFF;
    s |= top << 52;
    let y = f64::from_bits(s);

    if cfg!(feature = "fenv") {
        // Only the (s+1)^2 == 2^42 m case is exact; otherwise add a tiny
        // value so the rounded addition raises the inexact flag without
        // moving y.
        let mut tiny: u64 = if d2 == 0 { 0 } else { 0x0010000000000000 };
        tiny |= (d1 ^ d2) & 0x8000000000000000;
        return y + f64::from_bits(tiny);
    }
    y
}
