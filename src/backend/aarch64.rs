//! AArch64 PMULL backend (via the `aes` feature's `vmull_p64`).

use core::arch::aarch64::*;

/// # Safety
/// Caller must have confirmed PMULL support (see [`super::autodetect`]).
#[target_feature(enable = "aes")]
pub(crate) unsafe fn clmul64(a: u64, b: u64) -> (u64, u64) {
    unsafe {
        let prod = vmull_p64(a, b);
        (prod as u64, (prod >> 64) as u64)
    }
}

/// # Safety
/// Caller must have confirmed PMULL support (see [`super::autodetect`]).
#[target_feature(enable = "aes")]
pub(crate) unsafe fn clsqr64(a: u64) -> (u64, u64) {
    unsafe { clmul64(a, a) }
}
