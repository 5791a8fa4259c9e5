//! Word-level carry-less multiplication, the one primitive everything in
//! [`crate::ring`] is built from.
//!
//! `clmul64(a, b)` multiplies two 64-bit limbs as F2\[x\] polynomials and
//! returns the 128-bit product split into (lo, hi) halves; `clsqr64` squares
//! a single limb. A hardware backend is selected at runtime when the target
//! supports it (x86/x86_64 PCLMULQDQ, AArch64 PMULL via `vmull_p64`), probed
//! once and cached through `cpufeatures`; otherwise, or when the
//! `force-soft` feature is set, the portable shift-and-xor fallback in
//! [`soft`] is used.

mod soft;

cfg_if::cfg_if! {
    if #[cfg(all(target_arch = "aarch64", not(feature = "force-soft")))] {
        mod aarch64;
        mod autodetect;
        use autodetect::{init_clmul, InitToken};

        #[inline]
        pub(crate) fn clmul64(a: u64, b: u64) -> (u64, u64) {
            let token: InitToken = init_clmul();
            if token.get() {
                // SAFETY: `token.get()` only returns true once the `aes`
                // feature (which implies PMULL) has been confirmed present.
                unsafe { aarch64::clmul64(a, b) }
            } else {
                soft::clmul64(a, b)
            }
        }

        #[inline]
        pub(crate) fn clsqr64(a: u64) -> (u64, u64) {
            let token: InitToken = init_clmul();
            if token.get() {
                // SAFETY: see clmul64 above.
                unsafe { aarch64::clsqr64(a) }
            } else {
                soft::clsqr64(a)
            }
        }
    } else if #[cfg(all(any(target_arch = "x86_64", target_arch = "x86"), not(feature = "force-soft")))] {
        mod autodetect;
        mod x86;
        use autodetect::{init_clmul, InitToken};

        #[inline]
        pub(crate) fn clmul64(a: u64, b: u64) -> (u64, u64) {
            let token: InitToken = init_clmul();
            if token.get() {
                // SAFETY: `token.get()` only returns true once the
                // `pclmulqdq` feature has been confirmed present.
                unsafe { x86::clmul64(a, b) }
            } else {
                soft::clmul64(a, b)
            }
        }

        #[inline]
        pub(crate) fn clsqr64(a: u64) -> (u64, u64) {
            let token: InitToken = init_clmul();
            if token.get() {
                // SAFETY: see clmul64 above.
                unsafe { x86::clsqr64(a) }
            } else {
                soft::clsqr64(a)
            }
        }
    } else {
        #[inline]
        pub(crate) fn clmul64(a: u64, b: u64) -> (u64, u64) {
            soft::clmul64(a, b)
        }

        #[inline]
        pub(crate) fn clsqr64(a: u64) -> (u64, u64) {
            soft::clsqr64(a)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatch_agrees_with_soft_fallback() {
        let cases = [(0u64, 0u64), (1, 1), (u64::MAX, 1), (0x0123_4567_89ab_cdef, 0xfedc_ba98_7654_3210)];
        for (a, b) in cases {
            assert_eq!(clmul64(a, b), soft::clmul64(a, b));
            assert_eq!(clsqr64(a), soft::clsqr64(a));
        }
    }
}
