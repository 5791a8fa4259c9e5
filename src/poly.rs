//! Polynomial container: the element type of R_p.
//!
//! Mirrors `poly_t` from the reference design: `deg` is the nominal capacity
//! the buffer was sized for, and the active limbs live in `data`, ordered
//! little-endian across the limb sequence. Two storage disciplines are
//! available, selected by the mutually exclusive `heap`/`inline` Cargo
//! features; both expose the same API so the arithmetic in [`crate::ring`]
//! and [`crate::inv`] is written once against `Poly`.

use crate::params::CURRENT;

#[cfg(all(feature = "heap", feature = "inline"))]
compile_error!("features `heap` and `inline` are mutually exclusive");
#[cfg(not(any(feature = "heap", feature = "inline")))]
compile_error!("exactly one of the `heap`/`inline` storage features must be enabled");

/// Upper bound on limbs an inline-storage element will ever need, including
/// the double-width scratch buffers `red`/`mod_mul`/BYI's matrix temporaries
/// allocate internally.
#[cfg(feature = "inline")]
pub const INLINE_CAP: usize = CURRENT.max_poly_size() + 2;

#[cfg(feature = "heap")]
#[derive(Debug, Clone)]
struct Limbs(Vec<u64>);

#[cfg(feature = "heap")]
impl Limbs {
    fn zeroed(n: usize) -> Self {
        Limbs(vec![0u64; n])
    }

    fn truncate(&mut self, n: usize) {
        self.0.truncate(n);
    }
}

#[cfg(feature = "heap")]
impl core::ops::Deref for Limbs {
    type Target = [u64];
    fn deref(&self) -> &[u64] {
        &self.0
    }
}

#[cfg(feature = "heap")]
impl core::ops::DerefMut for Limbs {
    fn deref_mut(&mut self) -> &mut [u64] {
        &mut self.0
    }
}

#[cfg(feature = "inline")]
#[derive(Debug, Clone)]
struct Limbs {
    buf: [u64; INLINE_CAP],
    len: usize,
}

#[cfg(feature = "inline")]
impl Limbs {
    fn zeroed(n: usize) -> Self {
        assert!(n <= INLINE_CAP, "element exceeds inline storage capacity");
        Limbs {
            buf: [0u64; INLINE_CAP],
            len: n,
        }
    }

    fn truncate(&mut self, n: usize) {
        assert!(n <= self.len);
        for limb in &mut self.buf[n..self.len] {
            *limb = 0;
        }
        self.len = n;
    }
}

#[cfg(feature = "inline")]
impl core::ops::Deref for Limbs {
    type Target = [u64];
    fn deref(&self) -> &[u64] {
        &self.buf[..self.len]
    }
}

#[cfg(feature = "inline")]
impl core::ops::DerefMut for Limbs {
    fn deref_mut(&mut self) -> &mut [u64] {
        &mut self.buf[..self.len]
    }
}

/// An element of F2[x], stored as `size64` 64-bit limbs. Bit `i` of the
/// element lives in bit `i % 64` of limb `i / 64`.
#[derive(Debug, Clone)]
pub struct Poly {
    deg: i64,
    data: Limbs,
}

impl Poly {
    /// Allocates a zeroed element sized to hold degree `deg`
    /// (`size64 = ceil((deg + 1) / 64)`).
    #[must_use]
    pub fn new(deg: i64) -> Self {
        let size64 = ((deg + 1 + 63) / 64).max(0) as usize;
        Poly {
            deg,
            data: Limbs::zeroed(size64),
        }
    }

    /// Allocates a zeroed element with an explicit limb count, for
    /// temporaries whose bookkeeping `deg` does not correspond directly to
    /// `size64` (double-width products, BYI's matrix entries).
    pub(crate) fn with_size64(deg: i64, size64: usize) -> Self {
        Poly {
            deg,
            data: Limbs::zeroed(size64),
        }
    }

    /// Zeroes every limb without changing `size64`.
    pub fn zeroize(&mut self) {
        for limb in self.data.iter_mut() {
            *limb = 0;
        }
    }

    #[must_use]
    pub fn size64(&self) -> usize {
        self.data.len()
    }

    /// The nominal degree this buffer was sized for (not the current highest
    /// set bit; see [`Poly::degree`] for that).
    #[must_use]
    pub fn deg_cap(&self) -> i64 {
        self.deg
    }

    #[must_use]
    pub fn data(&self) -> &[u64] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [u64] {
        &mut self.data
    }

    #[must_use]
    pub fn getcoef(&self, idx: usize) -> u8 {
        ((self.data[idx / 64] >> (idx % 64)) & 1) as u8
    }

    pub fn setcoef(&mut self, idx: usize, val: u8) {
        if val != 0 {
            self.data[idx / 64] |= 1u64 << (idx % 64);
        } else {
            self.data[idx / 64] &= !(1u64 << (idx % 64));
        }
    }

    /// Highest index with a set bit, or -1 for the zero polynomial.
    #[must_use]
    pub fn degree(&self) -> i64 {
        for i in (0..64 * self.size64() as i64).rev() {
            if self.getcoef(i as usize) == 1 {
                return i;
            }
        }
        -1
    }

    /// True when every limb is zero.
    ///
    /// The reference implementation's equivalent predicate is named
    /// `gf2x_poly_isZero` but returns 1 for a *nonzero* polynomial -- nothing
    /// on the inversion hot path calls it, so the naming choice here favours
    /// the conventional (non-inverted) polarity instead of reproducing that
    /// quirk.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.data.iter().all(|&limb| limb == 0)
    }

    /// True when this element represents the multiplicative identity.
    #[must_use]
    pub fn is_one(&self) -> bool {
        self.data[0] == 1 && self.data[1..].iter().all(|&limb| limb == 0)
    }

    /// `self <- other`, copying `other.size64()` limbs.
    pub fn copy_from(&mut self, other: &Poly) {
        self.data[..other.size64()].copy_from_slice(&other.data);
    }

    pub(crate) fn truncate_limbs(&mut self, n: usize) {
        self.data.truncate(n);
    }
}

impl PartialEq for Poly {
    fn eq(&self, other: &Self) -> bool {
        self.data() == other.data()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setcoef_getcoef_roundtrip() {
        let mut p = Poly::new(127);
        p.setcoef(0, 1);
        p.setcoef(64, 1);
        p.setcoef(5, 1);
        assert_eq!(p.getcoef(0), 1);
        assert_eq!(p.getcoef(64), 1);
        assert_eq!(p.getcoef(5), 1);
        assert_eq!(p.getcoef(1), 0);
    }

    #[test]
    fn degree_of_zero_is_negative_one() {
        let p = Poly::new(63);
        assert_eq!(p.degree(), -1);
        assert!(p.is_zero());
    }

    #[test]
    fn is_one_detects_identity() {
        let mut p = Poly::new(127);
        p.setcoef(0, 1);
        assert!(p.is_one());
        p.setcoef(3, 1);
        assert!(!p.is_one());
    }
}
