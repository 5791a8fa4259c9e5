//! Inversion in R_p = F2\[x\] / (x^p - 1), the polynomial ring BIKE and
//! similar code-based schemes build their key generation on, via five
//! independent algorithms:
//!
//! - [`inv::mod_inv_byi`] -- a Bernstein-Yang-style jump-divstep schedule.
//! - [`inv::mod_inv_flt`] -- Fermat's little theorem, square-and-multiply.
//! - [`inv::mod_inv_cea`] -- exponentiation via a `p - 2` factor pair.
//! - [`inv::mod_inv_tyt`] -- an Itoh-Tsujii-style addition chain.
//! - [`inv::mod_inv_sac`] -- a precomputed shortest addition chain.
//!
//! The extension degree `p` is fixed at compile time by one of the `ext-*`
//! Cargo features (see [`params`]); the storage discipline for [`Poly`]'s
//! limbs is fixed by the `heap`/`inline` features (see [`poly`]).

pub mod bench;
mod backend;
pub mod error;
pub mod params;
pub mod poly;
pub mod print;
pub mod rand;
pub mod ring;

pub mod inv;

pub use error::Error;
pub use params::{CURRENT, Params};
pub use poly::Poly;

pub use inv::{mod_inv_byi, mod_inv_cea, mod_inv_flt, mod_inv_sac, mod_inv_tyt};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ring::mod_mul;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    /// Every algorithm must agree with every other one on the same input:
    /// the strongest cross-check available since the reference
    /// implementation never runs more than one algorithm per build.
    #[test]
    fn all_five_algorithms_agree() {
        let mut rng = StdRng::seed_from_u64(2026);
        let g = crate::rand::random_coprime_element(&mut rng);

        let mut byi = Poly::new(CURRENT.p as i64 - 1);
        let mut flt = Poly::new(CURRENT.p as i64 - 1);
        let mut cea = Poly::new(CURRENT.p as i64 - 1);
        let mut tyt = Poly::new(CURRENT.p as i64 - 1);
        let mut sac = Poly::new(CURRENT.p as i64 - 1);

        mod_inv_byi(&g, &mut byi);
        mod_inv_flt(&g, &mut flt);
        mod_inv_cea(&g, &mut cea);
        mod_inv_tyt(&g, &mut tyt);
        mod_inv_sac(&g, &mut sac);

        assert_eq!(byi, flt);
        assert_eq!(byi, cea);
        assert_eq!(byi, tyt);
        assert_eq!(byi, sac);

        let mut check = Poly::new(CURRENT.p as i64 - 1);
        mod_mul(&g, &byi, &mut check);
        assert!(check.is_one());
    }
}
