//! Property-based tests over randomly seeded inputs.

use gf2x_inv::inv::{mod_inv_byi, mod_inv_cea, mod_inv_flt, mod_inv_sac, mod_inv_tyt};
use gf2x_inv::params::CURRENT;
use gf2x_inv::poly::Poly;
use gf2x_inv::rand::random_coprime_element;
use gf2x_inv::ring::{mod_mul, poly_right_shift, rev64};
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn deg() -> i64 {
    CURRENT.p as i64 - 1
}

proptest! {
    #[test]
    fn rev64_is_involutive(n: u64) {
        prop_assert_eq!(rev64(rev64(n)), n);
    }

    #[test]
    fn rev64_preserves_popcount(n: u64) {
        prop_assert_eq!(rev64(n).count_ones(), n.count_ones());
    }

    #[test]
    fn poly_right_shift_matches_scalar_shift_on_a_single_limb(word: u64, shift in 1u32..64) {
        let mut p = Poly::new(63);
        p.data_mut()[0] = word;
        poly_right_shift(&mut p, shift);
        prop_assert_eq!(p.data()[0], word >> shift);
    }

    #[test]
    fn byi_inverts_any_random_coprime_seed(seed: u64) {
        let mut rng = StdRng::seed_from_u64(seed);
        let g = random_coprime_element(&mut rng);
        let mut ginv = Poly::new(deg());
        mod_inv_byi(&g, &mut ginv);
        let mut check = Poly::new(deg());
        mod_mul(&g, &ginv, &mut check);
        prop_assert!(check.is_one());
    }

    #[test]
    fn all_algorithms_agree_for_any_random_coprime_seed(seed: u64) {
        let mut rng = StdRng::seed_from_u64(seed);
        let g = random_coprime_element(&mut rng);

        let mut flt = Poly::new(deg());
        mod_inv_flt(&g, &mut flt);
        let mut cea = Poly::new(deg());
        mod_inv_cea(&g, &mut cea);
        let mut tyt = Poly::new(deg());
        mod_inv_tyt(&g, &mut tyt);
        let mut sac = Poly::new(deg());
        mod_inv_sac(&g, &mut sac);

        prop_assert_eq!(&flt, &cea);
        prop_assert_eq!(&flt, &tyt);
        prop_assert_eq!(&flt, &sac);
    }
}
