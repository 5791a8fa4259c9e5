//! FLT -- inversion via Fermat's little theorem, `g^(-1) = g^(2^p - 2)`,
//! computed by a square-and-multiply chain over the bits of `(p - 2) / 2`.

use crate::params::CURRENT;
use crate::poly::Poly;
use crate::ring::{mod_mul, mod_sqr, mod_sqr_k};

/// Computes `ginv = g^-1 mod (x^p - 1)` via the FLT doubling chain.
pub fn mod_inv_flt(g: &Poly, ginv: &mut Poly) {
    let p = CURRENT.p;
    let mut r2 = (p - 2) >> 1;
    debug_assert_eq!((p - 2) % 2, 1, "p - 2 must be odd for the FLT halving to be exact");

    let mut b = g.clone();
    let mut c = g.clone();

    let mut i = 1u32;
    while r2 > 0 {
        let k = 1u32 << (i - 1);
        let tmp = c.clone();
        mod_sqr_k(&mut c, k);
        let mut next_c = Poly::new(c.deg_cap());
        mod_mul(&c, &tmp, &mut next_c);
        c = next_c;

        if r2 & 1 == 1 {
            let k2 = k << 1;
            mod_sqr_k(&mut b, k2);
            let mut next_b = Poly::new(b.deg_cap());
            mod_mul(&b, &c, &mut next_b);
            b = next_b;
        }

        i += 1;
        r2 >>= 1;
    }

    mod_sqr(&b, ginv);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rand::random_coprime_element;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn inverts_a_random_coprime_element() {
        let mut rng = StdRng::seed_from_u64(42);
        let g = random_coprime_element(&mut rng);
        let mut ginv = Poly::new(CURRENT.p as i64 - 1);
        mod_inv_flt(&g, &mut ginv);
        let mut check = Poly::new(CURRENT.p as i64 - 1);
        mod_mul(&g, &ginv, &mut check);
        assert!(check.is_one());
    }
}
