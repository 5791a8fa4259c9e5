//! CEA -- inversion via the `p - 2 = cea_a * cea_b` factorisation, computing
//! `g^cea_a` by square-and-multiply over the bits of `cea_a` (phase 1), then
//! raising that to the `cea_b`-th power by square-and-multiply over the bits
//! of `cea_b`, with every squaring step scaled by `cea_a` to stay in the
//! already-exponentiated domain (phase 2).

use crate::params::CURRENT;
use crate::poly::Poly;
use crate::ring::{mod_mul, mod_sqr_k};

fn bitlength(mut n: u32) -> u32 {
    let mut s = 0;
    while n > 0 {
        s += 1;
        n >>= 1;
    }
    s
}

/// Computes `ginv = g^-1 mod (x^p - 1)` via the CEA two-phase chain.
pub fn mod_inv_cea(g: &Poly, ginv: &mut Poly) {
    let a = CURRENT.cea_a;
    let b = CURRENT.cea_b;
    let s = bitlength(a);
    let t = bitlength(b);

    let mut gamma = g.clone();
    if s >= 2 {
        for i in (0..=s - 2).rev() {
            let h = gamma.clone();
            let k = 1u32 << i;
            mod_sqr_k(&mut gamma, k);
            let mut next = Poly::new(gamma.deg_cap());
            mod_mul(&gamma, &h, &mut next);
            gamma = next;

            if (a >> i) & 1 == 1 {
                mod_sqr_k(&mut gamma, k);
                let mut with_g = Poly::new(gamma.deg_cap());
                mod_mul(&gamma, g, &mut with_g);
                gamma = with_g;
            }
        }
    }
    mod_sqr_k(&mut gamma, 1);

    let mut delta = gamma.clone();
    if t >= 2 {
        for i in (0..=t - 2).rev() {
            let h = delta.clone();
            let k = a * (1u32 << i);
            mod_sqr_k(&mut delta, k);
            let mut next = Poly::new(delta.deg_cap());
            mod_mul(&delta, &h, &mut next);
            delta = next;

            if (b >> i) & 1 == 1 {
                mod_sqr_k(&mut delta, k);
                let mut with_gamma = Poly::new(delta.deg_cap());
                mod_mul(&delta, &gamma, &mut with_gamma);
                delta = with_gamma;
            }
        }
    }

    ginv.copy_from(&delta);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rand::random_coprime_element;
    use crate::ring::mod_mul;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn inverts_a_random_coprime_element() {
        let mut rng = StdRng::seed_from_u64(7);
        let g = random_coprime_element(&mut rng);
        let mut ginv = Poly::new(CURRENT.p as i64 - 1);
        mod_inv_cea(&g, &mut ginv);
        let mut check = Poly::new(CURRENT.p as i64 - 1);
        mod_mul(&g, &ginv, &mut check);
        assert!(check.is_one());
    }
}
