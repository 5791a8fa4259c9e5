//! SAC -- inversion via a precomputed shortest addition chain for `sac_r`.
//!
//! `L[i] = g^(2^sac_c[i] - 1)` is built once, following the chain's
//! parenthood table `sac_a`, then `gamma` is assembled from `L[last]` by
//! square-and-multiply over the bits of `sac_n` (a power of two), and the
//! final `sac_h` correction folds in `L[sac_h_idx]`.

use crate::params::CURRENT;
use crate::poly::Poly;
use crate::ring::{mod_mul, mod_sqr, mod_sqr_k};

fn bitlength(mut n: u32) -> u32 {
    let mut s = 0;
    while n > 0 {
        s += 1;
        n >>= 1;
    }
    s
}

/// Computes `ginv = g^-1 mod (x^p - 1)` via the SAC addition-chain method.
pub fn mod_inv_sac(g: &Poly, ginv: &mut Poly) {
    let p = CURRENT.p;
    let h = CURRENT.sac_h;
    let h_idx = CURRENT.sac_h_idx;
    let r = CURRENT.sac_r;
    let n = CURRENT.sac_n;
    let c = &CURRENT.sac_c[..CURRENT.sac_len_c];
    let a = &CURRENT.sac_a[..2 * CURRENT.sac_len_c];
    let len_c = CURRENT.sac_len_c;

    let deg = p as i64 - 1;
    let mut l: Vec<Poly> = (0..len_c).map(|_| Poly::new(deg)).collect();
    l[0].copy_from(g);

    for i in 1..len_c {
        let i1 = a[2 * i - 2] as usize;
        let i2 = a[2 * i - 1] as usize;
        let mut tmp = l[i1].clone();
        mod_sqr_k(&mut tmp, c[i2]);
        let mut out = Poly::new(deg);
        mod_mul(&l[i2], &tmp, &mut out);
        l[i] = out;
    }

    let delta_r = l[len_c - 1].clone();
    let delta_h = l[h_idx].clone();
    let mut gamma = delta_r.clone();

    let nbits = bitlength(n);
    if nbits >= 2 {
        for i in (0..=nbits - 2).rev() {
            let tmp = gamma.clone();
            mod_sqr_k(&mut gamma, r * (1 << i));
            let mut next = Poly::new(deg);
            mod_mul(&gamma, &tmp, &mut next);
            gamma = next;

            if (n >> i) & 1 == 1 {
                mod_sqr_k(&mut gamma, r * (1 << i));
                let mut with_delta = Poly::new(deg);
                mod_mul(&gamma, &delta_r, &mut with_delta);
                gamma = with_delta;
            }
        }
    }

    if h == 0 {
        ginv.copy_from(&gamma);
    } else {
        mod_sqr_k(&mut gamma, h);
        let mut delta = Poly::new(deg);
        mod_mul(&delta_h, &gamma, &mut delta);
        mod_sqr(&delta, ginv);
    }
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
        let mut rng = StdRng::seed_from_u64(13);
        let g = random_coprime_element(&mut rng);
        let mut ginv = Poly::new(CURRENT.p as i64 - 1);
        mod_inv_sac(&g, &mut ginv);
        let mut check = Poly::new(CURRENT.p as i64 - 1);
        mod_mul(&g, &ginv, &mut check);
        assert!(check.is_one());
    }
}
