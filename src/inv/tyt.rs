//! TYT -- Itoh-Tsujii-style inversion over the decomposition
//! `p - 2 = r_0 * r_1 * ... * r_(k-1) + h`.
//!
//! An addition-chain table `F[i] = g^(2^i - 1)` is built once per factor
//! `r_j` (rescaled by the product `N` of the factors already folded in), and
//! `delta`/`gamma` are assembled from that table by square-and-multiply over
//! the bits of `r_j`/`h` respectively.

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

/// Computes `ginv = g^-1 mod (x^p - 1)` via the TYT chain.
pub fn mod_inv_tyt(g: &Poly, ginv: &mut Poly) {
    let p = CURRENT.p;
    let h = CURRENT.tyt_h;
    let k = CURRENT.tyt_k;
    let r = &CURRENT.tyt_r[..k];

    debug_assert_eq!(r.iter().product::<u32>() + h, p - 2, "TYT decomposition");

    let q: Vec<u32> = r.iter().map(|&ri| bitlength(ri)).collect();
    let max_q = *q.iter().max().expect("tyt_k must be at least 1");
    let t = bitlength(h);

    let deg = p as i64 - 1;
    let mut f: Vec<Poly> = (0..max_q).map(|_| Poly::new(deg)).collect();
    f[0].copy_from(g);

    build_chain(&mut f, q[0], 1);

    let mut delta = f[(q[0] - 1) as usize].clone();
    square_and_multiply(&mut delta, &f, r[0], q[0], 1);

    let mut gamma = f[(t - 1) as usize].clone();
    square_and_multiply(&mut gamma, &f, h, t, 1);

    let mut n = r[0];
    f[0].copy_from(&delta);
    for j in 1..k {
        build_chain(&mut f, q[j], n);

        delta.copy_from(&f[(q[j] - 1) as usize]);
        square_and_multiply(&mut delta, &f, r[j], q[j], n);

        f[0].copy_from(&delta);
        n *= r[j];
    }

    mod_sqr_k(&mut gamma, p - 2 - h);
    let mut gd = Poly::new(deg);
    mod_mul(&gamma, &delta, &mut gd);
    mod_sqr(&gd, ginv);
}

/// `F[i] <- F[i-1]^(2^(scale*2^(i-1))) * F[i-1]` for `i` in `1..qi`, i.e. the
/// Itoh-Tsujii doubling chain `F[i] = F[0]^(2^(scale*i) - scale... )` rescaled
/// by `scale` (the product of previously folded-in factors).
fn build_chain(f: &mut [Poly], qi: u32, scale: u32) {
    for i in 1..qi as usize {
        f[i].copy_from(&f[i - 1]);
        mod_sqr_k(&mut f[i], scale * (1 << (i - 1)));
        let prev = f[i - 1].clone();
        let mut next = Poly::new(f[i].deg_cap());
        mod_mul(&f[i], &prev, &mut next);
        f[i] = next;
    }
}

/// Folds the bits of `value` (below its top, already-accounted bit) into
/// `acc` using table `f`, each squaring step scaled by `scale`.
fn square_and_multiply(acc: &mut Poly, f: &[Poly], value: u32, bitlen: u32, scale: u32) {
    if bitlen < 2 {
        return;
    }
    for i in (0..=bitlen - 2).rev() {
        if (value >> i) & 1 == 1 {
            mod_sqr_k(acc, scale * (1 << i));
            let mut next = Poly::new(acc.deg_cap());
            mod_mul(acc, &f[i as usize], &mut next);
            *acc = next;
        }
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
        let mut rng = StdRng::seed_from_u64(11);
        let g = random_coprime_element(&mut rng);
        let mut ginv = Poly::new(CURRENT.p as i64 - 1);
        mod_inv_tyt(&g, &mut ginv);
        let mut check = Poly::new(CURRENT.p as i64 - 1);
        mod_mul(&g, &ginv, &mut check);
        assert!(check.is_one());
    }
}
