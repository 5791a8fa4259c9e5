//! Random element generation, including the "coprime to x^p - 1" variant
//! every correctness test and benchmark draws its input from.

use crate::params::CURRENT;
use crate::poly::Poly;
use rand::RngCore;

/// Fills a fresh degree-`deg` element with uniformly random bits, then forces
/// the top coefficient so the result always has exactly that degree.
#[must_use]
pub fn random<R: RngCore + ?Sized>(rng: &mut R, deg: i64) -> Poly {
    let mut p = Poly::new(deg);
    let active_size64 = ((deg + 1 + 63) / 64) as usize;
    for limb in &mut p.data_mut()[..active_size64] {
        *limb = rng.next_u64();
    }
    let tail_bits = ((deg + 1) & 0x3f) as u32;
    if tail_bits != 0 {
        let mask = (1u64 << tail_bits) - 1;
        p.data_mut()[active_size64 - 1] &= mask;
    }
    p.setcoef(deg as usize, 1);
    p
}

/// Draws a degree-`deg` element coprime to `x^p - 1`, i.e. with `g(1) != 0`:
/// an odd number of set coefficients. Evaluating at `x = 1` collapses to a
/// parity check, so an even-weight draw just needs its constant term
/// flipped to become coprime.
#[must_use]
pub fn random_coprime<R: RngCore + ?Sized>(rng: &mut R, deg: i64) -> Poly {
    let mut p = random(rng, deg);
    let weight_is_odd = p.data().iter().map(|limb| limb.count_ones()).sum::<u32>() % 2 == 1;
    if !weight_is_odd {
        p.data_mut()[0] ^= 1;
    }
    p
}

/// Draws a coprime element sized for the configured `EXT_DEG` ([`CURRENT`]).
#[must_use]
pub fn random_coprime_element<R: RngCore + ?Sized>(rng: &mut R) -> Poly {
    random_coprime(rng, CURRENT.p as i64 - 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn random_coprime_always_has_odd_weight() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let p = random_coprime_element(&mut rng);
            let weight: u32 = p.data().iter().map(|limb| limb.count_ones()).sum();
            assert_eq!(weight % 2, 1);
            assert_eq!(p.degree(), CURRENT.p as i64 - 1);
        }
    }
}
