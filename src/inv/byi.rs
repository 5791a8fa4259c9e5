//! BYI -- inversion via a Bernstein-Yang-style jump-divstep schedule carried
//! out over fractional F2\[x\] coefficients.
//!
//! The schedule recursively splits an `n`-step divstep run into two halves at
//! the largest power of two strictly below `n`, solves each half, and
//! composes the resulting 2x2 transition matrices. The reference
//! implementation materialises this recursion as an explicit tree of
//! heap-allocated nodes that are deliberately never freed (each level's
//! workspace outlives the call that produced it, by design). Here the same
//! schedule is plain recursive function calls: each level's `(f, g, matrix)`
//! workspace lives on the Rust call stack and is dropped the moment that
//! call returns, which is the natural replacement for a free-list no
//! language without manual memory management would ever need.

use crate::params::CURRENT;
use crate::poly::Poly;
use crate::ring::{poly_add_blockshift, poly_mul, poly_right_shift, reverse};

/// A 2x2 matrix of F2\[x\] polynomials, implicitly scaled by `x^(-64*denom)`:
/// applying it to a column `(f, g)` means computing the raw matrix-vector
/// product and then block-shifting the result right by `denom` limbs.
struct PolyMat {
    denom: usize,
    p0: Poly,
    p1: Poly,
    p2: Poly,
    p3: Poly,
}

impl PolyMat {
    fn leaf(limbs: [u64; 4]) -> Self {
        let mut mat = PolyMat {
            denom: 1,
            p0: Poly::with_size64(63, 1),
            p1: Poly::with_size64(63, 1),
            p2: Poly::with_size64(63, 1),
            p3: Poly::with_size64(63, 1),
        };
        mat.p0.data_mut()[0] = limbs[0];
        mat.p1.data_mut()[0] = limbs[1];
        mat.p2.data_mut()[0] = limbs[2];
        mat.p3.data_mut()[0] = limbs[3];
        mat
    }
}

/// Largest power of two strictly less than `x`.
fn maxpow2(x: u32) -> u32 {
    let mut n = 1u32;
    while x > n {
        n <<= 1;
    }
    n >> 1
}

/// Left-multiplies the column `(f, g)` by `mat` in place, then block-shifts
/// the raw product down by `mat.denom` limbs (dividing out the matrix's
/// implicit denominator).
fn mat_poly_mul(mat: &PolyMat, f: &mut Poly, g: &mut Poly) {
    let s64 = mat.p0.size64();
    let sizet = s64 + f.size64();

    let mut t0 = Poly::with_size64(64 * sizet as i64 - 1, sizet);
    let mut t1 = Poly::with_size64(64 * sizet as i64 - 1, sizet);
    let mut t2 = Poly::with_size64(64 * sizet as i64 - 1, sizet);
    let mut t3 = Poly::with_size64(64 * sizet as i64 - 1, sizet);

    poly_mul(&mat.p0, f, &mut t0);
    poly_mul(&mat.p1, g, &mut t1);
    poly_mul(&mat.p2, f, &mut t2);
    poly_mul(&mat.p3, g, &mut t3);

    let mut fo = Poly::with_size64(f.deg_cap(), f.size64());
    let mut go = Poly::with_size64(g.deg_cap(), g.size64());
    poly_add_blockshift(&t0, &t1, mat.denom, &mut fo);
    poly_add_blockshift(&t2, &t3, mat.denom, &mut go);
    *f = fo;
    *g = go;
}

/// Composes two matrices: the parent's transition is `left`'s run followed
/// by `right`'s, i.e. `right * left` as linear maps.
fn mat_mat_mul(left: &PolyMat, right: &PolyMat) -> PolyMat {
    let sizet = left.p0.size64() + right.p0.size64();
    let denom = sizet;

    let mul_pair = |a0: &Poly, b0: &Poly, a1: &Poly, b1: &Poly| -> Poly {
        let mut t0 = Poly::with_size64(64 * sizet as i64 - 1, sizet);
        let mut t1 = Poly::with_size64(64 * sizet as i64 - 1, sizet);
        poly_mul(a0, b0, &mut t0);
        poly_mul(a1, b1, &mut t1);
        let mut out = Poly::with_size64(64 * sizet as i64 - 1, sizet);
        poly_add_blockshift(&t0, &t1, 0, &mut out);
        out
    };

    PolyMat {
        denom,
        p0: mul_pair(&right.p0, &left.p0, &right.p1, &left.p2),
        p1: mul_pair(&right.p0, &left.p1, &right.p1, &left.p3),
        p2: mul_pair(&right.p2, &left.p0, &right.p3, &left.p2),
        p3: mul_pair(&right.p2, &left.p1, &right.p3, &left.p3),
    }
}

/// The dense divstep core over a single 64-bit limb pair, run for `n` steps.
/// Returns the updated `delta` and the 2x2 transition matrix's four limbs.
fn divstepx_64(n: u32, delta: i32, f0: u64, g0: u64) -> (i32, [u64; 4]) {
    let mut ff = f0;
    let mut gg = g0;
    let mut dd = delta;

    let mut mask: u64 = if n == 64 { u64::MAX } else { (1u64 << n) - 1 };

    let mut u_num = 1u64;
    let mut u_den = 0u32;
    let mut v_num = 0u64;
    let mut v_den = 0u32;
    let mut q_num = 0u64;
    let mut q_den = 0u32;
    let mut r_num = 1u64;
    let mut r_den = 0u32;

    for _ in 0..n {
        ff &= mask;

        if dd > 0 && (gg & 1) == 1 {
            dd = -dd;
            core::mem::swap(&mut ff, &mut gg);
            core::mem::swap(&mut u_num, &mut q_num);
            core::mem::swap(&mut u_den, &mut q_den);
            core::mem::swap(&mut v_num, &mut r_num);
            core::mem::swap(&mut v_den, &mut r_den);
        }

        let mask_f0 = 0u64.wrapping_sub(ff & 1);
        let mask_g0 = 0u64.wrapping_sub(gg & 1);

        dd += 1;

        gg = (mask_f0 & gg) ^ (mask_g0 & ff);
        gg >>= 1;

        let qden_max = u_den.max(q_den);
        q_num = ((mask_f0 & q_num) << (qden_max - q_den)) ^ ((mask_g0 & u_num) << (qden_max - u_den));
        q_den = qden_max + 1;

        let rden_max = r_den.max(v_den);
        r_num = ((mask_f0 & r_num) << (rden_max - r_den)) ^ ((mask_g0 & v_num) << (rden_max - v_den));
        r_den = rden_max + 1;

        mask >>= 1;
        gg &= mask;
    }

    let shift_out = 64 - n;
    let p0 = (u_num << (n - u_den)) << shift_out;
    let p1 = (v_num << (n - v_den)) << shift_out;
    let p2 = (q_num << (n - q_den)) << shift_out;
    let p3 = (r_num << (n - r_den)) << shift_out;

    (dd, [p0, p1, p2, p3])
}

/// Recursively solves an `n`-step jump-divstep run starting from `delta`,
/// mutating `f`/`g` in place to their post-run values and returning the
/// updated `delta` alongside the run's transition matrix.
fn jumpdivstepx(n: u32, delta: i32, f: &mut Poly, g: &mut Poly) -> (i32, PolyMat) {
    if n <= 64 {
        let (new_delta, limbs) = divstepx_64(n, delta, f.data()[0], g.data()[0]);
        return (new_delta, PolyMat::leaf(limbs));
    }

    let j = maxpow2(n);

    let (delta_left, mat_left) = jumpdivstepx(j, delta, f, g);
    mat_poly_mul(&mat_left, f, g);
    let trunc_size = ((n - j + 63) / 64) as usize;
    f.truncate_limbs(trunc_size);
    g.truncate_limbs(trunc_size);

    let (delta_right, mat_right) = jumpdivstepx(n - j, delta_left, f, g);
    mat_poly_mul(&mat_right, f, g);

    let mat = mat_mat_mul(&mat_left, &mat_right);
    (delta_right, mat)
}

/// Computes `ginv = g^-1 mod (x^p - 1)` via the jump-divstep schedule.
pub fn mod_inv_byi(g: &Poly, ginv: &mut Poly) {
    let d = CURRENT.p as i64;

    let mut f_rev = Poly::new(d);
    f_rev.setcoef(d as usize, 1);
    f_rev.setcoef(0, 1);

    let mut g_rev = Poly::new(g.deg_cap());
    reverse(g, &mut g_rev, d - 1);

    let n_total = (2 * d - 1) as u32;
    let (_delta, mat) = jumpdivstepx(n_total, 1, &mut f_rev, &mut g_rev);

    let shift = 64 * mat.denom as i64 - (2 * d - 2);
    let mut p1 = mat.p1;
    poly_right_shift(&mut p1, shift as u32);

    reverse(&p1, ginv, d - 1);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rand::random_coprime_element;
    use crate::ring::mod_mul;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn maxpow2_is_strictly_less_than_input() {
        assert_eq!(maxpow2(5), 4);
        assert_eq!(maxpow2(64), 32);
        assert_eq!(maxpow2(65), 64);
        assert_eq!(maxpow2(2), 1);
    }

    #[test]
    fn inverts_a_random_coprime_element() {
        let mut rng = StdRng::seed_from_u64(99);
        let g = random_coprime_element(&mut rng);
        let mut ginv = Poly::new(CURRENT.p as i64 - 1);
        mod_inv_byi(&g, &mut ginv);
        let mut check = Poly::new(CURRENT.p as i64 - 1);
        mod_mul(&g, &ginv, &mut check);
        assert!(check.is_one());
    }
}
