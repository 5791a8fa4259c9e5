//! Per-prime parameter records (`ctx` in the original C).
//!
//! `EXT_DEG` is selected at build time through one of the mutually exclusive
//! `ext-*` Cargo features. Each arm below fixes `p` and the algorithm-specific
//! decompositions needed by CEA, TYT and SAC; BYI and FLT need nothing beyond
//! `p` itself.

/// Maximum number of `r_i` factors carried by [`Params::tyt_r`].
pub const TYT_MAX_K: usize = 2;

/// Maximum length of the SAC addition chain [`Params::sac_c`].
pub const SAC_MAX_C: usize = 13;

/// Immutable per-prime constant bundle consumed by every inverter.
///
/// Mirrors `ctx_t` from the reference implementation: one instance exists
/// per supported `EXT_DEG` and is selected wholesale at compile time.
#[derive(Debug, Clone, Copy)]
pub struct Params {
    /// The prime extension degree `p`, i.e. `R_p = F2[x] / (x^p - 1)`.
    pub p: u32,

    /// CEA factorisation: `cea_a * cea_b == p - 2`.
    pub cea_a: u32,
    pub cea_b: u32,

    /// TYT decomposition: `prod(tyt_r) + tyt_h == p - 2`, with `tyt_k` active
    /// entries in `tyt_r`.
    pub tyt_h: u32,
    pub tyt_k: usize,
    pub tyt_r: [u32; TYT_MAX_K],

    /// SAC decomposition: `sac_r * sac_n + sac_h == p - 2`, `sac_n` a power
    /// of two. `sac_c`/`sac_a` hold the addition chain and its parenthood
    /// table, `sac_h_idx` is the index of `sac_h` within `sac_c`.
    pub sac_r: u32,
    pub sac_n: u32,
    pub sac_h: u32,
    pub sac_h_idx: usize,
    pub sac_len_c: usize,
    pub sac_c: [u32; SAC_MAX_C],
    pub sac_a: [u32; 2 * SAC_MAX_C],
}

impl Params {
    /// Number of 64-bit limbs needed to hold a reduced element (`N` in the spec).
    #[must_use]
    pub const fn num_blocks(&self) -> usize {
        ((self.p as usize) + 63) / 64
    }

    /// Number of limbs needed for an unreduced double-size product (`M`).
    #[must_use]
    pub const fn max_poly_size(&self) -> usize {
        2 * self.num_blocks()
    }

    /// Debug-time sanity check of the decomposition invariants from the spec.
    ///
    /// Exercised by `tests/correctness.rs` for every supported `EXT_DEG`; not
    /// called on the hot path.
    pub fn assert_consistent(&self) {
        let r2 = self.p - 2;
        assert_eq!(self.cea_a * self.cea_b, r2, "CEA decomposition");

        let prod: u32 = self.tyt_r[..self.tyt_k].iter().product();
        assert_eq!(prod + self.tyt_h, r2, "TYT decomposition");

        assert_eq!(self.sac_r * self.sac_n + self.sac_h, r2, "SAC decomposition");
        assert!(self.sac_n.is_power_of_two(), "SAC n must be a power of two");

        assert_eq!(self.sac_c[0], 1, "SAC chain must start at 1");
        assert_eq!(
            self.sac_c[self.sac_len_c - 1],
            self.sac_r,
            "SAC chain must end at sac_r"
        );
        assert_eq!(self.sac_c[self.sac_h_idx], self.sac_h, "sac_h_idx mismatch");
        for i in 1..self.sac_len_c {
            let i1 = self.sac_a[2 * i - 2] as usize;
            let i2 = self.sac_a[2 * i - 1] as usize;
            assert_eq!(
                self.sac_c[i1] + self.sac_c[i2],
                self.sac_c[i],
                "SAC chain ill-formed at index {i}"
            );
        }
    }
}

macro_rules! select_params {
    ($($feat:literal => $name:ident),+ $(,)?) => {
        const _ASSERT_EXACTLY_ONE_EXT_DEG: () = {
            let count = 0 $(+ cfg!(feature = $feat) as u32)+;
            assert!(count == 1, "exactly one ext-* feature must be enabled");
        };
        $(
            #[cfg(feature = $feat)]
            pub const CURRENT: Params = $name::PARAMS;
        )+
    };
}

select_params! {
    "ext-10499" => p10499,
    "ext-12323" => p12323,
    "ext-24659" => p24659,
    "ext-24781" => p24781,
    "ext-27067" => p27067,
    "ext-27581" => p27581,
    "ext-40973" => p40973,
}

mod p10499 {
    use super::Params;
    pub const PARAMS: Params = Params {
        p: 10499,
        cea_a: 3,
        cea_b: 3499,
        tyt_h: 1,
        tyt_k: 2,
        tyt_r: [41, 256],
        sac_r: 41,
        sac_n: 256,
        sac_h: 1,
        sac_h_idx: 0,
        sac_len_c: 8,
        sac_c: [1, 2, 3, 5, 10, 20, 40, 41, 0, 0, 0, 0, 0],
        sac_a: [
            0, 0, 0, 1, 1, 2, 3, 3, 4, 4, 5, 5, 0, 6, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        ],
    };
}

/// BIKE's prime.
mod p12323 {
    use super::Params;
    pub const PARAMS: Params = Params {
        p: 12323,
        cea_a: 9,
        cea_b: 1369,
        tyt_h: 32,
        tyt_k: 1,
        tyt_r: [12289, 0],
        sac_r: 48,
        sac_n: 1 << 8,
        sac_h: 33,
        sac_h_idx: 6,
        sac_len_c: 8,
        sac_c: [1, 2, 4, 8, 16, 32, 33, 48, 0, 0, 0, 0, 0],
        sac_a: [
            0, 0, 1, 1, 2, 2, 3, 3, 4, 4, 0, 5, 4, 5, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        ],
    };
}

/// BIKE's prime.
mod p24659 {
    use super::Params;
    pub const PARAMS: Params = Params {
        p: 24659,
        cea_a: 3,
        cea_b: 8219,
        tyt_h: 4097,
        tyt_k: 2,
        tyt_r: [4112, 5],
        sac_r: 96,
        sac_n: 1 << 8,
        sac_h: 81,
        sac_h_idx: 9,
        sac_len_c: 11,
        sac_c: [1, 2, 3, 6, 9, 12, 24, 33, 48, 81, 96, 0, 0],
        sac_a: [
            0, 0, 0, 1, 2, 2, 2, 3, 2, 4, 5, 5, 4, 6, 6, 6, 7, 8, 8, 8, 0, 0, 0, 0, 0, 0,
        ],
    };
}

mod p24781 {
    use super::Params;
    pub const PARAMS: Params = Params {
        p: 24781,
        cea_a: 71,
        cea_b: 349,
        tyt_h: 8,
        tyt_k: 2,
        tyt_r: [8257, 3],
        sac_r: 193,
        sac_n: 128,
        sac_h: 75,
        sac_h_idx: 8,
        sac_len_c: 12,
        sac_c: [1, 2, 3, 6, 12, 24, 48, 72, 75, 96, 192, 193, 0],
        sac_a: [
            0, 0, 0, 1, 2, 2, 3, 3, 4, 4, 5, 5, 5, 6, 2, 7, 6, 6, 9, 9, 0, 10, 0, 0, 0, 0,
        ],
    };
}

mod p27067 {
    use super::Params;
    pub const PARAMS: Params = Params {
        p: 27067,
        cea_a: 5,
        cea_b: 5413,
        tyt_h: 64,
        tyt_k: 2,
        tyt_r: [67, 403],
        sac_r: 211,
        sac_n: 128,
        sac_h: 57,
        sac_h_idx: 9,
        sac_len_c: 13,
        sac_c: [1, 2, 3, 5, 6, 12, 13, 26, 52, 57, 104, 208, 211],
        sac_a: [
            0, 0, 0, 1, 1, 2, 2, 2, 4, 4, 0, 5, 6, 6, 7, 7, 3, 8, 8, 8, 10, 10, 2, 11, 0, 0,
        ],
    };
}

mod p27581 {
    use super::Params;
    pub const PARAMS: Params = Params {
        p: 27581,
        cea_a: 3,
        cea_b: 9193,
        tyt_h: 32,
        tyt_k: 2,
        tyt_r: [163, 169],
        sac_r: 215,
        sac_n: 128,
        sac_h: 59,
        sac_h_idx: 9,
        sac_len_c: 13,
        sac_c: [1, 2, 3, 6, 7, 12, 13, 26, 52, 59, 104, 208, 215],
        sac_a: [
            0, 0, 0, 1, 2, 2, 0, 3, 3, 3, 0, 5, 6, 6, 7, 7, 4, 8, 8, 8, 10, 10, 4, 11, 0, 0,
        ],
    };
}

/// BIKE's prime.
mod p40973 {
    use super::Params;
    pub const PARAMS: Params = Params {
        p: 40973,
        cea_a: 3,
        cea_b: 13657,
        tyt_h: 1,
        tyt_k: 2,
        tyt_r: [10, 4097],
        sac_r: 20,
        sac_n: 2048,
        sac_h: 11,
        sac_h_idx: 5,
        sac_len_c: 7,
        sac_c: [1, 2, 3, 5, 10, 11, 20, 0, 0, 0, 0, 0, 0],
        sac_a: [
            0, 0, 0, 1, 1, 2, 3, 3, 0, 4, 4, 4, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        ],
    };
}

#[cfg(test)]
mod tests {
    // Every arm is checked against the invariants from the spec, not just
    // the feature-selected `CURRENT` one: ctx tables are supposed to hold
    // for every supported EXT_DEG regardless of which one a given build
    // picked.
    use super::*;

    #[test]
    fn all_tables_are_consistent() {
        p10499::PARAMS.assert_consistent();
        p12323::PARAMS.assert_consistent();
        p24659::PARAMS.assert_consistent();
        p24781::PARAMS.assert_consistent();
        p27067::PARAMS.assert_consistent();
        p27581::PARAMS.assert_consistent();
        p40973::PARAMS.assert_consistent();
    }

    #[test]
    fn current_matches_selected_feature() {
        CURRENT.assert_consistent();
    }
}
