//! Count driver: one deterministic (seed-42) inversion per algorithm,
//! reporting how many ring-level multiplications/squarings each performs.

use gf2x_inv::inv::{mod_inv_byi, mod_inv_cea, mod_inv_flt, mod_inv_sac, mod_inv_tyt};
use gf2x_inv::params::CURRENT;
use gf2x_inv::poly::Poly;
use gf2x_inv::rand::random_coprime_element;
use gf2x_inv::ring::{counts, reset_counts};
use rand::SeedableRng;
use rand::rngs::StdRng;

type Algo = (&'static str, fn(&Poly, &mut Poly));

const ALGORITHMS: &[Algo] = &[
    ("BYI", mod_inv_byi),
    ("FLT", mod_inv_flt),
    ("CEA", mod_inv_cea),
    ("TYT", mod_inv_tyt),
    ("SAC", mod_inv_sac),
];

fn main() {
    println!("Testing Count:");
    println!("- EXT_DEG       : {}", CURRENT.p);
    println!("- NUM_BLOCKS    : {}", CURRENT.num_blocks());
    println!("- MAX_POLY_SIZE : {}", CURRENT.max_poly_size());
    println!();

    let mut rng = StdRng::seed_from_u64(42);
    let g = random_coprime_element(&mut rng);

    for (name, algo) in ALGORITHMS {
        reset_counts();
        let mut ginv = Poly::new(CURRENT.p as i64 - 1);
        algo(&g, &mut ginv);
        let c = counts();
        println!(
            "{name}: mod_mul={}, mod_sqr={}, mod_sqr_k_steps={}",
            c.mod_mul, c.mod_sqr, c.mod_sqr_k_steps
        );
    }
}
