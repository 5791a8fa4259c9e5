//! Correctness driver: inverts random coprime elements with every algorithm
//! and checks `g * g^-1 == 1`.

use clap::Parser;
use gf2x_inv::inv::{mod_inv_byi, mod_inv_cea, mod_inv_flt, mod_inv_sac, mod_inv_tyt};
use gf2x_inv::params::CURRENT;
use gf2x_inv::poly::Poly;
use gf2x_inv::rand::random_coprime_element;
use gf2x_inv::ring::mod_mul;
use rand::SeedableRng;
use rand::rngs::StdRng;

#[derive(Parser, Debug)]
#[command(about = "Check that every inversion algorithm round-trips on random input")]
struct Args {
    /// Number of random trials per algorithm.
    #[arg(short, long, default_value_t = 10)]
    num_tests: u32,

    /// Seed the RNG for a reproducible run instead of drawing fresh entropy.
    #[arg(long)]
    seed: Option<u64>,
}

type Algo = (&'static str, fn(&Poly, &mut Poly));

const ALGORITHMS: &[Algo] = &[
    ("BYI", mod_inv_byi),
    ("FLT", mod_inv_flt),
    ("CEA", mod_inv_cea),
    ("TYT", mod_inv_tyt),
    ("SAC", mod_inv_sac),
];

fn main() {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    println!("Testing Inversion:");
    println!("- EXT_DEG        : {}", CURRENT.p);
    println!("- NUM_BLOCKS     : {}", CURRENT.num_blocks());
    println!("- MAX_POLY_SIZE  : {}", CURRENT.max_poly_size());
    println!("- NUM_TESTS      : {}", args.num_tests);
    println!();

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    for (name, algo) in ALGORITHMS {
        let mut correct = 0u32;
        for trial in 0..args.num_tests {
            let g = random_coprime_element(&mut rng);
            let mut ginv = Poly::new(CURRENT.p as i64 - 1);
            algo(&g, &mut ginv);

            let mut check = Poly::new(CURRENT.p as i64 - 1);
            mod_mul(&g, &ginv, &mut check);
            if check.is_one() {
                correct += 1;
            } else {
                tracing::warn!(algorithm = name, trial, "inversion check failed");
            }
        }
        println!("{name}: {correct}/{} correct", args.num_tests);
    }
}
