//! Speed driver: times each algorithm over a single fixed input and prints
//! a five-number cycle-count summary.

use clap::Parser;
use gf2x_inv::bench::bench;
use gf2x_inv::inv::{mod_inv_byi, mod_inv_cea, mod_inv_flt, mod_inv_sac, mod_inv_tyt};
use gf2x_inv::params::CURRENT;
use gf2x_inv::poly::Poly;
use gf2x_inv::rand::random_coprime_element;
use rand::SeedableRng;
use rand::rngs::StdRng;

#[derive(Parser, Debug)]
#[command(about = "Time each inversion algorithm over a fixed input")]
struct Args {
    /// Number of timed iterations per algorithm.
    #[arg(short, long, default_value_t = 10)]
    num_tests: usize,

    /// Seed for the fixed input's RNG draw.
    #[arg(long, default_value_t = 42)]
    seed: u64,
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

    println!("Ext Deg | Poly Inv | Average (cc) | Median (cc)");
    println!("--------|----------|---------------|------------");

    let mut rng = StdRng::seed_from_u64(args.seed);
    let g = random_coprime_element(&mut rng);

    for (name, algo) in ALGORITHMS {
        let mut ginv = Poly::new(CURRENT.p as i64 - 1);
        let stats = bench(args.num_tests, || algo(&g, &mut ginv));
        println!(
            "{:7} | {:8} | {:13} | {:10}",
            CURRENT.p, name, stats.average, stats.median
        );
    }
}
