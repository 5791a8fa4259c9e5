//! The five independent inversion algorithms, each computing
//! `ginv = g^-1 mod (x^p - 1)` from a `g` known to be coprime to `x^p - 1`.
//!
//! All five are always built in; callers pick whichever fits their
//! size/speed tradeoff rather than the library enforcing one at compile
//! time.

mod byi;
mod cea;
mod flt;
mod sac;
mod tyt;

pub use byi::mod_inv_byi;
pub use cea::mod_inv_cea;
pub use flt::mod_inv_flt;
pub use sac::mod_inv_sac;
pub use tyt::mod_inv_tyt;
