//! Runtime CPU-feature detection for the hardware carry-less-multiplication
//! backends, one-time-checked and cached via `cpufeatures`.

#[cfg(target_arch = "aarch64")]
cpufeatures::new!(detect_clmul, "aes"); // `aes` implies PMULL on aarch64
#[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
cpufeatures::new!(detect_clmul, "pclmulqdq");

pub(crate) use detect_clmul::{InitToken, init as init_clmul};
