//! Hex dumping of [`Poly`] limbs, for the CLI drivers and ad-hoc debugging.
//!
//! Four layouts are supported, mirroring the reference printer's
//! `POLY_PRINT_PAD_TYPE` choices: zero-padded or dot-padded hex, each in a
//! full or "short" (top 8 limbs only) variant.

use crate::poly::Poly;
use core::fmt::{self, Write as _};

/// Limb count after which [`Style::ShortZeroPadded`]/[`Style::ShortDotPadded`]
/// start truncating.
const SHORT_LIMBS: usize = 8;

/// How many limbs to print per line.
const LIMBS_PER_LINE: usize = 4;

/// Selects one of the four hex-dump layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    /// Every limb, zero-padded to 16 hex digits.
    ZeroPadded,
    /// Every limb, dot-padded to 16 hex digits (leading zeros shown as `.`).
    DotPadded,
    /// The top 8 limbs only, zero-padded.
    ShortZeroPadded,
    /// The top 8 limbs only, dot-padded.
    ShortDotPadded,
}

/// Writes `name (size64) = \n<limbs>` to `out` in the given [`Style`],
/// highest limb first, `LIMBS_PER_LINE` limbs per line.
pub fn write_poly(out: &mut impl fmt::Write, name: &str, p: &Poly, style: Style) -> fmt::Result {
    writeln!(out, "{name} ({:05}) = ", p.size64())?;

    let lowest = match style {
        Style::ZeroPadded | Style::DotPadded => 0,
        Style::ShortZeroPadded | Style::ShortDotPadded => p.size64().saturating_sub(SHORT_LIMBS),
    };

    let mut printed = 0usize;
    for i in (lowest..p.size64()).rev() {
        match style {
            Style::ZeroPadded | Style::ShortZeroPadded => write!(out, "{:016x} ", p.data()[i])?,
            Style::DotPadded | Style::ShortDotPadded => write_dot_padded(out, p.data()[i])?,
        }
        printed += 1;
        if printed % LIMBS_PER_LINE == 0 {
            writeln!(out)?;
        }
    }
    writeln!(out)?;
    writeln!(out)
}

fn write_dot_padded(out: &mut impl fmt::Write, limb: u64) -> fmt::Result {
    let mut buf = String::new();
    write!(buf, "{limb:x}").expect("writing to a String cannot fail");
    let padding = 16 - buf.len();
    for _ in 0..padding {
        out.write_char('.')?;
    }
    out.write_str(&buf)?;
    out.write_char(' ')
}

/// Renders `p` using [`Style::DotPadded`] and returns the result as a
/// `String`, for call sites that just want a one-off label.
#[must_use]
pub fn to_string(name: &str, p: &Poly, style: Style) -> String {
    let mut s = String::new();
    write_poly(&mut s, name, p, style).expect("writing to a String cannot fail");
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_padded_has_fixed_width() {
        let p = Poly::new(127);
        let out = to_string("g", &p, Style::ZeroPadded);
        assert!(out.contains("0000000000000000"));
    }

    #[test]
    fn short_style_caps_at_eight_limbs() {
        let p = Poly::new(1023);
        let out = to_string("g", &p, Style::ShortDotPadded);
        let limb_count = out.split_whitespace().filter(|tok| tok.len() <= 16 && !tok.contains('=')).count();
        assert!(limb_count <= SHORT_LIMBS);
    }
}
