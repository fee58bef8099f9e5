//! Emit strategies for exercises.
//!
//! Every exercise is rendered through an [EmitFormat][EmitFormat]. The format decides the concrete
//! markup of powers, fractions, radicals and display delimiters; the rules for signs, elided
//! coefficients and term order are shared by all formats.

use crate::math::{Fraction, Poly, Radical, Term};
use crate::Error;

use core::fmt;
use std::str::FromStr;

#[cfg(feature = "serde-serialize")]
use serde::{Deserialize, Serialize};

/// The format in which an exercise should be emitted.
#[cfg_attr(
    feature = "serde-serialize",
    derive(Serialize, Deserialize),
    serde(rename_all = "lowercase")
)]
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum EmitFormat {
    /// LaTeX math markup, for a MathJax-style renderer.
    /// For example, `2x^2 - 1/2` is output as `2x^2-\frac{1}{2}`, and a whole question or answer is
    /// wrapped in display math delimiters `$$ … $$`.
    Latex,
    /// Plain text with Unicode superscripts and radicals.
    /// For example, `2x^2 - 1/2` is output as `2x²-1/2`.
    Pretty,
}

impl Default for EmitFormat {
    fn default() -> Self {
        Self::Latex
    }
}

impl FromStr for EmitFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "latex" => Ok(Self::Latex),
            "pretty" => Ok(Self::Pretty),
            _ => Err(Error::UnknownEmitFormat(s.to_owned())),
        }
    }
}

impl EmitFormat {
    /// Wraps a question or answer body as display math.
    pub fn display_math(self, body: &str) -> String {
        match self {
            Self::Latex => format!("$$ {} $$", body),
            Self::Pretty => body.to_owned(),
        }
    }

    /// `base` raised to `exp`. The base is emitted as given.
    pub fn power(self, base: &str, exp: u32) -> String {
        match (self, exp) {
            (_, 1) => base.to_owned(),
            (Self::Latex, 0..=9) => format!("{}^{}", base, exp),
            (Self::Latex, _) => format!("{}^{{{}}}", base, exp),
            (Self::Pretty, _) => format!("{}{}", base, superscript(exp)),
        }
    }

    /// A fraction with an already-emitted numerator and denominator.
    pub fn frac(self, num: &str, den: &str) -> String {
        match self {
            Self::Latex => format!("\\frac{{{}}}{{{}}}", num, den),
            Self::Pretty => format!("{}/{}", num, den),
        }
    }

    /// The square root of `radicand`.
    pub fn sqrt(self, radicand: u64) -> String {
        match self {
            Self::Latex => format!("\\sqrt{{{}}}", radicand),
            Self::Pretty => format!("√{}", radicand),
        }
    }

    pub fn plus_minus(self) -> &'static str {
        match self {
            Self::Latex => "\\pm",
            Self::Pretty => "±",
        }
    }

    /// Separates the elements of a list of values, like two roots of an equation.
    pub fn list_separator(self) -> &'static str {
        match self {
            Self::Latex => ", \\; ",
            Self::Pretty => ", ",
        }
    }

    /// An angle in degrees.
    pub fn degrees(self, angle: u16) -> String {
        match self {
            Self::Latex => format!("{}^\\circ", angle),
            Self::Pretty => format!("{}°", angle),
        }
    }
}

fn superscript(n: u32) -> String {
    const DIGITS: [char; 10] = ['⁰', '¹', '²', '³', '⁴', '⁵', '⁶', '⁷', '⁸', '⁹'];
    n.to_string()
        .chars()
        .filter_map(|c| c.to_digit(10))
        .map(|d| DIGITS[d as usize])
        .collect()
}

/// Implements the emission of a type in an [EmitFormat][EmitFormat].
pub trait Emit
where
    // These are trivially implementable using `emit_pretty` and `Debug`. The easiest way to
    // do this is with the `fmt_emit_impl` macro.
    Self: fmt::Display + fmt::Debug,
{
    /// Emit `self` with the given [EmitFormat][EmitFormat].
    fn emit(&self, form: EmitFormat) -> String {
        match form {
            EmitFormat::Latex => self.emit_latex(),
            EmitFormat::Pretty => self.emit_pretty(),
        }
    }

    /// Emit `self` with the [pretty emit format][EmitFormat::Pretty]
    fn emit_pretty(&self) -> String;

    /// Emit `self` with the [LaTeX emit format][EmitFormat::Latex]
    fn emit_latex(&self) -> String;
}

/// Implements `core::fmt::Display` for a type implementing `Emit`.
#[doc(hidden)]
macro_rules! fmt_emit_impl {
    ($S:path) => {
        impl core::fmt::Display for $S {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "{}", self.emit_pretty(),)
            }
        }
    };
}

impl Term {
    /// Emits the term as part of a sum.
    ///
    /// - A zero coefficient emits nothing, so the term vanishes from the sum.
    /// - A negative term is prefixed with `-`; a positive one with `+` unless it is `leading`.
    /// - A magnitude of 1 is elided on a non-constant term, so `1x` reads as `x`.
    pub fn emit_with(&self, form: EmitFormat, leading: bool) -> String {
        if self.coeff == 0 {
            return String::new();
        }
        let sign = if self.coeff < 0 {
            "-"
        } else if leading {
            ""
        } else {
            "+"
        };
        let magnitude = self.coeff.unsigned_abs();
        let variable = match self.pow {
            0 => String::new(),
            pow => form.power(&self.var.symbol().to_string(), pow),
        };
        if magnitude == 1 && !variable.is_empty() {
            format!("{}{}", sign, variable)
        } else {
            format!("{}{}{}", sign, magnitude, variable)
        }
    }
}

fmt_emit_impl!(Term);
impl Emit for Term {
    fn emit_pretty(&self) -> String {
        self.emit_with(EmitFormat::Pretty, true)
    }

    fn emit_latex(&self) -> String {
        self.emit_with(EmitFormat::Latex, true)
    }
}

fn emit_poly(poly: &Poly, form: EmitFormat) -> String {
    let mut result = String::with_capacity(32);
    for term in poly.terms() {
        let leading = result.is_empty();
        result.push_str(&term.emit_with(form, leading));
    }
    if result.is_empty() {
        result.push('0');
    }
    result
}

fmt_emit_impl!(Poly);
impl Emit for Poly {
    fn emit_pretty(&self) -> String {
        emit_poly(self, EmitFormat::Pretty)
    }

    fn emit_latex(&self) -> String {
        emit_poly(self, EmitFormat::Latex)
    }
}

impl Fraction {
    /// Emits the fraction as a non-leading part of a sum, with an explicit `+` or `-`.
    pub fn emit_signed(&self, form: EmitFormat) -> String {
        if self.is_negative() {
            self.emit(form)
        } else {
            format!("+{}", self.emit(form))
        }
    }
}

fn emit_fraction(frac: &Fraction, form: EmitFormat) -> String {
    let sign = if frac.is_negative() { "-" } else { "" };
    let num = frac.numer().unsigned_abs().to_string();
    if frac.is_integer() {
        format!("{}{}", sign, num)
    } else {
        format!("{}{}", sign, form.frac(&num, &frac.denom().to_string()))
    }
}

fmt_emit_impl!(Fraction);
impl Emit for Fraction {
    fn emit_pretty(&self) -> String {
        emit_fraction(self, EmitFormat::Pretty)
    }

    fn emit_latex(&self) -> String {
        emit_fraction(self, EmitFormat::Latex)
    }
}

fn emit_radical(radical: &Radical, form: EmitFormat) -> String {
    match (radical.outside, radical.inside) {
        (0, _) => "0".to_owned(),
        (outside, 1) => outside.to_string(),
        (1, inside) => form.sqrt(inside),
        (outside, inside) => format!("{}{}", outside, form.sqrt(inside)),
    }
}

fmt_emit_impl!(Radical);
impl Emit for Radical {
    fn emit_pretty(&self) -> String {
        emit_radical(self, EmitFormat::Pretty)
    }

    fn emit_latex(&self) -> String {
        emit_radical(self, EmitFormat::Latex)
    }
}
