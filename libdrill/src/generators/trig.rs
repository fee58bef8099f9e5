use super::Exercise;
use crate::emit::{Emit, EmitFormat};
use crate::math::Radical;

use rand::seq::SliceRandom;
use rand::Rng;

/// A trigonometric function with exact values at the standard angles.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum TrigFn {
    Sin,
    Cos,
    Tan,
}

impl TrigFn {
    pub const ALL: [TrigFn; 3] = [TrigFn::Sin, TrigFn::Cos, TrigFn::Tan];

    pub fn name(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
        }
    }
}

/// The angles, in degrees, asked about.
pub const ANGLES: [u16; 7] = [30, 45, 60, 120, 135, 150, 180];

/// An exact value `±num/den` where both parts are radicals, like `-√3/2` or `1/√2`.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct ExactValue {
    pub negative: bool,
    pub num: Radical,
    pub den: Radical,
}

const fn rad(outside: u64, inside: u64) -> Radical {
    Radical { outside, inside }
}

const fn value(negative: bool, num: Radical, den: Radical) -> ExactValue {
    ExactValue { negative, num, den }
}

const ZERO: ExactValue = value(false, rad(0, 1), rad(1, 1));
const ONE: ExactValue = value(false, rad(1, 1), rad(1, 1));
const HALF: ExactValue = value(false, rad(1, 1), rad(2, 1));
const INV_ROOT_2: ExactValue = value(false, rad(1, 1), rad(1, 2));
const HALF_ROOT_3: ExactValue = value(false, rad(1, 3), rad(2, 1));
const ROOT_3: ExactValue = value(false, rad(1, 3), rad(1, 1));
const INV_ROOT_3: ExactValue = value(false, rad(1, 1), rad(1, 3));

impl ExactValue {
    /// The value with its sign flipped.
    pub const fn neg(self) -> Self {
        value(!self.negative, self.num, self.den)
    }

    fn emit_with(&self, form: EmitFormat) -> String {
        if self.num.outside == 0 {
            return "0".to_owned();
        }
        let sign = if self.negative { "-" } else { "" };
        if self.den == rad(1, 1) {
            format!("{}{}", sign, self.num.emit(form))
        } else {
            format!(
                "{}{}",
                sign,
                form.frac(&self.num.emit(form), &self.den.emit(form))
            )
        }
    }
}

fmt_emit_impl!(ExactValue);
impl Emit for ExactValue {
    fn emit_pretty(&self) -> String {
        self.emit_with(EmitFormat::Pretty)
    }

    fn emit_latex(&self) -> String {
        self.emit_with(EmitFormat::Latex)
    }
}

/// Values at every pair of [TrigFn][TrigFn] and [ANGLES][ANGLES]. Second-quadrant cosines and
/// tangents are negative.
const TABLE: [(TrigFn, u16, ExactValue); 21] = [
    (TrigFn::Sin, 30, HALF),
    (TrigFn::Sin, 45, INV_ROOT_2),
    (TrigFn::Sin, 60, HALF_ROOT_3),
    (TrigFn::Sin, 120, HALF_ROOT_3),
    (TrigFn::Sin, 135, INV_ROOT_2),
    (TrigFn::Sin, 150, HALF),
    (TrigFn::Sin, 180, ZERO),
    (TrigFn::Cos, 30, HALF_ROOT_3),
    (TrigFn::Cos, 45, INV_ROOT_2),
    (TrigFn::Cos, 60, HALF),
    (TrigFn::Cos, 120, HALF.neg()),
    (TrigFn::Cos, 135, INV_ROOT_2.neg()),
    (TrigFn::Cos, 150, HALF_ROOT_3.neg()),
    (TrigFn::Cos, 180, ONE.neg()),
    (TrigFn::Tan, 30, INV_ROOT_3),
    (TrigFn::Tan, 45, ONE),
    (TrigFn::Tan, 60, ROOT_3),
    (TrigFn::Tan, 120, ROOT_3.neg()),
    (TrigFn::Tan, 135, ONE.neg()),
    (TrigFn::Tan, 150, INV_ROOT_3.neg()),
    (TrigFn::Tan, 180, ZERO),
];

/// Looks up the exact value of `function` at `angle` degrees, if `angle` is one of
/// [ANGLES][ANGLES].
pub fn lookup(function: TrigFn, angle: u16) -> Option<ExactValue> {
    TABLE
        .iter()
        .find(|(f, a, _)| *f == function && *a == angle)
        .map(|(_, _, value)| *value)
}

/// Finding the exact value of a trigonometric function at a standard angle.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Trigonometric {
    function: TrigFn,
    angle: u16,
    value: ExactValue,
}

impl Trigonometric {
    /// Creates the exercise for `function` at `angle` degrees, if the angle is a standard one.
    ///
    /// ```
    /// use libdrill::generators::{TrigFn, Trigonometric};
    ///
    /// let trig = Trigonometric::new(TrigFn::Cos, 120).unwrap();
    /// assert_eq!(trig.value().to_string(), "-1/2");
    /// assert!(Trigonometric::new(TrigFn::Sin, 90).is_none());
    /// ```
    pub fn new(function: TrigFn, angle: u16) -> Option<Self> {
        lookup(function, angle).map(|value| Self {
            function,
            angle,
            value,
        })
    }

    /// Draws a random function and angle.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let (function, angle, value) = *TABLE
            .choose(rng)
            .unwrap_or(&(TrigFn::Sin, 30, HALF));
        Self {
            function,
            angle,
            value,
        }
    }

    pub fn function(&self) -> TrigFn {
        self.function
    }

    pub fn angle(&self) -> u16 {
        self.angle
    }

    pub fn value(&self) -> ExactValue {
        self.value
    }
}

impl Exercise for Trigonometric {
    fn question(&self, form: EmitFormat) -> String {
        let name = match form {
            EmitFormat::Latex => format!("\\{}", self.function.name()),
            EmitFormat::Pretty => self.function.name().to_owned(),
        };
        format!("{} {}", name, form.degrees(self.angle))
    }

    fn answer(&self, form: EmitFormat) -> String {
        self.value.emit(form)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn approx(value: &ExactValue) -> f64 {
        let magnitude = (value.num.outside as f64 * (value.num.inside as f64).sqrt())
            / (value.den.outside as f64 * (value.den.inside as f64).sqrt());
        if value.negative {
            -magnitude
        } else {
            magnitude
        }
    }

    #[test]
    fn standard_values() {
        let latex = |f, a| lookup(f, a).unwrap().emit(EmitFormat::Latex);
        assert_eq!(latex(TrigFn::Sin, 150), "\\frac{1}{2}");
        assert_eq!(latex(TrigFn::Cos, 120), "-\\frac{1}{2}");
        assert_eq!(latex(TrigFn::Tan, 180), "0");
        assert_eq!(latex(TrigFn::Sin, 45), "\\frac{1}{\\sqrt{2}}");
        assert_eq!(latex(TrigFn::Cos, 150), "-\\frac{\\sqrt{3}}{2}");
        assert_eq!(latex(TrigFn::Tan, 30), "\\frac{1}{\\sqrt{3}}");
        assert_eq!(latex(TrigFn::Tan, 120), "-\\sqrt{3}");
        assert_eq!(latex(TrigFn::Cos, 180), "-1");
    }

    #[test]
    fn table_is_complete() {
        for &function in TrigFn::ALL.iter() {
            for &angle in ANGLES.iter() {
                assert!(lookup(function, angle).is_some(), "{:?} {}", function, angle);
            }
        }
    }

    #[test]
    fn table_agrees_with_floating_point() {
        for (function, angle, value) in TABLE.iter() {
            let radians = f64::from(*angle).to_radians();
            let expected = match function {
                TrigFn::Sin => radians.sin(),
                TrigFn::Cos => radians.cos(),
                TrigFn::Tan => radians.tan(),
            };
            assert!(
                (approx(value) - expected).abs() < 1e-9,
                "{} {}° = {}, not {}",
                function.name(),
                angle,
                value,
                expected
            );
        }
    }

    #[test]
    fn questions() {
        let trig = Trigonometric::new(TrigFn::Sin, 30).unwrap();
        assert_eq!(trig.question(EmitFormat::Latex), "\\sin 30^\\circ");
        assert_eq!(trig.question(EmitFormat::Pretty), "sin 30°");
        assert_eq!(
            Trigonometric::new(TrigFn::Cos, 30)
                .unwrap()
                .answer(EmitFormat::Pretty),
            "√3/2"
        );
    }

    #[test]
    fn generated_exercises_come_from_the_table() {
        let mut rng = ChaCha8Rng::seed_from_u64(30);
        for _ in 0..200 {
            let trig = Trigonometric::generate(&mut rng);
            assert_eq!(lookup(trig.function(), trig.angle()), Some(trig.value()));
        }
    }
}
