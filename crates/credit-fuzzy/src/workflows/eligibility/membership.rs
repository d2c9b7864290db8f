use serde::{Deserialize, Serialize};

use super::error::FuzzyConfigError;

/// Linguistic term of a three-way fuzzy partition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Term {
    Low,
    Medium,
    High,
}

impl Term {
    pub fn label(&self) -> &'static str {
        match self {
            Term::Low => "low",
            Term::Medium => "medium",
            Term::High => "high",
        }
    }
}

/// Two ordered breakpoints `[lower, upper]` of a piecewise-linear membership curve.
///
/// Construction rejects non-finite, decreasing and zero-width ranges, so evaluation
/// never divides by zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "[f64; 2]", into = "[f64; 2]")]
pub struct Shape {
    lower: f64,
    upper: f64,
}

impl Shape {
    pub fn new(lower: f64, upper: f64) -> Result<Self, FuzzyConfigError> {
        if !lower.is_finite() || !upper.is_finite() {
            return Err(FuzzyConfigError::NonFinite { lower, upper });
        }
        if lower > upper {
            return Err(FuzzyConfigError::NonMonotonic { lower, upper });
        }
        if lower == upper {
            return Err(FuzzyConfigError::ZeroWidth { at: lower });
        }
        Ok(Self { lower, upper })
    }

    /// Breakpoints known to be valid at compile time.
    pub(crate) const fn fixed(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }

    pub fn lower(&self) -> f64 {
        self.lower
    }

    pub fn upper(&self) -> f64 {
        self.upper
    }

    fn width(&self) -> f64 {
        self.upper - self.lower
    }
}

impl TryFrom<[f64; 2]> for Shape {
    type Error = FuzzyConfigError;

    fn try_from([lower, upper]: [f64; 2]) -> Result<Self, Self::Error> {
        Shape::new(lower, upper)
    }
}

impl From<Shape> for [f64; 2] {
    fn from(shape: Shape) -> Self {
        [shape.lower, shape.upper]
    }
}

/// Membership degrees of one crisp value in the low/medium/high terms.
///
/// Degrees are independent; they are not required to sum to one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DegreeTriple {
    pub low: f64,
    pub medium: f64,
    pub high: f64,
}

impl DegreeTriple {
    pub fn degree(&self, term: Term) -> f64 {
        match term {
            Term::Low => self.low,
            Term::Medium => self.medium,
            Term::High => self.high,
        }
    }
}

/// Evaluates `value` against the three shapes of a partition.
///
/// Saturation is checked before interpolation: at or below the low shape's upper
/// breakpoint the value is fully low, at or above the high shape's lower breakpoint
/// it is fully high. Between them each degree is interpolated on its own shape and
/// floored at zero.
pub fn evaluate(value: f64, low: &Shape, mid: &Shape, high: &Shape) -> DegreeTriple {
    if value <= low.upper {
        return DegreeTriple {
            low: 1.0,
            medium: 0.0,
            high: 0.0,
        };
    }
    if value >= high.lower {
        return DegreeTriple {
            low: 0.0,
            medium: 0.0,
            high: 1.0,
        };
    }

    let low_degree = (low.upper - value) / low.width();
    let medium_degree = if value >= mid.lower && value <= mid.upper {
        1.0
    } else {
        1.0 - (value - mid.upper).abs() / mid.width()
    };
    let high_degree = (value - high.lower) / high.width();

    DegreeTriple {
        low: unit(low_degree),
        medium: unit(medium_degree),
        high: unit(high_degree),
    }
}

// f64::max/min discard NaN, so a NaN degree collapses to 0.
fn unit(degree: f64) -> f64 {
    degree.max(0.0).min(1.0)
}

/// Named input variable with its low/medium/high partition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variable {
    name: String,
    low: Shape,
    medium: Shape,
    high: Shape,
}

impl Variable {
    /// Builds a variable whose six breakpoints are non-decreasing from `low` to `high`.
    pub fn new(
        name: impl Into<String>,
        low: Shape,
        medium: Shape,
        high: Shape,
    ) -> Result<Self, FuzzyConfigError> {
        let name = name.into();
        let ordered = [
            (Term::Low, Term::Medium, low.upper, medium.lower),
            (Term::Medium, Term::High, medium.upper, high.lower),
        ];
        for (left, right, left_upper, right_lower) in ordered {
            if left_upper > right_lower {
                return Err(FuzzyConfigError::Overlap {
                    variable: name,
                    left,
                    right,
                });
            }
        }

        Ok(Self {
            name,
            low,
            medium,
            high,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn shape(&self, term: Term) -> &Shape {
        match term {
            Term::Low => &self.low,
            Term::Medium => &self.medium,
            Term::High => &self.high,
        }
    }

    /// Domain covered by the partition, from the low shape's lower breakpoint to the
    /// high shape's upper breakpoint.
    pub fn domain(&self) -> (f64, f64) {
        (self.low.lower, self.high.upper)
    }

    pub fn evaluate(&self, value: f64) -> DegreeTriple {
        evaluate(value, &self.low, &self.medium, &self.high)
    }

    /// Samples the three membership curves at `steps` evenly spaced points of the domain.
    pub fn sample_curve(&self, steps: usize) -> Vec<CurvePoint> {
        let steps = steps.max(2);
        let (start, end) = self.domain();
        let stride = (end - start) / (steps - 1) as f64;

        (0..steps)
            .map(|index| {
                let value = if index == steps - 1 {
                    end
                } else {
                    start + stride * index as f64
                };
                let degrees = self.evaluate(value);
                CurvePoint {
                    value,
                    low: degrees.low,
                    medium: degrees.medium,
                    high: degrees.high,
                }
            })
            .collect()
    }
}

/// One sample of a variable's membership curves, suitable for charting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    pub value: f64,
    pub low: f64,
    pub medium: f64,
    pub high: f64,
}
