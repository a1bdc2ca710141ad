use crate::core::actions::generate_image::ports::escape_kernel::EscapeKernel;
use crate::core::data::complex::Complex;
use std::convert::Infallible;
use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub struct MandelbrotKernel {
    max_iterations: u32,
    escape_radius_squared: f64,
}

#[derive(Debug, PartialEq)]
pub enum MandelbrotKernelConstructorError {
    ZeroMaxIterations,
    InvalidEscapeRadius { radius: f64 },
}

impl fmt::Display for MandelbrotKernelConstructorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroMaxIterations => {
                write!(f, "maximum iterations must be greater than zero")
            }
            Self::InvalidEscapeRadius { radius } => {
                write!(f, "escape radius must be finite and positive: {}", radius)
            }
        }
    }
}

impl Error for MandelbrotKernelConstructorError {}

impl EscapeKernel for MandelbrotKernel {
    type Failure = Infallible;

    /// Iterates `z ← z² + c` from `z = 0` until `|z|² ≥ escape_radius²` or
    /// the iteration cap is hit, returning the count.
    ///
    /// The comparison uses the squared magnitude so the hot loop never takes
    /// a square root; the escape test is its only branch. With finite
    /// bounds and a finite cap this cannot fault, hence `Infallible`.
    fn escape_time(&self, c: Complex) -> Result<u32, Self::Failure> {
        let mut z = Complex::ZERO;
        let mut k = 0;

        while z.magnitude_squared() < self.escape_radius_squared && k < self.max_iterations {
            z = z * z + c;
            k += 1;
        }

        Ok(k)
    }
}

impl MandelbrotKernel {
    pub fn new(
        max_iterations: u32,
        escape_radius: f64,
    ) -> Result<Self, MandelbrotKernelConstructorError> {
        if max_iterations == 0 {
            return Err(MandelbrotKernelConstructorError::ZeroMaxIterations);
        }

        if !escape_radius.is_finite() || escape_radius <= 0.0 {
            return Err(MandelbrotKernelConstructorError::InvalidEscapeRadius {
                radius: escape_radius,
            });
        }

        Ok(Self {
            max_iterations,
            escape_radius_squared: escape_radius * escape_radius,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kernel(max_iterations: u32) -> MandelbrotKernel {
        MandelbrotKernel::new(max_iterations, 2.0).unwrap()
    }

    #[test]
    fn test_constructor_rejects_zero_max_iterations() {
        let result = MandelbrotKernel::new(0, 2.0);

        assert_eq!(
            result.unwrap_err(),
            MandelbrotKernelConstructorError::ZeroMaxIterations
        );
    }

    #[test]
    fn test_constructor_rejects_bad_escape_radius() {
        for radius in [0.0, -2.0, f64::NAN, f64::INFINITY] {
            let result = MandelbrotKernel::new(100, radius);
            assert!(
                matches!(
                    result,
                    Err(MandelbrotKernelConstructorError::InvalidEscapeRadius { .. })
                ),
                "radius {} should be rejected",
                radius
            );
        }
    }

    #[test]
    fn test_origin_never_escapes() {
        let k = kernel(1000).escape_time(Complex::ZERO).unwrap();

        assert_eq!(k, 1000);
    }

    #[test]
    fn test_point_far_outside_escapes_immediately() {
        let c = Complex {
            real: 100.0,
            imag: 100.0,
        };

        let k = kernel(1000).escape_time(c).unwrap();

        // z starts at 0 so one iteration runs before the magnitude test fails.
        assert!(k <= 1);
    }

    #[test]
    fn test_point_inside_main_cardioid_reaches_cap() {
        let c = Complex {
            real: -0.5,
            imag: 0.0,
        };

        let k = kernel(500).escape_time(c).unwrap();

        assert_eq!(k, 500);
    }

    #[test]
    fn test_escape_count_is_deterministic() {
        let c = Complex {
            real: 0.3,
            imag: 0.5,
        };
        let kernel = kernel(1000);

        let first = kernel.escape_time(c).unwrap();
        let second = kernel.escape_time(c).unwrap();

        assert_eq!(first, second);
        assert!(first < 1000, "0.3 + 0.5i escapes before the cap");
    }

    #[test]
    fn test_larger_escape_radius_never_lowers_the_count() {
        let c = Complex {
            real: 0.26,
            imag: 0.0,
        };

        let tight = MandelbrotKernel::new(1000, 2.0).unwrap();
        let loose = MandelbrotKernel::new(1000, 4.0).unwrap();

        assert!(loose.escape_time(c).unwrap() >= tight.escape_time(c).unwrap());
    }
}
