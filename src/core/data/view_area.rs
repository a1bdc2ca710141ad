use crate::core::data::complex::Complex;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ViewAreaError {
    InvalidRegion { width: f64, height: f64 },
    InvalidResolution { width: u32, height: u32 },
}

impl fmt::Display for ViewAreaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRegion { width, height } => {
                write!(
                    f,
                    "view region size must be positive: {}x{}",
                    width, height
                )
            }
            Self::InvalidResolution { width, height } => {
                write!(
                    f,
                    "view resolution must be at least 1x1 pixels: {}x{}",
                    width, height
                )
            }
        }
    }
}

impl Error for ViewAreaError {}

/// The plane region to render and the output resolution.
///
/// Immutable once constructed; a generation request creates exactly one
/// `ViewArea`. The per-pixel scale factors are derived at construction so
/// every worker maps pixel indices to plane coordinates identically.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewArea {
    min_real: f64,
    min_imag: f64,
    max_real: f64,
    max_imag: f64,
    pixel_width: u32,
    pixel_height: u32,
    step_real: f64,
    step_imag: f64,
}

/// The classic full-set view: `(-2, -1)..(1, 1)` at 640×480.
impl Default for ViewArea {
    fn default() -> Self {
        Self {
            min_real: -2.0,
            min_imag: -1.0,
            max_real: 1.0,
            max_imag: 1.0,
            pixel_width: 640,
            pixel_height: 480,
            step_real: 3.0 / 640.0,
            step_imag: 2.0 / 480.0,
        }
    }
}

impl ViewArea {
    pub fn new(
        min_real: f64,
        min_imag: f64,
        max_real: f64,
        max_imag: f64,
        pixel_width: u32,
        pixel_height: u32,
    ) -> Result<Self, ViewAreaError> {
        let region_width = max_real - min_real;
        let region_height = max_imag - min_imag;

        // NaN bounds fail these comparisons and are rejected too.
        if !(region_width > 0.0) || !(region_height > 0.0) {
            return Err(ViewAreaError::InvalidRegion {
                width: region_width,
                height: region_height,
            });
        }

        if pixel_width == 0 || pixel_height == 0 {
            return Err(ViewAreaError::InvalidResolution {
                width: pixel_width,
                height: pixel_height,
            });
        }

        Ok(Self {
            min_real,
            min_imag,
            max_real,
            max_imag,
            pixel_width,
            pixel_height,
            step_real: region_width / f64::from(pixel_width),
            step_imag: region_height / f64::from(pixel_height),
        })
    }

    #[must_use]
    pub fn min_real(&self) -> f64 {
        self.min_real
    }

    #[must_use]
    pub fn min_imag(&self) -> f64 {
        self.min_imag
    }

    #[must_use]
    pub fn max_real(&self) -> f64 {
        self.max_real
    }

    #[must_use]
    pub fn max_imag(&self) -> f64 {
        self.max_imag
    }

    #[must_use]
    pub fn pixel_width(&self) -> u32 {
        self.pixel_width
    }

    #[must_use]
    pub fn pixel_height(&self) -> u32 {
        self.pixel_height
    }

    #[must_use]
    pub fn step_real(&self) -> f64 {
        self.step_real
    }

    #[must_use]
    pub fn step_imag(&self) -> f64 {
        self.step_imag
    }

    #[must_use]
    pub fn pixel_count(&self) -> usize {
        self.pixel_width as usize * self.pixel_height as usize
    }

    /// Maps a pixel index to its point on the complex plane.
    ///
    /// Pure function of `(x, y)` and this area: the result does not depend
    /// on which tile or worker evaluates it.
    #[must_use]
    pub fn point_at(&self, x: u32, y: u32) -> Complex {
        Complex {
            real: self.min_real + f64::from(x) * self.step_real,
            imag: self.min_imag + f64::from(y) * self.step_imag,
        }
    }
}
