/*!
    Scaler configuration types.
*/

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use frame_types::{Error, Result};

use crate::kernel::{ApproxBilinear, BILINEAR, CATMULL_ROM, NearestNeighbor, ScalingKernel};

/**
    Built-in scaling algorithms.
*/
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ScalingAlgorithm {
    /// Nearest neighbor (fastest, pixelated)
    #[default]
    NearestNeighbor,
    /// 2×2 bilinear blend without filter widening (fast, aliases on downscale)
    ApproxBilinear,
    /// Tent filter (smooth)
    Bilinear,
    /// Catmull-Rom cubic filter (sharpest, slowest)
    CatmullRom,
}

impl ScalingAlgorithm {
    /**
        Returns a kernel implementing this algorithm.
    */
    pub fn kernel(self) -> Arc<dyn ScalingKernel> {
        match self {
            Self::NearestNeighbor => Arc::new(NearestNeighbor),
            Self::ApproxBilinear => Arc::new(ApproxBilinear),
            Self::Bilinear => Arc::new(BILINEAR),
            Self::CatmullRom => Arc::new(CATMULL_ROM),
        }
    }

    const fn name(self) -> &'static str {
        match self {
            Self::NearestNeighbor => "nearest",
            Self::ApproxBilinear => "approx-bilinear",
            Self::Bilinear => "bilinear",
            Self::CatmullRom => "catmull-rom",
        }
    }
}

impl fmt::Display for ScalingAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ScalingAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().replace('_', "-").as_str() {
            "nearest" | "nearest-neighbor" | "point" => Ok(Self::NearestNeighbor),
            "approx-bilinear" | "fast-bilinear" => Ok(Self::ApproxBilinear),
            "bilinear" => Ok(Self::Bilinear),
            "catmull-rom" | "bicubic" => Ok(Self::CatmullRom),
            other => Err(Error::configuration(format!(
                "unknown scaling algorithm: {other}"
            ))),
        }
    }
}

/**
    Configuration for a frame scaler.

    A non-positive dimension is derived from the aspect ratio of the first
    frame; at least one dimension must be positive.
*/
#[derive(Clone, Debug)]
pub struct ScaleConfig {
    /// Target width in pixels (non-positive = derive from height).
    pub width: i32,
    /// Target height in pixels (non-positive = derive from width).
    pub height: i32,
    /// Scaling kernel (None = nearest neighbor).
    pub kernel: Option<Arc<dyn ScalingKernel>>,
}

impl ScaleConfig {
    /**
        Create a config scaling to a fixed size with the default kernel.
    */
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            kernel: None,
        }
    }

    /**
        Create a config scaling to the given width, keeping aspect ratio.
    */
    pub fn fit_width(width: i32) -> Self {
        Self::new(width, -1)
    }

    /**
        Create a config scaling to the given height, keeping aspect ratio.
    */
    pub fn fit_height(height: i32) -> Self {
        Self::new(-1, height)
    }

    /**
        Use the given kernel.
    */
    pub fn with_kernel(mut self, kernel: Arc<dyn ScalingKernel>) -> Self {
        self.kernel = Some(kernel);
        self
    }

    /**
        Use a built-in algorithm.
    */
    pub fn with_algorithm(self, algorithm: ScalingAlgorithm) -> Self {
        self.with_kernel(algorithm.kernel())
    }

    /**
        Checks that at least one target dimension is positive.
    */
    pub fn validate(&self) -> Result<()> {
        if self.width <= 0 && self.height <= 0 {
            return Err(Error::configuration(format!(
                "at least one dimension must be positive (got {}x{})",
                self.width, self.height
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builders() {
        let config = ScaleConfig::fit_width(640);
        assert_eq!((config.width, config.height), (640, -1));
        assert!(config.kernel.is_none());

        let config = ScaleConfig::fit_height(480).with_algorithm(ScalingAlgorithm::Bilinear);
        assert_eq!((config.width, config.height), (-1, 480));
        assert!(config.kernel.is_some());
    }

    #[test]
    fn validate_requires_a_positive_dimension() {
        assert!(ScaleConfig::new(640, 360).validate().is_ok());
        assert!(ScaleConfig::new(640, 0).validate().is_ok());
        assert!(ScaleConfig::new(-1, 10).validate().is_ok());

        let err = ScaleConfig::new(-1, -1).validate().unwrap_err();
        assert!(matches!(err, Error::Configuration { .. }));
        assert!(format!("{err}").contains("at least one dimension must be positive"));

        assert!(ScaleConfig::new(0, 0).validate().is_err());
    }

    #[test]
    fn algorithm_from_str() {
        assert_eq!(
            "nearest".parse::<ScalingAlgorithm>().unwrap(),
            ScalingAlgorithm::NearestNeighbor
        );
        assert_eq!(
            "Catmull_Rom".parse::<ScalingAlgorithm>().unwrap(),
            ScalingAlgorithm::CatmullRom
        );
        assert_eq!(
            "APPROX-BILINEAR".parse::<ScalingAlgorithm>().unwrap(),
            ScalingAlgorithm::ApproxBilinear
        );
        assert!("lanczos".parse::<ScalingAlgorithm>().is_err());
    }

    #[test]
    fn algorithm_display_round_trips() {
        for algorithm in [
            ScalingAlgorithm::NearestNeighbor,
            ScalingAlgorithm::ApproxBilinear,
            ScalingAlgorithm::Bilinear,
            ScalingAlgorithm::CatmullRom,
        ] {
            assert_eq!(algorithm.to_string().parse::<ScalingAlgorithm>().unwrap(), algorithm);
        }
    }

    #[test]
    fn algorithm_kernels() {
        assert_eq!(ScalingAlgorithm::default(), ScalingAlgorithm::NearestNeighbor);
        assert!(ScalingAlgorithm::NearestNeighbor.kernel().as_adaptive().is_none());
        assert!(ScalingAlgorithm::ApproxBilinear.kernel().as_adaptive().is_none());
        assert!(ScalingAlgorithm::Bilinear.kernel().as_adaptive().is_some());
        assert!(ScalingAlgorithm::CatmullRom.kernel().as_adaptive().is_some());
    }
}
