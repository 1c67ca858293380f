//! Plot configuration.

use crate::core::actions::repaint::repaint_engine::{RepaintEngine, RepaintStrategy};
use crate::core::data::plane_rect::{PlaneRect, PlaneRectError};
use crate::core::data::viewport::{DEFAULT_PAN_STEPS, Viewport, ViewportError};
use crate::core::fractals::mandelbrot::mandelbrot_config::{
    DEFAULT_FROM_X, DEFAULT_FROM_Y, DEFAULT_GRID_SIZE, DEFAULT_ITERATIONS_COARSE, DEFAULT_ITERATIONS_FINE,
    DEFAULT_MAX_ITERATIONS, DEFAULT_TO_X, DEFAULT_TO_Y, DEFAULT_ZOOM_COARSE, DEFAULT_ZOOM_FINE,
};
use crate::core::util::decimal::{DecimalParseError, parse_decimal};
use crate::input::keys::KeySteps;
use num::{BigRational, One};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("{field}: {source}")]
    Decimal {
        field: &'static str,
        #[source]
        source: DecimalParseError,
    },
    #[error(transparent)]
    Interval(#[from] PlaneRectError),
    #[error(transparent)]
    Viewport(#[from] ViewportError),
    #[error("{field} must be greater than 1, got {value}")]
    InvalidZoom { field: &'static str, value: String },
}

/// Plot settings as read from a TOML file. Every field is optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotConfig {
    /// Cells per axis.
    pub grid_size: usize,
    pub max_iterations: u32,

    /// Real-axis bounds, decimal strings.
    pub from_x: String,
    pub to_x: String,
    /// Imaginary-axis bounds, decimal strings.
    pub from_y: String,
    pub to_y: String,

    /// Pan steps per span.
    pub pan_steps: u32,
    pub zoom_fine: String,
    pub zoom_coarse: String,
    pub iterations_fine: i64,
    pub iterations_coarse: i64,

    /// Repaint rows on the rayon pool instead of the calling thread.
    pub parallel: bool,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            from_x: DEFAULT_FROM_X.to_string(),
            to_x: DEFAULT_TO_X.to_string(),
            from_y: DEFAULT_FROM_Y.to_string(),
            to_y: DEFAULT_TO_Y.to_string(),
            pan_steps: DEFAULT_PAN_STEPS,
            zoom_fine: DEFAULT_ZOOM_FINE.to_string(),
            zoom_coarse: DEFAULT_ZOOM_COARSE.to_string(),
            iterations_fine: DEFAULT_ITERATIONS_FINE,
            iterations_coarse: DEFAULT_ITERATIONS_COARSE,
            parallel: true,
        }
    }
}

/// A validated [`PlotConfig`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlotSettings {
    pub viewport: Viewport,
    pub key_steps: KeySteps,
    pub strategy: RepaintStrategy,
}

impl PlotSettings {
    #[must_use]
    pub fn repaint_engine(&self) -> RepaintEngine {
        RepaintEngine::new(self.strategy)
    }
}

fn decimal(field: &'static str, text: &str) -> Result<BigRational, ConfigError> {
    parse_decimal(text).map_err(|source| ConfigError::Decimal { field, source })
}

fn zoom_factor(field: &'static str, text: &str) -> Result<BigRational, ConfigError> {
    let value = decimal(field, text)?;

    if value <= BigRational::one() {
        return Err(ConfigError::InvalidZoom {
            field,
            value: text.to_string(),
        });
    }

    Ok(value)
}

impl PlotConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn validate(&self) -> Result<PlotSettings, ConfigError> {
        let rect = PlaneRect::new(
            decimal("from_x", &self.from_x)?,
            decimal("to_x", &self.to_x)?,
            decimal("from_y", &self.from_y)?,
            decimal("to_y", &self.to_y)?,
        )?;

        let viewport = Viewport::new(rect, self.grid_size, self.max_iterations)?.with_pan_steps(self.pan_steps)?;

        let key_steps = KeySteps {
            zoom_fine: zoom_factor("zoom_fine", &self.zoom_fine)?,
            zoom_coarse: zoom_factor("zoom_coarse", &self.zoom_coarse)?,
            iterations_fine: self.iterations_fine,
            iterations_coarse: self.iterations_coarse,
        };

        let strategy = if self.parallel {
            RepaintStrategy::Parallel
        } else {
            RepaintStrategy::Serial
        };

        Ok(PlotSettings {
            viewport,
            key_steps,
            strategy,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::plane_rect::Axis;
    use num::bigint::BigInt;

    fn ratio(numer: i64, denom: i64) -> BigRational {
        BigRational::new(BigInt::from(numer), BigInt::from(denom))
    }

    #[test]
    fn test_default_config_validates_to_default_plot() {
        let settings = PlotConfig::default().validate().unwrap();

        assert_eq!(settings.viewport.grid_size(), 40);
        assert_eq!(settings.viewport.max_iterations(), 80);
        assert_eq!(settings.viewport.pan_steps(), 40);
        assert_eq!(settings.viewport.rect().from_x(), &ratio(-5, 2));
        assert_eq!(settings.viewport.rect().to_y(), &ratio(2, 1));
        assert_eq!(settings.key_steps.zoom_fine, ratio(6, 5));
        assert_eq!(settings.key_steps.zoom_coarse, ratio(2, 1));
        assert_eq!(settings.strategy, RepaintStrategy::Parallel);
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        assert_eq!(PlotConfig::from_toml_str("").unwrap(), PlotConfig::default());
    }

    #[test]
    fn test_partial_toml_overrides_fields() {
        let config = PlotConfig::from_toml_str(
            r#"
            grid_size = 20
            from_x = "-1.25"
            parallel = false
            "#,
        )
        .unwrap();

        assert_eq!(config.grid_size, 20);
        assert_eq!(config.from_x, "-1.25");
        assert_eq!(config.to_x, DEFAULT_TO_X);

        let settings = config.validate().unwrap();
        assert_eq!(settings.viewport.rect().from_x(), &ratio(-5, 4));
        assert_eq!(settings.strategy, RepaintStrategy::Serial);
    }

    #[test]
    fn test_malformed_toml_is_a_parse_error() {
        let result = PlotConfig::from_toml_str("grid_size = \"forty\"");

        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_inverted_interval_is_rejected() {
        let config = PlotConfig {
            from_y: "1".to_string(),
            to_y: "-1".to_string(),
            ..PlotConfig::default()
        };

        assert!(matches!(
            config.validate(),
            Err(ConfigError::Interval(PlaneRectError::InvalidInterval { axis: Axis::Y, .. }))
        ));
    }

    #[test]
    fn test_iteration_floor_is_rejected() {
        let config = PlotConfig {
            max_iterations: 10,
            ..PlotConfig::default()
        };

        assert!(matches!(
            config.validate(),
            Err(ConfigError::Viewport(ViewportError::IterationFloorViolation { .. }))
        ));
    }

    #[test]
    fn test_bad_decimal_names_field() {
        let config = PlotConfig {
            to_x: "one".to_string(),
            ..PlotConfig::default()
        };

        let err = config.validate().unwrap_err();

        assert!(err.to_string().starts_with("to_x:"), "got {err}");
    }

    #[test]
    fn test_zoom_factor_must_exceed_one() {
        let config = PlotConfig {
            zoom_fine: "1.0".to_string(),
            ..PlotConfig::default()
        };

        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidZoom { field: "zoom_fine", .. })
        ));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let result = PlotConfig::load("/nonexistent/mandel_plot.toml");

        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }
}
