//! Driver configuration.
//!
//! [`DriverCfg`] : stopping policy of the convergence driver
//! ├ `abs_fx`   : residual tolerance, stop once `|f(x)| < abs_fx`
//! └ `max_iter` : iteration cap after the seeding step
//!
//! [`DriverCfg::new`] initializes configuration with default values.

use super::algorithms::DEFAULT_MAX_ITER;
use super::errors::ConfigError;


pub const DEFAULT_ABS_FX: f64 = 1e-15;


#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DriverCfg {
    abs_fx:   f64,
    max_iter: usize,
}

impl DriverCfg {
    #[must_use]
    pub fn new() -> Self {
        Self {
            abs_fx   : DEFAULT_ABS_FX,
            max_iter : DEFAULT_MAX_ITER,
        }
    }

    // getters
    pub fn abs_fx(&self)   -> f64   { self.abs_fx }
    pub fn max_iter(&self) -> usize { self.max_iter }

    pub fn set_abs_fx(mut self, v: f64) -> Result<Self, ConfigError> {
        if !v.is_finite() || v <= 0.0 {
            return Err(ConfigError::InvalidAbsFx { got: v });
        }
        self.abs_fx = v;
        Ok(self)
    }

    pub fn set_max_iter(mut self, v: usize) -> Result<Self, ConfigError> {
        if v == 0 {
            return Err(ConfigError::InvalidMaxIter { got: v });
        }
        self.max_iter = v;
        Ok(self)
    }
}

impl Default for DriverCfg {
    fn default() -> Self { Self::new() }
}
