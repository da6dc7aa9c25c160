//! Simulation configuration and validation.

use std::error::Error;
use std::fmt;

use crate::init::InitStrategy;
use crate::stop::StopCondition;
use turf_grid::{Grid, GridError, NeighbourhoodKind};
use turf_rules::RuleVariant;

/// Complete configuration for one simulation run.
///
/// There is no process-wide state: everything a run needs (dimensions,
/// neighbourhood, rule, initial-state strategy, bounds, and the RNG seed)
/// travels in this struct, and [`validate()`](SimulationConfig::validate)
/// rejects bad configurations before the simulation starts.
///
/// # Examples
///
/// ```
/// use turf_engine::{InitStrategy, SimulationConfig, StopCondition};
/// use turf_grid::NeighbourhoodKind;
/// use turf_rules::RuleVariant;
///
/// let config = SimulationConfig {
///     rows: 16,
///     cols: 16,
///     neighbourhood: NeighbourhoodKind::VonNeumann,
///     rule: RuleVariant::StrictMajority,
///     init: InitStrategy::UniformRandom,
///     max_generations: Some(75),
///     stop: Some(StopCondition::NoEmptyCells),
///     seed: 42,
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug)]
pub struct SimulationConfig {
    /// Interior grid height `H`.
    pub rows: u32,
    /// Interior grid width `W`.
    pub cols: u32,
    /// Which cells count as neighbours.
    pub neighbourhood: NeighbourhoodKind,
    /// The per-cell transition rule.
    pub rule: RuleVariant,
    /// How the initial grid is generated.
    pub init: InitStrategy,
    /// Generation budget. `None` means unbounded, in which case a
    /// stopping condition is mandatory.
    pub max_generations: Option<u64>,
    /// Optional stopping condition evaluated on each new interior.
    pub stop: Option<StopCondition>,
    /// Seed for the run's random stream.
    pub seed: u64,
}

impl SimulationConfig {
    /// Validate structural invariants.
    ///
    /// Fatal at setup: a simulation is never constructed from a config
    /// that fails here.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 {
            return Err(ConfigError::ZeroDimension { name: "rows" });
        }
        if self.cols == 0 {
            return Err(ConfigError::ZeroDimension { name: "cols" });
        }
        if self.rows > Grid::MAX_DIM {
            return Err(ConfigError::Grid(GridError::DimensionTooLarge {
                name: "rows",
                value: self.rows,
            }));
        }
        if self.cols > Grid::MAX_DIM {
            return Err(ConfigError::Grid(GridError::DimensionTooLarge {
                name: "cols",
                value: self.cols,
            }));
        }
        if self.max_generations == Some(0) {
            return Err(ConfigError::ZeroBudget);
        }
        // An unbounded run with no stopping condition would never
        // terminate; refuse it up front.
        if self.max_generations.is_none() && self.stop.is_none() {
            return Err(ConfigError::Unbounded);
        }
        Ok(())
    }
}

/// Errors detected during [`SimulationConfig::validate()`] or simulation
/// construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// An interior dimension is zero.
    ZeroDimension {
        /// Which axis was zero.
        name: &'static str,
    },
    /// `max_generations` was `Some(0)`, a run that records nothing.
    ZeroBudget,
    /// Neither a generation budget nor a stopping condition is set.
    Unbounded,
    /// The provided initial grid does not match the configured dimensions.
    DimensionMismatch {
        /// Dimensions from the config.
        expected: (u32, u32),
        /// Dimensions of the provided grid.
        found: (u32, u32),
    },
    /// Grid construction failed.
    Grid(GridError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroDimension { name } => write!(f, "{name} must be at least 1"),
            Self::ZeroBudget => write!(f, "max_generations must be nonzero when set"),
            Self::Unbounded => write!(
                f,
                "a run needs a generation budget or a stopping condition"
            ),
            Self::DimensionMismatch { expected, found } => write!(
                f,
                "initial grid is {}x{}, config expects {}x{}",
                found.0, found.1, expected.0, expected.1
            ),
            Self::Grid(e) => write!(f, "grid: {e}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for ConfigError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> SimulationConfig {
        SimulationConfig {
            rows: 8,
            cols: 8,
            neighbourhood: NeighbourhoodKind::Moore,
            rule: RuleVariant::RandomTieBreak,
            init: InitStrategy::UniformRandom,
            max_generations: Some(10),
            stop: None,
            seed: 1,
        }
    }

    #[test]
    fn valid_config_passes() {
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn zero_rows_rejected() {
        let mut cfg = valid_config();
        cfg.rows = 0;
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::ZeroDimension { name: "rows" })
        );
    }

    #[test]
    fn zero_cols_rejected() {
        let mut cfg = valid_config();
        cfg.cols = 0;
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::ZeroDimension { name: "cols" })
        );
    }

    #[test]
    fn zero_budget_rejected() {
        let mut cfg = valid_config();
        cfg.max_generations = Some(0);
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroBudget));
    }

    #[test]
    fn unbounded_run_rejected() {
        let mut cfg = valid_config();
        cfg.max_generations = None;
        cfg.stop = None;
        assert_eq!(cfg.validate(), Err(ConfigError::Unbounded));
    }

    #[test]
    fn unbounded_with_stop_condition_accepted() {
        let mut cfg = valid_config();
        cfg.max_generations = None;
        cfg.stop = Some(StopCondition::NoEmptyCells);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn oversized_dimension_rejected() {
        let mut cfg = valid_config();
        cfg.rows = Grid::MAX_DIM + 1;
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::Grid(GridError::DimensionTooLarge { .. }))
        ));
    }
}
