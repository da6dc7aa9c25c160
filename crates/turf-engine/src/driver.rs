//! The evolution driver.

use std::error::Error;
use std::fmt;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::config::{ConfigError, SimulationConfig};
use crate::init;
use crate::stop::StopCondition;
use crate::trajectory::Trajectory;
use turf_grid::{neighbour_counts, Grid, GridError, NeighbourhoodKind};
use turf_rules::RuleVariant;

/// Lifecycle of a simulation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunState {
    /// Constructed; no generation has been applied yet.
    Idle,
    /// At least one generation applied, neither bound hit.
    Running,
    /// The stopping condition fired.
    Completed,
    /// The generation budget was exhausted.
    Terminated,
}

impl RunState {
    /// Whether the run can still advance.
    pub fn is_finished(self) -> bool {
        matches!(self, Self::Completed | Self::Terminated)
    }
}

/// Why a finished run stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    /// The stopping condition fired ([`RunState::Completed`]).
    PredicateFired,
    /// The generation budget ran out ([`RunState::Terminated`]).
    BudgetExhausted,
}

/// Errors surfaced while stepping a simulation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepError {
    /// A grid access fell out of bounds mid-sweep. The sweep only visits
    /// coordinates derived from the grid's own dimensions, so this is an
    /// invariant violation, not a recoverable condition.
    Grid(GridError),
    /// `step()` was called on a finished simulation.
    Finished {
        /// The terminal state the simulation is in.
        state: RunState,
    },
}

impl fmt::Display for StepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "grid access failed mid-sweep: {e}"),
            Self::Finished { state } => {
                write!(f, "simulation already finished ({state:?})")
            }
        }
    }
}

impl Error for StepError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            Self::Finished { .. } => None,
        }
    }
}

impl From<GridError> for StepError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

/// Result of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// Why the run stopped.
    pub outcome: RunOutcome,
    /// Generations applied (equals the trajectory length).
    pub generations: u64,
    /// The recorded trajectory, one interior snapshot per generation.
    pub trajectory: Trajectory,
}

/// The evolution driver: owns the grid, the RNG stream, and the trajectory
/// for the duration of one run.
///
/// # Examples
///
/// ```
/// use turf_engine::{InitStrategy, RunOutcome, Simulation, SimulationConfig};
/// use turf_grid::NeighbourhoodKind;
/// use turf_rules::RuleVariant;
///
/// let config = SimulationConfig {
///     rows: 12,
///     cols: 12,
///     neighbourhood: NeighbourhoodKind::VonNeumann,
///     rule: RuleVariant::StrictMajority,
///     init: InitStrategy::UniformRandom,
///     max_generations: Some(20),
///     stop: None,
///     seed: 42,
/// };
/// let report = Simulation::new(config).unwrap().run().unwrap();
/// assert_eq!(report.outcome, RunOutcome::BudgetExhausted);
/// assert_eq!(report.trajectory.len(), 20);
/// ```
#[derive(Debug)]
pub struct Simulation {
    neighbourhood: NeighbourhoodKind,
    rule: RuleVariant,
    max_generations: Option<u64>,
    stop: Option<StopCondition>,
    grid: Grid,
    rng: ChaCha8Rng,
    state: RunState,
    generation: u64,
    trajectory: Trajectory,
}

impl Simulation {
    /// Validate `config`, seed the RNG, and build the initial grid with
    /// the configured [`InitStrategy`](crate::InitStrategy).
    pub fn new(config: SimulationConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let grid = init::build_grid(config.rows, config.cols, config.init, &mut rng)?;
        Ok(Self::assemble(config, grid, rng))
    }

    /// Like [`new`](Simulation::new), but with an externally built initial
    /// grid, for callers that build their own starting state. The grid must match
    /// the configured dimensions.
    pub fn from_grid(config: SimulationConfig, grid: Grid) -> Result<Self, ConfigError> {
        config.validate()?;
        if (grid.rows(), grid.cols()) != (config.rows, config.cols) {
            return Err(ConfigError::DimensionMismatch {
                expected: (config.rows, config.cols),
                found: (grid.rows(), grid.cols()),
            });
        }
        let rng = ChaCha8Rng::seed_from_u64(config.seed);
        Ok(Self::assemble(config, grid, rng))
    }

    fn assemble(config: SimulationConfig, grid: Grid, rng: ChaCha8Rng) -> Self {
        Self {
            neighbourhood: config.neighbourhood,
            rule: config.rule,
            max_generations: config.max_generations,
            stop: config.stop,
            grid,
            rng,
            state: RunState::Idle,
            generation: 0,
            trajectory: Trajectory::new(),
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> RunState {
        self.state
    }

    /// Generations applied so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The grid as it stands (border included). Read-only: the grid is
    /// exclusively owned by the driver while the run is in progress.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The trajectory recorded so far.
    pub fn trajectory(&self) -> &Trajectory {
        &self.trajectory
    }

    /// Apply one synchronous generation.
    ///
    /// Every interior cell's neighbour counts are computed against the
    /// buffer as it stood when the generation began; outputs go to a
    /// fresh buffer that replaces the grid wholesale afterwards. The new
    /// interior is appended to the trajectory, then the stopping
    /// condition and budget are checked, in that order.
    pub fn step(&mut self) -> Result<RunState, StepError> {
        if self.state.is_finished() {
            return Err(StepError::Finished { state: self.state });
        }
        self.state = RunState::Running;

        // Double buffer: clone carries the border (and any interior cell
        // the rule leaves unchanged); all reads go to `self.grid`, all
        // writes to `next`. Row-major sweep keeps the RNG stream stable.
        let mut next = self.grid.clone();
        for r in 1..=self.grid.rows() as i32 {
            for c in 1..=self.grid.cols() as i32 {
                let counts = neighbour_counts(&self.grid, r, c, self.neighbourhood)?;
                let current = self.grid.get(r, c)?;
                next.set_interior(r, c, self.rule.next_state(current, counts, &mut self.rng))?;
            }
        }
        self.grid = next;
        self.generation += 1;

        let snapshot = self.grid.snapshot_interior();
        let stop_hit = self.stop.as_ref().is_some_and(|s| s.is_met(&snapshot));
        self.trajectory.push(snapshot);

        if stop_hit {
            self.state = RunState::Completed;
        } else if self.max_generations == Some(self.generation) {
            self.state = RunState::Terminated;
        }
        Ok(self.state)
    }

    /// Step until a bound is hit and hand back the finalized trajectory.
    pub fn run(mut self) -> Result<RunReport, StepError> {
        loop {
            if self.step()?.is_finished() {
                break;
            }
        }
        let outcome = match self.state {
            RunState::Completed => RunOutcome::PredicateFired,
            RunState::Terminated => RunOutcome::BudgetExhausted,
            // step() only breaks the loop on a finished state.
            RunState::Idle | RunState::Running => unreachable!("loop exits only when finished"),
        };
        Ok(RunReport {
            outcome,
            generations: self.generation,
            trajectory: self.trajectory,
        })
    }
}
