//! Evolution driver for the Turf contest automaton.
//!
//! [`Simulation`] owns the grid for the duration of a run and advances it
//! one synchronous generation at a time: every interior cell's neighbour
//! counts are computed against the previous generation's buffer, the
//! configured [`RuleVariant`](turf_rules::RuleVariant) decides its next
//! state, and the finished buffer replaces the old one wholesale. Each
//! generation's border-trimmed interior is appended to a [`Trajectory`].
//!
//! Runs stop when the generation budget is exhausted or the configured
//! [`StopCondition`] fires; configurations with neither bound are rejected
//! at validation, so every accepted run terminates.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod config;
mod driver;
mod init;
mod stop;
mod trajectory;

pub use config::{ConfigError, SimulationConfig};
pub use driver::{RunOutcome, RunReport, RunState, Simulation, StepError};
pub use init::InitStrategy;
pub use stop::StopCondition;
pub use trajectory::Trajectory;
