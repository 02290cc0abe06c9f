pub mod runner;
pub mod suite;

pub use crate::domain::model::{CaseResult, Envelope, ProbeResponse, RunReport, StatusClass};
pub use crate::domain::ports::{CaseOutcome, Console, Probe, SmokeCase};
pub use crate::utils::error::Result;
