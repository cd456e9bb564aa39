//! Night action queue and resolution.
//!
//! ## Key Types
//!
//! - `NightEngine`: owns per-game pending queues and history; submits,
//!   resolves, and runs follow-ups
//! - `ResolutionSlot`: fixed resolution order (Cupid, Seer, Werewolf,
//!   Little Girl, Witch)
//! - `RoundOutcome`: per-action results, updated roster, final deaths and
//!   protections, required follow-ups
//! - `EngineSnapshot`: bincode checkpoint of everything the engine owns
//!
//! ## Resolution
//!
//! 1. Sort the queue by slot; ties keep submission order
//! 2. Only the last submitted werewolf kill runs; earlier ones are superseded
//! 3. Execute each action against an in-memory roster snapshot
//! 4. Protections cancel one werewolf attack each; other deaths stand
//! 5. Lovers of the dead die of heartbreak
//! 6. Apply deaths, recompute protection flags, clear the queue

mod engine;
mod outcome;
mod priority;
mod snapshot;

pub use engine::NightEngine;
pub use outcome::{
    Casualty, DeathCause, FollowUp, FollowUpOutcome, NightSummary, PlayerSubmission, RoundOutcome,
};
pub use priority::ResolutionSlot;
pub use snapshot::{EngineSnapshot, LedgerSnapshot, SnapshotError};
