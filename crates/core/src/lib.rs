// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! sexton-core: Tick-scheduled state machine for colony grave workers
//!
//! This crate provides:
//! - A throttled, registry-dispatched task executor driven by a host tick loop
//! - The gravedigger worker's resumable step handlers
//! - Service traits for the surrounding game engine, with recording fakes
//! - Resurrection odds math and worker configuration

pub mod tick;

pub mod adapters;
pub mod chance;
pub mod config;
pub mod luck;

// State machine (order matters for dependencies)
pub mod state;
pub mod registry;
pub mod executor;
pub mod gravedigger;

// Re-exports
pub use chance::ResurrectionOdds;
pub use config::{ConfigError, TickRates, WorkerConfig};
pub use executor::{TaskExecutor, TickControl};
pub use luck::{FakeLuck, Luck, ThreadLuck};
pub use registry::{RegistryError, StateRegistry};
pub use state::WorkerState;
pub use tick::{Ticker, TICKS_PER_SECOND};

// Re-export adapters
pub use adapters::{
    BlockPos, ColonyService, DeceasedRecord, FakeServices, GraveyardService, JobService, Progress,
    ServiceCall, Services, ToolKind, VisibleStatus, WorkerService, WorldService,
};

// Re-export the worker
pub use gravedigger::{GraveContext, Gravedigger};
