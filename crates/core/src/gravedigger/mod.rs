// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Gravedigger worker
//!
//! The shipped worker built on the tick executor: walks to an assigned
//! grave, empties it, digs it up, carries the deceased home, and rolls for
//! resurrection. Every handler re-checks its preconditions on entry and
//! answers failure with a transition back to `Preparing`.

mod handlers;

use crate::adapters::Services;
use crate::chance::ResurrectionOdds;
use crate::config::WorkerConfig;
use crate::executor::TaskExecutor;
use crate::luck::Luck;
use crate::registry::{RegistryError, StateRegistry};
use crate::state::WorkerState;

/// Shared context handed to every handler.
pub struct GraveContext<S: Services, L: Luck> {
    pub services: S,
    pub odds: ResurrectionOdds,
    pub luck: L,
    pub xp_per_dig: f64,
}

/// A gravedigger driven by the host's tick loop.
pub struct Gravedigger<S: Services, L: Luck> {
    executor: TaskExecutor<GraveContext<S, L>>,
    context: GraveContext<S, L>,
}

impl<S: Services, L: Luck> Gravedigger<S, L> {
    /// Build the worker and register its targets.
    pub fn new(services: S, luck: L, config: WorkerConfig) -> Result<Self, RegistryError> {
        let registry = register_targets(&config)?;
        let executor = TaskExecutor::new(registry, WorkerState::StartWorking)
            .with_transition_hook(|from, to| {
                tracing::debug!(%from, %to, "gravedigger state change");
            });
        Ok(Self {
            executor,
            context: GraveContext {
                services,
                odds: config.odds,
                luck,
                xp_per_dig: config.xp_per_dig,
            },
        })
    }

    /// Advance the worker by one host tick.
    pub fn tick(&mut self, counter: u64) -> Result<WorkerState, RegistryError> {
        self.executor.tick(&mut self.context, counter)
    }

    pub fn state(&self) -> WorkerState {
        self.executor.current_state()
    }

    /// Whether a terminal handler asked for an inventory dump. Returns and
    /// clears the flag.
    pub fn wants_resource_dump(&mut self) -> bool {
        self.executor.wants_resource_dump()
    }

    pub fn services(&self) -> &S {
        &self.context.services
    }
}

/// The (state, handler, interval) table of the worker.
fn register_targets<S: Services, L: Luck>(
    config: &WorkerConfig,
) -> Result<StateRegistry<GraveContext<S, L>>, RegistryError> {
    let rates = &config.rates;
    Ok(StateRegistry::builder()
        .target(
            WorkerState::StartWorking,
            rates.start_working,
            handlers::decide,
        )?
        .target(
            WorkerState::Idle,
            rates.idle,
            |_: &mut GraveContext<S, L>, _| WorkerState::StartWorking,
        )?
        .target(WorkerState::Preparing, rates.preparing, handlers::prepare)?
        .target(
            WorkerState::GetRecipe,
            rates.crafting,
            handlers::collect_recipe,
        )?
        .target(WorkerState::EmptyGrave, rates.active, handlers::empty_grave)?
        .target(WorkerState::DigGrave, rates.active, handlers::dig_grave)?
        .target(
            WorkerState::BuryCitizen,
            rates.active,
            handlers::bury_citizen,
        )?
        .target(
            WorkerState::TryResurrect,
            rates.active,
            handlers::try_resurrect,
        )?
        .build())
}

#[cfg(test)]
#[path = "gravedigger_tests.rs"]
mod tests;
