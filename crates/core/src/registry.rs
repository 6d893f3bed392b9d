// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Dispatch table mapping worker states to handlers and tick intervals
//!
//! The table is built once at worker construction and frozen. Exactly one
//! handler per state: re-registering is a construction error, dispatching a
//! state that was never registered is a fatal configuration error.

use crate::executor::TickControl;
use crate::state::WorkerState;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("no handler registered for state: {0}")]
    UnknownState(WorkerState),
    #[error("handler already registered for state: {0}")]
    Duplicate(WorkerState),
}

/// A state's transition function. Returns the next state; returning the
/// current state signals unfinished work and requests re-invocation on a
/// later tick.
pub type Handler<C> = Box<dyn Fn(&mut C, &mut TickControl) -> WorkerState + Send>;

/// A registered (handler, interval) pair.
pub struct Target<C> {
    interval: u64,
    handler: Handler<C>,
}

impl<C> Target<C> {
    /// Minimum ticks between invocations of this handler.
    pub fn interval(&self) -> u64 {
        self.interval
    }

    pub fn invoke(&self, ctx: &mut C, control: &mut TickControl) -> WorkerState {
        (self.handler)(ctx, control)
    }
}

impl<C> std::fmt::Debug for Target<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Target")
            .field("interval", &self.interval)
            .finish_non_exhaustive()
    }
}

/// Immutable state-to-handler dispatch table.
pub struct StateRegistry<C> {
    targets: HashMap<WorkerState, Target<C>>,
}

impl<C> StateRegistry<C> {
    pub fn builder() -> RegistryBuilder<C> {
        RegistryBuilder {
            targets: HashMap::new(),
        }
    }

    /// Look up the target for a state.
    pub fn dispatch(&self, state: WorkerState) -> Result<&Target<C>, RegistryError> {
        self.targets
            .get(&state)
            .ok_or(RegistryError::UnknownState(state))
    }

    pub fn contains(&self, state: WorkerState) -> bool {
        self.targets.contains_key(&state)
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

/// Construction-time registration, consumed by `build`.
pub struct RegistryBuilder<C> {
    targets: HashMap<WorkerState, Target<C>>,
}

impl<C> RegistryBuilder<C> {
    /// Register a handler with its minimum tick interval.
    pub fn target(
        mut self,
        state: WorkerState,
        interval: u64,
        handler: impl Fn(&mut C, &mut TickControl) -> WorkerState + Send + 'static,
    ) -> Result<Self, RegistryError> {
        if self.targets.contains_key(&state) {
            return Err(RegistryError::Duplicate(state));
        }
        self.targets.insert(
            state,
            Target {
                interval,
                handler: Box::new(handler),
            },
        );
        Ok(self)
    }

    pub fn build(self) -> StateRegistry<C> {
        StateRegistry {
            targets: self.targets,
        }
    }
}
