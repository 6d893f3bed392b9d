// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tick-driven task executor
//!
//! Holds the current state and, each tick the interval gate allows, invokes
//! the registered handler and applies the state it returns. Waits are
//! cooperative: a handler that is not finished returns its own state and is
//! re-invoked on a later tick.

use crate::registry::{RegistryError, StateRegistry};
use crate::state::WorkerState;
use crate::tick::Ticker;
use std::collections::HashMap;

/// Per-invocation hook handed to handlers for executor-owned side effects.
#[derive(Debug, Default)]
pub struct TickControl {
    dump_requested: bool,
}

impl TickControl {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask the hosting executor to dump the worker's inventory after this
    /// invocation.
    pub fn request_inventory_dump(&mut self) {
        self.dump_requested = true;
    }

    pub fn dump_requested(&self) -> bool {
        self.dump_requested
    }
}

type TransitionHook = Box<dyn Fn(WorkerState, WorkerState) + Send>;

/// Executes one worker's state machine against a host-supplied tick counter.
///
/// Single-threaded by contract: one `tick` call at a time, driven by the
/// host's loop.
pub struct TaskExecutor<C> {
    registry: StateRegistry<C>,
    state: WorkerState,
    /// One gate per state, persisting across transitions
    tickers: HashMap<WorkerState, Ticker>,
    wants_dump: bool,
    on_transition: Option<TransitionHook>,
}

impl<C> TaskExecutor<C> {
    pub fn new(registry: StateRegistry<C>, initial: WorkerState) -> Self {
        Self {
            registry,
            state: initial,
            tickers: HashMap::new(),
            wants_dump: false,
            on_transition: None,
        }
    }

    /// Install a hook invoked on every state change, before the new state's
    /// first tick.
    pub fn with_transition_hook(
        mut self,
        hook: impl Fn(WorkerState, WorkerState) + Send + 'static,
    ) -> Self {
        self.on_transition = Some(Box::new(hook));
        self
    }

    pub fn current_state(&self) -> WorkerState {
        self.state
    }

    /// Whether a handler requested an inventory dump. Returns and clears the
    /// flag: one set is observed at most once.
    pub fn wants_resource_dump(&mut self) -> bool {
        std::mem::take(&mut self.wants_dump)
    }

    /// Advance the machine by one host tick.
    ///
    /// No-op when the current state's interval has not elapsed: the handler
    /// is not invoked and the state is unchanged. Each state keeps its own
    /// gate across transitions, so bouncing between states cannot defeat
    /// the throttle. Dispatching a state that was never registered is fatal
    /// and surfaces as an error.
    pub fn tick(&mut self, ctx: &mut C, counter: u64) -> Result<WorkerState, RegistryError> {
        let target = self.registry.dispatch(self.state)?;
        let ticker = self.tickers.entry(self.state).or_default();
        if !ticker.due(target.interval(), counter) {
            return Ok(self.state);
        }

        let mut control = TickControl::new();
        let next = target.invoke(ctx, &mut control);
        ticker.mark(counter);

        if control.dump_requested() {
            self.wants_dump = true;
        }

        if next != self.state {
            if let Some(hook) = &self.on_transition {
                hook(self.state, next);
            }
            self.state = next;
        }

        Ok(self.state)
    }
}

#[cfg(test)]
#[path = "executor_tests.rs"]
mod tests;
