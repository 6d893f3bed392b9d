// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tick loop driving a gravedigger at a fixed cadence
//!
//! The runtime owns the tick counter and is the single driver of the state
//! machine. It also consumes the worker's inventory-dump request each tick,
//! so the flag has exactly one reader.

use serde::{Deserialize, Serialize};
use sexton_core::{Gravedigger, Luck, RegistryError, Services, WorkerService, WorkerState};
use std::time::Duration;
use thiserror::Error;
use tokio::sync::watch;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("state machine error: {0}")]
    Machine(#[from] RegistryError),
}

/// Runtime cadence configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    /// Wall-clock length of one tick
    #[serde(with = "humantime_serde")]
    pub tick_length: Duration,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            tick_length: Duration::from_millis(50),
        }
    }
}

/// Runtime that drives one worker's ticks.
pub struct Runtime<S: Services, L: Luck> {
    worker: Gravedigger<S, L>,
    config: RuntimeConfig,
    counter: u64,
}

impl<S: Services, L: Luck> Runtime<S, L> {
    pub fn new(worker: Gravedigger<S, L>, config: RuntimeConfig) -> Self {
        Self {
            worker,
            config,
            counter: 0,
        }
    }

    pub fn counter(&self) -> u64 {
        self.counter
    }

    pub fn state(&self) -> WorkerState {
        self.worker.state()
    }

    /// Advance one tick: run the machine, then honor a dump request.
    pub fn tick_once(&mut self) -> Result<WorkerState, RuntimeError> {
        let state = self.worker.tick(self.counter)?;
        self.counter += 1;

        if self.worker.wants_resource_dump() {
            tracing::info!(tick = self.counter, "dumping inventory to building");
            self.worker.services().worker().dump_to_building();
        }

        Ok(state)
    }

    /// Run a bounded number of ticks at the configured cadence.
    pub async fn run_ticks(&mut self, ticks: u64) -> Result<(), RuntimeError> {
        for _ in 0..ticks {
            self.tick_once()?;
            tokio::time::sleep(self.config.tick_length).await;
        }
        Ok(())
    }

    /// Drive the worker until the shutdown signal flips or the sender drops.
    pub async fn run(&mut self, mut shutdown: watch::Receiver<bool>) -> Result<(), RuntimeError> {
        let mut timer = tokio::time::interval(self.config.tick_length);
        loop {
            tokio::select! {
                _ = timer.tick() => {
                    if let Err(e) = self.tick_once() {
                        tracing::error!(error = %e, "worker stopped on fatal dispatch error");
                        return Err(e);
                    }
                }
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        tracing::info!(tick = self.counter, "runtime shutting down");
                        return Ok(());
                    }
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "runtime_tests.rs"]
mod tests;
