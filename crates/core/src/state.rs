// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! State tags for the tick-driven grave worker

use serde::{Deserialize, Serialize};

/// The closed set of states a grave worker moves through.
///
/// States carry no payload; everything a handler needs lives in the worker's
/// context and the services behind it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkerState {
    /// Nothing to do; poll for new work at a slow cadence
    Idle,
    /// Supervisory reset point: re-check building, queue, and grave assignment
    Preparing,
    /// Entry point of each work cycle
    StartWorking,
    /// Hand-off to the job's crafting queue
    GetRecipe,
    /// Walk to the grave and drain its stored items
    EmptyGrave,
    /// Mine out the grave block
    DigGrave,
    /// Carry the deceased back to the graveyard
    BuryCitizen,
    /// Roll for resurrection at the graveyard
    TryResurrect,
}

impl WorkerState {
    /// States that walk to a target and mutate the world.
    pub fn is_active_work(self) -> bool {
        matches!(
            self,
            WorkerState::EmptyGrave
                | WorkerState::DigGrave
                | WorkerState::BuryCitizen
                | WorkerState::TryResurrect
        )
    }
}

impl std::fmt::Display for WorkerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            WorkerState::Idle => "idle",
            WorkerState::Preparing => "preparing",
            WorkerState::StartWorking => "start-working",
            WorkerState::GetRecipe => "get-recipe",
            WorkerState::EmptyGrave => "empty-grave",
            WorkerState::DigGrave => "dig-grave",
            WorkerState::BuryCitizen => "bury-citizen",
            WorkerState::TryResurrect => "try-resurrect",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod tests;
