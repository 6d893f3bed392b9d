//! Fake service implementations for testing
//!
//! One shared state behind all five service handles, with every call
//! recorded and the awkward conditions (full inventory, missing tool, slow
//! walks, partial transfers) behind knobs.

use super::traits::*;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Recorded call to a service method.
#[derive(Debug, Clone, PartialEq)]
pub enum ServiceCall {
    // World calls
    IsGrave { pos: BlockPos },
    GraveIsEmpty { pos: BlockPos },
    DeceasedIn { pos: BlockPos },
    DigStep { pos: BlockPos },

    // Worker calls
    WalkTo { pos: BlockPos, radius: u32 },
    WalkToBuilding,
    InventoryFull,
    TakeAllFromGrave { pos: BlockPos },
    DumpToBuilding,
    HasTool { kind: ToolKind },
    EquipTool { kind: ToolKind },
    WearHeldTool,
    SetVisibleStatus { status: VisibleStatus },
    SetLatestStatus { status: String },
    SetIdleAtJob { idle: bool },
    GrantExperience { amount: f64 },
    SpendStamina,

    // Graveyard calls
    GraveToWorkOn,
    ClearCurrentGrave,
    SetLastRites { name: String },
    BuryHere { name: String },

    // Colony calls
    Resurrect { name: String },
    RemoveMourning { name: String, resurrected: bool },
    Broadcast { message: String },

    // Job calls
    AdvanceCurrentTask,
    PopCurrentTask,
}

/// A grave standing in the world.
#[derive(Debug, Clone)]
struct FakeGrave {
    pos: BlockPos,
    empty: bool,
    deceased: Option<DeceasedRecord>,
    /// Dig swings left before the block breaks
    swings_left: u32,
}

/// Shared state for the fake services.
struct FakeState {
    calls: Vec<ServiceCall>,

    // World
    graves: Vec<FakeGrave>,

    // Worker
    grave_walk_left: u32,
    building_walk_left: u32,
    inventory_full: bool,
    transfer_leaves_remainder: bool,
    shovel_missing: bool,
    experience: f64,
    mana_level: u32,
    idle_at_job: bool,
    visible_status: Option<VisibleStatus>,

    // Graveyard
    building_level: u32,
    pending_graves: VecDeque<BlockPos>,
    current_grave: Option<BlockPos>,
    last_rites: Option<DeceasedRecord>,
    buried: Vec<String>,

    // Colony
    mystical_site_level: u32,
    resurrected: Vec<String>,
    broadcasts: Vec<String>,
    mourning_removed: Vec<(String, bool)>,

    // Job: steps remaining per queued crafting task
    job_tasks: VecDeque<u32>,
}

impl Default for FakeState {
    fn default() -> Self {
        Self {
            calls: Vec::new(),
            graves: Vec::new(),
            grave_walk_left: 0,
            building_walk_left: 0,
            inventory_full: false,
            transfer_leaves_remainder: false,
            shovel_missing: false,
            experience: 0.0,
            mana_level: 0,
            idle_at_job: false,
            visible_status: None,
            building_level: 1,
            pending_graves: VecDeque::new(),
            current_grave: None,
            last_rites: None,
            buried: Vec::new(),
            mystical_site_level: 0,
            resurrected: Vec::new(),
            broadcasts: Vec::new(),
            mourning_removed: Vec::new(),
            job_tasks: VecDeque::new(),
        }
    }
}

/// Fake services with call recording for testing.
#[derive(Clone, Default)]
pub struct FakeServices {
    state: Arc<Mutex<FakeState>>,
}

impl FakeServices {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, FakeState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Get all recorded calls.
    pub fn calls(&self) -> Vec<ServiceCall> {
        self.lock().calls.clone()
    }

    /// Clear recorded calls.
    pub fn clear_calls(&self) {
        self.lock().calls.clear();
    }

    /// Count recorded calls matching a predicate.
    pub fn count_calls(&self, matches: impl Fn(&ServiceCall) -> bool) -> usize {
        self.lock().calls.iter().filter(|c| matches(c)).count()
    }

    // -- seeding -------------------------------------------------------------

    /// Place a grave in the world and queue it at the graveyard.
    pub fn add_pending_grave(&self, pos: BlockPos, deceased: DeceasedRecord) {
        let mut state = self.lock();
        state.graves.push(FakeGrave {
            pos,
            empty: false,
            deceased: Some(deceased),
            swings_left: 1,
        });
        state.pending_graves.push_back(pos);
    }

    /// Queue a grave at the graveyard without placing a grave block, as when
    /// the world changed under a stale assignment.
    pub fn add_phantom_grave(&self, pos: BlockPos) {
        self.lock().pending_graves.push_back(pos);
    }

    pub fn set_building_level(&self, level: u32) {
        self.lock().building_level = level;
    }

    pub fn set_mana_level(&self, level: u32) {
        self.lock().mana_level = level;
    }

    pub fn set_mystical_site_level(&self, level: u32) {
        self.lock().mystical_site_level = level;
    }

    /// Queue a crafting task taking `steps` advances to finish.
    pub fn add_job_task(&self, steps: u32) {
        self.lock().job_tasks.push_back(steps);
    }

    // -- knobs ---------------------------------------------------------------

    /// Walks toward a grave report `EnRoute` this many times before arriving.
    pub fn set_grave_walk_distance(&self, ticks: u32) {
        self.lock().grave_walk_left = ticks;
    }

    /// Walks back to the building report `EnRoute` this many times.
    pub fn set_building_walk_distance(&self, ticks: u32) {
        self.lock().building_walk_left = ticks;
    }

    /// Swings needed before a grave block breaks.
    pub fn set_dig_swings(&self, pos: BlockPos, swings: u32) {
        let mut state = self.lock();
        if let Some(grave) = state.graves.iter_mut().find(|g| g.pos == pos) {
            grave.swings_left = swings;
        }
    }

    pub fn set_inventory_full(&self, full: bool) {
        self.lock().inventory_full = full;
    }

    /// Transfers drain only part of the grave and report failure.
    pub fn set_transfer_leaves_remainder(&self, leaves: bool) {
        self.lock().transfer_leaves_remainder = leaves;
    }

    pub fn set_shovel_missing(&self, missing: bool) {
        self.lock().shovel_missing = missing;
    }

    // -- observation ---------------------------------------------------------

    pub fn idle_at_job(&self) -> bool {
        self.lock().idle_at_job
    }

    pub fn visible_status(&self) -> Option<VisibleStatus> {
        self.lock().visible_status
    }

    pub fn experience(&self) -> f64 {
        self.lock().experience
    }

    pub fn current_grave(&self) -> Option<BlockPos> {
        self.lock().current_grave
    }

    pub fn resurrected(&self) -> Vec<String> {
        self.lock().resurrected.clone()
    }

    pub fn buried(&self) -> Vec<String> {
        self.lock().buried.clone()
    }

    pub fn broadcasts(&self) -> Vec<String> {
        self.lock().broadcasts.clone()
    }

    pub fn mourning_removed(&self) -> Vec<(String, bool)> {
        self.lock().mourning_removed.clone()
    }
}

impl Services for FakeServices {
    type World = FakeWorld;
    type Worker = FakeWorker;
    type Graveyard = FakeGraveyard;
    type Colony = FakeColony;
    type Job = FakeJob;

    fn world(&self) -> FakeWorld {
        FakeWorld {
            state: self.state.clone(),
        }
    }

    fn worker(&self) -> FakeWorker {
        FakeWorker {
            state: self.state.clone(),
        }
    }

    fn graveyard(&self) -> FakeGraveyard {
        FakeGraveyard {
            state: self.state.clone(),
        }
    }

    fn colony(&self) -> FakeColony {
        FakeColony {
            state: self.state.clone(),
        }
    }

    fn job(&self) -> FakeJob {
        FakeJob {
            state: self.state.clone(),
        }
    }
}

fn lock(state: &Arc<Mutex<FakeState>>) -> std::sync::MutexGuard<'_, FakeState> {
    state.lock().unwrap_or_else(|e| e.into_inner())
}

// =============================================================================
// Fake World
// =============================================================================

#[derive(Clone)]
pub struct FakeWorld {
    state: Arc<Mutex<FakeState>>,
}

impl WorldService for FakeWorld {
    fn is_grave(&self, pos: BlockPos) -> bool {
        let mut state = lock(&self.state);
        state.calls.push(ServiceCall::IsGrave { pos });
        state.graves.iter().any(|g| g.pos == pos)
    }

    fn grave_is_empty(&self, pos: BlockPos) -> bool {
        let mut state = lock(&self.state);
        state.calls.push(ServiceCall::GraveIsEmpty { pos });
        state
            .graves
            .iter()
            .find(|g| g.pos == pos)
            .map(|g| g.empty)
            .unwrap_or(true)
    }

    fn deceased_in(&self, pos: BlockPos) -> Option<DeceasedRecord> {
        let mut state = lock(&self.state);
        state.calls.push(ServiceCall::DeceasedIn { pos });
        state
            .graves
            .iter()
            .find(|g| g.pos == pos)
            .and_then(|g| g.deceased.clone())
    }

    fn dig_step(&self, pos: BlockPos) -> bool {
        let mut state = lock(&self.state);
        state.calls.push(ServiceCall::DigStep { pos });
        let Some(index) = state.graves.iter().position(|g| g.pos == pos) else {
            return false;
        };
        if state.graves[index].swings_left > 1 {
            state.graves[index].swings_left -= 1;
            return false;
        }
        state.graves.remove(index);
        true
    }
}

// =============================================================================
// Fake Worker
// =============================================================================

#[derive(Clone)]
pub struct FakeWorker {
    state: Arc<Mutex<FakeState>>,
}

impl WorkerService for FakeWorker {
    fn walk_to(&self, pos: BlockPos, radius: u32) -> Progress {
        let mut state = lock(&self.state);
        state.calls.push(ServiceCall::WalkTo { pos, radius });
        if state.grave_walk_left > 0 {
            state.grave_walk_left -= 1;
            Progress::EnRoute
        } else {
            Progress::Arrived
        }
    }

    fn walk_to_building(&self) -> Progress {
        let mut state = lock(&self.state);
        state.calls.push(ServiceCall::WalkToBuilding);
        if state.building_walk_left > 0 {
            state.building_walk_left -= 1;
            Progress::EnRoute
        } else {
            Progress::Arrived
        }
    }

    fn inventory_full(&self) -> bool {
        let mut state = lock(&self.state);
        state.calls.push(ServiceCall::InventoryFull);
        state.inventory_full
    }

    fn take_all_from_grave(&self, pos: BlockPos) -> bool {
        let mut state = lock(&self.state);
        state.calls.push(ServiceCall::TakeAllFromGrave { pos });
        if state.transfer_leaves_remainder {
            return false;
        }
        if let Some(grave) = state.graves.iter_mut().find(|g| g.pos == pos) {
            grave.empty = true;
        }
        true
    }

    fn dump_to_building(&self) {
        let mut state = lock(&self.state);
        state.calls.push(ServiceCall::DumpToBuilding);
        state.inventory_full = false;
    }

    fn has_tool(&self, kind: ToolKind) -> bool {
        let mut state = lock(&self.state);
        state.calls.push(ServiceCall::HasTool { kind });
        !(kind == ToolKind::Shovel && state.shovel_missing)
    }

    fn equip_tool(&self, kind: ToolKind) {
        lock(&self.state).calls.push(ServiceCall::EquipTool { kind });
    }

    fn wear_held_tool(&self) {
        lock(&self.state).calls.push(ServiceCall::WearHeldTool);
    }

    fn set_visible_status(&self, status: VisibleStatus) {
        let mut state = lock(&self.state);
        state.calls.push(ServiceCall::SetVisibleStatus { status });
        state.visible_status = Some(status);
    }

    fn set_latest_status(&self, status: &str) {
        lock(&self.state).calls.push(ServiceCall::SetLatestStatus {
            status: status.to_string(),
        });
    }

    fn set_idle_at_job(&self, idle: bool) {
        let mut state = lock(&self.state);
        state.calls.push(ServiceCall::SetIdleAtJob { idle });
        state.idle_at_job = idle;
    }

    fn grant_experience(&self, amount: f64) {
        let mut state = lock(&self.state);
        state.calls.push(ServiceCall::GrantExperience { amount });
        state.experience += amount;
    }

    fn spend_stamina(&self) {
        lock(&self.state).calls.push(ServiceCall::SpendStamina);
    }

    fn mana_level(&self) -> u32 {
        lock(&self.state).mana_level
    }
}

// =============================================================================
// Fake Graveyard
// =============================================================================

#[derive(Clone)]
pub struct FakeGraveyard {
    state: Arc<Mutex<FakeState>>,
}

impl GraveyardService for FakeGraveyard {
    fn level(&self) -> u32 {
        lock(&self.state).building_level
    }

    fn has_pending_graves(&self) -> bool {
        let state = lock(&self.state);
        !state.pending_graves.is_empty() || state.current_grave.is_some()
    }

    fn grave_to_work_on(&self) -> Option<BlockPos> {
        let mut state = lock(&self.state);
        state.calls.push(ServiceCall::GraveToWorkOn);
        if state.current_grave.is_none() {
            state.current_grave = state.pending_graves.pop_front();
        }
        state.current_grave
    }

    fn clear_current_grave(&self) {
        let mut state = lock(&self.state);
        state.calls.push(ServiceCall::ClearCurrentGrave);
        state.current_grave = None;
    }

    fn set_last_rites(&self, record: DeceasedRecord) {
        let mut state = lock(&self.state);
        state.calls.push(ServiceCall::SetLastRites {
            name: record.name.clone(),
        });
        state.last_rites = Some(record);
    }

    fn last_rites(&self) -> Option<DeceasedRecord> {
        lock(&self.state).last_rites.clone()
    }

    fn bury_here(&self, name: &str) {
        let mut state = lock(&self.state);
        state.calls.push(ServiceCall::BuryHere {
            name: name.to_string(),
        });
        state.buried.push(name.to_string());
    }
}

// =============================================================================
// Fake Colony
// =============================================================================

#[derive(Clone)]
pub struct FakeColony {
    state: Arc<Mutex<FakeState>>,
}

impl ColonyService for FakeColony {
    fn mystical_site_level(&self) -> u32 {
        lock(&self.state).mystical_site_level
    }

    fn resurrect(&self, record: &DeceasedRecord) -> String {
        let mut state = lock(&self.state);
        state.calls.push(ServiceCall::Resurrect {
            name: record.name.clone(),
        });
        state.resurrected.push(record.name.clone());
        record.name.clone()
    }

    fn remove_mourning(&self, name: &str, resurrected: bool) {
        let mut state = lock(&self.state);
        state.calls.push(ServiceCall::RemoveMourning {
            name: name.to_string(),
            resurrected,
        });
        state.mourning_removed.push((name.to_string(), resurrected));
    }

    fn broadcast(&self, message: &str) {
        let mut state = lock(&self.state);
        state.calls.push(ServiceCall::Broadcast {
            message: message.to_string(),
        });
        state.broadcasts.push(message.to_string());
    }
}

// =============================================================================
// Fake Job
// =============================================================================

#[derive(Clone)]
pub struct FakeJob {
    state: Arc<Mutex<FakeState>>,
}

impl JobService for FakeJob {
    fn queue_is_empty(&self) -> bool {
        lock(&self.state).job_tasks.is_empty()
    }

    fn has_current_task(&self) -> bool {
        !lock(&self.state).job_tasks.is_empty()
    }

    fn advance_current_task(&self) -> bool {
        let mut state = lock(&self.state);
        state.calls.push(ServiceCall::AdvanceCurrentTask);
        match state.job_tasks.front_mut() {
            Some(steps) if *steps > 1 => {
                *steps -= 1;
                false
            }
            Some(_) => true,
            None => true,
        }
    }

    fn pop_current_task(&self) {
        let mut state = lock(&self.state);
        state.calls.push(ServiceCall::PopCurrentTask);
        state.job_tasks.pop_front();
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
