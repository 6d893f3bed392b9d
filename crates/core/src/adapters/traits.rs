// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Service trait definitions for the surrounding game engine
//!
//! The worker only ever *requests* mutations through these contracts; world
//! state, pathfinding, and inventories are owned by the host. Methods return
//! plain values, never errors: a target that vanished or a tool that went
//! missing is an expected condition the state machine answers with a
//! transition, not an exception.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// =============================================================================
// Domain types
// =============================================================================

/// A block position in the colony world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl BlockPos {
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }
}

impl std::fmt::Display for BlockPos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// Outcome of a movement request. A request that has not arrived yet is
/// re-issued on a later tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    EnRoute,
    Arrived,
}

impl Progress {
    pub fn arrived(self) -> bool {
        self == Progress::Arrived
    }
}

/// Tool kinds a worker can be asked to hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ToolKind {
    Shovel,
}

impl std::fmt::Display for ToolKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ToolKind::Shovel => write!(f, "shovel"),
        }
    }
}

/// On-screen activity indicator for the worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibleStatus {
    Working,
    Emptying,
    Digging,
    Burying,
    Resurrecting,
}

/// Identity and body data of a deceased citizen, carried from the dig to the
/// resurrection attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeceasedRecord {
    pub id: Uuid,
    pub name: String,
    /// Serialized body data in whatever shape the host persists
    pub body: serde_json::Value,
    pub died_at: DateTime<Utc>,
}

impl DeceasedRecord {
    pub fn new(name: impl Into<String>, body: serde_json::Value) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            body,
            died_at: Utc::now(),
        }
    }
}

// =============================================================================
// World
// =============================================================================

/// Read/mutate access to grave blocks in the world.
pub trait WorldService: Clone + Send + Sync + 'static {
    /// Whether the block at `pos` is still a grave.
    fn is_grave(&self, pos: BlockPos) -> bool;

    /// Whether the grave's item storage is drained.
    fn grave_is_empty(&self, pos: BlockPos) -> bool;

    /// The deceased stored in the grave, if any.
    fn deceased_in(&self, pos: BlockPos) -> Option<DeceasedRecord>;

    /// Perform one swing of the dig. True iff the grave block broke and was
    /// cleared this call.
    fn dig_step(&self, pos: BlockPos) -> bool;
}

// =============================================================================
// Worker entity
// =============================================================================

/// The worker's own body: movement, inventory, held tools, presentation,
/// and progression.
pub trait WorkerService: Clone + Send + Sync + 'static {
    /// Request a walk toward `pos`. `Arrived` once within `radius` blocks.
    fn walk_to(&self, pos: BlockPos, radius: u32) -> Progress;

    /// Request a walk back to the worker's own building.
    fn walk_to_building(&self) -> Progress;

    fn inventory_full(&self) -> bool;

    /// Move everything out of the grave at `pos` into the worker's
    /// inventory. True iff the grave was fully drained.
    fn take_all_from_grave(&self, pos: BlockPos) -> bool;

    /// Hand the worker's carried items to its building.
    fn dump_to_building(&self);

    fn has_tool(&self, kind: ToolKind) -> bool;
    fn equip_tool(&self, kind: ToolKind);
    fn wear_held_tool(&self);

    fn set_visible_status(&self, status: VisibleStatus);
    fn set_latest_status(&self, status: &str);
    fn set_idle_at_job(&self, idle: bool);

    fn grant_experience(&self, amount: f64);
    fn spend_stamina(&self);

    fn mana_level(&self) -> u32;
}

// =============================================================================
// Graveyard building
// =============================================================================

/// The worker's home building: grave assignments and last rites.
pub trait GraveyardService: Clone + Send + Sync + 'static {
    /// Building level; 0 when missing or not yet built.
    fn level(&self) -> u32;

    fn has_pending_graves(&self) -> bool;

    /// The grave currently assigned to this worker, assigning one from the
    /// pending set if none is.
    fn grave_to_work_on(&self) -> Option<BlockPos>;

    fn clear_current_grave(&self);

    /// Remember whose remains were just dug up.
    fn set_last_rites(&self, record: DeceasedRecord);

    fn last_rites(&self) -> Option<DeceasedRecord>;

    /// Commit the deceased to a plot at the graveyard.
    fn bury_here(&self, name: &str);
}

// =============================================================================
// Colony
// =============================================================================

/// Colony-wide services: citizen registry, mourning, chat.
pub trait ColonyService: Clone + Send + Sync + 'static {
    fn mystical_site_level(&self) -> u32;

    /// Revive the deceased into a live citizen; returns the citizen's name.
    fn resurrect(&self, record: &DeceasedRecord) -> String;

    fn remove_mourning(&self, name: &str, resurrected: bool);

    fn broadcast(&self, message: &str);
}

// =============================================================================
// Job
// =============================================================================

/// The worker's job record: the crafting task queue.
pub trait JobService: Clone + Send + Sync + 'static {
    fn queue_is_empty(&self) -> bool;

    fn has_current_task(&self) -> bool;

    /// Advance the current task one step. True iff it finished.
    fn advance_current_task(&self) -> bool;

    fn pop_current_task(&self);
}

// =============================================================================
// Bundle
// =============================================================================

/// Everything a grave worker touches, bundled for construction.
pub trait Services: Clone + Send + 'static {
    type World: WorldService;
    type Worker: WorkerService;
    type Graveyard: GraveyardService;
    type Colony: ColonyService;
    type Job: JobService;

    fn world(&self) -> Self::World;
    fn worker(&self) -> Self::Worker;
    fn graveyard(&self) -> Self::Graveyard;
    fn colony(&self) -> Self::Colony;
    fn job(&self) -> Self::Job;
}
