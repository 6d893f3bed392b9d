// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Step handlers for the gravedigger
//!
//! Each handler performs at most one unit of externally visible work and
//! returns the next state. Returning its own state means a sub-step (a walk,
//! a dig) is still in progress and the handler wants another tick.

use super::GraveContext;
use crate::adapters::{
    ColonyService, GraveyardService, JobService, Services, ToolKind, VisibleStatus, WorkerService,
    WorldService,
};
use crate::executor::TickControl;
use crate::luck::Luck;
use crate::state::WorkerState;

/// Cycle entry: idle work goes through `Preparing`, queued crafting tasks
/// through `GetRecipe`.
pub(super) fn decide<S: Services, L: Luck>(
    ctx: &mut GraveContext<S, L>,
    _control: &mut TickControl,
) -> WorkerState {
    let job = ctx.services.job();
    if job.queue_is_empty() || !job.has_current_task() {
        return WorkerState::Preparing;
    }
    WorkerState::GetRecipe
}

/// Crafting hand-off: advance the job's current task one step per tick.
pub(super) fn collect_recipe<S: Services, L: Luck>(
    ctx: &mut GraveContext<S, L>,
    _control: &mut TickControl,
) -> WorkerState {
    let job = ctx.services.job();
    if !job.has_current_task() {
        return WorkerState::StartWorking;
    }
    if job.advance_current_task() {
        job.pop_current_task();
        return WorkerState::StartWorking;
    }
    WorkerState::GetRecipe
}

/// Supervisory reset point: re-check the building, the crafting queue, and
/// the grave assignment, then route to the right work state.
pub(super) fn prepare<S: Services, L: Luck>(
    ctx: &mut GraveContext<S, L>,
    _control: &mut TickControl,
) -> WorkerState {
    let graveyard = ctx.services.graveyard();
    if graveyard.level() == 0 {
        // Building missing or not yet built; keep retrying.
        return WorkerState::Preparing;
    }

    if !ctx.services.job().queue_is_empty() {
        return WorkerState::StartWorking;
    }

    let worker = ctx.services.worker();
    worker.set_visible_status(VisibleStatus::Working);

    if !graveyard.has_pending_graves() {
        worker.set_idle_at_job(true);
        return WorkerState::Idle;
    }
    worker.set_idle_at_job(false);

    let Some(grave) = graveyard.grave_to_work_on() else {
        return WorkerState::Idle;
    };

    if ctx.services.world().is_grave(grave) {
        return WorkerState::EmptyGrave;
    }

    // The assigned block is no longer a grave; drop the stale assignment
    // and re-evaluate.
    tracing::warn!(grave = %grave, "assigned grave vanished, clearing");
    graveyard.clear_current_grave();
    WorkerState::Preparing
}

/// Walk to the grave and drain its stored items into the worker's inventory.
pub(super) fn empty_grave<S: Services, L: Luck>(
    ctx: &mut GraveContext<S, L>,
    control: &mut TickControl,
) -> WorkerState {
    let graveyard = ctx.services.graveyard();
    let worker = ctx.services.worker();
    if graveyard.level() == 0 || !worker.has_tool(ToolKind::Shovel) {
        return WorkerState::Preparing;
    }
    let Some(grave) = graveyard.grave_to_work_on() else {
        return WorkerState::Preparing;
    };

    worker.set_visible_status(VisibleStatus::Emptying);
    worker.set_latest_status("emptying the grave");

    let world = ctx.services.world();
    if !world.is_grave(grave) {
        return WorkerState::Idle;
    }
    if world.grave_is_empty(grave) {
        return WorkerState::DigGrave;
    }
    if worker.inventory_full() {
        // Can't carry more; hand the load to the building before resuming.
        control.request_inventory_dump();
        return WorkerState::Idle;
    }
    if !worker.walk_to(grave, 1).arrived() {
        return WorkerState::EmptyGrave;
    }
    if worker.take_all_from_grave(grave) {
        return WorkerState::DigGrave;
    }
    WorkerState::Idle
}

/// Mine out the grave block, remembering the deceased before it breaks.
pub(super) fn dig_grave<S: Services, L: Luck>(
    ctx: &mut GraveContext<S, L>,
    _control: &mut TickControl,
) -> WorkerState {
    let graveyard = ctx.services.graveyard();
    let worker = ctx.services.worker();
    if graveyard.level() == 0 || !worker.has_tool(ToolKind::Shovel) {
        return WorkerState::Preparing;
    }
    let Some(grave) = graveyard.grave_to_work_on() else {
        return WorkerState::Preparing;
    };

    worker.set_visible_status(VisibleStatus::Digging);
    worker.set_latest_status("digging up the grave");

    let world = ctx.services.world();
    if !world.is_grave(grave) {
        return WorkerState::Idle;
    }
    if !worker.walk_to(grave, 1).arrived() {
        return WorkerState::DigGrave;
    }

    if let Some(record) = world.deceased_in(grave) {
        graveyard.set_last_rites(record);
    }

    if !world.dig_step(grave) {
        // Still mining.
        return WorkerState::DigGrave;
    }

    worker.equip_tool(ToolKind::Shovel);
    worker.wear_held_tool();
    worker.spend_stamina();
    worker.grant_experience(ctx.xp_per_dig);
    graveyard.clear_current_grave();
    tracing::info!(grave = %grave, "grave dug up");
    WorkerState::BuryCitizen
}

/// Carry the deceased back to the graveyard.
pub(super) fn bury_citizen<S: Services, L: Luck>(
    ctx: &mut GraveContext<S, L>,
    _control: &mut TickControl,
) -> WorkerState {
    let graveyard = ctx.services.graveyard();
    let worker = ctx.services.worker();
    if graveyard.level() == 0 || !worker.has_tool(ToolKind::Shovel) {
        return WorkerState::Preparing;
    }
    let Some(record) = graveyard.last_rites() else {
        return WorkerState::Preparing;
    };

    worker.set_visible_status(VisibleStatus::Burying);
    worker.set_latest_status("burying the deceased");

    if !worker.walk_to_building().arrived() {
        return WorkerState::BuryCitizen;
    }

    ctx.services.colony().remove_mourning(&record.name, false);
    WorkerState::TryResurrect
}

/// Roll for resurrection at the graveyard. Success revives the citizen and
/// tells the colony; failure commits them to a plot. Either way the cycle
/// ends with a dump request.
pub(super) fn try_resurrect<S: Services, L: Luck>(
    ctx: &mut GraveContext<S, L>,
    control: &mut TickControl,
) -> WorkerState {
    let graveyard = ctx.services.graveyard();
    let worker = ctx.services.worker();
    if graveyard.level() == 0 || !worker.has_tool(ToolKind::Shovel) {
        return WorkerState::Preparing;
    }
    let Some(record) = graveyard.last_rites() else {
        return WorkerState::Preparing;
    };

    worker.set_visible_status(VisibleStatus::Resurrecting);
    worker.set_latest_status("attempting a resurrection");

    if !worker.walk_to_building().arrived() {
        return WorkerState::TryResurrect;
    }

    let colony = ctx.services.colony();
    let chance = ctx.odds.chance(
        graveyard.level(),
        worker.mana_level(),
        colony.mystical_site_level(),
    );
    let roll = ctx.luck.draw();

    if roll <= chance {
        let name = colony.resurrect(&record);
        tracing::info!(citizen = %name, chance, "resurrection succeeded");
        colony.broadcast(&format!("{} has been brought back to life!", name));
        colony.remove_mourning(&record.name, true);
    } else {
        tracing::info!(citizen = %record.name, chance, roll, "resurrection failed, burying");
        graveyard.bury_here(&record.name);
    }

    control.request_inventory_dump();
    WorkerState::Idle
}
