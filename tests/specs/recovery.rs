//! Self-healing behavior: every failed precondition resets, nothing crashes.

use crate::prelude::*;
use sexton_core::{
    FakeLuck, FakeServices, RegistryError, ServiceCall, Services, StateRegistry, TaskExecutor,
    WorkerState, WorldService,
};

#[test]
fn no_pending_graves_idles_at_the_job() {
    let services = FakeServices::new();

    let mut w = worker(&services, FakeLuck::new());
    run_to_state(&mut w, WorkerState::Idle, 0, 10);

    assert!(services.idle_at_job());
}

#[test]
fn an_unbuilt_graveyard_never_leaves_preparation() {
    let services = FakeServices::new();
    services.set_building_level(0);
    grave_at(&services, 1, "Sven");

    let mut w = worker(&services, FakeLuck::new());
    for tick in 0..100 {
        w.tick(tick).unwrap();
    }

    assert_eq!(w.state(), WorkerState::Preparing);
    assert!(services.resurrected().is_empty());
    assert!(services.buried().is_empty());
}

#[test]
fn a_missing_shovel_interrupts_work_and_the_cycle_resumes_once_found() {
    let services = FakeServices::new();
    grave_at(&services, 1, "Greta");
    services.set_grave_walk_distance(2);

    let mut w = worker(&services, FakeLuck::new());
    let tick = run_to_state(&mut w, WorkerState::EmptyGrave, 0, 10);

    services.set_shovel_missing(true);
    let tick = run_to_state(&mut w, WorkerState::Preparing, tick, 10);

    // Tool restocked: preparation finds the same grave again and the cycle
    // runs to completion.
    services.set_shovel_missing(false);
    run_to_state(&mut w, WorkerState::Idle, tick, 120);

    assert_eq!(services.buried(), vec!["Greta".to_string()]);
}

#[test]
fn a_grave_that_vanished_mid_walk_abandons_the_attempt() {
    let services = FakeServices::new();
    let pos = grave_at(&services, 1, "Nils");
    services.set_grave_walk_distance(5);

    let mut w = worker(&services, FakeLuck::new());
    let tick = run_to_state(&mut w, WorkerState::EmptyGrave, 0, 10);

    // The world changes under the worker: the grave block is gone.
    while services.world().dig_step(pos) {}
    run_to_state(&mut w, WorkerState::Idle, tick, 20);

    assert_eq!(
        services.count_calls(|c| matches!(c, ServiceCall::TakeAllFromGrave { .. })),
        0
    );
}

#[test]
fn a_stale_assignment_is_dropped_without_stopping_the_worker() {
    let services = FakeServices::new();
    services.add_phantom_grave(sexton_core::BlockPos::new(9, 64, 9));

    let mut w = worker(&services, FakeLuck::new());
    run_to_state(&mut w, WorkerState::Idle, 0, 60);

    assert_eq!(
        services.count_calls(|c| matches!(c, ServiceCall::ClearCurrentGrave)),
        1
    );
    assert!(services.idle_at_job());
}

#[test]
fn dispatching_an_unregistered_state_is_a_fatal_error() {
    let registry: StateRegistry<()> = StateRegistry::builder()
        .target(WorkerState::StartWorking, 1, |_, _| WorkerState::DigGrave)
        .unwrap()
        .build();
    let mut executor = TaskExecutor::new(registry, WorkerState::StartWorking);

    executor.tick(&mut (), 0).unwrap();
    let err = executor.tick(&mut (), 1).unwrap_err();

    assert!(matches!(
        err,
        RegistryError::UnknownState(WorkerState::DigGrave)
    ));
}
