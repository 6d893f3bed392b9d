//! Full dig-bury-resurrect cycles.

use crate::prelude::*;
use sexton_core::{FakeLuck, FakeServices, ServiceCall, WorkerState};
use sexton_engine::{Runtime, RuntimeConfig};
use std::time::Duration;

#[test]
fn a_cycle_walks_the_expected_states_in_order() {
    let services = FakeServices::new();
    grave_at(&services, 5, "Willem");

    // Walks arrive instantly and the dig takes one swing, so each state
    // needs exactly one tick.
    let mut w = worker(&services, FakeLuck::new());
    let trace = state_trace(&mut w, 6);

    assert_eq!(
        trace,
        vec![
            WorkerState::StartWorking,
            WorkerState::Preparing,
            WorkerState::EmptyGrave,
            WorkerState::DigGrave,
            WorkerState::BuryCitizen,
            WorkerState::TryResurrect,
            WorkerState::Idle,
        ]
    );
}

#[test]
fn a_low_roll_resurrects_and_tells_the_colony() {
    let services = FakeServices::new();
    grave_at(&services, 5, "Willem");
    services.set_building_level(4);
    services.set_mana_level(10);

    let luck = FakeLuck::new();
    luck.enqueue(0.001);

    let mut w = worker(&services, luck);
    run_to_state(&mut w, WorkerState::Idle, 0, 60);

    assert_eq!(services.resurrected(), vec!["Willem".to_string()]);
    assert!(services.broadcasts()[0].contains("Willem"));
    assert!(services.buried().is_empty());
    assert!(w.wants_resource_dump());
}

#[test]
fn a_high_roll_reburies_under_the_same_name() {
    let services = FakeServices::new();
    grave_at(&services, 5, "Mara");

    let luck = FakeLuck::new();
    luck.enqueue(0.9999);

    let mut w = worker(&services, luck);
    run_to_state(&mut w, WorkerState::Idle, 0, 60);

    assert_eq!(services.buried(), vec!["Mara".to_string()]);
    assert!(services.resurrected().is_empty());
    assert!(w.wants_resource_dump());
}

#[test]
fn mourning_is_lifted_on_burial_and_again_on_resurrection() {
    let services = FakeServices::new();
    grave_at(&services, 2, "Edda");

    let luck = FakeLuck::new();
    luck.enqueue(0.0);

    let mut w = worker(&services, luck);
    run_to_state(&mut w, WorkerState::Idle, 0, 60);

    assert_eq!(
        services.mourning_removed(),
        vec![("Edda".to_string(), false), ("Edda".to_string(), true)]
    );
}

#[test]
fn digging_pays_experience_and_wears_the_shovel() {
    let services = FakeServices::new();
    grave_at(&services, 1, "Otto");

    let mut w = worker(&services, FakeLuck::new());
    run_to_state(&mut w, WorkerState::BuryCitizen, 0, 30);

    assert_eq!(services.experience(), 0.5);
    assert_eq!(
        services.count_calls(|c| matches!(c, ServiceCall::WearHeldTool)),
        1
    );
    assert_eq!(
        services.count_calls(|c| matches!(c, ServiceCall::SpendStamina)),
        1
    );
    assert_eq!(services.current_grave(), None);
}

#[tokio::test]
async fn the_engine_runtime_runs_the_cycle_end_to_end() {
    let services = FakeServices::new();
    grave_at(&services, 3, "Hilda");
    let luck = FakeLuck::new();
    luck.enqueue(0.0);

    let mut runtime = Runtime::new(
        worker(&services, luck),
        RuntimeConfig {
            tick_length: Duration::from_millis(0),
        },
    );
    runtime.run_ticks(60).await.unwrap();

    assert_eq!(services.resurrected(), vec!["Hilda".to_string()]);
    // The loop consumed the dump request on the worker's behalf.
    assert_eq!(
        services.count_calls(|c| matches!(c, ServiceCall::DumpToBuilding)),
        1
    );
}
