//! Tick throttling: expensive handlers run on their interval, not every tick.

use crate::prelude::*;
use sexton_core::{FakeLuck, FakeServices, ServiceCall, WorkerState};

#[test]
fn an_en_route_worker_polls_movement_every_five_ticks() {
    let services = FakeServices::new();
    grave_at(&services, 5, "Willem");
    services.set_grave_walk_distance(10);

    let mut w = worker(&services, FakeLuck::new());
    let tick = run_to_state(&mut w, WorkerState::EmptyGrave, 0, 10);

    // Thirty ticks en route: the handler fires at entry and then once per
    // five-tick window, so six walk requests, not thirty.
    for t in tick..tick + 30 {
        w.tick(t).unwrap();
    }

    assert_eq!(
        services.count_calls(|c| matches!(c, ServiceCall::WalkTo { .. })),
        6
    );
}

#[test]
fn an_idle_worker_checks_for_work_on_the_slow_cadence() {
    let services = FakeServices::new();

    let mut w = worker(&services, FakeLuck::new());
    // t0 decides, t1 prepares and idles. The idle poll and the preparation
    // gate both persist across re-entries, so preparation runs again at
    // t21, not every third tick.
    for tick in 0..24 {
        w.tick(tick).unwrap();
    }
    assert_eq!(
        services.count_calls(|c| matches!(
            c,
            ServiceCall::SetVisibleStatus {
                status: sexton_core::VisibleStatus::Working
            }
        )),
        2
    );
}

#[test]
fn throttled_ticks_do_not_touch_services_at_all() {
    let services = FakeServices::new();
    grave_at(&services, 5, "Mara");
    services.set_grave_walk_distance(10);

    let mut w = worker(&services, FakeLuck::new());
    let tick = run_to_state(&mut w, WorkerState::EmptyGrave, 0, 10);

    w.tick(tick).unwrap();
    services.clear_calls();

    // The next four ticks fall inside the active-work interval.
    for t in tick + 1..tick + 5 {
        w.tick(t).unwrap();
        assert_eq!(w.state(), WorkerState::EmptyGrave);
    }

    assert!(services.calls().is_empty());
}
