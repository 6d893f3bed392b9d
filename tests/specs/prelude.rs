//! Shared helpers for grave worker specs.

use sexton_core::{
    BlockPos, DeceasedRecord, FakeLuck, FakeServices, Gravedigger, WorkerConfig, WorkerState,
};

pub fn deceased(name: &str) -> DeceasedRecord {
    DeceasedRecord::new(name, serde_json::json!({"inventory": ["boots", "bread"]}))
}

/// A worker over fresh fakes with default configuration.
pub fn worker(
    services: &FakeServices,
    luck: FakeLuck,
) -> Gravedigger<FakeServices, FakeLuck> {
    Gravedigger::new(services.clone(), luck, WorkerConfig::default()).unwrap()
}

/// Tick until the worker reaches `target`; panics when the budget runs out.
/// Returns the next tick counter.
pub fn run_to_state(
    worker: &mut Gravedigger<FakeServices, FakeLuck>,
    target: WorkerState,
    mut tick: u64,
    budget: u64,
) -> u64 {
    for _ in 0..budget {
        worker.tick(tick).unwrap();
        tick += 1;
        if worker.state() == target {
            return tick;
        }
    }
    panic!(
        "never reached {:?} within {} ticks, stuck in {:?}",
        target,
        budget,
        worker.state()
    );
}

/// Record every state the worker passes through over `ticks` ticks.
pub fn state_trace(
    worker: &mut Gravedigger<FakeServices, FakeLuck>,
    ticks: u64,
) -> Vec<WorkerState> {
    let mut trace = vec![worker.state()];
    for tick in 0..ticks {
        worker.tick(tick).unwrap();
        if trace.last() != Some(&worker.state()) {
            trace.push(worker.state());
        }
    }
    trace
}

pub fn grave_at(services: &FakeServices, x: i32, name: &str) -> BlockPos {
    let pos = BlockPos::new(x, 64, 0);
    services.add_pending_grave(pos, deceased(name));
    pos
}
