// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Uniform draws behind a trait so rolls are scriptable in tests

use rand::Rng;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// A source of uniform draws in [0, 1).
pub trait Luck: Send + 'static {
    fn draw(&mut self) -> f64;
}

/// Real draws from the thread RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadLuck;

impl Luck for ThreadLuck {
    fn draw(&mut self) -> f64 {
        rand::thread_rng().gen::<f64>()
    }
}

/// Scripted draws for tests. Replays queued values in order; once drained,
/// every draw returns 0.99 so capped chances fail the roll.
#[derive(Clone, Default)]
pub struct FakeLuck {
    rolls: Arc<Mutex<VecDeque<f64>>>,
}

impl FakeLuck {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the next value `draw` returns.
    pub fn enqueue(&self, roll: f64) {
        self.rolls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push_back(roll);
    }
}

impl Luck for FakeLuck {
    fn draw(&mut self) -> f64 {
        self.rolls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .pop_front()
            .unwrap_or(0.99)
    }
}
