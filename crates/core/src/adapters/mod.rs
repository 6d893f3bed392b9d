// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Service contracts for the host engine, plus recording fakes for tests

pub mod fake;
pub mod traits;

pub use fake::{FakeServices, ServiceCall};
pub use traits::{
    BlockPos, ColonyService, DeceasedRecord, GraveyardService, JobService, Progress, Services,
    ToolKind, VisibleStatus, WorkerService, WorldService,
};
