//! Game progression: the engine state machine, aggregation, and the
//! per-process session registry.

pub mod aggregate;
pub mod engine;
pub mod registry;

pub use aggregate::{aggregate, Summary};
pub use engine::GameEngine;
pub use registry::SessionRegistry;
