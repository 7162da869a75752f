//! Export adapters. Each export is a one-shot write; no state is shared
//! between targets.

pub mod sqlite;
pub mod xlsx;
