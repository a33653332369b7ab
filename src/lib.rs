//! Single-user kanban tracker: entity store, persistence adapter,
//! derived board views, and the CLI that drives them.

pub mod cli;
pub mod io;
pub mod model;
pub mod query;
pub mod store;
