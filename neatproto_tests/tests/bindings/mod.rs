//! Hand-written stand-ins for generated bindings.

mod ledger;
mod shape;

pub use ledger::*;
pub use shape::*;
