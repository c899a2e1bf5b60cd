//! Ledger state structures

pub mod allow_list;
pub mod ledger;

pub use allow_list::*;
pub use ledger::*;
