pub mod decrease_position;
pub mod increase_position;
pub mod initialize;
pub mod receive_custody;
pub mod set_cap;

pub use decrease_position::*;
pub use increase_position::*;
pub use initialize::*;
pub use receive_custody::*;
pub use set_cap::*;
