//! Pile system: the ordered card containers and the reference vocabulary
//! used to address them.

mod pile;
mod refs;

pub use pile::Pile;
pub use refs::{PileRef, N_TABLEAU};
