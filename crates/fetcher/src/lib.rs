mod snapshot;
mod utils;

pub use snapshot::*;
pub use utils::*;
