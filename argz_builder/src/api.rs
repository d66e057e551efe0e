mod arg;
mod var;

pub use arg::*;
pub use var::*;
