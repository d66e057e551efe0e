mod base;
mod interface;
mod middleware;
mod printer;

pub use base::*;
pub use interface::*;
pub use middleware::*;
pub use printer::*;
