pub mod analyze;
pub mod backends;
pub mod config;
pub mod scan;
pub mod util;

pub use analyze::*;
pub use backends::*;
pub use config::*;
pub use scan::*;
pub use util::*;
