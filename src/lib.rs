pub mod config;
pub mod error;
pub mod optimizer;
pub mod roster;
pub mod schedule;
pub mod scorer;
pub mod template;
// cmd and reports belong to the binary (see main.rs).

pub use error::{CfResult, ScheduleError};
pub use optimizer::initialization::build_schedule;
pub use optimizer::mutation::swap;
pub use optimizer::optimize;
pub use schedule::Schedule;
pub use scorer::{all_good, evaluate};
