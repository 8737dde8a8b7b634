//! Parser for `/proc/[pid]/stat` files.
//!
//! The [`ProcStat`] record, and most of its parser, are generated from the
//! proc(5) manual page when the crate is built.
//!
//! ```no_run
//! let stat = procstat::ProcStat::read(std::process::id() as i32)?;
//! let cpu = stat.cpu_time();
//! # Ok::<(), procstat::Error>(())
//! ```

pub mod clock;
mod error;
mod fields;
mod stat;


pub use error::{Error, ParseError};
pub use stat::{ProcStat, StatField};
