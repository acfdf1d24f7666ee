//! Memory command implementations.
//!
//! Commands:
//! - `memroll ensure` - Create missing memory files from templates
//! - `memroll check` - Check the index file's size and sections
//! - `memroll append <text>...` - Append a dated entry to this month's log
//! - `memroll rollup [YYYY-MM]` - Roll up an oversized monthly log

mod formatters;
mod handlers;

pub use handlers::{append, check, ensure, rollup};
