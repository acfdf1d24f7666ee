mod dispatch;
mod types;

pub use dispatch::{dispatch, reject};
pub use types::Cli;
