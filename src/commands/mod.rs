pub mod memory;

use std::process::ExitCode;

/// How a command finished, mapped onto the process exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandStatus {
    /// Exit 0.
    Success,
    /// A policy check found issues. Exit 1.
    PolicyFailure,
    /// The command was invoked incorrectly. Exit 2.
    Usage,
}

impl CommandStatus {
    pub fn code(self) -> u8 {
        match self {
            CommandStatus::Success => 0,
            CommandStatus::PolicyFailure => 1,
            CommandStatus::Usage => 2,
        }
    }
}

impl From<CommandStatus> for ExitCode {
    fn from(status: CommandStatus) -> Self {
        ExitCode::from(status.code())
    }
}
