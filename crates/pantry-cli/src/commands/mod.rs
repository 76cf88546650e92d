use std::process::ExitCode;

pub mod batch;
pub mod schema;
pub mod validate;

/// What a command found, separate from whether it ran.
///
/// Operational failures travel as `Err`; `Invalid` means the command ran to
/// completion and the input did not pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Valid,
    Invalid,
}

impl Outcome {
    #[must_use]
    pub fn exit_code(self) -> ExitCode {
        match self {
            Self::Valid => ExitCode::SUCCESS,
            Self::Invalid => ExitCode::FAILURE,
        }
    }
}
