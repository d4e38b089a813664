use thiserror::Error;

/// Top-level error type for the pipeline core
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoreError {
    #[error("unknown opcode encountered in stage {stage}")]
    UnknownOpcode { stage: Stage },
}

/// Result alias used throughout the core
pub type CoreResult<T> = Result<T, CoreError>;

/// The five pipeline stages, used only to annotate where an error occurred
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    Fetch,
    Decode,
    Execute,
    Memory,
    Writeback,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Stage::Fetch => "IF",
            Stage::Decode => "ID",
            Stage::Execute => "EX",
            Stage::Memory => "MEM",
            Stage::Writeback => "WB",
        };
        write!(f, "{name}")
    }
}
