use thiserror::Error;

/// Main error type for multiplex planning and execution
#[derive(Error, Debug)]
pub enum MuxError {
    /// Bad input: no valid plan exists for the request
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Demand counting and label allocation disagree
    #[error("Allocation invariant violated: {0}")]
    AllocationInvariant(String),

    #[error("Probe error: {0}")]
    Probe(#[from] ProbeError),

    #[error("Execution error: {0}")]
    Execution(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config file error: {0}")]
    ConfigFile(String),

    #[error("Serialization error: {0}")]
    Serialize(String),
}

impl MuxError {
    /// True when the error was caused by the caller's input
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            MuxError::Configuration(_)
                | MuxError::ConfigFile(_)
                | MuxError::Probe(ProbeError::NoAudioStream(_))
        )
    }

    /// True when the error indicates a bug in the engine itself
    pub fn is_engine_defect(&self) -> bool {
        matches!(self, MuxError::AllocationInvariant(_))
    }
}

/// Media probing errors
#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("FFmpeg initialization failed: {0}")]
    InitFailed(String),

    #[error("Failed to open input file: {0}")]
    OpenInput(String),

    #[error("No audio stream found in {0}")]
    NoAudioStream(String),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, MuxError>;
