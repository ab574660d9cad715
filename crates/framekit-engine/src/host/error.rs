use std::fmt;

/// Reason a host refused to schedule a frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostError {
    /// The host context is gone.
    Unavailable,
    /// The host was configured to deliver a fixed number of frames and has delivered them.
    BudgetExhausted { frames: u64 },
}

impl fmt::Display for HostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable => write!(f, "frame host is unavailable"),
            Self::BudgetExhausted { frames } => {
                write!(f, "frame host delivered its budget of {frames} frames")
            }
        }
    }
}

impl std::error::Error for HostError {}
