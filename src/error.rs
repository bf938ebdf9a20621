use crate::core::Ticks;
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("burst time must be positive (got {0})")]
    BurstNotPositive(Ticks),
}
