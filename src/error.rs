/// Failures reported by queue operations.
///
/// Every fallible operation reports through this type instead of panicking,
/// and none of them retries internally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum QueueError {
    /// Node or payload storage could not be obtained.
    #[error("allocation of {bytes} bytes failed")]
    AllocationFailure { bytes: usize },
    /// The operation needs at least one element.
    #[error("queue is empty")]
    Empty,
}
