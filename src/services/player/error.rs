/// Errors that can occur during player operations
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PlayerError {
    /// A queue was offered with a start index outside of it
    #[error("Episode index {index} is out of range for a queue of {len} episodes")]
    IndexOutOfRange {
        /// Requested start index
        index: usize,
        /// Length of the offered queue
        len: usize,
    },

    /// The operation needs a current episode but the queue is empty
    #[error("No episode is queued")]
    EmptyQueue,
}
