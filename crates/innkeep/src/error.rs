//! Unified error type for Innkeep.

use innkeep_room::InventoryError;
use innkeep_service::ServiceError;
use innkeep_store::StoreError;

/// Top-level error that wraps all crate-specific errors.
///
/// When using the `innkeep` facade crate, you deal with this single
/// error type instead of importing errors from each sub-crate. The
/// `#[from]` attribute on each variant generates a `From` impl, so `?`
/// converts sub-crate errors automatically.
#[derive(Debug, thiserror::Error)]
pub enum InnkeepError {
    /// A room-layer error (slot occupied, empty, out of range).
    #[error(transparent)]
    Room(#[from] InventoryError),

    /// A front-desk error (room not available, bad guest details, ...).
    #[error(transparent)]
    Service(#[from] ServiceError),

    /// A snapshot error (I/O, encode, decode).
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The user typed something that isn't a number where one was needed.
    #[error("invalid input {0:?}, please enter a number")]
    MalformedNumericInput(String),

    /// Reading from or writing to the console failed.
    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The console task panicked or was cancelled.
    #[error("console task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

#[cfg(test)]
mod tests {
    use innkeep_room::RoomNumber;

    use super::*;

    #[test]
    fn test_from_inventory_error() {
        let err = InventoryError::SlotEmpty(RoomNumber(7));
        let innkeep_err: InnkeepError = err.into();
        assert!(matches!(innkeep_err, InnkeepError::Room(_)));
        assert!(innkeep_err.to_string().contains("#7"));
    }

    #[test]
    fn test_from_service_error() {
        let err = ServiceError::RoomNotAvailable(RoomNumber(12));
        let innkeep_err: InnkeepError = err.into();
        assert!(matches!(innkeep_err, InnkeepError::Service(_)));
        assert_eq!(innkeep_err.to_string(), "room #12 is not available");
    }

    #[test]
    fn test_from_store_error() {
        let err = StoreError::TaskFailed("cancelled".into());
        let innkeep_err: InnkeepError = err.into();
        assert!(matches!(innkeep_err, InnkeepError::Store(_)));
    }

    #[test]
    fn test_malformed_numeric_input_message() {
        let err = InnkeepError::MalformedNumericInput("abc".into());
        assert_eq!(err.to_string(), "invalid input \"abc\", please enter a number");
    }
}
