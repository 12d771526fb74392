use thiserror::Error;

/// Errors surfaced by the group-state subsystem.
///
/// The derivation core itself is infallible: absent entities and unknown
/// ids degrade to empty results by contract. The only failure mode is a
/// poisoned lock in the thread-safe store adapter.
#[derive(Debug, Error)]
pub enum StateError {
    #[error("Store lock poisoned")]
    LockPoisoned,
}
