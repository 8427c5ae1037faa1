use thiserror::Error;

/// Errors reported by container mutation and resolution operations.
///
/// Every fallible operation returns one of these; the `must_*` variants
/// panic with the same message instead. `PartialEq` is derived so tests
/// can assert on exact failure causes.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContainerError {
    /// A bind call occurred after `lock()`.
    #[error("service container locked, no more services can be bound")]
    Locked,

    /// A bind call targeted a name that is already bound.
    #[error("service with name {name} already bound")]
    AlreadyBound {
        /// The name that was already present in the container.
        name: String,
    },

    /// A resolution call targeted a name with no binding.
    #[error("{name} service not found in container")]
    NotFound {
        /// The name that was requested.
        name: String,
    },

    /// A typed retrieval found a binding, but the produced value is not of
    /// the requested type.
    #[error("unable to convert {name} to the requested type")]
    TypeMismatch {
        /// The name whose value failed the downcast.
        name: String,
    },
}
