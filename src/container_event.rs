/// Events emitted by the container during operations.
///
/// These events are passed to the tracing callback set via
/// `Container::set_trace_callback`. The `Clone` derive allows callbacks to
/// store or forward events if needed.
///
/// # Examples
///
/// ```rust
/// use service_container::ContainerEvent;
///
/// let event = ContainerEvent::Bind {
///     name: "database".to_string(),
///     singleton: false,
/// };
/// println!("{:?}", event);
/// ```
#[derive(Debug, Clone)]
pub enum ContainerEvent {
    /// A factory was bound in the container.
    Bind {
        /// The name the factory was bound under.
        name: String,
        /// Whether the factory was wrapped in the singleton adapter.
        singleton: bool,
    },

    /// The container was locked.
    Lock,

    /// A resolution was attempted.
    Resolve {
        /// The name that was requested.
        name: String,
        /// Whether a binding with that name exists.
        found: bool,
    },

    /// A presence check was performed.
    Contains {
        /// The name that was checked.
        name: String,
        /// Whether a binding with that name exists.
        found: bool,
    },
}

impl std::fmt::Display for ContainerEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContainerEvent::Bind { name, singleton } => {
                write!(f, "bind {{ name: {}, singleton: {} }}", name, singleton)
            }
            ContainerEvent::Lock => write!(f, "lock"),
            ContainerEvent::Resolve { name, found } => {
                write!(f, "resolve {{ name: {}, found: {} }}", name, found)
            }
            ContainerEvent::Contains { name, found } => {
                write!(f, "contains {{ name: {}, found: {} }}", name, found)
            }
        }
    }
}

/// Type alias for the user-supplied tracing callback.
///
/// The callback receives a reference to a [`ContainerEvent`] every time the
/// container is interacted with. It must be thread-safe because resolvers
/// may emit events from any thread.
pub type TraceCallback = dyn Fn(&ContainerEvent) + Send + Sync + 'static;
