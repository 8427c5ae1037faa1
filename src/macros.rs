//! Macro for creating process-wide service containers.
//!
//! The library keeps no hidden global container. Applications that want a
//! single process-wide instance opt in explicitly with [`define_container!`],
//! which keeps test processes free to create as many isolated containers as
//! they need.

/// Creates a module wrapping one process-wide [`Container`](crate::Container)
/// behind free functions.
///
/// The generated module holds a lazily-created static container (hidden) and
/// delegates `bind`, `bind_singleton`, their `must_` variants, `lock`,
/// `resolver`, `contains`, and the trace-callback hooks to it.
///
/// # Examples
///
/// ```rust
/// use service_container::define_container;
/// use std::sync::Arc;
///
/// // Create a process-wide container
/// define_container!(app);
///
/// // Bind dependencies during startup
/// app::must_bind("port", |_| 8080u16);
/// app::must_bind_singleton("motd", |_| "welcome".to_string());
/// app::lock();
///
/// // Resolve anywhere in the application
/// let port: Arc<u16> = service_container::must_resolve("port", &app::resolver());
/// assert_eq!(*port, 8080);
/// ```
///
/// # Multiple Containers
///
/// Each invocation creates a completely isolated container:
///
/// ```rust
/// use service_container::define_container;
///
/// define_container!(primary);
/// define_container!(fallback);
///
/// primary::must_bind("dsn", |_| "postgres://primary".to_string());
/// fallback::must_bind("dsn", |_| "postgres://replica".to_string());
///
/// assert!(primary::contains("dsn"));
/// assert!(fallback::contains("dsn"));
/// ```
#[macro_export]
macro_rules! define_container {
    ($name:ident) => {
        pub mod $name {
            use std::sync::LazyLock;

            // Process-wide container (module-private)
            static CONTAINER: LazyLock<$crate::Container> = LazyLock::new($crate::Container::new);

            /// Bind an instanced dependency.
            pub fn bind<T, F>(
                name: impl Into<String>,
                factory: F,
            ) -> Result<(), $crate::ContainerError>
            where
                T: Send + Sync + 'static,
                F: Fn(&$crate::Resolver) -> T + Send + Sync + 'static,
            {
                CONTAINER.bind(name, factory)
            }

            /// Bind an instanced dependency, panicking on a failed bind.
            pub fn must_bind<T, F>(name: impl Into<String>, factory: F)
            where
                T: Send + Sync + 'static,
                F: Fn(&$crate::Resolver) -> T + Send + Sync + 'static,
            {
                CONTAINER.must_bind(name, factory)
            }

            /// Bind a singleton dependency.
            pub fn bind_singleton<T, F>(
                name: impl Into<String>,
                factory: F,
            ) -> Result<(), $crate::ContainerError>
            where
                T: Send + Sync + 'static,
                F: Fn(&$crate::Resolver) -> T + Send + Sync + 'static,
            {
                CONTAINER.bind_singleton(name, factory)
            }

            /// Bind a singleton dependency, panicking on a failed bind.
            pub fn must_bind_singleton<T, F>(name: impl Into<String>, factory: F)
            where
                T: Send + Sync + 'static,
                F: Fn(&$crate::Resolver) -> T + Send + Sync + 'static,
            {
                CONTAINER.must_bind_singleton(name, factory)
            }

            /// Lock the container against further binds.
            pub fn lock() {
                CONTAINER.lock()
            }

            /// Check whether a dependency is bound under `name`.
            pub fn contains(name: &str) -> bool {
                CONTAINER.contains(name)
            }

            /// Derive a resolver from the container.
            pub fn resolver() -> $crate::Resolver {
                CONTAINER.resolver()
            }

            /// Set a tracing callback for container operations.
            pub fn set_trace_callback(
                callback: impl Fn(&$crate::ContainerEvent) + Send + Sync + 'static,
            ) {
                CONTAINER.set_trace_callback(callback)
            }

            /// Clear the tracing callback.
            pub fn clear_trace_callback() {
                CONTAINER.clear_trace_callback()
            }
        }
    };
}
