//! # Service Container
//!
//! A small, thread-safe, name-keyed service container for dependency
//! injection without code generation.
//!
//! Dependencies are bound to a [`Container`] under string names, either
//! instanced (constructed on every resolution) or as singletons
//! (constructed once, lazily, and shared). After the binding phase the
//! container can be locked, and dependencies are resolved by name through
//! a [`Resolver`] obtained from the container.
//!
//! ## Quick Start
//!
//! ```rust
//! use service_container::{must_resolve, Container};
//! use std::sync::Arc;
//!
//! // Create the container and bind dependencies
//! let container = Container::new();
//! container.must_bind("greeting", |_| "Hello, World!".to_string());
//! container.must_bind_singleton("started-at", |_| std::time::Instant::now());
//! container.lock();
//!
//! // Pass the resolver along with the context of your application
//! let resolver = container.resolver();
//!
//! // Resolve dependencies by name, with the type checked at retrieval
//! let greeting: Arc<String> = must_resolve("greeting", &resolver);
//! assert_eq!(&*greeting, "Hello, World!");
//! ```
//!
//! A factory receives the resolver as its argument, so it can request
//! further dependencies during its own construction:
//!
//! ```rust
//! use service_container::{must_resolve, Container, Resolver};
//! use std::sync::Arc;
//!
//! let container = Container::new();
//! container.must_bind("host", |_| "localhost".to_string());
//! container.must_bind("url", |resolver: &Resolver| {
//!     let host: Arc<String> = must_resolve("host", resolver);
//!     format!("https://{host}")
//! });
//!
//! let url: Arc<String> = must_resolve("url", &container.resolver());
//! assert_eq!(&*url, "https://localhost");
//! ```
//!
//! ## Features
//!
//! - **Thread-safe**: resolution is safe for unlimited concurrent use, and
//!   a singleton's factory runs exactly once even under a concurrent first
//!   resolution
//! - **Type-safe retrieval**: values are stored untyped and checked at the
//!   read boundary by [`resolve`] / [`must_resolve`]
//! - **Lock phase**: [`Container::lock`] freezes the binding table after
//!   startup, turning wiring mistakes into bind-time errors
//! - **Tracing support**: optional callback system for monitoring container
//!   operations, plus `tracing` instrumentation
//!
//! ## Main Items
//!
//! - [`Container`] - bind, lock, and derive resolvers
//! - [`Resolver`] - the resolution function
//! - [`resolve`] / [`must_resolve`] / [`resolve_cloned`] - typed retrieval
//! - [`define_container!`] - opt-in process-wide container

mod container;
mod container_error;
mod container_event;
mod macros;
mod resolver;

// Re-export the main public API
pub use container::Container;
pub use container_error::ContainerError;
pub use container_event::{ContainerEvent, TraceCallback};
pub use resolver::{must_resolve, resolve, resolve_cloned, Resolver};
