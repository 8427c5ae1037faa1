//! Resolution of bound dependencies, untyped and typed.
//!
//! [`Resolver`] performs the name lookup and factory invocation, yielding
//! the value as `Arc<dyn Any + Send + Sync>`. The [`resolve`] and
//! [`must_resolve`] helper functions handle the downcast to a concrete
//! type.

use std::any::Any;
use std::sync::Arc;

use tracing::trace;

use crate::container::ContainerInner;
use crate::container_error::ContainerError;
use crate::container_event::ContainerEvent;

/// The resolution function derived from a [`Container`](crate::Container).
///
/// Given a name, a resolver looks up the bound factory and invokes it,
/// supplying itself so the factory can recursively resolve further
/// dependencies. It holds no state of its own beyond a reference back to
/// the container, so it is cheap to clone and safe to invoke from any
/// number of threads.
///
/// It's recommended to obtain a single resolver after the binding phase and
/// pass it along with the context of your application, embedded in a
/// request-scoped context or handed to constructors explicitly.
#[derive(Clone)]
pub struct Resolver {
    inner: Arc<ContainerInner>,
}

impl Resolver {
    pub(crate) fn new(inner: Arc<ContainerInner>) -> Self {
        Self { inner }
    }

    /// Resolves the dependency bound under `name`, returning it untyped.
    ///
    /// The bound factory runs with this resolver as its argument; for a
    /// singleton binding the memoized value is returned instead of
    /// re-running the factory. Use [`resolve`] or [`must_resolve`] to get
    /// a concretely typed value.
    ///
    /// # Errors
    ///
    /// [`ContainerError::NotFound`] if nothing is bound under `name`.
    /// Resolution is expected to be queried with names whose presence is
    /// not statically guaranteed, so this is an error value, never a panic.
    pub fn resolve(&self, name: &str) -> Result<Arc<dyn Any + Send + Sync>, ContainerError> {
        let binder = self.inner.binder(name);
        let found = binder.is_some();

        trace!(name = %name, found, "resolving service");
        self.inner.emit_event(|| ContainerEvent::Resolve {
            name: name.to_string(),
            found,
        });

        match binder {
            Some(binder) => Ok(binder(self)),
            None => Err(ContainerError::NotFound {
                name: name.to_string(),
            }),
        }
    }
}

/// Helper function to simplify interaction with a [`Resolver`].
///
/// Tries to fetch the dependency bound under `name` and convert it to the
/// given type. For singleton bindings the returned `Arc` points at the
/// shared instance, so identity is preserved across callers.
///
/// # Errors
///
/// - [`ContainerError::NotFound`] - propagated unchanged from the resolver
/// - [`ContainerError::TypeMismatch`] - the value is not a `T`; the value
///   is never silently coerced
///
/// # Examples
///
/// ```
/// use service_container::{resolve, Container};
/// use std::sync::Arc;
///
/// let container = Container::new();
/// container.must_bind("port", |_| 8080u16);
///
/// let port: Arc<u16> = resolve("port", &container.resolver()).unwrap();
/// assert_eq!(*port, 8080);
///
/// // A bound name with the wrong type fails, it does not coerce
/// assert!(resolve::<String>("port", &container.resolver()).is_err());
/// ```
pub fn resolve<T: Send + Sync + 'static>(
    name: &str,
    resolver: &Resolver,
) -> Result<Arc<T>, ContainerError> {
    let value = resolver.resolve(name)?;
    value
        .downcast::<T>()
        .map_err(|_| ContainerError::TypeMismatch {
            name: name.to_string(),
        })
}

/// Helper function to simplify interaction with a [`Resolver`].
///
/// Fetches the dependency bound under `name` and panics if it can't be
/// found or can't be converted to the given type. Intended for call sites
/// where a missing or mistyped dependency is a configuration bug that
/// should stop execution immediately.
///
/// # Panics
///
/// Panics under exactly the conditions where [`resolve`] returns an error.
pub fn must_resolve<T: Send + Sync + 'static>(name: &str, resolver: &Resolver) -> Arc<T> {
    match resolve::<T>(name, resolver) {
        Ok(value) => value,
        Err(err) => panic!("{err}"),
    }
}

/// Fetches the dependency bound under `name` as an owned clone.
///
/// Useful when you need to own the value rather than share it via
/// `Arc<T>`. For a singleton binding every caller clones the same shared
/// instance.
///
/// # Errors
///
/// Same conditions as [`resolve`].
pub fn resolve_cloned<T: Send + Sync + Clone + 'static>(
    name: &str,
    resolver: &Resolver,
) -> Result<T, ContainerError> {
    let arc = resolve::<T>(name, resolver)?;
    Ok((*arc).clone())
}

// -------------------------------------------------------------------------------------------------
// Tests
// -------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::container::Container;

    #[test]
    fn test_resolve_typed() {
        let container = Container::new();
        container.must_bind("foo", |_| 1i32);
        container.must_bind("bar", |_| 2i32);

        let foo: Arc<i32> = resolve("foo", &container.resolver()).unwrap();
        assert_eq!(*foo, 1);

        let bar: Arc<i32> = resolve("bar", &container.resolver()).unwrap();
        assert_eq!(*bar, 2);
    }

    #[test]
    fn test_resolve_wrong_type() {
        let container = Container::new();
        container.must_bind("bar", |_| 2i32);

        let err = resolve::<String>("bar", &container.resolver()).unwrap_err();
        assert_eq!(
            err,
            ContainerError::TypeMismatch {
                name: "bar".to_string()
            }
        );
    }

    #[test]
    fn test_resolve_missing_name() {
        let container = Container::new();

        let err = resolve::<i32>("baz", &container.resolver()).unwrap_err();
        assert_eq!(
            err,
            ContainerError::NotFound {
                name: "baz".to_string()
            }
        );
    }

    #[test]
    #[should_panic(expected = "test service not found in container")]
    fn test_must_resolve_panics_on_missing_name() {
        let container = Container::new();
        let _: Arc<i32> = must_resolve("test", &container.resolver());
    }

    #[test]
    #[should_panic(expected = "unable to convert test to the requested type")]
    fn test_must_resolve_panics_on_wrong_type() {
        let container = Container::new();
        container.must_bind("test", |_| "text".to_string());
        let _: Arc<i32> = must_resolve("test", &container.resolver());
    }

    #[test]
    fn test_resolve_cloned() {
        let container = Container::new();
        container.must_bind("greeting", |_| "hello".to_string());

        let value: String = resolve_cloned("greeting", &container.resolver()).unwrap();
        assert_eq!(value, "hello");
    }

    #[test]
    fn test_resolver_is_cloneable() {
        let container = Container::new();
        container.must_bind("value", |_| 5u64);

        let resolver = container.resolver();
        let cloned = resolver.clone();

        let a: Arc<u64> = must_resolve("value", &resolver);
        let b: Arc<u64> = must_resolve("value", &cloned);
        assert_eq!(*a, *b);
    }
}
