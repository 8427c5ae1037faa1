//! The service container: a name-keyed table of factory functions with a
//! one-way lock from the configuration phase to the serving phase.
//!
//! Dependencies are bound under string names, either instanced (the factory
//! runs on every resolution) or singleton (the factory runs at most once and
//! the first result is shared). Once all dependencies are bound, `lock()`
//! freezes the table and `resolver()` hands out the resolution function.
//!
//! # Examples
//!
//! ```
//! use service_container::{must_resolve, Container};
//! use std::sync::Arc;
//!
//! let container = Container::new();
//! container.must_bind("greeting", |_| "Hello, World!".to_string());
//! container.lock();
//!
//! let resolver = container.resolver();
//! let greeting: Arc<String> = must_resolve("greeting", &resolver);
//! assert_eq!(&*greeting, "Hello, World!");
//! ```

use std::any::Any;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use once_cell::sync::OnceCell;
use parking_lot::{Mutex, RwLock};
use tracing::debug;

use crate::container_error::ContainerError;
use crate::container_event::{ContainerEvent, TraceCallback};
use crate::resolver::Resolver;

/// Erased factory as stored in the binding table.
///
/// `Arc` rather than `Box` so a binding can be cloned out of the table's
/// read guard and invoked after the guard is released; factories of a
/// resolving thread may recursively re-enter the table.
pub(crate) type BinderFn = Arc<dyn Fn(&Resolver) -> Arc<dyn Any + Send + Sync> + Send + Sync>;

/// State shared between a [`Container`] and every [`Resolver`] derived
/// from it.
pub(crate) struct ContainerInner {
    locked: AtomicBool,
    bindings: RwLock<HashMap<String, BinderFn>>,
    trace: Mutex<Option<Arc<TraceCallback>>>,
}

impl ContainerInner {
    /// Clones the binding for `name` out of the read guard, releasing the
    /// guard before the caller invokes the factory.
    pub(crate) fn binder(&self, name: &str) -> Option<BinderFn> {
        self.bindings.read().get(name).cloned()
    }

    /// Emits a container event to the trace callback, if one is set.
    ///
    /// The event is only constructed when a callback is installed, and the
    /// callback runs without the trace lock held, so it may itself interact
    /// with the container.
    pub(crate) fn emit_event(&self, event: impl FnOnce() -> ContainerEvent) {
        let callback = self.trace.lock().clone();
        if let Some(callback) = callback {
            callback(&event());
        }
    }
}

/// The dependency collection container.
///
/// Through the container, multiple dependencies can be prepared and stored
/// under an identifying name and resolved on demand by this name.
///
/// The container supports instanced binding, through its [`bind`] method.
/// Instanced dependencies are constructed on demand each time the
/// dependency is requested. It also supports singleton binding, through its
/// [`bind_singleton`] method. Singleton dependencies are constructed once,
/// lazily, when requested for the first time; all further requests receive
/// that first instance. Both binding methods offer a variant which panics
/// on a failed bind.
///
/// Once all dependencies are bound, call [`lock`] to prevent any further
/// modification. To resolve a dependency by name, get a [`Resolver`] by
/// calling [`resolver`]. The [`resolve`](crate::resolve) and
/// [`must_resolve`](crate::must_resolve) helper functions handle the type
/// conversion.
///
/// The handle is cheap to clone; clones share the same binding table.
///
/// [`bind`]: Container::bind
/// [`bind_singleton`]: Container::bind_singleton
/// [`lock`]: Container::lock
/// [`resolver`]: Container::resolver
#[derive(Clone)]
pub struct Container {
    inner: Arc<ContainerInner>,
}

impl Container {
    /// Creates an empty, unlocked container.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(ContainerInner {
                locked: AtomicBool::new(false),
                bindings: RwLock::new(HashMap::new()),
                trace: Mutex::new(None),
            }),
        }
    }

    /// Binds an instanced dependency: `factory` re-executes on every
    /// resolution of `name`.
    ///
    /// The factory receives a [`Resolver`] so it can request further
    /// dependencies during its own construction.
    ///
    /// # Errors
    ///
    /// - [`ContainerError::Locked`] if the container has been locked
    /// - [`ContainerError::AlreadyBound`] if `name` is already bound
    pub fn bind<T, F>(&self, name: impl Into<String>, factory: F) -> Result<(), ContainerError>
    where
        T: Send + Sync + 'static,
        F: Fn(&Resolver) -> T + Send + Sync + 'static,
    {
        let binder: BinderFn = Arc::new(move |resolver: &Resolver| {
            Arc::new(factory(resolver)) as Arc<dyn Any + Send + Sync>
        });
        self.bind_erased(name.into(), binder, false)
    }

    /// Variant of [`bind`](Container::bind) that panics on a failed bind.
    ///
    /// Intended for startup-time wiring where a duplicate or post-lock bind
    /// is a programming error.
    ///
    /// # Panics
    ///
    /// Panics under exactly the conditions where `bind` returns an error.
    pub fn must_bind<T, F>(&self, name: impl Into<String>, factory: F)
    where
        T: Send + Sync + 'static,
        F: Fn(&Resolver) -> T + Send + Sync + 'static,
    {
        if let Err(err) = self.bind(name, factory) {
            panic!("{err}");
        }
    }

    /// Binds a singleton dependency: `factory` executes at most once, on
    /// first resolution of `name`, and every resolution receives the same
    /// instance.
    ///
    /// The memoizing adapter is applied here, at bind time. Concurrent
    /// first resolutions block until the one running construction
    /// completes, then all receive its result. A factory that panics during
    /// construction leaves the slot empty; the next resolution re-attempts
    /// construction.
    ///
    /// # Errors
    ///
    /// Same duplicate and lock rules as [`bind`](Container::bind).
    pub fn bind_singleton<T, F>(
        &self,
        name: impl Into<String>,
        factory: F,
    ) -> Result<(), ContainerError>
    where
        T: Send + Sync + 'static,
        F: Fn(&Resolver) -> T + Send + Sync + 'static,
    {
        let cell: OnceCell<Arc<dyn Any + Send + Sync>> = OnceCell::new();
        let binder: BinderFn = Arc::new(move |resolver: &Resolver| {
            Arc::clone(
                cell.get_or_init(|| Arc::new(factory(resolver)) as Arc<dyn Any + Send + Sync>),
            )
        });
        self.bind_erased(name.into(), binder, true)
    }

    /// Variant of [`bind_singleton`](Container::bind_singleton) that panics
    /// on a failed bind.
    ///
    /// # Panics
    ///
    /// Panics under exactly the conditions where `bind_singleton` returns
    /// an error.
    pub fn must_bind_singleton<T, F>(&self, name: impl Into<String>, factory: F)
    where
        T: Send + Sync + 'static,
        F: Fn(&Resolver) -> T + Send + Sync + 'static,
    {
        if let Err(err) = self.bind_singleton(name, factory) {
            panic!("{err}");
        }
    }

    fn bind_erased(
        &self,
        name: String,
        binder: BinderFn,
        singleton: bool,
    ) -> Result<(), ContainerError> {
        if self.inner.locked.load(Ordering::SeqCst) {
            return Err(ContainerError::Locked);
        }

        let mut bindings = self.inner.bindings.write();
        if bindings.contains_key(&name) {
            return Err(ContainerError::AlreadyBound { name });
        }
        bindings.insert(name.clone(), binder);
        drop(bindings);

        debug!(name = %name, singleton, "service bound");
        self.inner.emit_event(|| ContainerEvent::Bind { name, singleton });
        Ok(())
    }

    /// Locks the container: no more dependencies can be bound.
    ///
    /// Idempotent and irreversible. Has no effect on resolution or on
    /// already-constructed singleton values.
    pub fn lock(&self) {
        self.inner.locked.store(true, Ordering::SeqCst);
        debug!("service container locked");
        self.inner.emit_event(|| ContainerEvent::Lock);
    }

    /// Returns whether a dependency is bound under `name`.
    pub fn contains(&self, name: &str) -> bool {
        let found = self.inner.bindings.read().contains_key(name);
        self.inner.emit_event(|| ContainerEvent::Contains {
            name: name.to_string(),
            found,
        });
        found
    }

    /// Derives a [`Resolver`] from the container's current table.
    ///
    /// The resolver is safe to store, pass to other code, and invoke
    /// repeatedly and concurrently. It carries no state of its own beyond a
    /// reference back to the container.
    pub fn resolver(&self) -> Resolver {
        Resolver::new(Arc::clone(&self.inner))
    }

    /// Sets a tracing callback invoked on every container interaction.
    ///
    /// Replaces any previously set callback. See [`ContainerEvent`] for the
    /// emitted events.
    pub fn set_trace_callback(&self, callback: impl Fn(&ContainerEvent) + Send + Sync + 'static) {
        *self.inner.trace.lock() = Some(Arc::new(callback));
    }

    /// Clears the tracing callback (disables container tracing).
    pub fn clear_trace_callback(&self) {
        *self.inner.trace.lock() = None;
    }
}

impl Default for Container {
    fn default() -> Self {
        Self::new()
    }
}

// -------------------------------------------------------------------------------------------------
// Tests
// -------------------------------------------------------------------------------------------------
