//! Host handles: functions, opaque data and concurrency handles
//!
//! All three compare by identity. Cloning a handle shares it.

use std::any::Any;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use super::Value;

type HostFn = dyn Fn(&[Value]) -> Value + Send + Sync;

/// A named host function.
///
/// ```rust
/// use waterline::value::{Callable, Value};
///
/// let double = Callable::new("double", |args: &[Value]| {
///     Value::from(args[0].as_number().unwrap_or(0.0) * 2.0)
/// });
/// assert_eq!(double.call(&[Value::from(4)]), Value::from(8));
/// ```
#[derive(Clone)]
pub struct Callable {
    name: Arc<str>,
    func: Arc<HostFn>,
}

impl Callable {
    /// Wrap a function under a diagnostic name.
    pub fn new<F>(name: impl Into<String>, func: F) -> Self
    where
        F: Fn(&[Value]) -> Value + Send + Sync + 'static,
    {
        Self {
            name: Arc::from(name.into()),
            func: Arc::new(func),
        }
    }

    /// The diagnostic name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Invoke the function.
    pub fn call(&self, args: &[Value]) -> Value {
        (self.func)(args)
    }
}

impl PartialEq for Callable {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.func, &other.func)
    }
}

impl fmt::Debug for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callable").field("name", &self.name).finish()
    }
}

/// A shared handle to host data the validator cannot look inside.
#[derive(Clone)]
pub struct Opaque {
    type_name: &'static str,
    inner: Arc<dyn Any + Send + Sync>,
}

impl Opaque {
    /// Wrap a host value.
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self {
            type_name: std::any::type_name::<T>(),
            inner: Arc::new(value),
        }
    }

    /// Name of the wrapped type.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Borrow the wrapped value if it is a `T`.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.inner.downcast_ref::<T>()
    }
}

impl PartialEq for Opaque {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for Opaque {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Opaque")
            .field("type_name", &self.type_name)
            .finish()
    }
}

static NEXT_TASK_ID: AtomicU64 = AtomicU64::new(1);

/// A concurrency handle (coroutine, thread or task) identified by id.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Task {
    id: u64,
}

impl Task {
    /// Allocate a handle with a fresh id.
    pub fn new() -> Self {
        Self {
            id: NEXT_TASK_ID.fetch_add(1, Ordering::Relaxed),
        }
    }

    /// The process-unique id.
    pub fn id(&self) -> u64 {
        self.id
    }
}

impl Default for Task {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn callable_identity() {
        let f = Callable::new("f", |_| Value::Null);
        let g = Callable::new("f", |_| Value::Null);
        assert_eq!(f, f.clone());
        assert_ne!(f, g);
    }

    #[test]
    fn opaque_downcast() {
        let handle = Opaque::new(String::from("socket"));
        assert_eq!(
            handle.downcast_ref::<String>().map(String::as_str),
            Some("socket")
        );
        assert!(handle.downcast_ref::<u32>().is_none());
        assert!(handle.type_name().ends_with("String"));
    }

    #[test]
    fn task_ids_are_unique() {
        assert_ne!(Task::new().id(), Task::new().id());
    }
}
