//! Named constructors.
//!
//! A bare value converts into a [`ValueOption`] through [`From`]. An [`ErrorOption`] has no such conversion for bare
//! values or bare errors, as those are indistinguishable when the value and error types coincide; use
//! [`some_with_error`] and [`none_with_error`] instead.

use std::any::Any;

use crate::error_option::ErrorOption;
use crate::value_option::ValueOption;

#[inline]
pub fn some<T>(value: T) -> ValueOption<T> {
  ValueOption::Some(value)
}

#[inline]
pub fn none<T>() -> ValueOption<T> {
  ValueOption::None
}

#[inline]
pub fn some_with_error<T, E>(value: T) -> ErrorOption<T, E> {
  ErrorOption::Some(value)
}

#[inline]
pub fn none_with_error<T, E>(error: E) -> ErrorOption<T, E> {
  ErrorOption::None(error)
}

/// Downcasts `obj` to `T`, returning [`None`](ValueOption::None) if it is not a `T`.
#[inline]
pub fn some_as<T: Any>(obj: &dyn Any) -> ValueOption<&T> {
  obj.downcast_ref::<T>().into()
}

/// Downcasts the owned `obj` to `T`, returning [`None`](ValueOption::None) if it is not a `T`.
#[inline]
pub fn some_as_boxed<T: Any>(obj: Box<dyn Any>) -> ValueOption<T> {
  match obj.downcast::<T>() {
    Ok(value) => ValueOption::Some(*value),
    Err(_) => ValueOption::None,
  }
}
