use crate::combinator::zip::zip;
use crate::error::OptionError;
use crate::error_option::ErrorOption;
use crate::optional::Optional;
use crate::value_option::ValueOption;

/// Combinators for [`Optional`] values. Every combinator consumes the option and returns a new one; callbacks only
/// run on the branch they belong to.
pub trait OptionalExt: Optional + Sized {
  /// Applies `f` to the value if present.
  #[inline]
  fn map<R>(self, f: impl FnOnce(Self::Value) -> R) -> ValueOption<R> {
    match self.into_value() {
      Some(value) => ValueOption::Some(f(value)),
      None => ValueOption::None,
    }
  }

  /// Applies the option-returning `f` to the value if present, flattening the result.
  #[inline]
  fn bind<O: Optional>(self, f: impl FnOnce(Self::Value) -> O) -> ValueOption<O::Value> {
    match self.into_value() {
      Some(value) => f(value).into_value().into(),
      None => ValueOption::None,
    }
  }

  /// Keeps the value only if `predicate` holds for it.
  #[inline]
  fn must(self, predicate: impl FnOnce(&Self::Value) -> bool) -> ValueOption<Self::Value> {
    match self.into_value() {
      Some(value) if predicate(&value) => ValueOption::Some(value),
      _ => ValueOption::None,
    }
  }

  #[inline]
  fn or(self, fallback: impl Optional<Value=Self::Value>) -> ValueOption<Self::Value> {
    match self.into_value() {
      Some(value) => ValueOption::Some(value),
      None => fallback.into_value().into(),
    }
  }

  /// Like [`or`](Self::or), but only creates the fallback when there is no value.
  #[inline]
  fn or_else<O: Optional<Value=Self::Value>>(self, fallback: impl FnOnce() -> O) -> ValueOption<Self::Value> {
    match self.into_value() {
      Some(value) => ValueOption::Some(value),
      None => fallback().into_value().into(),
    }
  }

  /// Calls `on_some` with the value if present, or `on_none` otherwise, and returns the option unchanged.
  #[inline]
  fn tap(self, on_some: impl FnOnce(&Self::Value), on_none: impl FnOnce()) -> Self {
    match self.value() {
      Some(value) => on_some(value),
      None => on_none(),
    }
    self
  }
  #[inline]
  fn tap_some(self, on_some: impl FnOnce(&Self::Value)) -> Self {
    self.tap(on_some, || {})
  }
  #[inline]
  fn tap_none(self, on_none: impl FnOnce()) -> Self {
    self.tap(|_| {}, on_none)
  }

  #[inline]
  fn match_with<R>(self, on_some: impl FnOnce(Self::Value) -> R, on_none: impl FnOnce() -> R) -> R {
    match self.into_value() {
      Some(value) => on_some(value),
      None => on_none(),
    }
  }

  /// Returns the value.
  ///
  /// # Panics
  ///
  /// Panics with [`OptionError::Unwrapped`] if there is no value. Only use this where presence is already
  /// guaranteed; see [`try_unwrap`](Self::try_unwrap) otherwise.
  #[inline]
  #[track_caller]
  fn unwrap(self) -> Self::Value {
    match self.into_value() {
      Some(value) => value,
      None => panic!("{}", OptionError::Unwrapped),
    }
  }
  #[inline]
  fn try_unwrap(self) -> Result<Self::Value, OptionError> {
    self.into_value().ok_or(OptionError::Unwrapped)
  }

  #[inline]
  fn value_or(self, default: Self::Value) -> Self::Value {
    self.into_value().unwrap_or(default)
  }
  #[inline]
  fn value_or_else(self, default: impl FnOnce() -> Self::Value) -> Self::Value {
    self.into_value().unwrap_or_else(default)
  }
  #[inline]
  fn value_or_default(self) -> Self::Value where
    Self::Value: Default
  {
    self.into_value().unwrap_or_default()
  }

  /// Attaches `error` to the absent case.
  #[inline]
  fn or_with_error<E>(self, error: E) -> ErrorOption<Self::Value, E> {
    match self.into_value() {
      Some(value) => ErrorOption::Some(value),
      None => ErrorOption::None(error),
    }
  }
  #[inline]
  fn or_with_error_else<E>(self, error: impl FnOnce() -> E) -> ErrorOption<Self::Value, E> {
    match self.into_value() {
      Some(value) => ErrorOption::Some(value),
      None => ErrorOption::None(error()),
    }
  }

  /// Pairs the values of `self` and `other` if both are present.
  #[inline]
  fn zip<O: Optional>(self, other: O) -> ValueOption<(Self::Value, O::Value)> {
    zip(self, other)
  }
}

impl<O: Optional> OptionalExt for O {}
