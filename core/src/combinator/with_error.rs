use crate::combinator::zip::zip_with_error;
use crate::error::OptionError;
use crate::error_option::ErrorOption;
use crate::optional::OptionalWithError;
use crate::value_option::ValueOption;

/// Combinators for [`OptionalWithError`] values. The error of an absent option flows through every combinator
/// unchanged unless the combinator is explicitly about the error.
pub trait OptionalWithErrorExt: OptionalWithError + Sized {
  /// Applies `f` to the value if present, keeping the error otherwise.
  #[inline]
  fn map<R>(self, f: impl FnOnce(Self::Value) -> R) -> ErrorOption<R, Self::Error> {
    match self.into_result() {
      Ok(value) => ErrorOption::Some(f(value)),
      Err(error) => ErrorOption::None(error),
    }
  }

  /// Applies `f` to the error if absent, keeping the value otherwise.
  #[inline]
  fn map_error<F>(self, f: impl FnOnce(Self::Error) -> F) -> ErrorOption<Self::Value, F> {
    match self.into_result() {
      Ok(value) => ErrorOption::Some(value),
      Err(error) => ErrorOption::None(f(error)),
    }
  }

  /// Applies the option-returning `f` to the value if present, flattening the result. `f` is not called when there is
  /// no value, and the original error is returned.
  #[inline]
  fn bind<O>(self, f: impl FnOnce(Self::Value) -> O) -> ErrorOption<O::Value, Self::Error> where
    O: OptionalWithError<Error=Self::Error>
  {
    match self.into_result() {
      Ok(value) => f(value).into_result().into(),
      Err(error) => ErrorOption::None(error),
    }
  }

  /// Keeps the value if `predicate` holds for it, otherwise turns it into an error with `on_false`. An existing error
  /// is kept as is, without calling `on_false`.
  #[inline]
  fn must(
    self,
    predicate: impl FnOnce(&Self::Value) -> bool,
    on_false: impl FnOnce(Self::Value) -> Self::Error,
  ) -> ErrorOption<Self::Value, Self::Error> {
    match self.into_result() {
      Ok(value) if predicate(&value) => ErrorOption::Some(value),
      Ok(value) => ErrorOption::None(on_false(value)),
      Err(error) => ErrorOption::None(error),
    }
  }

  /// Returns `self` if it has a value, otherwise `fallback`, whose error replaces the original one.
  #[inline]
  fn or<O>(self, fallback: O) -> ErrorOption<Self::Value, O::Error> where
    O: OptionalWithError<Value=Self::Value>
  {
    match self.into_result() {
      Ok(value) => ErrorOption::Some(value),
      Err(_) => fallback.into_result().into(),
    }
  }
  #[inline]
  fn or_else<O>(self, fallback: impl FnOnce() -> O) -> ErrorOption<Self::Value, O::Error> where
    O: OptionalWithError<Value=Self::Value>
  {
    match self.into_result() {
      Ok(value) => ErrorOption::Some(value),
      Err(_) => fallback().into_result().into(),
    }
  }

  /// Calls `on_some` with the value or `on_none` with the error, and returns the option unchanged.
  #[inline]
  fn tap(self, on_some: impl FnOnce(&Self::Value), on_none: impl FnOnce(&Self::Error)) -> Self {
    match self.as_result() {
      Ok(value) => on_some(value),
      Err(error) => on_none(error),
    }
    self
  }
  #[inline]
  fn tap_some(self, on_some: impl FnOnce(&Self::Value)) -> Self {
    self.tap(on_some, |_| {})
  }
  #[inline]
  fn tap_none(self, on_none: impl FnOnce(&Self::Error)) -> Self {
    self.tap(|_| {}, on_none)
  }

  #[inline]
  fn match_with<R>(self, on_some: impl FnOnce(Self::Value) -> R, on_none: impl FnOnce(Self::Error) -> R) -> R {
    match self.into_result() {
      Ok(value) => on_some(value),
      Err(error) => on_none(error),
    }
  }

  /// Returns the value.
  ///
  /// # Panics
  ///
  /// Panics with [`OptionError::Unwrapped`] if there is no value. The error is not part of the message, as it need
  /// not implement [`Debug`](std::fmt::Debug).
  #[inline]
  #[track_caller]
  fn unwrap(self) -> Self::Value {
    match self.into_result() {
      Ok(value) => value,
      Err(_) => panic!("{}", OptionError::Unwrapped),
    }
  }
  #[inline]
  fn try_unwrap(self) -> Result<Self::Value, OptionError> {
    self.into_result().map_err(|_| OptionError::Unwrapped)
  }

  #[inline]
  fn value_or(self, default: Self::Value) -> Self::Value {
    self.into_result().unwrap_or(default)
  }
  #[inline]
  fn value_or_else(self, default: impl FnOnce() -> Self::Value) -> Self::Value {
    self.into_result().unwrap_or_else(|_| default())
  }
  #[inline]
  fn value_or_default(self) -> Self::Value where
    Self::Value: Default
  {
    self.into_result().unwrap_or_default()
  }

  /// Converts into a plain option, discarding the error.
  #[inline]
  fn drop_error(self) -> ValueOption<Self::Value> {
    self.into_result().ok().into()
  }
  /// Converts into a plain option, passing the error to `on_error` before discarding it.
  #[inline]
  fn drop_error_with(self, on_error: impl FnOnce(Self::Error)) -> ValueOption<Self::Value> {
    match self.into_result() {
      Ok(value) => ValueOption::Some(value),
      Err(error) => {
        on_error(error);
        ValueOption::None
      }
    }
  }

  /// Pairs the values of `self` and `other` if both are present. Otherwise returns the error of `self` if it has one,
  /// or else the error of `other`.
  #[inline]
  fn zip<O>(self, other: O) -> ErrorOption<(Self::Value, O::Value), Self::Error> where
    O: OptionalWithError<Error=Self::Error>
  {
    zip_with_error(self, other)
  }
}

impl<O: OptionalWithError> OptionalWithErrorExt for O {}
