use crate::error::OptionError;
use crate::optional::OptionalWithError;
use crate::value_option::ValueOption;

/// An optional value whose absence carries a reason: [`Some`](ErrorOption::Some) value, or
/// [`None`](ErrorOption::None) with an error.
///
/// There is no [`Default`] implementation: an error-carrying option always holds either a value or an error. Use
/// [`from_parts`](Self::from_parts) when presence is only known at runtime.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Ord, PartialOrd, Eq, PartialEq, Hash, Debug)]
#[must_use]
pub enum ErrorOption<T, E> {
  Some(T),
  None(E),
}

impl<T, E> ErrorOption<T, E> {
  /// Creates an option from a possibly present `value` and a possibly present `error`, failing unless exactly one of
  /// them is present.
  pub fn from_parts(value: Option<T>, error: Option<E>) -> Result<Self, OptionError> {
    match (value, error) {
      (Some(value), None) => Ok(Self::Some(value)),
      (None, Some(error)) => Ok(Self::None(error)),
      (None, None) => Err(OptionError::MissingValueAndError),
      (Some(_), Some(_)) => Err(OptionError::ValueAndError),
    }
  }

  #[inline]
  pub const fn has_value(&self) -> bool {
    matches!(self, Self::Some(_))
  }

  #[inline]
  pub const fn as_ref(&self) -> ErrorOption<&T, &E> {
    match self {
      Self::Some(value) => ErrorOption::Some(value),
      Self::None(error) => ErrorOption::None(error),
    }
  }

  #[inline]
  pub fn iter(&self) -> std::option::IntoIter<&T> {
    self.as_ref().into_value_option().into_option().into_iter()
  }

  /// Converts into a plain option, discarding the error.
  #[inline]
  pub fn into_value_option(self) -> ValueOption<T> {
    match self {
      Self::Some(value) => ValueOption::Some(value),
      Self::None(_) => ValueOption::None,
    }
  }

  #[inline]
  pub fn into_error_option(self) -> ValueOption<E> {
    match self {
      Self::Some(_) => ValueOption::None,
      Self::None(error) => ValueOption::Some(error),
    }
  }
}

impl<T, E> ErrorOption<ErrorOption<T, E>, E> {
  #[inline]
  pub fn flatten(self) -> ErrorOption<T, E> {
    match self {
      Self::Some(inner) => inner,
      Self::None(error) => ErrorOption::None(error),
    }
  }
}


impl<T, E> OptionalWithError for ErrorOption<T, E> {
  type Value = T;
  type Error = E;

  #[inline]
  fn has_value(&self) -> bool { ErrorOption::has_value(self) }
  #[inline]
  fn as_result(&self) -> Result<&T, &E> {
    match self {
      Self::Some(value) => Ok(value),
      Self::None(error) => Err(error),
    }
  }
  #[inline]
  fn into_result(self) -> Result<T, E> {
    match self {
      Self::Some(value) => Ok(value),
      Self::None(error) => Err(error),
    }
  }
}


impl<T, E> From<Result<T, E>> for ErrorOption<T, E> {
  #[inline]
  fn from(result: Result<T, E>) -> Self {
    match result {
      Ok(value) => Self::Some(value),
      Err(error) => Self::None(error),
    }
  }
}

impl<T, E> From<ErrorOption<T, E>> for Result<T, E> {
  #[inline]
  fn from(option: ErrorOption<T, E>) -> Self { option.into_result() }
}

impl<T, E> IntoIterator for ErrorOption<T, E> {
  type Item = T;
  type IntoIter = std::option::IntoIter<T>;

  #[inline]
  fn into_iter(self) -> Self::IntoIter { self.into_value_option().into_option().into_iter() }
}

impl<'a, T, E> IntoIterator for &'a ErrorOption<T, E> {
  type Item = &'a T;
  type IntoIter = std::option::IntoIter<&'a T>;

  #[inline]
  fn into_iter(self) -> Self::IntoIter { self.iter() }
}
