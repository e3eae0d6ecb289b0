//! Read-only views over optional values.
//!
//! [`Optional`] is the view of something that may hold a value, [`OptionalWithError`] the view of
//! something that holds either a value or an error explaining why there is none. Combinators in
//! [`combinator`](crate::combinator) are written once against these views and return the concrete
//! [`ValueOption`](crate::ValueOption) or [`ErrorOption`](crate::ErrorOption).

/// A value that may or may not be present.
///
/// The value can only be reached through [`value`](Self::value) or [`into_value`](Self::into_value), which both
/// return [`None`] when there is no value, so reading a missing value is not expressible.
pub trait Optional {
  type Value;

  fn has_value(&self) -> bool;

  fn value(&self) -> Option<&Self::Value>;

  fn into_value(self) -> Option<Self::Value> where
    Self: Sized;
}

/// A value that is present, or an error describing why it is absent. Exactly one of the two exists.
pub trait OptionalWithError {
  type Value;
  type Error;

  fn has_value(&self) -> bool;

  /// Borrows the value or the error.
  fn as_result(&self) -> Result<&Self::Value, &Self::Error>;

  #[inline]
  fn value(&self) -> Option<&Self::Value> { self.as_result().ok() }

  #[inline]
  fn error(&self) -> Option<&Self::Error> { self.as_result().err() }

  fn into_result(self) -> Result<Self::Value, Self::Error> where
    Self: Sized;
}


impl<T> Optional for Option<T> {
  type Value = T;

  #[inline]
  fn has_value(&self) -> bool { self.is_some() }
  #[inline]
  fn value(&self) -> Option<&T> { self.as_ref() }
  #[inline]
  fn into_value(self) -> Option<T> { self }
}

impl<T, E> OptionalWithError for Result<T, E> {
  type Value = T;
  type Error = E;

  #[inline]
  fn has_value(&self) -> bool { self.is_ok() }
  #[inline]
  fn as_result(&self) -> Result<&T, &E> { self.as_ref() }
  #[inline]
  fn into_result(self) -> Result<T, E> { self }
}
