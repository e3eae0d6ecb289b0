use crate::error_option::ErrorOption;
use crate::optional::{Optional, OptionalWithError};
use crate::value_option::ValueOption;

/// Pairs the values of `first` and `second` if both are present.
#[inline]
pub fn zip<A: Optional, B: Optional>(first: A, second: B) -> ValueOption<(A::Value, B::Value)> {
  match (first.into_value(), second.into_value()) {
    (Some(a), Some(b)) => ValueOption::Some((a, b)),
    _ => ValueOption::None,
  }
}

/// Pairs the values of `first` and `second` if both are present. Otherwise, the error of the first absent option is
/// returned; `first` is checked before `second`.
#[inline]
pub fn zip_with_error<A, B, E>(first: A, second: B) -> ErrorOption<(A::Value, B::Value), E> where
  A: OptionalWithError<Error=E>,
  B: OptionalWithError<Error=E>,
{
  match (first.into_result(), second.into_result()) {
    (Ok(a), Ok(b)) => ErrorOption::Some((a, b)),
    (Err(error), _) => ErrorOption::None(error),
    (Ok(_), Err(error)) => ErrorOption::None(error),
  }
}
