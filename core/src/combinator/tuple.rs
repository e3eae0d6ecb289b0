//! [`map`](crate::OptionalExt::map) and [`bind`](crate::OptionalExt::bind) variants that destructure a tuple value
//! into separate arguments.

use crate::combinator::plain::OptionalExt;
use crate::combinator::with_error::OptionalWithErrorExt;
use crate::error_option::ErrorOption;
use crate::optional::{Optional, OptionalWithError};
use crate::value_option::ValueOption;

pub trait OptionalPairExt<A, B>: Optional<Value=(A, B)> + Sized {
  #[inline]
  fn map2<R>(self, f: impl FnOnce(A, B) -> R) -> ValueOption<R> {
    OptionalExt::map(self, |(a, b)| f(a, b))
  }
  #[inline]
  fn bind2<O: Optional>(self, f: impl FnOnce(A, B) -> O) -> ValueOption<O::Value> {
    OptionalExt::bind(self, |(a, b)| f(a, b))
  }
}
impl<O, A, B> OptionalPairExt<A, B> for O where O: Optional<Value=(A, B)> {}

pub trait OptionalTripleExt<A, B, C>: Optional<Value=(A, B, C)> + Sized {
  #[inline]
  fn map3<R>(self, f: impl FnOnce(A, B, C) -> R) -> ValueOption<R> {
    OptionalExt::map(self, |(a, b, c)| f(a, b, c))
  }
  #[inline]
  fn bind3<O: Optional>(self, f: impl FnOnce(A, B, C) -> O) -> ValueOption<O::Value> {
    OptionalExt::bind(self, |(a, b, c)| f(a, b, c))
  }
}
impl<O, A, B, C> OptionalTripleExt<A, B, C> for O where O: Optional<Value=(A, B, C)> {}


pub trait OptionalWithErrorPairExt<A, B>: OptionalWithError<Value=(A, B)> + Sized {
  #[inline]
  fn map2<R>(self, f: impl FnOnce(A, B) -> R) -> ErrorOption<R, Self::Error> {
    OptionalWithErrorExt::map(self, |(a, b)| f(a, b))
  }
  #[inline]
  fn bind2<O>(self, f: impl FnOnce(A, B) -> O) -> ErrorOption<O::Value, Self::Error> where
    O: OptionalWithError<Error=Self::Error>
  {
    OptionalWithErrorExt::bind(self, |(a, b)| f(a, b))
  }
}
impl<O, A, B> OptionalWithErrorPairExt<A, B> for O where O: OptionalWithError<Value=(A, B)> {}

pub trait OptionalWithErrorTripleExt<A, B, C>: OptionalWithError<Value=(A, B, C)> + Sized {
  #[inline]
  fn map3<R>(self, f: impl FnOnce(A, B, C) -> R) -> ErrorOption<R, Self::Error> {
    OptionalWithErrorExt::map(self, |(a, b, c)| f(a, b, c))
  }
  #[inline]
  fn bind3<O>(self, f: impl FnOnce(A, B, C) -> O) -> ErrorOption<O::Value, Self::Error> where
    O: OptionalWithError<Error=Self::Error>
  {
    OptionalWithErrorExt::bind(self, |(a, b, c)| f(a, b, c))
  }
}
impl<O, A, B, C> OptionalWithErrorTripleExt<A, B, C> for O where O: OptionalWithError<Value=(A, B, C)> {}
