//! Tracing diagnostics for option chains. Nothing is logged unless one of these combinators is used.

use std::fmt::Debug;

use crate::combinator::with_error::OptionalWithErrorExt;
use crate::optional::{Optional, OptionalWithError};
use crate::value_option::ValueOption;

pub trait TraceOptionalExt: Optional + Sized {
  /// Emits a trace event with `label` and whether a value is present, and returns the option unchanged.
  #[inline]
  fn trace_presence(self, label: &str) -> Self {
    tracing::trace!(label, has_value = self.has_value(), "option presence");
    self
  }
}

impl<O: Optional> TraceOptionalExt for O {}

pub trait TraceOptionalWithErrorExt: OptionalWithError + Sized where
  Self::Error: Debug
{
  /// Emits a trace event with `label`, whether a value is present, and the error if there is one, and returns the
  /// option unchanged.
  #[inline]
  fn trace_presence(self, label: &str) -> Self {
    tracing::trace!(label, has_value = self.has_value(), error = ?self.error(), "option presence");
    self
  }

  /// Converts into a plain option, emitting a debug event with the error before discarding it.
  #[inline]
  fn drop_error_traced(self, label: &str) -> ValueOption<Self::Value> {
    self.drop_error_with(|error| tracing::debug!(label, ?error, "dropped error of absent option"))
  }
}

impl<O> TraceOptionalWithErrorExt for O where
  O: OptionalWithError,
  O::Error: Debug,
{}
