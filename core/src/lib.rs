//! Optional values, with or without a reason for their absence, and combinators to compose them.
//!
//! - [`ValueOption`]: a value or nothing.
//! - [`ErrorOption`]: a value, or an error describing why there is no value.
//!
//! Combinators are provided by extension traits over the [`Optional`] and [`OptionalWithError`] views, which are also
//! implemented for [`Option`] and [`Result`]. Import [`prelude`] to bring them all into scope.

pub mod error;
pub mod optional;
pub mod value_option;
pub mod error_option;
pub mod construct;

pub mod combinator;
pub mod collection;
pub mod util;

pub use error::OptionError;
pub use error_option::ErrorOption;
pub use optional::{Optional, OptionalWithError};
pub use value_option::ValueOption;
pub use construct::{none, none_with_error, some, some_as, some_as_boxed, some_with_error};
pub use combinator::plain::OptionalExt;
pub use combinator::with_error::OptionalWithErrorExt;
pub use combinator::zip::{zip, zip_with_error};

pub mod prelude {
  pub use crate::collection::access::{IteratorAccessExt, MapAccessExt, SliceAccessExt};
  pub use crate::collection::sequence::{SequenceOptionalExt, SequenceWithErrorExt, TraverseExt};
  pub use crate::collection::where_some::WhereSomeExt;
  pub use crate::combinator::plain::OptionalExt;
  pub use crate::combinator::tuple::{OptionalPairExt, OptionalTripleExt, OptionalWithErrorPairExt, OptionalWithErrorTripleExt};
  pub use crate::combinator::with_error::OptionalWithErrorExt;
  pub use crate::construct::{none, none_with_error, some, some_as, some_as_boxed, some_with_error};
  #[cfg(feature = "tracing")]
  pub use crate::util::trace::{TraceOptionalExt, TraceOptionalWithErrorExt};
  pub use crate::{ErrorOption, Optional, OptionalWithError, ValueOption};
}
