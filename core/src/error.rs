use thiserror::Error;

/// Misuse of an option: a programming-contract violation, as opposed to a represented absence.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug, Error)]
pub enum OptionError {
  #[error("called unwrap on an option that has no value")]
  Unwrapped,
  #[error("cannot create an error-carrying option without a value or an error")]
  MissingValueAndError,
  #[error("cannot create an error-carrying option with both a value and an error")]
  ValueAndError,
}
