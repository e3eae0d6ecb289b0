//! Turning a sequence of options into an option of a sequence.
//!
//! The two shapes deliberately differ in how they treat absence:
//!
//! - [`SequenceOptionalExt::sequence`] fails fast: it stops pulling from the iterator at the first absent option.
//! - [`SequenceWithErrorExt::sequence`] collects all: it drains the iterator and reports every error, in order.
//!
//! Both take the iterator by value and iterate it exactly once.

use crate::error_option::ErrorOption;
use crate::optional::{Optional, OptionalWithError};
use crate::value_option::ValueOption;

pub trait SequenceOptionalExt<O: Optional>: Iterator<Item=O> + Sized {
  /// Collects all values if every option has one, or returns [`None`](ValueOption::None) at the first option without
  /// a value. Options after the first absent one are not pulled from the iterator.
  fn sequence(self) -> ValueOption<Vec<O::Value>> {
    let mut values = Vec::new();
    for option in self {
      match option.into_value() {
        Some(value) => values.push(value),
        None => return ValueOption::None,
      }
    }
    ValueOption::Some(values)
  }
}
impl<I, O> SequenceOptionalExt<O> for I where
  I: Iterator<Item=O>,
  O: Optional,
{}

pub trait SequenceWithErrorExt<O: OptionalWithError>: Iterator<Item=O> + Sized {
  /// Collects all values if every option has one, or else all errors. Partial values are discarded when there is at
  /// least one error.
  fn sequence(self) -> ErrorOption<Vec<O::Value>, Vec<O::Error>> {
    let mut values = Vec::new();
    let mut errors = Vec::new();
    for option in self {
      match option.into_result() {
        Ok(value) if errors.is_empty() => values.push(value),
        Ok(_) => {}
        Err(error) => {
          if errors.is_empty() {
            values = Vec::new();
          }
          errors.push(error);
        }
      }
    }
    if errors.is_empty() {
      ErrorOption::Some(values)
    } else {
      ErrorOption::None(errors)
    }
  }
}
impl<I, O> SequenceWithErrorExt<O> for I where
  I: Iterator<Item=O>,
  O: OptionalWithError,
{}


/// Maps each item to an option and sequences the results in a single pass.
pub trait TraverseExt: Iterator + Sized {
  #[inline]
  fn traverse<O: Optional>(self, f: impl FnMut(Self::Item) -> O) -> ValueOption<Vec<O::Value>> {
    SequenceOptionalExt::sequence(self.map(f))
  }

  #[inline]
  fn traverse_with_error<O>(self, f: impl FnMut(Self::Item) -> O) -> ErrorOption<Vec<O::Value>, Vec<O::Error>> where
    O: OptionalWithError
  {
    SequenceWithErrorExt::sequence(self.map(f))
  }
}
impl<I: Iterator> TraverseExt for I {}


impl<T> FromIterator<ValueOption<T>> for ValueOption<Vec<T>> {
  #[inline]
  fn from_iter<I: IntoIterator<Item=ValueOption<T>>>(iter: I) -> Self {
    SequenceOptionalExt::sequence(iter.into_iter())
  }
}

impl<T, E> FromIterator<ErrorOption<T, E>> for ErrorOption<Vec<T>, Vec<E>> {
  #[inline]
  fn from_iter<I: IntoIterator<Item=ErrorOption<T, E>>>(iter: I) -> Self {
    SequenceWithErrorExt::sequence(iter.into_iter())
  }
}

#[cfg(test)]
mod tests {
  use std::cell::Cell;
  use std::rc::Rc;

  use crate::construct::{none, none_with_error, some, some_with_error};

  use super::*;

  /// Forwards items but claims to be endless.
  struct Endless<I>(I);

  impl<I: Iterator> Iterator for Endless<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> { self.0.next() }

    fn size_hint(&self) -> (usize, Option<usize>) { (usize::MAX, None) }
  }

  #[test]
  fn sequence_all_present() {
    assert_eq!(vec![some(1), some(2), some(3)].into_iter().sequence(), some(vec![1, 2, 3]));
  }

  #[test]
  fn sequence_fails_fast() {
    let pulled = Cell::new(0);
    let result = vec![some(1), none(), some(3)]
      .into_iter()
      .inspect(|_| pulled.set(pulled.get() + 1))
      .sequence();
    assert_eq!(result, none());
    assert_eq!(pulled.get(), 2);
  }

  #[test]
  fn sequence_stops_in_unbounded_iterator() {
    assert_eq!((0..).map(|i| if i < 3 { some(i) } else { none() }).sequence(), none());
    assert_eq!(std::iter::repeat(none::<u8>()).take(usize::MAX).sequence(), none());
    let collected: ValueOption<Vec<i32>> = (0..).map(|i| if i < 3 { some(i) } else { none() }).collect();
    assert_eq!(collected, none());
  }

  #[test]
  fn sequence_ignores_size_hint() {
    assert_eq!(Endless(vec![some(1), some(2)].into_iter()).sequence(), some(vec![1, 2]));
    let options = vec![some_with_error(1), none_with_error("e")];
    assert_eq!(Endless(options.into_iter()).sequence(), ErrorOption::None(vec!["e"]));
  }

  #[test]
  fn sequence_empty_is_present() {
    assert_eq!(Vec::<ValueOption<i32>>::new().into_iter().sequence(), some(vec![]));
  }

  #[test]
  fn sequence_with_error_collects_all_errors() {
    let pulled = Cell::new(0);
    let result = vec![
      some_with_error(1),
      none_with_error("a"),
      some_with_error(3),
      none_with_error("b"),
    ]
      .into_iter()
      .inspect(|_| pulled.set(pulled.get() + 1))
      .sequence();
    assert_eq!(result, ErrorOption::None(vec!["a", "b"]));
    assert_eq!(pulled.get(), 4);
  }

  #[test]
  fn sequence_with_error_releases_values_at_first_error() {
    let tracker = Rc::new(());
    let mut live = Vec::new();
    let mut step = 0;
    let options = std::iter::from_fn(|| {
      step += 1;
      live.push(Rc::strong_count(&tracker));
      match step {
        1 => Some(some_with_error(Rc::clone(&tracker))),
        2 => Some(none_with_error("e")),
        3 => Some(some_with_error(Rc::clone(&tracker))),
        _ => None,
      }
    });
    let result: ErrorOption<Vec<Rc<()>>, Vec<&str>> = options.sequence();
    assert_eq!(result, ErrorOption::None(vec!["e"]));
    assert_eq!(live, vec![1, 2, 1, 1]);
  }

  #[test]
  fn sequence_with_error_all_present() {
    let options: Vec<ErrorOption<i32, &str>> = vec![some_with_error(1), some_with_error(2)];
    assert_eq!(options.into_iter().sequence(), ErrorOption::Some(vec![1, 2]));
  }

  #[test]
  fn sequence_over_std_types() {
    assert_eq!(vec![Some(1), Some(2)].into_iter().sequence(), some(vec![1, 2]));
    let results: Vec<Result<i32, &str>> = vec![Ok(1), Err("x"), Err("y")];
    assert_eq!(results.into_iter().sequence(), ErrorOption::None(vec!["x", "y"]));
  }

  #[test]
  fn sequence_consumes_one_shot_iterator() {
    let mut remaining = 3;
    let one_shot = std::iter::from_fn(move || {
      if remaining == 0 {
        return None;
      }
      remaining -= 1;
      Some(some_with_error::<i32, &str>(remaining))
    });
    assert_eq!(one_shot.sequence(), ErrorOption::Some(vec![2, 1, 0]));
  }

  #[test]
  fn traverse_maps_then_sequences() {
    let parsed = ["1", "2", "x"].iter().traverse(|s| s.parse::<i32>().ok());
    assert_eq!(parsed, none());
    let parsed = ["1", "x", "y"].iter().traverse_with_error(|s| s.parse::<i32>().map_err(|_| *s));
    assert_eq!(parsed, ErrorOption::None(vec!["x", "y"]));
  }

  #[test]
  fn collect_into_option() {
    let collected: ValueOption<Vec<i32>> = vec![some(1), some(2)].into_iter().collect();
    assert_eq!(collected, some(vec![1, 2]));
    let collected: ErrorOption<Vec<i32>, Vec<&str>> = vec![some_with_error(1), none_with_error("e")].into_iter().collect();
    assert_eq!(collected, ErrorOption::None(vec!["e"]));
  }
}
