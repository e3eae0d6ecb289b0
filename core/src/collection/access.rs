//! Option-returning element access for sequences and maps.
//!
//! Indexable sequences (anything that dereferences to a slice) are accessed directly through [`SliceAccessExt`], other
//! sequences are stepped through once with [`IteratorAccessExt`]. Both give the same results for the same elements.
//! Indices are signed: a negative index is out of range, like an index past the end.

use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

use crate::value_option::ValueOption;

#[inline]
fn to_index(index: isize) -> Option<usize> {
  usize::try_from(index).ok()
}

pub trait SliceAccessExt<T> {
  fn first_or_none(&self) -> ValueOption<&T>;

  fn try_get_at(&self, index: isize) -> ValueOption<&T>;

  #[inline]
  fn element_at_or_none(&self, index: isize) -> ValueOption<&T> {
    self.try_get_at(index)
  }
}

impl<T> SliceAccessExt<T> for [T] {
  #[inline]
  fn first_or_none(&self) -> ValueOption<&T> {
    self.first().into()
  }

  #[inline]
  fn try_get_at(&self, index: isize) -> ValueOption<&T> {
    to_index(index).and_then(|index| self.get(index)).into()
  }
}

pub trait IteratorAccessExt: Iterator + Sized {
  /// Takes the first item, pulling at most one item from the iterator.
  #[inline]
  fn first_or_none(mut self) -> ValueOption<Self::Item> {
    self.next().into()
  }

  #[inline]
  fn try_get_at(mut self, index: isize) -> ValueOption<Self::Item> {
    match to_index(index) {
      Some(index) => self.nth(index).into(),
      None => ValueOption::None,
    }
  }

  #[inline]
  fn element_at_or_none(self, index: isize) -> ValueOption<Self::Item> {
    self.try_get_at(index)
  }
}

impl<I: Iterator> IteratorAccessExt for I {}


/// Option-returning lookups on maps. Lookups never modify the map.
pub trait MapAccessExt<Q: ?Sized> {
  type Key;
  type Value;

  fn get_value_or_none(&self, key: &Q) -> ValueOption<&Self::Value>;

  fn get_entry_or_none(&self, key: &Q) -> ValueOption<(&Self::Key, &Self::Value)>;
}

impl<K, V, S, Q> MapAccessExt<Q> for HashMap<K, V, S> where
  K: Eq + Hash + Borrow<Q>,
  Q: Eq + Hash + ?Sized,
  S: BuildHasher,
{
  type Key = K;
  type Value = V;

  #[inline]
  fn get_value_or_none(&self, key: &Q) -> ValueOption<&V> {
    self.get(key).into()
  }

  #[inline]
  fn get_entry_or_none(&self, key: &Q) -> ValueOption<(&K, &V)> {
    self.get_key_value(key).into()
  }
}

impl<K, V, Q> MapAccessExt<Q> for BTreeMap<K, V> where
  K: Ord + Borrow<Q>,
  Q: Ord + ?Sized,
{
  type Key = K;
  type Value = V;

  #[inline]
  fn get_value_or_none(&self, key: &Q) -> ValueOption<&V> {
    self.get(key).into()
  }

  #[inline]
  fn get_entry_or_none(&self, key: &Q) -> ValueOption<(&K, &V)> {
    self.get_key_value(key).into()
  }
}

#[cfg(feature = "hashbrown")]
impl<K, V, S, Q> MapAccessExt<Q> for hashbrown::HashMap<K, V, S> where
  K: Eq + Hash + Borrow<Q>,
  Q: Eq + Hash + ?Sized,
  S: BuildHasher,
{
  type Key = K;
  type Value = V;

  #[inline]
  fn get_value_or_none(&self, key: &Q) -> ValueOption<&V> {
    self.get(key).into()
  }

  #[inline]
  fn get_entry_or_none(&self, key: &Q) -> ValueOption<(&K, &V)> {
    self.get_key_value(key).into()
  }
}
