use std::iter::FusedIterator;

use crate::optional::Optional;

/// Iterator over the values of the present options of an inner iterator. Created by
/// [`WhereSomeExt::where_some`].
///
/// Lazy and unbuffered: each call to [`next`](Iterator::next) pulls from the inner iterator until it finds a present
/// option or the inner iterator ends.
#[derive(Debug, Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct WhereSome<I> {
  inner: I,
}

impl<I> WhereSome<I> {
  #[inline]
  pub fn new(inner: I) -> Self {
    Self { inner }
  }

  #[inline]
  pub fn into_inner(self) -> I { self.inner }
}

impl<I> Iterator for WhereSome<I> where
  I: Iterator,
  I::Item: Optional,
{
  type Item = <I::Item as Optional>::Value;

  #[inline]
  fn next(&mut self) -> Option<Self::Item> {
    self.inner.by_ref().find_map(Optional::into_value)
  }

  #[inline]
  fn size_hint(&self) -> (usize, Option<usize>) {
    (0, self.inner.size_hint().1)
  }
}

impl<I> DoubleEndedIterator for WhereSome<I> where
  I: DoubleEndedIterator,
  I::Item: Optional,
{
  #[inline]
  fn next_back(&mut self) -> Option<Self::Item> {
    self.inner.by_ref().rev().find_map(Optional::into_value)
  }
}

impl<I> FusedIterator for WhereSome<I> where
  I: FusedIterator,
  I::Item: Optional,
{}


pub trait WhereSomeExt: Iterator + Sized {
  /// Keeps only the present options, yielding their values.
  #[inline]
  fn where_some(self) -> WhereSome<Self> where
    Self::Item: Optional
  {
    WhereSome::new(self)
  }
}

impl<I: Iterator> WhereSomeExt for I {}
