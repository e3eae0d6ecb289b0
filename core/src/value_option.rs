use crate::optional::Optional;

/// An optional value: [`Some`](ValueOption::Some) value, or [`None`](ValueOption::None).
///
/// Immutable and compared structurally. The default is [`None`](ValueOption::None).
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Ord, PartialOrd, Eq, PartialEq, Hash, Debug)]
#[must_use]
pub enum ValueOption<T> {
  Some(T),
  None,
}

impl<T> Default for ValueOption<T> {
  #[inline]
  fn default() -> Self { Self::None }
}

impl<T> ValueOption<T> {
  #[inline]
  pub const fn has_value(&self) -> bool {
    matches!(self, Self::Some(_))
  }

  #[inline]
  pub const fn as_ref(&self) -> ValueOption<&T> {
    match self {
      Self::Some(value) => ValueOption::Some(value),
      Self::None => ValueOption::None,
    }
  }

  #[inline]
  pub fn iter(&self) -> std::option::IntoIter<&T> {
    self.as_ref().into_option().into_iter()
  }

  #[inline]
  pub fn into_option(self) -> Option<T> {
    match self {
      Self::Some(value) => Some(value),
      Self::None => None,
    }
  }
}

impl<T> ValueOption<ValueOption<T>> {
  #[inline]
  pub fn flatten(self) -> ValueOption<T> {
    match self {
      Self::Some(inner) => inner,
      Self::None => ValueOption::None,
    }
  }
}


impl<T> Optional for ValueOption<T> {
  type Value = T;

  #[inline]
  fn has_value(&self) -> bool { ValueOption::has_value(self) }
  #[inline]
  fn value(&self) -> Option<&T> { self.as_ref().into_option() }
  #[inline]
  fn into_value(self) -> Option<T> { self.into_option() }
}


impl<T> From<T> for ValueOption<T> {
  #[inline]
  fn from(value: T) -> Self { Self::Some(value) }
}

impl<T> From<Option<T>> for ValueOption<T> {
  #[inline]
  fn from(option: Option<T>) -> Self {
    match option {
      Some(value) => Self::Some(value),
      None => Self::None,
    }
  }
}

impl<T> From<ValueOption<T>> for Option<T> {
  #[inline]
  fn from(option: ValueOption<T>) -> Self { option.into_option() }
}

impl<T> IntoIterator for ValueOption<T> {
  type Item = T;
  type IntoIter = std::option::IntoIter<T>;

  #[inline]
  fn into_iter(self) -> Self::IntoIter { self.into_option().into_iter() }
}

impl<'a, T> IntoIterator for &'a ValueOption<T> {
  type Item = &'a T;
  type IntoIter = std::option::IntoIter<&'a T>;

  #[inline]
  fn into_iter(self) -> Self::IntoIter { self.iter() }
}
