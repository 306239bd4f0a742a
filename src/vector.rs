use core::fmt;
use std::{
    convert::Infallible,
    ops::{Deref, Index, IndexMut},
    slice::SliceIndex,
};

use tracing::trace;

use crate::operand::Operand;

/// An ordered sequence whose operators act elementwise.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Vector<T> {
    data: Vec<T>,
}

impl<T> Vector<T> {
    pub fn new(data: impl Into<Vec<T>>) -> Self {
        Self { data: data.into() }
    }

    pub fn empty() -> Self {
        Self { data: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn into_inner(self) -> Vec<T> {
        self.data
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.data.iter_mut()
    }

    pub fn push(&mut self, value: T) {
        self.data.push(value);
    }

    pub fn pop(&mut self) -> Option<T> {
        self.data.pop()
    }

    pub fn insert(&mut self, index: usize, value: T) {
        self.data.insert(index, value);
    }

    pub fn remove(&mut self, index: usize) -> T {
        self.data.remove(index)
    }

    pub fn truncate(&mut self, len: usize) {
        self.data.truncate(len);
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Sequence concatenation, not elementwise addition.
    pub fn concat(&self, other: &[T]) -> Self
    where
        T: Clone,
    {
        let mut data = Vec::with_capacity(self.data.len() + other.len());
        data.extend_from_slice(&self.data);
        data.extend_from_slice(other);
        Self { data }
    }

    pub fn apply<U, F>(&self, mut op: F) -> Vector<U>
    where
        T: Clone,
        F: FnMut(T) -> U,
    {
        match self.try_apply(|x| Ok::<U, Infallible>(op(x))) {
            Ok(v) => v,
            Err(never) => match never {},
        }
    }

    pub fn try_apply<U, E, F>(&self, op: F) -> Result<Vector<U>, E>
    where
        T: Clone,
        F: FnMut(T) -> Result<U, E>,
    {
        self.data.iter().cloned().map(op).collect()
    }

    /// Zips a sequence operand, cutting to the shorter length, or pairs a
    /// scalar operand with every element.
    ///
    /// ```
    /// use linvec::{Operand, Vector};
    ///
    /// let a = Vector::new([2, 2]);
    /// let b = Vector::new([3, 4, 1]);
    /// assert_eq!(a.apply_bin(&b, |x, y| x + y), [5, 6]);
    /// assert_eq!(a.apply_bin(Operand::scalar(3), |x, y| x * y), [6, 6]);
    /// ```
    pub fn apply_bin<'a, S, U, F>(
        &self,
        other: impl Into<Operand<'a, S>>,
        mut op: F,
    ) -> Vector<U>
    where
        T: Clone,
        S: Clone + 'a,
        F: FnMut(T, S) -> U,
    {
        match self.try_apply_bin(other, |x, y| Ok::<U, Infallible>(op(x, y))) {
            Ok(v) => v,
            Err(never) => match never {},
        }
    }

    pub fn try_apply_bin<'a, S, U, E, F>(
        &self,
        other: impl Into<Operand<'a, S>>,
        mut op: F,
    ) -> Result<Vector<U>, E>
    where
        T: Clone,
        S: Clone + 'a,
        F: FnMut(T, S) -> Result<U, E>,
    {
        match other.into() {
            Operand::Sequence(rhs) => {
                if rhs.len() != self.data.len() {
                    trace!(
                        lhs_len = self.data.len(),
                        rhs_len = rhs.len(),
                        kept = self.data.len().min(rhs.len()),
                        "elementwise combine truncated to the shorter operand"
                    );
                }
                self.data
                    .iter()
                    .zip(rhs)
                    .map(|(x, y)| op(x.clone(), y.clone()))
                    .collect()
            }
            Operand::Scalar(s) => self
                .data
                .iter()
                .map(|x| op(x.clone(), s.clone()))
                .collect(),
        }
    }
}

impl<T> Default for Vector<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> Deref for Vector<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl<T, I: SliceIndex<[T]>> Index<I> for Vector<T> {
    type Output = I::Output;

    fn index(&self, index: I) -> &Self::Output {
        &self.data[index]
    }
}

impl<T, I: SliceIndex<[T]>> IndexMut<I> for Vector<T> {
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        &mut self.data[index]
    }
}

impl<T> From<Vec<T>> for Vector<T> {
    fn from(data: Vec<T>) -> Self {
        Self { data }
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T> {
    fn from(data: [T; N]) -> Self {
        Self { data: data.into() }
    }
}

impl<T: Clone> From<&[T]> for Vector<T> {
    fn from(data: &[T]) -> Self {
        Self {
            data: data.to_vec(),
        }
    }
}

impl<T> From<Vector<T>> for Vec<T> {
    fn from(v: Vector<T>) -> Self {
        v.data
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            data: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Vector<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.data.extend(iter);
    }
}

impl<T> IntoIterator for Vector<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<T: PartialEq<U>, U> PartialEq<Vec<U>> for Vector<T> {
    fn eq(&self, other: &Vec<U>) -> bool {
        self.data == *other
    }
}

impl<T: PartialEq<U>, U> PartialEq<[U]> for Vector<T> {
    fn eq(&self, other: &[U]) -> bool {
        self.data[..] == *other
    }
}

impl<T: PartialEq<U>, U, const N: usize> PartialEq<[U; N]> for Vector<T> {
    fn eq(&self, other: &[U; N]) -> bool {
        self.data[..] == other[..]
    }
}

impl<T> fmt::Display for Vector<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[")?;
        for (i, x) in self.data.iter().enumerate() {
            if i != 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", x)?;
        }
        write!(f, "]")
    }
}

#[test]
fn test_construction_round_trips() {
    let source = vec![3, 1, 4, 1, 5];
    let v = Vector::new(source.clone());
    assert_eq!(v.iter().copied().collect::<Vec<_>>(), source);
    assert_eq!(v.len(), 5);
    assert_eq!(Vec::from(v), source);
}

#[test]
fn test_display() {
    assert_eq!(format!("{}", Vector::new([2, 4, 6])), "[2, 4, 6]");
    assert_eq!(format!("{}", Vector::<i32>::empty()), "[]");
    assert_eq!(format!("{}", Vector::new([1.5])), "[1.5]");
}

#[test]
fn test_sequence_mutation() {
    let mut v = Vector::new([1, 2]);
    v.push(3);
    v.extend([4, 5]);
    v.insert(0, 0);
    assert_eq!(v, [0, 1, 2, 3, 4, 5]);
    assert_eq!(v.remove(0), 0);
    assert_eq!(v.pop(), Some(5));
    v[0] = 10;
    v.truncate(2);
    assert_eq!(v, [10, 2]);
    v.clear();
    assert!(v.is_empty());
}

#[test]
fn test_concat_is_not_elementwise() {
    let a = Vector::new([1, 2]);
    let joined = a.concat(&[3]);
    assert_eq!(joined, [1, 2, 3]);
    assert_eq!(a, [1, 2]);
}

#[test]
fn test_apply_leaves_receiver_untouched() {
    let a = Vector::new([2, 1]);
    let squared = a.apply(|x| x * x);
    assert_eq!(squared, [4, 1]);
    assert_eq!(a, [2, 1]);
}

#[test]
fn test_apply_bin_truncates_either_side() {
    let a = Vector::new([2, 2]);
    let b = Vector::new([3, 4, 1]);
    assert_eq!(a.apply_bin(&b, |x, y| x + y), [5, 6]);
    assert_eq!(b.apply_bin(&a, |x, y| x + y), [5, 6]);
}

#[test]
fn test_apply_bin_broadcasts_scalar() {
    let a = Vector::new([1, 2, 3]);
    assert_eq!(a.apply_bin(Operand::scalar(10), |x, y| x * y), [10, 20, 30]);
    let empty = Vector::<i32>::empty();
    assert!(empty.apply_bin(Operand::scalar(5), |x, y| x + y).is_empty());
}

#[test]
fn test_apply_bin_mixed_element_types() {
    let names = Vector::new(["a", "bb"]);
    let counts = [2usize, 3];
    let repeated = names.apply_bin(&counts, |s, n| s.repeat(n));
    assert_eq!(repeated, ["aa".to_string(), "bbbbbb".to_string()]);
}

#[test]
fn test_try_apply_bin_stops_at_first_error() {
    let a = Vector::new([4i32, 6, 8]);
    let mut calls = 0;
    let out: Result<Vector<i32>, String> = a.try_apply_bin(&[2, 0, 1], |x, y| {
        calls += 1;
        x.checked_div(y).ok_or_else(|| "zero".to_string())
    });
    assert_eq!(out, Err("zero".to_string()));
    assert_eq!(calls, 2);
}

#[test]
fn test_try_apply() {
    let a = Vector::new(["1", "2", "x"]);
    assert!(a.try_apply(|s| s.parse::<i32>()).is_err());
    let ok = Vector::new(["1", "2"]).try_apply(|s| s.parse::<i32>());
    assert_eq!(ok, Ok(Vector::new([1, 2])));
}
