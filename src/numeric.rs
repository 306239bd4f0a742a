use std::{iter::Sum, ops::Mul};

use anyhow::{anyhow, ensure, Result};
use num_traits::{CheckedDiv, CheckedRem, Float};

use crate::{element::Truthy, operand::Operand, vector::Vector};

/// Dot product of two vectors of the same element type.
///
/// Pairs past the shorter length are ignored, as with every other
/// elementwise operation; the empty product is `T`'s zero.
pub fn dot_product<T>(a: &Vector<T>, b: &Vector<T>) -> T
where
    T: Clone + Mul<Output = T> + Sum,
{
    a.dot(b)
}

impl<T: Clone> Vector<T> {
    /// Sum of the elementwise product.
    ///
    /// ```
    /// use linvec::Vector;
    ///
    /// let a = Vector::new([1, 2, 3]);
    /// assert_eq!(a.dot(&a), 14);
    /// ```
    pub fn dot<'a, S, U>(&self, other: impl Into<Operand<'a, S>>) -> U
    where
        T: Mul<S, Output = U>,
        S: Clone + 'a,
        U: Sum,
    {
        self.apply_bin(other, |x, y| x * y).into_iter().sum()
    }

    pub fn rdot<'a, S, U>(&self, other: impl Into<Operand<'a, S>>) -> U
    where
        S: Mul<T, Output = U> + Clone + 'a,
        U: Sum,
    {
        self.rmul(other).into_iter().sum()
    }

    pub fn as_bool(&self) -> Vector<bool>
    where
        T: Truthy,
    {
        self.apply(|x| x.truthy())
    }

    /// `/` that reports an integer division by zero (or overflow) as an error
    /// instead of panicking.
    pub fn checked_div<'a>(&self, other: impl Into<Operand<'a, T>>) -> Result<Vector<T>>
    where
        T: CheckedDiv + 'a,
    {
        let mut index = 0usize;
        self.try_apply_bin(other, |x, y| {
            let i = index;
            index += 1;
            x.checked_div(&y)
                .ok_or_else(|| anyhow!("checked division failed at index {}", i))
        })
    }

    pub fn checked_rem<'a>(&self, other: impl Into<Operand<'a, T>>) -> Result<Vector<T>>
    where
        T: CheckedRem + 'a,
    {
        let mut index = 0usize;
        self.try_apply_bin(other, |x, y| {
            let i = index;
            index += 1;
            x.checked_rem(&y)
                .ok_or_else(|| anyhow!("checked remainder failed at index {}", i))
        })
    }
}

impl<T> Vector<T>
where
    T: Float + Sum,
{
    /// Projection of `self` onto `other`: `(self·other / other·other) * other`.
    /// Errors on a zero (or non-finite) `other`.
    ///
    /// Only float elements are projected; map integer vectors first:
    ///
    /// ```
    /// use linvec::Vector;
    ///
    /// let a = Vector::new([3i32, 4]).apply(f64::from);
    /// let x = Vector::new([2i32, 0]).apply(f64::from);
    /// assert_eq!(a.proj(&x)?, [3.0, 0.0]);
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    pub fn proj(&self, other: &Vector<T>) -> Result<Vector<T>> {
        let denom: T = other.dot(other);
        ensure!(
            !denom.is_zero(),
            "cannot project onto a zero vector (len {})",
            other.len()
        );
        ensure!(
            denom.is_finite(),
            "cannot project onto a vector with non-finite squared norm"
        );
        let coefficient = self.dot(other) / denom;
        Ok(other.rmul(Operand::Scalar(coefficient)))
    }
}

impl Vector<bool> {
    /// True when every element is true; true for an empty vector.
    pub fn all(&self) -> bool {
        self.iter().all(|&b| b)
    }

    pub fn any(&self) -> bool {
        self.iter().any(|&b| b)
    }
}

#[cfg(test)]
mod tests {
    use anyhow::Result;
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn test_dot_product() {
        let a = Vector::new([1, 2, 3]);
        assert_eq!(dot_product(&a, &a), 14);
        assert_eq!(a.dot(&[4, 5, 6]), 32);
        assert_eq!(a.rdot(&[4, 5, 6]), 32);
    }

    #[test]
    fn test_dot_truncates() {
        let a = Vector::new([1, 2, 3]);
        assert_eq!(a.dot(&[10, 10]), 30);
        assert_eq!(dot_product(&a, &Vector::empty()), 0);
    }

    #[test]
    fn test_dot_with_scalar_sums_scaled_elements() {
        let a = Vector::new([1, 2, 3]);
        assert_eq!(a.dot(2), 12);
    }

    #[test]
    fn test_proj() -> Result<()> {
        let a = Vector::new([3.0f64, 4.0]);
        let x = Vector::new([1.0, 0.0]);
        let p = a.proj(&x)?;
        assert_eq!(p, [3.0, 0.0]);

        let diag = Vector::new([1.0, 1.0]);
        let p = a.proj(&diag)?;
        assert_relative_eq!(p[0], 3.5, epsilon = 1e-12);
        assert_relative_eq!(p[1], 3.5, epsilon = 1e-12);
        Ok(())
    }

    #[test]
    fn test_proj_of_integer_vectors_through_f64() -> Result<()> {
        let a = Vector::new([1i64, 2, 3]).apply(|x| x as f64);
        let b = Vector::new([0i64, 0, 2]).apply(|x| x as f64);
        assert_eq!(a.proj(&b)?, [0.0, 0.0, 3.0]);
        Ok(())
    }

    #[test]
    fn test_proj_residual_is_orthogonal() -> Result<()> {
        let a = Vector::new([2.0f64, -1.0, 5.0]);
        let b = Vector::new([0.5, 3.0, 1.0]);
        let p = a.proj(&b)?;
        let residual = &a - &p;
        assert_relative_eq!(residual.dot(&b), 0.0, epsilon = 1e-12);
        Ok(())
    }

    #[test]
    fn test_proj_onto_zero_vector_fails() {
        let a = Vector::new([1.0f64, 2.0]);
        assert!(a.proj(&Vector::new([0.0, 0.0])).is_err());
        assert!(a.proj(&Vector::empty()).is_err());
        assert!(a.proj(&Vector::new([f64::INFINITY, 1.0])).is_err());
    }

    #[test]
    fn test_as_bool_and_reductions() {
        let a = Vector::new([0, 3, -1]);
        let truth = a.as_bool();
        assert_eq!(truth, [false, true, true]);
        assert!(!truth.all());
        assert!(truth.any());
        assert!(Vector::<bool>::empty().all());
        assert!(!Vector::<bool>::empty().any());
        assert!(Vector::new([1, 2]).elem_lt(&[2, 3]).all());
    }

    #[test]
    fn test_checked_div() -> Result<()> {
        let a = Vector::new([8i32, 9, 10]);
        assert_eq!(a.checked_div(&[2, 3, 5])?, [4, 3, 2]);
        assert_eq!(a.checked_rem(4)?, [0, 1, 2]);

        let err = a.checked_div(&[1, 0, 1]).unwrap_err();
        assert!(err.to_string().contains("index 1"), "{}", err);
        assert!(a.checked_rem(0).is_err());
        Ok(())
    }
}
