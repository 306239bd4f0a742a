use std::ops::{Add, BitAnd, BitOr, BitXor, Div, Mul, Neg, Rem, Shl, Shr, Sub};

use num_traits::Pow;

use crate::{
    element::{FloorDiv, TrueDiv},
    operand::Operand,
    vector::Vector,
};

macro_rules! elementwise_binop {
    ($Trait:ident, $method:ident, $op:tt) => {
        // Vector on the left.
        impl<'a, 'b, T, S> $Trait<&'b Vector<S>> for &'a Vector<T>
        where
            T: $Trait<S> + Clone,
            S: Clone,
        {
            type Output = Vector<<T as $Trait<S>>::Output>;

            fn $method(self, rhs: &'b Vector<S>) -> Self::Output {
                self.apply_bin(rhs, |x, y| x $op y)
            }
        }

        impl<'a, T, S> $Trait<Vector<S>> for &'a Vector<T>
        where
            T: $Trait<S> + Clone,
            S: Clone,
        {
            type Output = Vector<<T as $Trait<S>>::Output>;

            fn $method(self, rhs: Vector<S>) -> Self::Output {
                self.apply_bin(&rhs, |x, y| x $op y)
            }
        }

        impl<'b, T, S> $Trait<&'b Vector<S>> for Vector<T>
        where
            T: $Trait<S> + Clone,
            S: Clone,
        {
            type Output = Vector<<T as $Trait<S>>::Output>;

            fn $method(self, rhs: &'b Vector<S>) -> Self::Output {
                (&self).$method(rhs)
            }
        }

        impl<T, S> $Trait<Vector<S>> for Vector<T>
        where
            T: $Trait<S> + Clone,
            S: Clone,
        {
            type Output = Vector<<T as $Trait<S>>::Output>;

            fn $method(self, rhs: Vector<S>) -> Self::Output {
                (&self).$method(&rhs)
            }
        }

        impl<'a, T, S> $Trait<Vec<S>> for &'a Vector<T>
        where
            T: $Trait<S> + Clone,
            S: Clone,
        {
            type Output = Vector<<T as $Trait<S>>::Output>;

            fn $method(self, rhs: Vec<S>) -> Self::Output {
                self.apply_bin(&rhs, |x, y| x $op y)
            }
        }

        impl<T, S> $Trait<Vec<S>> for Vector<T>
        where
            T: $Trait<S> + Clone,
            S: Clone,
        {
            type Output = Vector<<T as $Trait<S>>::Output>;

            fn $method(self, rhs: Vec<S>) -> Self::Output {
                (&self).$method(rhs)
            }
        }

        impl<'a, 'b, T, S> $Trait<&'b [S]> for &'a Vector<T>
        where
            T: $Trait<S> + Clone,
            S: Clone,
        {
            type Output = Vector<<T as $Trait<S>>::Output>;

            fn $method(self, rhs: &'b [S]) -> Self::Output {
                self.apply_bin(rhs, |x, y| x $op y)
            }
        }

        impl<'b, T, S> $Trait<&'b [S]> for Vector<T>
        where
            T: $Trait<S> + Clone,
            S: Clone,
        {
            type Output = Vector<<T as $Trait<S>>::Output>;

            fn $method(self, rhs: &'b [S]) -> Self::Output {
                (&self).$method(rhs)
            }
        }

        impl<'a, T, S, const N: usize> $Trait<[S; N]> for &'a Vector<T>
        where
            T: $Trait<S> + Clone,
            S: Clone,
        {
            type Output = Vector<<T as $Trait<S>>::Output>;

            fn $method(self, rhs: [S; N]) -> Self::Output {
                self.apply_bin(rhs.as_slice(), |x, y| x $op y)
            }
        }

        impl<T, S, const N: usize> $Trait<[S; N]> for Vector<T>
        where
            T: $Trait<S> + Clone,
            S: Clone,
        {
            type Output = Vector<<T as $Trait<S>>::Output>;

            fn $method(self, rhs: [S; N]) -> Self::Output {
                (&self).$method(rhs)
            }
        }

        // Plain sequence on the left, Vector semantics still apply.
        impl<'a, T, S> $Trait<&'a Vector<T>> for Vec<S>
        where
            S: $Trait<T> + Clone,
            T: Clone,
        {
            type Output = Vector<<S as $Trait<T>>::Output>;

            fn $method(self, rhs: &'a Vector<T>) -> Self::Output {
                rhs.apply_bin(&self, |x, y| y $op x)
            }
        }

        impl<T, S> $Trait<Vector<T>> for Vec<S>
        where
            S: $Trait<T> + Clone,
            T: Clone,
        {
            type Output = Vector<<S as $Trait<T>>::Output>;

            fn $method(self, rhs: Vector<T>) -> Self::Output {
                self.$method(&rhs)
            }
        }

        impl<'a, T, S, const N: usize> $Trait<&'a Vector<T>> for [S; N]
        where
            S: $Trait<T> + Clone,
            T: Clone,
        {
            type Output = Vector<<S as $Trait<T>>::Output>;

            fn $method(self, rhs: &'a Vector<T>) -> Self::Output {
                rhs.apply_bin(self.as_slice(), |x, y| y $op x)
            }
        }

        impl<T, S, const N: usize> $Trait<Vector<T>> for [S; N]
        where
            S: $Trait<T> + Clone,
            T: Clone,
        {
            type Output = Vector<<S as $Trait<T>>::Output>;

            fn $method(self, rhs: Vector<T>) -> Self::Output {
                self.$method(&rhs)
            }
        }

        impl<'a, 'b, T, S> $Trait<&'a Vector<T>> for &'b [S]
        where
            S: $Trait<T> + Clone,
            T: Clone,
        {
            type Output = Vector<<S as $Trait<T>>::Output>;

            fn $method(self, rhs: &'a Vector<T>) -> Self::Output {
                rhs.apply_bin(self, |x, y| y $op x)
            }
        }

        impl<'b, T, S> $Trait<Vector<T>> for &'b [S]
        where
            S: $Trait<T> + Clone,
            T: Clone,
        {
            type Output = Vector<<S as $Trait<T>>::Output>;

            fn $method(self, rhs: Vector<T>) -> Self::Output {
                self.$method(&rhs)
            }
        }

        impl<'a, 'b, T, S> $Trait<&'a Vector<T>> for &'b Vec<S>
        where
            S: $Trait<T> + Clone,
            T: Clone,
        {
            type Output = Vector<<S as $Trait<T>>::Output>;

            fn $method(self, rhs: &'a Vector<T>) -> Self::Output {
                rhs.apply_bin(self, |x, y| y $op x)
            }
        }

        impl<'b, T, S> $Trait<Vector<T>> for &'b Vec<S>
        where
            S: $Trait<T> + Clone,
            T: Clone,
        {
            type Output = Vector<<S as $Trait<T>>::Output>;

            fn $method(self, rhs: Vector<T>) -> Self::Output {
                self.$method(&rhs)
            }
        }
    };
}

elementwise_binop!(Add, add, +);
elementwise_binop!(Sub, sub, -);
elementwise_binop!(Mul, mul, *);
elementwise_binop!(Div, div, /);
elementwise_binop!(Rem, rem, %);
elementwise_binop!(Shl, shl, <<);
elementwise_binop!(Shr, shr, >>);
elementwise_binop!(BitAnd, bitand, &);
elementwise_binop!(BitXor, bitxor, ^);
elementwise_binop!(BitOr, bitor, |);

// Scalars are concrete types so that `v + 1` and `10 * v` infer without
// annotations and never overlap with the sequence impls above.
macro_rules! scalar_binop {
    ($Trait:ident, $method:ident, $op:tt; $($t:ty),*) => {$(
        impl<'a> $Trait<$t> for &'a Vector<$t> {
            type Output = Vector<<$t as $Trait>::Output>;

            fn $method(self, rhs: $t) -> Self::Output {
                self.apply_bin(Operand::Scalar(rhs), |x, y| x $op y)
            }
        }

        impl $Trait<$t> for Vector<$t> {
            type Output = Vector<<$t as $Trait>::Output>;

            fn $method(self, rhs: $t) -> Self::Output {
                (&self).$method(rhs)
            }
        }

        impl<'a> $Trait<&'a Vector<$t>> for $t {
            type Output = Vector<<$t as $Trait>::Output>;

            fn $method(self, rhs: &'a Vector<$t>) -> Self::Output {
                rhs.apply_bin(Operand::Scalar(self), |x, y| y $op x)
            }
        }

        impl $Trait<Vector<$t>> for $t {
            type Output = Vector<<$t as $Trait>::Output>;

            fn $method(self, rhs: Vector<$t>) -> Self::Output {
                self.$method(&rhs)
            }
        }
    )*};
}

macro_rules! scalar_arith {
    ($($t:ty),*) => {
        scalar_binop!(Add, add, +; $($t),*);
        scalar_binop!(Sub, sub, -; $($t),*);
        scalar_binop!(Mul, mul, *; $($t),*);
        scalar_binop!(Div, div, /; $($t),*);
        scalar_binop!(Rem, rem, %; $($t),*);
    };
}

macro_rules! scalar_bits {
    ($($t:ty),*) => {
        scalar_binop!(BitAnd, bitand, &; $($t),*);
        scalar_binop!(BitXor, bitxor, ^; $($t),*);
        scalar_binop!(BitOr, bitor, |; $($t),*);
    };
}

macro_rules! scalar_shifts {
    ($($t:ty),*) => {
        scalar_binop!(Shl, shl, <<; $($t),*);
        scalar_binop!(Shr, shr, >>; $($t),*);
    };
}

scalar_arith!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);
scalar_bits!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, bool);
scalar_shifts!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl<'a, T> Neg for &'a Vector<T>
where
    T: Neg + Clone,
{
    type Output = Vector<T::Output>;

    fn neg(self) -> Self::Output {
        self.apply(|x| -x)
    }
}

impl<T> Neg for Vector<T>
where
    T: Neg + Clone,
{
    type Output = Vector<T::Output>;

    fn neg(self) -> Self::Output {
        -&self
    }
}

// `other OP self`.
macro_rules! reflected_method {
    ($(#[$meta:meta])* $name:ident, $Trait:ident, $op:tt) => {
        $(#[$meta])*
        pub fn $name<'a, S>(
            &self,
            other: impl Into<Operand<'a, S>>,
        ) -> Vector<<S as $Trait<T>>::Output>
        where
            S: $Trait<T> + Clone + 'a,
        {
            self.apply_bin(other, |x, y| y $op x)
        }
    };
}

impl<T: Clone> Vector<T> {
    reflected_method!(
        /// `other + self`, elementwise.
        ///
        /// ```
        /// use linvec::Vector;
        ///
        /// let a = Vector::new(["x", "y"]);
        /// let prefixed = a.radd(linvec::Operand::scalar(String::from(">")));
        /// assert_eq!(prefixed, [">x", ">y"]);
        /// ```
        radd, Add, +
    );
    reflected_method!(rsub, Sub, -);
    reflected_method!(rmul, Mul, *);
    reflected_method!(rdiv, Div, /);
    reflected_method!(rrem, Rem, %);
    reflected_method!(rshl, Shl, <<);
    reflected_method!(rshr, Shr, >>);
    reflected_method!(rbitand, BitAnd, &);
    reflected_method!(rbitxor, BitXor, ^);
    reflected_method!(rbitor, BitOr, |);

    pub fn true_div<'a, S>(&self, other: impl Into<Operand<'a, S>>) -> Vector<T::Output>
    where
        T: TrueDiv<S>,
        S: Clone + 'a,
    {
        self.apply_bin(other, |x, y| x.true_div(y))
    }

    pub fn rtrue_div<'a, S>(&self, other: impl Into<Operand<'a, S>>) -> Vector<S::Output>
    where
        S: TrueDiv<T> + Clone + 'a,
    {
        self.apply_bin(other, |x, y| y.true_div(x))
    }

    pub fn floor_div<'a, S>(&self, other: impl Into<Operand<'a, S>>) -> Vector<T::Output>
    where
        T: FloorDiv<S>,
        S: Clone + 'a,
    {
        self.apply_bin(other, |x, y| x.floor_div(y))
    }

    pub fn rfloor_div<'a, S>(&self, other: impl Into<Operand<'a, S>>) -> Vector<S::Output>
    where
        S: FloorDiv<T> + Clone + 'a,
    {
        self.apply_bin(other, |x, y| y.floor_div(x))
    }

    /// Remainder with the sign of the divisor. `%` keeps the element's own `Rem`.
    pub fn modulo<'a, S>(&self, other: impl Into<Operand<'a, S>>) -> Vector<T::Output>
    where
        T: FloorDiv<S>,
        S: Clone + 'a,
    {
        self.apply_bin(other, |x, y| x.floor_mod(y))
    }

    pub fn rmodulo<'a, S>(&self, other: impl Into<Operand<'a, S>>) -> Vector<S::Output>
    where
        S: FloorDiv<T> + Clone + 'a,
    {
        self.apply_bin(other, |x, y| y.floor_mod(x))
    }

    /// `(self.floor_div(other), self.modulo(other))`.
    ///
    /// ```
    /// use linvec::Vector;
    ///
    /// let (q, r) = Vector::new([7, -7]).divmod(2);
    /// assert_eq!(q, [3, -4]);
    /// assert_eq!(r, [1, 1]);
    /// ```
    pub fn divmod<'a, S>(
        &self,
        other: impl Into<Operand<'a, S>>,
    ) -> (Vector<T::Output>, Vector<T::Output>)
    where
        T: FloorDiv<S>,
        S: Clone + 'a,
    {
        let other = other.into();
        (self.floor_div(other.clone()), self.modulo(other))
    }

    pub fn rdivmod<'a, S>(
        &self,
        other: impl Into<Operand<'a, S>>,
    ) -> (Vector<S::Output>, Vector<S::Output>)
    where
        S: FloorDiv<T> + Clone + 'a,
    {
        let other = other.into();
        (self.rfloor_div(other.clone()), self.rmodulo(other))
    }

    pub fn pow<'a, S>(&self, other: impl Into<Operand<'a, S>>) -> Vector<T::Output>
    where
        T: Pow<S>,
        S: Clone + 'a,
    {
        self.apply_bin(other, |x, y| x.pow(y))
    }

    pub fn rpow<'a, S>(&self, other: impl Into<Operand<'a, S>>) -> Vector<S::Output>
    where
        S: Pow<T> + Clone + 'a,
    {
        self.apply_bin(other, |x, y| y.pow(x))
    }

    // Comparisons return one bool per paired element, never a single verdict.

    pub fn elem_eq<'a, S>(&self, other: impl Into<Operand<'a, S>>) -> Vector<bool>
    where
        T: PartialEq<S>,
        S: Clone + 'a,
    {
        self.apply_bin(other, |x, y| x == y)
    }

    pub fn elem_ne<'a, S>(&self, other: impl Into<Operand<'a, S>>) -> Vector<bool>
    where
        T: PartialEq<S>,
        S: Clone + 'a,
    {
        self.apply_bin(other, |x, y| x != y)
    }

    pub fn elem_lt<'a, S>(&self, other: impl Into<Operand<'a, S>>) -> Vector<bool>
    where
        T: PartialOrd<S>,
        S: Clone + 'a,
    {
        self.apply_bin(other, |x, y| x < y)
    }

    pub fn elem_le<'a, S>(&self, other: impl Into<Operand<'a, S>>) -> Vector<bool>
    where
        T: PartialOrd<S>,
        S: Clone + 'a,
    {
        self.apply_bin(other, |x, y| x <= y)
    }

    pub fn elem_gt<'a, S>(&self, other: impl Into<Operand<'a, S>>) -> Vector<bool>
    where
        T: PartialOrd<S>,
        S: Clone + 'a,
    {
        self.apply_bin(other, |x, y| x > y)
    }

    pub fn elem_ge<'a, S>(&self, other: impl Into<Operand<'a, S>>) -> Vector<bool>
    where
        T: PartialOrd<S>,
        S: Clone + 'a,
    {
        self.apply_bin(other, |x, y| x >= y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vector_plus_vector() {
        let a = Vector::new([1, 2, 3]);
        assert_eq!(&a + &a, [2, 4, 6]);
        assert_eq!(a.clone() + a.clone(), [2, 4, 6]);
        assert_eq!(&a + a.clone(), [2, 4, 6]);
        assert_eq!(a.clone() + &a, [2, 4, 6]);
    }

    #[test]
    fn test_truncates_to_shorter_operand() {
        let a = Vector::new([1, 2, 3]);
        assert_eq!(&a + [1, 2, 3, 4], [2, 4, 6]);
        assert_eq!(&a * vec![2], [2]);
        assert_eq!(&a - &[1, 1][..], [0, 1]);
        assert_eq!([1, 2, 3, 4] + &a, [2, 4, 6]);
        assert!((&a + Vec::<i32>::new()).is_empty());
    }

    #[test]
    fn test_scalar_broadcast_both_sides() {
        let a = Vector::new([1, 2, 3]);
        assert_eq!(10 * &a, [10, 20, 30]);
        assert_eq!(&a * 10, [10, 20, 30]);
        assert_eq!(&a - 1, [0, 1, 2]);
        assert_eq!(1 - &a, [0, -1, -2]);
        assert_eq!(12 / Vector::new([1i32, 2, 3]), [12, 6, 4]);
        assert_eq!(1.0 - Vector::new([0.5f64, 0.25]), [0.5, 0.75]);
    }

    #[test]
    fn test_reflected_sequence_keeps_operand_order() {
        let a = Vector::new([1, 2, 3]);
        assert_eq!(vec![10, 10, 10] - &a, [9, 8, 7]);
        assert_eq!([10, 10] - a.clone(), [9, 8]);
        assert_eq!(a.rsub(&[10, 10, 10]), [9, 8, 7]);
        assert_eq!(a.rsub(10), [9, 8, 7]);
        assert_eq!(a.rdiv(6), [6, 3, 2]);
    }

    #[test]
    fn test_borrowed_sequence_on_the_left() {
        let a = Vector::new([1i32, 2, 3]);
        let list = vec![10i32, 10, 10, 10];
        assert_eq!(&list[..] - &a, [9, 8, 7]);
        assert_eq!(&list - &a, [9, 8, 7]);
        assert_eq!(&list[..2] * a.clone(), [10, 20]);
        assert_eq!(&list + a, [11, 12, 13]);
        assert_eq!(list, [10, 10, 10, 10]);
    }

    #[test]
    fn test_rrem_uses_element_remainder() {
        let a = Vector::new([3i32, -3, 4]);
        assert_eq!(a.rrem(7i32), [1, 1, 3]);
        assert_eq!(a.rrem(&[-7i32, 7]), [-1, 1]);
        assert_eq!(a.rmodulo(7i32), [1, -2, 3]);
    }

    #[test]
    fn test_division_and_remainder_use_element_semantics() {
        let a = Vector::new([7, -7]);
        assert_eq!(&a / 2, [3, -3]);
        assert_eq!(&a % 2, [1, -1]);
        assert_eq!(a.floor_div(2), [3, -4]);
        assert_eq!(a.modulo(2), [1, 1]);
        assert_eq!(a.rfloor_div(20), [2, -3]);
        assert_eq!(a.rmodulo(20), [6, -1]);
    }

    #[test]
    fn test_true_div() {
        let a = Vector::new([1, 3]);
        assert_eq!(a.true_div(2), [0.5, 1.5]);
        assert_eq!(a.rtrue_div(3), [3.0, 1.0]);
        assert_eq!(Vector::new([1.0f64, 2.0]).true_div(&[4.0, 8.0]), [0.25, 0.25]);
    }

    #[test]
    fn test_divmod_matches_components() {
        let a = Vector::new([9, -9, 4, 0]);
        let b = Vector::new([4, 4, -3]);
        let (q, r) = a.divmod(&b);
        assert_eq!(q, a.floor_div(&b));
        assert_eq!(r, a.modulo(&b));
        assert_eq!(q.len(), 3);

        let (rq, rr) = Vector::new([3, 5]).rdivmod(17);
        assert_eq!(rq, [5, 3]);
        assert_eq!(rr, [2, 2]);
    }

    #[test]
    #[should_panic]
    fn test_integer_division_by_zero_propagates() {
        let _ = Vector::new([1, 2]) / Vector::new([1, 0]);
    }

    #[test]
    fn test_pow() {
        let a = Vector::new([2i32, 3]);
        assert_eq!(a.pow(2u32), [4, 9]);
        assert_eq!(a.pow(&[3u32, 0]), [8, 1]);
        assert_eq!(Vector::new([2u32, 3]).rpow(2u32), [4, 8]);
        assert_eq!(Vector::new([4.0f64, 0.5]).pow(2.0f64), [16.0, 0.25]);
    }

    #[test]
    fn test_bitwise_and_shifts() {
        let a = Vector::new([0b1100u8, 0b1010]);
        assert_eq!(&a & 0b1000, [0b1000, 0b1000]);
        assert_eq!(&a | [0b0001, 0b0100], [0b1101, 0b1110]);
        assert_eq!(&a ^ &a, [0, 0]);
        assert_eq!(&a >> 2, [0b11, 0b10]);
        assert_eq!(&a << vec![1u8, 0], [0b11000u8, 0b1010]);
        assert_eq!(1u8 << Vector::new([0u8, 3]), [1, 8]);
        assert_eq!(Vector::new([1u8, 3]).rshr(0b1_0000u8), [8, 2]);
        assert_eq!(Vector::new([true, false]) & true, [true, false]);
        assert_eq!(Vector::new([1i32, 2]).rbitor(4i32), [5, 6]);
        assert_eq!(Vector::new([3i32, 5]).rbitand(1i32), [1, 1]);
        assert_eq!(Vector::new([3i32, 5]).rbitxor(1i32), [2, 4]);
        assert_eq!(Vector::new([1i32, 2]).rshl(1i32), [2, 4]);
    }

    #[test]
    fn test_neg() {
        let a = Vector::new([1, -2, 0]);
        assert_eq!(-&a, [-1, 2, 0]);
        assert_eq!(-a, [-1, 2, 0]);
    }

    #[test]
    fn test_sub_is_negated_reverse_sub() {
        let a = Vector::new([5, 1, 9]);
        let b = Vector::new([2, 8, 3]);
        assert_eq!(&a - &b, -(&b - &a));
    }

    #[test]
    fn test_comparisons_are_elementwise() {
        let a = Vector::new([1, 5, 3]);
        let b = Vector::new([2, 5, 1]);
        assert_eq!(a.elem_eq(&b), [false, true, false]);
        assert_eq!(a.elem_ne(&b), [true, false, true]);
        assert_eq!(a.elem_lt(&b), [true, false, false]);
        assert_eq!(a.elem_le(&b), [true, true, false]);
        assert_eq!(a.elem_gt(&b), [false, false, true]);
        assert_eq!(a.elem_ge(&b), [false, true, true]);
        assert_eq!(a.elem_gt(2), [false, true, true]);
        assert_eq!(a.elem_eq(&[1]), [true]);
    }

    #[test]
    fn test_operators_leave_operands_untouched() {
        let a = Vector::new([1.5f64, 2.5]);
        let b = Vector::new([0.5, 0.5]);
        let _ = &a * &b;
        let _ = a.pow(2.0f64);
        let _ = a.elem_lt(&b);
        assert_eq!(a, [1.5, 2.5]);
        assert_eq!(b, [0.5, 0.5]);
    }

    #[test]
    fn test_mixed_element_types() {
        let counts = Vector::new([1u32, 2]);
        let names = Vector::new([String::from("a"), String::from("b")]);
        let joined = &names + vec!["x", "y"];
        assert_eq!(joined, ["ax", "by"]);
        assert_eq!(counts.rmul(Operand::scalar(2u32)), [2, 4]);
    }
}
