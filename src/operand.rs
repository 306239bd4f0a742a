use crate::vector::Vector;

/// Right-hand side of an elementwise combine: zipped, or broadcast.
#[derive(Debug, Clone)]
pub enum Operand<'a, S> {
    Sequence(&'a [S]),
    Scalar(S),
}

impl<'a, S> Operand<'a, S> {
    pub fn sequence(values: &'a [S]) -> Self {
        Operand::Sequence(values)
    }

    pub fn scalar(value: S) -> Self {
        Operand::Scalar(value)
    }

    pub fn is_scalar(&self) -> bool {
        matches!(self, Operand::Scalar(_))
    }
}

impl<'a, S> From<&'a [S]> for Operand<'a, S> {
    fn from(values: &'a [S]) -> Self {
        Operand::Sequence(values)
    }
}

impl<'a, S, const N: usize> From<&'a [S; N]> for Operand<'a, S> {
    fn from(values: &'a [S; N]) -> Self {
        Operand::Sequence(values.as_slice())
    }
}

impl<'a, S> From<&'a Vec<S>> for Operand<'a, S> {
    fn from(values: &'a Vec<S>) -> Self {
        Operand::Sequence(values.as_slice())
    }
}

impl<'a, S> From<&'a Vector<S>> for Operand<'a, S> {
    fn from(values: &'a Vector<S>) -> Self {
        Operand::Sequence(values.as_slice())
    }
}

macro_rules! scalar_operand {
    ($($t:ty),* $(,)?) => {
        $(
            impl<'a> From<$t> for Operand<'a, $t> {
                fn from(value: $t) -> Self {
                    Operand::Scalar(value)
                }
            }
        )*
    };
}

scalar_operand!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool);

#[test]
fn test_operand_from_sequences() {
    let v = Vector::new([1, 2, 3]);
    let raw = vec![4, 5];
    let arr = [6];

    assert!(matches!(Operand::from(&v), Operand::Sequence(s) if s == [1, 2, 3]));
    assert!(matches!(Operand::from(&raw), Operand::Sequence(s) if s == [4, 5]));
    assert!(matches!(Operand::from(&arr), Operand::Sequence(s) if s == [6]));
    assert!(matches!(Operand::from(&raw[..1]), Operand::Sequence(s) if s == [4]));
}

#[test]
fn test_operand_from_scalar() {
    let op: Operand<'_, i32> = 7.into();
    assert!(op.is_scalar());
    assert!(!Operand::sequence(&[1.0f64][..]).is_scalar());
}
