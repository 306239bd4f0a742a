use num_traits::Float;

/// Division rounded toward negative infinity. For non-zero `rhs`,
/// `self == rhs * self.floor_div(rhs) + self.floor_mod(rhs)` and the remainder
/// takes the sign of `rhs`.
pub trait FloorDiv<Rhs = Self> {
    type Output;

    fn floor_div(self, rhs: Rhs) -> Self::Output;

    fn floor_mod(self, rhs: Rhs) -> Self::Output;
}

pub trait TrueDiv<Rhs = Self> {
    type Output;

    fn true_div(self, rhs: Rhs) -> Self::Output;
}

/// Zero, empty and absent values are false.
pub trait Truthy {
    fn truthy(&self) -> bool;
}

macro_rules! signed_int {
    ($($t:ty),*) => {$(
        impl FloorDiv for $t {
            type Output = $t;

            fn floor_div(self, rhs: $t) -> $t {
                let q = self / rhs;
                if self % rhs != 0 && ((self < 0) != (rhs < 0)) {
                    q - 1
                } else {
                    q
                }
            }

            fn floor_mod(self, rhs: $t) -> $t {
                let r = self % rhs;
                if r != 0 && ((r < 0) != (rhs < 0)) {
                    r + rhs
                } else {
                    r
                }
            }
        }
    )*};
}

macro_rules! unsigned_int {
    ($($t:ty),*) => {$(
        impl FloorDiv for $t {
            type Output = $t;

            fn floor_div(self, rhs: $t) -> $t {
                self / rhs
            }

            fn floor_mod(self, rhs: $t) -> $t {
                self % rhs
            }
        }
    )*};
}

macro_rules! int_common {
    ($($t:ty),*) => {$(
        impl TrueDiv for $t {
            type Output = f64;

            fn true_div(self, rhs: $t) -> f64 {
                assert!(rhs != 0, "attempt to divide by zero");
                self as f64 / rhs as f64
            }
        }

        impl Truthy for $t {
            fn truthy(&self) -> bool {
                *self != 0
            }
        }
    )*};
}

// The quotient is derived from the fmod remainder so that both halves agree
// even when `self / rhs` rounds onto an integer.
fn float_divmod<F: Float>(x: F, y: F) -> (F, F) {
    let mut r = x % y;
    let mut div = (x - r) / y;
    if r != F::zero() {
        if (y < F::zero()) != (r < F::zero()) {
            r = r + y;
            div = div - F::one();
        }
    } else {
        r = F::zero().copysign(y);
    }
    let half = F::one() / (F::one() + F::one());
    let q = if div != F::zero() {
        let mut q = div.floor();
        if div - q > half {
            q = q + F::one();
        }
        q
    } else {
        F::zero().copysign(x / y)
    };
    (q, r)
}

macro_rules! float {
    ($($t:ty),*) => {$(
        impl FloorDiv for $t {
            type Output = $t;

            fn floor_div(self, rhs: $t) -> $t {
                float_divmod(self, rhs).0
            }

            fn floor_mod(self, rhs: $t) -> $t {
                float_divmod(self, rhs).1
            }
        }

        impl TrueDiv for $t {
            type Output = $t;

            fn true_div(self, rhs: $t) -> $t {
                self / rhs
            }
        }

        // NaN is truthy.
        impl Truthy for $t {
            fn truthy(&self) -> bool {
                *self != 0.0
            }
        }
    )*};
}

signed_int!(i8, i16, i32, i64, i128, isize);
unsigned_int!(u8, u16, u32, u64, u128, usize);
int_common!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
float!(f32, f64);

impl Truthy for bool {
    fn truthy(&self) -> bool {
        *self
    }
}

impl Truthy for char {
    fn truthy(&self) -> bool {
        *self != '\0'
    }
}

impl Truthy for String {
    fn truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for &str {
    fn truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> Truthy for Vec<T> {
    fn truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> Truthy for Option<T> {
    fn truthy(&self) -> bool {
        self.is_some()
    }
}

#[test]
fn test_floor_div_signs() {
    assert_eq!(7i32.floor_div(2), 3);
    assert_eq!((-7i32).floor_div(2), -4);
    assert_eq!(7i32.floor_div(-2), -4);
    assert_eq!((-7i32).floor_div(-2), 3);
    assert_eq!((-6i32).floor_div(2), -3);
}

#[test]
fn test_floor_mod_takes_divisor_sign() {
    assert_eq!((-7i64).floor_mod(2), 1);
    assert_eq!(7i64.floor_mod(-2), -1);
    assert_eq!((-7i64).floor_mod(-2), -1);
    assert_eq!(9u8.floor_mod(4), 1);
    assert_eq!((-7.5f64).floor_mod(2.0), 0.5);
    assert_eq!((-7.5f64).floor_div(2.0), -4.0);
}

#[test]
fn test_floor_identity() {
    for a in -20i32..=20 {
        for b in [-7i32, -3, -1, 1, 2, 5] {
            assert_eq!(b * a.floor_div(b) + a.floor_mod(b), a, "a={a} b={b}");
        }
    }
}

#[test]
fn test_float_floor_identity() {
    assert_eq!(1.0f64.floor_div(0.1), 9.0);
    approx::assert_relative_eq!(1.0f64.floor_mod(0.1), 0.1, epsilon = 1e-12);
    assert_eq!((-7.5f64).floor_div(2.0), -4.0);
    assert_eq!((-7.5f64).floor_mod(2.0), 0.5);
    assert_eq!(7.5f64.floor_div(-2.0), -4.0);
    assert_eq!(7.5f64.floor_mod(-2.0), -0.5);
    assert_eq!(6.0f32.floor_div(3.0), 2.0);

    let cases = [
        (1.0f64, 0.1f64),
        (-7.5, 2.0),
        (7.5, -2.0),
        (0.7, 0.1),
        (-0.3, 0.1),
        (123.456, 7.89),
        (-1e-3, 3.0),
    ];
    for (a, b) in cases {
        let q = a.floor_div(b);
        let r = a.floor_mod(b);
        assert_eq!(q.fract(), 0.0, "a={a} b={b}");
        assert!(r == 0.0 || (r < 0.0) == (b < 0.0), "a={a} b={b} r={r}");
        assert!(r.abs() < b.abs(), "a={a} b={b} r={r}");
        approx::assert_relative_eq!(b * q + r, a, epsilon = 1e-12);
    }
}

#[test]
fn test_float_floor_mod_zero_takes_divisor_sign() {
    assert!(4.0f64.floor_mod(-2.0).is_sign_negative());
    assert!((-4.0f64).floor_mod(2.0).is_sign_positive());
}

#[test]
#[should_panic]
fn test_floor_div_by_zero_panics() {
    let _ = 1i32.floor_div(0);
}

#[test]
fn test_true_div() {
    assert_eq!(1i32.true_div(2), 0.5);
    assert_eq!(9u64.true_div(3), 3.0);
    assert_eq!(1.0f32.true_div(4.0), 0.25);
}

#[test]
#[should_panic(expected = "attempt to divide by zero")]
fn test_true_div_int_by_zero_panics() {
    let _ = 3i32.true_div(0);
}

#[test]
fn test_truthy() {
    assert!(3i32.truthy());
    assert!(!0u8.truthy());
    assert!(!0.0f64.truthy());
    assert!(f64::NAN.truthy());
    assert!(!"".truthy());
    assert!(String::from("x").truthy());
    assert!(!Vec::<i32>::new().truthy());
    assert!(!None::<i32>.truthy());
}
