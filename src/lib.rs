//! `linvec`: a sequence container whose operators act elementwise.
//!
//! ```
//! use linvec::Vector;
//!
//! let a = Vector::new([1, 2, 3]);
//! assert_eq!(&a + &a, [2, 4, 6]);
//! assert_eq!(10 * &a, [10, 20, 30]);
//! assert_eq!(&a * &a, [1, 4, 9]);
//! assert_eq!(a.dot(&a), 14);
//!
//! // Sequences of different length are cut to the shorter one.
//! assert_eq!(&a + [1, 2, 3, 4], [2, 4, 6]);
//!
//! // Comparisons are elementwise too.
//! assert_eq!(a.elem_gt(1), [false, true, true]);
//! ```

pub mod element;
pub mod numeric;
pub mod operand;
pub mod ops;
pub mod vector;

pub use element::{FloorDiv, TrueDiv, Truthy};
pub use numeric::dot_product;
pub use operand::Operand;
pub use vector::Vector;
