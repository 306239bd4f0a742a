#![cfg(feature = "serde")]

use anyhow::Result;
use linvec::Vector;

#[test]
fn test_serializes_like_a_plain_list() -> Result<()> {
    let v = Vector::new([1, 2, 3]);
    assert_eq!(serde_json::to_string(&v)?, "[1,2,3]");
    Ok(())
}

#[test]
fn test_deserializes_from_a_plain_list() -> Result<()> {
    let v: Vector<f64> = serde_json::from_str("[0.5, 1.5]")?;
    assert_eq!(&v * 2.0, [1.0, 3.0]);
    Ok(())
}
