//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// A value object has no identity: two items with the same price and remaining
/// quantity are interchangeable. To "change" one, build a new value and put it
/// back where the old one lived (see `Item::take`).
///
/// ```ignore
/// let soda = Item::new(1.50, 5)?;
/// let after_vend = soda.take(3).unwrap();
/// assert_eq!(after_vend, Item::new(1.50, 2)?);
/// ```
pub trait ValueObject: Copy + PartialEq + core::fmt::Debug {}
