//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are immutable and compared by their attribute values. An
/// `ItemName` is one: two names with the same text are the same name.
///
/// To "modify" a value object, build a new one. Constructors are expected to
/// validate, so holding a value object means holding valid data.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
