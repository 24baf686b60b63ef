//! Static attribute and enum registries for the EmBody/HyperSension protocol.
//!
//! These registries are the single place that knows how an attribute id
//! maps to a value shape, and what the bounded enumerations carried by
//! messages and attributes look like. They are loaded once, lazily, and
//! live for the process's lifetime, matching how a dictionary-driven
//! protocol codec with only a few dozen entries is typically kept fast
//! without a build-time code generation step.

pub mod attributes;
pub mod enums;

pub use attributes::{decode_attribute, encode_attribute, lookup, AttributeDescriptor, AttributeKind};
pub use enums::{lookup as lookup_enum, EnumDescriptor, ENUMS};
