//! Format-agnostic helpers shared by the serializers.

pub mod links;
