//! Arbor Core Types and Definitions
//!
//! This crate provides the foundational types for the Arbor tree layout
//! engine. It includes:
//!
//! - **Identifiers**: Efficient string-interned identifiers ([`identifier::Id`])
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Curves**: Hermite cubic interpolation for link paths ([`curve`] module)
//! - **Transforms**: Column-major 4x4 affine matrices ([`transform`] module)

pub mod curve;
pub mod geometry;
pub mod identifier;
pub mod transform;
