//! # tensum-core
//!
//! Core tensor value types for the Tensum stack.
//!
//! This crate provides the foundational building blocks shared by the
//! elementwise engine (`tensum-kernels`) and the mergeable aggregation
//! builder (`tensum-accum`):
//!
//! - **Element kinds** ([`ElemKind`]): the closed set of numeric
//!   representations a tensor may carry (16/32/64-bit integers, 32/64-bit
//!   floats, 128-bit decimals)
//! - **Tagged scalar values** ([`Scalar`]) for side parameters and
//!   kind-preserving reduction results
//! - **Dense tensor representation** ([`Tensor`]): a flat, row-major,
//!   kind-tagged buffer with explicit shape and per-axis lower bounds
//! - **Presence tracking** ([`MissingMask`]): an optional bitmap marking
//!   logically missing elements
//! - **Numeric coercion** ([`coerce`]) between the element kinds and the
//!   two computation domains (`f64` and `i64`)
//! - **Shape & bounds validation** ([`validate`]) for binary operations
//!
//! ## Memory Layout
//!
//! Tensor data lives in one contiguous, row-major buffer per tensor
//! ([`ElemBuffer`]); shape and lower bounds are tracked separately. This
//! keeps multi-dimensional indexing and bulk copies O(1) in overhead and is
//! what makes the aggregation builder's raw-append growth strategy possible.
//!
//! ## Quick Start
//!
//! ```
//! use tensum_core::{ElemBuffer, ElemKind, Tensor};
//!
//! // A 2x2 float64 tensor from row-major data
//! let t = Tensor::from_buffer(ElemBuffer::F64(vec![1.0, 2.0, 3.0, 4.0]), &[2, 2]).unwrap();
//! assert_eq!(t.shape(), &[2, 2]);
//! assert_eq!(t.rank(), 2);
//! assert_eq!(t.kind(), ElemKind::F64);
//!
//! // Indexing honors per-axis lower bounds (default 1, not 0)
//! assert_eq!(t.get(&[1, 1]).unwrap().to_real(), 1.0);
//! assert_eq!(t.get(&[2, 2]).unwrap().to_real(), 4.0);
//! ```
//!
//! ## Non-zero-based Indexing
//!
//! Every axis carries a lower bound (the index origin of that axis). Two
//! tensors are compatible for a binary operation only when their ranks,
//! per-axis extents, *and* per-axis lower bounds all agree.
//!
//! ## Missing Values
//!
//! A tensor may carry a [`MissingMask`], one bit per element in row-major
//! order, with a set bit marking the element missing. A mask with no set
//! bits is normalized away at construction, so `presence().is_some()`
//! always implies at least one missing element.
//!
//! ## SciRS2 Integration
//!
//! Numeric trait bounds come from `scirs2_core::numeric`; `ndarray`,
//! `rand`, and `num-traits` are never used directly.
//!
//! ## Features
//!
//! - `serde`: Enable serialization/deserialization support

#![deny(warnings)]

pub mod buffer;
pub mod coerce;
pub mod error;
pub mod presence;
pub mod tensor;
pub mod types;
pub mod validate;

#[cfg(test)]
mod property_tests;

pub use buffer::ElemBuffer;
pub use error::{CoreError, CoreResult};
pub use presence::MissingMask;
pub use tensor::Tensor;
pub use types::{Axis, Bounds, ElemKind, Rank, Scalar, Shape};
