//! # tensum-accum
//!
//! The mergeable aggregation builder of the Tensum stack.
//!
//! ## Overview
//!
//! [`StackBuilder`] assembles many same-shaped sub-tensors into one
//! higher-rank tensor, supporting the split/merge pattern of parallel and
//! distributed aggregation:
//!
//! - **append**: add one sub-tensor; the first append locks the
//!   sub-shape, later ones must match it exactly
//! - **merge**: combine two independently grown builders, consuming both
//!   (move semantics stand in for the "source is invalid afterwards" rule)
//! - **finalize**: materialize the rank `sub_rank + 1` tensor; repeatable
//!   and non-destructive
//!
//! This crate is a sibling of the elementwise engine and depends only on
//! `tensum-core`: workers can grow builders over disjoint partitions with
//! zero shared mutable state and reduce the partials pairwise in any
//! bracketing, since merge is associative and commutative in result
//! content.
//!
//! ## Quick Start
//!
//! ```
//! use tensum_core::{ElemBuffer, ElemKind, Tensor};
//! use tensum_accum::StackBuilder;
//!
//! // Two workers accumulate over disjoint partitions...
//! let mut left = StackBuilder::new(ElemKind::F64);
//! left.append(&Tensor::vector(ElemBuffer::F64(vec![1.0, 2.0]))).unwrap();
//! left.append(&Tensor::vector(ElemBuffer::F64(vec![3.0, 4.0]))).unwrap();
//!
//! let mut right = StackBuilder::new(ElemKind::F64);
//! right.append(&Tensor::vector(ElemBuffer::F64(vec![5.0, 6.0]))).unwrap();
//!
//! // ...and the partials reduce to one result.
//! let combined = left.merge(right).unwrap();
//! let tensor = combined.into_tensor().unwrap();
//! assert_eq!(tensor.shape(), &[3, 2]);
//! ```
//!
//! ## Allocation
//!
//! Buffer growth is geometric (double or exact fit, whichever is larger)
//! from a configurable byte floor, so repeated appends cost amortized O(1)
//! each and N appends cause O(log N) reallocations. Pass a
//! [`GrowthPolicy`] to tune the floor; there is no ambient configuration.
//!
//! ## Features
//!
//! - `serde`: Serialize/deserialize builder state, e.g. to ship partial
//!   aggregates between workers

#![deny(warnings)]

pub mod builder;
pub mod error;

#[cfg(test)]
mod property_tests;

pub use builder::{GrowthPolicy, StackBuilder};
pub use error::{AccumError, AccumResult};
