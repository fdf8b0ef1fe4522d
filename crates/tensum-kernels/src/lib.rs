//! # tensum-kernels
//!
//! The elementwise engine and operation surface of the Tensum stack.
//!
//! ## Overview
//!
//! Everything in this crate is built from two small pieces:
//!
//! - a fixed **operator catalog** ([`ElemOp`]) of real-domain elementwise
//!   operators (plus one exact integer operator, safe division), and
//! - an **elementwise engine** ([`engine`]) with five generic call shapes
//!   (map, zip-map, zip-fold, fold, and indexed fold) plus a cumulative
//!   scan driver.
//!
//! Each public operation is a named pairing of a driver with an operator
//! (and a finalizer for folds). Adding an operation means adding one such
//! pairing, never another iteration loop.
//!
//! **Operations:**
//! - Elementwise maps: `add`, `sub`, `mult`, `div`, `scalar_add`,
//!   `scalar_mult`, `fill`, `pow`, `abs`, `cos`, `sqrt`, `square`
//! - Reductions: `sum`, `sum_wide`, `abs_sum`, `mean`, `stddev`, `min`,
//!   `max`, `argmax`, `argmin`, `dot`, `contains`
//! - Cumulative folds: `cum_sum`, `cum_prod`
//! - Higher-level: `filter`, `normalize`
//!
//! ## Quick Start
//!
//! ```
//! use tensum_core::{ElemBuffer, Tensor};
//! use tensum_kernels::{elementwise, reductions};
//!
//! let a = Tensor::vector(ElemBuffer::F64(vec![1.0, 2.0, 3.0, 4.0]));
//! let b = Tensor::vector(ElemBuffer::F64(vec![4.0, 3.0, 2.0, 1.0]));
//!
//! let summed = elementwise::add(&a, &b).unwrap();
//! assert_eq!(summed.buffer(), &ElemBuffer::F64(vec![5.0; 4]));
//!
//! assert_eq!(reductions::mean(&a).unwrap(), 2.5);
//! assert_eq!(reductions::dot(&a, &b).unwrap(), 20.0);
//! ```
//!
//! ## Missing Values and Diagnostics
//!
//! Reductions skip missing elements and NaN values and report the
//! surviving count to their finalizers; map, zip, and scan shapes require
//! fully present operands. Expected data conditions (empty inputs,
//! zero-norm vectors, filters that keep nothing) are neutral results with
//! a `tracing` warning, never errors. Actual violations surface as typed
//! [`KernelError`] values.

#![deny(warnings)]

pub mod catalog;
pub mod elementwise;
pub mod engine;
pub mod error;
pub mod filter;
pub mod normalize;
pub mod reductions;
pub mod scan;


pub use catalog::{int_div, ElemOp};
pub use engine::{Extremum, Finalizer, ValueIndex};
pub use error::{KernelError, KernelResult};
pub use filter::CmpOp;
