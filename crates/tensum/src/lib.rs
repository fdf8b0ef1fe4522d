//! # Tensum: tensor processing primitives for embedded analytics
//!
//! Composable elementwise/reduction primitives over kind-tagged numeric
//! tensors, plus a mergeable aggregation builder for the split/merge
//! pattern of parallel aggregation.
//!
//! This is the **meta crate** that re-exports all Tensum components for
//! convenient access.
//!
//! ## Quick Start
//!
//! ```
//! use tensum::prelude::*;
//!
//! let t = Tensor::vector(ElemBuffer::F64(vec![1.0, 2.0, 3.0, 4.0]));
//! assert_eq!(reductions::mean(&t).unwrap(), 2.5);
//!
//! let mut builder = StackBuilder::new(ElemKind::F64);
//! builder.append(&Tensor::vector(ElemBuffer::F64(vec![1.0, 2.0]))).unwrap();
//! builder.append(&Tensor::vector(ElemBuffer::F64(vec![3.0, 4.0]))).unwrap();
//! assert_eq!(builder.finalize().unwrap().shape(), &[2, 2]);
//! ```
//!
//! ## Components
//!
//! ### Core Value Types ([`core`])
//!
//! The `Tensor` representation (flat row-major buffer, explicit shape,
//! per-axis lower bounds, optional missing-element mask), the closed
//! `ElemKind` set, tagged `Scalar` values, and the numeric coercion
//! layer.
//!
//! ### Elementwise Engine ([`kernels`])
//!
//! The operator catalog and the five generic call shapes behind every
//! operation: maps (`add`, `scalar_mult`, `sqrt`, ...), reductions
//! (`sum`, `mean`, `stddev`, `argmax`, `dot`, ...), cumulative folds,
//! `filter`, and `normalize`.
//!
//! ### Aggregation Builder ([`accum`])
//!
//! `StackBuilder`: append fixed-shape sub-tensors, merge independently
//! grown builders pairwise, finalize into a tensor with one extra leading
//! axis. Independent of the engine.
//!
//! ## Error Handling
//!
//! Every violation surfaces as a typed error (`CoreError`, `KernelError`,
//! `AccumError`); expected data conditions (empty
//! inputs, zero norms, all-filtered results) return documented neutral
//! values alongside `tracing` warnings instead.
//!
//! ## Features
//!
//! - `serde`: serialization support across all components

#![deny(warnings)]

// Re-export all components
pub use tensum_accum as accum;
pub use tensum_core as core;
pub use tensum_kernels as kernels;

pub mod prelude {
    //! Prelude module for convenient imports
    //!
    //! # Example
    //!
    //! ```
    //! use tensum::prelude::*;
    //!
    //! let t = Tensor::vector(ElemBuffer::F64(vec![3.0, 4.0]));
    //! let unit = normalize(&t).unwrap();
    //! assert!((unit.buffer().get_real(0) - 0.6).abs() < 1e-12);
    //! assert!((unit.buffer().get_real(1) - 0.8).abs() < 1e-12);
    //! ```

    // Core types
    pub use crate::core::{
        coerce, ElemBuffer, ElemKind, MissingMask, Scalar, Shape, Tensor,
    };

    // Engine operations
    pub use crate::kernels::elementwise::{
        abs, add, add_partial, cos, div, fill, mult, pow, scalar_add, scalar_mult, sqrt, square,
        sub,
    };
    pub use crate::kernels::filter::{filter, filter_nonzero};
    pub use crate::kernels::normalize::normalize;
    pub use crate::kernels::scan::{cum_prod, cum_sum};
    pub use crate::kernels::{reductions, CmpOp, ElemOp, ValueIndex};

    // Aggregation builder
    pub use crate::accum::{GrowthPolicy, StackBuilder};

    // Error taxonomy
    pub use crate::accum::AccumError;
    pub use crate::core::CoreError;
    pub use crate::kernels::KernelError;
}
