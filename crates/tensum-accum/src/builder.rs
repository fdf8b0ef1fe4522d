//! The mergeable aggregation builder.
//!
//! A [`StackBuilder`] assembles many same-shaped sub-tensors into one
//! higher-rank tensor along a new leading axis: append locks the sub-shape
//! on first use and bulk-copies raw element data into a growable buffer;
//! merge combines two independently grown builders; finalize materializes
//! the rank `sub_rank + 1` result.
//!
//! Growth is geometric (capacity doubles, or jumps straight to an
//! oversized append, whichever is larger), so N appends cost O(log N)
//! reallocations. The initial allocation starts from a configurable byte
//! floor ([`GrowthPolicy`]) and doubles until the first item fits, which
//! keeps tiny first items from causing pathological early reallocation.
//!
//! Merge takes both operands by value and returns the single survivor, so
//! the "source builder is no longer valid" rule is enforced by the
//! compiler rather than by documentation. Content order is always
//! left-then-right regardless of which operand's allocation survives,
//! which is what makes a pairwise merge tree produce the same result as
//! any sequential append order.
//!
//! # Examples
//!
//! ```
//! use tensum_core::{ElemBuffer, ElemKind, Tensor};
//! use tensum_accum::StackBuilder;
//!
//! let mut builder = StackBuilder::new(ElemKind::F64);
//! for chunk in [[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]] {
//!     builder.append(&Tensor::vector(ElemBuffer::F64(chunk.to_vec()))).unwrap();
//! }
//!
//! let stacked = builder.finalize().unwrap();
//! assert_eq!(stacked.shape(), &[3, 2]);
//! assert_eq!(stacked.get(&[2, 1]).unwrap().to_real(), 3.0);
//! ```

use tensum_core::{Bounds, ElemBuffer, ElemKind, MissingMask, Shape, Tensor};
use tracing::debug;

use crate::error::{AccumError, AccumResult};

/// Allocation behavior of a builder, passed explicitly at construction.
///
/// The only knob is the initial capacity floor in bytes; everything past
/// the first allocation follows the fixed doubling/exact-fit rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GrowthPolicy {
    /// Smallest initial allocation, in bytes.
    pub floor_bytes: usize,
}

impl Default for GrowthPolicy {
    fn default() -> Self {
        Self { floor_bytes: 1024 }
    }
}

/// Sub-tensor layout locked by the first append.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
struct SubLayout {
    shape: Shape,
    lower_bounds: Bounds,
}

/// Incremental accumulator stacking fixed-shape sub-tensors along a new
/// leading axis.
///
/// Exclusively owned: workers grow independent builders over disjoint
/// partitions with zero shared state, then reduce them pairwise with
/// [`StackBuilder::merge`].
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StackBuilder {
    kind: ElemKind,
    policy: GrowthPolicy,
    layout: Option<SubLayout>,
    leading_extent: usize,
    total_elements: usize,
    data: ElemBuffer,
    missing: Option<MissingMask>,
}

impl StackBuilder {
    /// Create an empty builder for sub-tensors of the given kind.
    ///
    /// The sub-shape is locked by the first append, not here.
    pub fn new(kind: ElemKind) -> Self {
        Self::with_policy(kind, GrowthPolicy::default())
    }

    /// Create an empty builder with an explicit growth policy.
    pub fn with_policy(kind: ElemKind, policy: GrowthPolicy) -> Self {
        Self {
            kind,
            policy,
            layout: None,
            leading_extent: 0,
            total_elements: 0,
            data: ElemBuffer::empty(kind),
            missing: None,
        }
    }

    /// The element kind this builder accumulates.
    pub fn kind(&self) -> ElemKind {
        self.kind
    }

    /// Whether nothing has been appended yet.
    pub fn is_empty(&self) -> bool {
        self.layout.is_none()
    }

    /// Number of sub-tensors appended so far (the eventual leading-axis
    /// extent).
    pub fn leading_extent(&self) -> usize {
        self.leading_extent
    }

    /// Total scalar elements appended so far.
    pub fn total_elements(&self) -> usize {
        self.total_elements
    }

    /// The locked sub-shape, once the first append has happened.
    pub fn sub_shape(&self) -> Option<&[usize]> {
        self.layout.as_ref().map(|l| l.shape.as_slice())
    }

    /// Bytes currently holding accumulated element data.
    pub fn used_bytes(&self) -> usize {
        self.data.len() * self.kind.byte_width()
    }

    /// Bytes currently allocated for element data.
    pub fn capacity_bytes(&self) -> usize {
        self.data.capacity() * self.kind.byte_width()
    }

    fn check_sub_layout(&self, layout: &SubLayout, sub: &Tensor) -> AccumResult<()> {
        if sub.rank() != layout.shape.len() {
            return Err(AccumError::RankMismatch {
                expected: layout.shape.len(),
                actual: sub.rank(),
            });
        }
        for axis in 0..layout.shape.len() {
            let expected_lower = layout.lower_bounds[axis];
            let expected_upper = expected_lower + layout.shape[axis] as i64;
            let actual_lower = sub.lower_bounds()[axis];
            let actual_upper = actual_lower + sub.shape()[axis] as i64;
            if expected_lower != actual_lower || expected_upper != actual_upper {
                return Err(AccumError::ShapeMismatch {
                    axis,
                    expected_lower,
                    expected_upper,
                    actual_lower,
                    actual_upper,
                });
            }
        }
        Ok(())
    }

    /// Grow the data buffer to hold `incoming` further elements: double
    /// the allocation, or jump straight to the required size for a single
    /// oversized append.
    fn grow_for(&mut self, incoming: usize) {
        let used = self.data.len();
        let capacity = self.data.capacity();
        if used + incoming <= capacity {
            return;
        }
        let target = (capacity * 2).max(used + incoming);
        self.data.reserve_exact(target - used);
        debug!(
            from_bytes = capacity * self.kind.byte_width(),
            to_bytes = self.data.capacity() * self.kind.byte_width(),
            "grew accumulator buffer"
        );
    }

    /// Append one sub-tensor.
    ///
    /// The first append locks the sub-shape (rank, extents, and lower
    /// bounds) and sizes the initial allocation from the growth policy's
    /// floor, doubling until the item fits. Later appends must match the
    /// locked layout exactly.
    ///
    /// # Errors
    ///
    /// [`AccumError::NullSubTensor`] for an absent (rank-0) sub-tensor,
    /// [`AccumError::KindMismatch`] for a foreign element kind,
    /// [`AccumError::RankMismatch`] / [`AccumError::ShapeMismatch`] against
    /// the locked layout.
    pub fn append(&mut self, sub: &Tensor) -> AccumResult<()> {
        if sub.rank() == 0 {
            return Err(AccumError::NullSubTensor);
        }
        if sub.kind() != self.kind {
            return Err(AccumError::KindMismatch {
                expected: self.kind,
                actual: sub.kind(),
            });
        }

        let incoming = sub.len();
        match &self.layout {
            None => {
                let width = self.kind.byte_width();
                let incoming_bytes = incoming * width;
                let mut capacity_bytes = self.policy.floor_bytes.max(width);
                while capacity_bytes <= incoming_bytes {
                    capacity_bytes *= 2;
                }
                self.data.reserve_exact(capacity_bytes / width);
                debug!(capacity_bytes, "allocated initial accumulator capacity");

                self.layout = Some(SubLayout {
                    shape: Shape::from_slice(sub.shape()),
                    lower_bounds: Bounds::from_slice(sub.lower_bounds()),
                });
            }
            Some(layout) => {
                self.check_sub_layout(layout, sub)?;
                self.grow_for(incoming);
            }
        }

        // Reconcile presence: the first missing item backfills everything
        // accumulated so far as present.
        if sub.has_missing() || self.missing.is_some() {
            let already = self.total_elements;
            let mask = self
                .missing
                .get_or_insert_with(|| MissingMask::all_present(already));
            mask.extend_from(sub.presence(), incoming);
        }

        self.data.extend_from(sub.buffer())?;
        self.leading_extent += 1;
        self.total_elements += incoming;
        Ok(())
    }

    /// Merge two builders, consuming both and returning the combined one.
    ///
    /// The operand with the larger allocated capacity keeps its buffer to
    /// minimize data movement; content order is `self`-then-`other` either
    /// way, so merging is associative and commutative in result content
    /// (not in which physical buffer survives).
    ///
    /// # Errors
    ///
    /// [`AccumError::MergeEmpty`] when either side has never accumulated,
    /// [`AccumError::KindMismatch`] / [`AccumError::RankMismatch`] /
    /// [`AccumError::ShapeMismatch`] for incompatible sub-layouts.
    pub fn merge(mut self, other: Self) -> AccumResult<Self> {
        let (Some(self_layout), Some(other_layout)) = (&self.layout, &other.layout) else {
            return Err(AccumError::MergeEmpty);
        };
        if self.kind != other.kind {
            return Err(AccumError::KindMismatch {
                expected: self.kind,
                actual: other.kind,
            });
        }
        if self_layout.shape.len() != other_layout.shape.len() {
            return Err(AccumError::RankMismatch {
                expected: self_layout.shape.len(),
                actual: other_layout.shape.len(),
            });
        }
        for axis in 0..self_layout.shape.len() {
            let expected_lower = self_layout.lower_bounds[axis];
            let expected_upper = expected_lower + self_layout.shape[axis] as i64;
            let actual_lower = other_layout.lower_bounds[axis];
            let actual_upper = actual_lower + other_layout.shape[axis] as i64;
            if expected_lower != actual_lower || expected_upper != actual_upper {
                return Err(AccumError::ShapeMismatch {
                    axis,
                    expected_lower,
                    expected_upper,
                    actual_lower,
                    actual_upper,
                });
            }
        }

        // Combine presence up front, in self-then-other order, while both
        // masks are still reachable.
        let missing = if self.missing.is_some() || other.missing.is_some() {
            let mut mask = self
                .missing
                .take()
                .unwrap_or_else(|| MissingMask::all_present(self.total_elements));
            mask.extend_from(other.missing.as_ref(), other.total_elements);
            Some(mask)
        } else {
            None
        };

        let mut merged = if other.data.capacity() > self.data.capacity() {
            let mut dst = other;
            dst.grow_for(self.data.len());
            dst.data.prepend_from(&self.data)?;
            dst.leading_extent += self.leading_extent;
            dst.total_elements += self.total_elements;
            dst
        } else {
            let mut dst = self;
            dst.grow_for(other.data.len());
            dst.data.extend_from(&other.data)?;
            dst.leading_extent += other.leading_extent;
            dst.total_elements += other.total_elements;
            dst
        };
        merged.missing = missing;
        Ok(merged)
    }

    /// Materialize the accumulated result as an immutable tensor of rank
    /// `sub_rank + 1`.
    ///
    /// Axis 0 has extent [`StackBuilder::leading_extent`] and lower bound
    /// 1; the remaining axes repeat the locked sub-shape. A builder that
    /// never accumulated anything finalizes to the canonical rank-0 empty
    /// tensor. Non-destructive: the builder remains usable and may be
    /// finalized again (retries re-trigger finalization).
    pub fn finalize(&self) -> AccumResult<Tensor> {
        let Some(layout) = &self.layout else {
            return Ok(Tensor::empty(self.kind));
        };

        let mut shape = Vec::with_capacity(layout.shape.len() + 1);
        shape.push(self.leading_extent);
        shape.extend_from_slice(&layout.shape);

        let mut bounds = Vec::with_capacity(layout.lower_bounds.len() + 1);
        bounds.push(1);
        bounds.extend_from_slice(&layout.lower_bounds);

        Ok(Tensor::new(
            self.data.clone(),
            &shape,
            &bounds,
            self.missing.clone(),
        )?)
    }

    /// Finalize by consuming the builder, transferring the buffer without
    /// copying.
    pub fn into_tensor(self) -> AccumResult<Tensor> {
        let Some(layout) = self.layout else {
            return Ok(Tensor::empty(self.kind));
        };

        let mut shape = Vec::with_capacity(layout.shape.len() + 1);
        shape.push(self.leading_extent);
        shape.extend_from_slice(&layout.shape);

        let mut bounds = Vec::with_capacity(layout.lower_bounds.len() + 1);
        bounds.push(1);
        bounds.extend_from_slice(&layout.lower_bounds);

        Ok(Tensor::new(self.data, &shape, &bounds, self.missing)?)
    }
}
