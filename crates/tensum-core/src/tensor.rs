//! Dense tensor representation with explicit shape and per-axis bounds.
//!
//! A [`Tensor`] is immutable once constructed: a kind-tagged flat buffer in
//! row-major order, a shape, one lower bound per axis, and an optional
//! missing-element mask. The host constructs tensors from raw parts and the
//! engine crates only ever produce complete, validated values.

use rust_decimal::Decimal;
use smallvec::{smallvec, SmallVec};

use crate::buffer::ElemBuffer;
use crate::error::{CoreError, CoreResult};
use crate::presence::MissingMask;
use crate::types::{Bounds, ElemKind, Rank, Scalar, Shape};

/// Number of logical elements a shape describes.
///
/// A rank-0 shape describes the canonical empty tensor and holds zero
/// elements (not one): emptiness is a data condition here, not a
/// mathematical scalar.
pub fn element_count(shape: &[usize]) -> usize {
    if shape.is_empty() {
        0
    } else {
        shape.iter().product()
    }
}

/// Immutable multi-dimensional array over a flat element buffer.
///
/// # Examples
///
/// ```
/// use tensum_core::{ElemBuffer, ElemKind, Tensor};
///
/// let t = Tensor::from_buffer(
///     ElemBuffer::I64(vec![1, 2, 3, 4, 5, 6]),
///     &[2, 3],
/// ).unwrap();
///
/// assert_eq!(t.rank(), 2);
/// assert_eq!(t.len(), 6);
/// assert_eq!(t.lower_bounds(), &[1, 1]);
/// assert!(!t.has_missing());
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tensor {
    kind: ElemKind,
    shape: Shape,
    lower_bounds: Bounds,
    presence: Option<MissingMask>,
    data: ElemBuffer,
}

impl Tensor {
    /// Construct a tensor from raw parts, validating every invariant.
    ///
    /// `lower_bounds` must supply one origin per axis. A presence mask with
    /// no set bits is normalized away, so a constructed tensor reports
    /// `has_missing()` exactly when a mask is present.
    ///
    /// # Errors
    ///
    /// [`CoreError::InvalidLength`] when data, bounds, or mask lengths
    /// disagree with the shape.
    ///
    /// # Examples
    ///
    /// ```
    /// use tensum_core::{ElemBuffer, Tensor};
    ///
    /// // A 1-D tensor indexed from 0 instead of the default 1
    /// let t = Tensor::new(ElemBuffer::F64(vec![9.0, 8.0]), &[2], &[0], None).unwrap();
    /// assert_eq!(t.get(&[0]).unwrap().to_real(), 9.0);
    /// ```
    pub fn new(
        data: ElemBuffer,
        shape: &[usize],
        lower_bounds: &[i64],
        presence: Option<MissingMask>,
    ) -> CoreResult<Self> {
        let expected = element_count(shape);
        if data.len() != expected {
            return Err(CoreError::InvalidLength {
                what: "data",
                shape: shape.to_vec(),
                expected,
                actual: data.len(),
            });
        }
        if lower_bounds.len() != shape.len() {
            return Err(CoreError::InvalidLength {
                what: "lower bounds",
                shape: shape.to_vec(),
                expected: shape.len(),
                actual: lower_bounds.len(),
            });
        }
        if let Some(mask) = &presence {
            if mask.len() != expected {
                return Err(CoreError::InvalidLength {
                    what: "presence mask",
                    shape: shape.to_vec(),
                    expected,
                    actual: mask.len(),
                });
            }
        }

        // An all-clear mask carries no information; drop it so
        // `presence().is_some()` always means "has missing elements".
        let presence = presence.filter(|mask| mask.any_missing());

        Ok(Self {
            kind: data.kind(),
            shape: Shape::from_slice(shape),
            lower_bounds: Bounds::from_slice(lower_bounds),
            presence,
            data,
        })
    }

    /// Construct a fully present tensor with default lower bounds (1 per
    /// axis).
    ///
    /// # Errors
    ///
    /// [`CoreError::InvalidLength`] when the data length does not match the
    /// shape.
    pub fn from_buffer(data: ElemBuffer, shape: &[usize]) -> CoreResult<Self> {
        let bounds: Bounds = smallvec![1; shape.len()];
        Self::new(data, shape, &bounds, None)
    }

    /// Construct a rank-1 tensor with lower bound 1.
    pub fn vector(data: ElemBuffer) -> Self {
        let len = data.len();
        Self {
            kind: data.kind(),
            shape: smallvec![len],
            lower_bounds: smallvec![1],
            presence: None,
            data,
        }
    }

    /// The canonical empty tensor of a kind: rank 0, no elements.
    pub fn empty(kind: ElemKind) -> Self {
        Self {
            kind,
            shape: SmallVec::new(),
            lower_bounds: SmallVec::new(),
            presence: None,
            data: ElemBuffer::empty(kind),
        }
    }

    /// A zero-filled tensor of the given kind and shape.
    pub fn zeros(kind: ElemKind, shape: &[usize]) -> Self {
        let n = element_count(shape);
        let data = match kind {
            ElemKind::I16 => ElemBuffer::I16(vec![0; n]),
            ElemKind::I32 => ElemBuffer::I32(vec![0; n]),
            ElemKind::I64 => ElemBuffer::I64(vec![0; n]),
            ElemKind::F32 => ElemBuffer::F32(vec![0.0; n]),
            ElemKind::F64 => ElemBuffer::F64(vec![0.0; n]),
            ElemKind::Decimal => ElemBuffer::Decimal(vec![Decimal::ZERO; n]),
        };
        Self {
            kind,
            shape: Shape::from_slice(shape),
            lower_bounds: smallvec![1; shape.len()],
            presence: None,
            data,
        }
    }

    /// A tensor of the given shape with every element set to `value`.
    pub fn filled(shape: &[usize], value: &Scalar) -> Self {
        let n = element_count(shape);
        let data = match value {
            Scalar::I16(x) => ElemBuffer::I16(vec![*x; n]),
            Scalar::I32(x) => ElemBuffer::I32(vec![*x; n]),
            Scalar::I64(x) => ElemBuffer::I64(vec![*x; n]),
            Scalar::F32(x) => ElemBuffer::F32(vec![*x; n]),
            Scalar::F64(x) => ElemBuffer::F64(vec![*x; n]),
            Scalar::Decimal(x) => ElemBuffer::Decimal(vec![*x; n]),
        };
        Self {
            kind: value.kind(),
            shape: Shape::from_slice(shape),
            lower_bounds: smallvec![1; shape.len()],
            presence: None,
            data,
        }
    }

    /// The element kind of this tensor.
    pub fn kind(&self) -> ElemKind {
        self.kind
    }

    /// Number of dimensions.
    pub fn rank(&self) -> Rank {
        self.shape.len()
    }

    /// Per-axis extents.
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Per-axis index origins.
    pub fn lower_bounds(&self) -> &[i64] {
        &self.lower_bounds
    }

    /// Total number of logical elements.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether this is the rank-0 empty tensor (or has a zero extent).
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Whether any element is logically missing (presence-bit missing; NaN
    /// is a separate, per-operation rule).
    pub fn has_missing(&self) -> bool {
        self.presence.is_some()
    }

    /// The missing-element mask, if any element is missing.
    pub fn presence(&self) -> Option<&MissingMask> {
        self.presence.as_ref()
    }

    /// The underlying flat storage.
    pub fn buffer(&self) -> &ElemBuffer {
        &self.data
    }

    /// Row-major linear offset of a bounds-aware multi-dimensional index.
    ///
    /// Returns `None` when the index rank differs from the tensor's or any
    /// coordinate falls outside its axis range.
    pub fn offset_of(&self, index: &[i64]) -> Option<usize> {
        if index.len() != self.rank() || self.is_empty() {
            return None;
        }
        let mut linear = 0usize;
        for (axis, &idx) in index.iter().enumerate() {
            let lb = self.lower_bounds[axis];
            let extent = self.shape[axis];
            if idx < lb || idx >= lb + extent as i64 {
                return None;
            }
            linear = linear * extent + (idx - lb) as usize;
        }
        Some(linear)
    }

    /// Read one element by bounds-aware index.
    ///
    /// Returns `None` for out-of-range indices and for elements marked
    /// missing.
    pub fn get(&self, index: &[i64]) -> Option<Scalar> {
        let linear = self.offset_of(index)?;
        if let Some(mask) = &self.presence {
            if mask.is_missing(linear) {
                return None;
            }
        }
        Some(self.data.get_scalar(linear))
    }

    /// Widen this tensor into an `f64` tensor with identical shape, bounds,
    /// and presence.
    ///
    /// Missing elements keep a placeholder value of 0 behind their mask
    /// bit, so the widened tensor is observably equivalent to the source.
    pub fn widen_to_real(&self) -> Self {
        if self.kind == ElemKind::F64 {
            return self.clone();
        }
        let data = ElemBuffer::F64(self.data.to_real_vec());
        Self {
            kind: ElemKind::F64,
            shape: self.shape.clone(),
            lower_bounds: self.lower_bounds.clone(),
            presence: self.presence.clone(),
            data,
        }
    }
}
