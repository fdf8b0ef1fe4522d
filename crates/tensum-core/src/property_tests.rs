//! Property-based tests for the core value types.
//!
//! This module uses proptest to verify coercion, indexing, and presence
//! invariants across randomly generated inputs.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::buffer::ElemBuffer;
    use crate::coerce;
    use crate::presence::MissingMask;
    use crate::tensor::{element_count, Tensor};
    use crate::types::{ElemKind, Scalar};

    fn shape_strategy() -> impl Strategy<Value = Vec<usize>> {
        prop::collection::vec(1usize..6, 1..=4)
    }

    proptest! {
        #[test]
        fn prop_f64_coercion_is_identity(v in -1e12f64..1e12) {
            let s = coerce::from_real(v, ElemKind::F64).unwrap();
            prop_assert_eq!(s, Scalar::F64(v));
            prop_assert_eq!(coerce::to_real(&s), v);
        }

        #[test]
        fn prop_narrow_kinds_round_trip_through_real(v in i16::MIN..=i16::MAX) {
            let widened = coerce::to_real(&Scalar::I16(v));
            let back = coerce::from_real(widened, ElemKind::I16).unwrap();
            prop_assert_eq!(back, Scalar::I16(v));
        }

        #[test]
        fn prop_integer_conversion_saturates(v in prop::num::f64::NORMAL) {
            if let Scalar::I16(out) = coerce::from_real(v, ElemKind::I16).unwrap() {
                prop_assert!(f64::from(out) <= f64::from(i16::MAX));
                prop_assert!(f64::from(out) >= f64::from(i16::MIN));
                if v.abs() < f64::from(i16::MAX) {
                    prop_assert_eq!(out, v.trunc() as i16);
                }
            } else {
                prop_assert!(false, "wrong scalar kind");
            }
        }

        #[test]
        fn prop_element_count_matches_data_layout(shape in shape_strategy()) {
            let n = element_count(&shape);
            let t = Tensor::from_buffer(ElemBuffer::F64(vec![0.0; n]), &shape).unwrap();
            prop_assert_eq!(t.len(), n);
            prop_assert_eq!(t.rank(), shape.len());
        }

        #[test]
        fn prop_bounds_aware_indexing_visits_every_element(shape in shape_strategy()) {
            let n = element_count(&shape);
            let data: Vec<f64> = (0..n).map(|i| i as f64).collect();
            let t = Tensor::from_buffer(ElemBuffer::F64(data), &shape).unwrap();

            // Walk the full index space in row-major order; each get() must
            // hit the matching linear element.
            let mut index: Vec<i64> = t.lower_bounds().to_vec();
            for linear in 0..n {
                prop_assert_eq!(t.offset_of(&index), Some(linear));
                prop_assert_eq!(t.get(&index), Some(Scalar::F64(linear as f64)));

                // advance row-major
                for axis in (0..shape.len()).rev() {
                    index[axis] += 1;
                    if index[axis] < t.lower_bounds()[axis] + shape[axis] as i64 {
                        break;
                    }
                    index[axis] = t.lower_bounds()[axis];
                }
            }
        }

        #[test]
        fn prop_mask_counts_are_consistent(bits in prop::collection::vec(any::<bool>(), 0..64)) {
            let mut mask = MissingMask::all_present(0);
            for &b in &bits {
                mask.push(b);
            }
            prop_assert_eq!(mask.len(), bits.len());
            let expected = bits.iter().filter(|&&b| b).count();
            prop_assert_eq!(mask.missing_count(), expected);
            prop_assert_eq!(mask.any_missing(), expected > 0);
        }

        #[test]
        fn prop_buffer_extend_matches_concatenation(
            a in prop::collection::vec(-100i64..100, 0..20),
            b in prop::collection::vec(-100i64..100, 0..20),
        ) {
            let mut buf = ElemBuffer::I64(a.clone());
            buf.extend_from(&ElemBuffer::I64(b.clone())).unwrap();
            let mut expected = a.clone();
            expected.extend_from_slice(&b);
            prop_assert_eq!(buf, ElemBuffer::I64(expected.clone()));

            let mut buf = ElemBuffer::I64(b.clone());
            buf.prepend_from(&ElemBuffer::I64(a)).unwrap();
            prop_assert_eq!(buf, ElemBuffer::I64(expected));
        }
    }
}
