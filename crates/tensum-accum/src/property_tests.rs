//! Property-based tests for the aggregation builder.
//!
//! The key algebraic property: any pairwise merge tree over a partition
//! of an append sequence produces the same content as appending
//! sequentially into one builder.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use tensum_core::{ElemBuffer, ElemKind, Tensor};

    use crate::builder::{GrowthPolicy, StackBuilder};

    fn chunks_strategy() -> impl Strategy<Value = Vec<Vec<f64>>> {
        // between 1 and 12 sub-tensors, all of one width picked per case
        (1usize..5).prop_flat_map(|width| {
            prop::collection::vec(
                prop::collection::vec(-1e6f64..1e6, width..=width),
                1..12,
            )
        })
    }

    fn build_from(chunks: &[Vec<f64>]) -> StackBuilder {
        let mut builder = StackBuilder::new(ElemKind::F64);
        for chunk in chunks {
            builder
                .append(&Tensor::vector(ElemBuffer::F64(chunk.clone())))
                .unwrap();
        }
        builder
    }

    proptest! {
        #[test]
        fn prop_finalize_stacks_along_a_new_leading_axis(chunks in chunks_strategy()) {
            let builder = build_from(&chunks);
            let result = builder.into_tensor().unwrap();

            prop_assert_eq!(result.rank(), 2);
            prop_assert_eq!(result.shape()[0], chunks.len());
            prop_assert_eq!(result.shape()[1], chunks[0].len());

            let flat: Vec<f64> = chunks.concat();
            prop_assert_eq!(result.buffer(), &ElemBuffer::F64(flat));
        }

        #[test]
        fn prop_merge_equals_sequential_append(
            chunks in chunks_strategy(),
            split_seed in any::<prop::sample::Index>(),
        ) {
            let split = split_seed.index(chunks.len());
            let sequential = build_from(&chunks).into_tensor().unwrap();

            if split == 0 || split == chunks.len() {
                return Ok(()); // both halves must be non-empty to merge
            }
            let left = build_from(&chunks[..split]);
            let right = build_from(&chunks[split..]);
            let merged = left.merge(right).unwrap().into_tensor().unwrap();

            prop_assert_eq!(merged, sequential);
        }

        #[test]
        fn prop_merge_is_associative(chunks in chunks_strategy()) {
            if chunks.len() < 3 {
                return Ok(());
            }
            let third = chunks.len() / 3;
            let (a, b, c) = (
                &chunks[..third.max(1)],
                &chunks[third.max(1)..(2 * third).max(2)],
                &chunks[(2 * third).max(2)..],
            );
            if a.is_empty() || b.is_empty() || c.is_empty() {
                return Ok(());
            }

            let left_first = build_from(a)
                .merge(build_from(b))
                .unwrap()
                .merge(build_from(c))
                .unwrap()
                .into_tensor()
                .unwrap();
            let right_first = build_from(a)
                .merge(build_from(b).merge(build_from(c)).unwrap())
                .unwrap()
                .into_tensor()
                .unwrap();

            prop_assert_eq!(left_first, right_first);
        }

        #[test]
        fn prop_growth_policy_floor_never_breaks_content(
            chunks in chunks_strategy(),
            floor in 1usize..4096,
        ) {
            let mut builder = StackBuilder::with_policy(
                ElemKind::F64,
                GrowthPolicy { floor_bytes: floor },
            );
            for chunk in &chunks {
                builder
                    .append(&Tensor::vector(ElemBuffer::F64(chunk.clone())))
                    .unwrap();
            }
            let result = builder.into_tensor().unwrap();
            prop_assert_eq!(result.buffer(), &ElemBuffer::F64(chunks.concat()));
        }
    }
}
