//! Integration tests for the aggregation builder against tensum-core.
//!
//! These follow the distributed-aggregation story end to end: partitioned
//! accumulation, pairwise merge reduction, and finalization into a tensor
//! the engine side can consume.

use tensum_core::{ElemBuffer, ElemKind, MissingMask, Tensor};
use tensum_accum::{AccumError, GrowthPolicy, StackBuilder};

fn sub(values: &[f64]) -> Tensor {
    Tensor::vector(ElemBuffer::F64(values.to_vec()))
}

#[test]
fn append_three_then_finalize_to_rank_two() {
    let mut builder = StackBuilder::new(ElemKind::F64);
    builder.append(&sub(&[1.0, 2.0])).unwrap();
    builder.append(&sub(&[3.0, 4.0])).unwrap();
    builder.append(&sub(&[5.0, 6.0])).unwrap();

    let result = builder.finalize().unwrap();
    assert_eq!(result.shape(), &[3, 2]);
    assert_eq!(
        result.buffer(),
        &ElemBuffer::F64(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0])
    );

    // row access through the leading axis
    assert_eq!(result.get(&[2, 1]).unwrap().to_real(), 3.0);
    assert_eq!(result.get(&[3, 2]).unwrap().to_real(), 6.0);

    // a later append of the wrong shape fails
    let mut builder = StackBuilder::new(ElemKind::F64);
    builder.append(&sub(&[1.0, 2.0])).unwrap();
    assert!(matches!(
        builder.append(&sub(&[1.0, 2.0, 3.0])),
        Err(AccumError::ShapeMismatch { .. })
    ));
}

#[test]
fn partitioned_build_merges_to_the_sequential_result() {
    let mut a = StackBuilder::new(ElemKind::F64);
    a.append(&sub(&[1.0, 2.0])).unwrap();
    a.append(&sub(&[3.0, 4.0])).unwrap();

    let mut b = StackBuilder::new(ElemKind::F64);
    b.append(&sub(&[5.0, 6.0])).unwrap();

    let merged = a.merge(b).unwrap().into_tensor().unwrap();
    assert_eq!(merged.shape(), &[3, 2]);
    assert_eq!(
        merged.buffer(),
        &ElemBuffer::F64(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0])
    );
}

#[test]
fn merge_reduction_tree_is_associative() {
    let parts: [&[f64]; 4] = [&[1.0, 2.0], &[3.0, 4.0], &[5.0, 6.0], &[7.0, 8.0]];
    let build = |range: std::ops::Range<usize>| {
        let mut builder = StackBuilder::new(ElemKind::F64);
        for part in &parts[range] {
            builder.append(&sub(part)).unwrap();
        }
        builder
    };

    let left_tree = build(0..1)
        .merge(build(1..2))
        .unwrap()
        .merge(build(2..4))
        .unwrap()
        .into_tensor()
        .unwrap();
    let right_tree = build(0..2)
        .merge(build(2..3).merge(build(3..4)).unwrap())
        .unwrap()
        .into_tensor()
        .unwrap();

    assert_eq!(left_tree, right_tree);
    assert_eq!(left_tree.shape(), &[4, 2]);
}

#[test]
fn multi_dimensional_sub_tensors_stack_to_rank_three() {
    let slab =
        Tensor::from_buffer(ElemBuffer::I32(vec![1, 2, 3, 4, 5, 6]), &[2, 3]).unwrap();
    let mut builder = StackBuilder::new(ElemKind::I32);
    builder.append(&slab).unwrap();
    builder.append(&slab).unwrap();

    let result = builder.into_tensor().unwrap();
    assert_eq!(result.rank(), 3);
    assert_eq!(result.shape(), &[2, 2, 3]);
    assert_eq!(result.lower_bounds(), &[1, 1, 1]);
    assert_eq!(result.get(&[2, 1, 3]).unwrap().to_real(), 3.0);
}

#[test]
fn missing_elements_propagate_through_merge() {
    let mut mask = MissingMask::all_present(2);
    mask.set_missing(0);
    let gappy = Tensor::new(ElemBuffer::F64(vec![0.0, 9.0]), &[2], &[1], Some(mask)).unwrap();

    let mut a = StackBuilder::new(ElemKind::F64);
    a.append(&sub(&[1.0, 2.0])).unwrap();

    let mut b = StackBuilder::new(ElemKind::F64);
    b.append(&gappy).unwrap();

    let result = a.merge(b).unwrap().into_tensor().unwrap();
    let mask = result.presence().expect("merged mask");
    assert_eq!(mask.len(), 4);
    assert!(mask.is_missing(2)); // first element of the gappy row
    assert_eq!(result.get(&[2, 1]), None);
    assert_eq!(result.get(&[2, 2]).unwrap().to_real(), 9.0);
}

#[test]
fn sub_tensor_bounds_participate_in_the_layout_lock() {
    let zero_based = Tensor::new(ElemBuffer::F64(vec![1.0, 2.0]), &[2], &[0], None).unwrap();
    let one_based = sub(&[3.0, 4.0]);

    let mut builder = StackBuilder::new(ElemKind::F64);
    builder.append(&zero_based).unwrap();
    assert!(matches!(
        builder.append(&one_based),
        Err(AccumError::ShapeMismatch { axis: 0, .. })
    ));

    // the locked bounds resurface on axes 1.. of the result
    let result = builder.into_tensor().unwrap();
    assert_eq!(result.lower_bounds(), &[1, 0]);
}

#[test]
fn growth_policy_is_an_explicit_capability() {
    let mut small = StackBuilder::with_policy(ElemKind::F64, GrowthPolicy { floor_bytes: 32 });
    let mut large = StackBuilder::with_policy(ElemKind::F64, GrowthPolicy { floor_bytes: 4096 });

    small.append(&sub(&[1.0])).unwrap();
    large.append(&sub(&[1.0])).unwrap();

    assert!(small.capacity_bytes() < large.capacity_bytes());
    assert_eq!(
        small.finalize().unwrap().buffer(),
        large.finalize().unwrap().buffer()
    );
}
