//! Basic tensor construction and inspection.
//!
//! Run with:
//! ```bash
//! cargo run --example basic_tensor
//! ```

use anyhow::Result;
use tensum_core::{ElemBuffer, ElemKind, MissingMask, Tensor};

fn main() -> Result<()> {
    // A 2x3 matrix of 64-bit floats, indexed from 1 on both axes.
    let t = Tensor::from_buffer(
        ElemBuffer::F64(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]),
        &[2, 3],
    )?;
    println!(
        "kind={} rank={} shape={:?} bounds={:?}",
        t.kind(),
        t.rank(),
        t.shape(),
        t.lower_bounds()
    );
    println!("t[2,3] = {:?}", t.get(&[2, 3]));

    // Integer tensors expose both computation domains.
    let ints = Tensor::vector(ElemBuffer::I32(vec![10, 20, 30]));
    println!(
        "real: {}, exact: {}",
        ints.buffer().get_real(1),
        ints.buffer().get_integer(1)?
    );

    // Missing elements are tracked out-of-band in a presence mask.
    let mut mask = MissingMask::all_present(3);
    mask.set_missing(1);
    let sparse = Tensor::new(ElemBuffer::F64(vec![1.0, 0.0, 3.0]), &[3], &[1], Some(mask))?;
    println!(
        "has_missing={} t[2]={:?}",
        sparse.has_missing(),
        sparse.get(&[2])
    );

    // Every kind has a canonical empty tensor of rank 0.
    let empty = Tensor::empty(ElemKind::Decimal);
    println!("empty: rank={} len={}", empty.rank(), empty.len());

    Ok(())
}
