//! End-to-end tour of the operation surface on a small vector.
//!
//! Run with:
//! ```bash
//! cargo run --example vector_stats
//! ```

use anyhow::Result;
use tensum_core::{ElemBuffer, Scalar, Tensor};
use tensum_kernels::{elementwise, filter, normalize, reductions, scan, CmpOp};

fn main() -> Result<()> {
    // Route engine diagnostics (empty inputs, zero norms, ...) to stderr.
    tracing_subscriber::fmt().with_target(false).init();

    let t = Tensor::vector(ElemBuffer::F64(vec![1.0, 2.0, 0.0, 3.0, 4.0]));

    println!("sum     = {}", reductions::sum(&t)?);
    println!("mean    = {}", reductions::mean(&t)?);
    println!("stddev  = {:.4}", reductions::stddev(&t)?);
    let best = reductions::argmax(&t)?;
    println!("argmax  = {} at index {}", best.value, best.index);

    let nonzero = filter::filter(&t, CmpOp::Ne, &Scalar::F64(0.0))?;
    println!("nonzero = {:?}", nonzero.buffer().to_real_vec());

    let unit = normalize::normalize(&nonzero)?;
    println!("unit    = {:?}", unit.buffer().to_real_vec());

    let running = scan::cum_sum(&t)?;
    println!("cum_sum = {:?}", running.buffer().to_real_vec());

    let shifted = elementwise::scalar_add(&t, &Scalar::F64(10.0))?;
    println!("shifted = {:?}", shifted.buffer().to_real_vec());

    // This one warns and returns the zero vector unchanged.
    let zeros = Tensor::vector(ElemBuffer::F64(vec![0.0, 0.0]));
    let _ = normalize::normalize(&zeros)?;

    Ok(())
}
