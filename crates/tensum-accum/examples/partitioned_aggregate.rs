//! Partitioned aggregation: independent builders merged pairwise.
//!
//! Run with:
//! ```bash
//! cargo run --example partitioned_aggregate
//! ```

use anyhow::Result;
use tensum_core::{ElemBuffer, ElemKind, Tensor};
use tensum_accum::StackBuilder;

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_target(false).init();

    // Sixteen rows of data, split across four workers round-robin.
    let rows: Vec<Tensor> = (0..16)
        .map(|i| {
            Tensor::vector(ElemBuffer::F64(vec![i as f64, (i * i) as f64, -(i as f64)]))
        })
        .collect();

    let mut partials: Vec<StackBuilder> = (0..4)
        .map(|worker| {
            let mut builder = StackBuilder::new(ElemKind::F64);
            for row in rows.iter().skip(worker).step_by(4) {
                builder.append(row)?;
            }
            Ok::<_, anyhow::Error>(builder)
        })
        .collect::<Result<_>>()?;

    for (i, partial) in partials.iter().enumerate() {
        println!(
            "worker {i}: {} rows, {} bytes used / {} allocated",
            partial.leading_extent(),
            partial.used_bytes(),
            partial.capacity_bytes()
        );
    }

    // Pairwise reduction tree over the partials.
    while partials.len() > 1 {
        let mut next = Vec::with_capacity(partials.len().div_ceil(2));
        while let Some(a) = partials.pop() {
            match partials.pop() {
                Some(b) => next.push(a.merge(b)?),
                None => next.push(a),
            }
        }
        partials = next;
    }

    let result = partials.pop().expect("one survivor").into_tensor()?;
    println!(
        "combined: rank={} shape={:?} ({} elements)",
        result.rank(),
        result.shape(),
        result.len()
    );

    Ok(())
}
