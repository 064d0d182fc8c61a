//! Integer sequence algorithms on a few sample inputs.
//!
//! Run with: cargo run --example missing_positive

use seq_drills::{
    max_consecutive_ones, max_subarray_sum, second_largest, smallest_missing_positive,
};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let samples: [&[i64]; 3] = [&[1, 3, 6, 4, 1, 2], &[1, 2, 3], &[-1, -3]];
    for values in samples {
        println!(
            "smallest missing positive of {:?} = {}",
            values,
            smallest_missing_positive(values)
        );
    }

    let bits = [0, 1, 3, 1, 1, 1, 0, 1, 1, 1, 1, 0];
    println!("longest run of ones in {:?} = {}", bits, max_consecutive_ones(&bits));

    let values = [-2, 1, -3, 4, -1, 2, 1, -5, 4];
    println!("max subarray sum of {:?} = {}", values, max_subarray_sum(&values)?);

    // No second-largest exists here, so None is printed rather than 0
    for values in [&[12, 35, 1, 10, 34, 1][..], &[-5, -5][..]] {
        println!("second largest of {:?} = {:?}", values, second_largest(values));
    }

    Ok(())
}
