//! Segmented Least Squares Examples
//!
//! This example demonstrates several segmentation scenarios:
//! - Basic segmentation of two linear groups
//! - The effect of the segment cost on the number of segments
//! - Diagnostics, residuals and tables for a noisy series
//! - Vertical ranges under both degenerate policies
//! - Timing a run near the default capacity
//!
//! The first scenario includes the expected output as a comment.

#[cfg(feature = "std")]
use segmented::prelude::*;
#[cfg(feature = "std")]
use std::time::Instant;

#[cfg(feature = "std")]
fn main() -> Result<(), SegmentedError> {
    println!("{}", "=".repeat(80));
    println!("Segmented Least Squares - Examples");
    println!("{}", "=".repeat(80));
    println!();

    example_1_basic_segmentation()?;
    example_2_segment_cost_sweep()?;
    example_3_series_with_diagnostics()?;
    example_4_vertical_ranges()?;
    example_5_benchmark()?;

    Ok(())
}

#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
/// Example 1: Basic Segmentation
/// Two groups of collinear points separated by a jump
fn example_1_basic_segmentation() -> Result<(), SegmentedError> {
    println!("Example 1: Basic Segmentation");
    println!("{}", "-".repeat(80));

    let x = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
    let y = vec![1.0, 2.0, 3.0, 10.0, 11.0, 12.0];

    let model = Segmented::new().segment_cost(0.1).build()?;
    let result = model.fit(&x, &y)?;
    println!("{}", result);

    /* Expected Output:
    Summary:
      Data points:  6
      Segment cost: 0.1
      Segments:     2
      Total cost:   0.200000

    Segments:
     Start    End      X_first       X_last        Slope    Intercept     Sq_Error
    ------------------------------------------------------------------------------
         1      3       1.0000       3.0000     1.000000     0.000000     0.000000
         4      6       4.0000       6.0000     1.000000     6.000000     0.000000
    */

    println!();
    Ok(())
}

#[cfg(feature = "std")]
/// Example 2: Segment Cost Sweep
/// Larger costs trade squared error for fewer segments
fn example_2_segment_cost_sweep() -> Result<(), SegmentedError> {
    println!("Example 2: Segment Cost Sweep");
    println!("{}", "-".repeat(80));

    let x: Vec<f64> = (0..60).map(|i| i as f64 * 0.5).collect();
    let y: Vec<f64> = x
        .iter()
        .map(|&xi| (xi * 0.4).sin() * 5.0 + xi * 0.3)
        .collect();

    println!("{:>10} {:>10} {:>14} {:>14}", "Cost", "Segments", "Sq_Error", "Total");
    for cost in [0.01, 0.1, 1.0, 10.0, 100.0] {
        let result = Segmented::new().segment_cost(cost).build()?.fit(&x, &y)?;
        println!(
            "{:>10} {:>10} {:>14.6} {:>14.6}",
            cost,
            result.segment_count(),
            result.total_error(),
            result.total_cost
        );
    }

    println!();
    Ok(())
}

#[cfg(feature = "std")]
/// Example 3: Series with Diagnostics
/// Fits a price-like series indexed by position and reports fit quality
fn example_3_series_with_diagnostics() -> Result<(), SegmentedError> {
    println!("Example 3: Series with Diagnostics");
    println!("{}", "-".repeat(80));

    let prices: Vec<f64> = vec![
        10.0, 10.4, 10.9, 11.5, 11.8, 12.4, 11.0, 10.1, 9.2, 8.0, 7.4, 7.6, 8.1, 8.4, 9.0, 9.3,
    ];

    let model = Segmented::new()
        .segment_cost(1.5)
        .return_diagnostics()
        .return_residuals()
        .return_tables()
        .build()?;

    let result = model.fit_series(&prices)?;
    println!("{}", result);

    if let Some(last) = result.last_segment() {
        println!(
            "Latest trend: slope {:.4} from x = {} to x = {}",
            last.slope, last.first.x, last.last.x
        );
    }

    for pair in result.segments.windows(2) {
        println!(
            "Turn between segments at x = {}: {:.2} degrees",
            pair[1].first.x,
            pair[0].angle_to(&pair[1])
        );
    }

    if let Some(residuals) = &result.residuals {
        let worst = residuals.iter().fold(0.0f64, |acc, r| acc.max(r.abs()));
        println!("Largest absolute residual: {:.4}", worst);
    }

    if let Some(tables) = &result.tables {
        println!("OPT table: {:?}", tables.optimal_costs);
    }

    println!();
    Ok(())
}

#[cfg(feature = "std")]
/// Example 4: Vertical Ranges
/// Points sharing one x-value under both degenerate policies
fn example_4_vertical_ranges() -> Result<(), SegmentedError> {
    println!("Example 4: Vertical Ranges");
    println!("{}", "-".repeat(80));

    let x = vec![1.0, 2.0, 2.0, 2.0, 3.0];
    let y = vec![1.0, 0.0, 2.0, 4.0, 3.0];

    for policy in [Disqualify, Horizontal] {
        let model = Segmented::new()
            .segment_cost(5.0)
            .degenerate_policy(policy)
            .build()?;
        let result = model.fit(&x, &y)?;

        println!("Policy: {:?}", policy);
        println!("{}", result);
    }

    println!();
    Ok(())
}

#[cfg(feature = "std")]
/// Example 5: Benchmark
/// Times a run at the default capacity
fn example_5_benchmark() -> Result<(), SegmentedError> {
    println!("Example 5: Benchmark");
    println!("{}", "-".repeat(80));

    let n = DEFAULT_MAX_POINTS;
    let x: Vec<f64> = (0..n).map(|i| i as f64).collect();
    let y: Vec<f64> = x
        .iter()
        .map(|&xi| (xi * 0.02).sin() * 50.0 + (xi * 0.1).cos())
        .collect();

    let start = Instant::now();
    let model = Segmented::new().segment_cost(10.0).build()?;

    let result = model.fit(&x, &y)?;
    let duration = start.elapsed();

    println!("Processed {} points in {:?}", n, duration);
    println!(
        "Chose {} segments, total cost {:.4}",
        result.segment_count(),
        result.total_cost
    );

    println!();
    Ok(())
}
