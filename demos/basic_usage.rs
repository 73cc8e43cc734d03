// ============================================================================
// Basic Usage Example
// ============================================================================

use decimal_strings::prelude::*;
use std::sync::Arc;

fn main() {
    println!("=== Decimal Strings Example ===\n");

    // Validation
    println!("Validating tokens...");
    for token in ["1.5", ".5", "5.", "-", "1.2.3", "+007.500"] {
        match validate(token) {
            Ok(()) => println!("  {:>10}  valid", token),
            Err(e) => println!("  {:>10}  {}", token, e),
        }
    }

    // Exact sums where f64 drifts
    println!("\n=== Exact Addition ===");
    for (a, b) in [("0.1", "0.2"), ("1.5", "2.25"), ("-5", "3"), ("999", "1")] {
        let float = a.parse::<f64>().unwrap() + b.parse::<f64>().unwrap();
        println!("  {} + {} = {}   (f64: {})", a, b, add(a, b), float);
    }

    // Value type
    println!("\n=== DecimalString ===");
    let prices: Vec<DecimalString> = ["19.99", "0.01", "100.50", "-20.00"]
        .iter()
        .map(|s| s.parse().unwrap())
        .collect();
    let total: DecimalString = prices.iter().sum();
    println!("  Total: {}", total);
    println!("  Largest: {:?}", prices.iter().max());

    // Line driver over in-memory input
    println!("\n=== Line Driver ===");
    let processor = LineProcessor::new(DriverConfig::new(), Arc::new(LoggingEventHandler)).unwrap();
    let input = "123.456\n  42  \n\nnot-a-number\n.5\n";
    let summary = processor.process(input.as_bytes(), std::io::stdout().lock()).unwrap();

    println!(
        "\nAccepted: {}, rejected: {}, skipped: {}",
        summary.accepted, summary.rejected, summary.skipped
    );
}
