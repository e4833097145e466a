//! Loot table: draws with replacement vs. draws with removal.
//!
//! With replacement, every roll sees the full table, so the common drop keeps
//! coming back. With removal, each confirmed drop leaves the table and the
//! remaining weights are renormalized.
//!
//! Run with `RUST_LOG=fukubiki=trace` to see every located draw.

use fukubiki::{RngSource, WeightedCollection, WeightedElement};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut table = WeightedCollection::zip(
        vec![60.0, 30.0, 9.0, 1.0],
        vec!["common", "uncommon", "rare", "legendary"],
    )?;
    // An empty slot: rolls that land here give nothing.
    table.push(WeightedElement::absent(20.0)?);

    println!("table (total weight {}):", table.total_weight());
    for e in &table {
        println!("  w={:5.1}  {}", e.weight(), e.value().copied().unwrap_or("<nothing>"));
    }
    println!();

    let rolls = table.draw_with_replacement_using(RngSource::new(ChaCha8Rng::seed_from_u64(7)));
    let picked: Vec<&str> = rolls
        .take(10)
        .map(|e| e.value().copied().unwrap_or("<nothing>"))
        .collect();
    println!("10 rolls with replacement: {picked:?}");

    let mut chest = table.clone();
    let mut draws = chest.draw_with_removal_using(RngSource::new(ChaCha8Rng::seed_from_u64(7)));
    print!("opening the chest without replacement:");
    while draws.has_next() {
        let label = draws.next_draw()?.value().copied().unwrap_or("<nothing>");
        draws.remove_last()?;
        print!(" {label} (left {:.1})", draws.total_weight());
    }
    println!();

    Ok(())
}
