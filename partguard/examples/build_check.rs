//! Example: pick parts from the built-in catalog by id and check the build.
//! Run with: cargo run --example build_check [ID...]

use partguard::prelude::*;

fn main() -> Result<(), PartGuardError> {
    let ids: Vec<u32> = std::env::args()
        .skip(1)
        .filter_map(|arg| arg.parse().ok())
        .collect();
    let ids = if ids.is_empty() {
        vec![101, 202, 301, 401, 501, 601]
    } else {
        ids
    };

    let catalog = Catalog::seeded();
    let mut cart = Cart::new();
    for id in ids {
        cart.add(catalog.find_by_id(id)?.clone());
    }

    println!("Build ({} parts, ${:.2}):", cart.len(), cart.total_price());
    for part in cart.items() {
        println!("  {}", part);
    }

    let issues = RulesEngine::with_default_rules().evaluate(cart.items());
    let result = CompatibilityResult::from_issues(&issues);
    println!("\nCompatibility: {}", if result.ok { "OK" } else { "ISSUES" });
    for issue in &issues {
        println!("  [{:?}] {} ({})", issue.severity, issue.message, issue.rule_id);
    }

    if !result.ok {
        std::process::exit(1);
    }
    Ok(())
}
