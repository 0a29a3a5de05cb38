//! Extended binary operations on small sets
//!
//! Applies modular addition and bitwise AND to X = {1, 2, 3} and Y = {2, 3, 4},
//! then checks which of the two operations turn {0, …, 4} into a group.
//!
//! Run with: cargo run --example advanced_operations

use algebra_lab::binop::{has_inverses, identity_element, is_associative, is_closed, is_commutative};
use algebra_lab::display::fmt_set;
use algebra_lab::{IntOperation, apply_binary_operation};
use std::collections::BTreeSet;

fn main() {
    let x = BTreeSet::from([1u64, 2, 3]);
    let y = BTreeSet::from([2u64, 3, 4]);

    println!("Extended operations");
    println!("X: {}", fmt_set(&x));
    println!("Y: {}", fmt_set(&y));

    let operations = [IntOperation::AddMod(5), IntOperation::BitAnd];
    for op in &operations {
        println!("{}: {}", op, fmt_set(&apply_binary_operation(&x, &y, op)));
    }

    // 1. Properties on {0, 1, 2, 3, 4}
    let carrier: BTreeSet<u64> = (0..5).collect();
    println!("\nProperties on {}:", fmt_set(&carrier));
    for op in &operations {
        let identity = identity_element(&carrier, op);
        let inverses = identity.is_some_and(|e| has_inverses(&carrier, op, &e));
        println!(
            "  {:<14} closed {}  associative {}  commutative {}  identity {}  inverses {}",
            op.to_string(),
            mark(is_closed(&carrier, op)),
            mark(is_associative(&carrier, op)),
            mark(is_commutative(&carrier, op)),
            identity.map_or_else(|| "-".to_string(), |e| e.to_string()),
            mark(inverses)
        );
    }
}

fn mark(flag: bool) -> &'static str {
    if flag { "✓" } else { "✗" }
}
