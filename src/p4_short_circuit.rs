//! Pattern 4: Deferred Evaluation with Closures
//! Example: Short-Circuit AND/OR Over a Thunk
//!
//! Run with: cargo run --bin p4_short_circuit

use colored::Colorize;
use core_language_patterns::{and_lazy, or_lazy};

fn expensive_check() -> bool {
    println!("  ...running the expensive check...");
    true
}

fn main() {
    println!("=== AND With a Deferred Right-Hand Side ===\n");

    let flag = false;
    let flag2 = true;

    // Left side already decides the answer: the thunk is dropped unrun.
    println!("and_lazy(false, expensive_check):");
    let result = and_lazy(flag, expensive_check);
    assert!(!result);
    println!("{}", "✓ false, and the expensive check never ran".green());

    // Left side is true: now the thunk must run.
    println!("\nand_lazy(true, expensive_check):");
    let result = and_lazy(flag2, expensive_check);
    assert!(result);

    println!("\n=== OR With a Deferred Right-Hand Side ===");
    println!("or_lazy(true, expensive_check):");
    let result = or_lazy(flag2, expensive_check);
    assert!(result);
    println!("{}", "✓ true, and the expensive check never ran".green());

    println!("\nor_lazy(false, expensive_check):");
    let result = or_lazy(flag, expensive_check);
    assert!(result);

    println!("\n=== Proving Non-Invocation ===");
    let mut calls = 0;
    let result = and_lazy(false, || {
        calls += 1;
        true
    });
    assert!(!result);
    assert_eq!(calls, 0);
    println!("short-circuited thunk ran {} times", calls);

    let result = or_lazy(false, || {
        calls += 1;
        true
    });
    assert!(result);
    assert_eq!(calls, 1);
    println!("needed thunk ran {} time", calls);

    println!("\n=== The Built-In Operators Do This Too ===");
    // && and || already defer their right operand; the functions above make
    // the deferral a value you can store, pass along, or build yourself.
    let native = flag && expensive_check();
    assert_eq!(native, and_lazy(flag, expensive_check));
    println!("flag && expensive_check() agreed with and_lazy");

    println!("\n=== Key Points ===");
    println!("1. A thunk parameter runs zero or one times - the callee decides");
    println!("2. Short-circuiting means the dropped branch truly never executes");
    println!("3. FnOnce() -> bool turns operator sugar into an ordinary function");
}
