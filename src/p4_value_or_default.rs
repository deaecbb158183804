//! Pattern 4: Deferred Evaluation with Closures
//! Example: Value-or-Default Without Eager Defaults
//!
//! Run with: cargo run --bin p4_value_or_default

use core_language_patterns::value_or_lazy;

fn expensive_default() -> i32 {
    println!("  ...computing the expensive default...");
    999
}

fn main() {
    println!("=== Falling Back Only When Absent ===\n");

    let level: Option<i32> = None;
    let start_level = 1;

    // No stored value, so the thunk supplies one.
    let current_level = value_or_lazy(level, || start_level);
    assert_eq!(current_level, 1);
    println!("level=None  -> current_level={}", current_level);

    // A stored value wins and the thunk is dropped unrun.
    let saved: Option<i32> = Some(13);
    println!("\nlevel=Some(13), default is expensive:");
    let current_level = value_or_lazy(saved, expensive_default);
    assert_eq!(current_level, 13);
    println!("level=Some(13) -> current_level={} (no expensive work)", current_level);

    println!("\nlevel=None, default is expensive:");
    let current_level = value_or_lazy(None, expensive_default);
    assert_eq!(current_level, 999);
    println!("level=None -> current_level={}", current_level);

    println!("\n=== The Standard Library Spelling ===");
    // value_or_lazy is Option::unwrap_or_else written out as a match; both
    // defer the default the same way.
    assert_eq!(saved.unwrap_or_else(expensive_default), 13);
    assert_eq!(None.unwrap_or_else(expensive_default), 999);
    println!("unwrap_or_else behaves identically");

    // unwrap_or, by contrast, takes an already-computed value: its argument
    // is evaluated before the call, present or not.
    let eager = saved.unwrap_or(expensive_default());
    assert_eq!(eager, 13);
    println!("unwrap_or paid for the default it then discarded");

    println!("\n=== Key Points ===");
    println!("1. value_or_lazy(opt, thunk): Some wins, None runs the thunk");
    println!("2. unwrap_or_else is the stdlib home of this exact pattern");
    println!("3. Reach for the _else form whenever the default costs anything");
}
