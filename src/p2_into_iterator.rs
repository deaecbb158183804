//! Pattern 2: Custom Iterators and Reverse Sequences
//! Example: Consuming vs Borrowing Iteration Forms
//!
//! Run with: cargo run --bin p2_into_iterator

use core_language_patterns::Reversed;
use itertools::Itertools;

fn main() {
    println!("=== IntoIterator Forms on the Reverse Wrapper ===\n");

    let reversed = Reversed::new(vec![1, 2, 3]);

    // Borrow iteration: for item in &reversed
    println!("Iterating by reference (&reversed):");
    for item in &reversed {
        println!("  {}", item);
    }

    // The wrapper is untouched; iterate again.
    println!("\nStill usable afterwards: [{}]", reversed.iter().join(", "));

    // Works with any iterator-consuming API.
    let sum: i32 = reversed.iter().sum();
    assert_eq!(sum, 6);
    println!("Sum by reference: {}", sum);

    // Consuming iteration: for item in reversed (moves the wrapper)
    println!("\nConsuming iteration (into_iter):");
    for item in reversed {
        println!("  {}", item);
    }
    // reversed is now moved, can't be used

    println!("\n=== The Forms This Wrapper Offers ===");
    println!("1. impl IntoIterator for &Reversed<T> -> borrows, yields &T");
    println!("2. impl IntoIterator for Reversed<T>  -> consumes, yields T");
    println!("There is no &mut form: the adapter never mutates its source");

    println!("\n=== The Standard Shortcut ===");
    // The hand-written cursor exists to show the protocol; once a type
    // iterates forward, .rev() runs any double-ended iterator backwards.
    let shortcut: Vec<i32> = vec![1, 2, 3].into_iter().rev().collect();
    let wrapper: Vec<i32> = Reversed::new(vec![1, 2, 3]).into_iter().collect();
    assert_eq!(shortcut, wrapper);
    println!("Reversed::new(v).into_iter() ≡ v.into_iter().rev()");
}
