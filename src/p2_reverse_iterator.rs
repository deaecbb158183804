//! Pattern 2: Custom Iterators and Reverse Sequences
//! Example: A Hand-Written Iterator, Back to Front
//!
//! Run with: cargo run --bin p2_reverse_iterator

use colored::Colorize;
use core_language_patterns::Reversed;

fn main() {
    println!("=== Iterating a Wrapped Collection in Reverse ===\n");

    let array: Vec<usize> = vec![0, 1, 2, 3, 4, 5];
    let reversed = Reversed::new(array.clone());

    // The for loop drives the cursor: one next() call per element, None ends
    // the loop.
    for &index in &reversed {
        println!("Index {} is {}", index, array[index]);
    }

    let collected: Vec<usize> = reversed.iter().copied().collect();
    assert_eq!(collected, vec![5, 4, 3, 2, 1, 0]);
    println!("{}", "✓ six elements, last to first".green());

    println!("\n=== The Terminal Signal Is None, Not an Error ===");
    let mut cursor = reversed.iter();
    while cursor.next().is_some() {}
    assert_eq!(cursor.next(), None);
    assert_eq!(cursor.next(), None); // stays terminal
    println!("An exhausted cursor answers None forever");

    println!("\n=== Restartable: Every iter() Starts Fresh ===");
    let first_pass: Vec<usize> = reversed.iter().copied().collect();
    let second_pass: Vec<usize> = reversed.iter().copied().collect();
    assert_eq!(first_pass, second_pass);
    println!("{}", "✓ two passes, identical sequences".green());

    println!("\n=== Independent Cursors Do Not Interfere ===");
    let mut ahead = reversed.iter();
    let mut behind = reversed.iter();
    ahead.next();
    ahead.next();
    assert_eq!(behind.next(), Some(&5)); // still at the end
    assert_eq!(ahead.next(), Some(&3));
    println!("Cursor positions are owned per iterator, not by the wrapper");

    println!("\n=== Empty Input ===");
    let empty: Reversed<i32> = Reversed::new(vec![]);
    assert_eq!(empty.iter().next(), None);
    assert!(empty.is_empty());
    println!("{}", "✓ empty source, immediately-terminal cursor".green());

    println!("\n=== Key Points ===");
    println!("1. Iterator needs one method: next(&mut self) -> Option<Item>");
    println!("2. None is end-of-data, distinct from any error");
    println!("3. The wrapper hands out fresh cursors; iteration never mutates it");
}
