//! Pattern 3: Tuples for Swapping and Multi-Value Returns
//! Example: Swapping Two Values
//!
//! Run with: cargo run --bin p3_tuple_swap

/// The classic three-step swap through a named temporary.
fn swap_with_temp<T: Copy>(a: &mut T, b: &mut T) {
    let temp = *a;
    *a = *b;
    *b = temp;
}

/// The tuple spelling: both sides move in one destructuring assignment, no
/// named temporary.
fn swap_destructured<T: Copy>(a: &mut T, b: &mut T) {
    (*a, *b) = (*b, *a);
}

fn main() {
    println!("=== Swap Through a Temporary ===\n");
    let mut a = 1;
    let mut b = 2;
    swap_with_temp(&mut a, &mut b);
    assert_eq!((a, b), (2, 1));
    println!("after swap_with_temp: a={}, b={}", a, b);

    println!("\n=== Swap by Tuple Destructuring ===");
    swap_destructured(&mut a, &mut b);
    assert_eq!((a, b), (1, 2));
    println!("after swap_destructured: a={}, b={}", a, b);

    // On locals the tuple form needs no function at all.
    let (mut x, mut y) = ("left", "right");
    (x, y) = (y, x);
    assert_eq!((x, y), ("right", "left"));
    println!("locals after (x, y) = (y, x): x={}, y={}", x, y);

    println!("\n=== Types That Can't Be Copied ===");
    // Both helpers above copy out of the references, so they need T: Copy.
    // For everything else the standard library swaps in place:
    let mut first = String::from("first");
    let mut second = String::from("second");
    std::mem::swap(&mut first, &mut second);
    assert_eq!(first, "second");
    println!("after mem::swap: first={:?}, second={:?}", first, second);

    println!("\n=== Key Points ===");
    println!("1. (a, b) = (b, a) swaps without naming a temporary");
    println!("2. Destructuring assignment moves both sides at once");
    println!("3. mem::swap covers non-Copy types with no clone and no temp");
}
