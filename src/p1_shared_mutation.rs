//! Pattern 1: Capability Traits and Mutation
//! Example: The Same Trait Contract on a Shared Handle
//!
//! Run with: cargo run --bin p1_shared_mutation

use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Color {
    Blue,
    Red,
}

trait Vehicle {
    fn wheel_count(&self) -> u32;
    fn color(&self) -> Color;
    fn set_color(&mut self, color: Color);
    fn repaint(&mut self);
}

#[derive(Debug)]
struct BusState {
    color: Color,
}

/// A handle with reference semantics: cloning copies the pointer, not the
/// state. Every clone aliases the one `BusState` behind the `RefCell`.
#[derive(Debug, Clone)]
struct SharedBus {
    state: Rc<RefCell<BusState>>,
}

impl SharedBus {
    fn new(color: Color) -> Self {
        SharedBus {
            state: Rc::new(RefCell::new(BusState { color })),
        }
    }
}

/// The contract is identical to the value-type implementation. `&mut self`
/// here only borrows the handle; the mutation lands in the shared state, so
/// the method is effectively aliasing-transparent for this type.
impl Vehicle for SharedBus {
    fn wheel_count(&self) -> u32 {
        6
    }

    fn color(&self) -> Color {
        self.state.borrow().color
    }

    fn set_color(&mut self, color: Color) {
        self.state.borrow_mut().color = color;
    }

    fn repaint(&mut self) {
        self.state.borrow_mut().color = Color::Red;
    }
}

fn main() {
    println!("=== Reference Semantics: Clones Alias ===\n");

    let mut depot_handle = SharedBus::new(Color::Blue);
    let mut garage_handle = depot_handle.clone(); // same bus, second handle

    println!("depot sees: {:?}", depot_handle.color());
    println!("garage sees: {:?}", garage_handle.color());

    depot_handle.repaint();

    // One repaint, visible through every handle.
    assert_eq!(depot_handle.color(), Color::Red);
    assert_eq!(garage_handle.color(), Color::Red);
    println!("\nAfter repaint through the depot handle:");
    println!("depot sees: {:?}", depot_handle.color());
    println!("garage sees: {:?}", garage_handle.color());

    // And back again, through the other handle.
    garage_handle.set_color(Color::Blue);
    assert_eq!(depot_handle.color(), Color::Blue);
    println!("\nAfter set_color(Blue) through the garage handle:");
    println!("depot sees: {:?}", depot_handle.color());

    println!("\n=== Same Signature, Different Aliasing ===");
    println!("Handles alive: {}", Rc::strong_count(&depot_handle.state));
    println!("Wheels through any handle: {}", garage_handle.wheel_count());
    println!("Car (value type): repaint changes the one value it's called on");
    println!("SharedBus (handle): repaint changes state every clone observes");

    println!("\n=== Key Points ===");
    println!("1. The trait asks for &mut self either way; the contract is one contract");
    println!("2. Rc<RefCell<_>> gives a type reference semantics: clone = new alias");
    println!("3. Only the caller-observed aliasing differs between the two impls");
}
