//! Pattern 1: Capability Traits and Mutation
//! Example: A Mutating Trait Method on a Value Type
//!
//! Run with: cargo run --bin p1_mutable_trait

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Color {
    Blue,
    Red,
    Green,
}

/// A capability contract: anything with wheels and a repaintable body.
///
/// `repaint` takes `&mut self`, so value-type implementers can change their
/// own fields. Implementers with reference semantics satisfy the same
/// signature; see p1_shared_mutation for that side.
trait Vehicle {
    fn wheel_count(&self) -> u32;
    fn color(&self) -> Color;
    fn set_color(&mut self, color: Color);
    fn repaint(&mut self);
}

/// A plain value type. Copying it copies the whole state.
#[derive(Debug, Clone, Copy)]
struct Car {
    color: Color,
}

impl Vehicle for Car {
    fn wheel_count(&self) -> u32 {
        4
    }

    fn color(&self) -> Color {
        self.color
    }

    fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    fn repaint(&mut self) {
        self.color = Color::Red;
    }
}

/// Generic over the capability, not the concrete type. The `&mut` borrow in
/// the signature is the whole mutation story for value implementers.
fn repaint_fleet<V: Vehicle>(fleet: &mut [V]) {
    for vehicle in fleet {
        vehicle.repaint();
    }
}

fn main() {
    println!("=== Mutation Through a Trait Method ===\n");

    let mut car = Car { color: Color::Blue };
    println!("Fresh car: {:?} wheels={}", car.color(), car.wheel_count());

    car.repaint();
    assert_eq!(car.color(), Color::Red);
    println!("After repaint(): {:?}", car.color());

    car.set_color(Color::Green);
    assert_eq!(car.color(), Color::Green);
    println!("After set_color(Green): {:?}", car.color());

    println!("\n=== Value Semantics: Copies Diverge ===");
    let mut original = Car { color: Color::Blue };
    let spare = original; // Copy: an independent value, not an alias
    original.repaint();
    assert_eq!(original.color(), Color::Red);
    assert_eq!(spare.color(), Color::Blue);
    println!("original: {:?}, spare: {:?}", original.color(), spare.color());

    println!("\n=== Mutating Through a Generic Bound ===");
    let mut fleet = [Car { color: Color::Blue }, Car { color: Color::Green }];
    repaint_fleet(&mut fleet);
    assert!(fleet.iter().all(|car| car.color() == Color::Red));
    println!("Fleet after repaint_fleet: {:?}", fleet);

    // A shared borrow only reaches the read side of the contract:
    // let parked = &car;
    // parked.repaint(); // Won't compile - repaint needs &mut

    println!("\n=== Key Points ===");
    println!("1. A trait method that mutates takes &mut self");
    println!("2. On a Copy type, mutation touches one value; copies keep theirs");
    println!("3. Generic code mutates through the same bound, no downcasting");
}
