//! Pattern 3: Tuples for Swapping and Multi-Value Returns
//! Example: Returning Several Values at Once
//!
//! Run with: cargo run --bin p3_multi_return

/// Quotient and remainder in one call instead of two.
fn divmod(a: i32, b: i32) -> (i32, i32) {
    (a / b, a % b)
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Rect {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Edge {
    MinX,
    MaxX,
    MinY,
    MaxY,
}

impl Rect {
    /// Splits the rect into a slice of the given thickness taken from the
    /// chosen edge, plus the remainder. One tuple return replaces a pair of
    /// out-parameters. The distance is clamped to the rect's extent on that
    /// axis, so a degenerate request yields an empty slice or remainder.
    fn divided(self, at: f64, edge: Edge) -> (Rect, Rect) {
        match edge {
            Edge::MinX => {
                let at = at.clamp(0.0, self.width);
                let slice = Rect { width: at, ..self };
                let remainder = Rect {
                    x: self.x + at,
                    width: self.width - at,
                    ..self
                };
                (slice, remainder)
            }
            Edge::MaxX => {
                let at = at.clamp(0.0, self.width);
                let slice = Rect {
                    x: self.x + self.width - at,
                    width: at,
                    ..self
                };
                let remainder = Rect {
                    width: self.width - at,
                    ..self
                };
                (slice, remainder)
            }
            Edge::MinY => {
                let at = at.clamp(0.0, self.height);
                let slice = Rect { height: at, ..self };
                let remainder = Rect {
                    y: self.y + at,
                    height: self.height - at,
                    ..self
                };
                (slice, remainder)
            }
            Edge::MaxY => {
                let at = at.clamp(0.0, self.height);
                let slice = Rect {
                    y: self.y + self.height - at,
                    height: at,
                    ..self
                };
                let remainder = Rect {
                    height: self.height - at,
                    ..self
                };
                (slice, remainder)
            }
        }
    }
}

fn main() {
    println!("=== Two Results, One Call ===\n");
    let (quotient, remainder) = divmod(17, 5);
    assert_eq!((quotient, remainder), (3, 2));
    println!("divmod(17, 5) = ({}, {})", quotient, remainder);

    println!("\n=== Dividing a Rect ===");
    let rect = Rect {
        x: 0.0,
        y: 0.0,
        width: 100.0,
        height: 100.0,
    };

    // The tuple return destructures straight into two names.
    let (small, large) = rect.divided(20.0, Edge::MinX);
    assert_eq!(small.width, 20.0);
    assert_eq!(large.width, 80.0);
    assert_eq!(large.x, 20.0);
    println!("slice:     {:?}", small);
    println!("remainder: {:?}", large);

    // Or keep the tuple whole and index into it.
    let parts = rect.divided(30.0, Edge::MaxY);
    println!("\nslice from the top edge: {:?}", parts.0);
    println!("what's left:             {:?}", parts.1);

    println!("\n=== Key Points ===");
    println!("1. A tuple return gives every result a first-class slot");
    println!("2. let (a, b) = f() names the results at the call site");
    println!("3. No out-parameters, no struct ceremony for a one-off pair");
}

#[cfg(test)]
mod tests {
    use super::*;

    const SQUARE: Rect = Rect {
        x: 0.0,
        y: 0.0,
        width: 100.0,
        height: 100.0,
    };

    #[test]
    fn divmod_returns_both_parts() {
        assert_eq!(divmod(17, 5), (3, 2));
        assert_eq!(divmod(10, 2), (5, 0));
    }

    #[test]
    fn slice_and_remainder_tile_the_rect() {
        for edge in [Edge::MinX, Edge::MaxX, Edge::MinY, Edge::MaxY] {
            let (slice, rest) = SQUARE.divided(20.0, edge);
            assert_eq!(slice.width * slice.height + rest.width * rest.height, 100.0 * 100.0);
        }
    }

    #[test]
    fn min_x_slice_hugs_the_left_edge() {
        let (slice, rest) = SQUARE.divided(20.0, Edge::MinX);
        assert_eq!(slice, Rect { x: 0.0, y: 0.0, width: 20.0, height: 100.0 });
        assert_eq!(rest, Rect { x: 20.0, y: 0.0, width: 80.0, height: 100.0 });
    }

    #[test]
    fn max_x_slice_hugs_the_right_edge() {
        let (slice, rest) = SQUARE.divided(20.0, Edge::MaxX);
        assert_eq!(slice, Rect { x: 80.0, y: 0.0, width: 20.0, height: 100.0 });
        assert_eq!(rest, Rect { x: 0.0, y: 0.0, width: 80.0, height: 100.0 });
    }

    #[test]
    fn distance_is_clamped_to_the_extent() {
        let (slice, rest) = SQUARE.divided(500.0, Edge::MinY);
        assert_eq!(slice.height, 100.0);
        assert_eq!(rest.height, 0.0);

        let (slice, rest) = SQUARE.divided(-5.0, Edge::MinY);
        assert_eq!(slice.height, 0.0);
        assert_eq!(rest.height, 100.0);
    }
}
