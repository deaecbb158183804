//! Pattern 4: Deferred Evaluation with Closures
//! Example: A Predicate the Callee Decides to Run
//!
//! Run with: cargo run --bin p4_log_if_true

/// Takes the condition as a thunk, not a bool. The expression at the call
/// site is wrapped in a closure and stays unevaluated until `predicate()`.
fn log_if_true(predicate: impl FnOnce() -> bool) {
    if predicate() {
        println!("true");
    }
}

fn two_is_greater_than_one() -> bool {
    2 > 1
}

fn main() {
    println!("=== Call-Site Shapes for a Closure Parameter ===\n");

    // A closure literal around the expression
    log_if_true(|| 2 > 1);

    // With an explicit return and a block body
    log_if_true(|| {
        return 2 > 1;
    });

    // With a spelled-out return type
    log_if_true(|| -> bool { 2 > 1 });

    // A plain function item coerces to the same parameter
    log_if_true(two_is_greater_than_one);

    // There is no implicit expression-to-closure conversion; the two pipe
    // characters are the entire cost of deferring the expression.
    // log_if_true(2 > 1); // Won't compile - expected a callable, found bool

    println!("\n=== Why Take a Thunk at All ===");
    // The callee chooses if and when the work happens. Nothing below runs.
    fn never_logs(_predicate: impl FnOnce() -> bool) {}
    never_logs(|| {
        unreachable!("the callee never invoked us");
    });
    println!("never_logs dropped its predicate without running it");

    println!("\n=== Key Points ===");
    println!("1. impl FnOnce() -> bool accepts closures and function items alike");
    println!("2. The expression runs when the callee calls it - maybe never");
    println!("3. Four call-site spellings, one parameter type");
}
