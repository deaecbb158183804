//! # Core Language Patterns
//!
//! Short, self-contained snippets, each demonstrating one core language
//! mechanic in isolation. The two pieces that are genuinely reusable, the
//! reverse sequence adapter and the deferred thunk evaluator, live here in
//! the library so the snippets and the tests share one implementation.
//!
//! ## Patterns Covered
//!
//! 1. **Capability Traits and Mutation**
//!    - A trait with a `&mut self` mutator on a value type (copies diverge)
//!    - The same contract on a shared handle (clones alias)
//!
//! 2. **Custom Iterators and Reverse Sequences**
//!    - A hand-written `Iterator` over a wrapped collection, back to front
//!    - Consuming vs borrowing `IntoIterator` forms
//!
//! 3. **Tuples for Swapping and Multi-Value Returns**
//!    - Swapping through a temporary vs destructuring assignment
//!    - Returning `(slice, remainder)` instead of out-parameters
//!
//! 4. **Deferred Evaluation with Closures**
//!    - A predicate evaluated only when the callee decides to
//!    - Short-circuit AND/OR over a thunked right-hand side
//!    - Value-or-default without computing the default eagerly
//!
//! ## Running Examples
//!
//! ```bash
//! # Pattern 1: Capability Traits and Mutation
//! cargo run --bin p1_mutable_trait
//! cargo run --bin p1_shared_mutation
//!
//! # Pattern 2: Custom Iterators and Reverse Sequences
//! cargo run --bin p2_reverse_iterator
//! cargo run --bin p2_into_iterator
//!
//! # Pattern 3: Tuples for Swapping and Multi-Value Returns
//! cargo run --bin p3_tuple_swap
//! cargo run --bin p3_multi_return
//!
//! # Pattern 4: Deferred Evaluation with Closures
//! cargo run --bin p4_log_if_true
//! cargo run --bin p4_short_circuit
//! cargo run --bin p4_value_or_default
//! ```

pub mod lazy;
pub mod reverse;

pub use lazy::{and_lazy, or_lazy, value_or_lazy};
pub use reverse::{ReverseIter, Reversed};
