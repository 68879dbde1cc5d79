//! The arity must be an integer literal.

fn main() {
    let _ = fantasia::curry!(i32::wrapping_add, "two");
}
