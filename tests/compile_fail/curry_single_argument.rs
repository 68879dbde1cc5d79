//! A one-argument closure has nothing to curry.

fn main() {
    let _ = fantasia::curry!(|a: i32| a + 1);
}
