//! lift! needs at least one accessor.

fn main() {
    let _ = fantasia::lift!(str::len);
}
