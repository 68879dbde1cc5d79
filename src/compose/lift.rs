//! Accessor lifting: feeding several views of one input into a curried
//! function.
//!
//! `lift2(f, g1, g2)` builds `x -> f(g1(x))(g2(x))`. Each accessor reads the
//! same borrowed input, so the input is never moved or cloned. Accessors
//! return owned values. For arities beyond three use the [`lift!`](crate::lift)
//! macro.
//!
//! # Examples
//!
//! ```
//! use fantasia::compose::lift2;
//!
//! struct Person {
//!     first_name: String,
//!     last_name: String,
//! }
//!
//! let greet = |greeting: String| move |name: String| format!("{greeting}, {name}");
//! let greeting = |_: &Person| String::from("Moin Moin");
//! let full_name = |p: &Person| format!("{} {}", p.first_name, p.last_name);
//!
//! let welcome = lift2(greet, greeting, full_name);
//! let bond = Person { first_name: "James".into(), last_name: "Bond".into() };
//! assert_eq!(welcome(&bond), "Moin Moin, James Bond");
//! ```

/// Lifts a curried binary function over two accessors of the same input.
#[inline]
pub fn lift2<Input, First, Second, Partial, Output, F, G1, G2>(
    function: F,
    first: G1,
    second: G2,
) -> impl Fn(&Input) -> Output
where
    Input: ?Sized,
    F: Fn(First) -> Partial,
    Partial: FnOnce(Second) -> Output,
    G1: Fn(&Input) -> First,
    G2: Fn(&Input) -> Second,
{
    move |input: &Input| function(first(input))(second(input))
}

/// Lifts a curried ternary function over three accessors of the same input.
///
/// # Examples
///
/// ```
/// use fantasia::compose::lift3;
///
/// let describe = |w: u32| move |h: u32| move |unit: &'static str| format!("{w}x{h}{unit}");
/// let size = lift3(describe, |d: &(u32, u32)| d.0, |d: &(u32, u32)| d.1, |_: &(u32, u32)| "px");
/// assert_eq!(size(&(640, 480)), "640x480px");
/// ```
#[inline]
pub fn lift3<Input, First, Second, Third, Partial, Rest, Output, F, G1, G2, G3>(
    function: F,
    first: G1,
    second: G2,
    third: G3,
) -> impl Fn(&Input) -> Output
where
    Input: ?Sized,
    F: Fn(First) -> Partial,
    Partial: FnOnce(Second) -> Rest,
    Rest: FnOnce(Third) -> Output,
    G1: Fn(&Input) -> First,
    G2: Fn(&Input) -> Second,
    G3: Fn(&Input) -> Third,
{
    move |input: &Input| function(first(input))(second(input))(third(input))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[derive(Debug)]
    struct Order {
        quantity: u32,
        unit_price: u32,
        discount: u32,
    }

    fn order() -> Order {
        Order {
            quantity: 3,
            unit_price: 20,
            discount: 5,
        }
    }

    #[rstest]
    fn lift2_reads_both_accessors_from_same_input() {
        let multiply = |a: u32| move |b: u32| a * b;
        let subtotal = lift2(multiply, |o: &Order| o.quantity, |o: &Order| o.unit_price);
        assert_eq!(subtotal(&order()), 60);
    }

    #[rstest]
    fn lift3_applies_accessors_in_order() {
        let total = |q: u32| move |p: u32| move |d: u32| q * p - d;
        let price = lift3(
            total,
            |o: &Order| o.quantity,
            |o: &Order| o.unit_price,
            |o: &Order| o.discount,
        );
        assert_eq!(price(&order()), 55);
    }

    #[rstest]
    fn lifted_function_is_reusable() {
        let join = |a: String| move |b: String| format!("{a}/{b}");
        let path = lift2(join, |s: &str| s.to_uppercase(), |s: &str| s.to_lowercase());
        assert_eq!(path("Ab"), "AB/ab");
        assert_eq!(path("xY"), "XY/xy");
    }
}
