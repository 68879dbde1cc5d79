//! Implementation of the `lift!` procedural macro.
//!
//! `lift!(f, g1, g2, g3)` expands to:
//!
//! ```text
//! {
//!     let __fantasia_function = f;
//!     let __fantasia_accessor_0 = g1;
//!     let __fantasia_accessor_1 = g2;
//!     let __fantasia_accessor_2 = g3;
//!     move |__fantasia_input: &_| {
//!         __fantasia_function(__fantasia_accessor_0(__fantasia_input))
//!             (__fantasia_accessor_1(__fantasia_input))
//!             (__fantasia_accessor_2(__fantasia_input))
//!     }
//! }
//! ```
//!
//! The accessors are evaluated left to right against the same borrowed input.

use proc_macro2::{Span, TokenStream};
use quote::{format_ident, quote};
use syn::punctuated::Punctuated;
use syn::{Expr, Token};

pub fn expand(input: TokenStream) -> TokenStream {
    match parse_lift_input(input) {
        Ok((function, accessors)) => generate_lift(&function, &accessors),
        Err(error) => error.to_compile_error(),
    }
}

fn parse_lift_input(input: TokenStream) -> syn::Result<(Expr, Vec<Expr>)> {
    let parser = Punctuated::<Expr, Token![,]>::parse_terminated;
    let expressions = syn::parse::Parser::parse2(parser, input)?;
    let mut iterator = expressions.into_iter();

    let Some(function) = iterator.next() else {
        return Err(syn::Error::new(
            Span::call_site(),
            "lift! requires a curried function followed by at least one accessor",
        ));
    };

    let accessors: Vec<Expr> = iterator.collect();
    if accessors.is_empty() {
        return Err(syn::Error::new_spanned(
            function,
            "lift! requires at least one accessor: lift!(function, accessor, ...)",
        ));
    }

    Ok((function, accessors))
}

fn generate_lift(function: &Expr, accessors: &[Expr]) -> TokenStream {
    let accessor_identifiers: Vec<_> = (0..accessors.len())
        .map(|index| format_ident!("__fantasia_accessor_{}", index))
        .collect();

    let bindings = accessor_identifiers
        .iter()
        .zip(accessors)
        .map(|(identifier, accessor)| quote! { let #identifier = #accessor; });

    let call = accessor_identifiers.iter().fold(
        quote! { __fantasia_function },
        |partial, identifier| quote! { (#partial)(#identifier(__fantasia_input)) },
    );

    quote! {
        {
            let __fantasia_function = #function;
            #(#bindings)*
            move |__fantasia_input: &_| #call
        }
    }
}
