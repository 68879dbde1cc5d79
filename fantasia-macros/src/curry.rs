//! Implementation of the `curry!` procedural macro.
//!
//! The input is read into a [`CurrySource`]: the callable to wrap plus one
//! entry per parameter. A closure contributes its own parameter list, and
//! any `name: Type` annotation is carried onto the matching generated
//! parameter. A function path contributes `arity` unannotated parameters.
//!
//! `curry!(|a: i32, b: i32, c: i32| a * b + c)` expands to:
//!
//! ```text
//! {
//!     let __fantasia_curried = |a: i32, b: i32, c: i32| a * b + c;
//!     move |__fantasia_argument_0: i32| {
//!         let __fantasia_curried = Clone::clone(&__fantasia_curried);
//!         move |__fantasia_argument_1: i32| {
//!             let __fantasia_curried = Clone::clone(&__fantasia_curried);
//!             let __fantasia_argument_0 = Clone::clone(&__fantasia_argument_0);
//!             move |__fantasia_argument_2: i32| {
//!                 __fantasia_curried(
//!                     Clone::clone(&__fantasia_argument_0),
//!                     Clone::clone(&__fantasia_argument_1),
//!                     __fantasia_argument_2,
//!                 )
//!             }
//!         }
//!     }
//! }
//! ```
//!
//! Each level owns clones of what it captured, so every partial application
//! is an `Fn` closure, and it is `Send` when the wrapped callable and the
//! captured arguments are.

use proc_macro2::{Ident, Span, TokenStream, TokenTree};
use quote::{ToTokens, format_ident, quote};
use syn::punctuated::Punctuated;
use syn::{Expr, ExprClosure, ExprLit, Lit, Pat, Token, Type};

const TOO_FEW_PARAMETERS: &str = "currying needs at least two parameters";

/// The callable to curry and the parameters the generated chain accepts.
struct CurrySource {
    callee: TokenStream,
    parameters: Vec<Option<Type>>,
}

pub fn expand(input: TokenStream) -> TokenStream {
    match parse_curry_source(input) {
        Ok(source) => generate_curried(&source),
        Err(error) => error.to_compile_error(),
    }
}

fn parse_curry_source(input: TokenStream) -> syn::Result<CurrySource> {
    let parser = Punctuated::<Expr, Token![,]>::parse_terminated;
    let mut arguments = syn::parse::Parser::parse2(parser, input)?.into_iter();

    match (arguments.next(), arguments.next(), arguments.next()) {
        (Some(Expr::Closure(closure)), None, None) => from_closure(closure),
        (Some(Expr::Path(path)), None, None) => Err(syn::Error::new_spanned(
            path,
            "a function path needs its arity, for example `curry!(add, 2)`",
        )),
        (Some(other), None, None) => Err(syn::Error::new_spanned(
            other,
            "expected a closure or a function path",
        )),
        (Some(function), Some(arity), None) => from_path_and_arity(function, &arity),
        (Some(_), Some(_), Some(extra)) => Err(syn::Error::new_spanned(
            extra,
            "unexpected argument after the arity",
        )),
        _ => Err(syn::Error::new(
            Span::call_site(),
            "curry! takes a closure, or a function path and its arity",
        )),
    }
}

fn from_closure(closure: ExprClosure) -> syn::Result<CurrySource> {
    if closure.inputs.len() < 2 {
        return Err(syn::Error::new_spanned(closure, TOO_FEW_PARAMETERS));
    }

    let parameters = closure.inputs.iter().map(annotated_type).collect();
    Ok(CurrySource {
        callee: closure.into_token_stream(),
        parameters,
    })
}

fn from_path_and_arity(function: Expr, arity: &Expr) -> syn::Result<CurrySource> {
    let Expr::Path(path) = function else {
        return Err(syn::Error::new_spanned(
            function,
            "expected a function path before the arity",
        ));
    };

    let Expr::Lit(ExprLit {
        lit: Lit::Int(literal),
        ..
    }) = arity
    else {
        return Err(syn::Error::new_spanned(arity, "arity must be an integer literal"));
    };

    let arity = literal.base10_parse::<usize>()?;
    if arity < 2 {
        return Err(syn::Error::new_spanned(literal, TOO_FEW_PARAMETERS));
    }

    Ok(CurrySource {
        callee: path.into_token_stream(),
        parameters: vec![None; arity],
    })
}

/// The type written on a closure parameter, if it can be repeated on a
/// generated parameter. Borrowed types are left to inference because each
/// level returns a closure that outlives its own argument.
fn annotated_type(parameter: &Pat) -> Option<Type> {
    match parameter {
        Pat::Type(typed) if !mentions_borrow(typed.ty.to_token_stream()) => Some((*typed.ty).clone()),
        _ => None,
    }
}

fn mentions_borrow(tokens: TokenStream) -> bool {
    tokens.into_iter().any(|token| match token {
        TokenTree::Punct(punct) => punct.as_char() == '&' || punct.as_char() == '\'',
        TokenTree::Group(group) => mentions_borrow(group.stream()),
        TokenTree::Ident(_) | TokenTree::Literal(_) => false,
    })
}

fn generate_curried(source: &CurrySource) -> TokenStream {
    let arguments: Vec<Ident> = (0..source.parameters.len())
        .map(|index| format_ident!("__fantasia_argument_{}", index))
        .collect();
    let callee = &source.callee;
    let chain = curried_level(0, &arguments, &source.parameters);

    quote! {
        {
            let __fantasia_curried = #callee;
            #chain
        }
    }
}

/// Builds the closure accepting argument `index`; the arguments before it
/// are already in scope.
fn curried_level(index: usize, arguments: &[Ident], parameters: &[Option<Type>]) -> TokenStream {
    let argument = &arguments[index];
    let parameter = parameters[index].as_ref().map_or_else(
        || quote! { #argument },
        |annotation| quote! { #argument: #annotation },
    );
    let captured = &arguments[..index];

    if index + 1 == arguments.len() {
        return quote! {
            move |#parameter| __fantasia_curried(
                #(::core::clone::Clone::clone(&#captured),)*
                #argument
            )
        };
    }

    let next = curried_level(index + 1, arguments, parameters);
    quote! {
        move |#parameter| {
            let __fantasia_curried = ::core::clone::Clone::clone(&__fantasia_curried);
            #(let #captured = ::core::clone::Clone::clone(&#captured);)*
            #next
        }
    }
}
