extern crate proc_macro;

mod generate;
mod load;
mod model;

use crate::model::DeriveDomain;
use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;

pub(crate) const MACRO_ENUM_DOMAIN: &str = "EnumDomain";
pub(crate) const ATTRIBUTE_DOMAIN: &str = "domain";

/// Implement `clopts::prelude::EnumDomain` for an enum of unit variants.
///
/// Each variant is represented by its identifier, unless overridden with `#[domain(value = "...")]`.
#[proc_macro_derive(EnumDomain, attributes(domain))]
pub fn enum_domain(input: TokenStream) -> TokenStream {
    let derive_input = syn::parse_macro_input!(input as syn::DeriveInput);

    match DeriveDomain::try_from(derive_input) {
        Ok(domain) => TokenStream2::from(domain).into(),
        Err(error) => error.to_compile_error().into(),
    }
}
