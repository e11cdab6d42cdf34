use proc_macro2::TokenStream as TokenStream2;
use quote::quote;

use crate::model::DeriveDomain;

impl From<DeriveDomain> for TokenStream2 {
    fn from(value: DeriveDomain) -> Self {
        let DeriveDomain {
            enum_name,
            variants,
        } = value;
        let values = variants.iter().map(|v| &v.value).collect::<Vec<_>>();
        let arms = variants
            .iter()
            .map(|v| {
                let value = &v.value;
                let variant_name = &v.variant_name;
                quote! {
                    #value => ::core::option::Option::Some(Self::#variant_name),
                }
            })
            .collect::<Vec<_>>();

        quote! {
            impl ::clopts::prelude::EnumDomain for #enum_name {
                fn values() -> &'static [&'static str] {
                    &[ #( #values ),* ]
                }

                fn from_value(value: &str) -> ::core::option::Option<Self> {
                    match value {
                        #( #arms )*
                        _ => ::core::option::Option::None,
                    }
                }
            }
        }
    }
}
