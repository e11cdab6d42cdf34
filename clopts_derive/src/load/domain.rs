use crate::load::invalid_error;
use crate::model::{DeriveDomain, DeriveVariant, IntermediateAttributes};
use crate::{ATTRIBUTE_DOMAIN, MACRO_ENUM_DOMAIN};
use std::collections::HashSet;
use syn::spanned::Spanned;

impl TryFrom<syn::DeriveInput> for DeriveDomain {
    type Error = syn::Error;

    fn try_from(value: syn::DeriveInput) -> Result<Self, Self::Error> {
        let enum_name = &value.ident;

        match &value.data {
            syn::Data::Enum(de) => {
                let variants = de
                    .variants
                    .iter()
                    .map(DeriveVariant::try_from)
                    .collect::<Result<Vec<_>, _>>()?;
                let mut seen = HashSet::new();

                for variant in &variants {
                    if !seen.insert(variant.value.as_str()) {
                        return Err(invalid_error(
                            variant.variant_name.span(),
                            format!(
                                "{MACRO_ENUM_DOMAIN} value '{}' is repeated.",
                                variant.value
                            ),
                        ));
                    }
                }

                Ok(DeriveDomain {
                    enum_name: enum_name.clone(),
                    variants,
                })
            }
            _ => Err(invalid_error(
                enum_name.span(),
                format!("{MACRO_ENUM_DOMAIN} only applies to 'enum' data structures."),
            )),
        }
    }
}

impl TryFrom<&syn::Variant> for DeriveVariant {
    type Error = syn::Error;

    fn try_from(value: &syn::Variant) -> Result<Self, Self::Error> {
        let variant_name = value.ident.clone();

        if !matches!(value.fields, syn::Fields::Unit) {
            return Err(invalid_error(
                variant_name.span(),
                format!("{MACRO_ENUM_DOMAIN} only applies to unit variants."),
            ));
        }

        let mut attributes = IntermediateAttributes::default();

        for attribute in &value.attrs {
            if attribute.path().is_ident(ATTRIBUTE_DOMAIN) {
                attributes = IntermediateAttributes::try_from(attribute)?;
            }
        }

        if let Some(singleton) = attributes.singletons.iter().next() {
            return Err(invalid_error(
                variant_name.span(),
                format!("unrecognized {ATTRIBUTE_DOMAIN} attribute `{singleton}`."),
            ));
        }

        let mut domain_value = variant_name.to_string();

        for (key, derive_values) in &attributes.pairs {
            if key != "value" {
                return Err(invalid_error(
                    variant_name.span(),
                    format!("unrecognized {ATTRIBUTE_DOMAIN} attribute `{key}`."),
                ));
            }

            match derive_values.as_slice() {
                [derive_value] => {
                    let literal: syn::LitStr = syn::parse2(derive_value.tokens.clone())
                        .map_err(|_| {
                            invalid_error(
                                derive_value.tokens.span(),
                                "`value` must be a string literal.",
                            )
                        })?;
                    domain_value = literal.value();
                }
                _ => {
                    return Err(invalid_error(
                        variant_name.span(),
                        "`value` cannot be specified more than once.",
                    ));
                }
            }
        }

        Ok(DeriveVariant {
            variant_name,
            value: domain_value,
        })
    }
}
