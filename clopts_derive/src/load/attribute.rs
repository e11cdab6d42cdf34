use crate::load::invalid_error;
use crate::model::{DeriveValue, IntermediateAttributes};
use quote::ToTokens;
use syn::spanned::Spanned;

impl TryFrom<&syn::Attribute> for IntermediateAttributes {
    type Error = syn::Error;

    fn try_from(value: &syn::Attribute) -> Result<Self, Self::Error> {
        let attributes_parser =
            syn::punctuated::Punctuated::<syn::Expr, syn::Token![,]>::parse_terminated;
        let expressions = value.parse_args_with(attributes_parser)?;
        let mut attributes = IntermediateAttributes::default();

        for expression in expressions {
            match expression {
                syn::Expr::Assign(assignment) => {
                    let left = assignment.left.to_token_stream();
                    attributes
                        .pairs
                        .entry(left.to_string())
                        .or_default()
                        .push(DeriveValue {
                            tokens: assignment.right.to_token_stream(),
                        });
                }
                syn::Expr::Path(path) if path.path.get_ident().is_some() => {
                    if let Some(ident) = path.path.get_ident() {
                        attributes.singletons.insert(ident.to_string());
                    }
                }
                _ => {
                    return Err(invalid_error(
                        expression.span(),
                        format!(
                            "unparseable attribute `{}`.",
                            expression.to_token_stream()
                        ),
                    ));
                }
            };
        }

        Ok(attributes)
    }
}
