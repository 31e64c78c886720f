//! Procedural macros for the jobcast callback dispatch crate.
//!
//! - `#[derive(Callback)]`: Implements `jobcast::Callback` for your type,
//!   preserving generics and bounds. For structs, a field tagged `#[job_id]`
//!   (or simply named `job_id`) backs the `job_id()` accessor; without one
//!   the callback reads as uncorrelated. For enums, also generates `name()`
//!   returning the variant name.
//!
//! Usage:
//! ```rust,ignore
//! use jobcast::{Callback, JobId};
//!
//! // Correlated response: the field backs job_id().
//! #[derive(Clone, Debug, Callback)]
//! struct QueryResult {
//!     job_id: JobId,
//!     rows: Vec<String>,
//! }
//!
//! // Fire-and-forget notification: job_id() stays INVALID.
//! #[derive(Clone, Debug, Callback)]
//! enum ConnectionState { Up, Down }
//! ```
use proc_macro::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Field, Fields, parse_macro_input};

#[proc_macro_derive(Callback, attributes(job_id))]
pub fn derive_callback(input: TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let ident = input.ident.clone();
    let generics = input.generics.clone();

    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    // For structs with a correlation field, generate the job_id() accessor
    let job_id_impl = match &input.data {
        Data::Struct(data) => job_id_accessor(&data.fields),
        _ => quote! {},
    };

    // For enums, generate name() that returns variant names
    let name_impl = match &input.data {
        Data::Enum(data_enum) => {
            let match_arms = data_enum.variants.iter().map(|variant| {
                let variant_ident = &variant.ident;
                let variant_name = variant_ident.to_string();

                // Handle different field types (unit, tuple, struct)
                let pattern = match &variant.fields {
                    Fields::Unit => quote! { Self::#variant_ident },
                    Fields::Unnamed(_) => quote! { Self::#variant_ident(..) },
                    Fields::Named(_) => quote! { Self::#variant_ident { .. } },
                };

                quote! {
                    #pattern => ::std::borrow::Cow::Borrowed(#variant_name)
                }
            });

            quote! {
                fn name(&self) -> ::std::borrow::Cow<'static, str> {
                    match self {
                        #(#match_arms),*
                    }
                }
            }
        }
        // For structs, the default implementation (the type name) stands
        _ => quote! {},
    };

    let expanded = quote! {
        impl #impl_generics ::jobcast::Callback for #ident #ty_generics #where_clause {
            #job_id_impl
            #name_impl
        }
    };
    TokenStream::from(expanded)
}

/// Picks the field backing `job_id()`: a `#[job_id]` tag wins, a field
/// literally named `job_id` is the fallback. Named fields only.
fn job_id_accessor(fields: &Fields) -> proc_macro2::TokenStream {
    let Fields::Named(named) = fields else {
        return quote! {};
    };

    let tagged = named
        .named
        .iter()
        .find(|field| has_job_id_attr(field))
        .or_else(|| {
            named
                .named
                .iter()
                .find(|field| field.ident.as_ref().is_some_and(|id| id == "job_id"))
        });

    match tagged.and_then(|field| field.ident.as_ref()) {
        Some(field_ident) => quote! {
            fn job_id(&self) -> ::jobcast::JobId {
                self.#field_ident
            }
        },
        None => quote! {},
    }
}

fn has_job_id_attr(field: &Field) -> bool {
    field.attrs.iter().any(|attr| attr.path().is_ident("job_id"))
}
