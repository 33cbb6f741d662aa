extern crate proc_macro;

use crate::proc_macro::TokenStream;
use quote::quote;
use syn::{self, DeriveInput, Ident};

/// Implements `TDefaultCheck` for a value-like type: a value is accepted when it differs from
/// `Default::default()`. The type must implement `Default` and `PartialEq`.
#[proc_macro_derive(DefaultCheck)]
pub fn default_check_macro_derive(input: TokenStream) -> TokenStream {
    impl_default_check(&syn::parse(input).expect("could not parse input"))
}

fn impl_default_check(ast: &DeriveInput) -> TokenStream {
    let name = &ast.ident;
    let (impl_generics, ty_generics, where_clause) = ast.generics.split_for_impl();

    let mut predicates = where_clause
        .map(|clause| clause.predicates.iter().cloned().collect::<Vec<_>>())
        .unwrap_or_default();

    predicates.push(syn::parse_quote! {
        #name #ty_generics: ::core::default::Default + ::core::cmp::PartialEq
    });

    let expanded = quote! {
        impl #impl_generics ::pollwait::TDefaultCheck for #name #ty_generics
        where
            #(#predicates),*
        {
            fn default_check() -> ::pollwait::DefaultCheck<Self> {
                ::pollwait::DefaultCheck::zeroed(<Self as ::core::default::Default>::default())
            }
        }
    };

    expanded.into()
}

#[proc_macro_derive(BuilderDelegate)]
pub fn builder_delegate_macro_derive(input: TokenStream) -> TokenStream {
    impl_builder_delegate(&syn::parse(input).expect("could not parse input"))
}

fn impl_builder_delegate(ast: &DeriveInput) -> TokenStream {
    let name = &ast.ident;

    let builder: Ident =
        syn::parse_str(&format!("{}Builder", name)).expect("could not parse builder name");

    let (impl_generics, ty_generics, where_clause) = ast.generics.split_for_impl();

    let expanded = quote! {
        impl #impl_generics crate::prelude::BuilderDelegate<#builder #ty_generics>
            for #name #ty_generics #where_clause {}
    };

    expanded.into()
}
