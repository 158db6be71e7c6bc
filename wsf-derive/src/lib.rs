//! Derive macros for the WSF particle demo.
//!
//! This crate provides one derive macro:
//!
//! - [`ParticleType`] - Turns a unit-only enum into a cyclic particle category
//!
//! # Usage
//!
//! The macro is re-exported from the main `wsf` crate. You don't need
//! to add this crate directly:
//!
//! ```ignore
//! use wsf::prelude::*;
//!
//! #[derive(ParticleType, Clone, Copy, PartialEq)]
//! enum Element {
//!     Water,
//!     Smoke,
//!     Fire,
//! }
//!
//! assert_eq!(Element::Fire.next(), Element::Water);
//! assert_eq!(Element::Water.prev(), Element::Fire);
//! ```
//!
//! # The ParticleType Macro
//!
//! It generates:
//! - `From<EnumName> for u32` - Variant index
//! - `From<u32> for EnumName` - Convert back (defaults to first variant)
//! - `EnumName::count() -> u32` - Number of variants
//! - `EnumName::next()` / `EnumName::prev()` - Wrapping cycle in declaration order
//! - `EnumName::label() -> &'static str` - Upper-case variant name for display

use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Fields, LitStr};

/// Derive macro for particle type enums.
///
/// Variants are assigned sequential IDs starting from 0.
///
/// # Generated Items
///
/// For an enum `Element`:
///
/// - `impl From<Element> for u32` - Convert variant to integer
/// - `impl From<u32> for Element` - Convert integer to variant (invalid values default to first variant)
/// - `Element::count() -> u32` - Returns number of variants
/// - `Element::next(self) -> Element` - Following variant, last wraps to first
/// - `Element::prev(self) -> Element` - Preceding variant, first wraps to last
/// - `Element::label(self) -> &'static str` - `"WATER"` for `Element::Water`
///
/// The enum must also derive `Clone` and `Copy`: `next`/`prev` take `self`
/// by value.
///
/// # Panics
///
/// The macro panics at compile time if:
/// - Applied to a struct instead of an enum
/// - Any variant has fields (tuple or struct variants)
/// - Enum has zero variants
#[proc_macro_derive(ParticleType)]
pub fn derive_particle_type(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;

    let variants = match &input.data {
        Data::Enum(data) => &data.variants,
        _ => panic!("ParticleType derive only supports enums"),
    };

    for variant in variants.iter() {
        if !matches!(variant.fields, Fields::Unit) {
            panic!(
                "ParticleType enum variants must be unit variants (no fields). \
                 Found fields on variant '{}'",
                variant.ident
            );
        }
    }

    let into_arms: Vec<_> = variants
        .iter()
        .enumerate()
        .map(|(i, variant)| {
            let variant_name = &variant.ident;
            let idx = i as u32;
            quote! { #name::#variant_name => #idx }
        })
        .collect();

    let from_arms: Vec<_> = variants
        .iter()
        .enumerate()
        .map(|(i, variant)| {
            let variant_name = &variant.ident;
            let idx = i as u32;
            quote! { #idx => #name::#variant_name }
        })
        .collect();

    let label_arms: Vec<_> = variants
        .iter()
        .map(|variant| {
            let variant_name = &variant.ident;
            let label = LitStr::new(
                &variant_name.to_string().to_uppercase(),
                Span::call_site(),
            );
            quote! { #name::#variant_name => #label }
        })
        .collect();

    let first_variant = &variants.first().expect("Enum must have at least one variant").ident;
    let variant_count = variants.len() as u32;

    let expanded = quote! {
        impl From<#name> for u32 {
            fn from(value: #name) -> u32 {
                match value {
                    #(#into_arms),*
                }
            }
        }

        impl From<u32> for #name {
            fn from(value: u32) -> #name {
                match value {
                    #(#from_arms,)*
                    _ => #name::#first_variant,
                }
            }
        }

        impl #name {
            /// Returns the number of variants in this particle type enum.
            pub const fn count() -> u32 {
                #variant_count
            }

            /// The variant after this one, wrapping from the last back to the first.
            pub fn next(self) -> #name {
                let index = u32::from(self) as i64;
                #name::from((index + 1).rem_euclid(#variant_count as i64) as u32)
            }

            /// The variant before this one, wrapping from the first to the last.
            pub fn prev(self) -> #name {
                let index = u32::from(self) as i64;
                #name::from((index - 1).rem_euclid(#variant_count as i64) as u32)
            }

            /// Upper-case variant name.
            pub fn label(self) -> &'static str {
                match self {
                    #(#label_arms),*
                }
            }
        }
    };

    TokenStream::from(expanded)
}
