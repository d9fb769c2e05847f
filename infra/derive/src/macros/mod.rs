pub mod elemental;
pub mod error;

use fxhash::FxHashSet;
use syn::DeriveInput;

/// Collects the trait names listed in `#[derive(..)]` attributes, by last path segment.
pub fn derived_trait_names(input: &DeriveInput) -> FxHashSet<String> {
    let mut traits = FxHashSet::default();

    for attr in &input.attrs {
        if !attr.path().is_ident("derive") {
            continue;
        }

        let _ = attr.parse_nested_meta(|meta| {
            if let Some(segment) = meta.path.segments.last() {
                traits.insert(segment.ident.to_string());
            }
            Ok(())
        });
    }

    traits
}
