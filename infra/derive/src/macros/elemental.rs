use fxhash::FxHashSet;
use proc_macro2::TokenStream;
use quote::quote;
use syn::meta::ParseNestedMeta;
use syn::{Data, DeriveInput, Expr, Fields, Ident, LitBool, LitStr, Variant};

struct EnumArgs {
    name: Option<LitStr>,
    persist_ordinally: bool,
    serde: bool,
}

impl Default for EnumArgs {
    fn default() -> Self {
        Self { name: None, persist_ordinally: false, serde: true }
    }
}

struct MemberArgs<'a> {
    ident: &'a Ident,
    name: Option<LitStr>,
    display: Option<LitStr>,
    position: Option<Expr>,
    default: bool,
    synonyms: Vec<LitStr>,
}

/// Expands `#[derive(Elemental)]`.
pub fn expand_derive(input: DeriveInput) -> TokenStream {
    match expand(&input) {
        Ok(tokens) => tokens,
        Err(err) => err.to_compile_error(),
    }
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream> {
    let ident = &input.ident;
    let Data::Enum(data) = &input.data else {
        return Err(syn::Error::new_spanned(ident, "Elemental can only be derived for enums"));
    };
    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "Elemental enums cannot be generic",
        ));
    }

    let args = parse_enum_args(input)?;
    let members = data.variants.iter().map(parse_member).collect::<syn::Result<Vec<_>>>()?;
    check_literal_collisions(&members)?;

    let registry_name =
        args.name.unwrap_or_else(|| LitStr::new(&ident.to_string(), proc_macro2::Span::call_site()));
    let variants: Vec<&Ident> = members.iter().map(|m| m.ident).collect();
    let ordinals = 0..variants.len();
    let declarations = members.iter().map(member_tokens);
    let persist = args.persist_ordinally.then(|| quote!(let builder = builder.persist_ordinally();));
    let serde_impls = args.serde.then(|| serde_tokens(ident));

    Ok(quote! {
        #[automatically_derived]
        impl ::elemental::Elemental for #ident {
            const VARIANTS: &'static [Self] = &[#(Self::#variants),*];

            fn declare() -> ::std::result::Result<::elemental::Registry, ::elemental::ElementalError> {
                let builder = ::elemental::Registry::builder(#registry_name);
                #persist
                #(#declarations)*
                Ok(builder.build())
            }

            fn registry() -> &'static ::elemental::Registry {
                static REGISTRY: ::std::sync::LazyLock<::elemental::Registry> =
                    ::std::sync::LazyLock::new(|| ::elemental::declared(<#ident as ::elemental::Elemental>::declare()));
                &REGISTRY
            }

            #[inline]
            fn ordinal(self) -> usize {
                match self {
                    #(Self::#variants => #ordinals,)*
                }
            }
        }

        #serde_impls
    })
}

fn member_tokens(member: &MemberArgs<'_>) -> TokenStream {
    let name = member
        .name
        .clone()
        .unwrap_or_else(|| LitStr::new(&member.ident.to_string(), member.ident.span()));

    let mut options = quote!(::elemental::MemberOptions::new());
    if let Some(display) = &member.display {
        options = quote!(#options.display(#display));
    }
    if let Some(position) = &member.position {
        options = quote!(#options.position(#position));
    }
    if member.default {
        options = quote!(#options.as_default());
    }

    let synonyms = &member.synonyms;
    quote! {
        let builder = builder.member(#name, #options)?;
        #(let builder = builder.synonym(#synonyms, #name)?;)*
    }
}

fn serde_tokens(ident: &Ident) -> TokenStream {
    quote! {
        #[automatically_derived]
        impl ::elemental::serde::Serialize for #ident {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: ::elemental::serde::Serializer,
            {
                ::elemental::value::serialize(self, serializer)
            }
        }

        #[automatically_derived]
        impl<'de> ::elemental::serde::Deserialize<'de> for #ident {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: ::elemental::serde::Deserializer<'de>,
            {
                ::elemental::value::deserialize(deserializer)
            }
        }
    }
}

fn parse_enum_args(input: &DeriveInput) -> syn::Result<EnumArgs> {
    let mut args = EnumArgs::default();

    for attr in input.attrs.iter().filter(|attr| attr.path().is_ident("elemental")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("name") {
                let lit = string_value(&meta)?;
                set_once(&mut args.name, lit, &meta)
            } else if meta.path.is_ident("persist_ordinally") {
                args.persist_ordinally = true;
                Ok(())
            } else if meta.path.is_ident("serde") {
                args.serde = meta.value()?.parse::<LitBool>()?.value;
                Ok(())
            } else {
                Err(meta.error("expected `name = \"...\"`, `persist_ordinally` or `serde = false`"))
            }
        })?;
    }

    Ok(args)
}

fn parse_member(variant: &Variant) -> syn::Result<MemberArgs<'_>> {
    if !matches!(variant.fields, Fields::Unit) {
        return Err(syn::Error::new_spanned(variant, "Elemental variants cannot carry fields"));
    }
    if let Some((_, discriminant)) = &variant.discriminant {
        return Err(syn::Error::new_spanned(
            discriminant,
            "Elemental ordinals follow declaration order; remove the explicit discriminant",
        ));
    }

    let mut member = MemberArgs {
        ident: &variant.ident,
        name: None,
        display: None,
        position: None,
        default: false,
        synonyms: Vec::new(),
    };

    for attr in variant.attrs.iter().filter(|attr| attr.path().is_ident("member")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("name") {
                let lit = string_value(&meta)?;
                set_once(&mut member.name, lit, &meta)
            } else if meta.path.is_ident("display") {
                let lit = string_value(&meta)?;
                set_once(&mut member.display, lit, &meta)
            } else if meta.path.is_ident("position") {
                let expr: Expr = meta.value()?.parse()?;
                set_once(&mut member.position, expr, &meta)
            } else if meta.path.is_ident("default") {
                member.default = true;
                Ok(())
            } else if meta.path.is_ident("synonym") {
                member.synonyms.push(string_value(&meta)?);
                Ok(())
            } else {
                Err(meta.error(
                    "expected one of `name`, `display`, `position`, `default`, `synonym`",
                ))
            }
        })?;
    }

    Ok(member)
}

/// Rejects names that are literally identical; case and format variants are caught when the
/// registry is declared.
fn check_literal_collisions(members: &[MemberArgs<'_>]) -> syn::Result<()> {
    let mut seen = FxHashSet::default();

    for member in members {
        let primary = member.name.as_ref().map_or_else(|| member.ident.to_string(), LitStr::value);
        if !seen.insert(primary.clone()) {
            return Err(syn::Error::new_spanned(
                member.ident,
                format!("member name `{primary}` is declared twice"),
            ));
        }
        for synonym in &member.synonyms {
            if !seen.insert(synonym.value()) {
                return Err(syn::Error::new_spanned(
                    synonym,
                    format!("synonym `{}` collides with another name", synonym.value()),
                ));
            }
        }
    }

    Ok(())
}

fn string_value(meta: &ParseNestedMeta<'_>) -> syn::Result<LitStr> {
    meta.value()?.parse::<LitStr>()
}

fn set_once<T>(slot: &mut Option<T>, value: T, meta: &ParseNestedMeta<'_>) -> syn::Result<()> {
    if slot.is_some() {
        return Err(meta.error("duplicate argument"));
    }
    *slot = Some(value);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    fn rejection(input: &DeriveInput) -> String {
        match expand(input) {
            Ok(tokens) => panic!("expected a rejection, got {tokens}"),
            Err(err) => err.to_string(),
        }
    }

    #[test]
    fn expands_unit_enum_with_serde() {
        let input: DeriveInput = parse_quote! {
            #[elemental(name = "Fruits", persist_ordinally)]
            enum Fruit {
                #[member(synonym = "machintosh", position = 2)]
                Apple,
                #[member(default, display = "Pears")]
                Pear,
            }
        };

        let tokens = expand(&input).unwrap().to_string();
        assert!(tokens.contains("persist_ordinally"));
        assert!(tokens.contains("\"machintosh\""));
        assert!(tokens.contains("Serialize"));
        assert!(tokens.contains("Deserialize"));
    }

    #[test]
    fn serde_false_skips_serde_impls() {
        let input: DeriveInput = parse_quote! {
            #[elemental(serde = false)]
            enum Priority { Low, High }
        };

        let tokens = expand(&input).unwrap().to_string();
        assert!(tokens.contains("Elemental for Priority"));
        assert!(!tokens.contains("Serialize"));
        assert!(!tokens.contains("Deserialize"));
    }

    #[test]
    fn rejects_structs() {
        let input: DeriveInput = parse_quote! { struct Fruit; };
        assert_eq!(rejection(&input), "Elemental can only be derived for enums");
    }

    #[test]
    fn rejects_generic_enums() {
        let input: DeriveInput = parse_quote! { enum Fruit<T> { Apple, Pear } };
        assert_eq!(rejection(&input), "Elemental enums cannot be generic");
    }

    #[test]
    fn rejects_variants_with_fields() {
        let tuple: DeriveInput = parse_quote! { enum Fruit { Apple(u8), Pear } };
        let named: DeriveInput = parse_quote! { enum Fruit { Apple { weight: u8 } } };

        assert_eq!(rejection(&tuple), "Elemental variants cannot carry fields");
        assert_eq!(rejection(&named), "Elemental variants cannot carry fields");
    }

    #[test]
    fn rejects_explicit_discriminants() {
        let input: DeriveInput = parse_quote! { enum Fruit { Apple = 3, Pear } };
        assert!(rejection(&input).contains("remove the explicit discriminant"));
    }

    #[test]
    fn rejects_names_declared_twice() {
        let input: DeriveInput = parse_quote! {
            enum Fruit {
                Apple,
                #[member(name = "Apple")]
                Pear,
            }
        };
        assert_eq!(rejection(&input), "member name `Apple` is declared twice");
    }

    #[test]
    fn rejects_colliding_synonyms() {
        let input: DeriveInput = parse_quote! {
            enum Fruit {
                Apple,
                #[member(synonym = "Apple")]
                Pear,
            }
        };
        assert_eq!(rejection(&input), "synonym `Apple` collides with another name");
    }

    #[test]
    fn rejects_repeated_arguments() {
        let member: DeriveInput = parse_quote! {
            enum Fruit {
                #[member(display = "Red", display = "Green")]
                Apple,
            }
        };
        let registry: DeriveInput = parse_quote! {
            #[elemental(name = "A", name = "B")]
            enum Fruit { Apple }
        };

        assert_eq!(rejection(&member), "duplicate argument");
        assert_eq!(rejection(&registry), "duplicate argument");
    }

    #[test]
    fn rejects_unknown_keys() {
        let member: DeriveInput = parse_quote! {
            enum Fruit {
                #[member(colour = "red")]
                Apple,
            }
        };
        let registry: DeriveInput = parse_quote! {
            #[elemental(ordered)]
            enum Fruit { Apple }
        };

        assert!(rejection(&member).starts_with("expected one of `name`"));
        assert!(rejection(&registry).contains("`serde = false`"));
    }

    #[test]
    fn rejects_non_bool_serde_flag() {
        let input: DeriveInput = parse_quote! {
            #[elemental(serde = "no")]
            enum Fruit { Apple }
        };
        assert!(rejection(&input).contains("expected boolean literal"));
    }

    #[test]
    fn rejects_non_string_names() {
        let input: DeriveInput = parse_quote! {
            enum Fruit {
                #[member(name = 3)]
                Apple,
            }
        };
        assert!(rejection(&input).contains("expected string literal"));
    }
}
