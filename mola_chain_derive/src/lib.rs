use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    parse::{Parse, ParseStream}, parse_macro_input, Data, DataStruct, DeriveInput, Field, Fields, Ident, LitStr, Token, Type, TypePath
};

struct NodeAttribute {
    crate_path: syn::Path,
}

/// Parses the attribute in the format: `crate_path = "path::to::crate"`.
impl Parse for NodeAttribute {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let key: Ident = input.parse()?;
        if key != "crate_path" {
            return Err(syn::Error::new(key.span(), "expected attribute `crate_path`"));
        }

        let _: Token![=] = input.parse()?;
        let value: LitStr = input.parse()?;
        let path: syn::Path = value.parse()?;

        Ok(NodeAttribute { crate_path: path })
    }
}

/// The `link` and optional `value` fields of a node struct.
struct NodeFields {
    link: Field,
    value: Option<Field>,
}

fn crate_path(input: &DeriveInput) -> syn::Result<TokenStream2> {
    for attr in &input.attrs {
        if attr.path().is_ident("node") {
            let node_attr = attr.parse_args::<NodeAttribute>()?;
            let path = node_attr.crate_path;
            return Ok(quote! { #path });
        }
    }
    Ok(quote! { ::mola_chain })
}

/// Links are reached by casting a node pointer, so the node must be
/// `#[repr(C)]` with `link` as its first field.
fn has_repr_c(input: &DeriveInput) -> syn::Result<bool> {
    let mut repr_c = false;
    for attr in input.attrs.iter().filter(|a| a.path().is_ident("repr")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("C") {
                repr_c = true;
            } else if meta.input.peek(syn::token::Paren) {
                let _content;
                syn::parenthesized!(_content in meta.input);
            }
            Ok(())
        })?;
    }
    Ok(repr_c)
}

fn node_fields(input: &DeriveInput) -> syn::Result<NodeFields> {
    let Data::Struct(DataStruct {
        fields: Fields::Named(ref fields),
        ..
    }) = input.data
    else {
        return Err(syn::Error::new_spanned(
            input,
            "Node derive macro only supports structs with named fields",
        ));
    };

    if !has_repr_c(input)? {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "Node structs must be `#[repr(C)]`",
        ));
    }

    let first_is_link = fields
        .named
        .first()
        .and_then(|f| f.ident.as_ref())
        .is_some_and(|ident| ident == "link");
    if !first_is_link {
        return Err(syn::Error::new_spanned(
            &fields.named,
            "Field 'link' must be the first field",
        ));
    }

    let mut link = None;
    let mut value = None;
    for field in fields.named.iter() {
        if let Some(ident) = &field.ident {
            match ident.to_string().as_str() {
                "link" => link = Some(field.clone()),
                "value" => value = Some(field.clone()),
                _ => {
                    return Err(syn::Error::new_spanned(
                        ident,
                        "Unexpected field name: expected 'link' or 'value'",
                    ));
                }
            }
        }
    }

    let link = link.ok_or_else(|| {
        syn::Error::new_spanned(&input.ident, "Struct must have a field named 'link'")
    })?;

    // Only singly linked chains can be reversed in place by rewriting `next`.
    match &link.ty {
        Type::Path(TypePath { path, .. })
            if path.segments.last().is_some_and(|s| s.ident == "SingleLink") => {}
        other => {
            return Err(syn::Error::new_spanned(
                other,
                "Field 'link' must be a 'SingleLink'",
            ));
        }
    }

    Ok(NodeFields { link, value })
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let struct_name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    let crate_path = crate_path(input)?;
    let fields = node_fields(input)?;
    let intrusive_path = quote! { #crate_path::linked_list::intrusive };
    let link_type = &fields.link.ty;

    let link_impl = quote! {
        impl #impl_generics #intrusive_path::traits::Link for #struct_name #ty_generics #where_clause {
            type Target = Self;

            #[inline]
            fn next(&self) -> Option<::core::ptr::NonNull<Self::Target>> {
                <#link_type as #intrusive_path::traits::Link>::next(&self.link).map(|n| n.cast())
            }

            #[inline]
            fn set_next(&mut self, next: Option<::core::ptr::NonNull<Self::Target>>) {
                <#link_type as #intrusive_path::traits::Link>::set_next(&mut self.link, next.map(|n| n.cast()));
            }
        }

        impl #impl_generics #intrusive_path::traits::Node for #struct_name #ty_generics #where_clause {
            #[inline]
            fn append_to<L>(&mut self, list: &mut L)
            where
                L: #intrusive_path::traits::List<Target = Self>,
            {
                unsafe {
                    let mut wrapper = #intrusive_path::wrapper::ListWrapper::new(list);
                    #intrusive_path::traits::Node::append_to(&mut self.link, &mut wrapper);
                }
            }

            #[inline]
            unsafe fn detach<L>(&mut self, parent: Option<&mut L>)
            where
                L: #intrusive_path::traits::Link<Target = Self>,
            {
                unsafe {
                    let mut parent_wrapper = parent.map(|p| #intrusive_path::wrapper::LinkWrapper::new(p));
                    #intrusive_path::traits::Node::detach(&mut self.link, parent_wrapper.as_mut());
                }
            }
        }
    };

    let value_impl = match &fields.value {
        Some(value_field) => {
            let value_type = &value_field.ty;
            quote! {
                impl #impl_generics #intrusive_path::traits::NodeWithValue for #struct_name #ty_generics #where_clause {
                    type Value = #value_type;

                    #[inline]
                    fn value(&self) -> &Self::Value {
                        &self.value
                    }

                    #[inline]
                    fn value_mut(&mut self) -> &mut Self::Value {
                        &mut self.value
                    }
                }
            }
        }
        None => quote! {},
    };

    Ok(quote! {
        #link_impl
        #value_impl
    })
}

/// Derive macro for intrusive singly linked chain nodes.
///
/// The struct must have a `link: SingleLink` field and may have a `value`
/// field. Generates `Link` and `Node`, plus `NodeWithValue` when `value`
/// is present.
#[proc_macro_derive(Node, attributes(node))]
pub fn node_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(&input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(src: &str) -> DeriveInput {
        syn::parse_str(src).expect("test input must parse")
    }

    fn compact(tokens: TokenStream2) -> String {
        tokens.to_string().chars().filter(|c| !c.is_whitespace()).collect()
    }

    fn rejection(src: &str) -> String {
        match expand(&parse(src)) {
            Ok(_) => panic!("expected the derive to reject `{src}`"),
            Err(e) => e.to_string(),
        }
    }

    #[test]
    fn test_accepts_link_and_value() {
        let input = parse("#[repr(C)] struct Frame<T> { link: SingleLink, value: T }");
        let fields = node_fields(&input).unwrap();
        assert!(fields.value.is_some());

        let expanded = compact(expand(&input).unwrap());
        assert!(expanded.contains("NodeWithValue"));
        assert!(expanded.contains("::mola_chain::linked_list::intrusive"));
    }

    #[test]
    fn test_accepts_link_only_with_crate_path() {
        let input = parse(
            "#[node(crate_path = \"crate\")] #[repr(C)] struct Marker { link: SingleLink }",
        );
        let expanded = compact(expand(&input).unwrap());
        assert!(!expanded.contains("NodeWithValue"));
        assert!(expanded.contains("crate::linked_list::intrusive"));
    }

    #[test]
    fn test_repr_c_among_other_hints() {
        let input = parse("#[repr(align(16), C)] struct Frame { link: SingleLink }");
        assert!(has_repr_c(&input).unwrap());

        let input = parse("#[repr(align(16))] struct Frame { link: SingleLink }");
        assert!(!has_repr_c(&input).unwrap());
    }

    #[test]
    fn test_malformed_repr_is_an_error() {
        let input = parse("#[repr(C = 1)] struct Frame { link: SingleLink }");
        assert!(has_repr_c(&input).is_err());
        assert!(expand(&input).is_err());
    }

    #[test]
    fn test_rejects_missing_repr_c() {
        let err = rejection("struct Frame { link: SingleLink, value: u8 }");
        assert_eq!(err, "Node structs must be `#[repr(C)]`");
    }

    #[test]
    fn test_rejects_link_not_first() {
        let err = rejection("#[repr(C)] struct Frame { value: u8, link: SingleLink }");
        assert_eq!(err, "Field 'link' must be the first field");
    }

    #[test]
    fn test_rejects_other_link_type() {
        let err = rejection("#[repr(C)] struct Frame { link: DoubleLink, value: u8 }");
        assert_eq!(err, "Field 'link' must be a 'SingleLink'");
    }

    #[test]
    fn test_rejects_unexpected_field() {
        let err = rejection("#[repr(C)] struct Frame { link: SingleLink, payload: u8 }");
        assert_eq!(err, "Unexpected field name: expected 'link' or 'value'");
    }

    #[test]
    fn test_rejects_tuple_struct() {
        let err = rejection("#[repr(C)] struct Frame(SingleLink);");
        assert_eq!(err, "Node derive macro only supports structs with named fields");
    }

    #[test]
    fn test_rejects_bad_crate_path_key() {
        let err = rejection("#[node(path = \"crate\")] #[repr(C)] struct Frame { link: SingleLink }");
        assert_eq!(err, "expected attribute `crate_path`");
    }
}
