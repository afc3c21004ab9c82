//! Command table construction macro
//!
//! - `command_table!` - build a `CommandTrie` from literal names

use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::quote;
use syn::{
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    Expr, Ident, LitByteStr, LitStr, Token, Type,
};

// =============================================================================
// command_table! Input Parser
// =============================================================================

/// A command name literal: `"name"` or `b"name"`.
pub enum CommandName {
    Str(LitStr),
    Bytes(LitByteStr),
}

impl CommandName {
    pub fn bytes(&self) -> Vec<u8> {
        match self {
            CommandName::Str(lit) => lit.value().into_bytes(),
            CommandName::Bytes(lit) => lit.value(),
        }
    }

    pub fn span(&self) -> Span {
        match self {
            CommandName::Str(lit) => lit.span(),
            CommandName::Bytes(lit) => lit.span(),
        }
    }
}

impl Parse for CommandName {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let lookahead = input.lookahead1();
        if lookahead.peek(LitStr) {
            input.parse().map(CommandName::Str)
        } else if lookahead.peek(LitByteStr) {
            input.parse().map(CommandName::Bytes)
        } else {
            Err(lookahead.error())
        }
    }
}

/// Single table entry: `"name" => handler_expr`
pub struct CommandEntry {
    pub name: CommandName,
    pub handler: Expr,
}

impl Parse for CommandEntry {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let name: CommandName = input.parse()?;
        let _arrow: Token![=>] = input.parse()?;
        let handler: Expr = input.parse()?;
        Ok(CommandEntry { name, handler })
    }
}

/// Optional `handler: Type;` header followed by comma-separated entries.
pub struct CommandTableInput {
    pub handler_ty: Option<Type>,
    pub entries: Punctuated<CommandEntry, Token![,]>,
}

impl Parse for CommandTableInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut handler_ty = None;
        if input.peek(Ident) && input.peek2(Token![:]) {
            let key: Ident = input.parse()?;
            if key != "handler" {
                return Err(syn::Error::new_spanned(
                    &key,
                    format!("unknown option `{}`, expected `handler: Type;`", key),
                ));
            }
            input.parse::<Token![:]>()?;
            handler_ty = Some(input.parse::<Type>()?);
            input.parse::<Token![;]>()?;
        }
        let entries = Punctuated::parse_terminated(input)?;
        Ok(CommandTableInput { handler_ty, entries })
    }
}

// =============================================================================
// Validation
// =============================================================================

/// Reject empty names and names that appear twice.
pub fn check_names(entries: &[CommandEntry]) -> syn::Result<()> {
    use std::collections::HashMap;

    let mut seen: HashMap<Vec<u8>, Span> = HashMap::new();
    for entry in entries {
        let bytes = entry.name.bytes();
        if bytes.is_empty() {
            return Err(syn::Error::new(
                entry.name.span(),
                "command name must not be empty",
            ));
        }
        if let Some(first) = seen.get(&bytes) {
            let mut err = syn::Error::new(
                entry.name.span(),
                format!(
                    "duplicate command `{}`\n\
                     \n\
                     Each command should appear only once in a table.\n\
                     A later entry would silently replace the earlier handler.",
                    String::from_utf8_lossy(&bytes)
                ),
            );
            err.combine(syn::Error::new(*first, "first defined here"));
            return Err(err);
        }
        seen.insert(bytes, entry.name.span());
    }
    Ok(())
}

// =============================================================================
// expand_command_table
// =============================================================================

/// Expand to a block evaluating `CommandTrie::try_from_entries([...])`.
///
/// Each handler is bound through `let handler: Type = expr;` so fn items
/// coerce to fn pointers and closures to boxed trait objects.
pub fn expand_command_table(input: CommandTableInput) -> TokenStream2 {
    let entries: Vec<_> = input.entries.into_iter().collect();
    if let Err(err) = check_names(&entries) {
        return err.to_compile_error();
    }

    let count = entries.len();
    let items = entries.iter().map(|entry| {
        let name = LitByteStr::new(&entry.name.bytes(), entry.name.span());
        let handler = &entry.handler;
        match &input.handler_ty {
            Some(ty) => quote! {
                {
                    let handler: #ty = #handler;
                    (#name as &'static [u8], handler)
                }
            },
            None => quote! { (#name as &'static [u8], #handler) },
        }
    });

    let annotation = match &input.handler_ty {
        Some(ty) => quote! { : [(&'static [u8], #ty); #count] },
        None => quote! {},
    };

    quote! {
        {
            let entries #annotation = [#(#items),*];
            ::cmd_trie::CommandTrie::try_from_entries(entries)
        }
    }
}
