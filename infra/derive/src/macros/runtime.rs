use proc_macro2::TokenStream;
use quote::quote;
use syn::{Error, Ident, ItemFn, ReturnType, Type};

/// Runtime presets understood by `#[codr_runtime::main(..)]`.
enum Profile {
    Default,
    HighPerformance,
    MemoryEfficient,
}

impl Profile {
    fn parse(args: TokenStream) -> syn::Result<Self> {
        if args.is_empty() {
            return Ok(Self::Default);
        }
        let ident: Ident = syn::parse2(args)?;
        match ident.to_string().as_str() {
            "default" => Ok(Self::Default),
            "high_performance" => Ok(Self::HighPerformance),
            "memory_efficient" => Ok(Self::MemoryEfficient),
            _ => Err(Error::new_spanned(
                ident,
                "unknown runtime profile, expected one of: default, high_performance, memory_efficient",
            )),
        }
    }

    fn constructor(&self) -> TokenStream {
        match self {
            Self::Default => quote! { ::codr_runtime::RuntimeConfig::default() },
            Self::HighPerformance => quote! { ::codr_runtime::RuntimeConfig::high_performance() },
            Self::MemoryEfficient => quote! { ::codr_runtime::RuntimeConfig::memory_efficient() },
        }
    }
}

/// Expands `#[codr_runtime::main]`.
pub fn expand_main(args: TokenStream, input: ItemFn) -> TokenStream {
    if input.sig.asyncness.is_none() {
        return Error::new_spanned(
            input.sig.fn_token,
            "#[codr_runtime::main] requires an async function",
        )
        .to_compile_error();
    }
    if !returns_result(&input.sig.output) {
        return Error::new_spanned(
            &input.sig.output,
            "#[codr_runtime::main] requires a Result return type",
        )
        .to_compile_error();
    }

    let profile = match Profile::parse(args) {
        Ok(profile) => profile.constructor(),
        Err(err) => return err.to_compile_error(),
    };

    let ItemFn { attrs, vis, sig, block } = input;
    let name = &sig.ident;
    let output = &sig.output;

    quote! {
        #(#attrs)*
        #vis fn #name() #output {
            let runtime = ::codr_runtime::build_runtime_with_config(&#profile)?;
            runtime.block_on(async move #block)
        }
    }
}

fn returns_result(output: &ReturnType) -> bool {
    match output {
        ReturnType::Type(_, ty) => match &**ty {
            Type::Path(path) => path.path.segments.last().is_some_and(|seg| seg.ident == "Result"),
            _ => false,
        },
        ReturnType::Default => false,
    }
}
