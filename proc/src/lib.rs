use proc_macro::TokenStream;
use quote::quote;
use syn::{ItemFn, parse_macro_input};

/// trace prints an indented call tree if the `trace` feature of the annotated crate is enabled.
/// The crate root has to define a `CALL_DEPTH` thread local holding a `Cell<usize>`
#[proc_macro_attribute]
pub fn trace(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    let fn_attrs = &input.attrs;
    let fn_name = &input.sig.ident;
    let fn_vis = &input.vis;
    let fn_sig = &input.sig;
    let fn_block = &input.block;

    let expanded = quote! {
        #(#fn_attrs)*
        #fn_vis #fn_sig {
            #[cfg(feature = "trace")]
            crate::CALL_DEPTH.with(|depth| {
                let indent = depth.get();
                println!("{}↳ {}", " ".repeat(indent), stringify!(#fn_name));
                depth.set(indent + 1);
            });

            let result = #fn_block;

            #[cfg(feature = "trace")]
            crate::CALL_DEPTH.with(|depth| {
                let indent = depth.get();
                depth.set(indent.saturating_sub(1));
            });

            result
        }
    };

    TokenStream::from(expanded)
}
