// src/macros.rs
#[macro_export]
macro_rules! s {
    // String shorthand!

    // Zero-arg → String::new()
    () => {
        ::std::string::String::new()
    };
    // Any single expression: literals, consts, or vars
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

#[macro_export]
macro_rules! esc {
    // Escaped-text shorthand for template interpolation.
    // esc!(fighter.name) → escape_html(&fighter.name)
    ($expr:expr) => {
        $crate::core::html::escape_html(::std::convert::AsRef::<str>::as_ref(&$expr))
    };
}
