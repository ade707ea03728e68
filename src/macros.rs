// src/macros.rs

/// Owned `String` from anything `String: From` takes (`&str`, `char`, `String`).
/// `s!()` is the empty string.
#[macro_export]
macro_rules! s {
    () => {
        ::std::string::String::new()
    };
    ($value:expr) => {
        ::std::string::String::from($value)
    };
}

/// Glue string slices into one new `String`, left to right:
/// `join!("http://", HOST, path)`.
#[macro_export]
macro_rules! join {
    ($head:expr $(, $tail:expr)+ $(,)?) => {{
        let mut joined = ::std::string::String::from($head);
        $( joined.push_str($tail); )+
        joined
    }};
}
