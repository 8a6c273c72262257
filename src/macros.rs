#[macro_export]
macro_rules! regex {
    ($pat:literal) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).unwrap());
        &*RE
    }};
}

#[macro_export]
macro_rules! method {
    (
        name: $name:expr
        $(, splitter: [ $($tok:expr),* $(,)? ])?
        $(, simple: |$senv:ident| -> $sret:ty $sbody:block)?
        $(, complex: |$cenv:ident, $cargs:ident| -> $cret:ty $cbody:block)?
        $(,)?
    ) => {{
        $crate::Method::named($name)
            $(.splitter(&[ $($tok),* ]))?
            $(.simple(move |$senv: &mut $crate::Environment| -> $sret { $sbody }))?
            $(.complex(move |$cenv: &mut $crate::Environment, $cargs: &[String]| -> $cret { $cbody }))?
            .build()
    }};
}
