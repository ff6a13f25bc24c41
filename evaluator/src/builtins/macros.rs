/// A list of [`Member::Method`](crate::builtins::Member::Method) entries.
macro_rules! methods {
    () => {
        Vec::<$crate::builtins::Member>::new()
    };
    ($($name:literal),+ $(,)?) => {
        vec![$($crate::builtins::Member::Method($name)),+]
    };
}

/// A `Vec<Member>` of data properties: `data![("E", Prim::Number(2.7)), ...]`.
macro_rules! data {
    ($(($name:literal, $prim:expr)),+ $(,)?) => {
        vec![$($crate::builtins::Member::Data($name, $prim)),+]
    };
}
