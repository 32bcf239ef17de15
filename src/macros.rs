/// Generates `Option<&str>` accessors for a set of `Option<String>` fields.
macro_rules! string_getter {
    ($($field:ident),* $(,)?) => {
        $(
            #[must_use]
            #[inline]
            pub fn $field(&self) -> Option<&str> {
                self.$field.as_deref()
            }
        )*
    };
}

pub(crate) use string_getter;
