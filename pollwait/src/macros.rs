macro_rules! nullable_default_check {
    ($($t:ty),* $(,)?) => {
        $(
            impl<T> crate::TDefaultCheck for $t {
                fn default_check() -> crate::DefaultCheck<Self> {
                    crate::DefaultCheck::nullable()
                }
            }
        )*
    };
}

macro_rules! zeroed_default_check {
    ($($t:ty),* $(,)?) => {
        $(
            impl crate::TDefaultCheck for $t {
                fn default_check() -> crate::DefaultCheck<Self> {
                    crate::DefaultCheck::zeroed(<$t as ::std::default::Default>::default())
                }
            }
        )*
    };
}
