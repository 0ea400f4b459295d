//! `define_port_error!`: declares a driven-port error enum with a
//! snake_case constructor per variant.

macro_rules! define_port_error {
    (@ctor $variant:ident) => {
        ::paste::paste! {
            #[doc = concat!("Build [`Self::", stringify!($variant), "`].")]
            #[must_use]
            pub const fn [<$variant:snake>]() -> Self {
                Self::$variant
            }
        }
    };

    (@ctor $variant:ident { $($field:ident : $ty:ty),* $(,)? }) => {
        define_port_error!(@ctor_impl $variant () () $( $field : $ty, )*);
    };

    (@ctor_impl $variant:ident ($($params:tt)*) ($($inits:tt)*) ) => {
        ::paste::paste! {
            #[doc = concat!("Build [`Self::", stringify!($variant), "`].")]
            #[must_use]
            pub fn [<$variant:snake>]($($params)*) -> Self {
                Self::$variant { $($inits)* }
            }
        }
    };

    (@ctor_impl $variant:ident ($($params:tt)*) ($($inits:tt)*) $field:ident : $ty:ty, $($rest:tt)*) => {
        define_port_error!(
            @ctor_impl
            $variant
            ($($params)* $field: impl Into<$ty>,)
            ($($inits)* $field: $field.into(),)
            $($rest)*
        );
    };
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $( { $($field:ident : $ty:ty),* $(,)? } )? => $message:expr
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant $( { $(
                    #[doc = concat!("`", stringify!($field), "` reported by the adapter.")]
                    $field : $ty
                ),* } )?,
            )*
        }

        impl $name {
            $(
                define_port_error!(@ctor $variant $( { $($field : $ty),* } )?);
            )*
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    define_port_error! {
        pub enum StorePortError {
            Connection { message: String } => "store connection failed: {message}",
            Conflict => "store already holds this key",
            Timeout { message: String, millis: u64 } => "store timed out: {message} after {millis}ms",
        }
    }

    #[test]
    fn constructors_accept_str_for_string_fields() {
        let err = StorePortError::connection("refused");
        assert_eq!(err.to_string(), "store connection failed: refused");
    }

    #[test]
    fn unit_variants_get_nullary_constructors() {
        assert_eq!(StorePortError::conflict(), StorePortError::Conflict);
        assert_eq!(
            StorePortError::conflict().to_string(),
            "store already holds this key"
        );
    }

    #[test]
    fn constructors_support_mixed_fields() {
        let err = StorePortError::timeout("checkout", 250_u64);
        assert_eq!(err.to_string(), "store timed out: checkout after 250ms");
    }
}
