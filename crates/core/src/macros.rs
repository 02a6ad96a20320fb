//! Declaration macro for typed enums.

/// Declares a typed enum backed by a primitive integer.
///
/// The type is a transparent newtype, so values outside the member table remain
/// representable (they come out of casts and parses under `Allow`). Each member becomes
/// an associated constant; an optional `=> "text"` attaches a description.
///
/// `flags` declares a bitflag type and adds `|`, `&` and `!`; `enum` declares a plain one.
///
/// # Examples
///
/// ```
/// use bitenum_core::{declare_enum, EnumType, InvalidValuePolicy};
///
/// declare_enum! {
///     /// File permissions.
///     pub flags Access: u8 {
///         None = 0,
///         Read = 1 => "May read",
///         Write = 2,
///         ReadWrite = 3,
///     }
/// }
///
/// assert!((Access::Read | Access::Write).is_valid());
/// assert_eq!(Access::parse("Read, Write").unwrap(), Access::ReadWrite);
/// assert_eq!(Access::Read.text().unwrap(), "May read");
/// assert!(Access::cast(8u8, InvalidValuePolicy::Disallow).is_err());
/// ```
#[macro_export]
macro_rules! declare_enum {
    (
        $( #[$attrs:meta] )*
        $v:vis flags $name:ident: $native:ty {
            $(
                $( #[$variant_attrs:meta] )*
                $variant:ident = $value:expr $( => $desc:literal )?
            ),+
            $(,)?
        }
    ) => {
        $crate::declare_enum! {
            @declare true;
            $( #[$attrs] )*
            $v $name: $native {
                $( $( #[$variant_attrs] )* $variant = $value $( => $desc )? ),+
            }
        }

        impl ::std::ops::BitOr for $name {
            type Output = Self;

            fn bitor(self, rhs: Self) -> Self {
                Self(self.0 | rhs.0)
            }
        }

        impl ::std::ops::BitOrAssign for $name {
            fn bitor_assign(&mut self, rhs: Self) {
                self.0 |= rhs.0;
            }
        }

        impl ::std::ops::BitAnd for $name {
            type Output = Self;

            fn bitand(self, rhs: Self) -> Self {
                Self(self.0 & rhs.0)
            }
        }

        impl ::std::ops::Not for $name {
            type Output = Self;

            fn not(self) -> Self {
                Self(!self.0)
            }
        }
    };

    (
        $( #[$attrs:meta] )*
        $v:vis enum $name:ident: $native:ty {
            $(
                $( #[$variant_attrs:meta] )*
                $variant:ident = $value:expr $( => $desc:literal )?
            ),+
            $(,)?
        }
    ) => {
        $crate::declare_enum! {
            @declare false;
            $( #[$attrs] )*
            $v $name: $native {
                $( $( #[$variant_attrs] )* $variant = $value $( => $desc )? ),+
            }
        }
    };

    (
        @declare $flags:literal;
        $( #[$attrs:meta] )*
        $v:vis $name:ident: $native:ty {
            $(
                $( #[$variant_attrs:meta] )*
                $variant:ident = $value:expr $( => $desc:literal )?
            ),+
        }
    ) => {
        $( #[$attrs] )*
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[repr(transparent)]
        $v struct $name(pub $native);

        #[allow(non_upper_case_globals)]
        impl $name {
            $(
                $( #[$variant_attrs] )*
                $v const $variant: Self = Self($value);
            )+
        }

        impl $crate::EnumType for $name {
            type Native = $native;

            fn descriptor() -> &'static $crate::EnumDescriptor {
                static DESCRIPTOR: ::std::sync::LazyLock<$crate::EnumDescriptor> =
                    ::std::sync::LazyLock::new(|| {
                        $crate::descriptor::NativeBuilder::<$native>::new(stringify!($name))
                            .flags($flags)
                            $(
                                .member(
                                    stringify!($variant),
                                    $name::$variant.0,
                                    None::<&str> $( .or(Some($desc)) )?,
                                )
                            )+
                            .build()
                    });
                &DESCRIPTOR
            }

            fn to_native(self) -> $native {
                self.0
            }

            fn from_native(native: $native) -> Self {
                Self(native)
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                let descriptor = <Self as $crate::EnumType>::descriptor();
                f.write_str(&descriptor.format_unchecked(
                    $crate::EnumType::to_value(*self),
                    $crate::FormatSpec::General,
                ))
            }
        }
    };
}
