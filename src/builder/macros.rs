//! Macros for ergonomic state declaration.

/// Declare a fieldless enum and implement [`State`](crate::core::State) for it.
///
/// `COUNT` is the number of variants, `index` follows declaration order and
/// `name` is the variant identifier. The enum also derives `serde`'s
/// `Serialize` and `Deserialize` through the copy of `serde` re-exported by
/// this crate, so callers do not need their own `serde` dependency.
///
/// # Example
///
/// ```
/// use waypoint::core::State;
/// use waypoint::state_enum;
///
/// state_enum! {
///     pub enum Handshake {
///         Hello,
///         KeyExchange,
///         Established,
///     }
/// }
///
/// assert_eq!(Handshake::COUNT, 3);
/// assert_eq!(Handshake::KeyExchange.index(), 1);
/// assert_eq!(Handshake::Established.name(), "Established");
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            Debug,
            $crate::serde::Serialize,
            $crate::serde::Deserialize,
        )]
        #[serde(crate = "waypoint::serde")]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),+
        }

        impl $crate::core::State for $name {
            const COUNT: usize = [$(stringify!($variant)),+].len();

            fn index(&self) -> usize {
                *self as usize
            }

            fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant)),+
                }
            }
        }
    };
}
