//! [`Kind`] enumerations of fixed tokens.

use std::fmt;

use derive_more::{Display, Error};

/// Closed enumeration whose every variant is spelled by a unique lowercase
/// token.
///
/// Implemented by the [`define_kind!`] macro.
///
/// [`define_kind!`]: crate::define_kind
pub trait Kind: Copy + Eq + fmt::Debug + Display + 'static {
    /// Human-readable name of this [`Kind`], used in diagnostics.
    const NAME: &'static str;

    /// All the variants of this [`Kind`] in declaration order.
    const ALL: &'static [Self];

    /// Tokens of [`Kind::ALL`] variants, in the same order.
    const TOKENS: &'static [&'static str];

    /// Returns the token spelling this variant.
    fn token(self) -> &'static str;

    /// Parses the provided `input` as a variant of this [`Kind`].
    ///
    /// Matching is ASCII case-insensitive and ignores surrounding whitespace.
    ///
    /// # Errors
    ///
    /// With [`ParseKindError`] if `input` spells none of [`Kind::TOKENS`].
    fn from_token(input: &str) -> Result<Self, ParseKindError> {
        let normalized = input.trim().to_ascii_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|k| k.token() == normalized)
            .ok_or_else(|| ParseKindError {
                kind: Self::NAME,
                value: input.to_owned(),
            })
    }
}

/// Error of parsing a [`Kind`] from a token.
#[derive(Clone, Debug, Display, Error, Eq, PartialEq)]
#[display("`{value}` is not a valid `{kind}`")]
pub struct ParseKindError {
    /// [`Kind::NAME`] of the expected [`Kind`].
    pub kind: &'static str,

    /// Rejected input.
    pub value: String,
}

/// Macro for defining a [`Kind`] enum.
///
/// The calling crate must depend on [`strum`] with the `derive` feature.
///
/// # Example
///
/// ```rust
/// use common::{define_kind, Kind as _};
///
/// define_kind! {
///     #[doc = "Shape kind."]
///     enum Shape {
///         #[doc = "A cube."]
///         Cube = "cube",
///
///         #[doc = "A sphere."]
///         Sphere = "sphere",
///     }
/// }
///
/// assert_eq!(Shape::from_token(" CUBE "), Ok(Shape::Cube));
/// assert_eq!(Shape::Sphere.to_string(), "sphere");
/// ```
#[macro_export]
macro_rules! define_kind {
    (
        #[doc = $doc:literal]
        enum $name:ident {
            $(
                #[doc = $variant_doc:literal]
                $variant:ident = $token:literal
            ),* $(,)?
        }
    ) => {
        #[derive(
            Clone,
            Copy,
            Debug,
            $crate::private::strum::Display,
            Eq,
            Hash,
            $crate::private::strum::IntoStaticStr,
            PartialEq,
            $crate::private::strum::VariantArray,
            $crate::private::strum::VariantNames,
        )]
        #[doc = $doc]
        pub enum $name {
            $(
                #[doc = $variant_doc]
                #[strum(serialize = $token)]
                $variant,
            )*
        }

        impl $crate::Kind for $name {
            const NAME: &'static str = ::core::stringify!($name);
            const ALL: &'static [Self] =
                <Self as $crate::private::strum::VariantArray>::VARIANTS;
            const TOKENS: &'static [&'static str] =
                <Self as $crate::private::strum::VariantNames>::VARIANTS;

            fn token(self) -> &'static str {
                self.into()
            }
        }

        impl ::core::str::FromStr for $name {
            type Err = $crate::ParseKindError;

            fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
                <Self as $crate::Kind>::from_token(s)
            }
        }
    };
}
