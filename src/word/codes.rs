//! Single-letter dictionary codes carried in a word's supplemental information.
//!
//! Every code family is a closed alphabet with a sentinel member. Decoding
//! never fails: an empty or unrecognized code becomes the sentinel, and a
//! warning is logged so bad corpus data stays visible without taking the
//! entry down.

/// Declares a closed, string-coded enum with a fallback sentinel.
///
/// The variant identifiers double as the wire codes, so `Age::C` is encoded
/// as `"C"` and `Gender::Neuter` as `"Neuter"`.
macro_rules! coded_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $label:literal, sentinel = $sentinel:ident,
        [$( $(#[$vmeta:meta])* $variant:ident ),+ $(,)?]
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ::serde::Serialize)]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            /// Every member of the alphabet, sentinel included.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The value substituted for missing or unrecognized codes.
            pub const SENTINEL: $name = $name::$sentinel;

            /// Decode a code, falling back to the sentinel for empty and
            /// unknown codes.
            pub fn from_code(code: &str) -> Self {
                match Self::ALL.iter().copied().find(|value| value.as_code() == code) {
                    Some(value) => value,
                    None => {
                        ::log::warn!(
                            "Failed to load {} from code {:?}, using {}",
                            $label,
                            code,
                            Self::SENTINEL
                        );
                        Self::SENTINEL
                    }
                }
            }

            /// The wire code for this value.
            pub fn as_code(&self) -> &'static str {
                match self {
                    $( $name::$variant => stringify!($variant), )+
                }
            }

            /// Whether this is the "unknown / unspecified" member.
            pub fn is_sentinel(&self) -> bool {
                *self == Self::SENTINEL
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::SENTINEL
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_code())
            }
        }
    };
}

pub(crate) use coded_enum;

coded_enum! {
    /// The period in which a word was in use.
    Age, "Age", sentinel = X,
    [
        /// In use throughout the ages, or unknown.
        X,
        /// Archaic: very early forms, obsolete by the classical period.
        A,
        /// Early: beginnings of Latin literature.
        B,
        /// Classical.
        C,
        /// Late: post-classical.
        D,
        /// Later: Medieval and Late Latin.
        E,
        /// Medieval.
        F,
        /// Scholar: Renaissance and later scholarly use.
        G,
        /// Modern: coined recently.
        H,
    ]
}

coded_enum! {
    /// The field of knowledge a word belongs to.
    SubjectArea, "SubjectArea", sentinel = X,
    [X, A, B, D, E, G, L, P, S, T, W, Y]
}

coded_enum! {
    /// The region where a word was used.
    GeographicalArea, "GeographicalArea", sentinel = X,
    [X, A, B, C, D, E, F, G, H, I, J, K, N, P, Q, R, S, U]
}

coded_enum! {
    /// How often a word appears in the literature.
    Frequency, "Frequency", sentinel = X,
    [
        /// Unknown or unspecified.
        X,
        /// Very frequent.
        A,
        /// Frequent.
        B,
        /// Common.
        C,
        /// Lesser.
        D,
        /// Uncommon.
        E,
        /// Very rare.
        F,
        /// Only found in inscriptions.
        I,
        /// Only found in graffiti.
        M,
        /// Only found in Pliny's Natural History.
        N,
    ]
}

coded_enum! {
    /// The dictionary the entry was drawn from.
    Source, "Source", sentinel = X,
    [X, A, B, C, D, E, F, G, H, I, J, K, L, M, N, O, P, Q, R, S, T, U, V, W, Y, Z]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes_decode() {
        assert_eq!(Age::from_code("C"), Age::C);
        assert_eq!(SubjectArea::from_code("W"), SubjectArea::W);
        assert_eq!(GeographicalArea::from_code("U"), GeographicalArea::U);
        assert_eq!(Frequency::from_code("M"), Frequency::M);
        assert_eq!(Source::from_code("Z"), Source::Z);
    }

    #[test]
    fn test_unknown_code_falls_back_to_sentinel() {
        assert_eq!(Age::from_code("Z"), Age::X);
        assert_eq!(SubjectArea::from_code("C"), SubjectArea::X);
        assert_eq!(GeographicalArea::from_code("L"), GeographicalArea::X);
        assert_eq!(Frequency::from_code("G"), Frequency::X);
        assert!(Source::from_code("?").is_sentinel());
    }

    #[test]
    fn test_empty_code_falls_back_to_sentinel() {
        assert!(Age::ALL.iter().all(|age| !age.as_code().is_empty()));
        assert_eq!(Age::from_code(""), Age::X);
        assert_eq!(Source::from_code(""), Source::X);
    }

    #[test]
    fn test_codes_are_case_sensitive() {
        assert_eq!(Age::from_code("c"), Age::X);
        assert_eq!(Frequency::from_code("a"), Frequency::X);
    }

    #[test]
    fn test_alphabet_sizes() {
        assert_eq!(Age::ALL.len(), 9);
        assert_eq!(SubjectArea::ALL.len(), 12);
        assert_eq!(GeographicalArea::ALL.len(), 18);
        assert_eq!(Frequency::ALL.len(), 10);
        assert_eq!(Source::ALL.len(), 26);
    }

    #[test]
    fn test_every_code_decodes_to_itself() {
        for source in Source::ALL {
            assert_eq!(Source::from_code(source.as_code()), *source);
        }
        for area in GeographicalArea::ALL {
            assert_eq!(GeographicalArea::from_code(&area.to_string()), *area);
        }
    }

    #[test]
    fn test_serializes_as_code_string() {
        let value = serde_json::to_value(Frequency::B).unwrap();
        assert_eq!(value, serde_json::json!("B"));
        assert_eq!(Age::default(), Age::X);
    }
}
