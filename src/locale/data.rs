use crate::locale::LocalePair;

use paste::paste;
use phf::{Map, phf_map};

/// ---------------------------------------------------------------------------
///    Macro – generates the registry from a single table
/// ---------------------------------------------------------------------------
macro_rules! define_locales {
    ($(
        $key:ident, $key_str:literal,
        map: [ $($from:literal => $to:literal),* $(,)? ]
    ),* $(,)?) => {
        // Per-locale static data modules
        $(
            paste! {
                mod [<$key _data>] {
                    use super::LocalePair;

                    pub static MAP: &[LocalePair] = &[
                        $(($from, $to)),*
                    ];
                }
            }
        )*

        // Global lookup table (public)
        paste! {
            /// Built-in locale registry: locale key to replacement pairs.
            pub static LOCALE_TABLE: Map<&'static str, &'static [LocalePair]> = phf_map! {
                $(
                    $key_str => [<$key _data>]::MAP
                ),*
            };
        }

        static SUPPORTED: &[&str] = &[$($key_str),*];

        /// Locale keys with a built-in table, in registry order.
        pub fn supported_locales() -> &'static [&'static str] {
            SUPPORTED
        }
    };
}

// ---------------------------------------------------------------------------
//    Locale definitions (single source of truth)
//    Each entry folds the letters a locale spells distinctly; anything not
//    listed falls through to the generic NFD diacritic strip. "en" is
//    intentionally empty and exercises the never-matching sentinel path.
// ---------------------------------------------------------------------------
define_locales! {
    de, "de",
        map: [
            'Ä' => "a", 'ä' => "a",
            'Ö' => "o", 'ö' => "o",
            'Ü' => "u", 'ü' => "u",
            'ß' => "ss",
        ],

    fr, "fr",
        map: [
            'À' => "a", 'Á' => "a", 'Â' => "a", 'Ã' => "a", 'Ä' => "a", 'Å' => "a",
            'à' => "a", 'á' => "a", 'â' => "a", 'ã' => "a", 'ä' => "a", 'å' => "a",
            'Ç' => "c", 'ç' => "c",
            'È' => "e", 'É' => "e", 'Ê' => "e", 'Ë' => "e",
            'è' => "e", 'é' => "e", 'ê' => "e", 'ë' => "e",
            'Œ' => "oe", 'œ' => "oe",
        ],

    es, "es",
        map: [
            'Ñ' => "n", 'ñ' => "n",
        ],

    tr, "tr",
        map: [
            'İ' => "i", 'I' => "i", 'ı' => "i",
            'Ş' => "s", 'ş' => "s",
            'Ğ' => "g", 'ğ' => "g",
            'Ö' => "o", 'ö' => "o",
            'Ü' => "u", 'ü' => "u",
            'Ç' => "c", 'ç' => "c",
        ],

    pl, "pl",
        map: [
            'Ł' => "l", 'ł' => "l",
            'Ś' => "s", 'ś' => "s",
            'Ż' => "z", 'ż' => "z",
        ],

    en, "en",
        map: [],
}
