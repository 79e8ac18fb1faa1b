#[cfg(test)]
mod integration_tests {

    use crate::{Options, Slugen, slugify};

    fn slug(input: &str) -> String {
        slugify(input, &Options::default()).unwrap()
    }

    #[test]
    fn basic_slug() {
        assert_eq!(slug("Hello World"), "hello-world");
    }

    #[test]
    fn whitespace_is_normalized() {
        assert_eq!(slug("   Hello     World   "), "hello-world");
    }

    #[test]
    fn lowercases_by_default() {
        assert_eq!(slug("HELLO World"), "hello-world");
    }

    #[test]
    fn empty_input_is_terminal() {
        assert_eq!(slug(""), "");
    }

    #[test]
    fn dot_separator() {
        let options = Options::new().separator(".");
        assert_eq!(slugify("Hello World", &options).unwrap(), "hello.world");
    }

    #[test]
    fn underscore_separator() {
        let options = Options::new().separator("_");
        assert_eq!(slugify("Hello World", &options).unwrap(), "hello_world");
    }

    #[test]
    fn replaces_common_symbols() {
        assert_eq!(slug("foo & bar"), "foo-and-bar");
        assert_eq!(slug("A | B"), "a-or-b");
        assert_eq!(slug("@user #tag **bold**"), "at-user-tag-bold");
        assert_eq!(slug("email@test.com"), "email-at-test-com");
    }

    #[test]
    fn currency_symbols() {
        assert_eq!(slug("100$"), "100-dollar");
        assert_eq!(slug("50€"), "50-euro");
        assert_eq!(slug("20₺"), "20-lira");
    }

    #[test]
    fn punctuation_and_emoji_are_removed() {
        assert_eq!(slug("Hello!!! 😄 World???"), "hello-world");
    }

    #[test]
    fn symbols_can_be_disabled() {
        let options = Options::new().symbols(false);
        assert_eq!(slugify("foo & bar", &options).unwrap(), "foo-bar");
    }

    #[test]
    fn turkish_locale() {
        let options = Options::new().locale("tr");
        assert_eq!(
            slugify("İstanbul Boğazı", &options).unwrap(),
            "istanbul-bogazi"
        );
    }

    #[test]
    fn german_locale() {
        let options = Options::new().locale("de");
        assert_eq!(slugify("Straße Größe", &options).unwrap(), "strasse-grosse");
    }

    #[test]
    fn french_locale() {
        let options = Options::new().locale("fr");
        assert_eq!(
            slugify("Crème brûlée déjà", &options).unwrap(),
            "creme-brulee-deja"
        );
    }

    #[test]
    fn spanish_locale() {
        let options = Options::new().locale("es");
        assert_eq!(
            slugify("Español niño año", &options).unwrap(),
            "espanol-nino-ano"
        );
    }

    #[test]
    fn merged_locales() {
        let options = Options::new().locales(["tr", "de", "es"]);
        assert_eq!(
            slugify("İstanbul Straße Español", &options).unwrap(),
            "istanbul-strasse-espanol"
        );
    }

    #[test]
    fn accents_fold_without_any_locale() {
        // NFD fallback handles what no locale map covered.
        assert_eq!(slug("Crème brûlée déjà"), "creme-brulee-deja");
        assert_eq!(slug("Señor"), "senor");
    }

    #[test]
    fn unknown_locale_keys_are_ignored() {
        let options = Options::new().locales(["xx", "tr"]);
        assert_eq!(slugify("Boğaz", &options).unwrap(), "bogaz");
        let only_unknown = Options::new().locale("nope");
        assert_eq!(slugify("Hello World", &only_unknown).unwrap(), "hello-world");
    }

    #[test]
    fn custom_replacements_override_builtins() {
        let options = Options::new().replacement('&', "ve");
        assert_eq!(slugify("foo & bar", &options).unwrap(), "foo-ve-bar");
    }

    #[test]
    fn lowercase_can_be_disabled() {
        let options = Options::new().lowercase(false);
        assert_eq!(slugify("Hello World", &options).unwrap(), "Hello-World");
    }

    #[test]
    fn metacharacter_separator_with_boundary_noise() {
        let options = Options::new().separator("+");
        assert_eq!(
            slugify("...Hello World...", &options).unwrap(),
            "hello+world"
        );
    }

    #[test]
    fn idempotent_under_defaults() {
        for input in ["Hello World", "foo & bar", "100$", "Crème brûlée"] {
            let once = slug(input);
            assert_eq!(slug(&once), once);
        }
    }

    #[test]
    fn engine_reuse_matches_free_function() {
        let engine = Slugen::new();
        let options = Options::new().locales(["tr", "de"]);
        let input = "İstanbul Straße";
        let expected = slugify(input, &options).unwrap();
        // Second call hits the engine's warm cache.
        assert_eq!(engine.slugify(input, &options).unwrap(), expected);
        assert_eq!(engine.slugify(input, &options).unwrap(), expected);
    }

    #[test]
    fn untransliterated_scripts_collapse_away() {
        assert_eq!(slug("漢字 kanji 漢字"), "kanji");
        assert_eq!(slug("مرحبا hello"), "hello");
    }

    #[test]
    fn digits_survive_everything() {
        assert_eq!(slug("Top 10 lists, 2024 edition!"), "top-10-lists-2024-edition");
    }
}
