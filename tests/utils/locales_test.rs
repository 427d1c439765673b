use prompt_relay::locales::LocaleError;
use prompt_relay::Locales;

#[test]
fn test_nested_keys_are_flattened() {
    let locales = Locales::load("locales", "en").unwrap();
    assert_eq!(locales.default_locale(), "en");
    assert_eq!(locales.t("console.busy"), "Generating...");
    assert_eq!(locales.translate("zh-CN", "console.submit").unwrap(), "生成");
}

#[test]
fn test_unknown_key_renders_as_itself() {
    let locales = Locales::load("locales", "en").unwrap();
    assert_eq!(locales.t("console.nope"), "console.nope");
    assert!(matches!(
        locales.translate("en", "console.nope"),
        Err(LocaleError::KeyNotFound(_))
    ));
}

#[test]
fn test_unknown_default_locale_is_rejected() {
    let err = Locales::load("locales", "fr").err().unwrap();
    assert!(matches!(err, LocaleError::LocaleNotFound(locale) if locale == "fr"));
}

#[test]
fn test_missing_directory_fails_to_load() {
    assert!(matches!(Locales::new("no-such-locales-dir"), Err(LocaleError::LoadError(_))));
}
