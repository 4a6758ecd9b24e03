use std::collections::BTreeMap;

use sanskriti_web::i18n;
use sanskriti_web::routes::Route;
use yew_router::Routable;

#[test]
fn i18n_bundle_switches_and_substitutes() {
    i18n::set_lang("en");
    assert_eq!(i18n::current_lang(), "en");
    assert!(!i18n::is_rtl());

    let mut vars = BTreeMap::new();
    vars.insert("coins", "10");
    assert_eq!(i18n::tr("quiz.earned", Some(&vars)), "+10 Culture Coins earned!");
    assert_eq!(i18n::t("missing.key"), "missing.key");
}

#[test]
fn i18n_covers_all_three_locales() {
    for meta in i18n::locales() {
        i18n::set_lang(meta.code);
        assert_eq!(i18n::current_lang(), meta.code);
        let title = i18n::t("souvenir.studio");
        assert_ne!(title, "souvenir.studio", "missing key in {}", meta.code);
    }
    i18n::set_lang("en");
}

#[test]
fn unknown_locale_keeps_the_previous_bundle() {
    i18n::set_lang("en");
    i18n::set_lang("fr");
    assert_eq!(i18n::current_lang(), "en");
}

#[test]
fn locale_metadata_lists_the_narration_languages() {
    let metas = i18n::locales();
    assert_eq!(metas.len(), 3);
    assert!(metas.iter().any(|m| m.code == "hi"));
    assert!(metas.iter().any(|m| m.code == "or"));
}

#[test]
fn routes_map_to_expected_paths() {
    assert_eq!(Route::Home.to_path(), "/");
    assert_eq!(Route::NotFound.to_path(), "/404");
    assert_eq!(Route::recognize("/"), Some(Route::Home));
}
