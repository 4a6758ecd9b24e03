use serde_json::Value;
use std::cell::RefCell;
use std::collections::BTreeMap;

/// Metadata for one supported narration locale.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct LocaleMeta {
    pub code: &'static str,
    pub name: &'static str,
    pub rtl: bool,
}

const LOCALE_META: &[LocaleMeta] = &[
    LocaleMeta {
        code: "en",
        name: "English",
        rtl: false,
    },
    LocaleMeta {
        code: "hi",
        name: "हिन्दी",
        rtl: false,
    },
    LocaleMeta {
        code: "or",
        name: "ଓଡ଼ିଆ",
        rtl: false,
    },
];

const LOCALE_TABLE: &[(&str, &str)] = &[
    ("en", include_str!("../i18n/en.json")),
    ("hi", include_str!("../i18n/hi.json")),
    ("or", include_str!("../i18n/or.json")),
];

pub struct I18nBundle {
    pub lang: String,
    pub rtl: bool,
    translations: Value,
    fallback: Value,
}

fn load_translations(lang: &str) -> Option<Value> {
    let bundle = LOCALE_TABLE
        .iter()
        .find_map(|(code, data)| (*code == lang).then_some(*data))
        .unwrap_or(LOCALE_TABLE[0].1);

    serde_json::from_str(bundle).ok()
}

fn build_bundle(lang: &str) -> Option<I18nBundle> {
    let rtl = LOCALE_META.iter().any(|m| m.code == lang && m.rtl);

    let fallback = load_translations("en")?;
    let translations = load_translations(lang)?;

    Some(I18nBundle {
        lang: lang.to_string(),
        rtl,
        translations,
        fallback,
    })
}

/// Supported locales with their native names and direction metadata.
#[must_use]
pub const fn locales() -> &'static [LocaleMeta] {
    LOCALE_META
}

fn fallback_bundle() -> I18nBundle {
    let fallback = load_translations("en").unwrap_or(Value::Object(serde_json::Map::new()));

    I18nBundle {
        lang: "en".to_string(),
        rtl: false,
        translations: fallback.clone(),
        fallback,
    }
}

fn saved_lang() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|win| win.local_storage().ok().flatten())
            .and_then(|storage| storage.get_item("sanskriti.locale").ok().flatten())
            .unwrap_or_else(|| "en".to_string())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        "en".to_string()
    }
}

thread_local! {
    static CURRENT: RefCell<I18nBundle> = RefCell::new({
        let initial = saved_lang();
        build_bundle(&initial).unwrap_or_else(|| build_bundle("en").unwrap_or_else(fallback_bundle))
    });
}

/// Set the current narration language.
///
/// Changes the active bundle, updates the DOM lang/dir attributes, and
/// persists the choice to `localStorage` for future sessions.
pub fn set_lang(lang: &str) {
    if !LOCALE_META.iter().any(|m| m.code == lang) {
        return;
    }
    if let Some(bundle) = build_bundle(lang) {
        CURRENT.with(|cell| cell.replace(bundle));
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
                if let Some(el) = doc.document_element() {
                    CURRENT.with(|cell| {
                        let read = cell.borrow();
                        let _ = el.set_attribute("lang", &read.lang);
                        let _ = el.set_attribute("dir", if read.rtl { "rtl" } else { "ltr" });
                    });
                }
            }
            if let Some(storage) =
                web_sys::window().and_then(|win| win.local_storage().ok().flatten())
            {
                let _ = storage.set_item("sanskriti.locale", lang);
            }
        }
    }
}

/// Get the current active language code.
#[must_use]
pub fn current_lang() -> String {
    CURRENT.with(|c| c.borrow().lang.clone())
}

/// Check if the current language uses right-to-left text direction.
#[must_use]
pub fn is_rtl() -> bool {
    CURRENT.with(|c| c.borrow().rtl)
}

fn get_nested_value<'a>(obj: &'a Value, key: &str) -> Option<&'a Value> {
    let mut current = obj;
    for part in key.split('.') {
        current = current.get(part)?;
    }
    Some(current)
}

fn render_value(value: &Value, args: Option<&BTreeMap<&str, &str>>) -> Option<String> {
    let mut text = value.as_str()?.to_string();

    if let Some(args_map) = args {
        for (k, v) in args_map {
            let ph1 = format!("{{{{{k}}}}}"); // {{var}}
            let ph2 = format!("{{{k}}}"); // {var}
            text = text.replace(&ph1, v);
            text = text.replace(&ph2, v);
        }
    }
    Some(text)
}

fn resolve(key: &str, args: Option<&BTreeMap<&str, &str>>) -> Option<String> {
    CURRENT.with(|cell| {
        let bundle = cell.borrow();
        get_nested_value(&bundle.translations, key)
            .and_then(|v| render_value(v, args))
            .or_else(|| get_nested_value(&bundle.fallback, key).and_then(|v| render_value(v, args)))
    })
}

/// Translate a key to the current language.
///
/// Falls back to English when the key is missing from the current language,
/// and echoes the key itself when it is missing everywhere.
#[must_use]
pub fn t(key: &str) -> String {
    tr(key, None)
}

/// Translate a key with variable substitution.
///
/// Variables in the translated string use the format `{key}` or `{{key}}`.
#[must_use]
pub fn tr(key: &str, args: Option<&BTreeMap<&str, &str>>) -> String {
    resolve(key, args).unwrap_or_else(|| key.to_string())
}
