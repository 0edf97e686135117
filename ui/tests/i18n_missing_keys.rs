use std::collections::{BTreeMap, BTreeSet};

/// Locale completeness: every locale defines the same message IDs as the
/// fallback (en-US) `launchdash-ui.ftl`, with the same `{ $variable }`
/// placeholders, and no ID twice.
///
/// To add a locale, create `ui/i18n/<locale>/launchdash-ui.ftl`, copy every
/// key from en-US, translate, and register the file below.
const EN_US: &str = include_str!("../i18n/en-US/launchdash-ui.ftl");
const ES_ES: &str = include_str!("../i18n/es-ES/launchdash-ui.ftl");

const LOCALES: &[(&str, &str)] = &[("es-ES", ES_ES)];

/// Message ID to the set of variables its pattern references.
fn messages(locale: &str, src: &str) -> BTreeMap<String, BTreeSet<String>> {
    let mut out = BTreeMap::new();
    for line in src.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('.') {
            continue;
        }
        let Some((id, pattern)) = line.split_once('=') else {
            continue;
        };
        let id = id.trim();
        if id.is_empty() || id.contains(char::is_whitespace) {
            continue;
        }
        let previous = out.insert(id.to_string(), variables(pattern));
        assert!(previous.is_none(), "{locale}: duplicate key {id}");
    }
    out
}

fn variables(pattern: &str) -> BTreeSet<String> {
    pattern
        .split('$')
        .skip(1)
        .filter_map(|tail| {
            let name: String = tail
                .chars()
                .take_while(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
                .collect();
            (!name.is_empty()).then_some(name)
        })
        .collect()
}

#[test]
fn all_locales_match_the_fallback() {
    let fallback = messages("en-US", EN_US);
    assert!(!fallback.is_empty(), "Fallback (en-US) contains no keys.");

    let mut failures = Vec::new();
    for (locale, src) in LOCALES {
        let translated = messages(locale, src);

        for (id, vars) in &fallback {
            match translated.get(id) {
                None => failures.push(format!("{locale}: missing {id}")),
                Some(found) if found != vars => failures.push(format!(
                    "{locale}: {id} uses {found:?}, fallback uses {vars:?}"
                )),
                Some(_) => {}
            }
        }
        for id in translated.keys().filter(|id| !fallback.contains_key(*id)) {
            failures.push(format!("{locale}: {id} is not in the fallback"));
        }
    }

    assert!(
        failures.is_empty(),
        "Translation check failed:\n  {}\n\nHint: copy the missing keys from en-US, then translate.",
        failures.join("\n  ")
    );
}

#[test]
fn placeholders_are_parsed() {
    let parsed = messages("test", "payload-observed = Observed payloads: { $min }–{ $max } kg\n");
    let vars: Vec<_> = parsed["payload-observed"].iter().cloned().collect();
    assert_eq!(vars, ["max", "min"]);
}
