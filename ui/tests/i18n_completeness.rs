use std::collections::{BTreeSet, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the canonical FTL file per locale.
const FTL_FILENAME: &str = "chanmr-ui.ftl";

/// Root (relative to crate) for i18n assets.
const I18N_DIR: &str = "i18n";

const LOCALES: &[&str] = &["en-US", "th-TH"];

/// Extract message IDs from a Fluent file. Any unindented line of the form
/// `<identifier> =` counts as a message definition.
fn parse_ftl_keys(content: &str) -> BTreeSet<String> {
    let mut keys = BTreeSet::new();
    for line in content.lines() {
        if line.starts_with(' ') {
            continue;
        }
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('-') {
            continue;
        }
        if let Some(eq_pos) = line.find('=') {
            let id = line[..eq_pos].trim();
            if !id.is_empty() && id.chars().all(valid_key_char) {
                keys.insert(id.to_string());
            }
        }
    }
    keys
}

fn valid_key_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '-')
}

/// Pull the literal id out of every `t!(<lang>, "<id>" ...)` call in a source
/// file. The language argument may be any expression without commas or
/// quotes, which covers `lang`, `Language::Th` and `lang.toggle()`.
fn keys_in_source(content: &str) -> Vec<String> {
    let mut found = Vec::new();
    let mut rest = content;
    while let Some(pos) = rest.find("t!(") {
        // `assert!(`, `fmt!(` and friends also end in `t!(`.
        let part_of_ident = rest[..pos]
            .chars()
            .next_back()
            .is_some_and(|c| c.is_alphanumeric() || c == '_');
        rest = &rest[pos + 3..];
        if part_of_ident {
            continue;
        }
        let Some(quote) = rest.find('"') else {
            break;
        };
        let lang_arg = &rest[..quote];
        if lang_arg.contains(';')
            || lang_arg.matches(',').count() != 1
            || !lang_arg.trim_end().ends_with(',')
        {
            continue;
        }
        let after = &rest[quote + 1..];
        if let Some(end) = after.find('"') {
            let key = &after[..end];
            if !key.is_empty() && key.chars().all(valid_key_char) {
                found.push(key.to_string());
            }
        }
    }
    found
}

fn extract_translation_keys_from_source(src_root: &Path) -> HashSet<String> {
    let mut found = HashSet::new();
    let mut stack = vec![src_root.to_path_buf()];

    while let Some(path) = stack.pop() {
        if path.is_dir() {
            if let Ok(read_dir) = fs::read_dir(&path) {
                stack.extend(read_dir.flatten().map(|entry| entry.path()));
            }
            continue;
        }
        if path.extension().and_then(|s| s.to_str()) != Some("rs") {
            continue;
        }
        let Ok(content) = fs::read_to_string(&path) else {
            continue;
        };
        found.extend(keys_in_source(&content));
    }

    found
}

#[test]
fn scanner_reads_both_call_shapes() {
    let src = r#"
        rsx! { p { {t!(lang, "hero-cta")} } }
        let line = t!(
            lang,
            "footer-copyright",
            year = year.to_string()
        );
        assert_eq!(t!(Language::Th, "nav-jobs"), "x");
    "#;
    let keys = keys_in_source(src);
    assert_eq!(keys, vec!["hero-cta", "footer-copyright", "nav-jobs"]);
}

#[test]
fn i18n_completeness() {
    let crate_root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let i18n_root = crate_root.join(I18N_DIR);

    let fallback_file = i18n_root.join("en-US").join(FTL_FILENAME);
    let fallback_content =
        fs::read_to_string(&fallback_file).expect("Failed to read fallback FTL file");
    let fallback_keys = parse_ftl_keys(&fallback_content);
    assert!(
        !fallback_keys.is_empty(),
        "No message keys parsed from fallback FTL: {:?}",
        fallback_file
    );

    let referenced_keys = extract_translation_keys_from_source(&crate_root.join("src"));
    assert!(
        referenced_keys.len() > 20,
        "Suspiciously few t! calls found ({}); did the scanner break?",
        referenced_keys.len()
    );

    for locale in LOCALES {
        let path = i18n_root.join(locale).join(FTL_FILENAME);
        let content = fs::read_to_string(&path)
            .unwrap_or_else(|err| panic!("Failed to read {path:?}: {err}"));
        let keys = parse_ftl_keys(&content);

        let mut missing: Vec<_> = referenced_keys.iter().filter(|k| !keys.contains(*k)).collect();
        missing.sort();
        assert!(
            missing.is_empty(),
            "Referenced translation keys missing in {locale} ({}):\n{}",
            missing.len(),
            missing.iter().map(|k| k.as_str()).collect::<Vec<_>>().join("\n")
        );
    }

    let unused: Vec<_> = fallback_keys
        .iter()
        .filter(|k| !referenced_keys.contains(*k))
        .cloned()
        .collect();
    if !unused.is_empty() {
        eprintln!(
            "[i18n] NOTE: {} fallback keys unused in Rust sources: {}",
            unused.len(),
            unused.join(", ")
        );
    }
}
