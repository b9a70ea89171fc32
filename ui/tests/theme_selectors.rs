#![cfg(test)]
/*!
Stylesheet lint for the landing page.

Purpose:
- Ensure the class names the Rust components emit keep a matching rule in
  `assets/theme/main.css` or `assets/styling/navbar.css`.
- Fail fast if a refactor accidentally drops or renames a selector, which
  would otherwise only show up as a silent styling regression.

How it works:
- Both stylesheets are embedded with `include_str!`.
- We assert presence of a curated set of selectors / tokens.
- If you intentionally rename or remove a selector, update the component
  markup and this list together.
*/

const THEME_CSS: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/theme/main.css"));
const NAVBAR_CSS: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/styling/navbar.css"));

const THEME_SELECTORS: &[&str] = &[
    // Global / layout
    ":root",
    "--color-bg",
    "body {",
    ".page {",
    ".page-section {",
    ".section-title",
    // Buttons
    ".button {",
    ".button--accent",
    ".button--outline",
    ".button--ghost",
    // Carousels
    ".dots__dot",
    ".dots__dot--active",
    ".hero__slide--active",
    ".who__slide--active",
    ".progress__image--active",
    ".culture__image--active",
    // Reveal animation
    ".reveal {",
    ".reveal--in",
    "@keyframes fade-up",
    ".quote {",
    ".connect__inner {",
    // Cards
    ".service-card",
    ".news-card",
    ".news-card--single",
    ".news__arrow:disabled",
    ".social-card",
    ".figures__value",
    // FAQ accordion
    ".faq__item--open",
    ".faq__answer",
    // Footer
    ".footer__column--wide",
    ".footer__legal",
    // Responsive block at the news breakpoint
    "@media (max-width: 768px)",
];

const NAVBAR_SELECTORS: &[&str] = &[
    ".navbar {",
    ".navbar--scrolled",
    ".navbar__topbar--hidden",
    ".navbar__backdrop",
    ".navbar__dropdown",
    ".navbar--mobile-open .navbar__mobile",
    ".subnav--visible",
    ".subnav__link--active",
];

fn missing_from(css: &str, selectors: &[&'static str]) -> Vec<&'static str> {
    selectors.iter().copied().filter(|sel| !css.contains(sel)).collect()
}

#[test]
fn theme_contains_required_selectors() {
    let missing = missing_from(THEME_CSS, THEME_SELECTORS);
    if !missing.is_empty() {
        panic!(
            "Missing {} required CSS selectors/tokens in theme:\n{}",
            missing.len(),
            missing.join("\n")
        );
    }
}

#[test]
fn navbar_stylesheet_contains_required_selectors() {
    let missing = missing_from(NAVBAR_CSS, NAVBAR_SELECTORS);
    assert!(missing.is_empty(), "navbar.css is missing:\n{}", missing.join("\n"));
}

#[test]
fn theme_not_trivially_empty() {
    let non_ws_len = THEME_CSS.chars().filter(|c| !c.is_whitespace()).count();
    assert!(
        non_ws_len > 4_000,
        "Theme appears unexpectedly small ({} non-whitespace chars) – \
         did the file get truncated or path change?",
        non_ws_len
    );
}

#[test]
fn braces_are_balanced() {
    for (name, css) in [("main.css", THEME_CSS), ("navbar.css", NAVBAR_CSS)] {
        let open = css.matches('{').count();
        let close = css.matches('}').count();
        assert_eq!(open, close, "{name} has {open} '{{' but {close} '}}'");
    }
}
