use codegalaxy::catalog;
use codegalaxy::error::GalaxyError;
use codegalaxy::interface::Navigator;
use codegalaxy::render;
use codegalaxy::route::{Route, RouteTable};

fn setup() -> Navigator {
    Navigator::new(catalog::standard())
}

#[test]
fn navigation_renders_into_the_mount_point() {
    let navigator = setup();
    let view = navigator.navigate("#/languages").expect("navigates");
    assert_eq!(view.title, "Programming Languages");
    assert!(!view.fallback);
    assert_eq!(
        navigator.current_markup().expect("mount point"),
        view.markup,
        "the mount point holds what the last navigation rendered"
    );
}

#[test]
fn known_id_chains_render_their_entities() {
    let navigator = setup();
    let cases = [
        ("#/", "Master Programming Languages"),
        ("#/languages", "Programming Languages"),
        ("#/language/python", "Python"),
        ("#/language/python/functions", "Python — Functions"),
        ("#/language/python/functions/len", "returns the number of items"),
        ("#/language/python/uses", "Python — Uses"),
        ("#/language/python/uses/scripting", "Scripting"),
        ("#/language/python/tags", "Python — Keywords"),
        ("#/language/python/tags/keywords", "Python — Language Keywords"),
        ("#/language/python/tags/keywords/def", "Python — def"),
        ("#/language/python/examples", "List Comprehension"),
        ("#/compiler", "Multi-Language Compiler"),
        ("#/number-systems", "Number Systems"),
        ("#/number-systems/binary", "Binary (Base-2)"),
        ("#/converter", "Number Converter"),
        ("#/coding-schemes", "Coding Schemes"),
        ("#/coding-schemes/ascii", "ASCII"),
    ];
    for (fragment, expected) in cases {
        let view = navigator
            .navigate(fragment)
            .unwrap_or_else(|e| panic!("{fragment} should render: {e}"));
        assert!(!view.fallback, "{fragment} should not fall back");
        assert!(
            view.markup.contains(expected),
            "{fragment} should mention {expected:?}:\n{}",
            view.markup
        );
    }
}

#[test]
fn unknown_ids_and_unmatched_fragments_share_one_fallback() {
    let navigator = setup();
    // Syntactically valid route, parent language missing.
    let missing_parent = navigator
        .navigate("#/language/made-up/functions")
        .expect("renders the fallback");
    assert!(missing_parent.fallback);
    // No pattern matches at all.
    let unmatched = navigator
        .navigate("#/definitely/not/a/route")
        .expect("renders the fallback");
    assert!(unmatched.fallback);

    let fixed = render::not_found_page().to_markup();
    assert_eq!(missing_parent.markup, fixed);
    assert_eq!(unmatched.markup, fixed, "both failure paths present identically");
    assert_eq!(missing_parent.title, "Page not found");
}

#[test]
fn failure_paths_stay_distinguishable_internally() {
    let table = RouteTable::standard();
    let err = table
        .resolve("#/definitely/not/a/route")
        .expect_err("no pattern matches");
    assert!(matches!(err, GalaxyError::RouteNotMatched { .. }), "got {err:?}");

    let registry = catalog::standard();
    let err = render::page_for(&registry, &Route::Language { language: "made-up".into() })
        .expect_err("unknown language");
    assert!(matches!(err, GalaxyError::EntityNotFound { .. }), "got {err:?}");
}

#[test]
fn rendering_is_idempotent() {
    let navigator = setup();
    for fragment in ["#/", "#/language/python/tags/keywords/def", "#/bogus"] {
        let first = navigator.navigate(fragment).expect("first pass");
        let second = navigator.navigate(fragment).expect("second pass");
        assert_eq!(first.markup, second.markup, "{fragment} must render identically");
        assert_eq!(first.fallback, second.fallback);
    }
}

#[test]
fn navigation_resets_scroll_but_search_refinement_does_not() {
    let navigator = setup();
    navigator.navigate("#/languages").expect("navigates");
    navigator.scroll_to(640).expect("scroll recorded");
    assert_eq!(navigator.scroll().expect("scroll"), 640);

    // Refining the grid in place keeps the reader where they were.
    navigator.search_languages("kotlin").expect("search");
    assert_eq!(navigator.scroll().expect("scroll"), 640);

    // A real navigation lands back at the top.
    navigator.navigate("#/languages").expect("navigates");
    assert_eq!(navigator.scroll().expect("scroll"), 0);
}

#[test]
fn search_narrows_the_grid_in_place() {
    let navigator = setup();
    navigator.navigate("#/languages").expect("navigates");
    let view = navigator.search_languages("kotlin").expect("search");
    assert!(!view.fallback);
    assert_eq!(
        view.markup.matches("<a class=\"card\"").count(),
        1,
        "only Kotlin should survive the filter"
    );
    assert!(view.markup.contains("Kotlin"));
    assert!(!view.markup.contains("href=\"#/language/python\""));
    // The mount point follows the refinement.
    assert_eq!(navigator.current_markup().expect("mount point"), view.markup);
}

#[test]
fn filter_only_affects_the_languages_route() {
    let navigator = setup();
    let narrowed = navigator
        .render("#/languages", Some("kotlin"))
        .expect("filtered grid");
    assert_eq!(narrowed.markup.matches("<a class=\"card\"").count(), 1);

    let with_filter = navigator
        .render("#/language/python", Some("kotlin"))
        .expect("renders");
    let without = navigator.navigate("#/language/python").expect("renders");
    assert_eq!(
        with_filter.markup, without.markup,
        "a filter is ignored off the languages grid"
    );
}

#[test]
fn fallback_leaves_the_catalog_interactive() {
    let navigator = setup();
    let lost = navigator.navigate("#/language/made-up").expect("fallback");
    assert!(lost.fallback);
    let recovered = navigator.navigate("#/language/go").expect("navigates on");
    assert!(!recovered.fallback);
    assert!(recovered.markup.contains("Go"));
}

#[test]
fn alternate_spellings_render_like_canonical_fragments() {
    let navigator = setup();
    let canonical = navigator.navigate("#/language/python").expect("canonical");
    let trailing = navigator.navigate("#/language/python/").expect("trailing slash");
    assert_eq!(canonical.markup, trailing.markup);

    let encoded = navigator
        .navigate("#/language/javascript/tags/operators/strict-equality")
        .expect("item");
    assert!(encoded.markup.contains("JavaScript — ==="));
    // The same item again, with the group id arriving percent-encoded.
    let via_escape = navigator
        .navigate("#/language/javascript/tags/%6Fperators/strict-equality")
        .expect("escaped group id");
    assert_eq!(via_escape.markup, encoded.markup);
}
