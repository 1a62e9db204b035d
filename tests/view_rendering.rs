use codegalaxy::catalog;
use codegalaxy::error::GalaxyError;
use codegalaxy::registry::{
    Example, Function, ItemExample, Language, Registry, TagGroup, TagItem, Use,
};
use codegalaxy::render::{self, Page};
use codegalaxy::route::{Route, RouteTable};

fn setup() -> Registry {
    catalog::standard()
}

// A registry whose every text field carries markup-significant characters.
fn spiky() -> Registry {
    let language = Language {
        id: "spiky".into(),
        name: "Spiky <Lang> & \"Friends\"".into(),
        description: "Loves <angles>, 'quotes' & ampersands.".into(),
        categories_label: Some("<Tags>".into()),
        functions: vec![Function {
            id: "a<b".into(),
            name: "a<b".into(),
            brief: "Compares & complains.".into(),
            detail: "Returns true when a < b && b > a.".into(),
        }],
        uses: vec![Use {
            id: "markup".into(),
            name: "Markup \"Art\"".into(),
            brief: "Draws with <pre>.".into(),
            detail: "It's all about <div> soup.".into(),
        }],
        tag_groups: vec![TagGroup {
            id: "ops".into(),
            group_name: "Operators & Friends".into(),
            items_label: None,
            items: vec![TagItem {
                id: "lt".into(),
                name: "<".into(),
                brief: "Less than.".into(),
                detail: "<script>alert(\"pwned\")</script>".into(),
                example: Some(ItemExample {
                    code: "if (a < b && c > d) { print('yes') }".into(),
                    output: "<yes>".into(),
                }),
            }],
        }],
        examples: vec![Example {
            title: "Angle soup".into(),
            code: "<html> & </html>".into(),
        }],
    };
    Registry::new(vec![language], Vec::new(), Vec::new())
}

fn markup_for(registry: &Registry, route: Route) -> String {
    render::page_for(registry, &route)
        .unwrap_or_else(|e| panic!("route {route:?} should render: {e}"))
        .to_markup()
}

// Every href="..." in a rendered fragment.
fn hrefs(markup: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut rest = markup;
    while let Some(at) = rest.find("href=\"") {
        let tail = &rest[at + 6..];
        let end = tail.find('"').expect("href closes");
        out.push(tail[..end].to_string());
        rest = &tail[end..];
    }
    out
}

#[test]
fn data_text_is_escaped_everywhere() {
    let registry = spiky();
    let pages = [
        markup_for(&registry, Route::Languages),
        markup_for(&registry, Route::Language { language: "spiky".into() }),
        markup_for(
            &registry,
            Route::LanguageFunction { language: "spiky".into(), function: "a<b".into() },
        ),
        markup_for(
            &registry,
            Route::LanguageUse { language: "spiky".into(), use_case: "markup".into() },
        ),
        markup_for(
            &registry,
            Route::LanguageTagItem {
                language: "spiky".into(),
                group: "ops".into(),
                item: "lt".into(),
            },
        ),
        markup_for(&registry, Route::LanguageExamples { language: "spiky".into() }),
    ];
    for markup in &pages {
        assert!(!markup.contains("<script>"), "live script tag leaked:\n{markup}");
        assert!(
            !markup.contains("<angles>") && !markup.contains("<html>"),
            "data-derived angle brackets must be escaped:\n{markup}"
        );
    }
    // Spot-check each escape in its page.
    assert!(pages[0].contains("Spiky &lt;Lang&gt; &amp; &quot;Friends&quot;"));
    assert!(pages[0].contains("<span class=\"chip\">&lt;Tags&gt;</span>"));
    assert!(pages[1].contains("Loves &lt;angles&gt;, &#39;quotes&#39; &amp; ampersands."));
    assert!(pages[4].contains("&lt;script&gt;alert(&quot;pwned&quot;)&lt;/script&gt;"));
    assert!(pages[4].contains("if (a &lt; b &amp;&amp; c &gt; d)"));
    assert!(pages[4].contains("&lt;yes&gt;"));
    assert!(pages[5].contains("&lt;html&gt; &amp; &lt;/html&gt;"));
}

#[test]
fn tag_item_detail_names_language_and_item() {
    let registry = setup();
    let page = render::page_for(
        &registry,
        &Route::LanguageTagItem {
            language: "python".into(),
            group: "keywords".into(),
            item: "def".into(),
        },
    )
    .expect("python def renders");
    assert_eq!(page.title, "Python — def");
    let markup = page.to_markup();
    assert!(
        markup.contains("href=\"#/language/python/tags/keywords\""),
        "back-link must target the group page:\n{markup}"
    );
    assert!(markup.contains("Back to Language Keywords"));
}

#[test]
fn parent_absence_wins_over_child_absence() {
    let registry = setup();
    // Parent missing: the language is reported, not the leaf.
    let err = render::page_for(
        &registry,
        &Route::LanguageTagItem {
            language: "made-up".into(),
            group: "keywords".into(),
            item: "def".into(),
        },
    )
    .expect_err("unknown language");
    assert!(
        matches!(&err, GalaxyError::EntityNotFound { kind: "language", .. }),
        "got {err:?}"
    );
    // Language found, group missing.
    let err = render::page_for(
        &registry,
        &Route::LanguageTagItem {
            language: "python".into(),
            group: "nope".into(),
            item: "def".into(),
        },
    )
    .expect_err("unknown group");
    assert!(
        matches!(&err, GalaxyError::EntityNotFound { kind: "tag group", .. }),
        "got {err:?}"
    );
    // Language and group found, item missing.
    let err = render::page_for(
        &registry,
        &Route::LanguageTagItem {
            language: "python".into(),
            group: "keywords".into(),
            item: "nope".into(),
        },
    )
    .expect_err("unknown item");
    assert!(
        matches!(&err, GalaxyError::EntityNotFound { kind: "tag item", .. }),
        "got {err:?}"
    );
}

#[test]
fn function_and_use_details_check_parent_first() {
    let registry = setup();
    let err = render::page_for(
        &registry,
        &Route::LanguageFunction { language: "made-up".into(), function: "len".into() },
    )
    .expect_err("unknown language");
    assert!(matches!(&err, GalaxyError::EntityNotFound { kind: "language", .. }));
    let err = render::page_for(
        &registry,
        &Route::LanguageFunction { language: "python".into(), function: "nope".into() },
    )
    .expect_err("unknown function");
    assert!(matches!(&err, GalaxyError::EntityNotFound { kind: "function", .. }));
    let err = render::page_for(
        &registry,
        &Route::LanguageUse { language: "python".into(), use_case: "nope".into() },
    )
    .expect_err("unknown use");
    assert!(matches!(&err, GalaxyError::EntityNotFound { kind: "use", .. }));
}

#[test]
fn absent_sections_render_as_not_found() {
    let registry = setup();
    // HTML exists but publishes no functions.
    let err = render::page_for(
        &registry,
        &Route::LanguageFunctions { language: "html".into() },
    )
    .expect_err("html has no functions");
    assert!(matches!(&err, GalaxyError::EntityNotFound { .. }));
}

#[test]
fn every_generated_link_resolves() {
    let registry = setup();
    let table = RouteTable::standard();
    let mut pages: Vec<Page> = vec![
        render::home_page(&registry),
        render::languages_page(&registry, None),
        render::number_systems_page(&registry),
        render::coding_schemes_page(&registry),
        render::compiler_page(),
    ];
    for system in registry.number_systems() {
        pages.push(render::number_system_page(&registry, &system.id).expect("system"));
    }
    for scheme in registry.coding_schemes() {
        pages.push(render::coding_scheme_page(&registry, &scheme.id).expect("scheme"));
    }
    for language in registry.languages() {
        let id = language.id.as_str();
        pages.push(render::language_page(&registry, id).expect("overview"));
        if !language.functions.is_empty() {
            pages.push(render::functions_page(&registry, id).expect("functions"));
            for function in &language.functions {
                pages.push(
                    render::function_page(&registry, id, &function.id).expect("function"),
                );
            }
        }
        if !language.uses.is_empty() {
            pages.push(render::uses_page(&registry, id).expect("uses"));
            for use_case in &language.uses {
                pages.push(render::use_page(&registry, id, &use_case.id).expect("use"));
            }
        }
        if !language.tag_groups.is_empty() {
            pages.push(render::tags_page(&registry, id).expect("tags"));
            for group in &language.tag_groups {
                pages.push(render::tag_group_page(&registry, id, &group.id).expect("group"));
                for item in &group.items {
                    pages.push(
                        render::tag_item_page(&registry, id, &group.id, &item.id)
                            .expect("item"),
                    );
                }
            }
        }
        if !language.examples.is_empty() {
            pages.push(render::examples_page(&registry, id).expect("examples"));
        }
    }

    let mut checked = 0;
    for page in &pages {
        for href in hrefs(&page.to_markup()) {
            assert!(
                table.resolve(&href).is_ok(),
                "page '{}' links to unroutable {href}",
                page.title
            );
            checked += 1;
        }
    }
    assert!(checked > 100, "link walk looked at only {checked} links");
}

#[test]
fn example_cards_are_inert() {
    let registry = setup();
    let markup = markup_for(&registry, Route::LanguageExamples { language: "python".into() });
    assert!(markup.contains("<div class=\"card\">"), "snippet cards carry no target");
    assert!(!markup.contains("<a class=\"card\""), "examples must not navigate");
    assert!(markup.contains("<pre><code>"));
}

#[test]
fn overview_offers_only_present_sections() {
    let registry = setup();
    let markup = markup_for(&registry, Route::Language { language: "html".into() });
    assert!(
        !markup.contains("href=\"#/language/html/functions\""),
        "html has no functions card"
    );
    assert!(markup.contains("href=\"#/language/html/tags\""));
    assert!(markup.contains("href=\"#/language/html/uses\""));
    assert!(markup.contains("href=\"#/language/html/examples\""));
}

#[test]
fn filtered_languages_grid_notes_empty_results() {
    let registry = setup();
    let page = render::languages_page(&registry, Some("zzz-no-such"));
    let markup = page.to_markup();
    assert!(markup.contains("No matches."));
    assert!(!markup.contains("<a class=\"card\""), "no cards survive the filter");
    // The search box echoes the filter text.
    assert!(markup.contains("value=\"zzz-no-such\""));
}

#[test]
fn converter_page_renders_default_state() {
    let markup = render::converter_page().to_markup();
    assert!(markup.contains("id=\"conv-input\""));
    assert!(markup.contains("<option value=\"2\" selected>2</option>"));
    assert!(markup.contains("<option value=\"10\" selected>10</option>"));
    assert!(markup.contains("<option value=\"36\">36</option>"));
    assert!(
        markup.contains("<pre id=\"conv-result\" class=\"mono\"></pre>"),
        "result area starts empty"
    );
}

#[test]
fn not_found_page_is_fixed() {
    let page = render::not_found_page();
    assert_eq!(page.title, "Page not found");
    let markup = page.to_markup();
    assert!(markup.contains("The page you requested does not exist."));
    assert!(hrefs(&markup).is_empty(), "the fallback panel carries no links");
}
