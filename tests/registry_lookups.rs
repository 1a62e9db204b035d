use codegalaxy::catalog;
use codegalaxy::registry::{
    CodingScheme, Function, ItemExample, Language, NumberSystem, Registry, TagGroup, TagItem, Use,
};

fn setup() -> Registry {
    // Small fabricated catalog: one language with everything, one with only uses.
    let full = Language {
        id: "rusty".into(),
        name: "Rusty".into(),
        description: "A fearless systems language.".into(),
        categories_label: Some("Keywords".into()),
        functions: vec![Function {
            id: "len".into(),
            name: "len".into(),
            brief: "Length.".into(),
            detail: "Returns the length.".into(),
        }],
        uses: vec![Use {
            id: "cli".into(),
            name: "CLI Tools".into(),
            brief: "Fast binaries.".into(),
            detail: "Single static binaries with instant startup.".into(),
        }],
        tag_groups: vec![TagGroup {
            id: "keywords".into(),
            group_name: "Keywords".into(),
            items_label: Some("Keyword".into()),
            items: vec![TagItem {
                id: "fn".into(),
                name: "fn".into(),
                brief: "Function item.".into(),
                detail: "Declares a function.".into(),
                example: Some(ItemExample {
                    code: "fn main() {}".into(),
                    output: "".into(),
                }),
            }],
        }],
        examples: Vec::new(),
    };
    let sparse = Language {
        id: "sketch".into(),
        name: "Sketch".into(),
        description: "A tiny prototyping notation.".into(),
        categories_label: None,
        functions: Vec::new(),
        uses: vec![Use {
            id: "notes".into(),
            name: "Notes".into(),
            brief: "Jot ideas.".into(),
            detail: "Capture ideas before committing to code.".into(),
        }],
        tag_groups: Vec::new(),
        examples: Vec::new(),
    };
    Registry::new(
        vec![full, sparse],
        vec![NumberSystem {
            id: "binary".into(),
            name: "Binary".into(),
            detail: "Base two.".into(),
        }],
        vec![CodingScheme {
            id: "ascii".into(),
            name: "ASCII".into(),
            detail: "Seven bits.".into(),
        }],
    )
}

#[test]
fn finders_return_known_entities() {
    let registry = setup();
    assert_eq!(registry.find_language("rusty").expect("language").name, "Rusty");
    assert_eq!(
        registry.find_function("rusty", "len").expect("function").name,
        "len"
    );
    assert_eq!(
        registry.find_use("rusty", "cli").expect("use").name,
        "CLI Tools"
    );
    assert_eq!(
        registry
            .find_tag_group("rusty", "keywords")
            .expect("tag group")
            .group_name,
        "Keywords"
    );
    assert_eq!(
        registry
            .find_tag_item("rusty", "keywords", "fn")
            .expect("tag item")
            .name,
        "fn"
    );
    assert_eq!(
        registry.find_number_system("binary").expect("number system").name,
        "Binary"
    );
    assert_eq!(
        registry.find_coding_scheme("ascii").expect("coding scheme").name,
        "ASCII"
    );
}

#[test]
fn finders_are_total_over_arbitrary_ids() {
    let registry = setup();
    // None of these may panic, whatever the id looks like.
    let hostile = ["", " ", "nope", "RUSTY", "ru sty", "a/b", "%FF", "héllo", "🚀"];
    for id in &hostile {
        assert!(registry.find_language(id).is_none(), "language id {id:?}");
        assert!(registry.find_function(id, id).is_none(), "function id {id:?}");
        assert!(registry.find_use(id, id).is_none(), "use id {id:?}");
        assert!(registry.find_tag_group(id, id).is_none(), "group id {id:?}");
        assert!(
            registry.find_tag_item(id, id, id).is_none(),
            "item id {id:?}"
        );
        assert!(registry.find_number_system(id).is_none(), "system id {id:?}");
        assert!(registry.find_coding_scheme(id).is_none(), "scheme id {id:?}");
    }
}

#[test]
fn nested_lookups_require_the_whole_chain() {
    let registry = setup();
    // The function exists, but only under rusty.
    assert!(registry.find_function("sketch", "len").is_none());
    assert!(registry.find_function("missing", "len").is_none());
    // The item exists, but not under a different group id.
    assert!(registry.find_tag_item("rusty", "operators", "fn").is_none());
    assert!(registry.find_tag_item("sketch", "keywords", "fn").is_none());
}

#[test]
fn list_languages_preserves_registration_order() {
    let registry = setup();
    let names: Vec<&str> = registry
        .list_languages(None)
        .iter()
        .map(|l| l.name.as_str())
        .collect();
    assert_eq!(names, vec!["Rusty", "Sketch"]);
    // An empty or blank filter is the same as no filter.
    for filter in ["", "   "] {
        let all: Vec<&str> = registry
            .list_languages(Some(filter))
            .iter()
            .map(|l| l.name.as_str())
            .collect();
        assert_eq!(all, names, "filter {filter:?} should keep everything");
    }
}

#[test]
fn list_languages_filters_name_and_description() {
    let registry = setup();
    // Case-insensitive name match.
    for filter in ["rusty", "RUSTY", "Rust"] {
        let hits = registry.list_languages(Some(filter));
        assert_eq!(hits.len(), 1, "filter {filter:?}");
        assert_eq!(hits[0].name, "Rusty");
    }
    // Description-only match.
    let hits = registry.list_languages(Some("prototyping"));
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "Sketch");
    // Surrounding whitespace is trimmed before matching.
    let hits = registry.list_languages(Some("  fearless  "));
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "Rusty");
    // No match leaves an empty, well-formed list.
    assert!(registry.list_languages(Some("cobol")).is_empty());
}

#[test]
fn duplicate_top_level_ids_keep_the_first() {
    let twin = |name: &str| Language {
        id: "twin".into(),
        name: name.into(),
        description: String::new(),
        categories_label: None,
        functions: Vec::new(),
        uses: Vec::new(),
        tag_groups: Vec::new(),
        examples: Vec::new(),
    };
    let registry = Registry::new(vec![twin("First"), twin("Second")], Vec::new(), Vec::new());
    assert_eq!(
        registry.find_language("twin").expect("language").name,
        "First",
        "the first registration owns a duplicated id"
    );
    // Both stay listed; only the index collapses.
    assert_eq!(registry.list_languages(None).len(), 2);
}

#[test]
fn built_in_catalog_is_complete() {
    let registry = catalog::standard();
    assert_eq!(registry.languages().len(), 15);
    assert_eq!(registry.number_systems().len(), 4);
    assert_eq!(registry.coding_schemes().len(), 2);
    // Every language id is a well-formed slug.
    for language in registry.languages() {
        assert!(
            language
                .id
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'),
            "language id {} is not a slug",
            language.id
        );
    }
    // The python keyword drill-down used throughout the catalog's own links.
    for item in ["def", "for", "import"] {
        assert!(
            registry.find_tag_item("python", "keywords", item).is_some(),
            "python keyword {item} missing"
        );
    }
    // HTML deliberately has no functions section.
    let html = registry.find_language("html").expect("html");
    assert!(html.functions.is_empty());
    assert!(!html.tag_groups.is_empty());
}
