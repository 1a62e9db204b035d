//! View construction and markup serialization.
//!
//! Every route renders in two stages. A builder projects registry entities
//! into a [`Page`] value, plain data with no markup in it, then
//! [`Page::to_markup`] serializes the whole thing in one pass. Escaping
//! happens only in the serializer, so text is escaped exactly once no matter
//! where it came from.
//!
//! Builders that look entities up return `Result`; a miss is
//! [`GalaxyError::EntityNotFound`] naming the first thing along the path that
//! was absent. The not-found view itself is just another page, shared by
//! unmatched fragments and unknown ids alike.

use crate::convert::ConverterPanel;
use crate::error::{GalaxyError, Result};
use crate::registry::{Language, Registry};
use crate::route::Route;

// ------------- View model -------------

/// A fully resolved view, ready to serialize.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub title: String,
    pub lead: Option<String>,
    /// Hero layout (landing pages) instead of the usual title panel.
    pub hero: bool,
    /// Current text of the languages search box, when the page has one.
    pub search: Option<String>,
    pub actions: Vec<Link>,
    pub sections: Vec<Section>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub heading: Option<String>,
    pub body: Body,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
    Grid {
        cards: Vec<Card>,
        /// Shown inside the grid when no cards survived filtering.
        empty_note: Option<String>,
    },
    Detail(Detail),
    Converter(ConverterForm),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Card {
    pub title: String,
    pub subtitle: Option<String>,
    pub chips: Vec<String>,
    pub snippet: Option<String>,
    /// Fragment the card navigates to. Cards without one are inert.
    pub target: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detail {
    pub text: String,
    pub example: Option<CodePair>,
    pub back: Option<Link>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodePair {
    pub code: String,
    pub output: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub label: String,
    pub fragment: String,
}

/// Converter view state as rendered: the inputs and the current result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConverterForm {
    pub value: String,
    pub from_base: u32,
    pub to_base: u32,
    pub result: String,
}

// ------------- Page builders -------------

/// Builds the page for a resolved route.
pub fn page_for(registry: &Registry, route: &Route) -> Result<Page> {
    match route {
        Route::Home => Ok(home_page(registry)),
        Route::Languages => Ok(languages_page(registry, None)),
        Route::Language { language } => language_page(registry, language),
        Route::LanguageFunctions { language } => functions_page(registry, language),
        Route::LanguageFunction { language, function } => {
            function_page(registry, language, function)
        }
        Route::LanguageUses { language } => uses_page(registry, language),
        Route::LanguageUse { language, use_case } => use_page(registry, language, use_case),
        Route::LanguageTags { language } => tags_page(registry, language),
        Route::LanguageTagGroup { language, group } => tag_group_page(registry, language, group),
        Route::LanguageTagItem {
            language,
            group,
            item,
        } => tag_item_page(registry, language, group, item),
        Route::LanguageExamples { language } => examples_page(registry, language),
        Route::Compiler => Ok(compiler_page()),
        Route::NumberSystems => Ok(number_systems_page(registry)),
        Route::NumberSystem { system } => number_system_page(registry, system),
        Route::Converter => Ok(converter_page()),
        Route::CodingSchemes => Ok(coding_schemes_page(registry)),
        Route::CodingScheme { scheme } => coding_scheme_page(registry, scheme),
    }
}

/// The shared fallback view.
pub fn not_found_page() -> Page {
    Page {
        title: "Page not found".into(),
        lead: Some("The page you requested does not exist. Use the navigation above.".into()),
        hero: false,
        search: None,
        actions: Vec::new(),
        sections: Vec::new(),
    }
}

pub fn home_page(registry: &Registry) -> Page {
    let quick_start = vec![
        nav_card(
            "Languages",
            "Explore syntax, functions, uses, tags, and examples.",
            "#/languages",
        ),
        nav_card("Compiler", "Try code instantly in your browser.", "#/compiler"),
        nav_card(
            "Number Systems",
            "Binary, Octal, Decimal, Hex with conversions.",
            "#/number-systems",
        ),
        nav_card("Converter", "Convert numbers across bases 2-36.", "#/converter"),
        nav_card("Coding Schemes", "ASCII and Unicode essentials.", "#/coding-schemes"),
    ];
    let popular = registry
        .list_languages(None)
        .into_iter()
        .take(8)
        .map(language_card)
        .collect();
    Page {
        title: "Master Programming Languages and Core Computer Science".into(),
        lead: Some(
            "Navigate a galaxy of languages featured on W3Schools. Drill into functions, uses, \
             tags, and examples. Explore number systems, convert across bases, and understand \
             character encodings, all in one beautiful interface."
                .into(),
        ),
        hero: true,
        search: None,
        actions: vec![
            link("Browse Languages", "#/languages"),
            link("Open Compiler", "#/compiler"),
        ],
        sections: vec![
            section(Some("Quick Start"), quick_start, None),
            section(Some("Popular Languages"), popular, None),
        ],
    }
}

/// The languages grid, optionally narrowed by the search filter.
pub fn languages_page(registry: &Registry, filter: Option<&str>) -> Page {
    let cards = registry
        .list_languages(filter)
        .into_iter()
        .map(language_card)
        .collect();
    Page {
        title: "Programming Languages".into(),
        lead: Some(
            "Languages included are commonly featured on W3Schools. Select a language to \
             explore its functions, uses, tags, and examples."
                .into(),
        ),
        hero: false,
        search: Some(filter.unwrap_or("").to_string()),
        actions: Vec::new(),
        sections: vec![section(None, cards, Some("No matches."))],
    }
}

pub fn language_page(registry: &Registry, id: &str) -> Result<Page> {
    let language = registry
        .find_language(id)
        .ok_or_else(|| missing("language", id))?;
    let mut cards = Vec::new();
    if !language.functions.is_empty() {
        cards.push(nav_card(
            "Functions",
            "Built-ins and common utilities.",
            &format!("#/language/{}/functions", language.id),
        ));
    }
    if !language.uses.is_empty() {
        cards.push(nav_card(
            "Uses",
            "What the language is great at.",
            &format!("#/language/{}/uses", language.id),
        ));
    }
    if !language.tag_groups.is_empty() {
        cards.push(nav_card(
            categories_title(language),
            "Categories and elements.",
            &format!("#/language/{}/tags", language.id),
        ));
    }
    if !language.examples.is_empty() {
        cards.push(nav_card(
            "Examples",
            "Practical snippets.",
            &format!("#/language/{}/examples", language.id),
        ));
    }
    Ok(Page {
        title: language.name.clone(),
        lead: Some(language.description.clone()),
        hero: false,
        search: None,
        actions: Vec::new(),
        sections: vec![section(
            Some(&format!("Explore {}", language.name)),
            cards,
            None,
        )],
    })
}

pub fn functions_page(registry: &Registry, id: &str) -> Result<Page> {
    let language = registry
        .find_language(id)
        .ok_or_else(|| missing("language", id))?;
    if language.functions.is_empty() {
        return Err(missing_section(id, "functions"));
    }
    let cards = language
        .functions
        .iter()
        .map(|f| Card {
            title: f.name.clone(),
            subtitle: Some(f.brief.clone()),
            target: Some(format!(
                "#/language/{}/functions/{}",
                language.id,
                urlencoding::encode(&f.id)
            )),
            ..Card::default()
        })
        .collect();
    Ok(Page {
        title: format!("{} — Functions", language.name),
        lead: Some("Select a function to learn more.".into()),
        hero: false,
        search: None,
        actions: Vec::new(),
        sections: vec![section(None, cards, None)],
    })
}

pub fn function_page(registry: &Registry, id: &str, function_id: &str) -> Result<Page> {
    let language = registry
        .find_language(id)
        .ok_or_else(|| missing("language", id))?;
    let function = language
        .function(function_id)
        .ok_or_else(|| missing("function", function_id))?;
    Ok(detail_page(
        format!("{} — {}", language.name, function.name),
        function.detail.clone(),
        None,
        link(
            "Back to functions",
            &format!("#/language/{}/functions", language.id),
        ),
    ))
}

pub fn uses_page(registry: &Registry, id: &str) -> Result<Page> {
    let language = registry
        .find_language(id)
        .ok_or_else(|| missing("language", id))?;
    if language.uses.is_empty() {
        return Err(missing_section(id, "uses"));
    }
    let cards = language
        .uses
        .iter()
        .map(|u| Card {
            title: u.name.clone(),
            subtitle: Some(u.brief.clone()),
            target: Some(format!(
                "#/language/{}/uses/{}",
                language.id,
                urlencoding::encode(&u.id)
            )),
            ..Card::default()
        })
        .collect();
    Ok(Page {
        title: format!("{} — Uses", language.name),
        lead: Some(format!("Where {} shines in practice.", language.name)),
        hero: false,
        search: None,
        actions: Vec::new(),
        sections: vec![section(None, cards, None)],
    })
}

pub fn use_page(registry: &Registry, id: &str, use_id: &str) -> Result<Page> {
    let language = registry
        .find_language(id)
        .ok_or_else(|| missing("language", id))?;
    let use_case = language
        .use_case(use_id)
        .ok_or_else(|| missing("use", use_id))?;
    Ok(detail_page(
        format!("{} — {}", language.name, use_case.name),
        use_case.detail.clone(),
        None,
        link("Back to uses", &format!("#/language/{}/uses", language.id)),
    ))
}

pub fn tags_page(registry: &Registry, id: &str) -> Result<Page> {
    let language = registry
        .find_language(id)
        .ok_or_else(|| missing("language", id))?;
    if language.tag_groups.is_empty() {
        return Err(missing_section(id, "tags"));
    }
    let cards = language
        .tag_groups
        .iter()
        .map(|g| Card {
            title: g.group_name.clone(),
            subtitle: Some(format!("{} items", g.items.len())),
            target: Some(format!(
                "#/language/{}/tags/{}",
                language.id,
                urlencoding::encode(&g.id)
            )),
            ..Card::default()
        })
        .collect();
    Ok(Page {
        title: format!("{} — {}", language.name, categories_title(language)),
        lead: Some(format!(
            "Browse grouped {} and drill into specifics.",
            language.categories_label.as_deref().unwrap_or("tags")
        )),
        hero: false,
        search: None,
        actions: Vec::new(),
        sections: vec![section(None, cards, None)],
    })
}

pub fn tag_group_page(registry: &Registry, id: &str, group_id: &str) -> Result<Page> {
    let language = registry
        .find_language(id)
        .ok_or_else(|| missing("language", id))?;
    let group = language
        .tag_group(group_id)
        .ok_or_else(|| missing("tag group", group_id))?;
    let cards = group
        .items
        .iter()
        .map(|item| Card {
            title: item.name.clone(),
            subtitle: Some(item.brief.clone()),
            target: Some(format!(
                "#/language/{}/tags/{}/{}",
                language.id,
                urlencoding::encode(&group.id),
                urlencoding::encode(&item.id)
            )),
            ..Card::default()
        })
        .collect();
    Ok(Page {
        title: format!("{} — {}", language.name, group.group_name),
        lead: Some(format!(
            "Select a {} to learn more.",
            group.items_label.as_deref().unwrap_or("Item")
        )),
        hero: false,
        search: None,
        actions: Vec::new(),
        sections: vec![section(None, cards, None)],
    })
}

pub fn tag_item_page(registry: &Registry, id: &str, group_id: &str, item_id: &str) -> Result<Page> {
    let language = registry
        .find_language(id)
        .ok_or_else(|| missing("language", id))?;
    let group = language
        .tag_group(group_id)
        .ok_or_else(|| missing("tag group", group_id))?;
    let item = group.item(item_id).ok_or_else(|| missing("tag item", item_id))?;
    let example = item.example.as_ref().map(|e| CodePair {
        code: e.code.clone(),
        output: e.output.clone(),
    });
    Ok(detail_page(
        format!("{} — {}", language.name, item.name),
        item.detail.clone(),
        example,
        link(
            &format!("Back to {}", group.group_name),
            &format!(
                "#/language/{}/tags/{}",
                language.id,
                urlencoding::encode(&group.id)
            ),
        ),
    ))
}

pub fn examples_page(registry: &Registry, id: &str) -> Result<Page> {
    let language = registry
        .find_language(id)
        .ok_or_else(|| missing("language", id))?;
    if language.examples.is_empty() {
        return Err(missing_section(id, "examples"));
    }
    let cards = language
        .examples
        .iter()
        .map(|e| Card {
            title: e.title.clone(),
            snippet: Some(e.code.clone()),
            ..Card::default()
        })
        .collect();
    Ok(Page {
        title: format!("{} — Examples", language.name),
        lead: Some("Short, focused snippets you can learn from.".into()),
        hero: false,
        search: None,
        actions: Vec::new(),
        sections: vec![section(None, cards, None)],
    })
}

pub fn compiler_page() -> Page {
    let cards = vec![
        plain_card("JavaScript", "ES6+ features, async/await, DOM manipulation"),
        plain_card("Python", "Data structures, functions, list comprehensions"),
        plain_card("HTML", "Structure, forms, semantic elements"),
        plain_card("React JSX", "Components, hooks, state management"),
    ];
    Page {
        title: "Multi-Language Compiler".into(),
        lead: Some(
            "Write, test, and run code in multiple programming languages. Supports JavaScript, \
             Python, HTML, SQL, and more!"
                .into(),
        ),
        hero: true,
        search: None,
        actions: Vec::new(),
        sections: vec![section(Some("Quick Examples"), cards, None)],
    }
}

pub fn number_systems_page(registry: &Registry) -> Page {
    let cards = registry
        .number_systems()
        .iter()
        .map(|n| Card {
            title: n.name.clone(),
            target: Some(format!("#/number-systems/{}", n.id)),
            ..Card::default()
        })
        .collect();
    Page {
        title: "Number Systems".into(),
        lead: Some("Select a system to learn what it is and how to convert it to others.".into()),
        hero: false,
        search: None,
        actions: Vec::new(),
        sections: vec![section(None, cards, None)],
    }
}

pub fn number_system_page(registry: &Registry, id: &str) -> Result<Page> {
    let system = registry
        .find_number_system(id)
        .ok_or_else(|| missing("number system", id))?;
    Ok(detail_page(
        system.name.clone(),
        system.detail.clone(),
        None,
        link("Back to Number Systems", "#/number-systems"),
    ))
}

pub fn converter_page() -> Page {
    let panel = ConverterPanel::new();
    Page {
        title: "Number Converter".into(),
        lead: Some(
            "Convert integers across bases 2-36. Supports digits 0-9 and A-Z. Prefixes \
             (0b, 0o, 0x) are optional."
                .into(),
        ),
        hero: false,
        search: None,
        actions: Vec::new(),
        sections: vec![Section {
            heading: None,
            body: Body::Converter(ConverterForm {
                value: panel.text().to_string(),
                from_base: panel.from_base(),
                to_base: panel.to_base(),
                result: panel.display().to_string(),
            }),
        }],
    }
}

pub fn coding_schemes_page(registry: &Registry) -> Page {
    let cards = registry
        .coding_schemes()
        .iter()
        .map(|c| Card {
            title: c.name.clone(),
            subtitle: Some("Click to learn more".into()),
            target: Some(format!("#/coding-schemes/{}", c.id)),
            ..Card::default()
        })
        .collect();
    Page {
        title: "Coding Schemes".into(),
        lead: Some(
            "Character encodings are how text is stored as bytes. Explore ASCII and Unicode."
                .into(),
        ),
        hero: false,
        search: None,
        actions: Vec::new(),
        sections: vec![section(None, cards, None)],
    }
}

pub fn coding_scheme_page(registry: &Registry, id: &str) -> Result<Page> {
    let scheme = registry
        .find_coding_scheme(id)
        .ok_or_else(|| missing("coding scheme", id))?;
    Ok(detail_page(
        scheme.name.clone(),
        scheme.detail.clone(),
        None,
        link("Back to Coding Schemes", "#/coding-schemes"),
    ))
}

// ------------- Builder helpers -------------

fn missing(kind: &'static str, id: &str) -> GalaxyError {
    GalaxyError::EntityNotFound {
        kind,
        id: id.to_string(),
    }
}

// A language that exists but has nothing under the requested section renders
// the same fallback as an unknown id.
fn missing_section(language_id: &str, section: &str) -> GalaxyError {
    GalaxyError::EntityNotFound {
        kind: "section",
        id: format!("{language_id}/{section}"),
    }
}

fn categories_title(language: &Language) -> &str {
    language.categories_label.as_deref().unwrap_or("Tags")
}

fn link(label: &str, fragment: &str) -> Link {
    Link {
        label: label.into(),
        fragment: fragment.into(),
    }
}

fn section(heading: Option<&str>, cards: Vec<Card>, empty_note: Option<&str>) -> Section {
    Section {
        heading: heading.map(str::to_string),
        body: Body::Grid {
            cards,
            empty_note: empty_note.map(str::to_string),
        },
    }
}

fn nav_card(title: &str, subtitle: &str, target: &str) -> Card {
    Card {
        title: title.into(),
        subtitle: Some(subtitle.into()),
        target: Some(target.into()),
        ..Card::default()
    }
}

fn plain_card(title: &str, subtitle: &str) -> Card {
    Card {
        title: title.into(),
        subtitle: Some(subtitle.into()),
        ..Card::default()
    }
}

fn language_card(language: &Language) -> Card {
    Card {
        title: language.name.clone(),
        subtitle: Some(language.description.clone()),
        chips: language.categories_label.iter().cloned().collect(),
        target: Some(format!("#/language/{}", language.id)),
        ..Card::default()
    }
}

fn detail_page(title: String, text: String, example: Option<CodePair>, back: Link) -> Page {
    Page {
        title,
        lead: None,
        hero: false,
        search: None,
        actions: Vec::new(),
        sections: vec![Section {
            heading: None,
            body: Body::Detail(Detail {
                text,
                example,
                back: Some(back),
            }),
        }],
    }
}

// ------------- Markup -------------

/// Escapes text for insertion into markup. The five significant characters
/// are rewritten, everything else passes through unchanged.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

impl Page {
    /// Serializes the page. Deterministic for a given page value, so
    /// rendering the same route twice yields identical markup.
    pub fn to_markup(&self) -> String {
        let mut out = String::new();
        if self.hero {
            out.push_str("<section class=\"hero\">\n");
            out.push_str(&format!("<h1>{}</h1>\n", escape(&self.title)));
            if let Some(lead) = &self.lead {
                out.push_str(&format!("<p>{}</p>\n", escape(lead)));
            }
            self.write_actions(&mut out);
            out.push_str("</section>\n");
        } else {
            out.push_str("<div class=\"panel\">\n");
            out.push_str(&format!("<h2>{}</h2>\n", escape(&self.title)));
            if let Some(lead) = &self.lead {
                out.push_str(&format!("<p class=\"muted\">{}</p>\n", escape(lead)));
            }
            if let Some(search) = &self.search {
                out.push_str(&format!(
                    "<div class=\"searchbar\"><input id=\"lang-search\" placeholder=\"Search languages...\" value=\"{}\" /></div>\n",
                    escape(search)
                ));
            }
            self.write_actions(&mut out);
            out.push_str("</div>\n");
        }
        for section in &self.sections {
            section.write(&mut out);
        }
        out
    }

    fn write_actions(&self, out: &mut String) {
        if self.actions.is_empty() {
            return;
        }
        out.push_str("<div class=\"cta\">\n");
        for (at, action) in self.actions.iter().enumerate() {
            let class = if at == 0 { "btn" } else { "btn secondary" };
            out.push_str(&format!(
                "<a class=\"{}\" href=\"{}\">{}</a>\n",
                class,
                escape(&action.fragment),
                escape(&action.label)
            ));
        }
        out.push_str("</div>\n");
    }
}

impl Section {
    fn write(&self, out: &mut String) {
        if let Some(heading) = &self.heading {
            out.push_str(&format!(
                "<div class=\"section-title\">{}</div>\n",
                escape(heading)
            ));
        }
        match &self.body {
            Body::Grid { cards, empty_note } => {
                out.push_str("<div class=\"grid\">\n");
                if cards.is_empty() {
                    if let Some(note) = empty_note {
                        out.push_str(&format!("<div class=\"muted\">{}</div>\n", escape(note)));
                    }
                }
                for card in cards {
                    card.write(out);
                }
                out.push_str("</div>\n");
            }
            Body::Detail(detail) => detail.write(out),
            Body::Converter(form) => form.write(out),
        }
    }
}

impl Card {
    fn write(&self, out: &mut String) {
        match &self.target {
            Some(target) => out.push_str(&format!(
                "<a class=\"card\" href=\"{}\">\n",
                escape(target)
            )),
            None => out.push_str("<div class=\"card\">\n"),
        }
        out.push_str(&format!("<h3>{}</h3>\n", escape(&self.title)));
        if let Some(subtitle) = &self.subtitle {
            out.push_str(&format!("<p>{}</p>\n", escape(subtitle)));
        }
        if !self.chips.is_empty() {
            out.push_str("<div class=\"chip-row\">");
            for chip in &self.chips {
                out.push_str(&format!("<span class=\"chip\">{}</span>", escape(chip)));
            }
            out.push_str("</div>\n");
        }
        if let Some(snippet) = &self.snippet {
            out.push_str(&format!("<pre><code>{}</code></pre>\n", escape(snippet)));
        }
        out.push_str(if self.target.is_some() { "</a>\n" } else { "</div>\n" });
    }
}

impl Detail {
    fn write(&self, out: &mut String) {
        out.push_str("<div class=\"panel\">\n");
        out.push_str(&format!("<p>{}</p>\n", escape(&self.text)));
        if let Some(back) = &self.back {
            out.push_str(&format!(
                "<a class=\"btn secondary\" href=\"{}\">{}</a>\n",
                escape(&back.fragment),
                escape(&back.label)
            ));
        }
        out.push_str("</div>\n");
        if let Some(example) = &self.example {
            out.push_str("<div class=\"section-title\">Example</div>\n");
            out.push_str("<div class=\"split\">\n");
            out.push_str(&format!(
                "<div class=\"stack\"><div class=\"section-title\">Code</div><pre><code>{}</code></pre></div>\n",
                escape(&example.code)
            ));
            out.push_str(&format!(
                "<div class=\"stack\"><div class=\"section-title\">Output</div><div class=\"panel\"><pre>{}</pre></div></div>\n",
                escape(&example.output)
            ));
            out.push_str("</div>\n");
        }
    }
}

impl ConverterForm {
    fn write(&self, out: &mut String) {
        out.push_str("<div class=\"split\">\n");
        out.push_str(&format!(
            "<div class=\"stack\"><label>Value</label><input id=\"conv-input\" class=\"mono\" value=\"{}\" placeholder=\"e.g., 1011, FF, 42\" /></div>\n",
            escape(&self.value)
        ));
        write_base_select(out, "conv-from", "From base", self.from_base);
        write_base_select(out, "conv-to", "To base", self.to_base);
        out.push_str("</div>\n");
        out.push_str("<div class=\"panel\">\n<div class=\"section-title\">Result</div>\n");
        out.push_str(&format!(
            "<pre id=\"conv-result\" class=\"mono\">{}</pre>\n",
            escape(&self.result)
        ));
        out.push_str("</div>\n");
    }
}

fn write_base_select(out: &mut String, id: &str, label: &str, selected: u32) {
    out.push_str(&format!(
        "<div class=\"stack\"><label>{label}</label><select id=\"{id}\">"
    ));
    for base in 2..=36u32 {
        if base == selected {
            out.push_str(&format!("<option value=\"{base}\" selected>{base}</option>"));
        } else {
            out.push_str(&format!("<option value=\"{base}\">{base}</option>"));
        }
    }
    out.push_str("</select></div>\n");
}
