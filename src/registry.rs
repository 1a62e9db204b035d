//! Entity model and the registry that keeps it.
//!
//! The registry is built once from catalog data and never mutated afterwards.
//! Views borrow entities from it; absence is always an `Option`, never a
//! panic, since route captures arrive straight from user-controlled input.

// keepers index their collections by id for constant time lookup
use std::collections::hash_map::Entry;
use std::collections::HashMap;

use tracing::warn;

// ------------- Language -------------

/// A programming language and everything published under it. The nested
/// collections may be empty, in which case the matching subpages are not
/// offered for the language.
#[derive(Debug, Clone)]
pub struct Language {
    pub id: String,
    pub name: String,
    pub description: String,
    /// What this language calls its tag groups ("Tags", "Keywords", ...).
    pub categories_label: Option<String>,
    pub functions: Vec<Function>,
    pub uses: Vec<Use>,
    pub tag_groups: Vec<TagGroup>,
    pub examples: Vec<Example>,
}

impl Language {
    pub fn function(&self, id: &str) -> Option<&Function> {
        self.functions.iter().find(|f| f.id == id)
    }
    pub fn use_case(&self, id: &str) -> Option<&Use> {
        self.uses.iter().find(|u| u.id == id)
    }
    pub fn tag_group(&self, id: &str) -> Option<&TagGroup> {
        self.tag_groups.iter().find(|g| g.id == id)
    }
}

/// A built-in function or library routine.
#[derive(Debug, Clone)]
pub struct Function {
    pub id: String,
    pub name: String,
    pub brief: String,
    pub detail: String,
}

/// A practical application area of a language.
#[derive(Debug, Clone)]
pub struct Use {
    pub id: String,
    pub name: String,
    pub brief: String,
    pub detail: String,
}

/// A named group of tag items, such as HTML form tags or Python keywords.
#[derive(Debug, Clone)]
pub struct TagGroup {
    pub id: String,
    pub group_name: String,
    /// What a single member is called when the group asks the reader to pick
    /// one ("Tag", "Keyword", ...).
    pub items_label: Option<String>,
    pub items: Vec<TagItem>,
}

impl TagGroup {
    pub fn item(&self, id: &str) -> Option<&TagItem> {
        self.items.iter().find(|i| i.id == id)
    }
}

#[derive(Debug, Clone)]
pub struct TagItem {
    pub id: String,
    pub name: String,
    pub brief: String,
    pub detail: String,
    pub example: Option<ItemExample>,
}

/// A worked code/output pair attached to a tag item.
#[derive(Debug, Clone)]
pub struct ItemExample {
    pub code: String,
    pub output: String,
}

/// A standalone snippet shown on a language's examples page.
#[derive(Debug, Clone)]
pub struct Example {
    pub title: String,
    pub code: String,
}

// ------------- Number systems and coding schemes -------------

#[derive(Debug, Clone)]
pub struct NumberSystem {
    pub id: String,
    pub name: String,
    pub detail: String,
}

#[derive(Debug, Clone)]
pub struct CodingScheme {
    pub id: String,
    pub name: String,
    pub detail: String,
}

// ------------- Registry -------------

/// The immutable collection of everything the catalog can show.
///
/// Each top level collection keeps its registration order, which is also the
/// display order, alongside an id index. Duplicate ids keep the first
/// registration and log a warning rather than failing construction.
#[derive(Debug)]
pub struct Registry {
    languages: Vec<Language>,
    language_index: HashMap<String, usize>,
    number_systems: Vec<NumberSystem>,
    number_system_index: HashMap<String, usize>,
    coding_schemes: Vec<CodingScheme>,
    coding_scheme_index: HashMap<String, usize>,
}

impl Registry {
    pub fn new(
        languages: Vec<Language>,
        number_systems: Vec<NumberSystem>,
        coding_schemes: Vec<CodingScheme>,
    ) -> Self {
        let language_index = index_of("language", languages.iter().map(|l| l.id.as_str()));
        let number_system_index =
            index_of("number system", number_systems.iter().map(|n| n.id.as_str()));
        let coding_scheme_index =
            index_of("coding scheme", coding_schemes.iter().map(|c| c.id.as_str()));
        Self {
            languages,
            language_index,
            number_systems,
            number_system_index,
            coding_schemes,
            coding_scheme_index,
        }
    }

    pub fn find_language(&self, id: &str) -> Option<&Language> {
        self.language_index.get(id).map(|&at| &self.languages[at])
    }
    pub fn find_function(&self, language_id: &str, function_id: &str) -> Option<&Function> {
        self.find_language(language_id)?.function(function_id)
    }
    pub fn find_use(&self, language_id: &str, use_id: &str) -> Option<&Use> {
        self.find_language(language_id)?.use_case(use_id)
    }
    pub fn find_tag_group(&self, language_id: &str, group_id: &str) -> Option<&TagGroup> {
        self.find_language(language_id)?.tag_group(group_id)
    }
    pub fn find_tag_item(
        &self,
        language_id: &str,
        group_id: &str,
        item_id: &str,
    ) -> Option<&TagItem> {
        self.find_tag_group(language_id, group_id)?.item(item_id)
    }
    pub fn find_number_system(&self, id: &str) -> Option<&NumberSystem> {
        self.number_system_index
            .get(id)
            .map(|&at| &self.number_systems[at])
    }
    pub fn find_coding_scheme(&self, id: &str) -> Option<&CodingScheme> {
        self.coding_scheme_index
            .get(id)
            .map(|&at| &self.coding_schemes[at])
    }

    /// Languages in registration order, narrowed by a search filter when one
    /// is given. The filter is trimmed, compared case insensitively, and
    /// matches against name or description.
    pub fn list_languages(&self, filter: Option<&str>) -> Vec<&Language> {
        let needle = filter.unwrap_or("").trim().to_lowercase();
        self.languages
            .iter()
            .filter(|l| {
                needle.is_empty()
                    || l.name.to_lowercase().contains(&needle)
                    || l.description.to_lowercase().contains(&needle)
            })
            .collect()
    }

    pub fn languages(&self) -> &[Language] {
        &self.languages
    }
    pub fn number_systems(&self) -> &[NumberSystem] {
        &self.number_systems
    }
    pub fn coding_schemes(&self) -> &[CodingScheme] {
        &self.coding_schemes
    }
}

// First registration wins when an id repeats.
fn index_of<'a>(kind: &'static str, ids: impl Iterator<Item = &'a str>) -> HashMap<String, usize> {
    let mut index = HashMap::new();
    for (at, id) in ids.enumerate() {
        match index.entry(id.to_owned()) {
            Entry::Vacant(slot) => {
                slot.insert(at);
            }
            Entry::Occupied(_) => {
                warn!(kind, id, "duplicate id, keeping the first registration");
            }
        }
    }
    index
}
