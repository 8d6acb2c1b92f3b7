//! Person mention extraction from free-form text
//!
//! Fixed linguistic cues, no NLP: relationship nouns anchor the mention, a
//! preceding non-determiner word is taken as the name, quality snippets
//! follow "was"/"always"/"loved"-style cues, anecdote snippets follow
//! "remember when"-style cues. When a relationship noun appears with no
//! usable name, the noun itself becomes the person key ("mom").

use std::collections::BTreeSet;

use crate::memory::PersonUpdate;

/// Relationship noun -> canonical relationship label
const RELATIONSHIPS: &[(&str, &str)] = &[
    ("mom", "mother"),
    ("mother", "mother"),
    ("dad", "father"),
    ("father", "father"),
    ("sister", "sister"),
    ("brother", "brother"),
    ("wife", "wife"),
    ("husband", "husband"),
    ("partner", "partner"),
    ("friend", "friend"),
    ("grandma", "grandmother"),
    ("grandmother", "grandmother"),
    ("grandpa", "grandfather"),
    ("grandfather", "grandfather"),
    ("aunt", "aunt"),
    ("uncle", "uncle"),
    ("daughter", "daughter"),
    ("son", "son"),
];

/// Words that cannot be a name when found before a relationship noun
const NOT_A_NAME: &[&str] = &[
    "my", "our", "the", "a", "an", "his", "her", "their", "your", "to", "with", "about", "and",
    "for", "of", "dear", "late",
];

/// A quality snippet follows one of these
const QUALITY_CUES: &[&str] = &["was", "always", "loved", "enjoyed", "liked"];

/// An anecdote snippet follows one of these
const ANECDOTE_CUES: &[&str] = &["remember when", "used to", "would always", "miss"];

const QUALITY_TERMINATORS: &[char] = &['.', ',', '!', '?'];
const ANECDOTE_TERMINATORS: &[char] = &['.', '!', '?'];

/// A person reference pulled out of one utterance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonMention {
    /// Key the memory store will use ("Mom", "Rose", ...)
    pub name: String,
    pub relationship: Option<String>,
    pub qualities: BTreeSet<String>,
    pub anecdote: Option<String>,
}

impl PersonMention {
    /// Convert into a memory-store update
    pub fn to_update(&self) -> PersonUpdate {
        PersonUpdate {
            name: self.name.clone(),
            relationship: self.relationship.clone(),
            qualities: self.qualities.clone(),
            anecdotes: self.anecdote.iter().cloned().collect(),
            ..Default::default()
        }
    }
}

/// Extract a mentioned person, or `None` when no relationship noun appears
pub fn extract_person(text: &str) -> Option<PersonMention> {
    let lowered = text.to_lowercase();
    let words: Vec<&str> = lowered
        .split_whitespace()
        .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|w| !w.is_empty())
        .collect();

    let mut name: Option<String> = None;
    let mut relationship: Option<&str> = None;

    'relationship: for &(noun, canonical) in RELATIONSHIPS {
        for (i, word) in words.iter().enumerate() {
            if *word == noun {
                relationship = Some(canonical);
                if i > 0 && !NOT_A_NAME.contains(&words[i - 1]) {
                    name = Some(capitalize(words[i - 1]));
                } else {
                    name = Some(capitalize(noun));
                }
                break 'relationship;
            }
        }
    }

    let name = name?;

    let qualities = QUALITY_CUES
        .iter()
        .filter_map(|cue| snippet_after(&lowered, cue, QUALITY_TERMINATORS))
        .collect();

    let anecdote = ANECDOTE_CUES
        .iter()
        .find_map(|cue| snippet_after(&lowered, cue, ANECDOTE_TERMINATORS));

    Some(PersonMention {
        name,
        relationship: relationship.map(String::from),
        qualities,
        anecdote,
    })
}

/// The text after the first occurrence of `cue`, up to a terminator or the
/// end of the text. Cues are matched on word boundaries so "was" does not
/// fire inside "wash".
fn snippet_after(lowered: &str, cue: &str, terminators: &[char]) -> Option<String> {
    let mut search_from = 0;
    while let Some(offset) = lowered[search_from..].find(cue) {
        let start = search_from + offset;
        let end = start + cue.len();
        let boundary_before = start == 0
            || !lowered[..start]
                .chars()
                .next_back()
                .is_some_and(char::is_alphanumeric);
        let boundary_after = !lowered[end..].chars().next().is_some_and(char::is_alphanumeric);

        if boundary_before && boundary_after {
            let tail = &lowered[end..];
            let cut = tail.find(terminators).unwrap_or(tail.len());
            let snippet = tail[..cut].trim();
            return (!snippet.is_empty()).then(|| snippet.to_string());
        }
        search_from = end;
    }
    None
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
