use std::collections::HashSet;

use once_cell::sync::Lazy;

/// Topic catalogue with the keyword stems that mark an answer as on-topic.
///
/// Stems are matched as substrings of spoken words, so `"commute"` also
/// counts `"commuters"`.
const TOPIC_VOCABULARY: &[(&str, &[&str])] = &[
    (
        "Hometown",
        &[
            "historic",
            "district",
            "landmark",
            "skyscraper",
            "contrast",
            "infrastructure",
            "bustling",
            "serene",
            "suburb",
            "metropolis",
            "commute",
            "heritage",
            "renovation",
            "pedestrian",
        ],
    ),
    (
        "Mirrors",
        &[
            "reflection",
            "appearance",
            "grooming",
            "vain",
            "vanity",
            "functionality",
            "confidence",
            "image",
            "distorted",
            "perceive",
            "aesthetic",
            "scrutinize",
        ],
    ),
    (
        "Sitting",
        &[
            "sedentary",
            "lifestyle",
            "posture",
            "stationary",
            "stiffness",
            "active",
            "ergonomic",
            "circulation",
            "lethargic",
            "inactivity",
            "prolonged",
        ],
    ),
    (
        "Work/Studies",
        &[
            "deadline",
            "simultaneously",
            "demanding",
            "prioritize",
            "organizational",
            "pressure",
            "career",
            "profession",
            "curriculum",
            "assignment",
            "colleague",
            "collaboration",
        ],
    ),
    (
        "Old Buildings",
        &[
            "preserve",
            "demolish",
            "architectural",
            "heritage",
            "cultural",
            "identity",
            "restoration",
            "maintenance",
            "construct",
            "modernization",
            "facade",
        ],
    ),
    (
        "Coffee & Tea",
        &[
            "enthusiast",
            "caffeine",
            "boost",
            "productivity",
            "aroma",
            "ritual",
            "brew",
            "stimulant",
            "beverage",
            "consumption",
            "habit",
            "energize",
        ],
    ),
    (
        "Small Businesses",
        &[
            "corporation",
            "boutique",
            "artisanal",
            "unique",
            "personalized",
            "chain",
            "franchise",
            "entrepreneur",
            "local",
            "economy",
            "customer",
            "service",
        ],
    ),
    (
        "Making Lists",
        &[
            "digital",
            "synchronization",
            "device",
            "cloud",
            "organize",
            "memory",
            "productive",
            "schedule",
            "checklist",
            "reminder",
            "efficiency",
            "handwritten",
        ],
    ),
    (
        "Stories",
        &[
            "captivated",
            "narrate",
            "imagination",
            "language",
            "folk",
            "tale",
            "plot",
            "character",
            "fictional",
            "genre",
            "moral",
            "creativity",
        ],
    ),
    (
        "Machines",
        &[
            "indispensable",
            "equipment",
            "multi-functional",
            "facilitates",
            "leisure",
            "automation",
            "device",
            "appliance",
            "technology",
            "efficiency",
            "mechanism",
        ],
    ),
];

/// Band 7+ vocabulary that earns lexical credit on any topic.
pub static ADVANCED_VOCABULARY: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    HashSet::from([
        "captivating",
        "stark",
        "indispensable",
        "facilitates",
        "tangible",
        "consequently",
        "furthermore",
        "nevertheless",
        "predominantly",
        "substantially",
        "aesthetic",
        "pragmatic",
        "tedious",
        "monotonous",
        "invigorating",
        "nostalgic",
        "reminiscent",
        "impeccable",
        "meticulous",
        "spontaneous",
        "deliberate",
        "crucial",
        "significant",
        "aspect",
        "perspective",
        "notion",
        "controversial",
        "hypothesis",
        "implementation",
        "comprehensive",
        "integration",
        "phenomenon",
        "unprecedented",
        "ambiguous",
        "arbitrary",
        "coherent",
        "exquisite",
        "vibrant",
        "bustling",
        "harrowing",
        "compelling",
        "exhilarating",
        "daunting",
        "lucrative",
        "detrimental",
        "inevitable",
        "fundamental",
    ])
});

/// Overused, imprecise words that hold a band 4-5 answer back.
pub static BASIC_VOCABULARY: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    HashSet::from([
        "good", "bad", "nice", "happy", "sad", "big", "small", "thing", "stuff", "very", "really",
        "like", "lot", "lots", "get", "got",
    ])
});

/// Hesitation tokens. Multi-word entries are matched against consecutive words.
pub const FILLERS: &[&str] = &["um", "uh", "ah", "like", "you know", "sort of", "kind of"];

pub fn is_advanced(word: &str) -> bool {
    ADVANCED_VOCABULARY.contains(word)
}

pub fn is_basic(word: &str) -> bool {
    BASIC_VOCABULARY.contains(word)
}

/// Keyword stems for `topic`, or an empty slice when the topic is unknown.
pub fn topic_keywords(topic: &str) -> &'static [&'static str] {
    TOPIC_VOCABULARY
        .iter()
        .find(|(name, _)| *name == topic)
        .map(|(_, stems)| *stems)
        .unwrap_or(&[])
}

/// Known topic labels in catalogue order.
pub fn topics() -> impl Iterator<Item = &'static str> {
    TOPIC_VOCABULARY.iter().map(|(name, _)| *name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topics_in_catalogue_order() {
        let names: Vec<_> = topics().collect();
        assert_eq!(names.len(), 10);
        assert_eq!(names[0], "Hometown");
        assert_eq!(names[9], "Machines");
    }

    #[test]
    fn test_unknown_topic_has_no_keywords() {
        assert!(topic_keywords("Space Travel").is_empty());
    }

    #[test]
    fn test_topic_lookup_is_exact() {
        assert!(topic_keywords("hometown").is_empty());
        assert!(topic_keywords("Hometown").contains(&"commute"));
    }

    #[test]
    fn test_vocabulary_membership() {
        assert!(is_advanced("crucial"));
        assert!(!is_advanced("good"));
        assert!(is_basic("stuff"));
        assert!(!is_basic("crucial"));
    }

    #[test]
    fn test_tables_are_lowercase() {
        assert!(ADVANCED_VOCABULARY
            .iter()
            .chain(BASIC_VOCABULARY.iter())
            .all(|w| *w == w.to_lowercase()));
    }
}
