//! Built-in retail vocabulary.
//!
//! Weights favor unambiguous cues ("aisle", "ingredient") over soft ones
//! ("near", "fresh"). Term lists are a content decision: deployments with
//! their own vocabulary load a JSON dictionary instead (see
//! [`KeywordDictionary::from_file`](crate::keywords::KeywordDictionary::from_file)).
//! Terms are stemmed at dictionary build time, so plural forms here are
//! redundant but harmless.

/// Location-intent terms with weights.
pub const LOCATION_TERMS: &[(&str, f64)] = &[
    // Direct location queries
    ("where", 1.0),
    ("find", 1.0),
    ("located", 1.0),
    ("locate", 1.0),
    ("location", 1.0),
    ("position", 0.9),
    ("place", 0.9),
    ("spot", 0.8),
    // Aisle and section terms
    ("aisle", 1.0),
    ("section", 1.0),
    ("shelf", 1.0),
    ("bay", 0.9),
    ("row", 0.8),
    ("corridor", 0.7),
    ("hallway", 0.7),
    // Proximity terms
    ("near", 0.9),
    ("beside", 0.8),
    ("around", 0.7),
    // Directional terms
    ("left", 0.6),
    ("right", 0.6),
    ("front", 0.6),
    ("back", 0.6),
    ("middle", 0.5),
    // Store layout terms
    ("entrance", 0.7),
    ("exit", 0.7),
    ("checkout", 0.6),
    ("register", 0.6),
    ("counter", 0.5),
];

/// Information-intent terms with weights.
pub const INFORMATION_TERMS: &[(&str, f64)] = &[
    // Nutrition
    ("ingredient", 1.0),
    ("nutrition", 1.0),
    ("calorie", 1.0),
    ("protein", 0.9),
    ("carb", 0.9),
    ("carbohydrate", 0.9),
    ("fat", 0.9),
    ("sugar", 0.9),
    ("sodium", 0.9),
    ("fiber", 0.8),
    ("vitamin", 0.8),
    ("mineral", 0.8),
    // Dietary restrictions
    ("vegan", 1.0),
    ("vegetarian", 1.0),
    ("gluten-free", 1.0),
    ("dairy-free", 1.0),
    ("lactose-free", 1.0),
    ("halal", 1.0),
    ("kosher", 1.0),
    ("keto", 0.9),
    ("paleo", 0.9),
    ("organic", 0.8),
    // Allergens
    ("allergen", 1.0),
    ("allergy", 1.0),
    ("allergic", 0.9),
    ("contain", 0.8),
    ("nut", 0.7),
    ("peanut", 0.7),
    ("soy", 0.7),
    ("shellfish", 0.7),
    // Product details
    ("price", 1.0),
    ("cost", 1.0),
    ("expensive", 0.8),
    ("cheap", 0.8),
    ("size", 1.0),
    ("weight", 0.9),
    ("volume", 0.9),
    // Shelf life and policies
    ("expiration", 1.0),
    ("expiry", 1.0),
    ("expire", 1.0),
    ("warranty", 1.0),
    ("guarantee", 1.0),
    ("fresh", 0.8),
    ("frozen", 0.8),
    // Usage and preparation
    ("recipe", 0.8),
    ("instruction", 0.8),
    ("cook", 0.8),
    ("prepare", 0.8),
    ("storage", 0.7),
    // Quality
    ("quality", 0.8),
    ("rating", 0.8),
    ("review", 0.8),
    ("recommend", 0.8),
];

/// Negation markers. Contractions appear with and without the apostrophe
/// because speech-to-text output is inconsistent about them.
pub const NEGATION_TERMS: &[&str] = &[
    "not",
    "no",
    "don't",
    "dont",
    "doesn't",
    "doesnt",
    "isn't",
    "isnt",
    "aren't",
    "arent",
    "won't",
    "wont",
    "can't",
    "cant",
    "couldn't",
    "couldnt",
    "shouldn't",
    "shouldnt",
    "wouldn't",
    "wouldnt",
    "never",
    "none",
    "nothing",
    "nowhere",
    "without",
];
