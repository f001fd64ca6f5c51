use once_cell::sync::Lazy;
use std::collections::BTreeMap;

/// Minimum number of players in a game
pub const MIN_PLAYERS: usize = 3;

/// Maximum number of players in a game
pub const MAX_PLAYERS: usize = 12;

/// Minimum number of impostors in a game
pub const MIN_IMPOSTORS: usize = 1;

/// Games older than this are evicted (1 hour)
pub const GAME_TTL_SECONDS: u64 = 3600;

/// Games sitting in the debate phase are evicted after 30 minutes
pub const DEBATE_GAME_TTL_SECONDS: u64 = 1800;

/// How often the background cleanup task runs
pub const CLEANUP_INTERVAL_SECONDS: u64 = 300;

/// Default category for a fresh configuration
pub const DEFAULT_CATEGORY: &str = "Lugares";

/// Words used when the AI provider is unavailable
pub const FALLBACK_WORDS: &[&str] = &[
    "Messi",
    "Shakira",
    "Elon Musk",
    "Brad Pitt",
    "Rihanna",
    "Beyoncé",
    "Cristiano Ronaldo",
];

/// Predefined word categories, keyed by category name
pub static PREDEFINED_CATEGORIES: Lazy<BTreeMap<&'static str, &'static [&'static str]>> =
    Lazy::new(|| {
        let mut categories: BTreeMap<&'static str, &'static [&'static str]> = BTreeMap::new();
        categories.insert(
            "Lugares",
            &[
                "París",
                "Playa",
                "Bosque",
                "Estación Espacial",
                "Zoológico",
                "Biblioteca",
                "Gimnasio",
                "Cinema",
                "Casino",
                "Circo",
            ],
        );
        categories.insert(
            "Animales",
            &[
                "León",
                "Pingüino",
                "Delfín",
                "Elefante",
                "Jirafa",
                "Murciélago",
                "Cocodrilo",
                "Canguro",
                "Búho",
            ],
        );
        categories.insert(
            "Objetos",
            &[
                "Smartphone",
                "Paraguas",
                "Telescopio",
                "Microondas",
                "Guitarra",
                "Bicicleta",
                "Cámara",
                "Reloj",
            ],
        );
        categories.insert(
            "Comida",
            &[
                "Pizza",
                "Sushi",
                "Hamburguesa",
                "Taco",
                "Helado",
                "Paella",
                "Croissant",
                "Manzana",
            ],
        );
        categories
    });

/// Look up the word list of a predefined category
pub fn category_words(name: &str) -> Option<&'static [&'static str]> {
    PREDEFINED_CATEGORIES.get(name).copied()
}
