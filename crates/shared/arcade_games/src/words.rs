#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum WordCategory {
    Programming,
    Web,
    General,
    Computer,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WordEntry {
    pub word: String,
    pub hint: String,
    pub category: Option<WordCategory>,
}

impl WordEntry {
    pub fn new(word: &str, hint: &str) -> Self {
        Self {
            word: word.to_string(),
            hint: hint.to_string(),
            category: None,
        }
    }

    pub fn with_category(mut self, category: WordCategory) -> Self {
        self.category = Some(category);
        self
    }
}

const BUILTIN: &[(&str, &str, WordCategory)] = &[
    ("REACT", "A JavaScript library for building user interfaces", WordCategory::Web),
    ("TYPESCRIPT", "JavaScript with syntax for types", WordCategory::Programming),
    ("NEXTJS", "React framework for production", WordCategory::Web),
    ("TAILWIND", "Utility-first CSS framework", WordCategory::Web),
    ("JAVASCRIPT", "Programming language of the web", WordCategory::Programming),
    ("DEVELOPER", "Person who writes code", WordCategory::General),
    ("PROGRAMMING", "Writing instructions for computers", WordCategory::General),
    ("DATABASE", "Organized collection of data", WordCategory::Computer),
    ("ALGORITHM", "Step-by-step procedure for calculations", WordCategory::Programming),
    ("INTERFACE", "Point of interaction between components", WordCategory::Computer),
    ("FRONTEND", "Client-side of web applications", WordCategory::Web),
    ("BACKEND", "Server-side of applications", WordCategory::Web),
    ("COMPILER", "Translates code to machine language", WordCategory::Computer),
    ("FUNCTION", "Reusable block of code", WordCategory::Programming),
    ("VARIABLE", "Container for storing data", WordCategory::Programming),
    ("FRAMEWORK", "Foundation for building applications", WordCategory::Programming),
    ("DEBUGGING", "Finding and fixing code errors", WordCategory::Programming),
    ("REPOSITORY", "Storage location for code projects", WordCategory::Computer),
    ("COMPONENT", "Reusable UI building block", WordCategory::Web),
    ("MIDDLEWARE", "Software that connects components", WordCategory::Computer),
    ("RESPONSIVE", "Adapts to different screen sizes", WordCategory::Web),
    ("DEPLOYMENT", "Process of making code live", WordCategory::General),
    ("ENCRYPTION", "Securing data with code", WordCategory::Computer),
    ("ITERATION", "Repeating a process", WordCategory::Programming),
    ("BOOTSTRAP", "Popular CSS framework", WordCategory::Web),
    ("RECURSION", "Function calling itself", WordCategory::Programming),
    ("SERVERLESS", "Cloud computing execution model", WordCategory::Computer),
    ("PROTOTYPE", "Early version of a product", WordCategory::General),
    ("ANIMATION", "Making elements move on screen", WordCategory::Web),
    ("REFACTOR", "Restructuring existing code", WordCategory::Programming),
];

/// The built-in word-scramble pool.
pub fn builtin_words() -> Vec<WordEntry> {
    BUILTIN
        .iter()
        .map(|&(word, hint, category)| WordEntry::new(word, hint).with_category(category))
        .collect()
}
