//! Construct pattern tables
//!
//! Table order is priority order: entries are hand-ordered from most
//! specific to least, and the first entry that matches wins.

use regex::Regex;
use teach_core::ClassificationResult;

#[derive(Debug, Clone)]
pub struct ConstructPattern {
    pub construct: String,
    pub regex: Regex,
    pub confidence: f64,
    pub details: Option<String>,
}

impl ConstructPattern {
    pub fn new(
        construct: impl Into<String>,
        regex: Regex,
        confidence: f64,
        details: Option<&str>,
    ) -> Self {
        Self {
            construct: construct.into(),
            regex,
            confidence,
            details: details.map(String::from),
        }
    }

    pub fn to_result(&self) -> ClassificationResult {
        ClassificationResult::new(&*self.construct, self.confidence, self.details.as_deref())
    }
}

/// Ordered patterns for one language
#[derive(Debug, Clone)]
pub struct LanguageTable {
    pub name: String,
    pub patterns: Vec<ConstructPattern>,
}

impl LanguageTable {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            patterns: Vec::new(),
        }
    }

    /// First entry matching `code`
    pub fn first_match(&self, code: &str) -> Option<&ConstructPattern> {
        self.patterns.iter().find(|p| p.regex.is_match(code))
    }

    /// Append then re-sort by descending confidence. The sort is stable, so
    /// equal-confidence entries keep insertion order.
    pub fn insert(&mut self, pattern: ConstructPattern) {
        self.patterns.push(pattern);
        self.patterns.sort_by(|a, b| {
            b.confidence
                .partial_cmp(&a.confidence)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
    }
}

type Entry = (&'static str, &'static str, f64, &'static str);

const PYTHON: &[Entry] = &[
    ("async function", r"async\s+def\s+\w+", 0.9, "Asynchronous function definition"),
    ("function", r"def\s+\w+\s*\(", 0.9, "Function definition"),
    ("class", r"class\s+\w+(?:\([^)]*\))?:", 0.9, "Class definition"),
    ("decorator", r"@\w+", 0.8, "Python decorator"),
    ("context manager", r"with\s+.+\s+as\s+\w+:", 0.8, "Context manager usage"),
    ("list comprehension", r"\[.+\s+for\s+.+\s+in\s+.+\]", 0.8, "List comprehension"),
    ("generator", r"yield\s+", 0.8, "Generator function"),
    ("lambda", r"lambda\s+.*:", 0.7, "Lambda function"),
];

const JAVASCRIPT: &[Entry] = &[
    ("async function", r"async\s+(?:function|\w+|\(.*\)\s*=>)", 0.9, "Asynchronous function"),
    ("arrow function", r"\(.*\)\s*=>", 0.8, "Arrow function expression"),
    ("function", r"function\s+\w+\s*\(", 0.9, "Function declaration"),
    ("class", r"class\s+\w+(?:\s+extends\s+\w+)?", 0.9, "ES6 class"),
    ("React hook", r"use[A-Z]\w*", 0.8, "React hook usage"),
    (
        "React component",
        r"(?:function|const)\s+[A-Z]\w*.*(?:return\s*\(|=>.*<)",
        0.8,
        "React functional component",
    ),
    ("object destructuring", r"const\s*\{[^}]+\}\s*=", 0.7, "Object destructuring assignment"),
    ("array destructuring", r"const\s*\[[^\]]+\]\s*=", 0.7, "Array destructuring assignment"),
    ("promise", r"\.then\(|\.catch\(|new Promise", 0.7, "Promise usage"),
    ("import statement", r"import\s+.*\s+from\s+", 0.9, "ES6 import"),
    (
        "export statement",
        r"export\s+(?:default\s+|const\s+|function\s+|class\s+)",
        0.9,
        "ES6 export",
    ),
];

const TYPESCRIPT: &[Entry] = &[
    ("interface", r"interface\s+\w+", 0.9, "TypeScript interface"),
    ("type alias", r"type\s+\w+\s*=", 0.9, "TypeScript type alias"),
    ("generic function", r"function\s+\w+<[^>]+>", 0.8, "Generic function"),
    ("enum", r"enum\s+\w+", 0.9, "TypeScript enum"),
];

const GO: &[Entry] = &[
    ("function", r"func\s+\w*\s*\(", 0.9, "Go function"),
    ("method", r"func\s*\([^)]+\)\s+\w+\s*\(", 0.9, "Go method with receiver"),
    ("struct", r"type\s+\w+\s+struct", 0.9, "Go struct definition"),
    ("interface", r"type\s+\w+\s+interface", 0.9, "Go interface"),
    ("goroutine", r"go\s+\w+\(", 0.8, "Goroutine launch"),
    ("channel operation", r"<-|->|make\(chan", 0.7, "Channel usage"),
];

const RUST: &[Entry] = &[
    ("function", r"fn\s+\w+\s*\(", 0.9, "Rust function"),
    ("struct", r"struct\s+\w+", 0.9, "Rust struct"),
    ("enum", r"enum\s+\w+", 0.9, "Rust enum"),
    ("impl block", r"impl(?:\s*<[^>]*>)?\s+(?:\w+\s+for\s+)?\w+", 0.8, "Implementation block"),
    ("trait", r"trait\s+\w+", 0.9, "Rust trait"),
    ("macro", r"\w+!", 0.6, "Macro invocation"),
];

const GENERIC: &[Entry] = &[
    (
        "comment block",
        r"(?s:/\*.*?\*/)|//.*|#.*|(?s:<!--.*?-->)",
        0.9,
        "Comment or documentation",
    ),
    ("conditional", r"if\s*\(|if\s+\w+", 0.7, "Conditional statement"),
    ("loop", r"for\s*\(|while\s*\(|for\s+\w+", 0.7, "Loop construct"),
    ("try-catch", r"try\s*\{|catch\s*\(|except\s*:", 0.8, "Error handling"),
    (
        "variable assignment",
        r"(?m)(?:let|const|var|auto)\s+\w+\s*=|^\s*\w+\s*=",
        0.6,
        "Variable declaration/assignment",
    ),
    ("return statement", r"return\s+", 0.7, "Return statement"),
];

fn compile(name: &str, entries: &[Entry]) -> LanguageTable {
    let patterns = entries
        .iter()
        .map(|(construct, pattern, confidence, details)| {
            // Table expressions are fixed literals covered by tests
            let regex = Regex::new(pattern).expect("built-in construct pattern must compile");
            ConstructPattern::new(*construct, regex, *confidence, Some(*details))
        })
        .collect();

    LanguageTable {
        name: name.to_string(),
        patterns,
    }
}

/// Built-in language tables, in registration order
pub fn builtin_tables() -> Vec<LanguageTable> {
    vec![
        compile("python", PYTHON),
        compile("javascript", JAVASCRIPT),
        compile("typescript", TYPESCRIPT),
        compile("go", GO),
        compile("rust", RUST),
    ]
}

/// Language-agnostic fallback table
pub fn generic_table() -> LanguageTable {
    compile("generic", GENERIC)
}
