//! Language auto-detection

use std::sync::LazyLock;

use regex::Regex;

// Checked in order; the first language whose signature matches wins
static DETECTORS: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    [
        ("python", r"def\s+\w+\(|import\s+\w+|from\s+\w+\s+import"),
        ("javascript", r"function\s*\(|=>\s*\{|const\s+\w+\s*="),
        (
            "typescript",
            r"interface\s+\w+|type\s+\w+\s*=|:\s*\w+(?:\[\])?(?:\s*\||\s*&|\s*;|\s*,)",
        ),
        ("go", r"func\s+\w*\s*\(|package\s+\w+|import\s*\("),
        ("rust", r"fn\s+\w+\s*\(|struct\s+\w+|impl\s+"),
        ("java", r"public\s+class|private\s+\w+|public\s+static"),
        ("csharp", r"public\s+class|namespace\s+\w+|using\s+System"),
        ("cpp", r"#include\s*<|std::|template\s*<"),
        ("php", r"<\?php|function\s+\w+\s*\(.*\)\s*\{|\$\w+\s*="),
    ]
    .into_iter()
    .map(|(language, pattern)| (language, Regex::new(pattern).unwrap()))
    .collect()
});

/// Guess the language of a snippet from syntax signatures
pub fn detect_language(code: &str) -> Option<&'static str> {
    DETECTORS
        .iter()
        .find(|(_, regex)| regex.is_match(code))
        .map(|(language, _)| *language)
}

/// Map a file extension (without the dot) to a language name
pub fn language_from_extension(ext: &str) -> Option<&'static str> {
    let language = match ext.to_ascii_lowercase().as_str() {
        "js" | "jsx" => "javascript",
        "ts" | "tsx" => "typescript",
        "py" => "python",
        "go" => "go",
        "rs" => "rust",
        "java" => "java",
        "cpp" => "cpp",
        "c" => "c",
        "cs" => "csharp",
        "php" => "php",
        "rb" => "ruby",
        "sh" | "bash" | "zsh" => "bash",
        _ => return None,
    };
    Some(language)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_common_languages() {
        assert_eq!(detect_language("def greet(name):\n    pass"), Some("python"));
        assert_eq!(detect_language("const x = () => { return 1 }"), Some("javascript"));
        assert_eq!(detect_language("interface Props { id: number; }"), Some("typescript"));
        assert_eq!(detect_language("package main"), Some("go"));
        assert_eq!(detect_language("fn main() {}"), Some("rust"));
        assert_eq!(detect_language("#include <stdio.h>"), Some("cpp"));
        assert_eq!(detect_language("<?php echo 'hi';"), Some("php"));
    }

    #[test]
    fn test_detection_order_resolves_overlaps() {
        // Matches both java and csharp signatures; java is checked first
        assert_eq!(detect_language("public class Foo {}"), Some("java"));
        // Matches php's function signature, which is checked last
        assert_eq!(detect_language("function add(a,b){return a+b;}"), Some("php"));
    }

    #[test]
    fn test_no_detection() {
        assert_eq!(detect_language("hello world"), None);
    }

    #[test]
    fn test_language_from_extension() {
        assert_eq!(language_from_extension("tsx"), Some("typescript"));
        assert_eq!(language_from_extension("RS"), Some("rust"));
        assert_eq!(language_from_extension("zsh"), Some("bash"));
        assert_eq!(language_from_extension("md"), None);
    }
}
