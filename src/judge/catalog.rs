//! The fixed problem catalog.
//!
//! Problems live in `catalog.json` next to this file and are parsed once on
//! first access.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::{Result, VizError};

const CATALOG_JSON: &str = include_str!("catalog.json");

static CATALOG: Lazy<Result<Catalog>> = Lazy::new(|| {
    serde_json::from_str::<Catalog>(CATALOG_JSON).map_err(|e| VizError::Catalog(e.to_string()))
});

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Catalog {
    problems: Vec<Problem>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

/// Submission language. Only selects starter code; nothing is compiled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Java,
    Cpp,
    #[default]
    Python,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::Java, Language::Cpp, Language::Python];

    /// Key used in the catalog and on the command line.
    pub fn key(self) -> &'static str {
        match self {
            Language::Java => "java",
            Language::Cpp => "cpp",
            Language::Python => "python",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Language::Java => "Java",
            Language::Cpp => "C++",
            Language::Python => "Python",
        }
    }

    /// File extension for saved solutions.
    pub fn extension(self) -> &'static str {
        match self {
            Language::Java => "java",
            Language::Cpp => "cpp",
            Language::Python => "py",
        }
    }

    /// Guesses the language from a file extension.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "java" => Some(Language::Java),
            "cpp" | "cc" | "cxx" | "hpp" | "h" => Some(Language::Cpp),
            "py" => Some(Language::Python),
            _ => None,
        }
    }
}

impl FromStr for Language {
    type Err = VizError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "java" => Ok(Language::Java),
            "cpp" | "c++" => Ok(Language::Cpp),
            "python" | "py" => Ok(Language::Python),
            other => Err(VizError::UnknownLanguage(other.to_string())),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Example {
    pub input: String,
    pub output: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCase {
    pub input: String,
    pub expected_output: String,
    #[serde(default)]
    pub hidden: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StarterCode {
    pub java: String,
    pub cpp: String,
    pub python: String,
}

impl StarterCode {
    pub fn for_language(&self, language: Language) -> &str {
        match language {
            Language::Java => &self.java,
            Language::Cpp => &self.cpp,
            Language::Python => &self.python,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    pub id: String,
    pub title: String,
    pub difficulty: Difficulty,
    pub description: String,
    pub examples: Vec<Example>,
    pub constraints: Vec<String>,
    pub test_cases: Vec<TestCase>,
    pub starter_code: StarterCode,
}

impl Problem {
    pub fn visible_cases(&self) -> impl Iterator<Item = &TestCase> {
        self.test_cases.iter().filter(|c| !c.hidden)
    }

    pub fn hidden_count(&self) -> usize {
        self.test_cases.iter().filter(|c| c.hidden).count()
    }

    pub fn starter(&self, language: Language) -> &str {
        self.starter_code.for_language(language)
    }
}

/// Every problem, in catalog order.
pub fn problems() -> Result<&'static [Problem]> {
    match &*CATALOG {
        Ok(catalog) => Ok(&catalog.problems),
        Err(e) => Err(e.clone()),
    }
}

pub fn find(id: &str) -> Result<&'static Problem> {
    problems()?
        .iter()
        .find(|p| p.id == id)
        .ok_or_else(|| VizError::UnknownProblem(id.to_string()))
}

/// The problem shown first.
pub fn first() -> Result<&'static Problem> {
    problems()?
        .first()
        .ok_or_else(|| VizError::Catalog("catalog has no problems".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_four_problems() {
        let ids: Vec<&str> = problems().unwrap().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "two-sum",
                "reverse-linked-list",
                "maximum-depth-binary-tree",
                "binary-search"
            ]
        );
    }

    #[test]
    fn test_hidden_cases_counted_separately() {
        let two_sum = find("two-sum").unwrap();
        assert_eq!(two_sum.test_cases.len(), 5);
        assert_eq!(two_sum.hidden_count(), 2);
        assert_eq!(two_sum.visible_cases().count(), 3);
        assert_eq!(two_sum.test_cases[0].input, "[2,7,11,15]\n9");
    }

    #[test]
    fn test_starter_code_per_language() {
        let problem = find("binary-search").unwrap();
        assert!(problem.starter(Language::Java).contains("public int search"));
        assert!(problem.starter(Language::Cpp).contains("vector<int>& nums"));
        assert!(problem.starter(Language::Python).ends_with("pass"));
    }

    #[test]
    fn test_unknown_problem() {
        assert_eq!(
            find("three-sum"),
            Err(VizError::UnknownProblem("three-sum".to_string()))
        );
    }

    #[test]
    fn test_language_parsing() {
        assert_eq!("CPP".parse::<Language>(), Ok(Language::Cpp));
        assert_eq!("py".parse::<Language>(), Ok(Language::Python));
        assert!("rust".parse::<Language>().is_err());
        assert_eq!(Language::from_extension("java"), Some(Language::Java));
        assert_eq!(Language::default(), Language::Python);
    }
}
