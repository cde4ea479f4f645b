//! Keyword-based issue categorization.
//!
//! Buckets raw analyzer lines into fixed quality dimensions by
//! case-insensitive substring match. Rules are checked in category order
//! and the first match wins, so a line lands in at most one bucket.
//! The keyword table is tuned to pylint-style message vocabulary;
//! adapting to another analyzer means replacing the table, not the code.

use serde::{Deserialize, Serialize};

/// Fixed quality dimensions, in precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Readability,
    CodeQuality,
    Error,
}

impl Category {
    /// All categories, in the precedence and rendering order.
    pub const ALL: [Self; 3] = [Self::Readability, Self::CodeQuality, Self::Error];

    /// Substring rules for this category, matched against lowercased lines.
    fn keywords(self) -> &'static [&'static str] {
        match self {
            Self::Readability => &["line too long", "readable"],
            Self::CodeQuality => &["unused", "redundant", "code quality"],
            Self::Error => &["error", "undefined"],
        }
    }

    /// Section title used in assembled reports.
    pub fn section_title(self) -> &'static str {
        match self {
            Self::Readability => "Readability Issues",
            Self::CodeQuality => "Code Quality Issues",
            Self::Error => "Errors",
        }
    }
}

/// Categorized issue lines, one ordered bucket per category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryBuckets {
    pub readability: Vec<String>,
    pub code_quality: Vec<String>,
    pub errors: Vec<String>,
}

impl CategoryBuckets {
    pub fn get(&self, category: Category) -> &[String] {
        match category {
            Category::Readability => &self.readability,
            Category::CodeQuality => &self.code_quality,
            Category::Error => &self.errors,
        }
    }

    fn get_mut(&mut self, category: Category) -> &mut Vec<String> {
        match category {
            Category::Readability => &mut self.readability,
            Category::CodeQuality => &mut self.code_quality,
            Category::Error => &mut self.errors,
        }
    }

    /// Buckets in rendering order with their titles.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &[String])> + '_ {
        Category::ALL.into_iter().map(|c| (c, self.get(c)))
    }

    pub fn is_empty(&self) -> bool {
        self.readability.is_empty() && self.code_quality.is_empty() && self.errors.is_empty()
    }
}

/// Bucket each line of raw analyzer text into its first matching
/// category. Unmatched lines are dropped (they stay visible in the raw
/// section of the report). Input order is preserved within buckets.
pub fn categorize(raw: &str) -> CategoryBuckets {
    let mut buckets = CategoryBuckets::default();

    for line in raw.lines() {
        let lower = line.to_lowercase();

        let matched = Category::ALL
            .into_iter()
            .find(|category| category.keywords().iter().any(|k| lower.contains(k)));

        if let Some(category) = matched {
            buckets.get_mut(category).push(line.to_string());
        }
    }

    buckets
}
