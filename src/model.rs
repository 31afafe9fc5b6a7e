use std::fmt;

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentReport {
    pub overall_percentage: u32,
    pub category_scores: CategoryScores,
    pub readiness_level: String,
    #[serde(default)]
    pub contact_info: ContactInfo,
    #[serde(default)]
    pub recommendations: Vec<Recommendation>,
}

impl AssessmentReport {
    pub fn from_json(input: &str) -> Result<Self, crate::Error> {
        Ok(serde_json::from_str(input)?)
    }

    /// Logs categories whose percentage disagrees with `round(100 * score / max_score)`.
    /// Values are trusted either way.
    pub(crate) fn warn_inconsistencies(&self) {
        if self.overall_percentage > 100 {
            log::warn!(
                "overall percentage {} is above 100, clamping for display",
                self.overall_percentage
            );
        }
        for (name, score) in self.category_scores.iter() {
            if let Some(expected) = score.expected_percentage()
                && expected != score.percentage
            {
                log::warn!(
                    "category '{name}': percentage {} does not match {}/{} (expected {expected})",
                    score.percentage,
                    score.score,
                    score.max_score,
                );
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryScore {
    pub score: f64,
    pub max_score: f64,
    pub percentage: u32,
}

impl CategoryScore {
    pub(crate) fn expected_percentage(&self) -> Option<u32> {
        if self.max_score <= 0.0 {
            return None;
        }
        Some((100.0 * self.score / self.max_score).round().max(0.0) as u32)
    }

    /// Percentage limited to 0..=100 for bar geometry and tier selection.
    pub fn clamped_percentage(&self) -> u32 {
        self.percentage.min(100)
    }
}

/// Category scores in insertion order. Render order follows this order, so a
/// plain map would lose information here.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CategoryScores(Vec<(String, CategoryScore)>);

impl CategoryScores {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a category, replacing the score in place if the name already exists.
    pub fn insert(&mut self, name: impl Into<String>, score: CategoryScore) {
        let name = name.into();
        match self.0.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = score,
            None => self.0.push((name, score)),
        }
    }

    pub fn with(mut self, name: impl Into<String>, score: CategoryScore) -> Self {
        self.insert(name, score);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &CategoryScore)> {
        self.0.iter().map(|(name, score)| (name.as_str(), score))
    }

    pub fn get(&self, name: &str) -> Option<&CategoryScore> {
        self.0
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, score)| score)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'de> Deserialize<'de> for CategoryScores {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct OrderedVisitor;

        impl<'de> Visitor<'de> for OrderedVisitor {
            type Value = CategoryScores;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of category name to score")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut scores = CategoryScores::new();
                while let Some((name, score)) = access.next_entry::<String, CategoryScore>()? {
                    scores.insert(name, score);
                }
                Ok(scores)
            }
        }

        deserializer.deserialize_map(OrderedVisitor)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ContactInfo {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub company: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub enum Priority {
    High,
    Medium,
}

impl Priority {
    pub fn label(self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Recommendation {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub actions: Vec<String>,
    pub priority: Priority,
}
