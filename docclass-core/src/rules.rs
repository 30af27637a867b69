//! Classification rules: industry → ordered document types → keywords.
//!
//! Rule files are YAML:
//!
//! ```yaml
//! legal:
//!   licence_agreement: [licence, license]
//!   statement_of_particulars: [statement]
//! retail: {}
//! ```
//!
//! Document types are evaluated in the order they are written, so the
//! mapping is deserialized into a `Vec` rather than a hash map.

use crate::error::{ClassifyError, Result};
use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;
use std::path::Path;

/// One document type and the keywords that identify it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentRule {
    pub document_type: String,
    pub keywords: Vec<String>,
}

impl DocumentRule {
    pub fn new<K: Into<String>>(
        document_type: impl Into<String>,
        keywords: impl IntoIterator<Item = K>,
    ) -> Self {
        Self {
            document_type: document_type.into(),
            keywords: keywords.into_iter().map(Into::into).collect(),
        }
    }
}

/// Ordered rules for a single industry. May be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndustryRules {
    rules: Vec<DocumentRule>,
}

impl IndustryRules {
    pub fn new(rules: Vec<DocumentRule>) -> Self {
        Self { rules }
    }

    /// Rules in declared order.
    pub fn iter(&self) -> impl Iterator<Item = &DocumentRule> {
        self.rules.iter()
    }

    pub fn document_types(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|rule| rule.document_type.as_str())
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// The full rule set. Built once at startup and only read afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSet {
    industries: HashMap<String, IndustryRules>,
}

impl RuleSet {
    pub fn from_industries<S: Into<String>>(
        industries: impl IntoIterator<Item = (S, IndustryRules)>,
    ) -> Self {
        Self {
            industries: industries
                .into_iter()
                .map(|(name, rules)| (name.into(), rules))
                .collect(),
        }
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).map_err(|e| ClassifyError::Rules(e.to_string()))
    }

    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let rules = serde_yaml::from_str::<Self>(&content)
            .map_err(|e| ClassifyError::Rules(format!("{}: {e}", path.display())))?;
        tracing::debug!(
            path = %path.display(),
            industries = rules.len(),
            "loaded classifier rules"
        );
        Ok(rules)
    }

    pub fn get(&self, industry: &str) -> Option<&IndustryRules> {
        self.industries.get(industry)
    }

    pub fn contains(&self, industry: &str) -> bool {
        self.industries.contains_key(industry)
    }

    /// Industry names, sorted for stable listings.
    pub fn industries(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.industries.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.industries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.industries.is_empty()
    }
}

// ===== YAML DESERIALIZATION =====

impl<'de> Deserialize<'de> for IndustryRules {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct IndustryRulesVisitor;

        impl<'de> Visitor<'de> for IndustryRulesVisitor {
            type Value = IndustryRules;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a mapping of document type to a list of keywords")
            }

            // `retail:` with nothing under it
            fn visit_unit<E: de::Error>(self) -> std::result::Result<Self::Value, E> {
                Ok(IndustryRules::default())
            }

            fn visit_none<E: de::Error>(self) -> std::result::Result<Self::Value, E> {
                Ok(IndustryRules::default())
            }

            fn visit_map<A: MapAccess<'de>>(
                self,
                mut map: A,
            ) -> std::result::Result<Self::Value, A::Error> {
                let mut rules: Vec<DocumentRule> = Vec::new();
                while let Some((document_type, keywords)) =
                    map.next_entry::<String, Vec<String>>()?
                {
                    if rules.iter().any(|r| r.document_type == document_type) {
                        return Err(de::Error::custom(format!(
                            "duplicate document type `{document_type}`"
                        )));
                    }
                    if keywords.iter().any(String::is_empty) {
                        return Err(de::Error::custom(format!(
                            "document type `{document_type}` has an empty keyword"
                        )));
                    }
                    rules.push(DocumentRule {
                        document_type,
                        keywords,
                    });
                }
                Ok(IndustryRules { rules })
            }
        }

        deserializer.deserialize_any(IndustryRulesVisitor)
    }
}

impl<'de> Deserialize<'de> for RuleSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct RuleSetVisitor;

        impl<'de> Visitor<'de> for RuleSetVisitor {
            type Value = RuleSet;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a mapping of industry to document type rules")
            }

            fn visit_map<A: MapAccess<'de>>(
                self,
                mut map: A,
            ) -> std::result::Result<Self::Value, A::Error> {
                let mut industries = HashMap::new();
                while let Some((industry, rules)) = map.next_entry::<String, IndustryRules>()? {
                    if industries.contains_key(&industry) {
                        return Err(de::Error::custom(format!("duplicate industry `{industry}`")));
                    }
                    industries.insert(industry, rules);
                }
                Ok(RuleSet { industries })
            }
        }

        deserializer.deserialize_map(RuleSetVisitor)
    }
}
