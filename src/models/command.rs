use serde::{Deserialize, Serialize};

/// Appended to the command name to form the syntax of a record without one
pub const DEFAULT_SYNTAX_SUFFIX: &str = "[OPTIONS]";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FlagInfo {
    pub flag: String,
    pub description: String,
}

/// A single reference card in the catalog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CommandRecord {
    pub id: String,
    pub command: String,
    pub description: String,
    pub example: String,
    pub category: String,
    pub tags: Vec<String>,
    #[serde(default)]
    pub is_popular: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub syntax: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub flags: Vec<FlagInfo>,
}

impl CommandRecord {
    pub fn new_built_in(
        id: &str,
        command: &str,
        description: &str,
        example: &str,
        category: &str,
        tags: Vec<&str>,
    ) -> Self {
        Self {
            id: id.to_string(),
            command: command.to_string(),
            description: description.to_string(),
            example: example.to_string(),
            category: category.to_string(),
            tags: tags.into_iter().map(String::from).collect(),
            is_popular: false,
            syntax: None,
            flags: Vec::new(),
        }
    }

    pub fn popular(mut self) -> Self {
        self.is_popular = true;
        self
    }

    pub fn with_syntax(mut self, syntax: &str) -> Self {
        self.syntax = Some(syntax.to_string());
        self
    }

    pub fn with_flags(mut self, flags: Vec<(&str, &str)>) -> Self {
        self.flags = flags
            .into_iter()
            .map(|(flag, description)| FlagInfo {
                flag: flag.to_string(),
                description: description.to_string(),
            })
            .collect();
        self
    }

    /// Case-insensitive tag membership
    pub fn has_tag(&self, tag: &str) -> bool {
        let tag = tag.to_lowercase();
        self.tags.iter().any(|t| t.to_lowercase() == tag)
    }

    /// The record's syntax template, or `"<command> [OPTIONS]"` when none is defined
    pub fn effective_syntax(&self) -> String {
        match &self.syntax {
            Some(syntax) => syntax.clone(),
            None => format!("{} {}", self.command, DEFAULT_SYNTAX_SUFFIX),
        }
    }

    /// Look up one of the record's documented flags
    pub fn flag(&self, flag: &str) -> Option<&FlagInfo> {
        self.flags.iter().find(|f| f.flag == flag)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    pub icon: String,
    /// Number of catalog records in this category. Derived by the catalog.
    pub count: usize,
    pub description: String,
}

impl Category {
    pub fn new(id: &str, name: &str, icon: &str, description: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            icon: icon.to_string(),
            count: 0,
            description: description.to_string(),
        }
    }
}
