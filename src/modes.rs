//! Translation modes
//!
//! The set of style presets is closed: each mode carries a display name, a short
//! description and the instruction prompt sent as the system message of the
//! chat-completion call.

use serde::{Deserialize, Serialize};

/// Mode used when a request does not name one
pub const DEFAULT_MODE: TranslationMode = TranslationMode::Formal;

static REGISTRY: [TranslationMode; 4] = TranslationMode::ALL;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TranslationMode {
    /// Formal: professional register suitable for documents and business writing
    Formal,
    /// Casual: conversational, everyday Vietnamese
    Casual,
    /// Technical: precise terminology for technical and scientific material
    Technical,
    /// Creative: literary translation that favours natural flow over literal wording
    Creative,
}

/// Serializable view of a mode, as reported by `GET /api/modes`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModeInfo {
    pub id: String,
    pub name: String,
    pub description: String,
    pub prompt_template: String,
}

impl TranslationMode {
    /// All modes in registry order
    pub const ALL: [TranslationMode; 4] = [
        TranslationMode::Formal,
        TranslationMode::Casual,
        TranslationMode::Technical,
        TranslationMode::Creative,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Self::Formal => "formal",
            Self::Casual => "casual",
            Self::Technical => "technical",
            Self::Creative => "creative",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Formal => "Formal",
            Self::Casual => "Casual",
            Self::Technical => "Technical",
            Self::Creative => "Creative",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Formal => "Professional, polite Vietnamese suitable for documents, business and official communication",
            Self::Casual => "Natural, friendly Vietnamese for everyday conversation and informal messages",
            Self::Technical => "Precise Vietnamese for technical, scientific and specialised material with accurate terminology",
            Self::Creative => "Expressive Vietnamese for literature and marketing that preserves tone, imagery and style",
        }
    }

    pub fn prompt_template(&self) -> &'static str {
        match self {
            Self::Formal => {
                "You are a professional translator. Translate the text to Vietnamese using a formal, \
                 polite register suitable for official documents and business communication.\n\
                 \n\
                 CRITICAL RULES:\n\
                 - TRANSLATE ONLY. Do not add explanations, summaries, or commentary\n\
                 - Preserve exact formatting: line breaks, paragraphs, bullet points, lists\n\
                 - Keep text inside parentheses ( ) unchanged to help the reader understand key terms\n\
                 - Preserve numbers, dates and mathematical expressions exactly\n\
                 - Use proper Vietnamese grammar, vocabulary and honorifics\n\
                 \n\
                 OUTPUT: Only return the translated text."
            }
            Self::Casual => {
                "You are a friendly bilingual speaker. Translate the text to natural, casual Vietnamese \
                 as a native speaker would say it in everyday conversation.\n\
                 \n\
                 RULES:\n\
                 - Prefer common, conversational words over formal or Sino-Vietnamese vocabulary\n\
                 - Keep the original meaning and emotional tone\n\
                 - Preserve line breaks, emoji and list structure\n\
                 - Do not add explanations or notes\n\
                 \n\
                 OUTPUT: Only return the translated text."
            }
            Self::Technical => {
                "You are a technical translator specialised in software, engineering and science. \
                 Translate the text to Vietnamese with precise, consistent terminology.\n\
                 \n\
                 CRITICAL RULES:\n\
                 - Use established Vietnamese technical terms; where none exists keep the English term \
                 and add the Vietnamese explanation in parentheses\n\
                 - Never translate code, commands, identifiers, file paths, URLs or units\n\
                 - Preserve numbers, formulas and formatting exactly\n\
                 - Do not add explanations, summaries, or commentary\n\
                 \n\
                 OUTPUT: Only return the translated text."
            }
            Self::Creative => {
                "You are a literary translator. Translate the text to Vietnamese so that it reads as if \
                 originally written in Vietnamese, preserving voice, rhythm, imagery and emotional impact.\n\
                 \n\
                 RULES:\n\
                 - Adapt idioms and wordplay to natural Vietnamese equivalents instead of translating literally\n\
                 - Keep the author's style and tone\n\
                 - Preserve paragraph and line structure\n\
                 - Do not add explanations or notes\n\
                 \n\
                 OUTPUT: Only return the translated text."
            }
        }
    }

    pub fn info(&self) -> ModeInfo {
        ModeInfo {
            id: self.id().to_string(),
            name: self.name().to_string(),
            description: self.description().to_string(),
            prompt_template: self.prompt_template().to_string(),
        }
    }
}

impl Default for TranslationMode {
    fn default() -> Self {
        DEFAULT_MODE
    }
}

impl std::fmt::Display for TranslationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// Look up a mode by its id. Ids are case-sensitive.
pub fn get(id: &str) -> Option<TranslationMode> {
    list_all().iter().copied().find(|mode| mode.id() == id)
}

/// All modes in registry order
pub fn list_all() -> &'static [TranslationMode] {
    &REGISTRY
}

/// Ids of every registered mode, in registry order
pub fn valid_ids() -> Vec<String> {
    list_all().iter().map(|mode| mode.id().to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_list_all_order() {
        let ids: Vec<&str> = list_all().iter().map(|m| m.id()).collect();
        assert_eq!(ids, vec!["formal", "casual", "technical", "creative"]);
    }

    #[test]
    fn test_ids_are_unique() {
        let ids: HashSet<&str> = list_all().iter().map(|m| m.id()).collect();
        assert_eq!(ids.len(), list_all().len());
    }

    #[test]
    fn test_get_is_case_sensitive() {
        assert_eq!(get("technical"), Some(TranslationMode::Technical));
        assert_eq!(get("Technical"), None);
        assert_eq!(get("legacy"), None);
        assert_eq!(get(""), None);
    }

    #[test]
    fn test_every_mode_has_metadata() {
        for mode in list_all() {
            let info = mode.info();
            assert_eq!(info.id, mode.id());
            assert!(!info.name.is_empty());
            assert!(!info.description.is_empty());
            assert!(info.prompt_template.contains("Vietnamese"));
        }
    }

    #[test]
    fn test_default_is_formal() {
        assert_eq!(TranslationMode::default(), TranslationMode::Formal);
    }

    #[test]
    fn test_info_serializes_camel_case() {
        let value = serde_json::to_value(TranslationMode::Casual.info()).unwrap();
        assert_eq!(value["id"], "casual");
        assert!(value["promptTemplate"].is_string());
    }
}
