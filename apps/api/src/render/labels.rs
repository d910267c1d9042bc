use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Language of the fixed text around the user's content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Locale {
    It,
    En,
}

impl Locale {
    pub fn code(self) -> &'static str {
        match self {
            Locale::It => "it",
            Locale::En => "en",
        }
    }

    pub fn labels(self) -> &'static Labels {
        match self {
            Locale::It => &ITALIAN,
            Locale::En => &ENGLISH,
        }
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "it" | "it-it" => Ok(Locale::It),
            "en" | "en-us" | "en-gb" => Ok(Locale::En),
            other => Err(format!("Unsupported locale '{other}'")),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Section headings used by the templates.
#[derive(Debug)]
pub struct Labels {
    pub lang: &'static str,
    pub profile: &'static str,
    pub experience: &'static str,
    pub professional_experience: &'static str,
    /// Heading of the education column in the modern template.
    pub training: &'static str,
    pub education: &'static str,
    pub skills: &'static str,
    /// Skills heading of the minimal template.
    pub skills_short: &'static str,
    pub contacts: &'static str,
    pub document_title: &'static str,
}

pub static ITALIAN: Labels = Labels {
    lang: "it",
    profile: "Profilo",
    experience: "Esperienza",
    professional_experience: "Esperienza Professionale",
    training: "Formazione",
    education: "Istruzione",
    skills: "Competenze",
    skills_short: "Skills",
    contacts: "Contatti",
    document_title: "Curriculum Vitae",
};

pub static ENGLISH: Labels = Labels {
    lang: "en",
    profile: "Profile",
    experience: "Experience",
    professional_experience: "Professional Experience",
    training: "Education",
    education: "Education",
    skills: "Skills",
    skills_short: "Skills",
    contacts: "Contact",
    document_title: "Résumé",
};
