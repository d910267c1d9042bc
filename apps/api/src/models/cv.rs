use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::render::labels::Locale;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub name: String,
    pub title: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub summary: String,
    /// Profile picture as a `data:` URL; `None` when no photo was uploaded.
    pub photo: Option<String>,
}

/// The editable text fields of [`PersonalInfo`]. The photo has its own upload path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PersonalField {
    Name,
    Title,
    Email,
    Phone,
    Location,
    Summary,
}

impl PersonalInfo {
    pub fn field_mut(&mut self, field: PersonalField) -> &mut String {
        match field {
            PersonalField::Name => &mut self.name,
            PersonalField::Title => &mut self.title,
            PersonalField::Email => &mut self.email,
            PersonalField::Phone => &mut self.phone,
            PersonalField::Location => &mut self.location,
            PersonalField::Summary => &mut self.summary,
        }
    }

    /// First character of the name, shown in place of a missing photo.
    pub fn initial(&self) -> Option<char> {
        self.name.trim_start().chars().next()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub id: Uuid,
    pub role: String,
    pub company: String,
    pub start: String,
    pub end: String,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceField {
    Role,
    Company,
    Start,
    End,
    Description,
}

impl ExperienceEntry {
    /// A fresh entry with placeholder role and company, as inserted by "add".
    pub fn placeholder(locale: Locale) -> Self {
        let (role, company) = match locale {
            Locale::It => ("Nuovo Ruolo", "Azienda"),
            Locale::En => ("New Role", "Company"),
        };
        ExperienceEntry {
            id: Uuid::new_v4(),
            role: role.to_string(),
            company: company.to_string(),
            start: String::new(),
            end: String::new(),
            description: String::new(),
        }
    }

    pub fn field_mut(&mut self, field: ExperienceField) -> &mut String {
        match field {
            ExperienceField::Role => &mut self.role,
            ExperienceField::Company => &mut self.company,
            ExperienceField::Start => &mut self.start,
            ExperienceField::End => &mut self.end,
            ExperienceField::Description => &mut self.description,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub id: Uuid,
    pub degree: String,
    pub school: String,
    pub year: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EducationField {
    Degree,
    School,
    Year,
}

impl EducationEntry {
    pub fn placeholder(locale: Locale) -> Self {
        let (degree, school) = match locale {
            Locale::It => ("Titolo Studio", "Istituto"),
            Locale::En => ("Degree", "School"),
        };
        EducationEntry {
            id: Uuid::new_v4(),
            degree: degree.to_string(),
            school: school.to_string(),
            year: String::new(),
        }
    }

    pub fn field_mut(&mut self, field: EducationField) -> &mut String {
        match field {
            EducationField::Degree => &mut self.degree,
            EducationField::School => &mut self.school,
            EducationField::Year => &mut self.year,
        }
    }
}

/// Everything the user typed into the content tab.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CvData {
    pub personal: PersonalInfo,
    /// Newest first.
    pub experience: Vec<ExperienceEntry>,
    /// Newest first.
    pub education: Vec<EducationEntry>,
    /// Comma-separated, kept verbatim; see [`crate::editor::skills::split_skills`].
    pub skills: String,
}

impl CvData {
    /// The sample profile a fresh editor starts from and reset returns to.
    pub fn sample() -> Self {
        CvData {
            personal: PersonalInfo {
                name: "Mario Rossi".to_string(),
                title: "Digital Marketing Manager".to_string(),
                email: "mario.rossi@example.com".to_string(),
                phone: "+39 333 1234567".to_string(),
                location: "Milano, Italia".to_string(),
                summary: "Professionista con oltre 5 anni di esperienza nella gestione di \
                          campagne digitali e team creativi. Appassionato di dati, ROI e \
                          strategie di crescita innovative."
                    .to_string(),
                photo: None,
            },
            experience: vec![ExperienceEntry {
                id: Uuid::new_v4(),
                role: "Senior Manager".to_string(),
                company: "Tech Agency".to_string(),
                start: "2020".to_string(),
                end: "Oggi".to_string(),
                description: "Gestione budget 50k/mese. Coordinamento team di 5 persone e \
                              pianificazione strategica trimestrale."
                    .to_string(),
            }],
            education: vec![EducationEntry {
                id: Uuid::new_v4(),
                degree: "Laurea in Economia".to_string(),
                school: "Università Bocconi".to_string(),
                year: "2019".to_string(),
            }],
            skills: "SEO, SEM, Google Analytics, Leadership, Inglese C1, React Basic, \
                     Project Management"
                .to_string(),
        }
    }
}
