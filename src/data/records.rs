// Structured records nested inside portfolio data
//
// Records are addressed by field id and list index. List-valued attributes
// are edited through one free-text control and parsed with `split_list`.

use super::FieldValue;
use crate::catalog::FieldKind;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Separator for technology lists
pub const TECH_SEPARATOR: char = ',';
/// Separator for responsibility and achievement lists
pub const LINE_SEPARATOR: char = '\n';

/// Split free text into list items.
///
/// Segments are trimmed and blank segments dropped, so repeated separators
/// collapse and surrounding whitespace is not preserved.
pub fn split_list(raw: &str, separator: char) -> Vec<String> {
    raw.split(separator)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Join list items back into the text shown in the editor
pub fn join_list(items: &[String], separator: char) -> String {
    match separator {
        TECH_SEPARATOR => items.join(", "),
        other => items.join(other.to_string().as_str()),
    }
}

/// A record type stored in a record-list field
pub trait Record: Default + Clone + Serialize + for<'de> Deserialize<'de> {
    /// Editable attribute selector
    type Attr: Copy + FromStr<Err = Error>;

    /// The field kind that stores this record
    const KIND: FieldKind;

    /// Replace one attribute from its editor text
    fn set(&mut self, attr: Self::Attr, raw: &str);

    fn list(value: &FieldValue) -> Option<&Vec<Self>>;

    fn list_mut(value: &mut FieldValue) -> Option<&mut Vec<Self>>;
}

fn normalize_attr(s: &str) -> String {
    s.chars()
        .filter(|c| *c != '_' && *c != '-')
        .collect::<String>()
        .to_lowercase()
}

fn unknown_attr(kind: FieldKind, name: &str) -> Error {
    Error::other(format!("Unknown {} attribute: {}", kind, name))
}

/// A portfolio project
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProjectRecord {
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub github_url: String,
    pub live_url: String,
    pub image_url: String,
    pub start_date: String,
    pub end_date: String,
    pub responsibilities: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectAttr {
    Title,
    Description,
    Technologies,
    GithubUrl,
    LiveUrl,
    ImageUrl,
    StartDate,
    EndDate,
    Responsibilities,
}

impl FromStr for ProjectAttr {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match normalize_attr(s).as_str() {
            "title" => Ok(ProjectAttr::Title),
            "description" => Ok(ProjectAttr::Description),
            "technologies" => Ok(ProjectAttr::Technologies),
            "githuburl" => Ok(ProjectAttr::GithubUrl),
            "liveurl" => Ok(ProjectAttr::LiveUrl),
            "imageurl" => Ok(ProjectAttr::ImageUrl),
            "startdate" => Ok(ProjectAttr::StartDate),
            "enddate" => Ok(ProjectAttr::EndDate),
            "responsibilities" => Ok(ProjectAttr::Responsibilities),
            _ => Err(unknown_attr(FieldKind::Projects, s)),
        }
    }
}

impl Record for ProjectRecord {
    type Attr = ProjectAttr;
    const KIND: FieldKind = FieldKind::Projects;

    fn set(&mut self, attr: ProjectAttr, raw: &str) {
        match attr {
            ProjectAttr::Title => self.title = raw.to_string(),
            ProjectAttr::Description => self.description = raw.to_string(),
            ProjectAttr::Technologies => self.technologies = split_list(raw, TECH_SEPARATOR),
            ProjectAttr::GithubUrl => self.github_url = raw.to_string(),
            ProjectAttr::LiveUrl => self.live_url = raw.to_string(),
            ProjectAttr::ImageUrl => self.image_url = raw.to_string(),
            ProjectAttr::StartDate => self.start_date = raw.to_string(),
            ProjectAttr::EndDate => self.end_date = raw.to_string(),
            ProjectAttr::Responsibilities => {
                self.responsibilities = split_list(raw, LINE_SEPARATOR)
            }
        }
    }

    fn list(value: &FieldValue) -> Option<&Vec<Self>> {
        match value {
            FieldValue::Projects(items) => Some(items),
            _ => None,
        }
    }

    fn list_mut(value: &mut FieldValue) -> Option<&mut Vec<Self>> {
        match value {
            FieldValue::Projects(items) => Some(items),
            _ => None,
        }
    }
}

/// A work experience entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExperienceRecord {
    pub company: String,
    pub position: String,
    pub start_date: String,
    pub end_date: String,
    pub location: String,
    pub responsibilities: Vec<String>,
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExperienceAttr {
    Company,
    Position,
    StartDate,
    EndDate,
    Location,
    Responsibilities,
    Technologies,
}

impl FromStr for ExperienceAttr {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match normalize_attr(s).as_str() {
            "company" => Ok(ExperienceAttr::Company),
            "position" => Ok(ExperienceAttr::Position),
            "startdate" => Ok(ExperienceAttr::StartDate),
            "enddate" => Ok(ExperienceAttr::EndDate),
            "location" => Ok(ExperienceAttr::Location),
            "responsibilities" => Ok(ExperienceAttr::Responsibilities),
            "technologies" => Ok(ExperienceAttr::Technologies),
            _ => Err(unknown_attr(FieldKind::Experience, s)),
        }
    }
}

impl Record for ExperienceRecord {
    type Attr = ExperienceAttr;
    const KIND: FieldKind = FieldKind::Experience;

    fn set(&mut self, attr: ExperienceAttr, raw: &str) {
        match attr {
            ExperienceAttr::Company => self.company = raw.to_string(),
            ExperienceAttr::Position => self.position = raw.to_string(),
            ExperienceAttr::StartDate => self.start_date = raw.to_string(),
            ExperienceAttr::EndDate => self.end_date = raw.to_string(),
            ExperienceAttr::Location => self.location = raw.to_string(),
            ExperienceAttr::Responsibilities => {
                self.responsibilities = split_list(raw, LINE_SEPARATOR)
            }
            ExperienceAttr::Technologies => self.technologies = split_list(raw, TECH_SEPARATOR),
        }
    }

    fn list(value: &FieldValue) -> Option<&Vec<Self>> {
        match value {
            FieldValue::Experience(items) => Some(items),
            _ => None,
        }
    }

    fn list_mut(value: &mut FieldValue) -> Option<&mut Vec<Self>> {
        match value {
            FieldValue::Experience(items) => Some(items),
            _ => None,
        }
    }
}

/// An education entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EducationRecord {
    pub institution: String,
    pub degree: String,
    pub field: String,
    pub start_date: String,
    pub end_date: String,
    pub gpa: String,
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EducationAttr {
    Institution,
    Degree,
    Field,
    StartDate,
    EndDate,
    Gpa,
    Achievements,
}

impl FromStr for EducationAttr {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match normalize_attr(s).as_str() {
            "institution" => Ok(EducationAttr::Institution),
            "degree" => Ok(EducationAttr::Degree),
            "field" => Ok(EducationAttr::Field),
            "startdate" => Ok(EducationAttr::StartDate),
            "enddate" => Ok(EducationAttr::EndDate),
            "gpa" => Ok(EducationAttr::Gpa),
            "achievements" => Ok(EducationAttr::Achievements),
            _ => Err(unknown_attr(FieldKind::Education, s)),
        }
    }
}

impl Record for EducationRecord {
    type Attr = EducationAttr;
    const KIND: FieldKind = FieldKind::Education;

    fn set(&mut self, attr: EducationAttr, raw: &str) {
        match attr {
            EducationAttr::Institution => self.institution = raw.to_string(),
            EducationAttr::Degree => self.degree = raw.to_string(),
            EducationAttr::Field => self.field = raw.to_string(),
            EducationAttr::StartDate => self.start_date = raw.to_string(),
            EducationAttr::EndDate => self.end_date = raw.to_string(),
            EducationAttr::Gpa => self.gpa = raw.to_string(),
            EducationAttr::Achievements => self.achievements = split_list(raw, LINE_SEPARATOR),
        }
    }

    fn list(value: &FieldValue) -> Option<&Vec<Self>> {
        match value {
            FieldValue::Education(items) => Some(items),
            _ => None,
        }
    }

    fn list_mut(value: &mut FieldValue) -> Option<&mut Vec<Self>> {
        match value {
            FieldValue::Education(items) => Some(items),
            _ => None,
        }
    }
}
