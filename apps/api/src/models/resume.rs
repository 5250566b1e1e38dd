use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SocialLinks {
    pub github: String,
    pub linkedin: String,
    pub facebook: String,
}

/// Profile summary derived from well-known basic-info labels.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BasicInfo {
    pub name: String,
    pub name_ja: String,
    pub title: String,
    pub bio: String,
    pub profile_image: String,
    pub social_links: SocialLinks,
}

/// A raw label/value line of the basic-info tab, shown as-is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BasicInfoItem {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub no: String,
    pub start_date: String,
    pub end_date: String,
    /// `start - end`, omitting whichever side is empty.
    pub period: String,
    pub company: String,
    pub position: String,
    pub summary: String,
    pub description: String,
    pub achievements: Vec<String>,
    pub technologies: Vec<String>,
    pub keywords: String,
    pub role: String,
    pub team_size: String,
    // Phase markers hold whatever the sheet has, usually "○" or nothing.
    pub requirements: String,
    pub parent_equipment: String,
    pub basic_design: String,
    pub detailed_design: String,
    pub development: String,
    pub testing: String,
    pub maintenance: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillGroup {
    /// Proficiency code from the level column.
    pub category: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Qualification {
    pub title: String,
    pub date: String,
    pub issuer: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub period: String,
    pub school: String,
    pub major: String,
    pub details: String,
    pub research: String,
}

/// Everything the résumé pages render. Rebuilt wholesale on every fetch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeData {
    pub basic_info: BasicInfo,
    pub basic_info_items: Vec<BasicInfoItem>,
    pub experiences: Vec<Experience>,
    pub skills: Vec<SkillGroup>,
    pub qualifications: Vec<Qualification>,
    pub education: Vec<Education>,
}
