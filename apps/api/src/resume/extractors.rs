//! Section extractors: map row-mappings of one tab into résumé types.
//!
//! All extractors are total. Rows with missing, extra or oddly-named columns
//! produce empty strings and empty lists rather than errors.

use std::collections::{HashMap, HashSet};

use crate::models::resume::{
    BasicInfo, BasicInfoItem, Education, Experience, Qualification, SkillGroup, SocialLinks,
};
use crate::resume::lookup::{
    has_any, join_present, lookup, split_list, LINE_SEPARATORS, LIST_SEPARATORS,
};
use crate::sheets::SheetRow;

const PERIOD_SEPARATOR: &str = " - ";

// ────────────────────────────────────────────────────────────────────────────
// Basic info
// ────────────────────────────────────────────────────────────────────────────

const NAME_ROMAN: &[&str] = &["名前（ローマ字）", "名前"];
const NAME_JA: &[&str] = &["名前"];
const TITLE: &[&str] = &["職位", "役職"];
const BIO: &[&str] = &["自己紹介", "説明"];
const PROFILE_IMAGE: &[&str] = &["画像", "プロフィール画像"];
const GITHUB: &[&str] = &["GitHub", "Github"];
const LINKEDIN: &[&str] = &["LinkedIn", "Linkedin"];
const FACEBOOK: &[&str] = &["Facebook", "フェイスブック"];

/// The basic-info tab is read positionally: column A is the label, B the value.
pub fn extract_basic_info_items(rows: &[SheetRow]) -> Vec<BasicInfoItem> {
    rows.iter()
        .map(|row| BasicInfoItem {
            label: row.get("col0").unwrap_or_default().trim().to_string(),
            value: row.get("col1").unwrap_or_default().trim().to_string(),
        })
        .filter(|item| !item.label.is_empty() || !item.value.is_empty())
        .collect()
}

/// Builds the profile summary from exact label matches. Unknown labels are ignored
/// here; they stay visible through the item list.
pub fn extract_basic_info(items: &[BasicInfoItem]) -> BasicInfo {
    let by_label: HashMap<&str, &str> = items
        .iter()
        .filter(|item| !item.label.is_empty() && !item.value.is_empty())
        .map(|item| (item.label.as_str(), item.value.as_str()))
        .collect();

    let find = |labels: &[&str], default: &str| -> String {
        labels
            .iter()
            .find_map(|label| by_label.get(label))
            .copied()
            .unwrap_or(default)
            .to_string()
    };

    BasicInfo {
        name: find(NAME_ROMAN, "Name"),
        name_ja: find(NAME_JA, "名前"),
        title: find(TITLE, "Job Title"),
        bio: find(BIO, ""),
        profile_image: find(PROFILE_IMAGE, ""),
        social_links: SocialLinks {
            github: find(GITHUB, ""),
            linkedin: find(LINKEDIN, ""),
            facebook: find(FACEBOOK, ""),
        },
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Experience
// ────────────────────────────────────────────────────────────────────────────

/// A row is an experience only if it names an employer, a title or duties.
const EXPERIENCE_PRESENCE: &[&str] = &[
    "所属",
    "会社名",
    "プロジェクト名",
    "タイトル",
    "職位",
    "役職",
    "担当業務",
    "業務内容",
];

const EXP_NO: &[&str] = &["no", "No", "番号", "No."];
const EXP_START: &[&str] = &["開始", "開始日", "開始年月", "開始年月日", "Start", "Start Date"];
const EXP_END: &[&str] = &["終了", "終了日", "終了年月", "終了年月日", "End", "End Date"];
const EXP_COMPANY: &[&str] = &["所属", "会社名", "クライアント", "プロジェクト名", "Company"];
const EXP_POSITION: &[&str] = &["タイトル", "職位", "役職", "ポジション", "職種", "Position"];
const EXP_SUMMARY: &[&str] = &["要約", "概要", "サマリ", "Summary"];
const EXP_DESCRIPTION: &[&str] = &["担当業務", "業務内容", "仕事内容", "詳細", "Description"];
const EXP_ACHIEVEMENTS: &[&str] = &["実績", "成果", "Achievement", "Achievements"];
const EXP_TECHNOLOGIES: &[&str] = &["言語", "使用技術", "技術", "環境", "Technologies", "Tech"];
const EXP_KEYWORDS: &[&str] = &["その他キーワード", "キーワード", "Keywords"];
const EXP_ROLE: &[&str] = &["役割", "Role"];
const EXP_TEAM_SIZE: &[&str] = &["規模", "チーム規模", "チーム人数", "人数", "Team Size", "Team"];
const EXP_REQUIREMENTS: &[&str] = &["要件定義", "要件", "Requirements"];
const EXP_PARENT_EQUIPMENT: &[&str] = &["親機", "Parent", "Parent Equipment"];
const EXP_BASIC_DESIGN: &[&str] = &["基本設計", "Basic Design"];
const EXP_DETAILED_DESIGN: &[&str] = &["詳細設計", "Detailed Design"];
const EXP_DEVELOPMENT: &[&str] = &["開発", "実装", "Development"];
const EXP_TESTING: &[&str] = &["テスト", "試験", "Testing"];
const EXP_MAINTENANCE: &[&str] = &["保守・運用", "運用保守", "Maintenance"];

pub fn extract_experiences(rows: &[SheetRow]) -> Vec<Experience> {
    rows.iter()
        .filter(|row| has_any(row, EXPERIENCE_PRESENCE))
        .map(experience_from_row)
        .collect()
}

fn experience_from_row(row: &SheetRow) -> Experience {
    let start_date = lookup(row, EXP_START);
    let end_date = lookup(row, EXP_END);
    let period = join_present(&[start_date.as_str(), end_date.as_str()], PERIOD_SEPARATOR);

    Experience {
        no: lookup(row, EXP_NO),
        period,
        start_date,
        end_date,
        company: lookup(row, EXP_COMPANY),
        position: lookup(row, EXP_POSITION),
        summary: lookup(row, EXP_SUMMARY),
        description: lookup(row, EXP_DESCRIPTION),
        achievements: split_list(&lookup(row, EXP_ACHIEVEMENTS), LINE_SEPARATORS),
        technologies: split_list(&lookup(row, EXP_TECHNOLOGIES), LIST_SEPARATORS),
        keywords: lookup(row, EXP_KEYWORDS),
        role: lookup(row, EXP_ROLE),
        team_size: lookup(row, EXP_TEAM_SIZE),
        requirements: lookup(row, EXP_REQUIREMENTS),
        parent_equipment: lookup(row, EXP_PARENT_EQUIPMENT),
        basic_design: lookup(row, EXP_BASIC_DESIGN),
        detailed_design: lookup(row, EXP_DETAILED_DESIGN),
        development: lookup(row, EXP_DEVELOPMENT),
        testing: lookup(row, EXP_TESTING),
        maintenance: lookup(row, EXP_MAINTENANCE),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Skills
// ────────────────────────────────────────────────────────────────────────────

const SKILL_NAME: &[&str] = &["skill", "Skill"];
const SKILL_LEVEL: &[&str] = &["level", "Level"];
/// Category for skills whose level cell is blank.
const UNRATED_CATEGORY: &str = "その他";

/// Groups skills by level. Categories keep first-seen order; duplicate skills
/// within a category collapse to one.
pub fn extract_skills(rows: &[SheetRow]) -> Vec<SkillGroup> {
    let mut groups: Vec<SkillGroup> = Vec::new();
    let mut seen: HashMap<String, HashSet<String>> = HashMap::new();

    for row in rows {
        let skill = lookup(row, SKILL_NAME);
        if skill.is_empty() || SKILL_NAME.contains(&skill.as_str()) {
            continue;
        }
        let level = lookup(row, SKILL_LEVEL);
        let category = if level.is_empty() {
            UNRATED_CATEGORY.to_string()
        } else {
            level
        };

        let items = seen.entry(category.clone()).or_default();
        if !items.insert(skill.clone()) {
            continue;
        }
        match groups.iter_mut().find(|g| g.category == category) {
            Some(group) => group.items.push(skill),
            None => groups.push(SkillGroup {
                category,
                items: vec![skill],
            }),
        }
    }

    groups.retain(|g| !g.items.is_empty());
    groups
}

// ────────────────────────────────────────────────────────────────────────────
// Qualifications
// ────────────────────────────────────────────────────────────────────────────

const QUAL_TITLE: &[&str] = &["certification_name", "Certification Name"];
const QUAL_YEAR: &[&str] = &["year", "Year"];
const QUAL_MONTH: &[&str] = &["month", "Month"];
const QUAL_DAY: &[&str] = &["day", "Day"];
const QUAL_ISSUER: &[&str] = &["issuer", "Issuer"];

pub fn extract_qualifications(rows: &[SheetRow]) -> Vec<Qualification> {
    rows.iter()
        .filter(|row| has_any(row, QUAL_TITLE))
        .map(|row| {
            let year = lookup(row, QUAL_YEAR);
            let month = lookup(row, QUAL_MONTH);
            let day = lookup(row, QUAL_DAY);
            Qualification {
                title: lookup(row, QUAL_TITLE),
                date: join_present(&[year.as_str(), month.as_str(), day.as_str()], "/"),
                issuer: lookup(row, QUAL_ISSUER),
            }
        })
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Education
// ────────────────────────────────────────────────────────────────────────────

const EDU_SCHOOL: &[&str] = &["学校名", "School Name"];
const EDU_ENTRANCE: &[&str] = &["入学年", "Entrance Year"];
const EDU_GRADUATION: &[&str] = &["卒業年", "Graduation Year"];
const EDU_MAJOR: &[&str] = &["学部", "Faculty"];
const EDU_DETAILS: &[&str] = &["学科", "Department", "科"];
const EDU_RESEARCH: &[&str] = &["学問・研究内容", "Research"];

pub fn extract_education(rows: &[SheetRow]) -> Vec<Education> {
    rows.iter()
        .filter(|row| has_any(row, EDU_SCHOOL))
        .map(|row| {
            let entrance = lookup(row, EDU_ENTRANCE);
            let graduation = lookup(row, EDU_GRADUATION);
            Education {
                period: join_present(&[entrance.as_str(), graduation.as_str()], PERIOD_SEPARATOR),
                school: lookup(row, EDU_SCHOOL),
                major: lookup(row, EDU_MAJOR),
                details: lookup(row, EDU_DETAILS),
                research: lookup(row, EDU_RESEARCH),
            }
        })
        .collect()
}
