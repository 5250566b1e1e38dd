use crate::models::resume::{
    BasicInfo, BasicInfoItem, Experience, ResumeData, SkillGroup, SocialLinks,
};

/// The built-in résumé served when no section could be fetched. Pure; no I/O.
pub fn sample_resume_data() -> ResumeData {
    ResumeData {
        basic_info: BasicInfo {
            name: "Kobayashi Ryuta".into(),
            name_ja: "小林龍汰".into(),
            title: "Full Stack Engineer".into(),
            bio: "フルスタックエンジニア".into(),
            profile_image: String::new(),
            social_links: SocialLinks {
                github: "https://github.com/KobayashiRyuta0131".into(),
                linkedin: "https://www.linkedin.com/in/ryutakobayashi/".into(),
                facebook: "https://www.facebook.com/ryuta.kobayashi.779".into(),
            },
        },
        basic_info_items: vec![
            item("名前", "小林龍汰"),
            item("名前（ローマ字）", "Kobayashi Ryuta"),
            item("職位", "Full Stack Engineer"),
        ],
        experiences: vec![Experience {
            no: "1".into(),
            start_date: "2024年1月".into(),
            end_date: "2024年2月".into(),
            period: "2024年1月 - 2024年2月".into(),
            company: "データ基盤プロジェクト".into(),
            position: "エンジニア".into(),
            summary: "データ基盤構築".into(),
            description: "データ基盤・分析プラットフォーム上での開発。テスト・設計・実装。".into(),
            achievements: strings(&["プロジェクトに参加", "テスト工程を対応"]),
            technologies: strings(&["Python", "Windows", "AWS"]),
            keywords: String::new(),
            role: "メンバー".into(),
            team_size: "1～5名".into(),
            requirements: "○".into(),
            parent_equipment: String::new(),
            basic_design: "○".into(),
            detailed_design: "○".into(),
            development: "○".into(),
            testing: "○".into(),
            maintenance: String::new(),
        }],
        skills: vec![
            SkillGroup {
                category: "プログラミング言語".into(),
                items: strings(&["TypeScript", "JavaScript", "Python", "SQL"]),
            },
            SkillGroup {
                category: "フレームワーク".into(),
                items: strings(&["React", "Next.js", "Node.js"]),
            },
        ],
        qualifications: Vec::new(),
        education: Vec::new(),
    }
}

fn item(label: &str, value: &str) -> BasicInfoItem {
    BasicInfoItem {
        label: label.into(),
        value: value.into(),
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
