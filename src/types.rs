//! Domain types shared across the app

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A project record as stored in the `projects` table.
///
/// Owned by the backend; the UI only ever holds transient copies.
/// Records are created and deleted through the gateway, never updated
/// in place.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub long_description: Option<String>,
    pub stack: Vec<String>,
    pub category: ProjectCategory,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub demo_url: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    pub featured: bool,
    pub created_at: DateTime<Utc>,
}

/// Insert payload for a new project. `id` and `created_at` are
/// assigned server-side.
#[derive(Debug, Clone, Serialize)]
pub struct NewProject {
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub long_description: Option<String>,
    pub stack: Vec<String>,
    pub category: ProjectCategory,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub demo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub featured: bool,
}

/// Closed set of project categories. Drives both the list filter and
/// badge styling, so the serde representation must stay lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectCategory {
    Devops,
    Backend,
    Frontend,
    Automation,
    Fullstack,
}

impl ProjectCategory {
    pub const ALL: [ProjectCategory; 5] = [
        ProjectCategory::Devops,
        ProjectCategory::Backend,
        ProjectCategory::Frontend,
        ProjectCategory::Automation,
        ProjectCategory::Fullstack,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectCategory::Devops => "devops",
            ProjectCategory::Backend => "backend",
            ProjectCategory::Frontend => "frontend",
            ProjectCategory::Automation => "automation",
            ProjectCategory::Fullstack => "fullstack",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.as_str() == value)
    }
}

impl std::fmt::Display for ProjectCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Authenticated admin identity derived from the provider session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminUser {
    pub id: String,
    pub email: String,
}

/// Provider session. Persisted to local storage so a page reload keeps
/// the admin signed in until the token expires.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: String,
    pub expires_at: DateTime<Utc>,
    pub user: AdminUser,
}

impl Session {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }
}

/// A hard-coded skill entry for the home page.
#[derive(Debug, Clone, Copy)]
pub struct Skill {
    pub name: &'static str,
    /// 0..=100
    pub level: u8,
    pub category: SkillCategory,
    pub icon: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillCategory {
    Languages,
    Devops,
    Cloud,
    Databases,
    Tools,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 5] = [
        SkillCategory::Languages,
        SkillCategory::Devops,
        SkillCategory::Cloud,
        SkillCategory::Databases,
        SkillCategory::Tools,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SkillCategory::Languages => "languages",
            SkillCategory::Devops => "devops",
            SkillCategory::Cloud => "cloud",
            SkillCategory::Databases => "databases",
            SkillCategory::Tools => "tools",
        }
    }
}

/// Navbar link table entry.
#[derive(Debug, Clone, Copy)]
pub struct NavLink {
    pub label: &'static str,
    pub path: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_serde_is_lowercase() {
        let json = serde_json::to_string(&ProjectCategory::Fullstack).unwrap();
        assert_eq!(json, "\"fullstack\"");

        let parsed: ProjectCategory = serde_json::from_str("\"devops\"").unwrap();
        assert_eq!(parsed, ProjectCategory::Devops);
    }

    #[test]
    fn category_parse_round_trips() {
        for cat in ProjectCategory::ALL {
            assert_eq!(ProjectCategory::parse(cat.as_str()), Some(cat));
        }
        assert_eq!(ProjectCategory::parse("embedded"), None);
    }

    #[test]
    fn new_project_omits_empty_optionals() {
        let payload = NewProject {
            title: "Pipeline CI/CD".into(),
            description: "Deploy automatizado".into(),
            long_description: None,
            stack: vec!["Docker".into()],
            category: ProjectCategory::Devops,
            github_url: None,
            demo_url: None,
            image_url: None,
            featured: true,
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert!(json.get("long_description").is_none());
        assert!(json.get("github_url").is_none());
        assert_eq!(json["featured"], serde_json::json!(true));
    }

    #[test]
    fn session_expiry_uses_timestamp() {
        let now = Utc::now();
        let session = Session {
            access_token: "tok".into(),
            refresh_token: "ref".into(),
            expires_at: now + chrono::Duration::hours(1),
            user: AdminUser {
                id: "1".into(),
                email: "admin@example.com".into(),
            },
        };
        assert!(!session.is_expired(now));
        assert!(session.is_expired(now + chrono::Duration::hours(2)));
    }
}
