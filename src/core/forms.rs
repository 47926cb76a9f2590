use crate::core::tags::TagEditor;
use crate::domain::model::Record;
use crate::utils::error::{GaleryaError, Result};
use crate::utils::validation::{
    validate_email, validate_non_empty_string, validate_one_of, validate_url,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ProjectCategory {
    #[default]
    #[serde(rename = "Visual Art")]
    VisualArt,
    #[serde(rename = "Design")]
    Design,
    #[serde(rename = "Multimedia")]
    Multimedia,
    #[serde(rename = "Creative Projects")]
    CreativeProjects,
}

impl ProjectCategory {
    pub const ALL: [ProjectCategory; 4] = [
        ProjectCategory::VisualArt,
        ProjectCategory::Design,
        ProjectCategory::Multimedia,
        ProjectCategory::CreativeProjects,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ProjectCategory::VisualArt => "Visual Art",
            ProjectCategory::Design => "Design",
            ProjectCategory::Multimedia => "Multimedia",
            ProjectCategory::CreativeProjects => "Creative Projects",
        }
    }

    /// 作品管理表單使用的 option value
    pub fn slug(&self) -> &'static str {
        match self {
            ProjectCategory::VisualArt => "visual-art",
            ProjectCategory::Design => "design",
            ProjectCategory::Multimedia => "multimedia",
            ProjectCategory::CreativeProjects => "creative-projects",
        }
    }
}

impl fmt::Display for ProjectCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ProjectCategory {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(s) || c.slug() == s)
            .ok_or_else(|| format!("unknown category '{}'", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtworkStatus {
    #[default]
    Draft,
    Published,
    Pending,
}

impl ArtworkStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ArtworkStatus::Draft => "draft",
            ArtworkStatus::Published => "published",
            ArtworkStatus::Pending => "pending",
        }
    }
}

/// 狀態徽章文字：首字大寫，其餘不變
pub fn status_label(status: &str) -> String {
    let mut chars = status.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

impl FromStr for ArtworkStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "draft" => Ok(ArtworkStatus::Draft),
            "published" => Ok(ArtworkStatus::Published),
            "pending" => Ok(ArtworkStatus::Pending),
            other => Err(format!("unknown status '{}'", other)),
        }
    }
}

/// 上傳頁的專案表單
#[derive(Debug, Clone, Default)]
pub struct UploadForm {
    pub title: String,
    pub description: String,
    pub category: ProjectCategory,
    pub tags: TagEditor,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectSubmission {
    pub title: String,
    pub description: String,
    pub category: ProjectCategory,
    pub tags: Vec<String>,
}

impl UploadForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// 送出時才讀取最終的標籤清單
    pub fn submit(self) -> Result<ProjectSubmission> {
        validate_non_empty_string("Title", &self.title)?;

        let submission = ProjectSubmission {
            title: self.title.trim().to_string(),
            description: self.description,
            category: self.category,
            tags: self.tags.into_tags(),
        };
        tracing::info!(
            "📤 Project '{}' submitted with {} tags",
            submission.title,
            submission.tags.len()
        );
        Ok(submission)
    }
}

/// 管理後台「新增作品」表單
#[derive(Debug, Clone, Default)]
pub struct NewArtworkForm {
    pub title: String,
    pub artist: String,
    /// 空字串代表尚未選擇
    pub category: String,
    pub description: String,
    pub medium: String,
    pub dimensions: String,
    pub year: String,
    pub price: String,
    pub status: ArtworkStatus,
}

impl NewArtworkForm {
    /// 產生待新增的紀錄（不含 id，由確認視窗配發）
    pub fn into_record(self) -> Result<Record> {
        validate_non_empty_string("Title", &self.title)?;
        validate_non_empty_string("Artist", &self.artist)?;

        let slugs: Vec<&str> = ProjectCategory::ALL.iter().map(|c| c.slug()).collect();
        validate_one_of("Category", &self.category, &slugs)?;

        if !self.year.trim().is_empty() && self.year.trim().parse::<u16>().is_err() {
            return Err(GaleryaError::ValidationError {
                message: format!("Year must be a number (got '{}')", self.year),
            });
        }

        let mut record = Record::new()
            .with("title", self.title.trim())
            .with("artist", self.artist.trim())
            .with("category", self.category)
            .with("status", self.status.as_str())
            .with("created_at", Utc::now().to_rfc3339());

        for (field, value) in [
            ("description", self.description),
            ("medium", self.medium),
            ("dimensions", self.dimensions),
            ("year", self.year),
            ("price", self.price),
        ] {
            if !value.trim().is_empty() {
                record.set(field, value.trim());
            }
        }

        Ok(record)
    }
}

pub const DEFAULT_AVATAR: &str = "/avatars/default-avatar.png";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileVisibility {
    Public,
    #[default]
    Private,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialLinks {
    pub instagram: String,
    pub twitter: String,
    pub linkedin: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NotificationSettings {
    pub email: bool,
    pub push: bool,
    pub marketing: bool,
    pub new_followers: bool,
    pub artwork_likes: bool,
    pub comments: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PrivacySettings {
    pub profile_visibility: ProfileVisibility,
    pub show_email: bool,
    pub show_location: bool,
    pub allow_messages: bool,
}

/// 帳號設定頁：個人資料、社群連結、通知與隱私。
///
/// 所有開關預設關閉，個人頁預設不公開。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SettingsForm {
    pub name: String,
    pub email: String,
    pub bio: String,
    pub avatar: String,
    pub location: String,
    pub website: String,
    pub social: SocialLinks,
    pub notifications: NotificationSettings,
    pub privacy: PrivacySettings,
}

impl Default for SettingsForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            bio: String::new(),
            avatar: DEFAULT_AVATAR.to_string(),
            location: String::new(),
            website: String::new(),
            social: SocialLinks::default(),
            notifications: NotificationSettings::default(),
            privacy: PrivacySettings::default(),
        }
    }
}

impl SettingsForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// email 與網站欄位留白時不檢查，有填才驗證格式
    pub fn submit(mut self) -> Result<SettingsForm> {
        self.email = self.email.trim().to_string();
        self.website = self.website.trim().to_string();

        if !self.email.is_empty() {
            validate_email("Email", &self.email)?;
        }
        if !self.website.is_empty() {
            validate_url("Website", &self.website)?;
        }

        tracing::info!(
            "💾 Settings saved (visibility: {:?})",
            self.privacy.profile_visibility
        );
        Ok(self)
    }
}
