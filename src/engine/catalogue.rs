use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Templates {
    pub poster: &'static [&'static str],
    pub art_styles: &'static [&'static str],
}

pub const TEMPLATES: Templates = Templates {
    poster: &["Modern", "Vintage", "Minimalist", "Corporate", "Creative", "Dark"],
    art_styles: &["Abstract", "Realistic", "Cartoon", "Oil Painting", "Watercolor", "Digital"],
};

#[derive(Debug, Clone, Serialize)]
pub struct Achievement {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub unlocked: bool,
}

const fn achievement(
    id: u32,
    title: &'static str,
    description: &'static str,
    unlocked: bool,
) -> Achievement {
    Achievement {
        id,
        title,
        description,
        unlocked,
    }
}

pub const ACHIEVEMENTS: &[Achievement] = &[
    achievement(1, "First Edit", "Edit your first image", true),
    achievement(2, "Background Master", "Remove 10 backgrounds", true),
    achievement(3, "AI Artist", "Generate 5 AI artworks", false),
    achievement(4, "Translator", "Translate 20 texts", false),
    achievement(5, "Scanner Pro", "Scan 50 files", true),
    achievement(6, "Premium User", "Upgrade to premium", false),
];

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    pub theme: &'static str,
    pub auto_save: bool,
    pub notifications: bool,
    pub quality_mode: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub username: &'static str,
    pub email: &'static str,
    pub is_premium: bool,
    pub join_date: &'static str,
    pub total_edits: u32,
    pub premium_features: &'static [&'static str],
    pub preferences: Preferences,
}

/// The single demo account every client sees, regardless of who logged in.
pub const DEMO_PROFILE: Profile = Profile {
    username: "NovaUser",
    email: "user@editnova.com",
    is_premium: false,
    join_date: "2025-01-15",
    total_edits: 42,
    premium_features: &["ai_art", "batch_processing", "cloud_sync", "advanced_filters"],
    preferences: Preferences {
        theme: "system",
        auto_save: true,
        notifications: true,
        quality_mode: "high",
    },
};

pub const PREMIUM_FEATURES: &[&str] = &[
    "AI art generation",
    "Batch processing",
    "Cloud sync",
    "Premium filters",
];

pub const THREAT_OUTCOMES: &[&[&str]] = &[
    &[],
    &["Suspicious content detected"],
    &["Malware signature found"],
];

pub const OCR_SAMPLES: &[&str] = &[
    "Welcome to EditNova - AI-Powered Editing Suite",
    "Transform your images with advanced AI tools",
    "Premium features available with subscription",
    "Contact us at support@editnova.com",
];
