//! Brand Model

use serde::{Deserialize, Serialize};

/// Business metadata record (singleton, defined at build time)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brand {
    pub name: String,
    pub slogan: String,
    pub address: String,
    pub phone: String,
    #[serde(default)]
    pub hours: Vec<OpeningHours>,
    pub socials: SocialLinks,
}

/// Opening hours line as displayed in the footer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpeningHours {
    /// Day range label, e.g. "Lun – Dim"
    pub days: String,
    /// Hour range label, e.g. "11:30 – 23:00"
    pub hours: String,
}

/// External profile links
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SocialLinks {
    pub instagram: String,
    pub tiktok: String,
    pub maps: String,
}
