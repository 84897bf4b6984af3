use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ServiceIcon {
    Scissors,
    Brush,
    Palette,
    Sparkles,
    Droplet,
    Crown,
    Star,
    Heart,
}

impl ServiceIcon {
    pub fn glyph(&self) -> &'static str {
        match self {
            ServiceIcon::Scissors => "✂️",
            ServiceIcon::Brush => "🖌️",
            ServiceIcon::Palette => "🎨",
            ServiceIcon::Sparkles => "✨",
            ServiceIcon::Droplet => "💧",
            ServiceIcon::Crown => "👑",
            ServiceIcon::Star => "⭐",
            ServiceIcon::Heart => "❤️",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ServiceCategory {
    Haircuts,
    Styling,
    Color,
    Treatments,
}

impl ServiceCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceCategory::Haircuts => "haircuts",
            ServiceCategory::Styling => "styling",
            ServiceCategory::Color => "color",
            ServiceCategory::Treatments => "treatments",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: String,
    pub name: String,
    pub icon: ServiceIcon,
    /// Default appointment length when this service is booked.
    pub duration_minutes: u32,
    pub price_eur: f64,
    pub category: ServiceCategory,
}
