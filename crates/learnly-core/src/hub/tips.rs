//! Study tips browser.
//!
//! A fixed list of tips, each in one of a closed set of categories. The
//! browser can list everything or narrow to one category; expand/collapse
//! is the presentation layer's concern.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Icon;

/// Category a study tip belongs to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TipCategory {
    Focus,
    Organization,
    Retention,
    Wellness,
}

impl TipCategory {
    pub const ALL: [TipCategory; 4] = [
        TipCategory::Focus,
        TipCategory::Organization,
        TipCategory::Retention,
        TipCategory::Wellness,
    ];

    /// Display label for category pickers.
    pub fn label(&self) -> &'static str {
        match self {
            TipCategory::Focus => "Focus",
            TipCategory::Organization => "Organization",
            TipCategory::Retention => "Retention",
            TipCategory::Wellness => "Wellness",
        }
    }

    /// Parse a user-supplied category name, case-insensitively.
    pub fn parse(s: &str) -> Option<TipCategory> {
        match s.trim().to_lowercase().as_str() {
            "focus" => Some(TipCategory::Focus),
            "organization" => Some(TipCategory::Organization),
            "retention" => Some(TipCategory::Retention),
            "wellness" => Some(TipCategory::Wellness),
            _ => None,
        }
    }
}

impl fmt::Display for TipCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A study technique tip.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudyTip {
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon: Icon,
    pub category: TipCategory,
}

impl StudyTip {
    /// The curated tip list. Fixed; there is no add/remove.
    pub fn builtin() -> Vec<StudyTip> {
        let tip = |id: &str, title: &str, description: &str, icon: Icon, category: TipCategory| {
            StudyTip {
                id: id.into(),
                title: title.into(),
                description: description.into(),
                icon,
                category,
            }
        };
        vec![
            tip(
                "1",
                "Create a Dedicated Study Space",
                "Find a quiet, well-lit area free from distractions. Keep it organized and comfortable.",
                Icon::Home,
                TipCategory::Organization,
            ),
            tip(
                "2",
                "Use Active Recall Techniques",
                "Test yourself instead of just re-reading. Use flashcards, practice questions, or explain concepts to others.",
                Icon::LightbulbO,
                TipCategory::Retention,
            ),
            tip(
                "3",
                "Take Regular Breaks",
                "Follow the Pomodoro technique: 25 minutes of focused study, then 5-minute breaks.",
                Icon::ClockO,
                TipCategory::Focus,
            ),
            tip(
                "4",
                "Review Material Regularly",
                "Spaced repetition helps information stick. Review notes within 24 hours, then weekly.",
                Icon::Refresh,
                TipCategory::Retention,
            ),
            tip(
                "5",
                "Stay Hydrated and Rested",
                "Your brain needs water and sleep to function optimally. Aim for 7-9 hours of sleep.",
                Icon::Heart,
                TipCategory::Wellness,
            ),
            tip(
                "6",
                "Eliminate Distractions",
                "Put your phone on silent, close unnecessary tabs, and use apps like Forest to stay focused.",
                Icon::Ban,
                TipCategory::Focus,
            ),
        ]
    }

    /// Tips narrowed to one category; `None` means all tips.
    pub fn in_category(category: Option<TipCategory>) -> Vec<StudyTip> {
        match category {
            None => Self::builtin(),
            Some(wanted) => Self::builtin()
                .into_iter()
                .filter(|tip| tip.category == wanted)
                .collect(),
        }
    }
}
