//! Learning hub: curated resources and the study tips browser.

mod resources;
mod tips;

pub use resources::Resource;
pub use tips::{StudyTip, TipCategory};

use serde::{Deserialize, Serialize};

/// Closed set of glyphs the presentation layer may render for hub entries.
///
/// Names follow the icon font the front end uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Calculator,
    Book,
    Code,
    Language,
    Flask,
    Pencil,
    Home,
    LightbulbO,
    ClockO,
    Refresh,
    Heart,
    Ban,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_serializes_kebab_case() {
        assert_eq!(serde_json::to_string(&Icon::LightbulbO).unwrap(), "\"lightbulb-o\"");
        assert_eq!(serde_json::to_string(&Icon::Book).unwrap(), "\"book\"");
    }
}
