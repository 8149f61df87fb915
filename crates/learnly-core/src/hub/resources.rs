//! Curated external learning resources.

use serde::{Deserialize, Serialize};

use super::Icon;

/// An external learning resource.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resource {
    pub id: String,
    pub title: String,
    pub icon: Icon,
    pub description: String,
    pub url: String,
}

impl Resource {
    /// The curated resource list. Fixed; there is no add/remove.
    pub fn builtin() -> Vec<Resource> {
        let resource = |id: &str, title: &str, icon: Icon, description: &str, url: &str| {
            Resource {
                id: id.into(),
                title: title.into(),
                icon,
                description: description.into(),
                url: url.into(),
            }
        };
        vec![
            resource(
                "1",
                "Math Help",
                Icon::Calculator,
                "Algebra, calculus, and more",
                "https://www.khanacademy.org/math",
            ),
            resource(
                "2",
                "Study Guides",
                Icon::Book,
                "Comprehensive study materials",
                "https://www.sparknotes.com/",
            ),
            resource(
                "3",
                "Programming",
                Icon::Code,
                "Learn to code step by step",
                "https://www.freecodecamp.org/",
            ),
            resource(
                "4",
                "Language Learning",
                Icon::Language,
                "Master new languages",
                "https://www.duolingo.com/",
            ),
            resource(
                "5",
                "Science Lab",
                Icon::Flask,
                "Interactive science experiments",
                "https://phet.colorado.edu/",
            ),
            resource(
                "6",
                "Writing Center",
                Icon::Pencil,
                "Improve your writing skills",
                "https://owl.purdue.edu/owl/purdue_owl.html",
            ),
        ]
    }

    /// Look up a builtin resource by id.
    pub fn find(id: &str) -> Option<Resource> {
        Self::builtin().into_iter().find(|r| r.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_has_six_resources() {
        assert_eq!(Resource::builtin().len(), 6);
    }

    #[test]
    fn builtin_urls_are_well_formed() {
        for resource in Resource::builtin() {
            let parsed = url::Url::parse(&resource.url).unwrap();
            assert_eq!(parsed.scheme(), "https");
        }
    }

    #[test]
    fn find_by_id() {
        let r = Resource::find("3").unwrap();
        assert_eq!(r.title, "Programming");
        assert!(Resource::find("99").is_none());
    }
}
