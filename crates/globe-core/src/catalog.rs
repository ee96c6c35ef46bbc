use crate::error::{GlobeError, Result};
use crate::sphere::{sphere_point, Label};
use std::collections::HashSet;

/// Technologies shown by the full landing page build.
pub const FULL_CATALOG: &[&str] = &[
    // Frontend
    "JavaScript",
    "React",
    "TypeScript",
    "HTML5",
    "CSS3",
    "Sass",
    "Vue.js",
    "Next.js",
    "Tailwind",
    // Backend
    "Node.js",
    "Python",
    "Express.js",
    "Django",
    "Flask",
    "Java",
    "Spring Boot",
    "PHP",
    "Laravel",
    // Databases
    "MongoDB",
    "PostgreSQL",
    "MySQL",
    "Redis",
    "Firebase",
    "SQLite",
    "Prisma",
    // Tools & DevOps
    "Git",
    "Docker",
    "AWS",
    "Vercel",
    "Netlify",
    "GitHub Actions",
    "Webpack",
    "Vite",
    "Figma",
    "Postman",
];

/// Short list for the compact build.
pub const REDUCED_CATALOG: &[&str] = &[
    "JavaScript",
    "React",
    "TypeScript",
    "HTML5",
    "CSS3",
    "Node.js",
    "Python",
    "MongoDB",
    "Git",
    "Docker",
    "AWS",
];

/// Ordered list of unique label strings.
///
/// The order is the layout: entry `i` always lands at
/// `sphere_point(i, len, radius)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<String>,
}

impl Catalog {
    pub fn new<I, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entries: Vec<String> = entries.into_iter().map(Into::into).collect();
        if entries.is_empty() {
            return Err(GlobeError::EmptyCatalog);
        }
        let mut seen = HashSet::with_capacity(entries.len());
        for (index, e) in entries.iter().enumerate() {
            if e.trim().is_empty() {
                return Err(GlobeError::BlankLabel { index });
            }
            if !seen.insert(e.as_str()) {
                return Err(GlobeError::DuplicateLabel(e.clone()));
            }
        }
        Ok(Self { entries })
    }

    pub fn full() -> Self {
        Self::from_static(FULL_CATALOG)
    }

    pub fn reduced() -> Self {
        Self::from_static(REDUCED_CATALOG)
    }

    // Built-in lists are checked by the tests below.
    fn from_static(list: &[&str]) -> Self {
        Self {
            entries: list.iter().map(|s| (*s).to_owned()).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Place every entry on a sphere of `radius`.
    pub fn labels(&self, radius: f32) -> Vec<Label> {
        let total = self.entries.len();
        self.entries
            .iter()
            .enumerate()
            .map(|(i, text)| Label {
                text: text.clone(),
                position: sphere_point(i, total, radius),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_lists_are_valid() {
        assert_eq!(Catalog::new(FULL_CATALOG.iter().copied()).unwrap(), Catalog::full());
        assert_eq!(
            Catalog::new(REDUCED_CATALOG.iter().copied()).unwrap(),
            Catalog::reduced()
        );
        assert_eq!(Catalog::full().len(), 35);
        assert_eq!(Catalog::reduced().len(), 11);
    }

    #[test]
    fn rejects_empty_blank_and_duplicates() {
        assert_eq!(
            Catalog::new(Vec::<String>::new()),
            Err(GlobeError::EmptyCatalog)
        );
        assert_eq!(
            Catalog::new(["Rust", "  "]),
            Err(GlobeError::BlankLabel { index: 1 })
        );
        assert_eq!(
            Catalog::new(["Rust", "Go", "Rust"]),
            Err(GlobeError::DuplicateLabel("Rust".into()))
        );
    }

    #[test]
    fn labels_follow_catalog_order() {
        let catalog = Catalog::new(["a", "b", "c"]).unwrap();
        let labels = catalog.labels(2.0);
        assert_eq!(labels.len(), 3);
        for (i, l) in labels.iter().enumerate() {
            assert_eq!(l.text, catalog.entries()[i]);
            assert_eq!(l.position, sphere_point(i, 3, 2.0));
        }
    }

    #[test]
    fn labels_share_one_radius() {
        for l in Catalog::full().labels(3.2) {
            assert!((l.position.length() - 3.2).abs() < 1e-4, "{}", l.text);
        }
    }
}
