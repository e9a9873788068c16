//! Navigation sections and record categories
//!
//! The four section identifiers (`comunicados`, `noticias`, `documentos`,
//! `admin`) are a fixed protocol shared by navigation, rendering, the CLI and
//! the config file, so they are kept in their original Portuguese form.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// One of the three record collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Announcements
    Comunicados,
    /// News articles (the only category with a detail view)
    Noticias,
    /// Document references (may carry an external link)
    Documentos,
}

impl Category {
    /// All categories in collection iteration order.
    pub const ALL: [Category; 3] = [
        Category::Comunicados,
        Category::Noticias,
        Category::Documentos,
    ];

    /// Stable identifier, identical to the section identifier.
    pub fn id(self) -> &'static str {
        self.section().id()
    }

    /// Display label, identical to the section label.
    pub fn label(self) -> &'static str {
        self.section().label()
    }

    /// The section that lists this category.
    pub fn section(self) -> Section {
        match self {
            Category::Comunicados => Section::Comunicados,
            Category::Noticias => Section::Noticias,
            Category::Documentos => Section::Documentos,
        }
    }

    /// Label of the admin "add" affordance (grammatical gender follows the noun).
    pub fn add_label(self) -> &'static str {
        match self {
            Category::Noticias => "Adicionar nova",
            Category::Comunicados | Category::Documentos => "Adicionar novo",
        }
    }

    /// Position in [`Category::ALL`].
    pub fn index(self) -> usize {
        match self {
            Category::Comunicados => 0,
            Category::Noticias => 1,
            Category::Documentos => 2,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// A top-level navigation destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    #[default]
    Comunicados,
    Noticias,
    Documentos,
    Admin,
}

impl Section {
    /// All sections in navigation bar order.
    pub const ALL: [Section; 4] = [
        Section::Comunicados,
        Section::Noticias,
        Section::Documentos,
        Section::Admin,
    ];

    /// Stable identifier used by the CLI, config and headless output.
    pub fn id(self) -> &'static str {
        match self {
            Section::Comunicados => "comunicados",
            Section::Noticias => "noticias",
            Section::Documentos => "documentos",
            Section::Admin => "admin",
        }
    }

    /// Label shown in the navigation bar.
    pub fn label(self) -> &'static str {
        match self {
            Section::Comunicados => "Comunicados",
            Section::Noticias => "Notícias",
            Section::Documentos => "Documentos",
            Section::Admin => "Admin",
        }
    }

    /// The record collection listed by this section, `None` for admin.
    pub fn category(self) -> Option<Category> {
        match self {
            Section::Comunicados => Some(Category::Comunicados),
            Section::Noticias => Some(Category::Noticias),
            Section::Documentos => Some(Category::Documentos),
            Section::Admin => None,
        }
    }

    /// Position in [`Section::ALL`].
    pub fn index(self) -> usize {
        match self {
            Section::Comunicados => 0,
            Section::Noticias => 1,
            Section::Documentos => 2,
            Section::Admin => 3,
        }
    }

    /// Next section in navigation bar order, wrapping around.
    pub fn next(self) -> Section {
        Section::ALL[(self.index() + 1) % Section::ALL.len()]
    }

    /// Previous section in navigation bar order, wrapping around.
    pub fn previous(self) -> Section {
        let len = Section::ALL.len();
        Section::ALL[(self.index() + len - 1) % len]
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Section {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::ALL
            .into_iter()
            .find(|section| section.id() == s)
            .ok_or_else(|| Error::unknown_section(s))
    }
}

impl From<Category> for Section {
    fn from(category: Category) -> Self {
        category.section()
    }
}
