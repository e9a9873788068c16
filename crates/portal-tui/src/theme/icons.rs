//! Icon set for the TUI.
//!
//! Provides `IconSet` which resolves icons at runtime based on `IconMode`.
//! Unicode fallbacks are all single-column characters.

use portal_app::config::IconMode;
use portal_core::Section;

/// Runtime icon resolver.
#[derive(Debug, Clone, Copy)]
pub struct IconSet {
    mode: IconMode,
}

impl IconSet {
    pub fn new(mode: IconMode) -> Self {
        Self { mode }
    }

    /// Navigation bar icon of a section
    pub fn section(&self, section: Section) -> &'static str {
        match (self.mode, section) {
            (IconMode::NerdFonts, Section::Comunicados) => "\u{f0f3}", // nf-fa-bell
            (IconMode::NerdFonts, Section::Noticias) => "\u{f1ea}",    // nf-fa-newspaper_o
            (IconMode::NerdFonts, Section::Documentos) => "\u{f15c}",  // nf-fa-file_text
            (IconMode::NerdFonts, Section::Admin) => "\u{f013}",       // nf-fa-cog
            (IconMode::Unicode, Section::Comunicados) => "\u{25c6}",   // ◆
            (IconMode::Unicode, Section::Noticias) => "\u{25a4}",      // ▤
            (IconMode::Unicode, Section::Documentos) => "\u{25a1}",    // □
            (IconMode::Unicode, Section::Admin) => "\u{2261}",         // ≡
        }
    }

    pub fn search(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f002}", // nf-fa-search
            IconMode::Unicode => "/",
        }
    }

    pub fn back(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f060}", // nf-fa-arrow_left
            IconMode::Unicode => "\u{2190}",   // ←
        }
    }

    pub fn read_more(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f054}", // nf-fa-chevron_right
            IconMode::Unicode => "\u{203a}",   // ›
        }
    }

    pub fn external_link(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f08e}", // nf-fa-external_link
            IconMode::Unicode => "\u{2197}",   // ↗
        }
    }

    pub fn image(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f03e}", // nf-fa-image
            IconMode::Unicode => "\u{25a3}",   // ▣
        }
    }

    pub fn add(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f067}", // nf-fa-plus
            IconMode::Unicode => "+",
        }
    }

    pub fn view(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f06e}", // nf-fa-eye
            IconMode::Unicode => "\u{25c9}",   // ◉
        }
    }

    pub fn delete(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f1f8}", // nf-fa-trash
            IconMode::Unicode => "\u{00d7}",   // ×
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use unicode_width::UnicodeWidthStr;

    #[test]
    fn test_unicode_icons_are_single_column() {
        let icons = IconSet::new(IconMode::Unicode);
        let mut all: Vec<&str> = Section::ALL.iter().map(|s| icons.section(*s)).collect();
        all.extend([
            icons.search(),
            icons.back(),
            icons.read_more(),
            icons.external_link(),
            icons.image(),
            icons.add(),
            icons.view(),
            icons.delete(),
        ]);
        for icon in all {
            assert_eq!(icon.width(), 1, "icon {icon:?}");
        }
    }

    #[test]
    fn test_modes_differ() {
        let unicode = IconSet::new(IconMode::Unicode);
        let nerd = IconSet::new(IconMode::NerdFonts);
        assert_ne!(unicode.back(), nerd.back());
    }
}
