//! Screen selection
//!
//! [`select`] is the portal's view function: it turns a navigation snapshot
//! and the content store into the [`Screen`] a frontend draws. It borrows
//! from the store and never allocates records.

use portal_core::{filter, Category, ContentStore, Record, RecordId, RecordRef, Section};
use serde::Serialize;
use tracing::warn;

use crate::navigation::Navigation;

/// What the body of the portal shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "screen", rename_all = "snake_case")]
pub enum Screen<'a> {
    Admin(AdminScreen<'a>),
    NewsDetail(NewsDetail<'a>),
    List(ListScreen<'a>),
}

impl Screen<'_> {
    /// Stable name of the screen kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Screen::Admin(_) => "admin",
            Screen::NewsDetail(_) => "news_detail",
            Screen::List(_) => "list",
        }
    }
}

/// "Gerenciar Conteúdo" summary plus "Atividade Recente".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdminScreen<'a> {
    /// One entry per category, in category order
    pub totals: Vec<CategoryTotal>,
    pub recent: Vec<RecentEntry<'a>>,
    /// Open delete confirmation, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirm: Option<DeleteConfirm<'a>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryTotal {
    pub category: Category,
    pub total: usize,
    pub add_label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RecentEntry<'a> {
    pub category: Category,
    pub record: &'a Record,
}

impl RecentEntry<'_> {
    pub fn reference(&self) -> RecordRef {
        RecordRef::new(self.category, self.record.id)
    }
}

/// Delete confirmation overlay contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DeleteConfirm<'a> {
    pub target: RecordRef,
    pub title: &'a str,
}

impl DeleteConfirm<'_> {
    /// Prompt shown in the overlay body.
    pub fn prompt(&self) -> String {
        format!("Tem certeza que deseja excluir \"{}\"?", self.title)
    }
}

/// A single news record with its body split into paragraphs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewsDetail<'a> {
    pub record: &'a Record,
    pub paragraphs: Vec<&'a str>,
}

/// Filtered cards of a content section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListScreen<'a> {
    pub category: Category,
    pub cards: Vec<Card<'a>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Card<'a> {
    pub record: &'a Record,
    pub affordance: Affordance<'a>,
}

/// Action offered by a card, decided by its category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Affordance<'a> {
    /// "Ler mais": open the news detail view
    ReadMore { id: RecordId },
    /// "Acesse aqui": open the document link
    ExternalLink { url: &'a str },
    None,
}

impl<'a> Affordance<'a> {
    pub fn for_record(category: Category, record: &'a Record) -> Self {
        match category {
            Category::Noticias => Affordance::ReadMore { id: record.id },
            Category::Documentos => match record.url.as_deref() {
                Some(url) => Affordance::ExternalLink { url },
                None => Affordance::None,
            },
            Category::Comunicados => Affordance::None,
        }
    }

    /// Button label, if the affordance is visible.
    pub fn label(&self) -> Option<&'static str> {
        match self {
            Affordance::ReadMore { .. } => Some("Ler mais"),
            Affordance::ExternalLink { .. } => Some("Acesse aqui"),
            Affordance::None => None,
        }
    }
}

/// Compute the screen for a navigation snapshot.
pub fn select<'a>(nav: &Navigation, content: &'a ContentStore, recent_limit: usize) -> Screen<'a> {
    let category = match nav.section.category() {
        Some(category) => category,
        None => return Screen::Admin(admin_screen(nav, content, recent_limit)),
    };

    if category == Category::Noticias {
        if let Some(id) = nav.selected_news {
            match content.get(RecordRef::new(Category::Noticias, id)) {
                Some(record) => {
                    return Screen::NewsDetail(NewsDetail {
                        record,
                        paragraphs: record.paragraphs(),
                    })
                }
                None => warn!("Selected news {} does not exist, showing list", id),
            }
        }
    }

    let cards = filter(content.records(category), &nav.query)
        .into_iter()
        .map(|record| Card {
            record,
            affordance: Affordance::for_record(category, record),
        })
        .collect();

    Screen::List(ListScreen { category, cards })
}

fn admin_screen<'a>(
    nav: &Navigation,
    content: &'a ContentStore,
    recent_limit: usize,
) -> AdminScreen<'a> {
    debug_assert_eq!(nav.section, Section::Admin);

    let totals = Category::ALL
        .into_iter()
        .map(|category| CategoryTotal {
            category,
            total: content.count(category),
            add_label: category.add_label(),
        })
        .collect();

    let recent = content
        .recent_activity(recent_limit)
        .into_iter()
        .map(|(category, record)| RecentEntry { category, record })
        .collect();

    let confirm = nav.pending_delete.and_then(|target| match content.get(target) {
        Some(record) => Some(DeleteConfirm {
            target,
            title: &record.title,
        }),
        None => {
            warn!("Delete target {:?} does not exist", target);
            None
        }
    });

    AdminScreen {
        totals,
        recent,
        confirm,
    }
}
