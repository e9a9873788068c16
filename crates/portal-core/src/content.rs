//! Read-only content store
//!
//! Holds the three record collections shown by the portal. The collections
//! are populated once and never grow or shrink: there is deliberately no
//! insert, update or delete operation on [`ContentStore`].

use crate::date::compare_desc;
use crate::record::{Record, RecordRef};
use crate::section::Category;

/// Number of records in the admin "recent activity" list.
pub const DEFAULT_RECENT_LIMIT: usize = 5;

/// The fixed collections of announcements, news and documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentStore {
    comunicados: Vec<Record>,
    noticias: Vec<Record>,
    documentos: Vec<Record>,
}

impl ContentStore {
    /// Build a store from explicit collections (definition order is kept).
    pub fn new(comunicados: Vec<Record>, noticias: Vec<Record>, documentos: Vec<Record>) -> Self {
        Self {
            comunicados,
            noticias,
            documentos,
        }
    }

    /// The portal's built-in content.
    pub fn builtin() -> Self {
        Self::new(builtin_comunicados(), builtin_noticias(), builtin_documentos())
    }

    /// Records of a category in definition order.
    pub fn records(&self, category: Category) -> &[Record] {
        match category {
            Category::Comunicados => &self.comunicados,
            Category::Noticias => &self.noticias,
            Category::Documentos => &self.documentos,
        }
    }

    /// Number of records in a category.
    pub fn count(&self, category: Category) -> usize {
        self.records(category).len()
    }

    /// Look up a record by category and id.
    pub fn get(&self, reference: RecordRef) -> Option<&Record> {
        self.records(reference.category)
            .iter()
            .find(|r| r.id == reference.id)
    }

    /// All records tagged with their category: announcements, then news,
    /// then documents.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &Record)> + '_ {
        Category::ALL
            .into_iter()
            .flat_map(move |category| self.records(category).iter().map(move |r| (category, r)))
    }

    /// The most recent records across all collections.
    ///
    /// Records are ordered by parsed date, most recent first. The sort is
    /// stable, so equal dates keep collection iteration order. Records whose
    /// date cannot be parsed go last.
    pub fn recent_activity(&self, limit: usize) -> Vec<(Category, &Record)> {
        let mut dated: Vec<_> = self
            .iter()
            .map(|(category, record)| (record.parsed_date().ok(), category, record))
            .collect();
        dated.sort_by(|a, b| compare_desc(a.0, b.0));
        dated
            .into_iter()
            .take(limit)
            .map(|(_, category, record)| (category, record))
            .collect()
    }
}

impl Default for ContentStore {
    fn default() -> Self {
        Self::builtin()
    }
}

// ─────────────────────────────────────────────────────────────────
// Built-in content
// ─────────────────────────────────────────────────────────────────

fn builtin_comunicados() -> Vec<Record> {
    vec![
        Record::new(
            1,
            "Manutenção Programada",
            "15 Mar 2024",
            "Informamos que haverá manutenção programada no sistema no próximo domingo.",
        ),
        Record::new(
            2,
            "Novo Procedimento",
            "14 Mar 2024",
            "Atualização importante sobre os novos procedimentos de segurança.",
        ),
    ]
}

fn builtin_noticias() -> Vec<Record> {
    vec![
        Record::new(
            1,
            "Expansão das Operações",
            "15 Mar 2024",
            "Nossa empresa está expandindo suas operações para novas regiões.",
        )
        .with_image("https://images.unsplash.com/photo-1486406146926-c627a92ad1ab?auto=format&fit=crop&w=800&q=80")
        .with_content(EXPANSAO_CONTENT),
        Record::new(
            2,
            "Prêmio de Inovação",
            "13 Mar 2024",
            "Recebemos o prêmio de empresa mais inovadora do setor.",
        )
        .with_image("https://images.unsplash.com/photo-1507679799987-c73779587ccf?auto=format&fit=crop&w=800&q=80")
        .with_content(PREMIO_CONTENT),
    ]
}

fn builtin_documentos() -> Vec<Record> {
    vec![
        Record::new(
            1,
            "Manual do Usuário",
            "10 Mar 2024",
            "Manual completo com todas as instruções de uso do sistema.",
        )
        .with_url("https://example.com/manual.pdf"),
        Record::new(
            2,
            "Política de Privacidade",
            "08 Mar 2024",
            "Documento oficial sobre nossa política de privacidade e proteção de dados.",
        )
        .with_url("https://example.com/privacy.pdf"),
    ]
}

const EXPANSAO_CONTENT: &str = "Nossa empresa está orgulhosa em anunciar uma significativa expansão de nossas operações para novas regiões. Esta expansão marca um momento crucial em nossa trajetória de crescimento e demonstra nosso compromisso contínuo com a inovação e excelência no atendimento aos nossos clientes.

Com investimentos estratégicos em infraestrutura e tecnologia, estamos preparados para atender uma base maior de clientes, mantendo os altos padrões de qualidade que nos tornaram referência no mercado. Esta expansão não apenas fortalece nossa presença no mercado, mas também cria novas oportunidades de emprego e desenvolvimento econômico nas regiões onde atuaremos.

Nossa equipe tem trabalhado incansavelmente nos últimos meses para garantir uma transição suave e eficiente. Implementamos novos sistemas de gestão, expandimos nossa capacidade logística e reforçamos nossa equipe com profissionais altamente qualificados.

Este é apenas o começo de uma nova fase em nossa história. Continuaremos investindo em inovação e buscando formas de melhorar ainda mais nossos serviços, sempre com o objetivo de superar as expectativas de nossos clientes e parceiros.";

const PREMIO_CONTENT: &str = "É com grande satisfação que anunciamos que nossa empresa foi reconhecida com o prestigioso Prêmio de Inovação do setor. Esta conquista é um testemunho do trabalho árduo e dedicação de toda nossa equipe na busca constante por soluções inovadoras.

O prêmio reconhece nossa contribuição significativa para o avanço tecnológico no setor, destacando especialmente nossas iniciativas em sustentabilidade e transformação digital. Este reconhecimento reforça nossa posição como líderes em inovação e nos motiva a continuar investindo em pesquisa e desenvolvimento.

Agradecemos a todos os nossos colaboradores, parceiros e clientes que tornaram esta conquista possível. Continuaremos nosso compromisso com a excelência e inovação, sempre buscando novas formas de criar valor para nossa comunidade.";
