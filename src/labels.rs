//! Static label tables for rendered descriptions.
//!
//! Every heading, field name and enum label printed by the renderer comes
//! from one [`Labels`] table per [`Locale`]. Tables are plain `static`
//! data so rendering never allocates them and never varies between calls.

use clap::ValueEnum;

use crate::record::{IssueType, Priority};

/// Language used for headings and labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum)]
pub enum Locale {
    #[default]
    #[value(alias = "en")]
    English,
    #[value(alias = "pt-br", alias = "pt")]
    Portuguese,
}

impl Locale {
    /// Returns the label table for this locale.
    pub fn labels(self) -> &'static Labels {
        match self {
            Locale::English => &ENGLISH,
            Locale::Portuguese => &PORTUGUESE,
        }
    }
}

/// Headings, field names and enum labels for one locale.
#[derive(Debug)]
pub struct Labels {
    pub issue_heading: &'static str,
    pub type_field: &'static str,
    pub priority_field: &'static str,
    pub environment_field: &'static str,
    pub occurrence_field: &'static str,
    pub scenarios_heading: &'static str,
    pub scenario: &'static str,
    pub given: &'static str,
    pub when: &'static str,
    pub then: &'static str,
    pub observations_heading: &'static str,
    pub attachments_heading: &'static str,

    pub failure_heading: &'static str,
    pub number_field: &'static str,
    pub occurred_field: &'static str,
    pub severity_field: &'static str,
    pub activity_field: &'static str,
    pub failure_scenarios_heading: &'static str,
    pub failure_given: &'static str,
    pub failure_when: &'static str,
    pub failure_then: &'static str,
    pub additional_observations_heading: &'static str,
    pub evidence_heading: &'static str,
    pub report_heading: &'static str,
    pub reported_by_field: &'static str,

    pub story_heading: &'static str,
    pub as_a: &'static str,
    pub i_want: &'static str,
    pub so_that: &'static str,
    pub impact_heading: &'static str,
    pub current_process: &'static str,
    pub expected_improvement: &'static str,
    pub objective_heading: &'static str,
    pub screenshots_heading: &'static str,
    pub screenshots_note: &'static str,
    pub file_column: &'static str,
    pub size_column: &'static str,
    pub type_column: &'static str,
    pub form_fields_heading: &'static str,
    pub field_name_column: &'static str,
    pub max_size_column: &'static str,
    pub required_column: &'static str,
    pub yes: &'static str,
    pub no: &'static str,
    pub messages_heading: &'static str,
    pub business_rules_heading: &'static str,
    pub attachments_note: &'static str,

    /// Indexed by `IssueType::code() - 1`.
    issue_types: [&'static str; 4],
    /// Indexed by `Priority::code() - 1`.
    priorities: [&'static str; 4],
    occurrence_types: &'static [(i64, &'static str)],
    field_types: &'static [(&'static str, &'static str)],
}

impl Labels {
    /// Returns emoji prefixed label for an issue type.
    pub fn issue_type(&self, issue_type: IssueType) -> &'static str {
        self.issue_types[usize::from(issue_type.code() - 1)]
    }

    /// Returns emoji prefixed label for a priority or severity.
    pub fn priority(&self, priority: Priority) -> &'static str {
        self.priorities[usize::from(priority.code() - 1)]
    }

    /// Resolves an occurrence code, `None` when the code is not in the table.
    pub fn occurrence_type(&self, code: i64) -> Option<&'static str> {
        self.occurrence_types
            .iter()
            .find(|(known, _)| *known == code)
            .map(|(_, label)| *label)
    }

    /// Reverse lookup of [`Labels::occurrence_type`].
    pub fn occurrence_code(&self, label: &str) -> Option<i64> {
        self.occurrence_types
            .iter()
            .find(|(_, known)| *known == label)
            .map(|(code, _)| *code)
    }

    /// All known occurrence codes with their labels, ordered by code.
    pub fn occurrence_types(&self) -> &'static [(i64, &'static str)] {
        self.occurrence_types
    }

    /// Translates a form field type code. Unknown codes pass through as is.
    pub fn field_type<'a>(&self, field_type: &'a str) -> &'a str {
        self.field_types
            .iter()
            .find(|(code, _)| *code == field_type)
            .map_or(field_type, |(_, label)| *label)
    }
}

/// Resolves an occurrence code for a locale.
pub fn occurrence_label(locale: Locale, code: i64) -> Option<&'static str> {
    locale.labels().occurrence_type(code)
}

/// Resolves an occurrence label back to its code for a locale.
pub fn occurrence_code(locale: Locale, label: &str) -> Option<i64> {
    locale.labels().occurrence_code(label)
}

/// Lists every occurrence code and label for a locale.
pub fn occurrence_types(locale: Locale) -> &'static [(i64, &'static str)] {
    locale.labels().occurrence_types()
}

pub static ENGLISH: Labels = Labels {
    issue_heading: "🎯 Issue Information",
    type_field: "📋 Type",
    priority_field: "⚡ Priority",
    environment_field: "🌐 Environment",
    occurrence_field: "🔧 Occurrence Type",
    scenarios_heading: "Scenarios",
    scenario: "Scenario",
    given: "Given",
    when: "When",
    then: "Then",
    observations_heading: "Observations",
    attachments_heading: "Attachments",

    failure_heading: "🐛 Failure Information",
    number_field: "📋 Number",
    occurred_field: "📅 Occurred At",
    severity_field: "⚠️ Severity",
    activity_field: "🔧 Activity",
    failure_scenarios_heading: "🔄 Failure Scenarios",
    failure_given: "🎯 Given",
    failure_when: "▶️ When",
    failure_then: "❌ Then",
    additional_observations_heading: "📝 Additional Observations",
    evidence_heading: "Evidence",
    report_heading: "👤 Report Information",
    reported_by_field: "Reported by",

    story_heading: "User Story",
    as_a: "As a",
    i_want: "I want",
    so_that: "So that",
    impact_heading: "Impact",
    current_process: "Current Process",
    expected_improvement: "Expected Improvement",
    objective_heading: "Objective",
    screenshots_heading: "Illustrative Screens",
    screenshots_note: "*The images will be attached to this story.*",
    file_column: "File",
    size_column: "Size",
    type_column: "Type",
    form_fields_heading: "Input Fields",
    field_name_column: "Field Name",
    max_size_column: "Max Size",
    required_column: "Required",
    yes: "Yes",
    no: "No",
    messages_heading: "Informative Messages",
    business_rules_heading: "Business Rules",
    attachments_note: "*The files will be attached to this story.*",

    issue_types: ["🐛 Bug", "✨ Feature", "🚀 Improvement", "📋 Task"],
    priorities: ["🟢 Low", "🟡 Medium", "🟠 High", "🔴 Critical"],
    occurrence_types: &[
        (1, "Operational Support"),
        (2, "Performance"),
        (3, "Procedure Question or Error"),
        (4, "Data Migration Error"),
        (5, "System Error"),
        (6, "Production Error"),
        (7, "Database Problem"),
        (8, "Infrastructure Problem"),
        (9, "Parameterization Problem"),
    ],
    field_types: &[
        ("text", "Text"),
        ("number", "Number"),
        ("date", "Date"),
        ("datetime", "Date and Time"),
        ("boolean", "Yes/No"),
        ("select", "Option List"),
    ],
};

pub static PORTUGUESE: Labels = Labels {
    issue_heading: "🎯 Informações da Issue",
    type_field: "📋 Tipo",
    priority_field: "⚡ Prioridade",
    environment_field: "🌐 Ambiente",
    occurrence_field: "🔧 Tipo de Ocorrência",
    scenarios_heading: "Cenários",
    scenario: "Cenário",
    given: "Dado que",
    when: "Quando",
    then: "Então",
    observations_heading: "Observações",
    attachments_heading: "Anexos",

    failure_heading: "🐛 Informações da Falha",
    number_field: "📋 Número",
    occurred_field: "📅 Ocorrência",
    severity_field: "⚠️ Severidade",
    activity_field: "🔧 Atividade",
    failure_scenarios_heading: "🔄 Cenários da Falha",
    failure_given: "🎯 Dado que",
    failure_when: "▶️ Quando",
    failure_then: "❌ Então",
    additional_observations_heading: "📝 Observações Adicionais",
    evidence_heading: "Evidências",
    report_heading: "👤 Informações do Relato",
    reported_by_field: "Reportado por",

    story_heading: "História do Usuário",
    as_a: "Como",
    i_want: "Quero",
    so_that: "Para",
    impact_heading: "Impacto",
    current_process: "Processo Atual",
    expected_improvement: "Melhoria Esperada",
    objective_heading: "Objetivo",
    screenshots_heading: "Telas Ilustrativas",
    screenshots_note: "*As imagens serão anexadas a esta história.*",
    file_column: "Arquivo",
    size_column: "Tamanho",
    type_column: "Tipo",
    form_fields_heading: "Campos de Preenchimento",
    field_name_column: "Nome do Campo",
    max_size_column: "Tamanho Máximo",
    required_column: "Obrigatório",
    yes: "Sim",
    no: "Não",
    messages_heading: "Mensagens Informativas",
    business_rules_heading: "Regras de Negócio",
    attachments_note: "*Os arquivos serão anexados a esta história.*",

    issue_types: ["🐛 Bug", "✨ Nova Funcionalidade", "🚀 Melhoria", "📋 Tarefa"],
    priorities: ["🟢 Baixa", "🟡 Média", "🟠 Alta", "🔴 Crítica"],
    occurrence_types: &[
        (1, "Apoio Operacional"),
        (2, "Desempenho"),
        (3, "Dúvida ou Erro de Procedimento"),
        (4, "Erro de Migração de Dados"),
        (5, "Erro de Sistema"),
        (6, "Erro em Produção"),
        (7, "Problema de Banco de Dados"),
        (8, "Problema de Infraestrutura"),
        (9, "Problema de Parametrizações"),
    ],
    field_types: &[
        ("text", "Texto"),
        ("number", "Número"),
        ("date", "Data"),
        ("datetime", "Data e Hora"),
        ("boolean", "Sim/Não"),
        ("select", "Lista de Opções"),
    ],
};
