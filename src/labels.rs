//! The fixed label vocabulary the bot reads and writes

/// A label the bot knows about
///
/// Issues may carry any number of other labels; those are kept as plain
/// strings on [`Issue`](crate::types::Issue) and simply never match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    /// `type: accessibility`
    TypeAccessibility,
    /// `type: announcement`
    TypeAnnouncement,
    /// `type: bug`
    TypeBug,
    /// `type: CI`
    TypeCi,
    /// `type: code health`
    TypeCodeHealth,
    /// `type: docs`
    TypeDocs,
    /// `type: enhancement`
    TypeEnhancement,
    /// `type: performance`
    TypePerformance,
    /// `type: process`
    TypeProcess,
    /// `type: question`
    TypeQuestion,
    /// `priority: P0`
    PriorityP0,
    /// `priority: P1`
    PriorityP1,
    /// `priority: P2`
    PriorityP2,
    /// `priority: P3`
    PriorityP3,
    /// `priority: P4`
    PriorityP4,
    /// `status: archived`
    StatusArchived,
    /// `status: waiting on response`
    StatusWaiting,
    /// `flag: bot ignore`
    FlagBotIgnore,
}

impl Label {
    /// Every known label
    pub const ALL: [Self; 18] = [
        Self::TypeAccessibility,
        Self::TypeAnnouncement,
        Self::TypeBug,
        Self::TypeCi,
        Self::TypeCodeHealth,
        Self::TypeDocs,
        Self::TypeEnhancement,
        Self::TypePerformance,
        Self::TypeProcess,
        Self::TypeQuestion,
        Self::PriorityP0,
        Self::PriorityP1,
        Self::PriorityP2,
        Self::PriorityP3,
        Self::PriorityP4,
        Self::StatusArchived,
        Self::StatusWaiting,
        Self::FlagBotIgnore,
    ];

    /// Label text as it appears on GitHub
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TypeAccessibility => "type: accessibility",
            Self::TypeAnnouncement => "type: announcement",
            Self::TypeBug => "type: bug",
            Self::TypeCi => "type: CI",
            Self::TypeCodeHealth => "type: code health",
            Self::TypeDocs => "type: docs",
            Self::TypeEnhancement => "type: enhancement",
            Self::TypePerformance => "type: performance",
            Self::TypeProcess => "type: process",
            Self::TypeQuestion => "type: question",
            Self::PriorityP0 => "priority: P0",
            Self::PriorityP1 => "priority: P1",
            Self::PriorityP2 => "priority: P2",
            Self::PriorityP3 => "priority: P3",
            Self::PriorityP4 => "priority: P4",
            Self::StatusArchived => "status: archived",
            Self::StatusWaiting => "status: waiting on response",
            Self::FlagBotIgnore => "flag: bot ignore",
        }
    }
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Issues of these types default to the next milestone.
///
/// [`BACKLOG_PRIORITIES`] overrides the type.
pub const LABELS_FOR_NEXT_MILESTONE: &[Label] =
    &[Label::TypeAccessibility, Label::TypeBug, Label::TypeDocs];

/// Issues of these types default to the backlog.
pub const LABELS_FOR_BACKLOG: &[Label] = &[
    Label::TypeCi,
    Label::TypeCodeHealth,
    Label::TypeEnhancement,
    Label::TypePerformance,
];

/// Low priorities that send an issue to the backlog regardless of its type.
pub const BACKLOG_PRIORITIES: &[Label] = &[Label::PriorityP3, Label::PriorityP4];
