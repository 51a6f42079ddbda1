//! Version parsing and next/backlog milestone selection

use crate::error::{Error, Result};
use crate::types::Milestone;
use regex::Regex;
use std::cmp::Ordering;
use std::sync::LazyLock;
use tracing::{debug, warn};

static VERSION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^v?(\d+(?:\.\d+)*)$").expect("valid version regex"));

/// A dotted numeric version such as `v4.3` or `4.3.1`
///
/// Missing trailing components compare as zero, so `v4.3 == v4.3.0`.
#[derive(Debug, Clone)]
pub struct Version {
    components: Vec<u64>,
}

impl Version {
    /// Parse a milestone title as a version, returning `None` for anything
    /// that is not `v?N(.N)*`
    pub fn parse(title: &str) -> Option<Self> {
        let captures = VERSION_RE.captures(title.trim())?;
        let components = captures[1]
            .split('.')
            .map(str::parse)
            .collect::<std::result::Result<Vec<u64>, _>>()
            .ok()?;
        Some(Self { components })
    }

    /// Numeric components, most significant first
    pub fn components(&self) -> &[u64] {
        &self.components
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        let len = self.components.len().max(other.components.len());
        (0..len)
            .map(|i| {
                let a = self.components.get(i).copied().unwrap_or(0);
                let b = other.components.get(i).copied().unwrap_or(0);
                a.cmp(&b)
            })
            .find(|o| o.is_ne())
            .unwrap_or(Ordering::Equal)
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self.components.iter().map(ToString::to_string).collect();
        write!(f, "v{}", parts.join("."))
    }
}

/// Order milestones by version ascending; milestones without a version sort
/// last
pub fn compare_milestones(a: &Milestone, b: &Milestone) -> Ordering {
    match (&a.version, &b.version) {
        (Some(va), Some(vb)) => va.cmp(vb),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// The two milestones the rules assign issues to
#[derive(Debug, Clone)]
pub struct MilestoneSelection {
    /// Nearest upcoming version milestone (or the backlog if there is none)
    pub next: Milestone,
    /// The catch-all backlog milestone
    pub backlog: Milestone,
}

/// Pick the backlog and next version milestones from the open milestones
///
/// Fails with [`Error::NoBacklogMilestone`] when no backlog exists. When no
/// version milestone exists, the backlog doubles as the next milestone.
pub fn select_milestones(milestones: &[Milestone]) -> Result<MilestoneSelection> {
    let mut backlogs = milestones.iter().filter(|m| m.is_backlog());
    let backlog = backlogs.next().ok_or(Error::NoBacklogMilestone)?.clone();
    if backlogs.next().is_some() {
        warn!(backlog = %backlog, "Multiple backlog milestones found, using the first");
    }

    let mut candidates: Vec<&Milestone> = milestones
        .iter()
        .filter(|m| !m.is_backlog() && !m.closed)
        .collect();
    candidates.sort_by(|a, b| compare_milestones(a, b));

    let next = if let Some(m) = candidates.into_iter().find(|m| m.version.is_some()) {
        m.clone()
    } else {
        warn!("No version milestone found!  Using backlog instead.");
        backlog.clone()
    };

    debug!(next = %next, backlog = %backlog, "selected milestones");
    Ok(MilestoneSelection { next, backlog })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(s: &str) -> Version {
        Version::parse(s).unwrap()
    }

    #[test]
    fn test_parse_versions() {
        assert_eq!(v("v4.3").components(), &[4, 3]);
        assert_eq!(v("4.3.12").components(), &[4, 3, 12]);
        assert_eq!(v("v5").components(), &[5]);
        assert!(Version::parse("Backlog").is_none());
        assert!(Version::parse("v4.x").is_none());
        assert!(Version::parse("").is_none());
        assert!(Version::parse("Release v4.3").is_none());
    }

    #[test]
    fn test_version_ordering_is_numeric() {
        assert!(v("v4.10") > v("v4.9"));
        assert!(v("v10.0") > v("v9.99"));
        assert_eq!(v("v4.3"), v("v4.3.0"));
        assert!(v("v4.3.1") > v("v4.3"));
    }

    #[test]
    fn test_version_display() {
        assert_eq!(v("4.3.1").to_string(), "v4.3.1");
    }

    #[test]
    fn test_select_nearest_version() {
        let milestones = vec![
            Milestone::new(1, "v5.0"),
            Milestone::new(2, "Backlog"),
            Milestone::new(3, "Someday"),
            Milestone::new(4, "v4.10"),
            Milestone::new(5, "v4.9"),
        ];

        let selection = select_milestones(&milestones).unwrap();
        assert_eq!(selection.next.title, "v4.9");
        assert_eq!(selection.backlog.title, "Backlog");
    }

    #[test]
    fn test_select_skips_closed_versions() {
        let mut old = Milestone::new(1, "v4.0");
        old.closed = true;
        let milestones = vec![old, Milestone::new(2, "v4.1"), Milestone::new(3, "Backlog")];

        let selection = select_milestones(&milestones).unwrap();
        assert_eq!(selection.next.title, "v4.1");
    }

    #[test]
    fn test_select_without_backlog_is_fatal() {
        let milestones = vec![Milestone::new(1, "v4.0")];
        match select_milestones(&milestones) {
            Err(Error::NoBacklogMilestone) => {}
            other => panic!("Expected NoBacklogMilestone, got: {other:?}"),
        }
    }

    #[test]
    fn test_select_duplicate_backlog_uses_first() {
        let milestones = vec![
            Milestone::new(7, "v4.3"),
            Milestone::new(2, "Backlog"),
            Milestone::new(9, "backlog"),
        ];

        let selection = select_milestones(&milestones).unwrap();
        assert_eq!(selection.backlog.number, 2);
        assert_eq!(selection.next.number, 7);
    }

    #[test]
    fn test_select_without_versions_falls_back_to_backlog() {
        let milestones = vec![Milestone::new(1, "Someday"), Milestone::new(2, "Backlog")];

        let selection = select_milestones(&milestones).unwrap();
        assert_eq!(selection.next, selection.backlog);
    }
}
