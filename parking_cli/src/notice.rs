use std::{
    collections::BTreeMap,
    fmt,
    time::{Duration, Instant},
};

/// Area of the front-end a status message belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Section {
    EntryExit,
    Check,
    Time,
    Active,
    Slots,
    CancelUpdate,
    Report,
    Catalog,
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Section::EntryExit => "entry/exit",
            Section::Check => "check",
            Section::Time => "time",
            Section::Active => "active",
            Section::Slots => "slots",
            Section::CancelUpdate => "cancel/update",
            Section::Report => "report",
            Section::Catalog => "catalog",
        };
        f.pad(name)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub section: Section,
    pub severity: Severity,
    pub text: String,
}

impl Notice {
    pub fn info(section: Section, text: impl Into<String>) -> Self {
        Self::new(section, Severity::Info, text)
    }

    pub fn success(section: Section, text: impl Into<String>) -> Self {
        Self::new(section, Severity::Success, text)
    }

    pub fn error(section: Section, text: impl Into<String>) -> Self {
        Self::new(section, Severity::Error, text)
    }

    fn new(section: Section, severity: Severity, text: impl Into<String>) -> Self {
        Self {
            section,
            severity,
            text: text.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self.severity {
            Severity::Info => "info",
            Severity::Success => "ok",
            Severity::Error => "error",
        };
        write!(f, "[{tag}] {}", self.text)
    }
}

/// Latest notice per section, each dropped once it is older than the ttl.
#[derive(Debug)]
pub struct NoticeBoard {
    ttl: Duration,
    posted: BTreeMap<Section, (Notice, Instant)>,
}

impl NoticeBoard {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            posted: BTreeMap::new(),
        }
    }

    pub fn post(&mut self, notice: Notice, at: Instant) {
        self.posted.insert(notice.section, (notice, at));
    }

    pub fn visible(&mut self, now: Instant) -> Vec<Notice> {
        let ttl = self.ttl;
        self.posted
            .retain(|_, (_, at)| now.saturating_duration_since(*at) < ttl);
        self.posted
            .values()
            .map(|(notice, _)| notice.clone())
            .collect()
    }
}
