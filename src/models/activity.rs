use serde::{Serialize, Serializer};

/// What a single hourly slot is booked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Activity {
    #[default]
    Empty,
    Work,
    Sleep,
    Eating,
    Grappling,
    Lifting,
}

impl Activity {
    /// Toggle order; `cycle` wraps from the last entry back to the first.
    pub const CYCLE: [Activity; 6] = [
        Activity::Empty,
        Activity::Work,
        Activity::Sleep,
        Activity::Eating,
        Activity::Grappling,
        Activity::Lifting,
    ];

    pub fn next(self) -> Self {
        let idx = Self::CYCLE
            .iter()
            .position(|a| *a == self)
            .unwrap_or_default();
        Self::CYCLE[(idx + 1) % Self::CYCLE.len()]
    }

    /// Convert enum → storage label
    pub fn to_db_str(&self) -> &'static str {
        match self {
            Activity::Empty => "",
            Activity::Work => "work",
            Activity::Sleep => "sleep",
            Activity::Eating => "eating",
            Activity::Grappling => "grappling",
            Activity::Lifting => "lifting",
        }
    }

    /// Convert storage label → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "" => Some(Activity::Empty),
            "work" => Some(Activity::Work),
            "sleep" => Some(Activity::Sleep),
            "eating" => Some(Activity::Eating),
            "grappling" => Some(Activity::Grappling),
            "lifting" => Some(Activity::Lifting),
            _ => None,
        }
    }

    /// Helper: convert input from CLI (any case, `empty`/`none`/`-` clear the slot)
    pub fn from_cli_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "empty" | "none" | "-" => Some(Activity::Empty),
            other => Self::from_db_str(other),
        }
    }

    /// Capitalized label used in the grid ("" for an empty slot).
    pub fn label(&self) -> &'static str {
        match self {
            Activity::Empty => "",
            Activity::Work => "Work",
            Activity::Sleep => "Sleep",
            Activity::Eating => "Eating",
            Activity::Grappling => "Grappling",
            Activity::Lifting => "Lifting",
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Activity::Empty)
    }

    /// Activities owned by the auto-scheduler and wiped before each run.
    pub fn is_generated(&self) -> bool {
        matches!(
            self,
            Activity::Eating | Activity::Grappling | Activity::Lifting
        )
    }
}

impl Serialize for Activity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.to_db_str())
    }
}

