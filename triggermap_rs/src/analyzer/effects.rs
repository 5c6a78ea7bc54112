//! Side-effect classification from callee names.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Observable side effects of a handler.
///
/// Declaration order is the rendering priority, so iterating a
/// `BTreeSet<EffectKind>` always yields effects in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffectKind {
    WritesDb,
    ReadsDb,
    SendsEmail,
    OpensModal,
    ClosesModal,
    ShowsNotification,
    RefreshesUiData,
}

impl EffectKind {
    pub const ALL: [EffectKind; 7] = [
        EffectKind::WritesDb,
        EffectKind::ReadsDb,
        EffectKind::SendsEmail,
        EffectKind::OpensModal,
        EffectKind::ClosesModal,
        EffectKind::ShowsNotification,
        EffectKind::RefreshesUiData,
    ];

    pub fn label(self) -> &'static str {
        match self {
            EffectKind::WritesDb => "Writes DB",
            EffectKind::ReadsDb => "Reads DB",
            EffectKind::SendsEmail => "Sends email",
            EffectKind::OpensModal => "Opens modal",
            EffectKind::ClosesModal => "Closes modal",
            EffectKind::ShowsNotification => "Shows notification",
            EffectKind::RefreshesUiData => "Refreshes UI data",
        }
    }
}

impl fmt::Display for EffectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Callee name -> effect table. Several names may share one effect.
#[derive(Debug, Clone, Default)]
pub struct EffectClassifier {
    table: Vec<(String, EffectKind)>,
}

impl EffectClassifier {
    pub fn new(table: Vec<(String, EffectKind)>) -> Self {
        Self { table }
    }

    pub fn builtin() -> Self {
        let table = [
            ("dbExecute", EffectKind::WritesDb),
            ("dbGetQuery", EffectKind::ReadsDb),
            ("send_project_creation_email", EffectKind::SendsEmail),
            ("send_project_cost_notification_email", EffectKind::SendsEmail),
            ("send_data_released_email", EffectKind::SendsEmail),
            ("showModal", EffectKind::OpensModal),
            ("removeModal", EffectKind::ClosesModal),
            ("showNotification", EffectKind::ShowsNotification),
            ("load_projects", EffectKind::RefreshesUiData),
            ("load_admin_data", EffectKind::RefreshesUiData),
        ];
        Self::new(
            table
                .into_iter()
                .map(|(call, effect)| (call.to_string(), effect))
                .collect(),
        )
    }

    /// Adds a mapping; an existing identical pair is left alone.
    pub fn add(&mut self, call: impl Into<String>, effect: EffectKind) {
        let call = call.into();
        if !self.table.iter().any(|(c, e)| *c == call && *e == effect) {
            self.table.push((call, effect));
        }
    }

    pub fn entries(&self) -> &[(String, EffectKind)] {
        &self.table
    }

    /// Every effect whose table entry names one of `calls`. Unknown calls
    /// contribute nothing.
    pub fn classify<'a, I>(&self, calls: I) -> BTreeSet<EffectKind>
    where
        I: IntoIterator<Item = &'a String>,
    {
        let mut effects = BTreeSet::new();
        for call in calls {
            for (name, effect) in &self.table {
                if name == call {
                    effects.insert(*effect);
                }
            }
        }
        effects
    }
}

/// `"Writes DB, Opens modal"` or `-` for an empty set.
pub fn format_effects(effects: &BTreeSet<EffectKind>) -> String {
    if effects.is_empty() {
        return "-".to_string();
    }
    effects
        .iter()
        .map(|e| e.label())
        .collect::<Vec<_>>()
        .join(", ")
}
