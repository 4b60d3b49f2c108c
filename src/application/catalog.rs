//! Catalogue of demonstrations and the rule each one teaches

use std::fmt;

use clap::ValueEnum;
use termtree::Tree;

/// How binding a rule is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Mandatory,
    Recommended,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Mandatory => write!(f, "mandatory"),
            Severity::Recommended => write!(f, "recommended"),
        }
    }
}

/// The demonstrations, in the order they run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum DemoKind {
    ToArray,
    ArrayView,
    SafeRemoval,
    SubListView,
    Comparator,
    Presized,
    EntryIteration,
    Dedup,
}

impl DemoKind {
    pub const ALL: [DemoKind; 8] = [
        DemoKind::ToArray,
        DemoKind::ArrayView,
        DemoKind::SafeRemoval,
        DemoKind::SubListView,
        DemoKind::Comparator,
        DemoKind::Presized,
        DemoKind::EntryIteration,
        DemoKind::Dedup,
    ];

    /// Command-line name, e.g. `sub-list-view`.
    pub fn name(&self) -> &'static str {
        match self {
            DemoKind::ToArray => "to-array",
            DemoKind::ArrayView => "array-view",
            DemoKind::SafeRemoval => "safe-removal",
            DemoKind::SubListView => "sub-list-view",
            DemoKind::Comparator => "comparator",
            DemoKind::Presized => "presized",
            DemoKind::EntryIteration => "entry-iteration",
            DemoKind::Dedup => "dedup",
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            DemoKind::Presized | DemoKind::EntryIteration | DemoKind::Dedup => {
                Severity::Recommended
            }
            _ => Severity::Mandatory,
        }
    }

    pub fn rule(&self) -> &'static str {
        match self {
            DemoKind::ToArray => {
                "convert with the list's own to_array, into an array sized exactly len()"
            }
            DemoKind::ArrayView => {
                "a list view over an array shares its slots and cannot grow or shrink"
            }
            DemoKind::SafeRemoval => {
                "never remove inside a for-each; remove through the cursor instead"
            }
            DemoKind::SubListView => {
                "a sub-list is a live view; changing the parent structurally invalidates it"
            }
            DemoKind::Comparator => {
                "comparators must be antisymmetric, transitive and consistent with equality"
            }
            DemoKind::Presized => "give lists a capacity hint when the size is known",
            DemoKind::EntryIteration => {
                "traverse maps by entry, not by key followed by a lookup"
            }
            DemoKind::Dedup => "de-duplicate through a set instead of repeated contains checks",
        }
    }
}

impl fmt::Display for DemoKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Catalogue rendered as a tree: one branch per demonstration.
pub fn catalog_tree() -> Tree<String> {
    let leaves = DemoKind::ALL.iter().map(|demo| {
        Tree::new(format!("{demo} ({})", demo.severity()))
            .with_leaves([demo.rule().to_string()])
    });
    Tree::new("collection rules".to_string()).with_leaves(leaves)
}
