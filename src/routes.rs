//! Known duplicate-route pairs.
//!
//! Pages migrated from the `pages/` router into the `app/(app)` route group
//! leave a legacy file behind. When both files exist the route is defined
//! twice.

use std::path::Path;

use serde::Serialize;

use crate::ports::filesystem::FileSystem;

/// (legacy, modern) route files, relative to the scan root.
pub const ROUTE_CONFLICTS: &[(&str, &str)] = &[
    ("pages/leads.tsx", "app/(app)/leads/page.tsx"),
    ("pages/leads/[id].tsx", "app/(app)/leads/[id]/page.tsx"),
    ("pages/ai-inbox.tsx", "app/(app)/ai-inbox/page.tsx"),
    ("pages/work-orders.tsx", "app/(app)/work-orders/page.tsx"),
    ("pages/calendar.tsx", "app/(app)/calendar/page.tsx"),
    ("pages/portal.tsx", "app/(app)/portal/page.tsx"),
    ("pages/settings.tsx", "app/(app)/settings/page.tsx"),
];

/// A legacy and a modern route file that both exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteConflict {
    /// Legacy `pages/` router file.
    pub legacy: String,
    /// Modern `app/` router file.
    pub modern: String,
}

impl RouteConflict {
    /// Formats the conflict as a single report line.
    #[must_use]
    pub fn report_line(&self) -> String {
        format!("DUPLICATE ROUTE: {} <-> {}", self.legacy, self.modern)
    }
}

/// Returns every pair from [`ROUTE_CONFLICTS`] whose two files both exist
/// under `root`, in table order.
#[must_use]
pub fn detect_route_conflicts(fs: &dyn FileSystem, root: &Path) -> Vec<RouteConflict> {
    ROUTE_CONFLICTS
        .iter()
        .filter(|(legacy, modern)| fs.exists(&root.join(legacy)) && fs.exists(&root.join(modern)))
        .map(|(legacy, modern)| RouteConflict {
            legacy: (*legacy).to_string(),
            modern: (*modern).to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::MemoryFileSystem;

    #[test]
    fn flags_pair_when_both_exist() {
        let fs = MemoryFileSystem::new();
        fs.add_file("/r/pages/leads.tsx", "");
        fs.add_file("/r/app/(app)/leads/page.tsx", "");

        let conflicts = detect_route_conflicts(&fs, Path::new("/r"));
        assert_eq!(
            conflicts,
            vec![RouteConflict {
                legacy: "pages/leads.tsx".into(),
                modern: "app/(app)/leads/page.tsx".into(),
            }]
        );
        assert_eq!(
            conflicts[0].report_line(),
            "DUPLICATE ROUTE: pages/leads.tsx <-> app/(app)/leads/page.tsx"
        );
    }

    #[test]
    fn ignores_pair_when_either_is_missing() {
        let fs = MemoryFileSystem::new();
        fs.add_file("/r/pages/leads.tsx", "");
        fs.add_file("/r/app/(app)/calendar/page.tsx", "");

        assert!(detect_route_conflicts(&fs, Path::new("/r")).is_empty());
    }

    #[test]
    fn table_has_no_repeated_pairs() {
        for (i, pair) in ROUTE_CONFLICTS.iter().enumerate() {
            assert!(!ROUTE_CONFLICTS[i + 1..].contains(pair), "duplicate entry {pair:?}");
        }
    }
}
