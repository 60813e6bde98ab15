//! The fixed navigation table and the rule deciding which entry is active.

use crate::Glyph;
use getset::CopyGetters;

/// One section of the application reachable from the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, CopyGetters)]
pub struct NavEntry {
    /// Returns the icon drawn in front of the label.
    #[getset(get_copy = "pub")]
    icon: Glyph,

    /// Returns the display text.
    #[getset(get_copy = "pub")]
    label: &'static str,

    /// Returns the route of the section.
    #[getset(get_copy = "pub")]
    path: &'static str,
}

impl NavEntry {
    pub const fn new(icon: Glyph, label: &'static str, path: &'static str) -> Self {
        NavEntry { icon, label, path }
    }

    /// Whether this entry is the one for `current_path`. Only an exact match
    /// counts; `/campaigns/42` does not activate `/campaigns`.
    pub fn is_active(&self, current_path: &str) -> bool {
        self.path == current_path
    }
}

/// Entries shown in the sidebar, in display order. Paths are unique.
pub const NAV_ENTRIES: [NavEntry; 6] = [
    NavEntry::new(Glyph::LayoutDashboard, "แดชบอร์ด", "/"),
    NavEntry::new(Glyph::PieChart, "แคมเปญ", "/campaigns"),
    NavEntry::new(Glyph::Target, "กลุ่มเป้าหมาย", "/targeting"),
    NavEntry::new(Glyph::Megaphone, "สร้างสรรค์โฆษณา", "/creative"),
    NavEntry::new(Glyph::BarChart2, "วิเคราะห์ผล", "/analytics"),
    NavEntry::new(Glyph::Settings, "ตั้งค่า", "/settings"),
];

/// Returns the index of the entry whose path equals `current_path`, or `None`
/// when the route is not in `entries`.
pub fn active_index(current_path: &str, entries: &[NavEntry]) -> Option<usize> {
    entries.iter().position(|e| e.is_active(current_path))
}

/// Looks up the entry for `path` in [`NAV_ENTRIES`].
pub fn entry_for(path: &str) -> Option<NavEntry> {
    active_index(path, &NAV_ENTRIES).map(|i| NAV_ENTRIES[i])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_entry_activates_only_itself() {
        for (i, entry) in NAV_ENTRIES.iter().enumerate() {
            assert_eq!(active_index(entry.path(), &NAV_ENTRIES), Some(i));
            let active: Vec<_> = NAV_ENTRIES
                .iter()
                .filter(|e| e.is_active(entry.path()))
                .collect();
            assert_eq!(active, vec![entry]);
        }
    }

    #[test]
    fn root_is_dashboard() {
        let i = active_index("/", &NAV_ENTRIES).unwrap();
        assert_eq!(NAV_ENTRIES[i].label(), "แดชบอร์ด");
        assert_eq!(NAV_ENTRIES[i].icon(), Glyph::LayoutDashboard);
    }

    #[test]
    fn unknown_routes_activate_nothing() {
        for path in ["/unknown", "/campaigns/1", "/campaigns/", "", "/Settings"] {
            assert_eq!(active_index(path, &NAV_ENTRIES), None, "{}", path);
        }
        assert!(entry_for("/unknown").is_none());
    }

    #[test]
    fn paths_are_unique() {
        for (i, a) in NAV_ENTRIES.iter().enumerate() {
            for b in &NAV_ENTRIES[i + 1..] {
                assert_ne!(a.path(), b.path());
            }
        }
    }

    #[test]
    fn custom_table() {
        let entries = [
            NavEntry::new(Glyph::Bell, "a", "/a"),
            NavEntry::new(Glyph::User, "b", "/b"),
        ];
        assert_eq!(active_index("/b", &entries), Some(1));
        assert_eq!(active_index("/", &entries), None);
        assert_eq!(active_index("/a", &[]), None);
    }

    #[test]
    fn lookup_by_path() {
        assert_eq!(entry_for("/analytics").map(|e| e.label()), Some("วิเคราะห์ผล"));
    }
}
