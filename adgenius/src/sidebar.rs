//! Open/closed state of the sidebar.

use std::ops::Not;

/// Whether the sidebar is shown. Equivalent to the boolean open flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Visibility {
    Open,
    #[default]
    Closed,
}

/// Things that can happen to the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SidebarEvent {
    /// The header's menu button.
    Toggle,
    /// The sidebar's own close button.
    Close,
}

impl Visibility {
    pub fn apply(self, event: SidebarEvent) -> Self {
        match event {
            SidebarEvent::Toggle => !self,
            SidebarEvent::Close => Visibility::Closed,
        }
    }

    /// CSS classes of the sidebar container.
    pub fn class_name(self) -> &'static str {
        match self {
            Visibility::Open => "sidebar open",
            Visibility::Closed => "sidebar closed",
        }
    }
}

impl Not for Visibility {
    type Output = Visibility;

    fn not(self) -> Self::Output {
        match self {
            Visibility::Open => Visibility::Closed,
            Visibility::Closed => Visibility::Open,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOTH: [Visibility; 2] = [Visibility::Open, Visibility::Closed];

    #[test]
    fn toggle_twice_is_identity() {
        for v in BOTH {
            let once = v.apply(SidebarEvent::Toggle);
            assert_ne!(once, v);
            assert_eq!(once.apply(SidebarEvent::Toggle), v);
        }
    }

    #[test]
    fn close_always_closes() {
        for v in BOTH {
            assert_eq!(v.apply(SidebarEvent::Close), Visibility::Closed);
        }
    }

    #[test]
    fn starts_closed() {
        assert_eq!(Visibility::default(), Visibility::Closed);
        assert_eq!(Visibility::default().class_name(), "sidebar closed");
        assert_eq!(Visibility::Open.class_name(), "sidebar open");
    }
}
