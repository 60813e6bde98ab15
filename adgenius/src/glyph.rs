/// Identifies one of the icons drawn by the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Glyph {
    Menu,
    Close,
    Bell,
    Settings,
    User,
    LayoutDashboard,
    PieChart,
    Target,
    Megaphone,
    BarChart2,
}

impl Glyph {
    /// Returns the icon-set name of the glyph, e.g. `"bar-chart-2"`.
    pub fn name(self) -> &'static str {
        match self {
            Glyph::Menu => "menu",
            Glyph::Close => "x",
            Glyph::Bell => "bell",
            Glyph::Settings => "settings",
            Glyph::User => "user",
            Glyph::LayoutDashboard => "layout-dashboard",
            Glyph::PieChart => "pie-chart",
            Glyph::Target => "target",
            Glyph::Megaphone => "megaphone",
            Glyph::BarChart2 => "bar-chart-2",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_unique() {
        let all = [
            Glyph::Menu,
            Glyph::Close,
            Glyph::Bell,
            Glyph::Settings,
            Glyph::User,
            Glyph::LayoutDashboard,
            Glyph::PieChart,
            Glyph::Target,
            Glyph::Megaphone,
            Glyph::BarChart2,
        ];
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(a.name(), b.name());
            }
        }
        assert_eq!(Glyph::Close.name(), "x");
        assert_eq!(Glyph::BarChart2.name(), "bar-chart-2");
    }
}
