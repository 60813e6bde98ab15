//! Site-wide settings shared by every page.

/// Branding and runtime settings of the shell. There is no external source for
/// these values; [`SiteConfig::default`] is what the app ships with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub product_name: &'static str,
    pub version: &'static str,
    pub copyright_year: u16,
    pub log_level: log::Level,
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            product_name: "AdGenius AI",
            version: env!("CARGO_PKG_VERSION"),
            copyright_year: 2025,
            log_level: log::Level::Debug,
        }
    }
}

impl SiteConfig {
    /// e.g. `AdGenius AI v0.1.0`
    pub fn version_line(&self) -> String {
        format!("{} v{}", self.product_name, self.version)
    }

    /// e.g. `© 2025 AdGenius AI`
    pub fn copyright_line(&self) -> String {
        format!("© {} {}", self.copyright_year, self.product_name)
    }

    /// Title shown in the browser tab for a page.
    pub fn page_title(&self, page: &str) -> String {
        if page.is_empty() {
            self.product_name.to_string()
        } else {
            format!("{} | {}", page, self.product_name)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn footer_lines() {
        let config = SiteConfig::default();
        assert_eq!(config.version_line(), "AdGenius AI v0.1.0");
        assert_eq!(config.copyright_line(), "© 2025 AdGenius AI");
    }

    #[test]
    fn titles() {
        let config = SiteConfig::default();
        assert_eq!(config.page_title(""), "AdGenius AI");
        assert_eq!(config.page_title("ตั้งค่า"), "ตั้งค่า | AdGenius AI");
    }
}
