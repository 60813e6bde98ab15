//! Styling rules of the shell's button primitive.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ButtonVariant {
    /// Filled with the primary colour.
    #[default]
    Default,
    /// Transparent until hovered.
    Ghost,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ButtonSize {
    #[default]
    Default,
    Large,
    /// Square button holding a single icon.
    Icon,
}

impl ButtonVariant {
    pub fn class_name(self) -> &'static str {
        match self {
            ButtonVariant::Default => "btn-default",
            ButtonVariant::Ghost => "btn-ghost",
        }
    }
}

impl ButtonSize {
    pub fn class_name(self) -> &'static str {
        match self {
            ButtonSize::Default => "btn-md",
            ButtonSize::Large => "btn-lg",
            ButtonSize::Icon => "btn-icon",
        }
    }
}

/// Variant of a navigation button: filled when its entry is active.
pub fn variant_for(active: bool) -> ButtonVariant {
    if active {
        ButtonVariant::Default
    } else {
        ButtonVariant::Ghost
    }
}

/// Full class attribute of a button. `extra` is appended as given.
pub fn classes(variant: ButtonVariant, size: ButtonSize, extra: &str) -> String {
    let mut s = format!("btn {} {}", variant.class_name(), size.class_name());
    let extra = extra.trim();
    if !extra.is_empty() {
        s.push(' ');
        s.push_str(extra);
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_is_filled() {
        assert_eq!(variant_for(true), ButtonVariant::Default);
        assert_eq!(variant_for(false), ButtonVariant::Ghost);
    }

    #[test]
    fn class_string() {
        assert_eq!(
            classes(ButtonVariant::default(), ButtonSize::default(), ""),
            "btn btn-default btn-md"
        );
        assert_eq!(
            classes(ButtonVariant::Ghost, ButtonSize::Icon, " mobile-only "),
            "btn btn-ghost btn-icon mobile-only"
        );
    }
}
