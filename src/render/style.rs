/// Visual state of a single pagination link.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkStyle {
    Default,
    Current,
    Disabled,
}

impl LinkStyle {
    /// A disabled link is never drawn as current.
    pub fn select(is_current: bool, is_disabled: bool) -> Self {
        match (is_current, is_disabled) {
            (_, true) => Self::Disabled,
            (true, false) => Self::Current,
            (false, false) => Self::Default,
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Self::Default => "pagenav__link",
            Self::Current => "pagenav__link pagenav__link--current",
            Self::Disabled => "pagenav__link pagenav__link--disabled",
        }
    }

    pub fn is_navigable(self) -> bool {
        self != Self::Disabled
    }
}
