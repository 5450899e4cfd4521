//! Expand/collapse state for FAQ answers and the credits dialog.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Disclosure {
    #[default]
    Closed,
    Open,
}

impl Disclosure {
    pub fn toggle(&mut self) {
        *self = match self {
            Disclosure::Closed => Disclosure::Open,
            Disclosure::Open => Disclosure::Closed,
        };
    }

    pub fn open(&mut self) {
        *self = Disclosure::Open;
    }

    pub fn close(&mut self) {
        *self = Disclosure::Closed;
    }

    pub fn is_open(self) -> bool {
        matches!(self, Disclosure::Open)
    }

    /// Value for `aria-expanded`.
    pub fn aria_expanded(self) -> &'static str {
        if self.is_open() {
            "true"
        } else {
            "false"
        }
    }
}
