//! Sign-form visibility
//!
//! The form is either hidden or visible. The (+) button that flips it also
//! turns into an (×) while the form is open; that icon state is cosmetic only.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) enum FormState {
    #[default]
    Hidden,
    Visible,
}

/// Visual state of the toggle button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Icon {
    pub(crate) rotation_deg: u16,
    /// ANSI foreground color code
    pub(crate) color: u8,
}

impl Icon {
    /// The button glyph as it looks at this rotation
    pub(crate) fn glyph(&self) -> char {
        if self.rotation_deg % 90 == 45 { '×' } else { '+' }
    }

    pub(crate) fn paint(&self, use_color: bool) -> String {
        if use_color {
            format!("\x1b[{}m({})\x1b[0m", self.color, self.glyph())
        } else {
            format!("({})", self.glyph())
        }
    }
}

impl FormState {
    pub(crate) fn toggle(&mut self) -> Icon {
        *self = match self {
            FormState::Hidden => FormState::Visible,
            FormState::Visible => FormState::Hidden,
        };
        self.icon()
    }

    pub(crate) fn is_visible(self) -> bool {
        self == FormState::Visible
    }

    pub(crate) fn icon(self) -> Icon {
        match self {
            FormState::Hidden => Icon {
                rotation_deg: 0,
                color: 90,
            },
            FormState::Visible => Icon {
                rotation_deg: 45,
                color: 31,
            },
        }
    }
}
