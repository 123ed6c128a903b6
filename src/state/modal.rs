//! Open/minimized flags for the home-screen feature modals.
//!
//! DESIGN
//! ======
//! Each modal is independent: opening one never touches the others, and
//! closing resets the minimized flag so a reopened modal comes back at
//! full size.

#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

/// The four feature modals on the home screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalKind {
    Message,
    Tracker,
    Account,
    Notification,
}

impl ModalKind {
    pub const ALL: [Self; 4] = [Self::Message, Self::Tracker, Self::Account, Self::Notification];

    fn index(self) -> usize {
        match self {
            Self::Message => 0,
            Self::Tracker => 1,
            Self::Account => 2,
            Self::Notification => 3,
        }
    }

    /// Title shown in the modal chrome.
    pub fn title(self) -> &'static str {
        match self {
            Self::Message => "Messages",
            Self::Tracker => "Tracker",
            Self::Account => "Account",
            Self::Notification => "Notifications",
        }
    }
}

/// Presentation flags for one modal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ModalFlags {
    pub open: bool,
    pub minimized: bool,
}

/// Flags for every feature modal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ModalsState {
    modals: [ModalFlags; 4],
}

impl ModalsState {
    pub fn flags(&self, kind: ModalKind) -> ModalFlags {
        self.modals[kind.index()]
    }

    pub fn open(&mut self, kind: ModalKind) {
        self.modals[kind.index()].open = true;
    }

    /// Close and reset the minimized flag.
    pub fn close(&mut self, kind: ModalKind) {
        self.modals[kind.index()] = ModalFlags::default();
    }

    pub fn toggle_show(&mut self, kind: ModalKind) {
        let flags = &mut self.modals[kind.index()];
        flags.open = !flags.open;
    }

    pub fn toggle_minimize(&mut self, kind: ModalKind) {
        let flags = &mut self.modals[kind.index()];
        flags.minimized = !flags.minimized;
    }
}
