// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use crate::ids::ProfileId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    Idle,
    Summarized(ProfileId),
    Detailed(ProfileId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectionController {
    current: Selection,
}

impl SelectionController {
    pub fn current(&self) -> Selection {
        self.current
    }

    pub fn summarized(&self) -> Option<ProfileId> {
        match self.current {
            Selection::Summarized(id) => Some(id),
            _ => None,
        }
    }

    pub fn detailed(&self) -> Option<ProfileId> {
        match self.current {
            Selection::Detailed(id) => Some(id),
            _ => None,
        }
    }

    pub fn show_summary(&mut self, id: ProfileId) {
        self.current = Selection::Summarized(id);
    }

    pub fn show_details(&mut self, id: ProfileId) {
        self.current = Selection::Detailed(id);
    }

    /// Leaves the detail page. Returns false when no detail page was open.
    pub fn back_to_list(&mut self) -> bool {
        if matches!(self.current, Selection::Detailed(_)) {
            self.current = Selection::Idle;
            return true;
        }
        false
    }

    /// Returns true when the deleted profile was selected.
    pub fn on_delete(&mut self, id: ProfileId) -> bool {
        match self.current {
            Selection::Summarized(current) | Selection::Detailed(current) if current == id => {
                self.current = Selection::Idle;
                true
            }
            _ => false,
        }
    }
}
