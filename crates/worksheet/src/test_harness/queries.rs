//! Resource access helpers for `TestWorksheet`.

use bevy::prelude::*;

use crate::session::WorksheetSession;
use crate::summary::SummaryState;

use super::TestWorksheet;

impl TestWorksheet {
    pub fn resource<T: Resource>(&self) -> &T {
        self.app.world().resource::<T>()
    }

    pub fn resource_mut<T: Resource>(&mut self) -> Mut<'_, T> {
        self.app.world_mut().resource_mut::<T>()
    }

    pub fn session(&self) -> &WorksheetSession {
        self.resource::<WorksheetSession>()
    }

    pub fn summary(&self) -> &SummaryState {
        self.resource::<SummaryState>()
    }
}
