//! # TestWorksheet: headless integration test harness
//!
//! Wraps a `bevy::app::App` with `MinimalPlugins` + `WorksheetPlugin` so
//! tests can queue actions, advance frames, and inspect session resources
//! without a window or renderer.

mod queries;

use bevy::prelude::*;

use crate::equipment::EquipmentEntry;
use crate::worksheet_actions::{
    ActionQueue, ActionResult, ActionResultLog, ActionSource, WorksheetAction,
};
use crate::WorksheetPlugin;

pub struct TestWorksheet {
    app: App,
}

impl Default for TestWorksheet {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorksheet {
    /// A fresh session with default inputs and no equipment. One frame has
    /// run, so derived commute/factory/material values exist.
    pub fn new() -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(WorksheetPlugin);
        app.update();
        Self { app }
    }

    /// Builder: add an equipment entry through the action queue.
    pub fn with_equipment(mut self, entry: EquipmentEntry) -> Self {
        let result = self.act(WorksheetAction::AddEquipment { entry });
        assert!(result.is_success(), "equipment rejected: {result:?}");
        self
    }

    /// Queue an action without running a frame, so several actions can be
    /// executed by the same executor pass.
    pub fn queue(&mut self, action: WorksheetAction) {
        self.app
            .world_mut()
            .resource_mut::<ActionQueue>()
            .push(ActionSource::Analyst, action);
    }

    /// Queue one action, run a frame, and return its logged result.
    pub fn act(&mut self, action: WorksheetAction) -> ActionResult {
        self.queue(action);
        self.update();
        self.app
            .world()
            .resource::<ActionResultLog>()
            .last()
            .map(|entry| entry.result.clone())
            .unwrap_or(ActionResult::Success)
    }

    pub fn confirm(&mut self) -> ActionResult {
        self.act(WorksheetAction::ConfirmResults)
    }

    /// Run `n` frames.
    pub fn update_n(&mut self, n: u32) {
        for _ in 0..n {
            self.update();
        }
    }

    pub fn update(&mut self) {
        self.app.update();
    }
}
