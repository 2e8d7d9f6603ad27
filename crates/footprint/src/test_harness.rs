//! # TestSurvey: headless harness for the footprint engine
//!
//! Wraps a `bevy::app::App` with `MinimalPlugins` + [`FootprintPlugin`] so
//! tests drive the engine exactly the way the binary does: send a
//! [`FootprintRequest`], run an update, read back the [`FootprintComputed`].

use bevy::app::App;
use bevy::ecs::event::Events;
use bevy::prelude::*;
use serde_json::Value;

use crate::engine::FootprintResult;
use crate::factors::FactorTable;
use crate::plugin::{FootprintComputed, FootprintLedger, FootprintPlugin, FootprintRequest};
use crate::survey::SurveyAnswers;

pub struct TestSurvey {
    app: App,
    next_request_id: u64,
}

impl Default for TestSurvey {
    fn default() -> Self {
        Self::new()
    }
}

impl TestSurvey {
    /// An engine running on the compiled-in factor table.
    pub fn new() -> Self {
        Self::build(None)
    }

    /// An engine running on an overridden factor table.
    pub fn with_table(table: FactorTable) -> Self {
        Self::build(Some(table))
    }

    fn build(table: Option<FactorTable>) -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        if let Some(table) = table {
            app.insert_resource(table);
        }
        app.add_plugins(FootprintPlugin);
        app.update();
        Self {
            app,
            next_request_id: 1,
        }
    }

    /// Queue a request without running the schedule.
    pub fn submit(&mut self, answers: SurveyAnswers) -> u64 {
        let request_id = self.next_request_id;
        self.next_request_id += 1;
        self.app.world_mut().send_event(FootprintRequest {
            request_id,
            answers,
        });
        request_id
    }

    /// Run one update and collect every result it produced.
    pub fn run(&mut self) -> Vec<FootprintComputed> {
        self.app.update();
        self.app
            .world_mut()
            .resource_mut::<Events<FootprintComputed>>()
            .drain()
            .collect()
    }

    /// Score one survey end to end.
    pub fn calculate(&mut self, answers: SurveyAnswers) -> FootprintResult {
        let request_id = self.submit(answers);
        self.run()
            .into_iter()
            .find(|c| c.request_id == request_id)
            .map(|c| c.result)
            .expect("engine produced no result for the request")
    }

    /// Score a survey given as JSON.
    pub fn calculate_json(&mut self, answers: Value) -> FootprintResult {
        let answers = SurveyAnswers::from_value(answers).expect("answers must be a JSON object");
        self.calculate(answers)
    }

    pub fn ledger(&self) -> &FootprintLedger {
        self.app.world().resource::<FootprintLedger>()
    }

    pub fn table(&self) -> &FactorTable {
        self.app.world().resource::<FactorTable>()
    }

    pub fn world_mut(&mut self) -> &mut World {
        self.app.world_mut()
    }
}
