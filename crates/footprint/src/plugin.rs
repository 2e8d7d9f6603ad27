//! Bevy host for the engine.
//!
//! Requests arrive as [`FootprintRequest`] events; `score_footprint_requests`
//! answers each with exactly one [`FootprintComputed`] in the same update.

use bevy::prelude::*;

use crate::engine::{calculate, FootprintResult};
use crate::factors::FactorTable;
use crate::survey::SurveyAnswers;

#[derive(Event, Debug, Clone)]
pub struct FootprintRequest {
    pub request_id: u64,
    pub answers: SurveyAnswers,
}

#[derive(Event, Debug, Clone)]
pub struct FootprintComputed {
    pub request_id: u64,
    pub result: FootprintResult,
}

/// Running counters for the session.
#[derive(Resource, Debug, Default, Clone, PartialEq)]
pub struct FootprintLedger {
    pub requests_scored: u64,
    /// Requests whose raw total went negative and was floored.
    pub floored_totals: u64,
}

pub fn score_footprint_requests(
    table: Res<FactorTable>,
    mut ledger: ResMut<FootprintLedger>,
    mut requests: EventReader<FootprintRequest>,
    mut computed: EventWriter<FootprintComputed>,
) {
    for request in requests.read() {
        let calc = calculate(&request.answers, &table);
        if calc.aggregate.gross_kg < 0.0 {
            ledger.floored_totals += 1;
        }
        ledger.requests_scored += 1;
        debug!(
            "request {}: {} categories, {:.3} t",
            request.request_id,
            calc.breakdowns.len(),
            calc.result.total_footprint
        );
        computed.send(FootprintComputed {
            request_id: request.request_id,
            result: calc.result,
        });
    }
}

pub struct FootprintPlugin;

impl Plugin for FootprintPlugin {
    fn build(&self, app: &mut App) {
        // A table inserted before the plugin (loaded overrides) wins.
        app.init_resource::<FactorTable>()
            .init_resource::<FootprintLedger>()
            .add_event::<FootprintRequest>()
            .add_event::<FootprintComputed>()
            .add_systems(Update, score_footprint_requests);
    }
}
