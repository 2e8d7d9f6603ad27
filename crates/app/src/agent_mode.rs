//! The stdin/stdout session: one JSON command per line in, one JSON
//! response per line out.
//!
//! Each line is parsed as a [`SurveyCommand`]. A malformed line or body gets
//! an `error` response and the session carries on; `quit` or end of input
//! ends it. Logs go to stderr so stdout carries only protocol lines.

use std::io::{self, BufRead, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use bevy::ecs::event::Events;
use bevy::prelude::*;

use footprint::protocol::{
    make_response, HistoryEntry, ResponsePayload, SurveyCommand, SurveyResponse, PROTOCOL_VERSION,
};
use footprint::{FactorTable, FootprintComputed, FootprintRequest, FootprintResult, SurveyAnswers};
use save::{FootprintRecord, RecordStore};

/// Monotonic id for requests sent into the app.
#[derive(Resource, Debug, Default)]
pub struct NextRequestId(pub u64);

fn write_response<W: Write>(out: &mut W, response: &SurveyResponse) -> io::Result<()> {
    serde_json::to_writer(&mut *out, response)?;
    writeln!(out)?;
    out.flush()
}

/// Run a session until `quit` or end of input.
pub fn run_session<R: BufRead, W: Write>(input: R, mut output: W, app: &mut App) -> io::Result<()> {
    write_response(&mut output, &make_response(ResponsePayload::Ready))?;
    info!("carbon survey protocol v{} ready", PROTOCOL_VERSION);

    for line in input.lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                warn!("stdin read error: {e}");
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        let response = process_line(&line, app);
        let is_goodbye = matches!(response.payload, ResponsePayload::Goodbye);
        write_response(&mut output, &response)?;
        if is_goodbye {
            break;
        }
    }

    info!("carbon survey session closed");
    Ok(())
}

pub fn process_line(line: &str, app: &mut App) -> SurveyResponse {
    match serde_json::from_str::<SurveyCommand>(line) {
        Ok(cmd) => process_command(cmd, app),
        Err(e) => error_response(format!("Parse error: {e}")),
    }
}

fn error_response(message: String) -> SurveyResponse {
    debug!("{message}");
    make_response(ResponsePayload::Error { message })
}

/// Deserialize a request body. Only non-object bodies are rejected; every
/// field-level problem is left to the normalizer.
fn parse_answers(answers: serde_json::Value) -> Result<SurveyAnswers, String> {
    if !answers.is_object() {
        return Err("answers must be a JSON object".to_string());
    }
    SurveyAnswers::from_value(answers).map_err(|e| format!("malformed answers: {e}"))
}

/// Push one request through `FootprintPlugin` and collect its result.
fn score(app: &mut App, answers: SurveyAnswers) -> Option<FootprintResult> {
    let request_id = {
        let mut next = app.world_mut().get_resource_or_insert_with(NextRequestId::default);
        next.0 += 1;
        next.0
    };
    app.world_mut().send_event(FootprintRequest {
        request_id,
        answers,
    });
    app.update();

    app.world_mut()
        .resource_mut::<Events<FootprintComputed>>()
        .drain()
        .find(|computed| computed.request_id == request_id)
        .map(|computed| computed.result)
}

fn now_unix() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

pub fn process_command(cmd: SurveyCommand, app: &mut App) -> SurveyResponse {
    match cmd {
        SurveyCommand::Calculate { answers } => {
            let answers = match parse_answers(answers) {
                Ok(a) => a,
                Err(message) => return error_response(message),
            };
            match score(app, answers) {
                Some(footprint) => make_response(ResponsePayload::Footprint {
                    success: true,
                    footprint,
                }),
                None => error_response("engine produced no result".to_string()),
            }
        }

        SurveyCommand::Factors => {
            let table = app.world().resource::<FactorTable>().clone();
            make_response(ResponsePayload::Factors {
                table: Box::new(table),
            })
        }

        SurveyCommand::Save { user_id, answers } => {
            if user_id.trim().is_empty() {
                return error_response("save requires a user_id".to_string());
            }
            let raw = answers.clone();
            let survey = match parse_answers(answers) {
                Ok(a) => a,
                Err(message) => return error_response(message),
            };
            let Some(footprint) = score(app, survey) else {
                return error_response("engine produced no result".to_string());
            };
            let version = app.world().resource::<FactorTable>().version;
            let record = FootprintRecord::new(&user_id, now_unix(), version, &raw, &footprint);
            match app.world().resource::<RecordStore>().save(&record) {
                Ok(record_id) => make_response(ResponsePayload::Saved {
                    record_id,
                    footprint,
                }),
                Err(e) => {
                    error!("save failed: {e}");
                    error_response(format!("save failed: {e}"))
                }
            }
        }

        SurveyCommand::History { user_id } => {
            match app.world().resource::<RecordStore>().history(&user_id) {
                Ok(stored) => {
                    let records: Vec<HistoryEntry> = stored
                        .iter()
                        .map(|s| s.record.to_history_entry(&s.record_id))
                        .collect();
                    make_response(ResponsePayload::History { records })
                }
                Err(e) => error_response(format!("history failed: {e}")),
            }
        }

        SurveyCommand::Quit => make_response(ResponsePayload::Goodbye),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build_app;
    use crate::config::AppConfig;
    use serde_json::{json, Value};
    use std::path::PathBuf;

    fn test_app(name: &str) -> (App, PathBuf) {
        let records_dir = std::env::temp_dir().join(format!("carbon_agent_test_{name}"));
        let _ = std::fs::remove_dir_all(&records_dir);
        let config = AppConfig {
            factor_table: None,
            records_dir: records_dir.clone(),
            print_factors: false,
        };
        (build_app(&config, FactorTable::default()), records_dir)
    }

    fn run(lines: &str, app: &mut App) -> Vec<Value> {
        let mut out = Vec::new();
        run_session(lines.as_bytes(), &mut out, app).unwrap();
        String::from_utf8(out)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }

    fn respond(line: &str, app: &mut App) -> Value {
        serde_json::to_value(process_line(line, app)).unwrap()
    }

    #[test]
    fn test_session_ready_then_goodbye() {
        let (mut app, dir) = test_app("ready_goodbye");
        let out = run("{\"cmd\":\"quit\"}\n{\"cmd\":\"factors\"}\n", &mut app);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0]["type"], "ready");
        assert_eq!(out[1]["type"], "goodbye");
        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn test_session_survives_bad_lines() {
        let (mut app, dir) = test_app("bad_lines");
        let out = run(
            "garbage\n\n{\"cmd\":\"calculate\",\"answers\":{}}\n",
            &mut app,
        );
        assert_eq!(out.len(), 3);
        assert_eq!(out[1]["type"], "error");
        assert_eq!(out[2]["type"], "footprint");
        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn test_calculate_diet_scenario() {
        let (mut app, dir) = test_app("calculate");
        let line = json!({
            "cmd": "calculate",
            "answers": {"diet": {
                "mealsWithMeat": "1", "plantBasedFrequency": "never", "hawkerVisits": "0",
                "bubbleTeaCups": "0", "foodDelivery": "0", "packagedSnacks": "never",
                "foodWaste": "usually_finish"
            }}
        })
        .to_string();
        let resp = respond(&line, &mut app);
        assert_eq!(resp["type"], "footprint");
        assert_eq!(resp["success"], true);
        let total = resp["footprint"]["totalFootprint"].as_f64().unwrap();
        assert!((total - 0.82125).abs() < 1e-9);
        assert!(resp["footprint"]["breakdown"]["diet"].is_number());
        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn test_non_object_answers_is_error() {
        let (mut app, dir) = test_app("non_object");
        for line in [
            r#"{"cmd":"calculate","answers":[1,2]}"#,
            r#"{"cmd":"calculate","answers":"diet"}"#,
            r#"{"cmd":"calculate"}"#,
            r#"{"cmd":"calculate","answers":{"diet":7}}"#,
        ] {
            let resp = respond(line, &mut app);
            assert_eq!(resp["type"], "error", "{line}");
        }
        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn test_factors_match_engine_table() {
        let (mut app, dir) = test_app("factors");
        let resp = respond(r#"{"cmd":"factors"}"#, &mut app);
        assert_eq!(resp["type"], "factors");
        assert_eq!(
            resp["table"],
            serde_json::to_value(FactorTable::default()).unwrap()
        );
        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn test_save_and_history() {
        let (mut app, dir) = test_app("save_history");
        let save = json!({
            "cmd": "save",
            "user_id": "alice",
            "answers": {"diet": {"mealsWithMeat": 1}, "offsetting": {"treesPlanted": 2}}
        })
        .to_string();
        let saved = respond(&save, &mut app);
        assert_eq!(saved["type"], "saved");
        let record_id = saved["record_id"].as_str().unwrap().to_string();

        let history = respond(r#"{"cmd":"history","user_id":"alice"}"#, &mut app);
        assert_eq!(history["type"], "history");
        let records = history["records"].as_array().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["record_id"], record_id.as_str());
        assert_eq!(records[0]["answers"]["offsetting"]["treesPlanted"], 2);
        assert_eq!(records[0]["footprint"], saved["footprint"]);

        let empty = respond(r#"{"cmd":"history","user_id":"bob"}"#, &mut app);
        assert!(empty["records"].as_array().unwrap().is_empty());
        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn test_save_requires_identity() {
        let (mut app, dir) = test_app("save_identity");
        let resp = respond(r#"{"cmd":"save","answers":{}}"#, &mut app);
        assert_eq!(resp["type"], "error");
        let resp = respond(r#"{"cmd":"save","user_id":"  ","answers":{}}"#, &mut app);
        assert_eq!(resp["type"], "error");
        assert!(!dir.exists());
    }

    #[test]
    fn test_requests_counted_in_ledger() {
        let (mut app, dir) = test_app("ledger");
        respond(r#"{"cmd":"calculate","answers":{}}"#, &mut app);
        respond(r#"{"cmd":"calculate","answers":{"diet":{}}}"#, &mut app);
        let ledger = app.world().resource::<footprint::FootprintLedger>();
        assert_eq!(ledger.requests_scored, 2);
        let _ = std::fs::remove_dir_all(dir);
    }
}
