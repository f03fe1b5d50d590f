//! Headless `--agent` mode: a blocking synchronous loop that reads JSON
//! commands from stdin and writes JSON responses to stdout.
//!
//! No window or UI plugin is created; the worksheet runs on `MinimalPlugins`
//! and every command advances it by one or more frames.
//!
//! ## Protocol
//!
//! Each line of stdin is a JSON object with a `"cmd"` discriminator.
//! Each line of stdout is a JSON response with `"protocol_version"` and
//! `"type"` fields. See [`worksheet::agent_protocol`] for the full schema.

use std::io::{BufRead, Write};

use bevy::prelude::*;

use worksheet::agent_protocol::{
    make_response, AgentCommand, AgentResponse, ResponsePayload, PROTOCOL_VERSION,
};
use worksheet::session::WorksheetSession;
use worksheet::summary::SummaryState;
use worksheet::worksheet_actions::{
    ActionQueue, ActionResult, ActionResultLog, ActionSource, WorksheetAction,
};

pub fn run_agent_mode() {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.add_plugins(worksheet::WorksheetPlugin);

    // Initial update so derived values exist before the first observation.
    app.update();

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut stdout = stdout.lock();

    write_response(&mut stdout, &make_response(ResponsePayload::Ready));

    // Diagnostics go to stderr so stdout stays pure JSON.
    eprintln!("technosphere agent mode v{PROTOCOL_VERSION} ready, waiting for commands on stdin");

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("stdin read error: {e}");
                break;
            }
        };

        if line.trim().is_empty() {
            continue;
        }

        let cmd: AgentCommand = match serde_json::from_str(&line) {
            Ok(c) => c,
            Err(e) => {
                let resp = make_response(ResponsePayload::Error {
                    message: format!("Parse error: {e}"),
                });
                write_response(&mut stdout, &resp);
                continue;
            }
        };

        let response = process_command(cmd, &mut app);
        let is_goodbye = matches!(response.payload, ResponsePayload::Goodbye);

        write_response(&mut stdout, &response);

        if is_goodbye {
            break;
        }
    }

    eprintln!("technosphere agent mode shutting down");
}

fn write_response(out: &mut impl Write, response: &AgentResponse) {
    match serde_json::to_string(response) {
        Ok(json) => {
            if let Err(e) = writeln!(out, "{json}").and_then(|()| out.flush()) {
                eprintln!("stdout write error: {e}");
            }
        }
        Err(e) => eprintln!("failed to serialize response: {e}"),
    }
}

// ---------------------------------------------------------------------------
// Command dispatch
// ---------------------------------------------------------------------------

fn process_command(cmd: AgentCommand, app: &mut App) -> AgentResponse {
    match cmd {
        AgentCommand::Observe => {
            let observation = app
                .world()
                .get_resource::<WorksheetSession>()
                .map(WorksheetSession::snapshot)
                .unwrap_or_default();
            make_response(ResponsePayload::Observation { observation })
        }

        AgentCommand::Act { action } => {
            let result = run_action(app, action);
            make_response(ResponsePayload::ActionResult { result })
        }

        AgentCommand::BatchAct { actions } => {
            let results = actions
                .into_iter()
                .map(|action| run_action(app, action))
                .collect();
            make_response(ResponsePayload::BatchResult { results })
        }

        AgentCommand::Summary => {
            if let ActionResult::Error(err) = run_action(app, WorksheetAction::ConfirmResults) {
                return make_response(ResponsePayload::Error {
                    message: err.to_string(),
                });
            }
            match app
                .world()
                .get_resource::<SummaryState>()
                .and_then(|state| state.latest.clone())
            {
                Some(summary) => make_response(ResponsePayload::Summary {
                    summary: Box::new(summary),
                }),
                None => make_response(ResponsePayload::Error {
                    message: "summary was not produced".to_string(),
                }),
            }
        }

        AgentCommand::Quit => make_response(ResponsePayload::Goodbye),
    }
}

/// Queues one action, runs a frame so the executor handles it, and returns
/// the logged outcome.
fn run_action(app: &mut App, action: WorksheetAction) -> ActionResult {
    app.world_mut()
        .resource_mut::<ActionQueue>()
        .push(ActionSource::Agent, action);

    app.update();

    app.world()
        .get_resource::<ActionResultLog>()
        .and_then(|log| log.last().map(|entry| entry.result.clone()))
        .unwrap_or(ActionResult::Success)
}
