//! `carbon_survey`: serve the footprint engine over newline-delimited JSON.
//!
//! ```text
//! carbon_survey [--factor-table <path>] [--records <dir>] [--factors]
//! ```

mod agent_mode;
mod config;

use bevy::log::LogPlugin;
use bevy::prelude::*;

use footprint::{FactorTable, FootprintPlugin};
use save::RecordStore;

use crate::config::AppConfig;

/// Headless app: engine plugin, the loaded factor table and the record store.
#[cfg(test)]
pub fn build_app(config: &AppConfig, table: FactorTable) -> App {
    setup_app(App::new(), config, table)
}

fn setup_app(mut app: App, config: &AppConfig, table: FactorTable) -> App {
    app.add_plugins(MinimalPlugins);
    // Inserted before the plugin so `init_resource` keeps it.
    app.insert_resource(table);
    app.insert_resource(RecordStore::new(config.records_dir.clone()));
    app.insert_resource(agent_mode::NextRequestId::default());
    app.add_plugins(FootprintPlugin);
    app.update();
    app
}

fn main() -> std::process::ExitCode {
    // Logging comes up first so config errors are reported through it.
    let mut app = App::new();
    app.add_plugins(LogPlugin::default());

    let config = match AppConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            error!("{e}");
            return std::process::ExitCode::from(2);
        }
    };
    let table = match config.load_factor_table() {
        Ok(t) => t,
        Err(e) => {
            error!("{e}");
            return std::process::ExitCode::FAILURE;
        }
    };
    info!(
        "factor table v{} ({}), records in {}",
        table.version,
        config
            .factor_table
            .as_ref()
            .map_or("built-in".to_string(), |p| p.display().to_string()),
        config.records_dir.display()
    );

    if config.print_factors {
        return match serde_json::to_string_pretty(&table) {
            Ok(json) => {
                println!("{json}");
                std::process::ExitCode::SUCCESS
            }
            Err(e) => {
                error!("cannot serialize factor table: {e}");
                std::process::ExitCode::FAILURE
            }
        };
    }

    let mut app = setup_app(app, &config, table);
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    match agent_mode::run_session(stdin.lock(), stdout.lock(), &mut app) {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(e) => {
            error!("session ended with I/O error: {e}");
            std::process::ExitCode::FAILURE
        }
    }
}
