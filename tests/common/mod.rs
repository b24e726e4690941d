//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use finview::config::Config;
use finview::model::Record;
use finview::ui::app::{App, UiCommand};
use std::path::PathBuf;
use tempfile::TempDir;
use tokio::sync::mpsc;

pub fn record(date: &str, revenue: f64, net_income: f64) -> Record {
    Record {
        date: date.to_string(),
        revenue,
        net_income,
        gross_profit: revenue / 2.0,
        eps: net_income / 1_000.0,
        operating_income: net_income * 1.2,
    }
}

/// Five annual rows in server (newest first) order.
pub fn five_records() -> Vec<Record> {
    vec![
        record("2024-09-28", 391_035.0, 93_736.0),
        record("2023-09-30", 383_285.0, 96_995.0),
        record("2022-09-24", 394_328.0, 99_803.0),
        record("2021-09-25", 365_817.0, 94_680.0),
        record("2020-09-26", 274_515.0, 57_411.0),
    ]
}

pub fn records_json(records: &[Record]) -> String {
    serde_json::to_string(records).expect("records serialize")
}

/// Create a temporary config file with the given TOML body.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

// -- App helpers --------------------------------------------------------------

/// App wired to a command channel the test reads from.
pub fn make_app() -> (App, mpsc::Receiver<UiCommand>) {
    let (tx, rx) = mpsc::channel(64);
    let mut app = App::new(Config::default().backend.base_url);
    app.set_command_sender(tx);
    (app, rx)
}

/// Everything the app has sent to the fetch worker so far.
pub fn drain_commands(rx: &mut mpsc::Receiver<UiCommand>) -> Vec<UiCommand> {
    let mut commands = Vec::new();
    while let Ok(command) = rx.try_recv() {
        commands.push(command);
    }
    commands
}

/// App that has completed its initial load with `records`.
pub fn loaded_app(records: Vec<Record>) -> (App, mpsc::Receiver<UiCommand>) {
    let (mut app, mut rx) = make_app();
    app.start();
    let seq = app.browser().latest_seq;
    app.on_fetch_complete(seq, Ok(records));
    drain_commands(&mut rx);
    (app, rx)
}
