#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod platform;

fn main() -> eframe::Result<()> {
    platform::logging::initialize(platform::logging::LogDestination::File);
    platform::run_app()
}
