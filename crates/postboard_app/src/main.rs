mod app;
mod effects;
mod logging;
mod render;
mod ui;

fn main() {
    logging::initialize(logging::LogDestination::File);
    app::run();
}
