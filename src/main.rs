mod app;
mod models;
mod mvu;
mod ui;

fn main() -> eframe::Result<()> {
    app::run()
}
