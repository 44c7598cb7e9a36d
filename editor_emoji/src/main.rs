mod app;
mod filemanager;

use app::EmojiEditor;
use eframe::egui;

fn main() -> Result<(), eframe::Error> {
    lib_emoji::init_logging();

    let app = EmojiEditor::new();
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([740.0, 560.0]),
        ..Default::default()
    };

    eframe::run_native(
        "16x16 Emoji Editor",
        native_options,
        Box::new(|_cc| Ok(Box::new(app))),
    )?;

    Ok(())
}
