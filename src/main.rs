use clap::Parser;
use eframe::egui;

use painter::app::PainterApp;
use painter::cli::CliArgs;
use painter::components::toolbar::TOOLBAR_WIDTH;
use painter::{log_err, log_info, logger};

fn main() -> Result<(), eframe::Error> {
    let args = CliArgs::parse();
    let settings = args.resolve_settings();

    if args.print_config {
        print!("{}", settings.to_config_string());
        return Ok(());
    }

    logger::set_echo(args.verbose);
    logger::init();

    let username = std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| "friend".to_string());
    println!("~~=== Welcome to Painter, {}! ===~~", username);
    log_info!("Session for {}", username);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(settings.window_size(TOOLBAR_WIDTH))
            .with_resizable(false)
            .with_title("Painter!"),
        ..Default::default()
    };

    let result = eframe::run_native(
        "Painter",
        options,
        Box::new(move |cc| Box::new(PainterApp::new(cc, &settings))),
    );
    if let Err(e) = &result {
        log_err!("Window closed with error: {}", e);
    }
    println!("All done, goodbye!");
    result
}
