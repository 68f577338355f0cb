//! Renju GUI
//!
//! Two players at one board, with Black's forbidden points enforced.
//! An optional first argument sets the board size (5 to 19).

use renju::ui::{GameState, RenjuApp};

fn main() -> eframe::Result {
    env_logger::init();

    let state = match std::env::args().nth(1) {
        None => GameState::new(),
        Some(arg) => match arg.parse::<usize>() {
            Ok(size) => GameState::with_size(size).unwrap_or_else(|e| {
                log::warn!("{}, using {}", e, renju::BOARD_SIZE);
                GameState::new()
            }),
            Err(_) => {
                log::warn!("board size {:?} is not a number, using {}", arg, renju::BOARD_SIZE);
                GameState::new()
            }
        },
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 750.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Renju"),
        ..Default::default()
    };

    eframe::run_native(
        "Renju",
        options,
        Box::new(|cc| Ok(Box::new(RenjuApp::new(cc, state)))),
    )
}
