//! Reference binary: signs the text given on the command line against a
//! headless renderer and logs the captions it produced.

use std::path::Path;

use handsign::asset::FileAssetSource;
use handsign::dictionary::builtin;
use handsign::engine::SignEngine;
use handsign::options::Options;
use handsign::render::HeadlessRenderer;
use handsign::runner;

/// Options file consulted next to the working directory, if present.
const OPTIONS_PATH: &str = "handsign.toml";

fn main() {
    env_logger::init();

    let text: String = std::env::args()
        .skip(1)
        .collect::<Vec<_>>()
        .join(" ");
    if text.is_empty() {
        log::error!("usage: handsign <text to sign>");
        std::process::exit(2);
    }

    let options_path = Path::new(OPTIONS_PATH);
    let options = if options_path.exists() {
        match Options::load(options_path) {
            Ok(opts) => opts,
            Err(e) => {
                log::error!("failed to load {OPTIONS_PATH}: {e}");
                std::process::exit(1);
            }
        }
    } else {
        Options::default()
    };
    log::info!(
        "avatar {}, speed {}, pause {}ms",
        options.avatar.label(),
        options.playback.speed,
        options.playback.pause_ms
    );

    let mut engine = match SignEngine::new(
        options,
        Box::new(builtin::dictionary()),
        Box::new(HeadlessRenderer::new()),
        Box::new(FileAssetSource),
    ) {
        Ok(engine) => engine,
        Err(e) => {
            log::error!("failed to start engine: {e}");
            std::process::exit(1);
        }
    };

    if !runner::run_until_loaded(&mut engine, runner::DEFAULT_FPS) {
        log::error!("avatar failed to load; nothing to animate");
        std::process::exit(1);
    }

    engine.animate(&text);
    log::info!("signing {:?}", engine.caption());
    runner::run_until_idle(&mut engine, runner::DEFAULT_FPS);

    let spelled: String = engine.drain_captions().concat();
    log::info!("finished: {:?}", spelled.trim_end());
}
