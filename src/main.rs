use std::path::Path;
use std::process::ExitCode;

use tinyrast::prelude::*;

const DEFAULT_SCENE: &str = "scene.ron";

fn run() -> tinyrast::Result<()> {
    let scene = match std::env::args_os().nth(1) {
        Some(path) => Scene::load(path)?,
        None if Path::new(DEFAULT_SCENE).exists() => Scene::load(DEFAULT_SCENE)?,
        None => {
            log::info!("no {DEFAULT_SCENE}, using defaults");
            Scene::default()
        }
    };

    let model = scene.load_model()?;
    log::info!(
        "loaded {} ({} faces)",
        scene.model_path.display(),
        model.face_count()
    );

    let renderer = Renderer::new(scene.render.clone())?;
    let frame = renderer.render(&model)?;
    frame.save(&scene.output_path)?;
    log::info!(
        "{} faces drawn, {} culled, saved to {}",
        frame.stats.faces_drawn,
        frame.stats.faces_culled,
        scene.output_path.display()
    );
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
