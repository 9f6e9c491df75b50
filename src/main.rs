use bevy::prelude::*;

use sky_cat::{GameConfig, GamePlugin};

const CONFIG_LAYERS: [&str; 2] = ["assets/config/game.ron", "assets/config/game.local.ron"];

fn main() {
    // Layered load: defaults <- game.ron <- game.local.ron (absent layers skipped).
    let layers: Vec<&str> = CONFIG_LAYERS
        .iter()
        .copied()
        .filter(|p| std::path::Path::new(p).exists())
        .collect();
    let (cfg, used, errors) = GameConfig::load_layered(layers);
    let warnings = cfg.validate();

    let mut app = App::new();
    app.insert_resource(cfg.clone())
        .add_plugins(
            DefaultPlugins.set(WindowPlugin {
                primary_window: Some(Window {
                    title: cfg.window.title.clone(),
                    resolution: (cfg.window.width, cfg.window.height).into(),
                    resizable: true,
                    ..default()
                }),
                ..default()
            }),
        )
        .add_plugins(GamePlugin);

    // The log subscriber exists once DefaultPlugins is registered.
    for path in used {
        info!(target: "config", "loaded config layer {path}");
    }
    for err in errors {
        warn!(target: "config", "{err}");
    }
    for w in warnings {
        warn!(target: "config", "validation: {w}");
    }

    app.run();
}
