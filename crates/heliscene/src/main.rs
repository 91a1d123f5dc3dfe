//! Heliscene - a small day/night helicopter vignette, run headless.
//!
//! The binary is the host: it paces fixed-rate animation ticks, flips the
//! day/night mode on a configured cadence (standing in for the UI toggle),
//! and logs the scene state the way a renderer would consume it.

mod config;
mod flight;
mod mode;
mod panel;
mod rotor;
mod setup;
mod state;
mod tracking;
mod update;

use anyhow::{Context, Result};
use engine_core::Clock;
use scene::{Camera, Scene};

use config::HostConfig;
use mode::Mode;
use panel::{panel_visible, DebugPanel};
use state::Vignette;

fn main() -> Result<()> {
    env_logger::init();
    let config = HostConfig::load();

    let mut camera = Camera::default();
    camera.set_aspect(config.window_width, config.window_height);

    let mut panel = DebugPanel::new(config.window_width as f32);
    panel.visible = panel_visible(std::env::var("HELISCENE_DEBUG").ok().as_deref());
    if panel.visible {
        log::info!("debug panel revealed");
    }

    let mut scene = Scene::new(camera);
    let params = panel.snapshot();
    let rig = setup::build(&mut scene, &params).context("building the vignette scene")?;
    let mut vignette = Vignette {
        scene,
        rig,
        panel,
        mode: Mode::default(),
        flight: None,
    };
    mode::apply(
        &mut vignette.scene,
        &vignette.rig,
        vignette.mode,
        params.spot,
    );

    log::info!(
        "vignette mounted: {} instances, {} Hz, {:?} mode",
        vignette.scene.collect_instances().len(),
        config.tick_rate,
        vignette.mode
    );

    let mut clock = Clock::new(config.tick_rate);
    let mut next_toggle = config.toggle_seconds;
    let mut next_report = 1.0_f32;

    // The loop runs for the lifetime of the mounted scene; the host process
    // ending is the only teardown.
    loop {
        clock.tick();
        while clock.should_step() {
            update::frame(&mut vignette, clock.elapsed_seconds());
        }

        // Scripted stand-in for the UI day/night click.
        if clock.elapsed_seconds() >= next_toggle {
            next_toggle += config.toggle_seconds;
            vignette.mode = vignette.mode.toggle();
            let spot = vignette.panel.snapshot().spot;
            mode::apply(&mut vignette.scene, &vignette.rig, vignette.mode, spot);
            if vignette.mode.is_dark() {
                log::info!("night: searchlight rig active");
            } else {
                log::info!("day: ambient and sun restored");
            }
        }

        if clock.elapsed_seconds() >= next_report {
            next_report += 1.0;
            if let Some(body) = vignette.rig.body {
                if let Some(pos) = vignette.scene.world_position(body) {
                    let offset = vignette.flight.map(|f| f.x()).unwrap_or_default();
                    log::debug!(
                        "body at ({:.2}, {:.2}, {:.2}), flight offset {:.2}, {} instances",
                        pos.x,
                        pos.y,
                        pos.z,
                        offset,
                        vignette.scene.collect_instances().len()
                    );
                }
            }
        }

        std::thread::sleep(std::time::Duration::from_millis(2));
    }
}
