//! Ghost Replay - headless playback of a recorded run
//!
//! Usage: ghost-replay [replay.json] [config.json]
//! Without a replay file a synthetic lap is played.

use std::f32::consts::TAU;

use ghost_replay::consts::DEFAULT_MAX_ENGINE_SPEED;
use ghost_replay::ghost::{
    Frame, GhostVisuals, KartAnimation, PhysicsInfo, ReplayEvents, Transform,
};
use ghost_replay::{GhostConfig, GhostError, GhostReplay};
use glam::{Quat, Vec3};

/// Logs effect triggers instead of drawing them
#[derive(Debug, Default)]
struct LogVisuals {
    zipper_fires: u32,
    wheel_distance: f32,
    last_nitro: f32,
}

impl GhostVisuals for LogVisuals {
    fn update_nitro(&mut self, intensity: f32) {
        if (intensity > 0.0) != (self.last_nitro > 0.0) {
            log::debug!("Nitro {} ({:.2})", if intensity > 0.0 { "on" } else { "off" }, intensity);
        }
        self.last_nitro = intensity;
    }

    fn show_zipper_fire(&mut self) {
        self.zipper_fires += 1;
    }

    fn animate(&mut self, animation: &KartAnimation) {
        self.wheel_distance += animation.distance;
    }

    fn set_visible(&mut self, visible: bool) {
        log::info!("Ghost {}", if visible { "shown" } else { "hidden" });
    }
}

/// A 10 second lap around a circle, nitro in the second half, one speed pad
fn demo_lap() -> GhostReplay {
    const RECORD_HZ: f32 = 20.0;
    const LAP_TIME: f32 = 10.0;
    const RADIUS: f32 = 40.0;

    let mut replay = GhostReplay::new("demo");
    let samples = (LAP_TIME * RECORD_HZ) as usize;
    for i in 0..=samples {
        let time = i as f32 / RECORD_HZ;
        let theta = TAU * time / LAP_TIME;
        let position = Vec3::new(RADIUS * theta.sin(), 0.0, RADIUS * theta.cos());
        // Heading is tangent to the circle
        let rotation = Quat::from_rotation_y(theta + std::f32::consts::FRAC_PI_2);
        let on_nitro = time >= LAP_TIME * 0.5;
        let speed = if on_nitro {
            DEFAULT_MAX_ENGINE_SPEED * 1.2
        } else {
            TAU * RADIUS / LAP_TIME
        };

        replay.frames.push(Frame {
            time,
            transform: Transform::new(position, rotation),
            physics: PhysicsInfo {
                speed,
                steer: 0.15,
                suspension_length: [0.22, 0.22, 0.25, 0.25],
            },
            events: ReplayEvents {
                on_nitro,
                on_zipper: (2.0..2.2).contains(&time),
            },
        });
    }
    replay
}

fn run() -> Result<(), GhostError> {
    let args: Vec<String> = std::env::args().collect();

    let config = match args.get(2) {
        Some(path) => GhostConfig::load(path)?,
        None => GhostConfig::default(),
    };
    let replay = match args.get(1) {
        Some(path) => GhostReplay::load(path)?,
        None => {
            log::info!("No replay given, using synthetic lap");
            demo_lap()
        }
    };

    let duration = replay.duration();
    let dt = config.sim_dt;
    let mut kart = replay.into_kart(LogVisuals::default(), config)?;
    log::info!(
        "Replaying {} frames ({:.2}s) at {:.0} Hz",
        kart.frame_count(),
        duration,
        1.0 / dt
    );

    let mut ticks: u64 = 0;
    while !kart.is_at_end() {
        if ticks % 120 == 0 {
            let pos = kart.transform().translation;
            log::info!(
                "t={:.2}s pos=({:.1}, {:.1}, {:.1}) speed={:.1} nitro={:.2}",
                ticks as f32 * dt,
                pos.x,
                pos.y,
                pos.z,
                kart.speed(),
                kart.nitro_intensity()
            );
        }
        kart.update(dt);
        ticks += 1;
    }

    log::info!(
        "Replay finished after {} ticks, {} zipper fires, {:.1}m of wheel travel",
        ticks,
        kart.visuals().zipper_fires,
        kart.visuals().wheel_distance
    );

    kart.reset();
    let start = kart.visual_transform().translation;
    let front = kart.front_point_world();
    println!(
        "Start pose: ({:.2}, {:.2}, {:.2}), front point ({:.2}, {:.2}, {:.2})",
        start.x, start.y, start.z, front.x, front.y, front.z
    );
    Ok(())
}

fn main() {
    env_logger::init();
    log::info!("Ghost Replay starting...");

    if let Err(e) = run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
