//! Card Hand Simulator.
//!
//! Spielt eine feste Zeiger-Sequenz (Hover, Umsortieren, Benutzen,
//! abgelehntes Benutzen) mit 60 Hz gegen die Kartenhand ab und loggt
//! alle Ereignisse.

use anyhow::Context;
use card_hand::{
    build_hand_scene, Card, CardId, HandController, HandOptions, PointerInput, ViewCamera,
};
use glam::{Vec2, Vec3};
use std::path::PathBuf;

/// Kosten der Start-Karten (IDs 1..).
const CARD_COSTS: [u32; 5] = [1, 2, 3, 1, 4];
const FRAME_DT: f32 = 1.0 / 60.0;

fn main() -> anyhow::Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Card Hand Simulator v{} startet...", env!("CARGO_PKG_VERSION"));

    let config_path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(HandOptions::config_path);
    let options = HandOptions::load_from_file(&config_path);

    let camera =
        ViewCamera::orthographic(Vec3::new(0.0, 0.0, -10.0), 2.25, Vec2::new(1600.0, 900.0));
    let cards = CARD_COSTS
        .iter()
        .enumerate()
        .map(|(i, &cost)| Card::new(CardId(i as u64 + 1), cost));
    let mut controller = HandController::new(options, cards);

    let script = demo_script(&controller);
    let mut runner = ScriptRunner::new(&camera);
    runner.run(&mut controller, &script)?;

    let scene = build_hand_scene(&controller);
    log::info!(
        "Fertig nach {:.2}s: Reihenfolge {:?}, Mana {}, {} Ereignisse",
        runner.time,
        scene.order(),
        scene.mana,
        controller.event_log().len()
    );
    Ok(())
}

/// Ein Wegpunkt der Zeiger-Sequenz.
#[derive(Debug, Clone, Copy)]
struct Waypoint {
    /// Zielpunkt in Welt-Koordinaten
    world: Vec3,
    button_held: bool,
    /// Dauer der linearen Bewegung dorthin
    seconds: f32,
}

impl Waypoint {
    fn new(world: Vec3, button_held: bool, seconds: f32) -> Self {
        Self {
            world,
            button_held,
            seconds,
        }
    }
}

/// Hover, Umsortieren, Benutzen und abgelehntes Benutzen.
fn demo_script(controller: &HandController) -> Vec<Waypoint> {
    let slot = |index: usize, count: usize| {
        controller
            .layout()
            .sample(index, count, None, true)
            .position
    };
    let outside = Vec3::new(0.0, 1.3, 0.0);
    let count = controller.hand().len();

    let mut script = vec![
        // Mittlere Karte hovern und ans rechte Ende ziehen
        Waypoint::new(slot(count / 2, count), false, 0.4),
        Waypoint::new(slot(count / 2, count), false, 0.2),
        Waypoint::new(slot(count / 2, count), true, 0.1),
        Waypoint::new(slot(count.saturating_sub(1), count), true, 0.6),
        Waypoint::new(slot(count.saturating_sub(1), count), false, 0.3),
        // Erste Karte herausziehen und benutzen
        Waypoint::new(slot(0, count), false, 0.4),
        Waypoint::new(slot(0, count), true, 0.1),
        Waypoint::new(outside, true, 0.5),
        Waypoint::new(outside, false, 0.1),
    ];

    // Letzte Karte herausziehen; bei zu wenig Mana kehrt sie zurück
    let remaining = count.saturating_sub(1);
    if remaining > 0 {
        let last = slot(remaining - 1, remaining);
        script.extend([
            Waypoint::new(last, false, 0.4),
            Waypoint::new(last, true, 0.1),
            Waypoint::new(outside - Vec3::X * 0.5, true, 0.5),
            Waypoint::new(outside - Vec3::X * 0.5, false, 0.1),
        ]);
    }

    // Auflösung ausklingen lassen
    script.push(Waypoint::new(Vec3::new(0.0, 2.0, 0.0), false, 1.0));
    script
}

/// Spielt Wegpunkte frame-weise ab.
struct ScriptRunner<'a> {
    camera: &'a ViewCamera,
    position: Vec3,
    time: f32,
}

impl<'a> ScriptRunner<'a> {
    fn new(camera: &'a ViewCamera) -> Self {
        Self {
            camera,
            position: Vec3::new(0.0, 2.0, 0.0),
            time: 0.0,
        }
    }

    fn run(&mut self, controller: &mut HandController, script: &[Waypoint]) -> anyhow::Result<()> {
        for waypoint in script {
            let start = self.position;
            let frames = (waypoint.seconds / FRAME_DT).ceil().max(1.0) as u32;
            for frame in 1..=frames {
                let world = start.lerp(waypoint.world, frame as f32 / frames as f32);
                let screen = self
                    .camera
                    .world_to_screen(world)
                    .with_context(|| format!("Zeigerpunkt {world} nicht auf dem Bildschirm"))?;

                self.time += FRAME_DT;
                let input = PointerInput::new(screen, waypoint.button_held);
                for event in controller.tick(FRAME_DT, input, self.camera) {
                    log::info!("[{:>5.2}s] {:?}", self.time, event);
                }
            }
            self.position = waypoint.world;
        }
        Ok(())
    }
}
