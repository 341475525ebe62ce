//! Field Simulator
//!
//! Headless driver for a single field definition. Spawns the field on a
//! synthetic player, scripts a short fight, and prints what a renderer and
//! physics integrator would receive each tick.
//!
//! Run with: `cargo run --bin field_sim [definition.json] [ticks]`
//!
//! Without a path the bundled `fields/storm_shield.json` is used. Set
//! `RUST_LOG=debug` to see trigger activity.

use std::process::ExitCode;

use glam::Vec3;

use field_engine::{EngineContext, FieldDefinition, FieldInstance, PlayerId, PlayerSnapshot};

const BUILTIN_DEFINITION: &str = include_str!("../../fields/storm_shield.json");
const DEFAULT_TICKS: u64 = 40;
const PROBE_DISTANCES: [f32; 4] = [0.5, 3.0, 6.0, 12.0];

/// Damage taken on these ticks.
const HITS: [(u64, f32); 2] = [(5, 6.0), (18, 3.0)];
/// The player strikes back on this tick.
const COUNTER_ATTACK: u64 = 12;

fn load_definition(path: Option<&str>) -> Result<FieldDefinition, field_engine::ConfigError> {
    match path {
        Some(path) => FieldDefinition::load(path),
        None => FieldDefinition::from_json_str(BUILTIN_DEFINITION),
    }
}

fn main() -> ExitCode {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let args: Vec<String> = std::env::args().skip(1).collect();
    let definition = match load_definition(args.first().map(String::as_str)) {
        Ok(definition) => definition,
        Err(e) => {
            eprintln!("failed to load field definition: {e}");
            return ExitCode::FAILURE;
        }
    };
    let ticks = match args.get(1).map(|raw| raw.parse::<u64>()) {
        Some(Ok(ticks)) => ticks,
        Some(Err(e)) => {
            eprintln!("invalid tick count: {e}");
            return ExitCode::FAILURE;
        }
        None => DEFAULT_TICKS,
    };

    println!("===========================================");
    println!("   Field Simulator: {}", definition.id);
    println!("===========================================");
    match &definition.force {
        Some(force) => println!("force: {} (effective radius {:.1})", force.kind().id(), force.effective_radius()),
        None => println!("force: none"),
    }
    println!("bindings: {}", definition.bindings.len());
    println!("triggers: {}", definition.triggers.len());
    println!();

    let ctx = EngineContext::new();
    let owner = PlayerId(1);
    let rival = PlayerId(2);
    let mut player = PlayerSnapshot::new(owner);
    let mut field = FieldInstance::spawn_seeded(&ctx, definition, owner, Vec3::ZERO, 0x5eed);

    for tick in 1..=ticks {
        ctx.tick();

        if let Some(&(_, amount)) = HITS.iter().find(|(at, _)| *at == tick) {
            player.health = (player.health - amount).max(0.0);
            ctx.on_damage_taken(owner, amount);
        }
        if tick == COUNTER_ATTACK {
            ctx.on_damage_dealt(owner, rival, 4.0);
        }

        let frame = field.tick(&ctx, &player);
        let properties: Vec<String> = frame
            .properties
            .iter()
            .map(|(name, value)| format!("{name}={value:.3}"))
            .collect();
        print!(
            "[{:>4}] alpha={:.2} scale={:.2} {}",
            frame.age,
            frame.alpha,
            frame.scale,
            properties.join(" ")
        );
        if let Some(color) = &frame.flash_color {
            print!(" flash={color}@{:.2}", frame.flash_intensity);
        }
        if frame.shake_offset != Vec3::ZERO {
            print!(" shake={:.3}", frame.shake_offset.length());
        }
        println!();

        if frame.expired {
            println!("field expired");
            break;
        }
    }

    if field.definition().force.is_some() {
        println!();
        println!("force on probe at age {}:", field.age());
        for distance in PROBE_DISTANCES {
            let force = field.force_on(None, Vec3::new(distance, 0.0, 0.0));
            println!(
                "  d={distance:>5.1} strength={:.4} force=({:+.4}, {:+.4}, {:+.4})",
                field.strength_at(distance),
                force.x,
                force.y,
                force.z
            );
        }
    }

    field.despawn(&ctx);
    ExitCode::SUCCESS
}
