use clap::Parser;
use glam::IVec3;
use std::path::PathBuf;
use tatara::config::FurnaceConfig;
use tatara::entity::{Tuyere, TuyereTier};
use tatara::simulation::{BlastFurnace, MaterialId, Materials};
use tatara::world::{FurnacePersistence, FurnaceSave, ItemStack, SimWorld};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Ticks to simulate
    #[arg(long, default_value_t = 2400)]
    ticks: u64,

    /// Chimney levels above the furnace
    #[arg(long, default_value_t = 4)]
    chimney: i32,

    /// Charcoal units dropped into the intake
    #[arg(long, default_value_t = 16)]
    fuel: u32,

    /// Hematite units dropped into the intake
    #[arg(long, default_value_t = 8)]
    ore: u32,

    /// Flux dust units dropped into the intake
    #[arg(long, default_value_t = 8)]
    flux: u32,

    /// Air injected by the bellows every 100 ticks
    #[arg(long, default_value_t = 200)]
    bellows: i64,

    /// Optional RON config file with furnace tuning parameters
    #[arg(long)]
    config: Option<PathBuf>,

    /// Save the final furnace state under worlds/<name>
    #[arg(long)]
    save: Option<String>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => FurnaceConfig::load_or_default(path),
        None => FurnaceConfig::default(),
    };

    let materials = Materials::new();
    let mut world = SimWorld::new(args.chimney);
    let pos = IVec3::new(0, 64, 0);
    world.spawn_item(pos + IVec3::Y, ItemStack::new(MaterialId::CHARCOAL, args.fuel));
    world.spawn_item(pos + IVec3::Y * 2, ItemStack::new(MaterialId::HEMATITE, args.ore));
    world.spawn_item(pos + IVec3::Y * 2, ItemStack::new(MaterialId::FLUX_DUST, args.flux));

    let mut furnace = BlastFurnace::new(pos, config);
    furnace.install_tuyere(Tuyere::new(TuyereTier::Bronze));

    log::info!("starting blast furnace run: {} ticks", args.ticks);
    for tick in 0..args.ticks {
        furnace.tick(&mut world, &materials);
        if !furnace.is_lit() && furnace.is_ignitable(&world) {
            furnace.ignite(&mut world);
        }
        if furnace.is_lit() && tick % 100 == 0 {
            furnace.inject_air(args.bellows);
        }
        if tick % 200 == 0 {
            log::info!(
                "tick {}: {}° | fuel {} | ore {} | melt {}",
                tick,
                furnace.temperature(),
                furnace.fuel_count(),
                furnace.ore_count(),
                furnace.melt_amount()
            );
        }
    }

    let pig_iron = world.crucible.molten_units(MaterialId::PIG_IRON);
    println!(
        "after {} ticks: {} units of pig iron in the crucible, furnace {}",
        args.ticks,
        pig_iron,
        if furnace.is_lit() { "still lit" } else { "unlit" }
    );

    if let Some(world_name) = &args.save {
        let persistence = FurnacePersistence::new(world_name)?;
        let save = FurnaceSave {
            snapshot: furnace.save(),
            lit: furnace.is_lit(),
        };
        persistence.save("furnace", &save)?;
        log::info!("saved furnace state to world '{}'", world_name);
    }

    Ok(())
}
