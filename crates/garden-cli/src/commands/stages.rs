use anyhow::Result;

use garden_core::stage::DepthStages;

pub fn run(progress: f64) -> Result<()> {
    let stages = DepthStages::from_progress(progress);
    println!("{}", stages.to_json()?);
    Ok(())
}
