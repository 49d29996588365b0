use anyhow::Result;

pub fn execute() -> Result<()> {
    println!("comfort-monitor version {}", env!("CARGO_PKG_VERSION"));
    Ok(())
}
