use ssp_meteo::region::Region;

/// Print the region catalog, one line per region.
pub fn run_regions() -> anyhow::Result<()> {
    let regions = Region::catalog();
    println!("{:<26} {:>8} {:>9}", "REGION", "LAT", "LON");
    for region in &regions {
        println!(
            "{:<26} {:>8.2} {:>9.2}",
            region.name, region.latitude, region.longitude
        );
    }
    Ok(())
}
