//! Demo: filter a noisy 1D point set, probe it for regular spacing, and
//! round-trip it through the CSV format.
//!
//! Usage:
//!   cargo run --example points_demo

use bindu::{
    filter_by_min_distance, has_regular_spacing, load_csv, save_csv, Point, PointSet,
    SpacingConfig,
};

fn main() -> bindu::Result<()> {
    env_logger::init();

    let points: PointSet = vec![
        Point::new(0.05).with_attr("label", "a"),
        Point::new(1.0),
        Point::new(2.01),
        Point::new(3.0),
        Point::new(3.02),
        Point::new(5.0),
        Point::new(5.01),
        Point::new(7.0),
        Point::new(9.0),
    ]
    .into();

    // Collapse anything closer than 0.05 to the previously kept point.
    let min_dist = 0.05;
    let filtered = filter_by_min_distance(&points, min_dist)?;

    print!("Filtered points (min_dist={}):", min_dist);
    for p in &filtered {
        print!(" {:.3}", p.x);
    }
    println!();

    // Probe for arithmetic runs of at least 3 points.
    let config = SpacingConfig::default().with_eps(1e-3);
    for spacing in [2.0, 4.0, 6.0] {
        let found = has_regular_spacing(&filtered, spacing, &config);
        println!(
            "Has regular spacing d={} among >=3 points? {}",
            spacing,
            if found { "YES" } else { "NO" }
        );
    }

    // Round-trip through the CSV format.
    let path = std::env::temp_dir().join("bindu_points.csv");
    save_csv(&filtered, &path)?;
    let reloaded = load_csv(&path)?;
    println!(
        "Saved and reloaded {} points via {}",
        reloaded.len(),
        path.display()
    );

    Ok(())
}
