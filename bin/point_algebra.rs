use std::path::PathBuf;

use apex_points::geometry::{point2, point3};
use apex_points::io::{read_points, write_points, PointRecord};
use apex_points::{init_logger, LiePoint, Point2, Point3, StereoPoint2, Testable};
use clap::Parser;
use nalgebra::{Matrix2, Matrix3};

#[derive(Parser)]
#[command(name = "point_algebra")]
#[command(about = "Exercise the flat point types and their Jacobians")]
struct Args {
    /// Number of random points per type
    #[arg(short, long, default_value = "4")]
    count: usize,

    /// Optional path to archive the generated points as text records
    #[arg(long)]
    save_output: Option<PathBuf>,
}

fn main() -> apex_points::ApexPointsResult<()> {
    init_logger();
    let args = Args::parse();

    let mut records = Vec::new();

    for _ in 0..args.count {
        let p = Point2::random();
        let q = Point2::random();
        let mut jac_p = Matrix2::zeros();
        let c = point2::compose(&p, &q, Some(&mut jac_p), None);
        c.print("composed: ");
        tracing::info!("between: {}", point2::between(&p, &q, None, None));
        records.push(PointRecord::from(c));
    }

    for _ in 0..args.count {
        let p = Point3::random();
        let q = Point3::random();
        let mut jac_q = Matrix3::zeros();
        let x = point3::cross(&p, &q, None, Some(&mut jac_q));
        tracing::info!(
            "cross: {} dot: {:.4} norm: {:.4}",
            x,
            point3::dot(&p, &q, None, None),
            point3::norm(&p, None)
        );
        records.push(PointRecord::from(x));
    }

    for _ in 0..args.count {
        let s = StereoPoint2::random();
        tracing::info!("stereo: {} left image point: {}", s, s.point2());
        records.push(PointRecord::from(s));
    }

    if let Some(path) = args.save_output {
        write_points(&records, &path)?;
        let loaded = read_points(&path)?;
        tracing::info!("Archived and re-read {} records", loaded.len());
    }

    Ok(())
}
