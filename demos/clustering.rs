//! DBSCAN on a whitespace-delimited point file, or on a built-in 2D dataset.
//!
//! ```text
//! cargo run --example clustering -- points.txt 0.3 10
//! RUST_LOG=densa=debug cargo run --example clustering
//! ```

use std::fs::File;
use std::io::{self, BufReader};

use densa::cluster::{Dbscan, Euclidean, NeighborIndex, PointSet};
use densa::io::{read_points, write_labels};
use tracing_subscriber::EnvFilter;

fn main() -> densa::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (data, eps, min_pts) = match args.as_slice() {
        [path, eps, min_pts] => {
            let (Ok(eps), Ok(min_pts)) = (eps.parse::<f64>(), min_pts.parse::<usize>()) else {
                usage();
            };
            let data = read_points(BufReader::new(File::open(path)?))?;
            (data, eps, min_pts)
        }
        [] => (builtin(), 1.0, 2),
        _ => usage(),
    };

    let index = NeighborIndex::build(&data, &Euclidean)?;
    let mut points = PointSet::new(data);
    let k = Dbscan::new(eps, min_pts).fit(&mut points, &index)?;

    let noise = points.labels().iter().filter(|l| l.is_noise()).count();
    eprintln!("=== DBSCAN (eps={eps}, min_pts={min_pts}): {k} clusters, {noise} noise ===");
    write_labels(io::stdout().lock(), &points)
}

fn usage() -> ! {
    eprintln!("usage: clustering [<points-file> <eps: float> <min_pts: integer>]");
    std::process::exit(2)
}

fn builtin() -> Vec<Vec<f64>> {
    vec![
        // Cluster A (near origin)
        vec![0.0, 0.0],
        vec![0.1, 0.2],
        vec![0.2, 0.1],
        vec![-0.1, 0.1],
        // Cluster B (near (5, 5))
        vec![5.0, 5.0],
        vec![5.1, 4.9],
        vec![4.9, 5.1],
        vec![5.2, 5.2],
        // Cluster C (near (10, 0))
        vec![10.0, 0.0],
        vec![10.1, 0.1],
        vec![9.9, -0.1],
        vec![10.2, 0.2],
        // Outlier
        vec![20.0, 20.0],
    ]
}
