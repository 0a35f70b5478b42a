//! Reading points from text and writing labeled reports.
//!
//! Neither is needed for clustering itself; they cover the common case of
//! coordinates stored one point per line.

use std::io::{BufRead, Write};

use crate::cluster::PointSet;
use crate::error::{Error, Result};

/// Parse whitespace-delimited coordinates, one point per line.
///
/// Each non-blank line needs at least two finite numeric fields, and every line must
/// have the same number of fields as the first.
pub fn read_points<R: BufRead>(reader: R) -> Result<Vec<Vec<f64>>> {
    let mut points: Vec<Vec<f64>> = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = i + 1;
        if line.trim().is_empty() {
            continue;
        }

        let coords = line
            .split_whitespace()
            .map(|field| {
                let x = field.parse::<f64>().map_err(|e| Error::Parse {
                    line: line_no,
                    message: format!("{field:?}: {e}"),
                })?;
                if !x.is_finite() {
                    return Err(Error::Parse {
                        line: line_no,
                        message: format!("{field:?}: coordinate must be finite"),
                    });
                }
                Ok(x)
            })
            .collect::<Result<Vec<f64>>>()?;

        if coords.len() < 2 {
            return Err(Error::Parse {
                line: line_no,
                message: format!("expected at least 2 coordinates, found {}", coords.len()),
            });
        }
        if let Some(first) = points.first() {
            if first.len() != coords.len() {
                return Err(Error::DimensionMismatch {
                    expected: first.len(),
                    found: coords.len(),
                });
            }
        }
        points.push(coords);
    }
    tracing::debug!(n = points.len(), "read points");
    Ok(points)
}

/// Write one line per point: `id`, coordinates, then the label code, tab-separated.
///
/// Label codes are `0` for noise and the cluster id otherwise (`-1` if unclassified).
pub fn write_labels<W: Write>(mut writer: W, points: &PointSet) -> Result<()> {
    for (id, position, label) in points.iter() {
        write!(writer, "{id}")?;
        for x in position {
            write!(writer, "\t{x}")?;
        }
        writeln!(writer, "\t{}", label.code())?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cluster::{Dbscan, Euclidean, NeighborIndex};

    #[test]
    fn test_read_points() {
        let input = "0.0 0.0\n  1.5\t2.5 \n\n-3 4e-1\n";
        let points = read_points(input.as_bytes()).unwrap();
        assert_eq!(
            points,
            vec![vec![0.0, 0.0], vec![1.5, 2.5], vec![-3.0, 0.4]]
        );
    }

    #[test]
    fn test_read_points_rejects_bad_number() {
        let err = read_points("1 2\n3 x\n".as_bytes()).unwrap_err();
        assert!(matches!(err, Error::Parse { line: 2, .. }));
    }

    #[test]
    fn test_read_points_rejects_non_finite() {
        for input in ["0 0\nNaN 1\n0 0.1\n", "0 0\n1 inf\n", "0 0\n-inf 1\n"] {
            let err = read_points(input.as_bytes()).unwrap_err();
            assert!(matches!(err, Error::Parse { line: 2, .. }), "{input:?}: {err}");
        }
    }

    #[test]
    fn test_read_points_rejects_single_field() {
        let err = read_points("1\n".as_bytes()).unwrap_err();
        assert!(matches!(err, Error::Parse { line: 1, .. }));
    }

    #[test]
    fn test_read_points_rejects_ragged_rows() {
        let err = read_points("1 2\n1 2 3\n".as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            Error::DimensionMismatch {
                expected: 2,
                found: 3
            }
        ));
    }

    #[test]
    fn test_read_empty() {
        assert!(read_points("".as_bytes()).unwrap().is_empty());
    }

    #[test]
    fn test_write_labels() {
        let data = read_points("0 0\n0 1\n9 9\n".as_bytes()).unwrap();
        let index = NeighborIndex::build(&data, &Euclidean).unwrap();
        let mut points = PointSet::new(data);
        Dbscan::new(1.0, 2).fit(&mut points, &index).unwrap();

        let mut out = Vec::new();
        write_labels(&mut out, &points).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "0\t0\t0\t1\n1\t0\t1\t1\n2\t9\t9\t0\n");
    }
}
