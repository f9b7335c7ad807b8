//! CSV-style text format for point sets.
//!
//! Format, one point per line:
//!
//! ```text
//! <x>[,<key>=<value>[,<key>=<value>...]]
//! ```
//!
//! - `<x>` is the coordinate; saving uses Rust's round-trip `f64` display
//!   (the shortest decimal that reparses to the same bits), loading accepts
//!   anything `f64::from_str` does.
//! - Attribute tokens follow the coordinate as comma-separated `key=value`
//!   pairs. Their order on disk follows map iteration order and is not
//!   stable; a round trip preserves the *set* of attributes, not the order.
//! - Blank lines are skipped on load. A token without `=` is silently
//!   dropped.
//!
//! The write/read pair is generic over `Write`/`BufRead`;
//! [`save_csv`]/[`load_csv`] are the path-level wrappers.

use log::trace;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::core::{Point, PointSet};
use crate::error::{Error, Result};

/// Write a point set to a writer in CSV format.
pub fn write_csv<W: Write>(points: &PointSet, writer: &mut W) -> Result<()> {
    for p in points {
        write!(writer, "{}", p.x)?;
        for (k, v) in &p.attrs {
            write!(writer, ",{}={}", k, v)?;
        }
        writeln!(writer)?;
    }
    Ok(())
}

/// Read a point set from a reader in CSV format.
///
/// # Errors
///
/// [`Error::Io`] on read failure, [`Error::Parse`] if a line's coordinate
/// field is not a valid number.
pub fn read_csv<R: BufRead>(reader: R) -> Result<PointSet> {
    let mut out = PointSet::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.is_empty() {
            continue;
        }

        let mut fields = line.split(',');
        // First field is the coordinate; split always yields at least one.
        let x_field = fields.next().unwrap_or("");
        let x: f64 = x_field.trim().parse().map_err(|_| Error::Parse {
            line: idx + 1,
            value: x_field.to_string(),
        })?;

        let mut point = Point::new(x);
        for token in fields {
            match token.split_once('=') {
                Some((k, v)) => {
                    point.attrs.insert(k.to_string(), v.to_string());
                }
                None => {
                    trace!("read_csv: line {}: dropping token without '=': '{}'", idx + 1, token);
                }
            }
        }
        out.push(point);
    }
    Ok(out)
}

/// Save a point set to a CSV file.
///
/// # Errors
///
/// [`Error::Io`] if the file cannot be created or written.
pub fn save_csv<P: AsRef<Path>>(points: &PointSet, path: P) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_csv(points, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Load a point set from a CSV file.
///
/// # Errors
///
/// [`Error::Io`] if the file cannot be opened, [`Error::Parse`] on a
/// malformed coordinate.
///
/// # Example
/// ```no_run
/// use bindu::io::load_csv;
///
/// let points = load_csv("points.csv")?;
/// println!("loaded {} points", points.len());
/// # Ok::<(), bindu::Error>(())
/// ```
pub fn load_csv<P: AsRef<Path>>(path: P) -> Result<PointSet> {
    let file = File::open(path)?;
    read_csv(BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::io::Cursor;

    #[test]
    fn test_round_trip() {
        let points: PointSet = vec![
            Point::new(0.05).with_attr("label", "a"),
            Point::new(1.0),
            Point::new(-2.5).with_attr("label", "b").with_attr("t", "17"),
        ]
        .into();

        let mut buffer = Vec::new();
        write_csv(&points, &mut buffer).unwrap();

        let loaded = read_csv(Cursor::new(buffer)).unwrap();
        assert_eq!(loaded.len(), 3);
        assert_eq!(loaded.coordinates(), points.coordinates());
        assert_eq!(loaded.points[0].attr("label"), Some("a"));
        assert_eq!(loaded.points[2].attr("label"), Some("b"));
        assert_eq!(loaded.points[2].attr("t"), Some("17"));
    }

    #[test]
    fn test_round_trip_preserves_exact_coordinates() {
        // Round-trip display must reproduce the exact bits, including values
        // with no short decimal form.
        let xs = [0.1 + 0.2, 1.0 / 3.0, f64::MIN_POSITIVE, -9.87654321e17];
        let points = PointSet::from_coordinates(&xs);

        let mut buffer = Vec::new();
        write_csv(&points, &mut buffer).unwrap();
        let loaded = read_csv(Cursor::new(buffer)).unwrap();

        for (orig, back) in xs.iter().zip(loaded.coordinates()) {
            assert_eq!(orig.to_bits(), back.to_bits());
        }
    }

    #[test]
    fn test_attribute_set_preserved_regardless_of_order() {
        let p = Point::new(1.0)
            .with_attr("a", "1")
            .with_attr("b", "2")
            .with_attr("c", "3");
        let points = PointSet::from_points(&[p]);

        let mut buffer = Vec::new();
        write_csv(&points, &mut buffer).unwrap();
        let loaded = read_csv(Cursor::new(buffer)).unwrap();

        let keys: HashSet<_> = loaded.points[0].attrs.keys().cloned().collect();
        assert_eq!(keys, HashSet::from(["a".into(), "b".into(), "c".into()]));
    }

    #[test]
    fn test_blank_lines_skipped() {
        let input = "1.0\n\n2.0,label=x\n\n";
        let loaded = read_csv(Cursor::new(input)).unwrap();
        assert_eq!(loaded.coordinates(), vec![1.0, 2.0]);
    }

    #[test]
    fn test_token_without_equals_dropped() {
        let input = "3.5,label=ok,garbage,k=v\n";
        let loaded = read_csv(Cursor::new(input)).unwrap();
        assert_eq!(loaded.points[0].attrs.len(), 2);
        assert_eq!(loaded.points[0].attr("label"), Some("ok"));
        assert_eq!(loaded.points[0].attr("k"), Some("v"));
    }

    #[test]
    fn test_bad_coordinate_is_parse_error() {
        let input = "1.0\nnot-a-number,label=x\n";
        let err = read_csv(Cursor::new(input)).unwrap_err();
        match err {
            Error::Parse { line, value } => {
                assert_eq!(line, 2);
                assert_eq!(value, "not-a-number");
            }
            other => panic!("expected Parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_coordinate_only_lines() {
        let input = "42\n-1e-3\n";
        let loaded = read_csv(Cursor::new(input)).unwrap();
        assert_eq!(loaded.coordinates(), vec![42.0, -1e-3]);
        assert!(loaded.points.iter().all(|p| p.attrs.is_empty()));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_csv("/definitely/not/here.csv").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
