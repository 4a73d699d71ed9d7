#![warn(non_snake_case)]
//! # dungeon-geometry
//!
//! Reads a generated dungeon layout (tile grid plus room anchors) as JSON and
//! writes the derived geometry: doors, room outlines, simplified outlines,
//! rectangularity and the tile legend.
//!
//! ```text
//! dungeon-geometry [INPUT] [OUTPUT]
//! ```
//!
//! `INPUT` defaults to stdin (also selected with `-`), `OUTPUT` to stdout.
//! Set `RUST_LOG=debug` for per-room tracing.

use dungeon_geometry::LayoutDocument;
use log::{error, info};
use std::error::Error;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};

fn run(input: Option<&str>, output: Option<&str>) -> Result<(), Box<dyn Error>> {
    let doc = match input {
        None | Some("-") => LayoutDocument::from_reader(io::stdin().lock())?,
        Some(path) => {
            info!("Reading layout from {}", path);
            LayoutDocument::from_reader(BufReader::new(File::open(path)?))?
        }
    };

    let result = match output {
        None | Some("-") => {
            let stdout = io::stdout();
            let mut writer = BufWriter::new(stdout.lock());
            let result = doc.write_output(&mut writer)?;
            writeln!(writer)?;
            writer.flush()?;
            result
        }
        Some(path) => {
            let mut writer = BufWriter::new(File::create(path)?);
            let result = doc.write_output(&mut writer)?;
            writer.flush()?;
            info!("Wrote geometry to {}", path);
            result
        }
    };

    info!(
        "{} doors, {} rooms ({} with an outline)",
        result.doors.len(),
        result.rooms.len(),
        result
            .rooms
            .iter()
            .filter(|r| r.shape_data.as_ref().is_some_and(|s| !s.outline.is_empty()))
            .count()
    );
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() > 2 {
        error!("usage: dungeon-geometry [INPUT] [OUTPUT]");
        return Err("too many arguments".into());
    }

    run(args.first().map(String::as_str), args.get(1).map(String::as_str)).map_err(|e| {
        error!("{}", e);
        e
    })
}
