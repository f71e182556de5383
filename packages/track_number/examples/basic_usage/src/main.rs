#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Basic usage example for `moosicbox_track_number`.
//!
//! This example demonstrates:
//! - Parsing side-prefixed, side-suffixed and bare numeric labels
//! - Inspecting why a label was rejected
//! - Resolving a track number from prioritized metadata fields
//! - Sorting an album in side-major order

use moosicbox_track_number::{
    Side, VinylPosition, parse_track_number,
    resolve::{TrackLabelField, resolve_track_number, sort_by_track_label},
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Set RUST_LOG=debug to see which metadata fields get rejected
    env_logger::init();

    println!("=== MoosicBox Track Number Basic Usage Example ===\n");

    println!("1. Parsing labels:");
    for label in ["A1", "b05", "2B", "15", "A1B", ""] {
        match parse_track_number(label) {
            Ok(number) => println!("   {label:>5?} -> {number}"),
            Err(e) => println!("   {label:>5?} -> {e} ({:?})", e.reason()),
        }
    }

    println!("\n2. Structured position:");
    let position: VinylPosition = "c07".parse()?;
    println!(
        "   \"c07\" -> side {:?}, position {}, canonical \"{position}\", track {}",
        position.side().map(Side::letter),
        position.position(),
        position.track_number()?,
    );

    println!("\n3. Resolving from metadata fields:");
    let fields = [
        TrackLabelField::new("VINYL_POSITION", None),
        TrackLabelField::new("TRACK_POSITION", Some("side two")),
        TrackLabelField::new("TRACKNUMBER", Some("3B")),
    ];
    println!("   -> {:?}", resolve_track_number(None, &fields));

    println!("\n4. Sorting an album:");
    let mut album = vec!["C1", "B2", "A2", "bonus", "B1", "A1", "C2"];
    sort_by_track_label(&mut album, |label| *label);
    println!("   {album:?}");

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
