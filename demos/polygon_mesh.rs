//! Example: n-gon faces
//!
//! Faces with more than four corners are carried as [`Face::Polygon`]; the
//! corner lists pass through reading and writing without triangulation.

use libobj::{Face, Index, IndexGroup, Position, read, write};
use std::io::Cursor;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A pentagon and the triangle fan it would decompose into.
    let positions = vec![
        Position::new(0.0f32, 1.0, 0.0),
        Position::new(-0.95, 0.31, 0.0),
        Position::new(-0.59, -0.81, 0.0),
        Position::new(0.59, -0.81, 0.0),
        Position::new(0.95, 0.31, 0.0),
    ];
    let pentagon = Face::from_corners(
        (0..5).map(|i| IndexGroup::new(Index(i))).collect(),
    )?;

    let mut out = Vec::new();
    let written = write(&mut out, positions.iter().copied(), [pentagon.clone()])?;
    println!("wrote {written:?}");

    let text = String::from_utf8(out)?;
    print!("{text}");

    let mut read_positions = Vec::new();
    let mut read_faces = Vec::new();
    let result = read(
        Cursor::new(&text),
        |position: Position<f32>| read_positions.push(position),
        |face| read_faces.push(face),
    )?;
    println!("read {result:?}");

    assert!(matches!(read_faces[0], Face::Polygon(_)));
    assert_eq!(read_faces[0], pentagon);
    assert_eq!(read_faces[0].corner_count(), 5);

    Ok(())
}
