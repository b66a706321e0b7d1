//! Binary edge list format.
//!
//! ```text
//! i32 width | i32 height | i32 edge count | edge count * (i32 in_x, in_y, out_x, out_y)
//! ```
//!
//! Every undirected edge is stored once. Integers use the host's native byte order, so a file
//! is only portable between machines of the same endianness. There's no padding and no
//! version field, any change to the layout needs a new format.

use std::io::{self, Read, Write};

use byteorder::{ByteOrder, NativeEndian, WriteBytesExt};

use crate::{
    config::Limits,
    dims::Dims,
    error::{FormatError, PreconditionError, Result},
    gameboard::{Direction, Edge, Maze},
};

const HEADER_LEN: usize = 12;
const RECORD_LEN: usize = 16;

/// Writes the maze and returns how many edges were written.
pub fn encode<W: Write>(maze: &mut Maze, mut writer: W) -> Result<usize> {
    if !maze.is_initialized() {
        return Err(PreconditionError::Uninitialized.into());
    }

    maze.set_unvisited();
    let expected = maze.edge_count();
    maze.set_unvisited();
    let header_count =
        i32::try_from(expected).map_err(|_| PreconditionError::TooManyEdges(expected))?;

    writer.write_i32::<NativeEndian>(maze.width())?;
    writer.write_i32::<NativeEndian>(maze.height())?;
    writer.write_i32::<NativeEndian>(header_count)?;

    let mut written = 0;
    for pos in Dims::iter_fill(Dims::ZERO, maze.size()) {
        for dir in Direction::get_in_order() {
            let Some(edge) = maze.get_cell(pos).map(|c| *c.edge(dir)) else {
                continue;
            };
            let Some(to) = edge.to else {
                continue;
            };
            if !maze.mark_visited(pos, dir) {
                continue;
            }

            for value in [edge.from.0, edge.from.1, to.0, to.1] {
                writer.write_i32::<NativeEndian>(value)?;
            }
            written += 1;
        }
    }
    writer.flush()?;
    maze.set_unvisited();

    if written != expected {
        return Err(PreconditionError::InconsistentEdges { expected, written }.into());
    }

    log::debug!(
        "encoded {}x{} maze with {} edges",
        maze.width(),
        maze.height(),
        written
    );
    Ok(written)
}

/// Reads a maze, validating it completely before handing it out.
pub fn decode<R: Read>(mut reader: R, limits: &Limits) -> Result<Maze> {
    let mut header = [0u8; HEADER_LEN];
    let got = read_full(&mut reader, &mut header)?;
    if got < HEADER_LEN {
        return Err(FormatError::TruncatedHeader(got).into());
    }

    let mut fields = [0i32; 3];
    NativeEndian::read_i32_into(&header, &mut fields);
    let [width, height, expected] = fields;

    if !limits.contains(width) || !limits.contains(height) {
        return Err(FormatError::DimensionOutOfRange {
            width,
            height,
            min: limits.min_dim(),
            max: limits.max_dim(),
        }
        .into());
    }
    if expected < 0 {
        return Err(FormatError::NegativeEdgeCount(expected).into());
    }
    log::debug!("decoding {width}x{height} maze, expecting {expected} edges");

    let mut maze = Maze::new(width, height);
    maze.init();

    let mut count = 0usize;
    let mut record = [0u8; RECORD_LEN];
    loop {
        match read_full(&mut reader, &mut record)? {
            0 => break,
            RECORD_LEN => {}
            bytes => {
                return Err(FormatError::TruncatedRecord {
                    index: count,
                    bytes,
                }
                .into())
            }
        }

        let mut fields = [0i32; 4];
        NativeEndian::read_i32_into(&record, &mut fields);
        let [in_x, in_y, out_x, out_y] = fields;
        let (from, to) = (Dims(in_x, in_y), Dims(out_x, out_y));

        if !maze.valid_edge(&Edge::new(from, to)) {
            return Err(FormatError::InvalidEdge {
                index: count,
                from,
                to,
            }
            .into());
        }
        let Some(dir) = Direction::between(from, to) else {
            return Err(FormatError::NonAdjacentEdge {
                index: count,
                from,
                to,
            }
            .into());
        };
        if maze.has_passage(from, dir) {
            return Err(FormatError::DuplicateEdge {
                index: count,
                from,
                to,
            }
            .into());
        }

        maze.connect(from, dir);
        count += 1;
    }

    if count != expected as usize {
        return Err(FormatError::EdgeCountMismatch {
            expected,
            actual: count,
        }
        .into());
    }

    Ok(maze)
}

/// Like `read_exact`, but reports how much was read when the stream ends early.
fn read_full<R: Read>(reader: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::{rng_from_seed, Algorithm};
    use crate::error::MazeError;

    fn raw(header: [i32; 3], records: &[[i32; 4]]) -> Vec<u8> {
        let mut buf = Vec::new();
        for value in header.iter().chain(records.iter().flatten()) {
            buf.write_i32::<NativeEndian>(*value).unwrap();
        }
        buf
    }

    fn format_error(bytes: &[u8]) -> FormatError {
        match decode(bytes, &Limits::default()) {
            Err(MazeError::Format(err)) => err,
            other => panic!("expected format error, got {other:?}"),
        }
    }

    fn generated(algo: Algorithm, width: i32, height: i32, seed: u64) -> Maze {
        let mut maze = Maze::new(width, height);
        algo.generator().generate(&mut maze, &mut rng_from_seed(seed));
        maze
    }

    #[test]
    fn roundtrip_keeps_every_edge() {
        for algo in Algorithm::ALL {
            let mut maze = generated(algo, 13, 8, 21);
            let mut buf = Vec::new();
            let written = encode(&mut maze, &mut buf).unwrap();

            assert_eq!(written, 13 * 8 - 1);
            assert_eq!(buf.len(), HEADER_LEN + RECORD_LEN * written);

            let mut decoded = decode(buf.as_slice(), &Limits::default()).unwrap();
            assert!(decoded.is_initialized());
            assert!(decoded.is_mirrored());
            assert_eq!(decoded.size(), maze.size());
            assert_eq!(decoded.undirected_edges(), maze.undirected_edges());
        }
    }

    #[test]
    fn uninitialized_maze_is_not_written() {
        let mut buf = Vec::new();
        let err = encode(&mut Maze::new(3, 3), &mut buf).unwrap_err();
        assert!(matches!(
            err,
            MazeError::Precondition(PreconditionError::Uninitialized)
        ));
        assert!(buf.is_empty());
    }

    #[test]
    fn short_header() {
        assert_eq!(format_error(&[1, 2, 3]), FormatError::TruncatedHeader(3));
        assert_eq!(format_error(&[]), FormatError::TruncatedHeader(0));
    }

    #[test]
    fn dimensions_out_of_range() {
        assert!(matches!(
            format_error(&raw([1, 5, 0], &[])),
            FormatError::DimensionOutOfRange { width: 1, .. }
        ));
        assert!(matches!(
            format_error(&raw([5, 5001, 0], &[])),
            FormatError::DimensionOutOfRange { height: 5001, .. }
        ));
    }

    #[test]
    fn negative_edge_count() {
        assert_eq!(
            format_error(&raw([3, 3, -1], &[])),
            FormatError::NegativeEdgeCount(-1)
        );
    }

    #[test]
    fn fewer_records_than_promised() {
        let mut records = Vec::new();
        for y in 0..2 {
            for x in 0..4 {
                records.push([x, y, x + 1, y]);
            }
        }
        records.push([0, 0, 0, 1]);
        assert_eq!(records.len(), 9);

        assert_eq!(
            format_error(&raw([5, 5, 10], &records)),
            FormatError::EdgeCountMismatch {
                expected: 10,
                actual: 9
            }
        );
        assert!(decode(raw([5, 5, 9], &records).as_slice(), &Limits::default()).is_ok());
    }

    #[test]
    fn diagonal_record() {
        assert_eq!(
            format_error(&raw([5, 5, 1], &[[0, 0, 2, 2]])),
            FormatError::NonAdjacentEdge {
                index: 0,
                from: Dims(0, 0),
                to: Dims(2, 2)
            }
        );
    }

    #[test]
    fn record_outside_the_maze() {
        assert!(matches!(
            format_error(&raw([3, 3, 1], &[[2, 2, 3, 2]])),
            FormatError::InvalidEdge { index: 0, .. }
        ));
        assert!(matches!(
            format_error(&raw([3, 3, 1], &[[1, 1, 1, 1]])),
            FormatError::InvalidEdge { index: 0, .. }
        ));
    }

    #[test]
    fn repeated_record() {
        assert!(matches!(
            format_error(&raw([3, 3, 2], &[[0, 0, 1, 0], [1, 0, 0, 0]])),
            FormatError::DuplicateEdge { index: 1, .. }
        ));
    }

    #[test]
    fn partial_record() {
        let mut bytes = raw([3, 3, 1], &[[0, 0, 1, 0]]);
        bytes.truncate(bytes.len() - 5);
        assert_eq!(
            format_error(&bytes),
            FormatError::TruncatedRecord {
                index: 0,
                bytes: 11
            }
        );
    }

    #[test]
    fn header_uses_native_layout() {
        let mut maze = generated(Algorithm::Prim, 4, 3, 0);
        let mut buf = Vec::new();
        encode(&mut maze, &mut buf).unwrap();

        assert_eq!(&buf[0..4], &4i32.to_ne_bytes());
        assert_eq!(&buf[4..8], &3i32.to_ne_bytes());
        assert_eq!(&buf[8..12], &11i32.to_ne_bytes());
    }
}
