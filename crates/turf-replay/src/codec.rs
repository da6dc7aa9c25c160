//! Binary encode/decode for the trajectory format.
//!
//! All integers are little-endian. No compression, no alignment padding,
//! no self-describing schema: frames are raw cell bytes sized by the
//! header's dimensions.

use std::io::{Read, Write};

use crate::error::ReplayError;
use crate::{RunDescriptor, FORMAT_VERSION, MAGIC};
use turf_core::CellState;
use turf_grid::Snapshot;

pub(crate) fn write_u16_le(w: &mut dyn Write, v: u16) -> Result<(), ReplayError> {
    w.write_all(&v.to_le_bytes())?;
    Ok(())
}

pub(crate) fn write_u32_le(w: &mut dyn Write, v: u32) -> Result<(), ReplayError> {
    w.write_all(&v.to_le_bytes())?;
    Ok(())
}

pub(crate) fn write_u64_le(w: &mut dyn Write, v: u64) -> Result<(), ReplayError> {
    w.write_all(&v.to_le_bytes())?;
    Ok(())
}

pub(crate) fn read_u16_le(r: &mut dyn Read) -> Result<u16, ReplayError> {
    let mut buf = [0u8; 2];
    r.read_exact(&mut buf)?;
    Ok(u16::from_le_bytes(buf))
}

pub(crate) fn read_u32_le(r: &mut dyn Read) -> Result<u32, ReplayError> {
    let mut buf = [0u8; 4];
    r.read_exact(&mut buf)?;
    Ok(u32::from_le_bytes(buf))
}

pub(crate) fn read_u64_le(r: &mut dyn Read) -> Result<u64, ReplayError> {
    let mut buf = [0u8; 8];
    r.read_exact(&mut buf)?;
    Ok(u64::from_le_bytes(buf))
}

/// Write magic, version, and the run descriptor.
pub(crate) fn encode_header(
    w: &mut dyn Write,
    descriptor: &RunDescriptor,
) -> Result<(), ReplayError> {
    w.write_all(&MAGIC)?;
    write_u16_le(w, FORMAT_VERSION)?;
    write_u64_le(w, descriptor.seed)?;
    write_u32_le(w, descriptor.rows)?;
    write_u32_le(w, descriptor.cols)?;
    write_u32_le(w, descriptor.frame_count)?;
    Ok(())
}

/// Read and validate magic and version, then the run descriptor.
pub(crate) fn decode_header(r: &mut dyn Read) -> Result<RunDescriptor, ReplayError> {
    let mut magic = [0u8; 4];
    r.read_exact(&mut magic)?;
    if magic != MAGIC {
        return Err(ReplayError::InvalidMagic);
    }
    let version = read_u16_le(r)?;
    if version != FORMAT_VERSION {
        return Err(ReplayError::UnsupportedVersion { found: version });
    }
    Ok(RunDescriptor {
        seed: read_u64_le(r)?,
        rows: read_u32_le(r)?,
        cols: read_u32_le(r)?,
        frame_count: read_u32_le(r)?,
    })
}

/// Write one frame as raw cell bytes.
pub(crate) fn encode_frame(w: &mut dyn Write, snapshot: &Snapshot) -> Result<(), ReplayError> {
    let bytes: Vec<u8> = snapshot.cells().iter().map(|s| s.as_u8()).collect();
    w.write_all(&bytes)?;
    Ok(())
}

/// Read one frame sized by `descriptor`, validating every cell byte.
pub(crate) fn decode_frame(
    r: &mut dyn Read,
    descriptor: &RunDescriptor,
) -> Result<Snapshot, ReplayError> {
    let mut bytes = vec![0u8; descriptor.cells_per_frame()];
    r.read_exact(&mut bytes)?;
    let cells = bytes
        .into_iter()
        .map(CellState::try_from)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Snapshot::new(descriptor.rows, descriptor.cols, cells))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_roundtrip() {
        let descriptor = RunDescriptor {
            seed: 0xDEAD_BEEF,
            rows: 150,
            cols: 150,
            frame_count: 75,
        };
        let mut buf = Vec::new();
        encode_header(&mut buf, &descriptor).unwrap();
        let decoded = decode_header(&mut buf.as_slice()).unwrap();
        assert_eq!(decoded, descriptor);
    }

    #[test]
    fn bad_magic_rejected() {
        let data = b"FRUT\x01\x00rest";
        assert!(matches!(
            decode_header(&mut data.as_slice()),
            Err(ReplayError::InvalidMagic)
        ));
    }

    #[test]
    fn future_version_rejected() {
        let mut buf = Vec::new();
        buf.extend_from_slice(&MAGIC);
        buf.extend_from_slice(&2u16.to_le_bytes());
        assert!(matches!(
            decode_header(&mut buf.as_slice()),
            Err(ReplayError::UnsupportedVersion { found: 2 })
        ));
    }

    #[test]
    fn corrupt_cell_byte_rejected() {
        let descriptor = RunDescriptor {
            seed: 0,
            rows: 1,
            cols: 3,
            frame_count: 1,
        };
        let bytes = [1u8, 9, 2];
        assert!(matches!(
            decode_frame(&mut bytes.as_slice(), &descriptor),
            Err(ReplayError::InvalidCell(e)) if e.value == 9
        ));
    }
}
