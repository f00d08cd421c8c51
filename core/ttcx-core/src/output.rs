//! Machine-readable face listings (made by FontLab https://www.fontlab.com/)

use std::io::Write;

use anyhow::Result;

use crate::collection::FaceInfo;

/// Write faces as a prettified JSON array.
pub fn write_json_pretty(faces: &[FaceInfo], mut w: impl Write) -> Result<()> {
    let json = serde_json::to_string_pretty(faces)?;
    w.write_all(json.as_bytes())?;
    w.write_all(b"\n")?;
    Ok(())
}

/// Write faces as newline-delimited JSON (NDJSON).
pub fn write_ndjson(faces: &[FaceInfo], mut w: impl Write) -> Result<()> {
    for face in faces {
        let line = serde_json::to_string(face)?;
        w.write_all(line.as_bytes())?;
        w.write_all(b"\n")?;
    }
    Ok(())
}
