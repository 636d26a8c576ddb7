use crate::{block::Block, codec};
use std::fs;
use std::io;
use std::path::Path;

/// Writes `block` to `path` in its canonical JSON form.
pub fn save_block(block: &Block, path: impl AsRef<Path>) -> io::Result<()> {
    let json = codec::to_json_string(block)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

    fs::write(path, json)?;
    Ok(())
}

/// Reads a block written by [`save_block`]. A file holding `null` yields `None`.
pub fn load_block(path: impl AsRef<Path>) -> io::Result<Option<Block>> {
    let json = fs::read_to_string(path)?;
    let block =
        codec::from_json_str(&json).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

    Ok(block)
}
