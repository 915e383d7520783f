//! Rendering of embeddings for stdout

use crate::error::{EmbedError, Result};
use serde::Serialize;
use serde_json::ser::{Formatter, Serializer};
use std::io;

/// Compact JSON with a space after each comma, e.g. `[0.1, 0.2, 0.3]`
struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }
}

/// Render an embedding as a JSON array
pub fn format_embedding(embedding: &[f64]) -> Result<String> {
    let mut buf = Vec::with_capacity(embedding.len() * 22 + 2);
    let mut serializer = Serializer::with_formatter(&mut buf, SpacedFormatter);
    embedding.serialize(&mut serializer).map_err(EmbedError::Output)?;

    // serde_json only ever writes UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
