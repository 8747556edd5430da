//! # Vocabulary IO
//!
//! A vocabulary is stored as one UTF-8 JSON object of
//! ``{ "token": weight, ... }`` in id order, with non-ASCII text
//! written verbatim.
//!
//! ```rust,no_run
//! use kochipper::vocab::{WeightedVocab, io::{load_vocab_path, save_vocab_path}};
//!
//! fn example(vocab: &WeightedVocab) -> kochipper::KCResult<WeightedVocab> {
//!     let path = save_vocab_path(vocab, "models/")?;
//!     load_vocab_path(path)
//! }
//! ```

use std::{
    fmt,
    fs::File,
    io::{BufReader, BufWriter, Read, Write},
    path::{Path, PathBuf},
};

use serde::{
    Deserialize,
    Deserializer,
    Serialize,
    Serializer,
    de::{MapAccess, Visitor},
    ser::SerializeMap,
};

use crate::{errors::KCResult, types::Weight, vocab::WeightedVocab};

/// The file name used when a vocabulary path names a directory.
pub const VOCAB_FILE_NAME: &str = "vocab.json";

impl Serialize for WeightedVocab {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (token, weight) in self.iter() {
            map.serialize_entry(token, &weight)?;
        }
        map.end()
    }
}

struct WeightedVocabVisitor;

impl<'de> Visitor<'de> for WeightedVocabVisitor {
    type Value = WeightedVocab;

    fn expecting(
        &self,
        f: &mut fmt::Formatter,
    ) -> fmt::Result {
        f.write_str("a map of token strings to integer weights")
    }

    fn visit_map<A: MapAccess<'de>>(
        self,
        mut access: A,
    ) -> Result<Self::Value, A::Error> {
        let mut vocab = WeightedVocab::default();
        // Repeated keys keep the first position and the last weight.
        while let Some((token, weight)) = access.next_entry::<String, Weight>()? {
            vocab.insert(token, weight);
        }
        Ok(vocab)
    }
}

impl<'de> Deserialize<'de> for WeightedVocab {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(WeightedVocabVisitor)
    }
}

/// Resolve the file a vocabulary path refers to.
///
/// An existing directory resolves to ``<dir>/vocab.json``;
/// any other path is used as given.
pub fn resolve_vocab_path<P: AsRef<Path>>(path: P) -> PathBuf {
    let path = path.as_ref();
    if path.is_dir() {
        path.join(VOCAB_FILE_NAME)
    } else {
        path.to_path_buf()
    }
}

/// Write a [`WeightedVocab`] as JSON to a [`Write`] writer.
pub fn write_vocab_json<W: Write>(
    vocab: &WeightedVocab,
    writer: &mut W,
) -> KCResult<()> {
    serde_json::to_writer(&mut *writer, vocab)?;
    writer.flush()?;
    Ok(())
}

/// Read a [`WeightedVocab`] from a JSON [`Read`] stream.
///
/// Key order in the stream is preserved.
pub fn read_vocab_json<R: Read>(reader: R) -> KCResult<WeightedVocab> {
    Ok(serde_json::from_reader(reader)?)
}

/// Save a [`WeightedVocab`] to a file.
///
/// ## Arguments
/// * `vocab` - the vocabulary to save.
/// * `path` - a file path, or a directory to hold ``vocab.json``.
///
/// ## Returns
/// The path written.
pub fn save_vocab_path<P: AsRef<Path>>(
    vocab: &WeightedVocab,
    path: P,
) -> KCResult<PathBuf> {
    let path = resolve_vocab_path(path);
    let mut writer = BufWriter::new(File::create(&path)?);
    write_vocab_json(vocab, &mut writer)?;
    Ok(path)
}

/// Load a [`WeightedVocab`] from a file.
///
/// ## Arguments
/// * `path` - a file path, or a directory holding ``vocab.json``.
pub fn load_vocab_path<P: AsRef<Path>>(path: P) -> KCResult<WeightedVocab> {
    let path = resolve_vocab_path(path);
    let reader = BufReader::new(File::open(path)?);
    read_vocab_json(reader)
}
