use std::collections::HashMap;
use std::fmt::Write as _;
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use log::info;
use md5::{Digest, Md5};

use crate::canonical::InvariantKey;
use crate::errors::CrystnetError;
use crate::Result;
use crate::KEY_VERSION;

/// One archived structure: an invariant key, the version of the key
/// generation process and the structure name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    key: InvariantKey,
    key_version: String,
    name: String,
}

impl ArchiveEntry {
    pub fn new(key: InvariantKey, key_version: &str, name: &str) -> Self {
        Self {
            key,
            key_version: key_version.to_string(),
            name: name.to_string(),
        }
    }

    pub fn key(&self) -> &InvariantKey {
        &self.key
    }

    pub fn key_version(&self) -> &str {
        &self.key_version
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Hex md5 digest over key, version and name, newline separated.
    pub fn digest(&self) -> String {
        let mut hasher = Md5::new();
        hasher.update(self.key.to_string().as_bytes());
        hasher.update(b"\n");
        hasher.update(self.key_version.as_bytes());
        hasher.update(b"\n");
        hasher.update(self.name.as_bytes());
        let digest = hasher.finalize();
        let mut out = String::with_capacity(2 * digest.len());
        for byte in digest {
            let _ = write!(out, "{:02x}", byte);
        }
        out
    }

    /// The five-line record format used in archive files.
    pub fn to_record(&self) -> String {
        format!(
            "key      {}\nversion  {}\nid       {}\nchecksum {}\nend\n",
            self.key, self.key_version, self.name, self.digest()
        )
    }
}

/// A reference archive: a checksummed collection of archive entries indexed
/// by invariant key.
#[derive(Debug, Clone)]
pub struct Archive {
    key_version: String,
    by_key: HashMap<InvariantKey, ArchiveEntry>,
    names: HashMap<String, InvariantKey>,
}

impl Archive {
    pub fn new() -> Self {
        Self::with_key_version(KEY_VERSION)
    }

    pub fn with_key_version(key_version: &str) -> Self {
        Self {
            key_version: key_version.to_string(),
            by_key: HashMap::new(),
            names: HashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.by_key.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_key.is_empty()
    }

    pub fn key_version(&self) -> &str {
        &self.key_version
    }

    pub fn add(&mut self, entry: ArchiveEntry) -> Result<()> {
        if entry.key_version() != self.key_version {
            return Err(CrystnetError::Internal(format!(
                "entry has key of version {}, but {} is required",
                entry.key_version(),
                self.key_version
            )));
        }
        if let Some(clashing) = self.by_key.get(entry.key()) {
            return Err(CrystnetError::Internal(format!(
                "key duplicates structure {}",
                clashing.name()
            )));
        }
        if self.names.contains_key(entry.name()) {
            return Err(CrystnetError::Internal(format!(
                "archive already holds a structure {}",
                entry.name()
            )));
        }
        self.names
            .insert(entry.name().to_string(), entry.key().clone());
        self.by_key.insert(entry.key().clone(), entry);
        Ok(())
    }

    pub fn lookup(&self, key: &InvariantKey) -> Option<&ArchiveEntry> {
        self.by_key.get(key)
    }

    pub fn get_by_name(&self, name: &str) -> Option<&ArchiveEntry> {
        self.names.get(name).and_then(|key| self.by_key.get(key))
    }

    /// Reads an archive from a file.
    pub fn load(path: &Path) -> Result<Archive> {
        let file = File::open(path).map_err(|e| CrystnetError::ArchiveLoad {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let archive = Self::from_reader(BufReader::new(file)).map_err(|e| match e {
            CrystnetError::ArchiveLoad { message, .. } => CrystnetError::ArchiveLoad {
                path: path.display().to_string(),
                message,
            },
            other => other,
        })?;
        info!("loaded {} entries from {}", archive.len(), path.display());
        Ok(archive)
    }

    /// Parses archive records from a stream. Records are groups of
    /// whitespace-normalized tag lines closed by an `end` line; the checksum
    /// of every record is verified.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Archive> {
        let mut archive = Archive::new();
        let mut fields: HashMap<String, String> = HashMap::new();
        for line in reader.lines() {
            let line = line.map_err(|e| CrystnetError::ArchiveLoad {
                path: String::new(),
                message: e.to_string(),
            })?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let (tag, arg) = match line.split_once(char::is_whitespace) {
                Some((tag, arg)) => (tag, arg.trim()),
                None => (line, ""),
            };
            if tag != "end" {
                fields.insert(tag.to_string(), arg.to_string());
                continue;
            }
            let entry = Self::entry_from_fields(&mut fields)?;
            archive.add(entry).map_err(|e| CrystnetError::ArchiveLoad {
                path: String::new(),
                message: e.to_string(),
            })?;
        }
        Ok(archive)
    }

    fn entry_from_fields(fields: &mut HashMap<String, String>) -> Result<ArchiveEntry> {
        let missing = |tag: &str| CrystnetError::ArchiveLoad {
            path: String::new(),
            message: format!("record is missing the {} field", tag),
        };
        let key_str = fields.remove("key").ok_or_else(|| missing("key"))?;
        let version = fields.remove("version").ok_or_else(|| missing("version"))?;
        let name = fields.remove("id").ok_or_else(|| missing("id"))?;
        let checksum = fields
            .remove("checksum")
            .ok_or_else(|| missing("checksum"))?;
        fields.clear();

        let key = key_str
            .parse::<InvariantKey>()
            .map_err(|e| CrystnetError::ArchiveLoad {
                path: String::new(),
                message: e.to_string(),
            })?;
        let entry = ArchiveEntry::new(key, &version, &name);
        if entry.digest() != checksum {
            return Err(CrystnetError::ArchiveLoad {
                path: String::new(),
                message: format!("checksum does not match for structure {}", name),
            });
        }
        Ok(entry)
    }

    /// Writes all entries, ordered by name.
    pub fn write<W: Write>(&self, out: &mut W) -> Result<()> {
        let mut entries: Vec<&ArchiveEntry> = self.by_key.values().collect();
        entries.sort_by(|a, b| a.name().cmp(b.name()));
        for entry in entries {
            out.write_all(entry.to_record().as_bytes())?;
        }
        Ok(())
    }
}

impl Default for Archive {
    fn default() -> Self {
        Archive::new()
    }
}
