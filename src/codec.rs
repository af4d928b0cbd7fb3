//! Save-token format - portable text encoding of a grid and its mode.
//!
//! A token is a single line of the form `LIFE1:<mode>[:x,y,tag]*`: a
//! magic+version header, the mode tag, then one record per non-absent cell.
//! The same token works as clipboard content or as the body of a `.gol`
//! file.

use std::fmt::Write as _;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use rand::Rng;
use rand::distributions::Alphanumeric;

use crate::grid::{GridStore, Point};
use crate::schema::{CellState, GameMode};

/// Magic prefix identifying a save token.
pub const SAVE_MAGIC: &str = "LIFE";

/// Current token format version.
pub const SAVE_VERSION: u32 = 1;

/// File extension for saved tokens.
pub const SAVE_EXTENSION: &str = "gol";

/// Attempts at a fresh random file name before giving up.
const NAME_ATTEMPTS: u32 = 100;

/// Decode failures.
///
/// Decoding never mutates caller state: on error the caller's existing
/// grid and mode are untouched.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("save token is empty")]
    MissingHeader,
    #[error("save token does not start with the {SAVE_MAGIC:?} magic")]
    BadMagic,
    #[error("unsupported save format version {found}")]
    UnsupportedVersion { found: u32 },
    #[error("save token has no mode field")]
    MissingMode,
    #[error("unknown game mode tag {tag:?}")]
    UnknownMode { tag: String },
    #[error("cell record {index} is truncated")]
    TruncatedRecord { index: usize },
    #[error("cell record {index} has a non-integer coordinate")]
    BadCoordinate { index: usize },
    #[error("cell record {index} has state tag {tag:?} outside the {mode:?} alphabet")]
    BadStateTag {
        index: usize,
        tag: String,
        mode: GameMode,
    },
}

/// Encode a grid and its mode as a single save token.
///
/// Records are emitted in sorted position order, so equal grids produce
/// byte-equal tokens. States outside the mode's alphabet are skipped (the
/// controller prunes them before they can reach a save). The empty grid
/// encodes to just the header, which is itself a valid token.
pub fn encode(grid: &GridStore, mode: GameMode) -> String {
    let mut cells: Vec<(Point, CellState)> =
        grid.iter().filter(|(_, s)| s.belongs_to(mode)).collect();
    cells.sort_by_key(|(pos, _)| *pos);

    let mut token = format!("{SAVE_MAGIC}{SAVE_VERSION}:{}", mode.tag());
    for (pos, state) in cells {
        let _ = write!(token, ":{},{},{}", pos.x, pos.y, state.tag());
    }
    token
}

/// Decode a save token back into a grid and mode.
///
/// Inverse of [`encode`]. The returned store contains exactly the decoded
/// cells; a later record for the same position overwrites an earlier one.
pub fn decode(token: &str) -> Result<(GridStore, GameMode), DecodeError> {
    let mut fields = token.split(':');

    let header = match fields.next() {
        Some(h) if !h.is_empty() => h,
        _ => return Err(DecodeError::MissingHeader),
    };
    let version = header
        .strip_prefix(SAVE_MAGIC)
        .and_then(|v| v.parse::<u32>().ok())
        .ok_or(DecodeError::BadMagic)?;
    if version != SAVE_VERSION {
        return Err(DecodeError::UnsupportedVersion { found: version });
    }

    let mode_tag = fields.next().ok_or(DecodeError::MissingMode)?;
    let mode = GameMode::from_tag(mode_tag).ok_or_else(|| DecodeError::UnknownMode {
        tag: mode_tag.to_string(),
    })?;

    let mut grid = GridStore::new();
    for (index, record) in fields.enumerate() {
        let mut parts = record.split(',');
        let (x, y, tag) = match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(x), Some(y), Some(tag), None) => (x, y, tag),
            _ => return Err(DecodeError::TruncatedRecord { index }),
        };

        let x: i64 = x.parse().map_err(|_| DecodeError::BadCoordinate { index })?;
        let y: i64 = y.parse().map_err(|_| DecodeError::BadCoordinate { index })?;
        let state = CellState::from_tag(tag)
            .filter(|s| s.belongs_to(mode))
            .ok_or_else(|| DecodeError::BadStateTag {
                index,
                tag: tag.to_string(),
                mode,
            })?;

        grid.set(Point::new(x, y), Some(state));
    }

    Ok((grid, mode))
}

/// Write `token` into `dir` as `life_<suffix>.gol`, creating the directory
/// if needed.
///
/// The suffix is three random alphanumeric characters; an existing file
/// with the same name gets a fresh suffix.
pub fn write_save_file(dir: &Path, token: &str) -> io::Result<PathBuf> {
    fs::create_dir_all(dir)?;

    let mut rng = rand::thread_rng();
    for _ in 0..NAME_ATTEMPTS {
        let suffix: String = (&mut rng)
            .sample_iter(Alphanumeric)
            .take(3)
            .map(char::from)
            .collect();
        let path = dir.join(format!("life_{suffix}.{SAVE_EXTENSION}"));
        if path.exists() {
            continue;
        }
        fs::write(&path, token)?;
        return Ok(path);
    }

    Err(io::Error::new(
        io::ErrorKind::AlreadyExists,
        "could not find a free save file name",
    ))
}

/// Read a save token previously written with [`write_save_file`].
pub fn read_save_file(path: &Path) -> io::Result<String> {
    let token = fs::read_to_string(path)?;
    Ok(token.trim_end().to_string())
}
