//! Persisted "last triangle" and history, behind an explicit interface.
//!
//! The geometry core never touches storage; this store is injected into the
//! application layer instead of being reached as ambient global state.
//! History is most-recent-first, capped at five entries, and deduplicated by
//! the stable query-string serialization of the three points.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use trigon::tri::build_display_query;
use trigon::{Triangle, Vec2};

pub const HISTORY_CAP: usize = 5;

/// Store interface for the surrounding application.
pub trait TriangleStore {
    /// Last saved triangle, if any.
    fn load(&self) -> Option<Triangle>;
    /// Persist `tri` as the last triangle and push it onto the history.
    fn save(&mut self, tri: &Triangle) -> Result<()>;
    /// Past triangles, most recent first, at most [`HISTORY_CAP`] entries.
    fn history(&self) -> Vec<Triangle>;
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
struct PointRec {
    x: f64,
    y: f64,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
struct TriangleRec {
    a: PointRec,
    b: PointRec,
    c: PointRec,
}

impl From<&Triangle> for TriangleRec {
    fn from(t: &Triangle) -> Self {
        let p = |v: Vec2<f64>| PointRec { x: v.x, y: v.y };
        Self {
            a: p(t.a),
            b: p(t.b),
            c: p(t.c),
        }
    }
}

impl From<&TriangleRec> for Triangle {
    fn from(r: &TriangleRec) -> Self {
        Triangle::new(
            Vec2::new(r.a.x, r.a.y),
            Vec2::new(r.b.x, r.b.y),
            Vec2::new(r.c.x, r.c.y),
        )
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreFile {
    last: Option<TriangleRec>,
    #[serde(default)]
    history: Vec<TriangleRec>,
}

/// JSON-file-backed store. A missing file reads as an empty store; every
/// `save` rewrites the whole file.
pub struct JsonFileStore {
    path: PathBuf,
    state: StoreFile,
}

impl JsonFileStore {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let state = match fs::read_to_string(&path) {
            Ok(text) => serde_json::from_str(&text)
                .with_context(|| format!("malformed store file {}", path.display()))?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => StoreFile::default(),
            Err(e) => return Err(e).context(format!("reading store file {}", path.display())),
        };
        Ok(Self { path, state })
    }

    fn write(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let text = serde_json::to_string_pretty(&self.state)?;
        fs::write(&self.path, text)
            .with_context(|| format!("writing store file {}", self.path.display()))
    }
}

/// Stable value key for dedup: the wire serialization of the three points.
fn key(t: &Triangle) -> String {
    build_display_query(t.a, t.b, t.c)
}

impl TriangleStore for JsonFileStore {
    fn load(&self) -> Option<Triangle> {
        self.state.last.as_ref().map(Triangle::from)
    }

    fn save(&mut self, tri: &Triangle) -> Result<()> {
        let k = key(tri);
        self.state
            .history
            .retain(|r| key(&Triangle::from(r)) != k);
        self.state.history.insert(0, TriangleRec::from(tri));
        self.state.history.truncate(HISTORY_CAP);
        self.state.last = Some(TriangleRec::from(tri));
        self.write()
    }

    fn history(&self) -> Vec<Triangle> {
        self.state.history.iter().map(Triangle::from).collect()
    }
}
