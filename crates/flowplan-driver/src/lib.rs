//! File front end for `flowplan`: loads a problem specification from disk,
//! runs the core routine, and hands back the shipment plan.

use std::path::{Path, PathBuf};

pub use flowplan_core::Solution;

use flowplan_core::{Node, Route};

/// Loads a specification from `path` and solves it.
pub fn run_from_file(spec: impl AsRef<Path>) -> Result<Solution, Error> {
    let spec = load_from_file(spec)?;
    run(spec)
}

/// Loads a specification from `path`. The format is chosen by file extension;
/// only JSON is supported.
pub fn load_from_file(spec: impl AsRef<Path>) -> Result<Spec, Error> {
    let path = spec.as_ref();
    let contents = std::fs::read_to_string(path)?;
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(serde_json::from_str(&contents)?),
        _ => Err(Error::UnknownFileType(path.into())),
    }
}

/// Solves a loaded specification.
pub fn run(spec: Spec) -> Result<Solution, Error> {
    let spec = flowplan_core::Spec::builder()
        .nodes(spec.nodes)
        .routes(spec.routes)
        .build();
    Ok(flowplan_core::run(spec)?)
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unknown file type: {0}")]
    UnknownFileType(PathBuf),

    #[error("JSON error")]
    Json(#[from] serde_json::Error),

    #[error("IO error")]
    Io(#[from] std::io::Error),

    #[error("failed to run flowplan")]
    FlowplanCore(#[from] flowplan_core::Error),
}

/// The on-disk problem specification.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Spec {
    pub nodes: Vec<Node>,
    pub routes: Vec<Route>,
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    const SPEC: &str = r#"{
        "nodes": [
            { "id": "S1", "kind": { "supply": { "amount": 100.0 } } },
            { "id": "S2", "kind": { "supply": { "amount": 150.0 } } },
            { "id": "D1", "kind": { "demand": { "amount": 120.0 } } },
            { "id": "D2", "kind": { "demand": { "amount": 130.0 } } }
        ],
        "routes": [
            { "src": "S1", "dst": "D1", "cost": 2.0 },
            { "src": "S1", "dst": "D2", "cost": 4.0 },
            { "src": "S2", "dst": "D1", "cost": 5.0 },
            { "src": "S2", "dst": "D2", "cost": 1.0, "capacity": 200.0 }
        ]
    }"#;

    fn write_spec(dir: &tempfile::TempDir, name: &str) -> anyhow::Result<PathBuf> {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path)?;
        file.write_all(SPEC.as_bytes())?;
        Ok(path)
    }

    #[test]
    fn json_spec_solves_end_to_end() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = write_spec(&dir, "two_by_two.json")?;
        let solution = run_from_file(path)?;
        assert!((solution.total_cost().into_f64() - 430.0).abs() < 1e-6);
        Ok(())
    }

    #[test]
    fn unknown_extension_is_rejected() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = write_spec(&dir, "two_by_two.yaml")?;
        let res = run_from_file(path);
        assert!(matches!(res, Err(Error::UnknownFileType(..))));
        Ok(())
    }

    #[test]
    fn malformed_json_is_rejected() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ not json }")?;
        let res = run_from_file(path);
        assert!(matches!(res, Err(Error::Json(..))));
        Ok(())
    }
}
