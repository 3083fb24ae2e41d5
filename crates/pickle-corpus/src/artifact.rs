//! Writes fixture artifacts: `<name>.<ext>`, `<name>.line` and the run
//! manifest.

use std::fs;
use std::path::{Path, PathBuf};

use pickle_pack::PickleEncoder;
use tracing::{debug, info};

use crate::{
    canonicalize, CatalogBuilder, CorpusError, Fixture, FixtureReport, GeneratorConfig, Manifest,
};

/// Extension of the canonical text artifact.
pub const LINE_EXTENSION: &str = "line";

/// Run manifest file name inside the output directory.
pub const MANIFEST_FILE: &str = "manifest.json";

/// Writes the artifact pair for each fixture.
///
/// The binary artifact is always the unmodified graph, valid or not.
pub struct ArtifactWriter {
    out_dir: PathBuf,
    extension: String,
    encoder: PickleEncoder,
}

impl ArtifactWriter {
    /// Validates `config` and creates the output directory.
    pub fn new(config: &GeneratorConfig) -> Result<Self, CorpusError> {
        config.validate()?;
        fs::create_dir_all(&config.out_dir).map_err(|e| CorpusError::io(&config.out_dir, e))?;
        Ok(Self {
            out_dir: config.out_dir.clone(),
            extension: config.extension.clone(),
            encoder: PickleEncoder::new(config.protocol),
        })
    }

    pub fn write(&mut self, fixture: &Fixture) -> Result<FixtureReport, CorpusError> {
        let artifact = format!("{}.{}", fixture.name, self.extension);
        let line_artifact = format!("{}.{}", fixture.name, LINE_EXTENSION);

        let bytes = self.encoder.encode(&fixture.graph)?;
        write_file(&self.out_dir.join(&artifact), &bytes)?;

        let canonical = canonicalize(&fixture.graph);
        write_file(
            &self.out_dir.join(&line_artifact),
            canonical.to_text().as_bytes(),
        )?;

        if let Some(kind) = canonical.rejected {
            debug!(fixture = fixture.name, kind, "batch is not a list or tuple");
        }
        for skipped in &canonical.skipped {
            debug!(
                fixture = fixture.name,
                index = skipped.index,
                reason = %skipped.reason,
                "entry left out of canonical text"
            );
        }
        info!(
            fixture = fixture.name,
            bytes = bytes.len(),
            lines = canonical.lines.len(),
            skipped = canonical.skipped.len(),
            "wrote fixture"
        );

        Ok(FixtureReport {
            name: fixture.name.to_owned(),
            class: fixture.class,
            artifact,
            line_artifact,
            bytes: bytes.len(),
            lines: canonical.lines.len(),
            skipped: FixtureReport::skipped_from(&canonical),
            rejected: canonical.rejected.map(str::to_owned),
        })
    }

    pub fn write_manifest(&self, manifest: &Manifest) -> Result<PathBuf, CorpusError> {
        let path = self.out_dir.join(MANIFEST_FILE);
        let mut json = serde_json::to_vec_pretty(manifest)?;
        json.push(b'\n');
        write_file(&path, &json)?;
        Ok(path)
    }
}

/// Runs a full generation: one timestamp capture, every selected fixture,
/// then the manifest. Stops at the first I/O failure.
pub fn generate(config: &GeneratorConfig) -> Result<Manifest, CorpusError> {
    let builder = match config.timestamp {
        Some(ts) => CatalogBuilder::at(ts),
        None => CatalogBuilder::now(),
    };
    let catalog = builder.build();
    let selected = catalog.select(&config.only)?;
    let mut writer = ArtifactWriter::new(config)?;

    let mut fixtures = Vec::with_capacity(selected.len());
    for fixture in selected {
        fixtures.push(writer.write(fixture)?);
    }

    let manifest = Manifest {
        protocol: config.protocol.number(),
        captured_at: catalog.captured_at(),
        fixtures,
    };
    let path = writer.write_manifest(&manifest)?;
    info!(
        fixtures = manifest.fixtures.len(),
        protocol = manifest.protocol,
        manifest = %path.display(),
        "generation complete"
    );
    Ok(manifest)
}

fn write_file(path: &Path, data: &[u8]) -> Result<(), CorpusError> {
    fs::write(path, data).map_err(|e| CorpusError::io(path, e))
}
