//! WKT to Shapefile conversion pipeline
//!
//! `source text → parse → split by shape type → encode`, all in memory.
//! Files are only created once every output has been encoded, so a parse
//! or validation error never leaves a partial file behind.

use crate::error::Result;
use crate::io::shp::ShapefileWriter;
use crate::io::wkt::{parse_wkt, read_source};
use crate::projection::UtmZone;
use crate::types::ShapeType;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Conversion settings
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionOptions {
    /// Write the `.shx` index next to each `.shp`.
    ///
    /// Default: `true`.
    pub emit_index_file: bool,

    /// Source coordinates are UTM in this zone and are converted to lat/lng.
    ///
    /// Default: `None` (coordinates are written unchanged).
    pub projection: Option<UtmZone>,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            emit_index_file: true,
            projection: None,
        }
    }
}

impl ConversionOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build options from raw command-line style values.
    ///
    /// `zone_number == 0` and `zone_letter == '0'` mean "not given". When
    /// `convert_utm_to_geographic` is set, both must be given
    /// (`MissingProjectionParameters`) and valid (`InvalidZone`). Zone values
    /// are ignored otherwise.
    pub fn from_raw(
        convert_utm_to_geographic: bool,
        zone_number: i32,
        zone_letter: char,
        emit_index_file: bool,
    ) -> Result<Self> {
        let projection = if convert_utm_to_geographic {
            Some(UtmZone::new(zone_number, zone_letter)?)
        } else {
            None
        };
        Ok(Self {
            emit_index_file,
            projection,
        })
    }

    /// Convert coordinates from `zone` to lat/lng
    pub fn with_projection(mut self, zone: UtmZone) -> Self {
        self.projection = Some(zone);
        self
    }

    /// Skip the `.shx` index
    pub fn without_index_file(mut self) -> Self {
        self.emit_index_file = false;
        self
    }
}

/// One encoded file set (`.shp` plus optional `.shx`)
#[derive(Debug, Clone, PartialEq)]
pub struct ShapefileOutput {
    pub shape_type: ShapeType,
    /// Type name inserted before the extension when a collection was split
    pub suffix: Option<&'static str>,
    pub shp: Vec<u8>,
    pub shx: Option<Vec<u8>>,
}

impl ShapefileOutput {
    /// Main file path derived from the requested output path
    pub fn shp_path(&self, output: &Path) -> PathBuf {
        sibling_path(output, self.suffix, "shp")
    }

    /// Index file path derived from the requested output path
    pub fn shx_path(&self, output: &Path) -> PathBuf {
        sibling_path(output, self.suffix, "shx")
    }
}

/// `dir/name.shp` → `dir/name[.suffix].extension`
fn sibling_path(output: &Path, suffix: Option<&str>, extension: &str) -> PathBuf {
    let stem = output
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "output".to_string());

    let file_name = match suffix {
        Some(suffix) => format!("{}.{}.{}", stem, suffix, extension),
        None => format!("{}.{}", stem, extension),
    };
    output.with_file_name(file_name)
}

/// Convert WKT text into encoded Shapefiles, one per shape type.
///
/// A heterogeneous `GEOMETRYCOLLECTION` yields one output per distinct
/// shape type, in order of first appearance; anything else yields exactly
/// one output without suffix.
pub fn convert(source: &str, options: &ConversionOptions) -> Result<Vec<ShapefileOutput>> {
    let shape = parse_wkt(source)?;
    let groups = shape.split_by_type();
    let split = groups.len() > 1;

    let mut outputs = Vec::with_capacity(groups.len());
    for (shape_type, group) in &groups {
        let writer = ShapefileWriter::new(group)?.with_projection(options.projection);
        let shp = writer.shp_to_vec()?;
        let shx = if options.emit_index_file {
            Some(writer.shx_to_vec()?)
        } else {
            None
        };

        log::debug!(
            "encoded {} group: {} record(s), {} bytes",
            shape_type,
            group.count(),
            shp.len()
        );
        outputs.push(ShapefileOutput {
            shape_type: *shape_type,
            suffix: split.then(|| shape_type.name()),
            shp,
            shx,
        });
    }
    Ok(outputs)
}

fn write_bytes(path: &Path, bytes: &[u8]) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    writer.write_all(bytes)?;
    writer.flush()?;
    Ok(())
}

/// Convert WKT text and write the files next to `output` (a `.shp` path).
///
/// Returns the paths written, main file before index for each output.
pub fn convert_to_files<P: AsRef<Path>>(
    source: &str,
    options: &ConversionOptions,
    output: P,
) -> Result<Vec<PathBuf>> {
    let output = output.as_ref();
    let outputs = convert(source, options)?;

    let mut written = Vec::new();
    for out in &outputs {
        let shp_path = out.shp_path(output);
        write_bytes(&shp_path, &out.shp)?;
        written.push(shp_path);

        if let Some(shx) = &out.shx {
            let shx_path = out.shx_path(output);
            write_bytes(&shx_path, shx)?;
            written.push(shx_path);
        }
    }

    log::info!(
        "wrote {} file(s) for {}{}",
        written.len(),
        output.display(),
        options
            .projection
            .map(|z| format!(" (UTM {} to lat/lng)", z))
            .unwrap_or_default()
    );
    Ok(written)
}

/// Convert a WKT file.
///
/// `output` defaults to the input path with a `.shp` extension.
pub fn convert_file<P: AsRef<Path>>(
    input: P,
    options: &ConversionOptions,
    output: Option<&Path>,
) -> Result<Vec<PathBuf>> {
    let input = input.as_ref();
    let source = read_source(input)?;
    let output = match output {
        Some(path) => path.to_path_buf(),
        None => input.with_extension("shp"),
    };
    convert_to_files(&source, options, output)
}
