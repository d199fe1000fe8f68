use anyhow::Context;
use stlkit_mesh::{DefaultMesh, MeshData};
use stlkit_stl::WriteOptions;

use crate::args;

pub fn convert_command(args: args::ConvertArgs) -> anyhow::Result<()> {
    let mesh = stlkit_stl::read_stl::<DefaultMesh, _>(&args.input)
        .with_context(|| format!("failed to read {}", args.input))?;

    let mut options = WriteOptions::new(args.format.into());
    if let Some(header) = args.header {
        options.header = header;
    }
    log::info!(
        "writing {} triangles to {} as {:?}",
        mesh.faces().len(),
        args.output,
        options.format
    );
    stlkit_stl::write_stl(&args.output, &MeshData::from(mesh), &options)
        .with_context(|| format!("failed to write {}", args.output))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use args::{ConvertArgs, Format};
    use stlkit_test_data::STL_CUBE;

    #[test]
    fn binary_to_ascii_and_back() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("cube-bin.stl");
        let ascii = dir.path().join("cube-ascii.stl");
        let binary = dir.path().join("cube-again.stl");
        std::fs::write(&input, STL_CUBE.bytes).unwrap();

        convert_command(ConvertArgs {
            input: input.display().to_string(),
            output: ascii.display().to_string(),
            format: Format::Ascii,
            header: None,
        })
        .unwrap();
        assert!(std::fs::read(&ascii).unwrap().starts_with(b"solid\n"));

        convert_command(ConvertArgs {
            input: ascii.display().to_string(),
            output: binary.display().to_string(),
            format: Format::Binary,
            header: Some("cube".into()),
        })
        .unwrap();
        let bytes = std::fs::read(&binary).unwrap();
        assert_eq!(STL_CUBE.bytes.len(), bytes.len());
        assert!(bytes.starts_with(b"cube "));

        let original = stlkit_stl::parse_stl::<DefaultMesh>(STL_CUBE.bytes).unwrap();
        let converted = stlkit_stl::read_stl::<DefaultMesh, _>(&binary).unwrap();
        assert_eq!(original, converted);
    }

    #[test]
    fn header_that_reads_as_ascii_is_refused() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("cube-bin.stl");
        std::fs::write(&input, STL_CUBE.bytes).unwrap();

        let err = convert_command(ConvertArgs {
            input: input.display().to_string(),
            output: dir.path().join("out.stl").display().to_string(),
            format: Format::Binary,
            header: Some("solid but binary".into()),
        })
        .unwrap_err();
        assert!(err.to_string().starts_with("failed to write"));
    }
}
