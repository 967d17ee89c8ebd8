//! `topflow export` — design description to dataflow JSON.
//!
//! Loads the design and the node catalog, runs the translation, writes the
//! resulting document as pretty-printed JSON, and renders any diagnostics
//! to stderr. Warnings do not fail the export; the document is complete and
//! internally consistent with the affected entities omitted.

use std::io::Write;

use topflow_common::IdGenerator;
use topflow_dataflow::dataflow_from_design;
use topflow_design::load_design;
use topflow_diagnostics::{DiagnosticRenderer, DiagnosticSink, TerminalRenderer};
use topflow_spec::load_specification;

use crate::{ExportArgs, GlobalArgs};

/// Runs the `topflow export` command.
///
/// Returns exit code 0 on success (including with warnings); load failures
/// propagate as errors.
pub fn run(args: &ExportArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let design = load_design(&args.design)?;
    let spec = load_specification(&args.spec)?;

    if global.verbose {
        eprintln!(
            "   Translating {} instance(s), {} catalog type(s)",
            design.ips.len(),
            spec.nodes.len()
        );
    }

    let idgen = IdGenerator::new();
    let sink = DiagnosticSink::new();
    let doc = dataflow_from_design(&design, &spec, &idgen, &sink);

    render_diagnostics(&sink, global);

    let json = serde_json::to_string_pretty(&doc)?;
    match &args.output {
        Some(path) => {
            let mut file = std::fs::File::create(path)?;
            writeln!(file, "{json}")?;
            if !global.quiet {
                eprintln!("   Wrote {}", path.display());
            }
        }
        None => println!("{json}"),
    }

    Ok(0)
}

/// Renders accumulated diagnostics to stderr unless `--quiet` is set.
pub fn render_diagnostics(sink: &DiagnosticSink, global: &GlobalArgs) {
    if global.quiet {
        return;
    }
    let renderer = TerminalRenderer::new(global.color);
    for diag in sink.diagnostics() {
        eprint!("{}", renderer.render(&diag));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ExportArgs;

    fn global() -> GlobalArgs {
        GlobalArgs {
            quiet: true,
            verbose: false,
            color: false,
        }
    }

    #[test]
    fn export_writes_document() {
        let dir = tempfile::tempdir().unwrap();
        let design_path = dir.path().join("top.yaml");
        let spec_path = dir.path().join("spec.json");
        let out_path = dir.path().join("dataflow.json");

        std::fs::write(
            &design_path,
            "ips:\n  cpu:\n    file: cpu_core.yaml\n",
        )
        .unwrap();
        std::fs::write(
            &spec_path,
            r#"{"nodes": [{"type": "cpu_core", "properties": [], "interfaces": []}]}"#,
        )
        .unwrap();

        let args = ExportArgs {
            design: design_path,
            spec: spec_path,
            output: Some(out_path.clone()),
        };
        let code = run(&args, &global()).unwrap();
        assert_eq!(code, 0);

        let written: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&out_path).unwrap()).unwrap();
        assert_eq!(written["graph"]["nodes"][0]["name"], "cpu");
    }

    #[test]
    fn export_fails_on_missing_design() {
        let dir = tempfile::tempdir().unwrap();
        let spec_path = dir.path().join("spec.json");
        std::fs::write(&spec_path, r#"{"nodes": []}"#).unwrap();

        let args = ExportArgs {
            design: dir.path().join("missing.yaml"),
            spec: spec_path,
            output: None,
        };
        assert!(run(&args, &global()).is_err());
    }

    #[test]
    fn export_fails_on_malformed_spec() {
        let dir = tempfile::tempdir().unwrap();
        let design_path = dir.path().join("top.yaml");
        let spec_path = dir.path().join("spec.json");
        std::fs::write(&design_path, "ips: {}\n").unwrap();
        std::fs::write(&spec_path, "{not json").unwrap();

        let args = ExportArgs {
            design: design_path,
            spec: spec_path,
            output: None,
        };
        assert!(run(&args, &global()).is_err());
    }
}
