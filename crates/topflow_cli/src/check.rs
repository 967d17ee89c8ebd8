//! `topflow check` — validate a design against a node catalog.
//!
//! Runs the same translation as `export`, discards the document, and
//! reports diagnostics plus a summary line. Exits non-zero only on error
//! diagnostics or load failures.

use topflow_common::IdGenerator;
use topflow_dataflow::dataflow_from_design;
use topflow_design::load_design;
use topflow_diagnostics::{DiagnosticSink, Severity};
use topflow_spec::load_specification;

use crate::export::render_diagnostics;
use crate::{CheckArgs, GlobalArgs};

/// Runs the `topflow check` command.
///
/// Returns exit code 0 if translation produced no error diagnostics,
/// 1 otherwise.
pub fn run(args: &CheckArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let design = load_design(&args.design)?;
    let spec = load_specification(&args.spec)?;

    let idgen = IdGenerator::new();
    let sink = DiagnosticSink::new();
    let doc = dataflow_from_design(&design, &spec, &idgen, &sink);

    render_diagnostics(&sink, global);

    let diagnostics = sink.diagnostics();
    let warning_count = diagnostics
        .iter()
        .filter(|d| d.severity == Severity::Warning)
        .count();

    if !global.quiet {
        eprintln!(
            "   Result: {} node(s), {} connection(s), {} warning(s), {} error(s)",
            doc.graph.nodes.len(),
            doc.graph.connections.len(),
            warning_count,
            sink.error_count()
        );
    }

    if sink.has_errors() {
        Ok(1)
    } else {
        Ok(0)
    }
}
