//! Statement execution shared by the REPL and the script runner.

use crate::error::{CliError, Result};
use crate::output::Formatter;
use crate::script::parse_statement;
use crate::session::{Outcome, Session};
use std::fs;
use std::path::Path;

/// Parse and execute one line, printing its outcome.
///
/// Returns `false` for blank lines and comments.
pub fn execute_line(session: &mut Session, formatter: &Formatter, line: &str) -> Result<bool> {
    let Some(statement) = parse_statement(line)? else {
        return Ok(false);
    };

    let outcome = session.execute(statement)?;
    let rendered = formatter.format_outcome(&outcome)?;
    if !rendered.is_empty() {
        match outcome {
            Outcome::Rejected(_) => eprintln!("{}", rendered),
            _ => println!("{}", rendered),
        }
    }
    for note in session.take_notes() {
        eprintln!("{}", formatter.info(&note.message));
    }
    Ok(true)
}

/// Run every statement of a script.
///
/// Stops at the first failing statement unless `keep_going` is set; rejected
/// statements are reported but never stop the script. Returns the number of
/// statements executed.
pub fn run_script(session: &mut Session, formatter: &Formatter, path: &Path, keep_going: bool) -> Result<usize> {
    let contents = fs::read_to_string(path)?;
    let mut executed = 0;
    let mut failed = 0;

    for (index, line) in contents.lines().enumerate() {
        match execute_line(session, formatter, line) {
            Ok(true) => executed += 1,
            Ok(false) => {}
            Err(source) => {
                let error = CliError::Script {
                    line: index + 1,
                    source: Box::new(source),
                };
                if !keep_going {
                    return Err(error);
                }
                failed += 1;
                eprintln!("{}", formatter.error(&error.to_string()));
            }
        }
    }

    tracing::info!(script = %path.display(), executed, failed, "Script finished");
    Ok(executed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use ontograph_domain::Fingerprint;
    use ontograph_gatekeeper::ValidationConfig;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn script(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    fn session() -> (Session, Formatter) {
        (
            Session::new("ex:test", ValidationConfig::default()).unwrap(),
            Formatter::new(OutputFormat::Quiet, false),
        )
    }

    #[test]
    fn test_run_script() {
        let (mut session, formatter) = session();
        let file = script("# pets\nsubclass ex:Dog ex:Animal\n\nsubclass ex:Puppy ex:Dog\ntype ex:rex ex:Puppy\n");

        let executed = run_script(&mut session, &formatter, file.path(), false).unwrap();
        assert_eq!(executed, 3);
        let classes = session.ontology().class_model();
        assert!(classes.is_subclass_of(Fingerprint::of("ex:Puppy"), Fingerprint::of("ex:Animal")));
    }

    #[test]
    fn test_script_stops_at_first_error() {
        let (mut session, formatter) = session();
        let file = script("class ex:A\nbogus\nclass ex:B\n");

        let error = run_script(&mut session, &formatter, file.path(), false).unwrap_err();
        assert!(matches!(error, CliError::Script { line: 2, .. }));
        assert_eq!(session.ontology().class_model().class_count(), 1);
    }

    #[test]
    fn test_keep_going() {
        let (mut session, formatter) = session();
        let file = script("class ex:A\nassert ex:a ex:undeclared ex:b\nclass ex:B\n");

        let executed = run_script(&mut session, &formatter, file.path(), true).unwrap();
        assert_eq!(executed, 2);
        assert_eq!(session.ontology().class_model().class_count(), 2);
    }

    #[test]
    fn test_rejection_does_not_stop_script() {
        let (mut session, formatter) = session();
        let file = script("subclass ex:A ex:B\ndisjoint ex:A ex:B\nclass ex:C\n");

        assert_eq!(run_script(&mut session, &formatter, file.path(), false).unwrap(), 3);
        assert!(session.ontology().class_model().disjoint_with().is_empty());
    }
}
