//! Interactive REPL (Read-Eval-Print Loop) mode.

use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use crate::runner::execute_line;
use crate::session::Session;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

/// Run the interactive REPL.
pub fn run_repl(session: &mut Session, config: &Config, formatter: &Formatter) -> Result<()> {
    println!("{}", formatter.info("Ontograph REPL - Type 'help' for statements, 'exit' to quit"));
    println!();

    // Initialize readline editor
    let editor_config = rustyline::Config::builder()
        .max_history_size(config.settings.history_size)?
        .auto_add_history(false)
        .build();
    let mut editor = DefaultEditor::with_config(editor_config)?;

    // Load history
    let history_path = Config::history_path()?;
    if editor.load_history(&history_path).is_err() {
        tracing::debug!(path = %history_path.display(), "No history loaded");
    }

    loop {
        match editor.readline("ontograph> ") {
            Ok(line) => {
                let line = line.trim();

                if line.is_empty() {
                    continue;
                }

                editor.add_history_entry(line).ok();

                match line {
                    "exit" | "quit" | "q" => {
                        println!("{}", formatter.info("Goodbye!"));
                        break;
                    }
                    "help" | "?" => print_help(formatter),
                    _ => {
                        if let Err(e) = execute_line(session, formatter, line) {
                            eprintln!("{}", formatter.error(&e.to_string()));
                        }
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", formatter.info("Use 'exit' to quit"));
            }
            Err(ReadlineError::Eof) => {
                break;
            }
            Err(err) => {
                eprintln!("{}", formatter.error(&format!("Error: {}", err)));
                break;
            }
        }
    }

    // Save history
    editor.save_history(&history_path).ok();

    Ok(())
}

fn print_help(formatter: &Formatter) {
    println!("{}", formatter.info("Available statements:"));
    println!();
    println!("  class <C>                          - Declare a class");
    println!("  subclass <C> <D>                   - C subClassOf D");
    println!("  equivalent <C> <D>                 - C equivalentClass D");
    println!("  disjoint <C> <D>                   - C disjointWith D");
    println!("  object-property <P> [options]      - Declare an object property");
    println!("  datatype-property <P> [options]    - Declare a datatype property");
    println!("  annotation-property <P>            - Declare an annotation property");
    println!("    options: domain <C>, range <C>, functional, inverse-functional,");
    println!("             symmetric, transitive, deprecated");
    println!("  subproperty <P> <Q>                - P subPropertyOf Q");
    println!("  equivalent-property <P> <Q>        - P equivalentProperty Q");
    println!("  inverse <P> <Q>                    - P inverseOf Q");
    println!("  individual <i>                     - Declare an individual");
    println!("  restriction <R> <P> all <C>        - Every value of P is a C");
    println!("  restriction <R> <P> some <C>       - Some value of P is a C");
    println!("  restriction <R> <P> value <v>      - Some value of P is v");
    println!("  restriction <R> <P> cardinality <min> [max] | exactly <n>");
    println!("  union|intersection <U> <C>...      - Composite class");
    println!("  complement <N> <C>                 - Everything that is not a C");
    println!("  enum <E> <i>...                    - Enumeration of individuals");
    println!("  datarange <D> \"lit\"...             - Enumeration of literals");
    println!("  type <i> <C>                       - i classType C");
    println!("  same <i> <j> | different <i> <j>   - Identity of individuals");
    println!("  assert <i> <P> <v>                 - v is an individual or \"literal\"[@lang|^^type]");
    println!("  remove-class <C>                   - Remove a class and its entries");
    println!();
    println!("{}", formatter.info("Queries:"));
    println!();
    println!("  subclasses|superclasses|equivalents|disjoints|members <C>");
    println!("  same-as|different-from <i>");
    println!("  inverses <P>");
    println!("  reachable <i> <P>                  - Objects through a transitive property");
    println!("  stats | clear-inferred");
    println!("  help, ?                            - Show this help");
    println!("  exit, quit, q                      - Exit REPL");
    println!();
}
