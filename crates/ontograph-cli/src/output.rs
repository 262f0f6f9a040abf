//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use crate::session::Outcome;
use colored::*;
use ontograph_store::OntologyStats;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format the outcome of a statement.
    ///
    /// Quiet mode prints nothing for applied statements.
    pub fn format_outcome(&self, outcome: &Outcome) -> Result<String> {
        match outcome {
            Outcome::Applied(message) => match self.format {
                OutputFormat::Json => status_json("applied", message),
                OutputFormat::Table => Ok(self.success(message)),
                OutputFormat::Quiet => Ok(String::new()),
            },
            Outcome::Rejected(message) => match self.format {
                OutputFormat::Json => status_json("rejected", message),
                OutputFormat::Table => Ok(self.warning(&format!("Rejected: {}", message))),
                OutputFormat::Quiet => Ok(message.clone()),
            },
            Outcome::Resources { title, names } => self.format_resources(title, names),
            Outcome::Stats(stats) => self.format_stats(stats),
        }
    }

    /// Format the names returned by a query.
    pub fn format_resources(&self, title: &str, names: &[String]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&serde_json::json!({
                "query": title,
                "results": names,
            }))?),
            OutputFormat::Quiet => Ok(names.join("\n")),
            OutputFormat::Table => {
                if names.is_empty() {
                    return Ok(self.colorize(&format!("{}: none found.", title), "yellow"));
                }

                let mut builder = Builder::default();
                builder.push_record([title]);
                for name in names {
                    builder.push_record([name.as_str()]);
                }

                let mut table = builder.build();
                table
                    .with(Style::rounded())
                    .with(Modify::new(Rows::first()).with(Alignment::center()));
                Ok(table.to_string())
            }
        }
    }

    /// Format ontology statistics.
    pub fn format_stats(&self, stats: &OntologyStats) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&serde_json::json!({
                "classes": stats.classes,
                "properties": stats.properties,
                "individuals": stats.individuals,
                "literals": stats.literals,
                "asserted_entries": stats.asserted_entries,
                "inferred_entries": stats.inferred_entries,
                "entries_by_relation": stats.entries_by_relation,
            }))?),
            OutputFormat::Quiet => Ok(stats.summary()),
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Metric", "Count"]);
                let counts = [
                    ("Classes", stats.classes),
                    ("Properties", stats.properties),
                    ("Individuals", stats.individuals),
                    ("Literals", stats.literals),
                    ("Asserted entries", stats.asserted_entries),
                    ("Inferred entries", stats.inferred_entries),
                ];
                for (metric, count) in counts {
                    builder.push_record([metric.to_string(), count.to_string()]);
                }
                for (relation, count) in stats.entries_by_relation.iter().filter(|(_, count)| **count > 0) {
                    builder.push_record([format!("  {}", relation), count.to_string()]);
                }

                let mut table = builder.build();
                table
                    .with(Style::rounded())
                    .with(Modify::new(Rows::first()).with(Alignment::center()));
                Ok(table.to_string())
            }
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

fn status_json(status: &str, message: &str) -> Result<String> {
    Ok(serde_json::to_string(&serde_json::json!({
        "status": status,
        "message": message,
    }))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ontograph_domain::Class;
    use ontograph_store::Ontology;

    fn resources() -> Outcome {
        Outcome::Resources {
            title: "Subclasses of ex:Animal".to_string(),
            names: vec!["ex:Dog".to_string(), "ex:Puppy".to_string()],
        }
    }

    #[test]
    fn test_table_format() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_outcome(&resources()).unwrap();
        assert!(output.contains("Subclasses of ex:Animal"));
        assert!(output.contains("ex:Puppy"));
    }

    #[test]
    fn test_json_format() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_outcome(&resources()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["results"][1], "ex:Puppy");

        let rejected = formatter
            .format_outcome(&Outcome::Rejected("contradiction".to_string()))
            .unwrap();
        assert!(rejected.contains("\"status\":\"rejected\""));
    }

    #[test]
    fn test_quiet_format() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        assert_eq!(formatter.format_outcome(&resources()).unwrap(), "ex:Dog\nex:Puppy");
        assert_eq!(
            formatter.format_outcome(&Outcome::Applied("done".to_string())).unwrap(),
            ""
        );
    }

    #[test]
    fn test_empty_resources() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_resources("Members of ex:Cat", &[]).unwrap();
        assert!(output.contains("none found"));
    }

    #[test]
    fn test_stats_table() {
        let mut ontology = Ontology::new("ex:o").unwrap();
        let (dog, animal) = (Class::plain("ex:Dog").unwrap(), Class::plain("ex:Animal").unwrap());
        ontology.class_model_mut().add_subclass_of(&dog, &animal);

        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_stats(&ontology.stats()).unwrap();
        assert!(output.contains("Classes"));
        assert!(output.contains("subClassOf"));
        assert!(!output.contains("sameAs"));
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let msg = formatter.success("test");
        assert_eq!(msg, "✓ test");
    }
}
