//! objkit CLI
//!
//! Usage:
//!   objkit area <WIDTH> <HEIGHT>
//!   objkit json <JSON> [--area]
//!   objkit selector <KIND=VALUE>... [--combine <SYMBOL> --with <KIND=VALUE>...]

use std::process::ExitCode;
use std::str::FromStr;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use objkit_css::{CssSelector, SelectorCategory};
use objkit_object::{Rectangle, from_json, to_json};
use owo_colors::OwoColorize;
use strum::IntoEnumIterator;

/// objkit — rectangle, JSON prototype binding and CSS selector building
#[derive(Parser, Debug)]
#[command(name = "objkit")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Area of a 10 x 20 rectangle
    objkit area 10 20

    # Bind JSON to the Rectangle prototype and print its area
    objkit json '{"width":10,"height":20}' --area

    # Build a compound selector, parts applied in order
    objkit selector id=main class=container class=editable

    # Combine two selectors
    objkit selector element=ul --combine '>' --with element=li pseudo-class=first-child
"#)]
struct Cli {
    /// Print errors without color
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the area of a WIDTH x HEIGHT rectangle
    Area {
        /// Horizontal extent
        width: f64,
        /// Vertical extent
        height: f64,
    },

    /// Parse JSON, bind it to the Rectangle prototype and print it back
    Json {
        /// JSON text to parse
        json: String,

        /// Also print the bound object's area
        #[arg(long)]
        area: bool,
    },

    /// Build a selector from KIND=VALUE parts, applied in the order given
    ///
    /// KIND is one of element, id, class, attr, pseudo-class, pseudo-element.
    Selector {
        /// Parts of the left-hand selector
        #[arg(required = true, value_name = "KIND=VALUE")]
        parts: Vec<Part>,

        /// Combinator joining the two selectors (' ', '+', '~' or '>')
        #[arg(long, value_name = "SYMBOL", requires = "with")]
        combine: Option<String>,

        /// Parts of the right-hand selector
        #[arg(long, value_name = "KIND=VALUE", num_args = 1.., requires = "combine")]
        with: Vec<Part>,
    },
}

/// One `KIND=VALUE` selector part from the command line.
#[derive(Debug, Clone)]
struct Part {
    category: SelectorCategory,
    value: String,
}

impl FromStr for Part {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind, value) = s
            .split_once('=')
            .ok_or_else(|| format!("expected KIND=VALUE, got '{s}'"))?;
        let category = if kind == "attr" {
            SelectorCategory::Attribute
        } else {
            SelectorCategory::iter()
                .find(|category| category.to_string() == kind)
                .ok_or_else(|| format!("unknown selector kind '{kind}'"))?
        };
        Ok(Self {
            category,
            value: value.to_string(),
        })
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let message = format!("error: {err:#}");
            if cli.no_color {
                eprintln!("{message}");
            } else {
                eprintln!("{}", message.red());
            }
            ExitCode::FAILURE
        }
    }
}

fn run(command: &Command) -> Result<()> {
    match command {
        Command::Area { width, height } => {
            println!("{}", Rectangle::new(*width, *height).get_area());
        }
        Command::Json { json, area } => {
            let object = from_json(Rectangle::prototype(), json)
                .context("could not bind JSON to the Rectangle prototype")?;
            println!("{}", to_json(&object)?);
            if *area {
                println!("area: {}", object.get_area());
            }
        }
        Command::Selector {
            parts,
            combine,
            with,
        } => {
            let left = build_selector(parts).context("left-hand selector")?;
            let selector = match combine {
                Some(combinator) => {
                    let right = build_selector(with).context("right-hand selector")?;
                    left.combine(&right, combinator)
                }
                None => left,
            };
            println!("{}", selector.stringify());
        }
    }
    Ok(())
}

/// Apply `parts` in order to an empty selector.
fn build_selector(parts: &[Part]) -> Result<CssSelector> {
    parts
        .iter()
        .enumerate()
        .try_fold(CssSelector::empty(), |selector, (index, part)| {
            selector
                .push(part.category, &part.value)
                .with_context(|| format!("part {} ({}={})", index + 1, part.category, part.value))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_part_from_str() {
        let part: Part = r#"attr=href$=".png""#.parse().unwrap();
        assert_eq!(part.category, SelectorCategory::Attribute);
        assert_eq!(part.value, r#"href$=".png""#);

        let part: Part = "pseudo-element=before".parse().unwrap();
        assert_eq!(part.category, SelectorCategory::PseudoElement);
    }

    #[test]
    fn test_part_from_str_rejects_unknown_kind() {
        assert!("tag=div".parse::<Part>().is_err());
        assert!("div".parse::<Part>().is_err());
    }

    #[test]
    fn test_build_selector_reports_failing_part() {
        let parts: Vec<Part> = ["class=a", "element=b"]
            .iter()
            .map(|s| s.parse().unwrap())
            .collect();
        let err = build_selector(&parts).unwrap_err();
        assert!(format!("{err:#}").starts_with("part 2 (element=b)"));
    }

    #[test]
    fn test_cli_parses_combine() {
        let cli = Cli::try_parse_from([
            "objkit", "selector", "element=ul", "--combine", ">", "--with", "element=li",
        ])
        .unwrap();
        let Command::Selector { parts, combine, with } = cli.command else {
            panic!("expected selector command");
        };
        assert_eq!(parts.len(), 1);
        assert_eq!(combine.as_deref(), Some(">"));
        assert_eq!(with.len(), 1);
    }
}
