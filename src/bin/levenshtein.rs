use anyhow::Context;
use clap::Parser;
use editdistance::{levenshtein, Error};

#[derive(Parser, Debug)]
#[command(
    name = "levenshtein",
    about = "Levenshtein edit distance between two strings",
    version
)]
struct Cli {
    /// First string. With neither string given, a worked example is shown
    a: Option<String>,

    /// Second string
    b: Option<String>,

    /// Lowercase both strings before comparing (not full Unicode case folding)
    #[arg(short, long)]
    ignore_case: bool,

    /// Reject inputs longer than this many characters, counted before lowercasing
    #[arg(long, value_name = "N")]
    max_len: Option<usize>,

    /// Print only the distance
    #[arg(short, long)]
    quiet: bool,
}

// Usage errors detected by clap exit with status 2, all others with status 1.
fn main() -> anyhow::Result<()> {
    if std::env::var("EDITDISTANCE_LOG").is_ok() {
        let e = env_logger::Env::new()
            .filter("EDITDISTANCE_LOG")
            .write_style("EDITDISTANCE_LOG_STYLE");
        env_logger::init_from_env(e);
    }

    let cli = Cli::parse();
    log::debug!("levenshtein options: {:?}", cli);

    println!("{}", run(cli)?);
    Ok(())
}

/// Computes the distance described by `cli` and renders the output line.
fn run(cli: Cli) -> anyhow::Result<String> {
    let (a, b) = resolve_inputs(cli.a, cli.b).context("reading arguments")?;

    if let Some(max_len) = cli.max_len {
        validate_input_length(&a, max_len).context("first string")?;
        validate_input_length(&b, max_len).context("second string")?;
    }

    let a_units = to_units(&a, cli.ignore_case);
    let b_units = to_units(&b, cli.ignore_case);
    let distance = levenshtein(&a_units, &b_units);

    Ok(render(&a, &b, distance, cli.quiet))
}

/// Both strings, or the worked example when neither is given.
fn resolve_inputs(
    a: Option<String>,
    b: Option<String>,
) -> editdistance::Result<(String, String)> {
    match (a, b) {
        (Some(a), Some(b)) => Ok((a, b)),
        (None, None) => Ok(("kitten".to_string(), "sitting".to_string())),
        _ => Err(Error::invalid_input("expected two strings or none")),
    }
}

/// Decodes `s` into the characters that get compared, optionally lowercased.
fn to_units(s: &str, ignore_case: bool) -> Vec<char> {
    if ignore_case {
        s.chars().flat_map(char::to_lowercase).collect()
    } else {
        s.chars().collect()
    }
}

fn validate_input_length(s: &str, max_len: usize) -> editdistance::Result<()> {
    let len = s.chars().count();
    if len > max_len {
        return Err(Error::invalid_input(format!(
            "{len} characters exceeds the limit of {max_len}"
        )));
    }
    Ok(())
}

fn render(a: &str, b: &str, distance: usize, quiet: bool) -> String {
    if quiet {
        distance.to_string()
    } else {
        format!("The Levenshtein distance between '{a}' and '{b}' is {distance}.")
    }
}
