//! CLI command implementations.

use std::io::{self, BufRead};

use searchq::{Config, Error, Nodes, OutputFormat};
use tracing::{debug, info};

/// Queries from the arguments, or one per non-empty stdin line.
fn collect_queries(args: &[String]) -> searchq::Result<Vec<String>> {
    if !args.is_empty() {
        return Ok(args.to_vec());
    }

    let stdin = io::stdin();
    let mut queries = Vec::new();
    for line in stdin.lock().lines() {
        let line = line?;
        let line = line.trim_end_matches('\r');
        if !line.trim().is_empty() {
            queries.push(line.to_string());
        }
    }
    debug!(count = queries.len(), "read queries from stdin");
    Ok(queries)
}

/// Render parsed nodes in the requested format.
fn render(nodes: &Nodes, format: OutputFormat, pretty: bool) -> searchq::Result<String> {
    let out = match format {
        OutputFormat::Text => nodes.to_string(),
        OutputFormat::Json if pretty => serde_json::to_string_pretty(nodes)?,
        OutputFormat::Json => serde_json::to_string(nodes)?,
        OutputFormat::Debug => format!("{:#?}", &nodes[..]),
    };
    Ok(out)
}

pub fn parse(queries: &[String], format: Option<&str>, pretty: bool) -> searchq::Result<()> {
    let config = Config::load()?;
    let format = match format {
        Some(f) => f.parse()?,
        None => config.format,
    };
    let pretty = pretty || config.pretty;

    for query in collect_queries(queries)? {
        let nodes = searchq::parse(&query)?;
        info!(query = %query, clauses = nodes.len(), "parsed");
        println!("{}", render(&nodes, format, pretty)?);
    }

    Ok(())
}

pub fn check(queries: &[String], quiet: bool) -> searchq::Result<()> {
    let queries = collect_queries(queries)?;
    let mut first_error = None;
    let mut failed = 0;

    for query in &queries {
        match searchq::parse(query) {
            Ok(_) => {
                if !quiet {
                    println!("ok\t{}", query);
                }
            }
            Err(e) => {
                failed += 1;
                if !quiet {
                    println!("error\t{}\t{}", query, e);
                }
                if first_error.is_none() {
                    first_error = Some(e);
                }
            }
        }
    }

    match first_error {
        Some(e) => {
            debug!(failed, total = queries.len(), "check failed");
            Err(Error::Parse(e))
        }
        None => Ok(()),
    }
}

pub fn config(init: bool) -> searchq::Result<()> {
    let config = Config::load()?;

    if init {
        if config.config_path().exists() {
            println!("Config already exists at {}", config.config_path().display());
        } else {
            config.save()?;
            println!("Wrote {}", config.config_path().display());
        }
        return Ok(());
    }

    println!("root = {}", config.root.display());
    println!("format = {}", config.format);
    println!("pretty = {}", config.pretty);
    Ok(())
}
