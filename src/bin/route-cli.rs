use clap::Parser;
use route_trie::RouterBuilder;
use serde_json::{json, Map, Value};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "route-cli")]
#[command(about = "Resolve a request against an ad-hoc route table", long_about = None)]
struct Cli {
    /// Route to register, repeatable: "GET /api/books/:id -> books_show"
    #[arg(short, long = "route")]
    routes: Vec<String>,

    /// HTTP method of the request to resolve
    method: String,

    /// Path of the request to resolve
    path: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "route_trie=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let mut builder = RouterBuilder::new();
    for spec in &cli.routes {
        let (method, path, label) = parse_spec(spec)?;
        builder.route(method, path, label.to_string())?;
    }
    let router = builder.build();

    let outcome = match router.resolve(&cli.method, &cli.path)? {
        Some(found) => {
            let mut params = Map::new();
            for (name, value) in found.params.iter() {
                params.insert(name.to_string(), Value::String(value.to_string()));
            }
            json!({ "matched": true, "handler": found.handler, "params": params })
        }
        None => json!({ "matched": false }),
    };
    println!("{}", serde_json::to_string_pretty(&outcome)?);
    Ok(())
}

/// Split a "METHOD /path -> label" spec into its three parts.
fn parse_spec(spec: &str) -> Result<(&str, &str, &str), String> {
    let (route, label) = spec
        .split_once("->")
        .ok_or_else(|| format!("route spec missing '->': {spec:?}"))?;
    let mut parts = route.split_whitespace();
    let method = parts
        .next()
        .ok_or_else(|| format!("route spec missing method: {spec:?}"))?;
    let path = parts
        .next()
        .ok_or_else(|| format!("route spec missing path: {spec:?}"))?;
    Ok((method, path, label.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_spec() {
        let (method, path, label) = parse_spec("GET /api/books/:id -> books_show").unwrap();
        assert_eq!(method, "GET");
        assert_eq!(path, "/api/books/:id");
        assert_eq!(label, "books_show");
    }

    #[test]
    fn test_parse_spec_rejects_missing_arrow() {
        assert!(parse_spec("GET /api/books").is_err());
    }
}
