use anyhow::{Context, Result};
use clap::{Arg, ArgAction, Command};
use topnav_types::{ConfigError, NavLink, Sublink};
use tracing::Level;

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let matches = build_cli().get_matches();

    let links = match matches.get_one::<String>("links") {
        Some(path) => load_links(path).with_context(|| format!("loading navigation links from {path}"))?,
        None => sample_links().context("building the built-in sample links")?,
    };
    let theme = matches.get_one::<String>("theme").map(|name| name.as_str());

    topnav_tui::run(links, theme).await
}

fn init_tracing() {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_max_level(Level::INFO)
        .try_init();
}

fn build_cli() -> Command {
    Command::new("topnav")
        .about("Responsive navigation bar with popover submenus and a sliding drawer, in the terminal")
        .arg(
            Arg::new("links")
                .long("links")
                .short('l')
                .action(ArgAction::Set)
                .help("Path to a JSON navigation link configuration"),
        )
        .arg(
            Arg::new("theme")
                .long("theme")
                .action(ArgAction::Set)
                .help("Color theme (nord, dracula)"),
        )
}

/// Loads a link list from a JSON file.
///
/// Each entry is `{"label": ..., "href": ...}` or
/// `{"label": ..., "sublinks": [{"label", "href", "description"?}]}`;
/// an entry with neither href nor sublinks fails the whole load.
fn load_links(path: &str) -> Result<Vec<NavLink>> {
    let raw = std::fs::read_to_string(path)?;
    let links: Vec<NavLink> = serde_json::from_str(&raw)?;
    Ok(links)
}

fn sample_links() -> Result<Vec<NavLink>, ConfigError> {
    Ok(vec![
        NavLink::leaf("Home", "/"),
        NavLink::branch(
            "Products",
            vec![
                Sublink::new("Insights", "/products/insights").with_description("Measure actions your users take"),
                Sublink::new("Automations", "/products/automations").with_description("Create your own targeted content"),
                Sublink::new("Reports", "/products/reports").with_description("Keep track of your growth"),
            ],
        )?,
        NavLink::leaf("Pricing", "/pricing"),
        NavLink::branch(
            "Company",
            vec![
                Sublink::new("About", "/about"),
                Sublink::new("Careers", "/careers").with_description("We are hiring"),
            ],
        )?,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_links_are_well_formed() {
        let links = sample_links().expect("sample links");
        assert_eq!(links.len(), 4);
        assert!(links.iter().any(NavLink::is_branch));
    }
}
