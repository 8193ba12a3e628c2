//! Interactive browse session: reads commands line by line and redraws the view.

use crate::catalog::{CatalogClient, CatalogSource};
use crate::commands::search::SearchCommand;
use crate::config::Config;
use crate::format::ViewRenderer;
use crate::sort::SortKey;
use anyhow::{Context, Result};
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::debug;

const HELP: &str = "\
Commands:
  search <text>   search cards by name (bare text works too)
  sort <key>      price-high, price-low, name-asc, name-desc,
                  set-asc, set-desc, date-new, date-old
  open <n>        show details for card n
  close           close the detail view
  set <id|none>   limit searches to one set
  clear           clear the search
  help            show this help
  quit            exit";

/// One parsed line of user input.
#[derive(Debug, Clone, PartialEq)]
pub enum BrowseAction {
    Search(String),
    Sort(SortKey),
    /// 1-based card position
    Open(usize),
    Close,
    Scope(Option<String>),
    Clear,
    Help,
    Quit,
}

impl std::str::FromStr for BrowseAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let line = s.trim();
        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };

        match command.to_lowercase().as_str() {
            "search" | "s" => Ok(BrowseAction::Search(rest.to_string())),
            "sort" => rest.parse().map(BrowseAction::Sort),
            "open" | "o" => rest
                .parse()
                .map(BrowseAction::Open)
                .map_err(|_| format!("Expected a card number, got: {:?}", rest)),
            "close" | "x" => Ok(BrowseAction::Close),
            "set" => match rest {
                "" | "none" => Ok(BrowseAction::Scope(None)),
                id => Ok(BrowseAction::Scope(Some(id.to_string()))),
            },
            "clear" => Ok(BrowseAction::Clear),
            "help" | "?" => Ok(BrowseAction::Help),
            "quit" | "q" | "exit" => Ok(BrowseAction::Quit),
            _ => Ok(BrowseAction::Search(line.to_string())),
        }
    }
}

/// Runs an interactive session against the catalog.
pub struct BrowseCommand {
    config: Config,
}

impl BrowseCommand {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Runs the session on stdin/stdout.
    pub async fn execute(&self) -> Result<()> {
        let client = CatalogClient::new(&self.config).context("Failed to create HTTP client")?;
        let input = tokio::io::BufReader::new(tokio::io::stdin());
        let mut out = std::io::stdout();

        self.run(&client, input, &mut out).await
    }

    /// Runs a session over arbitrary input and output (for testing).
    pub async fn run<R, W>(&self, client: &impl CatalogSource, input: R, out: &mut W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        let renderer = ViewRenderer::new(self.config.format);
        let mut controller = SearchCommand::controller(&self.config);
        let mut lines = input.lines();

        writeln!(out, "{}", renderer.render(controller.state()))?;

        loop {
            write!(out, "\n> ")?;
            out.flush()?;

            let Some(line) = lines.next_line().await.context("Failed to read input")? else {
                break;
            };
            if line.trim().is_empty() {
                continue;
            }

            let action = match line.parse::<BrowseAction>() {
                Ok(action) => action,
                Err(message) => {
                    writeln!(out, "{}", message)?;
                    continue;
                }
            };
            debug!("Browse action: {:?}", action);

            match action {
                BrowseAction::Search(query) => controller.search(client, &query).await,
                BrowseAction::Sort(key) => controller.set_sort(key),
                BrowseAction::Open(position) => {
                    let opened =
                        position.checked_sub(1).and_then(|index| controller.select(index));
                    if opened.is_none() {
                        writeln!(out, "No card at position {}", position)?;
                        continue;
                    }
                }
                BrowseAction::Close => controller.close_detail(),
                BrowseAction::Scope(set_id) => controller.set_scope(set_id),
                BrowseAction::Clear => controller.clear(),
                BrowseAction::Help => {
                    writeln!(out, "{}", HELP)?;
                    continue;
                }
                BrowseAction::Quit => break,
            }

            writeln!(out, "{}", renderer.render(controller.state()))?;
        }

        Ok(())
    }
}
