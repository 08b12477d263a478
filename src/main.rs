use anyhow::{Context, Result};
use forkify::config::{AppConfig, LogFormat};
use forkify::controller::{Controller, Input, Region, UiEvent, View};
use forkify::likes::Like;
use forkify::provider::ForkifyClient;
use forkify::recipe::Recipe;
use forkify::search::ResultsPage;
use forkify::shopping_list::ListItem;
use forkify::storage::FileStore;
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;
use tracing_subscriber::EnvFilter;

const HELP: &str = "Commands:
  search <query>      search recipes
  page <n>            show page n of the results
  open <id>           open a recipe
  + / -               more / fewer servings
  add                 add the recipe's ingredients to the shopping list
  like                like or unlike the open recipe
  list                show the shopping list
  count <id> <n>      change a shopping list item's count
  del <id>            remove a shopping list item
  quit";

/// Prints what a browser view would draw
struct ConsoleView;

impl View for ConsoleView {
    fn render_loader(&self, region: Region) {
        match region {
            Region::SearchResults => println!("Searching..."),
            Region::Recipe => println!("Loading recipe..."),
        }
    }

    fn clear_loader(&self) {}

    fn alert(&self, message: &str) {
        println!("!! {message}");
    }

    fn clear_search_input(&self) {}

    fn clear_results(&self) {}

    fn render_results(&self, page: &ResultsPage<'_>) {
        if page.results.is_empty() {
            println!("No recipes found.");
            return;
        }
        for summary in page.results {
            println!("  [{}] {} ({})", summary.id, summary.title, summary.author);
        }
        println!("Page {} of {}", page.page, page.pages);
    }

    fn highlight_selected(&self, _id: &str) {}

    fn clear_recipe(&self) {}

    fn render_recipe(&self, recipe: &Recipe, is_liked: bool) {
        let heart = if is_liked { " ♥" } else { "" };
        println!("\n{}{}", recipe.title, heart);
        println!("by {} | {} minutes | {} servings", recipe.author, recipe.time(), recipe.servings());
        for ingredient in recipe.ingredients() {
            println!("  - {ingredient}");
        }
        println!("Directions: {}\n", recipe.url);
    }

    fn update_servings_ingredients(&self, recipe: &Recipe) {
        println!("{} servings:", recipe.servings());
        for ingredient in recipe.ingredients() {
            println!("  - {ingredient}");
        }
    }

    fn render_list_item(&self, item: &ListItem) {
        println!("  + [{}] {} {} {}", item.id, item.count, item.unit, item.ingredient);
    }

    fn delete_list_item(&self, id: &str) {
        println!("Removed item {id}");
    }

    fn toggle_like_btn(&self, is_liked: bool) {
        println!("{}", if is_liked { "Liked ♥" } else { "Unliked" });
    }

    fn render_like(&self, like: &Like) {
        println!("  ♥ [{}] {}", like.id, like.title);
    }

    fn delete_like(&self, _id: &str) {}

    fn toggle_like_menu(&self, num_likes: usize) {
        println!("Likes: {num_likes}");
    }
}

/// Input fields filled from typed commands
#[derive(Default)]
struct ConsoleInput {
    query: Mutex<String>,
    hash: Mutex<String>,
}

impl ConsoleInput {
    fn set_query(&self, query: &str) {
        *self.query.lock().unwrap_or_else(|e| e.into_inner()) = query.to_string();
    }

    fn set_hash(&self, id: &str) {
        *self.hash.lock().unwrap_or_else(|e| e.into_inner()) = id.to_string();
    }
}

impl Input for ConsoleInput {
    fn search_query(&self) -> String {
        let mut query = self.query.lock().unwrap_or_else(|e| e.into_inner());
        std::mem::take(&mut *query)
    }

    fn recipe_id(&self) -> String {
        self.hash.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    match format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Text => builder.init(),
    }
}

/// Translate a typed command into a UI event, updating the input fields it reads
fn parse_command(line: &str, input: &ConsoleInput) -> Option<UiEvent> {
    let (command, rest) = line.split_once(' ').unwrap_or((line, ""));
    let rest = rest.trim();

    match command {
        "search" => {
            input.set_query(rest);
            Some(UiEvent::SearchSubmitted)
        }
        "open" => {
            input.set_hash(rest);
            Some(UiEvent::HashChanged)
        }
        "page" => rest.parse().ok().map(UiEvent::GoToPage),
        "+" => Some(UiEvent::ServingsIncrease),
        "-" => Some(UiEvent::ServingsDecrease),
        "add" => Some(UiEvent::AddToList),
        "like" => Some(UiEvent::ToggleLike),
        "del" if !rest.is_empty() => Some(UiEvent::DeleteListItem {
            id: rest.to_string(),
        }),
        "count" => {
            let (id, value) = rest.split_once(' ')?;
            Some(UiEvent::ListCountChanged {
                id: id.to_string(),
                value: value.trim().to_string(),
            })
        }
        _ => None,
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    let config = AppConfig::from_env().context("Failed to load configuration")?;
    init_tracing(config.log_format);

    info!(api_url = %config.api_url, store_dir = %config.store_dir.display(), "Starting forkify");

    let provider = ForkifyClient::new(&config).context("Failed to build HTTP client")?;
    let store = FileStore::open(&config.store_dir).context("Failed to open likes store")?;

    let controller = Controller::new(provider, ConsoleView, ConsoleInput::default(), Arc::new(store))
        .with_results_per_page(config.results_per_page);

    controller.dispatch(UiEvent::Load).await;
    println!("{HELP}");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("Failed to read stdin")? {
        let line = line.trim();
        match line {
            "" => continue,
            "quit" | "exit" => break,
            "help" => println!("{HELP}"),
            "list" => controller.with_state(|state| match &state.list {
                Some(list) if !list.is_empty() => {
                    for item in list.items() {
                        println!("  [{}] {} {} {}", item.id, item.count, item.unit, item.ingredient);
                    }
                }
                _ => println!("Shopping list is empty."),
            }),
            _ => match parse_command(line, controller.input()) {
                Some(event) => controller.dispatch(event).await,
                None => println!("Unknown command. Type `help`."),
            },
        }
    }

    info!("Shutting down");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_command() {
        let input = ConsoleInput::default();

        assert_eq!(parse_command("search pasta", &input), Some(UiEvent::SearchSubmitted));
        assert_eq!(input.search_query(), "pasta");

        assert_eq!(parse_command("open 47746", &input), Some(UiEvent::HashChanged));
        assert_eq!(input.recipe_id(), "47746");

        assert_eq!(parse_command("page 2", &input), Some(UiEvent::GoToPage(2)));
        assert_eq!(
            parse_command("count 3 2.5", &input),
            Some(UiEvent::ListCountChanged {
                id: "3".to_string(),
                value: "2.5".to_string()
            })
        );
        assert_eq!(parse_command("page two", &input), None);
        assert_eq!(parse_command("dance", &input), None);
    }
}
