use clap::Parser;
use homeinv::client::api::HttpBackend;
use homeinv::client::app::InventoryApp;
use homeinv::client::command::{is_confirmation, Command, HELP};
use homeinv::client::view::render;
use std::io::{self, BufRead, Write};

/// Terminal client for a homeinv server.
#[derive(Parser, Debug)]
#[command(name = "homeinv-client", version)]
struct Args {
    /// Base URL of the inventory API
    #[arg(long, env = "HOMEINV_API", default_value = "http://localhost:8080")]
    api: String,
}

// Clear the terminal and park the cursor at the top before each redraw.
const CLEAR: &str = "\x1b[2J\x1b[H";

fn draw(app: &InventoryApp<HttpBackend>, note: Option<&str>) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    write!(stdout, "{CLEAR}{}", render(app.state()))?;
    if let Some(note) = note {
        writeln!(stdout, "\n{note}")?;
    }
    write!(stdout, "\n> ")?;
    stdout.flush()
}

fn ask(prompt: &str, lines: &mut impl Iterator<Item = io::Result<String>>) -> bool {
    print!("{prompt} [y/N] ");
    if io::stdout().flush().is_err() {
        return false;
    }
    matches!(lines.next(), Some(Ok(answer)) if is_confirmation(&answer))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let mut app = InventoryApp::new(HttpBackend::new(&args.api)?);
    app.load().await;
    draw(&app, None)?;

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    while let Some(line) = lines.next() {
        let mut note = None;

        match Command::parse(&line?) {
            Command::Name(name) => app.set_name(name),
            Command::Quantity(quantity) => app.set_quantity(quantity),
            Command::Submit => app.submit().await,
            Command::Edit(n) => match app.state().items.get(n - 1).cloned() {
                Some(item) => app.edit(item),
                None => note = Some(format!("no item {n}")),
            },
            Command::Cancel => app.cancel_edit(),
            Command::Delete(n) => match app.state().items.get(n - 1).map(|i| i.id.clone()) {
                Some(id) => {
                    app.delete(&id, || ask("Are you sure you want to delete this item?", &mut lines))
                        .await
                }
                None => note = Some(format!("no item {n}")),
            },
            Command::Refresh => app.load().await,
            Command::Help => note = Some(HELP.to_string()),
            Command::Quit => break,
            Command::Unknown(input) => note = Some(format!("unknown command: {input} (try `help`)")),
        }

        draw(&app, note.as_deref())?;
    }

    Ok(())
}
