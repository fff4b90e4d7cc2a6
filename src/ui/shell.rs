use std::io::{BufRead, Write};
use std::str::FromStr;

use serde::Serialize;

use crate::core::pricing;
use crate::core::session::ShopSession;
use crate::domain::model::{CartLine, View};
use crate::domain::money::Money;
use crate::ui::render;
use crate::utils::error::{CartError, Result};

pub const HELP: &str = "\
Commands:
  add <name>          add one of a catalog item to the cart
  inc <name>          increase the quantity of a cart line
  dec <name>          decrease the quantity; removes the line at 1
  remove <name>       remove a line from the cart
  set <name> <qty>    set the quantity of a cart line
  toggle              switch between the product list and the cart
  continue            go back to the product list
  checkout            check out
  show                redraw the current view
  json                print the cart as JSON
  help                show this help
  quit                leave the shop
";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(String),
    Increment(String),
    Decrement(String),
    Remove(String),
    Set { name: String, quantity: u32 },
    Toggle,
    Continue,
    Checkout,
    Show,
    Json,
    Help,
    Quit,
}

impl Command {
    /// Whether the current view should be redrawn after running this command.
    fn changes_state(&self) -> bool {
        !matches!(
            self,
            Command::Checkout | Command::Show | Command::Json | Command::Help | Command::Quit
        )
    }
}

impl FromStr for Command {
    type Err = CartError;

    fn from_str(input: &str) -> Result<Self> {
        let input = input.trim();
        let invalid = |reason: &str| CartError::InvalidCommand {
            input: input.to_string(),
            reason: reason.to_string(),
        };

        let (word, rest) = match input.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (input, ""),
        };

        let name = || {
            if rest.is_empty() {
                Err(invalid("an item name is required"))
            } else {
                Ok(rest.to_string())
            }
        };

        let command = match word.to_ascii_lowercase().as_str() {
            "add" => Command::Add(name()?),
            "inc" | "+" => Command::Increment(name()?),
            "dec" | "-" => Command::Decrement(name()?),
            "remove" | "rm" => Command::Remove(name()?),
            "set" => {
                let (name, quantity) = rest
                    .rsplit_once(char::is_whitespace)
                    .ok_or_else(|| invalid("usage: set <name> <qty>"))?;
                let quantity = quantity
                    .parse::<u32>()
                    .map_err(|_| invalid("quantity must be a whole number"))?;
                Command::Set {
                    name: name.trim().to_string(),
                    quantity,
                }
            }
            "toggle" => Command::Toggle,
            "continue" => Command::Continue,
            "checkout" => Command::Checkout,
            "show" => Command::Show,
            "json" => Command::Json,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            _ => return Err(invalid("unknown command")),
        };
        Ok(command)
    }
}

#[derive(Serialize)]
struct CartSnapshot<'a> {
    view: View,
    items: &'a [CartLine],
    total: Money,
}

pub fn apply(session: &mut ShopSession, command: &Command) -> Result<()> {
    match command {
        Command::Add(name) => session.add_to_cart(name),
        Command::Increment(name) => session.increment(name),
        Command::Decrement(name) => session.decrement(name),
        Command::Remove(name) => {
            session.remove(name);
            Ok(())
        }
        Command::Set { name, quantity } => session.set_quantity(name, *quantity),
        Command::Toggle => {
            session.toggle_view();
            Ok(())
        }
        Command::Continue => {
            session.continue_shopping();
            Ok(())
        }
        Command::Checkout | Command::Show | Command::Json | Command::Help | Command::Quit => Ok(()),
    }
}

pub fn cart_json(session: &ShopSession) -> Result<String> {
    let snapshot = CartSnapshot {
        view: session.view(),
        items: session.store().items(),
        total: pricing::cart_total_amount(session.store()),
    };
    Ok(serde_json::to_string_pretty(&snapshot)?)
}

/// Reads one command per line and writes the rendered views. Bad commands are
/// reported and skipped; only I/O failures end the loop early.
pub fn run_shell<R: BufRead, W: Write>(
    session: &mut ShopSession,
    input: R,
    output: &mut W,
) -> Result<()> {
    write!(output, "{}", render::render_view(session))?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                tracing::warn!("{}", e);
                writeln!(output, "error: {}", e.user_friendly_message())?;
                continue;
            }
        };
        tracing::debug!("command: {:?}", command);

        match &command {
            Command::Quit => break,
            Command::Help => write!(output, "{}", HELP)?,
            Command::Checkout => writeln!(output, "{}", session.checkout())?,
            Command::Json => writeln!(output, "{}", cart_json(session)?)?,
            Command::Show => write!(output, "{}", render::render_view(session))?,
            _ => {}
        }

        if command.changes_state() {
            match apply(session, &command) {
                Ok(()) => write!(output, "{}", render::render_view(session))?,
                Err(e) => {
                    tracing::warn!("{}", e);
                    writeln!(output, "error: {}", e.user_friendly_message())?;
                }
            }
        }
    }

    output.flush()?;
    Ok(())
}
