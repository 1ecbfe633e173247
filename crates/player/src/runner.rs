//! Terminal shell driving one page session.
//!
//! Each input line is one user action on the sheet. An action reads its
//! fields as soon as its line is read; only the wait on the backend runs as
//! its own task, so the prompt stays responsive while a lookup is pending.

use std::str::FromStr;
use std::sync::Arc;

use charsheet_domain::{Denomination, DieSize, InventoryCategory};
use futures_util::future::{BoxFuture, FutureExt};
use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::task::{JoinError, JoinSet};

use crate::infrastructure::MemoryPage;
use crate::ports::outbound::bindings::{self, ADVANTAGE_TOGGLE};
use crate::ports::outbound::FieldId;
use crate::state::PageSession;

pub const HELP: &str = "\
Commands:
  type <field> <text>      type into a field (e.g. type newWeapon Longsword)
  add <list>               armor | weapon | consumable | gear | magic | misc
                           | spell | attack | character
  gold|silver|copper       add the amount typed into newGold/newSilver/newCopper
  die <d4..d100>           select a die
  advantage on|off         toggle the advantage checkbox
  roll                     roll the selected die
  damage                   roll damage for the spell typed into spellDamageInput
  show                     print the sheet
  fields                   list field names
  quit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddTarget {
    Item(InventoryCategory),
    Spell,
    Attack,
    Character,
}

impl FromStr for AddTarget {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "spell" => Ok(Self::Spell),
            "attack" => Ok(Self::Attack),
            "character" => Ok(Self::Character),
            other => other
                .parse()
                .map(Self::Item)
                .map_err(|_| CommandError::InvalidArgument(s.to_string())),
        }
    }
}

/// One line of shell input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Type { field: FieldId, value: String },
    Add(AddTarget),
    Coins(Denomination),
    SelectDie(DieSize),
    Advantage(bool),
    Roll,
    SpellDamage,
    Show,
    Fields,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Empty command")]
    Empty,
    #[error("Unknown command: {0}")]
    Unknown(String),
    #[error("Missing argument: {0}")]
    MissingArgument(&'static str),
    #[error("Unknown field: {0}")]
    UnknownField(String),
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (verb, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(verb, rest)| (verb, rest.trim()));

        match verb.to_ascii_lowercase().as_str() {
            "" => Err(CommandError::Empty),
            "type" => {
                let (id, value) = rest
                    .split_once(char::is_whitespace)
                    .map_or((rest, ""), |(id, value)| (id, value.trim()));
                if id.is_empty() {
                    return Err(CommandError::MissingArgument("field"));
                }
                let field = bindings::field_by_id(id)
                    .ok_or_else(|| CommandError::UnknownField(id.to_string()))?;
                Ok(Self::Type {
                    field,
                    value: value.to_string(),
                })
            }
            "add" => {
                if rest.is_empty() {
                    return Err(CommandError::MissingArgument("list"));
                }
                rest.parse().map(Self::Add)
            }
            "gold" => Ok(Self::Coins(Denomination::Gold)),
            "silver" => Ok(Self::Coins(Denomination::Silver)),
            "copper" => Ok(Self::Coins(Denomination::Copper)),
            "die" => {
                if rest.is_empty() {
                    return Err(CommandError::MissingArgument("die"));
                }
                rest.parse()
                    .map(Self::SelectDie)
                    .map_err(|_| CommandError::InvalidArgument(rest.to_string()))
            }
            "advantage" => match rest.to_ascii_lowercase().as_str() {
                "on" => Ok(Self::Advantage(true)),
                "off" => Ok(Self::Advantage(false)),
                "" => Err(CommandError::MissingArgument("on|off")),
                _ => Err(CommandError::InvalidArgument(rest.to_string())),
            },
            "roll" => Ok(Self::Roll),
            "damage" => Ok(Self::SpellDamage),
            "show" => Ok(Self::Show),
            "fields" => Ok(Self::Fields),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" => Ok(Self::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

pub struct RunnerDeps {
    pub session: PageSession,
    pub page: Arc<MemoryPage>,
}

/// Read commands from stdin until `quit` or end of input
pub async fn run(deps: RunnerDeps) -> anyhow::Result<()> {
    println!("{}", HELP);
    run_lines(deps, BufReader::new(tokio::io::stdin())).await
}

/// Drive the page from `input`, one command per line.
///
/// Returns once input ends and every lookup started from it has settled.
pub async fn run_lines<R>(deps: RunnerDeps, input: R) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
{
    let RunnerDeps { session, page } = deps;
    let mut lines = input.lines();
    let mut pending = JoinSet::new();

    while let Some(line) = lines.next_line().await? {
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(CommandError::Empty) => continue,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };

        match command {
            Command::Quit => break,
            Command::Help => println!("{}", HELP),
            Command::Show => print!("{}", page.render()),
            Command::Fields => {
                for field in bindings::all_fields() {
                    println!("  {}", field);
                }
            }
            Command::Type { field, value } => page.type_into(field, &value),
            Command::Advantage(on) => {
                page.set_checked(ADVANTAGE_TOGGLE, on);
                session.dice.advantage_toggled();
            }
            action => {
                if let Some(settle) = submit(&session, action) {
                    let page = Arc::clone(&page);
                    pending.spawn(async move {
                        settle.await;
                        print_alerts(&page);
                    });
                }
            }
        }
        print_alerts(&page);

        while let Some(done) = pending.try_join_next() {
            log_join(done);
        }
    }

    if !pending.is_empty() {
        tracing::info!(pending = pending.len(), "Waiting for pending lookups");
    }
    while let Some(done) = pending.join_next().await {
        log_join(done);
    }
    print_alerts(&page);

    tracing::info!("Shell closed");
    Ok(())
}

/// Run the immediate part of one page action.
///
/// Fields are read, validated and cleared before this returns. Actions that
/// wait on the backend hand back the remainder, which updates the page when
/// the lookup settles.
pub fn submit(session: &PageSession, command: Command) -> Option<BoxFuture<'static, ()>> {
    match command {
        Command::Add(AddTarget::Item(category)) => {
            Some(session.inventory.submit_item(category).map(|_| ()).boxed())
        }
        Command::Add(AddTarget::Spell) => Some(session.spells.submit_spell().map(|_| ()).boxed()),
        Command::Add(AddTarget::Attack) => {
            session.encounters.add_attack();
            None
        }
        Command::Add(AddTarget::Character) => {
            session.characters.add_character();
            None
        }
        Command::Coins(denomination) => {
            session.currency.add(denomination);
            None
        }
        Command::SelectDie(die) => {
            session.dice.select_die(die);
            None
        }
        Command::Roll => Some(session.dice.submit_roll().map(|_| ()).boxed()),
        Command::SpellDamage => Some(session.dice.submit_spell_damage().map(|_| ()).boxed()),
        Command::Type { .. }
        | Command::Advantage(_)
        | Command::Show
        | Command::Fields
        | Command::Help
        | Command::Quit => None,
    }
}

fn log_join(done: Result<(), JoinError>) {
    if let Err(e) = done {
        tracing::error!(error = %e, "Page action task failed");
    }
}

fn print_alerts(page: &MemoryPage) {
    for alert in page.take_alerts() {
        println!("! {}", alert);
    }
}
