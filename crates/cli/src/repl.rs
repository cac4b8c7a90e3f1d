use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use recall_core::{Card, CardSet, HardestCards};
use services::{AnswerOutcome, QuizService};
use storage::{SnapshotRepository, StorageError};
use tracing::debug;

use crate::command::Command;
use crate::console::Console;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

fn menu_line() -> String {
    let names = Command::ALL.map(Command::name);
    format!("Input the action ({}):", names.join(", "))
}

/// The interactive command loop.
///
/// Owns the card set, the quiz engine, and the console for the lifetime of
/// the session. Each iteration prints the menu, reads one command name, and
/// dispatches; unrecognized input falls through to the next prompt.
pub struct Repl<R, W, S> {
    console: Console<R, W>,
    cards: CardSet,
    quiz: QuizService,
    snapshots: S,
    export_on_exit: Option<PathBuf>,
}

impl<R: BufRead, W: Write, S: SnapshotRepository> Repl<R, W, S> {
    #[must_use]
    pub fn new(console: Console<R, W>, snapshots: S) -> Self {
        Self {
            console,
            cards: CardSet::new(),
            quiz: QuizService::new(),
            snapshots,
            export_on_exit: None,
        }
    }

    /// Replace the quiz engine (e.g. to inject a deterministic sampler).
    #[must_use]
    pub fn with_quiz(mut self, quiz: QuizService) -> Self {
        self.quiz = quiz;
        self
    }

    /// Seed the session with an existing card set.
    #[must_use]
    pub fn with_cards(mut self, cards: CardSet) -> Self {
        self.cards = cards;
        self
    }

    /// Configure a snapshot to be written when the session ends.
    #[must_use]
    pub fn with_export_on_exit(mut self, path: Option<PathBuf>) -> Self {
        self.export_on_exit = path;
        self
    }

    #[must_use]
    pub fn cards(&self) -> &CardSet {
        &self.cards
    }

    #[must_use]
    pub fn console(&self) -> &Console<R, W> {
        &self.console
    }

    /// Run the command loop until `exit` or end of input.
    ///
    /// # Errors
    ///
    /// Propagates console I/O failures. Storage and quiz problems are
    /// reported to the user and never abort the session.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.console.say(&menu_line())?;
            let Some(line) = self.console.ask()? else { break };
            if let Some(command) = Command::parse(&line) {
                if self.dispatch(command)? == Flow::Quit {
                    return Ok(());
                }
            }
        }
        // Input is exhausted: leave through the same farewell path as `exit`
        // so a configured export still happens.
        self.exit_flow()?;
        Ok(())
    }

    fn dispatch(&mut self, command: Command) -> io::Result<Flow> {
        debug!(command = command.name(), "dispatching");
        match command {
            Command::Add => self.handle_add()?,
            Command::Remove => self.handle_remove()?,
            Command::Import => self.handle_import()?,
            Command::Export => self.handle_export()?,
            Command::Ask => self.handle_ask()?,
            Command::Exit => return self.exit_flow(),
            Command::Log => self.handle_log()?,
            Command::HardestCard => self.handle_hardest_card()?,
            Command::ResetStats => self.handle_reset_stats()?,
        }
        Ok(Flow::Continue)
    }

    fn handle_add(&mut self) -> io::Result<()> {
        self.console.say("The card:")?;
        let term = loop {
            let Some(candidate) = self.console.ask()? else {
                return Ok(());
            };
            if self.cards.find_by_term(&candidate).is_some() {
                self.console
                    .say(&format!("The term \"{candidate}\" already exists. Try again:"))?;
            } else {
                break candidate;
            }
        };

        self.console.say("The definition of the card:")?;
        let definition = loop {
            let Some(candidate) = self.console.ask()? else {
                return Ok(());
            };
            if self.cards.find_by_definition(&candidate).is_some() {
                self.console.say(&format!(
                    "The definition \"{candidate}\" already exists. Try again:"
                ))?;
            } else {
                break candidate;
            }
        };

        match self.cards.add(Card::new(term.clone(), definition.clone())) {
            Ok(()) => self.console.say(&format!(
                "The pair (\"{term}\":\"{definition}\") has been added."
            )),
            // Not reachable after the prompts above; the store still
            // enforces uniqueness.
            Err(err) => self.console.say(&err.to_string()),
        }
    }

    fn handle_remove(&mut self) -> io::Result<()> {
        self.console.say("Which card?")?;
        let Some(term) = self.console.ask()? else {
            return Ok(());
        };
        if self.cards.remove_by_term(&term).is_some() {
            self.console.say("The card has been removed.")
        } else {
            self.console
                .say(&format!("Can't remove \"{term}\": there is no such card."))
        }
    }

    fn handle_import(&mut self) -> io::Result<()> {
        self.console.say("File name:")?;
        let Some(filename) = self.console.ask()? else {
            return Ok(());
        };
        self.load_snapshot(Path::new(&filename))
    }

    fn handle_export(&mut self) -> io::Result<()> {
        self.console.say("File name:")?;
        let Some(filename) = self.console.ask()? else {
            return Ok(());
        };
        self.save_snapshot(Path::new(&filename))
    }

    /// Load a snapshot and replace the card set on success.
    ///
    /// Shared between the `import` command and the startup import. The
    /// in-memory set is untouched unless the whole snapshot parses.
    ///
    /// # Errors
    ///
    /// Propagates console I/O failures only; storage problems are reported
    /// as messages.
    pub fn load_snapshot(&mut self, path: &Path) -> io::Result<()> {
        match self.snapshots.load(path) {
            Ok(cards) => {
                let count = cards.len();
                self.cards.replace_all(cards);
                self.console
                    .say(&format!("{count} cards have been loaded."))
            }
            Err(StorageError::NotFound) => self.console.say("File not found."),
            Err(err) => self.console.say(&err.to_string()),
        }
    }

    fn save_snapshot(&mut self, path: &Path) -> io::Result<()> {
        let result = self.snapshots.save(path, self.cards.cards());
        match result {
            Ok(count) => self
                .console
                .say(&format!("{count} cards have been saved.")),
            Err(err) => self.console.say(&err.to_string()),
        }
    }

    fn handle_ask(&mut self) -> io::Result<()> {
        self.console.say("How many times to ask?")?;
        let Some(raw) = self.console.ask()? else {
            return Ok(());
        };
        let Ok(rounds) = raw.parse::<usize>() else {
            return self
                .console
                .say(&format!("\"{raw}\" is not a valid number of rounds."));
        };
        if self.cards.is_empty() {
            return self.console.say("There are no cards to ask about.");
        }

        for _ in 0..rounds {
            let question = match self.quiz.draw(&self.cards) {
                Ok(question) => question,
                Err(err) => return self.console.say(&err.to_string()),
            };
            self.console
                .say(&format!("Print the definition of \"{}\"", question.term))?;
            let Some(answer) = self.console.ask()? else {
                return Ok(());
            };
            match self.quiz.grade(&mut self.cards, question.index, &answer) {
                Ok(AnswerOutcome::Correct) => self.console.say("Correct!")?,
                Ok(AnswerOutcome::Wrong { correct }) => self
                    .console
                    .say(&format!("Wrong. The right answer is \"{correct}\"."))?,
                Ok(AnswerOutcome::CrossMatch {
                    correct,
                    matched_term,
                }) => self.console.say(&format!(
                    "Wrong. The right answer is \"{correct}\", but your definition is correct for \"{matched_term}\"."
                ))?,
                Err(err) => return self.console.say(&err.to_string()),
            }
        }
        Ok(())
    }

    fn handle_log(&mut self) -> io::Result<()> {
        self.console.say("File name:")?;
        let Some(filename) = self.console.ask()? else {
            return Ok(());
        };
        // Write first, confirm after; the confirmation itself is not part of
        // the dumped transcript.
        let contents = self.console.transcript().contents();
        match fs::write(&filename, contents) {
            Ok(()) => self.console.say("The log has been saved."),
            Err(err) => self.console.say(&err.to_string()),
        }
    }

    fn handle_hardest_card(&mut self) -> io::Result<()> {
        match self.cards.hardest() {
            HardestCards::NoMistakes => self.console.say("There are no cards with errors."),
            HardestCards::Single { term, mistakes } => {
                let noun = if mistakes == 1 { "error" } else { "errors" };
                self.console.say(&format!(
                    "The hardest card is \"{term}\". You have {mistakes} {noun} answering it."
                ))
            }
            HardestCards::Tied { terms } => {
                let joined = terms
                    .iter()
                    .map(|term| format!("\"{term}\""))
                    .collect::<Vec<_>>()
                    .join(", ");
                self.console
                    .say(&format!("The hardest cards are {joined}."))
            }
        }
    }

    fn handle_reset_stats(&mut self) -> io::Result<()> {
        self.cards.reset_stats();
        self.console.say("Card statistics have been reset.")
    }

    fn exit_flow(&mut self) -> io::Result<Flow> {
        if let Some(path) = self.export_on_exit.take() {
            self.save_snapshot(&path)?;
        }
        self.console.say("Bye bye!")?;
        Ok(Flow::Quit)
    }
}
