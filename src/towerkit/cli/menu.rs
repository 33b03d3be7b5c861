//! The interactive menu. It reads choices line by line, collects and
//! validates input (re-prompting as needed), calls the API, and renders the
//! results. Store-level failures (full, not found, wrong order) are printed
//! and the loop goes on; only I/O failures end it.

use super::prompt::{ask, ask_priority, ask_text};
use super::render::{
    render_error, render_located, render_messages, render_records, render_sort_report,
};
use colored::Colorize;
use std::io::{BufRead, Write};
use towerkit::api::TowerApi;
use towerkit::commands::CmdResult;
use towerkit::config::TowerConfig;
use towerkit::error::{Result, TowerError};
use towerkit::model::Order;
use towerkit::sort::SortKey;
use tracing::debug;

const MENU: &str = "\n--- MENU ---
1) Add record
2) Remove record by name
3) List records
4) Sort records (choose algorithm)
5) Find record by name (binary search, requires name order)
0) Quit";

const SORT_MENU: &str = "\nChoose the sorting algorithm:
1) Bubble sort by NAME  [enables binary search]
2) Insertion sort by CATEGORY
3) Selection sort by PRIORITY  (1 = highest)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    Add,
    Remove,
    List,
    Sort,
    Find,
    Quit,
}

impl MenuChoice {
    fn parse(line: &str) -> Option<Self> {
        match line.trim() {
            "1" => Some(Self::Add),
            "2" => Some(Self::Remove),
            "3" => Some(Self::List),
            "4" => Some(Self::Sort),
            "5" => Some(Self::Find),
            "0" => Some(Self::Quit),
            _ => None,
        }
    }
}

fn parse_sort_key(line: &str) -> Option<SortKey> {
    match line.trim() {
        "1" => Some(SortKey::Name),
        "2" => Some(SortKey::Category),
        "3" => Some(SortKey::Priority),
        _ => None,
    }
}

enum Flow {
    Continue,
    Exit,
}

/// Name and category limits applied while reading input.
#[derive(Debug, Clone, Copy)]
pub struct FieldLimits {
    pub name: usize,
    pub category: usize,
}

impl From<&TowerConfig> for FieldLimits {
    fn from(config: &TowerConfig) -> Self {
        Self {
            name: config.name_max_len,
            category: config.category_max_len,
        }
    }
}

pub struct Console<R, W> {
    api: TowerApi,
    limits: FieldLimits,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(api: TowerApi, limits: FieldLimits, input: R, output: W) -> Self {
        Self {
            api,
            limits,
            input,
            output,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        writeln!(
            self.output,
            "{}",
            "=== Rescue Tower Assembly ===".bold()
        )?;
        writeln!(
            self.output,
            "Organize the components, pick an algorithm and find the key component."
        )?;

        loop {
            writeln!(self.output, "{}", MENU)?;
            let Some(line) = ask(&mut self.input, &mut self.output, "Choose an option: ")? else {
                break;
            };

            let flow = match MenuChoice::parse(&line) {
                Some(MenuChoice::Quit) => Flow::Exit,
                Some(choice) => {
                    debug!(?choice, "menu choice");
                    self.dispatch(choice)?
                }
                None => {
                    writeln!(self.output, "{}", "Invalid option. Try again.".yellow())?;
                    Flow::Continue
                }
            };
            if let Flow::Exit = flow {
                break;
            }
        }

        writeln!(self.output, "Closing the tower kit. Good luck out there!")?;
        Ok(())
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    fn dispatch(&mut self, choice: MenuChoice) -> Result<Flow> {
        match choice {
            MenuChoice::Add => self.handle_add(),
            MenuChoice::Remove => self.handle_remove(),
            MenuChoice::List => {
                self.show_list()?;
                Ok(Flow::Continue)
            }
            MenuChoice::Sort => self.handle_sort(),
            MenuChoice::Find => self.handle_find(),
            MenuChoice::Quit => Ok(Flow::Exit),
        }
    }

    fn handle_add(&mut self) -> Result<Flow> {
        let store = self.api.store();
        if store.is_full() {
            let full = TowerError::Full {
                capacity: store.capacity(),
            };
            write!(self.output, "\n{}", render_error(&full))?;
            return Ok(Flow::Continue);
        }
        writeln!(
            self.output,
            "\nNew record ({}/{})",
            store.len() + 1,
            store.capacity()
        )?;

        let Some(name) = ask_text(&mut self.input, &mut self.output, "Name: ", self.limits.name)?
        else {
            return Ok(Flow::Exit);
        };
        let Some(category) = ask_text(
            &mut self.input,
            &mut self.output,
            "Category (control, support, propulsion, ...): ",
            self.limits.category,
        )?
        else {
            return Ok(Flow::Exit);
        };
        let Some(priority) = ask_priority(&mut self.input, &mut self.output)? else {
            return Ok(Flow::Exit);
        };

        let outcome = self.api.add_record(&name, &category, priority);
        self.settle(outcome)?;
        self.show_list()?;
        Ok(Flow::Continue)
    }

    fn handle_remove(&mut self) -> Result<Flow> {
        if self.api.store().is_empty() {
            writeln!(self.output, "\nNo records to remove.")?;
            return Ok(Flow::Continue);
        }

        let Some(name) = ask_text(
            &mut self.input,
            &mut self.output,
            "\nName of the record to remove: ",
            self.limits.name,
        )?
        else {
            return Ok(Flow::Exit);
        };

        let outcome = self.api.remove_record(&name);
        self.settle(outcome)?;
        self.show_list()?;
        Ok(Flow::Continue)
    }

    fn handle_sort(&mut self) -> Result<Flow> {
        if self.api.store().is_empty() {
            writeln!(self.output, "\nNo records to sort.")?;
            return Ok(Flow::Continue);
        }

        writeln!(self.output, "{}", SORT_MENU)?;
        let Some(line) = ask(&mut self.input, &mut self.output, "Choice: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(key) = parse_sort_key(&line) else {
            writeln!(self.output, "{}", "Invalid option.".yellow())?;
            return Ok(Flow::Continue);
        };

        let outcome = self.api.sort_records(key);
        if let Some(result) = self.settle(outcome)? {
            if let Some(report) = &result.sort_report {
                write!(self.output, "{}", render_sort_report(report))?;
            }
            write!(
                self.output,
                "{}",
                render_records(&result.listed_records, result.status)
            )?;
        }
        Ok(Flow::Continue)
    }

    fn handle_find(&mut self) -> Result<Flow> {
        let store = self.api.store();
        if store.is_empty() {
            writeln!(self.output, "\nNo records to search.")?;
            return Ok(Flow::Continue);
        }
        if store.last_order() != Order::ByName {
            writeln!(
                self.output,
                "\n{}",
                "Binary search needs the records sorted by NAME.".yellow()
            )?;
            writeln!(
                self.output,
                "Sort by NAME (bubble sort) before searching. Current order: {}.",
                store.last_order()
            )?;
            return Ok(Flow::Continue);
        }

        let Some(query) = ask_text(
            &mut self.input,
            &mut self.output,
            "\nName of the key component: ",
            self.limits.name,
        )?
        else {
            return Ok(Flow::Exit);
        };

        let outcome = self.api.locate_record(&query);
        if let Some(result) = self.settle(outcome)? {
            if let Some(located) = &result.located {
                write!(self.output, "{}", render_located(located))?;
            }
        }
        Ok(Flow::Continue)
    }

    fn show_list(&mut self) -> Result<()> {
        let result = self.api.list_records()?;
        write!(
            self.output,
            "{}",
            render_records(&result.listed_records, result.status)
        )?;
        Ok(())
    }

    /// Print a command's messages, or its error when the error is one the
    /// user can act on. Anything else is passed up.
    fn settle(&mut self, outcome: Result<CmdResult>) -> Result<Option<CmdResult>> {
        match outcome {
            Ok(result) => {
                write!(self.output, "{}", render_messages(&result.messages))?;
                Ok(Some(result))
            }
            Err(
                e @ (TowerError::Full { .. }
                | TowerError::NotFound { .. }
                | TowerError::PreconditionViolated { .. }),
            ) => {
                write!(self.output, "{}", render_error(&e))?;
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }
}
