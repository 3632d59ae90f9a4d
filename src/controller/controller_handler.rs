use std::io::{BufRead, Write};

use log::{debug, info};

use crate::configuration::config::Config;
use crate::console::{render_menu, Console, MenuOption};
use crate::error_handling::types::*;
use crate::record_management::{RecordManager, RecordUpdate};
use crate::storage::file_storage::FileStorage;
use crate::storage::types::Record;

/// Interactive loop tying the operator console to the record manager.
///
/// Runs until the operator picks "Exit" or the input ends, whichever comes
/// first. Storage and console I/O failures end the loop with an error.
pub struct Controller<R: BufRead, W: Write> {
    manager: RecordManager,
    console: Console<R, W>,
}

impl<R: BufRead, W: Write> Controller<R, W> {
    pub fn new(config: Config, console: Console<R, W>) -> Result<Self, ControllerError> {
        config.validate()?;
        info!("Using store file {}", config.store_path.display());
        let storage = FileStorage::new(&config.store_path);
        Ok(Self::with_manager(RecordManager::new(Box::new(storage)), console))
    }

    pub fn with_manager(manager: RecordManager, console: Console<R, W>) -> Self {
        Self { manager, console }
    }

    pub fn run(&mut self) -> Result<(), ControllerError> {
        loop {
            self.console.say(render_menu().trim_end())?;
            let choice = match self.console.prompt("Select an option: ") {
                Ok(choice) => choice,
                Err(ConsoleError::EndOfInput) => {
                    info!("Input closed, leaving");
                    return Ok(());
                }
                Err(e) => return Err(e.into()),
            };

            let option = match choice.parse::<MenuOption>() {
                Ok(option) => option,
                Err(e) => {
                    debug!("{}", e);
                    self.console.say("Invalid option, please try again.\n")?;
                    continue;
                }
            };

            let outcome = match option {
                MenuOption::Add => self.add_record(),
                MenuOption::List => self.list_records(),
                MenuOption::Search => self.search_record(),
                MenuOption::Delete => self.delete_record(),
                MenuOption::Modify => self.modify_record(),
                MenuOption::Exit => {
                    self.console.say("Exiting...")?;
                    return Ok(());
                }
            };
            match outcome {
                Ok(()) => {}
                Err(ControllerError::ConsoleError(ConsoleError::EndOfInput)) => {
                    info!("Input closed in the middle of an operation, leaving");
                    return Ok(());
                }
                Err(e) => return Err(e),
            }
        }
    }

    pub fn into_output(self) -> W {
        self.console.into_output()
    }

    fn add_record(&mut self) -> Result<(), ControllerError> {
        let name = self.console.prompt("Name: ")?;
        let age = self.console.prompt("Age: ")?;
        let email = self.console.prompt("Email: ")?;
        self.manager.add(&Record::new(name, age, email))?;
        self.console.say("Record added successfully!\n")?;
        Ok(())
    }

    fn list_records(&mut self) -> Result<(), ControllerError> {
        let records = self.manager.list_all()?;
        if records.is_empty() {
            self.console.say("No records yet.\n")?;
            return Ok(());
        }
        for (i, record) in records.iter().enumerate() {
            self.console.say(format!("{}. {}", i + 1, record))?;
        }
        Ok(())
    }

    fn search_record(&mut self) -> Result<(), ControllerError> {
        let name = self.console.prompt("Enter the name to search: ")?;
        let found = self.manager.find_by_name(&name)?;
        if found.is_empty() {
            self.console.say("Record not found.\n")?;
            return Ok(());
        }
        for record in &found {
            self.console.say(record)?;
        }
        Ok(())
    }

    fn delete_record(&mut self) -> Result<(), ControllerError> {
        let name = self.console.prompt("Enter the name to delete: ")?;
        match self.manager.delete_by_name(&name)? {
            0 => self.console.say("Record not found.\n")?,
            1 => self.console.say("Record deleted successfully!\n")?,
            n => self
                .console
                .say(format!("{} records deleted successfully!\n", n))?,
        }
        Ok(())
    }

    fn modify_record(&mut self) -> Result<(), ControllerError> {
        let name = self
            .console
            .prompt("Enter the name of the record to modify: ")?;
        let console = &mut self.console;
        let updated = self.manager.modify_by_name(&name, |current| {
            console.say(format!("Record found: {}", current))?;
            let new_name = console.prompt(&format!("New name ({}): ", current.name))?;
            let new_age = console.prompt(&format!("New age ({}): ", current.age))?;
            let new_email = console.prompt(&format!("New email ({}): ", current.email))?;
            Ok(RecordUpdate::from_input(new_name, new_age, new_email))
        })?;

        match updated {
            Some(_) => self.console.say("Record modified successfully!\n")?,
            None => self.console.say("Record not found.\n")?,
        }
        Ok(())
    }
}
