//! Context setup, the menu loop and one handler per menu entry.
//!
//! Handlers return `Ok(Flow::Quit)` when input runs out so the loop can wind
//! down exactly like an explicit exit.

use super::logging::init_logging;
use super::prompt::Prompter;
use super::render::{
    render_departments, render_employee_table, render_headcount, render_messages,
    render_total_salary,
};
use super::setup::Cli;
use clap::Parser;
use colored::Colorize;
use roster::api::{CmdMessage, RosterApi};
use roster::commands::EMPTY_REGISTRY_MESSAGE;
use roster::config::{resolve_config_dir, RosterConfig};
use roster::error::{RosterError, Result};
use roster::model::{Department, Employee, EmployeeId};
use roster::validation::{parse_department, parse_employee_id, parse_salary, validate_name};
use std::io::{BufRead, Write};
use tracing::{debug, info};

const MENU: &str = "[1] Add employee
[2] Remove employee
[3] Display all employees
[4] Assign employee to a department
[5] Show total salary
[6] Department summary
[7] Exit
";

const BANNER_RULE: &str = "---------------------------------------";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    Add,
    Remove,
    List,
    Assign,
    TotalSalary,
    Summary,
    Exit,
}

impl MenuChoice {
    fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::Add),
            "2" => Some(MenuChoice::Remove),
            "3" => Some(MenuChoice::List),
            "4" => Some(MenuChoice::Assign),
            "5" => Some(MenuChoice::TotalSalary),
            "6" => Some(MenuChoice::Summary),
            "7" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = load_config(&cli)?;
    if cli.no_color || !config.color {
        colored::control::set_override(false);
    }

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut session = Session::new(RosterApi::new(), config, stdin.lock(), stdout.lock());
    session.run()
}

fn load_config(cli: &Cli) -> Result<RosterConfig> {
    match resolve_config_dir(cli.config_dir.clone()) {
        Some(dir) => {
            debug!(dir = %dir.display(), "loading config");
            RosterConfig::load(&dir)
        }
        None => Ok(RosterConfig::default()),
    }
}

struct Session<R, W> {
    api: RosterApi,
    config: RosterConfig,
    prompter: Prompter<R, W>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    fn new(api: RosterApi, config: RosterConfig, input: R, output: W) -> Self {
        Self {
            api,
            config,
            prompter: Prompter::new(input, output),
        }
    }

    fn run(&mut self) -> Result<()> {
        info!("session started");
        loop {
            self.prompter.say(&format!(
                "\n{}\n Welcome to the Employee Management System!\n What would you like to do?\n{}",
                BANNER_RULE, BANNER_RULE
            ))?;
            let Some(line) = self.prompter.ask(MENU)? else {
                break;
            };

            let flow = match MenuChoice::parse(&line) {
                Some(MenuChoice::Add) => self.handle_add()?,
                Some(MenuChoice::Remove) => self.handle_remove()?,
                Some(MenuChoice::List) => self.handle_list()?,
                Some(MenuChoice::Assign) => self.handle_assign()?,
                Some(MenuChoice::TotalSalary) => self.handle_total_salary()?,
                Some(MenuChoice::Summary) => self.handle_summary()?,
                Some(MenuChoice::Exit) => {
                    self.prompter.say("\nExiting...")?;
                    Flow::Quit
                }
                None => {
                    self.prompter
                        .say(&"Invalid input. Please try again.".yellow().to_string())?;
                    Flow::Continue
                }
            };
            if flow == Flow::Quit {
                break;
            }
        }
        self.farewell()
    }

    fn farewell(&mut self) -> Result<()> {
        if self.api.is_empty() {
            self.prompter.say("There are no employees.")?;
        } else {
            self.print_table()?;
        }
        info!(remaining = self.api.registry().len(), "session ended");
        Ok(())
    }

    fn handle_add(&mut self) -> Result<Flow> {
        self.prompter.say("Adding employee...\n")?;
        loop {
            let Some(employee) = self.read_new_employee()? else {
                return Ok(Flow::Quit);
            };
            let result = self.api.add_employee(employee)?;
            self.prompter.write(&render_messages(&result.messages))?;
            self.print_table()?;

            if !self.prompter.confirm("\nWould you like to add another employee?")? {
                return Ok(Flow::Continue);
            }
        }
    }

    fn read_new_employee(&mut self) -> Result<Option<Employee>> {
        let api = &self.api;
        let Some(id) = self.prompter.ask_until("Enter employee ID: ", |s| {
            let id = parse_employee_id(s)?;
            if api.employee_exists(id) {
                return Err(RosterError::DuplicateId(id));
            }
            Ok(id)
        })?
        else {
            return Ok(None);
        };
        let Some(first_name) = self
            .prompter
            .ask_until("Enter first name: ", |s| validate_name("First name", s))?
        else {
            return Ok(None);
        };
        let Some(last_name) = self
            .prompter
            .ask_until("Enter last name: ", |s| validate_name("Last name", s))?
        else {
            return Ok(None);
        };
        let Some(salary) = self.prompter.ask_until("Enter salary: ", parse_salary)? else {
            return Ok(None);
        };
        let Some(department) = self.read_department()? else {
            return Ok(None);
        };

        Ok(Some(Employee::new(
            id, first_name, last_name, salary, department,
        )))
    }

    fn read_department(&mut self) -> Result<Option<Department>> {
        let catalog = self.api.departments()?;
        let prompt = format!(
            "Enter department [0-{}] :\n{}",
            catalog.departments.len().saturating_sub(1),
            render_departments(&catalog.departments)
        );
        self.prompter.ask_until(&prompt, parse_department)
    }

    /// Asks for the id of an employee that is already registered.
    fn read_existing_id(&mut self, prompt: &str) -> Result<Option<EmployeeId>> {
        let api = &self.api;
        self.prompter.ask_until(prompt, |s| {
            let id = parse_employee_id(s)?;
            if !api.employee_exists(id) {
                return Err(RosterError::NotFound(id));
            }
            Ok(id)
        })
    }

    fn handle_remove(&mut self) -> Result<Flow> {
        loop {
            if self.api.is_empty() {
                self.prompter.say(&format!("\n{}", EMPTY_REGISTRY_MESSAGE))?;
                return Ok(Flow::Continue);
            }
            self.print_table()?;
            let Some(id) = self.read_existing_id("\nEnter employee ID to remove:  ")? else {
                return Ok(Flow::Quit);
            };
            let result = self.api.remove_employee(id)?;
            self.prompter.write(&render_messages(&result.messages))?;

            if !self
                .prompter
                .confirm("\nWould you like to remove another employee?")?
            {
                return Ok(Flow::Continue);
            }
        }
    }

    fn handle_list(&mut self) -> Result<Flow> {
        self.prompter.say("\nDisplaying all employees...")?;
        let result = self.api.list_employees()?;
        if !result.listed_employees.is_empty() {
            self.prompter.write(&render_employee_table(
                &result.listed_employees,
                &self.config,
            ))?;
        }
        self.prompter.write(&render_messages(&result.messages))?;
        Ok(Flow::Continue)
    }

    fn handle_assign(&mut self) -> Result<Flow> {
        self.prompter.say("\nAssigning employee to a department...")?;
        if self.api.is_empty() {
            self.prompter.say(EMPTY_REGISTRY_MESSAGE)?;
            return Ok(Flow::Continue);
        }
        loop {
            self.print_table()?;
            let Some(id) = self
                .prompter
                .ask_until("Enter employee ID to assign to a department: ", parse_employee_id)?
            else {
                return Ok(Flow::Quit);
            };

            // An unknown id ends this round instead of re-prompting.
            if self.api.employee_exists(id) {
                let Some(department) = self.read_department()? else {
                    return Ok(Flow::Quit);
                };
                let result = self.api.assign_department(id, department)?;
                self.prompter.write(&render_messages(&result.messages))?;
            } else {
                let missing = CmdMessage::error(RosterError::NotFound(id).to_string());
                self.prompter.write(&render_messages(&[missing]))?;
            }

            if !self
                .prompter
                .confirm("Do you want to assign another employee to a department?")?
            {
                return Ok(Flow::Continue);
            }
        }
    }

    fn handle_total_salary(&mut self) -> Result<Flow> {
        let result = self.api.total_salary()?;
        let total = result.total_salary.unwrap_or_default();
        self.prompter
            .write(&render_total_salary(total, &self.config))?;
        Ok(Flow::Continue)
    }

    fn handle_summary(&mut self) -> Result<Flow> {
        let result = self.api.summary()?;
        self.prompter.write(&render_headcount(&result.headcount))?;
        if let Some(total) = result.total_salary {
            self.prompter
                .write(&render_total_salary(total, &self.config))?;
        }
        self.prompter.write(&render_messages(&result.messages))?;
        Ok(Flow::Continue)
    }

    fn print_table(&mut self) -> Result<()> {
        let result = self.api.list_employees()?;
        self.prompter.write(&render_employee_table(
            &result.listed_employees,
            &self.config,
        ))
    }
}
