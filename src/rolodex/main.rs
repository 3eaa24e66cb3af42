use clap::Parser;
use colored::*;
use rolodex::api::{CmdMessage, DirectoryApi, MessageLevel};
use rolodex::error::{Result, RolodexError};
use rolodex::model::Record;
use std::io::{self, BufRead, Write};
use unicode_width::UnicodeWidthStr;

mod args;
use args::Cli;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: DirectoryApi,
    input: io::Lines<io::StdinLock<'static>>,
    quiet: bool,
}

impl AppContext {
    fn next_line(&mut self) -> Result<Option<String>> {
        match self.input.next() {
            Some(line) => Ok(Some(line?)),
            None => Ok(None),
        }
    }

    /// Prompts until a non-blank line arrives. `None` means stdin closed.
    fn prompt_line(&mut self, prompt: &str) -> Result<Option<String>> {
        loop {
            print!("{}", prompt);
            io::stdout().flush()?;

            let Some(line) = self.next_line()? else {
                return Ok(None);
            };
            let value = line.trim().to_string();
            if !value.is_empty() {
                return Ok(Some(value));
            }
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = AppContext {
        api: DirectoryApi::new(),
        input: io::stdin().lock().lines(),
        quiet: cli.quiet,
    };

    if ctx.quiet {
        print_menu();
    }

    loop {
        if !ctx.quiet {
            print_menu();
        }
        print!("Enter a command (q to quit): ");
        io::stdout().flush()?;

        let Some(line) = ctx.next_line()? else {
            break;
        };

        match line.trim() {
            "a" => show_all(&ctx.api)?,
            "d" => handle_delete(&mut ctx)?,
            "f" => handle_change_first(&mut ctx)?,
            "l" => handle_change_last(&mut ctx)?,
            "n" => handle_add(&mut ctx)?,
            "p" => handle_change_phone(&mut ctx)?,
            "s" => handle_select(&mut ctx)?,
            "q" => break,
            "" => {}
            other => print_message(&CmdMessage::warning(format!(
                "Unknown command: {}. Choose one of the letters from the menu.",
                other
            ))),
        }
    }

    Ok(())
}

fn handle_add(ctx: &mut AppContext) -> Result<()> {
    let Some(first) = ctx.prompt_line("Add first name: ")? else {
        return Ok(());
    };
    let Some(last) = ctx.prompt_line("Add last name: ")? else {
        return Ok(());
    };

    loop {
        let Some(number) = ctx.prompt_line("Enter phone number: ")? else {
            return Ok(());
        };
        if number == "q" {
            print_message(&CmdMessage::info("Cancelled."));
            return Ok(());
        }
        if number == "a" {
            show_all(&ctx.api)?;
            continue;
        }

        match ctx.api.add_record(&first, &last, &number) {
            Ok(result) => {
                print_messages(&result.messages);
                return Ok(());
            }
            Err(err) if phone_retryable(&err) => {
                print_message(&CmdMessage::error(err.to_string()));
                println!("Enter another number, 'a' to show all records, or 'q' to cancel.");
            }
            Err(err) => return Err(err),
        }
    }
}

fn handle_delete(ctx: &mut AppContext) -> Result<()> {
    match ctx.api.delete_current() {
        Ok(result) => {
            print_messages(&result.messages);
            show_all(&ctx.api)
        }
        Err(RolodexError::NoCurrentRecord) => {
            print_message(&CmdMessage::warning("No current record."));
            Ok(())
        }
        Err(err) => Err(err),
    }
}

fn handle_change_first(ctx: &mut AppContext) -> Result<()> {
    if ctx.api.current().is_none() {
        print_message(&CmdMessage::warning("No current record."));
        return Ok(());
    }

    let Some(value) = ctx.prompt_line("Enter first name: ")? else {
        return Ok(());
    };
    let result = ctx.api.change_first_name(&value)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_change_last(ctx: &mut AppContext) -> Result<()> {
    if ctx.api.current().is_none() {
        print_message(&CmdMessage::warning("No current record."));
        return Ok(());
    }

    let Some(value) = ctx.prompt_line("Enter last name: ")? else {
        return Ok(());
    };
    let result = ctx.api.change_last_name(&value)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_change_phone(ctx: &mut AppContext) -> Result<()> {
    if ctx.api.current().is_none() {
        print_message(&CmdMessage::warning("No current record."));
        return Ok(());
    }

    loop {
        let Some(number) = ctx.prompt_line("Enter phone number: ")? else {
            return Ok(());
        };
        if number == "q" {
            print_message(&CmdMessage::info("Cancelled."));
            return Ok(());
        }
        if number == "a" {
            show_all(&ctx.api)?;
            continue;
        }

        match ctx.api.change_phone_number(&number) {
            Ok(result) => {
                print_messages(&result.messages);
                return Ok(());
            }
            Err(err) if phone_retryable(&err) => {
                print_message(&CmdMessage::error(err.to_string()));
                println!("Enter another number, 'a' to show all records, or 'q' to cancel.");
            }
            Err(err) => return Err(err),
        }
    }
}

fn handle_select(ctx: &mut AppContext) -> Result<()> {
    if ctx.api.is_empty() {
        print_message(&CmdMessage::warning("No records in the directory. Add one first."));
        return Ok(());
    }

    show_all(&ctx.api)?;

    let Some(first) = ctx.prompt_line("Enter first name: ")? else {
        return Ok(());
    };
    let Some(last) = ctx.prompt_line("Enter last name: ")? else {
        return Ok(());
    };

    loop {
        let Some(number) = ctx.prompt_line("Enter phone number: ")? else {
            return Ok(());
        };
        if number == "q" {
            print_message(&CmdMessage::info("Cancelled."));
            return Ok(());
        }

        match ctx.api.select_record(&first, &last, &number) {
            Ok(result) => {
                print_messages(&result.messages);
                return Ok(());
            }
            Err(err @ RolodexError::InvalidPhoneFormat(_)) => {
                print_message(&CmdMessage::error(err.to_string()));
                println!("Enter another number or 'q' to cancel.");
            }
            Err(RolodexError::NotFound) => {
                print_message(&CmdMessage::error("No matches."));
                return Ok(());
            }
            Err(err) => return Err(err),
        }
    }
}

fn phone_retryable(err: &RolodexError) -> bool {
    matches!(
        err,
        RolodexError::InvalidPhoneFormat(_) | RolodexError::DuplicatePhoneNumber(_)
    )
}

fn show_all(api: &DirectoryApi) -> Result<()> {
    let result = api.list_records()?;
    print_records(&result.listed_records);
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        print_message(message);
    }
}

fn print_message(message: &CmdMessage) {
    match message.level {
        MessageLevel::Info => println!("{}", message.content.dimmed()),
        MessageLevel::Success => println!("{}", message.content.green()),
        MessageLevel::Warning => println!("{}", message.content.yellow()),
        MessageLevel::Error => println!("{}", message.content.red()),
    }
}

const COLUMN_WIDTH: usize = 20;

fn print_records(records: &[Record]) {
    if records.is_empty() {
        println!("No records in the directory.");
        return;
    }

    println!(
        "{}{}{}",
        pad_column("First Name"),
        pad_column("Last Name"),
        "Phone Number"
    );
    println!(
        "{} {} {}",
        "-".repeat(COLUMN_WIDTH - 1),
        "-".repeat(COLUMN_WIDTH - 1),
        "-".repeat(COLUMN_WIDTH - 1)
    );

    for record in records {
        println!(
            "{}{}{}",
            pad_column(&record.first_name),
            pad_column(&record.last_name),
            record.phone_number.as_str()
        );
    }
}

fn pad_column(value: &str) -> String {
    let padding = COLUMN_WIDTH.saturating_sub(value.width());
    format!("{}{}", value, " ".repeat(padding))
}

fn print_menu() {
    println!();
    println!("A program to keep a phone directory:");
    println!();
    println!("  a  Show all records");
    println!("  d  Delete the current record");
    println!("  f  Change the first name in the current record");
    println!("  l  Change the last name in the current record");
    println!("  n  Add a new record");
    println!("  p  Change the phone number in the current record");
    println!("  q  Quit");
    println!("  s  Select a record to become the current record");
    println!();
}
