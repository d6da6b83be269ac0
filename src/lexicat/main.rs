use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use lexicat::api::{CmdMessage, LexicatApi, MessageLevel};
use lexicat::category::Category;
use lexicat::config::LexicatConfig;
use lexicat::error::Result;
use lexicat::term::Term;
use lexicat::term_list::TermList;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

mod args;
use args::Cli;

const MENU_ATTEMPTS: usize = 3;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: LexicatApi,
    words_per_line: usize,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context(&cli)?;

    if let Some(path) = &cli.file {
        match ctx.api.load_file(path) {
            Ok(result) => print_messages(&result.messages),
            Err(e) => println!("{}", format!("Could not load '{}': {}", path.display(), e).red()),
        }
    }

    menu_loop(&mut ctx)
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let config = LexicatConfig::load(config_dir()).unwrap_or_default();
    let words_per_line = cli
        .words_per_line
        .unwrap_or_else(|| config.words_per_line())
        .max(1);

    Ok(AppContext {
        api: LexicatApi::new(),
        words_per_line,
    })
}

fn config_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("LEXICAT_CONFIG_DIR") {
        return PathBuf::from(dir);
    }
    ProjectDirs::from("com", "lexicat", "lexicat")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

fn menu_loop(ctx: &mut AppContext) -> Result<()> {
    loop {
        print_main_menu();
        let choice = read_choice(9)?;
        if choice == 0 {
            if confirm_exit()? {
                println!("\nGoodbye.");
                return Ok(());
            }
            println!("\nReturning to the menu...\n");
            continue;
        }
        perform(ctx, choice)?;
        println!("Returning to the menu...\n");
    }
}

fn perform(ctx: &mut AppContext, choice: usize) -> Result<()> {
    match choice {
        1 => handle_list(ctx),
        2 => handle_add(ctx),
        3 => handle_remove(ctx),
        4 => handle_clear(ctx),
        5 => handle_modify(ctx),
        6 => handle_search(ctx),
        7 => handle_starting_with(ctx),
        8 => handle_load(ctx),
        9 => handle_save(ctx),
        _ => Ok(()),
    }
}

fn print_main_menu() {
    println!("===========================");
    println!("{}", "Lexicat Vocabulary Center".bold());
    println!("===========================");
    println!("1. Print all categories");
    println!("2. Add new categories");
    println!("3. Remove a category");
    println!("4. Clear a category");
    println!("5. Modify a category");
    println!("6. Search all categories for a word");
    println!("7. Show all words starting with a letter");
    println!("8. Load from a text file");
    println!("9. Save to a text file");
    println!("0. Exit");
    println!("===========================");
}

fn handle_list(ctx: &mut AppContext) -> Result<()> {
    println!("\n*** All categories ***");
    let result = ctx.api.list_categories()?;
    print_categories(&result.listed, ctx.words_per_line)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_add(ctx: &mut AppContext) -> Result<()> {
    println!("\n*** Adding new categories ***");
    let mut names = Vec::new();
    loop {
        let name = prompt_term("Category name (press ENTER to stop): ")?;
        if name.is_empty() {
            break;
        }
        names.push(name);
    }
    let result = ctx.api.add_categories(&names)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_remove(ctx: &mut AppContext) -> Result<()> {
    println!("\n*** Removing a category ***");
    let name = prompt_term("Category to remove (press ENTER to cancel): ")?;
    if name.is_empty() {
        return Ok(());
    }
    if !confirm(&format!("Remove the category '{}'? (Y/N): ", name))? {
        println!("Removal cancelled.");
        return Ok(());
    }
    let result = ctx.api.remove_category(&name)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_clear(ctx: &mut AppContext) -> Result<()> {
    println!("\n*** Clearing a category ***");
    let name = prompt_term("Category to clear (press ENTER to cancel): ")?;
    if name.is_empty() {
        return Ok(());
    }
    if !ctx.api.has_category(&name) {
        println!("'{}' could not be found.", name);
        return Ok(());
    }
    if !confirm(&format!("Clear every word in '{}'? (Y/N): ", name))? {
        println!("Clearing cancelled.");
        return Ok(());
    }
    let result = ctx.api.clear_category(&name)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_modify(ctx: &mut AppContext) -> Result<()> {
    println!("\n*** Modifying a category ***");
    let mut name = prompt_term("Category to modify (press ENTER to cancel): ")?;
    if name.is_empty() {
        return Ok(());
    }
    if !ctx.api.has_category(&name) {
        println!("'{}' could not be found.", name);
        return Ok(());
    }

    loop {
        print_category_menu(&name);
        match read_choice(8)? {
            0 => return Ok(()),
            1 => {
                if let Some(category) = ctx.api.category(&name) {
                    print_word_grid(category.terms(), ctx.words_per_line)?;
                }
            }
            2 => {
                let mut words = Vec::new();
                loop {
                    let word = prompt_term("Word to insert (press ENTER to stop): ")?;
                    if word.is_empty() {
                        break;
                    }
                    words.push(word);
                }
                let result = ctx.api.insert_words(&name, &words)?;
                print_messages(&result.messages);
            }
            3 => {
                let word = prompt_term("Word to remove (press ENTER to cancel): ")?;
                if !word.is_empty() {
                    let result = ctx.api.remove_word(&name, &word)?;
                    print_messages(&result.messages);
                }
            }
            4 => {
                let new_name = prompt_term("New category name (press ENTER to cancel): ")?;
                if !new_name.is_empty() {
                    let result = ctx.api.rename_category(&name, &new_name)?;
                    if result.affected > 0 {
                        name = new_name;
                    }
                    print_messages(&result.messages);
                }
            }
            5 => {
                let result = ctx.api.clear_category(&name)?;
                print_messages(&result.messages);
            }
            6 => {
                if let Some(letter) = prompt_letter()? {
                    if let Some(category) = ctx.api.category(&name) {
                        let matches = category.starting_with(letter);
                        if matches.is_empty() {
                            println!("No words beginning with '{}' in '{}'.", letter, name);
                        } else {
                            print_word_grid(&matches, ctx.words_per_line)?;
                        }
                    }
                }
            }
            7 => {
                let path = prompt_term("File of words to load (press ENTER to cancel): ")?;
                if !path.is_empty() {
                    match ctx.api.load_word_file(&name, Path::new(path.as_str())) {
                        Ok(result) => print_messages(&result.messages),
                        Err(e) => {
                            println!("{}", format!("Could not load '{}': {}", path, e).red())
                        }
                    }
                }
            }
            8 => {
                let path = prompt_term("File to save words to (press ENTER to cancel): ")?;
                if !path.is_empty() {
                    match ctx.api.save_word_file(&name, Path::new(path.as_str())) {
                        Ok(result) => print_messages(&result.messages),
                        Err(e) => {
                            println!("{}", format!("Could not save '{}': {}", path, e).red())
                        }
                    }
                }
            }
            _ => {}
        }
    }
}

fn print_category_menu(name: &Term) {
    println!("---------------------------");
    println!("{}", format!("Category: {}", name).bold());
    println!("---------------------------");
    println!("1. Print the words");
    println!("2. Insert words");
    println!("3. Remove a word");
    println!("4. Change the category name");
    println!("5. Clear the category");
    println!("6. Show words starting with a letter");
    println!("7. Load words from a text file");
    println!("8. Save words to a text file");
    println!("0. Back to the main menu");
    println!("---------------------------");
}

fn handle_search(ctx: &mut AppContext) -> Result<()> {
    println!("\n*** Searching all categories for a word ***");
    let word = prompt_term("Word to search for (press ENTER to cancel): ")?;
    if word.is_empty() {
        return Ok(());
    }
    let result = ctx.api.search_word(&word)?;
    if result.hits.is_empty() {
        println!("No categories to search.");
    }
    for hit in &result.hits {
        if hit.found {
            println!("Category '{}' has the word '{}'", hit.category, word);
        } else {
            println!("Category '{}' does not have the word '{}'", hit.category, word);
        }
    }
    Ok(())
}

fn handle_starting_with(ctx: &mut AppContext) -> Result<()> {
    println!("\n*** Showing words starting with a given letter ***");
    let Some(letter) = prompt_letter()? else {
        return Ok(());
    };
    let result = ctx.api.words_starting_with(letter)?;
    if result.listed.is_empty() {
        println!("No categories to search.");
    }
    for category in &result.listed {
        if category.is_empty() {
            println!("No words beginning with '{}' in '{}'.", letter, category.name());
        } else {
            println!("Words beginning with '{}' in '{}':", letter, category.name());
            print_word_grid(category.terms(), ctx.words_per_line)?;
        }
    }
    Ok(())
}

fn handle_load(ctx: &mut AppContext) -> Result<()> {
    println!("\n*** Loading categories from a text file ***");
    let path = prompt_term("Path to load from (press ENTER to cancel): ")?;
    if path.is_empty() {
        return Ok(());
    }
    match ctx.api.load_file(Path::new(path.as_str())) {
        Ok(result) => print_messages(&result.messages),
        Err(e) => println!("{}", format!("Could not load '{}': {}", path, e).red()),
    }
    Ok(())
}

fn handle_save(ctx: &mut AppContext) -> Result<()> {
    println!("\n*** Saving categories to a text file ***");
    let path = prompt_term("Path to save to (press ENTER to cancel): ")?;
    if path.is_empty() {
        return Ok(());
    }
    match ctx.api.save_file(Path::new(path.as_str())) {
        Ok(result) => print_messages(&result.messages),
        Err(e) => println!("{}", format!("Could not save '{}': {}", path, e).red()),
    }
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

fn print_categories(categories: &[Category], words_per_line: usize) -> Result<()> {
    for category in categories {
        println!("{}", category.name().as_str().bold());
        print_word_grid(category.terms(), words_per_line)?;
        println!();
    }
    Ok(())
}

fn print_word_grid(terms: &TermList, words_per_line: usize) -> Result<()> {
    let mut stdout = io::stdout().lock();
    let printed = terms.print(&mut stdout, words_per_line)?;
    if printed == 0 {
        println!("(no words)");
    }
    Ok(())
}

/// Reads a menu choice in `0..=max`, allowing [`MENU_ATTEMPTS`] tries
/// before giving up and answering 0. End of input also answers 0 so piped
/// sessions terminate.
fn read_choice(max: usize) -> Result<usize> {
    for attempt in 0..MENU_ATTEMPTS {
        if attempt == 0 {
            print!("Enter your choice: ");
        } else {
            print!("Please enter a valid choice: ");
        }
        io::stdout().flush()?;

        let Some(line) = read_trimmed_line()? else {
            return Ok(0);
        };
        if let Ok(choice) = line.parse::<usize>() {
            if choice <= max {
                return Ok(choice);
            }
        }

        let remaining = MENU_ATTEMPTS - attempt - 1;
        if remaining > 0 {
            println!(
                "{}",
                format!("Bad input ({} attempt(s) remaining).", remaining).yellow()
            );
        }
    }
    println!("{}", "No attempts remaining.".yellow());
    Ok(0)
}

fn read_trimmed_line() -> Result<Option<String>> {
    let mut line = String::new();
    let read = io::stdin().lock().read_line(&mut line)?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn prompt_term(label: &str) -> Result<Term> {
    print!("{}", label);
    io::stdout().flush()?;
    let mut term = Term::new();
    term.read_line(&mut io::stdin().lock())?;
    Ok(term)
}

fn prompt_letter() -> Result<Option<char>> {
    let input = prompt_term("First letter (press ENTER to cancel): ")?;
    Ok(input.first_char())
}

fn confirm(question: &str) -> Result<bool> {
    print!("{}", question);
    io::stdout().flush()?;
    match read_trimmed_line()? {
        Some(answer) => Ok(answer.eq_ignore_ascii_case("y")),
        None => Ok(false),
    }
}

fn confirm_exit() -> Result<bool> {
    print!("\nAre you sure you want to exit? (Y/N): ");
    io::stdout().flush()?;
    match read_trimmed_line()? {
        // End of input means nobody can answer; leave instead of looping.
        Some(answer) => Ok(answer.eq_ignore_ascii_case("y")),
        None => Ok(true),
    }
}
