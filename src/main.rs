use clap::Parser;
use snipbox::application::{
    doctor, init, ConfigService, ExchangeService, QueryService, SnippetRepository,
};
use snipbox::cli::{
    format_doctor_report, format_language_list, format_snippet_detail, format_snippet_list, Cli,
    Commands,
};
use snipbox::domain::query::ALL_LANGUAGES;
use snipbox::domain::{Language, SnippetForm};
use snipbox::error::{Result, SnipboxError};
use snipbox::infrastructure::{Config, EditorSession, FileSystemLibrary, Library, SnippetStore};
use std::io::{IsTerminal, Read};
use std::path::PathBuf;
use std::str::FromStr;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = snipbox::logging::init() {
        eprintln!("Warning: {}", e);
    }

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Init { path, language } => {
            let language = Language::from_str(&language).map_err(SnipboxError::Config)?;
            init::init(&path, language)?;
            println!("Initialized snipbox library at {}", path.display());
            println!("Default language: {}", language);
            Ok(())
        }
        Commands::Add {
            title,
            language,
            description,
            tags,
            code,
            file,
            edit,
        } => {
            let library = FileSystemLibrary::discover()?;
            let config = library.load_config()?;

            let title = require_title(title)?;
            let language = normalize_language(&language.unwrap_or(config.default_language.clone()));
            let code = match resolve_code(&library, &config, &language, code, file, edit, "")? {
                Some(code) => code,
                None => read_piped_stdin()?,
            };

            let form = SnippetForm::new(title, code, language)
                .with_description(description)
                .with_tags(tags);
            let snippet = SnippetRepository::new(library.store()).create(form);
            println!("{}", snippet.id);
            Ok(())
        }
        Commands::Edit {
            id,
            title,
            language,
            description,
            tags,
            clear_tags,
            code,
            file,
            edit,
        } => {
            let library = FileSystemLibrary::discover()?;
            let config = library.load_config()?;
            let repository = SnippetRepository::new(library.store());
            let existing = repository
                .get(&id)
                .ok_or_else(|| SnipboxError::SnippetNotFound(id.clone()))?;

            let mut form = existing.to_form();
            if let Some(title) = title {
                form.title = require_title(title)?;
            }
            if let Some(language) = language {
                form.language = normalize_language(&language);
            }
            if let Some(description) = description {
                form.description = description;
            }
            if clear_tags {
                form.tags.clear();
            } else if !tags.is_empty() {
                form = form.with_tags(tags);
            }
            if let Some(code) =
                resolve_code(&library, &config, &form.language, code, file, edit, &existing.code)?
            {
                form.code = code;
            }

            repository.update(existing.with_form(form));
            println!("Updated {}", id);
            Ok(())
        }
        Commands::Rm { id } => {
            let library = FileSystemLibrary::discover()?;
            let repository = SnippetRepository::new(library.store());
            if repository.get(&id).is_none() {
                return Err(SnipboxError::SnippetNotFound(id));
            }

            repository.delete(&id);
            println!("Deleted {}", id);
            Ok(())
        }
        Commands::Show { id, code_only } => {
            let library = FileSystemLibrary::discover()?;
            let snippet = SnippetRepository::new(library.store())
                .get(&id)
                .ok_or(SnipboxError::SnippetNotFound(id))?;

            if code_only {
                print!("{}", snippet.code);
            } else {
                print!("{}", format_snippet_detail(&snippet));
            }
            Ok(())
        }
        Commands::List {
            search,
            language,
            recent,
            limit,
        } => {
            let library = FileSystemLibrary::discover()?;
            let queries = QueryService::new(library.store());
            let language = if language.trim().eq_ignore_ascii_case(ALL_LANGUAGES) {
                ALL_LANGUAGES.to_string()
            } else {
                normalize_language(&language)
            };

            let mut snippets = if recent {
                queries.recent(&search, &language)
            } else {
                queries.view(&search, &language)
            };
            if let Some(n) = limit {
                snippets.truncate(n);
            }

            println!("{}", format_snippet_list(&snippets).trim_end());
            Ok(())
        }
        Commands::Export { output } => {
            let library = FileSystemLibrary::discover()?;
            let store = library.store();
            let exchange = ExchangeService::new(&store);

            match output {
                Some(path) => {
                    let written = exchange.export_to(&path)?;
                    println!(
                        "Exported {} snippets to {}",
                        store.load().len(),
                        written.display()
                    );
                }
                None => println!("{}", exchange.export()?),
            }
            Ok(())
        }
        Commands::Import { path } => {
            let library = FileSystemLibrary::discover()?;
            let text = std::fs::read_to_string(&path)?;
            let report = ExchangeService::new(library.store()).import_with_report(&text)?;

            println!("Imported {} snippets", report.imported);
            if report.skipped > 0 {
                println!("Skipped {} invalid records", report.skipped);
            }
            Ok(())
        }
        Commands::Languages => {
            print!("{}", format_language_list());
            Ok(())
        }
        Commands::Config { key, value, list } => {
            let library = FileSystemLibrary::discover()?;
            let service = ConfigService::new(library);

            if list {
                let config = service.list()?;
                println!("default_language = {}", config.default_language);
                println!("editor = {}", config.editor);
                println!("created = {}", config.created.to_rfc3339());
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                    Ok(())
                } else {
                    let val = service.get(&k)?;
                    println!("{}", val);
                    Ok(())
                }
            } else {
                println!("Usage: snipbox config [--list | <key> [<value>]]");
                println!("Valid keys: default_language, editor, created");
                Ok(())
            }
        }
        Commands::Doctor => {
            let library = FileSystemLibrary::discover()?;
            let report = doctor::check(&library)?;
            print!("{}", format_doctor_report(&report));
            Ok(())
        }
    }
}

fn require_title(title: String) -> Result<String> {
    if title.trim().is_empty() {
        return Err(SnipboxError::InvalidInput(
            "title must not be empty".to_string(),
        ));
    }
    Ok(title)
}

/// Recognized languages are stored by value ("C#" becomes "csharp"); anything
/// else is kept as free text.
fn normalize_language(raw: &str) -> String {
    match Language::from_str(raw) {
        Ok(language) => language.value().to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Code from `--code`, `--file` or the editor, in that order
fn resolve_code(
    library: &FileSystemLibrary,
    config: &Config,
    language: &str,
    code: Option<String>,
    file: Option<PathBuf>,
    edit: bool,
    initial: &str,
) -> Result<Option<String>> {
    if let Some(code) = code {
        return Ok(Some(code));
    }
    if let Some(file) = file {
        return Ok(Some(std::fs::read_to_string(file)?));
    }
    if edit {
        let editor = EditorSession::new(config.get_editor());
        return editor
            .edit_text(&library.snipbox_dir(), language, initial)
            .map(Some);
    }
    Ok(None)
}

/// Code piped on stdin; empty when stdin is a terminal
fn read_piped_stdin() -> Result<String> {
    let mut stdin = std::io::stdin();
    if stdin.is_terminal() {
        return Ok(String::new());
    }

    let mut code = String::new();
    stdin.read_to_string(&mut code)?;
    Ok(code)
}
