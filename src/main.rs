use clap::{Parser, Subcommand, ValueEnum};
use ebook_designer::document::{Document, DocumentError, MoveDirection};
use ebook_designer::page::PageUpdate;
use ebook_designer::template::TemplateKind;
use ebook_designer::theme::Theme;
use ebook_designer::{config, import, output, render};
use std::path::{Path, PathBuf};
use tracing::Level;

#[derive(Parser)]
#[command(name = "ebook-designer")]
#[command(about = "Design ebooks from a catalog of page layouts")]
#[command(long_about = "\
Design ebooks from a catalog of page layouts

The book lives in a JSON document (book.json). Pages carry a title, Markdown
content and an ordered list of images; each page is drawn with one layout
template. 'templates' shows which layouts fit a page best, 'preview' renders
the whole book to static HTML.

Content structure for 'import':

  content/
  ├── 010-cover.md            # Page 1: '# Title', optional '## Subtitle', body
  ├── 020-florida.md          # Page 2
  ├── 020-florida/            # Images for page 2 (same stem as the page)
  │   ├── 001-beach.jpg
  │   └── 002-keys.jpg
  └── packing-list.md         # No number prefix: placed after numbered pages

Run 'ebook-designer gen-config' to generate a documented config.toml.")]
#[command(version)]
struct Cli {
    /// Book document file
    #[arg(long, default_value = "book.json", global = true)]
    book: PathBuf,

    /// Directory holding config.toml
    #[arg(long, default_value = ".", global = true)]
    config_dir: PathBuf,

    /// Output directory for the HTML preview
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    /// Log diagnostics to stderr (repeat for more detail)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Copy, ValueEnum)]
enum Direction {
    Up,
    Down,
}

impl From<Direction> for MoveDirection {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Up => MoveDirection::Up,
            Direction::Down => MoveDirection::Down,
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// Write a sample book document
    Init {
        /// Overwrite an existing document
        #[arg(long)]
        force: bool,
    },
    /// Build the book document from a content directory
    Import {
        /// Content directory
        content: PathBuf,
    },
    /// Validate the book and config without rendering
    Check,
    /// List templates: the catalog, or the ranked fit for one page
    Templates {
        /// Page id to rank templates for
        #[arg(long)]
        page: Option<u32>,
    },
    /// Append a blank page and select it
    AddPage,
    /// Edit a page's title, subtitle or content
    EditPage {
        id: u32,
        #[arg(long)]
        title: Option<String>,
        /// Subtitle; an empty string clears it
        #[arg(long)]
        subtitle: Option<String>,
        #[arg(long)]
        content: Option<String>,
    },
    /// Delete a page (the last page cannot be deleted)
    DeletePage { id: u32 },
    /// Copy a page and insert it after the original
    DuplicatePage { id: u32 },
    /// Move a page one position up or down
    MovePage { id: u32, direction: Direction },
    /// Mark a page as selected (highlighted in the preview)
    Select { id: u32 },
    /// Set a page's layout template by tag
    SetTemplate { id: u32, template: TemplateKind },
    /// Add an image to a page (template is re-picked by image count)
    AddImage { id: u32, src: String },
    /// Remove an image from a page (template is re-picked by image count)
    RemoveImage { id: u32, src: String },
    /// List theme presets
    Themes,
    /// Render the HTML preview and template galleries
    Preview,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Init { force } => {
            if cli.book.exists() && !force {
                return Err(format!(
                    "{} already exists (use --force to overwrite)",
                    cli.book.display()
                )
                .into());
            }
            let doc = Document::sample();
            doc.save(&cli.book)?;
            output::print_document(&doc);
            println!("==> Wrote {}", cli.book.display());
        }
        Command::Import { content } => {
            println!("==> Importing {}", content.display());
            let doc = import::scan(&content)?;
            doc.save(&cli.book)?;
            output::print_document(&doc);
            println!("==> Wrote {}", cli.book.display());
        }
        Command::Check => {
            println!("==> Checking {}", cli.book.display());
            let doc = Document::load(&cli.book)?;
            let config = config::load_config(&cli.config_dir)?;
            output::print_document(&doc);
            println!("==> Theme: {}", config.theme.name);
            println!("==> Book is valid");
        }
        Command::Templates { page } => match page {
            Some(id) => {
                let doc = Document::load(&cli.book)?;
                let page = doc
                    .page(id)
                    .ok_or(DocumentError::PageNotFound(id))?;
                output::print_templates(page);
            }
            None => output::print_catalog(),
        },
        Command::AddPage => edit(&cli.book, |doc| {
            let id = doc.add_page();
            Ok(format!("Added page {id}"))
        })?,
        Command::EditPage {
            id,
            title,
            subtitle,
            content,
        } => edit(&cli.book, |doc| {
            let update = PageUpdate {
                title,
                content,
                subtitle: subtitle.map(|s| Some(s).filter(|s| !s.is_empty())),
                ..PageUpdate::default()
            };
            doc.update_page(id, update)?;
            Ok(format!("Updated page {id}"))
        })?,
        Command::DeletePage { id } => edit(&cli.book, |doc| {
            let page = doc.delete_page(id)?;
            Ok(format!("Deleted page {id} ({})", page.title))
        })?,
        Command::DuplicatePage { id } => edit(&cli.book, |doc| {
            let copy = doc.duplicate_page(id)?;
            Ok(format!("Duplicated page {id} as page {copy}"))
        })?,
        Command::MovePage { id, direction } => edit(&cli.book, |doc| {
            let new_id = doc.move_page(id, direction.into())?;
            Ok(format!("Page {id} is now page {new_id}"))
        })?,
        Command::Select { id } => edit(&cli.book, |doc| {
            doc.select(id)?;
            Ok(format!("Selected page {id}"))
        })?,
        Command::SetTemplate { id, template } => edit(&cli.book, |doc| {
            doc.set_template(id, template)?;
            Ok(format!("Page {id} uses {}", template.label()))
        })?,
        Command::AddImage { id, src } => edit(&cli.book, |doc| {
            if doc.add_image(id, &src)? {
                Ok(template_change(doc, id))
            } else {
                Ok(format!("Page {id} already has {src}"))
            }
        })?,
        Command::RemoveImage { id, src } => edit(&cli.book, |doc| {
            doc.remove_image(id, &src)?;
            Ok(template_change(doc, id))
        })?,
        Command::Themes => {
            let config = config::load_config(&cli.config_dir)?;
            output::print_themes(&Theme::presets(), &config.theme.name);
        }
        Command::Preview => {
            let doc = Document::load(&cli.book)?;
            let config = config::load_config(&cli.config_dir)?;
            println!("==> Rendering preview → {}", cli.output.display());
            let summary = render::generate(&doc, &config, &cli.output)?;
            output::print_generate_output(&doc, &summary, &cli.output);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Load the book, apply one edit and save it back.
///
/// The document is only written when the edit succeeds, and the edit's
/// message is only printed once the write has succeeded.
fn edit<F>(book: &Path, f: F) -> Result<(), Box<dyn std::error::Error>>
where
    F: FnOnce(&mut Document) -> Result<String, Box<dyn std::error::Error>>,
{
    let message = apply_edit(book, f)?;
    println!("{message}");
    Ok(())
}

fn apply_edit<F>(book: &Path, f: F) -> Result<String, Box<dyn std::error::Error>>
where
    F: FnOnce(&mut Document) -> Result<String, Box<dyn std::error::Error>>,
{
    let mut doc = Document::load(book)?;
    let message = f(&mut doc)?;
    doc.save(book)?;
    Ok(message)
}

fn template_change(doc: &Document, id: u32) -> String {
    match doc.page(id) {
        Some(page) => format!(
            "Page {id}: {} images, template {}",
            page.images.len(),
            page.template.label()
        ),
        None => format!("Page {id} updated"),
    }
}

/// Route `tracing` events to stderr; silent unless `-v` is given.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => return,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_book(dir: &Path) -> PathBuf {
        let book = dir.join("book.json");
        Document::sample().save(&book).unwrap();
        book
    }

    #[test]
    fn apply_edit_saves_and_returns_message() {
        let tmp = TempDir::new().unwrap();
        let book = sample_book(tmp.path());

        let message = apply_edit(&book, |doc| {
            let id = doc.add_page();
            Ok(format!("Added page {id}"))
        })
        .unwrap();

        assert_eq!(message, "Added page 5");
        assert_eq!(Document::load(&book).unwrap().pages().len(), 5);
    }

    #[test]
    fn failed_edit_leaves_book_unchanged() {
        let tmp = TempDir::new().unwrap();
        let book = sample_book(tmp.path());
        let before = std::fs::read_to_string(&book).unwrap();

        let result = apply_edit(&book, |doc| {
            doc.delete_page(99)?;
            Ok("Deleted page 99".to_string())
        });

        assert!(result.is_err());
        assert_eq!(std::fs::read_to_string(&book).unwrap(), before);
    }

    #[test]
    fn failed_save_yields_no_message() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("book");
        std::fs::create_dir(&dir).unwrap();
        let book = sample_book(&dir);

        let result = apply_edit(&book, |doc| {
            let id = doc.add_page();
            // The book's directory disappears before the write
            std::fs::remove_dir_all(&dir)?;
            Ok(format!("Added page {id}"))
        });

        assert!(result.is_err());
    }
}
