//! Terminal menu for the resizer
//!
//! Input is read through the [`Prompt`] trait so the menu flow can be driven
//! by scripted answers in tests instead of a real terminal. Ctrl-C while a
//! prompt is waiting cancels the menu like end of input does; Ctrl-C at any
//! other point of an interactive session reports the cancellation and exits
//! with status 0.

use crate::batch::{find_images, resize_each, BatchSummary};
use crate::resize::try_resize_icon;
use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread;

/// Source of user answers
pub trait Prompt {
    /// Show `message` and read one line; `None` means input ended (EOF or interrupt)
    fn ask(&mut self, message: &str) -> io::Result<Option<String>>;
}

/// One piece of terminal input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptEvent {
    Line(String),
    /// Input stream ended
    Closed,
    /// Ctrl-C
    Interrupted,
}

/// Prompt fed from a channel of [`PromptEvent`]s
pub struct ChannelPrompt {
    events: Receiver<PromptEvent>,
}

impl ChannelPrompt {
    pub fn new(events: Receiver<PromptEvent>) -> Self {
        ChannelPrompt { events }
    }
}

impl Prompt for ChannelPrompt {
    fn ask(&mut self, message: &str) -> io::Result<Option<String>> {
        print!("{}", message);
        io::stdout().flush()?;

        match self.events.recv() {
            Ok(PromptEvent::Line(line)) => Ok(Some(line.trim().to_string())),
            Ok(PromptEvent::Interrupted) => {
                log::debug!("Interrupted while waiting for input");
                Ok(None)
            }
            // All senders gone means no more input can arrive
            Ok(PromptEvent::Closed) | Err(_) => Ok(None),
        }
    }
}

/// What a Ctrl-C should do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterruptAction {
    /// Hand it to the waiting prompt as [`PromptEvent::Interrupted`]
    Forward,
    /// Report the cancellation and exit
    Exit,
}

pub fn interrupt_action(waiting_for_input: bool) -> InterruptAction {
    if waiting_for_input {
        InterruptAction::Forward
    } else {
        InterruptAction::Exit
    }
}

/// Reads answers from standard input and turns Ctrl-C into a cancellation
///
/// Installs the process-wide Ctrl-C handler, so only one may be created.
pub struct StdinPrompt {
    inner: ChannelPrompt,
    waiting: Arc<AtomicBool>,
}

impl StdinPrompt {
    pub fn new() -> Result<Self> {
        let (tx, rx) = mpsc::channel();
        let waiting = Arc::new(AtomicBool::new(false));

        let interrupt_tx = tx.clone();
        let handler_waiting = Arc::clone(&waiting);
        ctrlc::set_handler(move || {
            let action = interrupt_action(handler_waiting.load(Ordering::SeqCst));
            if action == InterruptAction::Forward && interrupt_tx.send(PromptEvent::Interrupted).is_ok() {
                return;
            }
            println!();
            println!("❌ Operation cancelled");
            std::process::exit(0);
        })
        .context("Failed to install Ctrl-C handler")?;

        thread::spawn(move || read_stdin_lines(tx));

        Ok(StdinPrompt {
            inner: ChannelPrompt::new(rx),
            waiting,
        })
    }
}

impl Prompt for StdinPrompt {
    fn ask(&mut self, message: &str) -> io::Result<Option<String>> {
        self.waiting.store(true, Ordering::SeqCst);
        let answer = self.inner.ask(message);
        self.waiting.store(false, Ordering::SeqCst);
        answer
    }
}

/// Forward stdin lines until the stream ends or nobody is listening
fn read_stdin_lines(tx: Sender<PromptEvent>) {
    let stdin = io::stdin();
    loop {
        let mut line = String::new();
        let event = match stdin.lock().read_line(&mut line) {
            Ok(0) => PromptEvent::Closed,
            Ok(_) => PromptEvent::Line(line),
            Err(e) => {
                log::warn!("Reading stdin failed: {}", e);
                PromptEvent::Closed
            }
        };

        let closed = event == PromptEvent::Closed;
        if tx.send(event).is_err() || closed {
            break;
        }
    }
}

/// How an interactive session ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InteractiveOutcome {
    NoImages,
    Single { file: PathBuf, success: bool },
    Batch(BatchSummary),
    InvalidChoice,
    InvalidIndex,
    Cancelled,
}

/// What the user picked from the menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Single(usize),
    All,
    InvalidChoice,
    InvalidIndex,
    Cancelled,
}

/// Ask for single-file or batch mode, then for a 1-based file number in single mode
pub fn choose<P: Prompt>(file_count: usize, prompt: &mut P) -> io::Result<Selection> {
    println!();
    println!("Choose a mode:");
    println!("1. Process a single file");
    println!("2. Batch process all files");

    let choice = match prompt.ask("\nSelect (1/2): ")? {
        Some(choice) => choice,
        None => return Ok(Selection::Cancelled),
    };

    match choice.trim() {
        "1" => {
            let answer = match prompt.ask(&format!("Select file number (1-{}): ", file_count))? {
                Some(answer) => answer,
                None => return Ok(Selection::Cancelled),
            };
            match answer.trim().parse::<usize>() {
                Ok(n) if (1..=file_count).contains(&n) => Ok(Selection::Single(n - 1)),
                Ok(_) => Ok(Selection::InvalidIndex),
                Err(_) => Ok(Selection::Cancelled),
            }
        }
        "2" => Ok(Selection::All),
        _ => Ok(Selection::InvalidChoice),
    }
}

/// Run the menu over the images in `dir`
///
/// Single-file mode writes straight into `output_dir`; batch mode gives every
/// image its own `<stem>_icons` subdirectory.
pub fn run_interactive<P: Prompt>(
    dir: &Path,
    output_dir: &Path,
    extensions: &[String],
    prompt: &mut P,
) -> Result<InteractiveOutcome> {
    println!("🎨 iOS icon resizer");
    println!("{}", "=".repeat(40));

    let images = find_images(dir, extensions)?;
    if images.is_empty() {
        println!("❌ No image files found in the current directory");
        println!("Put the icon you want to resize in this directory and run again");
        return Ok(InteractiveOutcome::NoImages);
    }

    println!("Found these image files:");
    for (i, image) in images.iter().enumerate() {
        let name = image.file_name().map(|n| n.to_string_lossy()).unwrap_or_default();
        println!("{}. {}", i + 1, name);
    }

    let selection = match choose(images.len(), prompt) {
        Ok(selection) => selection,
        Err(e) => {
            log::warn!("Reading selection failed: {}", e);
            Selection::Cancelled
        }
    };

    let outcome = match selection {
        Selection::Single(index) => {
            let file = images[index].clone();
            println!();
            println!("Processing file: {}", file.display());
            let success = try_resize_icon(&file, output_dir);
            InteractiveOutcome::Single { file, success }
        }
        Selection::All => {
            println!();
            println!("Batch processing all files...");
            InteractiveOutcome::Batch(resize_each(&images, output_dir)?)
        }
        Selection::InvalidChoice => {
            println!("❌ Invalid choice");
            InteractiveOutcome::InvalidChoice
        }
        Selection::InvalidIndex => {
            println!("❌ Invalid file number");
            InteractiveOutcome::InvalidIndex
        }
        Selection::Cancelled => {
            println!();
            println!("❌ Operation cancelled");
            InteractiveOutcome::Cancelled
        }
    };

    Ok(outcome)
}
