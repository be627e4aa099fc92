// UI layer: the numbered menu loop. Input comes through a `Prompter` so the
// loop can be driven by `dialoguer` in a terminal or by a script in tests;
// output goes to any `Write`.

use crate::api::{ApiClient, Post};
use crate::error::Error;
use crate::posts::{search_posts, select_post};
use anyhow::{Context, Result};
use crossterm::style::Stylize;
use crossterm::tty::IsTty;
use dialoguer::Input;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::Write;
use std::time::Duration;
use tracing::{debug, info};

const MENU: &[&str] = &[
    "1: List 10 random posts.",
    "2: View a post (you can choose which post by ID).",
    "3: Search posts by keyword.",
    "4: View comments for a post.",
    "5: Add a comment to a post.",
    "6: Fetch posts by a specific user.",
    "7: Exit.",
];

/// Source of the text the menu asks for.
pub trait Prompter {
    /// Show `label` and return the line the user typed.
    fn prompt(&mut self, label: &str) -> Result<String>;
}

impl<P: Prompter + ?Sized> Prompter for &mut P {
    fn prompt(&mut self, label: &str) -> Result<String> {
        (**self).prompt(label)
    }
}

/// Reads answers from the terminal with `dialoguer`.
pub struct Terminal;

impl Prompter for Terminal {
    fn prompt(&mut self, label: &str) -> Result<String> {
        // Empty answers are allowed: an empty keyword is a valid search.
        let text: String = Input::new()
            .with_prompt(label)
            .allow_empty(true)
            .interact_text()?;
        Ok(text)
    }
}

/// Run the interactive menu on the terminal until the user chooses "Exit".
pub fn main_menu(api: &ApiClient) -> Result<()> {
    let stdout = std::io::stdout();
    let colored = stdout.is_tty();
    Menu::new(api, Terminal, stdout).with_colors(colored).run()
}

pub struct Menu<'a, P, W> {
    api: &'a ApiClient,
    prompter: P,
    out: W,
    colored: bool,
}

impl<'a, P: Prompter, W: Write> Menu<'a, P, W> {
    /// Output is plain text unless colours are turned on with
    /// [`Menu::with_colors`].
    pub fn new(api: &'a ApiClient, prompter: P, out: W) -> Self {
        Menu {
            api,
            prompter,
            out,
            colored: false,
        }
    }

    pub fn with_colors(mut self, colored: bool) -> Self {
        self.colored = colored;
        self
    }

    /// Loop until choice `7`. Errors that an action does not handle itself
    /// end the loop and are returned to the caller.
    pub fn run(&mut self) -> Result<()> {
        info!(base_url = self.api.base_url(), "menu started");
        loop {
            self.print_menu()?;
            let choice = self.prompter.prompt("Enter your choice")?;
            debug!(choice = choice.as_str(), "menu choice");
            match choice.as_str() {
                "1" => self.list_random()?,
                "2" => self.view_post()?,
                "3" => self.search()?,
                "4" => self.view_comments()?,
                "5" => self.add_comment()?,
                "6" => self.user_posts()?,
                "7" => {
                    writeln!(self.out, "Goodbye!")?;
                    break;
                }
                _ => self.error_line("Invalid choice. Please try again.")?,
            }
        }
        info!("menu exited");
        Ok(())
    }

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.out)?;
        self.header("Menu:")?;
        for line in MENU {
            writeln!(self.out, "{}", line)?;
        }
        Ok(())
    }

    fn list_random(&mut self) -> Result<()> {
        let posts = with_spinner("Fetching posts...", || self.api.random_posts())?;
        self.print_posts(posts.iter())
    }

    fn view_post(&mut self) -> Result<()> {
        let posts = with_spinner("Fetching posts...", || self.api.fetch_posts())?;
        let id = self.read_id("Enter the post ID")?;
        match select_post(id, &posts) {
            Ok(post) => writeln!(self.out, "Title: {}\nBody: {}", post.title, post.body)?,
            Err(e) => self.error_line(&e.to_string())?,
        }
        Ok(())
    }

    fn search(&mut self) -> Result<()> {
        let posts = with_spinner("Fetching posts...", || self.api.fetch_posts())?;
        let keyword = self.prompter.prompt("Enter a keyword to search posts")?;
        let found = search_posts(&posts, &keyword);
        self.header("Search Results:")?;
        if found.is_empty() {
            writeln!(self.out, "No posts found matching that keyword.")?;
            return Ok(());
        }
        self.print_posts(found.into_iter())
    }

    fn view_comments(&mut self) -> Result<()> {
        let id = self.read_id("Enter the post ID to view comments")?;
        let comments = with_spinner("Fetching comments...", || self.api.fetch_comments(id));
        if let Some(comments) = self.report_http(comments)? {
            for comment in &comments {
                writeln!(self.out, "- {} (Comment ID: {})", comment.body, comment.id)?;
            }
        }
        Ok(())
    }

    fn add_comment(&mut self) -> Result<()> {
        let post_id = self.read_id("Enter the post ID to add a comment")?;
        let name = self.prompter.prompt("Enter your name")?;
        let email = self.prompter.prompt("Enter your email")?;
        let body = self.prompter.prompt("Enter your comment")?;
        let created = with_spinner("Posting comment...", || {
            self.api.create_comment(post_id, &name, &email, &body)
        });
        if let Some(comment) = self.report_http(created)? {
            writeln!(self.out, "Comment added with ID: {}", comment.id)?;
        }
        Ok(())
    }

    fn user_posts(&mut self) -> Result<()> {
        let id = self.read_id("Enter the user ID to fetch posts")?;
        let posts = with_spinner("Fetching posts...", || self.api.fetch_user_posts(id));
        if let Some(posts) = self.report_http(posts)? {
            self.print_posts(posts.iter())?;
        }
        Ok(())
    }

    fn header(&mut self, text: &str) -> Result<()> {
        if self.colored {
            writeln!(self.out, "{}", text.bold())?;
        } else {
            writeln!(self.out, "{}", text)?;
        }
        Ok(())
    }

    fn error_line(&mut self, text: &str) -> Result<()> {
        if self.colored {
            writeln!(self.out, "{}", text.red())?;
        } else {
            writeln!(self.out, "{}", text)?;
        }
        Ok(())
    }

    fn print_posts<'p>(&mut self, posts: impl Iterator<Item = &'p Post>) -> Result<()> {
        for post in posts {
            writeln!(self.out, "- {} (Post ID: {})", post.title, post.id)?;
        }
        Ok(())
    }

    /// Non-numeric ids are not recovered from; the error ends the loop.
    fn read_id(&mut self, label: &str) -> Result<i64> {
        let raw = self.prompter.prompt(label)?;
        raw.trim()
            .parse()
            .with_context(|| format!("invalid id: {:?}", raw))
    }

    /// Print HTTP status failures and carry on; anything else propagates.
    fn report_http<T>(&mut self, result: crate::Result<T>) -> Result<Option<T>> {
        match result {
            Ok(value) => Ok(Some(value)),
            Err(e @ Error::Http { .. }) => {
                self.error_line(&e.to_string())?;
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }
}

/// Show a spinner on stderr while `call` blocks on the network.
fn with_spinner<T>(message: &'static str, call: impl FnOnce() -> T) -> T {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}").unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(100));
    let result = call();
    spinner.finish_and_clear();
    result
}
