use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::Parser;
use similar::{ChangeTag, TextDiff};

use safari_blog::config::{Config, Style};
use safari_blog::editor::{self, EditError, Edited, Selection};
use safari_blog::inline::Emphasis;
use safari_blog::linter::{self, Diagnostic};
use safari_blog::models::BlogPost;
use safari_blog::{UploadsResolver, render_html, render_post};

mod cli;
use cli::{Cli, Commands, EditTarget, InsertCommand, StyleArg};

/// Parse a cursor like "12" or a selection like "5:10" (byte offsets)
fn parse_at(at: &str) -> Result<Selection, String> {
    let parse = |s: &str| {
        s.trim()
            .parse::<usize>()
            .map_err(|_| format!("Invalid offset '{}'", s))
    };

    match at.split_once(':') {
        Some((start, end)) => Ok(Selection::new(parse(start)?, parse(end)?)),
        None => Ok(Selection::caret(parse(at)?)),
    }
}

fn read_all(path: Option<&PathBuf>) -> io::Result<String> {
    match path {
        Some(p) => fs::read_to_string(p),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn start_dir_for(input_path: &Option<PathBuf>) -> io::Result<PathBuf> {
    if let Some(p) = input_path {
        Ok(p.parent().unwrap_or(Path::new(".")).to_path_buf())
    } else {
        std::env::current_dir()
    }
}

fn load_config(cli: &Cli, file: &Option<PathBuf>) -> io::Result<Config> {
    let start_dir = start_dir_for(file)?;
    let (mut cfg, cfg_path) = safari_blog::config::load(cli.config.as_deref(), &start_dir)?;

    if let Some(path) = &cfg_path {
        log::debug!("Using config from: {}", path.display());
    } else {
        log::debug!("Using default config");
    }

    if let Some(api) = &cli.api {
        cfg.api_base = api.clone();
    }
    Ok(cfg)
}

fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("Error: {}", message);
    std::process::exit(1);
}

fn print_diff(file_path: &str, original: &str, fixed: &str) {
    let diff = TextDiff::from_lines(original, fixed);

    for (idx, group) in diff.grouped_ops(3).iter().enumerate() {
        if idx > 0 {
            println!("---");
        }

        println!("Diff in {}:{}:", file_path, group[0].old_range().start + 1);

        for op in group {
            for change in diff.iter_changes(op) {
                let (sign, style) = match change.tag() {
                    ChangeTag::Delete => ("-", "\x1b[31m"), // red
                    ChangeTag::Insert => ("+", "\x1b[32m"), // green
                    ChangeTag::Equal => (" ", "\x1b[0m"),
                };

                print!("{}{}{}", style, sign, change.value());

                if change.tag() != ChangeTag::Equal {
                    print!("\x1b[0m");
                }
            }
        }
    }
}

fn print_diagnostics(diagnostics: &[Diagnostic], file: Option<&PathBuf>) {
    use safari_blog::linter::Severity;

    let file_name = file.and_then(|p| p.to_str()).unwrap_or("<stdin>");

    for diag in diagnostics {
        let severity_str = match diag.severity {
            Severity::Error => "\x1b[31merror\x1b[0m",     // red
            Severity::Warning => "\x1b[33mwarning\x1b[0m", // yellow
            Severity::Info => "\x1b[34minfo\x1b[0m",       // blue
        };

        println!(
            "{severity_str}[{}]: {} at {}:{}:{}",
            diag.code, diag.message, file_name, diag.location.line, diag.location.column
        );

        if let Some(fix) = &diag.fix {
            println!("  \x1b[36mhelp\x1b[0m: {}", fix.message); // cyan
        }
    }

    println!("\nFound {} issue(s)", diagnostics.len());
}

fn edit_target(command: &InsertCommand) -> &EditTarget {
    match command {
        InsertCommand::Image { target, .. }
        | InsertCommand::Paragraph { target }
        | InsertCommand::Bold { target }
        | InsertCommand::Italic { target }
        | InsertCommand::Underline { target } => target,
    }
}

fn apply_insert(
    command: &InsertCommand,
    text: &str,
    selection: Selection,
) -> Result<Edited, EditError> {
    match command {
        InsertCommand::Image { name, .. } => {
            editor::insert_image_placeholder(text, selection, name)
        }
        InsertCommand::Paragraph { .. } => editor::insert_paragraph_break(text, selection),
        InsertCommand::Bold { .. } => editor::wrap_selection(text, selection, Emphasis::Bold),
        InsertCommand::Italic { .. } => editor::wrap_selection(text, selection, Emphasis::Italic),
        InsertCommand::Underline { .. } => {
            editor::wrap_selection(text, selection, Emphasis::Underline)
        }
    }
}

fn run_insert(command: &InsertCommand) -> io::Result<()> {
    let target = edit_target(command);
    let selection = parse_at(&target.at).unwrap_or_else(|e| fail(e));
    let input = fs::read_to_string(&target.file)?;
    let edited = apply_insert(command, &input, selection).unwrap_or_else(|e| fail(e));

    if target.write {
        fs::write(&target.file, &edited.text)?;
        println!("Updated {}", target.file.display());
    } else {
        print!("{}", edited.text);
    }
    eprintln!("cursor: {}", edited.cursor);
    Ok(())
}

fn main() -> io::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            ref file,
            ref images,
            post,
            style,
        } => {
            let mut cfg = load_config(&cli, file)?;
            if let Some(style) = style {
                cfg.style = match style {
                    StyleArg::Detail => Style::Detail,
                    StyleArg::Preview => Style::Preview,
                };
            }

            let input = read_all(file.as_ref())?;
            let output = if post {
                let post: BlogPost = serde_json::from_str(&input).map_err(|e| {
                    io::Error::new(io::ErrorKind::InvalidData, format!("invalid post JSON: {e}"))
                })?;
                render_post(&post, &cfg)
            } else {
                let resolver = if images.is_empty() {
                    UploadsResolver::new(&cfg)
                } else {
                    UploadsResolver::with_known(&cfg, images.iter())
                };
                render_html(&input, &resolver, &cfg)
            };

            if output.ends_with('\n') || output.is_empty() {
                print!("{output}");
            } else {
                println!("{output}");
            }
            Ok(())
        }
        Commands::Lint {
            ref file,
            ref images,
            check,
            fix,
        } => {
            let cfg = load_config(&cli, file)?;

            let input = read_all(file.as_ref())?;
            // Normalize line endings so offsets match what the renderer sees
            let normalized_input = input.replace("\r\n", "\n");
            let known = (!images.is_empty()).then_some(images.as_slice());
            let diagnostics = linter::lint(&normalized_input, known, &cfg);

            if diagnostics.is_empty() {
                if !check {
                    println!("No issues found");
                }
                return Ok(());
            }

            if fix {
                let fixed_output = linter::apply_fixes(&normalized_input, &diagnostics);
                if check {
                    let file_name = file.as_ref().and_then(|p| p.to_str()).unwrap_or("<stdin>");
                    print_diff(file_name, &normalized_input, &fixed_output);
                } else {
                    print!("{}", fixed_output);
                }
            } else {
                print_diagnostics(&diagnostics, file.as_ref());
            }

            if check {
                std::process::exit(1);
            }

            Ok(())
        }
        Commands::Insert(ref command) => run_insert(command),
        #[cfg(feature = "admin")]
        _ => {
            let cfg = load_config(&cli, &None)?;
            if let Err(e) = admin::run(&cli, &cfg) {
                fail(e);
            }
            Ok(())
        }
        #[cfg(not(feature = "admin"))]
        _ => fail("this build of safari-blog has no admin support"),
    }
}

#[cfg(feature = "admin")]
mod admin {
    use std::fs;

    use safari_blog::admin::{AdminClient, AdminError, Result, Session};
    use safari_blog::config::Config;
    use safari_blog::models::{BlogDraft, NewTestimonial};
    use safari_blog::render_post;

    use crate::cli::{BlogsCommand, Cli, Commands, TestimonialsCommand};

    fn open_session(cli: &Cli) -> Result<Session> {
        let path = match &cli.session {
            Some(path) => path.clone(),
            None => Session::default_path().ok_or_else(|| {
                AdminError::Invalid("No data directory found; pass --session".to_string())
            })?,
        };
        Session::load(path)
    }

    fn read_file(path: &std::path::Path) -> Result<String> {
        fs::read_to_string(path).map_err(|source| AdminError::ReadFile {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn run(cli: &Cli, cfg: &Config) -> Result<()> {
        let mut session = open_session(cli)?;
        let client = AdminClient::new(cfg.api_base.as_str())?.with_token(session.token());

        match &cli.command {
            Commands::Login { username, password } => {
                let token = client.login(username, password)?;
                session.save(token)?;
                println!("Signed in as {username}");
            }
            Commands::Logout => {
                session.clear()?;
                println!("Signed out");
            }
            Commands::ChangePassword {
                old_password,
                new_password,
            } => {
                println!("{}", client.change_password(old_password, new_password)?);
            }
            Commands::Blogs(command) => run_blogs(&client, command, cfg)?,
            Commands::Testimonials(command) => run_testimonials(&client, command)?,
            Commands::Upload { file } => {
                println!("{}", client.upload_image(file)?);
            }
            Commands::Render { .. } | Commands::Lint { .. } | Commands::Insert(_) => {}
        }
        Ok(())
    }

    fn run_blogs(client: &AdminClient, command: &BlogsCommand, cfg: &Config) -> Result<()> {
        match command {
            BlogsCommand::List => {
                let posts = client.list_blogs()?;
                if posts.is_empty() {
                    println!("No blogs yet");
                }
                for post in posts {
                    println!("{:>5}  {:<18}  {}", post.id, post.display_date(), post.title);
                }
            }
            BlogsCommand::Show { id, json, html } => {
                let post = client.get_blog(*id)?;
                if *json {
                    println!("{}", serde_json::to_string_pretty(&post)?);
                } else if *html {
                    print!("{}", render_post(&post, cfg));
                } else {
                    println!("{} ({})", post.title, post.display_date());
                    if let Some(cover) = &post.cover_image {
                        println!("cover: {cover}");
                    }
                    if !post.content_images.is_empty() {
                        let names: Vec<&str> =
                            post.content_images.iter().map(String::as_str).collect();
                        println!("images: {}", names.join(", "));
                    }
                    let unplaced = post.unplaced_images();
                    if !unplaced.is_empty() {
                        println!("not placed: {}", unplaced.join(", "));
                    }
                    println!("\n{}", post.content);
                }
            }
            BlogsCommand::Create {
                title,
                content,
                cover,
                images,
            } => {
                let draft = BlogDraft {
                    title: title.clone(),
                    content: read_file(content)?,
                    cover_image: cover.clone(),
                    content_images: images.iter().cloned().collect(),
                };
                client.create_blog(&draft)?;
                println!("Created blog '{}'", draft.title);
            }
            BlogsCommand::Update {
                id,
                title,
                content,
                cover,
                images,
            } => {
                let current = client.get_blog(*id)?;
                let mut draft = BlogDraft::from_post(&current);
                if let Some(title) = title {
                    draft.title = title.clone();
                }
                if let Some(content) = content {
                    draft.content = read_file(content)?;
                }
                draft.cover_image = cover.clone();
                for name in images {
                    draft.content_images.push(name.clone());
                }
                client.update_blog(*id, &draft)?;
                println!("Updated blog {id}");
            }
            BlogsCommand::Delete { id } => {
                client.delete_blog(*id)?;
                println!("Deleted blog {id}");
            }
        }
        Ok(())
    }

    fn run_testimonials(client: &AdminClient, command: &TestimonialsCommand) -> Result<()> {
        match command {
            TestimonialsCommand::List => {
                let testimonials = client.list_testimonials()?;
                if testimonials.is_empty() {
                    println!("No testimonials yet");
                }
                for t in testimonials {
                    let email = t.email.as_deref().unwrap_or("-");
                    println!("{:>5}  {}  <{}>  {}", t.id, t.name, email, t.content);
                }
            }
            TestimonialsCommand::Add {
                name,
                email,
                content,
            } => {
                let testimonial = NewTestimonial {
                    name: name.clone(),
                    email: email.clone(),
                    content: content.clone(),
                };
                client.add_testimonial(&testimonial)?;
                println!("Added testimonial from {name}");
            }
            TestimonialsCommand::Delete { id } => {
                client.delete_testimonial(*id)?;
                println!("Deleted testimonial {id}");
            }
        }
        Ok(())
    }
}
