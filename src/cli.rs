use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "safari-blog")]
#[command(author, version)]
#[command(about = "Render, check and manage safari blog posts")]
#[command(
    long_about = "safari-blog renders blog content with [IMAGE:name] placeholders to HTML, \
    checks posts for missing or malformed placeholders, offers the editor's text insertion \
    helpers, and manages posts and testimonials on the blog backend."
)]
#[command(after_help = "\
EXAMPLES:

    # Render content to HTML
    safari-blog render post.txt

    # Render from stdin, only allowing uploaded images
    cat post.txt | safari-blog render --image lion.webp --image tent.webp

    # Render a post fetched from the backend
    safari-blog blogs show 7 --json | safari-blog render --post

    # Check content for placeholder problems
    safari-blog lint --check post.txt

    # Insert an image placeholder at byte 120
    safari-blog insert image lion.webp post.txt --at 120 --write

CONFIGURATION:

safari-blog looks for configuration files in this order:
  1. Explicit --config path
  2. safari-blog.toml or .safari-blog.toml in current/parent directories
  3. ~/.config/safari-blog/config.toml (XDG)
  4. Built-in defaults

Example .safari-blog.toml:

    api_base = \"https://api.example.com\"
    group_threshold = 50
    grid_columns = 2
    missing_images = \"placeholder\"
    style = \"detail\"")]
#[command(arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file
    #[arg(long, global = true)]
    #[arg(help = "Path to configuration file")]
    #[arg(
        long_help = "Path to a custom configuration file. If not specified, safari-blog will \
        search for .safari-blog.toml or safari-blog.toml in the current directory and its \
        parents, then fall back to ~/.config/safari-blog/config.toml."
    )]
    pub config: Option<PathBuf>,

    /// Backend base URL
    #[arg(long, global = true, env = "SAFARI_BLOG_API")]
    #[arg(help = "Backend base URL (overrides api_base from the config)")]
    pub api: Option<String>,

    /// Session file
    #[arg(long, global = true)]
    #[arg(help = "Path to the session file holding the login token")]
    pub session: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum StyleArg {
    /// Public blog detail page
    Detail,
    /// Admin editor preview
    Preview,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render blog content to HTML
    #[command(
        long_about = "Render blog content to HTML. Each line becomes a paragraph, an image block \
        or a line break. Image placeholders close together in the source are combined into one \
        grid. Output goes to stdout."
    )]
    #[command(after_help = "\
EXAMPLES:

    # Render a file
    safari-blog render post.txt

    # Render the editor preview style
    safari-blog render --style preview post.txt

    # Render a full article from a post JSON document
    safari-blog render --post post.json")]
    Render {
        /// Input file (stdin if not provided)
        #[arg(help = "Input file path")]
        file: Option<PathBuf>,

        /// Uploaded image names that may resolve
        #[arg(long = "image", value_name = "NAME")]
        #[arg(
            long_help = "Name of an uploaded image that placeholders may refer to. Repeat for \
            several images. Without any, every name resolves. Ignored with --post, which uses \
            the post's own content images."
        )]
        images: Vec<String>,

        /// Treat the input as a post JSON document and render the whole article
        #[arg(long)]
        post: bool,

        /// Class set to render with
        #[arg(long, value_enum)]
        style: Option<StyleArg>,
    },
    /// Check content for placeholder problems
    #[command(
        long_about = "Check blog content for image placeholders that are unterminated, empty, or \
        name images that were never uploaded, and for uploaded images never placed."
    )]
    #[command(after_help = "\
RULES:

  missing-image             placeholder names an image not given with --image
  unused-image              an image given with --image is never placed
  unterminated-placeholder  [IMAGE: with no closing ] on the same line
  empty-placeholder         [IMAGE:] with no name

The image rules only run when at least one --image is given.")]
    Lint {
        /// Input file (stdin if not provided)
        #[arg(help = "Input file path")]
        file: Option<PathBuf>,

        /// Uploaded image names of the post
        #[arg(long = "image", value_name = "NAME")]
        images: Vec<String>,

        /// Exit with code 1 if any issue is found
        #[arg(long)]
        check: bool,

        /// Print the content with all suggested fixes applied
        #[arg(long)]
        fix: bool,
    },
    /// Editing helpers that work at a cursor or selection
    #[command(subcommand)]
    Insert(InsertCommand),
    /// Sign in and store the session token
    Login {
        #[arg(long, short)]
        username: String,

        #[arg(long, short, env = "SAFARI_BLOG_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Forget the stored session token
    Logout,
    /// Change the admin password
    ChangePassword {
        #[arg(long = "old", env = "SAFARI_BLOG_OLD_PASSWORD", hide_env_values = true)]
        old_password: String,

        #[arg(long = "new", env = "SAFARI_BLOG_NEW_PASSWORD", hide_env_values = true)]
        new_password: String,
    },
    /// Manage blog posts
    #[command(subcommand)]
    Blogs(BlogsCommand),
    /// Manage testimonials
    #[command(subcommand)]
    Testimonials(TestimonialsCommand),
    /// Upload a content image and print its stored name
    Upload {
        #[arg(help = "Image file to upload")]
        file: PathBuf,
    },
}

/// Where an edit applies.
#[derive(Args)]
pub struct EditTarget {
    /// File to edit
    pub file: PathBuf,

    /// Cursor or selection as byte offsets
    #[arg(long, value_name = "START[:END]")]
    pub at: String,

    /// Write the result back to the file instead of printing it
    #[arg(long)]
    pub write: bool,
}

#[derive(Subcommand)]
pub enum InsertCommand {
    /// Put an image placeholder on its own paragraph
    Image {
        /// Image name
        name: String,
        #[command(flatten)]
        target: EditTarget,
    },
    /// Start a new paragraph
    Paragraph {
        #[command(flatten)]
        target: EditTarget,
    },
    /// Wrap the selection in **bold** markers
    Bold {
        #[command(flatten)]
        target: EditTarget,
    },
    /// Wrap the selection in *italic* markers
    Italic {
        #[command(flatten)]
        target: EditTarget,
    },
    /// Wrap the selection in __underline__ markers
    Underline {
        #[command(flatten)]
        target: EditTarget,
    },
}

#[derive(Subcommand)]
pub enum BlogsCommand {
    /// List posts, newest first
    List,
    /// Show one post
    Show {
        id: i64,

        /// Print the post as JSON
        #[arg(long, conflicts_with = "html")]
        json: bool,

        /// Print the rendered article
        #[arg(long)]
        html: bool,
    },
    /// Create a post
    Create {
        #[arg(long)]
        title: String,

        /// File holding the post content
        #[arg(long, value_name = "FILE")]
        content: PathBuf,

        /// Cover image to upload
        #[arg(long, value_name = "FILE")]
        cover: Option<PathBuf>,

        /// Already uploaded content image
        #[arg(long = "image", value_name = "NAME")]
        images: Vec<String>,
    },
    /// Update a post; unspecified fields keep their current value
    Update {
        id: i64,

        #[arg(long)]
        title: Option<String>,

        #[arg(long, value_name = "FILE")]
        content: Option<PathBuf>,

        #[arg(long, value_name = "FILE")]
        cover: Option<PathBuf>,

        /// Add an already uploaded content image
        #[arg(long = "image", value_name = "NAME")]
        images: Vec<String>,
    },
    /// Delete a post
    Delete { id: i64 },
}

#[derive(Subcommand)]
pub enum TestimonialsCommand {
    /// List testimonials, newest first
    List,
    /// Add a testimonial
    Add {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        content: String,
    },
    /// Delete a testimonial
    Delete { id: i64 },
}
