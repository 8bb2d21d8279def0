use clap::{Command, CommandFactory};
use clap_complete::{Shell, generate_to};
use clap_mangen::Man;
use std::env;
use std::fs;
use std::io::Result;
use std::path::{Path, PathBuf};

#[path = "src/cli.rs"]
#[allow(dead_code)]
mod cli;

use cli::Cli;

const BIN: &str = "safari-blog";

fn generate_completions(outdir: &std::ffi::OsString) -> Result<()> {
    let mut cmd = Cli::command();

    for shell in [
        Shell::Bash,
        Shell::Fish,
        Shell::Zsh,
        Shell::PowerShell,
        Shell::Elvish,
    ] {
        generate_to(shell, &mut cmd, BIN, outdir)?;
    }

    Ok(())
}

fn render_page(cmd: &Command, title: &str) -> Result<String> {
    let mut buffer = Vec::new();
    Man::new(cmd.clone()).title(title).render(&mut buffer)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// One page per command, named like git's: `safari-blog-blogs-list.1`.
fn write_pages(cmd: &Command, path: &[&str], out_dir: &Path) -> Result<()> {
    for sub in cmd.get_subcommands() {
        let name = sub.get_name();
        if name == "help" {
            continue;
        }

        let mut sub_path = path.to_vec();
        sub_path.push(name);
        let page_name = sub_path.join("-");
        let invocation = sub_path.join(" ");

        // Man titles a subcommand page by its bare name; use the full invocation
        let content = render_page(sub, &page_name)?
            .replace(&format!("{name} \\-"), &format!("{page_name} \\-"))
            .replace(
                &format!("\\fB{name}\\fR"),
                &format!("\\fB{invocation}\\fR"),
            );
        fs::write(out_dir.join(format!("{page_name}.1")), content)?;

        write_pages(sub, &sub_path, out_dir)?;
    }
    Ok(())
}

fn generate_man_pages() -> Result<()> {
    let out_dir = PathBuf::from("target/man");
    fs::create_dir_all(&out_dir)?;

    let cmd = Cli::command();
    fs::write(out_dir.join(format!("{BIN}.1")), render_page(&cmd, BIN)?)?;
    write_pages(&cmd, &[BIN], &out_dir)
}

fn main() -> Result<()> {
    if let Some(outdir) = env::var_os("OUT_DIR") {
        generate_completions(&outdir)?;
    }

    generate_man_pages()?;

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=build.rs");

    Ok(())
}
