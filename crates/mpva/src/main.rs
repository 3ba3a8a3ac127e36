//! mpva CLI - scaffold a Multi Page Vite App project

use anyhow::Result;
use clap::{Parser, ValueEnum};
use mpva_core::{pipeline, AssetLayout, ScaffoldError};

#[derive(Parser, Debug)]
#[command(name = "mpva")]
#[command(about = "Scaffold a Multi Page Vite App project")]
#[command(version)]
struct Args {
    /// Name of the project directory to create
    name: Option<String>,

    /// Where the stylesheet and entry script live
    #[arg(long, value_enum, default_value_t = LayoutArg::Flat)]
    layout: LayoutArg,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum LayoutArg {
    /// style.css and main.js directly under src/
    Flat,
    /// style.css and main.js under src/assets/, with a fonts/ directory
    NestedFonts,
}

impl From<LayoutArg> for AssetLayout {
    fn from(arg: LayoutArg) -> Self {
        match arg {
            LayoutArg::Flat => AssetLayout::Flat,
            LayoutArg::NestedFonts => AssetLayout::NestedFonts,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();

    let Some(name) = args.name else {
        println!("Please provide a name for your project.");
        println!("Example:");
        println!("  mpva my-project");
        std::process::exit(1);
    };

    let cwd = std::env::current_dir()?;
    let options = pipeline::ScaffoldOptions::new(&name, cwd).with_layout(args.layout.into());

    println!("Configuring your project, please wait...");

    match pipeline::run(&options).await {
        Ok(()) => {
            println!("Done. Now run:");
            println!("  cd {}", name);
            println!("  npm install");
            println!("  npm run dev");
            Ok(())
        }
        Err(ScaffoldError::Conflict { name }) => {
            println!("The '{}' project already exists in the current directory.", name);
            println!("Please give it another name.");
            std::process::exit(1);
        }
        Err(ScaffoldError::Usage(reason)) => {
            println!("{}", reason);
            std::process::exit(1);
        }
        Err(err) => {
            let _ = cliclack::log::error(format!("{}", err));
            std::process::exit(1);
        }
    }
}
