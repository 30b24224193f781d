//! Rendering commands: app, list, greet, form

use anyhow::Result;
use clap::Parser;
use listkit_core::{render_list, span, AppShell, Component, InputForm, ListkitConfig};
use tracing::info;

use super::{print_node, OutputFormat};

#[derive(Parser, Debug)]
pub struct AppArgs {
    /// Numbers list (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub numbers: Option<Vec<i64>>,

    /// Fruits list (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub fruits: Option<Vec<String>>,

    /// Output format
    #[arg(long, short = 'f', value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Items to render, in order
    #[arg(value_name = "ITEM")]
    pub items: Vec<String>,

    /// Output format
    #[arg(long, short = 'f', value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Parser, Debug)]
pub struct GreetArgs {
    /// Name to greet (default: greeting.name from config)
    #[arg(long)]
    pub name: Option<String>,

    /// Age line (default: greeting.age from config)
    #[arg(long)]
    pub age: Option<u32>,

    /// Output format
    #[arg(long, short = 'f', value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Parser, Debug)]
pub struct FormArgs {
    /// Value typed into the input
    #[arg(long, default_value = "")]
    pub value: String,

    /// Submit the form and print the notification
    #[arg(long)]
    pub submit: bool,

    /// Output format
    #[arg(long, short = 'f', value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

pub fn run_app(args: AppArgs) -> Result<()> {
    let defaults = AppShell::default();
    let shell = AppShell::new(
        args.numbers.unwrap_or(defaults.numbers),
        args.fruits.unwrap_or(defaults.fruits),
    );
    print_node(&shell.render(), args.format)
}

pub fn run_list(args: ListArgs) -> Result<()> {
    info!(count = args.items.len(), "rendering list");
    print_node(&render_list(&args.items, span), args.format)
}

pub fn run_greet(args: GreetArgs, config: &ListkitConfig) -> Result<()> {
    let mut greeting = config.greeting();
    if let Some(name) = args.name {
        greeting.name = name;
    }
    if let Some(age) = args.age {
        greeting.age = Some(age);
    }
    print_node(&greeting.render(), args.format)
}

pub fn run_form(args: FormArgs) -> Result<()> {
    let mut form = InputForm::new();
    form.on_change(args.value);
    print_node(&form.render(), args.format)?;

    if args.submit {
        println!("{}", form.on_submit());
    }
    Ok(())
}
