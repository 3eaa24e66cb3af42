use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "rolodex")]
#[command(version)]
#[command(about = "An ordered, in-memory phone directory", long_about = None)]
pub struct Cli {
    /// Print the command menu once at startup instead of before every prompt
    #[arg(short, long)]
    pub quiet: bool,
}
